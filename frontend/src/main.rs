use gloo_file::File as GlooFile;
use gloo_file::callbacks::FileReader;
use shared::{AnalysisHandoff, EyeSide, PatientInfo};
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

mod api;
mod components;
mod config;
mod provider;

use components::{detection, handlers, navigation, pages, results_page, utils};
use config::AppConfig;
use provider::ResultProvider;

/// The views the top navigation and the analysis flow can land on. There
/// is no router; the root component owns the current view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Detection,
    Results,
    AboutDiabetes,
    CausesEffects,
    DiabetesTypes,
}

/// Resolves a navigation request against the handoff slot. Entering the
/// results view without a bundle always lands back on the intake view,
/// whatever the navigation history was.
pub fn resolve_view(requested: View, handoff: Option<&AnalysisHandoff>) -> View {
    match requested {
        View::Results if handoff.is_none() => View::Detection,
        view => view,
    }
}

/// The accepted upload: the file handle plus the data-URL preview once
/// the in-flight read completes.
pub struct UploadedImage {
    pub file: GlooFile,
    pub preview: Option<String>,
}

pub enum Msg {
    // File intake
    FileChosen(GlooFile),
    PreviewLoaded(String),
    HandleDrop(DragEvent),
    SetDragging(bool),

    // Patient form
    SetPatientId(String),
    SetPatientAge(String),
    SetPatientEye(Option<EyeSide>),

    // Analysis
    RunAnalysis,
    AnalysisDone(Box<AnalysisHandoff>),
    AnalysisFailed(String),

    // Session
    Reset,
    Navigate(View),
    SetError(Option<String>),
}

pub struct Model {
    view: View,
    uploaded: Option<UploadedImage>,
    reader: Option<FileReader>,
    patient: PatientInfo,
    processing: bool,
    is_dragging: bool,
    error: Option<String>,
    handoff: Option<AnalysisHandoff>,
    provider: ResultProvider,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = AppConfig::from_env();
        log::info!(
            "starting with {:?} provider against {}",
            config.provider,
            config.api_base_url
        );

        let provider = ResultProvider::from_config(&config);
        if let ResultProvider::Remote(api) = &provider {
            let api = api.clone();
            spawn_local(async move {
                match api.health_check().await {
                    Ok(health) => log::info!(
                        "inference service {}: model_loaded={}",
                        health.status,
                        health.model_loaded
                    ),
                    Err(err) => log::warn!("inference service unreachable: {err}"),
                }
            });
        }

        Self {
            view: View::Detection,
            uploaded: None,
            reader: None,
            patient: PatientInfo::default(),
            processing: false,
            is_dragging: false,
            error: None,
            handoff: None,
            provider,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // File intake
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, ctx, file),
            Msg::PreviewLoaded(data_url) => handlers::handle_preview_loaded(self, data_url),
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }

            // Patient form
            Msg::SetPatientId(id) => {
                self.patient.id = id;
                true
            }
            Msg::SetPatientAge(age) => {
                self.patient.age = age;
                true
            }
            Msg::SetPatientEye(eye) => {
                self.patient.eye = eye;
                true
            }

            // Analysis
            Msg::RunAnalysis => handlers::handle_run_analysis(self, ctx),
            Msg::AnalysisDone(handoff) => handlers::handle_analysis_done(self, *handoff),
            Msg::AnalysisFailed(message) => handlers::handle_analysis_failed(self, message),

            // Session
            Msg::Reset => handlers::handle_reset(self),
            Msg::Navigate(target) => handlers::handle_navigate(self, target),
            Msg::SetError(error) => {
                self.error = error;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match self.view {
            View::Detection => detection::render_detection(self, ctx),
            // The navigate handler never lands here without a bundle.
            View::Results => match &self.handoff {
                Some(handoff) => results_page::render_results(handoff, ctx),
                None => html! {},
            },
            View::AboutDiabetes => pages::about_diabetes::render(),
            View::CausesEffects => pages::causes_effects::render(),
            View::DiabetesTypes => pages::diabetes_types::render(),
        };

        html! {
            <div class="app-shell">
                { navigation::render_navigation(self, ctx) }
                <main class="main-content">
                    { utils::render_error_message(self) }
                    { body }
                </main>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Diabetic Retinopathy Center starting...");
    yew::Renderer::<Model>::new().render();
}

#[cfg(test)]
mod tests {
    use shared::{ClassificationResult, Severity};

    use super::*;

    fn handoff() -> AnalysisHandoff {
        AnalysisHandoff {
            result: ClassificationResult {
                class_name: "No Diabetic Retinopathy".into(),
                confidence: 94.2,
                severity: Severity::None,
                description: String::new(),
                recommendation: String::new(),
            },
            patient: PatientInfo::default(),
            image_preview: String::new(),
            file_name: "fundus.jpg".into(),
        }
    }

    #[test]
    fn results_view_without_a_bundle_redirects_to_intake() {
        assert_eq!(resolve_view(View::Results, None), View::Detection);
    }

    #[test]
    fn results_view_with_a_bundle_is_reachable() {
        let bundle = handoff();
        assert_eq!(resolve_view(View::Results, Some(&bundle)), View::Results);
    }

    #[test]
    fn other_views_pass_through_regardless_of_bundle() {
        let bundle = handoff();
        for view in [
            View::Detection,
            View::AboutDiabetes,
            View::CausesEffects,
            View::DiabetesTypes,
        ] {
            assert_eq!(resolve_view(view, None), view);
            assert_eq!(resolve_view(view, Some(&bundle)), view);
        }
    }
}
