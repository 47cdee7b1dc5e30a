use js_sys::Date;
use shared::report;
use shared::{AnalysisHandoff, REFERENCE_RESULTS};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use yew::prelude::*;

use super::utils;
use crate::{Model, Msg, View};

pub fn render_results(handoff: &AnalysisHandoff, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    // Timestamp captured at render time; the download callback reuses the
    // same strings so the saved report matches what is on screen.
    let now = Date::new_0();
    let current_date: String = now.to_locale_date_string("en-US", &JsValue::UNDEFINED).into();
    let current_time: String = now.to_locale_time_string("en-US").into();

    let download = {
        let handoff = handoff.clone();
        let date = current_date.clone();
        let time = current_time.clone();
        Callback::from(move |_| download_report(&handoff, &date, &time))
    };

    let share = {
        let handoff = handoff.clone();
        Callback::from(move |_| share_results(&handoff))
    };

    let back = link.callback(|_| Msg::Navigate(View::Detection));
    let another = link.callback(|_| Msg::Navigate(View::Detection));
    let learn_more = link.callback(|_| Msg::Navigate(View::AboutDiabetes));

    html! {
        <div class="page results-page">
            <div class="results-header">
                <button class="back-link" onclick={back}>
                    <i class="fa-solid fa-arrow-left"></i>
                    <span>{" Back to Detection Tool"}</span>
                </button>
                <div class="results-header-row">
                    <div>
                        <h1>{"Analysis Results"}</h1>
                        <p class="card-hint">{"Diabetic Retinopathy Detection Report"}</p>
                    </div>
                    <div class="results-actions">
                        <button class="action-btn share-btn" onclick={share}>
                            <i class="fa-solid fa-share-nodes"></i>{" Share"}
                        </button>
                        <button class="action-btn download-btn" onclick={download}>
                            <i class="fa-solid fa-download"></i>{" Download Report"}
                        </button>
                    </div>
                </div>
            </div>

            <div class="results-grid">
                <div class="results-main">
                    { render_primary_card(handoff) }
                    { render_details_card(handoff, &current_date, &current_time) }
                    { render_next_steps() }
                </div>
                <div class="results-sidebar">
                    { render_sidebar(handoff) }
                </div>
            </div>

            <div class="results-footer">
                <button class="analyze-btn primary" onclick={another}>
                    <i class="fa-solid fa-eye"></i>{" Analyze Another Image"}
                </button>
                <button class="analyze-btn secondary" onclick={learn_more}>
                    {"Learn More About Diabetes"}
                </button>
            </div>
        </div>
    }
}

fn render_primary_card(handoff: &AnalysisHandoff) -> Html {
    let result = &handoff.result;

    html! {
        <div class="card">
            <div class="card-body">
                <div class={classes!("severity-card", result.severity.css_class())}>
                    <i class={classes!(result.severity.icon_class(), "severity-icon")}></i>
                    <div class="severity-content">
                        <h2>{ &result.class_name }</h2>
                        <p class="severity-description">{ &result.description }</p>
                        <div class="confidence-row">
                            <span>{"Confidence Level"}</span>
                            <span class="confidence-value">{ format!("{}%", result.confidence) }</span>
                        </div>
                        <div class="meter">
                            <div
                                class="meter-fill"
                                style={format!("width: {}%", result.confidence)}
                            ></div>
                        </div>
                    </div>
                </div>
                <div class="recommendation-box">
                    <h3>
                        <i class="fa-solid fa-triangle-exclamation"></i>
                        {" Medical Recommendation"}
                    </h3>
                    <p>{ &result.recommendation }</p>
                </div>
            </div>
        </div>
    }
}

fn render_details_card(handoff: &AnalysisHandoff, date: &str, time: &str) -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h3>{"Analysis Details"}</h3>
            </div>
            <div class="card-body details-grid">
                <div class="details-section">
                    <h4><i class="fa-solid fa-calendar"></i>{" Analysis Information"}</h4>
                    <dl class="details-list">
                        <dt>{"Date:"}</dt><dd>{ date }</dd>
                        <dt>{"Time:"}</dt><dd>{ time }</dd>
                        <dt>{"Image File:"}</dt><dd>{ &handoff.file_name }</dd>
                        <dt>{"Analysis Method:"}</dt><dd>{"AI Deep Learning"}</dd>
                    </dl>
                </div>
                { render_patient_section(handoff) }
            </div>
        </div>
    }
}

fn render_patient_section(handoff: &AnalysisHandoff) -> Html {
    let patient = &handoff.patient;
    if patient.is_empty() {
        return html! {};
    }

    html! {
        <div class="details-section">
            <h4><i class="fa-solid fa-user"></i>{" Patient Information"}</h4>
            <dl class="details-list">
                { if !patient.id.is_empty() {
                    html! { <><dt>{"Patient ID:"}</dt><dd>{ &patient.id }</dd></> }
                } else { html! {} }}
                { if !patient.age.is_empty() {
                    html! { <><dt>{"Age:"}</dt><dd>{ format!("{} years", patient.age) }</dd></> }
                } else { html! {} }}
                { if let Some(eye) = patient.eye {
                    html! { <><dt>{"Eye:"}</dt><dd>{ eye.label() }</dd></> }
                } else { html! {} }}
            </dl>
        </div>
    }
}

fn render_next_steps() -> Html {
    let steps = [
        (
            "Consult Healthcare Provider",
            "Share these results with your ophthalmologist or healthcare provider for \
             professional evaluation.",
        ),
        (
            "Follow Recommendations",
            "Adhere to the medical recommendations provided based on your analysis results.",
        ),
        (
            "Regular Monitoring",
            "Continue regular eye examinations and diabetes management as advised by your \
             healthcare team.",
        ),
    ];

    html! {
        <div class="card">
            <div class="card-header"><h3>{"Next Steps"}</h3></div>
            <div class="card-body">
                { for steps.iter().enumerate().map(|(index, (title, text))| html! {
                    <div class="next-step">
                        <span class="step-number">{ index + 1 }</span>
                        <div>
                            <p class="step-title">{ *title }</p>
                            <p class="step-text">{ *text }</p>
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}

fn render_sidebar(handoff: &AnalysisHandoff) -> Html {
    html! {
        <div class="card sidebar-card">
            <div class="card-header"><h3>{"Analyzed Image"}</h3></div>
            <div class="card-body">
                <img
                    class="analyzed-image"
                    src={handoff.image_preview.clone()}
                    alt="Analyzed retinal image"
                />
                <p class="file-name">{ &handoff.file_name }</p>
            </div>
            <div class="card-section">
                <h4>{"Severity Scale"}</h4>
                <div class="severity-scale">
                    { for REFERENCE_RESULTS.iter().map(|entry| {
                        let is_current = entry.severity == handoff.result.severity;
                        html! {
                            <div class="scale-row">
                                <span class={classes!(
                                    "scale-dot",
                                    entry.severity.dot_class(),
                                    is_current.then_some("current"),
                                )}></span>
                                <span class={classes!("scale-label", is_current.then_some("current"))}>
                                    { entry.severity.scale_label() }
                                </span>
                            </div>
                        }
                    })}
                </div>
            </div>
            <div class="card-section disclaimer">
                <p>
                    <strong>{"Medical Disclaimer: "}</strong>
                    { report::MEDICAL_DISCLAIMER }
                </p>
            </div>
        </div>
    }
}

fn download_report(handoff: &AnalysisHandoff, date: &str, time: &str) {
    let content = report::render_report(handoff, date, time);
    let file_name = report::report_file_name(date);
    if let Err(err) = save_text_file(&content, &file_name) {
        gloo_console::error!("Failed to save report:", err);
    }
}

/// Client-side save: a Blob behind a temporary object URL, clicked
/// through a detached anchor element.
fn save_text_file(content: &str, file_name: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/plain");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(file_name);

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    web_sys::Url::revoke_object_url(&url)?;

    Ok(())
}

fn share_results(handoff: &AnalysisHandoff) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();

    if navigator_supports_share(&navigator) {
        let data = web_sys::ShareData::new();
        data.set_title(report::SHARE_TITLE);
        data.set_text(&report::share_summary(&handoff.result));
        if let Ok(href) = window.location().href() {
            data.set_url(&href);
        }
        let promise = navigator.share_with_data(&data);
        spawn_local(async move {
            // Cancelling the native share sheet rejects the promise; that
            // is not an application error.
            if let Err(err) = JsFuture::from(promise).await {
                gloo_console::log!("Share dismissed:", err);
            }
        });
    } else {
        let text = report::clipboard_summary(&handoff.result);
        let promise = navigator.clipboard().write_text(&text);
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => utils::alert("Results copied to clipboard!"),
                Err(err) => gloo_console::error!("Clipboard copy failed:", err),
            }
        });
    }
}

fn navigator_supports_share(navigator: &web_sys::Navigator) -> bool {
    js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("share")).unwrap_or(false)
}
