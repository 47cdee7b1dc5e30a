use shared::EyeSide;
use web_sys::{DragEvent, Event, HtmlInputElement, HtmlSelectElement, InputEvent};
use yew::prelude::*;

use super::utils::{click_element, debounce, truncate_name};
use crate::{Model, Msg};

pub fn render_detection(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="page detection-page">
            { render_hero() }
            <div class="detection-grid">
                <div class="input-column">
                    { render_upload_card(model, ctx) }
                    { render_patient_card(model, ctx) }
                    { render_action_buttons(model, ctx) }
                </div>
                <div class="side-column">
                    { render_status_panel(model) }
                </div>
            </div>
            { render_info_cards() }
        </div>
    }
}

fn render_hero() -> Html {
    html! {
        <div class="hero">
            <h1>{"AI-Powered Diabetic Retinopathy Detection"}</h1>
            <p class="hero-lead">
                {"Upload a retinal fundus image for instant AI analysis. Our advanced machine \
                  learning model helps detect early signs of diabetic retinopathy with high \
                  accuracy."}
            </p>
            <div class="hero-badges">
                <span><i class="fa-solid fa-circle-check"></i>{" FDA-Grade Analysis"}</span>
                <span><i class="fa-solid fa-eye"></i>{" Instant Results"}</span>
                <span><i class="fa-solid fa-triangle-exclamation"></i>{" Early Detection"}</span>
            </div>
        </div>
    }
}

fn render_upload_card(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input
            .files()
            .and_then(|files| files.item(0))
            .map(gloo_file::File::from);
        input.set_value("");
        file.map(Msg::FileChosen)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    html! {
        <div class="card upload-card">
            <div class="card-header">
                <h2><i class="fa-solid fa-upload"></i>{" Upload Retinal Image"}</h2>
                <p class="card-hint">{"Upload a high-quality fundus photograph (JPEG/PNG)"}</p>
            </div>
            <div class="card-body">
                <div
                    id="drop-zone"
                    class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                    ondragover={handle_drag_over}
                    ondragleave={handle_drag_leave}
                    ondrop={handle_drop}
                    onclick={debounce(300, || click_element("file-input"))}
                >
                    { render_upload_area_content(model) }
                </div>
                <input
                    type="file"
                    id="file-input"
                    accept="image/jpeg,image/png"
                    style="display: none;"
                    onchange={handle_change}
                />
            </div>
        </div>
    }
}

fn render_upload_area_content(model: &Model) -> Html {
    match &model.uploaded {
        Some(uploaded) => {
            let preview = match &uploaded.preview {
                Some(data_url) => html! {
                    <img class="image-preview" src={data_url.clone()} alt="Uploaded retinal image" />
                },
                None => html! {
                    <div class="preview-placeholder">
                        <i class="fa-solid fa-spinner fa-spin"></i>
                        <p>{"Loading preview..."}</p>
                    </div>
                },
            };
            html! {
                <div class="upload-preview">
                    { preview }
                    <p class="file-name">{ truncate_name(&uploaded.file.name(), 40) }</p>
                    <p class="upload-success">
                        <i class="fa-solid fa-circle-check"></i>
                        {" Image uploaded successfully"}
                    </p>
                </div>
            }
        }
        None => html! {
            <div class="upload-placeholder">
                <i class="fa-solid fa-cloud-arrow-up"></i>
                <p class="upload-title">{"Upload retinal image"}</p>
                <p>{"Drag and drop a fundus photograph or click to browse"}</p>
                <p class="file-types">{"Supported formats: JPEG, PNG"}</p>
            </div>
        },
    }
}

fn render_patient_card(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let on_id_input = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetPatientId(input.value())
    });

    let on_age_input = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetPatientAge(input.value())
    });

    let on_eye_change = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetPatientEye(EyeSide::from_form_value(&select.value()))
    });

    html! {
        <div class="card patient-card">
            <div class="card-header">
                <h2><i class="fa-solid fa-user"></i>{" Patient Information (Optional)"}</h2>
                <p class="card-hint">{"Additional details for better tracking"}</p>
            </div>
            <div class="card-body patient-form">
                <div class="form-field">
                    <label for="patient-id">{"Patient ID"}</label>
                    <input
                        id="patient-id"
                        type="text"
                        placeholder="Enter ID"
                        value={model.patient.id.clone()}
                        oninput={on_id_input}
                    />
                </div>
                <div class="form-field">
                    <label for="patient-age">{"Age"}</label>
                    <input
                        id="patient-age"
                        type="number"
                        placeholder="Enter age"
                        value={model.patient.age.clone()}
                        oninput={on_age_input}
                    />
                </div>
                <div class="form-field">
                    <label for="patient-eye">{"Eye"}</label>
                    <select id="patient-eye" onchange={on_eye_change}>
                        <option value="" selected={model.patient.eye.is_none()}>{"Select eye"}</option>
                        <option value="left" selected={model.patient.eye == Some(EyeSide::Left)}>{"Left Eye"}</option>
                        <option value="right" selected={model.patient.eye == Some(EyeSide::Right)}>{"Right Eye"}</option>
                    </select>
                </div>
            </div>
        </div>
    }
}

fn render_action_buttons(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();

    html! {
        <div class="action-row">
            <button
                class="analyze-btn primary"
                disabled={model.uploaded.is_none() || model.processing}
                onclick={ctx.link().callback(|_| Msg::RunAnalysis)}
            >
                { if model.processing {
                    html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
                } else {
                    html! { <><i class="fa-solid fa-eye"></i>{" Analyze Retinal Image"}</> }
                }}
            </button>
            <button
                class="analyze-btn secondary"
                onclick={debounce(300, move || link.send_message(Msg::Reset))}
            >
                {"Reset"}
            </button>
        </div>
    }
}

fn render_status_panel(model: &Model) -> Html {
    if model.processing {
        html! {
            <div class="card status-card">
                <div class="card-header">
                    <h2><i class="fa-solid fa-clock"></i>{" Processing Analysis"}</h2>
                </div>
                <div class="card-body status-body">
                    <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                    <p class="status-title">{"Analyzing Image"}</p>
                    <p class="status-hint">{"AI analysis in progress..."}</p>
                    <p class="status-note">{"Results will open in a new page"}</p>
                </div>
            </div>
        }
    } else {
        html! {
            <div class="card status-card">
                <div class="card-header">
                    <h2><i class="fa-solid fa-clock"></i>{" Ready for Analysis"}</h2>
                </div>
                <div class="card-body status-body">
                    <i class="fa-solid fa-eye fa-2x dimmed"></i>
                    <p class="status-title">{"Upload an image to begin analysis"}</p>
                    <p class="status-hint">{"Results will open in a separate page"}</p>
                </div>
            </div>
        }
    }
}

fn render_info_cards() -> Html {
    html! {
        <div class="info-grid">
            <div class="card info-card">
                <h3>{"Understanding Diabetic Retinopathy"}</h3>
                <p>
                    {"Learn about the different stages of diabetic retinopathy and how early \
                      detection can prevent vision loss and blindness."}
                </p>
            </div>
            <div class="card info-card">
                <h3>{"AI-Powered Analysis"}</h3>
                <p>
                    {"Our advanced machine learning algorithms analyze retinal images with \
                      precision comparable to specialist ophthalmologists."}
                </p>
            </div>
            <div class="card info-card">
                <h3>{"Professional Consultation"}</h3>
                <p>
                    {"Always consult with qualified healthcare professionals for proper \
                      diagnosis and treatment recommendations."}
                </p>
            </div>
        </div>
    }
}
