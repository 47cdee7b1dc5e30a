use gloo_file::File as GlooFile;
use shared::{AnalysisHandoff, PatientInfo, accepted_image_type};
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

use super::utils;
use crate::{Model, Msg, UploadedImage, View, resolve_view};

pub fn handle_file_chosen(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    if !accepted_image_type(&file.raw_mime_type()) {
        utils::alert("Please upload a JPEG or PNG image file.");
        return false;
    }

    model.error = None;
    model.handoff = None;

    // The reader handle has to stay alive until the load callback fires.
    let link = ctx.link().clone();
    model.reader = Some(gloo_file::callbacks::read_as_data_url(
        &file,
        move |result| match result {
            Ok(data_url) => link.send_message(Msg::PreviewLoaded(data_url)),
            Err(err) => {
                link.send_message(Msg::SetError(Some(format!("Failed to read image: {err}"))))
            }
        },
    ));
    model.uploaded = Some(UploadedImage {
        file,
        preview: None,
    });

    true
}

pub fn handle_preview_loaded(model: &mut Model, data_url: String) -> bool {
    model.reader = None;
    if let Some(uploaded) = model.uploaded.as_mut() {
        uploaded.preview = Some(data_url);
        true
    } else {
        false
    }
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    let file = event
        .data_transfer()
        .and_then(|transfer| transfer.files())
        .and_then(|files| files.item(0))
        .map(GlooFile::from);

    if let Some(file) = file {
        handle_file_chosen(model, ctx, file);
    }

    true
}

pub fn handle_run_analysis(model: &mut Model, ctx: &Context<Model>) -> bool {
    if model.processing {
        return false;
    }
    let Some(uploaded) = &model.uploaded else {
        utils::alert("Please upload an image first.");
        return false;
    };

    model.processing = true;
    model.error = None;

    // Handoff ingredients are captured now; a reset while the analysis is
    // in flight does not change what the results view will receive.
    let provider = model.provider.clone();
    let patient = model.patient.clone();
    let image_preview = uploaded.preview.clone().unwrap_or_default();
    let file_name = uploaded.file.name();
    let link = ctx.link().clone();

    spawn_local(async move {
        match provider.classify(&image_preview, &patient).await {
            Ok(result) => link.send_message(Msg::AnalysisDone(Box::new(AnalysisHandoff {
                result,
                patient,
                image_preview,
                file_name,
            }))),
            Err(err) => link.send_message(Msg::AnalysisFailed(err.to_string())),
        }
    });

    true
}

pub fn handle_analysis_done(model: &mut Model, handoff: AnalysisHandoff) -> bool {
    model.processing = false;
    model.handoff = Some(handoff);
    model.view = View::Results;
    true
}

pub fn handle_analysis_failed(model: &mut Model, message: String) -> bool {
    log::warn!("analysis failed: {message}");
    model.processing = false;
    model.error = Some(message);
    true
}

pub fn handle_reset(model: &mut Model) -> bool {
    model.uploaded = None;
    model.reader = None;
    model.patient = PatientInfo::default();
    model.error = None;
    true
}

pub fn handle_navigate(model: &mut Model, target: View) -> bool {
    let next = resolve_view(target, model.handoff.as_ref());

    // The bundle is one-shot; leaving the results view consumes it.
    if model.view == View::Results && next != View::Results {
        model.handoff = None;
    }

    if next == model.view {
        return false;
    }
    model.view = next;
    true
}
