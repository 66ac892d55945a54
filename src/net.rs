//! Multipart upload to the consumption endpoint.
//!
//! One `fetch` POST per submission; the await on the response is the
//! single suspension point of the whole workflow. No timeout, no retry.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response};

use crate::constants::{FILES_FIELD, LINE_FIELD, PERCENT_FIELD, UPLOAD_ENDPOINT};
use crate::error::UploadError;
use crate::protocol::{self, ConsumptionReport};

/// Human-readable text for a caught JS exception.
fn js_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn network(value: JsValue) -> UploadError {
    UploadError::Network(js_message(&value))
}

/// Post the selection plus form fields, await the parsed report.
///
/// Files are sent as repeated `files[]` parts under their original
/// names; the percentage goes out as a bare number string.
pub async fn upload(
    files: Vec<(String, File)>,
    porcentagem: String,
    linha: Option<String>,
) -> Result<ConsumptionReport, UploadError> {
    let form = FormData::new().map_err(network)?;
    for (name, file) in &files {
        form.append_with_blob_and_filename(FILES_FIELD, file, name)
            .map_err(network)?;
    }
    form.append_with_str(PERCENT_FIELD, &porcentagem)
        .map_err(network)?;
    if let Some(linha) = &linha {
        form.append_with_str(LINE_FIELD, linha).map_err(network)?;
    }

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(form.as_ref());
    let request = Request::new_with_str_and_init(UPLOAD_ENDPOINT, &init).map_err(network)?;

    let window = web_sys::window().ok_or_else(|| UploadError::Network("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network)?;
    let response: Response = response.dyn_into().map_err(network)?;

    let body = JsFuture::from(response.text().map_err(network)?)
        .await
        .map_err(network)?;
    let body = body.as_string().unwrap_or_default();

    if response.ok() {
        let report =
            protocol::parse_report(&body).map_err(|err| UploadError::InvalidResponse(err.to_string()))?;
        log::info!("upload ok, {} categorias", report.per_color.len());
        Ok(report)
    } else {
        let status = response.status();
        let message = protocol::error_message(&body);
        log::warn!("upload rejected with status {status}: {message}");
        Err(UploadError::server(status, message))
    }
}
