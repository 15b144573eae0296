//! HTTP service for uploading the selected PDF.

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::config::{UPLOAD_ENDPOINT, UPLOAD_FIELD};
use crate::error::TransportError;
use crate::types::UploadResponse;
use crate::workflow::UploadTransport;

/// Posts files to the upload endpoint as `multipart/form-data`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(UPLOAD_ENDPOINT)
    }
}

impl UploadTransport<File> for HttpTransport {
    fn upload(&self, file: &File) -> LocalBoxFuture<'static, Result<UploadResponse, TransportError>> {
        let form_data = build_form(file);
        let url = self.endpoint().to_string();
        async move { upload_pdf(form_data?, &url).await }.boxed_local()
    }
}

fn build_form(file: &File) -> Result<FormData, TransportError> {
    let form_data = FormData::new().map_err(|e| js_error("Failed to create FormData", e))?;
    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|e| js_error("Failed to append file", e))?;
    Ok(form_data)
}

fn js_error(context: &str, err: JsValue) -> TransportError {
    TransportError::Request(format!("{}: {:?}", context, err))
}

/// Sends the form and decodes the JSON reply.
///
/// The status code is ignored: the server reports failures in the body.
pub async fn upload_pdf(form_data: FormData, url: &str) -> Result<UploadResponse, TransportError> {
    let request = Request::post(url)
        .body(form_data)
        .map_err(|e| TransportError::Request(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;

    log::debug!("Upload endpoint answered {}", response.status());

    let body = response
        .text()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;

    parse_reply(&body)
}

/// Decodes the endpoint's JSON body.
pub fn parse_reply(body: &str) -> Result<UploadResponse, TransportError> {
    Ok(serde_json::from_str::<UploadResponse>(body)?)
}
