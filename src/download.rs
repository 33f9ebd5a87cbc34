//! JSON file downloads through object URLs

use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::error::ApiError;

/// Pretty JSON with 2-space indentation
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Object URL for a JSON blob; revoked when the handle is dropped
#[derive(Debug)]
pub struct JsonDownloadHandle {
    url: String,
}

impl JsonDownloadHandle {
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for JsonDownloadHandle {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.url) {
            log::warn!("[Download] failed to revoke {}: {:?}", self.url, e);
        }
    }
}

fn browser_err(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Browser(format!("{:?}", e))
}

pub fn create_json_download_handle<T: Serialize + ?Sized>(value: &T) -> Result<JsonDownloadHandle, ApiError> {
    let json = to_pretty_json(value)?;
    let parts = js_sys::Array::of1(&json.into());
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(browser_err)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(browser_err)?;
    Ok(JsonDownloadHandle { url })
}

/// Click a temporary anchor pointing at `url`
pub fn trigger_download(url: &str, file_name: &str) -> Result<(), ApiError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ApiError::Browser("document unavailable".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| ApiError::Browser("document has no body".to_string()))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(browser_err)?
        .dyn_into()
        .map_err(|_| ApiError::Browser("not an anchor element".to_string()))?;
    anchor.set_href(url);
    anchor.set_download(file_name);
    body.append_child(&anchor).map_err(browser_err)?;
    anchor.click();
    anchor.remove();
    Ok(())
}

/// Serialize `value`, download it as `file_name`, and release the URL
pub fn download_json<T: Serialize + ?Sized>(value: &T, file_name: &str) -> Result<(), ApiError> {
    let handle = create_json_download_handle(value)?;
    trigger_download(handle.url(), file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_json_uses_two_spaces() {
        let text = to_pretty_json(&json!([{"a": 1}])).unwrap();
        assert_eq!(text, "[\n  {\n    \"a\": 1\n  }\n]");
    }
}
