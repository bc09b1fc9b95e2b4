//! Browser Download Trigger
//!
//! Hands rendered document bytes to the browser as a blob object URL and
//! clicks a synthetic anchor, all synchronously from the user action.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

/// Offer `bytes` to the user as a PDF download named `file_name`.
pub fn save_pdf(bytes: &[u8], file_name: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let document = window.document().ok_or_else(|| "no document".to_string())?;

    let payload = js_sys::Array::new();
    payload.push(&js_sys::Uint8Array::from(bytes).into());
    let props = web_sys::BlobPropertyBag::new();
    props.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&payload, &props)
        .map_err(js_err)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "anchor element has unexpected type".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    let _ = web_sys::Url::revoke_object_url(&url);

    Ok(())
}

fn js_err(err: JsValue) -> String {
    format!("{err:?}")
}
