//! ブラウザでのJSONダウンロード

use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};
use xrd_match_common::{to_export_json, StructureMatch, EXPORT_FILE_NAME};

const JSON_MIME_TYPE: &str = "application/json";

/// 候補リストをxrd-matches.jsonとして保存させる
pub fn download_matches_json(matches: &[StructureMatch]) -> Result<(), String> {
    let json = to_export_json(matches).map_err(|e| e.to_string())?;
    download_text(&json, JSON_MIME_TYPE, EXPORT_FILE_NAME).map_err(|e| format!("{:?}", e))
}

fn download_text(text: &str, mime_type: &str, file_name: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(text));

    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url)
}
