//! Gemini API連携（ブラウザのfetch）
//!
//! プロンプト生成・スキーマ検証は共通ライブラリを使い、CLI版と同じ結果になる

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use xrd_match_common::gemini::{
    generate_content_url, GeminiRequest, GeminiResponse, API_KEY_HEADER, GEMINI_API_BASE_URL,
};
use xrd_match_common::{
    build_suggest_prompt, parse_suggest_response, prepare_suggest_input, suggest_output_schema,
    FileContent, StructureMatch,
};

const TEMPERATURE: f32 = 0.1;

/// Gemini API呼び出し（共通処理）
async fn call_gemini_api(api_key: &str, model: &str, request: &GeminiRequest) -> Result<String, JsValue> {
    let url = generate_content_url(GEMINI_API_BASE_URL, model);
    let body = serde_json::to_string(request)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;
    request.headers().set(API_KEY_HEADER, api_key)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let response: GeminiResponse = serde_wasm_bindgen::from_value(json)?;

    response
        .first_text()
        .map(str::to_string)
        .ok_or_else(|| JsValue::from_str("Empty response"))
}

/// 結晶構造の候補を取得
///
/// ファイル未選択なら送信せずにエラーを返す。
///
/// # Arguments
/// * `api_key` - Gemini API key
/// * `model` - モデル名
/// * `file` - 読み込んだXRDデータ
/// * `element_profile` - 元素プロファイル（空文字は未指定扱い）
pub async fn suggest_structures(
    api_key: &str,
    model: &str,
    file: Option<FileContent>,
    element_profile: &str,
) -> Result<Vec<StructureMatch>, String> {
    let input = prepare_suggest_input(file, Some(element_profile)).map_err(|e| e.to_string())?;
    let prompt = build_suggest_prompt(&input);

    let request = GeminiRequest::json_prompt(prompt, TEMPERATURE, Some(suggest_output_schema()));

    let response_text = call_gemini_api(api_key, model, &request)
        .await
        .map_err(|e| format!("{:?}", e))?;

    parse_suggest_response(&response_text)
        .map(|output| output.matches)
        .map_err(|e| e.to_string())
}
