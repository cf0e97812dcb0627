//! Gemini API リクエスト/レスポンス型（CLI/WASM共通）
//!
//! 送信処理はそれぞれ reqwest / fetch で行い、ここでは型と組み立てだけを持つ

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 既定のAPIベースURL（末尾に `/{model}:generateContent` を付けて使う）
pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// 既定モデル
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// APIキーを載せるヘッダ（URLに含めるとエラー文に出てしまうため）
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini APIリクエスト
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
    #[serde(rename = "responseSchema", skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
}

impl GeminiRequest {
    /// テキストのみのJSON応答リクエストを作成
    pub fn json_prompt(prompt: String, temperature: f32, response_schema: Option<Value>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature,
                response_mime_type: "application/json".to_string(),
                response_schema,
            },
        }
    }
}

/// Gemini APIレスポンス
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GeminiResponse {
    /// 最初の候補の最初のテキストを取り出す
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
    }
}

/// generateContent エンドポイントURL（APIキーは含めない）
pub fn generate_content_url(base_url: &str, model: &str) -> String {
    format!("{}/{}:generateContent", base_url.trim_end_matches('/'), model)
}
