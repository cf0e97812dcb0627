//! Gemini API連携（reqwest）

use super::StructureModel;
use crate::config::Config;
use crate::error::{XrdMatchError, Result};
use async_trait::async_trait;
use std::time::Duration;
use xrd_match_common::gemini::{
    generate_content_url, GeminiRequest, GeminiResponse, API_KEY_HEADER,
};
use xrd_match_common::suggest_output_schema;

pub struct GeminiApi {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
}

impl GeminiApi {
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| XrdMatchError::Config(format!("HTTPクライアント初期化エラー: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            base_url: config.api_base_url.clone(),
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl StructureModel for GeminiApi {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GeminiRequest::json_prompt(
            prompt.to_string(),
            self.temperature,
            Some(suggest_output_schema()),
        );

        tracing::debug!(model = %self.model, "Gemini API呼び出し");

        let url = generate_content_url(&self.base_url, &self.model);
        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                XrdMatchError::ApiCall(format!("Gemini APIへの接続に失敗: {}", e.without_url()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(XrdMatchError::ApiCall(format!(
                "Gemini API failed with status {}: {}",
                status, body
            )));
        }

        let payload: GeminiResponse = response
            .json()
            .await
            .map_err(|e| {
                XrdMatchError::ApiParse(format!("Gemini APIレスポンスが不正: {}", e.without_url()))
            })?;

        payload
            .first_text()
            .map(str::to_string)
            .ok_or_else(|| XrdMatchError::ApiParse("Gemini APIレスポンスにテキストがありません".into()))
    }
}
