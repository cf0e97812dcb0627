//! 結晶構造提案
//!
//! 入力チェック → プロンプト生成 → AI呼び出し（1回）→ スキーマ検証
//! の流れは共通ライブラリの関数で組み立て、AI呼び出しだけをバックエンドに任せる

mod claude_cli;
mod gemini_api;

pub use claude_cli::ClaudeCli;
pub use gemini_api::GeminiApi;

use crate::ai_provider::AiProvider;
use crate::config::Config;
use crate::error::{XrdMatchError, Result};
use async_trait::async_trait;
use xrd_match_common::{
    build_suggest_prompt, parse_suggest_response, prepare_suggest_input, FileContent,
    StructureMatch,
};

/// プロンプトを受け取りテキストを返すAIバックエンド
#[async_trait]
pub trait StructureModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// プロバイダ設定からバックエンドを生成
pub fn build_model(provider: AiProvider, config: &Config) -> Result<Box<dyn StructureModel>> {
    match provider {
        AiProvider::Gemini => Ok(Box::new(GeminiApi::from_config(config)?)),
        AiProvider::Claude => Ok(Box::new(ClaudeCli::new())),
    }
}

/// XRDデータから結晶構造候補を取得
///
/// ファイル未選択ならAIを呼ばずに失敗する。
/// 候補の順序・内容はAIの返答のまま（検証のみ行う）。
pub async fn suggest_structures<M>(
    model: &M,
    file: Option<FileContent>,
    element_profile: Option<&str>,
) -> Result<Vec<StructureMatch>>
where
    M: StructureModel + ?Sized,
{
    let input = prepare_suggest_input(file, element_profile)?;
    let prompt = build_suggest_prompt(&input);
    tracing::debug!(
        file = %input.file.filename,
        prompt_chars = prompt.len(),
        has_element_profile = input.element_profile.is_some(),
        "プロンプト生成"
    );

    let response = model.generate(&prompt).await?;
    tracing::debug!(response_chars = response.len(), "レスポンス受信");

    let output = parse_suggest_response(&response).map_err(|e| {
        let preview: String = response.chars().take(500).collect();
        tracing::debug!(%preview, "スキーマ検証失敗");
        XrdMatchError::from(e)
    })?;

    Ok(output.matches)
}
