//! APIレスポンスパーサー
//!
//! AIのレスポンスからJSONを抽出し、出力スキーマに照らして検証する

use crate::error::{Error, Result};
use crate::types::{StructureMatch, SuggestStructuresOutput};

/// APIレスポンスからJSON部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 生の {...} オブジェクト（最初の `{` から最後の `}` まで）
/// 3. エラー
///
/// # Examples
/// ```
/// use xrd_match_common::extract_json;
///
/// let response = "Result: {\"matches\": []} done";
/// let json = extract_json(response).unwrap();
/// assert_eq!(json, "{\"matches\": []}");
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    // ```json ... ``` ブロックを探す
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // "```json" の長さ
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    // 生の {...} を探す
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("no JSON object found in response".into()))
}

/// 構造提案レスポンスをパース
///
/// - JSONとして読めない → `Error::Parse`
/// - 型・必須フィールド・値域の違反 → `Error::Schema`
///
/// 候補の順序はAIが返した順のまま保持する。
pub fn parse_suggest_response(response: &str) -> Result<SuggestStructuresOutput> {
    let json_str = extract_json(response)?;
    let value: serde_json::Value = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("invalid JSON: {}", e)))?;

    let output: SuggestStructuresOutput = serde_json::from_value(value)
        .map_err(|e| Error::Schema(format!("response does not match schema: {}", e)))?;

    validate_matches(&output.matches)?;
    Ok(output)
}

/// 各候補の値域を検証
///
/// confidenceScore は有限かつ [0, 1] の範囲であること。
pub fn validate_matches(matches: &[StructureMatch]) -> Result<()> {
    for (i, m) in matches.iter().enumerate() {
        let score = m.confidence_score;
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(Error::Schema(format!(
                "matches[{}].confidenceScore must be within [0, 1], got {}",
                i, score
            )));
        }
    }
    Ok(())
}
