//! プロンプト生成モジュール
//!
//! CLIとWeb(WASM)で共有されるプロンプト生成ロジック:
//! - ACCEPTED_EXTENSIONS: 受け付けるXRDデータファイルの拡張子
//! - build_suggest_prompt: 結晶構造提案用プロンプト
//! - suggest_output_schema: レスポンスのJSONスキーマ（Gemini responseSchema形式）

use crate::types::SuggestStructuresInput;
use serde_json::{json, Value};

/// 受け付けるXRDデータファイルの拡張子
pub const ACCEPTED_EXTENSIONS: &[&str] = &["raw", "rd", "txt", "csv", "cif"];

/// 結晶構造提案プロンプト生成
///
/// 元素プロファイル未指定時は空文字として埋め込む。
pub fn build_suggest_prompt(input: &SuggestStructuresInput) -> String {
    let filename = &input.file.filename;
    let data = &input.file.data;
    let element_profile = input.element_profile.as_deref().unwrap_or("");

    format!(
        r#"You are an expert material scientist specializing in X-ray diffraction (XRD) analysis. You will analyze the provided XRD data and suggest potential matching crystal structures.

Analyze the following XRD data to identify potential crystal structure matches. Provide a ranked list of potential matches, along with a confidence score (0-1) for each match. Include relevant crystallographic information for each structure.

Filename: {filename}
XRD Data: {data}
Element Profile: {element_profile}

Consider different crystal structures to incorporate in the output. Rank the crystal structures by confidence score.

Output the matches in JSON format:
{{
  "matches": [
    {{
      "structureId": "A unique identifier for the crystal structure",
      "commonName": "The common name of the crystal structure",
      "formula": "The chemical formula of the crystal structure",
      "confidenceScore": 0.0,
      "crystallographicInformation": "Relevant crystallographic information about the structure"
    }}
  ]
}}
"#
    )
}

/// レスポンスのJSONスキーマ
///
/// Geminiの `generationConfig.responseSchema` にそのまま渡せるOpenAPIサブセット。
pub fn suggest_output_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "matches": {
                "type": "ARRAY",
                "description": "A ranked list of potential crystal structure matches.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "structureId": {
                            "type": "STRING",
                            "description": "A unique identifier for the crystal structure."
                        },
                        "commonName": {
                            "type": "STRING",
                            "description": "The common name of the crystal structure."
                        },
                        "formula": {
                            "type": "STRING",
                            "description": "The chemical formula of the crystal structure."
                        },
                        "confidenceScore": {
                            "type": "NUMBER",
                            "description": "A score indicating the confidence level of the match (0-1)."
                        },
                        "crystallographicInformation": {
                            "type": "STRING",
                            "description": "Relevant crystallographic information about the structure."
                        }
                    },
                    "required": [
                        "structureId",
                        "commonName",
                        "formula",
                        "confidenceScore",
                        "crystallographicInformation"
                    ],
                    "propertyOrdering": [
                        "structureId",
                        "commonName",
                        "formula",
                        "confidenceScore",
                        "crystallographicInformation"
                    ]
                }
            }
        },
        "required": ["matches"]
    })
}
