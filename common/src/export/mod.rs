//! Export core modules shared across CLI and WASM wrappers.

#[cfg(feature = "excel")]
pub mod excel_core;

use crate::error::Result;
use crate::types::StructureMatch;

/// ダウンロード/保存時の既定ファイル名
pub const EXPORT_FILE_NAME: &str = "xrd-matches.json";

/// 候補リストをエクスポート用JSONに変換
///
/// ブラウザの `JSON.stringify(matches, null, 2)` と同一バイト列になる:
/// 2スペースインデント、`": "` 区切り、末尾改行なし。
pub fn to_export_json(matches: &[StructureMatch]) -> Result<String> {
    Ok(serde_json::to_string_pretty(matches)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_json_layout() {
        let matches = vec![
            StructureMatch {
                structure_id: "mp-2657".to_string(),
                common_name: "Rutile".to_string(),
                formula: "TiO2".to_string(),
                confidence_score: 0.85,
                crystallographic_information: "Tetragonal, P4_2/mnm".to_string(),
            },
            StructureMatch {
                structure_id: "mp-390".to_string(),
                common_name: "Anatase".to_string(),
                formula: "TiO2".to_string(),
                confidence_score: 1.0,
                crystallographic_information: "a = 3.785 \"Å\"".to_string(),
            },
        ];

        let expected = "[\n  {\n    \"structureId\": \"mp-2657\",\n    \"commonName\": \"Rutile\",\n    \"formula\": \"TiO2\",\n    \"confidenceScore\": 0.85,\n    \"crystallographicInformation\": \"Tetragonal, P4_2/mnm\"\n  },\n  {\n    \"structureId\": \"mp-390\",\n    \"commonName\": \"Anatase\",\n    \"formula\": \"TiO2\",\n    \"confidenceScore\": 1,\n    \"crystallographicInformation\": \"a = 3.785 \\\"Å\\\"\"\n  }\n]";

        assert_eq!(to_export_json(&matches).unwrap(), expected);
    }

    #[test]
    fn test_export_json_empty() {
        assert_eq!(to_export_json(&[]).unwrap(), "[]");
    }
}
