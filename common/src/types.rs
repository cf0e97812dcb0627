//! 解析入出力の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - FileContent: アップロードされたXRDデータファイル
//! - SuggestStructuresInput: AIへの入力（ファイル + 元素プロファイル）
//! - StructureMatch / SuggestStructuresOutput: AIが返す結晶構造候補

use serde::{Deserialize, Serialize, Serializer};
use serde_json::value::RawValue;

/// アップロードされたファイルの内容（テキストとして読み込み済み）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileContent {
    pub filename: String,
    pub data: String,
}

impl FileContent {
    /// バイト列から生成（UTF-8として不正なバイトは U+FFFD に置換）
    pub fn from_bytes(filename: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            filename: filename.into(),
            data: String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}

/// 構造提案リクエスト
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestStructuresInput {
    pub file: FileContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_profile: Option<String>,
}

/// 結晶構造の候補1件
///
/// フィールド順はそのままエクスポートJSONのキー順になる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureMatch {
    pub structure_id: String,
    pub common_name: String,
    pub formula: String,
    /// 0.0〜1.0
    #[serde(serialize_with = "serialize_js_number")]
    pub confidence_score: f64,
    pub crystallographic_information: String,
}

/// AIレスポンスのスキーマ（ランク順の候補リスト）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestStructuresOutput {
    pub matches: Vec<StructureMatch>,
}

/// JavaScriptの数値表記に合わせてシリアライズ
///
/// 整数値の浮動小数は `1.0` ではなく `1` と出力する。
/// それ以外は `Number.prototype.toString` と同じ表記（`0.000001` など）で書き出す。
fn serialize_js_number<S>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if !value.is_finite() {
        // serde_jsonではnull（JSON.stringifyと同じ）
        return serializer.serialize_f64(*value);
    }
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        return serializer.serialize_i64(*value as i64);
    }

    let raw = RawValue::from_string(js_number_string(*value))
        .map_err(<S::Error as serde::ser::Error>::custom)?;
    raw.serialize(serializer)
}

/// 有限値をJavaScriptの `String(number)` と同じ文字列にする
///
/// 桁は最短の往復可能表現。小数点位置 n が -6 < n <= 21 なら指数表記を使わない。
pub fn js_number_string(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let sign = if e >= 0 { "+" } else { "-" };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, e.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, e.abs())
        }
    };

    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_match(score: f64) -> StructureMatch {
        StructureMatch {
            structure_id: "mp-2657".to_string(),
            common_name: "Rutile".to_string(),
            formula: "TiO2".to_string(),
            confidence_score: score,
            crystallographic_information: "Tetragonal, P4_2/mnm".to_string(),
        }
    }

    #[test]
    fn test_structure_match_camel_case_keys() {
        let json = serde_json::to_string(&sample_match(0.5)).unwrap();
        assert_eq!(
            json,
            r#"{"structureId":"mp-2657","commonName":"Rutile","formula":"TiO2","confidenceScore":0.5,"crystallographicInformation":"Tetragonal, P4_2/mnm"}"#
        );
    }

    #[test]
    fn test_integral_score_serialized_without_fraction() {
        let one = serde_json::to_string(&sample_match(1.0)).unwrap();
        assert!(one.contains(r#""confidenceScore":1,"#));

        let zero = serde_json::to_string(&sample_match(0.0)).unwrap();
        assert!(zero.contains(r#""confidenceScore":0,"#));

        let negative_zero = serde_json::to_string(&sample_match(-0.0)).unwrap();
        assert!(negative_zero.contains(r#""confidenceScore":0,"#));
    }

    #[test]
    fn test_js_number_string_small_and_large_values() {
        let cases = [
            (0.1, "0.1"),
            (0.25, "0.25"),
            (0.000001, "0.000001"),
            (1.5e-6, "0.0000015"),
            (0.00001, "0.00001"),
            (1e-7, "1e-7"),
            (1.25e-8, "1.25e-8"),
            (123.456, "123.456"),
            (-0.5, "-0.5"),
            (1e21, "1e+21"),
            (1e16, "10000000000000000"),
        ];
        for (value, expected) in cases {
            assert_eq!(js_number_string(value), expected, "value {:e}", value);
        }
    }

    #[test]
    fn test_small_score_serialized_without_exponent() {
        let json = serde_json::to_string(&sample_match(0.000001)).unwrap();
        assert!(json.contains(r#""confidenceScore":0.000001,"#), "{}", json);

        let json = serde_json::to_string(&sample_match(1e-7)).unwrap();
        assert!(json.contains(r#""confidenceScore":1e-7,"#), "{}", json);
    }

    #[test]
    fn test_score_as_text_is_rejected() {
        let json = r#"{"structureId":"a","commonName":"b","formula":"c","confidenceScore":"0.9","crystallographicInformation":"d"}"#;
        assert!(serde_json::from_str::<StructureMatch>(json).is_err());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"structureId":"a","commonName":"b","confidenceScore":0.9,"crystallographicInformation":"d"}"#;
        assert!(serde_json::from_str::<StructureMatch>(json).is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{"structureId":"a","commonName":"b","formula":"c","confidenceScore":0.9,"crystallographicInformation":"d","spaceGroup":"Fm-3m"}"#;
        let parsed: StructureMatch = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.structure_id, "a");
    }

    #[test]
    fn test_file_content_from_invalid_utf8() {
        let content = FileContent::from_bytes("scan.raw", &[0x32, 0x54, 0xff, 0x0a]);
        assert_eq!(content.filename, "scan.raw");
        assert_eq!(content.data, "2T\u{fffd}\n");
    }

    #[test]
    fn test_input_omits_absent_element_profile() {
        let input = SuggestStructuresInput {
            file: FileContent::from_bytes("a.txt", b"10 20"),
            element_profile: None,
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(!json.contains("elementProfile"));
    }
}
