//! 結果表示用のビューモデル
//!
//! 端末の表とWebの表は同じ行データから描画する

use crate::types::StructureMatch;

/// 表のヘッダ（Rank列を除く）
pub const TABLE_HEADERS: [&str; 5] = [
    "Structure ID",
    "Common Name",
    "Formula",
    "Confidence Score",
    "Crystallographic Information",
];

/// 候補が0件のときの表示
pub const NO_MATCHES_TITLE: &str = "No Matches Found";
pub const NO_MATCHES_MESSAGE: &str =
    "No crystal structure matches were found for the provided XRD data.";

/// 表の1行
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRow {
    /// 1始まりの順位（AIが返した順）
    pub rank: usize,
    pub structure_id: String,
    pub common_name: String,
    pub formula: String,
    pub confidence: String,
    pub crystallographic_information: String,
}

impl MatchRow {
    /// ヘッダ順のセル
    pub fn cells(&self) -> [&str; 5] {
        [
            self.structure_id.as_str(),
            self.common_name.as_str(),
            self.formula.as_str(),
            self.confidence.as_str(),
            self.crystallographic_information.as_str(),
        ]
    }
}

/// 信頼度を小数2桁で表示
pub fn format_confidence(score: f64) -> String {
    format!("{:.2}", score)
}

/// 候補リストを表示行に変換（順序はそのまま）
pub fn match_rows(matches: &[StructureMatch]) -> Vec<MatchRow> {
    matches
        .iter()
        .enumerate()
        .map(|(i, m)| MatchRow {
            rank: i + 1,
            structure_id: m.structure_id.clone(),
            common_name: m.common_name.clone(),
            formula: m.formula.clone(),
            confidence: format_confidence(m.confidence_score),
            crystallographic_information: m.crystallographic_information.clone(),
        })
        .collect()
}
