//! Excel生成（共通ライブラリ）
//!
//! 候補リストを1シートの表として出力

use crate::types::StructureMatch;
use crate::view::TABLE_HEADERS;
use rust_xlsxwriter::*;

/// シート名
pub const SHEET_NAME: &str = "Matches";

/// 列幅（Rank, Structure ID, Common Name, Formula, Confidence, Information）
const COLUMN_WIDTHS: [f64; 6] = [6.0, 16.0, 22.0, 14.0, 16.0, 60.0];

/// Excelをバッファに生成
///
/// # Arguments
/// * `matches` - AIが返した候補（この順で行を書き出す）
pub fn generate_excel_buffer(matches: &[StructureMatch]) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    // フォーマット定義
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0x333333))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let text_format = Format::new()
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::Top)
        .set_text_wrap()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let score_format = Format::new()
        .set_num_format("0.00")
        .set_align(FormatAlign::Top)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
    }

    // ヘッダ行
    worksheet.write_string_with_format(0, 0, "Rank", &header_format)
        .map_err(|e| format!("ヘッダ書き込みエラー: {}", e))?;
    for (i, header) in TABLE_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, (i + 1) as u16, *header, &header_format)
            .map_err(|e| format!("ヘッダ書き込みエラー: {}", e))?;
    }
    worksheet.set_freeze_panes(1, 0)
        .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;

    for (i, m) in matches.iter().enumerate() {
        let row = (i + 1) as u32;

        worksheet.write_number_with_format(row, 0, (i + 1) as f64, &text_format)
            .map_err(|e| format!("値書き込みエラー: {}", e))?;

        let texts = [
            (1u16, m.structure_id.as_str()),
            (2, m.common_name.as_str()),
            (3, m.formula.as_str()),
            (5, m.crystallographic_information.as_str()),
        ];
        for (col, value) in texts {
            worksheet.write_string_with_format(row, col, value, &text_format)
                .map_err(|e| format!("値書き込みエラー: {}", e))?;
        }

        worksheet.write_number_with_format(row, 4, m.confidence_score, &score_format)
            .map_err(|e| format!("値書き込みエラー: {}", e))?;
    }

    // バッファに書き出し
    workbook.save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: usize) -> Vec<StructureMatch> {
        (1..=n)
            .map(|i| StructureMatch {
                structure_id: format!("mp-{}", i),
                common_name: format!("Phase {}", i),
                formula: "Fe2O3".to_string(),
                confidence_score: 1.0 / i as f64,
                crystallographic_information: "Trigonal, R-3c".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_generate_excel_buffer() {
        let buffer = generate_excel_buffer(&sample(3)).expect("Excel生成失敗");
        // xlsx は zip（PKシグネチャ）
        assert!(buffer.len() > 4);
        assert_eq!(&buffer[0..2], b"PK");
    }

    #[test]
    fn test_generate_excel_buffer_empty() {
        assert!(generate_excel_buffer(&[]).is_ok());
    }
}
