//! 端末への結果表示

use xrd_match_common::view::{match_rows, MatchRow, NO_MATCHES_MESSAGE, NO_MATCHES_TITLE, TABLE_HEADERS};
use xrd_match_common::StructureMatch;

/// 結晶学情報を除いた列（端末幅に収めるため情報は行の下に出す）
const SUMMARY_COLUMNS: usize = 4;

/// 候補リストを表形式の文字列にする
///
/// 0件なら "No Matches Found" のメッセージを返す。
pub fn render_matches_table(matches: &[StructureMatch]) -> String {
    let rows = match_rows(matches);
    if rows.is_empty() {
        return format!("{}\n{}\n", NO_MATCHES_TITLE, NO_MATCHES_MESSAGE);
    }

    let widths = column_widths(&rows);
    let mut out = String::new();

    out.push_str(&format_line("#", &TABLE_HEADERS[..SUMMARY_COLUMNS], &widths));
    let total: usize = widths.iter().sum::<usize>() + 3 * widths.len() + 2;
    out.push_str(&"-".repeat(total));
    out.push('\n');

    for row in &rows {
        let cells = row.cells();
        out.push_str(&format_line(&row.rank.to_string(), &cells[..SUMMARY_COLUMNS], &widths));
        if !row.crystallographic_information.is_empty() {
            out.push_str(&format!("     {}\n", row.crystallographic_information));
        }
    }

    out
}

fn column_widths(rows: &[MatchRow]) -> Vec<usize> {
    (0..SUMMARY_COLUMNS)
        .map(|i| {
            rows.iter()
                .map(|r| r.cells()[i].chars().count())
                .chain(std::iter::once(TABLE_HEADERS[i].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn format_line(rank: &str, cells: &[&str], widths: &[usize]) -> String {
    let mut line = format!("{:>3}", rank);
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(" | ");
        line.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        line.push_str(&" ".repeat(pad));
    }
    line.truncate(line.trim_end().len());
    line.push('\n');
    line
}
