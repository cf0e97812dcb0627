pub mod json;
pub mod excel;

use crate::cli::ExportFormat;
use crate::error::Result;
use std::path::{Path, PathBuf};
use xrd_match_common::StructureMatch;

const DEFAULT_STEM: &str = "xrd-matches";

fn output_path_for_format(output: &Path, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", DEFAULT_STEM, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let json_path = output.join(format!("{}.json", DEFAULT_STEM));
        let excel_path = output.join(format!("{}.xlsx", DEFAULT_STEM));
        (json_path, excel_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(DEFAULT_STEM);
        let json_path = parent.join(format!("{}.json", stem));
        let excel_path = parent.join(format!("{}.xlsx", stem));
        (json_path, excel_path)
    }
}

/// 候補リストを指定形式で書き出し、書き出したパスを返す
pub fn export_results(
    matches: &[StructureMatch],
    format: &ExportFormat,
    output: &Path,
) -> Result<Vec<PathBuf>> {
    let written = match format {
        ExportFormat::Json => {
            let output_path = output_path_for_format(output, "json");
            json::write_json(matches, &output_path)?;
            vec![output_path]
        }
        ExportFormat::Excel => {
            let output_path = output_path_for_format(output, "xlsx");
            excel::generate_excel(matches, &output_path)?;
            vec![output_path]
        }
        ExportFormat::Both => {
            let (json_path, excel_path) = output_paths_for_both(output);
            json::write_json(matches, &json_path)?;
            excel::generate_excel(matches, &excel_path)?;
            vec![json_path, excel_path]
        }
    };

    for path in &written {
        tracing::debug!(path = %path.display(), count = matches.len(), "エクスポート完了");
    }

    Ok(written)
}
