//! JSON出力
//!
//! Web版のダウンロードと同じ内容（共通ライブラリの to_export_json）を書き出す

use crate::error::{XrdMatchError, Result};
use std::path::Path;
use xrd_match_common::{to_export_json, validate_matches, StructureMatch};

pub fn write_json(matches: &[StructureMatch], output_path: &Path) -> Result<()> {
    let json = to_export_json(matches)?;
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_path, json)?;
    Ok(())
}

/// 保存済みの候補リストJSONを読み込む（値域も検証）
pub fn read_json(input: &Path) -> Result<Vec<StructureMatch>> {
    if !input.is_file() {
        return Err(XrdMatchError::FileNotFound(input.display().to_string()));
    }
    let content = std::fs::read_to_string(input)?;
    let matches: Vec<StructureMatch> = serde_json::from_str(&content)?;
    validate_matches(&matches)?;
    Ok(matches)
}
