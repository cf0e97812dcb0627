//! Excel生成（CLI版）
//!
//! 共通ライブラリの excel_core でバッファを作り、ファイルに書き出す

use crate::error::{XrdMatchError, Result};
use std::path::Path;
use xrd_match_common::export::excel_core::generate_excel_buffer;
use xrd_match_common::StructureMatch;

pub fn generate_excel(matches: &[StructureMatch], output_path: &Path) -> Result<()> {
    let buffer = generate_excel_buffer(matches).map_err(XrdMatchError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_path, buffer)?;
    Ok(())
}
