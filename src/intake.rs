//! XRDデータファイルの読み込み
//!
//! ブラウザの `File.text()` と同様に、ファイル全体をテキストとして読む

use crate::error::{XrdMatchError, Result};
use std::path::Path;
use xrd_match_common::{is_accepted_file, FileContent};

pub fn read_file_content(path: &Path) -> Result<FileContent> {
    if !path.is_file() {
        return Err(XrdMatchError::FileNotFound(path.display().to_string()));
    }

    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    if !is_accepted_file(&filename) {
        tracing::warn!(file = %filename, "想定外の拡張子です（.raw/.rd/.txt/.csv/.cif）。テキストとして送信します");
    }

    let bytes = std::fs::read(path)?;
    tracing::debug!(file = %filename, bytes = bytes.len(), "ファイル読み込み完了");

    Ok(FileContent::from_bytes(filename, &bytes))
}
