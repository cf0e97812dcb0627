//! 解析ロジック（CLI/WASM共通）
//!
//! AI呼び出し前の入力チェックとリクエスト組み立て

use crate::error::{Error, Result};
use crate::prompts::ACCEPTED_EXTENSIONS;
use crate::types::{FileContent, SuggestStructuresInput};

/// 構造提案リクエストを組み立てる
///
/// ファイル未選択なら `Error::NoFileSelected`（AI呼び出しの前に失敗させる）。
/// 空白のみの元素プロファイルは未指定扱い。
pub fn prepare_suggest_input(
    file: Option<FileContent>,
    element_profile: Option<&str>,
) -> Result<SuggestStructuresInput> {
    let file = file.ok_or(Error::NoFileSelected)?;

    let element_profile = element_profile
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string);

    Ok(SuggestStructuresInput { file, element_profile })
}

/// 受け付ける拡張子か判定（大文字小文字は区別しない）
pub fn is_accepted_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            ACCEPTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
