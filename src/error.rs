use thiserror::Error;

#[derive(Error, Debug)]
pub enum XrdMatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`xrd-match config --set-api-key YOUR_KEY` で設定するか GEMINI_API_KEY を指定してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("APIレスポンスのパースに失敗: {0}")]
    ApiParse(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("CLI実行エラー: {0}")]
    CliExecution(String),

    #[error(transparent)]
    Common(#[from] xrd_match_common::Error),
}

impl XrdMatchError {
    /// ファイル未選択（AIを呼ぶ前に弾いたもの）か
    pub fn is_no_file_selected(&self) -> bool {
        matches!(self, XrdMatchError::Common(xrd_match_common::Error::NoFileSelected))
    }
}

pub type Result<T> = std::result::Result<T, XrdMatchError>;
