//! xrd-match: XRDデータからAIで結晶構造の候補を提案する
//!
//! CLI固有の処理（ファイル読み込み、AIバックエンド、端末表示、ファイル出力、設定）。
//! プロンプト・スキーマ検証・エクスポート形式は xrd_match_common と共有。

pub mod ai_provider;
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod intake;
pub mod report;
