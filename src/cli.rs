use clap::{Parser, Subcommand};
use crate::ai_provider::AiProvider;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xrd-match")]
#[command(about = "XRDデータからAIで結晶構造の候補を提案するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// AIプロバイダ (gemini/claude)
    #[arg(long, value_enum, default_value_t = AiProvider::Gemini, global = true)]
    pub ai_provider: AiProvider,
}

#[derive(Subcommand)]
pub enum Commands {
    /// XRDデータファイルを解析して結晶構造の候補を表示
    Analyze {
        /// XRDデータファイル (.raw/.rd/.txt/.csv/.cif)
        file: Option<PathBuf>,

        /// 元素プロファイル（例: "Ti, O"）
        #[arg(short, long)]
        element_profile: Option<String>,

        /// 結果の出力先（ファイルまたはディレクトリ）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (json/excel/both)
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,

        /// モデル名（設定ファイルの値を上書き）
        #[arg(long)]
        model: Option<String>,
    },

    /// 保存済みの候補JSONをJSON/Excelに書き出し
    Export {
        /// 入力JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力形式 (json/excel/both)
        #[arg(short, long, default_value = "excel")]
        format: ExportFormat,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 既定モデルを設定
        #[arg(long)]
        set_model: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Json,
    Excel,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use json, excel, or both", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("XLSX".parse::<ExportFormat>().unwrap(), ExportFormat::Excel);
        assert_eq!("both".parse::<ExportFormat>().unwrap(), ExportFormat::Both);
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_parse_analyze_without_file() {
        let cli = Cli::try_parse_from(["xrd-match", "analyze", "-e", "Fe"]).unwrap();
        match cli.command {
            Commands::Analyze { file, element_profile, .. } => {
                assert!(file.is_none());
                assert_eq!(element_profile.as_deref(), Some("Fe"));
            }
            _ => panic!("expected analyze"),
        }
        assert_eq!(cli.ai_provider, AiProvider::Gemini);
    }

    #[test]
    fn test_parse_provider_and_format() {
        let cli = Cli::try_parse_from([
            "xrd-match", "--ai-provider", "claude", "analyze", "scan.txt", "-f", "both",
        ])
        .unwrap();
        assert_eq!(cli.ai_provider, AiProvider::Claude);
        match cli.command {
            Commands::Analyze { file, format, .. } => {
                assert_eq!(file, Some(PathBuf::from("scan.txt")));
                assert_eq!(format, ExportFormat::Both);
            }
            _ => panic!("expected analyze"),
        }
    }
}
