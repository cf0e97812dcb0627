use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use xrd_match::{analyzer, cli, config, error, export, intake, report};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        if e.is_no_file_selected() {
            eprintln!("✖ {}", e);
        } else {
            tracing::debug!(error = ?e, "解析に失敗");
            eprintln!("✖ An error occurred while analyzing the XRD data: {}", e);
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("xrd_match={0},xrd_match_common={0}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze { file, element_profile, output, format, model } => {
            println!("🔬 xrd-match - XRD structure analysis\n");

            // 1. ファイル読み込み（未指定ならAIを呼ぶ前にエラー）
            println!("[1/3] Reading XRD data...");
            let file_content = file
                .as_deref()
                .map(intake::read_file_content)
                .transpose()?
                .ok_or(xrd_match_common::Error::NoFileSelected)?;
            println!("✔ {} ({} chars)\n", file_content.filename, file_content.data.chars().count());

            let mut config = Config::load()?;
            if let Some(model) = model {
                config.model = model;
            }

            // 2. AI解析（1回だけ呼び出す）
            println!("[2/3] Asking {} for structure matches...", cli.ai_provider);
            let model = analyzer::build_model(cli.ai_provider, &config)?;
            let spinner = spinner("Analyzing...");
            let result = analyzer::suggest_structures(
                model.as_ref(),
                Some(file_content),
                element_profile.as_deref(),
            )
            .await;
            spinner.finish_and_clear();
            let matches = result?;
            println!("✔ {} candidate(s)\n", matches.len());

            // 3. 結果表示・保存
            println!("[3/3] Suggested crystal structures\n");
            print!("{}", report::render_matches_table(&matches));

            if let Some(output) = output {
                let written = export::export_results(&matches, &format, &output)?;
                println!();
                for path in written {
                    println!("✔ Saved: {}", path.display());
                }
            }
        }

        Commands::Export { input, format, output } => {
            println!("📄 xrd-match - export\n");

            let matches = export::json::read_json(&input)?;
            let output = output.unwrap_or_else(|| {
                input.parent().map(|p| p.to_path_buf()).unwrap_or_else(|| ".".into())
            });

            for path in export::export_results(&matches, &format, &output)? {
                println!("✔ Saved: {}", path.display());
            }
        }

        Commands::Config { set_api_key, set_model, show } => {
            let mut config = Config::load()?;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ API key saved");
            }

            if let Some(model) = set_model {
                config.set_model(model)?;
                println!("✔ Model saved");
            }

            if show {
                println!("Settings:");
                println!("  Path: {}", Config::config_path()?.display());
                println!("  Model: {}", config.model);
                println!("  API base URL: {}", config.api_base_url);
                println!("  Temperature: {}", config.temperature);
                println!("  Timeout: {}s", config.timeout_seconds);
                println!("  API key: {}", if config.get_api_key().is_ok() { "set" } else { "not set" });
            }
        }
    }

    Ok(())
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} ({elapsed})") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
