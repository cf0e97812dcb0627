//! Claude CLI連携モジュール
//!
//! ローカルの `claude` コマンドの標準入力にプロンプトを流し、標準出力をレスポンスとして扱う。
//! XRDデータ全体がプロンプトに入るため、コマンドライン引数には載せない。

use super::StructureModel;
use crate::error::{XrdMatchError, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

#[derive(Debug, Default)]
pub struct ClaudeCli;

impl ClaudeCli {
    pub fn new() -> Self {
        Self
    }

    fn command() -> Command {
        // Windowsではcmd /c経由
        #[cfg(windows)]
        {
            let mut cmd = Command::new("cmd");
            cmd.args(["/c", "claude", "-p", "--output-format", "text"]);
            cmd
        }

        #[cfg(not(windows))]
        {
            let mut cmd = Command::new("claude");
            cmd.args(["-p", "--output-format", "text"]);
            cmd
        }
    }
}

#[async_trait]
impl StructureModel for ClaudeCli {
    async fn generate(&self, prompt: &str) -> Result<String> {
        tracing::debug!(prompt_chars = prompt.len(), "Claude CLI呼び出し");

        let mut child = Self::command()
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| XrdMatchError::CliExecution(format!("Claude CLI実行エラー: {}", e)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| XrdMatchError::CliExecution("Claude CLIの標準入力を開けません".into()))?;

        // 書き込みと出力の読み取りを並行させる（パイプ詰まり防止）
        let write = async move {
            let result = stdin.write_all(prompt.as_bytes()).await;
            drop(stdin);
            result
        };
        let (write_result, output) = tokio::join!(write, child.wait_with_output());

        let output = output
            .map_err(|e| XrdMatchError::CliExecution(format!("Claude CLI実行エラー: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(XrdMatchError::ApiCall(format!(
                "Claude CLI failed (code {:?}): {}",
                output.status.code(),
                stderr
            )));
        }

        write_result.map_err(|e| {
            XrdMatchError::CliExecution(format!("Claude CLIへのプロンプト送信に失敗: {}", e))
        })?;

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
