use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum AiProvider {
    /// Gemini API（HTTP）
    #[default]
    Gemini,
    /// Claude CLI（ローカルの `claude` コマンド）
    Claude,
}

impl AiProvider {
    pub fn name(&self) -> &'static str {
        match self {
            AiProvider::Gemini => "gemini",
            AiProvider::Claude => "claude",
        }
    }
}

impl std::fmt::Display for AiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
