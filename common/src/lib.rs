//! XRD Match Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod prompts;
pub mod parser;
pub mod analyzer;
pub mod gemini;
pub mod view;
pub mod export;

pub use types::{FileContent, StructureMatch, SuggestStructuresInput, SuggestStructuresOutput};
pub use error::{Error, Result};
pub use prompts::{build_suggest_prompt, suggest_output_schema, ACCEPTED_EXTENSIONS};
pub use parser::{extract_json, parse_suggest_response, validate_matches};
pub use analyzer::{is_accepted_file, prepare_suggest_input};
pub use gemini::{GeminiRequest, GeminiResponse};
pub use view::{format_confidence, match_rows, MatchRow, TABLE_HEADERS};
pub use export::{to_export_json, EXPORT_FILE_NAME};
