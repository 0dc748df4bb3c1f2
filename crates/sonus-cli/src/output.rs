//! Command results and the adapter that turns them into process output.
//!
//! Every command returns `anyhow::Result<CommandOutput>`. [`finish`] prints
//! the result (plain lines or a JSON document) on stdout and maps it to the
//! process exit status: 0 on success, 1 on any error. Error kinds are not
//! distinguished beyond their message.

use std::path::PathBuf;
use std::process::ExitCode;

use serde::Serialize;
use sonus_audio::FileDetails;
use sonus_text::WordAlignment;

/// Result of a successful command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    /// Nothing to print
    Empty,
    /// File metadata, one `key:value` line per field
    Details(FileDetails),
    /// Written chunk paths, one per line
    Chunks(Vec<PathBuf>),
    /// Word error rate percentage
    Wer(WerReport),
}

/// Word error rate with optional edit counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WerReport {
    /// WER as a percentage
    pub wer: f64,
    /// Edit counts, when requested
    #[serde(flatten)]
    pub measures: Option<WordAlignment>,
}

impl CommandOutput {
    /// Plain-text lines for stdout.
    pub fn text_lines(&self) -> Vec<String> {
        match self {
            CommandOutput::Empty => Vec::new(),
            CommandOutput::Details(details) => details
                .entries()
                .into_iter()
                .map(|(key, value)| format!("{}:{}", key, value))
                .collect(),
            CommandOutput::Chunks(paths) => {
                paths.iter().map(|p| p.display().to_string()).collect()
            }
            CommandOutput::Wer(report) => {
                let mut lines = vec![format!("{:?}", report.wer)];
                if let Some(m) = &report.measures {
                    lines.push(format!("hits:{}", m.hits));
                    lines.push(format!("substitutions:{}", m.substitutions));
                    lines.push(format!("deletions:{}", m.deletions));
                    lines.push(format!("insertions:{}", m.insertions));
                }
                lines
            }
        }
    }
}

/// JSON document printed with `--json`.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    /// Whether the command succeeded
    pub success: bool,
    /// Command result on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<&'a CommandOutput>,
    /// Error message on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> JsonOutput<'a> {
    /// Creates a success document.
    pub fn success(result: &'a CommandOutput) -> Self {
        Self {
            success: true,
            result: match result {
                CommandOutput::Empty => None,
                other => Some(other),
            },
            error: None,
        }
    }

    /// Creates a failure document.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(message.into()),
        }
    }
}

/// Render a command result to stdout text and an exit code.
pub fn render(result: &anyhow::Result<CommandOutput>, json: bool) -> (String, ExitCode) {
    match result {
        Ok(output) => {
            let text = if json {
                to_json(&JsonOutput::success(output))
            } else {
                output.text_lines().join("\n")
            };
            (text, ExitCode::SUCCESS)
        }
        Err(e) => (render_error(&format!("{:#}", e), json), ExitCode::from(1)),
    }
}

/// Render an error message for stdout.
pub fn render_error(message: &str, json: bool) -> String {
    if json {
        to_json(&JsonOutput::failure(message))
    } else {
        message.to_string()
    }
}

/// Print a command result and return the process exit code.
pub fn finish(result: anyhow::Result<CommandOutput>, json: bool) -> ExitCode {
    if let Err(e) = &result {
        log::debug!("Command failed: {:?}", e);
    }

    let (text, code) = render(&result, json);
    if !text.is_empty() {
        println!("{}", text);
    }
    code
}

fn to_json(value: &JsonOutput<'_>) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        format!(
            "{{\"success\": false, \"error\": \"failed to serialize output: {}\"}}",
            e
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_chunks_text() {
        let output = CommandOutput::Chunks(vec![
            PathBuf::from("/tmp/1_a_chunk_1.wav"),
            PathBuf::from("/tmp/1_a_chunk_2.wav"),
        ]);
        let (text, code) = render(&Ok(output), false);
        assert_eq!(text, "/tmp/1_a_chunk_1.wav\n/tmp/1_a_chunk_2.wav");
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_render_empty_text() {
        let (text, code) = render(&Ok(CommandOutput::Empty), false);
        assert_eq!(text, "");
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_render_wer_text_with_measures() {
        let output = CommandOutput::Wer(WerReport {
            wer: 25.0,
            measures: Some(WordAlignment {
                hits: 3,
                substitutions: 0,
                deletions: 1,
                insertions: 0,
            }),
        });
        assert_eq!(
            output.text_lines(),
            vec!["25.0", "hits:3", "substitutions:0", "deletions:1", "insertions:0"]
        );
    }

    #[test]
    fn test_render_error_text() {
        let result: anyhow::Result<CommandOutput> = Err(anyhow::anyhow!("boom"));
        let (text, code) = render(&result, false);
        assert_eq!(text, "boom");
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn test_render_error_includes_context_chain() {
        let result: anyhow::Result<CommandOutput> =
            Err(anyhow::anyhow!("no such file").context("failed to read 'x.wav'"));
        let (text, _) = render(&result, false);
        assert_eq!(text, "failed to read 'x.wav': no such file");
    }

    #[test]
    fn test_render_json_success_and_failure() {
        let ok = CommandOutput::Wer(WerReport {
            wer: 0.0,
            measures: None,
        });
        let (text, _) = render(&Ok(ok), true);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["result"]["wer"], 0.0);
        assert!(value["result"].get("hits").is_none());

        let (text, code) = render(&Err(anyhow::anyhow!("bad input")), true);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "bad input");
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn test_render_json_empty_omits_result() {
        let (text, _) = render(&Ok(CommandOutput::Empty), true);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["success"], true);
        assert!(value.get("result").is_none());
    }
}
