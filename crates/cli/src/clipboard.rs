use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use rarsift_core::{Clipboard, ClipboardError};

/// System clipboard reached through the platform's copy utility.
/// - macOS: pbcopy
/// - Linux: xclip, falling back to xsel
/// - Windows: clip.exe
pub struct SystemClipboard;

#[cfg(target_os = "macos")]
const COPY_TOOLS: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "linux")]
const COPY_TOOLS: &[(&str, &[&str])] = &[
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(target_os = "windows")]
const COPY_TOOLS: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const COPY_TOOLS: &[(&str, &[&str])] = &[];

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        copy_with_fallback(COPY_TOOLS, text)
    }
}

/// Try each tool in order and stop at the first that succeeds.
/// Returns the last tool's error if none works.
fn copy_with_fallback(tools: &[(&str, &[&str])], text: &str) -> Result<(), ClipboardError> {
    let mut last_error = ClipboardError::Unavailable(
        "clipboard not supported on this platform".to_string(),
    );

    for (tool, args) in tools {
        match pipe_to(tool, args, text) {
            Ok(()) => return Ok(()),
            Err(e) => {
                debug!(tool, error = %e, "Clipboard tool failed");
                last_error = e;
            }
        }
    }

    Err(last_error)
}

/// Spawn `tool`, feed `text` on stdin and wait for it to exit.
/// A spawn failure means the tool is missing and maps to `Unavailable`.
fn pipe_to(tool: &str, args: &[&str], text: &str) -> Result<(), ClipboardError> {
    let mut child = Command::new(tool)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ClipboardError::Unavailable(format!("failed to spawn {}: {}", tool, e)))?;

    // stdin is dropped before waiting so the tool sees EOF
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    let status = child
        .wait()
        .map_err(|e| ClipboardError::Failed(format!("failed to wait for {}: {}", tool, e)))?;

    written.map_err(|e| ClipboardError::Failed(format!("failed to write to {}: {}", tool, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::Failed(format!("{} exited with {}", tool, status)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINK: &str = "magnet:?xt=urn:btih:abc";

    #[test]
    fn test_missing_tool_is_unavailable() {
        let result = pipe_to("rarsift-no-such-clipboard-tool", &[], LINK);
        assert!(matches!(result, Err(ClipboardError::Unavailable(_))));
    }

    #[test]
    fn test_no_tools_is_unavailable() {
        let result = copy_with_fallback(&[], LINK);
        assert!(matches!(result, Err(ClipboardError::Unavailable(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_tool_is_reaped_and_reported() {
        let result = pipe_to("false", &[], LINK);
        match result {
            Err(ClipboardError::Failed(message)) => assert!(message.contains("false")),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_falls_back_after_failing_tool() {
        let tools: &[(&str, &[&str])] = &[
            ("rarsift-no-such-clipboard-tool", &[]),
            ("false", &[]),
            ("cat", &[]),
        ];
        assert!(copy_with_fallback(tools, LINK).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_all_tools_failing_returns_last_error() {
        let tools: &[(&str, &[&str])] = &[("rarsift-no-such-clipboard-tool", &[]), ("false", &[])];
        assert!(matches!(
            copy_with_fallback(tools, LINK),
            Err(ClipboardError::Failed(_))
        ));
    }
}
