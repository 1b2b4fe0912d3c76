// src/output/clipboard.rs
//! Clipboard delivery: arboard first, then the platform's copy command.

use crate::error::AppError;
use std::io::Write;
use std::process::{Command, Stdio};

/// Copies content to the system clipboard.
pub fn copy_to_clipboard(content: &str) -> Result<(), AppError> {
    log::debug!("Copying {} bytes to clipboard", content.len());

    match try_arboard_clipboard(content) {
        Ok(()) => return Ok(()),
        Err(e) => log::debug!("arboard failed: {}, trying platform command", e),
    }

    let (program, args) = platform_command()?;
    pipe_to_command(program, args, content)
}

fn try_arboard_clipboard(content: &str) -> Result<(), AppError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(content)?;
    Ok(())
}

const NO_ARGS: &[&str] = &[];
const XCLIP_ARGS: &[&str] = &["-selection", "clipboard"];

/// The copy command for this platform and session type.
fn platform_command() -> Result<(&'static str, &'static [&'static str]), AppError> {
    if cfg!(target_os = "macos") {
        Ok(("pbcopy", NO_ARGS))
    } else if cfg!(target_os = "windows") {
        Ok(("clip", NO_ARGS))
    } else if cfg!(target_os = "linux") {
        let is_wayland = std::env::var("WAYLAND_DISPLAY").is_ok()
            || std::env::var("XDG_SESSION_TYPE").is_ok_and(|s| s == "wayland");
        if is_wayland {
            Ok(("wl-copy", NO_ARGS))
        } else {
            Ok(("xclip", XCLIP_ARGS))
        }
    } else {
        Err(AppError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

/// Runs `program`, writing `content` to its stdin.
fn pipe_to_command(program: &str, args: &[&str], content: &str) -> Result<(), AppError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| AppError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(content.as_bytes())
            .map_err(|e| AppError::Clipboard(format!("Failed to write to {}: {}", program, e)))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| AppError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(AppError::Clipboard(format!("{} failed: {}", program, stderr)))
    }
}
