//! Log file location, colour stripping, and UTC timestamps.
use std::path::PathBuf;

/// Timestamp format of the log file header.
pub(super) const HEADER_STAMP: &str = "%Y-%m-%dT%H:%M:%SZ";
/// Timestamp format of each log file line.
pub(super) const LINE_STAMP: &str = "%H:%M:%S";

/// Remove SGR colour sequences (`ESC [ <digits;...> m`).
///
/// These are the only escapes the logger emits; any other escape is kept.
pub(super) fn strip_sgr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find("\x1b[") {
        let (plain, escape) = rest.split_at(pos);
        out.push_str(plain);
        let params = escape.get(2..).unwrap_or_default();
        let end = params
            .find(|c: char| !(c.is_ascii_digit() || c == ';'))
            .unwrap_or(params.len());
        match params.get(end..).and_then(|tail| tail.strip_prefix('m')) {
            Some(tail) => rest = tail,
            None => {
                out.push_str("\x1b[");
                rest = params;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Directory holding run logs: `$XDG_CACHE_HOME/project-setup`, else
/// `$HOME/.cache/project-setup`.  Created on first use.
fn log_dir() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CACHE_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".cache")))?;
    let dir = base.join("project-setup");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Log file for `command`, one file per command, overwritten each run.
pub(super) fn log_file_path(command: &str) -> Option<PathBuf> {
    log_dir().map(|dir| dir.join(format!("{command}.log")))
}

/// Current UTC time rendered with a `chrono` format string.
pub(super) fn utc_now(format: &str) -> String {
    chrono::Utc::now().format(format).to_string()
}
