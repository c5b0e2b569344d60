//! Where rendered reports go.
//!
//! A report is written either to stdout or to a file. Whether stdout is an
//! interactive terminal decides what `--output auto` means.

use crate::reports::ReportFormat;
use anyhow::{Context, Result};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

/// Report destination selected by `--output-file`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// True only for stdout attached to a terminal.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }

    /// Concrete format for this destination: `auto` becomes the dashboard on
    /// a terminal and a plain summary anywhere else.
    #[must_use]
    pub fn resolve(&self, format: ReportFormat) -> ReportFormat {
        if format != ReportFormat::Auto {
            return format;
        }
        if self.is_terminal() {
            ReportFormat::Tui
        } else {
            ReportFormat::Summary
        }
    }
}

/// Resolve `auto` against the output target.
#[must_use]
pub fn auto_detect_format(format: ReportFormat, target: &OutputTarget) -> ReportFormat {
    target.resolve(format)
}

/// Color is on unless `--no-color` is given or `NO_COLOR` is set.
#[must_use]
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var_os("NO_COLOR").is_none()
}

/// Write a rendered report.
///
/// Missing parent directories of a file target are created.
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    let OutputTarget::File(path) = target else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        if !content.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        return stdout.flush().context("failed to flush stdout");
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("cannot write report to {}", path.display()))?;
    if !quiet {
        tracing::info!(bytes = content.len(), "Report written to {}", path.display());
    }
    Ok(())
}
