//! The script buffer: an ordered, append-only list of macro lines that is
//! rendered to a file FlightStream can execute.
//!
//! Every emitter funnels through [`Script::emit`], which checks all lines
//! before touching the buffer, so a failed call never leaves a half-written
//! command behind.

use std::fmt;
use std::path::Path;

#[cfg(feature = "trace")]
use tracing::instrument;

use crate::errors::{ScriptError, ValidationError};
use crate::util::{self, TextLines};

/// File name used when no script path is configured.
pub const DEFAULT_SCRIPT_NAME: &str = "script_out.txt";

const BANNER_WIDTH: usize = 72;

/// Ordered buffer of script lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    lines: Vec<String>,
    banners: bool,
}

impl Default for Script {
    fn default() -> Self {
        Self::new()
    }
}

impl Script {
    /// Empty script that prefixes each command block with a comment banner.
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            banners: true,
        }
    }

    /// Empty script; `false` emits command lines only.
    pub fn with_banners(banners: bool) -> Self {
        Self {
            lines: Vec::new(),
            banners,
        }
    }

    pub fn banners(&self) -> bool {
        self.banners
    }

    pub fn set_banners(&mut self, banners: bool) -> &mut Self {
        self.banners = banners;
        self
    }

    /// Append one raw line.
    pub fn push(&mut self, line: impl Into<String>) -> Result<&mut Self, ValidationError> {
        let line = line.into();
        check_line(&line)?;
        self.lines.push(line);
        Ok(self)
    }

    /// Alias of [`Script::push`].
    pub fn append(&mut self, line: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.push(line)
    }

    /// Append several raw lines in order; nothing is appended if any is invalid.
    pub fn extend<I, S>(&mut self, lines: I) -> Result<&mut Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        for l in &lines {
            check_line(l)?;
        }
        self.lines.extend(lines);
        Ok(self)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Owned copy of the current lines.
    pub fn snapshot(&self) -> Vec<String> {
        self.lines.clone()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines joined by `\n`, without a trailing newline.
    pub fn display(&self) -> String {
        self.lines.join("\n")
    }

    /// File contents: one line per entry, each `\n` terminated.
    pub fn render(&self) -> String {
        let mut text = TextLines::new();
        text.extend(self.lines.iter().map(String::as_str));
        // Lines are checked on entry, so this cannot fail.
        text.build_lf().unwrap_or_default()
    }

    /// Append a command block (banner unless disabled, then `lines`) in one step.
    pub(crate) fn emit<I>(&mut self, title: &str, lines: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = String>,
    {
        let lines: Vec<String> = lines.into_iter().collect();
        for l in &lines {
            check_line(l)?;
        }
        if self.banners {
            self.lines.extend(banner(title));
        }
        self.lines.extend(lines);
        Ok(())
    }

    /// Write the buffer to `path`, replacing any existing file. The buffer is left as is.
    #[cfg_attr(
        feature = "trace",
        instrument(
            level = "debug",
            err,
            skip(self, path),
            fields(
                flightscript_path = %path.as_ref().display(),
                flightscript_lines = self.lines.len()
            )
        )
    )]
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), ScriptError> {
        let path = path.as_ref();
        util::fs::atomic_write(path, self.render().as_bytes())
            .map_err(|e| ScriptError::io(path, e))
    }

    /// Clear the buffer and delete `path`. A missing file is not an error.
    #[cfg_attr(
        feature = "trace",
        instrument(
            level = "debug",
            err,
            skip(self, path),
            fields(flightscript_path = %path.as_ref().display())
        )
    )]
    pub fn hard_reset(&mut self, path: impl AsRef<Path>) -> Result<(), ScriptError> {
        let path = path.as_ref();
        self.lines.clear();
        util::fs::remove_if_exists(path)
            .map(|_| ())
            .map_err(|e| ScriptError::io(path, e))
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

fn check_line(line: &str) -> Result<(), ValidationError> {
    util::reject_newlines(line, "line")
        .map_err(|_| ValidationError::invalid("line", "must not contain a newline or NUL"))
}

/// The four-line comment block that introduces each command.
pub fn banner(title: &str) -> [String; 4] {
    let rule = format!("#{}", "*".repeat(BANNER_WIDTH - 1));
    let heading = format!("#{:*^width$}", format!(" {title} "), width = BANNER_WIDTH - 1);
    [rule.clone(), heading, rule, "#".to_string()]
}
