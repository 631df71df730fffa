use std::io;

/// Builder for multi-line script text assembled from single-line fragments.
///
/// Invariants:
/// - Each pushed line must not contain `\n`, `\r`, or `\0`.
/// - `build_lf()` joins lines with `\n` and ensures a trailing `\n` when non-empty.
#[derive(Debug, Default)]
pub struct TextLines<'a> {
    lines: Vec<&'a str>,
}

impl<'a> TextLines<'a> {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Push one logical line (no embedded CR/LF/NUL).
    pub fn push(&mut self, line: &'a str) -> &mut Self {
        self.lines.push(line);
        self
    }

    pub fn extend<I>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.lines.extend(lines);
        self
    }

    pub fn build_lf(&self) -> io::Result<String> {
        if let Some(i) = self.lines.iter().position(|l| super::is_multiline(l)) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("script line {i} contains a newline or NUL; use atomic lines"),
            ));
        }

        if self.lines.is_empty() {
            return Ok(String::new());
        }

        let mut out = self.lines.join("\n");
        out.push('\n');

        debug_assert!(!out.contains('\0'));
        Ok(out)
    }
}
