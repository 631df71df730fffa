#![allow(clippy::module_name_repetitions)]
//! Small utilities: line checks, script text assembly, atomic file replacement.

pub mod exec;
pub mod fs;
pub mod text_lines;

pub use text_lines::TextLines;

/// True when `s` would not survive as a single script line.
pub fn is_multiline(s: &str) -> bool {
    s.contains('\n') || s.contains('\r') || s.contains('\0')
}

/// Reject strings containing newline, carriage return, or NUL before they become a script line.
///
/// The message is shown to users as is.
pub fn reject_newlines(s: &str, what: &str) -> Result<(), String> {
    if is_multiline(s) {
        Err(format!("refusing to write {what}: contains newline"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_newlines_variants() {
        assert!(reject_newlines("OPEN", "line").is_ok());
        assert_eq!(
            reject_newlines("a\nb", "line").unwrap_err(),
            "refusing to write line: contains newline"
        );
        assert!(reject_newlines("a\rb", "line").is_err());
        assert!(reject_newlines("a\0b", "line").is_err());
    }
}
