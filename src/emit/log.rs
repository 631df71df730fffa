//! FlightStream log handling.

use std::path::Path;

use crate::errors::ValidationError;
use crate::script::Script;
use crate::values::path_arg;

impl Script {
    pub fn clear_log(&mut self) -> Result<&mut Self, ValidationError> {
        self.command("Clear the log", "CLEAR_LOG")
    }

    /// Write the current settings and solver status to `path`.
    pub fn output_settings_and_status(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("output_filename", path.as_ref())?;
        self.block(
            "Output settings and status",
            ["OUTPUT_SETTINGS_AND_STATUS".to_string(), path],
        )
    }

    pub fn export_log(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, ValidationError> {
        let path = path_arg("log_filepath", path.as_ref())?;
        self.block("Export the log", ["EXPORT_LOG".to_string(), path])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_commands() {
        let mut s = Script::with_banners(false);
        s.clear_log().unwrap();
        s.output_settings_and_status("status.txt").unwrap();
        s.export_log("log.txt").unwrap();
        assert_eq!(
            s.lines(),
            [
                "CLEAR_LOG",
                "OUTPUT_SETTINGS_AND_STATUS",
                "status.txt",
                "EXPORT_LOG",
                "log.txt"
            ]
        );
        assert!(s.export_log("").is_err());
    }
}
