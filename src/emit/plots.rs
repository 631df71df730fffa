use std::path::Path;

use crate::errors::ValidationError;
use crate::options::PlotType;
use crate::script::Script;
use crate::values::path_arg;

impl Script {
    pub fn set_plot_type(&mut self, plot_type: PlotType) -> Result<&mut Self, ValidationError> {
        self.block(
            "Set the plot type",
            ["SET_PLOT_TYPE".to_string(), plot_type.to_string()],
        )
    }

    /// Save the plot currently shown to a text file.
    pub fn save_plot_to_file(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("filename", path.as_ref())?;
        self.block(
            "Save the current plot to file",
            ["SAVE_PLOT_TO_FILE".to_string(), path],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_type_then_save() {
        let mut s = Script::with_banners(false);
        s.set_plot_type(PlotType::ClAxisX)
            .unwrap()
            .save_plot_to_file("cl.txt")
            .unwrap();
        assert_eq!(
            s.lines(),
            ["SET_PLOT_TYPE", "CL_AXIS_X", "SAVE_PLOT_TO_FILE", "cl.txt"]
        );
    }
}
