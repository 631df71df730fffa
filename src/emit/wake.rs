//! Trailing-edge and wake-termination marking.

use std::path::Path;

use crate::errors::ValidationError;
use crate::script::Script;
use crate::values::{
    join_indices, path_with_extension, require_positive_index, validate_indices,
};

/// Which auto-detection tools a `PHYSICS` block launches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicsDetection {
    pub trailing_edges: bool,
    pub wake_nodes: bool,
    /// Close the block with `END`.
    pub end: bool,
}

impl Default for PhysicsDetection {
    fn default() -> Self {
        Self {
            trailing_edges: false,
            wake_nodes: false,
            end: true,
        }
    }
}

impl Script {
    pub fn physics(&mut self, detection: PhysicsDetection) -> Result<&mut Self, ValidationError> {
        let mut lines = vec!["PHYSICS".to_string()];
        if detection.trailing_edges {
            lines.push("AUTO_TRAIL_EDGES".to_string());
        }
        if detection.wake_nodes {
            lines.push("AUTO_WAKE_NODES".to_string());
        }
        if detection.end {
            lines.push("END".to_string());
        }
        self.block("Set the physics conditions if needed", lines)
    }

    pub fn detect_trailing_edges_by_surface(
        &mut self,
        surfaces: &[u32],
    ) -> Result<&mut Self, ValidationError> {
        validate_indices("surfaces", surfaces)?;
        self.block(
            "Detect Trailing Edges by Surface",
            [
                "DETECT_TRAILING_EDGES_BY_SURFACE".to_string(),
                format!("SURFACES {}", surfaces.len()),
                join_indices(surfaces),
            ],
        )
    }

    /// Import trailing-edge marking from a `.txt` file.
    pub fn trailing_edges_import(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_with_extension("file_path", path.as_ref(), &["txt"])?;
        self.block(
            "Import custom trailing edge marking from file",
            ["TRAILING_EDGES_IMPORT".to_string(), format!("\"{path}\"")],
        )
    }

    pub fn detect_wake_termination_nodes_by_surface(
        &mut self,
        surface: u32,
    ) -> Result<&mut Self, ValidationError> {
        require_positive_index("surface_id", surface)?;
        self.command(
            "Detect wake termination nodes by surface",
            format!("DETECT_WAKE_TERMINATION_NODES_BY_SURFACE {surface}"),
        )
    }
}
