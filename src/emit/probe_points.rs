//! Flow-field probe points and survey lines.

use std::path::Path;

use crate::errors::ValidationError;
use crate::options::{LengthUnits, ProbeType};
use crate::script::Script;
use crate::values::{path_arg, require_finite_vertex, require_positive_index, Vertex};

impl Script {
    pub fn new_probe_point(
        &mut self,
        kind: ProbeType,
        position: impl Into<Vertex>,
    ) -> Result<&mut Self, ValidationError> {
        let position = position.into();
        require_finite_vertex("position", position)?;
        self.command(
            "Create a new probe point",
            format!("NEW_PROBE_POINT {kind} {position}"),
        )
    }

    /// Place `points` probes evenly along the segment `start`..`end`.
    pub fn new_probe_line(
        &mut self,
        points: u32,
        start: impl Into<Vertex>,
        end: impl Into<Vertex>,
    ) -> Result<&mut Self, ValidationError> {
        let (start, end) = (start.into(), end.into());
        require_positive_index("num_points", points)?;
        require_finite_vertex("start", start)?;
        require_finite_vertex("end", end)?;
        self.command(
            "Create a new probe survey line",
            format!("NEW_PROBE_LINE {points} {start} {end}"),
        )
    }

    pub fn update_probe_points(&mut self) -> Result<&mut Self, ValidationError> {
        self.command("Update probe point flow properties", "UPDATE_PROBE_POINTS")
    }

    pub fn probe_points_import(
        &mut self,
        path: impl AsRef<Path>,
        units: LengthUnits,
        frame: u32,
    ) -> Result<&mut Self, ValidationError> {
        require_positive_index("frame", frame)?;
        let path = path_arg("filepath", path.as_ref())?;
        self.block(
            "Import probe points from file",
            [
                "PROBE_POINTS_IMPORT".to_string(),
                format!("UNITS {units}"),
                format!("FRAME {frame}"),
                path,
            ],
        )
    }

    pub fn export_probe_points(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("filepath", path.as_ref())?;
        self.block(
            "Export probe points to file",
            ["EXPORT_PROBE_POINTS".to_string(), path],
        )
    }

    pub fn delete_probe_points(&mut self) -> Result<&mut Self, ValidationError> {
        self.command("Delete all existing probe points", "DELETE_PROBE_POINTS")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_workflow() {
        let mut s = Script::with_banners(false);
        s.new_probe_point(ProbeType::Volume, (1.0, 0.0, 0.5))
            .unwrap()
            .new_probe_line(10, (0.0, -1.0, 0.0), (0.0, 1.0, 0.0))
            .unwrap()
            .probe_points_import("points.txt", LengthUnits::Meter, 2)
            .unwrap()
            .update_probe_points()
            .unwrap()
            .export_probe_points("probes.txt")
            .unwrap()
            .delete_probe_points()
            .unwrap();
        assert_eq!(
            s.lines(),
            [
                "NEW_PROBE_POINT VOLUME 1.0 0.0 0.5",
                "NEW_PROBE_LINE 10 0.0 -1.0 0.0 0.0 1.0 0.0",
                "PROBE_POINTS_IMPORT",
                "UNITS METER",
                "FRAME 2",
                "points.txt",
                "UPDATE_PROBE_POINTS",
                "EXPORT_PROBE_POINTS",
                "probes.txt",
                "DELETE_PROBE_POINTS"
            ]
        );
    }

    #[test]
    fn invalid_probes_append_nothing() {
        let mut s = Script::with_banners(false);
        assert!(s
            .new_probe_point(ProbeType::Surface, (f64::NAN, 0.0, 0.0))
            .is_err());
        let err = s
            .new_probe_line(0, (0.0, 0.0, 0.0), (1.0, 0.0, 0.0))
            .unwrap_err();
        assert_eq!(err.parameter(), "num_points");
        assert!(s
            .probe_points_import("points.txt", LengthUnits::Inch, 0)
            .is_err());
        assert!(s.is_empty());
    }
}
