//! Acoustic sources, observers and signal export.

use std::path::{Path, PathBuf};

use crate::errors::ValidationError;
use crate::options::Plane;
use crate::script::Script;
use crate::values::{
    flag, path_arg, require_finite, require_finite_vertex, require_positive_index, require_text,
    Scalar, Vertex,
};

/// A planar grid of observers whose signals are written under `storage_path`.
#[derive(Debug, Clone, PartialEq)]
pub struct AcousticSection {
    pub frame: u32,
    pub plane: Plane,
    pub offset: Scalar,
    pub radial_observers: u32,
    pub azimuth_observers: u32,
    pub inner_radius: Scalar,
    pub outer_radius: Scalar,
    pub storage_path: PathBuf,
}

impl AcousticSection {
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        Self {
            frame: 1,
            plane: Plane::Xz,
            offset: Scalar::Float(-2.0),
            radial_observers: 20,
            azimuth_observers: 40,
            inner_radius: Scalar::Float(0.0),
            outer_radius: Scalar::Float(3.0),
            storage_path: storage_path.into(),
        }
    }
}

impl Script {
    /// Toggle acoustic sources during solver initialization.
    pub fn acoustic_sources(&mut self, enable: bool) -> Result<&mut Self, ValidationError> {
        self.command(
            "Enable acoustic sources during solver initialization",
            format!("ACOUSTIC_SOURCES {}", flag(enable)),
        )
    }

    pub fn create_new_acoustic_observer(
        &mut self,
        name: &str,
        position: impl Into<Vertex>,
    ) -> Result<&mut Self, ValidationError> {
        let position = position.into();
        require_text("name", name)?;
        require_finite_vertex("position", position)?;
        self.command(
            "Create new acoustic observer",
            format!("CREATE_NEW_ACOUSTIC_OBSERVER {name} {position}"),
        )
    }

    pub fn acoustic_observers_import(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("file_path", path.as_ref())?;
        self.block(
            "Import acoustic observers from file",
            ["ACOUSTIC_OBSERVERS_IMPORT".to_string(), path],
        )
    }

    pub fn delete_acoustic_observer(
        &mut self,
        observer: u32,
    ) -> Result<&mut Self, ValidationError> {
        require_positive_index("observer_index", observer)?;
        self.block(
            "Delete acoustic observer",
            ["DELETE_ACOUSTIC_OBSERVER".to_string(), observer.to_string()],
        )
    }

    pub fn delete_all_acoustic_observers(&mut self) -> Result<&mut Self, ValidationError> {
        self.command("Delete all acoustic observers", "DELETE_ALL_ACOUSTIC_OBSERVERS")
    }

    pub fn set_acoustic_observer_time(
        &mut self,
        initial_time: impl Into<Scalar>,
        final_time: impl Into<Scalar>,
        time_steps: u32,
    ) -> Result<&mut Self, ValidationError> {
        let (t0, t1) = (initial_time.into(), final_time.into());
        require_finite("initial_time", t0)?;
        require_finite("final_time", t1)?;
        require_positive_index("time_steps", time_steps)?;
        self.command(
            "Set acoustic observer time parameters",
            format!("SET_ACOUSTIC_OBSERVER_TIME {t0} {t1} {time_steps}"),
        )
    }

    pub fn compute_acoustic_signals(&mut self) -> Result<&mut Self, ValidationError> {
        self.command(
            "Compute acoustic signals at all observers",
            "COMPUTE_ACOUSTIC_SIGNALS",
        )
    }

    pub fn export_acoustic_signals(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("filename", path.as_ref())?;
        self.block(
            "Export acoustic signals at all observers to external file",
            ["EXPORT_ACOUSTIC_SIGNALS".to_string(), path],
        )
    }

    pub fn create_acoustic_section(
        &mut self,
        section: &AcousticSection,
    ) -> Result<&mut Self, ValidationError> {
        require_positive_index("frame", section.frame)?;
        require_finite("offset", section.offset)?;
        require_positive_index("radial_observers", section.radial_observers)?;
        require_positive_index("azimuth_observers", section.azimuth_observers)?;
        require_finite("inner_radius", section.inner_radius)?;
        require_finite("outer_radius", section.outer_radius)?;
        let storage = path_arg("storage_path", &section.storage_path)?;
        self.block(
            "Create & export acoustic section signals",
            [
                "CREATE_ACOUSTIC_SECTION".to_string(),
                format!("FRAME {}", section.frame),
                format!("PLANE {}", section.plane),
                format!("OFFSET {}", section.offset),
                format!("RADIAL_OBSERVERS {}", section.radial_observers),
                format!("AZIMUTH_OBSERVERS {}", section.azimuth_observers),
                format!("INNER_RADIUS {}", section.inner_radius),
                format!("OUTER_RADIUS {}", section.outer_radius),
                format!("STORAGE_PATH {storage}"),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observer_workflow() {
        let mut s = Script::with_banners(false);
        s.acoustic_sources(true)
            .unwrap()
            .create_new_acoustic_observer("Mic1", (0.0, 2.0, -1.0))
            .unwrap()
            .acoustic_observers_import("mics.txt")
            .unwrap()
            .set_acoustic_observer_time(0.0, 0.2, 300)
            .unwrap()
            .compute_acoustic_signals()
            .unwrap()
            .export_acoustic_signals("signals.txt")
            .unwrap()
            .delete_acoustic_observer(1)
            .unwrap()
            .delete_all_acoustic_observers()
            .unwrap();
        assert_eq!(
            s.lines(),
            [
                "ACOUSTIC_SOURCES True",
                "CREATE_NEW_ACOUSTIC_OBSERVER Mic1 0.0 2.0 -1.0",
                "ACOUSTIC_OBSERVERS_IMPORT",
                "mics.txt",
                "SET_ACOUSTIC_OBSERVER_TIME 0.0 0.2 300",
                "COMPUTE_ACOUSTIC_SIGNALS",
                "EXPORT_ACOUSTIC_SIGNALS",
                "signals.txt",
                "DELETE_ACOUSTIC_OBSERVER",
                "1",
                "DELETE_ALL_ACOUSTIC_OBSERVERS"
            ]
        );
    }

    #[test]
    fn section_block() {
        let mut s = Script::with_banners(false);
        s.create_acoustic_section(&AcousticSection::new("out/acoustics"))
            .unwrap();
        assert_eq!(
            s.lines(),
            [
                "CREATE_ACOUSTIC_SECTION",
                "FRAME 1",
                "PLANE XZ",
                "OFFSET -2.0",
                "RADIAL_OBSERVERS 20",
                "AZIMUTH_OBSERVERS 40",
                "INNER_RADIUS 0.0",
                "OUTER_RADIUS 3.0",
                "STORAGE_PATH out/acoustics"
            ]
        );
    }

    #[test]
    fn rejects_blank_names_and_empty_grids() {
        let mut s = Script::with_banners(false);
        assert!(s.create_new_acoustic_observer(" ", (0.0, 0.0, 0.0)).is_err());
        assert!(s.set_acoustic_observer_time(0.0, 0.2, 0).is_err());
        let empty = AcousticSection {
            radial_observers: 0,
            ..AcousticSection::new("out")
        };
        assert!(s.create_acoustic_section(&empty).is_err());
        assert!(s.is_empty());
    }
}
