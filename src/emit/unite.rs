//! Boolean unite of mesh and geometry bodies.

use std::path::Path;

use crate::errors::ValidationError;
use crate::options::VolumeType;
use crate::script::Script;
use crate::values::{path_arg, require_positive_index};

/// Bodies taking part in a unite: all positive-volume bodies, or an explicit
/// list of `(index, volume sense)` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UniteBodies {
    #[default]
    All,
    List(Vec<(u32, VolumeType)>),
}

impl UniteBodies {
    /// Count line followed by one `index TYPE` line per listed body.
    fn lines(&self, keyword: &str) -> Result<Vec<String>, ValidationError> {
        match self {
            UniteBodies::All => Ok(vec![format!("{keyword} -1")]),
            UniteBodies::List(bodies) => {
                if bodies.is_empty() {
                    return Err(ValidationError::invalid(
                        "bodies",
                        "must list at least one body",
                    ));
                }
                let mut out = vec![format!("{keyword} {}", bodies.len())];
                for &(index, volume) in bodies {
                    require_positive_index("bodies", index)?;
                    out.push(format!("{index} {volume}"));
                }
                Ok(out)
            }
        }
    }
}

fn openvsp_line(path: &Path) -> Result<String, ValidationError> {
    let path = path_arg("openvsp_path", path)?;
    Ok(format!("OPENVSP_PATH \"{path}\""))
}

impl Script {
    pub fn boolean_unite_mesh(
        &mut self,
        bodies: &UniteBodies,
    ) -> Result<&mut Self, ValidationError> {
        let lines = bodies.lines("BOOLEAN_UNITE_MESH")?;
        self.block("Unite a selection of mesh bodies", lines)
    }

    /// Point the unite tools at an OpenVSP executable.
    pub fn boolean_unite_path(
        &mut self,
        openvsp: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        let line = openvsp_line(openvsp.as_ref())?;
        self.block(
            "Specify the OpenVSP path for the Unite function",
            ["BOOLEAN_UNITE_PATH".to_string(), line],
        )
    }

    pub fn boolean_unite_geometry(
        &mut self,
        bodies: &UniteBodies,
        openvsp: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        let mut lines = vec!["BOOLEAN_UNITE_GEOMETRY".to_string()];
        lines.extend(bodies.lines("BODIES")?);
        lines.push(openvsp_line(openvsp.as_ref())?);
        self.block("Boolean unite a selection of geometry bodies", lines)
    }
}
