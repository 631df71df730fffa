//! Propeller and jet exhaust actuator discs.

use std::path::Path;

use crate::errors::ValidationError;
use crate::options::{ActuatorType, Axis, ForceUnits, RunOption, ThrustType};
use crate::script::Script;
use crate::values::{
    path_arg, require_finite, require_positive, require_positive_index, require_text, Scalar,
};

/// Type-specific settings of `EDIT_ACTUATOR`; `None` fields are left unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActuatorSettings {
    Propeller {
        ct: Option<Scalar>,
        rpm: Option<Scalar>,
        swirl_velocity: Option<RunOption>,
    },
    JetExhaust {
        velocity: Option<Scalar>,
        density: Option<Scalar>,
        cm: Option<Scalar>,
    },
}

impl ActuatorSettings {
    pub fn kind(&self) -> ActuatorType {
        match self {
            ActuatorSettings::Propeller { .. } => ActuatorType::Propeller,
            ActuatorSettings::JetExhaust { .. } => ActuatorType::JetExhaust,
        }
    }

    fn lines(&self) -> Result<Vec<String>, ValidationError> {
        let mut out = Vec::new();
        match *self {
            ActuatorSettings::Propeller {
                ct,
                rpm,
                swirl_velocity,
            } => {
                optional_line(&mut out, "CT", "ct", ct)?;
                optional_line(&mut out, "RPM", "rpm", rpm)?;
                if let Some(swirl) = swirl_velocity {
                    out.push(format!("SWIRL_VELOCITY {swirl}"));
                }
            }
            ActuatorSettings::JetExhaust {
                velocity,
                density,
                cm,
            } => {
                optional_line(&mut out, "VELOCITY", "velocity", velocity)?;
                optional_line(&mut out, "DENSITY", "density", density)?;
                optional_line(&mut out, "CM", "cm", cm)?;
            }
        }
        Ok(out)
    }
}

fn optional_line(
    out: &mut Vec<String>,
    key: &str,
    parameter: &'static str,
    value: Option<Scalar>,
) -> Result<(), ValidationError> {
    if let Some(v) = value {
        require_finite(parameter, v)?;
        out.push(format!("{key} {v}"));
    }
    Ok(())
}

/// Arguments of `EDIT_ACTUATOR`.
#[derive(Debug, Clone, PartialEq)]
pub struct ActuatorEdit {
    pub actuator: u32,
    pub name: String,
    pub frame: u32,
    /// Disc axis in `frame`.
    pub axis: Axis,
    /// Offset of the disc along `axis`.
    pub offset: Scalar,
    pub radius: Scalar,
    pub settings: ActuatorSettings,
}

impl Script {
    pub fn create_new_actuator(
        &mut self,
        kind: ActuatorType,
    ) -> Result<&mut Self, ValidationError> {
        self.block(
            "Create a new actuator",
            ["CREATE_NEW_ACTUATOR".to_string(), format!("TYPE {kind}")],
        )
    }

    pub fn edit_actuator(&mut self, edit: &ActuatorEdit) -> Result<&mut Self, ValidationError> {
        require_positive_index("actuator", edit.actuator)?;
        require_text("name", &edit.name)?;
        require_positive_index("frame", edit.frame)?;
        require_finite("offset", edit.offset)?;
        require_finite("radius", edit.radius)?;
        let mut lines = vec![
            "EDIT_ACTUATOR".to_string(),
            format!("ACTUATOR {}", edit.actuator),
            format!("NAME {}", edit.name),
            format!("TYPE {}", edit.settings.kind()),
            format!("FRAME {}", edit.frame),
            format!("AXIS {}", edit.axis.index()),
            format!("OFFSET {}", edit.offset),
            format!("RADIUS {}", edit.radius),
        ];
        lines.extend(edit.settings.lines()?);
        self.block("Edit an actuator", lines)
    }

    pub fn set_prop_actuator_rpm(
        &mut self,
        actuator: u32,
        rpm: impl Into<Scalar>,
    ) -> Result<&mut Self, ValidationError> {
        let rpm = rpm.into();
        require_positive_index("actuator_index", actuator)?;
        require_finite("rpm", rpm)?;
        self.command(
            "Set the RPM of an existing actuator",
            format!("SET_PROP_ACTUATOR_RPM {actuator} {rpm}"),
        )
    }

    /// Load a thrust profile for `actuator` from a file.
    pub fn set_prop_actuator_profile(
        &mut self,
        actuator: u32,
        units: ForceUnits,
        path: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("file_name", path.as_ref())?;
        self.block(
            "Set the thrust profile of an existing actuator",
            [format!("SET_PROP_ACTUATOR_PROFILE {actuator} {units}"), path],
        )
    }

    pub fn set_prop_actuator_thrust(
        &mut self,
        actuator: u32,
        thrust: impl Into<Scalar>,
        kind: ThrustType,
    ) -> Result<&mut Self, ValidationError> {
        let thrust = thrust.into();
        require_positive_index("actuator_index", actuator)?;
        require_positive("ct", thrust)?;
        self.command(
            "Set the thrust coefficient of an existing actuator",
            format!("SET_PROP_ACTUATOR_THRUST {actuator} {thrust} {kind}"),
        )
    }

    pub fn set_prop_actuator_swirl(
        &mut self,
        actuator: u32,
        status: RunOption,
    ) -> Result<&mut Self, ValidationError> {
        require_positive_index("actuator_index", actuator)?;
        self.command(
            "Toggle the swirl velocity selection",
            format!("SET_PROP_ACTUATOR_SWIRL {actuator} {status}"),
        )
    }

    pub fn set_actuator_exhaust(
        &mut self,
        actuator: u32,
        delta_velocity: impl Into<Scalar>,
        jet_density: impl Into<Scalar>,
        spreading_rate: impl Into<Scalar>,
    ) -> Result<&mut Self, ValidationError> {
        let (dv, rho, rate) = (delta_velocity.into(), jet_density.into(), spreading_rate.into());
        require_positive_index("actuator_index", actuator)?;
        require_finite("del_vel", dv)?;
        require_finite("jet_density", rho)?;
        require_finite("jet_spreading_rate", rate)?;
        self.command(
            "Set the exhaust actuator properties",
            format!("SET_ACTUATOR_EXHAUST {actuator} {dv} {rho} {rate}"),
        )
    }

    pub fn enable_actuator(&mut self, actuator: u32) -> Result<&mut Self, ValidationError> {
        self.command(
            "Enable an existing actuator",
            format!("ENABLE_ACTUATOR {actuator}"),
        )
    }

    pub fn disable_actuator(&mut self, actuator: u32) -> Result<&mut Self, ValidationError> {
        self.command(
            "Disable an existing actuator",
            format!("DISABLE_ACTUATOR {actuator}"),
        )
    }

    pub fn delete_actuator(&mut self, actuator: u32) -> Result<&mut Self, ValidationError> {
        require_positive_index("actuator_index", actuator)?;
        self.command("Delete an actuator", format!("DELETE ACTUATOR {actuator}"))
    }
}
