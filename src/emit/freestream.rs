//! Freestream definition and fluid properties.

use std::path::PathBuf;

use crate::errors::ValidationError;
use crate::options::Axis;
use crate::script::Script;
use crate::values::{
    format_float, path_arg, require_finite, require_positive, require_positive_index, Scalar,
};

/// Freestream velocity definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Freestream {
    Constant,
    /// Velocity profile read from a file.
    Custom { profile: PathBuf },
    /// Rotation about `axis` of coordinate system `frame` at `angular_velocity` rad/s.
    Rotation {
        frame: u32,
        axis: Axis,
        angular_velocity: f64,
    },
}

/// Fluid properties in SI units. The defaults are ISA sea level air.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    pub density: f64,
    pub pressure: f64,
    pub sonic_velocity: f64,
    pub temperature: f64,
    pub viscosity: f64,
}

impl Default for FluidProperties {
    fn default() -> Self {
        Self {
            density: 1.225,
            pressure: 101325.0,
            sonic_velocity: 340.0,
            temperature: 288.15,
            viscosity: 1.789e-5,
        }
    }
}

impl FluidProperties {
    fn validate(&self) -> Result<(), ValidationError> {
        for (name, v) in [
            ("density", self.density),
            ("pressure", self.pressure),
            ("sonic_velocity", self.sonic_velocity),
            ("temperature", self.temperature),
            ("viscosity", self.viscosity),
        ] {
            require_positive(name, Scalar::Float(v))?;
        }
        Ok(())
    }
}

impl Script {
    pub fn set_freestream(
        &mut self,
        freestream: &Freestream,
    ) -> Result<&mut Self, ValidationError> {
        match freestream {
            Freestream::Constant => self.command(
                "Set a constant free-stream velocity",
                "SET_FREESTREAM CONSTANT",
            ),
            Freestream::Custom { profile } => {
                let profile = path_arg("profile_path", profile)?;
                self.block(
                    "Set a custom free-stream velocity",
                    ["SET_FREESTREAM CUSTOM".to_string(), profile],
                )
            }
            Freestream::Rotation {
                frame,
                axis,
                angular_velocity,
            } => {
                require_positive_index("frame", *frame)?;
                require_finite("angular_velocity", Scalar::Float(*angular_velocity))?;
                self.command(
                    "Set a rotational free-stream velocity",
                    format!(
                        "SET_FREESTREAM ROTATION {frame} {axis} {}",
                        format_float(*angular_velocity)
                    ),
                )
            }
        }
    }

    pub fn fluid_properties(
        &mut self,
        props: &FluidProperties,
    ) -> Result<&mut Self, ValidationError> {
        props.validate()?;
        self.block(
            "Set the fluid properties",
            [
                "FLUID_PROPERTIES".to_string(),
                format!("DENSITY {}", format_float(props.density)),
                format!("PRESSURE {}", format_float(props.pressure)),
                format!("SONIC_VELOCITY {}", format_float(props.sonic_velocity)),
                format!("TEMPERATURE {}", format_float(props.temperature)),
                format!("VISCOSITY {}", format_float(props.viscosity)),
            ],
        )
    }

    /// Fluid properties from the standard atmosphere at `altitude`.
    pub fn air_altitude(
        &mut self,
        altitude: impl Into<Scalar>,
    ) -> Result<&mut Self, ValidationError> {
        let altitude = altitude.into();
        require_finite("altitude", altitude)?;
        self.command(
            "Set fluid properties from altitude",
            format!("AIR_ALTITUDE {altitude}"),
        )
    }
}
