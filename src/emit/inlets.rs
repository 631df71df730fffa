//! Velocity inlet boundaries.

use std::path::Path;

use crate::errors::ValidationError;
use crate::options::InletGrowthScheme;
use crate::script::Script;
use crate::values::{path_arg, require_finite, require_positive, require_positive_index, Scalar};

/// Arguments of `REMESH_INLET`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InletRemesh {
    pub inlet: u32,
    pub inner_radius: Scalar,
    pub elements: u32,
    pub growth_scheme: InletGrowthScheme,
    pub growth_rate: Scalar,
}

impl InletRemesh {
    pub fn new(inlet: u32) -> Self {
        Self {
            inlet,
            inner_radius: Scalar::Float(0.0),
            elements: 10,
            growth_scheme: InletGrowthScheme::Successive,
            growth_rate: Scalar::Float(1.2),
        }
    }
}

impl Script {
    /// Turn boundary `surface` into an inlet blowing at `velocity`.
    pub fn create_new_inlet(
        &mut self,
        surface: u32,
        velocity: impl Into<Scalar>,
    ) -> Result<&mut Self, ValidationError> {
        let velocity = velocity.into();
        require_positive_index("surface_id", surface)?;
        require_finite("velocity", velocity)?;
        self.command(
            "Create a new inlet boundary",
            format!("CREATE_NEW_INLET {surface} {velocity}"),
        )
    }

    pub fn set_inlet_custom_profile(
        &mut self,
        inlet: u32,
        path: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        require_positive_index("inlet_id", inlet)?;
        let path = path_arg("motion_filepath", path.as_ref())?;
        self.block(
            "Upload custom velocity inlet profile from external file",
            ["SET_INLET_CUSTOM_PROFILE".to_string(), inlet.to_string(), path],
        )
    }

    pub fn remesh_inlet(&mut self, remesh: &InletRemesh) -> Result<&mut Self, ValidationError> {
        require_positive_index("inlet", remesh.inlet)?;
        require_finite("inner_radius", remesh.inner_radius)?;
        if remesh.inner_radius.as_f64() < 0.0 {
            return Err(ValidationError::out_of_range(
                "inner_radius",
                remesh.inner_radius,
                "0 or more",
            ));
        }
        require_positive_index("elements", remesh.elements)?;
        require_positive("growth_rate", remesh.growth_rate)?;
        self.block(
            "Radial mesh an existing inlet boundary",
            [
                "REMESH_INLET".to_string(),
                format!("INLET {}", remesh.inlet),
                format!("INNER_RADIUS {}", remesh.inner_radius),
                format!("ELEMENTS {}", remesh.elements),
                format!("GROWTH_SCHEME {}", remesh.growth_scheme),
                format!("GROWTH_RATE {}", remesh.growth_rate),
            ],
        )
    }

    pub fn delete_inlet(&mut self, inlet: u32) -> Result<&mut Self, ValidationError> {
        require_positive_index("inlet", inlet)?;
        self.command(
            "Delete an existing inlet boundary",
            format!("DELETE INLET {inlet}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inlet_lifecycle() {
        let mut s = Script::with_banners(false);
        s.create_new_inlet(4, 12.5).unwrap();
        s.set_inlet_custom_profile(1, "profile.txt").unwrap();
        s.remesh_inlet(&InletRemesh {
            growth_scheme: InletGrowthScheme::DualSide,
            ..InletRemesh::new(1)
        })
        .unwrap();
        s.delete_inlet(1).unwrap();
        assert_eq!(
            s.lines(),
            [
                "CREATE_NEW_INLET 4 12.5",
                "SET_INLET_CUSTOM_PROFILE",
                "1",
                "profile.txt",
                "REMESH_INLET",
                "INLET 1",
                "INNER_RADIUS 0.0",
                "ELEMENTS 10",
                "GROWTH_SCHEME 2",
                "GROWTH_RATE 1.2",
                "DELETE INLET 1"
            ]
        );
    }

    #[test]
    fn remesh_limits() {
        let mut s = Script::with_banners(false);
        let negative = InletRemesh {
            inner_radius: Scalar::Float(-0.1),
            ..InletRemesh::new(1)
        };
        assert_eq!(
            s.remesh_inlet(&negative).unwrap_err().parameter(),
            "inner_radius"
        );
        let flat = InletRemesh {
            growth_rate: Scalar::Int(0),
            ..InletRemesh::new(1)
        };
        assert_eq!(s.remesh_inlet(&flat).unwrap_err().parameter(), "growth_rate");
        assert!(s.remesh_inlet(&InletRemesh::new(0)).is_err());
        assert!(s.delete_inlet(0).is_err());
        assert!(s.is_empty());
    }
}
