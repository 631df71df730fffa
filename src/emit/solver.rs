//! Solver initialization.

use crate::errors::ValidationError;
use crate::options::{RunOption, SolverModel, Symmetry};
use crate::script::Script;
use crate::values::{format_float, require_finite, validate_indices, Boundaries, Scalar};

/// Surfaces included in the initialization, each with its quad-mesher flag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SurfaceSelection {
    #[default]
    All,
    List(Vec<(u32, RunOption)>),
}

impl SurfaceSelection {
    /// Every listed surface with the quad mesher enabled.
    pub fn enabled<I>(indices: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        SurfaceSelection::List(indices.into_iter().map(|i| (i, RunOption::Enable)).collect())
    }
}

impl From<Boundaries> for SurfaceSelection {
    fn from(b: Boundaries) -> Self {
        match b {
            Boundaries::All => SurfaceSelection::All,
            Boundaries::List(v) => SurfaceSelection::enabled(v),
        }
    }
}

/// Arguments of `INITIALIZE_SOLVER`.
///
/// Wake termination, wall collision avoidance and stabilization apply to
/// panel-method models only and are left out of the script otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverInitialization {
    pub model: SolverModel,
    pub surfaces: SurfaceSelection,
    /// Wake termination plane; `None` writes `DEFAULT`.
    pub wake_termination_x: Option<f64>,
    pub symmetry: Symmetry,
    pub wall_collision_avoidance: RunOption,
    /// Stabilization strength in (0, 5); `None` disables stabilization.
    pub stabilization: Option<f64>,
}

impl SolverInitialization {
    pub fn new(model: SolverModel) -> Self {
        Self {
            model,
            surfaces: SurfaceSelection::All,
            wake_termination_x: None,
            symmetry: Symmetry::None,
            wall_collision_avoidance: RunOption::Enable,
            stabilization: Some(1.0),
        }
    }

    pub fn surfaces(mut self, surfaces: impl Into<SurfaceSelection>) -> Self {
        self.surfaces = surfaces.into();
        self
    }

    pub fn wake_termination_x(mut self, x: Option<f64>) -> Self {
        self.wake_termination_x = x;
        self
    }

    pub fn symmetry(mut self, symmetry: Symmetry) -> Self {
        self.symmetry = symmetry;
        self
    }

    pub fn wall_collision_avoidance(mut self, option: RunOption) -> Self {
        self.wall_collision_avoidance = option;
        self
    }

    pub fn stabilization(mut self, strength: Option<f64>) -> Self {
        self.stabilization = strength;
        self
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if let SurfaceSelection::List(list) = &self.surfaces {
            let indices: Vec<u32> = list.iter().map(|(i, _)| *i).collect();
            validate_indices("surfaces", &indices)?;
        }
        if let Symmetry::Periodic(n) = self.symmetry {
            if n < 1 {
                return Err(ValidationError::out_of_range(
                    "symmetry_periodicity",
                    n,
                    "a positive number of copies",
                ));
            }
        }
        if self.model.is_panel_method() {
            if let Some(x) = self.wake_termination_x {
                require_finite("wake_termination_x", Scalar::Float(x))?;
            }
            if let Some(strength) = self.stabilization {
                if !(strength > 0.0 && strength < 5.0) {
                    return Err(ValidationError::out_of_range(
                        "stabilization_strength",
                        format_float(strength),
                        "between 0.0 and 5.0 (exclusive)",
                    ));
                }
            }
        }
        Ok(())
    }

    fn lines(&self) -> Vec<String> {
        let mut out = vec![
            "INITIALIZE_SOLVER".to_string(),
            format!("SOLVER_MODEL {}", self.model),
        ];
        match &self.surfaces {
            SurfaceSelection::All => out.push("SURFACES -1".to_string()),
            SurfaceSelection::List(list) => {
                out.push(format!("SURFACES {}", list.len()));
                out.extend(list.iter().map(|(i, mesher)| format!("{i},{mesher}")));
            }
        }
        let panel = self.model.is_panel_method();
        if panel {
            let x = self
                .wake_termination_x
                .map(format_float)
                .unwrap_or_else(|| "DEFAULT".to_string());
            out.push(format!("WAKE_TERMINATION_X {x}"));
        }
        out.push(format!("SYMMETRY {}", self.symmetry));
        if panel {
            out.push(format!(
                "WALL_COLLISION_AVOIDANCE {}",
                self.wall_collision_avoidance
            ));
            out.push(match self.stabilization {
                Some(strength) => format!("STABILIZATION ENABLE {}", format_float(strength)),
                None => "STABILIZATION DISABLE".to_string(),
            });
        }
        out
    }
}

impl Script {
    pub fn initialize_solver(
        &mut self,
        init: &SolverInitialization,
    ) -> Result<&mut Self, ValidationError> {
        init.validate()?;
        self.emit("Initialize the solver", init.lines())?;
        Ok(self)
    }

    /// Enable wake proximity checking for the given boundaries.
    pub fn solver_proximal_boundaries(
        &mut self,
        boundaries: &[u32],
    ) -> Result<&mut Self, ValidationError> {
        validate_indices("boundaries", boundaries)?;
        self.emit(
            "Enable solver proximity checking for specified boundaries",
            super::indices_per_line("SOLVER_PROXIMAL_BOUNDARIES", boundaries),
        )?;
        Ok(self)
    }

    pub fn solver_remove_initialization(&mut self) -> Result<&mut Self, ValidationError> {
        self.emit(
            "Remove the solver initialization",
            ["REMOVE_INITIALIZATION".to_string()],
        )?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incompressible_all_surfaces_defaults() {
        let mut s = Script::with_banners(false);
        s.initialize_solver(&SolverInitialization::new(SolverModel::Incompressible))
            .unwrap();
        assert_eq!(
            s.lines(),
            [
                "INITIALIZE_SOLVER",
                "SOLVER_MODEL INCOMPRESSIBLE",
                "SURFACES -1",
                "WAKE_TERMINATION_X DEFAULT",
                "SYMMETRY NONE",
                "WALL_COLLISION_AVOIDANCE ENABLE",
                "STABILIZATION ENABLE 1.0"
            ]
        );
    }

    #[test]
    fn explicit_surfaces_and_periodic_symmetry() {
        let init = SolverInitialization::new(SolverModel::SubsonicPrandtlGlauert)
            .surfaces(SurfaceSelection::List(vec![
                (1, RunOption::Enable),
                (2, RunOption::Disable),
            ]))
            .wake_termination_x(Some(3.5))
            .symmetry(Symmetry::Periodic(4))
            .stabilization(None);
        let mut s = Script::with_banners(false);
        s.initialize_solver(&init).unwrap();
        assert_eq!(
            s.lines(),
            [
                "INITIALIZE_SOLVER",
                "SOLVER_MODEL SUBSONIC_PRANDTL_GLAUERT",
                "SURFACES 2",
                "1,ENABLE",
                "2,DISABLE",
                "WAKE_TERMINATION_X 3.5",
                "SYMMETRY PERIODIC 4",
                "WALL_COLLISION_AVOIDANCE ENABLE",
                "STABILIZATION DISABLE"
            ]
        );
    }

    #[test]
    fn non_panel_models_skip_wake_and_stabilization() {
        let init = SolverInitialization::new(SolverModel::TangentCone)
            .surfaces(Boundaries::from([3]))
            .symmetry(Symmetry::Mirror)
            .stabilization(Some(99.0));
        let mut s = Script::with_banners(false);
        s.initialize_solver(&init).unwrap();
        assert_eq!(
            s.lines(),
            [
                "INITIALIZE_SOLVER",
                "SOLVER_MODEL TANGENT_CONE",
                "SURFACES 1",
                "3,ENABLE",
                "SYMMETRY MIRROR"
            ]
        );
    }

    #[test]
    fn stabilization_strength_is_exclusive() {
        let mut s = Script::new();
        for bad in [0.0, 5.0, -1.0] {
            let init =
                SolverInitialization::new(SolverModel::Incompressible).stabilization(Some(bad));
            let err = s.initialize_solver(&init).unwrap_err();
            assert_eq!(err.parameter(), "stabilization_strength");
        }
        let zero_copies =
            SolverInitialization::new(SolverModel::Incompressible).symmetry(Symmetry::Periodic(0));
        assert!(s.initialize_solver(&zero_copies).is_err());
        assert!(s.is_empty());
    }

    #[test]
    fn proximal_boundaries_one_per_line() {
        let mut s = Script::with_banners(false);
        s.solver_proximal_boundaries(&[1, 4, 5]).unwrap();
        s.solver_remove_initialization().unwrap();
        assert_eq!(
            s.lines(),
            ["SOLVER_PROXIMAL_BOUNDARIES 3", "1", "4", "5", "REMOVE_INITIALIZATION"]
        );
        assert!(s.solver_proximal_boundaries(&[]).is_err());
    }
}
