//! Prescribed rigid-body motion.

use crate::errors::ValidationError;
use crate::options::{Axis, MotionSolverType, MotionType};
use crate::script::Script;
use crate::values::{require_finite, require_finite_vertex, require_positive_index, Scalar, Vertex};

/// Periodic motion profile along or about one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionProfile {
    pub axis: Axis,
    pub kind: MotionType,
    pub amplitude: Scalar,
    pub frequency: Scalar,
    pub phase: Scalar,
    pub initial_displacement: Scalar,
    pub initial_velocity: Scalar,
}

impl MotionProfile {
    pub fn new(axis: Axis, kind: MotionType) -> Self {
        Self {
            axis,
            kind,
            amplitude: Scalar::Float(1.0),
            frequency: Scalar::Float(1.0),
            phase: Scalar::Float(0.0),
            initial_displacement: Scalar::Float(0.0),
            initial_velocity: Scalar::Float(0.0),
        }
    }

    fn lines(&self, keyword: &str) -> Result<Vec<String>, ValidationError> {
        let fields = [
            ("AMPLITUDE", "amplitude", self.amplitude),
            ("FREQUENCY", "frequency", self.frequency),
            ("PHASE", "phase", self.phase),
            ("INITIAL_DISPLACEMENT", "initial_displacement", self.initial_displacement),
            ("INITIAL_VELOCITY", "initial_velocity", self.initial_velocity),
        ];
        let mut out = vec![
            keyword.to_string(),
            format!("AXIS {}", self.axis),
            format!("TYPE {}", self.kind),
        ];
        for (key, parameter, value) in fields {
            require_finite(parameter, value)?;
            out.push(format!("{key} {value}"));
        }
        Ok(out)
    }
}

/// Arguments of `SET_MOTION_SOLVER`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSolver {
    pub kind: MotionSolverType,
    pub time_step: Scalar,
    pub total_time: Scalar,
    pub iterations: u32,
    pub tolerance: Scalar,
}

impl Default for MotionSolver {
    fn default() -> Self {
        Self {
            kind: MotionSolverType::Steady,
            time_step: Scalar::Float(0.01),
            total_time: Scalar::Float(1.0),
            iterations: 100,
            tolerance: Scalar::Float(1e-3),
        }
    }
}

impl Script {
    /// Set the center of gravity the motion is applied about.
    pub fn set_motion_controls(
        &mut self,
        reference_frame: u32,
        cg: impl Into<Vertex>,
    ) -> Result<&mut Self, ValidationError> {
        let cg = cg.into();
        require_positive_index("reference_frame", reference_frame)?;
        require_finite_vertex("cg", cg)?;
        self.block(
            "Set the motion controls",
            [
                "SET_MOTION_CONTROLS".to_string(),
                format!("REFERENCE_FRAME {reference_frame}"),
                format!("CG {cg}"),
            ],
        )
    }

    pub fn set_motion_solver(
        &mut self,
        solver: &MotionSolver,
    ) -> Result<&mut Self, ValidationError> {
        require_finite("time_step", solver.time_step)?;
        require_finite("total_time", solver.total_time)?;
        require_finite("tolerance", solver.tolerance)?;
        self.block(
            "Set the motion solver",
            [
                "SET_MOTION_SOLVER".to_string(),
                format!("TYPE {}", solver.kind),
                format!("TIME_STEP {}", solver.time_step),
                format!("TOTAL_TIME {}", solver.total_time),
                format!("ITERATIONS {}", solver.iterations),
                format!("TOLERANCE {}", solver.tolerance),
            ],
        )
    }

    pub fn set_motion_translation(
        &mut self,
        profile: &MotionProfile,
    ) -> Result<&mut Self, ValidationError> {
        let lines = profile.lines("SET_MOTION_TRANSLATION")?;
        self.block("Set a translational motion", lines)
    }

    pub fn set_motion_rotation(
        &mut self,
        profile: &MotionProfile,
    ) -> Result<&mut Self, ValidationError> {
        let lines = profile.lines("SET_MOTION_ROTATION")?;
        self.block("Set a rotational motion", lines)
    }
}
