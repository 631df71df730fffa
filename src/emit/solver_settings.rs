//! Solver run settings: steady/unsteady mode, viscous modelling, flow angles,
//! reference values, convergence and wake controls.

use crate::errors::ValidationError;
use crate::options::{BoundaryLayerType, RunOption};
use crate::script::Script;
use crate::values::{
    join_indices, require_finite, require_positive, require_within, validate_indices, Scalar,
};

fn require_angle_below_90(parameter: &'static str, angle: Scalar) -> Result<(), ValidationError> {
    require_finite(parameter, angle)?;
    if angle.as_f64().abs() < 90.0 {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(
            parameter,
            angle,
            "an angle with absolute value below 90",
        ))
    }
}

fn require_at_least_one(parameter: &'static str, value: u32) -> Result<(), ValidationError> {
    if value >= 1 {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(parameter, value, "at least 1"))
    }
}

fn count_and_csv(keyword: &str, indices: &[u32]) -> Vec<String> {
    vec![format!("{keyword} {}", indices.len()), join_indices(indices)]
}

impl Script {
    pub fn steady(&mut self) -> Result<&mut Self, ValidationError> {
        self.command("Set the solver to steady mode", "SET_SOLVER_STEADY")
    }

    /// Time-accurate solver with `time_iterations` steps of `delta_time`.
    pub fn unsteady(
        &mut self,
        time_iterations: u32,
        delta_time: impl Into<Scalar>,
    ) -> Result<&mut Self, ValidationError> {
        let delta_time = delta_time.into();
        require_at_least_one("time_iterations", time_iterations)?;
        require_positive("delta_time", delta_time)?;
        self.block(
            "Set the solver to unsteady mode",
            [
                "SET_SOLVER_UNSTEADY".to_string(),
                format!("TIME_ITERATIONS {time_iterations}"),
                format!("DELTA_TIME {delta_time}"),
            ],
        )
    }

    pub fn boundary_layer_type(
        &mut self,
        kind: BoundaryLayerType,
    ) -> Result<&mut Self, ValidationError> {
        self.command(
            "Set the boundary layer type",
            format!("SET_BOUNDARY_LAYER_TYPE {kind}"),
        )
    }

    pub fn surface_roughness(
        &mut self,
        roughness_height: impl Into<Scalar>,
    ) -> Result<&mut Self, ValidationError> {
        let h = roughness_height.into();
        require_positive("roughness_height", h)?;
        self.command(
            "Set the surface roughness height",
            format!("SET_SURFACE_ROUGHNESS {h}"),
        )
    }

    pub fn delete_transition_trip(&mut self, trip: u32) -> Result<&mut Self, ValidationError> {
        require_at_least_one("transition_trip_index", trip)?;
        self.command(
            "Delete an existing transition trip edge set",
            format!("DELETE_TRANSITION_TRIP {trip}"),
        )
    }

    pub fn viscous_coupling(&mut self, mode: RunOption) -> Result<&mut Self, ValidationError> {
        self.command(
            "Set the solver viscous coupling",
            format!("SET_SOLVER_VISCOUS_COUPLING {mode}"),
        )
    }

    /// Exclude boundaries from the viscous calculation.
    pub fn viscous_excluded_boundaries(
        &mut self,
        boundaries: &[u32],
    ) -> Result<&mut Self, ValidationError> {
        validate_indices("boundaries", boundaries)?;
        self.block(
            "Set the viscous exclusion boundary list",
            count_and_csv("SET_VISCOUS_EXCLUDED_BOUNDARIES", boundaries),
        )
    }

    pub fn delete_viscous_excluded_boundaries(&mut self) -> Result<&mut Self, ValidationError> {
        self.command(
            "Delete the viscous exclusion boundary list",
            "DELETE_VISCOUS_EXCLUDED_BOUNDARIES",
        )
    }

    pub fn unsteady_viscous_coupling_iteration(
        &mut self,
        iteration: u32,
    ) -> Result<&mut Self, ValidationError> {
        self.command(
            "Set the unsteady viscous coupling iteration",
            format!("SET_UNSTEADY_VISCOUS_COUPLING_ITERATION {iteration}"),
        )
    }

    pub fn set_axial_separation_boundaries(
        &mut self,
        boundaries: &[u32],
    ) -> Result<&mut Self, ValidationError> {
        validate_indices("boundary_indices", boundaries)?;
        self.block(
            "Set axial separation boundaries",
            count_and_csv("SET_AXIAL_SEPARATION_BOUNDARIES", boundaries),
        )
    }

    pub fn delete_axial_separation_boundaries(&mut self) -> Result<&mut Self, ValidationError> {
        self.command(
            "Delete axial separation boundaries",
            "DELETE_AXIAL_SEPARATION_BOUNDARIES",
        )
    }

    pub fn set_crossflow_separation_boundaries(
        &mut self,
        boundaries: &[u32],
    ) -> Result<&mut Self, ValidationError> {
        validate_indices("boundary_indices", boundaries)?;
        self.block(
            "Set cross-flow separation boundaries",
            count_and_csv("SET_CROSSFLOW_SEPARATION_BOUNDARIES", boundaries),
        )
    }

    pub fn delete_crossflow_separation_boundaries(
        &mut self,
    ) -> Result<&mut Self, ValidationError> {
        self.command(
            "Delete cross-flow separation boundaries",
            "DELETE_CROSSFLOW_SEPARATION_BOUNDARIES",
        )
    }

    /// Cross-flow separation pressure from the mean body diameter.
    pub fn set_crossflow_separation_cp(
        &mut self,
        mean_diameter: impl Into<Scalar>,
    ) -> Result<&mut Self, ValidationError> {
        let d = mean_diameter.into();
        require_positive("mean_diameter", d)?;
        self.command(
            "Set the cross-flow separation pressure",
            format!("SET_CROSSFLOW_SEPARATION_CP {d}"),
        )
    }

    /// Angle of attack in degrees; |angle| < 90.
    pub fn aoa(&mut self, angle: impl Into<Scalar>) -> Result<&mut Self, ValidationError> {
        let angle = angle.into();
        require_angle_below_90("angle", angle)?;
        self.command("Set the angle of attack", format!("SOLVER_SET_AOA {angle}"))
    }

    /// Sideslip angle in degrees; |angle| < 90.
    pub fn sideslip(&mut self, angle: impl Into<Scalar>) -> Result<&mut Self, ValidationError> {
        let angle = angle.into();
        require_angle_below_90("angle", angle)?;
        self.command(
            "Set the sideslip angle",
            format!("SOLVER_SET_SIDESLIP {angle}"),
        )
    }

    pub fn solver_velocity(
        &mut self,
        velocity: impl Into<Scalar>,
    ) -> Result<&mut Self, ValidationError> {
        let v = velocity.into();
        require_finite("velocity", v)?;
        self.command(
            "Set the freestream velocity",
            format!("SOLVER_SET_VELOCITY {v}"),
        )
    }

    pub fn solver_mach_number(
        &mut self,
        mach: impl Into<Scalar>,
    ) -> Result<&mut Self, ValidationError> {
        let m = mach.into();
        require_finite("mach", m)?;
        self.command(
            "Set the freestream Mach number",
            format!("SOLVER_SET_MACH_NUMBER {m}"),
        )
    }

    pub fn solver_iterations(&mut self, iterations: u32) -> Result<&mut Self, ValidationError> {
        require_at_least_one("num_iterations", iterations)?;
        self.command(
            "Set the solver iterations",
            format!("SOLVER_SET_ITERATIONS {iterations}"),
        )
    }

    pub fn convergence_threshold(
        &mut self,
        threshold: impl Into<Scalar>,
    ) -> Result<&mut Self, ValidationError> {
        let t = threshold.into();
        require_positive("threshold", t)?;
        self.command(
            "Set the solver convergence threshold",
            format!("SOLVER_SET_CONVERGENCE {t}"),
        )
    }

    pub fn forced_iterations(&mut self, mode: RunOption) -> Result<&mut Self, ValidationError> {
        self.command(
            "Set forced solver iterations",
            format!("SOLVER_SET_FORCED_ITERATIONS {mode}"),
        )
    }

    pub fn ref_velocity(&mut self, value: impl Into<Scalar>) -> Result<&mut Self, ValidationError> {
        let v = value.into();
        require_finite("value", v)?;
        self.command(
            "Set the reference velocity",
            format!("SOLVER_SET_REF_VELOCITY {v}"),
        )
    }

    pub fn ref_mach_number(
        &mut self,
        mach: impl Into<Scalar>,
    ) -> Result<&mut Self, ValidationError> {
        let m = mach.into();
        require_finite("mach", m)?;
        self.command(
            "Set the reference Mach number",
            format!("SOLVER_SET_REF_MACH_NUMBER {m}"),
        )
    }

    pub fn ref_area(&mut self, value: impl Into<Scalar>) -> Result<&mut Self, ValidationError> {
        let a = value.into();
        require_positive("value", a)?;
        self.command("Set the reference area", format!("SOLVER_SET_REF_AREA {a}"))
    }

    pub fn ref_length(&mut self, length: impl Into<Scalar>) -> Result<&mut Self, ValidationError> {
        let l = length.into();
        require_positive("length", l)?;
        self.command(
            "Set the reference length",
            format!("SOLVER_SET_REF_LENGTH {l}"),
        )
    }

    pub fn solver_minimum_cp(
        &mut self,
        cp_min: impl Into<Scalar>,
    ) -> Result<&mut Self, ValidationError> {
        let cp = cp_min.into();
        require_finite("cp_min", cp)?;
        self.command(
            "Set the solver minimum pressure coefficient",
            format!("SOLVER_MINIMUM_CP {cp}"),
        )
    }

    pub fn set_max_parallel_threads(&mut self, threads: u32) -> Result<&mut Self, ValidationError> {
        require_at_least_one("num_cores", threads)?;
        self.command(
            "Set the maximum number of parallel threads",
            format!("SET_MAX_PARALLEL_THREADS {threads}"),
        )
    }

    pub fn mesh_induced_wake_velocity(
        &mut self,
        enable: impl Into<RunOption>,
    ) -> Result<&mut Self, ValidationError> {
        let status = enable.into();
        self.command(
            "Set mesh induced wake velocity",
            format!("SOLVER_SET_MESH_INDUCED_WAKE_VELOCITY {status}"),
        )
    }

    pub fn adverse_gradient_boundary_layer(
        &mut self,
        mode: RunOption,
    ) -> Result<&mut Self, ValidationError> {
        self.command(
            "Set the adverse gradient boundary layer model",
            format!("SOLVER_SET_ADVERSE_GRADIENT_BOUNDARY_LAYER {mode}"),
        )
    }

    /// Number of far-field layers, within [1, 5].
    pub fn farfield_layers(&mut self, layers: u32) -> Result<&mut Self, ValidationError> {
        require_within("value", Scalar::from(layers), 1.0, 5.0)?;
        self.command(
            "Set the number of far-field layers",
            format!("SOLVER_SET_FARFIELD_LAYERS {layers}"),
        )
    }

    pub fn solver_unsteady_pressure_and_kutta(
        &mut self,
        status: RunOption,
    ) -> Result<&mut Self, ValidationError> {
        self.command(
            "Set the unsteady pressure and Kutta condition",
            format!("SOLVER_UNSTEADY_PRESSURE_AND_KUTTA {status}"),
        )
    }

    pub fn solver_vortex_ring_normalization(
        &mut self,
        status: RunOption,
    ) -> Result<&mut Self, ValidationError> {
        self.command(
            "Set vortex ring normalization",
            format!("SOLVER_VORTEX_RING_NORMALIZATION {status}"),
        )
    }

    pub fn convergence_iterations(
        &mut self,
        iterations: u32,
    ) -> Result<&mut Self, ValidationError> {
        require_at_least_one("value", iterations)?;
        self.command(
            "Set the solver convergence iterations",
            format!("SET_SOLVER_CONVERGENCE_ITERATIONS {iterations}"),
        )
    }

    pub fn wake_streamwise_agglomeration(
        &mut self,
        enable: impl Into<RunOption>,
    ) -> Result<&mut Self, ValidationError> {
        let status = enable.into();
        self.command(
            "Set wake streamwise agglomeration",
            format!("SET_WAKE_STREAMWISE_AGGLOMERATION {status}"),
        )
    }

    pub fn wake_termination_time_steps(
        &mut self,
        steps: u32,
    ) -> Result<&mut Self, ValidationError> {
        self.command(
            "Set the wake termination time steps",
            format!("SET_WAKE_TERMINATION_TIME_STEPS {steps}"),
        )
    }

    pub fn wake_relaxation(
        &mut self,
        enable: impl Into<RunOption>,
    ) -> Result<&mut Self, ValidationError> {
        let status = enable.into();
        self.command(
            "Set wake relaxation",
            format!("SET_WAKE_RELAXATION {status}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare() -> Script {
        Script::with_banners(false)
    }

    #[test]
    fn steady_and_unsteady() {
        let mut s = bare();
        s.steady().unwrap().unsteady(100, 0.1).unwrap();
        assert_eq!(
            s.lines(),
            [
                "SET_SOLVER_STEADY",
                "SET_SOLVER_UNSTEADY",
                "TIME_ITERATIONS 100",
                "DELTA_TIME 0.1"
            ]
        );
        assert!(s.unsteady(0, 0.1).is_err());
        assert!(s.unsteady(10, 0.0).is_err());
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn boundary_lists_carry_their_count() {
        let mut s = bare();
        s.viscous_excluded_boundaries(&[1, 2, 4]).unwrap();
        s.set_axial_separation_boundaries(&[3]).unwrap();
        s.set_crossflow_separation_boundaries(&[3, 4, 5]).unwrap();
        assert_eq!(
            s.lines(),
            [
                "SET_VISCOUS_EXCLUDED_BOUNDARIES 3",
                "1,2,4",
                "SET_AXIAL_SEPARATION_BOUNDARIES 1",
                "3",
                "SET_CROSSFLOW_SEPARATION_BOUNDARIES 3",
                "3,4,5"
            ]
        );
        assert!(s.viscous_excluded_boundaries(&[]).is_err());
    }

    #[test]
    fn flow_angles_must_stay_below_90() {
        let mut s = bare();
        s.aoa(5.0).unwrap().sideslip(-89.9).unwrap();
        assert_eq!(s.lines(), ["SOLVER_SET_AOA 5.0", "SOLVER_SET_SIDESLIP -89.9"]);
        assert!(s.aoa(90.0).is_err());
        assert!(s.sideslip(-90).is_err());
        assert!(s.aoa(f64::NAN).is_err());
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn reference_values() {
        let mut s = bare();
        s.solver_velocity(30.0)
            .unwrap()
            .solver_mach_number(0.3)
            .unwrap()
            .ref_velocity(100.0)
            .unwrap()
            .ref_mach_number(3.0)
            .unwrap()
            .ref_area(1.0)
            .unwrap()
            .ref_length(2)
            .unwrap();
        assert_eq!(
            s.lines(),
            [
                "SOLVER_SET_VELOCITY 30.0",
                "SOLVER_SET_MACH_NUMBER 0.3",
                "SOLVER_SET_REF_VELOCITY 100.0",
                "SOLVER_SET_REF_MACH_NUMBER 3.0",
                "SOLVER_SET_REF_AREA 1.0",
                "SOLVER_SET_REF_LENGTH 2"
            ]
        );
        assert!(s.ref_area(0.0).is_err());
    }

    #[test]
    fn switches_accept_bools_and_run_options() {
        let mut s = bare();
        s.mesh_induced_wake_velocity(true).unwrap();
        s.wake_streamwise_agglomeration(false).unwrap();
        s.wake_relaxation(RunOption::Enable).unwrap();
        s.forced_iterations(RunOption::Disable).unwrap();
        assert_eq!(
            s.lines(),
            [
                "SOLVER_SET_MESH_INDUCED_WAKE_VELOCITY ENABLE",
                "SET_WAKE_STREAMWISE_AGGLOMERATION DISABLE",
                "SET_WAKE_RELAXATION ENABLE",
                "SOLVER_SET_FORCED_ITERATIONS DISABLE"
            ]
        );
    }

    #[test]
    fn farfield_layers_range() {
        let mut s = bare();
        s.farfield_layers(1).unwrap().farfield_layers(5).unwrap();
        assert!(s.farfield_layers(0).is_err());
        assert!(s.farfield_layers(6).is_err());
        assert_eq!(
            s.lines(),
            ["SOLVER_SET_FARFIELD_LAYERS 1", "SOLVER_SET_FARFIELD_LAYERS 5"]
        );
    }

    #[test]
    fn convergence_and_wake_settings() {
        let mut s = bare();
        s.solver_iterations(500).unwrap();
        s.convergence_threshold(1e-5).unwrap();
        s.convergence_iterations(500).unwrap();
        s.wake_termination_time_steps(20).unwrap();
        s.solver_minimum_cp(-100.0).unwrap();
        s.set_max_parallel_threads(16).unwrap();
        assert_eq!(
            s.lines(),
            [
                "SOLVER_SET_ITERATIONS 500",
                "SOLVER_SET_CONVERGENCE 1e-05",
                "SET_SOLVER_CONVERGENCE_ITERATIONS 500",
                "SET_WAKE_TERMINATION_TIME_STEPS 20",
                "SOLVER_MINIMUM_CP -100.0",
                "SET_MAX_PARALLEL_THREADS 16"
            ]
        );
        assert!(s.solver_iterations(0).is_err());
        assert!(s.set_max_parallel_threads(0).is_err());
    }

    #[test]
    fn viscous_settings() {
        let mut s = Script::new();
        s.boundary_layer_type(BoundaryLayerType::Transitional).unwrap();
        s.surface_roughness(23.5).unwrap();
        s.viscous_coupling(RunOption::Enable).unwrap();
        s.set_crossflow_separation_cp(0.5).unwrap();
        let commands: Vec<&String> = s.lines().iter().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(
            commands,
            [
                "SET_BOUNDARY_LAYER_TYPE TRANSITIONAL",
                "SET_SURFACE_ROUGHNESS 23.5",
                "SET_SOLVER_VISCOUS_COUPLING ENABLE",
                "SET_CROSSFLOW_SEPARATION_CP 0.5"
            ]
        );
        assert!(s.surface_roughness(-1.0).is_err());
    }

    #[test]
    fn transition_trips_are_deleted_by_index() {
        let mut s = bare();
        s.delete_transition_trip(2).unwrap();
        assert_eq!(s.lines(), ["DELETE_TRANSITION_TRIP 2"]);
        let err = s.delete_transition_trip(0).unwrap_err();
        assert_eq!(err.parameter(), "transition_trip_index");
        assert_eq!(s.lines().len(), 1);
    }
}
