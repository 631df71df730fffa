use crate::errors::ValidationError;
use crate::script::Script;

impl Script {
    pub fn start_solver(&mut self) -> Result<&mut Self, ValidationError> {
        self.command("Start the solver", "START_SOLVER")
    }

    pub fn clear_solution(&mut self) -> Result<&mut Self, ValidationError> {
        self.command("Clear the solver solution", "CLEAR_SOLUTION")
    }

    /// Exit FlightStream once the script reaches this point.
    pub fn close_flightstream(&mut self) -> Result<&mut Self, ValidationError> {
        self.command("Close FlightStream", "CLOSE_FLIGHTSTREAM")
    }
}
