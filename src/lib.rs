pub mod error;
pub mod simulation;
pub mod configuration;
pub mod transfer;

pub use error::OrbError;

pub use simulation::states::{Body, BodyState, CentralAttractor, NVec2, SimClock, System};
pub use simulation::params::Parameters;
pub use simulation::gravity::GravityField;
pub use simulation::integrator::NBodyIntegrator;
pub use simulation::scenario::build_scenario;

pub use configuration::config::{
    BodyConfig, CentralConfig, ParametersConfig, ScenarioConfig, TransferConfig,
};

pub use transfer::kepler::KeplerSolver;
pub use transfer::planner::{PhaseCounts, Trajectory, TrajectorySample, TransferSpec};
