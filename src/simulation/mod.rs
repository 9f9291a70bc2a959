pub mod states;
pub mod params;
pub mod gravity;
pub mod integrator;
pub mod scenario;
