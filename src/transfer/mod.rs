pub mod kepler;
pub mod planner;
