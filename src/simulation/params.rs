//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size `dt`,
//! - gravitational constant `g`,
//! - optional trailing-window cap on per-body path history

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size (s)
    pub g: f64, // gravitational constant
    pub path_capacity: Option<usize>, // None = unbounded path history
}
