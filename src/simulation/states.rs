//! Core state types for the N-body simulation.
//!
//! Defines the 2D body/system structs:
//! - `Body` with its trailing path history
//! - `CentralAttractor` (optional fixed mass, e.g. a star at the origin)
//! - `SimClock` (step counter + fixed dt)
//! - `System` bundling all of the above
//! - `BodyState`, the copy-out snapshot record handed to renderers

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String, // identity tag
    pub color: String, // render tag, passed through untouched
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub m: f64, // mass (kg)
    pub gravitationally_active: bool, // whether this body's mass pulls on others
    pub path: Vec<NVec2>, // ordered past positions, oldest first
}

/// Fixed central mass (e.g. the Sun). Its `active` toggle is independent
/// of the per-body flags.
#[derive(Debug, Clone)]
pub struct CentralAttractor {
    pub x: NVec2, // fixed position, conventionally the origin
    pub m: f64, // mass (kg)
    pub active: bool,
}

/// Step counter plus fixed step duration. Monotone while running; reset
/// to zero together with the bodies.
#[derive(Debug, Clone)]
pub struct SimClock {
    pub steps: u64,
    pub dt: f64, // step duration (s)
}

impl SimClock {
    pub fn new(dt: f64) -> Self {
        Self { steps: 0, dt }
    }

    /// Elapsed simulation time in seconds
    pub fn time(&self) -> f64 {
        self.steps as f64 * self.dt
    }

    pub fn advance(&mut self) {
        self.steps += 1;
    }

    pub fn reset(&mut self) {
        self.steps = 0;
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>,
    pub central: Option<CentralAttractor>, // at most one per simulation
    pub clock: SimClock,
}

/// Read-only per-body snapshot for a renderer. Everything is copied out;
/// nothing aliases integrator-owned state.
#[derive(Debug, Clone)]
pub struct BodyState {
    pub name: String,
    pub color: String,
    pub position: NVec2,
    pub velocity: NVec2,
    pub path: Vec<NVec2>,
    pub gravitationally_active: bool,
}
