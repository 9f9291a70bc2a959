//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, gravitational constant, path window
//! - [`CentralConfig`]    – optional fixed central mass
//! - [`BodyConfig`]       – initial state for each body
//! - [`TransferConfig`]   – optional Hohmann-transfer planning request
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   dt: 21600.0             # fixed step size (s), here 6 hours
//!   g: 6.6743e-11           # gravitational constant
//!   path_capacity: 5000     # optional trailing path window (omit = unbounded)
//!
//! central:
//!   mass: 1.989e30          # the Sun, fixed at the origin
//!   active: true
//!
//! bodies:
//!   - name: earth
//!     color: blue
//!     x: [ 1.496e11, 0.0 ]
//!     v: [ 0.0, 29780.0 ]
//!     mass: 5.972e24
//!     active: true
//!
//! transfer:                  # optional: plan a Hohmann transfer as well
//!   r1: 7.0e6
//!   r2: 4.2e7
//!   mu: 3.986e14
//!   samples: [200, 300, 200]
//! ```
//!
//! The engine maps this configuration into its internal runtime types
//! (see `simulation::scenario`).

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64, // time step size (s)
    pub g: f64,  // gravitational constant
    #[serde(default)]
    pub path_capacity: Option<usize>, // trailing path window, omit for unbounded
}

/// Optional fixed central mass at the origin
#[derive(Deserialize, Debug, Clone)]
pub struct CentralConfig {
    pub mass: f64,
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String,  // identity tag
    pub color: String, // render tag, passed through to snapshots
    pub x: [f64; 2],   // initial position (m)
    pub v: [f64; 2],   // initial velocity (m/s)
    pub mass: f64,
    #[serde(default = "default_active")]
    pub active: bool, // whether the body's mass pulls on others initially
}

/// Optional Hohmann-transfer planning request
#[derive(Deserialize, Debug, Clone)]
pub struct TransferConfig {
    pub r1: f64, // departure orbit radius (m)
    pub r2: f64, // arrival orbit radius (m)
    pub mu: f64, // standard gravitational parameter of the central body
    pub samples: [usize; 3], // samples per phase: departure, transfer, arrival
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub central: Option<CentralConfig>,
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub transfer: Option<TransferConfig>,
}

fn default_active() -> bool {
    true
}
