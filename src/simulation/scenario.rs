//! Build a fully-initialized integrator from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime
//! [`NBodyIntegrator`]:
//! - bodies at step 0 with empty paths,
//! - optional central attractor fixed at the origin,
//! - numerical parameters (`Parameters`)
//!
//! The driver binary (or any embedding front end) holds the returned
//! integrator and pulls it forward step by step.

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::OrbError;
use crate::simulation::integrator::NBodyIntegrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, CentralAttractor, NVec2};

/// Map `ScenarioConfig` to a ready-to-step [`NBodyIntegrator`].
/// Parameter validation happens inside `NBodyIntegrator::configure`.
pub fn build_scenario(cfg: ScenarioConfig) -> Result<NBodyIntegrator, OrbError> {
    // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
    let bodies: Vec<Body> = cfg
        .bodies
        .iter()
        .map(|bc: &BodyConfig| Body {
            name: bc.name.clone(),
            color: bc.color.clone(),
            x: NVec2::new(bc.x[0], bc.x[1]),
            v: NVec2::new(bc.v[0], bc.v[1]),
            m: bc.mass,
            gravitationally_active: bc.active,
            path: Vec::new(),
        })
        .collect();

    // Central attractor sits at the origin
    let central = cfg.central.as_ref().map(|cc| CentralAttractor {
        x: NVec2::zeros(),
        m: cc.mass,
        active: cc.active,
    });

    let p_cfg = cfg.parameters;
    let parameters = Parameters {
        dt: p_cfg.dt,
        g: p_cfg.g,
        path_capacity: p_cfg.path_capacity,
    };

    NBodyIntegrator::configure(bodies, central, parameters)
}
