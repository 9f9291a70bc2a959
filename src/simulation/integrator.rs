//! Fixed-step semi-implicit (symplectic) Euler integrator owning the
//! full mutable simulation state
//!
//! `NBodyIntegrator` is the single owner of bodies, central attractor
//! and clock. An external driver (renderer, CLI) pulls it forward one
//! `step()` at a time and reads results back through `snapshot()`;
//! the integrator never schedules itself and performs no I/O.

use crate::error::{check_positive, OrbError};
use crate::simulation::gravity::GravityField;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyState, CentralAttractor, NVec2, SimClock, System};

#[derive(Debug)]
pub struct NBodyIntegrator {
    system: System,
    gravity: GravityField,
    initial: Vec<(NVec2, NVec2)>, // (x, v) per body as passed to configure
    path_capacity: Option<usize>,
}

impl NBodyIntegrator {
    /// Build an integrator from fully-initialized bodies, an optional
    /// central attractor, and runtime parameters.
    ///
    /// Snapshots every body's position and velocity for later `reset()`.
    /// Fails with `Domain` on any non-positive or non-finite mass, `dt`
    /// or `g`, or on non-finite initial state.
    pub fn configure(
        bodies: Vec<Body>,
        central: Option<CentralAttractor>,
        params: Parameters,
    ) -> Result<Self, OrbError> {
        check_positive("dt", params.dt)?;
        check_positive("g", params.g)?;
        for b in &bodies {
            check_positive("mass", b.m)?;
            if !(b.x.x.is_finite() && b.x.y.is_finite() && b.v.x.is_finite() && b.v.y.is_finite()) {
                return Err(OrbError::Domain {
                    name: "initial state",
                    value: f64::NAN,
                });
            }
        }
        if let Some(c) = &central {
            check_positive("central mass", c.m)?;
        }

        let initial = bodies.iter().map(|b| (b.x, b.v)).collect();
        let mut bodies = bodies;
        for b in &mut bodies {
            b.path.clear();
        }

        Ok(Self {
            system: System {
                bodies,
                central,
                clock: SimClock::new(params.dt),
            },
            gravity: GravityField { g: params.g },
            initial,
            path_capacity: params.path_capacity,
        })
    }

    /// Advance every body by one step of duration `dt`.
    ///
    /// Accelerations for all bodies come from the same pre-step position
    /// snapshot (synchronous update), then each body gets the
    /// semi-implicit Euler update: velocity first, position from the
    /// *new* velocity. The new position is appended to the body's path.
    ///
    /// Propagates `Singularity` from the force pass untouched; whether to
    /// halt or retry with different parameters is the caller's policy.
    pub fn step(&mut self) -> Result<(), OrbError> {
        let n = self.system.bodies.len();
        if n == 0 {
            self.system.clock.advance();
            return Ok(());
        }

        let dt = self.system.clock.dt;

        // a_n for every body, all from positions at t_n
        let mut accels = vec![NVec2::zeros(); n];
        self.gravity.accumulate_accels(&self.system, &mut accels)?;

        // Kick then drift: v_n+1 = v_n + dt a_n, x_n+1 = x_n + dt v_n+1
        for (b, a) in self.system.bodies.iter_mut().zip(accels.iter()) {
            b.v += dt * *a;
            b.x += dt * b.v;

            b.path.push(b.x);
            if let Some(cap) = self.path_capacity {
                if b.path.len() > cap {
                    let excess = b.path.len() - cap;
                    b.path.drain(..excess);
                }
            }
        }

        self.system.clock.advance();
        Ok(())
    }

    /// Switch one body's gravitational pull on others on or off.
    /// The body keeps being accelerated by everything else either way.
    pub fn toggle_body_gravity(&mut self, index: usize, enabled: bool) -> Result<(), OrbError> {
        let body = self
            .system
            .bodies
            .get_mut(index)
            .ok_or(OrbError::BodyIndex(index))?;
        body.gravitationally_active = enabled;
        Ok(())
    }

    /// Switch the central attractor's pull on or off. No-op without one.
    pub fn toggle_central_gravity(&mut self, enabled: bool) {
        if let Some(c) = self.system.central.as_mut() {
            c.active = enabled;
        }
    }

    /// Restore every body to its configure-time position and velocity,
    /// clear all paths and zero the clock. Gravity toggles are user
    /// controls and keep their current values.
    pub fn reset(&mut self) {
        for (b, (x0, v0)) in self.system.bodies.iter_mut().zip(self.initial.iter()) {
            b.x = *x0;
            b.v = *v0;
            b.path.clear();
        }
        self.system.clock.reset();
    }

    /// Copy-out view of the current state for a renderer.
    pub fn snapshot(&self) -> Vec<BodyState> {
        self.system
            .bodies
            .iter()
            .map(|b| BodyState {
                name: b.name.clone(),
                color: b.color.clone(),
                position: b.x,
                velocity: b.v,
                path: b.path.clone(),
                gravitationally_active: b.gravitationally_active,
            })
            .collect()
    }

    /// Elapsed simulation time in seconds
    pub fn time(&self) -> f64 {
        self.system.clock.time()
    }

    /// Number of completed steps
    pub fn step_count(&self) -> u64 {
        self.system.clock.steps
    }

    pub fn body_count(&self) -> usize {
        self.system.bodies.len()
    }
}
