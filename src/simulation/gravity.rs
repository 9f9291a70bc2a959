//! Gravitational acceleration for the n-body engine
//!
//! Direct pairwise Newtonian gravity plus an optional fixed central
//! attractor. Each body's contribution can be switched off individually
//! (`gravitationally_active`); a switched-off body still feels every
//! force from the bodies that remain active.
//!
//! There is no softening: two coincident positions are a defined
//! failure (`OrbError::Singularity`), never an IEEE infinity that leaks
//! into the state.

use crate::error::OrbError;
use crate::simulation::states::{NVec2, System};

/// Direct O(n^2) Newtonian gravity evaluator.
/// Acceptable for the small body counts (tens) this engine targets.
#[derive(Debug)]
pub struct GravityField {
    pub g: f64, // gravitational constant
}

impl GravityField {
    /// Compute total accelerations for all bodies in `sys`, all taken from
    /// the same position snapshot.
    /// - `out[i]` is set to the net acceleration on body i
    pub fn accumulate_accels(&self, sys: &System, out: &mut [NVec2]) -> Result<(), OrbError> {
        let n = sys.bodies.len();

        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &sys.bodies[i];

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // Displacement from i to j: i is pulled along +r, j along -r
                let r = bj.x - bi.x;
                let r2 = r.dot(&r);
                if r2 == 0.0 {
                    return Err(self.coincident(sys, &bi.name, &bj.name));
                }

                // G / |r|^3, so that a = G m r / |r|^3
                let inv_r = r2.sqrt().recip();
                let coef = self.g * inv_r * inv_r * inv_r;

                // A pair contributes one-way when only one side is active:
                // an inactive body exerts nothing but is still pulled.
                if bj.gravitationally_active {
                    out[i] += coef * bj.m * r;
                }
                if bi.gravitationally_active {
                    out[j] -= coef * bi.m * r;
                }
            }
        }

        // Central attractor acts on every body when switched on
        if let Some(central) = sys.central.as_ref().filter(|c| c.active) {
            for (b, a) in sys.bodies.iter().zip(out.iter_mut()) {
                let r = central.x - b.x;
                let r2 = r.dot(&r);
                if r2 == 0.0 {
                    return Err(self.coincident(sys, &b.name, "central"));
                }
                let inv_r = r2.sqrt().recip();
                *a += self.g * central.m * inv_r * inv_r * inv_r * r;
            }
        }

        Ok(())
    }

    /// Net acceleration on a single body.
    pub fn acceleration_on(&self, sys: &System, index: usize) -> Result<NVec2, OrbError> {
        if index >= sys.bodies.len() {
            return Err(OrbError::BodyIndex(index));
        }
        let mut out = vec![NVec2::zeros(); sys.bodies.len()];
        self.accumulate_accels(sys, &mut out)?;
        Ok(out[index])
    }

    fn coincident(&self, sys: &System, a: &str, b: &str) -> OrbError {
        OrbError::Singularity {
            a: a.to_string(),
            b: b.to_string(),
            t: sys.clock.time(),
        }
    }
}
