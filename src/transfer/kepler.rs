//! Kepler's equation solver
//!
//! Maps mean anomaly to eccentric anomaly, `M = E - e sin E`, by
//! Newton-Raphson with an explicit tolerance and iteration cap. Hitting
//! the cap is a reported `Convergence` error, never a silently returned
//! half-converged value.

use crate::error::OrbError;

pub struct KeplerSolver {
    pub tolerance: f64, // stop when |E_k+1 - E_k| drops below this
    pub max_iterations: usize,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            max_iterations: 50,
        }
    }
}

impl KeplerSolver {
    /// Solve `M = E - e sin E` for E.
    ///
    /// `mean_anomaly` may be any real value; `eccentricity` must lie in
    /// [0, 1). Initial guess E0 = M, update
    /// `E <- E - (E - e sin E - M) / (1 - e cos E)`.
    pub fn solve(&self, mean_anomaly: f64, eccentricity: f64) -> Result<f64, OrbError> {
        if !mean_anomaly.is_finite() {
            return Err(OrbError::Domain {
                name: "mean_anomaly",
                value: mean_anomaly,
            });
        }
        if !eccentricity.is_finite() || !(0.0..1.0).contains(&eccentricity) {
            return Err(OrbError::Domain {
                name: "eccentricity",
                value: eccentricity,
            });
        }

        let (m, e) = (mean_anomaly, eccentricity);
        let mut ecc_anomaly = m;
        for _ in 0..self.max_iterations {
            let delta = (ecc_anomaly - e * ecc_anomaly.sin() - m) / (1.0 - e * ecc_anomaly.cos());
            ecc_anomaly -= delta;
            if delta.abs() < self.tolerance {
                return Ok(ecc_anomaly);
            }
        }

        Err(OrbError::Convergence {
            mean_anomaly: m,
            eccentricity: e,
            iterations: self.max_iterations,
        })
    }

    /// Elementwise solve for an ordered sequence of mean anomalies sharing
    /// one eccentricity, as needed when sampling a transfer ellipse.
    pub fn solve_batch(
        &self,
        mean_anomalies: &[f64],
        eccentricity: f64,
    ) -> Result<Vec<f64>, OrbError> {
        mean_anomalies
            .iter()
            .map(|&m| self.solve(m, eccentricity))
            .collect()
    }
}
