//! Hohmann-transfer planning and trajectory sampling
//!
//! [`TransferSpec::plan`] turns two coplanar circular orbit radii and a
//! gravitational parameter into the transfer ellipse geometry, leg
//! periods and the two burn magnitudes. [`TransferSpec::sample_trajectory`]
//! then builds an index-addressable sequence of position/speed/energy
//! samples across the three flight phases: departure circle, transfer
//! half-ellipse, arrival circle.

use crate::error::{check_positive, OrbError};
use crate::simulation::states::NVec2;
use crate::transfer::kepler::KeplerSolver;

use std::f64::consts::PI;

/// Immutable result of planning one outward Hohmann transfer.
#[derive(Debug, Clone, Copy)]
pub struct TransferSpec {
    pub r1: f64, // departure orbit radius (m)
    pub r2: f64, // arrival orbit radius (m)
    pub mu: f64, // standard gravitational parameter
    pub a_t: f64, // transfer semi-major axis
    pub e_t: f64, // transfer eccentricity, in [0, 1)
    pub v1: f64, // circular speed at r1
    pub v2: f64, // circular speed at r2
    pub v_periapsis: f64, // transfer-ellipse speed at r1
    pub v_apoapsis: f64, // transfer-ellipse speed at r2
    pub dv1: f64, // first burn magnitude
    pub dv2: f64, // second burn magnitude
    pub t1: f64, // period of the r1 circle
    pub t_transfer: f64, // half period of the transfer ellipse
    pub t2: f64, // period of the r2 circle
}

impl TransferSpec {
    /// Plan an outward transfer from the circle at `r1` to the circle at `r2`.
    ///
    /// Requires `0 < r1 < r2` and `mu > 0`. The degenerate `r1 == r2`
    /// transfer (zero-energy, zero burns) is rejected as a `Domain` error,
    /// as is the inward direction, keeping `e_t` inside [0, 1).
    pub fn plan(r1: f64, r2: f64, mu: f64) -> Result<Self, OrbError> {
        check_positive("r1", r1)?;
        check_positive("r2", r2)?;
        check_positive("mu", mu)?;
        if r2 <= r1 {
            return Err(OrbError::Domain {
                name: "r2 - r1",
                value: r2 - r1,
            });
        }

        let a_t = (r1 + r2) / 2.0;
        let e_t = (r2 - r1) / (r1 + r2);

        let v1 = (mu / r1).sqrt();
        let v2 = (mu / r2).sqrt();

        // Vis-viva at the transfer ellipse's apsides
        let v_periapsis = (mu * (2.0 / r1 - 1.0 / a_t)).sqrt();
        let v_apoapsis = (mu * (2.0 / r2 - 1.0 / a_t)).sqrt();

        Ok(Self {
            r1,
            r2,
            mu,
            a_t,
            e_t,
            v1,
            v2,
            v_periapsis,
            v_apoapsis,
            dv1: (v_periapsis - v1).abs(),
            dv2: (v2 - v_apoapsis).abs(),
            t1: 2.0 * PI * (r1.powi(3) / mu).sqrt(),
            t_transfer: PI * (a_t.powi(3) / mu).sqrt(),
            t2: 2.0 * PI * (r2.powi(3) / mu).sqrt(),
        })
    }

    /// Sum of both burn magnitudes.
    pub fn dv_total(&self) -> f64 {
        self.dv1 + self.dv2
    }

    /// Build the sampled trajectory across the three phases.
    ///
    /// Sample times cover each phase inclusively (first sample at phase
    /// start, last at phase end), so the departure circle closes at angle
    /// 2π just as the transfer departs from angle 0, and the transfer ends
    /// at apoapsis where the arrival circle picks up. The transfer phase's
    /// eccentric anomalies are solved in one batch here; sample positions
    /// are computed lazily on lookup.
    pub fn sample_trajectory(
        &self,
        counts: PhaseCounts,
        solver: &KeplerSolver,
    ) -> Result<Trajectory, OrbError> {
        counts.validate()?;

        // M = sqrt(mu / a^3) * t, t swept inclusively over [0, Tt]
        let mean_motion = (self.mu / self.a_t.powi(3)).sqrt();
        let mean_anomalies: Vec<f64> = (0..counts.transfer)
            .map(|j| mean_motion * self.t_transfer * frac(j, counts.transfer))
            .collect();
        let ecc_anomalies = solver.solve_batch(&mean_anomalies, self.e_t)?;

        // Arrival phase continues from the transfer's final true anomaly
        let theta_arrival = true_anomaly(ecc_anomalies[ecc_anomalies.len() - 1], self.e_t);

        Ok(Trajectory {
            spec: *self,
            counts,
            ecc_anomalies,
            theta_arrival,
        })
    }
}

/// Caller-supplied sample counts per phase. Each phase needs at least
/// two samples (its start and end points).
#[derive(Debug, Clone, Copy)]
pub struct PhaseCounts {
    pub departure: usize,
    pub transfer: usize,
    pub arrival: usize,
}

impl PhaseCounts {
    fn validate(&self) -> Result<(), OrbError> {
        for (name, n) in [
            ("departure samples", self.departure),
            ("transfer samples", self.transfer),
            ("arrival samples", self.arrival),
        ] {
            if n < 2 {
                return Err(OrbError::Domain {
                    name,
                    value: n as f64,
                });
            }
        }
        Ok(())
    }

    pub fn total(&self) -> usize {
        self.departure + self.transfer + self.arrival
    }
}

/// One point of the sampled transfer profile.
#[derive(Debug, Clone, Copy)]
pub struct TrajectorySample {
    pub position: NVec2,
    pub speed: f64,
    pub energy: f64, // specific orbital energy, 0.5 v^2 - mu / r
}

/// Finite, restartable sequence of [`TrajectorySample`]s indexed
/// 0..len()-1 across the three concatenated phases.
pub struct Trajectory {
    spec: TransferSpec,
    counts: PhaseCounts,
    ecc_anomalies: Vec<f64>, // one per transfer-phase sample
    theta_arrival: f64, // true anomaly where the arrival circle starts
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.counts.total()
    }

    pub fn is_empty(&self) -> bool {
        false // every phase carries at least two samples
    }

    /// Sample `i` of the concatenated sequence, or `None` past the end.
    pub fn sample(&self, i: usize) -> Option<TrajectorySample> {
        let s = &self.spec;
        let n1 = self.counts.departure;
        let nt = self.counts.transfer;

        if i < n1 {
            // Departure circle: angle sweeps linearly over one period
            let theta = 2.0 * PI * frac(i, n1);
            Some(circular_sample(s.mu, s.r1, theta))
        } else if i < n1 + nt {
            // Transfer ellipse, driven by the pre-solved eccentric anomaly
            let ecc_anomaly = *self.ecc_anomalies.get(i - n1)?;
            let theta = true_anomaly(ecc_anomaly, s.e_t);
            let r = s.a_t * (1.0 - s.e_t * ecc_anomaly.cos());
            let speed = (s.mu * (2.0 / r - 1.0 / s.a_t)).sqrt();
            Some(sample_at(s.mu, r, theta, speed))
        } else if i < self.len() {
            // Arrival circle continuing from the transfer's end angle
            let k = i - n1 - nt;
            let theta = self.theta_arrival + 2.0 * PI * frac(k, self.counts.arrival);
            Some(circular_sample(s.mu, s.r2, theta))
        } else {
            None
        }
    }

    /// Restartable iteration over all samples in index order.
    pub fn iter(&self) -> impl Iterator<Item = TrajectorySample> + '_ {
        (0..self.len()).filter_map(move |i| self.sample(i))
    }
}

/// True anomaly from eccentric anomaly,
/// `theta = 2 atan2(sqrt(1+e) sin(E/2), sqrt(1-e) cos(E/2))`
fn true_anomaly(ecc_anomaly: f64, e: f64) -> f64 {
    2.0 * f64::atan2(
        (1.0 + e).sqrt() * (ecc_anomaly / 2.0).sin(),
        (1.0 - e).sqrt() * (ecc_anomaly / 2.0).cos(),
    )
}

/// Inclusive phase fraction: i = 0 maps to 0, i = n-1 maps to 1
fn frac(i: usize, n: usize) -> f64 {
    i as f64 / (n - 1) as f64
}

fn circular_sample(mu: f64, r: f64, theta: f64) -> TrajectorySample {
    sample_at(mu, r, theta, (mu / r).sqrt())
}

fn sample_at(mu: f64, r: f64, theta: f64, speed: f64) -> TrajectorySample {
    TrajectorySample {
        position: NVec2::new(r * theta.cos(), r * theta.sin()),
        speed,
        energy: 0.5 * speed * speed - mu / r,
    }
}
