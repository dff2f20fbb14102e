//! Data-dependent lower bound (DDLB) on the optimal makespan.
//!
//! Computed from the instance alone and never fed back into the search; it
//! only serves as the denominator of the makespan/DDLB quality ratio.
//!
//! # Components
//!
//! Let `δ_i = min_{j≠i} setup[i][j]`, the cheapest delay that can follow job
//! `i` (0 when there is a single job).
//!
//! - **Workload**: every job that is not the last on its machine pays at
//!   least `δ_i`, and at most `m` jobs are last. Hence total busy time is at
//!   least `Σp + Σδ − (sum of the m largest δ)`, and some machine carries at
//!   least `1/m` of it.
//! - **Critical path**: `max_i (r_i + p_i + δ_i)`.
//!
//! `DDLB = max(workload, critical_path)`.
//!
//! The critical-path term charges `δ_i` even when job `i` ends up last on its
//! machine, so on instances with large setups relative to processing it can
//! exceed the optimum. [`LowerBound::admissible_value`] replaces it with the
//! release bound `max_i (r_i + p_i)`, which never does.

use serde::Serialize;

use crate::instance::Instance;

/// All components of the data-dependent lower bound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowerBound {
    /// `δ_i` per job.
    pub min_setups: Vec<f64>,
    /// Workload bound (not rounded).
    pub workload: f64,
    /// `max_i (r_i + p_i + δ_i)`.
    pub critical_path: f64,
    /// `max_i (r_i + p_i)`.
    pub release: f64,
}

impl LowerBound {
    /// Computes every component for `instance`.
    ///
    /// # Complexity
    /// O(n² + n log n).
    pub fn compute(instance: &Instance) -> Self {
        let n = instance.n_jobs();
        let m = instance.n_machines();

        let min_setups: Vec<f64> = (0..n)
            .map(|i| {
                (0..n)
                    .filter(|&j| j != i)
                    .map(|j| instance.setup(i, j))
                    .fold(None, |acc: Option<f64>, s| Some(acc.map_or(s, |a| a.min(s))))
                    .unwrap_or(0.0)
            })
            .collect();

        let total_processing: f64 = instance.processing_times().iter().sum();
        let total_min_setup: f64 = min_setups.iter().sum();

        let mut sorted = min_setups.clone();
        sorted.sort_by(|a, b| b.total_cmp(a));
        let forgiven: f64 = sorted.iter().take(m).sum();

        let workload = (total_processing + total_min_setup - forgiven) / m as f64;

        let mut critical_path = 0.0f64;
        let mut release = 0.0f64;
        for (i, &delta) in min_setups.iter().enumerate() {
            let finish = instance.ready_time(i) + instance.processing_time(i);
            release = release.max(finish);
            critical_path = critical_path.max(finish + delta);
        }

        Self {
            min_setups,
            workload,
            critical_path,
            release,
        }
    }

    /// `max(workload, critical_path)`.
    pub fn value(&self) -> f64 {
        self.workload.max(self.critical_path)
    }

    /// `max(workload, release)`: a bound that holds for every instance.
    pub fn admissible_value(&self) -> f64 {
        self.workload.max(self.release)
    }
}

/// Shorthand for `LowerBound::compute(instance).value()`.
pub fn lower_bound(instance: &Instance) -> f64 {
    LowerBound::compute(instance).value()
}
