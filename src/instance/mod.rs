//! Problem data.
//!
//! An [`Instance`] is validated once at construction and is read-only
//! afterwards. Every other component borrows it; nothing ever mutates it,
//! so it can be shared across rayon workers without synchronization.
//!
//! # Submodules
//!
//! - [`loader`]: JSON instance files produced by the instance generator

pub mod loader;

use crate::error::InstanceError;

/// A parallel machine scheduling instance with release times and
/// sequence-dependent setups.
///
/// Jobs are indexed `0..n_jobs`, machines `0..n_machines`. Machines are
/// identical: a job takes the same processing time on every machine.
///
/// # Examples
///
/// ```
/// use u_pmsp::Instance;
///
/// let instance = Instance::new(
///     1,
///     vec![3.0, 2.0, 4.0],
///     vec![0.0, 0.0, 0.0],
///     vec![
///         vec![0.0, 1.0, 1.0],
///         vec![1.0, 0.0, 1.0],
///         vec![1.0, 1.0, 0.0],
///     ],
/// )
/// .unwrap();
/// assert_eq!(instance.n_jobs(), 3);
/// assert_eq!(instance.setup(0, 2), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    n_machines: usize,
    processing_times: Vec<f64>,
    ready_times: Vec<f64>,
    setup_matrix: Vec<Vec<f64>>,
    scenario: Option<String>,
}

impl Instance {
    /// Creates a validated instance.
    ///
    /// `setup_matrix[i][j]` is the delay incurred when job `j` directly
    /// follows job `i` on the same machine. The diagonal is never read.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError`] when there are no jobs or machines, when
    /// vector lengths disagree, when the setup matrix is not `n_jobs x n_jobs`,
    /// or when any duration, ready time, or setup is negative or not finite.
    pub fn new(
        n_machines: usize,
        processing_times: Vec<f64>,
        ready_times: Vec<f64>,
        setup_matrix: Vec<Vec<f64>>,
    ) -> Result<Self, InstanceError> {
        let n = processing_times.len();
        if n == 0 {
            return Err(InstanceError::NoJobs);
        }
        if n_machines == 0 {
            return Err(InstanceError::NoMachines);
        }
        if ready_times.len() != n {
            return Err(InstanceError::LengthMismatch {
                field: "ready_times",
                expected: n,
                found: ready_times.len(),
            });
        }
        if setup_matrix.len() != n {
            return Err(InstanceError::LengthMismatch {
                field: "setup_matrix",
                expected: n,
                found: setup_matrix.len(),
            });
        }
        for (row, values) in setup_matrix.iter().enumerate() {
            if values.len() != n {
                return Err(InstanceError::NonSquareSetup {
                    row,
                    len: values.len(),
                });
            }
        }

        check_non_negative("processing_times", &processing_times)?;
        check_non_negative("ready_times", &ready_times)?;
        for (i, row) in setup_matrix.iter().enumerate() {
            for (j, &s) in row.iter().enumerate() {
                if i != j && !is_non_negative(s) {
                    return Err(InstanceError::Negative {
                        field: "setup_matrix",
                        index: i * n + j,
                    });
                }
            }
        }

        Ok(Self {
            n_machines,
            processing_times,
            ready_times,
            setup_matrix,
            scenario: None,
        })
    }

    /// Attaches a scenario label (used only for reporting).
    pub fn with_scenario(mut self, scenario: impl Into<String>) -> Self {
        self.scenario = Some(scenario.into());
        self
    }

    /// Number of jobs.
    #[inline]
    pub fn n_jobs(&self) -> usize {
        self.processing_times.len()
    }

    /// Number of identical machines.
    #[inline]
    pub fn n_machines(&self) -> usize {
        self.n_machines
    }

    /// Processing time of `job`.
    #[inline]
    pub fn processing_time(&self, job: usize) -> f64 {
        self.processing_times[job]
    }

    /// Release time of `job`.
    #[inline]
    pub fn ready_time(&self, job: usize) -> f64 {
        self.ready_times[job]
    }

    /// Setup delay when `to` directly follows `from` on one machine.
    #[inline]
    pub fn setup(&self, from: usize, to: usize) -> f64 {
        self.setup_matrix[from][to]
    }

    pub fn processing_times(&self) -> &[f64] {
        &self.processing_times
    }

    pub fn ready_times(&self) -> &[f64] {
        &self.ready_times
    }

    pub fn setup_matrix(&self) -> &[Vec<f64>] {
        &self.setup_matrix
    }

    /// Scenario label, if the instance carried one.
    pub fn scenario(&self) -> Option<&str> {
        self.scenario.as_deref()
    }
}

#[inline]
fn is_non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

fn check_non_negative(field: &'static str, values: &[f64]) -> Result<(), InstanceError> {
    match values.iter().position(|&v| !is_non_negative(v)) {
        Some(index) => Err(InstanceError::Negative { field, index }),
        None => Ok(()),
    }
}
