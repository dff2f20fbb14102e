//! Solution quality summary.
//!
//! Combines a GA result, the decoded best schedule, and the lower bound
//! into the figures reported per instance: makespan, bound, their ratio,
//! improvement over the initial population, and run time.

use std::time::Duration;

use serde::Serialize;

use crate::bound::LowerBound;
use crate::decoder::{self, MachineSummary};
use crate::ga::GaResult;
use crate::instance::Instance;

/// Per-instance quality figures.
#[derive(Debug, Clone, Serialize)]
pub struct QualityReport {
    pub scenario: Option<String>,
    /// Best makespan found.
    pub makespan: f64,
    /// Data-dependent lower bound.
    pub lower_bound: f64,
    /// `makespan / lower_bound`, or infinity when the bound is not positive.
    pub ratio: f64,
    /// Best makespan of the initial population.
    pub initial_makespan: f64,
    pub improvement: f64,
    pub generations: usize,
    pub elapsed: Duration,
    /// Sequence and completion time of each machine in the best schedule.
    pub machines: Vec<MachineSummary>,
}

impl QualityReport {
    /// Builds the report, decoding the best chromosome against `instance`.
    pub fn new(instance: &Instance, result: &GaResult, bound: &LowerBound) -> Self {
        let schedule = decoder::decode(result.best_chromosome(), instance);
        let lower_bound = bound.value();

        Self {
            scenario: instance.scenario().map(str::to_owned),
            makespan: result.best_cost,
            lower_bound,
            ratio: quality_ratio(result.best_cost, lower_bound),
            initial_makespan: result.initial_cost(),
            improvement: result.improvement(),
            generations: result.generations,
            elapsed: result.elapsed,
            machines: schedule.summaries(),
        }
    }
}

/// `makespan / bound`, or `f64::INFINITY` when `bound <= 0`.
pub fn quality_ratio(makespan: f64, bound: f64) -> f64 {
    if bound > 0.0 {
        makespan / bound
    } else {
        f64::INFINITY
    }
}
