//! Schedule representation produced by the decoder.

use serde::Serialize;

/// One job placed on a machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScheduledJob {
    /// Job index.
    pub job: usize,
    /// Start of processing (after setup and release).
    pub start: f64,
    /// Completion time.
    pub end: f64,
}

/// The ordered job sequence of a single machine.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MachineSchedule {
    /// Jobs in processing order.
    pub jobs: Vec<ScheduledJob>,
    /// Time at which the machine becomes free (0 for an idle machine).
    pub free_time: f64,
}

impl MachineSchedule {
    /// Job indices in processing order.
    pub fn sequence(&self) -> Vec<usize> {
        self.jobs.iter().map(|j| j.job).collect()
    }

    /// Completion time of the last job, or 0 when idle.
    pub fn completion(&self) -> f64 {
        self.jobs.last().map_or(0.0, |j| j.end)
    }
}

/// Condensed per-machine view used for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MachineSummary {
    pub machine: usize,
    pub sequence: Vec<usize>,
    pub completion: f64,
}

/// A complete schedule: one [`MachineSchedule`] per machine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    /// Per-machine sequences, indexed by machine.
    pub machines: Vec<MachineSchedule>,
    /// Maximum free time over all machines.
    pub makespan: f64,
}

impl Schedule {
    /// Number of machines (including idle ones).
    pub fn n_machines(&self) -> usize {
        self.machines.len()
    }

    /// Total number of placed jobs.
    pub fn n_jobs(&self) -> usize {
        self.machines.iter().map(|m| m.jobs.len()).sum()
    }

    /// Looks up where `job` was placed: `(machine, entry)`.
    pub fn find(&self, job: usize) -> Option<(usize, &ScheduledJob)> {
        self.machines.iter().enumerate().find_map(|(m, ms)| {
            ms.jobs.iter().find(|j| j.job == job).map(|j| (m, j))
        })
    }

    /// Sequence and completion time for each machine.
    pub fn summaries(&self) -> Vec<MachineSummary> {
        self.machines
            .iter()
            .enumerate()
            .map(|(machine, ms)| MachineSummary {
                machine,
                sequence: ms.sequence(),
                completion: ms.completion(),
            })
            .collect()
    }
}
