//! Permutation-to-schedule decoding.
//!
//! A chromosome is a job ordering. The decoder turns it into a schedule by
//! greedy list scheduling: jobs are taken strictly in chromosome order and
//! each one goes to the machine on which it would complete earliest.
//!
//! # Algorithm
//!
//! For each job `j` and machine `m` with free time `f[m]` and last job `l[m]`:
//!
//! ```text
//! start(m) = max(f[m] + setup[l[m]][j], ready[j])   (setup = 0 if m is empty)
//! end(m)   = start(m) + p[j]
//! ```
//!
//! The job is assigned to `argmin end(m)`; ties go to the lowest machine
//! index. This tie-break is part of the contract: changing it changes which
//! schedule a chromosome maps to, and therefore every seeded GA run.
//!
//! # Complexity
//! O(n_jobs · n_machines) time.

mod types;

pub use types::{MachineSchedule, MachineSummary, Schedule, ScheduledJob};

use crate::instance::Instance;

/// Decodes `chromosome` into a full schedule.
///
/// `chromosome` must be a permutation of `0..instance.n_jobs()`.
///
/// # Examples
///
/// ```
/// use u_pmsp::{decode, Instance};
///
/// let instance = Instance::new(
///     1,
///     vec![3.0, 2.0, 4.0],
///     vec![0.0; 3],
///     vec![vec![0.0, 1.0, 1.0], vec![1.0, 0.0, 1.0], vec![1.0, 1.0, 0.0]],
/// )
/// .unwrap();
///
/// let schedule = decode(&[0, 1, 2], &instance);
/// assert_eq!(schedule.makespan, 11.0);
/// assert_eq!(schedule.machines[0].jobs[2].start, 7.0);
/// ```
pub fn decode(chromosome: &[usize], instance: &Instance) -> Schedule {
    let mut machines = vec![MachineSchedule::default(); instance.n_machines()];
    let mut dispatcher = Dispatcher::new(instance);

    for &job in chromosome {
        let (m, start, end) = dispatcher.assign(job);
        machines[m].jobs.push(ScheduledJob { job, start, end });
    }

    for (ms, &free) in machines.iter_mut().zip(&dispatcher.free_time) {
        ms.free_time = free;
    }

    Schedule {
        machines,
        makespan: dispatcher.makespan(),
    }
}

/// Decodes `chromosome` and returns only the makespan.
///
/// Equivalent to `decode(chromosome, instance).makespan` without building
/// the per-machine job lists.
pub fn makespan(chromosome: &[usize], instance: &Instance) -> f64 {
    let mut dispatcher = Dispatcher::new(instance);
    for &job in chromosome {
        dispatcher.assign(job);
    }
    dispatcher.makespan()
}

/// Per-machine state of the greedy list scheduler.
struct Dispatcher<'a> {
    instance: &'a Instance,
    free_time: Vec<f64>,
    last_job: Vec<Option<usize>>,
}

impl<'a> Dispatcher<'a> {
    fn new(instance: &'a Instance) -> Self {
        let m = instance.n_machines();
        Self {
            instance,
            free_time: vec![0.0; m],
            last_job: vec![None; m],
        }
    }

    /// Places `job` on its earliest-completion machine.
    ///
    /// Returns `(machine, start, end)`.
    fn assign(&mut self, job: usize) -> (usize, f64, f64) {
        let mut best = self.candidate(0, job);
        for m in 1..self.free_time.len() {
            let cand = self.candidate(m, job);
            // strict: equal completion keeps the lower machine index
            if cand.2 < best.2 {
                best = cand;
            }
        }

        let (m, _, end) = best;
        self.free_time[m] = end;
        self.last_job[m] = Some(job);
        best
    }

    /// `(machine, start, end)` if `job` were appended to machine `m`.
    fn candidate(&self, m: usize, job: usize) -> (usize, f64, f64) {
        let setup = self.last_job[m].map_or(0.0, |prev| self.instance.setup(prev, job));
        let start = (self.free_time[m] + setup).max(self.instance.ready_time(job));
        (m, start, start + self.instance.processing_time(job))
    }

    fn makespan(&self) -> f64 {
        self.free_time.iter().copied().fold(0.0, f64::max)
    }
}
