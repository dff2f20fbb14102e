//! GA evolutionary loop execution.
//!
//! [`Evolution`] is the generation-level state machine
//! (initializing → evolving → done); [`GaRunner`] drives it to completion
//! with cancellation, time limit, and logging.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;

use super::config::GaConfig;
use super::operators::{order_crossover, swap_mutation};
use super::population::{evaluate_all, find_best, initialize_population};
use super::selection::tournament_select;
use super::types::{Evaluator, Individual, SetupEvaluator};
use crate::error::ConfigError;
use crate::instance::Instance;
use crate::random::create_rng;

/// Generations between progress log lines.
const LOG_INTERVAL: usize = 10;

/// Result of a GA run.
#[derive(Debug, Clone, Serialize)]
pub struct GaResult {
    /// Best individual found during the entire run.
    pub best: Individual,

    /// Same as `best.cost()`.
    pub best_cost: f64,

    /// Best cost so far after each generation, starting with generation 0
    /// (the initial population). Non-increasing, length `generations + 1`.
    pub history: Vec<f64>,

    /// Generations actually executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether the run stopped on `time_limit_ms`.
    pub timed_out: bool,

    /// Seed actually used (drawn at random when the config had none).
    pub seed: u64,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

impl GaResult {
    pub fn best_chromosome(&self) -> &[usize] {
        self.best.chromosome()
    }

    /// Best cost of the initial population.
    pub fn initial_cost(&self) -> f64 {
        self.history[0]
    }

    /// How much the search improved on the initial population.
    pub fn improvement(&self) -> f64 {
        self.initial_cost() - self.best_cost
    }
}

/// One GA run, advanced a generation at a time.
///
/// Construction validates the configuration and builds generation 0;
/// [`step`](Self::step) produces the next full generation. A partially built
/// generation is never visible through this type.
///
/// # Examples
///
/// ```
/// use u_pmsp::ga::{Evolution, GaConfig, SetupEvaluator};
/// use u_pmsp::Instance;
///
/// let instance = Instance::new(2, vec![1.0, 2.0, 3.0], vec![0.0; 3], vec![vec![0.5; 3]; 3]).unwrap();
/// let evaluator = SetupEvaluator::new(&instance);
/// let config = GaConfig::default().with_population_size(8).with_generations(3).with_seed(1);
///
/// let mut evolution = Evolution::new(&evaluator, &config).unwrap();
/// while evolution.step() {}
/// assert_eq!(evolution.history().len(), 4);
/// ```
pub struct Evolution<'a, E: Evaluator> {
    evaluator: &'a E,
    config: GaConfig,
    rng: StdRng,
    seed: u64,
    population: Vec<Individual>,
    best: Individual,
    history: Vec<f64>,
    generation: usize,
}

impl<'a, E: Evaluator> Evolution<'a, E> {
    /// Validates `config` and creates the initial population.
    ///
    /// # Errors
    /// [`ConfigError`] if the configuration is invalid; nothing is drawn or
    /// evaluated in that case.
    pub fn new(evaluator: &'a E, config: &GaConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);

        let population =
            initialize_population(evaluator, config.population_size, &mut rng, config.parallel);
        let best = find_best(&population).clone();
        let mut history = Vec::with_capacity(config.generations.min(4096) + 1);
        history.push(best.cost());

        Ok(Self {
            evaluator,
            config: config.clone(),
            rng,
            seed,
            population,
            best,
            history,
            generation: 0,
        })
    }

    /// Runs one generation. Returns `false` (and does nothing) once the
    /// configured number of generations has been reached.
    pub fn step(&mut self) -> bool {
        if self.is_done() {
            return false;
        }

        let size = self.config.population_size;
        let elite = find_best(&self.population).clone();

        // Elite occupies one slot; every random draw for this generation
        // happens here, on one RNG, before any evaluation.
        let mut offspring: Vec<Vec<usize>> = Vec::with_capacity(size);
        while offspring.len() + 1 < size {
            let p1 = tournament_select(&self.population, self.config.tournament_size, &mut self.rng);
            let p2 = tournament_select(&self.population, self.config.tournament_size, &mut self.rng);
            let parent1 = self.population[p1].chromosome();
            let parent2 = self.population[p2].chromosome();

            let (mut c1, mut c2) = if self.rng.random_range(0.0..1.0) < self.config.crossover_rate {
                order_crossover(parent1, parent2, &mut self.rng)
            } else {
                (parent1.to_vec(), parent2.to_vec())
            };

            swap_mutation(&mut c1, self.config.mutation_rate, &mut self.rng);
            swap_mutation(&mut c2, self.config.mutation_rate, &mut self.rng);

            offspring.push(c1);
            if offspring.len() + 1 < size {
                offspring.push(c2);
            }
        }

        let mut next = Vec::with_capacity(size);
        next.push(elite);
        next.extend(evaluate_all(self.evaluator, offspring, self.config.parallel));
        self.population = next;
        self.generation += 1;

        let gen_best = find_best(&self.population);
        if gen_best.cost() < self.best.cost() {
            tracing::trace!(
                generation = self.generation,
                from = self.best.cost(),
                to = gen_best.cost(),
                "improved best"
            );
            self.best = gen_best.clone();
        }
        self.history.push(self.best.cost());
        true
    }

    pub fn is_done(&self) -> bool {
        self.generation >= self.config.generations
    }

    /// Generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Current (complete) population.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Best individual seen so far.
    pub fn best(&self) -> &Individual {
        &self.best
    }

    pub fn history(&self) -> &[f64] {
        &self.history
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn into_result(self, cancelled: bool, timed_out: bool, elapsed: Duration) -> GaResult {
        GaResult {
            best_cost: self.best.cost(),
            best: self.best,
            history: self.history,
            generations: self.generation,
            cancelled,
            timed_out,
            seed: self.seed,
            elapsed,
        }
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_pmsp::ga::{GaConfig, GaRunner};
/// use u_pmsp::Instance;
///
/// let instance = Instance::new(
///     1,
///     vec![3.0, 2.0, 4.0],
///     vec![0.0; 3],
///     vec![vec![0.0, 1.0, 1.0], vec![1.0, 0.0, 1.0], vec![1.0, 1.0, 0.0]],
/// )
/// .unwrap();
/// let config = GaConfig::default().with_population_size(10).with_generations(20).with_seed(42);
/// let result = GaRunner::run(&instance, &config).unwrap();
/// assert!(result.best_cost <= 11.0);
/// assert_eq!(result.history.len(), 21);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Minimizes the makespan of `instance`.
    ///
    /// # Errors
    /// [`ConfigError`] if the configuration is invalid.
    pub fn run(instance: &Instance, config: &GaConfig) -> Result<GaResult, ConfigError> {
        Self::run_with(&SetupEvaluator::new(instance), config, None)
    }

    /// Like [`run`](Self::run), with an optional cancellation token.
    ///
    /// If the flag is set, the GA stops before the next generation and
    /// returns the best solution found so far.
    pub fn run_with_cancel(
        instance: &Instance,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult, ConfigError> {
        Self::run_with(&SetupEvaluator::new(instance), config, cancel)
    }

    /// Runs the GA against any [`Evaluator`].
    #[tracing::instrument(
        level = "debug",
        name = "GA",
        skip(evaluator, config, cancel),
        fields(genes = evaluator.chromosome_len())
    )]
    pub fn run_with<E: Evaluator>(
        evaluator: &E,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult, ConfigError> {
        let started = Instant::now();
        let deadline = config.time_limit_ms.map(Duration::from_millis);

        let mut evolution = Evolution::new(evaluator, config)?;
        tracing::debug!(
            seed = evolution.seed(),
            population = config.population_size,
            initial_best = evolution.best().cost(),
            "initial population"
        );

        let mut cancelled = false;
        let mut timed_out = false;

        while !evolution.is_done() {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    tracing::info!(generation = evolution.generation(), "GA cancelled");
                    break;
                }
            }
            if let Some(limit) = deadline {
                if started.elapsed() >= limit {
                    timed_out = true;
                    tracing::info!(generation = evolution.generation(), "GA time limit reached");
                    break;
                }
            }

            evolution.step();

            if evolution.generation() % LOG_INTERVAL == 0 {
                tracing::debug!(
                    generation = evolution.generation(),
                    best = evolution.best().cost(),
                    "progress"
                );
            }
        }

        let result = evolution.into_result(cancelled, timed_out, started.elapsed());
        tracing::info!(
            best = result.best_cost,
            initial = result.initial_cost(),
            generations = result.generations,
            elapsed_ms = result.elapsed.as_millis() as u64,
            "GA finished"
        );
        Ok(result)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::LowerBound;
    use crate::ga::types::is_permutation;

    fn worked_example() -> Instance {
        Instance::new(
            1,
            vec![3.0, 2.0, 4.0],
            vec![0.0; 3],
            vec![vec![0.0, 1.0, 1.0], vec![1.0, 0.0, 1.0], vec![1.0, 1.0, 0.0]],
        )
        .unwrap()
    }

    /// 12 jobs, 3 machines, asymmetric setups and staggered releases.
    fn medium_instance() -> Instance {
        let n = 12;
        let p: Vec<f64> = (0..n).map(|i| 2.0 + ((i * 7) % 5) as f64).collect();
        let r: Vec<f64> = (0..n).map(|i| ((i * 3) % 8) as f64).collect();
        let s: Vec<Vec<f64>> = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 0.0 } else { ((i * 5 + j * 3) % 7) as f64 }).collect())
            .collect();
        Instance::new(3, p, r, s).unwrap()
    }

    fn base_config() -> GaConfig {
        GaConfig::default()
            .with_population_size(20)
            .with_generations(30)
            .with_mutation_rate(0.05)
            .with_seed(42)
    }

    #[test]
    fn test_worked_example() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_generations(20)
            .with_seed(42);
        let result = GaRunner::run(&worked_example(), &config).unwrap();
        assert!(result.best_cost <= 11.0);
        assert_eq!(result.history.len(), 21);
        assert_eq!(result.generations, 20);
        assert!(!result.cancelled && !result.timed_out);
        assert_eq!(result.seed, 42);
    }

    #[test]
    fn test_history_non_increasing() {
        let result = GaRunner::run(&medium_instance(), &base_config()).unwrap();
        assert_eq!(result.history.len(), 31);
        for w in result.history.windows(2) {
            assert!(w[1] <= w[0], "history regressed: {} > {}", w[1], w[0]);
        }
        assert_eq!(*result.history.last().unwrap(), result.best_cost);
    }

    #[test]
    fn test_best_is_consistent() {
        let inst = medium_instance();
        let result = GaRunner::run(&inst, &base_config()).unwrap();
        assert!(is_permutation(result.best_chromosome(), inst.n_jobs()));
        assert_eq!(
            result.best_cost,
            SetupEvaluator::new(&inst).evaluate(result.best_chromosome())
        );
        assert!(result.best_cost >= LowerBound::compute(&inst).admissible_value());
        assert!(result.improvement() >= 0.0);
    }

    #[test]
    fn test_reproducible_with_seed() {
        let inst = medium_instance();
        let a = GaRunner::run(&inst, &base_config()).unwrap();
        let b = GaRunner::run(&inst, &base_config()).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let inst = medium_instance();
        let seq = GaRunner::run(&inst, &base_config().with_parallel(false)).unwrap();
        let par = GaRunner::run(&inst, &base_config().with_parallel(true)).unwrap();
        assert_eq!(seq.best, par.best);
        assert_eq!(seq.history, par.history);
    }

    #[test]
    fn test_zero_generations() {
        let config = base_config().with_generations(0);
        let result = GaRunner::run(&medium_instance(), &config).unwrap();
        assert_eq!(result.history.len(), 1);
        assert_eq!(result.generations, 0);
        assert_eq!(result.best_cost, result.initial_cost());
    }

    #[test]
    fn test_population_size_is_fixed() {
        let inst = medium_instance();
        let eval = SetupEvaluator::new(&inst);
        for size in 1..=7 {
            let config = base_config().with_population_size(size).with_generations(4);
            let mut evo = Evolution::new(&eval, &config).unwrap();
            assert_eq!(evo.population().len(), size);
            while evo.step() {
                assert_eq!(evo.population().len(), size, "size {size} drifted");
                for ind in evo.population() {
                    assert!(is_permutation(ind.chromosome(), inst.n_jobs()));
                }
            }
            assert_eq!(evo.generation(), 4);
            assert!(!evo.step());
        }
    }

    #[test]
    fn test_elite_survives_unchanged() {
        let inst = medium_instance();
        let eval = SetupEvaluator::new(&inst);
        let mut evo = Evolution::new(&eval, &base_config()).unwrap();
        for _ in 0..5 {
            let elite = find_best(evo.population()).clone();
            evo.step();
            assert_eq!(evo.population()[0], elite);
        }
    }

    #[test]
    fn test_no_crossover_no_mutation_keeps_initial_best() {
        let config = base_config().with_crossover_rate(0.0).with_mutation_rate(0.0);
        let result = GaRunner::run(&medium_instance(), &config).unwrap();
        // children are copies of existing members, so nothing better can appear
        assert!(result.history.iter().all(|&c| c == result.initial_cost()));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = base_config().with_tournament_size(0);
        let err = GaRunner::run(&medium_instance(), &config).unwrap_err();
        assert_eq!(err, ConfigError::TournamentSize);
    }

    #[test]
    fn test_cancel_before_start() {
        let cancel = Arc::new(AtomicBool::new(true));
        let result =
            GaRunner::run_with_cancel(&medium_instance(), &base_config(), Some(cancel)).unwrap();
        assert!(result.cancelled);
        assert_eq!(result.generations, 0);
        assert_eq!(result.history.len(), 1);
    }

    #[test]
    fn test_cancellation_from_thread() {
        let config = base_config().with_generations(1_000_000);
        let cancel = Arc::new(AtomicBool::new(false));

        let cancel_clone = cancel.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(10));
            cancel_clone.store(true, Ordering::Relaxed);
        });

        let result = GaRunner::run_with_cancel(&medium_instance(), &config, Some(cancel)).unwrap();
        assert!(result.cancelled, "expected cancelled result");
        assert!(result.generations < 1_000_000);
        assert_eq!(result.history.len(), result.generations + 1);
    }

    #[test]
    fn test_time_limit() {
        let config = base_config()
            .with_generations(1_000_000)
            .with_time_limit_ms(20);
        let result = GaRunner::run(&medium_instance(), &config).unwrap();
        assert!(result.timed_out);
        assert!(result.generations < 1_000_000);
        assert_eq!(result.history.len(), result.generations + 1);
    }

    #[test]
    fn test_custom_evaluator() {
        /// Cost = number of positions out of ascending order.
        struct Displacement(usize);
        impl Evaluator for Displacement {
            fn chromosome_len(&self) -> usize {
                self.0
            }
            fn evaluate(&self, c: &[usize]) -> f64 {
                c.iter().enumerate().filter(|&(i, &v)| i != v).count() as f64
            }
        }

        let config = GaConfig::default()
            .with_population_size(40)
            .with_generations(200)
            .with_seed(7);
        let result = GaRunner::run_with(&Displacement(8), &config, None).unwrap();
        assert!(result.best_cost < result.initial_cost() || result.best_cost == 0.0);
    }
}
