//! Parallel machine scheduling with release times and sequence-dependent
//! setups.
//!
//! Jobs with release times are assigned to identical parallel machines;
//! switching from one job to another on a machine costs a setup that depends
//! on the ordered pair. The objective is the makespan. The problem is
//! NP-hard, so this crate searches with a genetic algorithm and measures the
//! result against a data-dependent lower bound.
//!
//! - [`instance`]: Validated problem data and JSON loading
//! - [`decoder`]: Greedy permutation-to-schedule decoding
//! - [`ga`]: Generational GA over job permutations
//! - [`bound`]: Data-dependent lower bound (DDLB)
//! - [`report`]: Makespan/DDLB quality summary
//!
//! # Example
//!
//! ```
//! use u_pmsp::ga::{GaConfig, GaRunner};
//! use u_pmsp::{decode, Instance, LowerBound};
//!
//! let instance = Instance::new(
//!     2,
//!     vec![4.0, 3.0, 3.0, 2.0],
//!     vec![0.0, 0.0, 1.0, 2.0],
//!     vec![vec![1.0; 4]; 4],
//! )
//! .unwrap();
//!
//! let config = GaConfig::default().with_generations(50).with_seed(42);
//! let result = GaRunner::run(&instance, &config).unwrap();
//! let schedule = decode(result.best_chromosome(), &instance);
//! let bound = LowerBound::compute(&instance);
//!
//! assert_eq!(schedule.makespan, result.best_cost);
//! assert!(result.best_cost >= bound.admissible_value());
//! ```

pub mod bound;
pub mod decoder;
pub mod error;
pub mod ga;
pub mod instance;
pub mod random;
pub mod report;

pub use bound::{lower_bound, LowerBound};
pub use decoder::{decode, makespan, Schedule};
pub use error::{ConfigError, InstanceError};
pub use instance::Instance;
pub use report::QualityReport;
