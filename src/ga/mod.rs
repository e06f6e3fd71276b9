//! Genetic Algorithm core.
//!
//! A fixed-start tour search over a [`LocationGraph`](crate::graph::LocationGraph):
//! each individual is a permutation of all locations beginning at a chosen
//! start, and fitness combines normalized distance and time (higher is
//! better).
//!
//! # Key Types
//!
//! - [`Route`]: one candidate tour with cached fitness
//! - [`FitnessEvaluator`] / [`ScoreWeights`]: pure route cost scoring
//! - [`Selection`]: Tournament, Roulette, or Rank parent choosing
//! - [`Mutation`]: Swap, Inversion, or Scramble route perturbation
//! - [`GaConfig`]: population size, generation count, mutation rate
//! - [`EvolutionEngine`]: the generational loop for one strategy pair
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod engine;
mod fitness;
pub mod operators;
mod route;
mod selection;

pub use config::GaConfig;
pub use engine::{EvolutionEngine, RunResult};
pub use fitness::{FitnessEvaluator, ScoreWeights};
pub use operators::{prefix_crossover, Mutation};
pub use route::Route;
pub use selection::Selection;
