//! Genetic-algorithm tour search with strategy comparison.
//!
//! Searches for a near-optimal visiting order over a fixed set of
//! locations from a chosen start, then compares nine strategy
//! combinations (3 parent-selection methods × 3 mutation operators) to
//! identify which yields the best weighted distance/time route:
//!
//! - **Selection**: Tournament, Roulette wheel, Rank
//! - **Mutation**: Swap, Inversion, Scramble
//!
//! Each combination runs the evolutionary search several times with
//! independent RNG streams; the best-of-runs outcomes are sorted and
//! dense-ranked, with tie detection at fixed decimal precision.
//!
//! The search is a heuristic: it does not guarantee a globally optimal
//! tour. Distance and time are supplied as precomputed directed matrices;
//! the crate performs no network or storage I/O.
//!
//! # Quick start
//!
//! ```
//! use route_compare::compare::{compare_strategies, CompareConfig};
//! use route_compare::dataset;
//!
//! let graph = dataset::reference_graph();
//! let outcome = compare_strategies(
//!     &graph,
//!     "Malioboro",
//!     CompareConfig::default().with_seed(42),
//! ).expect("known start location");
//!
//! for result in &outcome.results {
//!     println!(
//!         "#{} {}: {:.2} km, {} min, fitness {:.4}",
//!         result.rank,
//!         result.combination_name,
//!         result.total_distance,
//!         result.total_time,
//!         result.fitness,
//!     );
//! }
//! ```
//!
//! # Features
//!
//! - `parallel`: dispatch the 27 independent runs across a rayon pool
//! - `serde`: `Serialize`/`Deserialize` on configuration and output records

pub mod compare;
pub mod dataset;
pub mod error;
pub mod ga;
pub mod graph;
pub mod random;

pub use error::{CompareError, Result};
