//! # Catador
//!
//! Wine cultivar inference service: a REST API and terminal dashboard
//! for a tree-ensemble classifier over the classic 13-feature wine
//! chemistry schema.
//!
//! Catador (Spanish: "taster") answers one question per request:
//! given thirteen physicochemical measurements of a wine sample,
//! which of three cultivars did it come from?
//!
//! ## Features
//!
//! - **REST API**: health check, single-sample prediction, Prometheus metrics
//! - **.ctd artifacts**: versioned on-disk model container with validation on load
//! - **Terminal dashboard**: health probe, test-sample predictions, session history
//! - **Hot artifact swap**: the model file is re-read per request, so replacing
//!   it on disk changes what the next prediction serves
//!
//! ## Example
//!
//! ```rust
//! use catador::artifact::{Classifier, WineModel};
//!
//! let model = WineModel::demo();
//! let row = vec![
//!     13.2, 1.78, 2.14, 11.2, 100.0, 2.65, 2.76, 0.26, 1.28, 4.38, 1.05, 3.4, 1050.0,
//! ];
//! let predictions = model.predict(&[row]).unwrap();
//! assert_eq!(predictions, vec![0]);
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
// Clippy allows (MUST come after deny/warn to override them)
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::float_cmp)] // Allow float comparisons in tests

pub mod api;
/// .ctd artifact container and the tree-ensemble classifier inside it
pub mod artifact;
pub mod client;
pub mod error;
pub mod metrics;
/// Wine domain types: the 13-feature wire schema and its validation
pub mod wine;

// Re-exports for convenience
pub use error::{CatadorError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
