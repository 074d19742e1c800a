//! Journey Model
//!
//! Static data behind the journey map: touchpoints, the swim-lane axes, theme
//! taxonomies and evidence.
//!
//! # Core Concepts
//!
//! - [`Touchpoint`]: one observation (stage, persona, sentiment, frequency, confidence)
//! - [`Dataset`]: validated, immutable, ordered touchpoint collection
//! - [`Vocabulary`]: fixed ordered axis names (stages, personas, themes)
//! - [`ThemeTaxonomy`]: theme tags per label plus matrix rows/columns
//! - [`EvidenceCatalog`]: quotes and suggested actions per label
//!
//! # Example
//!
//! ```rust
//! use journey_model::demo;
//!
//! let dataset = &*demo::DATASET;
//! assert_eq!(dataset.len(), 10);
//! let detail = demo::EVIDENCE
//!     .lookup(dataset, "Scorecards drive consolidation")
//!     .unwrap();
//! assert_eq!(detail.frequency, "40 mentions");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod dataset;
pub mod demo;
mod error;
mod evidence;
mod themes;
mod touchpoint;
mod vocab;

pub use dataset::Dataset;
pub use error::{DatasetError, LookupError};
pub use evidence::{EvidenceCatalog, EvidenceDetail, EvidenceRecord};
pub use themes::{TaxonomyKind, ThemeMapping, ThemeTaxonomy};
pub use touchpoint::Touchpoint;
pub use vocab::Vocabulary;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
