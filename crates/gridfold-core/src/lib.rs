//! Core types for the Gridfold windowed aggregation engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the tabular data model ([`Value`], [`Table`], [`Dataset`]), the
//! reference-point coordinate type ([`Coord`]), and the table-level
//! error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dataset;
pub mod error;
pub mod table;
pub mod value;

pub use dataset::Dataset;
pub use error::TableError;
pub use table::{Schema, Table};
pub use value::{Value, ValueKind};

use smallvec::SmallVec;

/// A reference-point coordinate in the gridded dimensions.
///
/// Uses `SmallVec<[f64; 4]>` to avoid heap allocation for domains up to
/// four dimensions; higher-dimensional coordinates spill to the heap
/// transparently.
pub type Coord = SmallVec<[f64; 4]>;
