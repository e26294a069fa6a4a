//! CSV input files for the gini simulator.
//!
//! Two file layouts are supported:
//!
//! | File          | Columns                          |
//! |---------------|----------------------------------|
//! | Bracket table | `width,rate`                     |
//! | Income bands  | `min_income,max_income,size`     |
//!
//! Headers are matched by name, so column order does not matter, and
//! whitespace around values is trimmed.

mod loader;

pub use loader::{
    BracketRecord, BracketTableLoader, IncomeBandLoader, IncomeBandRecord, LoaderError,
};
