//! Core library for pokedex
//!
//! This crate implements the **Functional Core** of the pokedex application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The pokedex project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`pokedex_core`** (this crate): Pure transformation functions with zero network I/O
//! - **`pokedex`**: HTTP, storage and terminal I/O (the Imperative Shell)
//!
//! The core never decides where the catalog comes from or where the captured set is
//! kept. It validates payloads handed to it, partitions the catalog, and encodes or
//! decodes persisted state.
//!
//! # Module Organization
//!
//! - [`catalog`]: Domain items and the PokeAPI schema-validation boundary
//! - [`filter`]: Name and category predicates for the available view
//! - [`partition`]: The captured set, the available/captured views and the view model
//! - [`persist`]: The `CapturedStore` contract, the in-memory store and wire codecs
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use pokedex_core::filter::FilterCriteria;
//! use pokedex_core::partition::{build_view, CapturedSet};
//!
//! let catalog = /* Catalog built from validated items */;
//! let mut captured = CapturedSet::new();
//! captured.capture(1);
//!
//! let view = build_view(&catalog, &captured, &FilterCriteria::new("char", ""));
//! assert_eq!(view.captured_count, 1);
//! ```

pub mod catalog;
pub mod filter;
pub mod partition;
pub mod persist;
