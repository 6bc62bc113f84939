//! Core types and capability traits for the Trellis layout engine.
//!
//! This crate provides the foundational types used across all other trellis
//! crates:
//! - [`GridData`] placement/sizing hints and their resolved form
//! - Geometry value types ([`Bounds`], [`Size`])
//! - Capability traits the layout engines depend on ([`Measurable`],
//!   [`Placeable`])
//! - The explicit engine configuration ([`LogicalGridConfig`])
//! - Error types

pub mod config;
pub mod errors;
pub mod grid_data;
pub mod item;
pub mod types;

pub use config::*;
pub use errors::*;
pub use grid_data::*;
pub use item::*;
pub use types::*;
