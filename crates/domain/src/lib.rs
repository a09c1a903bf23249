//! Domain types for the FastFolio optimization demo.
//!
//! Value objects, enums and shared metrics used by the simulation core,
//! the analysis layer and the CLI. Everything here is ephemeral: entities
//! live for a single run and are discarded with it.

pub mod enums;
pub mod error;
pub mod limits;
pub mod metrics;
pub mod value_objects;
