//! Core types shared by the Cadence crates: node handles, the error type and
//! the numeric settings used while sampling keyframes.

pub mod errors;
pub mod settings;

pub use errors::{CadenceError, Result};
pub use settings::{AnimationSettings, HermiteTangents};

use slotmap::new_key_type;

new_key_type! {
    /// Generational handle to a node in an externally owned node table.
    pub struct NodeHandle;
}
