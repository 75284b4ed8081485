//! Domain layer: the decision tree and its invariants
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod node;
pub mod record;

pub use error::DomainError;
pub use node::Node;
pub use record::NodeRecord;
