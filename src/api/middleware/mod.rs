//! API middleware components

pub mod logging;
pub mod recovery;

pub use logging::logging_middleware;
pub use recovery::recovery_layer;
