//! Library components for the drawing register checker CLI.

pub mod logging;
pub mod pipeline;
