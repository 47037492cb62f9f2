//! CLI commands for waygraph

pub mod advance;
pub mod dispatch;
pub mod frontier;
pub mod info;
pub mod search;
pub mod traverse;
pub mod trim;
