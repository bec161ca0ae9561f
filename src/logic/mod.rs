//! Core Logic
//!
//! Dataflow runs one direction: generator registry -> dataset builder ->
//! injection engine -> labeled dataset.

pub mod dataset;
pub mod generator;
pub mod inject;
