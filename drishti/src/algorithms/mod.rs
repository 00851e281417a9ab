//! Detection algorithms layer.
//!
//! This layer depends on core and operates on sampled frames.
//!
//! # Contents
//!
//! - [`clustering`]: Pairwise distances and seed-proximity clustering
//! - [`features`]: Reduction of clusters to detected objects

pub mod clustering;
pub mod features;
