//! Sensor processing layer.
//!
//! Turns raw range-sensor readings into Cartesian point sets.
//!
//! # Contents
//!
//! - [`preprocessing`]: Stride decimation, dropout filtering and polar conversion

pub mod preprocessing;
