//! Default value functions for serde deserialization.

pub fn sampling_stride() -> usize {
    4
}

pub fn cluster_threshold_mm() -> f32 {
    200.0
}

pub fn min_points_for_object() -> usize {
    3
}

pub fn config_path() -> &'static str {
    "drishti.toml"
}
