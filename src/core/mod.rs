//! Core building blocks: canvas configuration and the geometry planning
//! stack (alignment primitives, ROI planner, slot cache, descriptors).
//! These are internal primitives consumed by the high-level `api` module.
pub mod params;
pub mod planning;
