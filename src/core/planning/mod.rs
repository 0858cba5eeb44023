//! Geometry planning for the hardware crop-resize-paste primitive:
//! alignment/parity helpers (`geometry`), the ROI planner (`planner`),
//! the per-slot plan cache (`batch`), and frame descriptors (`descriptor`).
pub mod batch;
pub mod descriptor;
pub mod geometry;
pub mod planner;
