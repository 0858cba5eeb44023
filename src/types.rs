//! Shared types and enums used across VPCPLAN.
//! Includes the two planner policy switches (`ScalePolicy`, `PaddingPolicy`)
//! and the pixel formats the hardware descriptors distinguish (`PixelFormat`).
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the scaled image relates to the target canvas.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum ScalePolicy {
    /// Paste extent spans the whole canvas; the hardware stretches to fill it.
    Stretch,
    /// Paste extent matches the scaled image; unused canvas stays as letterbox bars.
    FixedAspect,
}

impl std::fmt::Display for ScalePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScalePolicy::Stretch => write!(f, "Stretch"),
            ScalePolicy::FixedAspect => write!(f, "FixedAspect"),
        }
    }
}

/// Where the scaled image is anchored within the target canvas.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum PaddingPolicy {
    /// Anchor at the top-left corner; bars go right/bottom.
    Corner,
    /// Center the image; bars split symmetrically.
    Centered,
}

impl std::fmt::Display for PaddingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaddingPolicy::Corner => write!(f, "Corner"),
            PaddingPolicy::Centered => write!(f, "Centered"),
        }
    }
}

/// Pixel layouts the frame descriptors know how to stride and size.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum PixelFormat {
    /// Packed 3-byte BGR; width stride is byte-sensitive (x3).
    Bgr888,
    /// Semi-planar YUV 4:2:0; 1.5 bytes per pixel overall.
    Nv12,
}

impl std::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PixelFormat::Bgr888 => write!(f, "Bgr888"),
            PixelFormat::Nv12 => write!(f, "Nv12"),
        }
    }
}

/// Pixel dimensions of one source frame as presented to the planner.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SourceGeometry {
    pub width: u32,
    pub height: u32,
}

impl SourceGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for SourceGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
