//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Provides semantic variants for batch/argument validation, geometry rejection,
//! and executor failures surfaced from the hardware boundary.
use thiserror::Error;

use crate::core::planning::geometry::Rect;
use crate::types::PixelFormat;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Batch size mismatch: expected {expected} frames, got {actual}")]
    BatchSizeMismatch { expected: usize, actual: usize },

    #[error("Degenerate region in slot {slot}: {rect:?}")]
    DegenerateRegion { slot: usize, rect: Rect },

    #[error("Crop {rect:?} in slot {slot} exceeds {width}x{height} source frame")]
    CropOutOfBounds {
        slot: usize,
        rect: Rect,
        width: u32,
        height: u32,
    },

    #[error("Paste {rect:?} in slot {slot} exceeds {width}x{height} output canvas")]
    PasteOutOfBounds {
        slot: usize,
        rect: Rect,
        width: u32,
        height: u32,
    },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Slot index {index} out of range for batch of {batch_size}")]
    SlotOutOfRange { index: usize, batch_size: usize },

    #[error("Unsupported pixel format for this executor: {0}")]
    UnsupportedFormat(PixelFormat),

    #[error("Frame buffer for slot {slot} is too small: need {needed} bytes, got {actual}")]
    ShortBuffer {
        slot: usize,
        needed: usize,
        actual: usize,
    },

    #[error("Executor error: {0}")]
    Executor(String),
}

impl Error {
    pub fn executor<E: std::fmt::Display>(e: E) -> Self {
        Error::Executor(e.to_string())
    }
}
