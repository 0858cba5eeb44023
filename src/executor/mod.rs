//! The resize-executor boundary: batch request assembly and the trait the
//! hardware (or software fallback) implements.
//!
//! The planner owns geometry only; everything behind [`ResizeExecutor`] —
//! channels, device memory, stream synchronization — belongs to the
//! implementation. `execute` blocks until every slot's output is ready.
pub mod cpu;

use tracing::debug;

use crate::core::planning::descriptor::FrameDescriptor;
use crate::core::planning::geometry::Rect;
use crate::error::{Error, Result};

pub use cpu::CpuExecutor;

/// One batch position of a [`ResizeRequest`]: the input picture and the
/// planned crop/paste pair.
#[derive(Debug)]
pub struct SlotRequest<'a> {
    pub input: FrameDescriptor,
    pub data: &'a [u8],
    pub crop: Rect,
    pub paste: Rect,
}

/// A complete batch handed to the executor: per-slot inputs and windows plus
/// the fixed output descriptor template shared by all slots.
#[derive(Debug)]
pub struct ResizeRequest<'a> {
    pub slots: Vec<SlotRequest<'a>>,
    pub output: FrameDescriptor,
}

impl ResizeRequest<'_> {
    pub fn batch_size(&self) -> usize {
        self.slots.len()
    }

    /// Reject the whole batch if any slot carries garbage geometry. Runs
    /// before submission; a degenerate window must never reach the hardware.
    pub fn validate(&self) -> Result<()> {
        for (slot, req) in self.slots.iter().enumerate() {
            if req.crop.is_degenerate() {
                return Err(Error::DegenerateRegion {
                    slot,
                    rect: req.crop,
                });
            }
            if req.paste.is_degenerate() {
                return Err(Error::DegenerateRegion {
                    slot,
                    rect: req.paste,
                });
            }
            if req.crop.max_x >= req.input.width || req.crop.max_y >= req.input.height {
                return Err(Error::CropOutOfBounds {
                    slot,
                    rect: req.crop,
                    width: req.input.width,
                    height: req.input.height,
                });
            }
            if req.paste.max_x >= self.output.width || req.paste.max_y >= self.output.height {
                return Err(Error::PasteOutOfBounds {
                    slot,
                    rect: req.paste,
                    width: self.output.width,
                    height: self.output.height,
                });
            }
            if req.data.len() < req.input.size {
                return Err(Error::ShortBuffer {
                    slot,
                    needed: req.input.size,
                    actual: req.data.len(),
                });
            }
        }
        debug!(
            slots = self.batch_size(),
            out_width = self.output.width,
            out_height = self.output.height,
            "resize request validated"
        );
        Ok(())
    }
}

/// The external collaborator that performs the pixel work.
///
/// Contract: `execute` consumes the validated batch, writes one output frame
/// per slot into `outputs` (each sized per `request.output.size`), and only
/// returns once all slots are complete. Failures surface verbatim; the
/// caller does not retry, since identical geometry would fail identically.
pub trait ResizeExecutor {
    fn execute(&mut self, request: &ResizeRequest<'_>, outputs: &mut [Vec<u8>]) -> Result<()>;
}
