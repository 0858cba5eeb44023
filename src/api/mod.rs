//! High-level, ergonomic entry point: [`BatchResizer`] wires the slot cache,
//! the ROI planner, and a [`ResizeExecutor`] into one synchronous
//! plan-submit-retrieve cycle. Prefer this over the low-level planning
//! modules when integrating VPCPLAN.
use tracing::info;

use crate::core::params::CanvasConfig;
use crate::core::planning::batch::SlotCache;
use crate::core::planning::descriptor::FrameDescriptor;
use crate::core::planning::geometry::Rect;
use crate::error::{Error, Result};
use crate::executor::{CpuExecutor, ResizeExecutor, ResizeRequest, SlotRequest};
use crate::types::SourceGeometry;

/// One source frame handed to [`BatchResizer::process`]: its pixel geometry
/// and the backing pixel data, laid out per the configured input format.
#[derive(Debug)]
pub struct Frame<'a> {
    pub geometry: SourceGeometry,
    pub data: &'a [u8],
}

impl<'a> Frame<'a> {
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Self {
        Self {
            geometry: SourceGeometry::new(width, height),
            data,
        }
    }
}

/// One finished output slot: the fixed output descriptor plus the slot's
/// buffer, valid until the next `process` call.
#[derive(Debug)]
pub struct ResizedFrame<'a> {
    pub descriptor: FrameDescriptor,
    pub data: &'a [u8],
}

/// Plans and executes batched letterbox resizes on a fixed-size batch.
///
/// Not reentrant: one `process` call plans all slots sequentially and blocks
/// until the executor finishes. `&mut self` serializes callers; use one
/// instance per concurrent pipeline.
pub struct BatchResizer {
    config: CanvasConfig,
    output: FrameDescriptor,
    cache: SlotCache,
    outputs: Vec<Vec<u8>>,
    executor: Box<dyn ResizeExecutor>,
}

impl BatchResizer {
    pub fn new(
        config: CanvasConfig,
        batch_size: usize,
        executor: Box<dyn ResizeExecutor>,
    ) -> Result<Self> {
        config.validate()?;
        if batch_size == 0 {
            return Err(Error::InvalidArgument {
                arg: "batch_size",
                value: batch_size.to_string(),
            });
        }
        let output = FrameDescriptor::for_output(config.target_width, config.target_height);
        // Output buffers live for the instance's lifetime, like the original
        // device allocation: readable (as zeros) even before the first run.
        let outputs = vec![vec![0u8; output.size]; batch_size];
        info!(
            batch_size,
            target_width = config.target_width,
            target_height = config.target_height,
            stride = output.width_stride,
            "batch resizer initialized"
        );
        Ok(Self {
            config,
            output,
            cache: SlotCache::new(batch_size),
            outputs,
            executor,
        })
    }

    /// Construct with the software reference executor.
    pub fn with_cpu_executor(config: CanvasConfig, batch_size: usize) -> Result<Self> {
        Self::new(config, batch_size, Box::new(CpuExecutor::new()))
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn batch_size(&self) -> usize {
        self.cache.batch_size()
    }

    /// Fixed per-slot output descriptor.
    pub fn output_descriptor(&self) -> FrameDescriptor {
        self.output
    }

    /// Planner invocations so far; repeated identical full-image geometry
    /// does not increase it.
    pub fn replan_count(&self) -> u64 {
        self.cache.replan_count()
    }

    /// Plan every slot, validate the batch, and run the executor. With
    /// `rois` present, each frame is cropped to its caller rectangle
    /// (sub-region mode); otherwise the whole frame is used.
    ///
    /// Errors reject the entire batch: size mismatches before any slot is
    /// planned, degenerate geometry before submission, executor failures
    /// verbatim.
    pub fn process(&mut self, frames: &[Frame<'_>], rois: Option<&[Rect]>) -> Result<()> {
        let batch_size = self.batch_size();
        if frames.len() != batch_size {
            return Err(Error::BatchSizeMismatch {
                expected: batch_size,
                actual: frames.len(),
            });
        }
        if let Some(rois) = rois {
            if rois.len() != batch_size {
                return Err(Error::BatchSizeMismatch {
                    expected: batch_size,
                    actual: rois.len(),
                });
            }
        }

        let mut slots = Vec::with_capacity(batch_size);
        for (index, frame) in frames.iter().enumerate() {
            let plan = match rois {
                Some(rois) => self.cache.plan_region(index, rois[index], &self.config),
                None => self.cache.plan_full(index, frame.geometry, &self.config),
            };
            slots.push(SlotRequest {
                input: FrameDescriptor::for_input(frame.geometry, self.config.input_format),
                data: frame.data,
                crop: plan.crop,
                paste: plan.paste,
            });
        }

        let request = ResizeRequest {
            slots,
            output: self.output,
        };
        request.validate()?;
        info!(slots = batch_size, "submitting resize batch");
        self.executor.execute(&request, &mut self.outputs)
    }

    /// Retrieve the output of slot `index` after a successful `process`.
    pub fn get(&self, index: usize) -> Result<ResizedFrame<'_>> {
        let data = self
            .outputs
            .get(index)
            .ok_or(Error::SlotOutOfRange {
                index,
                batch_size: self.batch_size(),
            })?;
        Ok(ResizedFrame {
            descriptor: self.output,
            data,
        })
    }

    /// Forget all cached slot geometry; the next `process` replans every slot.
    pub fn reset_cache(&mut self) {
        self.cache.reset();
    }
}
