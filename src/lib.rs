#![doc = r#"
VPCPLAN — batch geometry planning for hardware crop-resize-paste engines.

Vision-preprocessing cores (VPCs) resize images with a single batched
crop-resize-paste primitive, but demand awkward geometry: crop windows with
even left/top and odd right/bottom edges, paste offsets on 16-pixel
boundaries, even source dimensions, and byte-sensitive width strides for
packed 3-byte pixels. This crate computes that geometry — the crop rectangle,
the letterboxed paste rectangle, and the strided frame descriptors — for
every slot of a fixed-size batch, caches per-slot plans so repeated frame
sizes skip the math, and hands the finished batch to a pluggable executor.

The executor is the hardware boundary: channel management, device memory,
and stream synchronization live behind the [`executor::ResizeExecutor`]
trait. A software reference executor ([`executor::CpuExecutor`]) is included
so the crate runs end to end without a device.

Quick start
-----------
```rust
use vpcplan::{BatchResizer, CanvasConfig, Frame, PaddingPolicy, ScalePolicy};

fn main() -> vpcplan::Result<()> {
    let config = CanvasConfig {
        target_width: 640,
        target_height: 360,
        scale_policy: ScalePolicy::FixedAspect,
        padding_policy: PaddingPolicy::Corner,
        ..CanvasConfig::default()
    };

    let mut resizer = BatchResizer::with_cpu_executor(config, 1)?;

    let data = vec![0u8; 1920 * 3 * 1080];
    resizer.process(&[Frame::new(1920, 1080, &data)], None)?;

    let out = resizer.get(0)?;
    assert_eq!(out.descriptor.width, 640);
    Ok(())
}
```

Sub-region mode
---------------
Pass one caller rectangle per slot to crop before scaling; the planner snaps
the rectangle onto the hardware grid and never caches sub-region plans:

```rust,no_run
use vpcplan::{BatchResizer, CanvasConfig, Frame, Rect};

fn crop(resizer: &mut BatchResizer, frame: Frame<'_>) -> vpcplan::Result<()> {
    resizer.process(&[frame], Some(&[Rect::new(101, 500, 33, 733)]))
}
```

Planning only
-------------
The planner itself is pure; use it directly when submission is handled
elsewhere:

```rust
use vpcplan::core::planning::planner::plan_full_image;
use vpcplan::{CanvasConfig, SourceGeometry};

let plan = plan_full_image(SourceGeometry::new(1920, 1080), &CanvasConfig::default());
assert_eq!(plan.paste.min_x % 16, 0);
```

Error handling
--------------
All public functions return [`Result`]; match on [`Error`] for the specific
failure. Batch-size mismatches reject the call before any slot is planned,
degenerate rectangles reject the whole batch before submission, and executor
failures surface verbatim — identical geometry would fail identically, so
there is no retry.

Useful modules
--------------
- [`api`] — [`BatchResizer`], the high-level plan-submit-retrieve cycle.
- [`core::planning`] — geometry primitives, the ROI planner, slot cache,
  frame descriptors.
- [`executor`] — the request type and the executor trait/implementations.
- [`error`] — crate-level [`Error`] and [`Result`].
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod executor;
pub mod types;

// Curated public API surface
// Types
pub use core::params::CanvasConfig;
pub use core::planning::descriptor::FrameDescriptor;
pub use core::planning::geometry::{Rect, align_up, even_trim};
pub use core::planning::planner::Plan;
pub use error::{Error, Result};
pub use types::{PaddingPolicy, PixelFormat, ScalePolicy, SourceGeometry};

// Executor seam
pub use executor::{CpuExecutor, ResizeExecutor, ResizeRequest, SlotRequest};

// High-level API re-exports
pub use api::{BatchResizer, Frame, ResizedFrame};
