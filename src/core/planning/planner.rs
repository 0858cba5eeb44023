//! The ROI planner: computes the source crop window and destination paste
//! window for one frame, honoring the hardware's parity and alignment rules.
//!
//! Hardware contract for both windows: left/top edges must be even (the paste
//! left edge additionally 16-aligned), right/bottom edges must be odd, and
//! source dimensions must be even. Width handling is byte-stride-sensitive
//! (3 bytes per pixel for packed BGR), height is not, so the horizontal and
//! vertical rules are intentionally asymmetric.
use tracing::debug;

use crate::core::params::CanvasConfig;
use crate::core::planning::geometry::{Rect, align_up, even_trim};
use crate::types::{PaddingPolicy, ScalePolicy, SourceGeometry};

/// Transient result of one planning invocation for one slot.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Plan {
    /// Source window handed to the crop stage.
    pub crop: Rect,
    /// Destination window the scaled crop is written into.
    pub paste: Rect,
}

/// Plan a whole-frame resize: crop covers the even-trimmed frame.
pub fn plan_full_image(source: SourceGeometry, config: &CanvasConfig) -> Plan {
    let crop = Rect::new(
        0,
        even_trim(source.width).saturating_sub(1),
        0,
        even_trim(source.height).saturating_sub(1),
    );
    let paste = plan_paste(crop.width(), crop.height(), config, 1.0);
    debug!(%source, %crop, %paste, "planned full-image slot");
    Plan { crop, paste }
}

/// Plan a caller-supplied sub-rectangle. The crop window is snapped to the
/// parity the hardware requires: even left/top, odd right/bottom.
pub fn plan_sub_region(roi: Rect, config: &CanvasConfig) -> Plan {
    let crop = snap_crop(roi);
    let paste = plan_paste(crop.width(), crop.height(), config, config.scale_factor);
    debug!(%roi, %crop, %paste, "planned sub-region slot");
    Plan { crop, paste }
}

/// Snap a caller rectangle onto the hardware crop grid: min edges move down
/// to the previous even coordinate, max edges to the previous odd one, all
/// clamped at zero.
fn snap_crop(roi: Rect) -> Rect {
    let snap_min = |v: u32| if v % 2 == 1 { v - 1 } else { v };
    let snap_max = |v: u32| if v % 2 == 1 { v } else { v.saturating_sub(1) };
    Rect::new(
        snap_min(roi.min_x),
        snap_max(roi.max_x),
        snap_min(roi.min_y),
        snap_max(roi.max_y),
    )
}

/// Shared scale-ratio and placement computation.
///
/// `scale_divisor` is 1.0 in full-image mode and `scale_factor` in sub-region
/// mode; divisors above 1 zoom out, deliberately under-filling the canvas.
fn plan_paste(roi_w: u32, roi_h: u32, config: &CanvasConfig, scale_divisor: f32) -> Rect {
    let tw = i64::from(config.target_width);
    let th = i64::from(config.target_height);

    let long_target = config.target_height.max(config.target_width);
    let long_roi = roi_h.max(roi_w);
    let ratio = long_target as f32 / long_roi as f32 / scale_divisor;
    // Degenerate roi (zero extent) makes ratio non-finite and the extents
    // below collapse; the request builder rejects the slot before submission.
    let new_w = (roi_w as f32 * ratio) as i64;
    let new_h = (roi_h as f32 * ratio) as i64;

    // Paste left edge must sit on a 16-pixel boundary.
    let mut x: i64 = match config.padding_policy {
        PaddingPolicy::Centered => (tw - new_w) / 2,
        PaddingPolicy::Corner => 0,
    };
    x = x.max(0);
    x = i64::from(align_up(x as u32, 16));

    let mut x_max = tw - 1;
    if config.scale_policy == ScalePolicy::FixedAspect {
        x_max = (x + new_w).min(tw) - 1;
    }
    // Right edge must end on an odd coordinate.
    if x_max % 2 == 0 {
        x_max -= 1;
    }

    let mut y: i64 = match config.padding_policy {
        PaddingPolicy::Centered => (th - new_h) / 2,
        PaddingPolicy::Corner => 0,
    };
    // Hardware parity quirk, asymmetric with the horizontal rule: odd offsets
    // drop one row, even offsets drop two. Reference behavior, kept verbatim.
    y = if y.rem_euclid(2) == 1 { y - 1 } else { y - 2 };
    y = y.max(0);

    let mut y_max = th - 1;
    if config.scale_policy == ScalePolicy::FixedAspect {
        y_max = (y + new_h).min(th) - 1;
    }
    if y_max % 2 == 0 {
        y_max -= 1;
    }

    Rect::new(
        x as u32,
        x_max.max(0) as u32,
        y as u32,
        y_max.max(0) as u32,
    )
}
