//! Frame descriptors: the stride-and-size bookkeeping the hardware expects
//! around each input and output picture.
//!
//! Width strides are 16-aligned in pixels; packed BGR multiplies by its
//! 3-byte pixel, NV12 strides in single bytes with a 3/2 plane factor.
//! Height strides are 2-aligned.
use serde::{Deserialize, Serialize};

use crate::core::planning::geometry::{align_up, even_trim};
use crate::types::{PixelFormat, SourceGeometry};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct FrameDescriptor {
    /// Visible width in pixels (even-trimmed for inputs).
    pub width: u32,
    /// Visible height in pixels (even-trimmed for inputs).
    pub height: u32,
    /// Bytes per row, including alignment padding.
    pub width_stride: u32,
    /// Rows per buffer, including alignment padding.
    pub height_stride: u32,
    /// Total buffer size in bytes.
    pub size: usize,
    pub format: PixelFormat,
}

impl FrameDescriptor {
    /// Descriptor for a source frame. The hardware consumes even dimensions
    /// only, so odd widths/heights lose their last pixel here.
    pub fn for_input(source: SourceGeometry, format: PixelFormat) -> Self {
        let width_stride = match format {
            PixelFormat::Bgr888 => align_up(source.width, 16) * 3,
            PixelFormat::Nv12 => align_up(source.width, 16),
        };
        let height_stride = align_up(source.height, 2);
        let size = buffer_size(width_stride, height_stride, format);
        Self {
            width: even_trim(source.width),
            height: even_trim(source.height),
            width_stride,
            height_stride,
            size,
            format,
        }
    }

    /// Descriptor for one output canvas. Output frames are always packed BGR.
    pub fn for_output(target_width: u32, target_height: u32) -> Self {
        let width_stride = align_up(target_width, 16) * 3;
        let height_stride = align_up(target_height, 2);
        Self {
            width: target_width,
            height: target_height,
            width_stride,
            height_stride,
            size: buffer_size(width_stride, height_stride, PixelFormat::Bgr888),
            format: PixelFormat::Bgr888,
        }
    }
}

fn buffer_size(width_stride: u32, height_stride: u32, format: PixelFormat) -> usize {
    let plane = width_stride as usize * height_stride as usize;
    match format {
        PixelFormat::Bgr888 => plane,
        PixelFormat::Nv12 => plane * 3 / 2,
    }
}
