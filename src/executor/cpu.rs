//! Software reference executor for packed BGR frames.
//!
//! Performs the same crop-resize-paste the hardware would: copy the crop
//! window into a tightly packed staging buffer, resize it to the paste
//! extent, and write it into the strided, zero-filled output canvas.
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::debug;

use crate::core::planning::descriptor::FrameDescriptor;
use crate::error::{Error, Result};
use crate::executor::{ResizeExecutor, ResizeRequest, SlotRequest};
use crate::types::PixelFormat;

pub struct CpuExecutor {
    resizer: Resizer,
    options: ResizeOptions,
}

impl CpuExecutor {
    pub fn new() -> Self {
        Self {
            resizer: Resizer::new(),
            options: ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Bilinear)),
        }
    }
}

impl Default for CpuExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ResizeExecutor for CpuExecutor {
    fn execute(&mut self, request: &ResizeRequest<'_>, outputs: &mut [Vec<u8>]) -> Result<()> {
        if outputs.len() != request.batch_size() {
            return Err(Error::Executor(format!(
                "have {} output buffers for {} slots",
                outputs.len(),
                request.batch_size()
            )));
        }
        for (slot, (req, out)) in request.slots.iter().zip(outputs.iter_mut()).enumerate() {
            if req.input.format != PixelFormat::Bgr888 {
                return Err(Error::UnsupportedFormat(req.input.format));
            }
            resize_slot(&mut self.resizer, &self.options, req, &request.output, out)?;
            debug!(slot, crop = %req.crop, paste = %req.paste, "slot resized");
        }
        Ok(())
    }
}

fn resize_slot(
    resizer: &mut Resizer,
    options: &ResizeOptions,
    req: &SlotRequest<'_>,
    output: &FrameDescriptor,
    out: &mut Vec<u8>,
) -> Result<()> {
    let crop_w = req.crop.width() as usize;
    let crop_h = req.crop.height() as usize;
    let src_stride = req.input.width_stride as usize;

    // Crop rows into a tightly packed staging buffer.
    let row_bytes = crop_w * 3;
    let mut staging = vec![0u8; row_bytes * crop_h];
    for row in 0..crop_h {
        let src_off = (req.crop.min_y as usize + row) * src_stride + req.crop.min_x as usize * 3;
        staging[row * row_bytes..(row + 1) * row_bytes]
            .copy_from_slice(&req.data[src_off..src_off + row_bytes]);
    }

    let paste_w = req.paste.width();
    let paste_h = req.paste.height();
    let src_image = Image::from_vec_u8(crop_w as u32, crop_h as u32, staging, PixelType::U8x3)
        .map_err(Error::executor)?;
    let mut dst_image = Image::new(paste_w, paste_h, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, options)
        .map_err(Error::executor)?;

    // Letterbox background is zero, the same as freshly allocated device memory.
    out.clear();
    out.resize(output.size, 0);

    let dst_stride = output.width_stride as usize;
    let paste_row = paste_w as usize * 3;
    let scaled = dst_image.buffer();
    for row in 0..paste_h as usize {
        let dst_off = (req.paste.min_y as usize + row) * dst_stride + req.paste.min_x as usize * 3;
        out[dst_off..dst_off + paste_row].copy_from_slice(&scaled[row * paste_row..][..paste_row]);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::planning::descriptor::FrameDescriptor;
    use crate::core::planning::geometry::Rect;
    use crate::types::SourceGeometry;

    fn solid_bgr_frame(desc: &FrameDescriptor, bgr: [u8; 3]) -> Vec<u8> {
        let mut data = vec![0u8; desc.size];
        for row in 0..desc.height as usize {
            for col in 0..desc.width as usize {
                let off = row * desc.width_stride as usize + col * 3;
                data[off..off + 3].copy_from_slice(&bgr);
            }
        }
        data
    }

    #[test]
    fn letterbox_fills_paste_window_and_leaves_bars_black() {
        let input = FrameDescriptor::for_input(SourceGeometry::new(64, 64), PixelFormat::Bgr888);
        let data = solid_bgr_frame(&input, [10, 200, 30]);
        let output = FrameDescriptor::for_output(128, 64);

        let request = ResizeRequest {
            slots: vec![SlotRequest {
                input,
                data: &data,
                crop: Rect::new(0, 63, 0, 63),
                // square source into a wide canvas: right half stays bars
                paste: Rect::new(0, 63, 0, 63),
            }],
            output,
        };
        let mut outputs = vec![Vec::new()];
        CpuExecutor::new().execute(&request, &mut outputs).unwrap();

        let out = &outputs[0];
        assert_eq!(out.len(), output.size);
        let stride = output.width_stride as usize;
        // inside the paste window: the solid source color (±1 for resampling)
        let px = &out[32 * stride + 32 * 3..32 * stride + 32 * 3 + 3];
        for (got, want) in px.iter().zip([10u8, 200, 30]) {
            assert!(got.abs_diff(want) <= 1, "pixel {px:?} far from source color");
        }
        // in the bars: zero
        assert_eq!(&out[32 * stride + 100 * 3..32 * stride + 100 * 3 + 3], &[0, 0, 0]);
    }

    #[test]
    fn nv12_is_not_supported_by_the_cpu_path() {
        let input = FrameDescriptor::for_input(SourceGeometry::new(64, 64), PixelFormat::Nv12);
        let data = vec![0u8; input.size];
        let request = ResizeRequest {
            slots: vec![SlotRequest {
                input,
                data: &data,
                crop: Rect::new(0, 63, 0, 63),
                paste: Rect::new(0, 63, 0, 63),
            }],
            output: FrameDescriptor::for_output(128, 64),
        };
        let mut outputs = vec![Vec::new()];
        let err = CpuExecutor::new().execute(&request, &mut outputs);
        assert!(matches!(err, Err(Error::UnsupportedFormat(PixelFormat::Nv12))));
    }

    #[test]
    fn mismatched_output_buffer_count_is_an_executor_error() {
        let input = FrameDescriptor::for_input(SourceGeometry::new(64, 64), PixelFormat::Bgr888);
        let data = vec![0u8; input.size];
        let request = ResizeRequest {
            slots: vec![SlotRequest {
                input,
                data: &data,
                crop: Rect::new(0, 63, 0, 63),
                paste: Rect::new(0, 63, 0, 63),
            }],
            output: FrameDescriptor::for_output(128, 64),
        };
        let mut outputs: Vec<Vec<u8>> = Vec::new();
        assert!(matches!(
            CpuExecutor::new().execute(&request, &mut outputs),
            Err(Error::Executor(_))
        ));
    }
}
