use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{PaddingPolicy, PixelFormat, ScalePolicy};

/// Canvas parameters fixed at construction, suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Target canvas width in pixels
    pub target_width: u32,
    /// Target canvas height in pixels
    pub target_height: u32,
    /// Stretch-to-fill vs. letterboxed fixed-aspect paste
    pub scale_policy: ScalePolicy,
    /// Corner-anchored vs. centered placement
    pub padding_policy: PaddingPolicy,
    /// Sub-region zoom-out factor; values > 1 under-fill the canvas.
    /// Only applied in sub-region mode.
    pub scale_factor: f32,
    /// Pixel layout of the source frames
    pub input_format: PixelFormat,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            target_width: 640,
            target_height: 360,
            scale_policy: ScalePolicy::FixedAspect,
            padding_policy: PaddingPolicy::Corner,
            scale_factor: 1.0,
            input_format: PixelFormat::Bgr888,
        }
    }
}

impl CanvasConfig {
    pub fn validate(&self) -> Result<()> {
        if self.target_width == 0 {
            return Err(Error::InvalidArgument {
                arg: "target_width",
                value: self.target_width.to_string(),
            });
        }
        if self.target_height == 0 {
            return Err(Error::InvalidArgument {
                arg: "target_height",
                value: self.target_height.to_string(),
            });
        }
        if !(self.scale_factor > 0.0) {
            return Err(Error::InvalidArgument {
                arg: "scale_factor",
                value: self.scale_factor.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(CanvasConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_canvas_dimensions_are_rejected() {
        let cfg = CanvasConfig {
            target_width: 0,
            ..CanvasConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(Error::InvalidArgument { arg: "target_width", .. })
        ));

        let cfg = CanvasConfig {
            target_height: 0,
            ..CanvasConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn non_positive_scale_factor_is_rejected() {
        for bad in [0.0, -1.0, f32::NAN] {
            let cfg = CanvasConfig {
                scale_factor: bad,
                ..CanvasConfig::default()
            };
            assert!(cfg.validate().is_err(), "scale_factor={bad} accepted");
        }
    }
}
