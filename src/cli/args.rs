use clap::Parser;

use vpcplan::{PaddingPolicy, PixelFormat, ScalePolicy};

#[derive(Parser)]
#[command(name = "vpcplan", version, about = "VPCPLAN batch geometry planner")]
pub struct CliArgs {
    /// Target canvas width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Target canvas height in pixels
    #[arg(long, default_value_t = 360)]
    pub height: u32,

    /// Source frame dimensions, one WxH entry per batch slot
    /// (e.g. "1920x1080,1080x1920")
    #[arg(short, long)]
    pub sources: String,

    /// Optional per-slot crop rectangles as "xmin,xmax,ymin,ymax" entries
    /// separated by ';' (sub-region mode; count must match --sources)
    #[arg(long)]
    pub rois: Option<String>,

    /// Scaling policy (stretch or fixed-aspect letterbox)
    #[arg(long, value_enum, default_value_t = ScalePolicy::FixedAspect)]
    pub scale: ScalePolicy,

    /// Padding policy (corner-anchored or centered)
    #[arg(long, value_enum, default_value_t = PaddingPolicy::Corner)]
    pub padding: PaddingPolicy,

    /// Sub-region zoom-out factor; values > 1 under-fill the canvas
    #[arg(long, default_value_t = 1.0)]
    pub scale_factor: f32,

    /// Source pixel format (affects input descriptor strides)
    #[arg(long, value_enum, default_value_t = PixelFormat::Bgr888)]
    pub input_format: PixelFormat,

    /// Pretty-print the JSON report
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
