use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid source dimensions: '{value}'. Expected WxH (e.g. 1920x1080)")]
    InvalidDimensions { value: String },

    #[error("Invalid ROI: '{value}'. Expected xmin,xmax,ymin,ymax")]
    InvalidRoi { value: String },

    #[error("ROI count ({rois}) does not match source count ({sources})")]
    RoiCountMismatch { rois: usize, sources: usize },

    #[error("Planner error: {0}")]
    Plan(#[from] vpcplan::Error),
}
