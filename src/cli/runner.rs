use serde::Serialize;
use tracing::info;

use vpcplan::core::planning::batch::SlotCache;
use vpcplan::{CanvasConfig, Error, FrameDescriptor, Rect, SourceGeometry};

use super::args::CliArgs;
use super::errors::AppError;

/// Per-slot planning result as printed in the JSON report.
#[derive(Serialize)]
struct SlotReport {
    slot: usize,
    source: SourceGeometry,
    crop: Rect,
    paste: Rect,
    input: FrameDescriptor,
}

#[derive(Serialize)]
struct BatchReport {
    config: CanvasConfig,
    output: FrameDescriptor,
    slots: Vec<SlotReport>,
}

fn parse_sources(list: &str) -> Result<Vec<SourceGeometry>, AppError> {
    list.split(',')
        .map(|entry| {
            let entry = entry.trim();
            let (w, h) = entry.split_once(['x', 'X']).ok_or(AppError::InvalidDimensions {
                value: entry.to_string(),
            })?;
            let parse = |s: &str| {
                s.trim().parse::<u32>().map_err(|_| AppError::InvalidDimensions {
                    value: entry.to_string(),
                })
            };
            Ok(SourceGeometry::new(parse(w)?, parse(h)?))
        })
        .collect()
}

fn parse_rois(list: &str) -> Result<Vec<Rect>, AppError> {
    list.split(';')
        .map(|entry| {
            let bounds: Vec<u32> = entry
                .split(',')
                .map(|s| s.trim().parse::<u32>())
                .collect::<Result<_, _>>()
                .map_err(|_| AppError::InvalidRoi {
                    value: entry.to_string(),
                })?;
            match bounds[..] {
                [xmin, xmax, ymin, ymax] => Ok(Rect::new(xmin, xmax, ymin, ymax)),
                _ => Err(AppError::InvalidRoi {
                    value: entry.to_string(),
                }),
            }
        })
        .collect()
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let config = CanvasConfig {
        target_width: args.width,
        target_height: args.height,
        scale_policy: args.scale,
        padding_policy: args.padding,
        scale_factor: args.scale_factor,
        input_format: args.input_format,
    };
    config.validate()?;

    let sources = parse_sources(&args.sources)?;
    let rois = args.rois.as_deref().map(parse_rois).transpose()?;
    if let Some(ref rois) = rois {
        if rois.len() != sources.len() {
            return Err(AppError::RoiCountMismatch {
                rois: rois.len(),
                sources: sources.len(),
            }
            .into());
        }
    }

    info!(slots = sources.len(), "planning batch");

    let mut cache = SlotCache::new(sources.len());
    let mut slots = Vec::with_capacity(sources.len());
    for (index, &source) in sources.iter().enumerate() {
        let plan = match rois {
            Some(ref rois) => cache.plan_region(index, rois[index], &config),
            None => cache.plan_full(index, source, &config),
        };
        if plan.crop.is_degenerate() || plan.paste.is_degenerate() {
            let rect = if plan.crop.is_degenerate() {
                plan.crop
            } else {
                plan.paste
            };
            return Err(AppError::Plan(Error::DegenerateRegion { slot: index, rect }).into());
        }
        slots.push(SlotReport {
            slot: index,
            source,
            crop: plan.crop,
            paste: plan.paste,
            input: FrameDescriptor::for_input(source, config.input_format),
        });
    }

    let report = BatchReport {
        output: FrameDescriptor::for_output(config.target_width, config.target_height),
        config,
        slots,
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    Ok(())
}
