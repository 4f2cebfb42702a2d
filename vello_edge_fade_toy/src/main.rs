// Copyright 2026 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render a scrolling list with the edge fade into a sequence of SVG frames.

mod frame;

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use vello_edge_fade::config::{DEFAULT_BLUR_RADIUS, DEFAULT_FADE_EXTENT};
use vello_edge_fade::kurbo::Rect;
use vello_edge_fade::{
    present, CoordinateSpace, Edge, EdgeFadeController, FadeConfig, Item, ScrollObserver,
};

use crate::frame::{Row, ROW_HEIGHT, ROW_SPACING};

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = FadeConfig::new(args.blur, args.fade_extent, args.edge.into())
        .context("invalid edge fade configuration")?;
    let rows: Vec<Row> = (0..args.rows)
        .map(|index| Row {
            label: index.to_string(),
            item: Item::now(),
        })
        .collect();

    let mut controller = EdgeFadeController::new(config);
    let dirty = Rc::new(Cell::new(false));
    let flag = Rc::clone(&dirty);
    controller.subscribe(move |geometry| {
        log::debug!("mask geometry changed: {geometry:?}");
        flag.set(true);
    });
    let mut observer = ScrollObserver::new(CoordinateSpace::named("scroll")).skip_duplicates(true);
    log::info!(
        "observing scroll offsets in the `{}` coordinate space",
        observer.space().name()
    );

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;

    let container = Rect::new(0.0, 0.0, args.width, args.height);
    let content_height = frame::content_height(rows.len());
    // Known once the first composite exists; the first frame is unscrolled.
    let mut max_scroll = f64::INFINITY;

    for index in 0..args.frames {
        let scrolled = (index as f64 * args.step).min(max_scroll);
        let content = Rect::new(0.0, -scrolled, args.width, content_height - scrolled);
        observer.report_frames(&mut controller, content, container);
        if !dirty.replace(false) {
            log::info!("frame {index}: scroll position unchanged, skipping");
            continue;
        }

        let composite = present(rows.as_slice(), controller.config(), &controller.geometry());
        max_scroll = frame::max_scroll(&composite);
        let document = frame::render(&composite, args.width);
        let path = args.out.join(format!("frame_{index:03}.svg"));
        svg::save(&path, &document).with_context(|| format!("writing {}", path.display()))?;
        log::info!("frame {index}: scrolled {scrolled}px, wrote {}", path.display());
    }
    Ok(())
}

#[derive(Parser, Debug)]
#[command(about)]
struct Args {
    /// Blur radius of the duplicated layer.
    #[arg(long, default_value_t = DEFAULT_BLUR_RADIUS)]
    blur: f64,
    /// Fraction of the viewport height the fade covers, in (0, 1).
    #[arg(long, default_value_t = DEFAULT_FADE_EXTENT)]
    fade_extent: f64,
    /// The edge to fade.
    #[arg(long, value_enum, default_value_t = EdgeArg::Bottom)]
    edge: EdgeArg,
    /// Viewport width.
    #[arg(long, default_value_t = 390.0)]
    width: f64,
    /// Viewport height.
    #[arg(long, default_value_t = 844.0)]
    height: f64,
    /// Number of rows in the list.
    #[arg(long, default_value_t = 16)]
    rows: usize,
    /// Number of frames to write.
    #[arg(long, default_value_t = 8)]
    frames: usize,
    /// Scroll distance between frames.
    #[arg(long, default_value_t = ROW_HEIGHT + ROW_SPACING)]
    step: f64,
    /// Directory the frames are written to.
    #[arg(long, default_value = "target/edge_fade")]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EdgeArg {
    Top,
    Bottom,
}

impl From<EdgeArg> for Edge {
    fn from(edge: EdgeArg) -> Self {
        match edge {
            EdgeArg::Top => Self::Top,
            EdgeArg::Bottom => Self::Bottom,
        }
    }
}
