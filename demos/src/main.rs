// Copyright 2025 the Crescendo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `page_scroll`: scrolls a simulated portfolio page down to the footer and
//! back, logging what each scroll-driven consumer renders.
//!
//! Run with `RUST_LOG=debug` to see every frame.

mod config;
mod page;

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use crate::config::{DEFAULT_CONFIG, DemoConfig};
use crate::page::Page;

#[derive(Parser)]
#[command(name = "page_scroll")]
#[command(
    about = "Simulate scrolling a portfolio page through a shared scroll hub",
    long_about = None
)]
struct Cli {
    /// Page layout in TOML; the built-in portfolio layout when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scroll distance covered per frame, in pixels
    #[arg(short, long, default_value_t = 350.0)]
    step: f64,

    /// Scroll notifications the host emits within one frame
    #[arg(short, long, default_value_t = 8)]
    events_per_frame: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    if !(cli.step > 0.0) {
        bail!("--step must be positive, got {}", cli.step);
    }

    let config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::parse(DEFAULT_CONFIG)?,
    };
    tracing::info!(
        document = config.page.document_height,
        viewport = config.page.viewport_height,
        sections = config.sections.len(),
        "page mounted"
    );

    let page = Page::mount(&config)?;
    let bottom = page.max_offset();
    for target in trajectory(bottom, cli.step) {
        page.scroll_to(target, cli.events_per_frame);
        let state = page.state();
        let rendered = page.rendered();
        tracing::info!(
            scroll_y = state.scroll_y,
            progress = state.scroll_progress,
            direction = ?state.direction,
            bar_scale = rendered.progress.as_coeffs()[0],
            background_y = rendered.background.translation().y,
            header = ?rendered.header,
            overlay = rendered.overlay_opacity,
            section = rendered.active_section.as_deref().unwrap_or("-"),
            "scrolled"
        );
    }

    let revealed = page.rendered().revealed;
    let stats = page.unmount();
    tracing::info!(
        frames = stats.frames,
        scroll_events = stats.scroll_events,
        coalesced = stats.coalesced,
        deliveries = stats.deliveries,
        failures = stats.failures,
        revealed = ?revealed,
        "page unmounted"
    );
    Ok(())
}

/// Offsets visited going down to `bottom` in `step`s and back to the top.
fn trajectory(bottom: f64, step: f64) -> Vec<f64> {
    let mut down = Vec::new();
    let mut y = 0.0;
    while y < bottom {
        y = (y + step).min(bottom);
        down.push(y);
    }
    if down.is_empty() {
        return down;
    }
    let up: Vec<f64> = down.iter().rev().skip(1).copied().chain([0.0]).collect();
    down.extend(up);
    down
}
