// Copyright 2025 the Crescendo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TOML description of the simulated page.

use std::path::Path;

use anyhow::{Context, Result, bail};
use crescendo_effects::{HeaderChrome, OverlayDarkening, Parallax};
use crescendo_reveal::RevealConfig;
use crescendo_scroll::ScrollConfig;
use serde::Deserialize;

/// Built-in layout, used when no `--config` is given.
pub(crate) const DEFAULT_CONFIG: &str = include_str!("../config/portfolio.toml");

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct PageLayout {
    pub(crate) document_height: f64,
    pub(crate) viewport_width: f64,
    pub(crate) viewport_height: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct SectionLayout {
    pub(crate) name: String,
    pub(crate) top: f64,
    pub(crate) height: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct DemoConfig {
    pub(crate) page: PageLayout,
    #[serde(default)]
    pub(crate) scroll: ScrollConfig,
    #[serde(default)]
    pub(crate) parallax: Parallax,
    #[serde(default)]
    pub(crate) overlay: OverlayDarkening,
    #[serde(default)]
    pub(crate) header: HeaderChrome,
    #[serde(default)]
    pub(crate) reveal: RevealConfig,
    #[serde(default)]
    pub(crate) sections: Vec<SectionLayout>,
}

impl DemoConfig {
    pub(crate) fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("invalid page configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("loading {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        let page = &self.page;
        if !(page.viewport_height > 0.0 && page.viewport_width > 0.0) {
            bail!("viewport must have a positive size");
        }
        if !(page.document_height >= 0.0) {
            bail!("document height must be non-negative");
        }
        self.scroll.validate()?;
        self.parallax.validate()?;
        self.overlay.validate()?;
        self.reveal.validate()?;
        let mut last_top = f64::NEG_INFINITY;
        for section in &self.sections {
            if section.top < last_top {
                bail!("section `{}` is out of document order", section.name);
            }
            if !(section.height >= 0.0) {
                bail!("section `{}` has a negative height", section.name);
            }
            last_top = section.top;
        }
        Ok(())
    }
}
