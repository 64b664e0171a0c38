// Copyright 2025 the Crescendo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The simulated portfolio page: one hub, several independent consumers.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use crescendo_effects::{ChromeFlags, ProgressBar, ScrollEffect, SectionSpy, StyleCommand};
use crescendo_reveal::{RevealEvent, RevealTracker};
use crescendo_scroll::sim::{ManualScheduler, SimulatedViewport};
use crescendo_scroll::{HubStats, ScrollHub, ScrollState, Subscription};
use kurbo::{Affine, Rect, Size};

use crate::config::DemoConfig;

type Hub = ScrollHub<SimulatedViewport, ManualScheduler>;

/// Elements the effects are bound to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Layer {
    ProgressBar,
    Background,
    Overlay,
    Header,
}

/// What a renderer would currently be showing.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RenderedPage {
    pub(crate) progress: Affine,
    pub(crate) background: Affine,
    pub(crate) overlay_opacity: f64,
    pub(crate) header: ChromeFlags,
    pub(crate) active_section: Option<String>,
    pub(crate) revealed: Vec<String>,
}

impl Default for RenderedPage {
    fn default() -> Self {
        Self {
            progress: Affine::scale_non_uniform(0.0, 1.0),
            background: Affine::IDENTITY,
            overlay_opacity: 0.0,
            header: ChromeFlags::empty(),
            active_section: None,
            revealed: Vec::new(),
        }
    }
}

impl RenderedPage {
    fn apply(&mut self, layer: Layer, command: StyleCommand) {
        match (layer, command) {
            (Layer::ProgressBar, StyleCommand::Transform(t)) => self.progress = t,
            (Layer::Background, StyleCommand::Transform(t)) => self.background = t,
            (Layer::Overlay, StyleCommand::Opacity(o)) => self.overlay_opacity = o,
            (Layer::Header, StyleCommand::Chrome(flags)) => self.header = flags,
            (layer, command) => {
                tracing::warn!(?layer, ?command, "command not supported by layer");
            }
        }
    }
}

pub(crate) struct Page {
    viewport: SimulatedViewport,
    frames: ManualScheduler,
    hub: Hub,
    rendered: Rc<RefCell<RenderedPage>>,
    subscriptions: Vec<Subscription>,
}

impl Page {
    /// Builds the page and mounts every consumer.
    pub(crate) fn mount(config: &DemoConfig) -> Result<Self> {
        let viewport =
            SimulatedViewport::new(config.page.document_height, config.page.viewport_height);
        let frames = ManualScheduler::new();
        let hub = ScrollHub::with_config(viewport.clone(), frames.clone(), config.scroll)?;
        let rendered = Rc::new(RefCell::new(RenderedPage::default()));
        let mut subscriptions = Vec::new();

        let effects: [(Layer, Box<dyn ScrollEffect>); 4] = [
            (Layer::ProgressBar, Box::new(ProgressBar)),
            (Layer::Background, Box::new(config.parallax)),
            (Layer::Overlay, Box::new(config.overlay)),
            (Layer::Header, Box::new(config.header)),
        ];
        for (layer, mut effect) in effects {
            let rendered = rendered.clone();
            subscriptions.push(mount_consumer(&hub, move |state| {
                let mut rendered = rendered.borrow_mut();
                for command in effect.commands(state) {
                    rendered.apply(layer, command);
                }
            }));
        }

        let mut spy = SectionSpy::new();
        for section in &config.sections {
            spy.push(section.name.clone(), section.top);
        }
        rendered.borrow_mut().active_section = spy.active().cloned();
        {
            let rendered = rendered.clone();
            subscriptions.push(mount_consumer(&hub, move |state| {
                if let Some(section) = spy.update(state) {
                    tracing::info!(section = %section, "active section changed");
                    rendered.borrow_mut().active_section = Some(section);
                }
            }));
        }

        let mut tracker = RevealTracker::new(config.reveal)?;
        let width = config.page.viewport_width;
        for section in &config.sections {
            tracker.observe(
                section.name.clone(),
                Rect::new(0.0, section.top, width, section.top + section.height),
            );
        }
        let size = Size::new(width, config.page.viewport_height);
        {
            let rendered = rendered.clone();
            subscriptions.push(mount_consumer(&hub, move |state| {
                for event in tracker.update_for_scroll(state, size) {
                    match event {
                        RevealEvent::Entered(name) => {
                            tracing::info!(section = %name, "revealed");
                            rendered.borrow_mut().revealed.push(name);
                        }
                        RevealEvent::Exited(name) => {
                            tracing::debug!(section = %name, "left viewport");
                        }
                    }
                }
            }));
        }

        subscriptions.push(hub.subscribe(|state| {
            tracing::debug!(
                scroll_y = state.scroll_y,
                progress = state.scroll_progress,
                scrolled = state.is_scrolled,
                direction = ?state.direction,
                "frame"
            );
        }));

        Ok(Self {
            viewport,
            frames,
            hub,
            rendered,
            subscriptions,
        })
    }

    /// Largest offset the document can reach.
    pub(crate) fn max_offset(&self) -> f64 {
        use crescendo_scroll::ViewportSource;
        self.viewport
            .metrics()
            .map_or(0.0, |metrics| metrics.scrollable_extent())
    }

    /// Scrolls from the current offset to `target`, emitting `events` scroll
    /// notifications before the next frame boundary.
    pub(crate) fn scroll_to(&self, target: f64, events: u32) {
        let start = self.hub.current_state().scroll_y;
        let events = events.max(1);
        for i in 1..=events {
            let t = f64::from(i) / f64::from(events);
            self.viewport.scroll_to(start + (target - start) * t);
            self.hub.handle_scroll();
        }
        self.frames.fire(&self.hub);
    }

    pub(crate) fn state(&self) -> ScrollState {
        self.hub.current_state()
    }

    pub(crate) fn rendered(&self) -> RenderedPage {
        self.rendered.borrow().clone()
    }

    /// Unmounts every consumer and returns the hub's counters.
    pub(crate) fn unmount(self) -> HubStats {
        for subscription in &self.subscriptions {
            subscription.unsubscribe();
        }
        debug_assert!(!self.hub.is_listening(), "hub still listening after unmount");
        self.hub.stats()
    }
}

/// Renders the current snapshot once, then follows the hub.
fn mount_consumer(hub: &Hub, mut consumer: impl FnMut(&ScrollState) + 'static) -> Subscription {
    consumer(&hub.current_state());
    hub.subscribe(consumer)
}
