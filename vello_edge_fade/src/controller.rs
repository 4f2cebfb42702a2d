// Copyright 2026 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The edge fade controller: configuration plus live scroll state.

use core::fmt;

use peniko::kurbo::Point;

use crate::config::{ConfigError, Edge, FadeConfig};
use crate::gradient::GradientPair;

/// The most recent scroll report accepted by a controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    /// Origin of the content in the scroll container's coordinate space.
    ///
    /// Only the vertical component is used.
    pub offset: Point,
    /// Visible height of the scroll container.
    pub viewport_height: f64,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset: Point::ORIGIN,
            viewport_height: 0.0,
        }
    }
}

impl ScrollState {
    fn is_valid(&self) -> bool {
        self.offset.is_finite() && self.viewport_height.is_finite() && self.viewport_height >= 0.0
    }
}

/// Placement of the two masks for one scroll state.
///
/// Both gradient offsets cancel the scroll offset, which keeps the masks
/// pinned to the viewport while the content moves underneath them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskGeometry {
    /// Vertical translation of the primary gradient mask.
    pub primary_gradient_offset: f64,
    /// Vertical translation of the inverted gradient mask.
    pub inverted_gradient_offset: f64,
    /// Height both layers and their masks are clipped to.
    pub clip_height: f64,
}

impl MaskGeometry {
    /// Derive the geometry for `state`.
    pub fn from_state(state: &ScrollState) -> Self {
        Self {
            primary_gradient_offset: -state.offset.y,
            inverted_gradient_offset: -state.offset.y,
            clip_height: state.viewport_height,
        }
    }
}

static_assertions::assert_impl_all!(MaskGeometry: Send, Sync, Copy);
static_assertions::assert_impl_all!(FadeConfig: Send, Sync, Copy);

/// The outcome of [`EdgeFadeController::on_scroll_update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    /// The scroll state changed.
    Applied,
    /// The report matched the current state.
    Unchanged,
    /// The report was not usable and the state was left alone.
    Ignored,
}

type Subscriber = Box<dyn FnMut(&MaskGeometry)>;

/// Turns a fade configuration and live scroll reports into mask geometry.
///
/// A controller belongs to exactly one decorated view and is only touched from
/// the thread that renders it. Geometry is never stored: it is derived from the
/// latest [`ScrollState`] whenever it is asked for, and published to the
/// subscriber (if any) after every accepted report.
pub struct EdgeFadeController {
    config: FadeConfig,
    gradients: GradientPair,
    state: ScrollState,
    subscriber: Option<Subscriber>,
}

impl fmt::Debug for EdgeFadeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeFadeController")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("subscribed", &self.subscriber.is_some())
            .finish_non_exhaustive()
    }
}

impl EdgeFadeController {
    /// Create a controller for an already validated configuration.
    pub fn new(config: FadeConfig) -> Self {
        Self {
            gradients: GradientPair::new(&config),
            config,
            state: ScrollState::default(),
            subscriber: None,
        }
    }

    /// Validate the parameters and create a controller for them.
    pub fn configure(blur_strength: f64, fade_extent: f64, edge: Edge) -> Result<Self, ConfigError> {
        FadeConfig::new(blur_strength, fade_extent, edge).map(Self::new)
    }

    /// The configuration this controller was created with.
    pub fn config(&self) -> &FadeConfig {
        &self.config
    }

    /// The latest accepted scroll state.
    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// The gradient pair for the configured edge.
    pub fn gradients(&self) -> &GradientPair {
        &self.gradients
    }

    /// Mask geometry for the current scroll state.
    pub fn geometry(&self) -> MaskGeometry {
        MaskGeometry::from_state(&self.state)
    }

    /// Register the function that re-renders on every accepted report.
    ///
    /// There is only ever one subscriber; this replaces any previous one.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&MaskGeometry) + 'static) {
        self.subscriber = Some(Box::new(subscriber));
    }

    /// Drop the current subscriber.
    pub fn unsubscribe(&mut self) {
        self.subscriber = None;
    }

    /// Accept a new scroll report.
    ///
    /// Reports with a non-finite offset, or a non-finite or negative viewport
    /// height, are ignored so the previous geometry stays in effect.
    pub fn on_scroll_update(&mut self, offset: Point, viewport_height: f64) -> Update {
        let next = ScrollState {
            offset,
            viewport_height,
        };
        if !next.is_valid() {
            log::warn!("ignoring scroll report with offset {offset:?} and viewport height {viewport_height}");
            return Update::Ignored;
        }
        let update = if next == self.state {
            Update::Unchanged
        } else {
            self.state = next;
            Update::Applied
        };
        let geometry = self.geometry();
        log::trace!("{update:?}: {geometry:?}");
        if let Some(subscriber) = self.subscriber.as_mut() {
            subscriber(&geometry);
        }
        update
    }
}
