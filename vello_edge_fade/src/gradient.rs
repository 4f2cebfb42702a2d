// Copyright 2026 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gradient stops for the two complementary fade masks.
//!
//! Positions are fractions along the fade axis, running from the bottom of the
//! viewport (0) to its top (1). Only one shape is ever computed: the primary
//! gradient is opaque below its first stop and transparent above its second.
//! A top edge fade mirrors the stop positions about 1, and the inverted
//! gradient complements the alphas at the same positions.

use peniko::color::{palette, DynamicColor};
use peniko::kurbo::{Point, Rect};
use peniko::{ColorStop, ColorStops, Extend, Gradient, GradientKind};
use smallvec::smallvec;

use crate::config::{Edge, FadeConfig};

/// Distance from the fading edge, as a fraction of the viewport height, over
/// which the blurred layer stays fully opaque.
pub const NEAR_EDGE_INSET: f64 = 0.10;

/// Upper bound on the inset as a fraction of the fade extent, so the ramp
/// keeps a width for extents below [`NEAR_EDGE_INSET`].
const MAX_INSET_FRACTION: f64 = 0.4;

/// One point of a linear opacity ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the fade axis, in `[0, 1]`.
    pub offset: f64,
    /// Opacity at this position, in `[0, 1]`.
    pub alpha: f64,
}

impl GradientStop {
    const fn new(offset: f64, alpha: f64) -> Self {
        Self { offset, alpha }
    }
}

/// A two-stop linear opacity ramp, padded beyond both stops.
///
/// Stop offsets are always within `[0, 1]` and strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientSpec {
    pub stops: [GradientStop; 2],
}

impl GradientSpec {
    /// The primary gradient for `config`.
    pub fn primary(config: &FadeConfig) -> Self {
        let inset = NEAR_EDGE_INSET.min(config.fade_extent() * MAX_INSET_FRACTION);
        let extent = config.effective_extent();
        let (lo, hi) = match config.edge() {
            Edge::Bottom => (inset, extent),
            Edge::Top => (extent, 1.0 - inset),
        };
        Self {
            stops: [GradientStop::new(lo, 1.0), GradientStop::new(hi, 0.0)],
        }
    }

    /// The complement of this gradient: same positions, `1 - alpha` at each.
    #[must_use]
    pub fn inverted(&self) -> Self {
        let [a, b] = self.stops;
        Self {
            stops: [
                GradientStop::new(a.offset, 1.0 - a.alpha),
                GradientStop::new(b.offset, 1.0 - b.alpha),
            ],
        }
    }

    /// Sample the opacity at `position` along the fade axis.
    pub fn alpha_at(&self, position: f64) -> f64 {
        let [a, b] = self.stops;
        // `!(>)` so that NaN takes the first stop.
        if !(position > a.offset) {
            return a.alpha;
        }
        if position >= b.offset {
            return b.alpha;
        }
        let t = (position - a.offset) / (b.offset - a.offset);
        a.alpha + (b.alpha - a.alpha) * t
    }

    /// Stop distances from the bottom of a viewport `height` pixels tall.
    pub fn scaled(&self, height: f64) -> [f64; 2] {
        self.stops.map(|stop| stop.offset * height)
    }

    /// Convert to a white linear [`Gradient`] running from the bottom of `rect` to its top.
    ///
    /// The resulting brush is meant to be used as an alpha mask.
    pub fn to_peniko(&self, rect: Rect) -> Gradient {
        let stop = |s: GradientStop| ColorStop {
            offset: s.offset as f32,
            color: DynamicColor::from_alpha_color(palette::css::WHITE.with_alpha(s.alpha as f32)),
        };
        Gradient {
            kind: GradientKind::Linear {
                start: Point::new(rect.x0, rect.y1),
                end: Point::new(rect.x0, rect.y0),
            },
            extend: Extend::Pad,
            stops: ColorStops(smallvec![stop(self.stops[0]), stop(self.stops[1])]),
            ..Default::default()
        }
    }
}

/// The primary and inverted gradients for one configuration, with their layer roles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientPair {
    pub primary: GradientSpec,
    pub inverted: GradientSpec,
    edge: Edge,
}

impl GradientPair {
    /// Compute both gradients for `config`.
    pub fn new(config: &FadeConfig) -> Self {
        let primary = GradientSpec::primary(config);
        Self {
            primary,
            inverted: primary.inverted(),
            edge: config.edge(),
        }
    }

    /// Whether the blurred layer is masked by the primary gradient.
    ///
    /// True for [`Edge::Bottom`]. For [`Edge::Top`] the roles swap, which keeps
    /// the blur next to the fading edge in both cases.
    pub fn primary_masks_blur(&self) -> bool {
        self.edge == Edge::Bottom
    }

    /// The gradient masking the blurred layer.
    pub fn blurred(&self) -> &GradientSpec {
        if self.primary_masks_blur() {
            &self.primary
        } else {
            &self.inverted
        }
    }

    /// The gradient masking the sharp layer.
    pub fn sharp(&self) -> &GradientSpec {
        if self.primary_masks_blur() {
            &self.inverted
        } else {
            &self.primary
        }
    }
}

static_assertions::assert_impl_all!(GradientPair: Send, Sync, Copy);
