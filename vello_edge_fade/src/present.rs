// Copyright 2026 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer composition for the edge fade.
//!
//! [`present`] is a pure function from content, configuration and mask
//! geometry to a [`Composite`]: a two-layer description the host turns into
//! draw calls. Nothing here touches a rendering surface, so the composition
//! can be checked by looking at the tree alone.

use peniko::kurbo::Rect;
use peniko::Gradient;

use crate::config::FadeConfig;
use crate::controller::MaskGeometry;
use crate::gradient::{GradientPair, GradientSpec};

/// Which copy of the content a layer draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerRole {
    /// The unblurred content, visible away from the fading edge.
    Sharp,
    /// The blurred duplicate, visible next to the fading edge.
    Blurred,
}

/// A gradient mask pinned to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerMask {
    pub gradient: GradientSpec,
    /// Vertical translation of the mask in content coordinates.
    pub offset_y: f64,
    /// Height of the mask, equal to the viewport height.
    pub height: f64,
}

impl LayerMask {
    /// The area covered by the mask in content coordinates.
    pub fn rect(&self, width: f64) -> Rect {
        Rect::new(0.0, self.offset_y, width, self.offset_y + self.height)
    }

    /// The mask as a peniko gradient brush spanning [`LayerMask::rect`].
    pub fn brush(&self, width: f64) -> Gradient {
        self.gradient.to_peniko(self.rect(width))
    }
}

/// One masked copy of the content.
#[derive(Debug, PartialEq)]
pub struct Layer<'a, C: ?Sized> {
    pub role: LayerRole,
    pub content: &'a C,
    /// Gaussian blur radius, if the layer is blurred.
    pub blur_radius: Option<f64>,
    pub mask: LayerMask,
    /// The layer is clipped to `[0, clip_height]` in viewport coordinates.
    pub clip_height: f64,
    /// Whether the layer extends past the safe area to the screen edges.
    pub bleed: bool,
}

// Manual impls: only the reference is copied, so `C` needs no bounds.
impl<C: ?Sized> Clone for Layer<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for Layer<'_, C> {}

/// The full edge fade for one frame.
#[derive(Debug, PartialEq)]
pub struct Composite<'a, C: ?Sized> {
    /// Layers in stacking order, bottom first: sharp, then blurred.
    pub layers: [Layer<'a, C>; 2],
    /// Extra space below the content so its end can scroll through the fade.
    pub overscroll_padding: f64,
    gradients: GradientPair,
}

impl<C: ?Sized> Clone for Composite<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for Composite<'_, C> {}

impl<'a, C: ?Sized> Composite<'a, C> {
    /// The sharp layer.
    pub fn sharp(&self) -> &Layer<'a, C> {
        &self.layers[0]
    }

    /// The blurred layer.
    pub fn blurred(&self) -> &Layer<'a, C> {
        &self.layers[1]
    }

    /// Vertical position of the content origin in viewport coordinates.
    pub fn content_origin_y(&self) -> f64 {
        -self.layers[0].mask.offset_y
    }

    /// Sharp and blurred layer alphas at `position` along the fade axis.
    pub fn alpha_at(&self, position: f64) -> (f64, f64) {
        (
            self.gradients.sharp().alpha_at(position),
            self.gradients.blurred().alpha_at(position),
        )
    }
}

/// Build the two-layer composite for one frame.
pub fn present<'a, C: ?Sized>(
    content: &'a C,
    config: &FadeConfig,
    geometry: &MaskGeometry,
) -> Composite<'a, C> {
    let gradients = GradientPair::new(config);
    let (sharp_offset, blurred_offset) = if gradients.primary_masks_blur() {
        (
            geometry.inverted_gradient_offset,
            geometry.primary_gradient_offset,
        )
    } else {
        (
            geometry.primary_gradient_offset,
            geometry.inverted_gradient_offset,
        )
    };
    let mask = |gradient: &GradientSpec, offset_y| LayerMask {
        gradient: *gradient,
        offset_y,
        height: geometry.clip_height,
    };
    let sharp = Layer {
        role: LayerRole::Sharp,
        content,
        blur_radius: None,
        mask: mask(gradients.sharp(), sharp_offset),
        clip_height: geometry.clip_height,
        bleed: false,
    };
    let blurred = Layer {
        role: LayerRole::Blurred,
        content,
        blur_radius: Some(config.blur_strength()),
        mask: mask(gradients.blurred(), blurred_offset),
        clip_height: geometry.clip_height,
        bleed: true,
    };
    Composite {
        layers: [sharp, blurred],
        overscroll_padding: geometry.clip_height * config.effective_extent(),
        gradients,
    }
}
