// Copyright 2026 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoration-time configuration of the edge fade.

use thiserror::Error;

/// The blur radius used when none is given.
pub const DEFAULT_BLUR_RADIUS: f64 = 15.0;

/// The fade extent used when none is given.
pub const DEFAULT_FADE_EXTENT: f64 = 0.25;

/// Smallest extent [`FadeConfig::clamped`] will produce.
pub const MIN_FADE_EXTENT: f64 = 0.01;

/// Largest extent [`FadeConfig::clamped`] will produce.
pub const MAX_FADE_EXTENT: f64 = 0.99;

/// Which edge of the viewport fades.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The top edge of the viewport.
    Top,
    /// The bottom edge of the viewport.
    #[default]
    Bottom,
}

/// Errors produced when configuring an edge fade.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The fade extent must lie strictly between 0 and 1.
    #[error("fade extent {0} is outside the open interval (0, 1)")]
    FadeExtentOutOfRange(f64),
    /// The blur strength must be finite and positive.
    #[error("blur strength {0} is not a finite positive number")]
    InvalidBlurStrength(f64),
}

/// Immutable configuration of an edge fade.
///
/// The externally supplied `fade_extent` is stored as given; the per-edge
/// normalized value is available through [`FadeConfig::effective_extent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeConfig {
    blur_strength: f64,
    fade_extent: f64,
    edge: Edge,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            blur_strength: DEFAULT_BLUR_RADIUS,
            fade_extent: DEFAULT_FADE_EXTENT,
            edge: Edge::Bottom,
        }
    }
}

impl FadeConfig {
    /// Create a new configuration, rejecting out-of-range values.
    ///
    /// `fade_extent` must lie in the open interval (0, 1) and `blur_strength`
    /// must be finite and greater than zero.
    pub fn new(blur_strength: f64, fade_extent: f64, edge: Edge) -> Result<Self, ConfigError> {
        if !(blur_strength.is_finite() && blur_strength > 0.0) {
            return Err(ConfigError::InvalidBlurStrength(blur_strength));
        }
        // Written so that NaN is rejected too.
        if !(fade_extent > 0.0 && fade_extent < 1.0) {
            return Err(ConfigError::FadeExtentOutOfRange(fade_extent));
        }
        log::debug!("configured edge fade: blur {blur_strength}, extent {fade_extent}, {edge:?}");
        Ok(Self {
            blur_strength,
            fade_extent,
            edge,
        })
    }

    /// A bottom edge fade with the default extent and the given blur.
    pub fn with_blur(blur_strength: f64) -> Result<Self, ConfigError> {
        Self::new(blur_strength, DEFAULT_FADE_EXTENT, Edge::Bottom)
    }

    /// Create a configuration, clamping invalid values instead of rejecting them.
    ///
    /// Non-finite extents fall back to [`DEFAULT_FADE_EXTENT`], and invalid
    /// blur strengths to [`DEFAULT_BLUR_RADIUS`].
    pub fn clamped(blur_strength: f64, fade_extent: f64, edge: Edge) -> Self {
        let extent = if !fade_extent.is_finite() {
            DEFAULT_FADE_EXTENT
        } else {
            fade_extent.clamp(MIN_FADE_EXTENT, MAX_FADE_EXTENT)
        };
        let blur = if blur_strength.is_finite() && blur_strength > 0.0 {
            blur_strength
        } else {
            DEFAULT_BLUR_RADIUS
        };
        if extent != fade_extent || blur != blur_strength {
            log::warn!(
                "clamped edge fade configuration: extent {fade_extent} -> {extent}, blur {blur_strength} -> {blur}"
            );
        }
        Self {
            blur_strength: blur,
            fade_extent: extent,
            edge,
        }
    }

    /// The same configuration, fading `edge` instead.
    ///
    /// The stored external fade extent is kept as is.
    #[must_use]
    pub fn with_edge(self, edge: Edge) -> Self {
        Self { edge, ..self }
    }

    /// Blur radius applied to the duplicated content layer.
    pub fn blur_strength(&self) -> f64 {
        self.blur_strength
    }

    /// The fade extent as supplied by the caller.
    pub fn fade_extent(&self) -> f64 {
        self.fade_extent
    }

    /// The fading edge.
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// The fade extent normalized for the configured edge.
    ///
    /// A top edge fade is the bottom fade mirrored about 1, so this is
    /// `1 - fade_extent` for [`Edge::Top`] and `fade_extent` otherwise.
    pub fn effective_extent(&self) -> f64 {
        match self.edge {
            Edge::Top => 1.0 - self.fade_extent,
            Edge::Bottom => self.fade_extent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_extent_boundaries() {
        assert_eq!(
            FadeConfig::new(10.0, 0.0, Edge::Bottom),
            Err(ConfigError::FadeExtentOutOfRange(0.0))
        );
        assert_eq!(
            FadeConfig::new(10.0, 1.0, Edge::Top),
            Err(ConfigError::FadeExtentOutOfRange(1.0))
        );
        assert!(FadeConfig::new(10.0, -0.5, Edge::Bottom).is_err());
        assert!(FadeConfig::new(10.0, f64::NAN, Edge::Bottom).is_err());
    }

    #[test]
    fn rejects_bad_blur() {
        assert_eq!(
            FadeConfig::new(0.0, 0.25, Edge::Bottom),
            Err(ConfigError::InvalidBlurStrength(0.0))
        );
        assert!(FadeConfig::new(f64::INFINITY, 0.25, Edge::Bottom).is_err());
        assert!(FadeConfig::new(-3.0, 0.25, Edge::Bottom).is_err());
    }

    #[test]
    fn top_edge_mirrors_extent() {
        let bottom = FadeConfig::new(10.0, 0.25, Edge::Bottom).unwrap();
        assert_eq!(bottom.effective_extent(), 0.25);

        let top = bottom.with_edge(Edge::Top);
        assert_eq!(top.effective_extent(), 0.75);
        assert_eq!(top.fade_extent(), 0.25);
        assert_eq!(top.blur_strength(), 10.0);
    }

    #[test]
    fn with_blur_uses_defaults() {
        let config = FadeConfig::with_blur(10.0).unwrap();
        assert_eq!(config.fade_extent(), DEFAULT_FADE_EXTENT);
        assert_eq!(config.edge(), Edge::Bottom);
        assert_eq!(FadeConfig::default().blur_strength(), DEFAULT_BLUR_RADIUS);
    }

    #[test]
    fn clamped_keeps_values_in_range() {
        let config = FadeConfig::clamped(-1.0, 1.5, Edge::Top);
        assert_eq!(config.fade_extent(), MAX_FADE_EXTENT);
        assert_eq!(config.blur_strength(), DEFAULT_BLUR_RADIUS);

        let config = FadeConfig::clamped(4.0, 0.0, Edge::Bottom);
        assert_eq!(config.fade_extent(), MIN_FADE_EXTENT);
        assert_eq!(config.blur_strength(), 4.0);

        for extent in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let config = FadeConfig::clamped(4.0, extent, Edge::Bottom);
            assert_eq!(config.fade_extent(), DEFAULT_FADE_EXTENT);
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::FadeExtentOutOfRange(1.0).to_string(),
            "fade extent 1 is outside the open interval (0, 1)"
        );
    }
}
