// Copyright 2026 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-driven edge fade for scrollable content.
//!
//! Content near the top or bottom edge of a scroll container fades out and
//! blurs progressively instead of being clipped hard. The effect is built from
//! two copies of the same content:
//!
//! - a sharp copy, masked by a gradient that is opaque away from the fading edge, and
//! - a blurred copy, masked by the complementary gradient, which is opaque next to it.
//!
//! Both masks are pinned to the viewport while the content scrolls underneath them,
//! and because the two gradients are complements the layer alphas always sum to one.
//!
//! # Usage
//!
//! ```
//! use vello_edge_fade::kurbo::{Point, Size};
//! use vello_edge_fade::{CoordinateSpace, EdgeFadeController, Edge, FadeConfig, ScrollObserver};
//!
//! let config = FadeConfig::new(10.0, 0.25, Edge::Bottom).unwrap();
//! let mut controller = EdgeFadeController::new(config);
//! let mut observer = ScrollObserver::new(CoordinateSpace::named("scroll"));
//!
//! observer.report(&mut controller, Point::new(0.0, -120.0), Size::new(390.0, 800.0));
//!
//! let content = "rows";
//! let composite = vello_edge_fade::present(&content, controller.config(), &controller.geometry());
//! assert_eq!(composite.layers.len(), 2);
//! ```
//!
//! The crate does not scroll, hit-test or rasterize anything. Hosts feed it scroll
//! reports and turn the resulting [`Composite`] into draw calls for their renderer.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod gradient;
pub mod item;
pub mod observer;
pub mod present;

pub use peniko;
pub use peniko::kurbo;

pub use config::{ConfigError, Edge, FadeConfig};
pub use controller::{EdgeFadeController, MaskGeometry, ScrollState, Update};
pub use gradient::{GradientPair, GradientSpec, GradientStop};
pub use item::Item;
pub use observer::{CoordinateSpace, ScrollObserver, ScrollReport};
pub use present::{present, Composite, Layer, LayerMask, LayerRole};
