// Copyright 2026 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG output for one edge fade composite.
//!
//! Each layer becomes a group that draws a shared `#content` definition,
//! masked by a `userSpaceOnUse` linear gradient and, for the blurred layer,
//! filtered with `feGaussianBlur`.

use svg::node::element::{
    ClipPath, Definitions, Filter, FilterEffectGaussianBlur, Group, LinearGradient, Mask,
    Rectangle, Stop, Text, Use,
};
use svg::Document;
use vello_edge_fade::item::SystemTime;
use vello_edge_fade::peniko::GradientKind;
use vello_edge_fade::{Composite, Item, Layer, LayerRole};

pub(crate) const ROW_HEIGHT: f64 = 60.0;
pub(crate) const ROW_SPACING: f64 = 8.0;
const ROW_INSET: f64 = 16.0;
const ROW_RADIUS: f64 = 20.0;
const ROW_COLOR: &str = "#007aff";

/// One row of the demo list.
#[derive(Debug)]
pub(crate) struct Row {
    pub(crate) label: String,
    pub(crate) item: Item,
}

pub(crate) fn content_height(rows: usize) -> f64 {
    if rows == 0 {
        return 0.0;
    }
    rows as f64 * ROW_HEIGHT + (rows - 1) as f64 * ROW_SPACING
}

/// Furthest the list can scroll, including the composite's overscroll padding.
pub(crate) fn max_scroll(composite: &Composite<'_, [Row]>) -> f64 {
    let rows = content_height(composite.sharp().content.len());
    (rows + composite.overscroll_padding - composite.sharp().clip_height).max(0.0)
}

pub(crate) fn render(composite: &Composite<'_, [Row]>, width: f64) -> Document {
    let height = composite.sharp().clip_height;
    let mut defs = Definitions::new().add(content(composite.sharp().content, width));
    let mut document = Document::new()
        .set("viewBox", format!("0 0 {width} {height}"))
        .set("width", width)
        .set("height", height);

    for layer in &composite.layers {
        let name = layer_name(layer);
        defs = defs
            .add(mask_gradient(layer, name, width))
            .add(
                Mask::new()
                    .set("id", format!("{name}-mask"))
                    .set("maskUnits", "userSpaceOnUse")
                    .add(rect(layer.mask.rect(width)).set("fill", format!("url(#{name}-gradient)"))),
            )
            .add(clip(layer, name, width));

        let mut body = Use::new().set("href", "#content");
        if let Some(radius) = layer.blur_radius {
            defs = defs.add(blur(name, radius));
            body = body.set("filter", format!("url(#{name}-blur)"));
        }
        document = document.add(
            Group::new()
                .set("id", format!("{name}-layer"))
                .set("clip-path", format!("url(#{name}-clip)"))
                .add(
                    Group::new()
                        .set("transform", format!("translate(0 {})", composite.content_origin_y()))
                        .set("mask", format!("url(#{name}-mask)"))
                        .add(body),
                ),
        );
    }
    document.add(defs)
}

fn layer_name<C: ?Sized>(layer: &Layer<'_, C>) -> &'static str {
    match layer.role {
        LayerRole::Sharp => "sharp",
        LayerRole::Blurred => "blurred",
    }
}

fn content(rows: &[Row], width: f64) -> Group {
    let mut group = Group::new().set("id", "content");
    for (index, row) in rows.iter().enumerate() {
        let y = index as f64 * (ROW_HEIGHT + ROW_SPACING);
        let created = row
            .item
            .timestamp()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|since| since.as_secs())
            .unwrap_or_default();
        group = group
            .add(
                Rectangle::new()
                    .set("x", ROW_INSET)
                    .set("y", y)
                    .set("width", width - 2.0 * ROW_INSET)
                    .set("height", ROW_HEIGHT)
                    .set("rx", ROW_RADIUS)
                    .set("fill", ROW_COLOR)
                    .set("data-created", created.to_string()),
            )
            .add(
                Text::new(row.label.clone())
                    .set("x", width / 2.0)
                    .set("y", y + ROW_HEIGHT / 2.0)
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central")
                    .set("fill", "white"),
            );
    }
    group
}

fn mask_gradient<C: ?Sized>(layer: &Layer<'_, C>, name: &str, width: f64) -> LinearGradient {
    let brush = layer.mask.brush(width);
    let mut gradient = LinearGradient::new()
        .set("id", format!("{name}-gradient"))
        .set("gradientUnits", "userSpaceOnUse");
    if let GradientKind::Linear { start, end } = brush.kind {
        gradient = gradient
            .set("x1", start.x)
            .set("y1", start.y)
            .set("x2", end.x)
            .set("y2", end.y);
    }
    for stop in brush.stops.0.iter() {
        gradient = gradient.add(
            Stop::new()
                .set("offset", stop.offset)
                .set("stop-color", "white")
                .set("stop-opacity", stop.color.components[3]),
        );
    }
    gradient
}

fn clip<C: ?Sized>(layer: &Layer<'_, C>, name: &str, width: f64) -> ClipPath {
    // Bleeding layers are not cut at the sides, so the blur reaches the screen edge.
    let spill = if layer.bleed {
        layer.blur_radius.unwrap_or_default() * 3.0
    } else {
        0.0
    };
    ClipPath::new().set("id", format!("{name}-clip")).add(
        Rectangle::new()
            .set("x", -spill)
            .set("y", 0.0)
            .set("width", width + 2.0 * spill)
            .set("height", layer.clip_height),
    )
}

fn blur(name: &str, radius: f64) -> Filter {
    Filter::new()
        .set("id", format!("{name}-blur"))
        .set("x", "-50%")
        .set("y", "-50%")
        .set("width", "200%")
        .set("height", "200%")
        .add(FilterEffectGaussianBlur::new().set("stdDeviation", radius))
}

fn rect(rect: vello_edge_fade::kurbo::Rect) -> Rectangle {
    Rectangle::new()
        .set("x", rect.x0)
        .set("y", rect.y0)
        .set("width", rect.width())
        .set("height", rect.height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vello_edge_fade::kurbo::Point;
    use vello_edge_fade::{present, Edge, FadeConfig, MaskGeometry, ScrollState};

    fn rows(count: usize) -> Vec<Row> {
        (0..count)
            .map(|index| Row {
                label: index.to_string(),
                item: Item::now(),
            })
            .collect()
    }

    fn document(edge: Edge, scrolled: f64) -> String {
        let rows = rows(4);
        let config = FadeConfig::new(10.0, 0.25, edge).unwrap();
        let geometry = MaskGeometry::from_state(&ScrollState {
            offset: Point::new(0.0, -scrolled),
            viewport_height: 800.0,
        });
        let composite = present(rows.as_slice(), &config, &geometry);
        render(&composite, 390.0).to_string()
    }

    #[test]
    fn layers_in_stacking_order() {
        let svg = document(Edge::Bottom, 0.0);
        let sharp = svg.find("id=\"sharp-layer\"").unwrap();
        let blurred = svg.find("id=\"blurred-layer\"").unwrap();
        assert!(sharp < blurred);
        assert_eq!(svg.matches("<mask").count(), 2);
        assert_eq!(svg.matches("<feGaussianBlur").count(), 1);
        assert!(svg.contains("stdDeviation=\"10\""));
    }

    #[test]
    fn masks_follow_scroll() {
        let svg = document(Edge::Bottom, 120.0);
        assert!(svg.contains("translate(0 -120)"));
        // The gradient starts at the bottom of the viewport, in content coordinates.
        assert!(svg.contains("y1=\"920\""));
        assert!(svg.contains("y2=\"120\""));
    }

    #[test]
    fn rows_are_drawn_once() {
        let svg = document(Edge::Top, 0.0);
        assert_eq!(svg.matches("<text").count(), 4);
        assert_eq!(svg.matches("<use").count(), 2);
    }

    #[test]
    fn scroll_range_includes_overscroll_padding() {
        let rows = rows(16);
        let config = FadeConfig::new(10.0, 0.25, Edge::Top).unwrap();
        let geometry = MaskGeometry::from_state(&ScrollState {
            offset: Point::ZERO,
            viewport_height: 800.0,
        });
        let composite = present(rows.as_slice(), &config, &geometry);
        assert_eq!(composite.overscroll_padding, 600.0);
        assert_eq!(max_scroll(&composite), content_height(16) + 600.0 - 800.0);

        let composite = present(&rows[..2], &config, &geometry);
        assert_eq!(max_scroll(&composite), 0.0);

        let config = FadeConfig::new(10.0, 0.25, Edge::Bottom).unwrap();
        let composite = present(rows.as_slice(), &config, &geometry);
        assert_eq!(composite.overscroll_padding, 200.0);
        assert_eq!(max_scroll(&composite), content_height(16) + 200.0 - 800.0);
    }

    #[test]
    fn content_height_includes_spacing() {
        assert_eq!(content_height(0), 0.0);
        assert_eq!(content_height(1), ROW_HEIGHT);
        assert_eq!(content_height(3), 3.0 * ROW_HEIGHT + 2.0 * ROW_SPACING);
    }
}
