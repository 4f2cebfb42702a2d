// Copyright 2026 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bridge from the host's scroll reporting to [`EdgeFadeController`].
//!
//! The host calls into a [`ScrollObserver`] once on initial layout and then on
//! every scroll or layout change, at least once per rendered frame while a
//! scroll is in progress. Reports are forwarded as they arrive; nothing is
//! debounced or coalesced.

use std::borrow::Cow;

use peniko::kurbo::{Point, Rect, Size};

use crate::controller::{EdgeFadeController, Update};

/// A named reference frame anchored at the scroll container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoordinateSpace {
    name: Cow<'static, str>,
}

impl CoordinateSpace {
    /// A coordinate space with the given name.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }

    /// The name of this space.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position of `content_frame`'s origin relative to `container_frame`'s origin.
    ///
    /// Both frames must be expressed in a common ancestor's coordinates.
    pub fn locate(&self, content_frame: Rect, container_frame: Rect) -> Point {
        (content_frame.origin() - container_frame.origin()).to_point()
    }
}

/// One report from the host scroll engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollReport {
    /// Origin of the content within the container's coordinate space.
    pub origin: Point,
    /// Size of the visible part of the container.
    pub viewport: Size,
}

/// Forwards host scroll reports to a controller.
#[derive(Debug, Clone)]
pub struct ScrollObserver {
    space: CoordinateSpace,
    last: Option<ScrollReport>,
    skip_duplicates: bool,
}

impl ScrollObserver {
    pub fn new(space: CoordinateSpace) -> Self {
        Self {
            space,
            last: None,
            skip_duplicates: false,
        }
    }

    /// Drop reports identical to the previous one instead of forwarding them.
    #[must_use]
    pub fn skip_duplicates(mut self, skip: bool) -> Self {
        self.skip_duplicates = skip;
        self
    }

    /// The coordinate space offsets are measured in.
    pub fn space(&self) -> &CoordinateSpace {
        &self.space
    }

    /// The most recent report that was forwarded.
    pub fn last_report(&self) -> Option<ScrollReport> {
        self.last
    }

    /// Report the content origin and viewport size.
    pub fn report(
        &mut self,
        controller: &mut EdgeFadeController,
        origin: Point,
        viewport: Size,
    ) -> Update {
        let report = ScrollReport { origin, viewport };
        if self.skip_duplicates && self.last == Some(report) {
            return Update::Unchanged;
        }
        let update = controller.on_scroll_update(origin, viewport.height);
        if update != Update::Ignored {
            self.last = Some(report);
        }
        update
    }

    /// Report raw frames, resolving the content origin through the coordinate space.
    pub fn report_frames(
        &mut self,
        controller: &mut EdgeFadeController,
        content_frame: Rect,
        container_frame: Rect,
    ) -> Update {
        let origin = self.space().locate(content_frame, container_frame);
        self.report(controller, origin, container_frame.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FadeConfig;

    fn controller() -> EdgeFadeController {
        EdgeFadeController::new(FadeConfig::default())
    }

    #[test]
    fn locate_is_relative_to_container() {
        let space = CoordinateSpace::named("scroll");
        assert_eq!(space.name(), "scroll");
        let container = Rect::new(0.0, 44.0, 390.0, 844.0);
        let content = Rect::new(16.0, -76.0, 374.0, 1600.0);
        assert_eq!(space.locate(content, container), Point::new(16.0, -120.0));
    }

    #[test]
    fn forwards_reports() {
        let mut controller = controller();
        let mut observer = ScrollObserver::new(CoordinateSpace::named("scroll"));
        let update = observer.report(&mut controller, Point::new(0.0, -30.0), Size::new(390.0, 700.0));
        assert_eq!(update, Update::Applied);
        assert_eq!(controller.state().viewport_height, 700.0);
        assert_eq!(controller.geometry().primary_gradient_offset, 30.0);
        assert_eq!(
            observer.last_report(),
            Some(ScrollReport {
                origin: Point::new(0.0, -30.0),
                viewport: Size::new(390.0, 700.0),
            })
        );
    }

    #[test]
    fn frames_resolve_through_space() {
        let mut controller = controller();
        let mut observer = ScrollObserver::new(CoordinateSpace::named("list"));
        assert_eq!(observer.space().name(), "list");
        observer.report_frames(
            &mut controller,
            Rect::new(0.0, -200.0, 390.0, 2000.0),
            Rect::new(0.0, 0.0, 390.0, 800.0),
        );
        assert_eq!(controller.state().offset, Point::new(0.0, -200.0));
        assert_eq!(controller.geometry().clip_height, 800.0);
    }

    #[test]
    fn duplicates_reach_controller_by_default() {
        let calls = std::rc::Rc::new(std::cell::Cell::new(0));
        let mut controller = controller();
        let sink = std::rc::Rc::clone(&calls);
        controller.subscribe(move |_| sink.set(sink.get() + 1));

        let mut observer = ScrollObserver::new(CoordinateSpace::named("scroll"));
        let viewport = Size::new(100.0, 100.0);
        observer.report(&mut controller, Point::ORIGIN, viewport);
        assert_eq!(
            observer.report(&mut controller, Point::ORIGIN, viewport),
            Update::Unchanged
        );
        assert_eq!(calls.get(), 2);

        let mut observer = observer.skip_duplicates(true);
        assert_eq!(
            observer.report(&mut controller, Point::ORIGIN, viewport),
            Update::Unchanged
        );
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn ignored_reports_are_not_remembered() {
        let mut controller = controller();
        let mut observer = ScrollObserver::new(CoordinateSpace::named("scroll"));
        let update = observer.report(&mut controller, Point::ORIGIN, Size::new(100.0, f64::NAN));
        assert_eq!(update, Update::Ignored);
        assert_eq!(observer.last_report(), None);
    }
}
