//! Hover overlay state, independent of how a chart dispatches pointer events.

/// Offset of the overlay box from the pointer anchor.
pub const OVERLAY_OFFSET: (f64, f64) = (10.0, -10.0);

/// Screen coordinates in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// What lies under the pointer, as reported by the host view on every move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub at: Point,
    /// The pointer is over a shape drawn by the chart.
    pub over_drawable: bool,
    /// The pointer is inside the chart's container region.
    pub inside_container: bool,
}

/// Active hovered datum plus the anchor the overlay is drawn at.
///
/// Last write wins; there is no ordering beyond call order.
#[derive(Debug, Clone)]
pub struct TooltipState<T> {
    active: Option<T>,
    anchor: Point,
    auto_hide: bool,
}

impl<T> Default for TooltipState<T> {
    fn default() -> Self {
        Self {
            active: None,
            anchor: Point::default(),
            auto_hide: false,
        }
    }
}

impl<T> TooltipState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the datum whenever the pointer is off this chart's shapes or
    /// outside its container, for chart libraries that skip leave events.
    pub fn with_auto_hide() -> Self {
        Self {
            auto_hide: true,
            ..Self::default()
        }
    }

    pub fn show(&mut self, item: T, x: f64, y: f64) {
        self.active = Some(item);
        self.anchor = Point { x, y };
    }

    pub fn hide(&mut self) {
        self.active = None;
    }

    pub fn update_position(&mut self, x: f64, y: f64) {
        self.anchor = Point { x, y };
    }

    /// Feed a pointer move seen anywhere in the enclosing view.
    pub fn observe_pointer(&mut self, sample: PointerSample) {
        if !self.auto_hide || self.active.is_none() {
            return;
        }
        if !(sample.over_drawable && sample.inside_container) {
            tracing::trace!(x = sample.at.x, y = sample.at.y, "pointer left chart shapes");
            self.hide();
        }
    }

    pub fn active(&self) -> Option<&T> {
        self.active.as_ref()
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn is_visible(&self) -> bool {
        self.active.is_some()
    }

    pub fn auto_hide(&self) -> bool {
        self.auto_hide
    }

    /// Top-left corner of the overlay box, `None` while hidden.
    pub fn overlay_position(&self) -> Option<Point> {
        self.active.as_ref().map(|_| Point {
            x: self.anchor.x + OVERLAY_OFFSET.0,
            y: self.anchor.y + OVERLAY_OFFSET.1,
        })
    }
}
