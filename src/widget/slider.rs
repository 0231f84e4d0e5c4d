// SPDX-License-Identifier: MPL-2.0
//! Center-origin slider widget.
//!
//! The tracking bar grows outward from the center of the range toward
//! either end instead of filling from one edge. The widget is a thin
//! rendering adapter: value mapping lives in [`crate::domain::mapper`]
//! and gesture interpretation in [`DragSession`]; the widget feeds
//! events in and draws the computed offsets.
//!
//! Dragging starts on the thumb and publishes the quantized value on
//! every move, giving live-tracking feedback. External value changes
//! reposition the thumb without disturbing the drag accumulation.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{mouse, Border, Element, Event, Length, Point, Rectangle, Size};

use crate::domain::axis::Axis;
use crate::domain::geometry::TrackGeometry;
use crate::domain::mapper;
use crate::domain::range::{Increment, SliderRange};
use crate::state::drag::DragSession;
use crate::widget::style::{Catalog, Status, StyleFn};

/// Margin between each track end and the widget bounds, in pixels.
const END_MARGIN: f32 = 16.0;

/// Cross-axis extent of the widget, in pixels.
const CROSS_EXTENT: f32 = 32.0;

/// Default thumb diameter, in pixels.
const DEFAULT_THUMB_SIZE: f32 = 16.0;

/// Default guide/tracking bar thickness, in pixels.
const DEFAULT_BAR_THICKNESS: f32 = 4.0;

/// Default corner radius of the guide bar.
const DEFAULT_GUIDE_BAR_RADIUS: f32 = 2.0;

/// An interactive slider whose tracking bar grows outward from the
/// center of its range.
///
/// The caller owns the value; the widget publishes a message through
/// `on_change` whenever dragging proposes a new one.
///
/// # Example
///
/// ```
/// use center_origin_slider::{center_origin_slider, CenterOriginSlider, SliderRange};
///
/// #[derive(Debug, Clone)]
/// enum Message {
///     BalanceChanged(f32),
/// }
///
/// let range = SliderRange::new(-1.0, 1.0).unwrap();
/// let slider: CenterOriginSlider<'_, Message> =
///     center_origin_slider(range, 0.0, Message::BalanceChanged);
/// ```
pub struct CenterOriginSlider<'a, Message, Theme = iced::Theme>
where
    Theme: Catalog,
{
    range: SliderRange,
    increment: Increment,
    value: f32,
    axis: Axis,
    on_change: Box<dyn Fn(f32) -> Message + 'a>,
    length: Length,
    thumb_size: f32,
    guide_bar_thickness: f32,
    guide_bar_corner_radius: f32,
    tracking_bar_thickness: f32,
    class: Theme::Class<'a>,
}

impl<'a, Message, Theme> CenterOriginSlider<'a, Message, Theme>
where
    Theme: Catalog,
{
    /// Creates a horizontal slider over `range`, showing `value` and
    /// publishing `on_change` messages while dragging.
    ///
    /// An out-of-range `value` is clamped into the range.
    pub fn new(range: SliderRange, value: f32, on_change: impl Fn(f32) -> Message + 'a) -> Self {
        Self {
            range,
            increment: Increment::CONTINUOUS,
            value: range.clamp(value),
            axis: Axis::Horizontal,
            on_change: Box::new(on_change),
            length: Length::Fill,
            thumb_size: DEFAULT_THUMB_SIZE,
            guide_bar_thickness: DEFAULT_BAR_THICKNESS,
            guide_bar_corner_radius: DEFAULT_GUIDE_BAR_RADIUS,
            tracking_bar_thickness: DEFAULT_BAR_THICKNESS,
            class: Theme::default(),
        }
    }

    /// Sets the quantization increment of committed values.
    #[must_use]
    pub fn increment(mut self, increment: Increment) -> Self {
        self.increment = increment;
        self
    }

    /// Sets the axis the slider tracks along.
    #[must_use]
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Turns the slider vertical; increasing value moves the thumb
    /// upward.
    #[must_use]
    pub fn vertical(self) -> Self {
        self.axis(Axis::Vertical)
    }

    /// Sets the main-axis length of the widget.
    #[must_use]
    pub fn length(mut self, length: impl Into<Length>) -> Self {
        self.length = length.into();
        self
    }

    /// Sets the thumb diameter.
    #[must_use]
    pub fn thumb_size(mut self, size: f32) -> Self {
        self.thumb_size = size;
        self
    }

    /// Sets the guide bar thickness.
    #[must_use]
    pub fn guide_bar_thickness(mut self, thickness: f32) -> Self {
        self.guide_bar_thickness = thickness;
        self
    }

    /// Sets the corner radius of the guide bar.
    #[must_use]
    pub fn guide_bar_corner_radius(mut self, radius: f32) -> Self {
        self.guide_bar_corner_radius = radius;
        self
    }

    /// Sets the tracking bar thickness.
    #[must_use]
    pub fn tracking_bar_thickness(mut self, thickness: f32) -> Self {
        self.tracking_bar_thickness = thickness;
        self
    }

    /// Sets the style of the slider.
    #[must_use]
    pub fn style(mut self, style: impl Fn(&Theme, Status) -> crate::widget::style::Style + 'a) -> Self
    where
        Theme::Class<'a>: From<StyleFn<'a, Theme>>,
    {
        self.class = (Box::new(style) as StyleFn<'a, Theme>).into();
        self
    }

    /// Sets the style class of the slider.
    #[must_use]
    pub fn class(mut self, class: impl Into<Theme::Class<'a>>) -> Self {
        self.class = class.into();
        self
    }

    fn axis_size(&self) -> (Length, Length) {
        match self.axis {
            Axis::Horizontal => (self.length, Length::Fixed(CROSS_EXTENT)),
            Axis::Vertical => (Length::Fixed(CROSS_EXTENT), self.length),
        }
    }

    fn track_geometry(&self, bounds: Rectangle) -> TrackGeometry {
        let main = self.axis.select(bounds.width, bounds.height);
        TrackGeometry::new(main - 2.0 * END_MARGIN, self.thumb_size)
    }

    /// Screen-axis offset of the thumb center while no drag owns it,
    /// re-derived from the caller's value.
    fn idle_offset(&self, geometry: TrackGeometry) -> f32 {
        if geometry.is_degenerate() {
            return 0.0;
        }
        self.axis.direction_sign()
            * mapper::offset_from_value(self.value, self.range, geometry.half_span())
    }

    fn current_offset(&self, session: &DragSession, geometry: TrackGeometry) -> f32 {
        if session.is_dragging() {
            session.render_offset()
        } else {
            self.idle_offset(geometry)
        }
    }

    fn thumb_bounds(&self, bounds: Rectangle, offset: f32) -> Rectangle {
        let center = Point::new(bounds.center_x(), bounds.center_y());
        let (x, y) = match self.axis {
            Axis::Horizontal => (
                center.x + offset - self.thumb_size / 2.0,
                center.y - self.thumb_size / 2.0,
            ),
            Axis::Vertical => (
                center.x - self.thumb_size / 2.0,
                center.y + offset - self.thumb_size / 2.0,
            ),
        };
        Rectangle {
            x,
            y,
            width: self.thumb_size,
            height: self.thumb_size,
        }
    }
}

/// Per-instance interaction state stored in the widget tree.
#[derive(Debug, Clone, Copy, Default)]
struct State {
    session: DragSession,
    /// Scalar cursor coordinate where the current gesture started.
    grab_origin: f32,
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for CenterOriginSlider<'_, Message, Theme>
where
    Theme: Catalog,
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        let (width, height) = self.axis_size();
        Size::new(width, height)
    }

    fn layout(
        &mut self,
        _tree: &mut tree::Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let (width, height) = self.axis_size();
        layout::atomic(limits, width, height)
    }

    fn update(
        &mut self,
        tree: &mut tree::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();
        let geometry = self.track_geometry(bounds);

        // Mirror the caller-owned value into the rendered offset while
        // idle; the accumulated offset is deliberately left alone.
        if !state.session.is_dragging() {
            state.session.sync_external(self.idle_offset(geometry));
        }

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position() {
                    let thumb =
                        self.thumb_bounds(bounds, self.current_offset(&state.session, geometry));
                    if thumb.contains(position) {
                        if geometry.is_degenerate() {
                            log::warn!(
                                "slider has no drag range (track {:.1}px, thumb {:.1}px)",
                                geometry.track_extent(),
                                geometry.thumb_extent()
                            );
                        } else {
                            state.grab_origin = self.axis.select(position.x, position.y);
                            state.session.begin();
                            shell.capture_event();
                        }
                    }
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if state.session.is_dragging() {
                    if let Some(position) = cursor.position() {
                        let translation =
                            self.axis.select(position.x, position.y) - state.grab_origin;
                        if let Some(value) = state.session.drag_to(
                            translation,
                            self.range,
                            self.increment,
                            geometry,
                            self.axis,
                        ) {
                            shell.publish((self.on_change)(value));
                        }
                        shell.capture_event();
                    }
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.session.is_dragging() {
                    state.session.finish();
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                // A gesture losing its end event freezes at its last
                // move instead of snapping the thumb back.
                if state.session.is_dragging() {
                    state.session.finish();
                }
            }
            _ => {}
        }
    }

    fn draw(
        &self,
        tree: &tree::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();
        let geometry = self.track_geometry(bounds);

        let offset = self.current_offset(&state.session, geometry);
        let thumb = self.thumb_bounds(bounds, offset);

        let status = if state.session.is_dragging() {
            Status::Dragged
        } else if cursor.is_over(thumb) {
            Status::Hovered
        } else {
            Status::Active
        };
        let style = theme.style(&self.class, status);

        let center = Point::new(bounds.center_x(), bounds.center_y());

        // Guide bar spanning the full track.
        let guide = match self.axis {
            Axis::Horizontal => Rectangle {
                x: bounds.x + END_MARGIN,
                y: center.y - self.guide_bar_thickness / 2.0,
                width: geometry.track_extent().max(0.0),
                height: self.guide_bar_thickness,
            },
            Axis::Vertical => Rectangle {
                x: center.x - self.guide_bar_thickness / 2.0,
                y: bounds.y + END_MARGIN,
                width: self.guide_bar_thickness,
                height: geometry.track_extent().max(0.0),
            },
        };
        renderer.fill_quad(
            renderer::Quad {
                bounds: guide,
                border: Border {
                    radius: self.guide_bar_corner_radius.into(),
                    ..Border::default()
                },
                ..renderer::Quad::default()
            },
            style.guide_bar,
        );

        // Tracking bar, anchored at the center and growing toward the
        // side the value sits on.
        if offset.abs() > f32::EPSILON {
            let fill = match self.axis {
                Axis::Horizontal => Rectangle {
                    x: center.x + offset.min(0.0),
                    y: center.y - self.tracking_bar_thickness / 2.0,
                    width: offset.abs(),
                    height: self.tracking_bar_thickness,
                },
                Axis::Vertical => Rectangle {
                    x: center.x - self.tracking_bar_thickness / 2.0,
                    y: center.y + offset.min(0.0),
                    width: self.tracking_bar_thickness,
                    height: offset.abs(),
                },
            };
            renderer.fill_quad(
                renderer::Quad {
                    bounds: fill,
                    ..renderer::Quad::default()
                },
                style.tracking_bar,
            );
        }

        // Thumb.
        renderer.fill_quad(
            renderer::Quad {
                bounds: thumb,
                border: Border {
                    color: style.thumb_border,
                    width: 1.0,
                    radius: (self.thumb_size / 2.0).into(),
                },
                shadow: style.shadow,
                ..renderer::Quad::default()
            },
            style.thumb,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &tree::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();
        if state.session.is_dragging() {
            return mouse::Interaction::Grabbing;
        }

        let bounds = layout.bounds();
        let geometry = self.track_geometry(bounds);
        let thumb = self.thumb_bounds(bounds, self.current_offset(&state.session, geometry));
        if cursor.is_over(thumb) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message, Theme, Renderer> From<CenterOriginSlider<'a, Message, Theme>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: Catalog + 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(slider: CenterOriginSlider<'a, Message, Theme>) -> Self {
        Self::new(slider)
    }
}

/// Helper function to create a [`CenterOriginSlider`].
pub fn center_origin_slider<'a, Message, Theme>(
    range: SliderRange,
    value: f32,
    on_change: impl Fn(f32) -> Message + 'a,
) -> CenterOriginSlider<'a, Message, Theme>
where
    Theme: Catalog,
{
    CenterOriginSlider::new(range, value, on_change)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider(value: f32) -> CenterOriginSlider<'static, (), iced::Theme> {
        let range = SliderRange::new(-100.0, 100.0).unwrap();
        CenterOriginSlider::new(range, value, |_| ())
    }

    fn bounds() -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: 232.0,
            height: 32.0,
        }
    }

    #[test]
    fn construction_clamps_the_value_into_the_range() {
        let widget = slider(250.0);
        assert!((widget.value - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn track_geometry_excludes_the_end_margins() {
        let widget = slider(0.0);
        let geometry = widget.track_geometry(bounds());
        assert!((geometry.track_extent() - 200.0).abs() < f32::EPSILON);
        assert!((geometry.usable_extent() - 184.0).abs() < f32::EPSILON);
    }

    #[test]
    fn idle_offset_follows_the_value() {
        let widget = slider(100.0);
        let geometry = widget.track_geometry(bounds());
        assert!((widget.idle_offset(geometry) - geometry.half_span()).abs() < f32::EPSILON);

        let centered = slider(0.0);
        assert!(centered.idle_offset(geometry).abs() < f32::EPSILON);
    }

    #[test]
    fn idle_offset_is_pinned_for_degenerate_geometry() {
        let widget = slider(100.0);
        let tiny = Rectangle {
            width: 40.0,
            ..bounds()
        };
        let geometry = widget.track_geometry(tiny);
        assert!(geometry.is_degenerate());
        assert!(widget.idle_offset(geometry).abs() < f32::EPSILON);
    }

    #[test]
    fn thumb_bounds_center_on_the_offset() {
        let widget = slider(0.0);
        let thumb = widget.thumb_bounds(bounds(), 0.0);
        assert!((thumb.center_x() - 116.0).abs() < f32::EPSILON);
        assert!((thumb.center_y() - 16.0).abs() < f32::EPSILON);
        assert!((thumb.width - DEFAULT_THUMB_SIZE).abs() < f32::EPSILON);
    }

    #[test]
    fn vertical_slider_swaps_the_axes() {
        let range = SliderRange::new(-100.0, 100.0).unwrap();
        let widget: CenterOriginSlider<'static, (), iced::Theme> =
            CenterOriginSlider::new(range, 0.0, |_| ()).vertical();

        let tall = Rectangle {
            x: 0.0,
            y: 0.0,
            width: 32.0,
            height: 232.0,
        };
        let geometry = widget.track_geometry(tall);
        assert!((geometry.track_extent() - 200.0).abs() < f32::EPSILON);

        // Positive screen offset moves the thumb down the track.
        let thumb = widget.thumb_bounds(tall, 50.0);
        assert!((thumb.center_y() - 166.0).abs() < f32::EPSILON);
        assert!((thumb.center_x() - 16.0).abs() < f32::EPSILON);
    }

    #[test]
    fn vertical_idle_offset_moves_up_for_high_values() {
        let range = SliderRange::new(-100.0, 100.0).unwrap();
        let widget: CenterOriginSlider<'static, (), iced::Theme> =
            CenterOriginSlider::new(range, 100.0, |_| ()).vertical();
        let tall = Rectangle {
            x: 0.0,
            y: 0.0,
            width: 32.0,
            height: 232.0,
        };
        let geometry = widget.track_geometry(tall);
        assert!((widget.idle_offset(geometry) + geometry.half_span()).abs() < f32::EPSILON);
    }
}
