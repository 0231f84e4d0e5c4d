// SPDX-License-Identifier: MPL-2.0
//! Drag session state management.
//!
//! Tracks one pointer-down-to-pointer-up interaction with the thumb
//! and carries the final offset over to the next one. Each gesture
//! reports translation relative to its own start point, not to the
//! track; without the carried accumulation a second drag would snap
//! the thumb back to the track center.

use crate::domain::axis::Axis;
use crate::domain::geometry::TrackGeometry;
use crate::domain::mapper;
use crate::domain::range::{Increment, SliderRange};

/// Interaction phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Dragging,
}

/// Tracks an in-progress thumb drag and the offset carried across
/// completed gestures.
///
/// One session lives per widget instance. The caller owns the slider
/// value; the session only computes proposed values and the pixel
/// offset used to render the thumb. Only the drag path writes the
/// accumulated offset; external value changes go through
/// [`sync_external`](Self::sync_external), which repositions the thumb
/// without touching the accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSession {
    phase: Phase,
    /// Offset committed by previous gestures, in screen pixels
    /// relative to the track center.
    accumulated_offset: f32,
    /// Clamped offset of the most recent recomputation.
    render_offset: f32,
    /// Whether the current gesture produced at least one move.
    moved: bool,
}

impl DragSession {
    /// Creates an idle session with no carried offset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    /// Screen-axis offset of the thumb center relative to the track
    /// center, as last computed by either the drag path or
    /// [`sync_external`](Self::sync_external).
    #[must_use]
    pub fn render_offset(&self) -> f32 {
        self.render_offset
    }

    /// Offset carried over from completed gestures.
    #[must_use]
    pub fn accumulated_offset(&self) -> f32 {
        self.accumulated_offset
    }

    /// Starts a drag session.
    ///
    /// Starting while already dragging restarts accumulation from the
    /// current accumulated offset (last writer wins); it must not
    /// occur under single-pointer event delivery, but never panics.
    pub fn begin(&mut self) {
        self.phase = Phase::Dragging;
        self.moved = false;
        log::debug!(
            "drag session started (accumulated {:.1}px)",
            self.accumulated_offset
        );
    }

    /// Feeds one drag-move event.
    ///
    /// `translation` is pixels moved along the active axis since the
    /// session began. The offset is clamped in pixel space before any
    /// value conversion, so the thumb visually stops at the track edge
    /// even when the pointer keeps moving past it.
    ///
    /// Returns the quantized value to publish, clamped into the range,
    /// or `None` when the session is idle or the geometry leaves no
    /// drag range (thumb pinned to the center).
    pub fn drag_to(
        &mut self,
        translation: f32,
        range: SliderRange,
        increment: Increment,
        geometry: TrackGeometry,
        axis: Axis,
    ) -> Option<f32> {
        if self.phase != Phase::Dragging {
            return None;
        }
        if geometry.is_degenerate() {
            self.render_offset = 0.0;
            return None;
        }

        let raw_offset = translation + self.accumulated_offset;
        let clamped = raw_offset.clamp(-geometry.half_span(), geometry.half_span());
        self.render_offset = clamped;
        self.moved = true;

        let progress = mapper::progress_from_offset(clamped, geometry);
        let raw_value = mapper::value_from_progress(progress, range, axis);
        Some(range.clamp(mapper::quantize(raw_value, increment)))
    }

    /// Ends the session, folding the final clamped offset into the
    /// accumulation.
    ///
    /// The offset is committed directly rather than re-derived from
    /// the published value, so repeated quantization cannot drift the
    /// thumb across gestures. A gesture that never moved leaves the
    /// accumulation untouched.
    pub fn finish(&mut self) {
        if self.phase == Phase::Dragging && self.moved {
            self.accumulated_offset = self.render_offset;
        }
        self.phase = Phase::Idle;
        log::debug!(
            "drag session ended (accumulated {:.1}px)",
            self.accumulated_offset
        );
    }

    /// Mirrors an externally-set value into the rendered offset.
    ///
    /// External value changes reposition the thumb but must not mutate
    /// the accumulated offset: the next drag resumes from where the
    /// previous one ended. Ignored while a drag is in progress, since
    /// the live drag owns the render offset.
    pub fn sync_external(&mut self, screen_offset: f32) {
        if self.phase == Phase::Dragging {
            return;
        }
        self.render_offset = screen_offset;
    }
}
