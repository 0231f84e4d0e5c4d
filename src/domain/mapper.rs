// SPDX-License-Identifier: MPL-2.0
//! Pure value↔position mapping.
//!
//! These functions carry no widget state. The forward direction maps a
//! value to a center-relative offset used to place the thumb and size
//! the tracking fill; the inverse direction maps a clamped drag offset
//! back to a value, measuring progress from the track's leading edge
//! (left or top).

use super::axis::Axis;
use super::geometry::TrackGeometry;
use super::range::{Increment, SliderRange};

/// Position of `value` relative to the range center, in `[-1, 1]`.
///
/// `-1` at the lower bound, `0` at the center, `1` at the upper bound.
/// Exact at both ends because the center is the midpoint of the range.
#[must_use]
pub fn normalized_position(value: f32, range: SliderRange) -> f32 {
    (value - range.center()) / (range.upper() - range.center())
}

/// Center-relative pixel offset of `value`, positive toward the upper
/// bound.
///
/// The tracking fill is `offset.abs()` long, anchored at the track
/// center and growing toward whichever side the value sits on. The
/// caller applies [`Axis::direction_sign`] to obtain a screen-axis
/// offset.
#[must_use]
pub fn offset_from_value(value: f32, range: SliderRange, half_span: f32) -> f32 {
    half_span * normalized_position(value, range)
}

/// Leading-edge progress of a clamped, center-relative screen offset,
/// in `[0, 1]`.
///
/// Degenerate geometry maps everything to the center (`0.5`) instead
/// of dividing by zero.
#[must_use]
pub fn progress_from_offset(offset: f32, geometry: TrackGeometry) -> f32 {
    if geometry.is_degenerate() {
        return 0.5;
    }
    ((offset + geometry.half_span()) / geometry.usable_extent()).clamp(0.0, 1.0)
}

/// Inverse affine map from leading-edge progress back to a value.
///
/// The vertical axis runs top-to-bottom on screen while values grow
/// bottom-to-top, so it uses the flipped form.
#[must_use]
pub fn value_from_progress(progress: f32, range: SliderRange, axis: Axis) -> f32 {
    match axis {
        Axis::Horizontal => range.lower() + progress * range.span(),
        Axis::Vertical => range.upper() - progress * range.span(),
    }
}

/// Snaps `raw` to the nearest multiple of the increment's step.
///
/// Identity for continuous increments. Multiples are measured from
/// zero, not from the lower bound; ties round away from zero
/// (`f32::round` semantics).
#[must_use]
pub fn quantize(raw: f32, increment: Increment) -> f32 {
    match increment.step() {
        None => raw,
        Some(step) => (raw / step).round() * step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symmetric_range() -> SliderRange {
        SliderRange::new(-100.0, 100.0).unwrap()
    }

    #[test]
    fn normalized_position_hits_the_landmarks() {
        let range = symmetric_range();
        assert!((normalized_position(range.lower(), range) + 1.0).abs() < f32::EPSILON);
        assert!(normalized_position(range.center(), range).abs() < f32::EPSILON);
        assert!((normalized_position(range.upper(), range) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn normalized_position_is_exact_for_off_zero_centers() {
        // Center origin at 15, not zero.
        let range = SliderRange::new(10.0, 20.0).unwrap();
        assert!(normalized_position(15.0, range).abs() < f32::EPSILON);
        assert!((normalized_position(10.0, range) + 1.0).abs() < f32::EPSILON);
        assert!((normalized_position(20.0, range) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn offset_scales_with_the_half_span() {
        let range = symmetric_range();
        assert!(offset_from_value(0.0, range, 100.0).abs() < f32::EPSILON);
        assert!((offset_from_value(100.0, range, 100.0) - 100.0).abs() < f32::EPSILON);
        assert!((offset_from_value(-50.0, range, 100.0) + 50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn progress_measures_from_the_leading_edge() {
        let geometry = TrackGeometry::new(216.0, 16.0);
        assert!(progress_from_offset(-100.0, geometry).abs() < f32::EPSILON);
        assert!((progress_from_offset(0.0, geometry) - 0.5).abs() < f32::EPSILON);
        assert!((progress_from_offset(100.0, geometry) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn degenerate_geometry_maps_to_the_center() {
        let geometry = TrackGeometry::new(10.0, 16.0);
        assert!((progress_from_offset(40.0, geometry) - 0.5).abs() < f32::EPSILON);
        assert!((progress_from_offset(-40.0, geometry) - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn vertical_axis_flips_the_inverse_map() {
        let range = symmetric_range();
        // Top of a vertical track (progress 0) is the upper bound.
        assert!((value_from_progress(0.0, range, Axis::Vertical) - 100.0).abs() < f32::EPSILON);
        assert!((value_from_progress(1.0, range, Axis::Vertical) + 100.0).abs() < f32::EPSILON);
        // Left of a horizontal track is the lower bound.
        assert!((value_from_progress(0.0, range, Axis::Horizontal) + 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn round_trip_is_exact_for_continuous_increments() {
        let range = symmetric_range();
        let geometry = TrackGeometry::new(216.0, 16.0);
        for value in [-100.0f32, -37.5, 0.0, 12.25, 100.0] {
            let offset = offset_from_value(value, range, geometry.half_span());
            let progress = progress_from_offset(offset, geometry);
            let back = value_from_progress(progress, range, Axis::Horizontal);
            assert!(
                (back - value).abs() < 1e-4,
                "round trip drifted: {} -> {}",
                value,
                back
            );
        }
    }

    #[test]
    fn quantize_is_identity_when_continuous() {
        assert!((quantize(23.7, Increment::CONTINUOUS) - 23.7).abs() < f32::EPSILON);
    }

    #[test]
    fn quantize_snaps_to_the_nearest_multiple() {
        let tens = Increment::stepped(10.0).unwrap();
        assert!((quantize(23.0, tens) - 20.0).abs() < f32::EPSILON);
        assert!((quantize(27.0, tens) - 30.0).abs() < f32::EPSILON);
    }

    #[test]
    fn quantize_rounds_ties_away_from_zero() {
        let tens = Increment::stepped(10.0).unwrap();
        assert!((quantize(25.0, tens) - 30.0).abs() < f32::EPSILON);
        assert!((quantize(-25.0, tens) + 30.0).abs() < f32::EPSILON);
    }

    #[test]
    fn quantize_measures_multiples_from_zero() {
        // Steps count from 0 even when the lower bound is not a multiple.
        let range = SliderRange::new(-45.0, 55.0).unwrap();
        let tens = Increment::stepped(10.0).unwrap();
        let snapped = quantize(range.lower(), tens);
        assert!((snapped + 50.0).abs() < f32::EPSILON);
    }
}
