// SPDX-License-Identifier: MPL-2.0
//! Custom Iced widgets.
//!
//! - [`slider`] - The center-origin slider widget
//! - [`style`] - Styling for the slider (colors, thumb shadow)

pub mod slider;
pub mod style;

pub use slider::{center_origin_slider, CenterOriginSlider};
