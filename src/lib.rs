// SPDX-License-Identifier: MPL-2.0
//! `center_origin_slider` is a slider widget for the Iced GUI toolkit
//! whose tracking bar grows outward from the center of its range
//! rather than filling from one edge.
//!
//! The crate splits into a pure core and a thin rendering adapter:
//! value↔position mapping and drag interpretation live in [`domain`]
//! and [`state`] with no renderer in sight, while [`widget`] adapts
//! them to Iced's advanced widget API. Horizontal and vertical sliders
//! share the whole implementation; orientation is a configuration
//! value ([`Axis`]).
//!
//! ```
//! use center_origin_slider::{center_origin_slider, CenterOriginSlider, Increment, SliderRange};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     ExposureChanged(f32),
//! }
//!
//! let range = SliderRange::new(-2.0, 2.0).unwrap();
//! let slider: CenterOriginSlider<'_, Message> =
//!     center_origin_slider(range, 0.0, Message::ExposureChanged)
//!         .increment(Increment::stepped(0.5).unwrap());
//! ```

#![doc(html_root_url = "https://docs.rs/center_origin_slider/0.1.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod state;
pub mod widget;

pub use config::SliderConfig;
pub use domain::axis::Axis;
pub use domain::range::{Increment, SliderRange};
pub use error::{Error, Result};
pub use widget::slider::{center_origin_slider, CenterOriginSlider};
