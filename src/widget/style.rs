// SPDX-License-Identifier: MPL-2.0
//! Slider style definitions.
//!
//! The style is a flat set of colors plus the thumb shadow, resolved
//! per theme and interaction status.

use iced::{Color, Shadow, Theme, Vector};

/// Interaction status of the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The slider is idle.
    Active,
    /// The cursor hovers the thumb.
    Hovered,
    /// The thumb is being dragged.
    Dragged,
}

/// Appearance of the slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Color of the full-length guide bar.
    pub guide_bar: Color,
    /// Color of the tracking bar growing out of the center.
    pub tracking_bar: Color,
    /// Fill color of the thumb.
    pub thumb: Color,
    /// Border color of the thumb.
    pub thumb_border: Color,
    /// Shadow under the thumb.
    pub shadow: Shadow,
}

/// The theme catalog of the slider.
pub trait Catalog {
    /// The item class of the catalog.
    type Class<'a>;

    /// The default class produced by the catalog.
    fn default<'a>() -> Self::Class<'a>;

    /// The [`Style`] of a class with the given status.
    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style;
}

/// A styling function for the slider.
pub type StyleFn<'a, Theme> = Box<dyn Fn(&Theme, Status) -> Style + 'a>;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Theme>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(default)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

/// Default style, derived from the theme's extended palette.
pub fn default(theme: &Theme, status: Status) -> Style {
    let palette = theme.extended_palette();

    let tracking_bar = match status {
        Status::Active => palette.primary.base.color,
        Status::Hovered | Status::Dragged => palette.primary.strong.color,
    };

    Style {
        guide_bar: palette.background.strong.color,
        tracking_bar,
        thumb: palette.background.base.color,
        thumb_border: palette.background.strong.color,
        shadow: Shadow::default(),
    }
}

/// High-contrast white style for sliders drawn over imagery or other
/// dark backdrops.
pub fn overlay(_theme: &Theme, status: Status) -> Style {
    let guide_bar = Color {
        a: 0.15,
        ..Color::WHITE
    };

    let shadow = match status {
        Status::Active => Shadow::default(),
        Status::Hovered | Status::Dragged => Shadow {
            color: Color {
                a: 0.4,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 1.0),
            blur_radius: 4.0,
        },
    };

    Style {
        guide_bar,
        tracking_bar: Color::WHITE,
        thumb: Color::WHITE,
        thumb_border: Color::TRANSPARENT,
        shadow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_reacts_to_status() {
        let theme = Theme::Dark;
        let active = default(&theme, Status::Active);
        let dragged = default(&theme, Status::Dragged);
        assert_ne!(active.tracking_bar, dragged.tracking_bar);
    }

    #[test]
    fn default_style_separates_guide_and_tracking_bars() {
        let theme = Theme::Light;
        let style = default(&theme, Status::Active);
        assert_ne!(style.guide_bar, style.tracking_bar);
    }

    #[test]
    fn overlay_style_uses_a_translucent_guide_bar() {
        let theme = Theme::Dark;
        let style = overlay(&theme, Status::Active);
        assert!(style.guide_bar.a < 1.0);
        assert_eq!(style.tracking_bar, Color::WHITE);
    }

    #[test]
    fn overlay_style_raises_a_shadow_while_dragging() {
        let theme = Theme::Dark;
        assert_eq!(overlay(&theme, Status::Active).shadow, Shadow::default());
        assert!(overlay(&theme, Status::Dragged).shadow.blur_radius > 0.0);
    }

    #[test]
    fn catalog_default_class_is_callable() {
        let theme = Theme::Dark;
        let class = <Theme as Catalog>::default();
        let style = Catalog::style(&theme, &class, Status::Active);
        assert_eq!(style, default(&theme, Status::Active));
    }
}
