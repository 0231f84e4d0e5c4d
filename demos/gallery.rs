// SPDX-License-Identifier: MPL-2.0
//! Gallery of center-origin sliders.
//!
//! Shows the horizontal continuous, horizontal stepped, and vertical
//! variants side by side, bound to plain `f32` application state.
//!
//! Run with `cargo run --example gallery`.

use center_origin_slider::widget::style;
use center_origin_slider::{center_origin_slider, Increment, SliderRange};
use iced::{
    alignment::Horizontal,
    widget::{column, container, row, text},
    Element, Length,
};

fn main() -> iced::Result {
    env_logger::init();

    iced::application(Gallery::default, Gallery::update, Gallery::view)
        .title("Center-origin sliders")
        .run()
}

struct Gallery {
    exposure_range: SliderRange,
    tint_range: SliderRange,
    balance_range: SliderRange,
    tint_increment: Increment,
    exposure: f32,
    tint: f32,
    balance: f32,
}

#[derive(Debug, Clone)]
enum Message {
    ExposureChanged(f32),
    TintChanged(f32),
    BalanceChanged(f32),
}

impl Default for Gallery {
    fn default() -> Self {
        Self {
            exposure_range: SliderRange::new(-2.0, 2.0).expect("valid exposure range"),
            tint_range: SliderRange::new(-100.0, 100.0).expect("valid tint range"),
            balance_range: SliderRange::new(-1.0, 1.0).expect("valid balance range"),
            tint_increment: Increment::stepped(10.0).expect("valid tint step"),
            exposure: 0.0,
            tint: 0.0,
            balance: 0.0,
        }
    }
}

impl Gallery {
    fn update(&mut self, message: Message) {
        match message {
            Message::ExposureChanged(value) => self.exposure = value,
            Message::TintChanged(value) => self.tint = value,
            Message::BalanceChanged(value) => self.balance = value,
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let exposure = column![
            text(format!("Exposure  {:+.2} EV", self.exposure)).size(14),
            center_origin_slider(self.exposure_range, self.exposure, Message::ExposureChanged),
        ]
        .spacing(8);

        let tint = column![
            text(format!("Tint  {:+.0}", self.tint)).size(14),
            center_origin_slider(self.tint_range, self.tint, Message::TintChanged)
                .increment(self.tint_increment)
                .thumb_size(20.0),
        ]
        .spacing(8);

        let balance = column![
            text(format!("Balance  {:+.2}", self.balance)).size(14),
            center_origin_slider(self.balance_range, self.balance, Message::BalanceChanged)
                .vertical()
                .length(200.0)
                .style(style::overlay),
        ]
        .spacing(8)
        .align_x(Horizontal::Center);

        let content = row![
            column![exposure, tint].spacing(24).width(Length::Fill),
            balance,
        ]
        .spacing(32);

        container(content)
            .padding(24)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
