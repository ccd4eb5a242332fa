//! User interface module
//!
//! - `gallery.rs` - filter chips, the card grid and the scroll-to-top button
//! - `lightbox.rs` - modal overlay for one enlarged image
//! - `lookbook.rs` - the featured-image slideshow

pub mod gallery;
pub mod lightbox;
pub mod lookbook;

use iced::widget::{container, text};
use iced::{Color, Element};

use crate::Message;

/// Inline error shown when the catalog cannot be loaded
pub fn error_message<'a>(message: &'a str) -> Element<'a, Message> {
    container(
        text(message)
            .size(16)
            .color(Color::from_rgb8(0xDC, 0x14, 0x3C)),
    )
    .padding(40)
    .into()
}

/// Page footer
pub fn footer<'a>(year: i32) -> Element<'a, Message> {
    container(text(format!("© {year}")).size(12))
        .padding(20)
        .center_x(iced::Length::Fill)
        .into()
}
