use iced::widget::{
    button, center, column, container, image, mouse_area, opaque, row, stack, text,
};
use iced::{Alignment, Color, ContentFit, Element, Length, Theme};

use crate::state::presentation::Presentation;
use crate::Message;

/// Draw the lightbox over `base` while it suspends page scrolling.
///
/// The backdrop swallows every mouse event so the grid underneath
/// neither scrolls nor reacts to clicks. Pressing the backdrop closes;
/// the image and the controls are opaque, so pressing them does not.
pub fn overlay<'a>(
    base: Element<'a, Message>,
    presentation: &'a Presentation,
) -> Element<'a, Message> {
    let lightbox = presentation.lightbox();
    if !lightbox.suspends_scroll() {
        return base;
    }
    let (Some(item), Some(index)) = (presentation.lightbox_item(), lightbox.index()) else {
        return base;
    };

    let picture: Element<Message> = match presentation.catalog().resolve(item) {
        Some(path) => image(image::Handle::from_path(path))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => center(text(&item.alt).size(18)).into(),
    };

    let controls = row![
        button(text("‹").size(24))
            .on_press(Message::LightboxStep(-1)),
        column![
            text(&item.title).size(18),
            text(format!("{} / {}", index + 1, presentation.view().len()))
                .size(12),
        ]
        .spacing(4)
        .align_x(Alignment::Center)
        .width(Length::Fill),
        button(text("›").size(24))
            .on_press(Message::LightboxStep(1)),
        button(text("✕").size(18))
            .on_press(Message::LightboxClose)
            .style(button::secondary),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let content = container(column![picture, controls].spacing(16))
        .max_width(1200)
        .max_height(900)
        .padding(16);

    let backdrop = center(opaque(content))
        .padding(40)
        .style(|_theme: &Theme| container::Style {
            background: Some(
                Color {
                    a: 0.9,
                    ..Color::BLACK
                }
                .into(),
            ),
            text_color: Some(Color::WHITE),
            ..container::Style::default()
        });

    let modal = opaque(mouse_area(backdrop).on_press(Message::LightboxClose));
    stack![base, modal].into()
}
