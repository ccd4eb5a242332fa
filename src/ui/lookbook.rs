use iced::widget::{button, center, column, container, image, row, text};
use iced::{Alignment, Color, ContentFit, Element, Length};
use std::path::Path;

use crate::state::lookbook::{Direction, Slideshow};
use crate::state::presentation::{LookbookState, Presentation};
use crate::Message;

pub fn view<'a>(
    presentation: &'a Presentation,
    catalog_path: &Path,
    year: i32,
) -> Element<'a, Message> {
    let body = match presentation.lookbook() {
        Some(LookbookState::Running(slideshow)) => slides(presentation, slideshow),
        Some(LookbookState::Empty) | None => placeholder(catalog_path),
    };

    column![
        container(text("Lookbook").size(32)).padding(20),
        container(body).width(Length::Fill).height(Length::Fill),
        super::footer(year),
    ]
    .into()
}

fn placeholder<'a>(catalog_path: &Path) -> Element<'a, Message> {
    center(
        text(format!(
            "No featured items yet. Mark some with \"featured\": true in {}.",
            catalog_path.display()
        ))
        .size(16)
        .color(Color::from_rgb8(0xE5, 0xE7, 0xEB)),
    )
    .into()
}

/// The active slide with its caption and the prev / play-pause / next controls
fn slides<'a>(presentation: &'a Presentation, slideshow: &Slideshow) -> Element<'a, Message> {
    let catalog = presentation.catalog();
    let Some(item) = catalog.get(slideshow.current_slide()) else {
        return text("").into();
    };

    let picture: Element<Message> = match catalog.resolve(item) {
        Some(path) => image(image::Handle::from_path(path))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => center(text(&item.alt).size(18)).into(),
    };

    let controls = row![
        button(text("‹").size(22))
            .on_press(Message::SlideStep(Direction::Previous)),
        button(text(slideshow.play_label()).size(18))
            .on_press(Message::TogglePlay)
            .style(button::secondary),
        button(text("›").size(22))
            .on_press(Message::SlideStep(Direction::Next)),
        text(format!("{} / {}", slideshow.current_index() + 1, slideshow.len()))
            .size(12),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    column![picture, text(&item.title).size(18), controls]
    .spacing(12)
    .padding(20)
    .align_x(Alignment::Center)
    .into()
}
