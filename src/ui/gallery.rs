use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, center, column, container, image, mouse_area, scrollable, stack, text};
use iced::{mouse, Border, Color, ContentFit, Element, Length, Theme};
use iced_aw::Wrap;

use crate::media::cache::{ThumbnailCache, ThumbnailState};
use crate::state::data::ImageItem;
use crate::state::presentation::Presentation;
use crate::Message;

const CARD_WIDTH: f32 = 240.0;
const CARD_HEIGHT: f32 = 180.0;

/// The to-top button appears once the grid is scrolled further than this
pub const SCROLL_TOP_THRESHOLD: f32 = 300.0;

/// Id of the grid's scrollable, for programmatic scrolling
pub fn scroll_id() -> scrollable::Id {
    scrollable::Id::new("gallery-grid")
}

/// Filter chips, the card grid and the scroll-to-top button
pub fn view<'a>(
    presentation: &'a Presentation,
    thumbnails: &'a ThumbnailCache,
    scroll_offset: f32,
    year: i32,
) -> Element<'a, Message> {
    let header = column![text("Gallery").size(32), chips(presentation)]
        .spacing(16)
        .padding(20);

    let grid = scrollable(
        column![grid(presentation, thumbnails), super::footer(year)]
            .spacing(20)
            .padding(20)
            .width(Length::Fill),
    )
    .id(scroll_id())
    .on_scroll(Message::GalleryScrolled)
    .height(Length::Fill);

    let page = column![header, grid];

    if scroll_offset > SCROLL_TOP_THRESHOLD {
        let to_top = container(
            button(text("↑").size(20))
                .on_press(Message::ScrollToTop)
                .padding([8, 14]),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(24);

        stack![page, to_top].into()
    } else {
        page.into()
    }
}

/// One button per tag. The active tag is highlighted.
fn chips(presentation: &Presentation) -> Element<'_, Message> {
    let active = presentation.active_tag();
    let chips: Vec<Element<Message>> = presentation
        .tags()
        .iter()
        .map(|tag| {
            let chip = button(text(tag).size(14))
                .padding([6, 14])
                .on_press(Message::TagSelected(tag.to_string()));
            if tag == active {
                chip.style(button::primary).into()
            } else {
                chip.style(button::secondary).into()
            }
        })
        .collect();

    Wrap::with_elements(chips)
        .spacing(8.0)
        .line_spacing(8.0)
        .into()
}

fn grid<'a>(
    presentation: &'a Presentation,
    thumbnails: &'a ThumbnailCache,
) -> Element<'a, Message> {
    let view = presentation.view();
    if view.is_empty() {
        return text("No images match this filter.").size(16).into();
    }

    let catalog = presentation.catalog();
    let cards: Vec<Element<Message>> = view
        .catalog_indices()
        .iter()
        .enumerate()
        .filter_map(|(position, &index)| {
            let item = catalog.get(index)?;
            let focused = presentation.focused() == Some(position);
            Some(card(position, item, thumbnails.get(index), focused))
        })
        .collect();

    Wrap::with_elements(cards)
        .spacing(16.0)
        .line_spacing(16.0)
        .into()
}

/// A card: clickable picture (or placeholder) with a caption
fn card<'a>(
    position: usize,
    item: &'a ImageItem,
    thumbnail: Option<&ThumbnailState>,
    focused: bool,
) -> Element<'a, Message> {
    let picture: Element<Message> = match thumbnail {
        Some(ThumbnailState::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        Some(ThumbnailState::Failed) => center(text(&item.alt).size(13)).into(),
        Some(ThumbnailState::Loading) | None => container(text(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(skeleton)
            .into(),
    };

    let picture = mouse_area(
        container(picture)
            .width(CARD_WIDTH)
            .height(CARD_HEIGHT)
            .clip(true),
    )
    .on_press(Message::CardPressed(position))
    .interaction(mouse::Interaction::Pointer);

    container(
        column![picture, text(&item.title).size(14)]
            .spacing(6)
            .width(CARD_WIDTH),
    )
    .padding(4)
    .style(move |theme: &Theme| card_style(theme, focused))
    .into()
}

fn skeleton(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: 6.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Focused cards get a ring in the primary color
fn card_style(theme: &Theme, focused: bool) -> container::Style {
    let color = if focused {
        theme.palette().primary
    } else {
        Color::TRANSPARENT
    };
    container::Style {
        border: Border {
            color,
            width: 2.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}
