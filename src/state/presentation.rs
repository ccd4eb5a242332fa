//! The presentation controller
//!
//! `Presentation` owns all viewer state for one loaded catalog: active tag,
//! filtered view, lightbox, keyboard focus and the lookbook. The UI layer
//! translates window events into calls on it and turns the returned
//! `TimerCommand`s into scheduled tasks. Every handler runs to completion
//! synchronously.

use std::time::Duration;
use tracing::debug;

use super::data::{Catalog, ImageItem, ALL_TAG};
use super::filter::{apply_filter, collect_tags, FilteredView, TagSet};
use super::gesture::Swipe;
use super::lightbox::{wrap_index, Lightbox};
use super::lookbook::{Direction, Slideshow, TimerCommand};

/// Which page the window shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Gallery,
    Lookbook,
}

/// Keys the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Tab,
    ShiftTab,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookbookState {
    /// Nothing is featured: show a placeholder, no timer, no input handling
    Empty,
    Running(Slideshow),
}

#[derive(Debug, Clone)]
pub struct Presentation {
    mode: Mode,
    catalog: Catalog,
    tags: TagSet,
    view: FilteredView,
    lightbox: Lightbox,
    /// Keyboard focus, as a position in the filtered view
    focused: Option<usize>,
    swipe: Swipe,
    /// Only set in lookbook mode
    lookbook: Option<LookbookState>,
}

impl Presentation {
    /// Set up the controller for a freshly loaded catalog.
    ///
    /// Returns the first timer command when the lookbook autoplays.
    pub fn new(
        mode: Mode,
        catalog: Catalog,
        reduced_motion: bool,
        interval: Duration,
    ) -> (Self, Option<TimerCommand>) {
        let tags = collect_tags(&catalog);
        let view = apply_filter(&catalog, ALL_TAG);

        let mut timer = None;
        let lookbook = match mode {
            Mode::Gallery => None,
            Mode::Lookbook => {
                let slideshow = Slideshow::from_catalog(&catalog, reduced_motion, interval);
                Some(match slideshow {
                    Some(mut slideshow) => {
                        timer = slideshow.start();
                        LookbookState::Running(slideshow)
                    }
                    None => LookbookState::Empty,
                })
            }
        };

        let presentation = Self {
            mode,
            catalog,
            tags,
            view,
            lightbox: Lightbox::default(),
            focused: None,
            swipe: Swipe::default(),
            lookbook,
        };
        (presentation, timer)
    }

    /// Release the slideshow timer. The controller is inert afterwards.
    pub fn teardown(&mut self) -> Option<TimerCommand> {
        self.lightbox.close();
        match self.lookbook.as_mut() {
            Some(LookbookState::Running(slideshow)) => Some(slideshow.teardown()),
            _ => None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    pub fn active_tag(&self) -> &str {
        self.view.tag()
    }

    pub fn lightbox(&self) -> Lightbox {
        self.lightbox
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn lookbook(&self) -> Option<&LookbookState> {
        self.lookbook.as_ref()
    }

    // ========== Filters ==========

    /// Apply a tag filter.
    ///
    /// An open lightbox is closed, since its index refers to the old view.
    pub fn select_tag(&mut self, tag: &str) {
        debug!("filter: {tag}");
        self.view = apply_filter(&self.catalog, tag);
        self.focused = None;
        self.lightbox.close();
    }

    // ========== Lightbox ==========

    pub fn open_lightbox(&mut self, index: i64) -> bool {
        self.lightbox.open(index, self.view.len())
    }

    pub fn step_lightbox(&mut self, direction: i64) {
        self.lightbox.step(direction, self.view.len());
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox.close();
    }

    /// The item shown in the lightbox, if it is open
    pub fn lightbox_item(&self) -> Option<&ImageItem> {
        self.lightbox
            .index()
            .and_then(|i| self.view.item(&self.catalog, i))
    }

    // ========== Grid focus ==========

    /// Move the focus ring by `step` cards, wrapping
    pub fn move_focus(&mut self, step: i64) {
        let len = self.view.len();
        self.focused = match self.focused {
            Some(current) => wrap_index(current, step, len),
            None if step < 0 => len.checked_sub(1),
            None => (len > 0).then_some(0),
        };
    }

    // ========== Lookbook ==========

    pub fn navigate_slides(&mut self, direction: Direction) -> Option<TimerCommand> {
        self.slideshow_mut().map(|s| s.navigate(direction))
    }

    pub fn toggle_play(&mut self) -> Option<TimerCommand> {
        self.slideshow_mut().map(Slideshow::toggle_play)
    }

    pub fn tick(&mut self, generation: u64) -> Option<TimerCommand> {
        self.slideshow_mut().and_then(|s| s.tick(generation))
    }

    fn slideshow_mut(&mut self) -> Option<&mut Slideshow> {
        match self.lookbook.as_mut() {
            Some(LookbookState::Running(slideshow)) => Some(slideshow),
            _ => None,
        }
    }

    // ========== Input dispatch ==========

    /// Route a key press to whatever is active
    pub fn key(&mut self, key: Key) -> Option<TimerCommand> {
        match self.mode {
            Mode::Lookbook => match key {
                Key::ArrowLeft => self.navigate_slides(Direction::Previous),
                Key::ArrowRight => self.navigate_slides(Direction::Next),
                Key::Space => self.toggle_play(),
                _ => None,
            },
            Mode::Gallery if self.lightbox.is_open() => {
                match key {
                    Key::Escape => self.close_lightbox(),
                    Key::ArrowLeft => self.step_lightbox(-1),
                    Key::ArrowRight => self.step_lightbox(1),
                    _ => {}
                }
                None
            }
            Mode::Gallery => {
                match key {
                    Key::Tab => self.move_focus(1),
                    Key::ShiftTab => self.move_focus(-1),
                    Key::Enter => {
                        if let Some(focused) = self.focused {
                            self.open_lightbox(focused as i64);
                        }
                    }
                    _ => {}
                }
                None
            }
        }
    }

    pub fn touch_start(&mut self, x: f32) {
        self.swipe.begin(x);
    }

    /// Finish a touch. Swipes step the lightbox or the slideshow.
    pub fn touch_end(&mut self, x: f32) -> Option<TimerCommand> {
        let direction = self.swipe.end(x)?;
        match self.mode {
            Mode::Lookbook => self.navigate_slides(direction),
            Mode::Gallery => {
                if self.lightbox.is_open() {
                    self.step_lightbox(direction.step());
                }
                None
            }
        }
    }
}
