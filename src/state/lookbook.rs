//! Autoplaying slideshow of featured images
//!
//! The slideshow never owns a running timer itself. It hands out
//! `TimerCommand`s and the UI layer turns them into scheduled tasks.
//! Every schedule carries a fresh generation: a tick from an older
//! generation belongs to a cancelled task and is dropped.

use std::time::Duration;

use super::data::Catalog;
use super::lightbox::wrap_index;

/// Time between automatic advances
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(4000);

/// What the UI layer must do with the slideshow timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Cancel any pending tick, then fire `Tick(generation)` after `after`
    Schedule { generation: u64, after: Duration },
    /// Cancel any pending tick
    Cancel,
}

/// At most one live timer: scheduling always invalidates the previous one
#[derive(Debug, Clone, PartialEq)]
pub struct Timer {
    interval: Duration,
    generation: u64,
    armed: bool,
}

impl Timer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            generation: 0,
            armed: false,
        }
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Cancel the current timer and start a new one, full interval from now
    pub fn schedule(&mut self) -> TimerCommand {
        self.generation += 1;
        self.armed = true;
        TimerCommand::Schedule {
            generation: self.generation,
            after: self.interval,
        }
    }

    pub fn cancel(&mut self) -> TimerCommand {
        self.generation += 1;
        self.armed = false;
        TimerCommand::Cancel
    }

    /// Whether a tick came from the live timer
    pub fn is_current(&self, generation: u64) -> bool {
        self.armed && generation == self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn step(self) -> i64 {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slideshow {
    /// Catalog indices of the slides, in catalog order
    slides: Vec<usize>,
    current: usize,
    playing: bool,
    timer: Timer,
}

impl Slideshow {
    /// Build a slideshow from the featured items of the catalog.
    ///
    /// Returns None when nothing qualifies; the caller shows a placeholder
    /// and sets up nothing else.
    pub fn from_catalog(
        catalog: &Catalog,
        reduced_motion: bool,
        interval: Duration,
    ) -> Option<Self> {
        let slides: Vec<usize> = catalog
            .items()
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_lookbook_candidate())
            .map(|(i, _)| i)
            .collect();

        if slides.is_empty() {
            return None;
        }

        Some(Self {
            slides,
            current: 0,
            playing: !reduced_motion,
            timer: Timer::new(interval),
        })
    }

    /// Arm the timer for the first time, if autoplay is on
    pub fn start(&mut self) -> Option<TimerCommand> {
        self.playing.then(|| self.timer.schedule())
    }

    /// Jump to slide `n`, wrapping. Does not touch the timer.
    pub fn show(&mut self, n: i64) {
        if let Some(next) = wrap_index(0, n, self.slides.len()) {
            self.current = next;
        }
    }

    pub fn prev(&mut self) {
        self.show(self.current as i64 - 1);
    }

    pub fn next(&mut self) {
        self.show(self.current as i64 + 1);
    }

    /// User navigation: move and restart the timer from zero
    pub fn navigate(&mut self, direction: Direction) -> TimerCommand {
        match direction {
            Direction::Previous => self.prev(),
            Direction::Next => self.next(),
        }
        self.restart_timer()
    }

    /// Flip play/pause and restart or stop the timer immediately
    pub fn toggle_play(&mut self) -> TimerCommand {
        self.playing = !self.playing;
        self.restart_timer()
    }

    /// A timer tick. Stale ticks are ignored and return None.
    pub fn tick(&mut self, generation: u64) -> Option<TimerCommand> {
        if !self.playing || !self.timer.is_current(generation) {
            return None;
        }
        self.next();
        Some(self.timer.schedule())
    }

    /// Stop everything; used when the window goes away
    pub fn teardown(&mut self) -> TimerCommand {
        self.playing = false;
        self.timer.cancel()
    }

    fn restart_timer(&mut self) -> TimerCommand {
        if self.playing {
            self.timer.schedule()
        } else {
            self.timer.cancel()
        }
    }

    #[cfg(test)]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Label of the play/pause button for the current state
    pub fn play_label(&self) -> &'static str {
        if self.playing {
            "❚❚"
        } else {
            "▶"
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Catalog index of the visible slide
    pub fn current_slide(&self) -> usize {
        self.slides[self.current]
    }

    #[cfg(test)]
    pub fn slides(&self) -> &[usize] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[cfg(test)]
    pub fn timer(&self) -> &Timer {
        &self.timer
    }
}
