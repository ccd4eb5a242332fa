//! Horizontal swipe detection for touch input

use super::lookbook::Direction;

/// Minimum horizontal travel, in logical pixels, for a touch to count as a swipe
pub const SWIPE_THRESHOLD: f32 = 40.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Swipe {
    start_x: Option<f32>,
}

impl Swipe {
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finish the gesture.
    ///
    /// Swiping right goes to the previous image, swiping left to the next.
    /// Short movements and lifts without a matching press are ignored.
    pub fn end(&mut self, x: f32) -> Option<Direction> {
        let dx = x - self.start_x.take()?;
        if dx.abs() <= SWIPE_THRESHOLD {
            return None;
        }
        Some(if dx > 0.0 {
            Direction::Previous
        } else {
            Direction::Next
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_right_is_previous() {
        let mut swipe = Swipe::default();
        swipe.begin(100.0);
        assert_eq!(swipe.end(160.0), Some(Direction::Previous));
    }

    #[test]
    fn test_swipe_left_is_next() {
        let mut swipe = Swipe::default();
        swipe.begin(300.0);
        assert_eq!(swipe.end(200.0), Some(Direction::Next));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut swipe = Swipe::default();
        swipe.begin(100.0);
        assert_eq!(swipe.end(140.0), None);
        swipe.begin(100.0);
        assert_eq!(swipe.end(140.5), Some(Direction::Previous));
    }

    #[test]
    fn test_lift_without_press_is_ignored() {
        let mut swipe = Swipe::default();
        assert_eq!(swipe.end(500.0), None);

        swipe.begin(0.0);
        swipe.end(100.0);
        assert_eq!(swipe.end(300.0), None);
    }
}
