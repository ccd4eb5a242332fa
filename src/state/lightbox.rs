//! Modal image viewer state
//!
//! The lightbox only knows an index into the current filtered view.
//! The list length is passed in on every call so the index can never
//! outlive the list it points into.

/// Wrap `index + step` into `[0, len)`.
/// Returns None for an empty list.
pub fn wrap_index(index: usize, step: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = len as i64;
    Some((index as i64 + step).rem_euclid(len) as usize)
}

/// Clamp an arbitrary index into `[0, len - 1]`.
/// Returns None for an empty list.
pub fn clamp_index(index: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(index.clamp(0, len as i64 - 1) as usize)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lightbox {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

impl Lightbox {
    /// Open at `index`, clamped into the list.
    /// Stays closed when the list is empty.
    pub fn open(&mut self, index: i64, len: usize) -> bool {
        match clamp_index(index, len) {
            Some(index) => {
                *self = Lightbox::Open { index };
                true
            }
            None => false,
        }
    }

    /// Move by `direction`, wrapping at both ends
    pub fn step(&mut self, direction: i64, len: usize) {
        if let Lightbox::Open { index } = self {
            if let Some(next) = wrap_index(*index, direction, len) {
                *index = next;
            }
        }
    }

    pub fn close(&mut self) {
        *self = Lightbox::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open { .. })
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Lightbox::Open { index } => Some(*index),
            Lightbox::Closed => None,
        }
    }

    /// The page behind the lightbox must not scroll while it is open
    pub fn suspends_scroll(&self) -> bool {
        self.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_clamps() {
        let mut lightbox = Lightbox::default();
        assert!(lightbox.open(-5, 4));
        assert_eq!(lightbox.index(), Some(0));

        assert!(lightbox.open(4, 4));
        assert_eq!(lightbox.index(), Some(3));

        assert!(lightbox.open(100, 4));
        assert_eq!(lightbox.index(), Some(3));
        assert!(lightbox.suspends_scroll());
    }

    #[test]
    fn test_open_on_empty_list_stays_closed() {
        let mut lightbox = Lightbox::default();
        assert!(!lightbox.open(0, 0));
        assert_eq!(lightbox, Lightbox::Closed);
        assert!(!lightbox.suspends_scroll());
    }

    #[test]
    fn test_step_wraps_forward() {
        let mut lightbox = Lightbox::default();
        lightbox.open(2, 3);
        lightbox.step(1, 3);
        assert_eq!(lightbox.index(), Some(0));
    }

    #[test]
    fn test_step_wraps_backward() {
        let mut lightbox = Lightbox::default();
        lightbox.open(0, 5);
        lightbox.step(-1, 5);
        assert_eq!(lightbox.index(), Some(4));
    }

    #[test]
    fn test_step_sequences_stay_in_range() {
        let steps = [1, -1, 7, -13, 2, -2, 100, -101, 0, 3];
        for len in 1..=6 {
            let mut lightbox = Lightbox::default();
            lightbox.open(0, len);
            for &step in &steps {
                lightbox.step(step, len);
                let index = lightbox.index().unwrap();
                assert!(index < len, "index {index} escaped list of {len}");
            }
        }
    }

    #[test]
    fn test_step_on_empty_list_is_noop() {
        let mut lightbox = Lightbox::Open { index: 1 };
        lightbox.step(1, 0);
        assert_eq!(lightbox.index(), Some(1));
    }

    #[test]
    fn test_step_while_closed_is_noop() {
        let mut lightbox = Lightbox::default();
        lightbox.step(1, 3);
        assert_eq!(lightbox, Lightbox::Closed);
    }

    #[test]
    fn test_close() {
        let mut lightbox = Lightbox::default();
        lightbox.open(1, 3);
        lightbox.close();
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.index(), None);
    }
}
