//! Photo gallery on the property detail screen: a selected image plus an
//! optional fullscreen view of it.
//!
//! The photo count is passed to each call, so one state value survives a
//! navigation from one listing to another.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gallery {
    selected: usize,
    fullscreen: bool,
}

impl Gallery {
    /// Selected index, clamped to the photos actually present.
    pub fn selected(&self, len: usize) -> usize {
        self.selected.min(len.saturating_sub(1))
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize, len: usize) {
        if index < len {
            self.selected = index;
        }
    }

    /// No-op for a listing without photos.
    pub fn open(&mut self, len: usize) {
        self.fullscreen = len > 0;
    }

    pub fn close(&mut self) {
        self.fullscreen = false;
    }

    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected(len) + 1) % len;
        }
    }

    pub fn prev(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected(len) + len - 1) % len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fullscreen_shows_the_selected_photo() {
        let mut gallery = Gallery::default();
        gallery.select(2, 3);
        gallery.open(3);
        assert!(gallery.is_fullscreen());
        assert_eq!(gallery.selected(3), 2);

        gallery.next(3);
        assert_eq!(gallery.selected(3), 0);
        gallery.prev(3);
        assert_eq!(gallery.selected(3), 2);

        gallery.close();
        assert!(!gallery.is_fullscreen());
        assert_eq!(gallery.selected(3), 2, "closing keeps the selection");
    }

    #[test]
    fn empty_gallery_never_opens() {
        let mut gallery = Gallery::default();
        gallery.open(0);
        gallery.next(0);
        gallery.prev(0);
        assert!(!gallery.is_fullscreen());
        assert_eq!(gallery.selected(0), 0);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut gallery = Gallery::default();
        gallery.select(5, 2);
        assert_eq!(gallery.selected(2), 0);
    }

    #[test]
    fn selection_clamps_to_a_shorter_listing() {
        let mut gallery = Gallery::default();
        gallery.select(3, 4);
        assert_eq!(gallery.selected(2), 1);
        gallery.next(2);
        assert_eq!(gallery.selected(2), 0);
    }
}
