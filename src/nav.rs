//! Focus index and panel visibility for the suggestion list.

/// Which suggestion is focused and whether the panel is shown.
///
/// The two are independent: the panel can be open with nothing focused, and a
/// focus index survives closing until the next selection or stale-index reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Navigation {
    focused: Option<usize>,
    visible: bool,
}

impl Navigation {
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn set_open(&mut self, open: bool) {
        self.visible = open;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn reset_focus(&mut self) {
        self.focused = None;
    }

    /// Move focus one row down, stopping at the last row. `len` must be non-zero.
    pub fn next(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return self.focused;
        }
        let to = match self.focused {
            None => 0,
            Some(i) => usize::min(len - 1, i + 1),
        };
        self.focused = Some(to);
        self.focused
    }

    /// Move focus one row up, stopping at the first row.
    pub fn prev(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return self.focused;
        }
        let to = match self.focused {
            None | Some(0) => 0,
            Some(i) => usize::min(len - 1, i - 1),
        };
        self.focused = Some(to);
        self.focused
    }

    /// Drop the focus when the list shrank below it.
    pub fn clamp(&mut self, len: usize) {
        if matches!(self.focused, Some(i) if i >= len) {
            self.focused = None;
        }
    }
}

/// The slice of rows a bounded panel shows.
///
/// `rows == 0` means the panel has no height limit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollWindow {
    pub offset: usize,
    pub rows: usize,
}

impl ScrollWindow {
    pub fn new(rows: usize) -> Self {
        ScrollWindow { offset: 0, rows }
    }

    /// Scroll the least amount needed for `index` to be on screen.
    pub fn reveal(&mut self, index: usize) {
        if self.rows == 0 {
            self.offset = 0;
            return;
        }
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.rows {
            self.offset = index + 1 - self.rows;
        }
    }

    /// Keep the window inside a list of `len` rows.
    pub fn clamp(&mut self, len: usize) {
        if self.rows == 0 {
            self.offset = 0;
            return;
        }
        self.offset = usize::min(self.offset, len.saturating_sub(self.rows));
    }

    pub fn resize(&mut self, rows: usize, len: usize) {
        self.rows = rows;
        self.clamp(len);
    }

    /// Visible index range for a list of `len` rows.
    pub fn range(&self, len: usize) -> std::ops::Range<usize> {
        if self.rows == 0 {
            return 0..len;
        }
        let start = usize::min(self.offset, len);
        start..usize::min(start + self.rows, len)
    }
}
