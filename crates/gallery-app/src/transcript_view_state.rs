//! Transcript view state - scroll position and viewport bounds.
//!
//! Shared by the handler layer (scroll commands) and the TUI layer (which
//! reports the viewport size while rendering).

// ─────────────────────────────────────────────────────────────────────────────
// TranscriptViewState
// ─────────────────────────────────────────────────────────────────────────────

/// Vertical scroll state for the transcript pane
#[derive(Debug, Clone)]
pub struct TranscriptViewState {
    /// Current vertical scroll offset from top
    pub offset: usize,
    /// Follow new lines as they arrive
    pub auto_scroll: bool,
    /// Total number of lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
}

impl Default for TranscriptViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptViewState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
            total_lines: 0,
            visible_lines: 0,
        }
    }

    /// Range of line indices currently on screen, end exclusive
    pub fn visible_range(&self) -> (usize, usize) {
        let end = (self.offset + self.visible_lines).min(self.total_lines);
        (self.offset.min(end), end)
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Scroll up by n lines
    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
        self.auto_scroll = false;
    }

    /// Scroll down by n lines
    pub fn scroll_down(&mut self, n: usize) {
        let max_offset = self.max_offset();
        self.offset = (self.offset + n).min(max_offset);

        // Re-enable auto-scroll if at bottom
        if self.offset >= max_offset {
            self.auto_scroll = true;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_scroll = false;
    }

    /// Scroll to bottom and enable auto-scroll
    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.auto_scroll = true;
    }

    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    /// Update with new content size
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;

        if self.auto_scroll {
            self.offset = self.max_offset();
        } else {
            // Content may have shrunk (cleared transcript)
            self.offset = self.offset.min(self.max_offset());
        }
    }

    /// Back to an empty, following view
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
