//! Header bar widget
//!
//! Title row with the active pattern's category, then the pattern tabs.

use gallery_app::config::IconMode;
use gallery_app::Navigation;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

use super::PatternTabs;

pub const APP_TITLE: &str = "Pattern Gallery";

/// Main header showing the app title, the active pattern and the tabs
pub struct MainHeader<'a> {
    navigation: &'a Navigation,
    icons: IconMode,
}

impl<'a> MainHeader<'a> {
    pub fn new(navigation: &'a Navigation, icons: IconMode) -> Self {
        Self { navigation, icons }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title_area = Rect { height: 1, ..inner };
        self.render_title_row(title_area, buf);

        if inner.height >= 2 {
            let tabs_area = Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            };
            PatternTabs::new(self.navigation, self.icons).render(tabs_area, buf);
        }
    }
}

impl MainHeader<'_> {
    /// Title on the left, global shortcuts right-aligned when they fit
    fn render_title_row(&self, area: Rect, buf: &mut Buffer) {
        let kind = self.navigation.active();

        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(APP_TITLE, styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(kind.category().label(), styles::category(kind.category())),
            Span::styled(" · ", styles::text_muted()),
            Span::styled(kind.label(), styles::text_primary()),
        ]);
        let left_width = left_line.width() as u16;

        let mut shortcuts = Vec::new();
        for (key, label) in [("1-9", "Pattern"), ("c", "Code/Compare"), ("q", "Quit")] {
            shortcuts.push(Span::styled("[", styles::text_muted()));
            shortcuts.push(Span::styled(key, styles::keybinding()));
            shortcuts.push(Span::styled(format!("] {}  ", label), styles::text_muted()));
        }
        let shortcuts_line = Line::from(shortcuts);
        let shortcuts_width = shortcuts_line.width() as u16;

        buf.set_line(area.x, area.y, &left_line, area.width);

        if left_width + shortcuts_width + 2 <= area.width {
            let shortcuts_x = area.x + area.width - shortcuts_width;
            buf.set_line(shortcuts_x, area.y, &shortcuts_line, shortcuts_width);
        }
    }
}
