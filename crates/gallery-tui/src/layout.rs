//! Screen layout definitions for the TUI
//!
//! Header with pattern tabs on top, a one-row status bar at the bottom, and
//! a body split into the controls/transcript column and the side pane. Narrow
//! terminals drop the side pane.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: top border + title row + tabs row + bottom border
pub const HEADER_HEIGHT: u16 = 4;

/// Below this width the side pane is hidden
pub const MIN_SPLIT_WIDTH: u16 = 70;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and pattern tabs
    pub header: Rect,
    /// Summary, scenario buttons and options
    pub controls: Rect,
    /// Transcript of the mounted pattern
    pub transcript: Rect,
    /// Code or comparison pane, absent on narrow terminals
    pub side: Option<Rect>,
    /// Key hints and status message
    pub status: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `control_rows` - Content rows the controls block needs (borders excluded)
pub fn create(area: Rect, control_rows: u16) -> ScreenAreas {
    let [header, body, status] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let (left, side) = if area.width >= MIN_SPLIT_WIDTH {
        let [left, side] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(body);
        (left, Some(side))
    } else {
        (body, None)
    };

    let [controls, transcript] = Layout::vertical([
        Constraint::Length(control_rows + 2),
        Constraint::Min(3),
    ])
    .areas(left);

    ScreenAreas {
        header,
        controls,
        transcript,
        side,
        status,
    }
}
