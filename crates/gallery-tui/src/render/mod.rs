//! Main render/view function (View in TEA pattern)


use gallery_app::panel::SidePane;
use gallery_app::state::AppState;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Only the transcript scroll state is written back, so the next scroll
/// command knows the viewport size.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let icons = state.settings.ui.icons;
    let areas = layout::create(area, widgets::control_rows(&state.panel));

    frame.render_widget(
        widgets::MainHeader::new(&state.navigation, icons),
        areas.header,
    );
    frame.render_widget(
        widgets::ControlsPanel::new(&state.panel, icons),
        areas.controls,
    );

    if let Some(side) = areas.side {
        match (state.panel.pane, state.panel.comparison()) {
            (SidePane::Comparison, Some(comparison)) => {
                frame.render_widget(widgets::ComparisonPane::new(comparison), side);
            }
            _ => frame.render_widget(widgets::CodePane::new(state.panel.kind()), side),
        }
    }

    let hint = state
        .panel
        .scenarios()
        .first()
        .map(|spec| format!("Press [{}] to run \"{}\"", spec.key, spec.label));
    let line_numbers = state.settings.ui.show_line_numbers;
    let (transcript, view_state) = state.panel.transcript_with_view();
    let mut transcript_view = widgets::TranscriptView::new(transcript).line_numbers(line_numbers);
    if let Some(hint) = hint {
        transcript_view = transcript_view.empty_hint(hint);
    }
    frame.render_stateful_widget(transcript_view, areas.transcript, view_state);

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}
