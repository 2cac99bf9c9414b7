//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    widgets::{List, ListState},
    Frame,
};

/// Render a list that scrolls to keep the highlighted row visible.
///
/// `highlighted` is `None` when the list should render without a cursor.
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, highlighted: Option<usize>) {
    let mut list_state = ListState::default().with_selected(highlighted);
    frame.render_stateful_widget(list, area, &mut list_state);
}
