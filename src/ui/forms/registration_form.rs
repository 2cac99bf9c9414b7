//! Registration form rendering

use super::choice_renderer::{draw_country_select, draw_gender_radios, draw_hobbies_select};
use super::field_renderer::draw_text_field;
use crate::app::App;
use crate::state::FieldName;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Rows for an expanded list field (borders + options + helper line)
const EXPANDED_LIST_HEIGHT: u16 = 11;

fn field_height(field: FieldName, is_active: bool) -> u16 {
    let input = match field {
        FieldName::Address => 6, // 4 text rows
        FieldName::Country | FieldName::Hobbies if is_active => EXPANDED_LIST_HEIGHT - 1,
        _ => 3,
    };
    input + 1 // helper line
}

/// Draw the form card: title, fields in focus order, and the Submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let focused = form.focused_field();

    let block = Block::default()
        .title(" User Registration Form ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = FieldName::ALL
        .iter()
        .map(|f| Constraint::Length(field_height(*f, focused == Some(*f))))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    let values = &form.values;
    for (i, field) in FieldName::ALL.iter().copied().enumerate() {
        let area = chunks[i];
        let is_active = focused == Some(field);
        let error = form.visible_error(field);
        match field {
            FieldName::Name | FieldName::Address => {
                draw_text_field(frame, area, field, values.text(field), is_active, error)
            }
            FieldName::Country => draw_country_select(
                frame,
                area,
                &app.state.countries,
                app.state.country_load,
                &values.country,
                form.country_cursor,
                is_active,
                error,
            ),
            FieldName::Gender => draw_gender_radios(
                frame,
                area,
                &values.gender,
                form.gender_cursor,
                is_active,
                error,
            ),
            FieldName::Hobbies => draw_hobbies_select(
                frame,
                area,
                &values.hobbies,
                form.hobby_cursor,
                is_active,
                error,
            ),
        }
    }

    draw_submit_row(frame, chunks[FieldName::ALL.len()], form.is_buttons_row_active());
}

fn draw_submit_row(frame: &mut Frame, area: Rect, is_selected: bool) {
    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24)])
        .flex(Flex::Center)
        .split(area)[0];
    render_button(frame, button_area, "Submit", is_selected, Color::Magenta);
}
