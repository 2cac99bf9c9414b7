//! Rendering for the country select, gender radio group and hobbies multi-select

use super::field_renderer::{draw_helper_text, field_block, split_helper};
use crate::state::{CountryLoadStatus, FieldName, GENDER_OPTIONS, HOBBY_OPTIONS};
use crate::ui::widgets::render_scrollable_list;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

fn highlight_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

fn placeholder(text: &str) -> Paragraph<'_> {
    Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

/// Collapsed select: the chosen value or a placeholder
fn draw_collapsed(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    value: &str,
    empty_text: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let (input_area, helper_area) = split_helper(area);
    let block = field_block(field, is_active, error.is_some());
    let content = if value.is_empty() {
        placeholder(empty_text)
    } else {
        Paragraph::new(value)
    };
    frame.render_widget(content.block(block), input_area);
    draw_helper_text(frame, helper_area, error);
}

/// Country dropdown. Expanded into a scrollable list while focused.
#[allow(clippy::too_many_arguments)]
pub fn draw_country_select(
    frame: &mut Frame,
    area: Rect,
    countries: &[String],
    load: CountryLoadStatus,
    selected: &str,
    cursor: usize,
    is_active: bool,
    error: Option<&str>,
) {
    if !is_active {
        draw_collapsed(
            frame,
            area,
            FieldName::Country,
            selected,
            "(select a country)",
            false,
            error,
        );
        return;
    }

    let (input_area, helper_area) = split_helper(area);
    let block = field_block(FieldName::Country, true, error.is_some());

    if countries.is_empty() {
        let text = match load {
            CountryLoadStatus::Loading => "Loading countries…",
            _ => "No countries loaded",
        };
        frame.render_widget(placeholder(text).block(block), input_area);
    } else {
        let items: Vec<ListItem> = countries
            .iter()
            .map(|c| {
                let marker = if c == selected { "● " } else { "  " };
                ListItem::new(format!("{marker}{c}"))
            })
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(highlight_style());
        render_scrollable_list(frame, input_area, list, Some(cursor));
    }

    draw_helper_text(frame, helper_area, error);
}

/// Gender radio group on a single line
pub fn draw_gender_radios(
    frame: &mut Frame,
    area: Rect,
    selected: &str,
    cursor: usize,
    is_active: bool,
    error: Option<&str>,
) {
    let (input_area, helper_area) = split_helper(area);

    let mut spans = Vec::new();
    for (i, option) in GENDER_OPTIONS.iter().enumerate() {
        let mark = if option.value == selected { "(•)" } else { "( )" };
        let style = if is_active && i == cursor {
            highlight_style()
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!("{mark} {}", option.label), style));
        spans.push(Span::raw("   "));
    }

    let block = field_block(FieldName::Gender, is_active, error.is_some());
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), input_area);
    draw_helper_text(frame, helper_area, error);
}

/// Hobbies multi-select. Collapsed shows the selection joined with ", ".
pub fn draw_hobbies_select(
    frame: &mut Frame,
    area: Rect,
    selected: &[String],
    cursor: usize,
    is_active: bool,
    error: Option<&str>,
) {
    if !is_active {
        draw_collapsed(
            frame,
            area,
            FieldName::Hobbies,
            &selected.join(", "),
            "(none selected)",
            false,
            error,
        );
        return;
    }

    let (input_area, helper_area) = split_helper(area);
    let items: Vec<ListItem> = HOBBY_OPTIONS
        .iter()
        .map(|o| {
            let checked = selected.iter().any(|s| s == o.value);
            ListItem::new(format!("[{}] {}", if checked { "x" } else { " " }, o.label))
        })
        .collect();
    let list = List::new(items)
        .block(field_block(FieldName::Hobbies, true, error.is_some()))
        .highlight_style(highlight_style());
    render_scrollable_list(frame, input_area, list, Some(cursor));
    draw_helper_text(frame, helper_area, error);
}
