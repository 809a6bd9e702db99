use crate::view::LoadoutView;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draws the reset confirmation dialog as an overlay
pub fn draw_reset_confirm(frame: &mut Frame, view: &LoadoutView) {
    let size = frame.size();

    let dialog_width = 44.min(size.width.saturating_sub(4));
    let dialog_height = 9.min(size.height.saturating_sub(4));
    let x = (size.width.saturating_sub(dialog_width)) / 2;
    let y = (size.height.saturating_sub(dialog_height)) / 2;
    let dialog_area = Rect::new(x, y, dialog_width, dialog_height);

    frame.render_widget(Clear, dialog_area);

    let checked: usize = view.zones.iter().map(|z| z.checked_count()).sum();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Reset will clear:",
            Style::default().fg(Color::Red),
        )),
        Line::from(format!("  - {} checked items", checked)),
        Line::from(format!("  - {} active kits", view.active_kits.len())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Reset   "),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw(" Cancel"),
        ]),
    ];

    let block = Block::default()
        .title(Span::styled(
            " Confirm Reset ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, dialog_area);
}
