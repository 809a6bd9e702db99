//! Checklist screen: kit bar, zones with their items, status footer.

use crate::loadout::ZoneId;
use crate::view::{LoadoutView, ZoneView};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Cursor and transient UI state for the checklist.
#[derive(Debug, Default)]
pub struct ChecklistScreen {
    /// Index into [`selectable_rows`].
    pub selected: usize,
    pub confirming_reset: bool,
    /// One-line feedback shown in the footer (errors, kit changes).
    pub message: Option<String>,
}

impl ChecklistScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, row_count: usize) {
        if self.selected + 1 < row_count {
            self.selected += 1;
        }
    }

    /// Keep the cursor on an existing row after the list shrinks.
    pub fn clamp(&mut self, row_count: usize) {
        if self.selected >= row_count {
            self.selected = row_count.saturating_sub(1);
        }
    }

    /// Zone and item index under the cursor.
    pub fn selected_item(&self, view: &LoadoutView) -> Option<(ZoneId, usize)> {
        selectable_rows(view).get(self.selected).copied()
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, view: &LoadoutView) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Kit bar
                Constraint::Min(0),    // Zones
                Constraint::Length(3), // Footer
            ])
            .split(area);

        draw_kit_bar(frame, chunks[0], view);
        self.draw_zones(frame, chunks[1], view);
        self.draw_footer(frame, chunks[2], view);
    }

    fn draw_zones(&self, frame: &mut Frame, area: Rect, view: &LoadoutView) {
        let (complete, visible) = view.progress();
        let block = Block::default()
            .title(format!(" Loadout {}/{} zones ", complete, visible))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let mut lines: Vec<ListItem> = Vec::new();
        let mut selected_line = None;
        let mut row = 0;
        for zone in view.visible_zones() {
            lines.push(ListItem::new(zone_header(zone)));
            for item in &zone.items {
                if row == self.selected {
                    selected_line = Some(lines.len());
                }
                let mark = if item.checked { "[x]" } else { "[ ]" };
                let style = if item.checked {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::White)
                };
                lines.push(ListItem::new(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("{} {}", mark, item.label), style),
                ])));
                row += 1;
            }
        }

        let list = List::new(lines).block(block).highlight_symbol("▶").highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
        let mut state = ListState::default();
        state.select(selected_line);
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect, view: &LoadoutView) {
        let status = match &self.message {
            Some(msg) => Span::styled(msg.clone(), Style::default().fg(Color::Yellow)),
            None => Span::styled(view.last_saved_label(), Style::default().fg(Color::Gray)),
        };
        let footer = Paragraph::new(vec![
            Line::from(status),
            Line::from(Span::styled(
                "[↑/↓] Move  [Space] Check  [1-4] Kits  [R] Reset  [Q] Quit",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(Block::default().borders(Borders::TOP));
        frame.render_widget(footer, area);
    }
}

/// (zone, item index) for every item of every visible zone, in screen order.
pub fn selectable_rows(view: &LoadoutView) -> Vec<(ZoneId, usize)> {
    view.visible_zones()
        .flat_map(|zone| (0..zone.items.len()).map(move |i| (zone.zone, i)))
        .collect()
}

fn zone_header(zone: &ZoneView) -> Line<'static> {
    let (mark, style) = if zone.complete {
        ("✓", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        (" ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    };
    Line::from(vec![
        Span::styled(format!("{} {}", mark, zone.zone.name()), style),
        Span::styled(
            format!("  {}/{}", zone.checked_count(), zone.items.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn draw_kit_bar(frame: &mut Frame, area: Rect, view: &LoadoutView) {
    let mut spans = Vec::new();
    for (i, kit) in view.kits.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if kit.active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, kit.kit.name()), style));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Auxiliary Kits ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loadout::{build_catalog, default_catalog, CheckedState};

    #[test]
    fn test_rows_skip_hidden_zones() {
        let view = LoadoutView::build(&default_catalog(), &CheckedState::new(), &[], None);
        let rows = selectable_rows(&view);
        // 3 + 2 + 6 + 3 + 6 + 5 + 2 + 3 default items
        assert_eq!(rows.len(), 30);
        assert_eq!(rows[0], (ZoneId::FrontTruck, 0));
        assert!(rows.iter().all(|(zone, _)| !zone.is_auxiliary()));
    }

    #[test]
    fn test_rows_include_active_kit_zone() {
        let active = vec!["ppe_kit".to_string()];
        let view = LoadoutView::build(&build_catalog(&active), &CheckedState::new(), &active, None);
        let rows = selectable_rows(&view);
        assert_eq!(rows.len(), 34);
        assert_eq!(rows.last(), Some(&(ZoneId::PpeKit, 3)));
    }

    #[test]
    fn test_cursor_movement_and_clamp() {
        let mut screen = ChecklistScreen::new();
        screen.move_up();
        assert_eq!(screen.selected, 0);
        screen.move_down(3);
        screen.move_down(3);
        screen.move_down(3);
        assert_eq!(screen.selected, 2);
        screen.clamp(1);
        assert_eq!(screen.selected, 0);
        screen.clamp(0);
        assert_eq!(screen.selected, 0);
    }
}
