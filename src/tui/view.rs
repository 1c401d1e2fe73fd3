//! Operator Hub TUI の描画処理

use super::app::{Focus, Model};
use super::common::{centered_rect, truncate};
use super::sidebar::SidebarEntry;
use crate::catalog::Item;
use crate::hub::OverlayProps;
use crate::nav::Navigator;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

const SIDEBAR_WIDTH: u16 = 30;
const TILE_WIDTH: u16 = 32;
const TILE_HEIGHT: u16 = 6;

/// UI をレンダリング
pub fn view(f: &mut Frame, model: &mut Model) {
    f.render_widget(Clear, f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // サイドバー
            Constraint::Min(TILE_WIDTH),       // メイン
        ])
        .split(f.area());

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 検索欄
            Constraint::Min(1),    // タイルグリッド
            Constraint::Length(1), // ヘルプ
        ])
        .split(columns[1]);

    view_sidebar(f, model, columns[0]);
    view_search(f, model, main[0]);
    view_grid(f, model, main[1]);
    view_help(f, model, main[2]);

    let overlay = model.hub.overlay();
    if overlay.show {
        view_overlay(f, &overlay);
    }
}

/// カテゴリ・フィルタのサイドバー
fn view_sidebar(f: &mut Frame, model: &Model, area: Rect) {
    let page = model.hub.page();
    let items = model.hub.items();
    let category_counts = page.category_counts(items);

    let rows: Vec<ListItem> = model
        .sidebar_entries()
        .iter()
        .map(|entry| {
            let active = entry.is_active(page);
            let text = match entry {
                SidebarEntry::AllItems => format!("All Items ({})", items.len()),
                SidebarEntry::Category(id) => format!(
                    "{} ({})",
                    id,
                    category_counts.get(id).copied().unwrap_or(0)
                ),
                SidebarEntry::Filter(field, value) => {
                    let count = page
                        .filter_counts(items, *field)
                        .get(value)
                        .copied()
                        .unwrap_or(0);
                    let mark = if active { "[x]" } else { "[ ]" };
                    format!("{mark} {value} ({count})")
                }
            };
            let style = if active {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            ListItem::new(truncate(&text, SIDEBAR_WIDTH as usize - 4)).style(style)
        })
        .collect();

    let border_style = if model.focus == Focus::Sidebar {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let list = List::new(rows)
        .block(
            Block::default()
                .title(" Categories / Provider ")
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if model.focus == Focus::Sidebar {
        state.select(Some(model.sidebar_selected));
    }
    f.render_stateful_widget(list, area, &mut state);
}

/// 検索欄
fn view_search(f: &mut Frame, model: &Model, area: Rect) {
    let focused = model.focus == Focus::Search;
    let search = model.hub.page().search();
    let text = if search.is_empty() && !focused {
        Span::styled("Filter by keyword...", Style::default().fg(Color::DarkGray))
    } else if focused {
        Span::raw(format!("{search}_"))
    } else {
        Span::raw(search.to_string())
    };

    let border_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let paragraph = Paragraph::new(Line::from(text)).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(paragraph, area);
}

/// タイルグリッド
fn view_grid(f: &mut Frame, model: &mut Model, area: Rect) {
    let columns = (area.width / TILE_WIDTH).max(1) as usize;
    model.columns = columns;

    let visible: Vec<Item> = model.hub.visible_items().into_iter().cloned().collect();
    if visible.is_empty() {
        let message = model
            .hub
            .page()
            .empty_state(model.hub.items())
            .unwrap_or("No Operator Hub items available.");
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
        return;
    }

    // 選択行が見えるようにスクロール
    let rows_visible = (area.height / TILE_HEIGHT).max(1) as usize;
    let selected_row = model.selected / columns;
    let first_row = selected_row.saturating_sub(rows_visible - 1);

    for (index, item) in visible.iter().enumerate() {
        let row = index / columns;
        if row < first_row || row >= first_row + rows_visible {
            continue;
        }
        let rect = Rect::new(
            area.x + (index % columns) as u16 * TILE_WIDTH,
            area.y + (row - first_row) as u16 * TILE_HEIGHT,
            TILE_WIDTH,
            TILE_HEIGHT,
        )
        .intersection(area);
        view_tile(f, model, item, index == model.selected, rect);
    }
}

/// タイル1枚
fn view_tile(f: &mut Frame, model: &Model, item: &Item, selected: bool, area: Rect) {
    let Some(tile) = model.hub.render_tile(Some(item)) else {
        return;
    };
    let inner_width = area.width.saturating_sub(2) as usize;

    let mut lines = Vec::new();
    if let Some(vendor) = &tile.vendor {
        lines.push(Line::styled(
            truncate(vendor, inner_width),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if let Some(description) = &tile.description {
        lines.push(Line::raw(truncate(description, inner_width)));
    }
    if let Some(footer) = tile.footer() {
        lines.push(Line::styled(
            format!("✓ {footer}"),
            Style::default().fg(Color::Green),
        ));
    }

    let border_style = if selected && model.focus == Focus::Grid {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else if selected {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = format!(" {} ", truncate(&tile.title, inner_width.saturating_sub(2)));
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(paragraph, area);
}

/// ヘルプ（現在の URL を含む）
fn view_help(f: &mut Frame, model: &Model, area: Rect) {
    if let Some(error) = &model.last_error {
        let help = Paragraph::new(format!(" Error: {error}")).style(Style::default().fg(Color::Red));
        f.render_widget(help, area);
        return;
    }

    let url = model.hub.navigator().location().to_url();
    let mut keys = match model.focus {
        Focus::Grid => "/: search | Tab: filters | Enter: details".to_string(),
        Focus::Search => "Enter: done | Esc: clear".to_string(),
        Focus::Sidebar => "Enter: toggle | Tab: tiles".to_string(),
    };
    if model.focus == Focus::Grid {
        let page = model.hub.page();
        if page.has_active_filters() || page.selected_category().is_some() {
            keys.push_str(" | c: clear");
        }
        if model.source.is_some() {
            keys.push_str(" | r: reload");
        }
    }
    if model.focus != Focus::Search {
        keys.push_str(" | q: quit");
    }
    let help = Paragraph::new(format!(" {url}  {keys}")).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

/// 詳細オーバーレイ
fn view_overlay(f: &mut Frame, overlay: &OverlayProps) {
    let Some(item) = overlay.item else {
        return;
    };

    let area = centered_rect(70, 70, f.area());
    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // 詳細
            Constraint::Length(1), // ヘルプ
        ])
        .split(area);

    let mut lines: Vec<Line> = overlay
        .detail_rows()
        .into_iter()
        .map(|(label, value)| {
            let color = if label == "Status" && overlay.subscription.is_some() {
                Color::Green
            } else {
                Color::White
            };
            Line::from(vec![
                Span::raw(format!("{label}: ")),
                Span::styled(value, Style::default().fg(color)),
            ])
        })
        .collect();
    if let Some(body) = overlay.body() {
        lines.push(Line::raw(""));
        lines.extend(body.lines().map(|l| Line::raw(l.to_string())));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", item.name))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, chunks[0]);

    let help = Paragraph::new(" Esc: close").style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
