use crate::table::{EditField, RowAction, RowCells, RowView, TableView};
use crate::ui::app::{App, StatusKind};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

/// One control of the page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    First,
    Page(usize),
    Gap,
    Last,
}

/// Page selector layout: first/last controls, the first and last page, and
/// the current page with one neighbour on each side. Gaps of a single page
/// show the page instead of an ellipsis.
pub fn page_buttons(current: usize, total: usize) -> Vec<PageButton> {
    let total = total.max(1);
    let current = current.clamp(1, total);

    let mut pages: Vec<usize> = vec![1, total, current.saturating_sub(1), current, current + 1];
    pages.retain(|p| (1..=total).contains(p));
    pages.sort_unstable();
    pages.dedup();

    let mut buttons = vec![PageButton::First];
    let mut last_shown = 0;
    for page in pages {
        if last_shown != 0 {
            match page - last_shown {
                1 => {}
                2 => buttons.push(PageButton::Page(last_shown + 1)),
                _ => buttons.push(PageButton::Gap),
            }
        }
        buttons.push(PageButton::Page(page));
        last_shown = page;
    }
    buttons.push(PageButton::Last);
    buttons
}

pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let view = app.view();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg)),
        frame.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search
            Constraint::Min(0),    // Table
            Constraint::Length(1), // Pages
            Constraint::Length(1), // Bulk delete + status
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, &view, chunks[0]);
    render_search(frame, app, chunks[1]);
    render_table(frame, app, &view, chunks[2]);
    render_pages(frame, theme, &view, chunks[3]);
    render_actions(frame, app, &view, chunks[4]);
    render_footer(frame, app, chunks[5]);

    if app.show_info {
        render_info(frame, theme);
    }
}

fn render_header(frame: &mut Frame, app: &App, view: &TableView, area: Rect) {
    let theme = &app.theme;
    let counts = if app.loading {
        "loading...".to_string()
    } else if view.active_len == view.total_len {
        format!("{} members", view.total_len)
    } else {
        format!("{} of {} members", view.active_len, view.total_len)
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "  ROSTER  ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(counts, Style::default().fg(theme.fg_dim)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );

    frame.render_widget(header, area);
}

fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let query = app.table.query();

    let mut spans = vec![Span::styled("🔍 ", Style::default().fg(theme.fg_dim))];
    if query.is_empty() && !app.search_mode {
        spans.push(Span::styled(
            "Search by name, email or role",
            Style::default().fg(theme.fg_dim),
        ));
    } else {
        spans.push(Span::styled(
            query.text().to_string(),
            Style::default().fg(theme.fg),
        ));
        if app.search_mode {
            spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
        }
    }
    if query.is_literal() {
        spans.push(Span::styled(
            "  (literal match)",
            Style::default().fg(theme.error),
        ));
    }

    let border_color = if app.search_mode {
        theme.accent
    } else {
        theme.fg_dim
    };

    let search = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(search, area);
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn row_cells<'a>(row: &'a RowView, theme: &Theme) -> Vec<Cell<'a>> {
    let mut cells = vec![Cell::from(checkbox(row.checked))];

    let focus = match &row.cells {
        RowCells::Input { focus, .. } => Some(*focus),
        RowCells::Text { .. } => None,
    };
    let input_style = Style::default().fg(theme.secondary);
    let fields = [EditField::Name, EditField::Email, EditField::Role];
    cells.extend(fields.into_iter().zip(row.cells.values()).map(|(field, value)| {
        if focus == Some(field) {
            Cell::from(Line::from(vec![
                Span::styled(value, input_style.add_modifier(Modifier::UNDERLINED)),
                Span::styled("▏", input_style),
            ]))
        } else if row.cells.is_input() {
            Cell::from(Span::styled(value, input_style))
        } else {
            Cell::from(value)
        }
    }));

    let action = match row.action {
        RowAction::Edit => Cell::from("✎ edit"),
        RowAction::Save => Cell::from(Span::styled(
            "💾 save",
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        )),
    };
    cells.push(action);
    cells.push(Cell::from(Span::styled("🗑", Style::default().fg(theme.error))));
    cells
}

fn render_table(frame: &mut Frame, app: &App, view: &TableView, area: Rect) {
    let theme = &app.theme;

    let header = Row::new(vec![
        Cell::from(checkbox(view.header_checked)),
        Cell::from("Name"),
        Cell::from("Email"),
        Cell::from("Role"),
        Cell::from("Edit"),
        Cell::from("Delete"),
    ])
    .style(
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = view
        .rows
        .iter()
        .map(|row| {
            let style = if row.checked {
                Style::default().fg(theme.fg).bg(theme.checked_bg)
            } else {
                Style::default().fg(theme.fg)
            };
            Row::new(row_cells(row, theme)).style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Percentage(25),
        Constraint::Percentage(35),
        Constraint::Percentage(15),
        Constraint::Length(8),
        Constraint::Length(7),
    ];

    let title = if app.table.editor().is_editing() {
        " Members (editing) "
    } else {
        " Members "
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(theme.accent)),
        )
        .column_spacing(1)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    if !view.rows.is_empty() {
        state.select(Some(app.cursor));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_pages(frame: &mut Frame, theme: &Theme, view: &TableView, area: Rect) {
    let mut spans = Vec::new();
    for button in page_buttons(view.page, view.total_pages) {
        let (label, style) = match button {
            PageButton::First => ("«".to_string(), Style::default().fg(theme.fg_dim)),
            PageButton::Last => ("»".to_string(), Style::default().fg(theme.fg_dim)),
            PageButton::Gap => ("…".to_string(), Style::default().fg(theme.fg_dim)),
            PageButton::Page(page) if page == view.page => (
                format!("[{page}]"),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            PageButton::Page(page) => (page.to_string(), Style::default().fg(theme.fg)),
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let pages = Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(pages, area);
}

fn render_actions(frame: &mut Frame, app: &App, view: &TableView, area: Rect) {
    let theme = &app.theme;
    let selected = app.table.selection().len();

    let bulk_style = if view.bulk_delete_enabled {
        Style::default()
            .fg(theme.error)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_dim)
    };

    let mut spans = vec![Span::styled(
        format!(" [D] Delete Selected ({selected}) "),
        bulk_style,
    )];

    if let Some(status) = &app.status {
        let color = match status.kind {
            StatusKind::Info => theme.fg_dim,
            StatusKind::Success => theme.success,
            StatusKind::Warning => theme.error,
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(status.text.clone(), Style::default().fg(color)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.search_mode {
        "[Type] Filter  [Enter] Keep  [Esc] Clear  [↑↓] Move"
    } else if app.is_editing_cursor_row() {
        "[Type] Edit  [Tab] Next Field  [Enter] Save  [↑↓] Move"
    } else {
        "[↑↓] Move  [←→] Page  [Space] Check  [a] All  [e] Edit  [d] Delete  [/] Search  [?] Help  [q] Quit"
    };

    let footer = Paragraph::new(help_text).style(Style::default().fg(app.theme.fg_dim));
    frame.render_widget(footer, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn render_info(frame: &mut Frame, theme: &Theme) {
    let area = centered_rect(60, 70, frame.area());

    let bindings = [
        ("j / k / ↑ / ↓", "Move between rows"),
        ("h / l / ← / →", "Previous / next page"),
        ("g / G", "First / last page"),
        ("1-9", "Jump to page"),
        ("Space", "Check or uncheck row"),
        ("a", "Check or uncheck all members"),
        ("e / Enter", "Edit row, or save the row being edited"),
        ("Tab / Shift-Tab", "Next / previous field while editing"),
        ("d", "Delete row"),
        ("D", "Delete checked rows"),
        ("/", "Search (Enter keeps, Esc clears)"),
        ("t", "Next theme"),
        ("q / Ctrl-C", "Quit"),
    ];

    let mut lines = vec![
        Line::from(Span::styled(
            "Key Bindings",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (keys, description) in bindings {
        lines.push(Line::from(vec![
            Span::styled(format!("{keys:<18}"), Style::default().fg(theme.secondary)),
            Span::styled(description, Style::default().fg(theme.fg)),
        ]));
    }

    let info = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .border_style(Style::default().fg(theme.accent))
                .style(Style::default().bg(theme.bg)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, area);
    frame.render_widget(info, area);
}
