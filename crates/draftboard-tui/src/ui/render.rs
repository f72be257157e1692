use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, AppState, NoteField, Screen};

use super::styles;
use super::tabs::{board, profile};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Breadcrumbs
            Constraint::Min(10),   // Main content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    render_breadcrumbs(frame, app, chunks[1]);
    render_main_content(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    // Render overlays
    if matches!(app.state, AppState::ShowingHelp) {
        render_help_overlay(frame, app);
    }

    if matches!(app.state, AppState::AddingNote) {
        render_note_overlay(frame, app);
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        render_quit_overlay(frame);
    }
}

fn render_title_bar(frame: &mut Frame, _app: &App, area: Rect) {
    let title = "  Draft Board";
    let help_hint = "[?] Help";
    let title_len = title.len();

    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::raw(" ".repeat(
            area.width
                .saturating_sub(title_len as u16 + help_hint.len() as u16 + 4)
                as usize,
        )),
        Span::styled(help_hint, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(title_line).block(block);
    frame.render_widget(paragraph, area);
}

fn render_breadcrumbs(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled("Big Board", styles::tab_style(app.screen == Screen::Board)),
    ];

    if app.screen == Screen::Profile {
        let name = app
            .profile()
            .map(|p| p.display_name())
            .unwrap_or_default();
        spans.push(Span::styled(" > ", styles::muted_style()));
        spans.push(Span::styled(name, styles::tab_style(true)));
    }

    // Search query on the right while typing or while a filter is active
    if app.state == AppState::Searching || !app.search_query.is_empty() {
        let cursor = if app.state == AppState::Searching { "▌" } else { "" };
        let search = format!("Search: {}{} ", app.search_query, cursor);
        let left_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let padding = (area.width as usize)
            .saturating_sub(left_width + search.chars().count() + 1);
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(search, styles::search_style()));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.screen {
        Screen::Board => board::render(frame, app, area),
        Screen::Profile => profile::render(frame, app, area),
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.screen {
        Screen::Board => "[/]search | [Enter]profile | [q]uit",
        Screen::Profile => "[n]ote | [Esc]back | [q]uit",
    };

    let left_text = if let Some(ref msg) = app.status_message {
        format!(" {} ", msg)
    } else {
        format!(
            " {} players, {} sources ",
            app.dataset.players().len(),
            app.dataset.schema().len()
        )
    };

    let right_text = format!(" {} ", shortcuts);

    let width = area.width as usize;
    let padding_len = width
        .saturating_sub(left_text.chars().count())
        .saturating_sub(right_text.len());
    let status_line = Line::from(vec![
        Span::styled(left_text, styles::muted_style()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(right_text, styles::muted_style()),
    ]);
    let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
    frame.render_widget(paragraph, area);
}

fn help_line<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", key), styles::help_key_style()),
        Span::styled(desc, styles::help_desc_style()),
    ])
}

fn render_help_overlay(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(52, 27, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let version = env!("CARGO_PKG_VERSION");
    let sources = app.dataset.schema().len();
    let source_keys = match sources {
        0 => "-".to_string(),
        1 => "1".to_string(),
        n => format!("1-{}", n.min(9)),
    };

    let help_text = vec![
        Line::from(Span::styled("  DRAFT BOARD", styles::title_style())),
        Line::from(Span::styled(
            format!("  version {}", version),
            styles::muted_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Navigation", styles::highlight_style())),
        help_line("↑/↓ j/k", "Move selection"),
        help_line("PgUp/PgDn", "Move a page"),
        help_line("Enter", "Open player profile"),
        help_line("Esc", "Go back / clear search"),
        Line::from(""),
        Line::from(Span::styled(" Big Board", styles::highlight_style())),
        help_line(&source_keys, "Sort by source (again to reverse)"),
        help_line("a", "Sort by composite average"),
        help_line("/", "Search by name, team or league"),
        Line::from(""),
        Line::from(Span::styled(" Profile", styles::highlight_style())),
        help_line("t/c/s", "Total/counting/scoring stats"),
        help_line("v", "Next stat view"),
        help_line("[ / ]", "Previous/next season"),
        help_line("n", "Add a scouting note"),
        help_line("↑/↓", "Scroll reports"),
        Line::from(""),
        help_line("q", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("       Press ", styles::muted_style()),
            Span::styled("?", styles::help_key_style()),
            Span::styled(" or ", styles::muted_style()),
            Span::styled("Esc", styles::help_key_style()),
            Span::styled(" to close", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(help_text).block(block);

    frame.render_widget(paragraph, area);
}

fn render_note_overlay(frame: &mut Frame, app: &App) {
    let height = if app.note_error.is_some() { 14 } else { 12 };
    let area = centered_rect_fixed(60, height, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let player_name = app
        .profile()
        .map(|p| p.display_name())
        .unwrap_or_default();

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" New note on {}", player_name),
            styles::title_style(),
        )),
        Line::from(""),
    ];

    // Author field
    let author_focused = app.note_focus == NoteField::Author;
    let author_style = if author_focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    let cursor = if author_focused { "▌" } else { "" };
    lines.push(Line::from(vec![
        Span::styled(" Name: [", styles::muted_style()),
        Span::styled(format!("{:<24}{}", app.note_author, cursor), author_style),
        Span::styled("]", styles::muted_style()),
    ]));
    lines.push(Line::from(""));

    // Note body
    let text_focused = app.note_focus == NoteField::Text;
    let text_style = if text_focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    let cursor = if text_focused { "▌" } else { "" };
    lines.push(Line::from(Span::styled(" Note:", styles::muted_style())));
    lines.push(Line::from(Span::styled(
        format!(" {}{}", app.note_text, cursor),
        text_style,
    )));
    lines.push(Line::from(""));

    // Error message
    if let Some(ref error) = app.note_error {
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            styles::error_style(),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled(" [Tab]", styles::help_key_style()),
        Span::styled(" switch field  ", styles::muted_style()),
        Span::styled("[Enter]", styles::help_key_style()),
        Span::styled(" save  ", styles::muted_style()),
        Span::styled("[Esc]", styles::help_key_style()),
        Span::styled(" cancel", styles::muted_style()),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Create a centered rectangle with fixed dimensions
fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

fn render_quit_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(46, 7, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "   Are you sure you want to quit?",
            styles::highlight_style(),
        )),
        Line::from(Span::styled(
            "   Session notes will be discarded.",
            styles::muted_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("   Press ", styles::muted_style()),
            Span::styled("[Y]", styles::help_key_style()),
            Span::styled(" to quit, ", styles::muted_style()),
            Span::styled("[N]", styles::help_key_style()),
            Span::styled(" to cancel", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, area);
}
