use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use draftboard_core::board::StatView;
use draftboard_core::models::{measurements::format_height, Measurements, Player, NO_DATA};
use draftboard_core::utils::{format_number, format_rank};

use crate::app::{App, ReportOrigin};
use crate::ui::styles;
use crate::ui::tabs::board::source_label;

/// Render the player profile screen
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(player) = app.profile() else {
        let paragraph = Paragraph::new(Span::styled("Player not found", styles::error_style()))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(15), Constraint::Min(8)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[0]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_bio(frame, app, player, top[0]);
    render_measurements(frame, app.dataset.measurements(player.player_id), top[1]);
    render_stats(frame, app, bottom[0]);
    render_reports(frame, app, player.player_id, bottom[1]);
}

fn field_line<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), styles::muted_style()),
        Span::raw(value),
    ])
}

fn render_bio(frame: &mut Frame, app: &App, player: &Player, area: Rect) {
    let placeholder = || NO_DATA.to_string();
    let precision = app.rank_precision();
    let summary = app.dataset.rankings().summary(player.player_id);

    let mut lines = vec![
        Line::from(Span::styled(player.display_name(), styles::title_style())),
        Line::from(""),
        field_line("Team:", player.team_line().unwrap_or_else(placeholder)),
        field_line("Born:", player.birth_date.clone().unwrap_or_else(placeholder)),
        field_line("Height:", player.height.map(format_height).unwrap_or_else(placeholder)),
        field_line(
            "Weight:",
            player.weight.map(|w| format!("{} lbs", format_number(w))).unwrap_or_else(placeholder),
        ),
        field_line("Hometown:", player.hometown().unwrap_or_else(placeholder)),
        field_line("High School:", player.high_school.clone().unwrap_or_else(placeholder)),
        field_line("Nationality:", player.nationality.clone().unwrap_or_else(placeholder)),
        Line::from(""),
    ];

    // Ranks in one line: composite first, then every source
    let mut rank_spans = vec![
        Span::styled("Composite ", styles::muted_style()),
        Span::styled(
            format_rank(summary.composite(precision), precision),
            styles::composite_style(),
        ),
    ];
    for source in app.dataset.schema().sources() {
        let rank = summary.classify(source);
        rank_spans.push(Span::styled(format!("  {} ", source_label(source)), styles::muted_style()));
        rank_spans.push(Span::styled(
            rank.raw.map(format_number).unwrap_or_else(placeholder),
            styles::deviation_style(rank.deviation),
        ));
    }
    lines.push(Line::from(rank_spans));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Profile ")
                .title_style(styles::muted_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(true)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_measurements(frame: &mut Frame, measurements: Option<&Measurements>, area: Rect) {
    // Missing measurements still show every row with placeholders
    let empty = Measurements::default();
    let measurements = measurements.unwrap_or(&empty);

    let height_shoes = measurements
        .height_shoes_display()
        .unwrap_or_else(|| NO_DATA.to_string());

    let mut rows = vec![Row::new(vec![
        Cell::from(Span::styled("Height (Shoes)", styles::muted_style())),
        Cell::from(height_shoes),
    ])];
    rows.extend(measurements.lines().into_iter().map(|line| {
        Row::new(vec![
            Cell::from(Span::styled(line.label, styles::muted_style())),
            Cell::from(line.display()),
        ])
    }));

    let table = Table::new(rows, [Constraint::Length(19), Constraint::Min(8)]).block(
        Block::default()
            .title(" Measurements ")
            .title_style(styles::muted_style())
            .borders(Borders::ALL)
            .border_style(styles::border_style(false)),
    );

    frame.render_widget(table, area);
}

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let seasons = app.profile_seasons();

    let title = match app.selected_season() {
        Some(season) => format!(
            " {} Stats - {} ({}/{}) ",
            app.stat_view.title(),
            season.label(),
            app.season_selection + 1,
            seasons.len()
        ),
        None => format!(" {} Stats ", app.stat_view.title()),
    };

    let block = Block::default()
        .title(title)
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    // View selector
    let mut spans = vec![Span::raw(" ")];
    for (i, view) in StatView::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        let label = format!("[{}]{}", &view.name()[..1], &view.name()[1..]);
        spans.push(Span::styled(label, styles::tab_style(*view == app.stat_view)));
    }
    if seasons.len() > 1 {
        spans.push(Span::styled("   [ ] season", styles::muted_style()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    if seasons.is_empty() {
        let paragraph = Paragraph::new(Span::styled(
            "No season stats available",
            styles::muted_style(),
        ));
        frame.render_widget(paragraph, chunks[1]);
        return;
    }

    let rows: Vec<Row> = app
        .stat_lines()
        .iter()
        .map(|line| {
            Row::new(vec![
                Cell::from(Span::styled(line.label, styles::muted_style())),
                Cell::from(format!("{:>8}", line.display())),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(20), Constraint::Length(10)]);
    frame.render_widget(table, chunks[1]);
}

fn render_reports(frame: &mut Frame, app: &App, player_id: i64, area: Rect) {
    let reports = app.reports_for(player_id);

    let mut lines = vec![];
    if reports.is_empty() {
        lines.push(Line::from(Span::styled(
            "No scouting reports yet",
            styles::muted_style(),
        )));
    }

    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        let (tag, tag_style) = match &report.origin {
            ReportOrigin::Official => (String::new(), styles::muted_style()),
            ReportOrigin::Session(age) => (format!("  (your note, {})", age), styles::success_style()),
        };
        lines.push(Line::from(vec![
            Span::styled(report.author.clone(), styles::highlight_style()),
            Span::styled(tag, tag_style),
        ]));
        lines.push(Line::from(Span::raw(report.body.clone())));
    }

    let title = format!(" Scouting Reports ({}) - [n]ew note ", reports.len());
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .title_style(styles::muted_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(false)),
        )
        .wrap(Wrap { trim: true })
        .scroll((app.reports_scroll, 0));

    frame.render_widget(paragraph, area);
}
