use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use draftboard_core::board::{RankSummary, SortKey};
use draftboard_core::models::{Player, NO_DATA};
use draftboard_core::utils::{format_number, format_rank, truncate};

use crate::app::App;
use crate::ui::styles;

/// Widest a source column header is allowed to get.
const SOURCE_LABEL_WIDTH: usize = 12;

/// Short column label for a ranking source: "ESPN Rank" becomes "ESPN".
pub fn source_label(source: &str) -> String {
    let trimmed = source
        .strip_suffix(" Rank")
        .or_else(|| source.strip_suffix(" rank"))
        .unwrap_or(source)
        .trim();
    truncate(trimmed, SOURCE_LABEL_WIDTH)
}

/// Render the big board - ranking table plus a preview of the selected row
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    render_board_table(frame, app, chunks[0]);
    render_preview(frame, app, chunks[1]);
}

fn render_board_table(frame: &mut Frame, app: &App, area: Rect) {
    let players = app.get_sorted_players();
    let rankings = app.dataset.rankings();
    let sources = app.dataset.schema().sources();
    let precision = app.rank_precision();

    // Build header with sort indicators
    let sort_indicator = |key: &SortKey| {
        if &app.sort_key == key {
            app.sort_direction.indicator()
        } else {
            ""
        }
    };

    let mut header_cells = vec![Cell::from("#"), Cell::from("Player")];
    for (i, source) in sources.iter().enumerate() {
        let key = SortKey::Source(source.clone());
        header_cells.push(Cell::from(format!(
            "[{}]{}{}",
            i + 1,
            source_label(source),
            sort_indicator(&key)
        )));
    }
    header_cells.push(Cell::from(format!("[a]Avg{}", sort_indicator(&SortKey::Composite))));

    let header = Row::new(header_cells)
        .style(styles::title_style())
        .height(1);

    // Build rows
    let rows: Vec<Row> = players
        .iter()
        .enumerate()
        .map(|(i, player)| {
            let style = if i == app.board_selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };

            let summary = rankings.summary(player.player_id);

            let mut cells = vec![
                Cell::from(format!("{:>3}", i + 1)),
                Cell::from(player.board_name()),
            ];
            for source in sources {
                let rank = summary.classify(source);
                let text = rank.raw.map(format_number).unwrap_or_else(|| NO_DATA.to_string());
                cells.push(Cell::from(Span::styled(
                    format!("{:>4}", text),
                    styles::deviation_style(rank.deviation),
                )));
            }
            cells.push(Cell::from(Span::styled(
                format_rank(summary.composite(precision), precision),
                styles::composite_style(),
            )));

            Row::new(cells).style(style)
        })
        .collect();

    let mut widths = vec![Constraint::Length(4), Constraint::Min(18)];
    widths.extend(sources.iter().map(|_| Constraint::Length(SOURCE_LABEL_WIDTH as u16 + 6)));
    widths.push(Constraint::Length(10));

    let title = if app.search_query.is_empty() {
        format!(" Big Board ({}) - sorted by {} ", players.len(), app.sort_key)
    } else {
        format!(
            " Big Board ({} of {}) - \"{}\" ",
            players.len(),
            app.dataset.players().len(),
            app.search_query
        )
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .title_style(styles::muted_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(true)),
        )
        .row_highlight_style(styles::selected_style());

    let mut state = TableState::default();
    state.select(Some(app.board_selection));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_preview(frame: &mut Frame, app: &App, area: Rect) {
    let content = match app.selected_player() {
        Some(player) => {
            let summary = app.dataset.rankings().summary(player.player_id);
            preview_lines(app, player, &summary)
        }
        None => vec![Line::from(Span::styled(
            "No players match",
            styles::muted_style(),
        ))],
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Preview ")
                .title_style(styles::muted_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(false)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn preview_lines<'a>(app: &App, player: &Player, summary: &RankSummary<'_>) -> Vec<Line<'a>> {
    let precision = app.rank_precision();
    let mut lines = vec![
        Line::from(Span::styled(player.display_name(), styles::title_style())),
        Line::from(Span::raw(player.team_line().unwrap_or_else(|| NO_DATA.to_string()))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Composite: ", styles::muted_style()),
            Span::styled(
                format_rank(summary.composite(precision), precision),
                styles::composite_style(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Ranked by: ", styles::muted_style()),
            Span::raw(format!(
                "{} of {}",
                summary.count(),
                app.dataset.schema().len()
            )),
        ]),
        Line::from(""),
    ];

    for source in app.dataset.schema().sources() {
        let rank = summary.classify(source);
        let text = rank.raw.map(format_number).unwrap_or_else(|| NO_DATA.to_string());
        lines.push(Line::from(vec![
            Span::styled(format!("{:<14}", source_label(source)), styles::muted_style()),
            Span::styled(
                format!("{:>4} {}", text, rank.deviation.marker()),
                styles::deviation_style(rank.deviation),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter to open profile",
        styles::muted_style(),
    )));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_label_strips_rank_suffix() {
        assert_eq!(source_label("ESPN Rank"), "ESPN");
        assert_eq!(source_label("Scout A"), "Scout A");
    }

    #[test]
    fn test_source_label_truncates_long_names() {
        let label = source_label("Kevin O'Connor Draft Board Rank");
        assert!(label.chars().count() <= SOURCE_LABEL_WIDTH);
        assert!(label.ends_with("..."));
    }
}
