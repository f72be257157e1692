//! Command-line arguments and the non-interactive `--print-board` mode.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::{Serialize, Serializer};

use draftboard_core::board::{sort_players, Deviation, SortDirection, SortKey};
use draftboard_core::models::NO_DATA;
use draftboard_core::utils::{format_number, format_rank, truncate};
use draftboard_core::{Config, Dataset};

use crate::ui::tabs::board::source_label;

pub const USAGE: &str = "\
Usage: draftboard [--data PATH] [--print-board [SOURCE|composite] [asc|desc] [--json]]

Options:
  --data PATH      Dataset to load (overrides DRAFTBOARD_DATA and config)
  --print-board    Print the sorted big board to stdout and exit
  --json           With --print-board, print JSON instead of a table
  -h, --help       Show this message";

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Interactive,
    PrintBoard(PrintOptions),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrintOptions {
    pub sort: Option<String>,
    pub direction: SortDirection,
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub command: Command,
    pub data: Option<PathBuf>,
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut data = None;
    let mut print: Option<PrintOptions> = None;
    let mut positional: Vec<String> = Vec::new();
    let mut json = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                return Ok(CliArgs {
                    command: Command::Help,
                    data,
                })
            }
            "--data" => {
                let path = args.next().context("--data needs a path")?;
                data = Some(PathBuf::from(path));
            }
            "--print-board" => print = Some(PrintOptions::default()),
            "--json" => json = true,
            other if other.starts_with('-') => bail!("Unknown option: {}\n\n{}", other, USAGE),
            _ => positional.push(arg),
        }
    }

    let command = match print {
        Some(mut options) => {
            let mut positional = positional.into_iter();
            options.sort = positional.next();
            if let Some(direction) = positional.next() {
                options.direction = SortDirection::from_name(&direction);
            }
            if let Some(extra) = positional.next() {
                bail!("Unexpected argument: {}\n\n{}", extra, USAGE);
            }
            options.json = json;
            Command::PrintBoard(options)
        }
        None => {
            if let Some(extra) = positional.first() {
                bail!("Unexpected argument: {}\n\n{}", extra, USAGE);
            }
            Command::Interactive
        }
    };

    Ok(CliArgs { command, data })
}

// ============================================================================
// Board output
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SourceRank {
    pub source: String,
    pub rank: Option<f64>,
    #[serde(serialize_with = "serialize_deviation")]
    pub deviation: Deviation,
}

#[derive(Debug, Serialize)]
pub struct BoardRow {
    pub position: usize,
    pub player_id: i64,
    pub name: String,
    pub team: Option<String>,
    pub ranks: Vec<SourceRank>,
    pub composite: Option<f64>,
}

fn serialize_deviation<S: Serializer>(deviation: &Deviation, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(deviation_label(*deviation))
}

fn deviation_label(deviation: Deviation) -> &'static str {
    match deviation {
        Deviation::Above => "above",
        Deviation::Below => "below",
        Deviation::Near => "near",
        Deviation::Unranked => "unranked",
    }
}

/// Sorted board rows, one per player.
pub fn board_rows(dataset: &Dataset, config: &Config, options: &PrintOptions) -> Vec<BoardRow> {
    let rankings = dataset.rankings();
    let key = options
        .sort
        .as_deref()
        .map(|name| SortKey::resolve(name, dataset.schema()))
        .unwrap_or_default();

    let players = sort_players(
        dataset.players(),
        rankings,
        &key,
        options.direction,
        config.rank_precision,
    );

    players
        .into_iter()
        .enumerate()
        .map(|(i, player)| {
            let summary = rankings.summary(player.player_id);
            let ranks = dataset
                .schema()
                .sources()
                .iter()
                .map(|source| {
                    let cell = summary.classify(source);
                    SourceRank {
                        source: source.clone(),
                        rank: cell.raw,
                        deviation: cell.deviation,
                    }
                })
                .collect();

            BoardRow {
                position: i + 1,
                player_id: player.player_id,
                name: player.display_name(),
                team: player.current_team.clone(),
                ranks,
                composite: summary.composite(config.rank_precision),
            }
        })
        .collect()
}

/// Write the board to `out` as an aligned text table or as JSON.
pub fn print_board<W: Write>(
    out: &mut W,
    dataset: &Dataset,
    config: &Config,
    options: &PrintOptions,
) -> Result<()> {
    let rows = board_rows(dataset, config, options);

    if options.json {
        serde_json::to_writer_pretty(&mut *out, &rows)?;
        writeln!(out)?;
        return Ok(());
    }

    let precision = config.rank_precision;

    let mut header = format!("{:>3}  {:<24}", "#", "Player");
    for source in dataset.schema().sources() {
        header.push_str(&format!(" {:>12}", source_label(source)));
    }
    header.push_str(&format!(" {:>8}", "Avg"));
    writeln!(out, "{}", header)?;

    for row in &rows {
        let mut line = format!("{:>3}  {:<24}", row.position, truncate(&row.name, 24));
        for rank in &row.ranks {
            // Pad so numbers stay right-aligned with or without a marker
            let text = rank
                .rank
                .map(|r| format!("{}{:<1}", format_number(r), rank.deviation.marker()))
                .unwrap_or_else(|| format!("{} ", NO_DATA));
            line.push_str(&format!(" {:>12}", text));
        }
        line.push_str(&format!(" {:>8}", format_rank(row.composite, precision)));
        writeln!(out, "{}", line.trim_end())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<CliArgs> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    const SAMPLE: &str = r#"{
        "bio": [
            {"playerId": 1, "firstName": "Ada", "lastName": "Stone"},
            {"playerId": 2, "firstName": "Ben", "lastName": "Okafor"},
            {"playerId": 3, "firstName": "Cal", "lastName": "Reyes"}
        ],
        "scoutRankings": [
            {"playerId": 1, "Scout A": 3, "Scout B": 7, "Scout C": null},
            {"playerId": 2, "Scout A": 1, "Scout B": 2, "Scout C": 2},
            {"playerId": 3, "Scout A": null, "Scout B": null, "Scout C": null}
        ]
    }"#;

    // -------------------------------------------------------------------------
    // Argument parsing
    // -------------------------------------------------------------------------

    #[test]
    fn test_no_args_is_interactive() {
        let parsed = args(&[]).unwrap();
        assert_eq!(parsed.command, Command::Interactive);
        assert!(parsed.data.is_none());
    }

    #[test]
    fn test_print_board_with_key_and_direction() {
        let parsed = args(&["--print-board", "Scout B", "desc", "--data", "board.json"]).unwrap();
        assert_eq!(
            parsed.command,
            Command::PrintBoard(PrintOptions {
                sort: Some("Scout B".to_string()),
                direction: SortDirection::Descending,
                json: false,
            })
        );
        assert_eq!(parsed.data, Some(PathBuf::from("board.json")));
    }

    #[test]
    fn test_print_board_defaults() {
        let parsed = args(&["--print-board", "--json"]).unwrap();
        assert_eq!(
            parsed.command,
            Command::PrintBoard(PrintOptions {
                sort: None,
                direction: SortDirection::Ascending,
                json: true,
            })
        );
    }

    #[test]
    fn test_unknown_option_is_error() {
        assert!(args(&["--frobnicate"]).is_err());
        assert!(args(&["stray"]).is_err());
        assert!(args(&["--data"]).is_err());
    }

    #[test]
    fn test_help() {
        assert_eq!(args(&["-h"]).unwrap().command, Command::Help);
    }

    // -------------------------------------------------------------------------
    // Board output
    // -------------------------------------------------------------------------

    #[test]
    fn test_board_rows_composite_order() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        let rows = board_rows(&dataset, &Config::default(), &PrintOptions::default());

        let ids: Vec<i64> = rows.iter().map(|r| r.player_id).collect();
        // 2 -> 1.67, 1 -> 5.0, 3 has no ranks
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(rows[0].composite, Some(1.67));
        assert_eq!(rows[2].composite, None);
        assert_eq!(rows[1].ranks[0].deviation, Deviation::Above);
        assert_eq!(rows[1].ranks[1].deviation, Deviation::Below);
        assert_eq!(rows[1].ranks[2].deviation, Deviation::Unranked);
    }

    #[test]
    fn test_print_board_table() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        let options = PrintOptions {
            sort: Some("Scout A".to_string()),
            ..Default::default()
        };
        let mut out = Vec::new();
        print_board(&mut out, &dataset, &Config::default(), &options).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Scout A"));
        assert!(lines[1].contains("Ben Okafor"));
        assert!(lines[2].contains("Ada Stone"));
        assert!(lines[2].contains("3+"));
        assert!(lines[2].contains("7-"));
        assert!(lines[3].contains("Cal Reyes"));
        assert!(lines[3].trim_end().ends_with(NO_DATA));
    }

    #[test]
    fn test_print_board_json() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        let options = PrintOptions {
            json: true,
            ..Default::default()
        };
        let mut out = Vec::new();
        print_board(&mut out, &dataset, &Config::default(), &options).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["player_id"], 2);
        assert_eq!(rows[0]["ranks"][0]["source"], "Scout A");
        assert_eq!(rows[1]["ranks"][0]["deviation"], "above");
        assert_eq!(rows[1]["ranks"][1]["deviation"], "below");
        assert_eq!(rows[1]["ranks"][2]["deviation"], "unranked");
        assert_eq!(rows[0]["ranks"][1]["deviation"], "near");
        assert!(rows[2]["composite"].is_null());
    }
}
