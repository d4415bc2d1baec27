//! Sheet Splice CLI - add, read and find rows in CSV worksheets

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sheet_splice::prelude::*;
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "splice")]
#[command(
    author,
    version,
    about = "Insert, overwrite and query rows of CSV worksheets"
)]
struct Cli {
    /// Print the full outcome map as JSON
    #[arg(long, global = true)]
    json: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Worksheet every command works on
#[derive(Args)]
struct Target {
    /// CSV file; its worksheet is named after the file stem
    #[arg(short, long)]
    file: String,

    /// Worksheet name (default: the file stem)
    #[arg(short, long, default_value = "")]
    sheet: String,
}

impl Target {
    fn worksheet_name(&self) -> String {
        if !self.sheet.trim().is_empty() {
            return self.sheet.clone();
        }
        std::path::Path::new(&self.file)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Add rows, inserting by default
    Add {
        #[command(flatten)]
        target: Target,

        /// Rows to write, e.g. "1,2,3|4,5,6"
        data: String,

        /// Header cells written to row 0
        #[arg(long, default_value = "")]
        header: String,

        /// Target rows, e.g. "1:3,7" (default: append)
        #[arg(short, long, default_value = "")]
        rows: String,

        /// Target columns (default: from column 0)
        #[arg(short, long, default_value = "")]
        columns: String,

        /// Row delimiter (default: |)
        #[arg(long, default_value = "")]
        row_delimiter: String,

        /// Column delimiter (default: ,)
        #[arg(long, default_value = "")]
        column_delimiter: String,

        /// Write over existing rows instead of inserting
        #[arg(long, default_value = "")]
        overwrite: String,

        /// Carry row heights along with shifted rows
        #[arg(long)]
        copy_row_height: bool,
    },

    /// Print a block of cells
    Get {
        #[command(flatten)]
        target: Target,

        /// Whether the first row is a header (yes/no)
        #[arg(long, default_value = "")]
        has_header: String,

        /// Index of the first row, header included
        #[arg(long, default_value = "")]
        first_row: String,

        /// Rows to read (default: all data rows)
        #[arg(short, long, default_value = "")]
        rows: String,

        /// Columns to read (default: all used columns)
        #[arg(short, long, default_value = "")]
        columns: String,

        /// Row delimiter of the output (default: |)
        #[arg(long, default_value = "")]
        row_delimiter: String,

        /// Column delimiter of the output (default: ,)
        #[arg(long, default_value = "")]
        column_delimiter: String,
    },

    /// Print the indices of rows matching a condition
    Find {
        #[command(flatten)]
        target: Target,

        /// Column to query
        column: String,

        /// One of ==, !=, <, <=, >, >= (default: ==)
        #[arg(long, default_value = "")]
        op: String,

        /// Value to compare with (default: empty cell)
        #[arg(long, default_value = "")]
        value: String,

        /// Whether the first row is a header (yes/no)
        #[arg(long, default_value = "")]
        has_header: String,

        /// Index of the first row, header included
        #[arg(long, default_value = "")]
        first_row: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: Cli) -> Result<bool> {
    let store = CsvStore::new();
    let outcome = match cli.command {
        Commands::Add {
            target,
            data,
            header,
            rows,
            columns,
            row_delimiter,
            column_delimiter,
            overwrite,
            copy_row_height,
        } => {
            let input = AddDataInput {
                worksheet_name: target.worksheet_name(),
                file_path: target.file,
                header_data: header,
                row_data: data,
                row_index: rows,
                column_index: columns,
                row_delimiter,
                column_delimiter,
                overwrite_data: overwrite,
            };
            let options = ShiftOptions {
                copy_row_height,
                ..ShiftOptions::default()
            };
            sheet_splice::add_data_with_options(&store, &input, options)
        }
        Commands::Get {
            target,
            has_header,
            first_row,
            rows,
            columns,
            row_delimiter,
            column_delimiter,
        } => get_cell(
            &store,
            &GetCellInput {
                worksheet_name: target.worksheet_name(),
                file_path: target.file,
                has_header,
                first_row_index: first_row,
                row_index: rows,
                column_index: columns,
                row_delimiter,
                column_delimiter,
            },
        ),
        Commands::Find {
            target,
            column,
            op,
            value,
            has_header,
            first_row,
        } => row_index_by_condition(
            &store,
            &RowIndexByConditionInput {
                worksheet_name: target.worksheet_name(),
                file_path: target.file,
                has_header,
                first_row_index: first_row,
                column_index_to_query: column,
                operator: op,
                value,
            },
        ),
    };

    report(outcome, cli.json)
}

fn report(outcome: Outcome, json: bool) -> Result<bool> {
    let success = outcome.is_success();
    log::debug!("outcome {}: {:?}", outcome.return_code, outcome.exception);
    let mut stdout = io::stdout().lock();

    if json {
        let text = serde_json::to_string_pretty(&outcome.into_map())
            .context("Failed to encode outcome")?;
        writeln!(stdout, "{}", text).context("Failed to write to stdout")?;
    } else if success {
        writeln!(stdout, "{}", outcome.return_result).context("Failed to write to stdout")?;
        for (key, value) in &outcome.outputs {
            eprintln!("{}: {}", key, value);
        }
    } else {
        eprintln!("Error: {}", outcome.return_result);
    }

    Ok(success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_defaults_to_file_stem() {
        let cli = Cli::try_parse_from(["splice", "get", "--file", "data/orders.csv"]).unwrap();
        match cli.command {
            Commands::Get { target, .. } => assert_eq!(target.worksheet_name(), "orders"),
            _ => panic!("expected get"),
        }
    }

    #[test]
    fn test_add_arguments() {
        let cli = Cli::try_parse_from([
            "splice", "-vv", "add", "-f", "a.csv", "1,2|3,4", "--rows", "1:2", "--json",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Add {
                target, data, rows, overwrite, ..
            } => {
                assert_eq!(target.worksheet_name(), "a");
                assert_eq!(data, "1,2|3,4");
                assert_eq!(rows, "1:2");
                assert_eq!(overwrite, "");
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_find_requires_column() {
        assert!(Cli::try_parse_from(["splice", "find", "-f", "a.csv"]).is_err());
    }
}
