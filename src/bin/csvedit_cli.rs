//! CLI tool for csvedit - loads a CSV file, applies edits, writes the result
//!
//! Usage:
//!   csvedit_cli data.csv                              # Echo normalized CSV to stdout
//!   csvedit_cli data.csv -e set:1,1,26 -o out.csv     # Edit a cell, write a file
//!   csvedit_cli data.csv -e add -e delete:0 --json    # Print the grid as JSON
//!
//! Edits are applied in command-line order.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use serde::Serialize;

use csvedit::config::EditorConfig;
use csvedit::{CsvEditError, CsvEditor, Grid, GridIssue};

#[derive(Parser, Debug)]
#[command(name = "csvedit_cli", version, about = "Edit a CSV file from the command line")]
struct Args {
    /// CSV file to load
    input: PathBuf,

    /// Edit to apply: `set:ROW,COL,VALUE`, `add`, or `delete:ROW` (repeatable)
    #[arg(short = 'e', long = "edit", value_name = "EDIT")]
    edits: Vec<Edit>,

    /// Write CSV here instead of stdout
    #[arg(short = 'o', long, value_name = "FILE", conflicts_with = "download")]
    output: Option<PathBuf>,

    /// Write CSV to the configured download file name in the current directory
    #[arg(long)]
    download: bool,

    /// Print the grid and its issues as JSON instead of CSV
    #[arg(long)]
    json: bool,

    /// JSON editor configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Drop trailing carriage returns (CRLF input)
    #[arg(long)]
    strip_cr: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

/// One edit operation.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Edit {
    Set { row: usize, col: usize, value: String },
    Add,
    Delete { row: usize },
}

impl FromStr for Edit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (op, rest) = s.split_once(':').unwrap_or((s, ""));
        match op {
            "add" if rest.is_empty() => Ok(Edit::Add),
            "delete" => Ok(Edit::Delete {
                row: parse_index(rest, "row")?,
            }),
            "set" => {
                let mut parts = rest.splitn(3, ',');
                let row = parse_index(parts.next().unwrap_or_default(), "row")?;
                let col = parse_index(parts.next().unwrap_or_default(), "column")?;
                let value = parts
                    .next()
                    .ok_or_else(|| format!("missing value in {s:?}"))?;
                Ok(Edit::Set {
                    row,
                    col,
                    value: value.to_string(),
                })
            }
            _ => Err(format!(
                "unknown edit {s:?} (expected set:ROW,COL,VALUE, add, or delete:ROW)"
            )),
        }
    }
}

fn parse_index(s: &str, what: &str) -> Result<usize, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("invalid {what} index {s:?}"))
}

#[derive(Serialize)]
struct JsonReport<'a> {
    grid: &'a Grid,
    issues: Vec<GridIssue>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    csvedit::logging::init(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> csvedit::Result<()> {
    let mut config = match &args.config {
        Some(path) => EditorConfig::from_json_file(path)?,
        None => EditorConfig::default(),
    };
    if args.strip_cr {
        config.strip_carriage_return = true;
    }

    let mut editor = CsvEditor::new(config)?;
    let file_name = args
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let bytes = fs::read(&args.input)
        .map_err(|e| CsvEditError::Read(format!("{}: {e}", args.input.display())))?;
    editor.load_bytes(&file_name, &bytes)?;

    for edit in &args.edits {
        match edit {
            Edit::Set { row, col, value } => editor.edit_cell(*row, *col, value)?,
            Edit::Add => editor.add_row()?,
            Edit::Delete { row } => editor.delete_row(*row)?,
        };
    }

    if args.json {
        let grid = editor.grid().ok_or(CsvEditError::NotLoaded)?;
        let report = JsonReport {
            grid,
            issues: grid.issues(),
        };
        let json = serde_json::to_string_pretty(&report)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(json.as_bytes())?;
        writeln!(stdout)?;
        return Ok(());
    }

    let download = editor.export()?;
    let target = if args.download {
        Some(PathBuf::from(&download.file_name))
    } else {
        args.output.clone()
    };

    match target {
        Some(path) => {
            fs::write(&path, download.contents.as_bytes())?;
            eprintln!("Written: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(download.contents.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
