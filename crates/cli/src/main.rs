// Seatplan CLI - guest list in, seating chart out

mod exit_codes;
mod report;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use seatplan_config::Settings;
use seatplan_engine::{
    arrange_seating, detect_oversized_groups, ArrangeOptions, OversizedAction,
    OversizedDecision, ParentPreference,
};
use seatplan_io::{csv, export, xlsx, GuestImport};

use exit_codes::{EXIT_CONSTRAINT, EXIT_ERROR, EXIT_INPUT, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "seatplan")]
#[command(about = "Wedding seating arrangement from a guest list")]
#[command(long_version = long_version())]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Arrange guests into tables and print the seating chart
    #[command(after_help = "\
Examples:
  seatplan arrange guests.xlsx
  seatplan arrange guests.xlsx --table-size 12
  seatplan arrange guests.xlsx --father knight --mother separate
  seatplan arrange guests.xlsx --knight-group Army --max-knights 2
  seatplan arrange guests.xlsx --force-knight 'Work friends'
  seatplan arrange guests.csv --format json | jq .bride.tables
  seatplan arrange guests.xlsx -o seating.xlsx")]
    Arrange {
        /// Guest list file (.xlsx, .xls, .xlsb, .ods, .csv, .tsv)
        input: PathBuf,

        /// Seats per regular table
        #[arg(long, value_name = "N")]
        table_size: Option<u32>,

        /// Father's family seating (separate, together, knight)
        #[arg(long, value_name = "PREF")]
        father: Option<String>,

        /// Mother's family seating (separate, together, knight)
        #[arg(long, value_name = "PREF")]
        mother: Option<String>,

        /// Group to carve 22-seat knight tables from before packing
        #[arg(long, value_name = "GROUP")]
        knight_group: Option<String>,

        /// Cap on carved knight tables
        #[arg(long, value_name = "N")]
        max_knights: Option<u32>,

        /// Seat this oversized group at a single knight table. Repeatable.
        #[arg(long, value_name = "GROUP")]
        force_knight: Vec<String>,

        /// Skip the minimum-occupancy repair pass
        #[arg(long)]
        no_min_check: bool,

        /// Report format
        #[arg(long, default_value = "table")]
        format: ReportFormat,

        /// Also write the chart as an xlsx workbook
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,

        /// Suppress ingestion warnings
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// List groups too large for one regular table
    #[command(after_help = "\
Examples:
  seatplan oversized guests.xlsx
  seatplan oversized guests.xlsx --table-size 12 --format json")]
    Oversized {
        /// Guest list file (.xlsx, .xls, .xlsb, .ods, .csv, .tsv)
        input: PathBuf,

        /// Seats per regular table
        #[arg(long, value_name = "N")]
        table_size: Option<u32>,

        /// Report format
        #[arg(long, default_value = "table")]
        format: ReportFormat,
    },

    /// Dump normalized guest records (ingestion check)
    #[command(after_help = "\
Examples:
  seatplan guests guests.xlsx
  seatplan guests guests.csv --format json")]
    Guests {
        /// Guest list file (.xlsx, .xls, .xlsb, .ods, .csv, .tsv)
        input: PathBuf,

        /// Report format
        #[arg(long, default_value = "table")]
        format: ReportFormat,

        /// Suppress ingestion warnings
        #[arg(long, short = 'q')]
        quiet: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Table,
    Json,
}

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        " (", env!("GIT_COMMIT_HASH"), ")",
        "\nengine: seatplan-engine ", env!("CARGO_PKG_VERSION"),
    )
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => {
            // No subcommand = show help
            eprintln!("Usage: seatplan <command> [options]");
            eprintln!("       seatplan --help for more information");
            Ok(())
        }
        Some(Commands::Arrange {
            input,
            table_size,
            father,
            mother,
            knight_group,
            max_knights,
            force_knight,
            no_min_check,
            format,
            output,
            quiet,
        }) => cmd_arrange(
            input, table_size, father, mother, knight_group, max_knights,
            force_knight, no_min_check, format, output, quiet,
        ),
        Some(Commands::Oversized { input, table_size, format }) => {
            cmd_oversized(input, table_size, format)
        }
        Some(Commands::Guests { input, format, quiet }) => cmd_guests(input, format, quiet),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn input(msg: impl Into<String>) -> Self {
        Self { code: EXIT_INPUT, message: msg.into(), hint: None }
    }

    pub fn general(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    /// Constraint failures carry no message here; the per-side report
    /// already printed the details.
    pub fn constraint() -> Self {
        Self { code: EXIT_CONSTRAINT, message: String::new(), hint: None }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

// ============================================================================
// arrange
// ============================================================================

fn cmd_arrange(
    input: PathBuf,
    table_size: Option<u32>,
    father: Option<String>,
    mother: Option<String>,
    knight_group: Option<String>,
    max_knights: Option<u32>,
    force_knight: Vec<String>,
    no_min_check: bool,
    format: ReportFormat,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    let settings = Settings::load();
    let options = apply_arrange_flags(
        settings.arrange_options(),
        table_size,
        father.as_deref(),
        mother.as_deref(),
        knight_group,
        max_knights,
        &force_knight,
        no_min_check,
    )?;

    let import = read_guests(&input)?;
    print_warnings(&import, quiet);

    let arrangement = arrange_seating(import.guests, &options);

    match format {
        ReportFormat::Table => print!("{}", report::arrangement(&arrangement)),
        ReportFormat::Json => {
            println!("{}", export::json(&arrangement).map_err(CliError::general)?)
        }
    }

    // Explicit -o wins; otherwise a configured output dir gets a
    // timestamped workbook.
    let export_path = output.or_else(|| {
        settings
            .output_dir
            .as_deref()
            .map(|dir| export::timestamped_path(Path::new(dir), "seating", "xlsx"))
    });
    if let Some(path) = &export_path {
        export::xlsx(&arrangement, path).map_err(CliError::general)?;
        if !quiet {
            eprintln!("wrote {}", path.display());
        }
    }

    if arrangement.is_ok() {
        Ok(())
    } else {
        Err(CliError::constraint())
    }
}

/// Layer CLI flags over the settings-derived options.
fn apply_arrange_flags(
    mut options: ArrangeOptions,
    table_size: Option<u32>,
    father: Option<&str>,
    mother: Option<&str>,
    knight_group: Option<String>,
    max_knights: Option<u32>,
    force_knight: &[String],
    no_min_check: bool,
) -> Result<ArrangeOptions, CliError> {
    if let Some(size) = table_size {
        if size == 0 {
            return Err(CliError::args("--table-size must be at least 1"));
        }
        options.table_size = size;
    }
    if let Some(pref) = father {
        options.father_preference = parse_preference("--father", pref)?;
    }
    if let Some(pref) = mother {
        options.mother_preference = parse_preference("--mother", pref)?;
    }
    if knight_group.is_some() {
        options.knight_group = knight_group;
    }
    if let Some(max) = max_knights {
        options.max_knight_tables = max;
    }
    for group in force_knight {
        options.oversized_decisions.push(OversizedDecision {
            group: group.clone(),
            action: OversizedAction::ForceKnightTable,
        });
    }
    if no_min_check {
        options.enforce_minimum = false;
    }
    Ok(options)
}

fn parse_preference(flag: &str, value: &str) -> Result<ParentPreference, CliError> {
    ParentPreference::parse(value).ok_or_else(|| {
        CliError::args(format!("{} got unknown preference '{}'", flag, value))
            .with_hint("expected one of: separate, together, knight")
    })
}

// ============================================================================
// oversized
// ============================================================================

fn cmd_oversized(
    input: PathBuf,
    table_size: Option<u32>,
    format: ReportFormat,
) -> Result<(), CliError> {
    let settings = Settings::load();
    let options = settings.arrange_options();
    let table_size = table_size.unwrap_or(options.table_size);
    if table_size == 0 {
        return Err(CliError::args("--table-size must be at least 1"));
    }

    let import = read_guests(&input)?;
    print_warnings(&import, false);

    let groups = detect_oversized_groups(&import.guests, table_size, &options.parents);

    match format {
        ReportFormat::Table => print!("{}", report::oversized(&groups)),
        ReportFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&groups).map_err(|e| CliError::general(e.to_string()))?
        ),
    }
    Ok(())
}

// ============================================================================
// guests
// ============================================================================

fn cmd_guests(input: PathBuf, format: ReportFormat, quiet: bool) -> Result<(), CliError> {
    let import = read_guests(&input)?;
    print_warnings(&import, quiet);

    match format {
        ReportFormat::Table => print!("{}", report::guests(&import.guests)),
        ReportFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&import.guests)
                .map_err(|e| CliError::general(e.to_string()))?
        ),
    }
    if !quiet {
        eprintln!("{}", import.summary());
    }
    Ok(())
}

// ============================================================================
// shared input handling
// ============================================================================

fn read_guests(path: &Path) -> Result<GuestImport, CliError> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    let result = match extension.as_str() {
        "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => xlsx::import(path),
        "csv" | "tsv" | "txt" => csv::import(path),
        _ => {
            return Err(CliError::input(format!(
                "cannot tell the guest-list format of '{}'",
                path.display()
            ))
            .with_hint("supported extensions: .xlsx, .xls, .xlsb, .ods, .csv, .tsv"))
        }
    };

    result.map_err(CliError::input)
}

fn print_warnings(import: &GuestImport, quiet: bool) {
    if quiet {
        return;
    }
    for warning in &import.warnings {
        eprintln!("warning: {}", warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrange_flags_parse() {
        let cli = Cli::try_parse_from([
            "seatplan", "arrange", "guests.xlsx",
            "--table-size", "12",
            "--father", "knight",
            "--force-knight", "Army",
            "--force-knight", "Work",
            "--no-min-check",
        ])
        .unwrap();

        let Some(Commands::Arrange {
            input, table_size, father, force_knight, no_min_check, format, ..
        }) = cli.command
        else {
            panic!("expected arrange");
        };
        assert_eq!(input, PathBuf::from("guests.xlsx"));
        assert_eq!(table_size, Some(12));
        assert_eq!(father.as_deref(), Some("knight"));
        assert_eq!(force_knight, vec!["Army".to_string(), "Work".to_string()]);
        assert!(no_min_check);
        assert_eq!(format, ReportFormat::Table);
    }

    #[test]
    fn test_bad_format_value_rejected() {
        let result = Cli::try_parse_from(["seatplan", "arrange", "g.xlsx", "--format", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flag_overrides_layer_over_settings() {
        let base = ArrangeOptions::default();
        let options = apply_arrange_flags(
            base,
            Some(12),
            Some("knight"),
            None,
            Some("Army".to_string()),
            Some(2),
            &["Work".to_string()],
            true,
        )
        .unwrap();

        assert_eq!(options.table_size, 12);
        assert_eq!(options.father_preference, ParentPreference::Knight);
        assert_eq!(options.mother_preference, ParentPreference::Separate);
        assert_eq!(options.knight_group.as_deref(), Some("Army"));
        assert_eq!(options.max_knight_tables, 2);
        assert!(!options.enforce_minimum);
        assert_eq!(options.decision_for("Work"), Some(OversizedAction::ForceKnightTable));
    }

    #[test]
    fn test_unknown_preference_is_usage_error() {
        let err = apply_arrange_flags(
            ArrangeOptions::default(),
            None,
            Some("banquet"),
            None,
            None,
            None,
            &[],
            false,
        )
        .unwrap_err();
        assert_eq!(err.code, EXIT_USAGE);
        assert!(err.hint.is_some());
    }

    #[test]
    fn test_zero_table_size_is_usage_error() {
        let err = apply_arrange_flags(
            ArrangeOptions::default(),
            Some(0),
            None,
            None,
            None,
            None,
            &[],
            false,
        )
        .unwrap_err();
        assert_eq!(err.code, EXIT_USAGE);
    }

    #[test]
    fn test_unknown_extension_is_input_error() {
        let err = read_guests(Path::new("guests.pdf")).unwrap_err();
        assert_eq!(err.code, EXIT_INPUT);
        assert!(err.hint.is_some());
    }

    #[test]
    fn test_ods_and_xlsb_route_to_the_excel_reader() {
        // Nonexistent files: the Excel reader fails on open, which proves
        // the extension was routed rather than rejected as unknown
        for name in ["guests.ods", "guests.xlsb"] {
            let err = read_guests(Path::new(name)).unwrap_err();
            assert_eq!(err.code, EXIT_INPUT);
            assert!(
                !err.message.contains("cannot tell the guest-list format"),
                "{} was not routed: {}",
                name,
                err.message
            );
        }
    }
}
