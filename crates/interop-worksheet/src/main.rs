use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use interop_worksheet::commands::{self, BatchOutcome, GroupView, WorksheetView};
use interop_worksheet::config::{self, WorksheetConfig};
use interop_worksheet::state::WorksheetState;

#[derive(Debug, Parser)]
#[command(
    name = "interop-worksheet",
    version,
    about = "Interoperability needs analysis worksheet: pick a plan and integrity focus, export the document"
)]
struct Cli {
    /// Config file (defaults to the user config directory).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print both selection tables with the current choices.
    Show(SelectionArgs),
    /// Write the worksheet document with the given choices.
    Export {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Append a table of all interface planning options.
        #[arg(long)]
        appendix: bool,
        /// Output path (defaults to the configured output directory).
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// List the option identifiers of both tables.
    Ids,
    /// Write a config file with default settings.
    InitConfig,
}

/// Repeated values form one observed checkbox batch.
#[derive(Debug, Args)]
struct SelectionArgs {
    /// Checked interface-planning row.
    #[arg(long = "plan", value_name = "ID")]
    plan: Vec<String>,
    /// Checked integrity/security row.
    #[arg(long = "integrity", value_name = "ID")]
    integrity: Vec<String>,
    /// Select the integrity area recommended for the chosen plan.
    #[arg(long)]
    use_recommended: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let config = config::load_config(&config_path)?;

    match cli.command {
        Command::Show(selection) => {
            let mut state = WorksheetState::new(config.include_appendix);
            let outcome = apply_selection(&mut state, &selection);
            print_outcome(&outcome);
        }
        Command::Export {
            selection,
            appendix,
            output,
        } => {
            let mut state = WorksheetState::new(config.include_appendix || appendix);
            let outcome = apply_selection(&mut state, &selection);
            print_outcome(&outcome);

            let path = output.unwrap_or_else(|| config.output_path());
            commands::export_docx(&state, &config.styles, &path)?;
            println!("Wrote {}", path.display());
        }
        Command::Ids => {
            let state = WorksheetState::default();
            for group in [&state.plan, &state.integrity] {
                println!("{}:", group.name());
                for option in group.options() {
                    println!("  {}", option.id);
                }
            }
        }
        Command::InitConfig => {
            config::save_config(&WorksheetConfig::default(), &config_path)?;
            println!("Wrote {}", config_path.display());
        }
    }

    Ok(())
}

fn apply_selection(state: &mut WorksheetState, args: &SelectionArgs) -> BatchOutcome {
    commands::apply_batch(state, &args.plan, &args.integrity, args.use_recommended)
}

fn print_outcome(outcome: &BatchOutcome) {
    for warning in &outcome.warnings {
        eprintln!("warning: {warning}");
    }
    print_view(&outcome.view);
}

fn print_view(view: &WorksheetView) {
    println!("1.7 Interface Planning");
    print_group(&view.plan);
    println!("{}", view.plan_banner);
    println!();

    println!("2.3 Integrity/Security Focus");
    print_group(&view.integrity);
    if view.integrity.selection.is_none()
        && let Some(area) = &view.recommended_integrity
    {
        println!("Recommended based on your selected gap: {area}");
    }
}

fn print_group(group: &GroupView) {
    for row in &group.rows {
        let mark = if row.selected {
            "[x]"
        } else if row.recommended {
            "[*]"
        } else {
            "[ ]"
        };
        let title = row.columns.first().map(|c| c.value.as_str()).unwrap_or_default();
        println!("  {mark} {title}  ({})", row.id);
    }
}
