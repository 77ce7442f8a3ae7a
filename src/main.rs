use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;

use snapview::record::PipelineType;
use snapview::timefmt::FormatConfig;
use snapview::{Config, Snapshot};

#[derive(Parser, Debug)]
#[command(name = "snapview")]
#[command(author, version, about = "Terminal snapshot console for telemetry records")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Snapshot JSON file to browse
    snapshot: Option<PathBuf>,

    /// Telemetry tab to open on (default from config, else logs)
    #[arg(short, long, value_enum)]
    pipeline: Option<PipelineType>,

    /// Timezone for timestamps: "local", "utc", or a fixed offset like +05:30
    #[arg(short, long)]
    timezone: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print snapshot rows to stdout without starting the TUI
    Dump {
        /// Snapshot JSON file to render
        snapshot: PathBuf,

        /// Telemetry type to render
        #[arg(short, long, value_enum)]
        pipeline: Option<PipelineType>,

        /// Expand every row to its full detail block
        #[arg(long)]
        open: bool,

        /// Timezone for timestamps
        #[arg(short, long)]
        timezone: Option<String>,
    },
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    match args.command {
        Some(Command::Completion { shell }) => {
            let mut cmd = Args::command();
            clap_complete::generate(shell, &mut cmd, "snapview", &mut io::stdout());
            Ok(())
        }
        Some(Command::Dump {
            snapshot,
            pipeline,
            open,
            timezone,
        }) => {
            let format = resolve_format(&config, timezone.as_deref())?;
            let pipeline = resolve_pipeline(&config, pipeline);
            let snapshot = Snapshot::load(&snapshot)?;
            let stdout = io::stdout();
            snapview::dump::write_rows(&mut stdout.lock(), &snapshot, pipeline, open, &format)?;
            Ok(())
        }
        None => {
            let Some(path) = args.snapshot else {
                return Err("missing snapshot file (see --help)".into());
            };
            let format = resolve_format(&config, args.timezone.as_deref())?;
            let pipeline = resolve_pipeline(&config, args.pipeline);
            snapview::tui::run(path, pipeline, format)
        }
    }
}

fn resolve_format(
    config: &Config,
    flag: Option<&str>,
) -> Result<FormatConfig, Box<dyn std::error::Error>> {
    let tz = match flag {
        Some(raw) => raw.parse()?,
        None => config.timezone()?,
    };
    Ok(FormatConfig { tz })
}

fn resolve_pipeline(config: &Config, flag: Option<PipelineType>) -> PipelineType {
    flag.or(config.console.pipeline)
        .unwrap_or(PipelineType::Logs)
}
