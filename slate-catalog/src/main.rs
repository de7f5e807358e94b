//! slate-catalog: render the button stories into a static gallery.

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use simplelog::{Config, LevelFilter, WriteLogger};
use slate::catalog::ButtonArgs;
use slate::stories;
use slate::{Size, Variant};
use slate_catalog::{CatalogConfig, CatalogError, gallery, paths};

#[derive(Parser)]
#[command(name = "slate-catalog")]
#[command(about = "Render the button story catalog")]
#[command(version)]
struct Cli {
    /// Log verbosity
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    /// Log file (defaults to latest.log in the cache directory)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write index.html and meta.json
    Build {
        /// Output directory
        #[arg(short, long, default_value = "catalog")]
        out: PathBuf,
        /// Only include these stories (repeatable)
        #[arg(short, long = "story")]
        stories: Vec<String>,
    },
    /// List stories
    List,
    /// Print one story's HTML
    Render {
        /// Story name or id
        story: String,
        #[arg(long)]
        variant: Option<Variant>,
        #[arg(long)]
        size: Option<Size>,
        #[arg(long)]
        disabled: bool,
        #[arg(long)]
        as_child: bool,
        /// Button label
        #[arg(long)]
        children: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_level, cli.log_file.clone()) {
        eprintln!("Warning: logging disabled: {e}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: LogLevel, log_file: Option<PathBuf>) -> Result<(), CatalogError> {
    let path = match log_file {
        Some(path) => path,
        None => {
            let Some(path) = paths::log_file() else {
                return Ok(());
            };
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
                paths::rotate_logs(dir);
            }
            path
        }
    };

    let file = File::create(&path)?;
    WriteLogger::init(level.into(), Config::default(), file)?;
    log::debug!("[main] logging to {}", path.display());
    Ok(())
}

fn run(command: Commands) -> Result<(), CatalogError> {
    match command {
        Commands::Build { out, stories } => {
            let config = CatalogConfig::new(out).stories(stories);
            let report = gallery::build(&config)?;
            println!(
                "Wrote {} stories to {} and {}",
                report.stories,
                report.index.display(),
                report.meta.display()
            );
        }
        Commands::List => {
            for story in stories::all() {
                match story.description {
                    Some(description) => println!("{:<20} {}", story.name, description),
                    None => println!("{}", story.name),
                }
            }
        }
        Commands::Render {
            story,
            variant,
            size,
            disabled,
            as_child,
            children,
        } => {
            let overridden = variant.is_some()
                || size.is_some()
                || disabled
                || as_child
                || children.is_some();
            let args = overridden.then(|| {
                let defaults = stories::find(&story)
                    .and_then(|s| s.default_args().cloned())
                    .unwrap_or_default();
                ButtonArgs {
                    variant: variant.unwrap_or(defaults.variant),
                    size: size.unwrap_or(defaults.size),
                    disabled: disabled || defaults.disabled,
                    as_child: as_child || defaults.as_child,
                    children: children.unwrap_or(defaults.children),
                }
            });
            println!("{}", gallery::render_story(&story, args.as_ref())?);
        }
    }
    Ok(())
}
