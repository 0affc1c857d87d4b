use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing::{debug, error, info, warn};

use wmenu::config::{self, Config, ConfigOverrides, Orientation, Position};
use wmenu::error::ErrorSeverity;
use wmenu::{logging, terminal, ItemStore, Picker, WmenuError};

#[derive(Parser, Debug)]
#[command(
    name = "wmenu",
    disable_version_flag = true,
    about = "Pick one item from a list by typing part of it",
    after_help = "Items are taken from --file, then the ITEM arguments, then stdin.
The chosen item is printed to stdout without a trailing newline."
)]
struct Args {
    /// Print the version and exit
    #[arg(short, long)]
    version: bool,
    /// Match items case-insensitively
    #[arg(short, long)]
    insensitive: bool,
    /// Anchor the menu to the bottom of the terminal
    #[arg(short, long)]
    bottom: bool,
    /// Label drawn before the search box
    #[arg(short, long)]
    prompt: Option<String>,
    /// Read items from this file
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,
    /// Maximum number of visible items
    #[arg(short, long, value_name = "N")]
    limit: Option<usize>,
    /// Characters that separate items
    #[arg(short, long, value_name = "CHARS")]
    delimiters: Option<String>,
    /// One item per row
    #[arg(long, conflicts_with = "horizontal")]
    vertical: bool,
    /// All items on one row
    #[arg(long)]
    horizontal: bool,
    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH", env = "WMENU_CONFIG")]
    config: Option<String>,
    /// Items to pick from
    items: Vec<String>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        let orientation = if self.vertical {
            Some(Orientation::Vertical)
        } else if self.horizontal {
            Some(Orientation::Horizontal)
        } else {
            None
        };
        ConfigOverrides {
            limit: self.limit,
            insensitive: self.insensitive,
            delimiters: self.delimiters.clone(),
            prompt: self.prompt.clone(),
            position: self.bottom.then_some(Position::Bottom),
            orientation,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    if args.version {
        println!("wmenu {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let _guard = logging::init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

/// Severity and user-facing message for a failed run
fn describe_failure(err: &anyhow::Error) -> (ErrorSeverity, String) {
    match err.downcast_ref::<WmenuError>() {
        Some(e) => (e.severity(), e.user_message()),
        None => (ErrorSeverity::Error, format!("{:#}", err)),
    }
}

fn report(err: &anyhow::Error) {
    debug!(error = ?err, "Run failed");
    let (severity, message) = describe_failure(err);
    match severity {
        ErrorSeverity::Warning => warn!("{}", message),
        ErrorSeverity::Error | ErrorSeverity::Critical => error!("{}", message),
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match config::config_path(args.config.as_deref()) {
        Some(location) => config::load_config(&location)?,
        None => Config::default(),
    };
    config.apply_overrides(args.overrides());
    config.validate()?;

    let store = load_items(&args, config.get_delimiters())?;
    let picker = Picker::new(store, config.picker_options())?;

    if let Some(selection) = terminal::run(picker, &config)? {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(selection.as_bytes())
            .and_then(|()| stdout.flush())
            .context("Failed to write selection to stdout")?;
    }
    Ok(())
}

fn load_items(args: &Args, delimiters: &str) -> Result<ItemStore> {
    if let Some(path) = &args.file {
        return ItemStore::load_file(path, delimiters)
            .with_context(|| format!("Failed to load items from {}", path.display()));
    }
    if !args.items.is_empty() {
        return Ok(ItemStore::from_args(&args.items, delimiters)?);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        debug!("stdin is a terminal, no items to read");
        return Ok(ItemStore::default());
    }
    let store = ItemStore::load(stdin.lock(), delimiters)?;
    info!(
        event_type = "items_loaded",
        source = "stdin",
        count = store.len(),
        "Loaded items"
    );
    Ok(store)
}
