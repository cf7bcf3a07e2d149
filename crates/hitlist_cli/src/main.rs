//! Terminal host for the hitlist list screen.
//!
//! # Usage
//!
//! ```bash
//! hitlist list              # show every saved name
//! hitlist list --json       # same, as JSON
//! hitlist add "Ned Stark"   # save a name
//! hitlist add               # prompt for a name on stdin (Ctrl-D cancels)
//! hitlist ping              # core linkage probe
//! ```

mod terminal;

use clap::{Parser, Subcommand};
use hitlist_core::db::open_db;
use hitlist_core::{
    default_log_level, init_logging, AddOutcome, FixedPrompt, ListScreen, NamePrompt,
    PersonRepository, PersonService, PromptOutcome, RefreshOutcome, SqlitePersonRepository,
    LIST_TITLE,
};
use log::info;
use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};
use terminal::{LinePrompt, TerminalView};

const DB_FILE_NAME: &str = "hitlist.sqlite3";

#[derive(Parser)]
#[command(name = "hitlist")]
#[command(author, version, about = "Keep a list of names on this device")]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "HITLIST_DB_PATH")]
    db: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, global = true, env = "HITLIST_LOG_DIR")]
    log_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print core ping and version
    Ping,
    /// Show all saved names
    List {
        /// Print the records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Save a new name
    Add {
        /// Name to save as-is; prompts on stdin when omitted
        name: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("hitlist: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(log_level(cli.log_level.as_deref()), log_dir)?;
    }

    match cli.command {
        Commands::Ping => {
            println!("hitlist_core ping={}", hitlist_core::ping());
            println!("hitlist_core version={}", hitlist_core::core_version());
            Ok(())
        }
        Commands::List { json } => list(&resolve_db_path(cli.db), json),
        Commands::Add { name } => add(&resolve_db_path(cli.db), name),
    }
}

fn list(db_path: &Path, json: bool) -> Result<(), Box<dyn Error>> {
    let conn = open_db(db_path)?;
    let mut screen = ListScreen::new(
        PersonService::new(SqlitePersonRepository::new(&conn)),
        TerminalView::new(LIST_TITLE, json, std::io::stdout()),
    );

    if screen.on_screen_shown() == RefreshOutcome::Failed {
        return Err("list failed".into());
    }
    if json {
        println!("{}", serde_json::to_string_pretty(screen.people())?);
    }
    Ok(())
}

fn add(db_path: &Path, name: Option<String>) -> Result<(), Box<dyn Error>> {
    let conn = open_db(db_path)?;
    let store = PersonService::new(SqlitePersonRepository::new(&conn));

    match name {
        Some(name) => add_person(
            store,
            &mut FixedPrompt(PromptOutcome::Save(name)),
            std::io::stdout(),
        ),
        None => {
            let stdin = std::io::stdin();
            let mut prompt = LinePrompt::new(stdin.lock(), std::io::stderr());
            let result = add_person(store, &mut prompt, std::io::stdout());
            if let Some(err) = prompt.take_read_error() {
                return Err(format!("could not read name from stdin: {err}").into());
            }
            result
        }
    }
}

/// Loads the list silently, runs the add flow, and prints the table once
/// after a successful save.
fn add_person<R: PersonRepository>(
    store: PersonService<R>,
    prompt: &mut impl NamePrompt,
    out: impl Write,
) -> Result<(), Box<dyn Error>> {
    let mut screen = ListScreen::new(store, TerminalView::new(LIST_TITLE, true, out));
    // A failed load still lets the user add; its error is already shown.
    screen.on_screen_shown();
    screen.view_mut().set_quiet(false);

    match screen.on_add_requested(prompt) {
        AddOutcome::Added(person) => {
            info!("event=cli_add module=cli status=ok id={}", person.id);
            Ok(())
        }
        AddOutcome::Cancelled => Ok(()),
        AddOutcome::Failed => Err("add failed".into()),
    }
}

fn log_level(flag: Option<&str>) -> &str {
    flag.unwrap_or(default_log_level())
}

fn resolve_db_path(flag: Option<PathBuf>) -> PathBuf {
    flag.filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| std::env::temp_dir().join(DB_FILE_NAME))
}
