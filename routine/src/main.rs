//! Weekly workout routine generator.
//!
//! Without a subcommand, opens the interactive menu. Subcommands expose the
//! same operations for scripted use.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use routine::exit_codes;
use routine::generate::{GenerationRequest, generate_from_config, make_rng};
use routine::io::config::{CONFIG_FILE, RoutineConfig, load_config};
use routine::io::init::{InitOptions, init_config, prepare_store};
use routine::logging;
use routine::io::store::RoutineStore;
use routine::menu::Menu;

#[derive(Parser)]
#[command(
    name = "routine",
    version,
    about = "Generate randomized weekly workout routines"
)]
struct Cli {
    /// Config file (TOML). Defaults apply when it does not exist.
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Exercise catalog CSV, overriding `catalog_path`.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Directory for saved routines, overriding `routines_dir`.
    #[arg(long, global = true)]
    routines_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive menu (default when no command is given).
    Menu,
    /// Generate one routine and print it.
    Generate {
        /// Training days per week.
        #[arg(long)]
        days: u32,
        /// Minutes per session.
        #[arg(long)]
        minutes: u32,
        /// Fixed RNG seed for a reproducible routine.
        #[arg(long)]
        seed: Option<u64>,
        /// Also save the routine as `<NAME>.txt` in the routines directory.
        #[arg(long, value_name = "NAME")]
        save: Option<String>,
    },
    /// List saved routines.
    List,
    /// Print a saved routine (the `.txt` suffix is optional).
    Show { name: String },
    /// Write a default config file and create the routines directory.
    Init {
        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let Cli {
        config: config_path,
        catalog,
        routines_dir,
        command,
    } = Cli::parse();

    match command.unwrap_or(Command::Menu) {
        Command::Init { force } => cmd_init(&config_path, force),
        Command::Menu => {
            let (config, store) = open_workspace(&config_path, catalog, routines_dir)?;
            let mut input = io::stdin().lock();
            let mut output = io::stdout().lock();
            Menu::new(config, store).run(&mut input, &mut output)
        }
        Command::Generate {
            days,
            minutes,
            seed,
            save,
        } => {
            let (config, store) = open_workspace(&config_path, catalog, routines_dir)?;
            let request = GenerationRequest {
                days,
                session_minutes: minutes,
            };
            let mut rng = make_rng(seed.or(config.seed));
            let text = generate_from_config(&config, request, &mut rng)?;
            print!("{text}");
            if let Some(name) = save {
                let path = store.save(&name, &text)?;
                eprintln!("saved: {}", path.display());
            }
            io::stdout().flush().context("flush stdout")
        }
        Command::List => {
            let (_, store) = open_workspace(&config_path, catalog, routines_dir)?;
            for name in store.list()? {
                println!("{name}");
            }
            Ok(())
        }
        Command::Show { name } => {
            let (_, store) = open_workspace(&config_path, catalog, routines_dir)?;
            let file_name = store.resolve(&name)?;
            print!("{}", store.load(&file_name)?);
            io::stdout().flush().context("flush stdout")
        }
    }
}

/// Resolve config and run the start-up step that creates the routines directory.
fn open_workspace(
    config_path: &Path,
    catalog: Option<PathBuf>,
    routines_dir: Option<PathBuf>,
) -> Result<(RoutineConfig, RoutineStore)> {
    let config = resolve_config(config_path, catalog, routines_dir)?;
    let store = prepare_store(&config)?;
    debug!(catalog = %config.catalog_path.display(), "config resolved");
    Ok((config, store))
}

fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    let routines_dir = init_config(config_path, &InitOptions { force })?;
    println!(
        "init: config={} routines={}",
        config_path.display(),
        routines_dir.display()
    );
    Ok(())
}

/// Load the config file and apply command-line overrides.
fn resolve_config(
    path: &Path,
    catalog: Option<PathBuf>,
    routines_dir: Option<PathBuf>,
) -> Result<RoutineConfig> {
    let mut config = load_config(path).with_context(|| format!("load {}", path.display()))?;
    if let Some(catalog) = catalog {
        config.catalog_path = catalog;
    }
    if let Some(routines_dir) = routines_dir {
        config.routines_dir = routines_dir;
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_opens_menu() {
        let cli = Cli::parse_from(["routine"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from(CONFIG_FILE));
    }

    #[test]
    fn parse_generate() {
        let cli = Cli::parse_from([
            "routine", "generate", "--days", "4", "--minutes", "60", "--save", "semana",
        ]);
        assert!(matches!(
            cli.command,
            Some(Command::Generate {
                days: 4,
                minutes: 60,
                seed: None,
                save: Some(ref name),
            }) if name == "semana"
        ));
    }

    #[test]
    fn global_overrides_after_subcommand() {
        let cli = Cli::parse_from(["routine", "list", "--routines-dir", "otras"]);
        assert!(matches!(cli.command, Some(Command::List)));
        assert_eq!(cli.routines_dir, Some(PathBuf::from("otras")));
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["routine", "init", "--force"]);
        assert!(matches!(cli.command, Some(Command::Init { force: true })));
    }
}
