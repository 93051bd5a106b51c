//! CLI for managing a shopping list with named, saved lists
//!
//! Runs an interactive shell over the active list by default. Saved lists
//! are stored as JSON under the configured storage directory and can also be
//! inspected or deleted without entering the shell.
//!
//! # Examples
//!
//! ```bash
//! # help menu
//! r-cartcli --help
//!
//! # interactive shell
//! r-cartcli
//!
//! # print saved lists as json
//! r-cartcli --json lists
//! ```
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use directories::ProjectDirs;
use itertools::Itertools;
use log::*;
use r_cartlib::{
    storage::{KeyValueListStorage, file::FileKeyValueStore},
    store::{
        Dispatcher, StateGetter, Store, action::Action, reducer::StoreReducer,
    },
};
use std::fs;

use crate::{
    config::{Config, ConfigManager},
    prompt::{Prompter, TermPrompter},
    shell::{Shell, delete_list_prompt},
};

mod command;
mod config;
mod prompt;
mod render;
mod shell;

const APP_NAME: &str = "r-cartcli";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// CLI for managing a shopping list with named, saved lists
struct Args {
    /// Path to the YAML config file
    #[arg(short, long)]
    config: Option<String>,

    /// Directory holding saved lists (overrides config)
    #[arg(short, long)]
    storage_dir: Option<String>,

    /// Output saved lists in json instead of table text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Prints debug logs including those from r-cartlib
    #[arg(long, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
enum Commands {
    /// Start the interactive shell (default)
    Shell,
    /// Print saved lists
    Lists,
    /// Print a saved list
    Show {
        /// Name of the saved list
        name: String,
    },
    /// Set the currency symbol printed in front of amounts
    Currency {
        /// Currency symbol, e.g. $
        symbol: String,
    },
    /// Delete a saved list
    Delete {
        /// Name of the saved list
        name: String,

        /// Skip the confirmation prompt
        #[arg(short, long, default_value_t = false)]
        yes: bool,
    },
}

#[doc(hidden)]
fn initialize_logger(args: &Args) -> Result<()> {
    let filter = if args.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Warn
    };

    simplelog::TermLogger::init(
        filter,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[doc(hidden)]
fn get_project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
        .ok_or(eyre!("failed to get project directory"))
}

#[doc(hidden)]
fn get_project_config_path(project_dirs: &ProjectDirs) -> Result<String> {
    let config_dir = project_dirs.config_dir();
    fs::create_dir_all(config_dir)?;
    let config_file_path = config_dir
        .join("config.yml")
        .to_str()
        .ok_or(eyre!("unable to construct config file path"))?
        .to_string();
    Ok(config_file_path)
}

#[doc(hidden)]
fn resolve_config(args: &Args) -> Result<(ConfigManager, Config)> {
    let project_dirs = get_project_dirs()?;

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => get_project_config_path(&project_dirs)?,
    };

    let manager = ConfigManager::builder()
        .default_storage_dir(project_dirs.data_dir().to_string_lossy())
        .path(config_path)
        .build()?;

    let mut config = manager.get();

    if let Some(dir) = &args.storage_dir {
        config.storage_dir = dir.clone();
    }

    Ok((manager, config))
}

#[doc(hidden)]
fn set_currency(manager: &mut ConfigManager, symbol: &str) -> Result<Config> {
    let symbol = symbol.trim();

    if symbol.is_empty() {
        return Err(eyre!("currency symbol cannot be empty"));
    }

    let mut config = manager.get();
    config.currency = symbol.to_string();
    manager.update_config(config.clone())?;

    Ok(config)
}

#[doc(hidden)]
fn print_config(args: &Args, config: &Config) {
    debug!("configuration:");
    debug!("config:      {:?}", args.config);
    debug!("json:        {}", args.json);
    debug!("currency:    {}", config.currency);
    debug!("storage_dir: {}", config.storage_dir);
    debug!("command:     {:?}", args.command);
}

#[doc(hidden)]
fn create_store(config: &Config) -> Store {
    let storage =
        KeyValueListStorage::new(FileKeyValueStore::new(&config.storage_dir));
    Store::new(StoreReducer::boxed(), Box::new(storage))
}

#[doc(hidden)]
fn list_saved(store: &Store, json: bool, currency: &str) -> Result<String> {
    let state = store.get_state();

    if json {
        return render::saved_lists_json(&state.saved_lists);
    }

    Ok(render::render_saved_lists(&state.saved_lists, currency))
}

#[doc(hidden)]
fn show_saved(
    store: &Store,
    name: &str,
    json: bool,
    currency: &str,
) -> Result<String> {
    let state = store.get_state();

    let items = state.saved_lists.get(name).ok_or_else(|| {
        eyre!(
            "no saved list named \"{}\", saved lists: {}",
            name,
            state.saved_list_names().iter().join(", ")
        )
    })?;

    if json {
        return render::items_json(name, items);
    }

    let total = r_cartlib::item::total_amount(items);
    Ok(render::render_items(name, items, total, currency))
}

#[doc(hidden)]
fn delete_saved(
    store: &Store,
    prompter: &dyn Prompter,
    name: &str,
    yes: bool,
) -> Result<bool> {
    if !store.get_state().saved_lists.contains_key(name) {
        return Err(eyre!("no saved list named \"{}\"", name));
    }

    let confirmed = yes || prompter.confirm(&delete_list_prompt(name))?;

    store.dispatch(Action::DeleteNamed {
        name: name.to_string(),
        confirmed,
    });

    Ok(confirmed)
}

#[doc(hidden)]
fn run(
    args: &Args,
    manager: &mut ConfigManager,
    config: &Config,
    store: Store,
) -> Result<()> {
    let command = args.command.clone().unwrap_or(Commands::Shell);

    match command {
        Commands::Shell => {
            let shell = Shell::new(
                store,
                Box::new(TermPrompter::stdio()),
                config.currency.clone(),
            );
            shell.run()
        }
        Commands::Lists => {
            println!("{}", list_saved(&store, args.json, &config.currency)?);
            Ok(())
        }
        Commands::Show { name } => {
            let out = show_saved(&store, &name, args.json, &config.currency)?;
            println!("{out}");
            Ok(())
        }
        Commands::Currency { symbol } => {
            let updated = set_currency(manager, &symbol)?;
            println!("currency set to {}", updated.currency);
            Ok(())
        }
        Commands::Delete { name, yes } => {
            let prompter = TermPrompter::stdio();
            if delete_saved(&store, &prompter, &name, yes)? {
                println!("deleted \"{name}\"");
            }
            Ok(())
        }
    }
}

#[doc(hidden)]
fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(&args)?;

    let (mut manager, config) = resolve_config(&args)?;

    print_config(&args, &config);

    let store = create_store(&config);

    run(&args, &mut manager, &config, store)
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
