//! Terminal UI (TUI) app for linking dotfiles into your home directory
//!
//! # Features:
//!
//! - Lists every dotfile declared in a YAML manifest with its link status
//! - Link or unlink a dotfile with a single key press
//! - Remembers the manifest between runs
//!
//! # Examples
//!
//! ```bash
//! # show help menu
//! homegoing --help
//!
//! # launch application with a manifest, remembered for future runs
//! homegoing --manifest ~/dotfiles/dotfiles.yml
//!
//! # launch application with the last used manifest
//! homegoing
//! ```

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use config::{CONFIG_FILE, ConfigManager, DEFAULT_MANIFEST_FILE};
use directories::ProjectDirs;
use homegoing_lib::linker::SymlinkLinker;
use ratatui::{Terminal, prelude::CrosstermBackend};
use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::mpsc::{Receiver, Sender, channel},
};

use crate::{
    events::types::{Command, Message},
    runtime::{
        executor::{self, CommandExecutor},
        program::Program,
        terminal,
    },
    ui::{app::App, help::HelpView, keys::AppKeyMap, model::dotconfig::DotConfigModel},
};

#[doc(hidden)]
mod config;
#[doc(hidden)]
mod error;
#[doc(hidden)]
mod events;
#[doc(hidden)]
mod runtime;
#[doc(hidden)]
mod ui;

const LOG_FILE: &str = "homegoing.log";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Write debug logs to homegoing.log in the project data directory
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Path to the dotfile manifest - remembered for future runs
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Start with the full help menu expanded
    #[arg(long, default_value_t = false)]
    full_help: bool,
}

#[doc(hidden)]
fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "homegoing")
        .ok_or(eyre!("failed to get project directory"))
}

#[doc(hidden)]
fn initialize_logger(args: &Args, dirs: &ProjectDirs) -> Result<()> {
    if !args.debug {
        log::set_max_level(simplelog::LevelFilter::Off);
        return Ok(());
    }

    let log_dir = dirs.data_local_dir();
    fs::create_dir_all(log_dir)?;
    let file = fs::File::create(log_dir.join(LOG_FILE))?;

    simplelog::WriteLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        file,
    )?;

    Ok(())
}

#[doc(hidden)]
fn get_project_config_path(dirs: &ProjectDirs) -> Result<String> {
    let config_dir = dirs.config_dir();
    fs::create_dir_all(config_dir)?;
    let config_file_path = config_dir
        .join(CONFIG_FILE)
        .to_str()
        .ok_or(eyre!("unable to construct config file path"))?
        .to_string();
    Ok(config_file_path)
}

#[doc(hidden)]
fn create_config_manager(dirs: &ProjectDirs) -> Result<ConfigManager> {
    let config_path = get_project_config_path(dirs)?;
    let default_manifest = format!("~/{DEFAULT_MANIFEST_FILE}");

    let config_manager = ConfigManager::builder()
        .default_manifest(default_manifest)
        .path(config_path)
        .build()?;

    Ok(config_manager)
}

/// Makes a manifest given on the command line absolute so it stays valid
/// when remembered for later runs from other directories.
#[doc(hidden)]
fn manifest_arg_to_config(manifest: &Path) -> Result<String> {
    let manifest = manifest.to_str().ok_or(eyre!(
        "manifest path is not valid unicode: {}",
        manifest.display()
    ))?;

    if manifest.starts_with('~') {
        return Ok(manifest.to_string());
    }

    let absolute = std::path::absolute(manifest)?;
    absolute
        .to_str()
        .map(str::to_string)
        .ok_or(eyre!("unable to construct manifest path"))
}

#[doc(hidden)]
fn init(args: &Args, dirs: &ProjectDirs) -> Result<App<DotConfigModel>> {
    let mut config_manager = create_config_manager(dirs)?;

    if let Some(manifest) = &args.manifest {
        config_manager.update_manifest(manifest_arg_to_config(manifest)?)?;
    }

    let manifest = config_manager.manifest_path()?;
    let full_help = args.full_help || config_manager.config().full_help;

    log::debug!("starting with manifest {}", manifest.display());

    Ok(App::new(
        AppKeyMap::default(),
        HelpView::new(full_help),
        DotConfigModel::new(manifest),
    ))
}

#[doc(hidden)]
fn run_program(
    app: App<DotConfigModel>,
    commands: Sender<Command>,
    messages: Receiver<Message>,
) -> Result<String> {
    terminal::enter()?;

    let result = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(|e| eyre!("failed to create terminal: {e}"))
        .and_then(|terminal| {
            Program::new(app, terminal, commands, messages).run()
        });

    // always hand the terminal back, even if the program failed
    terminal::restore()?;

    result
}

#[doc(hidden)]
fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let dirs = project_dirs()?;

    initialize_logger(&args, &dirs)?;

    let app = init(&args, &dirs)?;

    let (command_tx, command_rx) = channel();
    let (message_tx, message_rx) = channel();

    let executor_handle = executor::spawn(
        CommandExecutor::new(Box::new(SymlinkLinker::new())),
        command_rx,
        message_tx,
    );

    let final_frame = run_program(app, command_tx, message_rx);

    // the command sender is gone once the program returns
    executor_handle
        .join()
        .map_err(error::report_from_thread_panic)
        .wrap_err("command executor stopped unexpectedly")?;

    let final_frame = final_frame?;

    if !final_frame.is_empty() {
        println!("{final_frame}");
    }

    Ok(())
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
