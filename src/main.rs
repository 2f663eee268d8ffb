//! permtree CLI - hierarchical permission trees for admin consoles
//!
//! Usage: permtree <COMMAND>
//!
//! Commands:
//!   show         Render a menu tree
//!   apply        Replay tree interactions and print the resulting key sets
//!   staff        Edit a staff member's menu permissions
//!   interactive  Browse and edit a menu tree in the terminal

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use permtree::presentation::{Cli, Commands};
use permtree::Config;

use crate::ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Errors raised before the config loads still need a context to render with
    let fallback = UiContext::new(cli.json, cli.color, cli.ascii, &Config::default());

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, fallback.json, fallback.color, fallback.unicode);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let (config, warnings) = Config::discover(cli.config.as_deref(), &cwd)?;
    let ui = UiContext::new(cli.json, cli.color, cli.ascii, &config);
    ui::output::print_config_warnings(&warnings, ui.color, ui.unicode);

    match cli.command {
        Commands::Show {
            menus,
            plain_titles,
        } => commands::cmd_show(&menus, plain_titles, &config, &ui),
        Commands::Apply {
            menus,
            actions,
            strict,
            multiple,
            state,
        } => commands::cmd_apply(
            &menus,
            commands::ApplyOptions {
                actions: &actions,
                strict,
                multiple,
                state: state.as_deref(),
            },
            &config,
            &ui,
        ),
        Commands::Staff {
            menus,
            staff,
            toggles,
        } => commands::cmd_staff(&menus, &staff, &toggles, &ui),
        Commands::Interactive { menus } => commands::cmd_interactive(&menus, &config, &ui),
    }
}
