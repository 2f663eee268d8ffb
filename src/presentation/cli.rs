//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --ascii, --verbose, --config) are inherited by all subcommands
//! - Actions are written as `kind:key`, e.g. `check:11` or `delete:1`

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::TreeAction;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// permtree - hierarchical permission trees for admin consoles
#[derive(Parser, Debug)]
#[command(name = "permtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Use plain ASCII icons
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Configuration file (defaults to ./.permtree.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a menu tree
    Show {
        /// Menu payload (JSON array of menus)
        menus: PathBuf,

        /// Label nodes with their name only
        #[arg(long)]
        plain_titles: bool,
    },

    /// Replay tree interactions and print the resulting key sets
    Apply {
        /// Menu payload (JSON array of menus)
        menus: PathBuf,

        /// Interaction to run, in order (expand:KEY, check:KEY, select:KEY, delete:KEY)
        #[arg(short, long = "action", value_name = "KIND:KEY")]
        actions: Vec<TreeAction>,

        /// Check nodes independently (no cascade)
        #[arg(long)]
        strict: bool,

        /// Allow several selected paths
        #[arg(long)]
        multiple: bool,

        /// Seed key sets from this file and write the results back
        #[arg(long, value_name = "FILE")]
        state: Option<PathBuf>,
    },

    /// Edit a staff member's menu permissions
    Staff {
        /// Menus available for assignment
        menus: PathBuf,

        /// Staff record (JSON object with userId and menus)
        staff: PathBuf,

        /// Menu id to grant or revoke, in order
        #[arg(short, long = "toggle", value_name = "KEY")]
        toggles: Vec<String>,
    },

    /// Browse and edit a menu tree in the terminal
    Interactive {
        /// Menu payload (JSON array of menus)
        menus: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_show() {
        let cli = Cli::try_parse_from(["permtree", "show", "menus.json"]).unwrap();
        match cli.command {
            Commands::Show {
                menus,
                plain_titles,
            } => {
                assert_eq!(menus, PathBuf::from("menus.json"));
                assert!(!plain_titles);
            }
            other => panic!("Expected Show command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_apply_actions_in_order() {
        let cli = Cli::try_parse_from([
            "permtree",
            "apply",
            "menus.json",
            "--action",
            "check:11",
            "-a",
            "delete:1",
            "--strict",
        ])
        .unwrap();

        if let Commands::Apply {
            actions,
            strict,
            multiple,
            state,
            ..
        } = cli.command
        {
            assert_eq!(
                actions,
                vec![
                    TreeAction::ToggleCheck("11".to_string()),
                    TreeAction::Delete("1".to_string()),
                ]
            );
            assert!(strict);
            assert!(!multiple);
            assert_eq!(state, None);
        } else {
            panic!("Expected Apply command");
        }
    }

    #[test]
    fn test_cli_rejects_malformed_action() {
        let result = Cli::try_parse_from(["permtree", "apply", "menus.json", "-a", "poke:1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_staff_toggles() {
        let cli = Cli::try_parse_from([
            "permtree", "staff", "menus.json", "staff.json", "-t", "11", "-t", "12",
        ])
        .unwrap();

        if let Commands::Staff { toggles, .. } = cli.command {
            assert_eq!(toggles, vec!["11", "12"]);
        } else {
            panic!("Expected Staff command");
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "permtree",
            "show",
            "menus.json",
            "--json",
            "--ascii",
            "-vv",
            "--config",
            "custom.toml",
        ])
        .unwrap();

        assert!(cli.json);
        assert!(cli.ascii);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["permtree"]).is_err());
    }
}
