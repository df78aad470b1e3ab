use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::app::LaunchOptions;

#[derive(Parser)]
#[command(name = "auditdeck")]
#[command(author, version, about)]
#[command(long_about = "ISO 27001:2022 audit practice slide deck.\n\n\
    Present the deck on screen or lay every slide out for printing.\n\n\
    Examples:\n  \
    auditdeck                        Launch presentation (fullscreen)\n  \
    auditdeck --windowed --slide 5   Launch in a window on slide 5\n  \
    auditdeck --print                Start in the print view\n  \
    auditdeck export deck.html       Write a printable HTML document")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Start on a specific slide (1-indexed number or slide id)
    #[arg(long, global = false)]
    pub slide: Option<String>,

    /// Start in the print view
    #[arg(long, global = false)]
    pub print: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the slides in the deck
    Outline {
        /// Print the full deck content as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the print view as an HTML document
    Export {
        /// Output HTML file
        output: PathBuf,

        /// Use ASCII markers instead of emoji for icons
        #[arg(long)]
        plain_icons: bool,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (defaults.theme, defaults.start_mode, defaults.font)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Outline { json }) => crate::commands::outline::run(json),
            Some(Commands::Export {
                output,
                plain_icons,
            }) => crate::commands::export::run(&output, plain_icons),
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::commands::print_version();
                Ok(())
            }
            None => crate::app::run(LaunchOptions {
                windowed: self.windowed,
                slide: self.slide,
                print: self.print,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_launch_flags() {
        let cli = Cli::try_parse_from(["auditdeck", "--windowed", "--slide", "annex-tech", "-vv"])
            .unwrap();
        assert!(cli.command.is_none());
        assert!(cli.windowed);
        assert_eq!(cli.slide.as_deref(), Some("annex-tech"));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.print);
    }

    #[test]
    fn parses_export() {
        let cli = Cli::try_parse_from(["auditdeck", "export", "out/deck.html", "--plain-icons"])
            .unwrap();
        match cli.command {
            Some(Commands::Export {
                output,
                plain_icons,
            }) => {
                assert_eq!(output, PathBuf::from("out/deck.html"));
                assert!(plain_icons);
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn launch_flags_conflict_with_subcommands() {
        assert!(Cli::try_parse_from(["auditdeck", "--print", "outline"]).is_err());
    }
}
