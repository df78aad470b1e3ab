use clap::Parser;
use colored::Colorize;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use auditdeck::cli::Cli;

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(cli: &Cli) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str(env!("CARGO_CRATE_NAME"))
        .build();
    let color = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    // Logging stays off if a logger is already installed.
    let _ = TermLogger::init(
        log_level(cli.verbose, cli.quiet),
        log_config,
        TerminalMode::Stderr,
        color,
    );
}

fn main() {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(&cli);

    if let Err(e) = cli.run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(log_level(0, false), LevelFilter::Warn);
        assert_eq!(log_level(1, false), LevelFilter::Debug);
        assert_eq!(log_level(3, false), LevelFilter::Trace);
        assert_eq!(log_level(2, true), LevelFilter::Error);
    }
}
