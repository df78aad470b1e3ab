pub mod completion;
pub mod config;
pub mod export;
pub mod outline;

use colored::Colorize;

pub fn print_version() {
    println!(
        "{} {}",
        "auditdeck".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("ISO 27001:2022 audit practice deck");
}
