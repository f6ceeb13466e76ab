pub mod abilities;
pub mod devmode;
pub mod purge;
pub mod zone;

use colored::Colorize;
use purgekit_abilities::{AbilityService, Outcome};

/// Build the ability service from the resolved settings
pub(crate) fn service() -> anyhow::Result<AbilityService> {
    let settings = purgekit_config::Settings::load()?;
    Ok(AbilityService::new(settings))
}

/// Print an outcome; a failed outcome exits with status 1
pub(crate) fn report(outcome: Outcome) -> anyhow::Result<()> {
    if outcome.success {
        println!("{} {}", "✓".green().bold(), outcome.message);
        if let Some(detail) = &outcome.detail {
            println!();
            println!("{}", serde_json::to_string_pretty(detail)?);
        }
        Ok(())
    } else {
        eprintln!("{} {}", "✗".red().bold(), outcome.message);
        std::process::exit(1);
    }
}
