use clap::ValueEnum;
use colored::Colorize;
use purgekit_abilities::SetDevelopmentModeInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DevModeState {
    On,
    Off,
}

pub async fn handle(state: Option<DevModeState>) -> anyhow::Result<()> {
    let service = super::service()?;

    let outcome = match state {
        None => {
            println!("{}", "Checking development mode...".blue());
            service.get_development_mode().await
        }
        Some(state) => {
            println!("{}", "Updating development mode...".blue());
            service
                .set_development_mode(&SetDevelopmentModeInput {
                    enabled: state == DevModeState::On,
                })
                .await
        }
    };

    super::report(outcome)
}
