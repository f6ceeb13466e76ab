use colored::Colorize;

pub async fn handle() -> anyhow::Result<()> {
    println!("{}", "Fetching zone information...".blue());

    let service = super::service()?;
    super::report(service.zone_info().await)
}
