use colored::Colorize;
use purgekit_abilities::ClearCacheInput;

pub async fn handle(
    everything: bool,
    files: Vec<String>,
    tags: Vec<String>,
    hosts: Vec<String>,
) -> anyhow::Result<()> {
    let scoped = !files.is_empty() || !tags.is_empty() || !hosts.is_empty();
    if scoped && everything {
        eprintln!(
            "{}",
            "--everything is ignored when files, tags, or hosts are given".yellow()
        );
    }

    println!("{}", "Purging Cloudflare cache...".blue());

    let input = ClearCacheInput {
        // A bare `purgekit purge` still purges everything, matching the
        // ability's default input.
        purge_everything: true,
        files: if files.is_empty() { None } else { Some(files) },
        tags: if tags.is_empty() { None } else { Some(tags) },
        hosts: if hosts.is_empty() { None } else { Some(hosts) },
    };

    let service = super::service()?;
    super::report(service.clear_cache(&input).await)
}
