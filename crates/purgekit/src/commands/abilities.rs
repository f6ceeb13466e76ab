use colored::Colorize;

pub fn handle() -> anyhow::Result<()> {
    let abilities = purgekit_abilities::catalog();

    println!("Abilities: {}", abilities.len());
    for ability in &abilities {
        let mut flags = Vec::new();
        if ability.annotations.readonly {
            flags.push("readonly");
        }
        if ability.annotations.destructive {
            flags.push("destructive");
        }
        if ability.annotations.idempotent {
            flags.push("idempotent");
        }

        println!();
        println!("  {} [{}]", ability.name.cyan().bold(), flags.join(", "));
        println!("  {}", ability.label.bold());
        println!("  {}", ability.description);
    }

    Ok(())
}
