use dns_select_domain::Config;

use crate::di::SelectionServices;

/// Prints what the configuration resolves to.
pub fn run_check(config: &Config) -> anyhow::Result<()> {
    let services = SelectionServices::new(config)?;

    println!("Configuration OK");
    println!("  SELECT records: {}", config.select.records.len());
    for record in &config.select.records {
        println!(
            "    {} -> {} (base {}, {} options)",
            record.name,
            record.selector,
            record.base,
            record.options.len()
        );
    }

    let mut keys: Vec<String> = services.registry.keys().map(|k| k.to_string()).collect();
    keys.sort();
    println!("  Selectors: {}", keys.len());
    for key in keys {
        println!("    {}", key);
    }

    println!("  GeoIP networks: {}", services.geo.len());
    Ok(())
}
