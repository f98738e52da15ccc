use anyhow::Result;
use cc_config::Config;

pub fn handle(config: &Config) -> Result<()> {
    println!("Config file: {}", Config::config_path().display());
    println!();
    println!("currency_symbol = {:?}", config.currency_symbol);
    println!("output.format = {:?}", config.output.format);
    println!("output.show_breakdown = {}", config.output.show_breakdown);
    println!("cache.capacity = {}", config.cache.capacity);
    Ok(())
}
