use crate::config::{Config, config_path};
use crate::error::CliError;

/// Print the resolved configuration and where it came from.
pub(crate) fn run_config_show(config: &Config) -> Result<(), CliError> {
    match config_path() {
        Some(path) if path.exists() => println!("config file: {}", path.display()),
        Some(path) => println!("config file: {} (not present)", path.display()),
        None => println!("config file: <no config directory>"),
    }
    println!();
    println!("endpoint:            {}", config.source.endpoint);
    println!("category uuid:       {}", config.source.category_uuid);
    println!("category name:       {}", config.source.category_name);
    println!("page size:           {}", config.source.page_size);
    println!("min runtime (min):   {}", config.min_runtime_minutes);
    println!("output:              {}", config.output.display());
    println!("import file:         {}", config.import_file.display());
    println!("max removals:        {}", config.max_removals);
    println!(
        "sync command:        {}",
        config.sync_command.as_deref().unwrap_or("<not set>")
    );
    Ok(())
}

/// Print the config file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    match config_path() {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => Err(CliError::config("could not determine config directory")),
    }
}
