use std::{error::Error, fs, io, path::Path};

use crate::{CONFIG_FILE_NAME, ConfigSubcommands};

const CONFIG_TEMPLATE: &str = include_str!("../../template/crudgen.toml");

pub fn run_config_command(command: ConfigSubcommands) -> Result<(), Box<dyn Error>> {
    match command {
        ConfigSubcommands::Init { force } => {
            let config_path = Path::new(CONFIG_FILE_NAME);
            run_config_init(config_path, force)?;
            println!("Config file created at {}", config_path.display());
        }
    }
    Ok(())
}

pub fn run_config_init(config_path: &Path, force: bool) -> Result<(), Box<dyn Error>> {
    if config_path.exists() && !force {
        return Err(Box::new(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!(
                "{} already exists, use --force to rewrite it",
                config_path.display()
            ),
        )));
    }

    fs::write(config_path, CONFIG_TEMPLATE)?;
    Ok(())
}
