use clap::Parser;
use dotenvy::dotenv;

use crudgen_cli::*;

fn main() {
    dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Generate { command } => LoadedConfig::load(config_path)
            .and_then(|config| run_generate_command(command, &config, cli.state))
            .unwrap_or_else(handle_error),
        Commands::Schema { command } => LoadedConfig::load(config_path)
            .and_then(|config| run_schema_command(command, &config, cli.state))
            .unwrap_or_else(handle_error),
        Commands::Config { command } => run_config_command(command).unwrap_or_else(handle_error),
    }
}
