use a11y_snapshot::cli::commands::{cmd_query, cmd_snapshot, cmd_stats};
use a11y_snapshot::cli::config::{Cli, Commands, load_config, resolve_output_settings};
use a11y_snapshot::cli::logging::init_logging;
use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Snapshot {
            input,
            output_dir,
            format,
            stdout,
        } => {
            let settings =
                resolve_output_settings(output_dir.as_deref(), format, &config);
            cmd_snapshot(&input, &settings, stdout)?;
        }
        Commands::Query {
            input,
            query,
            value,
        } => {
            let found = cmd_query(&input, &query, value.as_deref())?;
            if found == 0 {
                eprintln!("No matching elements");
            }
        }
        Commands::Stats { input } => {
            cmd_stats(&input)?;
        }
    }

    Ok(())
}
