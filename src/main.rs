use anyhow::Result;
use uxscore::cli::{self, Commands};
use uxscore::commands::{self, RunSettings};

fn main() -> Result<()> {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbose);
    cli::configure_thread_pool(cli.jobs);

    if let Commands::Init { force } = cli.command {
        let dir = std::env::current_dir()?;
        return commands::init::init_config(&dir, force);
    }

    let settings = RunSettings::resolve(cli.config.as_deref(), cli.format, cli.plain)?;
    settings.apply_color_override();
    let mut writer = settings.stdout_writer();

    match cli.command {
        Commands::Frame {
            path,
            iteration,
            total_iterations,
        } => commands::score::handle_frame(
            &path,
            iteration,
            total_iterations,
            &settings,
            writer.as_mut(),
        ),
        Commands::Version { paths } => {
            commands::score::handle_versions(&paths, &settings, writer.as_mut())
        }
        Commands::Compare { paths } => {
            commands::compare::handle_compare(&paths, &settings, writer.as_mut())
        }
        Commands::Init { .. } => Ok(()),
    }
}
