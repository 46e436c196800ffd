use clap::Parser;
use color_eyre::eyre::eyre;
use std::path::Path;

use relog::{
    Config, Generator, PackageStatus, Result, cli, entry, workspaces,
};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("relog")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = cli::Args::parse();

    initialize_logger(cli_args.debug)?;

    let config = Config::default();
    let root = Path::new(&cli_args.root);
    let targets = workspaces::resolve_targets(&config, root).await?;

    match cli_args.command {
        cli::Command::Add { message } => {
            let created = entry::create_entry(&config, &message, &targets).await?;
            for path in created {
                log::info!("recorded entry: {}", path.display());
            }
            Ok(())
        }
        cli::Command::Generate => {
            let generator = Generator::new(config);
            let reports = generator.generate_changelog(&targets).await;

            let mut failed = 0;
            for report in &reports {
                match &report.status {
                    PackageStatus::Updated { changelog, version } => {
                        log::info!(
                            "{}: wrote {} at version {}",
                            report.package_dir.display(),
                            changelog.display(),
                            version
                        );
                    }
                    PackageStatus::Skipped => {
                        log::info!(
                            "{}: no pending entries",
                            report.package_dir.display()
                        );
                    }
                    PackageStatus::Failed(e) => {
                        failed += 1;
                        log::error!(
                            "{}: {}",
                            report.package_dir.display(),
                            e
                        );
                    }
                }
            }

            if failed > 0 {
                return Err(eyre!(
                    "{failed} of {} packages failed",
                    reports.len()
                )
                .into());
            }

            Ok(())
        }
    }
}
