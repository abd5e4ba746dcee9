use anyhow::{Context, Result, bail};
use clap::Parser;

use banner_counter::cli::{Cli, Commands};
use banner_counter::config::StaticConfig;
use banner_counter::errors::BannerError;
use banner_counter::runtime::modes;
use banner_counter::system::init_logging;

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        match e.downcast_ref::<BannerError>() {
            Some(err) => eprintln!("{}", err.format_colored()),
            None => eprintln!("{} {:#}", colored::Colorize::red("[ERROR]"), e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // 生成配置不需要加载配置和日志
    if let Commands::GenerateConfig { output, force } = cli.selected_command() {
        return generate_config(output.as_deref(), force);
    }

    let config = StaticConfig::load(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config))?;

    // guard 必须存活到进程结束，否则缓冲中的日志会丢失
    let _log_guard = init_logging(&config.logging)?;

    actix_web::rt::System::new().block_on(async {
        match cli.selected_command() {
            Commands::Migrate => modes::run_migrate(&config).await,
            _ => modes::run_server(&config).await,
        }
    })
}

fn generate_config(output: Option<&str>, force: bool) -> Result<()> {
    let sample = StaticConfig::generate_sample_config();
    match output {
        None => println!("{}", sample),
        Some(path) => {
            if std::path::Path::new(path).exists() && !force {
                bail!("{} already exists, use --force to overwrite", path);
            }
            std::fs::write(path, sample).with_context(|| format!("Failed to write {}", path))?;
            eprintln!("Sample configuration written to {}", path);
        }
    }
    Ok(())
}
