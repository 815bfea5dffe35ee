// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config (modver.toml, --config, env, --set)
//!              --> Logging --> Command Dispatch
//!   Version | Options | Configs | Read | Scan | Check | Compare
//! ```

use std::process::ExitCode;

use modver_rs::cli::global::GlobalOptions;
use modver_rs::cli::{self, Command};
use modver_rs::cmd::check::run_check_command;
use modver_rs::cmd::compare::run_compare_command;
use modver_rs::cmd::config::{run_configs_command, run_options_command};
use modver_rs::cmd::read::run_read_command;
use modver_rs::cmd::scan::run_scan_command;
use modver_rs::config::loader::ConfigLoader;
use modver_rs::config::{Config, ENV_PREFIX, LOCAL_CONFIG_FILE};
use modver_rs::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config).await
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .with_file_format(config.global.log_format)
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Configs) => build_config_loader(&cli.global).map(|loader| {
            run_configs_command(&loader.format_loaded_files());
        }),
        Some(Command::Read(args)) => run_read_command(args, config),
        Some(Command::Scan(args)) => run_scan_command(args, config),
        Some(Command::Check(args)) => run_check_command(args, config).await,
        Some(Command::Compare(args)) => {
            run_compare_command(args);
            Ok(())
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> modver_rs::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(LOCAL_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for assignment in global.to_config_overrides() {
        loader = loader.set_assignment(&assignment)?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> modver_rs::error::Result<Config> {
    build_config_loader(global)?.build()
}
