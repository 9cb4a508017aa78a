use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use unitswap::cli::Cli;
use unitswap::config::{self, Config, DEFAULT_CONFIG_PATH};
use unitswap::app::{self, Overrides};
use unitswap::i18n::keys;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("UNITSWAP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let mut cfg = match config::load_or_default_at(&config_path) {
        Ok(cfg) => cfg,
        Err(err) => {
            warn!(path = %config_path.display(), error = %err, "config unavailable, using defaults");
            Config::default()
        }
    };
    let overrides = Overrides {
        decimals: cli.decimals,
        lang: cli.lang,
    };

    let mut tr = app::translator_for(&cfg, overrides.lang.as_deref());
    debug!(lang = tr.language().as_code(), config = %config_path.display(), "starting");

    match app::run(cli.command, &mut cfg, &overrides, &mut tr, &config_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}
