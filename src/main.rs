mod cli;
mod logging;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use rgbterm::config::RgbtermConfig;
use tracing::{info, warn};

use cli::Cli;

fn main() -> ExitCode {
    // ログシステムの初期化（_guard は main 終了まで保持する必要がある）
    let _guard = logging::init_logging();
    info!("rgbterm started");

    let cli = Cli::parse();
    let config = RgbtermConfig::load();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = cli::run(&cli, &config, &mut out).and_then(|()| Ok(out.flush()?));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            warn!(error = %e, "Command failed");
            eprintln!("{} {e:#}", cli::color::bold_red("rgbterm: error:"));
            ExitCode::FAILURE
        }
    }
}
