// This file is part of draw-bench and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 draw-bench contributors

use std::io;
use std::process::ExitCode;

use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use draw_bench::error::BenchError;
use draw_bench::runner::Harness;
use draw_bench::settings::{Settings, CONFIG_PATH};

use crate::window::WindowScreen;

mod window;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let settings = load_settings();

    match run(&settings) {
        Ok(()) => {
            info!("Program finished.");
            ExitCode::SUCCESS
        }
        Err(BenchError::ExitRequested) => {
            info!("Exit requested. Program finished.");
            ExitCode::SUCCESS
        }
        Err(BenchError::NoResults) => {
            error!("No tests were run. Exiting.");
            ExitCode::from(BenchError::NoResults.exit_code())
        }
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Everything that touches the window. Returning from here drops the window and releases the display.
fn run(settings: &Settings) -> Result<(), BenchError> {
    let screen = WindowScreen::new(settings)?;
    let mut harness = Harness::new(screen, settings);
    let mut rng = match settings.persisted.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    harness.run_plan(&settings.plan(), &mut rng)?;
    harness.show_results()
}

fn load_settings() -> Settings {
    let config_path = CONFIG_PATH.as_deref().map(|path| path.display().to_string()).unwrap_or_default();
    match Settings::load() {
        Ok(settings) => {
            info!("Loaded settings from \"{config_path}\"");
            settings
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            // write out the defaults so there's a file to edit next time
            let settings = Settings::default();
            if let Err(e) = settings.save() {
                warn!("Error saving default settings to \"{config_path}\". {e}");
            }
            settings
        }
        Err(e) => {
            warn!("Error loading settings file \"{config_path}\". Using default settings. {e}");
            Settings::default()
        }
    }
}
