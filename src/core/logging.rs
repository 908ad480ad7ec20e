//=========================================================================
// Logging
//=========================================================================
//
// Installs `env_logger` behind the `log` facade.
//
// The terminal doubles as the render surface, so by default records are
// piped into a log file instead of stdout/stderr.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs::{self, OpenOptions};

use env_logger::{Builder, Env, Target};
use log::{info, warn};

//=== Internal Dependencies ===============================================

use crate::core::config::LoggingConfig;

//=== init() ==============================================================

/// Initializes the global logger from `config`.
///
/// `RUST_LOG` still overrides `config.level`. Only the first successful
/// call installs a logger; subsequent calls are no-ops.
pub fn init(config: &LoggingConfig) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(config.level.as_str()));

    if let Some(path) = &config.file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = fs::create_dir_all(parent) {
                eprintln!("Could not create log directory {}: {}", parent.display(), e);
            }
        }

        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            Err(e) => {
                eprintln!("Could not open log file {}: {}", path.display(), e);
                builder.target(Target::Stderr);
            }
        }
    } else {
        builder.target(Target::Stderr);
    }

    match builder.try_init() {
        Ok(()) => info!("Logger initialized (level: {})", config.level),
        Err(_) => warn!("Logger already initialized, keeping existing configuration"),
    }
}

//=========================================================================
// Tests
//=========================================================================
