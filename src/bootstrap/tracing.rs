//! Tracing configuration for Artistly
//!
//! Installs the global `tracing-subscriber` registry. Logs go to stderr so
//! that stdout carries only the command's JSON output.
//!
//! ## Behavior / 行为
//!
//! - **Development**: debug level
//! - **Production**: info level
//! - **Environment filter**: `RUST_LOG` overrides the defaults

use std::io;

use tracing_subscriber::{fmt, prelude::*, registry};

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("artistly_app={level}"),
        format!("artistly_infra={level}"),
        // Transition logs for every ignored event are noisy outside development.
        if is_dev {
            "artistly_core=debug"
        } else {
            "artistly_core=warn"
        }
        .to_string(),
    ]
}

/// Initialize the tracing subscriber.
///
/// Call once from `main`, before any use case runs.
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    registry().with(env_filter).with(stderr_layer).try_init()?;

    Ok(())
}
