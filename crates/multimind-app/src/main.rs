mod app_state;
mod bridge;
mod cli;

use std::path::PathBuf;

use multimind_config::MultimindConfig;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const DEFAULT_LOG_DIRECTIVE: &str = "multimind=info";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = multimind_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- MultiMind crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("-------------------------\n");

        default_hook(info);
    }));
}

fn init_logging(directive: &str) {
    let parsed: Result<Directive, _> = directive
        .parse()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse());
    let mut filter = EnvFilter::from_default_env();
    if let Ok(d) = parsed {
        filter = filter.add_directive(d);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// The scratch store and the root of the service partitions.
fn data_paths(config: &MultimindConfig) -> multimind_common::Result<(PathBuf, PathBuf)> {
    Ok((
        multimind_platform::scratch_dir(&config.scratch.dir_name)?,
        multimind_platform::partitions_dir()?,
    ))
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Config is read before logging starts so `[logging] level` applies;
    // a load error is reported once the subscriber is up.
    let loaded = match &args.config {
        Some(path) => multimind_config::load_config_from(path),
        None => multimind_config::load_config(),
    };
    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.directive().to_string(),
        (None, Err(_)) => DEFAULT_LOG_DIRECTIVE.to_string(),
    };
    init_logging(&directive);

    tracing::info!("MultiMind v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        MultimindConfig::default()
    });

    if let Err(e) = multimind_platform::ensure_dirs(&config.scratch.dir_name) {
        tracing::warn!("Failed to create directories: {e}");
    }

    let (scratch, partitions) = match data_paths(&config) {
        Ok(paths) => paths,
        Err(e) => {
            tracing::error!("No usable data directory: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(
        scratch = %scratch.display(),
        partitions = %partitions.display(),
        "data directories resolved"
    );

    let startup_service = args.startup_service(&config.startup.default_service);

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::MultimindApp::new(config, scratch, partitions, startup_service);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
