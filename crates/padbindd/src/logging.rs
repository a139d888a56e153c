// Colorized wrappers for logging

use fern::Dispatch;

#[inline(always)]
pub(crate) fn format_log(message: &str) -> String {
    let now = chrono::Local::now().format("%Y.%m.%d %H:%M:%S").to_string();
    format!("[{now}] {message}")
}

#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => {
        let message = $crate::logging::format_log(&format!($($arg)*));
        log::error!("{}", message.bright_red());
    }
}

#[macro_export]
macro_rules! print_info {
    ($($arg:tt)*) => {
        let message = $crate::logging::format_log(&format!($($arg)*));
        log::info!("{message}");
    }
}

#[macro_export]
macro_rules! print_debug {
    ($($arg:tt)*) => {
        let message = $crate::logging::format_log(&format!($($arg)*));
        log::debug!("{}", message.dimmed());
    }
}

#[macro_export]
macro_rules! print_warning {
    ($($arg:tt)*) => {
        let message = $crate::logging::format_log(&format!($($arg)*));
        log::warn!("{}", message.bright_yellow());
    }
}

const DAEMON_TARGET: &str = "padbindd";
const LIBRARY_TARGETS: [&str; 3] = ["padbind_handler", "padbind_control", "padbind_gamepad"];

/// Setup the logger.
///
/// Daemon messages are formatted by the `print_*` macros; library records
/// get the same timestamp prefix here.
pub(crate) fn setup(verbose: bool, no_color: bool) -> Result<(), log::SetLoggerError> {
    let log_level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let daemon = Dispatch::new()
        .filter(|meta| meta.target().starts_with(DAEMON_TARGET))
        .chain(std::io::stdout());
    let libraries = Dispatch::new()
        .filter(|meta| !meta.target().starts_with(DAEMON_TARGET))
        .format(|out, message, record| {
            let line = format!("{} {}: {message}", record.level(), record.target());
            out.finish(format_args!("{}", format_log(&line)));
        })
        .chain(std::io::stdout());

    let mut dispatch = Dispatch::new()
        .level(log::LevelFilter::Error) // Hide enigo logs
        .level_for(DAEMON_TARGET, log_level);
    for target in LIBRARY_TARGETS {
        dispatch = dispatch.level_for(target, log_level);
    }
    dispatch.chain(daemon).chain(libraries).apply()?;

    if no_color {
        colored::control::set_override(false);
    }
    Ok(())
}
