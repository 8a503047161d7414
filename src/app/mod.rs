mod cli;
mod error;
mod file_handler;
mod logger;
mod orchestrator;
mod presenter;
mod prompter;

pub use cli::Cli;
pub use error::AppError;
pub use orchestrator::run_app;

// Macros for use by child modules of app (orchestrator, prompter, file_handler).
// `super::logger` resolves because the macros expand inside sibling modules of
// `logger`, where `super` is the `app` module.
macro_rules! verbose_println {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            super::logger::log_verbose_message_args(format_args!($($arg)*));
        }
    };
}

macro_rules! verbose_eprintln {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            super::logger::log_verbose_error_args(format_args!($($arg)*));
        }
    };
}

// Bring the macros into scope for the sibling modules of `app`.
use verbose_eprintln;
use verbose_println;
