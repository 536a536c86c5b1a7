//! Command-line interface for the `tpcfix` binary.
//!
//! | Submodule   | Responsibility |
//! |-------------|----------------|
//! | [`args`]    | clap definition of the arguments and conversion to [`Prefs`](crate::io::Prefs). |
//! | [`logging`] | Verbosity flags to `env_logger` setup. |

pub mod args;
pub mod logging;
