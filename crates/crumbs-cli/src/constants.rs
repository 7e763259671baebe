//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// `exec` exits with the code of the command it ran, so only the codes
/// crumbs itself produces live here.
pub mod exit_codes {
    /// Everything went fine.
    pub const SUCCESS: i32 = 0;

    /// Any domain failure: missing crumb, duplicate, wrong state, bad
    /// passphrase, corrupt store, undefined editor.
    pub const FAILURE: i32 = 1;
}

/// Environment variable holding the passphrase for non-interactive use.
pub const PASSPHRASE_ENV: &str = "CRUMBS_PASSPHRASE";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "CRUMBS_LOG";

/// Store file used when neither flag nor config names one.
pub const DEFAULT_STORE_FILE: &str = ".crumbs.yaml";
