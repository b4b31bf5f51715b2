//! Logger setup shared by the binaries. The library itself only talks to
//! the `log` facade.

use env_logger::Env;

/// Install `env_logger`, honouring `RUST_LOG` and falling back to
/// `default_level`. Calling it twice is harmless.
pub fn init(default_level: &str) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
