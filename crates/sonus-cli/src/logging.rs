//! Logger setup for the `sonus` binary.
//!
//! Logs go to stderr so stdout carries only command results.

/// Default log filter for a `-v` count.
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Initialise `env_logger`. `RUST_LOG`, when set, overrides the verbosity.
pub fn init(verbose: u8) {
    let env = env_logger::Env::default().default_filter_or(default_filter(verbose));
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(0), "warn");
        assert_eq!(default_filter(1), "info");
        assert_eq!(default_filter(2), "debug");
        assert_eq!(default_filter(9), "debug");
    }
}
