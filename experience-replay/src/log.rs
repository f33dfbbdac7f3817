use log::LevelFilter;

/// Log target prefix of this crate; in tests its records pass at debug level, those of dependencies at warn
#[cfg(test)]
const CRATE_TARGET: &str = "experience_replay";

/// Info level logging for binaries; `RUST_LOG` overrides it.
pub fn init_logging() {
    env_logger::builder()
        .format_target(false)
        .format_timestamp_secs()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init()
}

#[cfg(test)]
#[ctor::ctor]
fn init() {
    env_logger::builder()
        .format_timestamp_secs()
        .filter_level(LevelFilter::Warn)
        .filter_module(CRATE_TARGET, LevelFilter::Debug)
        .parse_default_env()
        .is_test(true)
        .init()
}
