use env_logger::Env;

/// Initialize logging using env_logger.
/// Filtering follows the RUST_LOG environment variable and falls back to `warn`,
/// e.g. `RUST_LOG=conman_core=debug conman -ls`
pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}
