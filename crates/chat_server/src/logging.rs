use env_logger::Env;

/// Initialize env_logger. `RUST_LOG` wins when set; otherwise `debug`
/// selects between debug and info output.
pub fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .try_init();
}
