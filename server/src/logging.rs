use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// An explicit `directives` string wins; otherwise `RUST_LOG` is honored,
/// defaulting to `info`.
pub fn init_tracing(directives: Option<&str>) {
    let filter = match directives {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();
}
