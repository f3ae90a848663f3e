use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber, adding `directive` on top of `RUST_LOG`.
///
/// Only the first call in a process has any effect.
pub fn init_tracing_with(directive: &str) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        match directive.parse::<Directive>() {
            Ok(parsed) => filter = filter.add_directive(parsed),
            Err(err) => eprintln!("ignoring log directive `{directive}`: {err}"),
        }

        // A subscriber installed by the host application wins.
        let _ = fmt().with_env_filter(filter).try_init();
    });
}
