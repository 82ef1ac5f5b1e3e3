use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is not set.
///
/// Panel mode is silent unless verbose; one-shot runs keep warnings and
/// errors on stderr.
pub const fn default_directive(verbose: bool, interactive: bool) -> &'static str {
    match (verbose, interactive) {
        (true, _) => "itl_cli=debug",
        (false, true) => "off",
        (false, false) => "itl_cli=warn",
    }
}

/// Sends diagnostics to stderr, filtered by `RUST_LOG` when set.
pub fn init(verbose: bool, interactive: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, interactive)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_is_silent_by_default() {
        assert_eq!(default_directive(false, true), "off");
    }

    #[test]
    fn test_one_shot_keeps_warnings() {
        assert_eq!(default_directive(false, false), "itl_cli=warn");
    }

    #[test]
    fn test_verbose_wins_in_both_modes() {
        assert_eq!(default_directive(true, true), "itl_cli=debug");
        assert_eq!(default_directive(true, false), "itl_cli=debug");
    }
}
