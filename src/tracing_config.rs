//! Diagnostic logging for the CLI and for hosts that embed the parser.
//!
//! Logging stays off unless a filter is given in `DOCGRAPH_LOG`, which
//! falls back to `RUST_LOG`. Filters use the usual directive syntax, for
//! instance `docgraph_builder=debug` to see registry reservations and cycle
//! hits. `DOCGRAPH_LOG_FORMAT` picks the layout written to stderr:
//!
//! | value  | layout                                                  |
//! |--------|---------------------------------------------------------|
//! | `text` | one line per event, the default                         |
//! | `tree` | nested `build` spans indented under their parent        |
//! | `json` | newline-delimited objects for log collectors            |
//!
//! ```bash
//! DOCGRAPH_LOG=docgraph_builder=debug DOCGRAPH_LOG_FORMAT=tree docgraph check doc.json
//! ```

use std::env;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const FILTER_VAR: &str = "DOCGRAPH_LOG";
const FORMAT_VAR: &str = "DOCGRAPH_LOG_FORMAT";

/// Layout of log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Case-insensitive; anything unrecognised is `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// The filter directives from the environment, if logging was asked for.
fn env_filter() -> Option<EnvFilter> {
    match env::var(FILTER_VAR) {
        Ok(directives) => Some(EnvFilter::builder().parse_lossy(directives)),
        Err(_) if env::var_os(EnvFilter::DEFAULT_ENV).is_some() => {
            Some(EnvFilter::from_default_env())
        }
        Err(_) => None,
    }
}

/// Install the global subscriber described by the environment.
///
/// Calling this again, or after the host installed its own subscriber,
/// leaves the existing one in place.
pub fn init_tracing() {
    let Some(filter) = env_filter() else {
        return;
    };
    let format = LogFormat::parse(&env::var(FORMAT_VAR).unwrap_or_default());
    let registry = Registry::default().with(filter);

    let installed = match format {
        LogFormat::Tree => registry
            .with(
                tracing_tree::HierarchicalLayer::default()
                    .with_indent_amount(2)
                    .with_indent_lines(true)
                    .with_deferred_spans(true)
                    .with_span_retrace(true)
                    .with_targets(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
        assert_eq!(LogFormat::parse("verbose"), LogFormat::Text);
    }
}
