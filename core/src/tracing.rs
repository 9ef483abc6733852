//! Tracing utilities for adapter construction.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site. The feature is checked in the crate that expands the
//! macro, so dialect crates forward their own `tracing` feature.

/// Emit a debug-level event when a parser option rewrites a registry entry.
///
/// ```ignore
/// schemagen_trace_override!("definitions.Numeric", NumericParser::Number);
/// ```
#[macro_export]
macro_rules! schemagen_trace_override {
    ($entry:expr, $choice:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(entry = $entry, choice = %$choice, "schemagen.adapter.override");
    };
}

/// Emit a warn-level event when an option value is not recognized and the
/// default is used instead.
///
/// ```ignore
/// schemagen_trace_ignored!("numericParser", &raw);
/// ```
#[macro_export]
macro_rules! schemagen_trace_ignored {
    ($option:expr, $value:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!(option = $option, value = %$value, "schemagen.options.ignored");
    };
}

/// Emit a debug-level event summarizing a freshly built adapter.
#[macro_export]
macro_rules! schemagen_trace_adapter {
    ($dialect:expr, $scalars:expr, $definitions:expr, $imports:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(
            dialect = %$dialect,
            scalars = $scalars,
            definitions = $definitions,
            imports = $imports,
            "schemagen.adapter.built"
        );
    };
}
