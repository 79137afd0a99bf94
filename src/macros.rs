//! Emission macros.
//!
//! Every macro takes the registry as its first argument and evaluates its
//! format arguments only if the message passes the registry's level check.

/// Emits a message for `tag` at [`Error`](crate::Level::Error) rank, if the
/// registry's effective level for `tag` allows it.
#[macro_export]
macro_rules! tag_error {
    ($registry:expr, $tag:expr, $($arg:tt)+) => {{
        let tag = $tag;
        if $registry.enabled(tag, $crate::Level::Error) {
            $crate::logging::emit($crate::Level::Error, tag, ::core::format_args!($($arg)+));
        }
    }};
}

/// Emits a message for `tag` at [`Warn`](crate::Level::Warn) rank, if the
/// registry's effective level for `tag` allows it.
#[macro_export]
macro_rules! tag_warn {
    ($registry:expr, $tag:expr, $($arg:tt)+) => {{
        let tag = $tag;
        if $registry.enabled(tag, $crate::Level::Warn) {
            $crate::logging::emit($crate::Level::Warn, tag, ::core::format_args!($($arg)+));
        }
    }};
}

/// Emits a message for `tag` at [`Info`](crate::Level::Info) rank, if the
/// registry's effective level for `tag` allows it.
#[macro_export]
macro_rules! tag_info {
    ($registry:expr, $tag:expr, $($arg:tt)+) => {{
        let tag = $tag;
        if $registry.enabled(tag, $crate::Level::Info) {
            $crate::logging::emit($crate::Level::Info, tag, ::core::format_args!($($arg)+));
        }
    }};
}

/// Emits a message for `tag` at [`Dbg`](crate::Level::Dbg) rank, if the
/// registry's effective level for `tag` allows it.
#[macro_export]
macro_rules! tag_dbg {
    ($registry:expr, $tag:expr, $($arg:tt)+) => {{
        let tag = $tag;
        if $registry.enabled(tag, $crate::Level::Dbg) {
            $crate::logging::emit($crate::Level::Dbg, tag, ::core::format_args!($($arg)+));
        }
    }};
}

/// Emits a message for `tag` at [`Verbose`](crate::Level::Verbose) rank, if
/// the registry's effective level for `tag` allows it.
#[macro_export]
macro_rules! tag_verbose {
    ($registry:expr, $tag:expr, $($arg:tt)+) => {{
        let tag = $tag;
        if $registry.enabled(tag, $crate::Level::Verbose) {
            $crate::logging::emit($crate::Level::Verbose, tag, ::core::format_args!($($arg)+));
        }
    }};
}

/// Emits an error for `tag` prefixed with `Code: {code}. `, but only if
/// `code` is nonzero.
///
/// Useful for reporting fallible calls that return a nonzero status on
/// failure without an `if` at every call site.
#[macro_export]
macro_rules! error_if_nonzero {
    ($registry:expr, $tag:expr, $code:expr, $($arg:tt)+) => {{
        let code = $code;
        if code != 0 {
            $crate::tag_error!(
                $registry,
                $tag,
                "Code: {}. {}",
                code,
                ::core::format_args!($($arg)+)
            );
        }
    }};
}

/// Emits an error for `tag` prefixed with `Code: 0. `, but only if `code` is
/// zero.
///
/// Counterpart of [`error_if_nonzero!`](crate::error_if_nonzero!) for calls
/// where zero is the failure status.
#[macro_export]
macro_rules! error_if_zero {
    ($registry:expr, $tag:expr, $code:expr, $($arg:tt)+) => {{
        if $code == 0 {
            $crate::tag_error!(
                $registry,
                $tag,
                "Code: 0. {}",
                ::core::format_args!($($arg)+)
            );
        }
    }};
}

/// Emits a message for `tag` at `rank`, prefixed with `Code: {code}. `, but
/// only if `code` equals `expected`.
#[macro_export]
macro_rules! log_if_code {
    ($registry:expr, $rank:expr, $tag:expr, $code:expr, $expected:expr, $($arg:tt)+) => {{
        let tag = $tag;
        let rank = $rank;
        let code = $code;
        if code == $expected && $registry.enabled(tag, rank) {
            $crate::logging::emit(
                rank,
                tag,
                ::core::format_args!("Code: {}. {}", code, ::core::format_args!($($arg)+)),
            );
        }
    }};
}
