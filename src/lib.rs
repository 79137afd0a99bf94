//! # tagdbg
//!
//! Tag-scoped leveled debug logging for `no_std` environments.
//!
//! Firmware modules log under short tags (`"NET"`, `"RF"`, ...). A
//! [`TagRegistry`] maps each tag to a verbosity [`Level`] and clamps every
//! lookup to a global ceiling fixed at construction, so per-tag settings can
//! only lower the effective output, never raise it above the ceiling. Tags
//! without an override inherit the ceiling.
//!
//! The registry is an explicit context object: the emission macros
//! ([`tag_error!`], [`tag_warn!`], [`tag_info!`], [`tag_dbg!`],
//! [`tag_verbose!`]) take it as their first argument and only format and emit
//! when the tag's effective level allows the message's rank.
//!
//! The registry assumes single-threaded or externally-synchronized access,
//! matching typical embedded firmware. Wrap it in a mutex if it must be
//! shared across execution contexts.
//!
//! ## Features
//!
//! - `log`: Emits messages using [`log`](https://docs.rs/log/latest/log/).
//! - `tracing`: Emits messages using [`tracing`](https://docs.rs/tracing/latest/tracing/).
//! - `defmt`: Emits messages using [`defmt`](https://docs.rs/defmt/latest/defmt/index.html)
//!   and implements [`defmt::Format`](https://docs.rs/defmt/latest/defmt/trait.Format.html) for structs and enums.
//!
//! With no backend feature enabled, the macros compile down to the level
//! check alone.

#![no_std]
#![deny(unsafe_code)]
#![deny(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod level;
pub use level::Level;

mod registry;
pub use registry::{TagLevel, TagRegistry};

mod error;
pub use error::SetLevelError;

#[doc(hidden)]
pub mod logging;

mod macros;

#[cfg(test)]
mod tests;

#[cfg(test)]
extern crate std;
