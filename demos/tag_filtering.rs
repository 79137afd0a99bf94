//! Shows per-tag filtering against a global ceiling.
//!
//! ```not_rust
//! cargo run --example tag_filtering --features tracing
//! ```

use core::error::Error;

use tagdbg::{Level, TagRegistry, error_if_nonzero, tag_dbg, tag_error, tag_info, tag_verbose};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_env_filter("trace").init();

    // Nothing ever emits above DBG, no matter what the tags request.
    let mut registry: TagRegistry<8> = TagRegistry::new(Level::Dbg);

    registry.set_level("NET", Level::Verbose)?;
    registry.set_level("RADIO", Level::Error)?;

    tag_info!(registry, "NET", "effective level is {}", registry.level_str("NET"));
    tag_dbg!(registry, "NET", "link up after {} ms", 420);
    tag_verbose!(registry, "NET", "never printed, VERBOSE is above the ceiling");

    tag_info!(registry, "RADIO", "never printed, RADIO only logs errors");
    tag_error!(registry, "RADIO", "sync lost on channel {}", 7);
    error_if_nonzero!(registry, "RADIO", -3, "transceiver init failed");

    // Dropping the override puts RADIO back at the ceiling.
    registry.reset_level("RADIO");
    tag_info!(registry, "RADIO", "back to the {} default", registry.ceiling());

    Ok(())
}
