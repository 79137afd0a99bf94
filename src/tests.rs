#![allow(missing_docs)]

use crate::{
    Level, TagRegistry, error_if_nonzero, error_if_zero, log_if_code, tag_dbg, tag_error,
    tag_info, tag_verbose, tag_warn,
};

#[test]
fn net_tag_clamped_to_dbg_ceiling() {
    let mut registry = TagRegistry::<8>::new(Level::Dbg);

    registry.set_level("NET", Level::Verbose).unwrap();

    assert_eq!(registry.level("NET"), Level::Dbg);
    assert_eq!(registry.level_str("NET"), "DBG");
}

#[test]
fn unregistered_rf_tag_inherits_dbg_ceiling() {
    let registry = TagRegistry::<8>::new(Level::Dbg);

    assert_eq!(registry.level("RF"), Level::Dbg);
    assert_eq!(registry.level_str("RF"), "DBG");
}

#[test]
fn reregistering_keeps_a_single_entry() {
    let mut registry = TagRegistry::<8>::new(Level::Verbose);

    registry.set_level("A", Level::Warn).unwrap();
    registry.set_level("A", Level::Info).unwrap();

    assert_eq!(registry.len(), 1);
    let entry = registry.tags().next().unwrap();
    assert_eq!(entry.tag(), "A");
    assert_eq!(entry.level(), Level::Info);
}

#[test]
fn suppressed_macro_skips_format_arguments() {
    let mut registry = TagRegistry::<8>::new(Level::Verbose);
    registry.set_level("NET", Level::Error).unwrap();

    let mut evaluated = false;

    tag_info!(registry, "NET", "{}", {
        evaluated = true;
        "ignored"
    });

    assert!(!evaluated);

    tag_error!(registry, "NET", "{}", {
        evaluated = true;
        "emitted"
    });

    assert!(evaluated);
}

#[test]
fn macros_follow_the_ceiling_for_unregistered_tags() {
    let registry = TagRegistry::<8>::new(Level::Info);

    let mut hits = 0;

    tag_error!(registry, "RF", "{}", {
        hits += 1;
        "e"
    });
    tag_info!(registry, "RF", "{}", {
        hits += 1;
        "i"
    });
    tag_dbg!(registry, "RF", "{}", {
        hits += 1;
        "d"
    });
    tag_verbose!(registry, "RF", "{}", {
        hits += 1;
        "v"
    });

    assert_eq!(hits, 2);
}

#[test]
fn warn_rank_is_gated_like_the_rest() {
    let mut registry = TagRegistry::<8>::new(Level::Verbose);
    registry.set_level("NET", Level::Error).unwrap();

    let mut evaluated = false;

    tag_warn!(registry, "NET", "{}", {
        evaluated = true;
        "w"
    });

    assert!(!evaluated);
}

#[test]
fn error_if_nonzero_fires_only_on_nonzero_codes() {
    let registry = TagRegistry::<8>::new(Level::Verbose);

    let mut evaluated = false;

    error_if_nonzero!(registry, "NET", 0, "{}", {
        evaluated = true;
        "ok"
    });
    assert!(!evaluated);

    error_if_nonzero!(registry, "NET", -7, "{}", {
        evaluated = true;
        "failed"
    });
    assert!(evaluated);
}

#[test]
fn error_if_zero_fires_only_on_zero_codes() {
    let registry = TagRegistry::<8>::new(Level::Verbose);

    let mut evaluated = false;

    error_if_zero!(registry, "NET", 3, "{}", {
        evaluated = true;
        "ok"
    });
    assert!(!evaluated);

    error_if_zero!(registry, "NET", 0, "{}", {
        evaluated = true;
        "no handle"
    });
    assert!(evaluated);
}

#[test]
fn error_macros_respect_the_tag_level() {
    let mut registry = TagRegistry::<8>::new(Level::Verbose);
    registry.set_level("NET", Level::None).unwrap();

    let mut evaluated = false;

    error_if_nonzero!(registry, "NET", 1, "{}", {
        evaluated = true;
        "failed"
    });

    assert!(!evaluated);
}

#[test]
fn log_if_code_matches_expected_code_and_rank() {
    let mut registry = TagRegistry::<8>::new(Level::Verbose);

    let mut evaluated = false;

    log_if_code!(registry, Level::Warn, "NET", 2, 2, "{}", {
        evaluated = true;
        "matched"
    });
    assert!(evaluated);

    evaluated = false;
    log_if_code!(registry, Level::Warn, "NET", 2, 5, "{}", {
        evaluated = true;
        "not matched"
    });
    assert!(!evaluated);

    registry.set_level("NET", Level::Error).unwrap();
    log_if_code!(registry, Level::Warn, "NET", 2, 2, "{}", {
        evaluated = true;
        "suppressed"
    });
    assert!(!evaluated);
}
