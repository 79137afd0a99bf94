//! The tag level registry.

use crate::{Level, error::SetLevelError};

/// A registered per-tag verbosity override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TagLevel {
    /// The tag this override applies to.
    tag: &'static str,
    /// The requested level, stored unclamped.
    level: Level,
}

impl TagLevel {
    /// Returns the tag this override applies to.
    #[inline]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    /// Returns the requested level, before ceiling clamping.
    #[inline]
    pub const fn level(&self) -> Level {
        self.level
    }
}

/// A registry mapping tags to verbosity levels, clamped to a global ceiling.
///
/// `N` is the maximum number of tags that can hold an override at once.
/// Lookups are linear scans; tags are compared by exact byte equality and are
/// unique within the registry.
///
/// The ceiling is fixed at construction. A tag may request a level above the
/// ceiling, but [`level`](TagRegistry::level) never returns more than the
/// ceiling, and tags without an override resolve to the ceiling itself. Per-tag
/// settings can only lower output, never raise it.
///
/// The registry performs no synchronization. Share it across execution
/// contexts only behind a mutex.
///
/// # Example
///
/// ```rust
/// use tagdbg::{Level, TagRegistry};
///
/// let mut registry: TagRegistry<8> = TagRegistry::new(Level::Dbg);
///
/// registry.set_level("NET", Level::Verbose)?;
///
/// // Requests above the ceiling are clamped at read time.
/// assert_eq!(registry.level("NET"), Level::Dbg);
///
/// // Unregistered tags inherit the ceiling.
/// assert_eq!(registry.level("RF"), Level::Dbg);
///
/// registry.set_level("NET", Level::Error)?;
/// assert_eq!(registry.level("NET"), Level::Error);
/// assert_eq!(registry.level_str("NET"), "ERROR");
/// # Ok::<(), tagdbg::SetLevelError>(())
/// ```
#[derive(Debug)]
pub struct TagRegistry<const N: usize> {
    ceiling: Level,
    tags: heapless::Vec<TagLevel, N>,
}

impl<const N: usize> TagRegistry<N> {
    /// Creates a new [`TagRegistry`] with the given `ceiling`.
    #[inline]
    pub const fn new(ceiling: Level) -> Self {
        Self {
            ceiling,
            tags: heapless::Vec::new(),
        }
    }

    /// Returns the global ceiling.
    #[inline]
    pub const fn ceiling(&self) -> Level {
        self.ceiling
    }

    /// Returns the number of registered overrides.
    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns `true` if no overrides are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Returns the maximum number of overrides the registry can hold.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns an iterator over the registered overrides.
    pub fn tags(&self) -> impl Iterator<Item = &TagLevel> {
        self.tags.iter()
    }

    /// Registers `level` for `tag`, overwriting any existing override.
    ///
    /// The level is stored as requested. Values above the ceiling are kept
    /// and clamped on lookup instead.
    ///
    /// # Errors
    ///
    /// Returns [`SetLevelError::RegistryFull`] if `tag` is new and the
    /// registry already holds `N` overrides. Overwriting an existing tag
    /// always succeeds.
    pub fn set_level(&mut self, tag: &'static str, level: Level) -> Result<(), SetLevelError> {
        for entry in self.tags.iter_mut() {
            if entry.tag == tag {
                entry.level = level;
                return Ok(());
            }
        }

        self.tags
            .push(TagLevel { tag, level })
            .map_err(|_| SetLevelError::RegistryFull)
    }

    /// Removes the override for `tag`, so it defers to the ceiling again.
    ///
    /// Does nothing if `tag` has no override.
    pub fn reset_level(&mut self, tag: &str) {
        if let Some(index) = self.tags.iter().position(|entry| entry.tag == tag) {
            self.tags.remove(index);
        }
    }

    /// Returns the effective level for `tag`.
    ///
    /// The first entry with an exactly matching tag wins, clamped to the
    /// ceiling. Unregistered tags resolve to the ceiling.
    pub fn level(&self, tag: &str) -> Level {
        for entry in self.tags.iter() {
            if entry.tag == tag {
                return entry.level.min(self.ceiling);
            }
        }

        self.ceiling
    }

    /// Returns the display label of the effective level for `tag`.
    pub fn level_str(&self, tag: &str) -> &'static str {
        self.level(tag).as_str()
    }

    /// Returns `true` if a message at `rank` should be emitted for `tag`.
    ///
    /// This is the entire contract the emission macros consume.
    #[inline]
    pub fn enabled(&self, tag: &str, rank: Level) -> bool {
        self.level(tag) >= rank
    }
}
