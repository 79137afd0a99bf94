//! Verbosity ranks.

/// A verbosity rank, ordered from silent to most verbose.
///
/// The integer ranks match the conventional ESP debug levels, so a [`Level`]
/// can be compared against externally configured numeric levels via
/// [`rank`](Level::rank) and [`from_rank`](Level::from_rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Level {
    /// No output at all.
    None = 0,
    /// Error messages.
    Error = 1,
    /// Error and warning messages.
    Warn = 2,
    /// Error, warning and info messages.
    Info = 3,
    /// Error, warning, info and debug messages.
    Dbg = 4,
    /// All defined messages.
    Verbose = 5,
}

impl Level {
    /// Returns the integer rank of this level.
    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Returns the level with the given integer rank, or `None` if the rank
    /// is outside the defined scale.
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Self::None),
            1 => Some(Self::Error),
            2 => Some(Self::Warn),
            3 => Some(Self::Info),
            4 => Some(Self::Dbg),
            5 => Some(Self::Verbose),
            _ => None,
        }
    }

    /// Returns the display label of this level.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Dbg => "DBG",
            Self::Verbose => "VERBOSE",
        }
    }

    /// Returns the display label for a raw integer rank.
    ///
    /// Falls back to `"UNKNOWN"` for ranks outside the defined scale, so
    /// display paths fed by untyped ranks never produce undefined output.
    pub const fn name(rank: u8) -> &'static str {
        match Self::from_rank(rank) {
            Some(level) => level.as_str(),
            None => "UNKNOWN",
        }
    }

    /// Returns the smaller of two levels.
    #[inline]
    pub const fn min(self, other: Self) -> Self {
        if self.rank() <= other.rank() { self } else { other }
    }
}

impl core::fmt::Display for Level {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
