/// An error that can occur while registering a tag level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetLevelError {
    /// The registry is at capacity and the tag is not already registered.
    RegistryFull,
}

impl core::fmt::Display for SetLevelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SetLevelError::RegistryFull => write!(f, "registry full"),
        }
    }
}

impl core::error::Error for SetLevelError {}
