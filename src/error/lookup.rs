use std::{error::Error, fmt};

/// Coordinate outside of the WGS84 domain.
///
/// Longitudes must lie in `[-180, 180]` and latitudes in `[-90, 90]`,
/// both ends included.
#[derive(Clone, Copy, Debug, PartialEq)]
// Value type is f64, hence not `Eq`.
#[allow(clippy::derive_partial_eq_without_eq)]
pub struct OutOfBounds {
    /// The offending value, in degrees.
    pub value: f64,
    /// The reason why it's invalid.
    pub reason: &'static str,
}

impl OutOfBounds {
    pub(crate) const fn new(value: f64, reason: &'static str) -> Self {
        Self { value, reason }
    }
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "coordinate out of bounds (got {:?}): {}",
            self.value, self.reason
        )
    }
}

impl Error for OutOfBounds {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

// -----------------------------------------------------------------------------

/// Zone name or id absent from the loaded dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownZone {
    /// The requested zone, as given by the caller.
    pub zone: String,
}

impl UnknownZone {
    pub(crate) fn new(zone: impl Into<String>) -> Self {
        Self { zone: zone.into() }
    }
}

impl fmt::Display for UnknownZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown timezone: {}", self.zone)
    }
}

impl Error for UnknownZone {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}
