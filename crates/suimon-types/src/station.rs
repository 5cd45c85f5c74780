//! Station addressing and identity.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::InputError;

/// Placeholder used for any identity field the portal did not provide.
pub const UNKNOWN: &str = "Unknown";

/// Opaque station token from the portal's own addressing scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Creates a station identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Sub-category code (`KIND`) of a data family at a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KindCode(u32);

impl KindCode {
    /// Creates a kind code.
    #[must_use]
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Returns the numeric code.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for KindCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for KindCode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u32>() {
            Ok(code) if code > 0 => Ok(Self(code)),
            _ => Err(InputError::InvalidKind(s.to_string())),
        }
    }
}

/// Names that place a station in the portal's water-system hierarchy.
///
/// Every field falls back to [`UNKNOWN`] on its own, so a partially parsed
/// row still yields a usable directory name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StationIdentity {
    /// Water system (水系名).
    water_system: String,
    /// River (河川名).
    river: String,
    /// Observation station (観測所名).
    station: String,
}

impl StationIdentity {
    /// Creates an identity, substituting [`UNKNOWN`] for blank fields.
    #[must_use]
    pub fn new(
        water_system: impl Into<String>,
        river: impl Into<String>,
        station: impl Into<String>,
    ) -> Self {
        Self {
            water_system: or_unknown(water_system.into()),
            river: or_unknown(river.into()),
            station: or_unknown(station.into()),
        }
    }

    /// Returns the identity used when the portal page could not be read.
    #[must_use]
    pub fn unknown() -> Self {
        Self::new(UNKNOWN, UNKNOWN, UNKNOWN)
    }

    /// Returns the water-system name.
    #[must_use]
    pub fn water_system(&self) -> &str {
        &self.water_system
    }

    /// Returns the river name.
    #[must_use]
    pub fn river(&self) -> &str {
        &self.river
    }

    /// Returns the station name.
    #[must_use]
    pub fn station(&self) -> &str {
        &self.station
    }

    /// Returns true if no field could be resolved.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.water_system == UNKNOWN && self.river == UNKNOWN && self.station == UNKNOWN
    }
}

impl Default for StationIdentity {
    fn default() -> Self {
        Self::unknown()
    }
}

impl std::fmt::Display for StationIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {} / {}", self.water_system, self.river, self.station)
    }
}

fn or_unknown(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        UNKNOWN.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_blank_fields_fall_back() {
        let identity = StationIdentity::new("利根川", "  ", "");
        assert_eq!(identity.water_system(), "利根川");
        assert_eq!(identity.river(), UNKNOWN);
        assert_eq!(identity.station(), UNKNOWN);
        assert!(!identity.is_unknown());
    }

    #[test]
    fn test_identity_unknown() {
        let identity = StationIdentity::unknown();
        assert!(identity.is_unknown());
        assert_eq!(identity, StationIdentity::default());
    }

    #[test]
    fn test_kind_code_parse() {
        assert_eq!("3".parse::<KindCode>().unwrap(), KindCode::new(3));
        assert_eq!(" 8 ".parse::<KindCode>().unwrap().get(), 8);
        assert!("0".parse::<KindCode>().is_err());
        assert!("x1".parse::<KindCode>().is_err());
    }

    #[test]
    fn test_station_id_display() {
        let id = StationId::from("102111282214010");
        assert_eq!(id.to_string(), "102111282214010");
        assert_eq!(id.as_str(), "102111282214010");
    }
}
