//! Connector release stage definitions
//!
//! A release stage classifies how mature a connector is. The set of known
//! stages is small, but catalogs may carry stages this crate does not know
//! about, so unknown values are kept verbatim instead of being rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maturity classification of a connector
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReleaseStage {
    Alpha,
    Beta,
    GenerallyAvailable,
    Custom,
    /// Any stage not listed above, stored as written in the catalog
    Other(String),
}

impl ReleaseStage {
    /// Get the wire name of the stage (e.g. "generally_available")
    pub fn as_str(&self) -> &str {
        match self {
            ReleaseStage::Alpha => "alpha",
            ReleaseStage::Beta => "beta",
            ReleaseStage::GenerallyAvailable => "generally_available",
            ReleaseStage::Custom => "custom",
            ReleaseStage::Other(stage) => stage.as_str(),
        }
    }

    /// Whether this is the top maturity tier
    pub fn is_generally_available(&self) -> bool {
        matches!(self, ReleaseStage::GenerallyAvailable)
    }

    /// Whether connectors at this stage get a badge next to their name
    pub fn shows_badge(&self) -> bool {
        !self.is_generally_available()
    }

    /// Whether selecting a connector at this stage shows a maturity warning
    ///
    /// Only alpha and beta warn; custom and unknown stages stay silent.
    pub fn requires_warning(&self) -> bool {
        matches!(self, ReleaseStage::Alpha | ReleaseStage::Beta)
    }

    /// Message key for the stage's display name
    pub fn message_key(&self) -> String {
        format!("connector.releaseStage.{}", self.as_str())
    }
}

impl From<String> for ReleaseStage {
    fn from(value: String) -> Self {
        match value.as_str() {
            "alpha" => ReleaseStage::Alpha,
            "beta" => ReleaseStage::Beta,
            "generally_available" => ReleaseStage::GenerallyAvailable,
            "custom" => ReleaseStage::Custom,
            _ => ReleaseStage::Other(value),
        }
    }
}

impl From<ReleaseStage> for String {
    fn from(stage: ReleaseStage) -> Self {
        stage.as_str().to_string()
    }
}

impl FromStr for ReleaseStage {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ReleaseStage::from(s.to_string()))
    }
}

impl fmt::Display for ReleaseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
