//! Line-encoding scheme identifiers.

use serde::{Deserialize, Serialize};

/// The closed set of line-encoding schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// Non-Return-to-Zero, Level: the level directly encodes the bit.
    #[default]
    NrzL,
    /// Non-Return-to-Zero, Invert-on-ones.
    NrzI,
    /// Alternate Mark Inversion: ones alternate polarity, zeros sit at 0V.
    BipolarAmi,
    /// Inverse of AMI: zeros alternate polarity, ones sit at 0V.
    Pseudoternary,
    /// Two opposite half-periods per bit, order keyed by the bit value.
    Manchester,
    /// Two opposite half-periods per bit, first half keyed by transition history.
    DifferentialManchester,
}

impl Scheme {
    /// All schemes, in selector order.
    pub const ALL: [Scheme; 6] = [
        Scheme::NrzL,
        Scheme::NrzI,
        Scheme::BipolarAmi,
        Scheme::Pseudoternary,
        Scheme::Manchester,
        Scheme::DifferentialManchester,
    ];

    /// Returns the scheme as a snake_case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::NrzL => "nrz_l",
            Scheme::NrzI => "nrz_i",
            Scheme::BipolarAmi => "bipolar_ami",
            Scheme::Pseudoternary => "pseudoternary",
            Scheme::Manchester => "manchester",
            Scheme::DifferentialManchester => "differential_manchester",
        }
    }

    /// Returns the human-readable selector label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Scheme::NrzL => "NRZ-L",
            Scheme::NrzI => "NRZ-I",
            Scheme::BipolarAmi => "Bipolar AMI",
            Scheme::Pseudoternary => "Pseudoternary",
            Scheme::Manchester => "Manchester",
            Scheme::DifferentialManchester => "Differential Manchester",
        }
    }

    /// Number of samples emitted per input bit (1 or 2).
    pub fn samples_per_bit(&self) -> usize {
        match self {
            Scheme::Manchester | Scheme::DifferentialManchester => 2,
            _ => 1,
        }
    }

    /// Looks up a scheme by name.
    ///
    /// Matching ignores case and treats spaces, hyphens, and underscores as
    /// the same separator, so `"NRZ-L"`, `"nrz_l"` and `"Bipolar AMI"` all
    /// resolve. Returns `None` for anything else.
    pub fn from_name(name: &str) -> Option<Scheme> {
        let normalized: String = name
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "nrz_l" | "nrzl" => Some(Scheme::NrzL),
            "nrz_i" | "nrzi" => Some(Scheme::NrzI),
            "bipolar_ami" | "ami" => Some(Scheme::BipolarAmi),
            "pseudoternary" => Some(Scheme::Pseudoternary),
            "manchester" => Some(Scheme::Manchester),
            "differential_manchester" | "diff_manchester" => {
                Some(Scheme::DifferentialManchester)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a scheme name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown line-encoding scheme '{0}'")]
pub struct UnknownScheme(pub String);

impl std::str::FromStr for Scheme {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scheme::from_name(s).ok_or_else(|| UnknownScheme(s.to_string()))
    }
}
