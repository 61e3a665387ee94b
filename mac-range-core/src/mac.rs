use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A 48-bit hardware MAC address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MacAddr {
    octets: [u8; 6],
}

/// Errors returned when parsing a MAC address from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMacError {
    #[error("expected 12 hex characters, got {0}")]
    Length(usize),
    #[error("invalid hex digit in '{0}'")]
    Hex(String),
}

impl MacAddr {
    pub const fn new(octets: [u8; 6]) -> Self {
        Self { octets }
    }

    /// Build from a numeric value, keeping only the low 48 bits.
    pub fn from_value(value: u64) -> Self {
        let v = value & 0xFFFF_FFFF_FFFF;
        Self {
            octets: [
                (v >> 40) as u8,
                (v >> 32) as u8,
                (v >> 24) as u8,
                (v >> 16) as u8,
                (v >> 8) as u8,
                v as u8,
            ],
        }
    }

    /// The address as a big-endian 48-bit integer.
    pub fn value(&self) -> u64 {
        self.octets
            .iter()
            .fold(0u64, |acc, &octet| (acc << 8) | u64::from(octet))
    }

    pub fn octets(&self) -> [u8; 6] {
        self.octets
    }

    /// Organizationally unique identifier, the first three octets.
    pub fn oui(&self) -> [u8; 3] {
        [self.octets[0], self.octets[1], self.octets[2]]
    }

    /// The fourth octet, used by some vendors to encode the device model.
    pub fn model_byte(&self) -> u8 {
        self.octets[3]
    }

    /// The low 16 bits, encoded in the last two octets.
    pub fn low16(&self) -> u16 {
        (u16::from(self.octets[4]) << 8) | u16::from(self.octets[5])
    }
}

impl FromStr for MacAddr {
    type Err = ParseMacError;

    /// Accepts `:`/`-` separated or bare 12-hex-character forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let clean: String = s.trim().chars().filter(|c| *c != ':' && *c != '-').collect();
        if clean.len() != 12 {
            return Err(ParseMacError::Length(clean.len()));
        }

        let mut octets = [0u8; 6];
        for (i, chunk) in clean.as_bytes().chunks(2).enumerate() {
            let pair = std::str::from_utf8(chunk).map_err(|_| ParseMacError::Hex(clean.clone()))?;
            octets[i] =
                u8::from_str_radix(pair, 16).map_err(|_| ParseMacError::Hex(pair.to_string()))?;
        }
        Ok(Self { octets })
    }
}

impl Display for MacAddr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.octets[0],
            self.octets[1],
            self.octets[2],
            self.octets[3],
            self.octets[4],
            self.octets[5]
        )
    }
}

impl Serialize for MacAddr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MacAddr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
