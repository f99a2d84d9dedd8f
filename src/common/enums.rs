use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

bitflags! {
    /// Categories of input data an EA consumes.
    #[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct EaDataType: u32 {
        /// No data.
        const NONE = 0;
        /// Chart data.
        const CHART = 1 << 0;
        /// Indicator data.
        const INDICATOR = 1 << 1;
        // bit 2 is reserved
        /// Strategy data.
        const STRATEGY = 1 << 3;
        /// Symbol data.
        const SYMBOL = 1 << 4;
        /// Trade data.
        const TRADE = 1 << 5;
    }
}

bitflags! {
    /// Runtime state flags of an EA. Each flag is an independent
    /// condition, not a phase in a sequence.
    #[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct EaStateFlags: u32 {
        /// No flags.
        const NONE = 0;
        /// Is active (can trade).
        const ACTIVE = 1 << 0;
        /// Connected to a trade server.
        const CONNECTED = 1 << 1;
        /// Is enabled.
        const ENABLED = 1 << 2;
        /// Permission to use external libraries.
        const LIBS_ALLOWED = 1 << 3;
        /// Runs in optimization mode.
        const OPTIMIZATION = 1 << 4;
        /// Runs in testing mode.
        const TESTING = 1 << 5;
        /// Runs in visual testing mode.
        const TESTING_VISUAL = 1 << 6;
        /// Permission to trade on the chart.
        const TRADE_ALLOWED = 1 << 7;
    }
}

impl fmt::Display for EaDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        bitflags::parser::to_writer(self, f)
    }
}

impl fmt::Display for EaStateFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        bitflags::parser::to_writer(self, f)
    }
}

impl FromStr for EaDataType {
    type Err = bitflags::parser::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "NONE" {
            return Ok(Self::empty());
        }
        bitflags::parser::from_str(s)
    }
}

impl FromStr for EaStateFlags {
    type Err = bitflags::parser::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "NONE" {
            return Ok(Self::empty());
        }
        bitflags::parser::from_str(s)
    }
}

// Human-readable formats (TOML, JSON) carry the flag names, compact
// formats carry the raw bits, so stored values keep the exact bit
// layout above.
impl Serialize for EaDataType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for EaDataType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}

impl Serialize for EaStateFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for EaStateFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}
