use std::fmt::Display;
use std::str::FromStr;

use bio::bio_types::strand::ReqStrand;
use serde::{
    Deserialize,
    Serialize,
};

use crate::error::RegionError;

/// Strand of a gene record.
///
/// Gene tables only carry stranded features, so unlike general annotation
/// formats there is no unknown strand: anything other than `+` or `-` is a
/// malformed record.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord)]
pub enum Strand {
    /// Forward strand.
    Forward,
    /// Reverse strand.
    Reverse,
}

impl FromStr for Strand {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Strand::Forward),
            "-" => Ok(Strand::Reverse),
            other => {
                Err(RegionError::malformed(
                    other,
                    "strand must be '+' or '-'",
                ))
            },
        }
    }
}

impl TryFrom<char> for Strand {
    type Error = RegionError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Strand::Forward),
            '-' => Ok(Strand::Reverse),
            other => {
                Err(RegionError::malformed(
                    other,
                    "strand must be '+' or '-'",
                ))
            },
        }
    }
}

impl From<Strand> for char {
    fn from(value: Strand) -> Self {
        match value {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

impl From<Strand> for bool {
    fn from(value: Strand) -> bool {
        matches!(value, Strand::Forward)
    }
}

impl From<bool> for Strand {
    fn from(value: bool) -> Self {
        match value {
            true => Strand::Forward,
            false => Strand::Reverse,
        }
    }
}

impl From<ReqStrand> for Strand {
    fn from(value: ReqStrand) -> Self {
        match value {
            ReqStrand::Forward => Strand::Forward,
            ReqStrand::Reverse => Strand::Reverse,
        }
    }
}

impl From<Strand> for ReqStrand {
    fn from(value: Strand) -> Self {
        match value {
            Strand::Forward => ReqStrand::Forward,
            Strand::Reverse => ReqStrand::Reverse,
        }
    }
}

impl Display for Strand {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

impl Serialize for Strand {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer, {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Strand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>, {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}
