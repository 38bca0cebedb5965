use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::domain::error::InvalidId;

/// Identifier of a task, assigned by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

/// Identifier of a user; also used for task assignees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

macro_rules! numeric_id {
    ($name:ident) => {
        impl $name {
            /// Returns `None` for zero; identifiers are positive.
            pub fn new(raw: u64) -> Option<Self> {
                (raw >= 1).then_some(Self(raw))
            }

            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = InvalidId;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u64>()
                    .ok()
                    .and_then(Self::new)
                    .ok_or_else(|| InvalidId(s.to_string()))
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = u64::deserialize(deserializer)?;
                Self::new(raw).ok_or_else(|| de::Error::custom(InvalidId(raw.to_string())))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

numeric_id!(TaskId);
numeric_id!(UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_an_id() {
        assert_eq!(TaskId::new(0), None);
        assert_eq!(UserId::new(0), None);
        assert_eq!(UserId::new(7), Some(UserId(7)));
    }

    #[test]
    fn ids_serialize_as_bare_numbers() {
        assert_eq!(serde_json::to_string(&TaskId(42)).unwrap(), "42");
        let back: UserId = serde_json::from_str("3").unwrap();
        assert_eq!(back, UserId(3));
    }

    #[test]
    fn parse_from_path_segment() {
        assert_eq!(" 12 ".parse::<TaskId>().unwrap(), TaskId(12));
        assert!("abc".parse::<TaskId>().is_err());
    }

    #[test]
    fn zero_is_rejected_when_parsed() {
        assert_eq!("0".parse::<TaskId>(), Err(InvalidId("0".to_string())));
        assert!(" 0 ".parse::<UserId>().is_err());
        assert!("-3".parse::<UserId>().is_err());
    }

    #[test]
    fn zero_is_rejected_when_deserialized() {
        assert!(serde_json::from_str::<TaskId>("0").is_err());
        let err = serde_json::from_str::<UserId>("0").unwrap_err();
        assert!(err.to_string().contains("positive integer"));
    }
}
