//! Newtype wrappers around backend-assigned integer identifiers.
//!
//! Using distinct types prevents accidentally passing a `TenantId` where a
//! `RoomId` is expected. All ids serialize as plain JSON numbers.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `i64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Create an identifier from a raw backend value.
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Return the raw backend value.
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for an account.
    AccountId
);

define_id!(
    /// Unique identifier for a room.
    RoomId
);

define_id!(
    /// Unique identifier for a tenant record.
    TenantId
);

define_id!(
    /// Unique identifier for a payment.
    PaymentId
);

define_id!(
    /// Unique identifier for a notification.
    NotificationId
);

define_id!(
    /// Unique identifier for an archive (checkout) record.
    ArchiveId
);

define_id!(
    /// Unique identifier for a navigation catalog entry.
    NavigationItemId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_numbers() {
        let json = serde_json::to_string(&RoomId::new(12)).unwrap();
        assert_eq!(json, "12");
        let parsed: TenantId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, TenantId(7));
    }

    #[test]
    fn test_from_str_trims() {
        assert_eq!(" 42 ".parse::<AccountId>().unwrap(), AccountId(42));
        assert!("abc".parse::<AccountId>().is_err());
    }
}
