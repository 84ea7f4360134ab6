//! Typed identifier newtypes backed by short strings (`b1`, `s3`, `a12`, …).

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier string.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::new(s))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Barber`](crate::barber::Barber).
    BarberId
);

define_id!(
    /// Unique identifier for a catalog [`Service`](crate::service::Service).
    ServiceId
);

define_id!(
    /// Unique identifier for an [`Appointment`](crate::appointment::Appointment).
    AppointmentId
);

const APPOINTMENT_PREFIX: char = 'a';

impl AppointmentId {
    /// Build the identifier assigned to the `seq`-th stored appointment (`a{seq}`).
    #[must_use]
    pub fn from_sequence(seq: u64) -> Self {
        Self(format!("{APPOINTMENT_PREFIX}{seq}"))
    }

    /// Sequence number encoded in an `a{seq}` identifier, if any.
    #[must_use]
    pub fn sequence(&self) -> Option<u64> {
        self.0.strip_prefix(APPOINTMENT_PREFIX)?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = BarberId::new("b1");
        let text = id.to_string();
        let parsed: BarberId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let id = ServiceId::from("s3");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"s3\"");
        let parsed: ServiceId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn should_format_appointment_id_from_sequence() {
        assert_eq!(AppointmentId::from_sequence(7).as_str(), "a7");
    }

    #[test]
    fn should_extract_sequence_from_appointment_id() {
        assert_eq!(AppointmentId::from("a42").sequence(), Some(42));
        assert_eq!(AppointmentId::from("legacy").sequence(), None);
        assert_eq!(AppointmentId::from("a").sequence(), None);
    }
}
