//! Typed partial update of an [`Appointment`](super::Appointment).

use serde::{Deserialize, Serialize};

use crate::id::{BarberId, ServiceId};
use crate::time::{self, LocalDateTime};

/// One optional value per mutable appointment field.
///
/// Fields left as `None` keep their current value; `Some` overwrites it.
/// The identifier is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppointmentPatch {
    pub barber_id: Option<BarberId>,
    pub service_id: Option<ServiceId>,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    #[serde(deserialize_with = "time::deserialize_optional_local_date_time")]
    pub date: Option<LocalDateTime>,
    pub confirmed: Option<bool>,
    pub completed: Option<bool>,
    pub cancelled: Option<bool>,
}

impl AppointmentPatch {
    /// Patch that only sets the `confirmed` flag.
    #[must_use]
    pub fn confirmed(value: bool) -> Self {
        Self {
            confirmed: Some(value),
            ..Self::default()
        }
    }
}
