use thiserror::Error;
use uuid::Uuid;

use crate::models::AppointmentStatus;

/// Errors surfaced by the workflow store.
///
/// Unknown ids and malformed money come back as typed errors, never as
/// silent no-ops or zeroed defaults.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("invalid input: {0}")]
    Validation(String),

    /// A prescription can only be issued against a `scheduled` appointment;
    /// this keeps completed appointments at exactly one prescription.
    #[error("appointment {id} is already {status}")]
    AppointmentClosed {
        id: Uuid,
        status: AppointmentStatus,
    },
}
