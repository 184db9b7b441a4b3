//! In-memory workflow store for a small clinic: reception intake, appointment
//! booking, prescription issuance and the pharmacy queue that follows from it.
//!
//! [`ClinicStore`] owns the collections; every write goes through one of its
//! operations. Views and document generation sit outside this crate and
//! interact through plain function calls: reads come back as immutable slices
//! and query helpers, finalized records serialize out for PDF rendering.

pub mod error;
pub mod models;
pub mod reports;
pub mod session;
pub mod store;

pub use error::WorkflowError;
pub use models::{
    Appointment, AppointmentStatus, EyeAddition, EyeExam, EyeMeasurement, Medicine,
    NewAppointment, NewPatient, NewPrescription, OrderStatus, Patient, PaymentStatus,
    PharmacyOrder, Prescription,
};
pub use reports::DashboardSummary;
pub use session::{Role, User};
pub use store::{ClinicStore, FinalizedVisit};
