//! The clinic workflow store: patients, appointments, prescriptions and
//! pharmacy orders, with every write funneled through the operations below.
//!
//! Every mutation takes `&mut self`, so the borrow checker enforces the
//! single-writer model the surrounding UI runtime assumes. A concurrent host
//! wraps the whole store in a lock or command queue; the compound operations
//! here must never be split across such a boundary.

mod appointments;
mod patients;
mod pharmacy;
mod prescriptions;

pub use prescriptions::FinalizedVisit;

use chrono::{NaiveTime, Utc};
use uuid::Uuid;

use crate::models::{Appointment, AppointmentStatus, Patient, PaymentStatus, PharmacyOrder, Prescription};
use crate::session::User;

#[derive(Debug, Default)]
pub struct ClinicStore {
    patients: Vec<Patient>,
    appointments: Vec<Appointment>,
    prescriptions: Vec<Prescription>,
    pharmacy_orders: Vec<PharmacyOrder>,
    pub(crate) current_user: Option<User>,
}

impl ClinicStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty store pre-populated with the sample intake the UI prototype
    /// ships with: two patients and one walk-in appointment for today.
    pub fn with_demo_data() -> Self {
        let mut store = Self::new();
        let now = Utc::now();

        let john = Patient {
            id: Uuid::new_v4(),
            name: "John Doe".to_string(),
            age: 45,
            phone: "555-0101".to_string(),
            address: "123 Main St".to_string(),
            notes: None,
            created_at: now,
        };
        let jane = Patient {
            id: Uuid::new_v4(),
            name: "Jane Smith".to_string(),
            age: 32,
            phone: "555-0102".to_string(),
            address: "456 Oak Ave".to_string(),
            notes: None,
            created_at: now,
        };

        store.appointments.push(Appointment {
            id: Uuid::new_v4(),
            patient_id: john.id,
            patient_name: john.name.clone(),
            doctor_id: "d-001".to_string(),
            date: now.date_naive(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
            description: "Blurry vision in right eye".to_string(),
            status: AppointmentStatus::Scheduled,
            consultation_fee: Some(50.0),
            payment_status: Some(PaymentStatus::Paid),
        });
        store.patients.push(john);
        store.patients.push(jane);
        store
    }

    // Read access. Collections are handed out as immutable slices only; all
    // writes go through the operations on the submodules.

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn prescriptions(&self) -> &[Prescription] {
        &self.prescriptions
    }

    pub fn pharmacy_orders(&self) -> &[PharmacyOrder] {
        &self.pharmacy_orders
    }
}
