use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::error::WorkflowError;
use crate::models::{NewPatient, Patient};
use crate::store::ClinicStore;

impl ClinicStore {
    /// Register a new patient from reception intake.
    ///
    /// Duplicate names are permitted; the generated id is the only identity.
    pub fn register_patient(&mut self, data: NewPatient) -> Result<Patient, WorkflowError> {
        if data.name.trim().is_empty() {
            return Err(WorkflowError::Validation(
                "patient name must not be empty".to_string(),
            ));
        }

        let patient = Patient {
            id: Uuid::new_v4(),
            name: data.name,
            age: data.age,
            phone: data.phone,
            address: data.address,
            notes: data.notes,
            created_at: Utc::now(),
        };
        self.patients.push(patient.clone());
        info!("Patient {} registered", patient.id);

        Ok(patient)
    }

    pub fn patient(&self, id: Uuid) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    /// Reception search box: case-insensitive name match, or a raw substring
    /// match on the phone number.
    pub fn search_patients(&self, term: &str) -> Vec<&Patient> {
        let needle = term.to_lowercase();
        self.patients
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle) || p.phone.contains(term))
            .collect()
    }
}
