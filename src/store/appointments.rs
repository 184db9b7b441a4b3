use tracing::{info, warn};
use uuid::Uuid;

use crate::error::WorkflowError;
use crate::models::{Appointment, AppointmentStatus, NewAppointment};
use crate::store::ClinicStore;

impl ClinicStore {
    /// Book an appointment for an existing patient.
    ///
    /// The patient id must resolve; the display name on the appointment is
    /// snapshot from the patient record rather than trusted from the caller.
    pub fn schedule_appointment(
        &mut self,
        data: NewAppointment,
    ) -> Result<Appointment, WorkflowError> {
        let patient = self
            .patients
            .iter()
            .find(|p| p.id == data.patient_id)
            .ok_or(WorkflowError::NotFound {
                entity: "patient",
                id: data.patient_id,
            })?;

        let appointment = Appointment {
            id: Uuid::new_v4(),
            patient_id: patient.id,
            patient_name: patient.name.clone(),
            doctor_id: data.doctor_id,
            date: data.date,
            time: data.time,
            description: data.description,
            status: AppointmentStatus::Scheduled,
            consultation_fee: data.consultation_fee,
            payment_status: data.payment_status,
        };
        self.appointments.push(appointment.clone());
        info!(
            "Appointment {} scheduled for patient {}",
            appointment.id, appointment.patient_id
        );

        Ok(appointment)
    }

    /// Move an appointment to `status` in place.
    ///
    /// Transitions are not restricted here: rewriting the same status is an
    /// idempotent no-op, and reception may reinstate a cancelled slot.
    /// Leaving a terminal status is logged at WARN. The only path into
    /// `completed` that also creates records is
    /// [`finalize_prescription`](ClinicStore::finalize_prescription).
    pub fn set_appointment_status(
        &mut self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> Result<Appointment, WorkflowError> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(WorkflowError::NotFound {
                entity: "appointment",
                id,
            })?;

        if appointment.status.is_terminal() && appointment.status != status {
            warn!(
                "Appointment {} leaving terminal status {} for {}",
                id, appointment.status, status
            );
        }
        appointment.status = status;
        info!("Appointment {} is now {}", id, status);

        Ok(appointment.clone())
    }

    pub fn appointment(&self, id: Uuid) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// The doctor worklist: everything still waiting to be seen.
    pub fn scheduled_appointments(&self) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Scheduled)
            .collect()
    }

    /// Reception search over the booking list, by patient name.
    pub fn search_appointments(&self, term: &str) -> Vec<&Appointment> {
        let needle = term.to_lowercase();
        self.appointments
            .iter()
            .filter(|a| a.patient_name.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewPatient;
    use chrono::{NaiveDate, NaiveTime};

    fn store_with_patient() -> (ClinicStore, Uuid) {
        let mut store = ClinicStore::new();
        let patient = store
            .register_patient(NewPatient {
                name: "John Doe".to_string(),
                age: 45,
                phone: "555-0101".to_string(),
                address: "123 Main St".to_string(),
                notes: None,
            })
            .unwrap();
        (store, patient.id)
    }

    fn booking(patient_id: Uuid) -> NewAppointment {
        NewAppointment {
            patient_id,
            doctor_id: "d-001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            description: "Blurry vision".to_string(),
            consultation_fee: Some(50.0),
            payment_status: None,
        }
    }

    #[test]
    fn booking_snapshots_the_patient_name() {
        let (mut store, patient_id) = store_with_patient();
        let appointment = store.schedule_appointment(booking(patient_id)).unwrap();

        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
        assert_eq!(appointment.patient_name, "John Doe");
        assert_eq!(store.scheduled_appointments().len(), 1);
    }

    #[test]
    fn booking_for_an_unknown_patient_is_rejected() {
        let mut store = ClinicStore::new();
        let ghost = Uuid::new_v4();
        let err = store.schedule_appointment(booking(ghost)).unwrap_err();
        assert!(matches!(err, WorkflowError::NotFound { entity: "patient", .. }));
        assert!(store.appointments().is_empty());
    }

    #[test]
    fn status_update_on_unknown_id_is_an_error() {
        let mut store = ClinicStore::new();
        let err = store
            .set_appointment_status(Uuid::new_v4(), AppointmentStatus::Cancelled)
            .unwrap_err();
        assert!(matches!(err, WorkflowError::NotFound { entity: "appointment", .. }));
    }

    #[test]
    fn cancelling_twice_is_idempotent() {
        let (mut store, patient_id) = store_with_patient();
        let appointment = store.schedule_appointment(booking(patient_id)).unwrap();

        store
            .set_appointment_status(appointment.id, AppointmentStatus::Cancelled)
            .unwrap();
        let after_second = store
            .set_appointment_status(appointment.id, AppointmentStatus::Cancelled)
            .unwrap();

        assert_eq!(after_second.status, AppointmentStatus::Cancelled);
        assert_eq!(store.appointments().len(), 1);
        assert!(store.scheduled_appointments().is_empty());
    }

    #[test]
    fn search_matches_the_booked_name() {
        let (mut store, patient_id) = store_with_patient();
        store.schedule_appointment(booking(patient_id)).unwrap();

        assert_eq!(store.search_appointments("john").len(), 1);
        assert!(store.search_appointments("jane").is_empty());
    }
}
