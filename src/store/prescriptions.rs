use chrono::Utc;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::error::WorkflowError;
use crate::models::{
    Appointment, AppointmentStatus, NewPrescription, OrderStatus, PharmacyOrder, Prescription,
};
use crate::store::ClinicStore;

/// Everything touched by [`ClinicStore::finalize_prescription`], returned in
/// one bundle so callers can render the outcome without re-querying.
#[derive(Serialize, Debug)]
pub struct FinalizedVisit {
    pub prescription: Prescription,
    pub updated_appointment: Appointment,
    pub order: PharmacyOrder,
}

impl ClinicStore {
    /// Close out a visit: issue the prescription, complete the appointment
    /// and open the pharmacy order that dispenses it.
    ///
    /// All validation happens before the first write; the three writes that
    /// follow are infallible, so no reader ever sees a completed appointment
    /// without its prescription and pharmacy order. Patient identity on the
    /// prescription is snapshot from the appointment, never taken from the
    /// caller.
    pub fn finalize_prescription(
        &mut self,
        data: NewPrescription,
    ) -> Result<FinalizedVisit, WorkflowError> {
        if data.diagnosis.trim().is_empty() {
            return Err(WorkflowError::Validation(
                "diagnosis must not be empty".to_string(),
            ));
        }
        if data.medicines.is_empty() {
            return Err(WorkflowError::Validation(
                "a prescription needs at least one medicine".to_string(),
            ));
        }

        let idx = self
            .appointments
            .iter()
            .position(|a| a.id == data.appointment_id)
            .ok_or(WorkflowError::NotFound {
                entity: "appointment",
                id: data.appointment_id,
            })?;
        if self.appointments[idx].status != AppointmentStatus::Scheduled {
            return Err(WorkflowError::AppointmentClosed {
                id: self.appointments[idx].id,
                status: self.appointments[idx].status,
            });
        }

        let prescription = Prescription {
            id: Uuid::new_v4(),
            appointment_id: data.appointment_id,
            patient_id: self.appointments[idx].patient_id,
            patient_name: self.appointments[idx].patient_name.clone(),
            doctor_id: data.doctor_id,
            doctor_name: data.doctor_name,
            diagnosis: data.diagnosis,
            medicines: data.medicines,
            instructions: data.instructions,
            issued_at: Utc::now(),
            eye_exam: data.eye_exam,
        };
        self.prescriptions.push(prescription.clone());
        info!(
            "Prescription {} issued for appointment {}",
            prescription.id, prescription.appointment_id
        );

        self.appointments[idx].status = AppointmentStatus::Completed;
        info!("Appointment {} is now completed", self.appointments[idx].id);

        let order = PharmacyOrder {
            id: Uuid::new_v4(),
            prescription_id: prescription.id,
            patient_name: prescription.patient_name.clone(),
            doctor_name: prescription.doctor_name.clone(),
            status: OrderStatus::Pending,
            total_cost: 0.0,
            fulfilled_at: None,
            notes: None,
        };
        self.pharmacy_orders.push(order.clone());
        info!(
            "Pharmacy order {} opened for prescription {}",
            order.id, order.prescription_id
        );

        Ok(FinalizedVisit {
            updated_appointment: self.appointments[idx].clone(),
            prescription,
            order,
        })
    }

    pub fn prescription(&self, id: Uuid) -> Option<&Prescription> {
        self.prescriptions.iter().find(|p| p.id == id)
    }
}
