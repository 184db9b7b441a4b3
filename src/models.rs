use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// Patients

#[derive(Serialize, Debug, Clone)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub phone: String,
    pub address: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug)]
pub struct NewPatient {
    pub name: String,
    pub age: u32,
    pub phone: String,
    pub address: String,
    pub notes: Option<String>,
}

// Appointments

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// `Completed` and `Cancelled` end the sanctioned lifecycle; nothing is
    /// supposed to move an appointment out of either.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
}

#[derive(Serialize, Debug, Clone)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    /// Name snapshot taken at booking time. Goes stale if the patient record
    /// is renamed later; readers wanting the live name join on `patient_id`.
    pub patient_name: String,
    pub doctor_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub description: String,
    pub status: AppointmentStatus,
    pub consultation_fee: Option<f32>,
    pub payment_status: Option<PaymentStatus>,
}

#[derive(Deserialize, Debug)]
pub struct NewAppointment {
    pub patient_id: Uuid,
    pub doctor_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub description: String,
    pub consultation_fee: Option<f32>,
    pub payment_status: Option<PaymentStatus>,
}

// Prescriptions

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Medicine {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
}

/// Per-eye refraction measurement.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EyeMeasurement {
    pub sph: String,
    pub cyl: String,
    pub axis: String,
    pub vision: String,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EyeAddition {
    pub both_eyes: Option<String>,
    pub right_eye: Option<String>,
    pub left_eye: Option<String>,
}

/// Structured eye-examination record optionally attached to a prescription.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EyeExam {
    pub right_eye: EyeMeasurement,
    pub left_eye: EyeMeasurement,
    pub addition: Option<EyeAddition>,
    pub advice: Option<String>,
    pub next_visit: Option<String>,
    /// Pupillary distance.
    pub ipd: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct Prescription {
    pub id: Uuid,
    pub appointment_id: Uuid,
    pub patient_id: Uuid,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub diagnosis: String,
    pub medicines: Vec<Medicine>,
    pub instructions: String,
    pub issued_at: DateTime<Utc>,
    pub eye_exam: Option<EyeExam>,
}

#[derive(Deserialize, Debug)]
pub struct NewPrescription {
    pub appointment_id: Uuid,
    pub doctor_id: String,
    pub doctor_name: String,
    pub diagnosis: String,
    pub medicines: Vec<Medicine>,
    pub instructions: String,
    pub eye_exam: Option<EyeExam>,
}

// Pharmacy orders

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Fulfilled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Fulfilled => "fulfilled",
        };
        f.write_str(label)
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct PharmacyOrder {
    pub id: Uuid,
    pub prescription_id: Uuid,
    pub patient_name: String,
    pub doctor_name: String,
    pub status: OrderStatus,
    pub total_cost: f32,
    pub fulfilled_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}
