use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{OrderStatus, PaymentStatus};
use crate::store::ClinicStore;

/// The admin dashboard row: headline counts plus revenue split by source.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_patients: usize,
    pub appointments_today: usize,
    /// Fees of appointments that have actually been paid.
    pub consultation_revenue: f32,
    /// Billed totals of fulfilled pharmacy orders.
    pub pharmacy_revenue: f32,
    pub open_orders: usize,
}

impl ClinicStore {
    /// Aggregate the dashboard numbers. `today` is supplied by the caller so
    /// the report stays a pure read over the collections.
    pub fn dashboard_summary(&self, today: NaiveDate) -> DashboardSummary {
        let appointments_today = self
            .appointments()
            .iter()
            .filter(|a| a.date == today)
            .count();
        let consultation_revenue = self
            .appointments()
            .iter()
            .filter(|a| a.payment_status == Some(PaymentStatus::Paid))
            .filter_map(|a| a.consultation_fee)
            .sum();
        let pharmacy_revenue = self
            .pharmacy_orders()
            .iter()
            .filter(|o| o.status == OrderStatus::Fulfilled)
            .map(|o| o.total_cost)
            .sum();
        let open_orders = self
            .pharmacy_orders()
            .iter()
            .filter(|o| o.status != OrderStatus::Fulfilled)
            .count();

        DashboardSummary {
            total_patients: self.patients().len(),
            appointments_today,
            consultation_revenue,
            pharmacy_revenue,
            open_orders,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Medicine, NewAppointment, NewPatient, NewPrescription};
    use chrono::NaiveTime;

    #[test]
    fn revenue_counts_only_paid_fees_and_fulfilled_orders() {
        let mut store = ClinicStore::new();
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let tomorrow = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();

        let patient = store
            .register_patient(NewPatient {
                name: "John Doe".to_string(),
                age: 45,
                phone: "555-0101".to_string(),
                address: "123 Main St".to_string(),
                notes: None,
            })
            .unwrap();

        // Paid visit today, unpaid visit tomorrow.
        let paid = store
            .schedule_appointment(NewAppointment {
                patient_id: patient.id,
                doctor_id: "d-001".to_string(),
                date: today,
                time: nine,
                description: "Checkup".to_string(),
                consultation_fee: Some(50.0),
                payment_status: Some(PaymentStatus::Paid),
            })
            .unwrap();
        store
            .schedule_appointment(NewAppointment {
                patient_id: patient.id,
                doctor_id: "d-001".to_string(),
                date: tomorrow,
                time: nine,
                description: "Follow-up".to_string(),
                consultation_fee: Some(75.0),
                payment_status: Some(PaymentStatus::Pending),
            })
            .unwrap();

        let visit = store
            .finalize_prescription(NewPrescription {
                appointment_id: paid.id,
                doctor_id: "d-001".to_string(),
                doctor_name: "Dr. Grey".to_string(),
                diagnosis: "Myopia".to_string(),
                medicines: vec![Medicine {
                    name: "Lubricant drops".to_string(),
                    dosage: "1 drop".to_string(),
                    frequency: "3 times a day".to_string(),
                    duration: "5 days".to_string(),
                }],
                instructions: String::new(),
                eye_exam: None,
            })
            .unwrap();

        // Order still open: pharmacy revenue stays zero.
        let summary = store.dashboard_summary(today);
        assert_eq!(summary.total_patients, 1);
        assert_eq!(summary.appointments_today, 1);
        assert_eq!(summary.consultation_revenue, 50.0);
        assert_eq!(summary.pharmacy_revenue, 0.0);
        assert_eq!(summary.open_orders, 1);

        store
            .update_pharmacy_order_status(visit.order.id, OrderStatus::Fulfilled, Some(25.5))
            .unwrap();
        let summary = store.dashboard_summary(today);
        assert_eq!(summary.pharmacy_revenue, 25.5);
        assert_eq!(summary.open_orders, 0);
    }
}
