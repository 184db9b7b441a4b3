use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::WorkflowError;
use crate::models::{OrderStatus, PharmacyOrder, Prescription};
use crate::store::ClinicStore;

impl ClinicStore {
    /// Move a pharmacy order through its dispensing lifecycle.
    ///
    /// A supplied `cost` overwrites the stored total; omitting it keeps the
    /// prior value. The fulfillment timestamp is stamped in the same update
    /// that moves the order to `fulfilled`, and cleared again should the
    /// order ever be moved back out of it.
    pub fn update_pharmacy_order_status(
        &mut self,
        id: Uuid,
        status: OrderStatus,
        cost: Option<f32>,
    ) -> Result<PharmacyOrder, WorkflowError> {
        if let Some(cost) = cost {
            if !cost.is_finite() || cost < 0.0 {
                return Err(WorkflowError::Validation(format!(
                    "{cost} is not a valid order total"
                )));
            }
        }

        let order = self
            .pharmacy_orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(WorkflowError::NotFound {
                entity: "pharmacy order",
                id,
            })?;

        if order.status == OrderStatus::Fulfilled && status != OrderStatus::Fulfilled {
            warn!("Pharmacy order {} reopened after fulfillment", id);
        }
        order.status = status;
        if let Some(cost) = cost {
            order.total_cost = cost;
        }
        order.fulfilled_at = match status {
            OrderStatus::Fulfilled => Some(Utc::now()),
            _ => None,
        };
        info!("Pharmacy order {} is now {}", id, status);

        Ok(order.clone())
    }

    pub fn pharmacy_order(&self, id: Uuid) -> Option<&PharmacyOrder> {
        self.pharmacy_orders.iter().find(|o| o.id == id)
    }

    /// The dispensing queue: everything not yet fulfilled.
    pub fn open_pharmacy_orders(&self) -> Vec<&PharmacyOrder> {
        self.pharmacy_orders
            .iter()
            .filter(|o| o.status != OrderStatus::Fulfilled)
            .collect()
    }

    pub fn fulfilled_pharmacy_orders(&self) -> Vec<&PharmacyOrder> {
        self.pharmacy_orders
            .iter()
            .filter(|o| o.status == OrderStatus::Fulfilled)
            .collect()
    }

    /// The prescription behind an order; billing needs its medicine list.
    pub fn prescription_for_order(&self, order_id: Uuid) -> Option<&Prescription> {
        let order = self.pharmacy_order(order_id)?;
        self.prescriptions
            .iter()
            .find(|p| p.id == order.prescription_id)
    }
}
