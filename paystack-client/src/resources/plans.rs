//! Plans: installment payment options.

use paystack_types::{
    ApiResponse, CreatePlan, Pagination, PaystackError, PlanInterval, Transport, UpdatePlan,
};

use super::segment;
use crate::PaystackClient;

/// Handle for the `plan/*` endpoints.
pub struct Plans<'a, T: Transport> {
    client: &'a PaystackClient<T>,
}

impl<'a, T: Transport> Plans<'a, T> {
    pub(crate) fn new(client: &'a PaystackClient<T>) -> Self {
        Self { client }
    }

    /// Creates a plan charging `amount` (subunit) every `interval`.
    pub async fn create(
        &self,
        name: &str,
        interval: PlanInterval,
        amount: u64,
    ) -> Result<ApiResponse, PaystackError> {
        let req = CreatePlan {
            name: name.to_string(),
            interval,
            amount,
        };
        self.client.post("plan", &req).await
    }

    pub async fn list(&self, page: Pagination) -> Result<ApiResponse, PaystackError> {
        self.client.get("plan", page.to_query()).await
    }

    pub async fn fetch(&self, id_or_code: &str) -> Result<ApiResponse, PaystackError> {
        self.client
            .get(&format!("plan/{}", segment(id_or_code)?), Vec::new())
            .await
    }

    /// Renames a plan.
    pub async fn update(&self, id_or_code: &str, name: &str) -> Result<ApiResponse, PaystackError> {
        let req = UpdatePlan {
            name: name.to_string(),
        };
        self.client.put(&format!("plan/{}", segment(id_or_code)?), &req).await
    }
}
