//! Transactions: create and manage payments on the integration.

use paystack_types::{
    ApiResponse, ChargeAuthorization, CheckAuthorization, InitializeTransaction, Pagination,
    PaystackError, Transport,
};

use super::segment;
use crate::PaystackClient;

/// Handle for the `transaction/*` endpoints.
pub struct Transactions<'a, T: Transport> {
    client: &'a PaystackClient<T>,
}

impl<'a, T: Transport> Transactions<'a, T> {
    pub(crate) fn new(client: &'a PaystackClient<T>) -> Self {
        Self { client }
    }

    /// Initializes a transaction for `email`. `amount` is in the currency subunit.
    pub async fn initialize(&self, email: &str, amount: u64) -> Result<ApiResponse, PaystackError> {
        self.initialize_with(&InitializeTransaction::new(email, amount))
            .await
    }

    /// Initializes a transaction with optional reference, callback, currency or plan.
    pub async fn initialize_with(
        &self,
        request: &InitializeTransaction,
    ) -> Result<ApiResponse, PaystackError> {
        self.client.post("transaction/initialize", request).await
    }

    /// Confirms the status of a transaction by its reference.
    pub async fn verify(&self, reference: &str) -> Result<ApiResponse, PaystackError> {
        self.client
            .get(&format!("transaction/verify/{}", segment(reference)?), Vec::new())
            .await
    }

    /// Lists transactions carried out on the integration.
    pub async fn list(&self, page: Pagination) -> Result<ApiResponse, PaystackError> {
        self.client.get("transaction", page.to_query()).await
    }

    /// Fetches a single transaction by its numeric id.
    pub async fn fetch(&self, id: u64) -> Result<ApiResponse, PaystackError> {
        self.client
            .get(&format!("transaction/{}", id), Vec::new())
            .await
    }

    /// Charges a reusable authorization for a recurring payment.
    pub async fn charge_authorization(
        &self,
        authorization_code: &str,
        email: &str,
        amount: u64,
    ) -> Result<ApiResponse, PaystackError> {
        let req = ChargeAuthorization {
            authorization_code: authorization_code.to_string(),
            email: email.to_string(),
            amount,
        };
        self.client
            .post("transaction/charge_authorization", &req)
            .await
    }

    /// Checks whether an authorization can cover `amount`.
    ///
    /// Paystack places a hold on the funds, so don't call this right before
    /// charging the same card.
    pub async fn check_authorization(
        &self,
        email: &str,
        amount: u64,
        authorization_code: &str,
    ) -> Result<ApiResponse, PaystackError> {
        let req = CheckAuthorization {
            email: email.to_string(),
            amount,
            authorization_code: authorization_code.to_string(),
        };
        self.client
            .post("transaction/check_authorization", &req)
            .await
    }
}
