//! Verification: KYC checks on bank accounts and cards.

use paystack_types::{ApiResponse, PaystackError, Transport, ValidateAccount};

use super::segment;
use crate::PaystackClient;

/// Handle for the `bank/*` and `decision/bin` endpoints.
pub struct Verification<'a, T: Transport> {
    client: &'a PaystackClient<T>,
}

impl<'a, T: Transport> Verification<'a, T> {
    pub(crate) fn new(client: &'a PaystackClient<T>) -> Self {
        Self { client }
    }

    /// Looks up the account name behind an account number.
    pub async fn resolve_account(
        &self,
        account_number: &str,
        bank_code: &str,
    ) -> Result<ApiResponse, PaystackError> {
        let query = vec![
            ("account_number", account_number.to_string()),
            ("bank_code", bank_code.to_string()),
        ];
        self.client.get("bank/resolve", query).await
    }

    /// Validates an account against the holder's identity document.
    pub async fn validate_account(
        &self,
        request: &ValidateAccount,
    ) -> Result<ApiResponse, PaystackError> {
        self.client.post("bank/validate", request).await
    }

    /// Card brand, bank and country for the first six digits of a card.
    pub async fn resolve_card_bin(&self, bin: &str) -> Result<ApiResponse, PaystackError> {
        self.client
            .get(&format!("decision/bin/{}", segment(bin)?), Vec::new())
            .await
    }
}
