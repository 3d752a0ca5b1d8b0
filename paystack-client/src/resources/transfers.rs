//! Transfers: send money to bank accounts and mobile money wallets.

use paystack_types::{
    ApiResponse, CreateTransferRecipient, FinalizeTransfer, InitiateTransfer, PaystackError,
    Transport,
};

use crate::PaystackClient;

/// Handle for recipient creation and the `transfer/*` endpoints.
pub struct Transfers<'a, T: Transport> {
    client: &'a PaystackClient<T>,
}

impl<'a, T: Transport> Transfers<'a, T> {
    pub(crate) fn new(client: &'a PaystackClient<T>) -> Self {
        Self { client }
    }

    /// Registers a beneficiary; the response carries the recipient code.
    pub async fn create_recipient(
        &self,
        recipient: &CreateTransferRecipient,
    ) -> Result<ApiResponse, PaystackError> {
        self.client.post("transferrecipient", recipient).await
    }

    /// Sends `amount` from `source` (usually `balance`) to a recipient code.
    pub async fn initiate(
        &self,
        source: &str,
        amount: u64,
        recipient_code: &str,
        reason: &str,
    ) -> Result<ApiResponse, PaystackError> {
        let req = InitiateTransfer {
            source: source.to_string(),
            amount,
            recipient: recipient_code.to_string(),
            reason: reason.to_string(),
        };
        self.client.post("transfer", &req).await
    }

    /// Completes an OTP-guarded transfer.
    pub async fn finalize(
        &self,
        transfer_code: &str,
        otp: &str,
    ) -> Result<ApiResponse, PaystackError> {
        let req = FinalizeTransfer {
            transfer_code: transfer_code.to_string(),
            otp: otp.to_string(),
        };
        self.client.post("transfer/finalize_transfer", &req).await
    }
}
