//! Transfer control: balances and transfer OTP settings.

use paystack_types::{
    ApiResponse, FinalizeDisableOtp, OtpReason, Pagination, PaystackError, ResendOtp, Transport,
};

use crate::PaystackClient;

/// Handle for the `balance*` and transfer OTP endpoints.
pub struct TransferControl<'a, T: Transport> {
    client: &'a PaystackClient<T>,
}

impl<'a, T: Transport> TransferControl<'a, T> {
    pub(crate) fn new(client: &'a PaystackClient<T>) -> Self {
        Self { client }
    }

    /// Available balance per currency.
    pub async fn balance(&self) -> Result<ApiResponse, PaystackError> {
        self.client.get("balance", Vec::new()).await
    }

    /// Pay-ins and pay-outs recorded on the integration.
    pub async fn ledger(&self, page: Pagination) -> Result<ApiResponse, PaystackError> {
        self.client.get("balance/ledger", page.to_query()).await
    }

    pub async fn resend_otp(
        &self,
        transfer_code: &str,
        reason: OtpReason,
    ) -> Result<ApiResponse, PaystackError> {
        let req = ResendOtp {
            transfer_code: transfer_code.to_string(),
            reason,
        };
        self.client.post("transfer/resend_otp", &req).await
    }

    /// Starts turning off OTPs for transfers; Paystack texts an OTP to confirm.
    pub async fn disable_otp(&self) -> Result<ApiResponse, PaystackError> {
        self.client.post_empty("transfer/disable_otp").await
    }

    pub async fn finalize_disable_otp(&self, otp: &str) -> Result<ApiResponse, PaystackError> {
        let req = FinalizeDisableOtp {
            otp: otp.to_string(),
        };
        self.client.post("transfer/disable_otp_finalize", &req).await
    }

    pub async fn enable_otp(&self) -> Result<ApiResponse, PaystackError> {
        self.client.post_empty("transfer/enable_otp").await
    }
}
