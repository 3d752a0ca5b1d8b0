//! Subscriptions: recurring payments on a plan.

use paystack_types::{
    ApiResponse, CreateSubscription, Pagination, PaystackError, SubscriptionCode,
    SubscriptionToken, Transport,
};

use super::segment;
use crate::PaystackClient;

/// Handle for the `subscription/*` endpoints.
pub struct Subscriptions<'a, T: Transport> {
    client: &'a PaystackClient<T>,
}

impl<'a, T: Transport> Subscriptions<'a, T> {
    pub(crate) fn new(client: &'a PaystackClient<T>) -> Self {
        Self { client }
    }

    /// Subscribes `customer` to `plan`.
    ///
    /// `authorization` is only sent when it holds a non-empty code; otherwise
    /// Paystack charges the customer's most recent authorization.
    pub async fn create(
        &self,
        customer: &str,
        plan: &str,
        authorization: Option<&str>,
    ) -> Result<ApiResponse, PaystackError> {
        let req = CreateSubscription {
            customer: customer.to_string(),
            plan: plan.to_string(),
            authorization: authorization.map(str::to_string),
        };
        self.client.post("subscription", &req).await
    }

    pub async fn list(&self, page: Pagination) -> Result<ApiResponse, PaystackError> {
        self.client.get("subscription", page.to_query()).await
    }

    pub async fn fetch(&self, id_or_code: &str) -> Result<ApiResponse, PaystackError> {
        self.client
            .get(&format!("subscription/{}", segment(id_or_code)?), Vec::new())
            .await
    }

    /// Re-enables a subscription using the email token sent to the customer.
    pub async fn enable(&self, code: &str, token: &str) -> Result<ApiResponse, PaystackError> {
        self.client
            .post("subscription/enable", &Self::token(code, token))
            .await
    }

    pub async fn disable(&self, code: &str, token: &str) -> Result<ApiResponse, PaystackError> {
        self.client
            .post("subscription/disable", &Self::token(code, token))
            .await
    }

    /// Generates a link the customer can use to update their card.
    pub async fn generate_update_link(&self, code: &str) -> Result<ApiResponse, PaystackError> {
        self.client
            .post(
                &format!("subscription/{}/manage/link/", segment(code)?),
                &SubscriptionCode {
                    code: code.to_string(),
                },
            )
            .await
    }

    /// Emails the update link to the customer.
    pub async fn send_update_link(&self, code: &str) -> Result<ApiResponse, PaystackError> {
        self.client
            .post(
                &format!("subscription/{}/manage/email/", segment(code)?),
                &SubscriptionCode {
                    code: code.to_string(),
                },
            )
            .await
    }

    fn token(code: &str, token: &str) -> SubscriptionToken {
        SubscriptionToken {
            code: code.to_string(),
            token: token.to_string(),
        }
    }
}
