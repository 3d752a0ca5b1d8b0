//! Request payloads for every Paystack endpoint.
//!
//! Optional fields are dropped from the serialized JSON when the caller did
//! not supply a real value: `None` and empty strings never reach the wire.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared Enums
// ─────────────────────────────────────────────────────────────────────────────

/// Currencies settled by Paystack. Amounts are always in the subunit
/// (kobo, pesewas, cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    NGN,
    GHS,
    ZAR,
    KES,
    USD,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::NGN => "NGN",
            Currency::GHS => "GHS",
            Currency::ZAR => "ZAR",
            Currency::KES => "KES",
            Currency::USD => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NGN" => Ok(Currency::NGN),
            "GHS" => Ok(Currency::GHS),
            "ZAR" => Ok(Currency::ZAR),
            "KES" => Ok(Currency::KES),
            "USD" => Ok(Currency::USD),
            _ => Err(format!("Unknown currency: {}", s)),
        }
    }
}

/// Page selection for list endpoints. Unset and zero fields are not sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

impl Pagination {
    pub fn new(per_page: u32, page: u32) -> Self {
        Self {
            per_page: Some(per_page),
            page: Some(page),
        }
    }

    /// Query pairs using Paystack's parameter names.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(per_page) = self.per_page.filter(|n| *n > 0) {
            query.push(("perPage", per_page.to_string()));
        }
        if let Some(page) = self.page.filter(|n| *n > 0) {
            query.push(("page", page.to_string()));
        }
        query
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transaction DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to initialize a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitializeTransaction {
    /// Customer's email address
    pub email: String,
    /// Amount in the currency subunit
    pub amount: u64,
    /// Unique reference; Paystack generates one when absent
    #[serde(default, skip_serializing_if = "is_blank")]
    pub reference: Option<String>,
    /// URL to redirect to after payment
    #[serde(default, skip_serializing_if = "is_blank")]
    pub callback_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Plan code, for subscription checkouts
    #[serde(default, skip_serializing_if = "is_blank")]
    pub plan: Option<String>,
}

impl InitializeTransaction {
    pub fn new(email: impl Into<String>, amount: u64) -> Self {
        Self {
            email: email.into(),
            amount,
            reference: None,
            callback_url: None,
            currency: None,
            plan: None,
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = Some(callback_url.into());
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn with_plan(mut self, plan: impl Into<String>) -> Self {
        self.plan = Some(plan.into());
        self
    }
}

/// Request to charge a previously authorized card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeAuthorization {
    pub authorization_code: String,
    pub email: String,
    pub amount: u64,
}

/// Request to check that an authorization can cover an amount.
///
/// Paystack holds the funds while checking, so this should not precede an
/// immediate charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckAuthorization {
    pub email: String,
    pub amount: u64,
    pub authorization_code: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Plan DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// How often a plan charges its subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanInterval {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Biannually,
    Annually,
}

/// Request to create a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePlan {
    pub name: String,
    pub interval: PlanInterval,
    /// Amount in the currency subunit
    pub amount: u64,
}

/// Request to rename a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePlan {
    pub name: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Subscription DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to subscribe a customer to a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSubscription {
    /// Customer email or customer code
    pub customer: String,
    /// Plan code
    pub plan: String,
    /// Authorization to charge; defaults to the customer's most recent one
    #[serde(default, skip_serializing_if = "is_blank")]
    pub authorization: Option<String>,
}

/// Subscription code and email token, used to enable or disable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionToken {
    pub code: String,
    pub token: String,
}

/// Body of the manage-link endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionCode {
    pub code: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Transfer DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Kind of account a transfer recipient holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientType {
    /// Nigerian bank account
    Nuban,
    /// Ghanaian bank account
    Ghipss,
    MobileMoney,
    /// South African bank account
    Basa,
}

/// Request to create a transfer recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransferRecipient {
    #[serde(rename = "type")]
    pub recipient_type: RecipientType,
    /// Recipient's name as registered with the bank
    pub name: String,
    pub account_number: String,
    pub bank_code: String,
    pub currency: Currency,
}

/// Request to send money to a recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitiateTransfer {
    /// Where the funds come from, `balance` for the integration balance
    pub source: String,
    pub amount: u64,
    /// Recipient code from transfer recipient creation
    pub recipient: String,
    pub reason: String,
}

/// OTP confirmation of a pending transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizeTransfer {
    pub transfer_code: String,
    pub otp: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Transfer Control DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Why an OTP is being resent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtpReason {
    ResendOtp,
    Transfer,
}

/// Request to resend a transfer OTP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResendOtp {
    pub transfer_code: String,
    pub reason: OtpReason,
}

/// OTP confirming that transfer OTPs should be switched off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizeDisableOtp {
    pub otp: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Verification DTOs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Personal,
    Business,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentType {
    IdentityNumber,
    PassportNumber,
    BusinessRegistrationNumber,
}

/// Request to validate a customer's bank account against an identity document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateAccount {
    pub bank_code: String,
    /// Two-letter ISO country code of the bank
    pub country_code: String,
    pub account_number: String,
    /// First and last name registered with the bank
    pub account_name: String,
    pub account_type: AccountType,
    pub document_type: DocumentType,
    pub document_number: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_initialize_omits_unset_options() {
        let req = InitializeTransaction::new("test@example.com", 10_000);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"email": "test@example.com", "amount": 10000})
        );
    }

    #[test]
    fn test_initialize_sends_supplied_options() {
        let req = InitializeTransaction::new("test@example.com", 10_000)
            .with_reference("ref-1")
            .with_currency(Currency::GHS)
            .with_callback_url("");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "email": "test@example.com",
                "amount": 10000,
                "reference": "ref-1",
                "currency": "GHS"
            })
        );
    }

    #[test]
    fn test_subscription_authorization_is_optional() {
        let without = CreateSubscription {
            customer: "CUS_1".into(),
            plan: "PLN_1".into(),
            authorization: None,
        };
        let blank = CreateSubscription {
            authorization: Some(String::new()),
            ..without.clone()
        };
        let literal_none = CreateSubscription {
            authorization: Some("None".into()),
            ..without.clone()
        };

        assert!(serde_json::to_value(&without).unwrap().get("authorization").is_none());
        assert!(serde_json::to_value(&blank).unwrap().get("authorization").is_none());
        // A caller-supplied string is a real value, whatever it spells.
        assert_eq!(
            serde_json::to_value(&literal_none).unwrap()["authorization"],
            json!("None")
        );
    }

    #[test]
    fn test_recipient_type_field_name() {
        let req = CreateTransferRecipient {
            recipient_type: RecipientType::MobileMoney,
            name: "Ada Lovelace".into(),
            account_number: "0123456789".into(),
            bank_code: "MTN".into(),
            currency: Currency::GHS,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["type"], json!("mobile_money"));
        assert!(value.get("recipient_type").is_none());
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_value(PlanInterval::Biannually).unwrap(), json!("biannually"));
        assert_eq!(serde_json::to_value(OtpReason::ResendOtp).unwrap(), json!("resend_otp"));
        assert_eq!(
            serde_json::to_value(DocumentType::BusinessRegistrationNumber).unwrap(),
            json!("businessRegistrationNumber")
        );
        assert_eq!(serde_json::to_value(AccountType::Personal).unwrap(), json!("personal"));
    }

    #[test]
    fn test_pagination_query() {
        assert!(Pagination::default().to_query().is_empty());
        assert_eq!(
            Pagination::new(50, 2).to_query(),
            vec![("perPage", "50".to_string()), ("page", "2".to_string())]
        );
        let page_only = Pagination {
            page: Some(3),
            ..Default::default()
        };
        assert_eq!(page_only.to_query(), vec![("page", "3".to_string())]);
    }

    #[test]
    fn test_pagination_skips_zero() {
        assert!(Pagination::new(0, 0).to_query().is_empty());
        assert_eq!(
            Pagination::new(0, 4).to_query(),
            vec![("page", "4".to_string())]
        );
    }

    #[test]
    fn test_currency_parse_and_display() {
        assert_eq!("ngn".parse::<Currency>().unwrap(), Currency::NGN);
        assert!("XYZ".parse::<Currency>().is_err());
        assert_eq!(Currency::ZAR.to_string(), "ZAR");
    }
}
