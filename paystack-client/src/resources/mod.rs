//! One handle per Paystack endpoint group.
//!
//! Each handle borrows the [`PaystackClient`](crate::PaystackClient) and
//! maps its methods one-to-one onto Paystack routes.

mod plans;
mod subscriptions;
mod transactions;
mod transfer_control;
mod transfers;
mod verification;

pub use plans::Plans;
pub use subscriptions::Subscriptions;
pub use transactions::Transactions;
pub use transfer_control::TransferControl;
pub use transfers::Transfers;
pub use verification::Verification;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::PaystackError;

/// Everything outside RFC 3986's unreserved set.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes a caller-supplied value for use as one path segment.
///
/// `.` and `..` are rejected: URL parsers resolve them (and their encoded
/// forms) as dot segments, which would move the request to another route.
pub(crate) fn segment(value: &str) -> Result<String, PaystackError> {
    if value.is_empty() || value == "." || value == ".." {
        return Err(PaystackError::InvalidPathSegment(value.to_string()));
    }
    Ok(utf8_percent_encode(value, SEGMENT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_keeps_paystack_codes() {
        assert_eq!(segment("PLN_gx2wn530m0i3w3m").unwrap(), "PLN_gx2wn530m0i3w3m");
        assert_eq!(segment("ref-1.2~x").unwrap(), "ref-1.2~x");
    }

    #[test]
    fn test_segment_escapes_route_characters() {
        assert_eq!(segment("a/b#c").unwrap(), "a%2Fb%23c");
        assert_eq!(segment("x?y=1&z").unwrap(), "x%3Fy%3D1%26z");
        assert_eq!(segment("50%").unwrap(), "50%25");
        assert_eq!(segment("x/../../balance").unwrap(), "x%2F..%2F..%2Fbalance");
    }

    #[test]
    fn test_segment_rejects_dot_segments() {
        for value in ["", ".", ".."] {
            assert!(matches!(
                segment(value),
                Err(PaystackError::InvalidPathSegment(v)) if v == value
            ));
        }
    }
}
