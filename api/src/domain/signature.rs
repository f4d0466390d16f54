//! Payment signature verification
//!
//! The gateway signs `"{order_id}|{payment_id}"` with HMAC-SHA256 keyed by the
//! merchant's key secret and hands the lowercase hex digest to the browser.
//! Recomputing it server-side proves the payment belongs to the order.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domain::entities::{OrderId, PaymentId};
use crate::error::DomainError;

type HmacSha256 = Hmac<Sha256>;

/// Hex length of a SHA-256 digest
const SIGNATURE_HEX_LEN: usize = 64;

fn signing_mac(
    secret: &str,
    order_id: &OrderId,
    payment_id: &PaymentId,
) -> Result<HmacSha256, DomainError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| DomainError::InvalidKey(e.to_string()))?;
    mac.update(order_id.0.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.0.as_bytes());
    Ok(mac)
}

/// Compute the expected signature as lowercase hex
#[cfg(test)]
pub fn compute_signature(
    secret: &str,
    order_id: &OrderId,
    payment_id: &PaymentId,
) -> Result<String, DomainError> {
    let mac = signing_mac(secret, order_id, payment_id)?;
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Check a client-supplied signature against the expected one
///
/// Only the exact lowercase hex rendering is accepted. The digest comparison
/// itself is constant-time.
pub fn verify_signature(
    secret: &str,
    order_id: &OrderId,
    payment_id: &PaymentId,
    signature: &str,
) -> Result<bool, DomainError> {
    if signature.len() != SIGNATURE_HEX_LEN
        || !signature
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    {
        return Ok(false);
    }

    let Ok(supplied) = hex::decode(signature) else {
        return Ok(false);
    };

    let mac = signing_mac(secret, order_id, payment_id)?;
    Ok(mac.verify_slice(&supplied).is_ok())
}
