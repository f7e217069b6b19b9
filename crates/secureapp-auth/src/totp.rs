//! TOTP provisioning URIs and code verification (RFC 6238).
//!
//! Standard parameters throughout: HMAC-SHA1, 6 digits, 30-second
//! step. Verification accepts a skew of ±1 step so codes entered
//! near a step boundary are not falsely rejected; anything further
//! off fails.

use totp_rs::{Algorithm, Secret, TOTP};

use crate::error::AuthError;

const DIGITS: usize = 6;
const SKEW: u8 = 1;
const STEP_SECONDS: u64 = 30;

fn decode_secret(secret: &str) -> Result<Vec<u8>, AuthError> {
    Secret::Encoded(secret.to_string())
        .to_bytes()
        .map_err(|e| AuthError::InvalidInput(format!("malformed TOTP secret: {e:?}")))
}

/// `new_unchecked` because RFC 4226 recommends 128-bit secrets while
/// the 80-bit secrets produced by [`crate::otp::generate_secret`]
/// follow the common authenticator default; `TOTP::new` would reject
/// them.
fn build(secret_bytes: Vec<u8>, issuer: Option<String>, account: String) -> TOTP {
    TOTP::new_unchecked(
        Algorithm::SHA1,
        DIGITS,
        SKEW,
        STEP_SECONDS,
        secret_bytes,
        issuer,
        account,
    )
}

/// Build an `otpauth://totp/...` provisioning URI embedding issuer,
/// account name, and secret. Issuer and account are URL-encoded.
pub fn provisioning_uri(username: &str, secret: &str, issuer: &str) -> Result<String, AuthError> {
    let totp = build(
        decode_secret(secret)?,
        Some(issuer.to_string()),
        username.to_string(),
    );
    Ok(totp.get_url())
}

/// Verify a 6-digit code against a base32 secret, at the given Unix
/// time or now. Returns `false` — never an error — on a malformed
/// secret or code.
pub fn verify_code(secret: &str, code: &str, time: Option<u64>) -> bool {
    let Ok(secret_bytes) = decode_secret(secret) else {
        return false;
    };

    let totp = build(secret_bytes, None, String::new());
    match time {
        Some(t) => totp.check(code, t),
        None => totp.check_current(code).unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::otp;

    fn code_at(secret: &str, time: u64) -> String {
        let totp = build(decode_secret(secret).unwrap(), None, String::new());
        totp.generate(time)
    }

    #[test]
    fn uri_embeds_issuer_and_account() {
        let secret = otp::generate_secret();
        let uri = provisioning_uri("alice", &secret, "SecureApp").unwrap();

        assert!(uri.starts_with("otpauth://totp/"));
        assert!(uri.contains("SecureApp"));
        assert!(uri.contains("alice"));
        assert!(uri.contains(&secret));
    }

    #[test]
    fn uri_url_encodes_reserved_characters() {
        let secret = otp::generate_secret();
        let uri = provisioning_uri("alice a", &secret, "Secure App").unwrap();

        assert!(!uri.contains("alice a"));
        assert!(uri.contains("alice%20a"));
    }

    #[test]
    fn uri_rejects_malformed_secret() {
        let err = provisioning_uri("alice", "not!base32", "SecureApp").unwrap_err();
        assert!(matches!(err, AuthError::InvalidInput(_)));
    }

    #[test]
    fn code_round_trips_at_fixed_time() {
        let secret = otp::generate_secret();
        let t = 1_700_000_010;
        let code = code_at(&secret, t);

        assert!(verify_code(&secret, &code, Some(t)));
    }

    #[test]
    fn adjacent_step_is_tolerated() {
        let secret = otp::generate_secret();
        let t = 1_700_000_010;
        let code = code_at(&secret, t);

        // One step later still verifies (skew window).
        assert!(verify_code(&secret, &code, Some(t + STEP_SECONDS)));
        assert!(verify_code(&secret, &code, Some(t - STEP_SECONDS)));
    }

    #[test]
    fn non_adjacent_step_fails() {
        let secret = otp::generate_secret();
        let t = 1_700_000_010;
        let code = code_at(&secret, t);

        assert!(!verify_code(&secret, &code, Some(t + 3 * STEP_SECONDS)));
        assert!(!verify_code(&secret, &code, Some(t - 3 * STEP_SECONDS)));
    }

    #[test]
    fn malformed_inputs_verify_false() {
        let secret = otp::generate_secret();
        let t = 1_700_000_010;

        assert!(!verify_code("not!base32", "000000", Some(t)));
        assert!(!verify_code(&secret, "abcdef", Some(t)));
        assert!(!verify_code(&secret, "", Some(t)));
    }

    #[test]
    fn code_from_wrong_secret_fails() {
        let a = otp::generate_secret();
        let b = otp::generate_secret();
        let t = 1_700_000_010;

        let code = code_at(&a, t);
        assert!(!verify_code(&b, &code, Some(t)));
    }
}
