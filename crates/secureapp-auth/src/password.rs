//! Password hashing and verification using bcrypt.
//!
//! bcrypt only consumes the first 72 bytes of its input, so both
//! hashing and verification truncate the password to 72 bytes up
//! front. The truncation is deliberate and symmetric: a password
//! longer than 72 bytes still verifies against its own hash, and
//! bytes past position 72 never affect the outcome.

use crate::error::AuthError;

/// bcrypt's input limit.
const MAX_PASSWORD_BYTES: usize = 72;

fn truncate(password: &str) -> &[u8] {
    let bytes = password.as_bytes();
    &bytes[..bytes.len().min(MAX_PASSWORD_BYTES)]
}

/// Hash a password with bcrypt using a per-hash random salt.
///
/// Passwords containing NUL bytes are rejected with
/// [`AuthError::InvalidInput`] — NUL acts as a terminator in some
/// bcrypt implementations, which would silently shorten the
/// effective password.
pub fn hash_password(password: &str, cost: u32) -> Result<String, AuthError> {
    if password.as_bytes().contains(&0) {
        return Err(AuthError::InvalidInput(
            "password contains a NUL byte".into(),
        ));
    }

    bcrypt::hash(truncate(password), cost).map_err(|e| AuthError::Crypto(format!("bcrypt: {e}")))
}

/// Verify a password against a stored bcrypt hash.
///
/// Applies the same 72-byte truncation as [`hash_password`]. The
/// underlying comparison is constant-time. Returns `false` — never
/// an error — for a malformed hash or a password that would have
/// been rejected at hashing time.
pub fn verify_password(password: &str, hash: &str) -> bool {
    if password.as_bytes().contains(&0) {
        return false;
    }

    bcrypt::verify(truncate(password), hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COST: u32 = 4; // minimum cost, keeps tests fast

    #[test]
    fn correct_password_matches() {
        let hash = hash_password("secret123", COST).unwrap();
        assert!(verify_password("secret123", &hash));
    }

    #[test]
    fn wrong_password_does_not_match() {
        let hash = hash_password("secret123", COST).unwrap();
        assert!(!verify_password("other", &hash));
    }

    #[test]
    fn bytes_past_72_are_ignored() {
        let base = "x".repeat(72);
        let long = format!("{base}trailing-garbage");

        let hash = hash_password(&long, COST).unwrap();
        assert!(verify_password(&base, &hash));
        assert!(verify_password(&format!("{base}different-tail"), &hash));
    }

    #[test]
    fn passwords_differing_within_72_bytes_do_not_match() {
        let hash = hash_password(&"a".repeat(72), COST).unwrap();
        assert!(!verify_password(&"b".repeat(72), &hash));
    }

    #[test]
    fn malformed_hash_verifies_false() {
        assert!(!verify_password("secret123", "not-a-bcrypt-hash"));
        assert!(!verify_password("secret123", ""));
    }

    #[test]
    fn nul_byte_rejected() {
        let err = hash_password("pass\0word", COST).unwrap_err();
        assert!(matches!(err, AuthError::InvalidInput(_)));

        let hash = hash_password("password", COST).unwrap();
        assert!(!verify_password("pass\0word", &hash));
    }
}
