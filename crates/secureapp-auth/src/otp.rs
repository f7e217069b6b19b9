//! TOTP shared-secret generation.

use base32::Alphabet;
use rand::rngs::OsRng;
use rand::RngCore;

/// 80 bits of entropy, the common authenticator-app default. Encodes
/// to 16 base32 characters.
const SECRET_BYTES: usize = 10;

/// Generate a fresh random TOTP secret from the OS CSPRNG, encoded
/// as unpadded RFC 4648 base32.
pub fn generate_secret() -> String {
    let mut bytes = [0u8; SECRET_BYTES];
    OsRng.fill_bytes(&mut bytes);
    base32::encode(Alphabet::Rfc4648 { padding: false }, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_is_16_base32_chars() {
        let secret = generate_secret();
        assert_eq!(secret.len(), 16);
        assert!(secret
            .chars()
            .all(|c| c.is_ascii_uppercase() || ('2'..='7').contains(&c)));
    }

    #[test]
    fn secrets_are_unique() {
        let a = generate_secret();
        let b = generate_secret();
        assert_ne!(a, b);
    }

    #[test]
    fn secret_decodes_to_10_bytes() {
        let secret = generate_secret();
        let decoded = base32::decode(Alphabet::Rfc4648 { padding: false }, &secret).unwrap();
        assert_eq!(decoded.len(), SECRET_BYTES);
    }
}
