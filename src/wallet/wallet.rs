use chrono::Utc;
use rand::Rng;
use serde::Serialize;

/// The 32-symbol alphabet Stellar-style keys are drawn from (A-Z plus 2-7,
/// so keys survive case-insensitive handling)
pub const ADDRESS_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Length of the random key body, excluding the prefix marker
pub const ADDRESS_BODY_LEN: usize = 55;

/// Public keys start with 'G', like Stellar account ids
pub const PUBLIC_KEY_PREFIX: char = 'G';

/// Secret keys start with 'S', like Stellar seeds
pub const SECRET_KEY_PREFIX: char = 'S';

/// A mock key pair that looks like a Stellar wallet.
///
/// Purely generative: there is no real key material behind these strings,
/// no collision check, and nothing is persisted. Both halves share the same
/// random body and differ only in their prefix marker, which is enough for
/// the UI flows this backs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    public_key: String,
    secret_key: String,
    created_at: String,
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new()
    }
}

impl Wallet {
    /// Generate a fresh mock key pair. Never fails.
    pub fn new() -> Wallet {
        let mut rng = rand::thread_rng();
        let body: String = (0..ADDRESS_BODY_LEN)
            .map(|_| ADDRESS_ALPHABET[rng.gen_range(0..ADDRESS_ALPHABET.len())] as char)
            .collect();

        Wallet {
            public_key: format!("{PUBLIC_KEY_PREFIX}{body}"),
            secret_key: format!("{SECRET_KEY_PREFIX}{body}"),
            created_at: Utc::now().to_rfc3339(),
        }
    }

    pub fn get_public_key(&self) -> &str {
        self.public_key.as_str()
    }

    pub fn get_secret_key(&self) -> &str {
        self.secret_key.as_str()
    }

    pub fn get_created_at(&self) -> &str {
        self.created_at.as_str()
    }
}

/// Abbreviate an address for display: first `chars` characters, an
/// ellipsis, then the last `chars` characters.
///
/// An empty address renders as an empty string. Addresses of `2 * chars`
/// characters or fewer are returned unabbreviated, since cutting them would
/// not save any space.
pub fn format_address(address: &str, chars: usize) -> String {
    if address.is_empty() {
        return String::new();
    }

    let len = address.chars().count();
    if len <= chars * 2 {
        return address.to_string();
    }

    let head: String = address.chars().take(chars).collect();
    let tail: String = address.chars().skip(len - chars).collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_shape() {
        let wallet = Wallet::new();
        assert_eq!(wallet.get_public_key().len(), ADDRESS_BODY_LEN + 1);
        assert_eq!(wallet.get_secret_key().len(), ADDRESS_BODY_LEN + 1);
        assert!(wallet.get_public_key().starts_with(PUBLIC_KEY_PREFIX));
        assert!(wallet.get_secret_key().starts_with(SECRET_KEY_PREFIX));
    }

    #[test]
    fn test_wallet_body_stays_inside_alphabet() {
        let wallet = Wallet::new();
        for c in wallet.get_public_key().chars().skip(1) {
            assert!(
                ADDRESS_ALPHABET.contains(&(c as u8)),
                "unexpected character {c} in address body"
            );
        }
    }

    #[test]
    fn test_wallet_halves_share_one_body() {
        let wallet = Wallet::new();
        assert_eq!(wallet.get_public_key()[1..], wallet.get_secret_key()[1..]);
    }

    #[test]
    fn test_wallet_created_at_is_rfc3339() {
        let wallet = Wallet::new();
        assert!(chrono::DateTime::parse_from_rfc3339(wallet.get_created_at()).is_ok());
    }

    #[test]
    fn test_format_address_abbreviates() {
        assert_eq!(format_address("GABCDEFGHIJKLMNOP", 4), "GABC...MNOP");
    }

    #[test]
    fn test_format_address_empty() {
        assert_eq!(format_address("", 4), "");
    }

    #[test]
    fn test_format_address_short_input_unchanged() {
        assert_eq!(format_address("GABCDEFG", 4), "GABCDEFG");
        assert_eq!(format_address("GAB", 4), "GAB");
    }

    #[test]
    fn test_wallet_serializes_camel_case() {
        let wallet = Wallet::new();
        let json = serde_json::to_value(&wallet).unwrap();
        assert!(json["publicKey"].is_string());
        assert!(json["secretKey"].is_string());
        assert!(json["createdAt"].is_string());
    }
}
