use rand::{rngs::OsRng, Rng};

use crate::error::{LinkError, Result};

/// The 62-symbol alphabet short tokens are drawn from.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Fixed length of every generated short token.
pub const TOKEN_LENGTH: usize = 30;

/// Generate a random alphanumeric string of the given length, drawing each
/// character independently and uniformly from [`ALPHABET`].
pub fn random_token<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Source of short tokens for the service.
///
/// Injected rather than reached for globally so tests can substitute a
/// deterministic generator.
pub trait TokenGenerator: Send + Sync + 'static {
    fn generate(&self) -> Result<String>;
}

/// Production generator backed by the OS cryptographic random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureTokenGenerator;

impl TokenGenerator for SecureTokenGenerator {
    fn generate(&self) -> Result<String> {
        let token = random_token(&mut OsRng, TOKEN_LENGTH);
        // Cannot happen when random_token is correct; kept as a guard.
        if token.len() != TOKEN_LENGTH {
            return Err(LinkError::TokenGeneration(format!(
                "expected {} characters, got {}",
                TOKEN_LENGTH,
                token.len()
            )));
        }
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn token_has_fixed_length_and_alphabet() {
        let token = SecureTokenGenerator.generate().unwrap();
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn random_token_is_deterministic_for_a_fixed_seed() {
        let a = random_token(&mut StdRng::seed_from_u64(42), TOKEN_LENGTH);
        let b = random_token(&mut StdRng::seed_from_u64(42), TOKEN_LENGTH);
        assert_eq!(a, b);

        let c = random_token(&mut StdRng::seed_from_u64(43), TOKEN_LENGTH);
        assert_ne!(a, c);
    }

    #[test]
    fn random_token_honours_requested_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [0, 1, 7, 30, 64] {
            assert_eq!(random_token(&mut rng, len).len(), len);
        }
    }

    #[test]
    fn consecutive_tokens_differ() {
        let generator = SecureTokenGenerator;
        let a = generator.generate().unwrap();
        let b = generator.generate().unwrap();
        assert_ne!(a, b);
    }
}
