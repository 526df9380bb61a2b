use argon2::{
    Argon2, Params,
    password_hash::{
        Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use std::sync::OnceLock;

/// Argon2id hashing for admin credentials.
pub struct PasswordManager;

static INSTANCE: OnceLock<Argon2> = OnceLock::new();
static DUMMY_HASH: OnceLock<String> = OnceLock::new();

// Parseable placeholder used only if hashing the dummy password fails. No
// password verifies against it.
const FALLBACK_DUMMY_HASH: &str = "$argon2id$v=19$m=65536,t=3,p=4$dW5rbm93bl9zYWx0X2R1bW15$E2LvWPx3FxvDaJxEMpLLBfWbLkPXfYHrF8z9CGCX3eQ";

impl PasswordManager {
    fn engine() -> &'static Argon2<'static> {
        INSTANCE.get_or_init(|| {
            let params = Params::new(
                64 * 1024, // 64MB Memory (m)
                3,         // 3 Iterations (t)
                4,         // 4 Parallelism lanes (p)
                None,      // Default hash length (32 bytes)
            )
            .unwrap_or_default();

            Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params)
        })
    }

    pub fn hash_password(password: &str) -> Result<String, Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::engine().hash_password(password.as_bytes(), &salt)?;

        Ok(hash.to_string())
    }

    pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, Error> {
        let parsed_hash = PasswordHash::new(stored_hash)?;

        let result = Self::engine().verify_password(password.as_bytes(), &parsed_hash);

        match result {
            Ok(_) => Ok(true),
            Err(Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Hash checked against when the email is unknown, so a failed sign-in
    /// takes as long whichever field was wrong.
    pub fn dummy_hash() -> &'static str {
        DUMMY_HASH.get_or_init(|| {
            Self::hash_password("dummy_password_for_timing").unwrap_or_else(|e| {
                log::error!("Failed to generate dummy hash: {}", e);
                FALLBACK_DUMMY_HASH.to_string()
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_dummy_hash_parses_and_rejects_passwords() {
        assert!(PasswordHash::new(FALLBACK_DUMMY_HASH).is_ok());
        assert_eq!(
            PasswordManager::verify_password("dummy_password_for_timing", FALLBACK_DUMMY_HASH)
                .ok(),
            Some(false)
        );
    }
}
