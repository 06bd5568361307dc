use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use shared::error::{AppError, AppResult};

pub fn hash_password(raw: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(raw.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::ConversionEntityError(e.to_string()))
}

/// 照合に失敗した場合は、ハッシュが壊れている場合も含めて LoginFailed に倒す。
/// どちらのケースかを呼び出し側に漏らす必要はない。
pub fn verify_password(raw: &str, hash: &str) -> AppResult<()> {
    let parsed = PasswordHash::new(hash).map_err(|_| AppError::LoginFailed)?;
    Argon2::default()
        .verify_password(raw.as_bytes(), &parsed)
        .map_err(|_| AppError::LoginFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_round_trip() {
        let hash = hash_password("open sesame").unwrap();
        assert_ne!(hash, "open sesame");
        assert!(verify_password("open sesame", &hash).is_ok());
        assert!(verify_password("open says me", &hash).is_err());
    }

    #[test]
    fn test_broken_hash_is_login_failure() {
        assert!(matches!(
            verify_password("whatever", "not-a-phc-string"),
            Err(AppError::LoginFailed)
        ));
    }
}
