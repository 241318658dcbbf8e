use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        self, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

/// Argon2id hasher producing salted PHC strings. Hashing runs on the
/// blocking pool because it is deliberately slow.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    fn argon2(params: Params) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new(Params::default())
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        let params = self.params.clone();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Self::argon2(params)
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| ApplicationError::internal(err.to_string()))
        })
        .await
        .map_err(|err| ApplicationError::internal(err.to_string()))?
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        let params = self.params.clone();
        tokio::task::spawn_blocking(move || -> ApplicationResult<bool> {
            let parsed = PasswordHash::new(&expected_hash)
                .map_err(|err| ApplicationError::internal(err.to_string()))?;
            // The PHC string carries its own cost parameters; ours only
            // seed the instance.
            match Self::argon2(params).verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(password_hash::Error::Password) => Ok(false),
                Err(err) => Err(ApplicationError::internal(err.to_string())),
            }
        })
        .await
        .map_err(|err| ApplicationError::internal(err.to_string()))?
    }
}
