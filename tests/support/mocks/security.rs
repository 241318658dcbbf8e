// tests/support/mocks/security.rs
use async_trait::async_trait;
use board_core::application::{ApplicationResult, ports::security::PasswordHasher};

/// 高速なテスト用ハッシャー。`hashed:<password>` を返し、照合は文字列比較。
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        Ok(format!("hashed:{password}") == expected_hash)
    }
}
