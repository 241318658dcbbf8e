use super::ArticleCommandService;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::{Article, ArticleId};

pub(super) const MAX_PASSWORD_LENGTH: usize = 128;

pub(super) fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.is_empty() {
        return Err(ApplicationError::invalid_request("password is required"));
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(ApplicationError::invalid_request(format!(
            "password cannot exceed {MAX_PASSWORD_LENGTH} bytes"
        )));
    }
    Ok(())
}

impl ArticleCommandService {
    /// Load the article and check the submitted password against its hash.
    /// Existence is checked first, so a missing article is NotFound whatever
    /// password was sent.
    pub(super) async fn load_authorized(
        &self,
        id: ArticleId,
        password: &str,
    ) -> ApplicationResult<Article> {
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article {id} not found")))?;

        let verified = self
            .password_hasher
            .verify(password, article.password_hash.as_str())
            .await?;

        if !verified {
            tracing::debug!(article_id = %id, "password mismatch");
            return Err(ApplicationError::unauthorized("password does not match"));
        }

        Ok(article)
    }
}
