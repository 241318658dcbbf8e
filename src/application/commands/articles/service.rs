// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        ports::{ClockPort, PasswordHasherPort},
        services::KeywordNotifier,
    },
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) password_hasher: Arc<PasswordHasherPort>,
    pub(super) notifier: Arc<KeywordNotifier>,
    pub(super) clock: Arc<ClockPort>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        password_hasher: Arc<PasswordHasherPort>,
        notifier: Arc<KeywordNotifier>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            password_hasher,
            notifier,
            clock,
        }
    }
}
