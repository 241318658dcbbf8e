use std::sync::Arc;

use crate::domain::reply::ReplyRepository;

pub struct ReplyQueryService {
    pub(super) reply_repo: Arc<dyn ReplyRepository>,
}

impl ReplyQueryService {
    pub fn new(reply_repo: Arc<dyn ReplyRepository>) -> Self {
        Self { reply_repo }
    }
}
