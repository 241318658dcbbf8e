// tests/support/helpers.rs
use super::mocks::{CapturingPublisher, DummyPasswordHasher, SteppingClock};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use axum::response::Response;
use board_core::application::commands::articles::CreateArticleCommand;
use board_core::application::commands::replies::CreateReplyCommand;
use board_core::application::ports::notification::NotificationPublisher;
use board_core::application::services::ApplicationServices;
use board_core::domain::keyword::KeywordRepository;
use board_core::domain::reply::ReplyRepository;
use board_core::infrastructure::database;
use board_core::infrastructure::repositories::{
    SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteKeywordRepository,
    SqliteReplyRepository,
};
use board_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::Arc;

/// マイグレーション適用済みのインメモリ SQLite プール
pub async fn memory_pool() -> SqlitePool {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool)
        .await
        .expect("apply migrations");
    pool
}

/// サービス一式とテスト用の観測点
pub struct TestApp {
    pub pool: SqlitePool,
    pub services: Arc<ApplicationServices>,
    pub publisher: Arc<CapturingPublisher>,
}

#[derive(Default)]
pub struct TestAppBuilder {
    keyword_repo: Option<Arc<dyn KeywordRepository>>,
    reply_repo: Option<Arc<dyn ReplyRepository>>,
    publisher: Option<Arc<dyn NotificationPublisher>>,
    clock: Option<Arc<SteppingClock>>,
}

impl TestAppBuilder {
    pub fn keyword_repo(mut self, repo: Arc<dyn KeywordRepository>) -> Self {
        self.keyword_repo = Some(repo);
        self
    }

    pub fn reply_repo(mut self, repo: Arc<dyn ReplyRepository>) -> Self {
        self.reply_repo = Some(repo);
        self
    }

    pub fn publisher(mut self, publisher: Arc<dyn NotificationPublisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    pub fn clock(mut self, clock: SteppingClock) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    pub async fn build(self) -> TestApp {
        let pool = memory_pool().await;
        let capturing = Arc::new(CapturingPublisher::default());

        let keyword_repo = self
            .keyword_repo
            .unwrap_or_else(|| Arc::new(SqliteKeywordRepository::new(pool.clone())));
        let reply_repo = self
            .reply_repo
            .unwrap_or_else(|| Arc::new(SqliteReplyRepository::new(pool.clone())));
        let publisher = self
            .publisher
            .unwrap_or_else(|| capturing.clone() as Arc<dyn NotificationPublisher>);
        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(SteppingClock::new()));

        let services = Arc::new(ApplicationServices::new(
            Arc::new(SqliteArticleWriteRepository::new(pool.clone())),
            Arc::new(SqliteArticleReadRepository::new(pool.clone())),
            reply_repo,
            keyword_repo,
            Arc::new(DummyPasswordHasher),
            publisher,
            clock,
        ));

        TestApp {
            pool,
            services,
            publisher: capturing,
        }
    }
}

impl TestApp {
    pub fn builder() -> TestAppBuilder {
        TestAppBuilder::default()
    }

    pub async fn new() -> Self {
        Self::builder().build().await
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, &["*".to_string()])
    }

    pub async fn create_article(&self, title: &str, writer: &str, password: &str) -> i64 {
        self.create_article_with_content(title, "content", writer, password)
            .await
    }

    pub async fn create_article_with_content(
        &self,
        title: &str,
        content: &str,
        writer: &str,
        password: &str,
    ) -> i64 {
        self.services
            .article_commands
            .create_article(CreateArticleCommand {
                title: title.into(),
                content: content.into(),
                writer: writer.into(),
                password: password.into(),
            })
            .await
            .expect("create article")
            .id
    }

    pub async fn create_reply(&self, article_id: i64, content: &str, reply_ref: Option<i64>) -> i64 {
        self.services
            .reply_commands
            .create_reply(CreateReplyCommand {
                article_id,
                content: Some(content.into()),
                reply_ref,
            })
            .await
            .expect("create reply")
            .id
    }

    pub async fn insert_keyword(&self, writer: &str, content: &str) {
        insert_keyword(&self.pool, writer, content).await;
    }
}

pub async fn insert_keyword(pool: &SqlitePool, writer: &str, content: &str) {
    sqlx::query("INSERT INTO keywords (writer, content) VALUES (?, ?)")
        .bind(writer)
        .bind(content)
        .execute(pool)
        .await
        .expect("insert keyword");
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// ステータスとエラーボディ形式をまとめて検証する
pub async fn assert_error(resp: Response, status: StatusCode) -> Value {
    assert_eq!(resp.status(), status);
    let body = read_json(resp).await;
    assert_eq!(
        body["error"].as_str(),
        status.canonical_reason(),
        "unexpected error body: {body}"
    );
    assert!(body["message"].is_string(), "missing message: {body}");
    body
}
