#![allow(dead_code)]

use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use chrono::Utc;
use short_url::application::services::{ResolutionService, ShorteningService};
use short_url::config::CorsConfig;
use short_url::domain::entities::{NewShortUrl, ShortUrl};
use short_url::domain::repositories::{RepositoryError, ShortUrlRepository};
use short_url::routes::app_router;
use short_url::state::AppState;
use short_url::utils::slug_generator::{RandomSlugGenerator, SlugGenerator};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Repository keeping rows in a map, rejecting duplicate slugs like the
/// primary-key constraint does.
#[derive(Default)]
pub struct InMemoryRepository {
    rows: Mutex<HashMap<String, ShortUrl>>,
    unavailable: AtomicBool,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a mapping.
    pub fn seed(&self, slug: &str, long_url: &str) {
        self.rows.lock().unwrap().insert(
            slug.to_string(),
            ShortUrl::new(slug.to_string(), long_url.to_string(), Utc::now()),
        );
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// Makes every subsequent call fail with a database error.
    pub fn set_unavailable(&self) {
        self.unavailable.store(true, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ShortUrlRepository for InMemoryRepository {
    async fn insert(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, RepositoryError> {
        self.check_available()?;

        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&new_short_url.slug) {
            return Err(RepositoryError::DuplicateSlug(new_short_url.slug));
        }

        let short_url = ShortUrl::new(new_short_url.slug, new_short_url.long_url, Utc::now());
        rows.insert(short_url.slug.clone(), short_url.clone());
        Ok(short_url)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ShortUrl>, RepositoryError> {
        self.check_available()?;
        Ok(self.rows.lock().unwrap().get(slug).cloned())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.check_available()
    }
}

/// Generator replaying a fixed script of slugs, then repeating the last one.
pub struct ScriptedGenerator {
    script: Mutex<VecDeque<String>>,
    last: Mutex<String>,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new(slugs: &[&str]) -> Self {
        Self {
            script: Mutex::new(slugs.iter().map(|s| s.to_string()).collect()),
            last: Mutex::new(slugs.last().map(|s| s.to_string()).unwrap_or_default()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SlugGenerator for ScriptedGenerator {
    fn generate(&self) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script.lock().unwrap().pop_front() {
            Some(slug) => slug,
            None => self.last.lock().unwrap().clone(),
        }
    }
}

pub fn create_test_state(
    repository: Arc<InMemoryRepository>,
    generator: Arc<dyn SlugGenerator>,
) -> AppState {
    AppState::new(
        Arc::new(ShorteningService::new(repository.clone(), generator)),
        Arc::new(ResolutionService::new(repository)),
    )
}

pub fn create_test_server(
    repository: Arc<InMemoryRepository>,
    generator: Arc<dyn SlugGenerator>,
) -> TestServer {
    create_test_server_with_cors(repository, generator, &CorsConfig::default())
}

/// Test server mounting the full application router with the given CORS policy.
pub fn create_test_server_with_cors(
    repository: Arc<InMemoryRepository>,
    generator: Arc<dyn SlugGenerator>,
    cors: &CorsConfig,
) -> TestServer {
    let state = create_test_state(repository, generator);
    let app = app_router(state, cors);
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

/// Test server backed by an empty repository and the random generator.
pub fn create_default_server() -> (TestServer, Arc<InMemoryRepository>) {
    let repository = Arc::new(InMemoryRepository::new());
    let server = create_test_server(repository.clone(), Arc::new(RandomSlugGenerator::default()));
    (server, repository)
}
