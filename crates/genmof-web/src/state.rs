//! Shared application state for the web server.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use uuid::Uuid;

use tracing::{debug, info};

use genmof_common::{GenmofConfig, Result};
use genmof_core::{ArticleInfo, ArticleStore, Candidate, CandidateGenerator, DemoGenerator, DesignRequest};

/// One browser session's uploads and when it was last seen.
struct Session {
    articles: ArticleStore,
    last_seen: Instant,
}

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub config: GenmofConfig,
    pub generator: Arc<dyn CandidateGenerator>,
    /// Uploaded-article lists keyed by session cookie
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl AppState {
    pub fn new(config: GenmofConfig) -> Self {
        Self::with_generator(config, Arc::new(DemoGenerator::new()))
    }

    pub fn with_generator(config: GenmofConfig, generator: Arc<dyn CandidateGenerator>) -> Self {
        Self {
            config,
            generator,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Validate the request, then run the configured generator.
    /// A blank brief never reaches the generator.
    pub fn generate(&self, request: &DesignRequest) -> Result<Vec<Candidate>> {
        request.validate()?;
        let candidates = self.generator.generate(request);
        info!(
            "{} generator produced {} candidates",
            self.generator.name(),
            candidates.len()
        );
        Ok(candidates)
    }

    /// Snapshot of a session's articles; unknown sessions have none.
    /// Reading counts as activity.
    pub async fn articles(&self, session: Uuid) -> Vec<ArticleInfo> {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&session) {
            Some(entry) => {
                entry.last_seen = Instant::now();
                entry.articles.list().to_vec()
            }
            None => Vec::new(),
        }
    }

    /// Idle sessions are dropped before the new entry is written.
    pub async fn add_article(&self, session: Uuid, name: &str, size: u64, mime_type: &str) -> bool {
        let now = Instant::now();
        let idle_timeout = self.config.sessions.idle_timeout();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|id, entry| {
            *id == session || now.saturating_duration_since(entry.last_seen) <= idle_timeout
        });

        let entry = sessions.entry(session).or_insert_with(|| Session {
            articles: ArticleStore::new(),
            last_seen: now,
        });
        entry.last_seen = now;
        entry.articles.add(name, size, mime_type)
    }

    /// Drop sessions idle for longer than the configured timeout, as of `now`.
    /// Returns how many were removed.
    pub async fn evict_idle(&self, now: Instant) -> usize {
        let idle_timeout = self.config.sessions.idle_timeout();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| now.saturating_duration_since(entry.last_seen) <= idle_timeout);
        before - sessions.len()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

pub type SharedState = Arc<AppState>;

/// Periodically evict idle sessions for the lifetime of the server.
pub fn spawn_session_sweeper(state: SharedState, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let removed = state.evict_idle(Instant::now()).await;
            if removed > 0 {
                debug!("Evicted {} idle session(s)", removed);
            }
        }
    })
}
