//! Sessions: per-user state owned by one `SessionHandle`.
//!
//! A session holds the profile and result stores, at most one assessment
//! engine, and at most one live countdown. Every transition (HTTP action or
//! timer tick) runs to completion under the session's mutex. Nothing is
//! persisted.

use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, MutexGuard, RwLock};
use tracing::info;
use uuid::Uuid;

use crate::assessment::engine::{AssessmentEngine, AssessmentView, Progression, TickOutcome};
use crate::assessment::timer::{CountdownTimer, DEFAULT_TICK_INTERVAL};
use crate::assessment::AssessmentError;
use crate::models::profile::PersonalProfile;
use crate::models::result::SkillResult;
use crate::models::skill::SkillArea;

pub mod handlers;
pub mod store;

use store::Store;

pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub profile: Store<PersonalProfile>,
    pub results: Store<Vec<SkillResult>>,
    pub completed_at: Option<DateTime<Utc>>,
    assessment: Option<AssessmentEngine>,
    timer: Option<CountdownTimer>,
}

impl Session {
    fn new(id: Uuid) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            profile: Store::default(),
            results: Store::default(),
            completed_at: None,
            assessment: None,
            timer: None,
        }
    }

    pub fn assessment(&self) -> Option<&AssessmentEngine> {
        self.assessment.as_ref()
    }

    pub fn has_live_timer(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    fn publish_results(&mut self, results: Vec<SkillResult>) {
        info!(
            "Assessment complete for session {}: {} areas scored",
            self.id,
            results.len()
        );
        self.results.replace(results);
        self.completed_at = Some(Utc::now());
    }
}

#[derive(Clone)]
pub struct SessionHandle {
    id: Uuid,
    inner: Arc<Mutex<Session>>,
    tick_interval: Duration,
}

impl SessionHandle {
    fn new(id: Uuid, tick_interval: Duration) -> Self {
        Self {
            id,
            inner: Arc::new(Mutex::new(Session::new(id))),
            tick_interval,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub async fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner.lock().await
    }

    pub async fn profile(&self) -> Arc<PersonalProfile> {
        self.inner.lock().await.profile.get()
    }

    pub async fn replace_profile(&self, profile: PersonalProfile) -> Arc<PersonalProfile> {
        self.inner.lock().await.profile.replace(profile)
    }

    /// Read-modify-write of the whole profile under the session lock.
    pub async fn update_profile<F>(&self, update: F) -> Arc<PersonalProfile>
    where
        F: FnOnce(&PersonalProfile) -> PersonalProfile,
    {
        let mut session = self.inner.lock().await;
        let next = update(&session.profile.get());
        session.profile.replace(next)
    }

    pub async fn results(&self) -> Arc<Vec<SkillResult>> {
        self.inner.lock().await.results.get()
    }

    /// Starts a fresh assessment over `areas`, replacing any previous one.
    pub async fn start_assessment(&self, areas: Vec<SkillArea>, time_limit: u32) -> AssessmentView {
        let mut session = self.inner.lock().await;
        session.timer = None;
        session.results.replace(Vec::new());
        session.completed_at = None;
        let engine = AssessmentEngine::new(areas, time_limit);
        info!(
            "Session {} started assessment: {} questions across {} areas",
            self.id,
            engine.total_questions(),
            engine.areas().len()
        );
        if let Some(results) = engine.results() {
            session.publish_results(results.to_vec());
        }
        let view = engine.view();
        session.assessment = Some(engine);
        self.sync_timer(&mut session);
        view
    }

    pub async fn assessment_view(&self) -> Result<AssessmentView, AssessmentError> {
        let session = self.inner.lock().await;
        current_view(&session)
    }

    pub async fn select(&self, option: usize) -> Result<AssessmentView, AssessmentError> {
        let mut session = self.inner.lock().await;
        engine_mut(&mut session)?.select(option)?;
        current_view(&session)
    }

    pub async fn submit(&self) -> Result<AssessmentView, AssessmentError> {
        let mut session = self.inner.lock().await;
        let submission = engine_mut(&mut session)?.submit()?;
        info!(
            "Session {} answered {} (correct: {})",
            self.id, submission.question_id, submission.correct
        );
        self.sync_timer(&mut session);
        current_view(&session)
    }

    pub async fn advance(&self) -> Result<AssessmentView, AssessmentError> {
        let mut session = self.inner.lock().await;
        let progression = engine_mut(&mut session)?.advance()?;
        if let Progression::Complete(results) = progression {
            session.publish_results(results);
        }
        self.sync_timer(&mut session);
        current_view(&session)
    }

    pub async fn previous(&self) -> Result<AssessmentView, AssessmentError> {
        let session = self.inner.lock().await;
        let engine = session
            .assessment
            .as_ref()
            .ok_or(AssessmentError::NotStarted)?;
        engine.previous();
        Ok(engine.view())
    }

    /// Keeps exactly one countdown alive while a question is presenting,
    /// and none otherwise.
    fn sync_timer(&self, session: &mut Session) {
        let epoch = session
            .assessment
            .as_ref()
            .and_then(|engine| engine.presenting_epoch());
        match epoch {
            Some(epoch) if session.timer.as_ref().map(|t| t.epoch()) == Some(epoch) => {}
            Some(epoch) => {
                let weak = Arc::downgrade(&self.inner);
                session.timer = Some(CountdownTimer::spawn(
                    epoch,
                    self.tick_interval,
                    move || on_tick(weak.clone(), epoch),
                ));
            }
            None => session.timer = None,
        }
    }
}

/// One countdown step. Returns `false` once the countdown should stop.
async fn on_tick(session: Weak<Mutex<Session>>, epoch: u64) -> bool {
    let Some(session) = session.upgrade() else {
        return false;
    };
    let mut guard = session.lock().await;
    let session = &mut *guard;
    let Some(engine) = session.assessment.as_mut() else {
        return false;
    };
    match engine.tick_for(epoch) {
        TickOutcome::Counting { .. } => true,
        TickOutcome::AutoSubmitted(submission) => {
            info!(
                "Session {} timed out on {} (recorded {:?})",
                session.id, submission.question_id, submission.answer
            );
            session.timer = None;
            false
        }
        TickOutcome::Ignored => false,
    }
}

fn engine_mut(session: &mut Session) -> Result<&mut AssessmentEngine, AssessmentError> {
    session
        .assessment
        .as_mut()
        .ok_or(AssessmentError::NotStarted)
}

fn current_view(session: &Session) -> Result<AssessmentView, AssessmentError> {
    session
        .assessment
        .as_ref()
        .map(|engine| engine.view())
        .ok_or(AssessmentError::NotStarted)
}

/// All live sessions, keyed by id.
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, SessionHandle>>>,
    tick_interval: Duration,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

impl SessionRegistry {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            tick_interval,
        }
    }

    pub async fn create(&self) -> SessionHandle {
        let handle = SessionHandle::new(Uuid::new_v4(), self.tick_interval);
        self.sessions
            .write()
            .await
            .insert(handle.id(), handle.clone());
        info!("Created session {}", handle.id());
        handle
    }

    pub async fn get(&self, id: Uuid) -> Option<SessionHandle> {
        self.sessions.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
