// src/session/registry.rs
use crate::domain::ViewState;
use crate::errors::ServerError;
use crate::session::token::{generate_token_default, hash_token, TokenHash};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

pub const SESSION_COOKIE: &str = "session";

struct SessionEntry {
    view: ViewState,
    last_seen: Instant,
}

/// The session a request belongs to.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    pub token: String,
    /// Set when the session was created for this request and the cookie
    /// still has to be sent.
    pub is_new: bool,
}

impl SessionHandle {
    pub fn set_cookie(&self) -> String {
        format!(
            "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
            self.token
        )
    }
}

/// In-memory view states, one per browser session.
pub struct SessionRegistry {
    ttl: Duration,
    max_sessions: usize,
    sessions: Mutex<HashMap<TokenHash, SessionEntry>>,
}

impl SessionRegistry {
    pub fn new(ttl: Duration, max_sessions: usize) -> Self {
        Self {
            ttl,
            max_sessions: max_sessions.max(1),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Looks up an existing session without starting one.
    pub fn find(&self, token: Option<&str>) -> Result<Option<SessionHandle>, ServerError> {
        let Some(token) = token else {
            return Ok(None);
        };

        let now = Instant::now();
        let mut sessions = self.sessions.lock().map_err(|_| ServerError::InternalError)?;

        match sessions.get_mut(&hash_token(token)) {
            Some(entry) if now.duration_since(entry.last_seen) <= self.ttl => {
                entry.last_seen = now;
                Ok(Some(SessionHandle {
                    token: token.to_string(),
                    is_new: false,
                }))
            }
            _ => Ok(None),
        }
    }

    /// Returns the session for `token`, or starts a fresh idle one when the
    /// token is missing, unknown, or expired.
    pub fn resolve(&self, token: Option<&str>) -> Result<SessionHandle, ServerError> {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().map_err(|_| ServerError::InternalError)?;

        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) <= self.ttl);
        if sessions.len() < before {
            log::debug!("Evicted {} idle session(s)", before - sessions.len());
        }

        if let Some(token) = token {
            if let Some(entry) = sessions.get_mut(&hash_token(token)) {
                entry.last_seen = now;
                return Ok(SessionHandle {
                    token: token.to_string(),
                    is_new: false,
                });
            }
        }

        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(key, _)| *key);
            match oldest {
                Some(key) => {
                    sessions.remove(&key);
                    log::debug!("Session limit {} reached, dropped oldest", self.max_sessions);
                }
                None => break,
            }
        }

        let token = generate_token_default();
        sessions.insert(
            hash_token(&token),
            SessionEntry {
                view: ViewState::new(),
                last_seen: now,
            },
        );
        log::debug!("Started session ({} active)", sessions.len());

        Ok(SessionHandle {
            token,
            is_new: true,
        })
    }

    /// Runs `f` against the session's view state while holding the lock.
    pub fn with_view<F, T>(&self, session: &SessionHandle, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut ViewState) -> T,
    {
        let mut sessions = self.sessions.lock().map_err(|_| ServerError::InternalError)?;

        let entry = sessions
            .entry(hash_token(&session.token))
            .or_insert_with(|| SessionEntry {
                view: ViewState::new(),
                last_seen: Instant::now(),
            });
        entry.last_seen = Instant::now();

        Ok(f(&mut entry.view))
    }

    #[cfg(test)]
    pub(crate) fn session_count(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }
}
