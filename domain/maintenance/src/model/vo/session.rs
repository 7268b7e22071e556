use tokio::sync::RwLock;

use crate::model::entity::User;

/// Authentication state shared by the api client and the session service.
///
/// Created empty or from a stored token, filled on login or token
/// verification and cleared on logout or when the backend answers 401.
#[derive(Debug, Default)]
pub struct Session {
    state: RwLock<Option<SessionState>>,
}

#[derive(Clone, Debug)]
struct SessionState {
    token: String,
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session holding a token that has not been verified yet.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            state: RwLock::new(Some(SessionState {
                token: token.into(),
                user: None,
            })),
        }
    }

    pub async fn token(&self) -> Option<String> {
        self.state.read().await.as_ref().map(|s| s.token.clone())
    }

    pub async fn user(&self) -> Option<User> {
        self.state.read().await.as_ref().and_then(|s| s.user.clone())
    }

    pub async fn establish(&self, token: impl Into<String>, user: User) {
        *self.state.write().await = Some(SessionState {
            token: token.into(),
            user: Some(user),
        });
    }

    /// Attaches the verified user to the current token.
    pub async fn confirm(&self, user: User) {
        if let Some(state) = self.state.write().await.as_mut() {
            state.user = Some(user);
        }
    }

    pub async fn clear(&self) {
        self.state.write().await.take();
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_some()
    }
}
