//! One-time admin bootstrap codes.
//!
//! When the admin allow-list is empty at startup, a code is generated and logged as a login
//! link. The first member to log in with it is added to the allow-list. Codes live in memory
//! only, expire after 60 seconds and are consumed on first successful use.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

const ADMIN_CODE_TTL: Duration = Duration::from_secs(60);

#[derive(Clone)]
struct AdminCode {
    code: String,
    expires_at: Instant,
}

impl AdminCode {
    fn new(code: String, ttl: Duration) -> Self {
        Self {
            code,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Holds at most one active bootstrap code.
#[derive(Clone)]
pub struct AdminCodeService {
    code: Arc<RwLock<Option<AdminCode>>>,
    ttl: Duration,
}

impl AdminCodeService {
    pub fn new() -> Self {
        Self::with_ttl(ADMIN_CODE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Generates a random 32-character code, replacing any previous one.
    pub async fn generate(&self) -> String {
        let code = Self::generate_random_code();
        *self.code.write().await = Some(AdminCode::new(code.clone(), self.ttl));
        code
    }

    /// Checks the input against the active code and consumes it on a match.
    ///
    /// An expired code is discarded and never matches.
    ///
    /// # Returns
    /// - `true` - Input matched an unexpired code, which is now consumed
    /// - `false` - No code, expired code, or mismatch
    pub async fn validate_and_consume(&self, input: &str) -> bool {
        let mut code = self.code.write().await;

        let Some(stored) = code.as_ref() else {
            return false;
        };
        if stored.is_expired() {
            *code = None;
            return false;
        }
        if stored.code == input {
            *code = None;
            return true;
        }

        false
    }

    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";
        const CODE_LENGTH: usize = 32;

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect()
    }

    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let code = self.code.read().await;
        code.as_ref().is_some_and(|stored| !stored.is_expired())
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}
