use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
    service::settings::SettingsCache,
};
use test_utils::{builder::TestBuilder, factory};

mod require;
