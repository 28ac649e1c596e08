use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
    model::user::RoleCode,
};
use test_utils::{builder::TestBuilder, factory};
