use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
    middleware::session::AuthSession,
    model::user::{RoleCode, User},
    network::mapping::MapFrom,
};

pub enum Permission {
    /// User must hold the role
    Role(RoleCode),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and checks every permission
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding all permissions
    /// - `Err(AuthError::UserNotInSession)` - No user ID in session
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists; the stale
    ///   user ID is removed from the session
    /// - `Err(AuthError::MissingRole)` - First permission the user lacks
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let auth_session = AuthSession::new(self.session);

        let Some(user_id) = auth_session.get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(entity) = user_repo.find_by_id(user_id).await? else {
            auth_session.clear().await?;
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let user = User::map_from(&entity).map_err(|source| InternalError::CorruptRecord {
            entity: "user",
            id: entity.id,
            source,
        })?;

        for permission in permissions {
            match permission {
                Permission::Role(role) => {
                    if !user.has_role(*role) {
                        return Err(AuthError::MissingRole(user.id, *role).into());
                    }
                }
            }
        }

        Ok(user)
    }
}
