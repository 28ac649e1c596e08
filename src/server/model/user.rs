//! User domain models.
//!
//! Users own blogs and carry the role codes that gate the writer and editor
//! endpoints. Roles are stored as a comma separated list on the user record.

use std::{fmt, str::FromStr};

use crate::server::network::mapping::{parse_field, MapFrom, MappingError};

/// Role granted to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleCode {
    Learner,
    Writer,
    Editor,
    Admin,
}

impl RoleCode {
    /// Stored and displayed form of the role code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Learner => "LEARNER",
            Self::Writer => "WRITER",
            Self::Editor => "EDITOR",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for RoleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LEARNER" => Ok(Self::Learner),
            "WRITER" => Ok(Self::Writer),
            "EDITOR" => Ok(Self::Editor),
            "ADMIN" => Ok(Self::Admin),
            other => Err(format!("unknown role code '{}'", other)),
        }
    }
}

/// Application user with their granted roles.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub roles: Vec<RoleCode>,
}

impl User {
    /// Returns whether the user was granted `role`.
    pub fn has_role(&self, role: RoleCode) -> bool {
        self.roles.contains(&role)
    }
}

impl MapFrom<entity::user::Model> for User {
    /// Converts a stored user, parsing its comma separated role list.
    ///
    /// # Returns
    /// - `Ok(User)` - All role codes recognised
    /// - `Err(MappingError)` - The `roles` column holds an unknown code
    fn map_from(entity: &entity::user::Model) -> Result<Self, MappingError> {
        let roles = entity
            .roles
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(|code| parse_field::<RoleCode>("roles", code))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: entity.id,
            name: entity.name.clone(),
            roles,
        })
    }
}
