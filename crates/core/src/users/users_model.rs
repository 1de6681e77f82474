//! User profile domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_USER_AVATAR;
use crate::errors::{Error, Result, ValidationError};

/// UI theme preference stored on the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Auto,
}

/// Accent palette preference stored on the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Default,
    Masculine,
    Feminine,
}

/// Domain model representing a family member profile.
///
/// `is_active` is a role flag; which profile is *current* is tracked by a
/// separate pointer in the store, never on the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub theme: Theme,
    pub color_scheme: ColorScheme,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    /// Defaults to the 👤 glyph.
    pub avatar: Option<String>,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub color_scheme: ColorScheme,
}

impl NewUser {
    /// Validates the new profile data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        Ok(())
    }

    /// Builds the stored record from this input, a store-generated id and a
    /// creation timestamp. New profiles start active.
    pub fn into_user(self, id: String, created_at: DateTime<Utc>) -> User {
        User {
            id,
            name: self.name.trim().to_string(),
            avatar: self
                .avatar
                .unwrap_or_else(|| DEFAULT_USER_AVATAR.to_string()),
            theme: self.theme,
            color_scheme: self.color_scheme,
            is_active: true,
            created_at,
        }
    }
}

/// Partial-field patch applied over a stored profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub theme: Option<Theme>,
    pub color_scheme: Option<ColorScheme>,
    pub is_active: Option<bool>,
}

impl UserUpdate {
    /// Shallow-merges the present fields over the stored record.
    pub fn apply(&self, user: &mut User) {
        if let Some(ref name) = self.name {
            user.name = name.clone();
        }
        if let Some(ref avatar) = self.avatar {
            user.avatar = avatar.clone();
        }
        if let Some(theme) = self.theme {
            user.theme = theme;
        }
        if let Some(color_scheme) = self.color_scheme {
            user.color_scheme = color_scheme;
        }
        if let Some(is_active) = self.is_active {
            user.is_active = is_active;
        }
    }
}
