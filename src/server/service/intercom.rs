//! Support-chat identity tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::{
    model::member::{IntercomTokenDto, IntercomUserDto},
    server::{
        error::{internal::InternalError, AppError},
        model::member::Member,
    },
};

const TOKEN_LIFETIME_HOURS: i64 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct IntercomClaims {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub created_at: i64,
    pub exp: i64,
}

pub struct IntercomService<'a> {
    secret: Option<&'a str>,
}

impl<'a> IntercomService<'a> {
    pub fn new(secret: Option<&'a str>) -> Self {
        Self { secret }
    }

    /// Signs an HS256 token identifying the member to the chat widget, valid for one hour.
    ///
    /// # Returns
    /// - `Ok(IntercomTokenDto)` - Token plus the member's XP and team
    /// - `Err(InternalError::MissingSecret)` - No signing secret is configured
    /// - `Err(InternalError::TokenSigning)` - Signing failed
    pub fn token_for(&self, member: &Member) -> Result<IntercomTokenDto, AppError> {
        let secret = self
            .secret
            .filter(|secret| !secret.is_empty())
            .ok_or(InternalError::MissingSecret("INTERCOM_SECRET_KEY"))?;

        let now = Utc::now();
        let claims = IntercomClaims {
            user_id: member.slack_id.clone(),
            email: member.email.clone(),
            name: member.name.clone(),
            created_at: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(InternalError::from)?;

        Ok(IntercomTokenDto {
            token,
            user: IntercomUserDto {
                xp: member.experience_points,
                team_id: member.team_id,
            },
        })
    }
}
