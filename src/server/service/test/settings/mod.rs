use crate::{
    model::settings::HackathonSettingsDto,
    server::{
        data::setting::SettingRepository,
        error::AppError,
        model::settings::key,
        service::settings::{SettingsCache, SettingsService},
    },
};
use serde_json::Value;
use std::time::Duration;
use tokio::time::sleep;
use test_utils::{builder::TestBuilder, factory};

mod add_admin;
mod get;
mod public_settings;
mod update;
