//! Hackathon settings domain model.
//!
//! Settings are stored as string key/value pairs. `HackathonSettings` is the typed view over
//! the known keys: every missing or unparseable value falls back to its default, so a fresh
//! database still describes a complete hackathon.

use chrono::Weekday;
use std::collections::HashMap;

use crate::{
    model::settings::{HackathonDataDto, HackathonSettingsDto},
    server::{
        error::internal::InternalError,
        util::{
            date::{weekday_key, weekday_label},
            json::{decode_string_list, encode_list},
        },
    },
};

/// Stored setting keys.
pub mod key {
    pub const START_DATE_AND_TIME: &str = "startDateAndTime";
    pub const END_DATE_AND_TIME: &str = "endDateAndTime";
    pub const DATE_ORDER: &str = "dateOrder";
    pub const ADMIN_SLACK_IDS: &str = "adminSlackIds";
    pub const SIGN_UPS_ENABLED: &str = "signUpsEnabled";
    pub const EVENT_CODE: &str = "eventCode";
    pub const MIN_AGE: &str = "minAge";
    pub const MAX_AGE: &str = "maxAge";
    pub const VOTING_ENABLED: &str = "votingEnabled";
    pub const PROJECTS_ENABLED: &str = "projectsEnabled";
    pub const TEAM_ENABLED: &str = "teamEnabled";
    pub const EVENTS_ENABLED: &str = "eventsEnabled";
    pub const NEWS_ENABLED: &str = "newsEnabled";
    pub const LEADERBOARD_ENABLED: &str = "leaderboardEnabled";
    pub const STORE_ENABLED: &str = "storeEnabled";
}

/// Weekdays in the default schedule order.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub const DEFAULT_MIN_AGE: u32 = 13;
pub const DEFAULT_MAX_AGE: u32 = 100;

/// Calendar date (`YYYY-MM-DD`) assigned to each weekday of the hackathon.
#[derive(Debug, Clone, PartialEq)]
pub struct DayDates {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

impl Default for DayDates {
    fn default() -> Self {
        Self {
            monday: "2026-06-22".to_string(),
            tuesday: "2026-06-23".to_string(),
            wednesday: "2026-06-24".to_string(),
            thursday: "2026-06-25".to_string(),
            friday: "2026-06-19".to_string(),
            saturday: "2026-06-20".to_string(),
            sunday: "2026-06-21".to_string(),
        }
    }
}

impl DayDates {
    pub fn get(&self, day: Weekday) -> &str {
        match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub fn set(&mut self, day: Weekday, date: String) {
        let slot = match day {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        };
        *slot = date;
    }
}

/// Feature switches shown to the client.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureToggles {
    pub voting: bool,
    pub projects: bool,
    pub team: bool,
    pub events: bool,
    pub news: bool,
    pub leaderboard: bool,
    pub store: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            voting: true,
            projects: true,
            team: true,
            events: true,
            news: true,
            leaderboard: true,
            store: true,
        }
    }
}

/// Typed view over every known setting.
#[derive(Debug, Clone, PartialEq)]
pub struct HackathonSettings {
    pub start_date_and_time: String,
    pub end_date_and_time: String,
    pub days: DayDates,
    /// Capitalized weekday names in schedule order.
    pub date_order: Vec<String>,
    pub admin_slack_ids: Vec<String>,
    pub sign_ups_enabled: bool,
    pub event_code: String,
    pub min_age: u32,
    pub max_age: u32,
    pub features: FeatureToggles,
}

impl Default for HackathonSettings {
    fn default() -> Self {
        Self {
            start_date_and_time: "2026-06-19T00:00:00Z".to_string(),
            end_date_and_time: "2026-06-22T23:59:59Z".to_string(),
            days: DayDates::default(),
            date_order: WEEK.iter().map(|d| weekday_label(*d).to_string()).collect(),
            admin_slack_ids: Vec::new(),
            sign_ups_enabled: false,
            event_code: String::new(),
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
            features: FeatureToggles::default(),
        }
    }
}

impl HackathonSettings {
    /// Builds the typed settings from stored key/value pairs.
    pub fn from_values(values: &HashMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| values.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());
        let flag = |key: &str, default: bool| match text(key) {
            Some(value) => value.eq_ignore_ascii_case("true"),
            None => default,
        };
        let number = |key: &str, default: u32| {
            text(key)
                .and_then(|value| value.parse::<u32>().ok())
                .unwrap_or(default)
        };

        let mut days = defaults.days.clone();
        for day in WEEK {
            if let Some(date) = text(weekday_key(day)) {
                days.set(day, date.to_string());
            }
        }

        let date_order = match text(key::DATE_ORDER) {
            Some(raw) => decode_string_list(raw)
                .iter()
                .map(|day| capitalize(day))
                .collect(),
            None => defaults.date_order,
        };

        Self {
            start_date_and_time: text(key::START_DATE_AND_TIME)
                .map(str::to_string)
                .unwrap_or(defaults.start_date_and_time),
            end_date_and_time: text(key::END_DATE_AND_TIME)
                .map(str::to_string)
                .unwrap_or(defaults.end_date_and_time),
            days,
            date_order,
            admin_slack_ids: text(key::ADMIN_SLACK_IDS)
                .map(decode_string_list)
                .unwrap_or_default(),
            sign_ups_enabled: flag(key::SIGN_UPS_ENABLED, defaults.sign_ups_enabled),
            event_code: text(key::EVENT_CODE).map(str::to_string).unwrap_or_default(),
            min_age: number(key::MIN_AGE, defaults.min_age),
            max_age: number(key::MAX_AGE, defaults.max_age),
            features: FeatureToggles {
                voting: flag(key::VOTING_ENABLED, true),
                projects: flag(key::PROJECTS_ENABLED, true),
                team: flag(key::TEAM_ENABLED, true),
                events: flag(key::EVENTS_ENABLED, true),
                news: flag(key::NEWS_ENABLED, true),
                leaderboard: flag(key::LEADERBOARD_ENABLED, true),
                store: flag(key::STORE_ENABLED, true),
            },
        }
    }

    /// Serializes the admin-editable settings to stored key/value pairs.
    ///
    /// The admin allow-list is not included; it is only changed through the admin bootstrap.
    pub fn to_values(&self) -> Result<Vec<(&'static str, String)>, InternalError> {
        let bool_str = |value: bool| if value { "true" } else { "false" }.to_string();

        let mut values = vec![
            (key::START_DATE_AND_TIME, self.start_date_and_time.clone()),
            (key::END_DATE_AND_TIME, self.end_date_and_time.clone()),
            (key::EVENT_CODE, self.event_code.clone()),
            (key::SIGN_UPS_ENABLED, bool_str(self.sign_ups_enabled)),
            (key::VOTING_ENABLED, bool_str(self.features.voting)),
            (key::PROJECTS_ENABLED, bool_str(self.features.projects)),
            (key::TEAM_ENABLED, bool_str(self.features.team)),
            (key::EVENTS_ENABLED, bool_str(self.features.events)),
            (key::NEWS_ENABLED, bool_str(self.features.news)),
            (key::LEADERBOARD_ENABLED, bool_str(self.features.leaderboard)),
            (key::STORE_ENABLED, bool_str(self.features.store)),
            (key::MIN_AGE, self.min_age.to_string()),
            (key::MAX_AGE, self.max_age.to_string()),
            (key::DATE_ORDER, encode_list(&self.date_order, "dateOrder")?),
        ];
        for day in WEEK {
            values.push((weekday_key(day), self.days.get(day).to_string()));
        }

        Ok(values)
    }

    pub fn from_dto(dto: HackathonSettingsDto) -> Self {
        Self {
            start_date_and_time: dto.start_date_and_time,
            end_date_and_time: dto.end_date_and_time,
            days: DayDates {
                monday: dto.monday,
                tuesday: dto.tuesday,
                wednesday: dto.wednesday,
                thursday: dto.thursday,
                friday: dto.friday,
                saturday: dto.saturday,
                sunday: dto.sunday,
            },
            date_order: dto.date_order.iter().map(|day| capitalize(day)).collect(),
            admin_slack_ids: dto.admin_slack_ids,
            sign_ups_enabled: dto.sign_ups_enabled,
            event_code: dto.event_code.trim().to_string(),
            min_age: dto.min_age,
            max_age: dto.max_age,
            features: FeatureToggles {
                voting: dto.voting_enabled,
                projects: dto.projects_enabled,
                team: dto.team_enabled,
                events: dto.events_enabled,
                news: dto.news_enabled,
                leaderboard: dto.leaderboard_enabled,
                store: dto.store_enabled,
            },
        }
    }

    pub fn into_dto(self) -> HackathonSettingsDto {
        HackathonSettingsDto {
            start_date_and_time: self.start_date_and_time,
            end_date_and_time: self.end_date_and_time,
            monday: self.days.monday,
            tuesday: self.days.tuesday,
            wednesday: self.days.wednesday,
            thursday: self.days.thursday,
            friday: self.days.friday,
            saturday: self.days.saturday,
            sunday: self.days.sunday,
            date_order: self.date_order,
            admin_slack_ids: self.admin_slack_ids,
            sign_ups_enabled: self.sign_ups_enabled,
            event_code: self.event_code,
            min_age: self.min_age,
            max_age: self.max_age,
            voting_enabled: self.features.voting,
            projects_enabled: self.features.projects,
            team_enabled: self.features.team,
            events_enabled: self.features.events,
            news_enabled: self.features.news,
            leaderboard_enabled: self.features.leaderboard,
            store_enabled: self.features.store,
        }
    }

    pub fn into_data_dto(self) -> HackathonDataDto {
        HackathonDataDto {
            start_date_and_time: self.start_date_and_time,
            end_date_and_time: self.end_date_and_time,
            monday: self.days.monday,
            tuesday: self.days.tuesday,
            wednesday: self.days.wednesday,
            thursday: self.days.thursday,
            friday: self.days.friday,
            saturday: self.days.saturday,
            sunday: self.days.sunday,
            date_order: self.date_order,
            admin_slack_ids: self.admin_slack_ids,
        }
    }
}

impl Default for HackathonSettingsDto {
    fn default() -> Self {
        HackathonSettings::default().into_dto()
    }
}

fn capitalize(day: &str) -> String {
    let mut chars = day.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
