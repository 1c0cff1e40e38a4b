//! Localized display strings.
//!
//! Defaults ship in the binary; deployments override individual labels
//! through the `[labels]` section of `config.toml`.

use serde::Deserialize;

/// Display strings consumed by the page views.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Labels {
    /// Page title prefix for the TV schedule.
    #[serde(default = "default_tv_programs")]
    pub tv_programs: String,
    /// Previous-day navigation label.
    #[serde(default = "default_previous_day")]
    pub previous_day: String,
    /// Next-day navigation label.
    #[serde(default = "default_next_day")]
    pub next_day: String,
    /// Return-to-today navigation label.
    #[serde(default = "default_today")]
    pub today: String,
    /// Placeholder for a channel with no programs on the date.
    #[serde(default = "default_no_programs")]
    pub no_programs: String,
}

fn default_tv_programs() -> String {
    String::from("TV-programs")
}

fn default_previous_day() -> String {
    String::from("Previous day")
}

fn default_next_day() -> String {
    String::from("Next day")
}

fn default_today() -> String {
    String::from("Today")
}

fn default_no_programs() -> String {
    String::from("No programs")
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            tv_programs: default_tv_programs(),
            previous_day: default_previous_day(),
            next_day: default_next_day(),
            today: default_today(),
            no_programs: default_no_programs(),
        }
    }
}
