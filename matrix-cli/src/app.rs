use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use matrix_core::{parse_day, today_in_timezone};

use crate::config::Config;
use crate::store::KeyValueStore;

/// Everything a command needs: where data lives and what "now" is.
pub struct App<S: KeyValueStore> {
    pub store: S,
    pub today: NaiveDate,
    pub now: DateTime<Utc>,
}

impl<S: KeyValueStore> App<S> {
    /// `today` comes from `--today` when given, else from the configured timezone.
    pub fn new(store: S, cfg: &Config, today_override: Option<&str>) -> Result<Self> {
        let now = Utc::now();
        let today = match today_override {
            Some(s) => parse_day(s)?,
            None => today_in_timezone(&cfg.general.timezone, now)?,
        };
        Ok(Self { store, today, now })
    }
}
