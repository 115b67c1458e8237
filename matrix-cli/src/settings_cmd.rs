use anyhow::{Result, anyhow, bail};
use clap::Subcommand;
use matrix_core::Settings;
use tracing::info;

use crate::store::{KeyValueStore, load_settings, save_settings};

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Print the current thresholds
    Show,

    /// Change one or both thresholds
    Set {
        /// Impact threshold (0-12)
        #[arg(long, allow_negative_numbers = true)]
        impact: Option<i32>,

        /// Urgency threshold (0-9)
        #[arg(long, allow_negative_numbers = true)]
        urgency: Option<i32>,
    },

    /// Restore the default thresholds (impact 7, urgency 5)
    Reset,
}

pub fn run(cmd: SettingsCommand, store: &mut impl KeyValueStore) -> Result<()> {
    match cmd {
        SettingsCommand::Show => show(&*store),
        SettingsCommand::Set { impact, urgency } => set(store, impact, urgency),
        SettingsCommand::Reset => {
            save_settings(store, &Settings::default())?;
            info!("settings reset");
            show(&*store)
        }
    }
}

fn show(store: &impl KeyValueStore) -> Result<()> {
    let s = load_settings(store);
    println!("Impact threshold:  {} (of 12)", s.impact_threshold);
    println!("Urgency threshold: {} (of 9)", s.urgency_threshold);
    println!("A task is important when impact >= the impact threshold,");
    println!("and urgent when urgency >= the urgency threshold.");
    Ok(())
}

fn set(store: &mut impl KeyValueStore, impact: Option<i32>, urgency: Option<i32>) -> Result<()> {
    if impact.is_none() && urgency.is_none() {
        bail!("nothing to change (pass --impact and/or --urgency)");
    }

    let current = load_settings(&*store);
    let next = Settings::new(
        impact.unwrap_or(current.impact_threshold),
        urgency.unwrap_or(current.urgency_threshold),
    )
    .map_err(|e| anyhow!(e))?;

    save_settings(store, &next)?;
    info!(
        impact = next.impact_threshold,
        urgency = next.urgency_threshold,
        "settings updated"
    );
    show(&*store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn set_changes_only_given_threshold() {
        let mut store = MemoryStore::default();
        run(SettingsCommand::Set { impact: None, urgency: Some(3) }, &mut store).unwrap();
        assert_eq!(load_settings(&store), Settings { impact_threshold: 7, urgency_threshold: 3 });
    }

    #[test]
    fn set_rejects_out_of_range_and_keeps_old_value() {
        let mut store = MemoryStore::default();
        let err = run(SettingsCommand::Set { impact: Some(13), urgency: None }, &mut store)
            .unwrap_err();
        assert!(err.to_string().contains("between 0 and 12"));
        assert_eq!(load_settings(&store), Settings::default());
    }

    #[test]
    fn set_without_flags_is_an_error() {
        let mut store = MemoryStore::default();
        assert!(run(SettingsCommand::Set { impact: None, urgency: None }, &mut store).is_err());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut store = MemoryStore::default();
        save_settings(&mut store, &Settings { impact_threshold: 1, urgency_threshold: 1 }).unwrap();
        run(SettingsCommand::Reset, &mut store).unwrap();
        assert_eq!(load_settings(&store), Settings::default());
    }
}
