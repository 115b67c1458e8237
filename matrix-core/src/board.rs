//! Board view: active tasks grouped by quadrant.

use chrono::NaiveDate;
use serde::Serialize;

use crate::scoring::{Quadrant, TaskScore, score_task};
use crate::settings::Settings;
use crate::task::Task;

/// Filters applied before grouping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardQuery {
    /// Case-insensitive substring over title and notes. Blank matches all.
    pub search: String,
    /// Keep only Do Now tasks.
    pub today_focus: bool,
}

impl BoardQuery {
    pub fn matches_text(&self, task: &Task) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        task.title.to_lowercase().contains(&needle) || task.notes.to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardEntry<'a> {
    pub task: &'a Task,
    pub score: TaskScore,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardColumn<'a> {
    pub quadrant: Quadrant,
    pub entries: Vec<BoardEntry<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Board<'a> {
    pub columns: Vec<BoardColumn<'a>>,
}

impl<'a> Board<'a> {
    pub fn column(&self, q: Quadrant) -> Option<&BoardColumn<'a>> {
        self.columns.iter().find(|c| c.quadrant == q)
    }

    pub fn total(&self) -> usize {
        self.columns.iter().map(|c| c.entries.len()).sum()
    }
}

/// Score every active task matching `query` and group by quadrant.
///
/// Columns come out in display order; with `today_focus` only the Do Now
/// column is present. List order is preserved within a column.
pub fn build_board<'a, I>(
    tasks: I,
    settings: &Settings,
    today: NaiveDate,
    query: &BoardQuery,
) -> Board<'a>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut buckets: [Vec<BoardEntry<'a>>; 4] = Default::default();

    for task in tasks {
        if !task.is_active() || !query.matches_text(task) {
            continue;
        }
        let score = score_task(task, settings, today);
        if query.today_focus && score.quadrant != Quadrant::DoNow {
            continue;
        }
        buckets[score.quadrant.index()].push(BoardEntry { task, score });
    }

    let columns = Quadrant::ALL
        .into_iter()
        .zip(buckets)
        .filter(|(q, _)| !query.today_focus || *q == Quadrant::DoNow)
        .map(|(quadrant, entries)| BoardColumn { quadrant, entries })
        .collect();

    Board { columns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::{DeadlineProximity, ImpactScores, UrgencyScores};
    use chrono::{TimeZone, Utc};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    fn mk(id: &str, title: &str, impact: [i32; 4], urgency: [i32; 3]) -> Task {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        Task::new(id, title, now)
            .with_impact(ImpactScores::new(impact[0], impact[1], impact[2], impact[3]))
            .with_urgency(UrgencyScores::new(
                DeadlineProximity::Manual(urgency[0]),
                urgency[1],
                urgency[2],
            ))
    }

    fn sample() -> Vec<Task> {
        vec![
            mk("do", "Ship release", [3, 3, 1, 0], [3, 2, 0]),
            mk("sched", "Write roadmap", [3, 3, 3, 3], [0, 1, 1]),
            mk("quick", "Reply to vendor", [1, 1, 1, 1], [3, 3, 3]),
            mk("drop", "Sort swag", [0, 0, 1, 0], [0, 0, 0]),
            mk("do2", "Fix outage", [3, 3, 3, 3], [3, 3, 3]),
        ]
    }

    fn ids(b: &Board<'_>, q: Quadrant) -> Vec<String> {
        b.column(q)
            .map(|c| c.entries.iter().map(|e| e.task.id.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn groups_by_quadrant_in_list_order() {
        let tasks = sample();
        let b = build_board(&tasks, &Settings::default(), today(), &BoardQuery::default());
        let order: Vec<Quadrant> = b.columns.iter().map(|c| c.quadrant).collect();
        assert_eq!(order, Quadrant::ALL);
        assert_eq!(ids(&b, Quadrant::DoNow), ["do", "do2"]);
        assert_eq!(ids(&b, Quadrant::Scheduled), ["sched"]);
        assert_eq!(ids(&b, Quadrant::QuickWins), ["quick"]);
        assert_eq!(ids(&b, Quadrant::Drop), ["drop"]);
        assert_eq!(b.total(), 5);
    }

    #[test]
    fn archived_tasks_are_hidden() {
        let mut tasks = sample();
        let now = tasks[0].created_at;
        tasks[0].archive(now);
        let b = build_board(&tasks, &Settings::default(), today(), &BoardQuery::default());
        assert_eq!(ids(&b, Quadrant::DoNow), ["do2"]);
    }

    #[test]
    fn search_matches_title_or_notes_case_insensitively() {
        let mut tasks = sample();
        tasks[3].notes = "Conference SWAG quotes".to_string();
        let q = BoardQuery { search: "  swag ".to_string(), today_focus: false };
        let b = build_board(&tasks, &Settings::default(), today(), &q);
        assert_eq!(b.total(), 1);
        assert_eq!(ids(&b, Quadrant::Drop), ["drop"]);

        let q = BoardQuery { search: "ROADMAP".to_string(), today_focus: false };
        assert_eq!(build_board(&tasks, &Settings::default(), today(), &q).total(), 1);
    }

    #[test]
    fn today_focus_shows_only_do_now() {
        let tasks = sample();
        let q = BoardQuery { search: String::new(), today_focus: true };
        let b = build_board(&tasks, &Settings::default(), today(), &q);
        assert_eq!(b.columns.len(), 1);
        assert_eq!(ids(&b, Quadrant::DoNow), ["do", "do2"]);
    }

    #[test]
    fn thresholds_reclassify_without_touching_tasks() {
        let tasks = sample();
        let strict = Settings { impact_threshold: 12, urgency_threshold: 9 };
        let b = build_board(&tasks, &strict, today(), &BoardQuery::default());
        assert_eq!(ids(&b, Quadrant::DoNow), ["do2"]);
        assert_eq!(ids(&b, Quadrant::Scheduled), ["sched"]);
        assert_eq!(ids(&b, Quadrant::QuickWins), ["quick"]);
        assert_eq!(ids(&b, Quadrant::Drop), ["do", "drop"]);
    }
}
