use anyhow::{Context, Result, anyhow, bail};
use chrono::{DateTime, Utc};
use clap::Args;
use matrix_core::{
    Board, BoardQuery, DeadlineProximity, ImpactDimension, Quadrant, TaskDraft, TaskList,
    UrgencyDimension, build_board, clamp_score, deadline_proximity_for, sample_tasks, score_task,
};
use tracing::info;

use crate::app::App;
use crate::store::{KeyValueStore, load_settings, load_tasks, save_tasks};

/// Score flags shared by `add` and `edit`. Unset flags keep the current value.
#[derive(Args, Debug, Default, Clone)]
pub struct ScoreArgs {
    /// Goal alignment (0-3)
    #[arg(long, allow_negative_numbers = true)]
    pub goal: Option<i32>,
    /// Consequence cost (0-3)
    #[arg(long, allow_negative_numbers = true)]
    pub consequence: Option<i32>,
    /// Hard to delegate (0-3)
    #[arg(long, allow_negative_numbers = true)]
    pub delegate: Option<i32>,
    /// Compounding value (0-3)
    #[arg(long, allow_negative_numbers = true)]
    pub compounding: Option<i32>,
    /// Late penalty (0-3)
    #[arg(long, allow_negative_numbers = true)]
    pub late: Option<i32>,
    /// Dependency pressure (0-3)
    #[arg(long, allow_negative_numbers = true)]
    pub dependency: Option<i32>,
    /// Manual deadline proximity (0-3); overrides the due-date score
    #[arg(long, allow_negative_numbers = true)]
    pub deadline: Option<i32>,
    /// Clamp scores into 0-3 instead of rejecting them
    #[arg(long, default_value_t = false)]
    pub clamp: bool,
}

impl ScoreArgs {
    fn apply(&self, draft: &mut TaskDraft) {
        let fix = |v: i32| if self.clamp { clamp_score(v) } else { v };

        let impact = [
            (ImpactDimension::GoalAlignment, self.goal),
            (ImpactDimension::ConsequenceCost, self.consequence),
            (ImpactDimension::HardToDelegate, self.delegate),
            (ImpactDimension::CompoundingValue, self.compounding),
        ];
        for (dim, value) in impact {
            if let Some(v) = value {
                draft.impact.set(dim, fix(v));
            }
        }

        if let Some(v) = self.late {
            draft.urgency.late_penalty = fix(v);
        }
        if let Some(v) = self.dependency {
            draft.urgency.dependency_pressure = fix(v);
        }
        if let Some(v) = self.deadline {
            draft.urgency.deadline_proximity = DeadlineProximity::Manual(fix(v));
        }
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct DetailArgs {
    #[arg(long)]
    pub notes: Option<String>,
    /// Due date (YYYY-MM-DD); pass "" to clear
    #[arg(long)]
    pub due: Option<String>,
    /// Estimated minutes
    #[arg(long, allow_negative_numbers = true)]
    pub minutes: Option<i64>,
}

impl DetailArgs {
    fn apply(&self, draft: &mut TaskDraft) {
        if let Some(n) = &self.notes {
            draft.notes = n.clone();
        }
        if let Some(d) = &self.due {
            draft.due_date = Some(d.clone());
        }
        if let Some(m) = self.minutes {
            draft.estimated_minutes = Some(m);
        }
    }
}

pub fn add(
    app: &mut App<impl KeyValueStore>,
    title: String,
    details: DetailArgs,
    scores: ScoreArgs,
) -> Result<()> {
    let mut stored = load_tasks(&app.store);
    let settings = load_settings(&app.store);

    let mut draft = TaskDraft::new(title);
    details.apply(&mut draft);
    scores.apply(&mut draft);

    let id = next_task_id(&stored.list, app.now);
    let task = draft.into_new_task(id, app.now).map_err(|e| anyhow!(e))?;
    let score = score_task(&task, &settings, app.today);
    let id = task.id.clone();

    stored.list.upsert(task);
    save_tasks(&mut app.store, &stored)?;

    info!(id = %id, quadrant = score.quadrant.tag(), "task added");
    println!("Added {} -> {}", id, score.quadrant);
    println!("  impact {}/12, urgency {}/9", score.impact_total, score.urgency_total);
    println!("  Next: {}", score.quadrant.next_step());
    Ok(())
}

pub fn edit(
    app: &mut App<impl KeyValueStore>,
    id: &str,
    title: Option<String>,
    details: DetailArgs,
    scores: ScoreArgs,
    derive_deadline: bool,
) -> Result<()> {
    if derive_deadline && scores.deadline.is_some() {
        bail!("--deadline and --derive-deadline are mutually exclusive");
    }

    let mut stored = load_tasks(&app.store);
    let settings = load_settings(&app.store);
    let task = stored
        .list
        .get_mut(id)
        .ok_or_else(|| anyhow!("no task with id {id}"))?;

    let mut draft = TaskDraft::from_task(task);
    if let Some(t) = title {
        draft.title = t;
    }
    details.apply(&mut draft);
    scores.apply(&mut draft);
    if derive_deadline {
        draft.urgency.deadline_proximity = DeadlineProximity::Derived;
    }

    draft.apply_to(task, app.now).map_err(|e| anyhow!(e))?;
    let quadrant = score_task(task, &settings, app.today).quadrant;
    save_tasks(&mut app.store, &stored)?;

    info!(id, quadrant = quadrant.tag(), "task updated");
    println!("Updated {id} -> {quadrant}");
    Ok(())
}

pub fn list(
    app: &App<impl KeyValueStore>,
    search: Option<String>,
    today_focus: bool,
    json: bool,
) -> Result<()> {
    let tasks = load_tasks(&app.store).list;
    let settings = load_settings(&app.store);
    let query = BoardQuery {
        search: search.unwrap_or_default(),
        today_focus,
    };
    let board = build_board(tasks.tasks(), &settings, app.today, &query);

    if json {
        let s = serde_json::to_string_pretty(&board).context("serialize board")?;
        println!("{s}");
        return Ok(());
    }

    print!("{}", render_board(&board, settings.impact_threshold, settings.urgency_threshold));
    Ok(())
}

pub fn show(app: &App<impl KeyValueStore>, id: &str) -> Result<()> {
    let tasks = load_tasks(&app.store).list;
    let settings = load_settings(&app.store);
    let task = tasks.get(id).ok_or_else(|| anyhow!("no task with id {id}"))?;
    let score = score_task(task, &settings, app.today);

    println!("{} [{}]", task.title, task.id);
    if !task.notes.is_empty() {
        println!("{}", task.notes);
    }
    println!();
    println!("Due:      {}", task.due_date.as_deref().unwrap_or("No date"));
    match task.estimated_minutes {
        Some(m) => println!("Estimate: {m} minutes"),
        None => println!("Estimate: Not set"),
    }
    if !task.is_active() {
        println!("Status:   archived");
    }

    println!("\nImpact {}/12 (threshold {})", score.impact_total, settings.impact_threshold);
    for dim in ImpactDimension::ALL {
        println!("  {:<20} {}", dim.label(), task.impact.get(dim));
    }

    println!("\nUrgency {}/9 (threshold {})", score.urgency_total, settings.urgency_threshold);
    for dim in UrgencyDimension::ALL {
        let note = match (dim, task.urgency.deadline_proximity) {
            (UrgencyDimension::DeadlineProximity, DeadlineProximity::Manual(_)) => {
                let auto = deadline_proximity_for(task.due_date.as_deref(), app.today);
                format!(" (manual; auto score {auto})")
            }
            (UrgencyDimension::DeadlineProximity, DeadlineProximity::Derived) => {
                " (auto)".to_string()
            }
            _ => String::new(),
        };
        println!("  {:<20} {}{}", dim.label(), score.urgency.get(dim), note);
    }

    println!("\n{}: {}", score.quadrant.label(), score.quadrant.description());
    println!("Next: {}", score.quadrant.next_step());
    Ok(())
}

pub fn complete(app: &mut App<impl KeyValueStore>, id: &str) -> Result<()> {
    let mut stored = load_tasks(&app.store);
    if !stored.list.archive(id, app.now) {
        bail!("no task with id {id}");
    }
    save_tasks(&mut app.store, &stored)?;
    info!(id, "task archived");
    println!("Archived {id}");
    Ok(())
}

pub fn delete(app: &mut App<impl KeyValueStore>, id: &str) -> Result<()> {
    let mut stored = load_tasks(&app.store);
    let removed = stored
        .list
        .remove(id)
        .ok_or_else(|| anyhow!("no task with id {id}"))?;
    save_tasks(&mut app.store, &stored)?;
    info!(id, "task deleted");
    println!("Deleted {} ({})", removed.id, removed.title);
    Ok(())
}

pub fn samples(app: &mut App<impl KeyValueStore>) -> Result<()> {
    let mut stored = load_tasks(&app.store);
    let added = stored.list.merge_samples(sample_tasks(app.today, app.now));
    if added > 0 {
        save_tasks(&mut app.store, &stored)?;
    }
    println!("Added {added} sample tasks");
    Ok(())
}

fn next_task_id(tasks: &TaskList, now: DateTime<Utc>) -> String {
    let base = format!("task-{}", now.timestamp_millis());
    if tasks.get(&base).is_none() {
        return base;
    }
    let mut n = 2;
    loop {
        let id = format!("{base}-{n}");
        if tasks.get(&id).is_none() {
            return id;
        }
        n += 1;
    }
}

pub fn render_board(board: &Board<'_>, impact_threshold: i32, urgency_threshold: i32) -> String {
    let mut s = String::new();
    s.push_str(&format!(
        "Thresholds: impact >= {impact_threshold}, urgency >= {urgency_threshold}\n"
    ));

    for col in &board.columns {
        s.push_str(&format!(
            "\n## {} ({})\n{}\n",
            col.quadrant.label(),
            col.entries.len(),
            col.quadrant.description()
        ));
        if col.entries.is_empty() {
            s.push_str(if col.quadrant == Quadrant::DoNow {
                "  (nothing urgent and important)\n"
            } else {
                "  (empty)\n"
            });
            continue;
        }
        for e in &col.entries {
            let due = e.task.due_date.as_deref().unwrap_or("no date");
            let minutes = e
                .task
                .estimated_minutes
                .map(|m| format!(" | {m} min"))
                .unwrap_or_default();
            s.push_str(&format!(
                "  - [{}] {} | impact {}/12 | urgency {}/9 | due {}{}\n",
                e.task.id, e.task.title, e.score.impact_total, e.score.urgency_total, due, minutes
            ));
        }
    }
    s
}
