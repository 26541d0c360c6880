use crate::core::activity::ActivityLog;
use crate::core::draft::HabitCommitSink;
use crate::core::samples::sample_habits;
use crate::core::store::{HabitStore, MemoryStore};
use crate::errors::{AppError, AppResult};
use crate::models::{Habit, HabitId, IdGenerator, ThemeColor};

/// The habit list of one session together with the id source used to grow it.
pub struct HabitBoard<S: HabitStore = MemoryStore> {
    store: S,
    ids: Box<dyn IdGenerator>,
    log: ActivityLog,
}

impl HabitBoard<MemoryStore> {
    /// Board pre-filled with the sample habits.
    pub fn seeded(mut ids: Box<dyn IdGenerator>) -> Self {
        let samples = sample_habits(ids.as_mut());
        let count = samples.len();
        let mut board = Self::new(MemoryStore::with_habits(samples), ids);
        board
            .log
            .record("seed", "samples", &format!("{count} sample habits loaded"));
        board
    }
}

impl<S: HabitStore> HabitBoard<S> {
    pub fn new(store: S, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            store,
            ids,
            log: ActivityLog::default(),
        }
    }

    pub fn habits(&self) -> &[Habit] {
        self.store.list()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.log
    }

    /// Append an already-built habit.
    pub fn add(&mut self, habit: Habit) {
        self.log.record(
            "add",
            habit.id().as_str(),
            &format!("Added habit '{}'", habit.title),
        );
        self.store.append(habit);
    }

    pub fn remove(&mut self, id: &HabitId) -> Option<Habit> {
        let removed = self.store.remove(id)?;
        self.log.record(
            "remove",
            id.as_str(),
            &format!("Removed habit '{}'", removed.title),
        );
        Some(removed)
    }

    /// Resolve a full id or a unique id prefix to a stored habit id.
    pub fn resolve_id(&self, prefix: &str) -> AppResult<HabitId> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(AppError::HabitNotFound(prefix.to_string()));
        }

        if let Some(h) = self.habits().iter().find(|h| h.id().as_str() == prefix) {
            return Ok(h.id().clone());
        }

        let mut matches = self
            .habits()
            .iter()
            .filter(|h| h.id().as_str().starts_with(prefix));

        match (matches.next(), matches.next()) {
            (Some(h), None) => Ok(h.id().clone()),
            (Some(_), Some(_)) => Err(AppError::AmbiguousId(prefix.to_string())),
            (None, _) => Err(AppError::HabitNotFound(prefix.to_string())),
        }
    }
}

impl<S: HabitStore> HabitCommitSink for HabitBoard<S> {
    fn on_habit_committed(&mut self, title: &str, icon: &str, color: ThemeColor) {
        if title.trim().is_empty() {
            self.log
                .record("ignored", "", "Commit with an empty title ignored");
            return;
        }
        let habit = Habit::create(self.ids.as_mut(), title, icon, color);
        self.add(habit);
    }
}
