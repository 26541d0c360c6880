use crate::models::{Habit, HabitId};

/// Owner of the habit list.
pub trait HabitStore {
    fn list(&self) -> &[Habit];
    fn append(&mut self, habit: Habit);
    /// Remove the habit with `id`, returning it; unknown ids are a no-op.
    fn remove(&mut self, id: &HabitId) -> Option<Habit>;

    fn get(&self, id: &HabitId) -> Option<&Habit> {
        self.list().iter().find(|h| h.id() == id)
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

/// Insertion-ordered in-memory store, alive for one session.
#[derive(Debug, Default)]
pub struct MemoryStore {
    habits: Vec<Habit>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_habits(habits: Vec<Habit>) -> Self {
        Self { habits }
    }
}

impl HabitStore for MemoryStore {
    fn list(&self) -> &[Habit] {
        &self.habits
    }

    fn append(&mut self, habit: Habit) {
        self.habits.push(habit);
    }

    fn remove(&mut self, id: &HabitId) -> Option<Habit> {
        let idx = self.habits.iter().position(|h| h.id() == id)?;
        Some(self.habits.remove(idx))
    }
}
