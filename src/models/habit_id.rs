use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Opaque habit identifier. Only equality and display are meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HabitId(String);

impl HabitId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form used by the row renderer and accepted by `remove`.
    pub fn short(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(8)
            .map(|(i, _)| i)
            .unwrap_or(self.0.len());
        &self.0[..end]
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of fresh habit identifiers, injected wherever habits are built.
pub trait IdGenerator {
    fn next_id(&mut self) -> HabitId;
}

/// Random v4 UUIDs.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> HabitId {
        HabitId(Uuid::new_v4().to_string())
    }
}

/// Deterministic `h1`, `h2`, ... ids. The counter only moves forward,
/// so an id is never handed out twice by the same generator.
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> HabitId {
        self.last += 1;
        HabitId(format!("h{}", self.last))
    }
}
