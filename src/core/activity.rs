use chrono::{DateTime, Local};

/// One line of the session's internal log.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub at: DateTime<Local>,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// In-memory audit trail of board operations, oldest first.
#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    pub fn record(&mut self, operation: &str, target: &str, message: &str) {
        self.entries.push(ActivityEntry {
            at: Local::now(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn count(&self, operation: &str) -> usize {
        self.entries
            .iter()
            .filter(|e| e.operation == operation)
            .count()
    }
}
