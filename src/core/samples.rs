use crate::models::{Habit, IdGenerator, ThemeColor};

/// Seed data shown on first launch.
pub fn sample_habits(ids: &mut dyn IdGenerator) -> Vec<Habit> {
    vec![
        Habit::with_progress(ids, "Run", "🏃‍♂️", ThemeColor::Mint, 12, 30),
        Habit::with_progress(ids, "Read", "📚", ThemeColor::Orange, 5, 14),
        Habit::with_progress(ids, "Meditate", "🧘‍♀️", ThemeColor::Purple, 8, 21),
    ]
}
