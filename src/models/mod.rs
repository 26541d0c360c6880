pub mod color;
pub mod day_of_week;
pub mod habit;
pub mod habit_id;
pub mod interval;

pub use color::ThemeColor;
pub use day_of_week::DayOfWeek;
pub use habit::Habit;
pub use habit_id::{HabitId, IdGenerator, SequentialIds, UuidIds};
pub use interval::Interval;
