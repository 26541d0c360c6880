pub mod activity;
pub mod board;
pub mod dot_grid;
pub mod draft;
pub mod samples;
pub mod session;
pub mod store;
