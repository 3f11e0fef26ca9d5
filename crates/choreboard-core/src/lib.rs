//! # Choreboard Core Library
//!
//! Core library for Choreboard, a household task dashboard. The calendar
//! subsystem produces a day-keyed collection of tasks for the displayed
//! month; this crate turns that snapshot into everything the dashboard
//! renders: summary cards, a per-member bar chart, a category pie chart, and
//! the recently-completed / pending highlight lists.
//!
//! ## Architecture
//!
//! - **Statistics Engine**: [`DashboardAnalyzer`] -- a pure, deterministic
//!   transformation from [`TasksByDay`] to [`DashboardReport`]; recomputed
//!   from the full snapshot on every change, never patched incrementally
//! - **Task Model**: [`Task`] and the closed [`Member`] set
//! - **Configuration**: TOML-based display preferences ([`DashboardConfig`])
//!
//! The engine performs no I/O and holds no state, so repeated calls on the
//! same snapshot produce structurally equal reports.

pub mod calendar;
pub mod config;
pub mod error;
pub mod stats;
pub mod task;

pub use calendar::DisplayMonth;
pub use config::{DashboardConfig, MemberLabels};
pub use error::{ConfigError, CoreError, StatsError};
pub use stats::{
    CategorySlice, DashboardAnalyzer, DashboardReport, MemberBreakdown, MemberSeries, MemberStats,
};
pub use task::{Member, Task, TasksByDay, UNCATEGORIZED};
