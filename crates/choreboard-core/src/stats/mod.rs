//! Statistics module for Choreboard
//!
//! This module derives everything the dashboard renders from the month's
//! task calendar: summary counts, per-member completion statistics, the
//! category distribution, bar/pie chart series, and the bounded
//! recently-completed / pending highlight lists.

mod dashboard;

pub use dashboard::{
    CategorySlice, DashboardAnalyzer, DashboardReport, MemberBreakdown, MemberSeries, MemberStats,
};
