//! Monthly dashboard statistics.
//!
//! The engine is a pure function of the day-keyed task calendar: it flattens
//! the month in ascending day order, partitions into completed and pending,
//! and accumulates per-member and per-category counts in a single pass. The
//! flattening order is the canonical order for the "recently completed" and
//! "pending" highlight lists; tasks carry no timestamp beyond their day
//! bucket, so nothing is ever re-sorted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::calendar::DisplayMonth;
use crate::config::{DashboardConfig, MemberLabels};
use crate::error::StatsError;
use crate::task::{Member, Task, TasksByDay};

/// Completion statistics for one member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberStats {
    pub total: u32,
    pub completed: u32,
    pub pending: u32,
    /// Completed share in 0..=100; 0 when the member has no tasks.
    pub percentage: u8,
}

/// Per-member statistics with one slot per member.
///
/// Always exactly three entries, zero-initialized, even for members absent
/// from the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberBreakdown {
    pub parent_a: MemberStats,
    pub parent_b: MemberStats,
    pub both: MemberStats,
}

impl MemberBreakdown {
    /// Statistics for a member.
    pub fn get(&self, member: Member) -> &MemberStats {
        match member {
            Member::ParentA => &self.parent_a,
            Member::ParentB => &self.parent_b,
            Member::Both => &self.both,
        }
    }

    fn get_mut(&mut self, member: Member) -> &mut MemberStats {
        match member {
            Member::ParentA => &mut self.parent_a,
            Member::ParentB => &mut self.parent_b,
            Member::Both => &mut self.both,
        }
    }

    /// Iterate entries in fixed member order.
    pub fn iter(&self) -> impl Iterator<Item = (Member, &MemberStats)> {
        Member::ALL.into_iter().map(move |m| (m, self.get(m)))
    }
}

/// One bar-chart entry: a member's completed/pending split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSeries {
    /// Display label for the member.
    pub name: String,
    pub completed: u32,
    pub pending: u32,
}

/// One pie-chart slice: a category and its task count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub name: String,
    pub value: u32,
}

/// Everything the dashboard renders, derived from one month's calendar.
///
/// Consumers treat this as read-only; it is recomputed from the full
/// snapshot whenever the calendar changes, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub total: u32,
    pub completed_count: u32,
    pub pending_count: u32,
    /// Completed share in 0..=100; 0 for an empty month.
    pub completion_percentage: u8,
    pub per_member: MemberBreakdown,
    /// Task count per category label over ALL tasks, completed or not.
    pub category_distribution: HashMap<String, u32>,
    /// Exactly three entries in fixed member order; bar-chart input.
    pub chart_series: Vec<MemberSeries>,
    /// Most recently completed tasks, most recent first.
    pub recent_completed: Vec<Task>,
    /// First pending tasks in calendar order.
    pub pending_urgent: Vec<Task>,
}

impl DashboardReport {
    /// Pie-chart input derived from the category distribution. Slice order
    /// is unspecified; the chart does not need stable slice ordering.
    pub fn category_series(&self) -> Vec<CategorySlice> {
        self.category_distribution
            .iter()
            .map(|(name, value)| CategorySlice {
                name: name.clone(),
                value: *value,
            })
            .collect()
    }
}

/// Computes the monthly dashboard report.
#[derive(Debug, Clone)]
pub struct DashboardAnalyzer {
    /// Cap for the recently-completed and pending highlight lists.
    pub highlight_limit: usize,
    /// Display labels for the chart series.
    pub labels: MemberLabels,
}

impl Default for DashboardAnalyzer {
    fn default() -> Self {
        Self {
            highlight_limit: 5,
            labels: MemberLabels::default(),
        }
    }
}

impl DashboardAnalyzer {
    /// Create an analyzer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with a custom highlight-list cap.
    pub fn with_limit(highlight_limit: usize) -> Self {
        Self {
            highlight_limit,
            ..Self::default()
        }
    }

    /// Create an analyzer from a dashboard config.
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            highlight_limit: config.highlight_limit,
            labels: config.labels.clone(),
        }
    }

    /// Compute the full report for one month's calendar.
    ///
    /// Pure and deterministic: the input is only read, the output owns
    /// clones of the highlighted tasks. The single failure mode is a task
    /// whose owner tag is outside the closed member set; the engine fails
    /// fast and returns no partial result.
    pub fn compute_statistics(
        &self,
        tasks_by_day: &TasksByDay,
    ) -> Result<DashboardReport, StatsError> {
        // Ascending day order, stored order within a day.
        let mut completed: Vec<&Task> = Vec::new();
        let mut pending: Vec<&Task> = Vec::new();
        let mut per_member = MemberBreakdown::default();
        let mut category_distribution: HashMap<String, u32> = HashMap::new();
        let mut total: u32 = 0;

        for task in tasks_by_day.values().flatten() {
            let member =
                Member::from_tag(&task.member).ok_or_else(|| StatsError::UnknownMember {
                    task_id: task.id.clone(),
                    tag: task.member.clone(),
                })?;

            total += 1;
            let stats = per_member.get_mut(member);
            stats.total += 1;
            if task.completed {
                stats.completed += 1;
                completed.push(task);
            } else {
                stats.pending += 1;
                pending.push(task);
            }

            *category_distribution
                .entry(task.category_label().to_string())
                .or_insert(0) += 1;
        }

        for member in Member::ALL {
            let stats = per_member.get_mut(member);
            stats.percentage = completion_percentage(stats.completed, stats.total);
        }

        let chart_series = Member::ALL
            .into_iter()
            .map(|member| {
                let stats = per_member.get(member);
                MemberSeries {
                    name: self.labels.get(member).to_string(),
                    completed: stats.completed,
                    pending: stats.pending,
                }
            })
            .collect();

        let recent_completed = completed
            .iter()
            .rev()
            .take(self.highlight_limit)
            .map(|task| (*task).clone())
            .collect();
        let pending_urgent = pending
            .iter()
            .take(self.highlight_limit)
            .map(|task| (*task).clone())
            .collect();

        Ok(DashboardReport {
            total,
            completed_count: completed.len() as u32,
            pending_count: pending.len() as u32,
            completion_percentage: completion_percentage(completed.len() as u32, total),
            per_member,
            category_distribution,
            chart_series,
            recent_completed,
            pending_urgent,
        })
    }

    /// Render the report as an ASCII dashboard.
    pub fn render_report(&self, month: &DisplayMonth, report: &DashboardReport) -> String {
        let mut output = String::new();
        output.push_str(&format!("\nDashboard -- {}\n", month.title()));
        output.push_str(&"=".repeat(60));
        output.push_str("\n\n");

        output.push_str(&format!(
            "{} tasks: {} completed, {} pending ({}% done)\n\n",
            report.total, report.completed_count, report.pending_count,
            report.completion_percentage
        ));

        // Member table
        output.push_str(&format!(
            "{:<12} {:>6} {:>10} {:>8} {:>6}\n",
            "Member", "Total", "Completed", "Pending", "Done"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for (member, stats) in report.per_member.iter() {
            output.push_str(&format!(
                "{:<12} {:>6} {:>10} {:>8} {:>5}%\n",
                self.labels.get(member),
                stats.total,
                stats.completed,
                stats.pending,
                stats.percentage
            ));
        }
        output.push('\n');

        // Category breakdown
        if !report.category_distribution.is_empty() {
            output.push_str("By category:\n");
            for slice in report.category_series() {
                output.push_str(&format!("  {:<20} {:>4}\n", slice.name, slice.value));
            }
            output.push('\n');
        }

        output.push_str("Recently completed:\n");
        if report.recent_completed.is_empty() {
            output.push_str("  (none yet)\n");
        }
        for task in &report.recent_completed {
            let stars = match task.rating_stars() {
                Some(n) => format!(" {}", "*".repeat(n as usize)),
                None => String::new(),
            };
            output.push_str(&format!("  [x] {}{}\n", task.text, stars));
        }
        output.push('\n');

        output.push_str("Pending:\n");
        if report.pending_urgent.is_empty() {
            output.push_str("  (all done!)\n");
        }
        for task in &report.pending_urgent {
            output.push_str(&format!("  [ ] {}\n", task.text));
            if let Some(notes) = &task.notes {
                output.push_str(&format!("      {}\n", notes));
            }
        }

        output
    }
}

/// `round(completed / total * 100)`, defined as 0 when `total` is 0.
fn completion_percentage(completed: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u8
}
