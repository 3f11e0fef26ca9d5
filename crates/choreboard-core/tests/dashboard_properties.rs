//! Property tests for the dashboard statistics invariants.
//!
//! For any well-formed calendar (valid member tags), the derived counts must
//! reconcile exactly and the highlight lists must respect their cap.

use choreboard_core::{DashboardAnalyzer, Task, TasksByDay};
use proptest::prelude::*;

fn member_tag() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("parentA".to_string()),
        Just("parentB".to_string()),
        Just("both".to_string()),
    ]
}

fn arb_task() -> impl Strategy<Value = Task> {
    (
        "[a-z0-9]{6}",
        member_tag(),
        proptest::option::of(prop_oneof![
            Just(String::new()),
            Just("Kitchen".to_string()),
            Just("Garden".to_string()),
            Just("Shopping".to_string()),
        ]),
        any::<bool>(),
        proptest::option::of(-1i32..8),
    )
        .prop_map(|(id, member, category, completed, rating)| Task {
            text: format!("chore {id}"),
            id,
            notes: None,
            member,
            category,
            completed,
            rating,
        })
}

fn arb_month() -> impl Strategy<Value = TasksByDay> {
    proptest::collection::btree_map(1u32..=31, proptest::collection::vec(arb_task(), 0..6), 0..8)
}

proptest! {
    #[test]
    fn counts_reconcile(month in arb_month()) {
        let report = DashboardAnalyzer::new().compute_statistics(&month).unwrap();

        prop_assert_eq!(report.completed_count + report.pending_count, report.total);

        let member_total: u32 = report.per_member.iter().map(|(_, s)| s.total).sum();
        prop_assert_eq!(member_total, report.total);
        for (_, stats) in report.per_member.iter() {
            prop_assert_eq!(stats.completed + stats.pending, stats.total);
            prop_assert!(stats.percentage <= 100);
        }

        let category_total: u32 = report.category_distribution.values().sum();
        prop_assert_eq!(category_total, report.total);
    }

    #[test]
    fn percentage_is_bounded(month in arb_month()) {
        let report = DashboardAnalyzer::new().compute_statistics(&month).unwrap();

        prop_assert!(report.completion_percentage <= 100);
        if report.total == 0 {
            prop_assert_eq!(report.completion_percentage, 0);
        }
    }

    #[test]
    fn highlight_lists_respect_the_cap(month in arb_month()) {
        let report = DashboardAnalyzer::new().compute_statistics(&month).unwrap();

        prop_assert!(report.recent_completed.len() <= 5);
        prop_assert!(report.pending_urgent.len() <= 5);
        prop_assert!(report.recent_completed.iter().all(|t| t.completed));
        prop_assert!(report.pending_urgent.iter().all(|t| !t.completed));
    }

    #[test]
    fn chart_series_always_has_three_entries(month in arb_month()) {
        let report = DashboardAnalyzer::new().compute_statistics(&month).unwrap();

        prop_assert_eq!(report.chart_series.len(), 3);
        let chart_total: u32 = report
            .chart_series
            .iter()
            .map(|s| s.completed + s.pending)
            .sum();
        prop_assert_eq!(chart_total, report.total);
    }

    #[test]
    fn recomputation_is_idempotent(month in arb_month()) {
        let analyzer = DashboardAnalyzer::new();
        let first = analyzer.compute_statistics(&month).unwrap();
        let second = analyzer.compute_statistics(&month).unwrap();
        prop_assert_eq!(first, second);
    }
}
