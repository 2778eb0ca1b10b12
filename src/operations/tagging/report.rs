use std::fmt;

use rustc_hash::FxHashMap;

use super::engine::TagPlacement;

/// Aggregated description of a placement batch, ready for display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchSummary {
    /// Element category the batch covered, e.g. `"door"`.
    pub category: String,
    /// Number of elements in the batch.
    pub total: usize,
    /// Number of successful placements.
    pub succeeded: usize,
    /// Number of failed placements.
    pub failed: usize,
    /// `succeeded / total`; `1.0` for an empty batch.
    pub success_rate: f64,
    /// Distinct failure reasons with their occurrence counts, most
    /// frequent first.
    pub failure_reasons: Vec<(String, usize)>,
}

/// Summarizes a slice of placements for reporting.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize_batch(placements: &[TagPlacement], category: &str) -> BatchSummary {
    let total = placements.len();
    let succeeded = placements.iter().filter(|p| p.is_success).count();
    let failed = total - succeeded;

    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for placement in placements {
        if let Some(reason) = placement.failure_reason.as_deref() {
            *counts.entry(reason).or_default() += 1;
        }
    }
    let mut failure_reasons: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(reason, count)| (reason.to_owned(), count))
        .collect();
    failure_reasons.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let success_rate = if total == 0 {
        1.0
    } else {
        succeeded as f64 / total as f64
    };

    BatchSummary {
        category: category.to_owned(),
        total,
        succeeded,
        failed,
        success_rate,
        failure_reasons,
    }
}

impl BatchSummary {
    fn joined_reasons(&self) -> String {
        let parts: Vec<String> = self
            .failure_reasons
            .iter()
            .map(|(reason, count)| {
                if *count > 1 {
                    format!("{reason} (×{count})")
                } else {
                    reason.clone()
                }
            })
            .collect();
        parts.join("; ")
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total == 0 {
            return write!(f, "no {} elements to tag", self.category);
        }
        if self.failed == 0 {
            return write!(
                f,
                "tagged {} of {} {} elements",
                self.succeeded, self.total, self.category
            );
        }
        if self.succeeded == 0 {
            return write!(
                f,
                "failed to tag all {} {} elements: {}",
                self.total,
                self.category,
                self.joined_reasons()
            );
        }
        write!(
            f,
            "tagged {} of {} {} elements ({} failed: {})",
            self.succeeded,
            self.total,
            self.category,
            self.failed,
            self.joined_reasons()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ElementId;
    use crate::math::Point3;

    fn success(id: i64) -> TagPlacement {
        TagPlacement {
            element_id: ElementId(id),
            location: Point3::origin(),
            has_leader: false,
            attempt_count: 1,
            is_success: true,
            failure_reason: None,
        }
    }

    fn failure(id: i64, reason: &str) -> TagPlacement {
        TagPlacement {
            element_id: ElementId(id),
            location: Point3::origin(),
            has_leader: false,
            attempt_count: 10,
            is_success: false,
            failure_reason: Some(reason.to_owned()),
        }
    }

    #[test]
    fn aggregates_counts_and_reasons() {
        let placements = vec![
            success(1),
            failure(2, "No collision-free placement found after 10 attempts"),
            success(3),
            failure(4, "No collision-free placement found after 10 attempts"),
        ];
        let summary = summarize_batch(&placements, "door");
        assert_eq!(summary.total, 4);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 2);
        assert!((summary.success_rate - 0.5).abs() < 1e-12);
        assert_eq!(
            summary.failure_reasons,
            vec![(
                "No collision-free placement found after 10 attempts".to_owned(),
                2
            )]
        );
    }

    #[test]
    fn reasons_sorted_by_frequency_then_name() {
        let placements = vec![
            failure(1, "b reason"),
            failure(2, "a reason"),
            failure(3, "b reason"),
        ];
        let summary = summarize_batch(&placements, "window");
        assert_eq!(
            summary.failure_reasons,
            vec![("b reason".to_owned(), 2), ("a reason".to_owned(), 1)]
        );
    }

    #[test]
    fn display_complete_success() {
        let summary = summarize_batch(&[success(1), success(2)], "door");
        assert_eq!(summary.to_string(), "tagged 2 of 2 door elements");
    }

    #[test]
    fn display_partial_success() {
        let placements = vec![success(1), failure(2, "blocked")];
        let summary = summarize_batch(&placements, "window");
        assert_eq!(
            summary.to_string(),
            "tagged 1 of 2 window elements (1 failed: blocked)"
        );
    }

    #[test]
    fn display_total_failure_with_counts() {
        let placements = vec![failure(1, "blocked"), failure(2, "blocked")];
        let summary = summarize_batch(&placements, "door");
        assert_eq!(
            summary.to_string(),
            "failed to tag all 2 door elements: blocked (×2)"
        );
    }

    #[test]
    fn display_empty_batch() {
        let summary = summarize_batch(&[], "door");
        assert_eq!(summary.to_string(), "no door elements to tag");
        assert!((summary.success_rate - 1.0).abs() < 1e-12);
    }
}
