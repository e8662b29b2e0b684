use serde::{Deserialize, Serialize};

use crate::{Priority, TaskSnapshot};

const EMPTY_SUMMARY: &str =
    "You haven't added any tasks yet. Put together a realistic plan to get your day started.";
const EMPTY_SUGGESTIONS: [&str; 3] = [
    "Add a few concrete task goals",
    "Give each task a sensible priority",
    "Consider scheduling a time for your tasks",
];

const HIGH_SUGGESTIONS: [&str; 3] = [
    "Keep up this productive rhythm",
    "Consider setting more challenging goals for tomorrow",
    "Reward yourself for the great work",
];
const MODERATE_SUGGESTIONS: [&str; 3] = [
    "Tackle the remaining high-priority tasks next",
    "Check whether any task needs its time slot adjusted",
    "Consider breaking large tasks into smaller ones",
];
const BEHIND_SUGGESTIONS: [&str; 3] = [
    "Re-evaluate your task priorities",
    "Consider reducing the number of tasks or adjusting their timing",
    "Break complex tasks into smaller steps",
];

pub const FINISH_HIGH_PRIORITY_SUGGESTION: &str = "Finish the remaining high-priority tasks first";
pub const REVIEW_SCHEDULE_SUGGESTION: &str = "Double-check that your schedule is realistic";

/// Summary and suggestions for one day's tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub summary: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl Analysis {
    pub fn new(summary: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            summary: summary.into(),
            suggestions,
        }
    }

    /// Fixed analysis shown by the client when the service can't be reached.
    pub fn offline_fallback() -> Self {
        Self::new(
            "Based on your plan, focus on your high-priority tasks first and budget your time carefully.",
            vec![
                "Complete high-priority tasks first".to_string(),
                "Leave enough time for each task".to_string(),
                "Review and adjust your plan regularly".to_string(),
            ],
        )
    }
}

/// Completion tier a day falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionTier {
    /// 80% or more completed.
    HighPerformance,
    /// At least 50% but below 80%.
    ModerateProgress,
    BehindSchedule,
}

impl CompletionTier {
    /// Bucket a raw (unrounded) completion percentage.
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 80.0 {
            CompletionTier::HighPerformance
        } else if rate >= 50.0 {
            CompletionTier::ModerateProgress
        } else {
            CompletionTier::BehindSchedule
        }
    }

    fn summary(&self, rate: f64) -> String {
        match self {
            CompletionTier::HighPerformance => format!(
                "Excellent! You have completed {rate:.1}% of your tasks. Great efficiency, keep it up."
            ),
            CompletionTier::ModerateProgress => format!(
                "You have completed {rate:.1}% of your tasks. Good progress, with room to improve."
            ),
            CompletionTier::BehindSchedule => format!(
                "You have completed {rate:.1}% of your tasks so far. It may be time to revisit your plan."
            ),
        }
    }

    fn suggestions(&self) -> [&'static str; 3] {
        match self {
            CompletionTier::HighPerformance => HIGH_SUGGESTIONS,
            CompletionTier::ModerateProgress => MODERATE_SUGGESTIONS,
            CompletionTier::BehindSchedule => BEHIND_SUGGESTIONS,
        }
    }
}

/// Percentage of completed tasks, `None` for an empty list.
pub fn completion_rate(tasks: &[TaskSnapshot]) -> Option<f64> {
    if tasks.is_empty() {
        return None;
    }
    let completed = tasks.iter().filter(|t| t.completed).count();
    Some(completed as f64 / tasks.len() as f64 * 100.0)
}

/// Rule-based analysis of a day's tasks.
///
/// Pure and infallible: the same input always yields the same output, and an
/// empty list is a valid input.
pub fn heuristic_analysis(tasks: &[TaskSnapshot]) -> Analysis {
    let Some(rate) = completion_rate(tasks) else {
        return Analysis::new(
            EMPTY_SUMMARY,
            EMPTY_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        );
    };

    let tier = CompletionTier::from_rate(rate);
    let mut suggestions: Vec<String> = tier.suggestions().iter().map(|s| s.to_string()).collect();

    let high_priority_pending = tasks
        .iter()
        .any(|t| t.priority == Priority::High && !t.completed);
    if high_priority_pending {
        suggestions.push(FINISH_HIGH_PRIORITY_SUGGESTION.to_string());
    }

    if tasks.iter().any(TaskSnapshot::has_time) {
        suggestions.push(REVIEW_SCHEDULE_SUGGESTION.to_string());
    }

    Analysis::new(tier.summary(rate), suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasks(completed: usize, total: usize) -> Vec<TaskSnapshot> {
        (0..total)
            .map(|i| {
                let task = TaskSnapshot::new(format!("task {i}"), Priority::Medium);
                if i < completed {
                    task.completed()
                } else {
                    task
                }
            })
            .collect()
    }

    fn tier_summary(tier: CompletionTier, rate: f64) -> String {
        tier.summary(rate)
    }

    #[test]
    fn empty_list_gives_fixed_analysis() {
        let first = heuristic_analysis(&[]);
        let second = heuristic_analysis(&[]);

        assert_eq!(first, second);
        assert_eq!(first.summary, EMPTY_SUMMARY);
        assert_eq!(first.suggestions, EMPTY_SUGGESTIONS.to_vec());
    }

    #[test]
    fn all_completed_is_high_performance() {
        let analysis = heuristic_analysis(&tasks(3, 3));
        assert_eq!(analysis.summary, tier_summary(CompletionTier::HighPerformance, 100.0));
        assert!(analysis.summary.contains("100.0%"));
        assert_eq!(analysis.suggestions, HIGH_SUGGESTIONS.to_vec());
    }

    #[test]
    fn none_completed_is_behind_schedule() {
        let analysis = heuristic_analysis(&tasks(0, 4));
        assert_eq!(analysis.summary, tier_summary(CompletionTier::BehindSchedule, 0.0));
        assert_eq!(analysis.suggestions, BEHIND_SUGGESTIONS.to_vec());
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(
            heuristic_analysis(&tasks(4, 5)).summary,
            tier_summary(CompletionTier::HighPerformance, 80.0)
        );
        assert_eq!(
            heuristic_analysis(&tasks(1, 2)).summary,
            tier_summary(CompletionTier::ModerateProgress, 50.0)
        );
        assert_eq!(
            heuristic_analysis(&tasks(2, 3)).summary,
            tier_summary(CompletionTier::ModerateProgress, 200.0 / 3.0)
        );
    }

    #[test]
    fn tier_uses_unrounded_rate() {
        assert_eq!(CompletionTier::from_rate(79.96), CompletionTier::ModerateProgress);
        assert_eq!(CompletionTier::from_rate(49.99), CompletionTier::BehindSchedule);
        assert_eq!(CompletionTier::from_rate(80.0), CompletionTier::HighPerformance);
    }

    #[test]
    fn rate_is_displayed_with_one_decimal() {
        let analysis = heuristic_analysis(&tasks(1, 3));
        assert!(analysis.summary.contains("33.3%"), "{}", analysis.summary);
    }

    #[test]
    fn pending_high_priority_adds_suggestion() {
        let list = vec![
            TaskSnapshot::new("ship", Priority::High),
            TaskSnapshot::new("read", Priority::Low).completed(),
        ];
        let analysis = heuristic_analysis(&list);
        assert!(analysis
            .suggestions
            .contains(&FINISH_HIGH_PRIORITY_SUGGESTION.to_string()));
    }

    #[test]
    fn completed_high_priority_adds_nothing() {
        let list = vec![
            TaskSnapshot::new("ship", Priority::High).completed(),
            TaskSnapshot::new("read", Priority::Low),
        ];
        let analysis = heuristic_analysis(&list);
        assert!(!analysis
            .suggestions
            .contains(&FINISH_HIGH_PRIORITY_SUGGESTION.to_string()));
        assert_eq!(analysis.suggestions.len(), 3);
    }

    #[test]
    fn timed_task_adds_schedule_review() {
        let with_time = vec![
            TaskSnapshot::new("gym", Priority::Medium).at("18:00"),
            TaskSnapshot::new("read", Priority::Low),
        ];
        assert_eq!(
            heuristic_analysis(&with_time).suggestions.last().map(String::as_str),
            Some(REVIEW_SCHEDULE_SUGGESTION)
        );

        let without_time = vec![TaskSnapshot::new("read", Priority::Low).at("")];
        assert!(!heuristic_analysis(&without_time)
            .suggestions
            .contains(&REVIEW_SCHEDULE_SUGGESTION.to_string()));
    }

    #[test]
    fn non_empty_lists_give_three_to_five_suggestions() {
        let priorities = [Priority::Low, Priority::Medium, Priority::High];
        for total in 1..=5 {
            for completed in 0..=total {
                for priority in priorities {
                    for timed in [false, true] {
                        let list: Vec<_> = tasks(completed, total)
                            .into_iter()
                            .map(|mut t| {
                                t.priority = priority;
                                if timed {
                                    t.time = Some("09:00".to_string());
                                }
                                t
                            })
                            .collect();
                        let count = heuristic_analysis(&list).suggestions.len();
                        assert!((3..=5).contains(&count), "got {count} suggestions");
                    }
                }
            }
        }
    }

    #[test]
    fn both_additions_come_after_base_tips() {
        let list = vec![TaskSnapshot::new("ship", Priority::High).at("09:00")];
        let analysis = heuristic_analysis(&list);
        assert_eq!(
            &analysis.suggestions[3..],
            &[
                FINISH_HIGH_PRIORITY_SUGGESTION.to_string(),
                REVIEW_SCHEDULE_SUGGESTION.to_string()
            ]
        );
    }

    #[test]
    fn offline_fallback_has_three_suggestions() {
        let fallback = Analysis::offline_fallback();
        assert!(!fallback.summary.is_empty());
        assert_eq!(fallback.suggestions.len(), 3);
    }
}
