//! Achievement catalog definitions.

use super::LockedAchievement;
use crate::stats::StatMetric;

fn achievement(
    id: &str,
    name: &str,
    description: &str,
    metric: StatMetric,
    requirement: u32,
) -> LockedAchievement {
    LockedAchievement {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        metric,
        requirement,
        progress: 0,
        icon: format!("achievement_{}", id),
    }
}

/// The fixed catalog, all locked with zero progress.
///
/// Extending the catalog is a code change; stored snapshots pick up new
/// entries only through a fresh seed.
pub fn starting_achievements() -> Vec<LockedAchievement> {
    vec![
        achievement(
            "first_interview",
            "First Steps",
            "Complete your first practice interview",
            StatMetric::InterviewSessions,
            1,
        ),
        achievement(
            "resume_pro",
            "Resume Pro",
            "Create 3 resumes",
            StatMetric::ResumesCreated,
            3,
        ),
        achievement(
            "chatty",
            "Conversationalist",
            "Have 10 chatbot conversations",
            StatMetric::ChatbotInteractions,
            10,
        ),
        achievement(
            "interview_master",
            "Interview Master",
            "Complete 10 practice interviews",
            StatMetric::InterviewSessions,
            10,
        ),
    ]
}
