//! Placeholder content served while the document store is unreachable.

use super::content::{DiscussionRecord, GoalRecord, GroupRecord, NoteRecord, SessionRecord};
use chrono::{DateTime, Duration, Timelike, Utc};

pub fn groups(limit: usize) -> Vec<GroupRecord> {
    [
        (
            "Math Masters",
            "Algebra & Calculus",
            "Daily problem-solving and concept reviews.",
        ),
        (
            "Bio Buddies",
            "Biology",
            "Cell biology to human anatomy study jams.",
        ),
        (
            "Code Crew",
            "Programming",
            "Leetcode, projects, and pair programming.",
        ),
    ]
    .into_iter()
    .take(limit)
    .map(|(name, subject, description)| GroupRecord {
        id: None,
        name: name.to_string(),
        subject: subject.to_string(),
        description: description.to_string(),
    })
    .collect()
}

/// One sprint per requested slot, starting hourly after `now` (second precision).
pub fn sessions(now: DateTime<Utc>, limit: usize) -> Vec<SessionRecord> {
    let base = now.with_nanosecond(0).unwrap_or(now);

    (0..limit)
        .map(|idx| SessionRecord {
            id: None,
            title: "Morning Focus Sprint".to_string(),
            description: Some("50-minute deep work + 10-minute break".to_string()),
            group_id: None,
            start_time: base + Duration::hours(idx as i64 + 1),
            duration_minutes: 60,
        })
        .collect()
}

pub fn discussions(limit: usize) -> Vec<DiscussionRecord> {
    [
        ("Ava", "Any tips for integrals by substitution?"),
        ("Liam", "Sharing notes from today’s bio lab."),
    ]
    .into_iter()
    .take(limit)
    .map(|(author, message)| DiscussionRecord {
        id: None,
        author: author.to_string(),
        message: message.to_string(),
        group_id: None,
        created_at: None,
    })
    .collect()
}

pub fn goals(limit: usize) -> Vec<GoalRecord> {
    [
        ("Maya", "Finish 3 calculus chapters this week"),
        ("Noah", "Practice 2 coding challenges daily"),
    ]
    .into_iter()
    .take(limit)
    .map(|(member, content)| GoalRecord {
        id: None,
        member: member.to_string(),
        content: content.to_string(),
        target_date: None,
        status: None,
        created_at: None,
    })
    .collect()
}

pub fn notes(limit: usize) -> Vec<NoteRecord> {
    [
        (
            "Algebra Quick Guide",
            "Formulas and practice set",
            "https://example.com/algebra.pdf",
            &["math", "algebra"][..],
        ),
        (
            "Biology Diagrams Pack",
            "High-res labeled diagrams",
            "https://example.com/biology.zip",
            &["bio"][..],
        ),
    ]
    .into_iter()
    .take(limit)
    .map(|(title, description, url, tags)| NoteRecord {
        id: None,
        title: title.to_string(),
        description: Some(description.to_string()),
        download_url: url.to_string(),
        tag_list: tags.iter().map(|t| t.to_string()).collect(),
    })
    .collect()
}
