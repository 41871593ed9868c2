//! Event feed model and the classification engine that turns one raw
//! GitHub event into a human-readable activity line.

use serde::{Deserialize, Serialize};

/// Repository reference as the origin delivers it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiRepo {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiCommit {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiForkee {
    #[serde(default)]
    pub full_name: String,
}

/// Payload union across all event types. Fields absent for a given type
/// deserialize to their zero value and must never fail the parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiPayload {
    #[serde(default)]
    pub r#ref: String,
    #[serde(default)]
    pub ref_type: String,
    #[serde(default)]
    pub commits: Vec<ApiCommit>,
    #[serde(default)]
    pub forkee: ApiForkee,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub member: String,
    #[serde(default)]
    pub number: u64,
}

/// One unprocessed activity record from the origin feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEvent {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub repo: ApiRepo,
    #[serde(default)]
    pub payload: ApiPayload,
    #[serde(default)]
    pub created_at: String,
}

/// The classified, human-readable representation of one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub event: String,
    pub message: String,
}

/// Closed set of event types the classifier understands. The origin's type
/// vocabulary is open-ended, so anything else lands in `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Push,
    Create,
    Delete,
    Fork,
    Gollum,
    IssueComment,
    Issues,
    Member,
    Public,
    PullRequest,
    PullRequestReview,
    PullRequestReviewComment,
    PullRequestReviewThread,
    Release,
    Sponsorship,
    Watch,
    Unknown,
}

impl EventKind {
    pub fn from_type(event_type: &str) -> Self {
        match event_type {
            "PushEvent" => EventKind::Push,
            "CreateEvent" => EventKind::Create,
            "DeleteEvent" => EventKind::Delete,
            "ForkEvent" => EventKind::Fork,
            "GollumEvent" => EventKind::Gollum,
            "IssueCommentEvent" => EventKind::IssueComment,
            "IssuesEvent" => EventKind::Issues,
            "MemberEvent" => EventKind::Member,
            "PublicEvent" => EventKind::Public,
            "PullRequestEvent" => EventKind::PullRequest,
            "PullRequestReviewEvent" => EventKind::PullRequestReview,
            "PullRequestReviewCommentEvent" => EventKind::PullRequestReviewComment,
            "PullRequestReviewThreadEvent" => EventKind::PullRequestReviewThread,
            "ReleaseEvent" => EventKind::Release,
            "SponsorshipEvent" => EventKind::Sponsorship,
            "WatchEvent" => EventKind::Watch,
            _ => EventKind::Unknown,
        }
    }
}

/// Maps one raw event to its activity line. Total: never fails, and an
/// unrecognized type or action yields an empty message with the original
/// type tag preserved.
pub fn classify(event: &RawEvent) -> Activity {
    let repo = event.repo.name.as_str();
    let payload = &event.payload;

    let message = match EventKind::from_type(&event.event_type) {
        EventKind::Push => {
            format!("Pushed {} commits to {}", payload.commits.len(), repo)
        }
        EventKind::Create => match payload.ref_type.as_str() {
            "repository" => format!("Created a new repository called {}", repo),
            "branch" => format!("Created a new branch {} in {}", payload.r#ref, repo),
            _ => format!("Created a new tag {} in {}", payload.r#ref, repo),
        },
        EventKind::Delete => match payload.ref_type.as_str() {
            "branch" => format!("Deleted branch {} in {}", payload.r#ref, repo),
            _ => format!("Deleted tag {} in {}", payload.r#ref, repo),
        },
        EventKind::Fork => format!("Forked repository to {}", payload.forkee.full_name),
        EventKind::Gollum => format!("Created page in wiki to {}", repo),
        EventKind::IssueComment => match payload.action.as_str() {
            "created" => format!("Created a new comment in {}", repo),
            "edited" => format!("Edited a comment in {}", repo),
            _ => format!("Deleted a comment in {}", repo),
        },
        EventKind::Issues => match payload.action.as_str() {
            "opened" => format!("Opened a new issue in {}", repo),
            "edited" => format!("Edited a issue in {}", repo),
            "closed" => format!("Closed a issue in {}", repo),
            "reopened" => format!("Reopened a issue in {}", repo),
            "assigned" => format!("Assigned a issue in {}", repo),
            "unassigned" => format!("Unassigned a issue in {}", repo),
            "labeled" => format!("Labeled a issue in {}", repo),
            "unlabeled" => format!("Unlabeled a issue in {}", repo),
            _ => String::new(),
        },
        EventKind::Member => format!("Added a member {} to {}", payload.member, repo),
        EventKind::Public => format!("The repository {} is public", repo),
        EventKind::PullRequest => {
            let number = payload.number;
            match payload.action.as_str() {
                "opened" => format!("Opened pull request #{} in {}", number, repo),
                "edited" => format!("Edited pull request #{} in {}", number, repo),
                "closed" => format!("Closed pull request #{} in {}", number, repo),
                "reopened" => format!("Reopened pull request #{} in {}", number, repo),
                "assigned" => format!("Assigned pull request #{} in {}", number, repo),
                "unassigned" => format!("Unassigned pull request #{} in {}", number, repo),
                "review_requested" => {
                    format!("Review requested pull request #{} in {}", number, repo)
                }
                "review_request_removed" => {
                    format!("Review request removed pull request #{} in {}", number, repo)
                }
                "labeled" => format!("Labeled pull request #{} in {}", number, repo),
                "unlabeled" => format!("Unlabeled pull request #{} in {}", number, repo),
                // The origin's remaining action for this type is "synchronize".
                _ => format!("Synchronized pull request #{} in {}", number, repo),
            }
        }
        EventKind::PullRequestReview => format!("Created pull request review in {}", repo),
        EventKind::PullRequestReviewComment => {
            format!("Created pull request review comment in {}", repo)
        }
        EventKind::PullRequestReviewThread => match payload.action.as_str() {
            "resolved" => format!("Resolved pull request review thread in {}", repo),
            _ => format!("Unresolved pull request review thread in {}", repo),
        },
        EventKind::Release => format!("Published release in {}", repo),
        EventKind::Sponsorship => format!("Created sponsorship in {}", repo),
        EventKind::Watch => format!("Starred {}", repo),
        EventKind::Unknown => String::new(),
    };

    Activity {
        event: event.event_type.clone(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn event(event_type: &str) -> RawEvent {
        RawEvent {
            event_type: event_type.to_string(),
            repo: ApiRepo {
                name: "octo/repo".to_string(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn push_event_counts_commits() {
        let mut evt = event("PushEvent");
        evt.payload.commits = vec![
            ApiCommit {
                message: "first".to_string(),
            },
            ApiCommit {
                message: "second".to_string(),
            },
        ];

        let act = classify(&evt);
        assert_eq!(act.event, "PushEvent");
        assert_eq!(act.message, "Pushed 2 commits to octo/repo");
    }

    #[test]
    fn push_event_with_no_commits() {
        let act = classify(&event("PushEvent"));
        assert_eq!(act.message, "Pushed 0 commits to octo/repo");
    }

    #[test]
    fn create_event_dispatches_on_ref_type() {
        let mut evt = event("CreateEvent");
        evt.payload.ref_type = "repository".to_string();
        assert_eq!(
            classify(&evt).message,
            "Created a new repository called octo/repo"
        );

        evt.payload.ref_type = "branch".to_string();
        evt.payload.r#ref = "feature-x".to_string();
        assert_eq!(
            classify(&evt).message,
            "Created a new branch feature-x in octo/repo"
        );

        evt.payload.ref_type = "tag".to_string();
        evt.payload.r#ref = "v1.0".to_string();
        assert_eq!(classify(&evt).message, "Created a new tag v1.0 in octo/repo");
    }

    #[test]
    fn delete_event_falls_back_to_tag() {
        let mut evt = event("DeleteEvent");
        evt.payload.r#ref = "old-branch".to_string();
        evt.payload.ref_type = "branch".to_string();
        assert_eq!(classify(&evt).message, "Deleted branch old-branch in octo/repo");

        evt.payload.ref_type = String::new();
        assert_eq!(classify(&evt).message, "Deleted tag old-branch in octo/repo");
    }

    #[test]
    fn fork_event_uses_forkee_full_name() {
        let mut evt = event("ForkEvent");
        evt.payload.forkee.full_name = "someone/repo".to_string();
        assert_eq!(classify(&evt).message, "Forked repository to someone/repo");
    }

    #[test]
    fn issue_comment_actions() {
        let mut evt = event("IssueCommentEvent");
        evt.payload.action = "created".to_string();
        assert_eq!(classify(&evt).message, "Created a new comment in octo/repo");

        evt.payload.action = "edited".to_string();
        assert_eq!(classify(&evt).message, "Edited a comment in octo/repo");

        evt.payload.action = "deleted".to_string();
        assert_eq!(classify(&evt).message, "Deleted a comment in octo/repo");
    }

    #[test]
    fn issues_event_known_actions() {
        let cases = [
            ("opened", "Opened a new issue in octo/repo"),
            ("edited", "Edited a issue in octo/repo"),
            ("closed", "Closed a issue in octo/repo"),
            ("reopened", "Reopened a issue in octo/repo"),
            ("assigned", "Assigned a issue in octo/repo"),
            ("unassigned", "Unassigned a issue in octo/repo"),
            ("labeled", "Labeled a issue in octo/repo"),
            ("unlabeled", "Unlabeled a issue in octo/repo"),
        ];
        for (action, expected) in cases {
            let mut evt = event("IssuesEvent");
            evt.payload.action = action.to_string();
            assert_eq!(classify(&evt).message, expected, "action {}", action);
        }
    }

    #[test]
    fn issues_event_unmatched_action_yields_empty_message() {
        let mut evt = event("IssuesEvent");
        evt.payload.action = "pinned".to_string();

        let act = classify(&evt);
        assert_eq!(act.event, "IssuesEvent");
        assert_eq!(act.message, "");
    }

    #[test]
    fn member_event_names_the_member() {
        let mut evt = event("MemberEvent");
        evt.payload.member = "octocat".to_string();
        assert_eq!(
            classify(&evt).message,
            "Added a member octocat to octo/repo"
        );
    }

    #[test]
    fn pull_request_event_actions() {
        let cases = [
            ("opened", "Opened pull request #42 in octo/repo"),
            ("edited", "Edited pull request #42 in octo/repo"),
            ("closed", "Closed pull request #42 in octo/repo"),
            ("reopened", "Reopened pull request #42 in octo/repo"),
            ("assigned", "Assigned pull request #42 in octo/repo"),
            ("unassigned", "Unassigned pull request #42 in octo/repo"),
            (
                "review_requested",
                "Review requested pull request #42 in octo/repo",
            ),
            (
                "review_request_removed",
                "Review request removed pull request #42 in octo/repo",
            ),
            ("labeled", "Labeled pull request #42 in octo/repo"),
            ("unlabeled", "Unlabeled pull request #42 in octo/repo"),
            ("synchronize", "Synchronized pull request #42 in octo/repo"),
        ];
        for (action, expected) in cases {
            let mut evt = event("PullRequestEvent");
            evt.payload.number = 42;
            evt.payload.action = action.to_string();
            assert_eq!(classify(&evt).message, expected, "action {}", action);
        }
    }

    #[test]
    fn review_thread_resolved_and_fallback() {
        let mut evt = event("PullRequestReviewThreadEvent");
        evt.payload.action = "resolved".to_string();
        assert_eq!(
            classify(&evt).message,
            "Resolved pull request review thread in octo/repo"
        );

        evt.payload.action = "unresolved".to_string();
        assert_eq!(
            classify(&evt).message,
            "Unresolved pull request review thread in octo/repo"
        );
    }

    #[test]
    fn watch_event_is_starred() {
        assert_eq!(classify(&event("WatchEvent")).message, "Starred octo/repo");
    }

    #[test]
    fn simple_events() {
        assert_eq!(
            classify(&event("GollumEvent")).message,
            "Created page in wiki to octo/repo"
        );
        assert_eq!(
            classify(&event("PublicEvent")).message,
            "The repository octo/repo is public"
        );
        assert_eq!(
            classify(&event("PullRequestReviewEvent")).message,
            "Created pull request review in octo/repo"
        );
        assert_eq!(
            classify(&event("PullRequestReviewCommentEvent")).message,
            "Created pull request review comment in octo/repo"
        );
        assert_eq!(
            classify(&event("ReleaseEvent")).message,
            "Published release in octo/repo"
        );
        assert_eq!(
            classify(&event("SponsorshipEvent")).message,
            "Created sponsorship in octo/repo"
        );
    }

    #[test]
    fn unknown_type_is_kept_with_empty_message() {
        let act = classify(&event("UnknownFutureEvent"));
        assert_eq!(act.event, "UnknownFutureEvent");
        assert_eq!(act.message, "");
    }

    #[test]
    fn absent_payload_fields_deserialize_to_zero_values() {
        let raw = r#"[{"id":"1","type":"WatchEvent","repo":{"name":"octo/repo"},"payload":{},"created_at":"2024-01-01T00:00:00Z"}]"#;
        let events: Vec<RawEvent> = serde_json::from_str(raw).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].payload.commits.len(), 0);
        assert_eq!(events[0].payload.number, 0);
        assert_eq!(classify(&events[0]).message, "Starred octo/repo");
    }
}
