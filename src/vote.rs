//! Vote submission and tally rendering for posts and comments.
//!
//! Both target kinds share one code path; only the endpoint family
//! differs. No optimistic update is performed: the displayed counts
//! change only after the server confirms the vote.

#[cfg(test)]
#[path = "vote_test.rs"]
mod vote_test;

use serde::Deserialize;

use crate::net::api::{self, ApiError};

/// Which endpoint family a vote request targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetKind {
    Post,
    Comment,
}

impl TargetKind {
    /// Path segment used when deriving the vote URL.
    pub fn as_segment(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Comment => "comment",
        }
    }
}

/// Vote polarity. The tokens are a wire contract with the server and
/// must stay verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Up => "upvote",
            Self::Down => "downvote",
        }
    }

    /// Parse a token coming from a template `onclick` handler.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "upvote" => Some(Self::Up),
            "downvote" => Some(Self::Down),
            _ => None,
        }
    }
}

/// Updated tallies returned by the server once a vote is recorded.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct VoteCounts {
    pub upvotes: i64,
    pub downvotes: i64,
}

/// Derive the endpoint path for one vote request.
pub fn vote_path(kind: TargetKind, id: &str, direction: Direction) -> String {
    format!("/{}/{id}/{}", kind.as_segment(), direction.as_token())
}

/// Submit a vote and return the updated tallies.
///
/// Exactly one request per call; repeated clicks repeat the request.
/// Rate limiting, if any, lives on the server.
///
/// # Errors
///
/// Propagates the [`ApiError`] of the underlying request.
pub async fn submit(
    kind: TargetKind,
    id: &str,
    direction: Direction,
) -> Result<VoteCounts, ApiError> {
    api::post_empty_json(&vote_path(kind, id, direction)).await
}

/// Overwrite the displayed tallies for the element whose `data-id`
/// attribute matches `id`. A missing element or missing count children
/// are skipped silently.
#[cfg(feature = "browser")]
pub fn render_counts(id: &str, counts: VoteCounts) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let selector = format!("[data-id=\"{id}\"]");
    let Ok(Some(target)) = document.query_selector(&selector) else {
        return;
    };
    if let Ok(Some(up)) = target.query_selector(".upvotes") {
        up.set_text_content(Some(&counts.upvotes.to_string()));
    }
    if let Ok(Some(down)) = target.query_selector(".downvotes") {
        down.set_text_content(Some(&counts.downvotes.to_string()));
    }
}
