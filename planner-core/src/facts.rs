//! Best-effort extraction of project facts from the raw conversation.
//!
//! Everything here is pattern matching over the concatenated message text and
//! never fails. The results only steer the plan prompt; the model is told to
//! honour them but nothing downstream depends on them being right.

use regex::Regex;
use shared_types::ChatMessage;
use std::fmt;
use std::sync::LazyLock;

pub const DEFAULT_GOAL: &str = "project";

/// Words the name heuristic commonly picks up that are never member names
pub const NAME_STOP_WORDS: &[&str] = &[
    "team", "size", "members", "people", "days", "weeks", "months", "build", "create", "have",
    "got", "want", "their", "where",
];

static GOAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(build|create|develop|make|design).*?(website|app|project|platform|system|tool|software|product|e-commerce|ecommerce|research|mern|full.*stack)",
    )
    .expect("goal pattern is valid")
});

// Plural units first so "3 weeks" is kept whole
static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(days|day|weeks|week|months|month)").expect("duration pattern is valid")
});

static TEAM_SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(members|member|developers|developer|people|person|team)")
        .expect("team size pattern is valid")
});

static TEAM_OF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)team\s+of\s+(\d+)").expect("team-of pattern is valid")
});

static NAMES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:names?\s+(?:are|is)\s+)?([a-zA-Z]+(?:\s*,\s*[a-zA-Z]+)*(?:\s+and\s+[a-zA-Z]+)?)",
    )
    .expect("names pattern is valid")
});

/// Facts pulled out of a conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFacts {
    pub goal: String,
    /// Raw phrase such as "3 weeks"; conversion to days is left to the model
    pub duration: Option<String>,
    pub team_size: Option<u32>,
    /// Noisy: usually the first word run of the conversation. Treat as a hint.
    pub member_names: Vec<String>,
}

impl Default for ExtractedFacts {
    fn default() -> Self {
        Self {
            goal: DEFAULT_GOAL.to_string(),
            duration: None,
            team_size: None,
            member_names: Vec::new(),
        }
    }
}

impl ExtractedFacts {
    /// Extract facts from all message contents joined by a single space
    pub fn from_messages(messages: &[ChatMessage]) -> Self {
        let all_text = messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self::from_text(&all_text)
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            goal: extract_goal(text),
            duration: extract_duration(text),
            team_size: extract_team_size(text),
            member_names: extract_member_names(text),
        }
    }

    /// Team line of the summary, e.g. "3 members: Alice, Bob"
    pub fn team_line(&self) -> String {
        let size = self
            .team_size
            .map(|n| n.to_string())
            .unwrap_or_else(|| "not specified".to_string());

        if self.member_names.is_empty() {
            format!("{} members", size)
        } else {
            format!("{} members: {}", size, self.member_names.join(", "))
        }
    }

    /// Summary block sent to the model as the user turn
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ExtractedFacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\nEXTRACTED INFO:\n- Goal: {}\n- Duration: {}\n- Team: {}\n",
            self.goal,
            self.duration.as_deref().unwrap_or("not specified"),
            self.team_line()
        )
    }
}

pub fn extract_goal(text: &str) -> String {
    GOAL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_GOAL.to_string())
}

pub fn extract_duration(text: &str) -> Option<String> {
    DURATION_RE.find(text).map(|m| m.as_str().to_string())
}

/// The "<n> people" form wins over "team of <n>" whenever it matches, even
/// when its number is out of range.
pub fn extract_team_size(text: &str) -> Option<u32> {
    let caps = TEAM_SIZE_RE
        .captures(text)
        .or_else(|| TEAM_OF_RE.captures(text))?;
    caps.get(1)?.as_str().parse::<u32>().ok()
}

/// Single capture of the first comma/"and" separated word run.
///
/// Expect false positives ("I", "Hello", "Yes") and misses; only tokens
/// longer than two characters that are not stop words survive.
pub fn extract_member_names(text: &str) -> Vec<String> {
    let Some(run) = NAMES_RE.captures(text).and_then(|caps| caps.get(1)) else {
        return Vec::new();
    };

    let names = run
        .as_str()
        .replace(" and ", ", ")
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty() && name.chars().count() > 2)
        .map(title_case)
        .collect();

    filter_stop_words(names)
}

pub fn filter_stop_words(names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .filter(|name| !NAME_STOP_WORDS.contains(&name.to_lowercase().as_str()))
        .collect()
}

/// Uppercase every letter that follows a non-letter, lowercase the rest
fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev_is_alpha = false;
    for c in word.chars() {
        if prev_is_alpha {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_alpha = c.is_alphabetic();
    }
    out
}
