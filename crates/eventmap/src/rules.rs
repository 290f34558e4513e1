//! Fully-validated rule types and first-match evaluation.

use std::fmt;

use event::{EventKind, InputEvent};

/// The closed set of selection policies a rule may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// Render the event's produced character as a glyph (image channel only).
    Font,
    /// Uniform draw from the default collection.
    Random,
    /// Index the default collection by `code mod len`.
    Deterministic,
    /// Exact-name lookup in the extension collection.
    NamedFile,
}

impl PolicyKind {
    /// The name used for this policy in rule documents.
    pub fn name(self) -> &'static str {
        match self {
            Self::Font => "font",
            Self::Random => "random",
            Self::Deterministic => "deterministic",
            Self::NamedFile => "named_file",
        }
    }

    /// Parse a policy name from a rule document.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "font" => Some(Self::Font),
            "random" => Some(Self::Random),
            "deterministic" => Some(Self::Deterministic),
            "named_file" => Some(Self::NamedFile),
            _ => None,
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The media channel a rule list applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The sound channel.
    Sound,
    /// The image channel.
    Image,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sound => "sound",
            Self::Image => "image",
        })
    }
}

/// One predicate inside a rule's `check` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Event kind equality (`type: KEYDOWN`).
    Kind(EventKind),
    /// Exact produced-character equality (`unicode: {value: c}`).
    CharEquals(char),
    /// Character classifies as alphabetic, compared to the expected flag.
    IsAlpha(bool),
    /// Character classifies as a digit, compared to the expected flag.
    IsDigit(bool),
}

impl Condition {
    /// Whether this condition holds for `event`.
    ///
    /// An event without a produced character fails every `unicode.*`
    /// condition; it never matches and never errors.
    pub fn matches(&self, event: &InputEvent) -> bool {
        match *self {
            Self::Kind(kind) => event.kind == kind,
            Self::CharEquals(expected) => event.ch == Some(expected),
            Self::IsAlpha(expected) => event.ch.is_some_and(|c| c.is_alphabetic() == expected),
            Self::IsDigit(expected) => event.ch.is_some_and(|c| c.is_ascii_digit() == expected),
        }
    }
}

/// One validated mapping rule: a condition conjunction plus a policy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// All conditions must hold; an empty list always matches.
    pub conditions: Vec<Condition>,
    /// The policy to invoke when the rule matches.
    pub policy: PolicyKind,
    /// Static arguments passed to the policy.
    pub args: Vec<String>,
}

impl Rule {
    /// Whether every condition holds for `event`.
    pub fn matches(&self, event: &InputEvent) -> bool {
        self.conditions.iter().all(|c| c.matches(event))
    }
}

/// An ordered rule list for one channel; first match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a rule set from validated rules.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The first rule, in document order, whose conditions all hold.
    pub fn first_match(&self, event: &InputEvent) -> Option<&Rule> {
        self.rules.iter().find(|r| r.matches(event))
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set holds no rules at all.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
