//! Raw document schema as deserialized from YAML, before validation.
//!
//! Parsing and validation are separate stages: the raw types accept anything
//! structurally plausible, and `validate` turns them into fully-typed rules
//! or a precise error. Nothing downstream ever sees a half-checked rule.

use std::collections::BTreeMap;

use event::EventKind;
use serde::Deserialize;
use serde_yaml::Value;

use crate::{
    API_VERSION, EventMap,
    error::Error,
    rules::{Channel, Condition, PolicyKind, Rule, RuleSet},
};

/// Top-level raw document. Unknown top-level keys are ignored so newer
/// documents keep loading on older builds.
#[derive(Debug, Deserialize)]
pub(crate) struct RawEventMap {
    #[serde(default, rename = "apiVersion")]
    api_version: Option<i64>,
    #[serde(default)]
    image: Option<Vec<RawRule>>,
    #[serde(default)]
    sound: Option<Vec<RawRule>>,
}

/// One raw rule object: `{check: [...], policy: ..., args: [...]}`.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRule {
    #[serde(default)]
    check: Option<Vec<RawCondition>>,
    #[serde(default)]
    policy: Option<String>,
    #[serde(default)]
    args: Option<Vec<Value>>,
}

/// One raw condition object. Unknown keys are collected so validation can
/// reject them by name instead of surfacing an opaque parser error.
#[derive(Debug, Deserialize)]
pub(crate) struct RawCondition {
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    unicode: Option<RawUnicode>,
    #[serde(default, flatten)]
    unknown: BTreeMap<String, Value>,
}

/// The `unicode:` sub-mapping of a condition. Values stay untyped here so
/// validation can report type mismatches as malformed rules.
#[derive(Debug, Deserialize)]
pub(crate) struct RawUnicode {
    #[serde(default)]
    value: Option<Value>,
    #[serde(default)]
    isalpha: Option<Value>,
    #[serde(default)]
    isdigit: Option<Value>,
    #[serde(default, flatten)]
    unknown: BTreeMap<String, Value>,
}

impl RawEventMap {
    /// Check the version and validate both channels into an [`EventMap`].
    pub(crate) fn validate(self) -> Result<EventMap, Error> {
        match self.api_version {
            Some(v) if v == API_VERSION => {}
            found => return Err(Error::UnsupportedVersion { found }),
        }
        Ok(EventMap {
            sound: self
                .sound
                .map(|r| validate_rules(Channel::Sound, r))
                .transpose()?,
            image: self
                .image
                .map(|r| validate_rules(Channel::Image, r))
                .transpose()?,
        })
    }
}

/// Validate one channel's ordered rule list.
fn validate_rules(channel: Channel, raw: Vec<RawRule>) -> Result<RuleSet, Error> {
    let mut rules = Vec::with_capacity(raw.len());
    for (index, rule) in raw.into_iter().enumerate() {
        rules.push(validate_rule(channel, index, rule)?);
    }
    Ok(RuleSet::new(rules))
}

/// Validate one rule: policy name, argument shape, and every condition.
fn validate_rule(channel: Channel, index: usize, raw: RawRule) -> Result<Rule, Error> {
    let malformed = |message: String| Error::MalformedRule {
        channel,
        index,
        message,
    };

    let Some(name) = raw.policy else {
        return Err(malformed("rule is missing a policy name".to_string()));
    };
    let Some(policy) = PolicyKind::parse(&name) else {
        return Err(malformed(format!("unknown policy '{}'", name)));
    };
    if channel == Channel::Sound && policy == PolicyKind::Font {
        return Err(malformed(
            "the font policy renders glyph images and cannot serve the sound channel".to_string(),
        ));
    }

    let args = validate_args(policy, raw.args).map_err(&malformed)?;

    let mut conditions = Vec::new();
    for cond in raw.check.unwrap_or_default() {
        conditions.extend(validate_condition(cond).map_err(&malformed)?);
    }

    Ok(Rule {
        conditions,
        policy,
        args,
    })
}

/// Check argument arity and types against the policy's expectation.
fn validate_args(policy: PolicyKind, args: Option<Vec<Value>>) -> Result<Vec<String>, String> {
    let args = args.unwrap_or_default();
    match policy {
        PolicyKind::NamedFile => match args.as_slice() {
            [Value::String(name)] => Ok(vec![name.clone()]),
            [_] => Err("named_file requires its argument to be a file name string".to_string()),
            _ => Err(format!(
                "named_file requires exactly one argument, got {}",
                args.len()
            )),
        },
        _ => {
            if args.is_empty() {
                Ok(vec![])
            } else {
                Err(format!("policy '{}' takes no arguments", policy))
            }
        }
    }
}

/// Expand one condition object into typed predicates.
///
/// A condition object may carry several recognized keys at once; each becomes
/// one predicate in the rule's conjunction. An object with no recognized key
/// is malformed.
fn validate_condition(raw: RawCondition) -> Result<Vec<Condition>, String> {
    if let Some(key) = raw.unknown.keys().next() {
        return Err(format!("unrecognized condition key '{}'", key));
    }

    let mut out = Vec::new();
    if let Some(token) = raw.kind {
        let kind = EventKind::parse_token(&token)
            .ok_or_else(|| format!("unknown event type '{}'", token))?;
        out.push(Condition::Kind(kind));
    }
    if let Some(unicode) = raw.unicode {
        if let Some(key) = unicode.unknown.keys().next() {
            return Err(format!("unrecognized unicode condition key '{}'", key));
        }
        if let Some(value) = unicode.value {
            let s = value
                .as_str()
                .ok_or_else(|| "unicode.value must be a string".to_string())?;
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => out.push(Condition::CharEquals(c)),
                _ => {
                    return Err(format!(
                        "unicode.value must be exactly one character, got '{}'",
                        s
                    ));
                }
            }
        }
        if let Some(v) = unicode.isalpha {
            let flag = v
                .as_bool()
                .ok_or_else(|| "unicode.isalpha must be a boolean".to_string())?;
            out.push(Condition::IsAlpha(flag));
        }
        if let Some(v) = unicode.isdigit {
            let flag = v
                .as_bool()
                .ok_or_else(|| "unicode.isdigit must be a boolean".to_string())?;
            out.push(Condition::IsDigit(flag));
        }
    }

    if out.is_empty() {
        return Err("condition has no recognized keys".to_string());
    }
    Ok(out)
}
