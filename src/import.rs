//! Database import and validation.
//!
//! Turns an externally supplied document into a [`TraitGraph`]. Checks run
//! in a fixed order and the first failure is returned:
//!
//! 1. the text parses as JSON
//! 2. `traits` is an array
//! 3. `links` is an array
//! 4. every trait has an id, at least one label and a known polarity,
//!    and no id repeats
//! 5. every link has both endpoints and a known type
//!
//! Link endpoints are *not* checked against the trait set. A link to an
//! unknown trait is kept and silently resolves to nothing at query time.

use hashbrown::HashSet;
use serde_json::{Map, Value};

use crate::model::*;
use crate::storage::TraitGraph;

/// Why a document was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Invalid database: missing traits array")]
    MissingTraitsArray,

    #[error("Invalid database: missing links array")]
    MissingLinksArray,

    #[error("Invalid trait structure at index {index}: {reason}")]
    InvalidTrait { index: usize, reason: String },

    #[error("Invalid polarity value {value:?} for trait '{id}' at index {index}")]
    InvalidPolarity { index: usize, id: String, value: String },

    #[error("Duplicate trait id '{id}' at index {index}")]
    DuplicateTraitId { index: usize, id: String },

    #[error("Invalid link structure at index {index}: {reason}")]
    InvalidLink { index: usize, reason: String },

    #[error("Invalid link type {value:?} at index {index}")]
    InvalidLinkType { index: usize, value: String },
}

type Result<T> = std::result::Result<T, ValidationError>;

// ============================================================================
// Entry points
// ============================================================================

/// Parse and validate raw JSON text.
pub fn validate(raw: &str) -> Result<TraitGraph> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| ValidationError::MalformedPayload(e.to_string()))?;
    validate_value(&value)
}

/// Validate an already-parsed JSON document.
pub fn validate_value(value: &Value) -> Result<TraitGraph> {
    let raw_traits = value
        .get("traits")
        .and_then(Value::as_array)
        .ok_or(ValidationError::MissingTraitsArray)?;
    let raw_links = value
        .get("links")
        .and_then(Value::as_array)
        .ok_or(ValidationError::MissingLinksArray)?;

    let mut seen = HashSet::with_capacity(raw_traits.len());
    let mut traits = Vec::with_capacity(raw_traits.len());
    for (index, raw) in raw_traits.iter().enumerate() {
        let node = parse_trait(index, raw)?;
        if !seen.insert(node.id.clone()) {
            return Err(ValidationError::DuplicateTraitId { index, id: node.id.0 });
        }
        traits.push(node);
    }

    let links = raw_links
        .iter()
        .enumerate()
        .map(|(index, raw)| parse_link(index, raw))
        .collect::<Result<Vec<_>>>()?;

    Ok(TraitGraph::from_parts(traits, links))
}

/// Validate a typed document (e.g. one assembled in code).
///
/// Polarity and link type are already enforced by the types, so only the
/// structural checks apply.
pub fn validate_payload(payload: GraphPayload) -> Result<TraitGraph> {
    let mut seen = HashSet::with_capacity(payload.traits.len());
    for (index, node) in payload.traits.iter().enumerate() {
        if node.id.as_str().is_empty() {
            return Err(invalid_trait(index, "missing id"));
        }
        if node.labels.is_empty() {
            return Err(invalid_trait(index, "missing labels"));
        }
        if let Some(pos) = node.labels.iter().position(|l| l.is_empty()) {
            return Err(invalid_trait(index, format!("label {pos} is empty")));
        }
        if !seen.insert(node.id.clone()) {
            return Err(ValidationError::DuplicateTraitId { index, id: node.id.to_string() });
        }
    }
    for (index, link) in payload.links.iter().enumerate() {
        if link.from.as_str().is_empty() {
            return Err(invalid_link(index, "missing 'from'"));
        }
        if link.to.as_str().is_empty() {
            return Err(invalid_link(index, "missing 'to'"));
        }
    }
    Ok(TraitGraph::from_parts(payload.traits, payload.links))
}

// ============================================================================
// Element parsers
// ============================================================================

fn parse_trait(index: usize, raw: &Value) -> Result<TraitNode> {
    let obj = raw
        .as_object()
        .ok_or_else(|| invalid_trait(index, "not an object"))?;

    let id = non_empty_str(obj, "id").ok_or_else(|| invalid_trait(index, "missing id"))?;
    let labels = parse_labels(index, obj)?;

    let polarity = match obj.get("polarity") {
        None | Some(Value::Null) => return Err(invalid_trait(index, "missing polarity")),
        Some(Value::String(s)) if s.is_empty() => {
            return Err(invalid_trait(index, "missing polarity"));
        }
        Some(Value::String(s)) => Polarity::parse(s).ok_or_else(|| ValidationError::InvalidPolarity {
            index,
            id: id.to_string(),
            value: s.clone(),
        })?,
        Some(other) => {
            return Err(ValidationError::InvalidPolarity {
                index,
                id: id.to_string(),
                value: other.to_string(),
            });
        }
    };

    Ok(TraitNode { id: TraitId::from(id), labels, polarity })
}

/// `labels: [..]`, or the older single-string `label` form.
fn parse_labels(index: usize, obj: &Map<String, Value>) -> Result<Labels> {
    match obj.get("labels") {
        Some(Value::Array(items)) => {
            if items.is_empty() {
                return Err(invalid_trait(index, "labels array is empty"));
            }
            items
                .iter()
                .enumerate()
                .map(|(pos, item)| match item.as_str() {
                    Some(s) if !s.is_empty() => Ok(s.to_string()),
                    _ => Err(invalid_trait(index, format!("label {pos} is not a non-empty string"))),
                })
                .collect()
        }
        Some(_) => Err(invalid_trait(index, "labels is not an array")),
        None => match non_empty_str(obj, "label") {
            Some(label) => Ok(Labels::from_iter([label.to_string()])),
            None => Err(invalid_trait(index, "missing labels")),
        },
    }
}

fn parse_link(index: usize, raw: &Value) -> Result<TraitLink> {
    let obj = raw
        .as_object()
        .ok_or_else(|| invalid_link(index, "not an object"))?;

    let from = non_empty_str(obj, "from").ok_or_else(|| invalid_link(index, "missing 'from'"))?;
    let to = non_empty_str(obj, "to").ok_or_else(|| invalid_link(index, "missing 'to'"))?;

    let kind = match obj.get("type") {
        None | Some(Value::Null) => return Err(invalid_link(index, "missing 'type'")),
        Some(Value::String(s)) if s.is_empty() => return Err(invalid_link(index, "missing 'type'")),
        Some(Value::String(s)) => LinkKind::parse(s).ok_or_else(|| ValidationError::InvalidLinkType {
            index,
            value: s.clone(),
        })?,
        Some(other) => {
            return Err(ValidationError::InvalidLinkType { index, value: other.to_string() });
        }
    };

    Ok(TraitLink::new(from, to, kind))
}

fn non_empty_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn invalid_trait(index: usize, reason: impl Into<String>) -> ValidationError {
    ValidationError::InvalidTrait { index, reason: reason.into() }
}

fn invalid_link(index: usize, reason: impl Into<String>) -> ValidationError {
    ValidationError::InvalidLink { index, reason: reason.into() }
}

// ============================================================================
// Tests
// ============================================================================
