//! Path-addressed access into JSON values.
//!
//! Paths use the same grammar the diff engine emits: dot-separated keys,
//! each optionally followed by bracket selectors.
//!
//! ```text
//! configs.routes[id=home].enabled
//! tests[2].status
//! [0].title
//! ```
//!
//! `[N]` selects an array index, `[id=V]` / `[slug=V]` select the array
//! element whose string field equals `V`.

use crate::errors::{FlyError, Result};
use serde_json::{Map, Value};

/// One step of a parsed path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object key
    Key(String),
    /// Array position
    Index(usize),
    /// Array element whose string `field` equals `value`
    Match { field: String, value: String },
}

fn invalid(path: &str, reason: impl Into<String>) -> FlyError {
    FlyError::InvalidPath {
        path: path.to_string(),
        reason: reason.into(),
    }
}

/// Parse a path into segments
///
/// The empty path parses to no segments (the root).
///
/// # Errors
///
/// Returns `InvalidPath` for empty keys (`a..b`), unterminated or empty
/// brackets, and selectors that are neither an index nor `field=value`.
pub fn parse_path(path: &str) -> std::result::Result<Vec<PathSegment>, FlyError> {
    let mut segments = Vec::new();
    if path.is_empty() {
        return Ok(segments);
    }

    let mut chars = path.chars().peekable();
    let mut key = String::new();
    // True right after a `.`; a key must follow
    let mut expect_key = false;
    // True once anything was read for the current dotted part
    let mut part_started = false;

    while let Some(c) = chars.next() {
        match c {
            '.' => {
                if !key.is_empty() {
                    segments.push(PathSegment::Key(std::mem::take(&mut key)));
                } else if !part_started {
                    return Err(invalid(path, "empty key"));
                }
                expect_key = true;
                part_started = false;
            }
            '[' => {
                if !key.is_empty() {
                    segments.push(PathSegment::Key(std::mem::take(&mut key)));
                } else if expect_key {
                    return Err(invalid(path, "empty key before selector"));
                }
                let mut selector = String::new();
                let mut closed = false;
                for s in chars.by_ref() {
                    if s == ']' {
                        closed = true;
                        break;
                    }
                    selector.push(s);
                }
                if !closed {
                    return Err(invalid(path, "unterminated selector"));
                }
                segments.push(parse_selector(path, &selector)?);
                expect_key = false;
                part_started = true;
            }
            _ => {
                key.push(c);
                expect_key = false;
                part_started = true;
            }
        }
    }

    if !key.is_empty() {
        segments.push(PathSegment::Key(key));
    } else if expect_key {
        return Err(invalid(path, "trailing dot"));
    }

    Ok(segments)
}

fn parse_selector(path: &str, selector: &str) -> std::result::Result<PathSegment, FlyError> {
    if selector.is_empty() {
        return Err(invalid(path, "empty selector"));
    }
    if let Some((field, value)) = selector.split_once('=') {
        if field.is_empty() {
            return Err(invalid(path, "selector field is empty"));
        }
        return Ok(PathSegment::Match {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    selector
        .parse::<usize>()
        .map(PathSegment::Index)
        .map_err(|_| invalid(path, format!("'{}' is not an index", selector)))
}

fn find_match(items: &[Value], field: &str, value: &str) -> Option<usize> {
    items
        .iter()
        .position(|item| item.get(field).and_then(Value::as_str) == Some(value))
}

/// Read the value at `path`
///
/// Returns `None` for malformed paths and for any step that is missing or
/// hits the wrong type.
pub fn get_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let segments = parse_path(path).ok()?;
    let mut current = root;
    for segment in &segments {
        current = match segment {
            PathSegment::Key(k) => current.as_object()?.get(k)?,
            PathSegment::Index(i) => current.as_array()?.get(*i)?,
            PathSegment::Match { field, value } => {
                let items = current.as_array()?;
                let idx = find_match(items, field, value)?;
                &items[idx]
            }
        };
    }
    Some(current)
}

/// Write `value` at `path`
///
/// Missing object keys are created as empty objects along the way, and a
/// `null` met mid-path is replaced by an object. Array positions and
/// matches must already exist.
///
/// # Errors
///
/// Returns `InvalidPath` if the path does not parse, an index is out of
/// range, a match selects nothing, or the walk steps into a scalar.
pub fn set_path(root: &mut Value, path: &str, value: Value) -> Result<()> {
    let segments = parse_path(path)?;
    let Some((last, parents)) = segments.split_last() else {
        *root = value;
        return Ok(());
    };

    let mut current = root;
    for segment in parents {
        current = step_mut(current, segment, path)?;
    }

    match last {
        PathSegment::Key(k) => {
            if current.is_null() {
                *current = Value::Object(Map::new());
            }
            let obj = current
                .as_object_mut()
                .ok_or_else(|| invalid(path, format!("cannot set key '{}' on a non-object", k)))?;
            obj.insert(k.clone(), value);
        }
        PathSegment::Index(_) | PathSegment::Match { .. } => {
            let slot = step_mut(current, last, path)?;
            *slot = value;
        }
    }
    Ok(())
}

fn step_mut<'a>(current: &'a mut Value, segment: &PathSegment, path: &str) -> Result<&'a mut Value> {
    match segment {
        PathSegment::Key(k) => {
            if current.is_null() {
                *current = Value::Object(Map::new());
            }
            let obj = current
                .as_object_mut()
                .ok_or_else(|| invalid(path, format!("'{}' is under a non-object", k)))?;
            Ok(obj
                .entry(k.clone())
                .or_insert_with(|| Value::Object(Map::new())))
        }
        PathSegment::Index(i) => {
            let items = current
                .as_array_mut()
                .ok_or_else(|| invalid(path, format!("index [{}] on a non-array", i)))?;
            let len = items.len();
            items
                .get_mut(*i)
                .ok_or_else(|| invalid(path, format!("index [{}] out of range (len {})", i, len)).into())
        }
        PathSegment::Match { field, value } => {
            let items = current
                .as_array_mut()
                .ok_or_else(|| invalid(path, format!("[{}={}] on a non-array", field, value)))?;
            let idx = find_match(items, field, value)
                .ok_or_else(|| invalid(path, format!("no element with {}={}", field, value)))?;
            Ok(&mut items[idx])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_mixed_path() {
        let segs = parse_path("configs.routes[id=home].enabled").unwrap();
        assert_eq!(
            segs,
            vec![
                PathSegment::Key("configs".into()),
                PathSegment::Key("routes".into()),
                PathSegment::Match {
                    field: "id".into(),
                    value: "home".into()
                },
                PathSegment::Key("enabled".into()),
            ]
        );
    }

    #[test]
    fn test_parse_root_index() {
        let segs = parse_path("[0].title").unwrap();
        assert_eq!(
            segs,
            vec![PathSegment::Index(0), PathSegment::Key("title".into())]
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_path("a..b").is_err());
        assert!(parse_path("a.").is_err());
        assert!(parse_path("a[").is_err());
        assert!(parse_path("a[]").is_err());
        assert!(parse_path("a[x]").is_err());
        assert!(parse_path(".a").is_err());
    }
}
