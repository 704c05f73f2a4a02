//! The roadmap-payload extraction heuristic.
//!
//! Roadmap documents come in two layouts: the topic map bare at the top
//! level, or nested under one descriptive wrapper key (usually a domain
//! name). Neither layout carries a schema marker, so the payload is located
//! by shape: a mapping whose first value looks like a roadmap entry.
//!
//! Insertion-order iteration is load-bearing here. `serde_yaml::Mapping`
//! preserves document order, and "first key wins" is contractual: when a
//! document mixes qualifying and non-qualifying keys, the first qualifying
//! one is chosen.

use serde_yaml::{Mapping, Value};

/// Locate the roadmap payload inside an arbitrary parsed YAML tree.
///
/// Checks are applied in strict order, first match wins:
///
/// 1. The tree itself is payload-shaped: return it unchanged.
/// 2. The tree is a single-key wrapper around a payload: return the
///    unwrapped value.
/// 3. Scan every top-level key in document order and return the first
///    value that is payload-shaped.
///
/// Returns `None` when the tree is not a mapping, is empty, or holds no
/// payload-shaped value. Never panics; purely a read of `tree`.
pub fn extract(tree: &Value) -> Option<&Mapping> {
    let map = tree.as_mapping()?;

    if is_payload(tree) {
        return Some(map);
    }

    if map.len() == 1 {
        let (_, inner) = map.iter().next()?;
        if is_payload(inner) {
            return inner.as_mapping();
        }
    }

    map.values()
        .find(|value| is_payload(value))
        .and_then(Value::as_mapping)
}

/// Shape test for a payload candidate: a non-empty mapping whose *first*
/// value is a mapping carrying both `title` and `description` keys.
///
/// Only presence is checked; the field values are not type-checked further.
fn is_payload(value: &Value) -> bool {
    let Some(map) = value.as_mapping() else {
        return false;
    };
    let Some((_, first)) = map.iter().next() else {
        return false;
    };
    first.get("title").is_some() && first.get("description").is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).expect("test YAML must parse")
    }

    #[test]
    fn direct_match_returns_the_tree_itself() {
        let tree = parse(
            r#"
t1:
  title: A
  description: B
"#,
        );
        let payload = extract(&tree).expect("payload");
        assert_eq!(Some(payload), tree.as_mapping());
        assert!(payload.contains_key("t1"));
    }

    #[test]
    fn single_wrapper_is_unwrapped() {
        let tree = parse(
            r#"
frontend:
  t1:
    title: A
    description: B
"#,
        );
        let payload = extract(&tree).expect("payload");
        assert!(payload.contains_key("t1"));
        assert!(!payload.contains_key("frontend"));
    }

    #[test]
    fn any_wrapper_key_works() {
        for wrapper in ["devops", "some long wrapper", "123"] {
            let tree = parse(&format!(
                "\"{wrapper}\":\n  t1:\n    title: A\n    description: B\n"
            ));
            let payload = extract(&tree).expect("payload");
            assert!(payload.contains_key("t1"), "wrapper {wrapper}");
        }
    }

    #[test]
    fn scan_picks_first_qualifying_key_in_document_order() {
        let tree = parse(
            r#"
metadata: just a string
topics:
  t1:
    title: A
    description: B
more_topics:
  t2:
    title: C
    description: D
"#,
        );
        let payload = extract(&tree).expect("payload");
        assert!(payload.contains_key("t1"));
        assert!(!payload.contains_key("t2"));
    }

    #[test]
    fn first_key_decides_the_direct_match() {
        // First value lacks description, so the tree is not itself a
        // payload; the scan then finds the nested one.
        let tree = parse(
            r#"
intro:
  title: only a title
topics:
  t1:
    title: A
    description: B
"#,
        );
        let payload = extract(&tree).expect("payload");
        assert!(payload.contains_key("t1"));
    }

    #[test]
    fn entry_missing_description_is_rejected() {
        let tree = parse(
            r#"
t1:
  title: A
"#,
        );
        assert!(extract(&tree).is_none());
    }

    #[test]
    fn non_mapping_inputs_yield_none() {
        assert!(extract(&Value::Null).is_none());
        assert!(extract(&parse("just a string")).is_none());
        assert!(extract(&parse("- a\n- b")).is_none());
        assert!(extract(&parse("42")).is_none());
    }

    #[test]
    fn empty_mapping_yields_none() {
        assert!(extract(&parse("{}")).is_none());
    }

    #[test]
    fn optional_resources_do_not_affect_detection() {
        let tree = parse(
            r#"
t1:
  title: A
  description: B
  resources:
    - type: video
      title: Intro
      url: https://example.com
"#,
        );
        assert!(extract(&tree).is_some());
    }
}
