use crate::variables::VariableMap;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// `{{identifier}}` where identifier is word characters only
static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").unwrap());

/// Replace `{{token}}` placeholders in a single string.
///
/// Lookup order is `overrides` first, then `vars`. Tokens with no match
/// are left in place verbatim, so content renders with a visible
/// `{{unknownVar}}` instead of failing. Replacement is one pass, left to
/// right; a substituted value that itself contains `{{...}}` is not
/// scanned again.
pub fn substitute(text: &str, vars: &VariableMap, overrides: Option<&VariableMap>) -> String {
    TOKEN
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let key = &caps[1];
            let value = overrides
                .and_then(|map| map.get(key))
                .or_else(|| vars.get(key));

            match value {
                Some(v) => v.clone(),
                None => {
                    if cfg!(debug_assertions) {
                        log::warn!(
                            "unresolved token '{{{{{}}}}}' in \"{}\"",
                            key,
                            snippet(text)
                        );
                    }
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}

/// Apply [`substitute`] to every string leaf of a JSON tree.
///
/// Structural: object keys are never rewritten, array order and length
/// are preserved, and non-string scalars pass through untouched. Always
/// returns a fresh tree; the input is shared immutable data and is
/// never mutated.
pub fn deep_substitute(node: &Value, vars: &VariableMap, overrides: Option<&VariableMap>) -> Value {
    match node {
        Value::String(text) => Value::String(substitute(text, vars, overrides)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| deep_substitute(item, vars, overrides))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), deep_substitute(value, vars, overrides)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Collect every `{{token}}` name appearing in a content tree.
///
/// Used by validation tooling to lint authored content against the
/// variable map before a site ships.
pub fn collect_tokens(node: &Value, out: &mut std::collections::BTreeSet<String>) {
    match node {
        Value::String(text) => {
            for caps in TOKEN.captures_iter(text) {
                out.insert(caps[1].to_string());
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_tokens(item, out);
            }
        }
        Value::Object(map) => {
            for value in map.values() {
                collect_tokens(value, out);
            }
        }
        _ => {}
    }
}

/// Leading fragment of the surrounding text, for warning messages
fn snippet(text: &str) -> &str {
    match text.char_indices().nth(48) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vars(pairs: &[(&str, &str)]) -> VariableMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_text_without_tokens_is_unchanged() {
        let map = vars(&[("businessName", "Acme")]);
        let text = "Plain prose with no placeholders.";
        assert_eq!(substitute(text, &map, None), text);
    }

    #[test]
    fn test_resolvable_token_is_replaced() {
        let map = vars(&[("businessName", "Acme")]);
        assert_eq!(
            substitute("Hello {{businessName}}!", &map, None),
            "Hello Acme!"
        );
    }

    #[test]
    fn test_unknown_token_passes_through() {
        let map = vars(&[]);
        assert_eq!(substitute("{{unknownKey}}", &map, None), "{{unknownKey}}");
    }

    #[test]
    fn test_overrides_win_over_defaults() {
        let defaults = vars(&[("city", "Phoenix")]);
        let overrides = vars(&[("city", "Mesa")]);
        assert_eq!(
            substitute("Serving {{city}}", &defaults, Some(&overrides)),
            "Serving Mesa"
        );
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        // A value that happens to contain a token is emitted literally;
        // replacement is one pass, never iterative.
        let map = vars(&[("a", "{{b}}"), ("b", "X")]);
        assert_eq!(substitute("{{a}}", &map, None), "{{b}}");
    }

    #[test]
    fn test_multiple_tokens_left_to_right() {
        let map = vars(&[("establishedYear", "2015"), ("yearsInBusiness", "10")]);
        assert_eq!(
            substitute(
                "Serving since {{establishedYear}} — {{yearsInBusiness}} years strong",
                &map,
                None
            ),
            "Serving since 2015 — 10 years strong"
        );
    }

    #[test]
    fn test_malformed_tokens_are_ignored() {
        let map = vars(&[("city", "Phoenix")]);
        assert_eq!(substitute("{{city", &map, None), "{{city");
        assert_eq!(substitute("{ {city} }", &map, None), "{ {city} }");
        // Hyphens are not word characters, so this is not a token
        assert_eq!(substitute("{{city-name}}", &map, None), "{{city-name}}");
    }

    #[test]
    fn test_deep_substitute_rewrites_string_leaves_only() {
        let map = vars(&[("businessName", "Acme"), ("city", "Phoenix")]);
        let node = json!({
            "title": "{{businessName}} serves {{city}}",
            "count": 3,
            "active": true,
            "nothing": null,
            "items": ["{{city}}", 7, {"inner": "{{businessName}}"}]
        });

        let out = deep_substitute(&node, &map, None);
        assert_eq!(out["title"], "Acme serves Phoenix");
        assert_eq!(out["count"], 3);
        assert_eq!(out["active"], true);
        assert_eq!(out["nothing"], Value::Null);
        assert_eq!(out["items"][0], "Phoenix");
        assert_eq!(out["items"][1], 7);
        assert_eq!(out["items"][2]["inner"], "Acme");
    }

    #[test]
    fn test_deep_substitute_preserves_structure() {
        let map = vars(&[("city", "Phoenix")]);
        let node = json!({
            "a": ["{{city}}", "{{city}}", "{{city}}"],
            "b": {"x": 1, "y": "{{missing}}"}
        });

        let out = deep_substitute(&node, &map, None);
        assert_eq!(out["a"].as_array().unwrap().len(), 3);
        let keys: Vec<&String> = out["b"].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["x", "y"]);
        assert_eq!(out["b"]["y"], "{{missing}}");
    }

    #[test]
    fn test_deep_substitute_does_not_mutate_input() {
        let map = vars(&[("city", "Phoenix")]);
        let node = json!({"headline": "Best of {{city}}"});
        let snapshot = node.clone();

        let _ = deep_substitute(&node, &map, None);
        assert_eq!(node, snapshot);
    }

    #[test]
    fn test_collect_tokens_walks_the_tree() {
        let node = json!({
            "a": "{{businessName}} in {{city}}",
            "b": ["{{city}}", {"c": "{{phone}}"}],
            "d": 5
        });
        let mut tokens = std::collections::BTreeSet::new();
        collect_tokens(&node, &mut tokens);
        let found: Vec<&String> = tokens.iter().collect();
        assert_eq!(found, ["businessName", "city", "phone"]);
    }

    #[test]
    fn test_snippet_truncates_on_char_boundary() {
        let long = "é".repeat(100);
        assert_eq!(snippet(&long).chars().count(), 48);
        assert_eq!(snippet("short"), "short");
    }
}
