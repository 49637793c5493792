use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Keys that are never accepted as field names.
///
/// These are the reserved property names of the object root in JavaScript
/// runtimes. Forms are routinely relayed to such runtimes, so a field called
/// `__proto__` is rejected outright, whatever its value.
///
/// * `__proto__` - legacy prototype accessor
/// * `prototype` - function prototype property
/// * `constructor` - object constructor reference
pub static FORBIDDEN_KEYS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["__proto__", "prototype", "constructor"]));

pub fn is_forbidden_key(key: &str) -> bool {
    FORBIDDEN_KEYS.contains(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_prototype_pollution_primitives() {
        assert!(is_forbidden_key("__proto__"));
        assert!(is_forbidden_key("prototype"));
        assert!(is_forbidden_key("constructor"));
        assert_eq!(FORBIDDEN_KEYS.len(), 3);
    }

    #[test]
    fn test_common_object_keys_are_allowed() {
        assert!(!is_forbidden_key("toString"));
        assert!(!is_forbidden_key("hasOwnProperty"));
        assert!(!is_forbidden_key("valueOf"));
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(!is_forbidden_key("a[b]"));
        assert!(!is_forbidden_key("items[]"));
        assert!(!is_forbidden_key("__PROTO__"));
        assert!(!is_forbidden_key(" constructor"));
        assert!(!is_forbidden_key("user[__proto__]"));
    }
}
