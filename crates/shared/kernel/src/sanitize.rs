use serde_json::Value;

/// Removes every absent-valued (`null`) entry from a JSON mapping, in place,
/// recursing into nested mappings.
///
/// Arrays and scalars are left intact: only entries whose value is absent are
/// pruned, never falsy-but-present values such as `0`, `false`, or `""`.
/// Entries holding an empty nested mapping are kept (the mapping itself is
/// pruned inside, not removed). Non-mapping inputs are left untouched.
///
/// Sanitizing an already-sanitized value is a no-op.
pub fn sanitize(value: &mut Value) {
    if let Value::Object(map) = value {
        map.retain(|_, entry| !entry.is_null());
        for entry in map.values_mut() {
            if entry.is_object() {
                sanitize(entry);
            }
        }
    }
}

/// Returns `true` if `value` is a mapping with no keys at all.
///
/// This counts raw keys: a mapping that still holds absent-valued entries is
/// not empty. Callers that want to skip sending an empty payload check this
/// themselves; [`sanitize`] never does.
#[must_use]
pub fn is_empty_object(value: &Value) -> bool {
    matches!(value, Value::Object(map) if map.is_empty())
}
