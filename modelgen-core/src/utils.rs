//! Shared string transforms for turning database names into Java names.
//!
//! Database names are snake_case. Java identifiers are camelCase and class
//! names PascalCase. Digits never start a new word, so `address_line2`
//! survives a round trip through [`to_camel_case`] and [`camel_to_underscore`]
//! while `line_2` does not (it collapses to `line2`).

/// Convert a string to PascalCase (e.g., "test_schema" -> "TestSchema")
///
/// Both `_` and `-` separate words.
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a snake_case name to camelCase (e.g., "birth_date" -> "birthDate")
///
/// Idempotent: a name without separators is returned with only its first
/// character lowercased.
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a camelCase identifier back to snake_case (e.g., "birthDate" -> "birth_date")
///
/// Every uppercase letter starts a new word, so `httpURL` becomes `http_u_r_l`.
pub fn camel_to_underscore(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}
