//! Built-in value types.

/// Names of built-in types that never denote a domain entity.
const BASIC_TYPES: &[&str] = &[
    "bool",
    "string",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
    "byte",
    "rune",
    "float32",
    "float64",
    "complex64",
    "complex128",
    "any",
    "interface{}",
];

/// Returns `true` if `name` is a built-in value type.
///
/// The test is an exact, case-sensitive match.
///
/// # Examples
///
/// ```
/// use dddmap_parser::is_basic_type;
///
/// assert!(is_basic_type("string"));
/// assert!(!is_basic_type("String"));
/// assert!(!is_basic_type("User"));
/// ```
pub fn is_basic_type(name: &str) -> bool {
    BASIC_TYPES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_basic_type() {
        let cases = [
            ("string", true),
            ("int", true),
            ("bool", true),
            ("any", true),
            ("byte", true),
            ("complex128", true),
            ("interface{}", true),
            ("unknown", false),
            ("User", false),
        ];

        for (name, expected) in cases {
            assert_eq!(is_basic_type(name), expected, "is_basic_type({name:?})");
        }
    }

    #[test]
    fn test_is_basic_type_is_exact() {
        assert!(!is_basic_type("int6"));
        assert!(!is_basic_type("strings"));
        assert!(!is_basic_type("Bool"));
        assert!(!is_basic_type(""));
    }
}
