//! Name derivation shared by the expander and the runtime.

/// Suffix every trait reference in a composition annotation must end with.
pub const TRAIT_SUFFIX: &str = "::TRAIT";

/// Prefix of the accessor trait generated next to each trait type.
pub const ACCESSOR_PREFIX: &str = "With";

/// Derives the slot name for a trait type: the first character lower-cased,
/// the rest unchanged.
///
/// ```
/// use strata_decl::field_name_for;
///
/// assert_eq!(field_name_for("Abc"), "abc");
/// assert_eq!(field_name_for("HttpClient"), "httpClient");
/// assert_eq!(field_name_for(""), "");
/// ```
#[must_use]
pub fn field_name_for(type_name: &str) -> String {
    let mut chars = type_name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derives the accessor trait name for a trait type, e.g. `Abc` -> `WithAbc`.
#[must_use]
pub fn accessor_trait_for(type_name: &str) -> String {
    format!("{ACCESSOR_PREFIX}{type_name}")
}

/// Keywords that must be written as raw identifiers (`r#match`) when used as
/// a field or method name.
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be identifiers at all, not even raw ones.
const RESERVED_KEYWORDS: &[&str] = &["_", "crate", "self", "Self", "super"];

/// Returns `true` if `name` is a keyword that needs the `r#` prefix to be
/// used as an identifier.
///
/// ```
/// use strata_decl::needs_raw_identifier;
///
/// assert!(needs_raw_identifier("match"));
/// assert!(!needs_raw_identifier("matcher"));
/// ```
#[must_use]
pub fn needs_raw_identifier(name: &str) -> bool {
    RAW_KEYWORDS.contains(&name)
}

/// Returns `true` if `name` can never be a field name.
#[must_use]
pub fn is_reserved_name(name: &str) -> bool {
    RESERVED_KEYWORDS.contains(&name)
}

/// Returns `true` if `segment` can be used as a path segment.
pub(crate) fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_only_first_character() {
        assert_eq!(field_name_for("Abc"), "abc");
        assert_eq!(field_name_for("Xyz"), "xyz");
        assert_eq!(field_name_for("ABC"), "aBC");
        assert_eq!(field_name_for("abc"), "abc");
    }

    #[test]
    fn handles_non_ascii_first_character() {
        assert_eq!(field_name_for("Éclair"), "éclair");
    }

    #[test]
    fn accessor_is_prefixed() {
        assert_eq!(accessor_trait_for("Fooer"), "WithFooer");
    }

    #[test]
    fn keyword_field_names() {
        assert!(needs_raw_identifier(&field_name_for("Match")));
        assert!(needs_raw_identifier(&field_name_for("Type")));
        assert!(needs_raw_identifier(&field_name_for("Loop")));
        assert!(!needs_raw_identifier(&field_name_for("Matcher")));

        assert!(is_reserved_name(&field_name_for("Crate")));
        assert!(is_reserved_name(&field_name_for("Super")));
        assert!(!is_reserved_name(&field_name_for("Match")));
    }

    #[test]
    fn identifiers() {
        assert!(is_identifier("Abc"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("r2d2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("Foo<u8>"));
    }
}
