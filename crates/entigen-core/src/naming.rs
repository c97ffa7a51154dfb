/// Uppercase the first character, leaving the rest untouched.
pub fn ucfirst(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Class name generated for a table: `prefix + ucfirst(table)`.
pub fn class_name(prefix: &str, table: &str) -> String {
    format!("{prefix}{}", ucfirst(table))
}

/// Whether a column name designates the entity identifier.
pub fn is_identifier_column(name: &str) -> bool {
    name.eq_ignore_ascii_case("id")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ucfirst_only_touches_first_char() {
        assert_eq!(ucfirst("user_accounts"), "User_accounts");
        assert_eq!(ucfirst("createdAt"), "CreatedAt");
        assert_eq!(ucfirst("ébène"), "Ébène");
        assert_eq!(ucfirst(""), "");
    }

    #[test]
    fn class_name_prepends_prefix() {
        assert_eq!(class_name("", "product"), "Product");
        assert_eq!(class_name("Legacy", "product"), "LegacyProduct");
        assert_eq!(class_name("legacy", "product"), "legacyProduct");
    }

    #[test]
    fn identifier_is_case_insensitive() {
        assert!(is_identifier_column("id"));
        assert!(is_identifier_column("ID"));
        assert!(!is_identifier_column("user_id"));
    }
}
