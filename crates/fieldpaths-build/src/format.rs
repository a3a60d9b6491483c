use convert_case::{Case, Casing};

/// Used when a raw name has no alphanumeric characters at all.
const EMPTY_NAME: &str = "FIELD";

/// Map a raw field name to the constant identifier generated for it.
///
/// The result depends on the raw name alone, so formatting must always be
/// applied to the original field name and never to an already formatted
/// one. Distinct raw names are not guaranteed distinct results; sibling
/// collisions are reported when the tree is rendered.
#[must_use]
pub fn format_field_name(raw: &str) -> String {
    // separators and symbols become word breaks
    let normalized: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let formatted = normalized.to_case(Case::UpperSnake);

    if formatted.chars().all(|c| c == '_') {
        EMPTY_NAME.to_string()
    } else if formatted.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{formatted}")
    } else {
        formatted
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn camel_case_becomes_upper_snake() {
        assert_eq!(format_field_name("name"), "NAME");
        assert_eq!(format_field_name("firstName"), "FIRST_NAME");
        assert_eq!(format_field_name("bestFriend"), "BEST_FRIEND");
    }

    #[test]
    fn snake_and_separated_names_become_upper_snake() {
        assert_eq!(format_field_name("zip_code"), "ZIP_CODE");
        assert_eq!(format_field_name("zip-code"), "ZIP_CODE");
        assert_eq!(format_field_name("zip$code"), "ZIP_CODE");
    }

    #[test]
    fn names_without_letters_still_yield_identifiers() {
        assert_eq!(format_field_name(""), EMPTY_NAME);
        assert_eq!(format_field_name("$"), EMPTY_NAME);
        assert_eq!(format_field_name("__"), EMPTY_NAME);
    }

    #[test]
    fn leading_digit_is_escaped() {
        let formatted = format_field_name("1st");
        assert!(formatted.starts_with('_'), "got {formatted}");
    }

    proptest! {
        #[test]
        fn output_is_a_constant_identifier(raw in "\\PC{0,24}") {
            let formatted = format_field_name(&raw);

            prop_assert!(!formatted.is_empty());
            prop_assert!(!formatted.starts_with(|c: char| c.is_ascii_digit()));
            prop_assert!(formatted.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'));
            prop_assert!(syn::parse_str::<syn::Ident>(&formatted).is_ok());
        }

        #[test]
        fn formatting_is_deterministic(raw in "[a-zA-Z_][a-zA-Z0-9_]{0,16}") {
            prop_assert_eq!(format_field_name(&raw), format_field_name(&raw));
        }
    }
}
