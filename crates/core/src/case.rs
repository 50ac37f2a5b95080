//! Case conversion for vendor payload keys and event names.

/// Convert a property key or event name to `snake_case`.
///
/// Word boundaries are runs of non-alphanumeric characters plus each
/// uppercase letter that follows a lowercase letter or digit; boundaries
/// collapse to single underscores and everything is lowercased. Runs of
/// uppercase letters do not split internally, so `"OrderId"` becomes
/// `"order_id"` while `"APIKey"` becomes `"apikey"`, and already-snake
/// input passes through unchanged.
pub fn snake_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut boundary = false;
    let mut prev_lower_or_digit = false;

    for ch in input.chars() {
        if ch.is_alphanumeric() {
            if ch.is_uppercase() && prev_lower_or_digit {
                boundary = true;
            }
            if boundary && !out.is_empty() {
                out.push('_');
            }
            boundary = false;
            out.extend(ch.to_lowercase());
            prev_lower_or_digit = ch.is_lowercase() || ch.is_ascii_digit();
        } else {
            boundary = true;
            prev_lower_or_digit = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_boundaries() {
        assert_eq!(snake_case("OrderId"), "order_id");
        assert_eq!(snake_case("myKey"), "my_key");
        assert_eq!(snake_case("myCustomKey"), "my_custom_key");
        assert_eq!(snake_case("item2Buy"), "item2_buy");
    }

    #[test]
    fn test_uppercase_runs_do_not_split() {
        assert_eq!(snake_case("APIKey"), "apikey");
        assert_eq!(snake_case("SKU"), "sku");
    }

    #[test]
    fn test_separators_collapse_to_underscores() {
        assert_eq!(snake_case("Event A"), "event_a");
        assert_eq!(snake_case("Viewed Category Name Page"), "viewed_category_name_page");
        assert_eq!(snake_case("my-custom key"), "my_custom_key");
        assert_eq!(snake_case("a  --  b"), "a_b");
    }

    #[test]
    fn test_already_snake_unchanged() {
        assert_eq!(snake_case("order_id"), "order_id");
        assert_eq!(snake_case("sku"), "sku");
    }

    #[test]
    fn test_edges_trimmed() {
        assert_eq!(snake_case(" padded "), "padded");
        assert_eq!(snake_case("_leading"), "leading");
        assert_eq!(snake_case("trailing_"), "trailing");
        assert_eq!(snake_case(""), "");
    }
}
