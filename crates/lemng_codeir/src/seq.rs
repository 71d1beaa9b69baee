//! Render sequences where the final element is formatted differently.
//!
//! Every bracketed group in a generated harness ends with an element that must not carry the separator the other
//! elements carry (`a, b, c` rather than `a, b, c,`). All emitters route that decision through [`map_with_last`] so
//! separator placement is decided in exactly one place.
//!
//! ## Examples
//! ```rust
//! use lemng_codeir::seq::{initializer_list, join_with_last};
//!
//! let joined = join_with_last(&[1, 2, 3], |n| format!("{n}, "), |n| n.to_string());
//! assert_eq!(joined, "1, 2, 3");
//! assert_eq!(initializer_list(&[4.5, 7.0]), "{ 4.5, 7 }");
//! assert_eq!(initializer_list::<f64>(&[]), "{  }");
//! ```

use std::fmt::Display;

/// Map every element with `default` except the final one, which is mapped with `last`.
///
/// An empty slice yields an empty vector; a single element is only ever passed to `last`.
pub fn map_with_last<T, R>(items: &[T], default: impl FnMut(&T) -> R, last: impl FnOnce(&T) -> R) -> Vec<R> {
    let Some((final_item, leading)) = items.split_last() else {
        return Vec::new();
    };

    let mut mapped: Vec<R> = leading.iter().map(default).collect();
    mapped.push(last(final_item));
    mapped
}

/// Map every element with the same transform.
///
/// Equivalent to [`map_with_last`] with `last == default`.
pub fn map_uniform<T, R>(items: &[T], transform: impl FnMut(&T) -> R) -> Vec<R> {
    items.iter().map(transform).collect()
}

/// Concatenate the output of [`map_with_last`].
pub fn join_with_last<T>(items: &[T], default: impl FnMut(&T) -> String, last: impl FnOnce(&T) -> String) -> String {
    map_with_last(items, default, last).concat()
}

/// Render `items` separated by `separator`, without a trailing separator.
pub fn separated<T: Display>(items: &[T], separator: &str) -> String {
    join_with_last(items, |item| format!("{item}{separator}"), |item| item.to_string())
}

/// Suffix every element with `suffix` except the last one.
///
/// Used for one-element-per-line lists such as identifier vectors and map entries.
pub fn suffix_all_but_last<T: Display>(items: &[T], suffix: &str) -> Vec<String> {
    map_with_last(items, |item| format!("{item}{suffix}"), |item| item.to_string())
}

/// Render a brace initializer list: `{ a, b, c }`.
///
/// The padding spaces are kept for an empty list, which renders as `{  }`.
pub fn initializer_list<T: Display>(items: &[T]) -> String {
    format!("{{ {} }}", separated(items, ", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // map_with_last tests
    // ========================================

    #[test]
    fn test_map_with_last_empty() {
        let mapped = map_with_last::<i32, String>(&[], |_| "x".into(), |_| "y".into());
        assert!(mapped.is_empty());
    }

    #[test]
    fn test_map_with_last_single_uses_last_only() {
        let mapped = map_with_last(&[1], |n| format!("d{n}"), |n| format!("l{n}"));
        assert_eq!(mapped, vec!["l1"]);
    }

    #[test]
    fn test_map_with_last_many() {
        let mapped = map_with_last(&[1, 2, 3], |n| format!("d{n}"), |n| format!("l{n}"));
        assert_eq!(mapped, vec!["d1", "d2", "l3"]);
    }

    #[test]
    fn test_map_uniform_applies_same_transform() {
        let mapped = map_uniform(&["a", "b"], |s| s.to_uppercase());
        assert_eq!(mapped, vec!["A", "B"]);
    }

    // ========================================
    // Separator helpers
    // ========================================

    #[test]
    fn test_separated_no_trailing_separator() {
        assert_eq!(separated(&["a", "b", "c"], ", "), "a, b, c");
        assert_eq!(separated(&["a"], ", "), "a");
        assert_eq!(separated::<&str>(&[], ", "), "");
    }

    #[test]
    fn test_suffix_all_but_last() {
        assert_eq!(suffix_all_but_last(&["x", "y"], ","), vec!["x,", "y"]);
    }

    #[test]
    fn test_initializer_list_shapes() {
        assert_eq!(initializer_list(&["1.5"]), "{ 1.5 }");
        assert_eq!(initializer_list(&["0.0", "40.1"]), "{ 0.0, 40.1 }");
        assert_eq!(initializer_list::<&str>(&[]), "{  }");
    }
}
