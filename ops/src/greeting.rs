//! Greeting formatting.

/// Format a fixed-pattern greeting for `name`.
///
/// The output is exactly `"Hello, "` + `name` + `"!"`. The name is
/// interpolated verbatim: no trimming, no escaping, no validation.
#[inline]
#[must_use]
pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

#[cfg(test)]
mod tests {
    use super::greet;

    #[test]
    fn greets_world() {
        assert_eq!(greet("World"), "Hello, World!");
    }

    #[test]
    fn empty_name_keeps_the_pattern() {
        assert_eq!(greet(""), "Hello, !");
    }

    #[test]
    fn interpolates_verbatim_without_trimming() {
        assert_eq!(greet("  padded  "), "Hello,   padded  !");
    }

    #[test]
    fn non_ascii_names_pass_through() {
        assert_eq!(greet("世界"), "Hello, 世界!");
    }
}
