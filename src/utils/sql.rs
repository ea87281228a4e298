/// Escapes LIKE wildcards in user-supplied search input. The storage layer
/// always issues LIKE with `\` as the escape character.
pub fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_wildcards() {
        assert_eq!(escape_like_pattern("100%"), "100\\%");
        assert_eq!(escape_like_pattern("a_b"), "a\\_b");
        assert_eq!(escape_like_pattern("c\\d"), "c\\\\d");
        assert_eq!(escape_like_pattern("plain"), "plain");
    }
}
