use regex::Regex;

lazy_static! {
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

pub fn file_slug(name: &str) -> String {
    WHITESPACE_REGEX
        .replace_all(name.trim().to_lowercase().as_str(), "-")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_to_single_hyphens() {
        assert_eq!(file_slug("NEON NIGHTS"), "neon-nights");
        assert_eq!(file_slug("  Warehouse   7  "), "warehouse-7");
        assert_eq!(file_slug("one\ttwo\nthree"), "one-two-three");
    }
}
