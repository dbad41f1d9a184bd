//! Deterministic slug generation for externally addressable records.

const MAX_SLUG_LEN: usize = 80;

/// Convert arbitrary text into a URL-safe, lowercase, hyphen-delimited slug.
///
/// ASCII alphanumerics are lowercased, runs of other ASCII characters
/// collapse into a single hyphen, and non-ASCII characters are dropped. The
/// result never starts or ends with a hyphen.
pub fn slugify(input: &str) -> String {
    let mut slug = String::new();
    let mut last_was_dash = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_dash = false;
        } else if ch.is_ascii() {
            if !slug.is_empty() && !last_was_dash {
                slug.push('-');
                last_was_dash = true;
            }
        }
        // Non-ASCII characters are skipped entirely.
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.len() > MAX_SLUG_LEN {
        slug.truncate(MAX_SLUG_LEN);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic_cases() {
        assert_eq!(slugify("Red Shoes"), "red-shoes");
        assert_eq!(slugify("emoji 😀 test"), "emoji-test");
        assert_eq!(slugify("foo/bar\\baz"), "foo-bar-baz");
    }

    #[test]
    fn slugify_is_deterministic() {
        assert_eq!(slugify("Red Shoes"), slugify("Red Shoes"));
    }

    #[test]
    fn slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("a -- b!!c"), "a-b-c");
    }

    #[test]
    fn slugify_truncates_and_cleans() {
        let long = "a".repeat(100);
        let slug = slugify(&long);
        assert_eq!(slug.len(), MAX_SLUG_LEN);
        assert!(slug.chars().all(|c| c == 'a'));
    }
}
