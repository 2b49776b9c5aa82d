/// Fallback slug used when the input contains no usable characters.
pub const DEFAULT_SLUG: &str = "helpful-assistant";

/// Reduce free-form text to a safe identifier: lowercase, runs of
/// non-alphanumerics collapsed to single dashes, no leading/trailing
/// dash. Total and idempotent; empty or all-invalid input falls back
/// to [`DEFAULT_SLUG`].
pub fn slugify(value: &str) -> String {
    let mut out = String::new();
    let mut prev_was_dash = false;

    for ch in value.trim().chars() {
        let normalized = match ch {
            'a'..='z' | '0'..='9' => ch,
            'A'..='Z' => ch.to_ascii_lowercase(),
            _ => '-',
        };

        if normalized == '-' {
            if out.is_empty() || prev_was_dash {
                continue;
            }
            out.push('-');
            prev_was_dash = true;
        } else {
            out.push(normalized);
            prev_was_dash = false;
        }
    }

    while out.ends_with('-') {
        out.pop();
    }

    if out.is_empty() {
        return DEFAULT_SLUG.to_string();
    }

    out
}

/// Slug converted to a valid Python package name (dashes become
/// underscores).
pub fn package_name(slug: &str) -> String {
    slug.replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic_name() {
        assert_eq!(slugify("My Cool Agent!"), "my-cool-agent");
    }

    #[test]
    fn slugify_preserves_numbers() {
        assert_eq!(slugify("Agent v2"), "agent-v2");
    }

    #[test]
    fn slugify_trims_whitespace() {
        assert_eq!(slugify("  spaced  "), "spaced");
    }

    #[test]
    fn slugify_collapses_runs() {
        assert_eq!(slugify("foo--bar__baz"), "foo-bar-baz");
    }

    #[test]
    fn slugify_empty_falls_back() {
        assert_eq!(slugify(""), DEFAULT_SLUG);
    }

    #[test]
    fn slugify_only_special_falls_back() {
        assert_eq!(slugify("   !!!   "), DEFAULT_SLUG);
    }

    #[test]
    fn slugify_is_idempotent() {
        for input in ["My Cool Agent!", "", "  a--b  ", "!@#$%", "already-a-slug"] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn package_name_maps_dashes() {
        assert_eq!(package_name("helper-bot"), "helper_bot");
    }
}
