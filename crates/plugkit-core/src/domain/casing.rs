//! Casing and format rules used to derive identifiers.
//!
//! Every function here is pure and total. Rules that feed code-facing
//! identifiers (`slug`, `studly`) fold to ASCII first; `capitalize_first`,
//! `upper` and `lower` operate on whatever they are given.

/// Transliterate to ASCII, dropping characters with no ASCII rendering.
///
/// ```
/// use plugkit_core::domain::casing::ascii_fold;
/// assert_eq!(ascii_fold("Café Déjà"), "Cafe Deja");
/// ```
pub fn ascii_fold(input: &str) -> String {
    if input.is_ascii() {
        return input.to_owned();
    }
    deunicode::deunicode_with_tofu(input, "")
}

/// Upper-case the first character, leave the remainder untouched.
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn upper(input: &str) -> String {
    input.to_uppercase()
}

pub fn lower(input: &str) -> String {
    input.to_lowercase()
}

/// Lower-case, hyphen-separated ASCII form.
///
/// Runs of non-alphanumeric characters collapse to a single hyphen and
/// leading/trailing hyphens are trimmed. May return an empty string; callers
/// that need a non-empty slug validate at collection time.
pub fn slug(input: &str) -> String {
    let folded = ascii_fold(input).to_ascii_lowercase();
    let mut out = String::with_capacity(folded.len());
    let mut pending_hyphen = false;

    for c in folded.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    out
}

/// Studly (Pascal) case: each alphanumeric segment capitalized, no separator.
///
/// Only the first character of a segment changes, so `"my iPhone"` becomes
/// `"MyIPhone"` and an all-caps segment stays all-caps.
pub fn studly(input: &str) -> String {
    ascii_fold(input)
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .map(capitalize_first)
        .collect()
}

/// Escape the five markup-significant characters.
///
/// Single quotes use the numeric `&#039;` form so the output is safe inside
/// both attribute quoting styles.
pub fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_transliterates_accents() {
        assert_eq!(ascii_fold("Café Déjà"), "Cafe Deja");
        assert_eq!(ascii_fold("Ångström"), "Angstrom");
    }

    #[test]
    fn fold_leaves_ascii_untouched() {
        assert_eq!(ascii_fold("My Plugin - 2"), "My Plugin - 2");
    }

    #[test]
    fn capitalize_first_only_touches_first_char() {
        assert_eq!(capitalize_first("my plugin"), "My plugin");
        assert_eq!(capitalize_first("mY pLUGIN"), "MY pLUGIN");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(slug("my plugin"), "my-plugin");
        assert_eq!(slug("  My -- Plugin!! "), "my-plugin");
        assert_eq!(slug("Demo_Plugin.v2"), "demo-plugin-v2");
    }

    #[test]
    fn slug_folds_before_lowering() {
        assert_eq!(slug("Été Plugin"), "ete-plugin");
    }

    #[test]
    fn slug_of_punctuation_is_empty() {
        assert_eq!(slug("!!! ---"), "");
    }

    #[test]
    fn studly_capitalizes_segments() {
        assert_eq!(studly("my plugin"), "MyPlugin");
        assert_eq!(studly("my-awesome_plugin"), "MyAwesomePlugin");
        assert_eq!(studly("ACME tools"), "ACMETools");
        assert_eq!(studly("my iPhone"), "MyIPhone");
    }

    // Word boundaries are separators only. Inner capitals never split a word,
    // so existing boilerplate names keep their slugs and class names.
    #[test]
    fn camel_case_is_not_split() {
        assert_eq!(slug("MyPlugin"), "myplugin");
        assert_eq!(slug("myPlugin tool"), "myplugin-tool");
        assert_eq!(studly("myPlugin tool"), "MyPluginTool");
        assert_eq!(studly("MyPlugin"), "MyPlugin");
    }

    #[test]
    fn studly_keeps_rest_of_word() {
        assert_eq!(studly("ACME tools"), "ACMETools");
        assert_eq!(studly("wooCommerce bridge"), "WooCommerceBridge");
    }

    #[test]
    fn studly_folds_first() {
        assert_eq!(studly("élan vital"), "ElanVital");
    }

    #[test]
    fn upper_and_lower() {
        assert_eq!(upper("MyPlugin"), "MYPLUGIN");
        assert_eq!(lower("MyPlugin"), "myplugin");
    }

    #[test]
    fn html_escape_covers_all_five() {
        assert_eq!(
            html_escape(r#"Tom & "Jerry" <tag> it's"#),
            "Tom &amp; &quot;Jerry&quot; &lt;tag&gt; it&#039;s"
        );
    }

    #[test]
    fn html_escape_leaves_plain_text() {
        assert_eq!(html_escape("hello@example.com"), "hello@example.com");
    }
}
