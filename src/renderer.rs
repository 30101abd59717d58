//! Resource hint markup and anchor substitution.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::constants::PRELOAD_ANCHOR;
use crate::entry::{PreloadEntry, ResourceKind};

/// Matches the anchor plus any spaces or tabs right before it on the same line.
static ANCHOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"([ \t]*){}", regex::escape(PRELOAD_ANCHOR)))
        .unwrap_or_else(|e| panic!("anchor pattern must compile: {e}"))
});

/// Whether `href` points at another origin (`https://cdn/x.js`, `//cdn/x.js`).
fn is_absolute(href: &str) -> bool {
    href.starts_with("//") || Url::parse(href).is_ok()
}

/// Renders one `<link rel="preload">` line.
///
/// `crossorigin` is left out only for same-origin scripts; every other
/// combination carries it.
pub fn to_markup(entry: &PreloadEntry) -> String {
    let crossorigin = is_absolute(entry.href()) || entry.kind() != ResourceKind::Script;
    format!(
        r#"<link rel="preload" href="{}" as="{}"{}>"#,
        entry.href(),
        entry.kind(),
        if crossorigin { " crossorigin" } else { "" }
    )
}

/// Replaces the first anchor in `template` with one markup line per entry,
/// each indented like the anchor was.
///
/// A template without an anchor is returned unchanged. Later anchors are left alone.
pub fn render(template: &str, entries: &[PreloadEntry]) -> String {
    let Some(captures) = ANCHOR_PATTERN.captures(template) else {
        log::debug!("No {PRELOAD_ANCHOR} anchor found, leaving the template unchanged");
        return template.to_string();
    };
    let (Some(whole), Some(indent)) = (captures.get(0), captures.get(1)) else {
        return template.to_string();
    };

    let indent = indent.as_str();
    let lines = entries
        .iter()
        .map(|entry| format!("{indent}{}", to_markup(entry)))
        .collect::<Vec<_>>()
        .join("\n");

    let mut output = String::with_capacity(template.len() + lines.len());
    output.push_str(&template[..whole.start()]);
    output.push_str(&lines);
    output.push_str(&template[whole.end()..]);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(href: &str) -> PreloadEntry {
        PreloadEntry::new(href, ResourceKind::Script)
    }

    #[test]
    fn local_script_has_no_crossorigin() {
        assert_eq!(to_markup(&script("app.js")), r#"<link rel="preload" href="app.js" as="script">"#);
    }

    #[test]
    fn fonts_and_fetches_are_crossorigin() {
        assert_eq!(
            to_markup(&PreloadEntry::new("packages/demo/src/x.ttf", ResourceKind::Font)),
            r#"<link rel="preload" href="packages/demo/src/x.ttf" as="font" crossorigin>"#
        );
        assert_eq!(
            to_markup(&PreloadEntry::new("data.json", ResourceKind::Fetch)),
            r#"<link rel="preload" href="data.json" as="fetch" crossorigin>"#
        );
    }

    #[test]
    fn absolute_scripts_are_crossorigin() {
        assert_eq!(
            to_markup(&script("https://cdn.example.com/app.js")),
            r#"<link rel="preload" href="https://cdn.example.com/app.js" as="script" crossorigin>"#
        );
        assert!(to_markup(&script("//cdn.example.com/app.js")).ends_with(" crossorigin>"));
    }

    #[test]
    fn keeps_anchor_indentation() {
        let output = render("  <!--PRELOAD-HERE-->", &[script("a.js")]);
        assert_eq!(output, r#"  <link rel="preload" href="a.js" as="script">"#);
    }

    #[test]
    fn indents_every_line_with_tabs_and_spaces() {
        let template = "<head>\n\t  <!--PRELOAD-HERE-->\n</head>";
        let output = render(template, &[script("a.js"), script("b.js")]);
        assert_eq!(
            output,
            "<head>\n\
             \t  <link rel=\"preload\" href=\"a.js\" as=\"script\">\n\
             \t  <link rel=\"preload\" href=\"b.js\" as=\"script\">\n\
             </head>"
        );
    }

    #[test]
    fn indentation_does_not_cross_lines() {
        let output = render("<head>\n<!--PRELOAD-HERE-->", &[script("a.js")]);
        assert_eq!(output, "<head>\n<link rel=\"preload\" href=\"a.js\" as=\"script\">");
    }

    #[test]
    fn missing_anchor_is_a_no_op() {
        let template = "<html><head></head></html>";
        assert_eq!(render(template, &[script("a.js")]), template);
    }

    #[test]
    fn only_the_first_anchor_is_replaced() {
        let output = render("<!--PRELOAD-HERE-->\n<!--PRELOAD-HERE-->", &[script("a.js")]);
        assert_eq!(
            output,
            "<link rel=\"preload\" href=\"a.js\" as=\"script\">\n<!--PRELOAD-HERE-->"
        );
    }

    #[test]
    fn empty_selection_removes_the_anchor() {
        assert_eq!(render("<head>\n    <!--PRELOAD-HERE-->\n</head>", &[]), "<head>\n\n</head>");
    }

    #[test]
    fn dollar_signs_are_inserted_literally() {
        let output = render("<!--PRELOAD-HERE-->", &[PreloadEntry::new("$1.bin", ResourceKind::Fetch)]);
        assert_eq!(output, r#"<link rel="preload" href="$1.bin" as="fetch" crossorigin>"#);
    }
}
