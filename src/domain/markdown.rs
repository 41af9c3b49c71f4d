use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::MarkdownDialect;

static CHECKBOX_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([ \t]*)[-*+][ \t]*\[([ xX])\][ \t]*").expect("checkbox pattern is valid")
});

const EMOJI_SHORTCODES: &[(&str, &str)] = &[
    ("\u{2705}", ":white_check_mark:"),
    ("\u{274C}", ":x:"),
    ("\u{26A0}\u{FE0F}", ":warning:"),
    ("\u{26A0}", ":warning:"),
    ("\u{1F680}", ":rocket:"),
    ("\u{1F41B}", ":bug:"),
    ("\u{2728}", ":sparkles:"),
    ("\u{1F4DD}", ":memo:"),
    ("\u{1F525}", ":fire:"),
    ("\u{1F44D}", ":thumbsup:"),
    ("\u{1F44E}", ":thumbsdown:"),
    ("\u{1F4A1}", ":bulb:"),
    ("\u{2B50}", ":star:"),
    ("\u{1F389}", ":tada:"),
    ("\u{23F3}", ":hourglass_flowing_sand:"),
    ("\u{1F512}", ":lock:"),
];

/// Rewrites description text for the configured dialect.
pub fn convert(text: &str, dialect: MarkdownDialect) -> Cow<'_, str> {
    match dialect {
        MarkdownDialect::Plain => Cow::Borrowed(text),
        MarkdownDialect::Opal => Cow::Owned(replace_emoji(&normalize_checkboxes(text))),
    }
}

fn normalize_checkboxes(text: &str) -> Cow<'_, str> {
    CHECKBOX_ITEM.replace_all(text, |caps: &regex::Captures<'_>| {
        let mark = if caps[2].trim().is_empty() { ' ' } else { 'x' };
        let rest = caps.get(0).map_or("", |m| &text[m.end()..]);
        if rest.is_empty() || rest.starts_with(['\n', '\r']) {
            format!("{}- [{mark}]", &caps[1])
        } else {
            format!("{}- [{mark}] ", &caps[1])
        }
    })
}

fn replace_emoji(text: &str) -> String {
    EMOJI_SHORTCODES
        .iter()
        .fold(text.to_string(), |acc, (glyph, code)| {
            if acc.contains(glyph) {
                acc.replace(glyph, code)
            } else {
                acc
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_dialect_is_untouched() {
        let text = "* [X] done \u{2705}";
        assert_eq!(convert(text, MarkdownDialect::Plain), text);
    }

    #[test]
    fn normalizes_checkbox_items() {
        let text = "Steps:\n* [ ] write tests\n  +[X]  ship it\n- [x] review";
        let converted = convert(text, MarkdownDialect::Opal);
        assert_eq!(
            converted,
            "Steps:\n- [ ] write tests\n  - [x] ship it\n- [x] review"
        );
    }

    #[test]
    fn empty_checkbox_items_get_no_trailing_space() {
        assert_eq!(convert("- [ ]", MarkdownDialect::Opal), "- [ ]");
        assert_eq!(convert("* [ ]  ", MarkdownDialect::Opal), "- [ ]");
        assert_eq!(
            convert("* [ ]\n+ [X]\r\n- [x] done", MarkdownDialect::Opal),
            "- [ ]\n- [x]\r\n- [x] done"
        );
    }

    #[test]
    fn leaves_inline_brackets_alone() {
        let text = "see [x] in the middle";
        assert_eq!(convert(text, MarkdownDialect::Opal), text);
    }

    #[test]
    fn replaces_emoji_with_shortcodes() {
        let text = "\u{2705} passed, \u{274C} failed, \u{26A0}\u{FE0F} flaky \u{1F680}";
        assert_eq!(
            convert(text, MarkdownDialect::Opal),
            ":white_check_mark: passed, :x: failed, :warning: flaky :rocket:"
        );
    }

    #[test]
    fn keeps_paragraph_breaks() {
        let text = "first\n\nsecond";
        assert_eq!(convert(text, MarkdownDialect::Opal), text);
    }
}
