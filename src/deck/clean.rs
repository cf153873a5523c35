use std::sync::OnceLock;

use regex::Regex;

fn br_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<br\s*/?>").unwrap())
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").unwrap())
}

fn whitespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Flatten the HTML markup of an example detail into plain card text.
///
/// Bold pairs become `*...*` before anything else so the emphasis
/// survives tag stripping. The trailing space on `* ` keeps a word
/// boundary when markup butts against the following text; the final
/// collapse and trim fold it away again where it is not needed.
pub fn clean_detail(detail: &str) -> String {
    let bolded = detail.replace("<b>", "*").replace("</b>", "* ");
    let broken = br_regex().replace_all(&bolded, " ");
    let stripped = tag_regex().replace_all(&broken, "");
    let decoded = html_escape::decode_html_entities(&stripped);
    let collapsed = whitespace_regex().replace_all(&decoded, " ");
    collapsed.trim().to_string()
}

/// Reduce a concept title to something safe for a file name.
pub fn sanitize_filename(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '_')
        .collect::<String>()
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_pair_becomes_asterisks() {
        assert_eq!(clean_detail("<b>Hola</b>"), "*Hola*");
        assert_eq!(clean_detail("<b>Hola</b> amigo"), "*Hola* amigo");
        assert_eq!(clean_detail("di <b>hola</b>."), "di *hola* .");
    }

    #[test]
    fn test_line_breaks_become_spaces() {
        assert_eq!(clean_detail("Line1<br>Line2"), "Line1 Line2");
        assert_eq!(clean_detail("Line1<br/>Line2"), "Line1 Line2");
        assert_eq!(clean_detail("Line1<BR />Line2"), "Line1 Line2");
    }

    #[test]
    fn test_other_tags_are_stripped() {
        assert_eq!(clean_detail("<p>Hola <i>amigo</i></p>"), "Hola amigo");
        assert_eq!(clean_detail("<span class=\"x\">texto</span>"), "texto");
    }

    #[test]
    fn test_entities_are_decoded() {
        assert_eq!(clean_detail("Line1&nbsp;Line2"), "Line1 Line2");
        assert_eq!(clean_detail("Fish &amp; Chips"), "Fish & Chips");
    }

    #[test]
    fn test_whitespace_collapses_and_trims() {
        assert_eq!(clean_detail("  Hola \t\n  amigo  "), "Hola amigo");
    }

    #[test]
    fn test_cleaning_is_idempotent() {
        let raw = "<p><b>Hola</b>&nbsp;amigo<br>¿qué tal?</p>";
        let once = clean_detail(raw);
        assert_eq!(clean_detail(&once), once);
    }

    #[test]
    fn test_sanitize_filename_keeps_word_characters() {
        assert_eq!(sanitize_filename("Greetings"), "Greetings");
        assert_eq!(sanitize_filename("ser_estar"), "ser_estar");
        assert_eq!(sanitize_filename("¿Cómo estás?"), "Cómo estás");
        assert_eq!(sanitize_filename("Hey! "), "Hey");
    }

    #[test]
    fn test_sanitize_filename_can_come_up_empty() {
        assert_eq!(sanitize_filename("???"), "");
    }
}
