use once_cell::sync::Lazy;
use regex::Regex;

static UNIT_ABBREVIATION_RE: Lazy<Regex> = Lazy::new(|| {
    // \b - граница слова перед сокращением (unicode)
    // точка после сокращения отбрасывается
    Regex::new(r"\b(ч|мин|км|кг|м|млн|млрд|трлн)\.").unwrap()
});

/// Убирает точки после сокращений единиц измерения ("5 мин." -> "5 мин")
/// и обрезает пробелы по краям.
pub fn normalize_comment(comment: &str) -> String {
    UNIT_ABBREVIATION_RE
        .replace_all(comment, "$1")
        .trim()
        .to_string()
}

/// Непустые строки текста без пробелов по краям, в исходном порядке
pub(crate) fn non_empty_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_comment_strips_unit_dots() {
        assert_eq!(normalize_comment("за 5 мин."), "за 5 мин");
        assert_eq!(normalize_comment("1 ч. 20 мин."), "1 ч 20 мин");
        assert_eq!(normalize_comment("14.99 км."), "14.99 км");
        assert_eq!(normalize_comment("свыше 2 млн. и 3 млрд. ₽"), "свыше 2 млн и 3 млрд ₽");
    }

    #[test]
    fn normalize_comment_needs_word_boundary() {
        // "м." внутри слова не является сокращением
        assert_eq!(normalize_comment("дом."), "дом.");
        assert_eq!(normalize_comment("43 мин. 4 сек."), "43 мин 4 сек.");
    }

    #[test]
    fn normalize_comment_trims() {
        assert_eq!(normalize_comment("   за 5 мин.  "), "за 5 мин");
        assert_eq!(normalize_comment(""), "");
    }

    #[test]
    fn normalize_comment_is_idempotent() {
        for s in ["за 5 мин.", "1 ч. 20 мин.", "12 кг. груза", "дом.", " 3 м. "] {
            let once = normalize_comment(s);
            assert_eq!(normalize_comment(&once), once);
        }
    }

    #[test]
    fn repeated_dots_lose_one_per_pass() {
        // за проход снимается одна точка, поэтому здесь повторный вызов меняет результат
        let once = normalize_comment("5 ч..");
        assert_eq!(once, "5 ч.");
        assert_eq!(normalize_comment(&once), "5 ч");
    }

    #[test]
    fn non_empty_lines_skips_blank_lines() {
        let lines = non_empty_lines("  a \n\n\t\nb\r\n c");
        assert_eq!(lines, vec!["a", "b", "c"]);
    }
}
