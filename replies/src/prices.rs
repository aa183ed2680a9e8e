use crate::model::{PriceEntry, PriceTable};
use crate::utils::{non_empty_lines, normalize_comment};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Строка, содержащая только сумму: "100 ₽" или "100 ₽ (за 5 мин.)"
static VALUE_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+\.?\d*\s*₽)(?:\s*\((.+)\))?").unwrap());

/// Строка, содержащая и название, и сумму: "Подача 100 ₽ (за 5 мин.)"
static INLINE_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s+(\d+\.?\d*\s*₽)(?:\s*\((.+)\))?").unwrap());

impl PriceTable {
    /// Разбирает вставленный из системы заказов текст со стоимостью.
    ///
    /// Название позиции и её сумма обычно идут на соседних строках:
    /// ```text
    /// Подача
    /// 100 ₽ (за 5 мин.)
    /// ```
    /// но сумма может стоять и в той же строке, что и название.
    /// Строки, которые не удалось разобрать, молча пропускаются.
    pub fn parse(text: &str) -> Self {
        let lines = non_empty_lines(text);
        let mut table = PriceTable::new();

        let mut i = 0;
        while i < lines.len() {
            let label = lines[i];

            // название на текущей строке, сумма на следующей
            if let Some(next) = lines.get(i + 1) {
                if let Some(caps) = VALUE_LINE_RE.captures(next) {
                    let amount = caps[1].trim();
                    let comment = caps.get(2).map_or("", |m| m.as_str().trim());
                    table.insert(label, PriceEntry::new(amount, normalize_comment(comment)));
                    i += 2;
                    continue;
                }
            }

            // название и сумма в одной строке
            if let Some(caps) = INLINE_LINE_RE.captures(label) {
                let field = caps[1].trim();
                let amount = caps[2].trim();
                let comment = caps.get(3).map_or("", |m| m.as_str().trim());
                table.insert(field, PriceEntry::new(amount, normalize_comment(comment)));
            } else {
                debug!(line = label, "skipped line without price");
            }
            i += 1;
        }

        table
    }
}
