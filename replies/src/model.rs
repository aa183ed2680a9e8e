use serde::Serialize;
use std::fmt;

/// Одна позиция стоимости заказа: сумма и необязательный комментарий.
///
/// Сумма хранится так, как была вставлена, в виде `"<число> ₽"`.
/// Проверка числа выполняется позже, при подсчёте итога.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceEntry {
    /// сумма, например "100 ₽"
    pub amount: String,
    /// комментарий из скобок, уже нормализованный; пустая строка если его нет
    pub comment: String,
}

impl PriceEntry {
    /// Go to [`PriceEntry`]
    pub fn new(amount: impl Into<String>, comment: impl Into<String>) -> Self {
        PriceEntry {
            amount: amount.into(),
            comment: comment.into(),
        }
    }
}

/// Центральная структура библиотеки: позиции стоимости, извлечённые из одного
/// вставленного блока текста.
///
/// Порядок позиций совпадает с порядком их первого появления в тексте.
/// Если название позиции встречается повторно, значение перезаписывается,
/// а позиция остаётся на прежнем месте.
///
/// Пример использования:
/// ```
/// use replies::PriceTable;
///
/// let table = PriceTable::parse("Подача\n100 ₽ (за 5 мин.)");
/// let entry = table.get("Подача").unwrap();
/// assert_eq!(entry.amount, "100 ₽");
/// assert_eq!(entry.comment, "за 5 мин");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct PriceTable {
    entries: Vec<(String, PriceEntry)>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавляет позицию или перезаписывает уже существующую с тем же названием
    pub fn insert(&mut self, label: impl Into<String>, entry: PriceEntry) {
        let label = label.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => *existing = entry,
            None => self.entries.push((label, entry)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&PriceEntry> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, e)| e)
    }

    /// Позиции в порядке первого появления
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PriceEntry)> {
        self.entries.iter().map(|(l, e)| (l.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for PriceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.comment.is_empty() {
            write!(f, "{}", self.amount)
        } else {
            write!(f, "{} ({})", self.amount, self.comment)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_first_position_and_last_value() {
        let mut table = PriceTable::new();
        table.insert("Подача", PriceEntry::new("100 ₽", ""));
        table.insert("Время в пути", PriceEntry::new("200 ₽", ""));
        table.insert("Подача", PriceEntry::new("150 ₽", "повтор"));

        let labels: Vec<&str> = table.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Подача", "Время в пути"]);
        assert_eq!(table.get("Подача"), Some(&PriceEntry::new("150 ₽", "повтор")));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn entry_display_omits_empty_comment() {
        assert_eq!(PriceEntry::new("100 ₽", "").to_string(), "100 ₽");
        assert_eq!(PriceEntry::new("100 ₽", "за 5 мин").to_string(), "100 ₽ (за 5 мин)");
    }
}
