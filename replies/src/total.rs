//! Подсчёт итоговой суммы по отрисованному тексту ответа.

use crate::error::{ReplyError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::prelude::*;
use std::fmt;
use std::str::FromStr;

static RUBLE_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    // "— <название>: <сумма> ₽", название нежадное и не переходит на новую строку
    Regex::new(r"— .*?: (\d[\d\s.]*)\s*₽").unwrap()
});

/// Итоговая сумма в целых рублях
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Total(Decimal);

impl Total {
    /// Округляет сумму до целого рубля, половина округляется вверх
    pub fn from_sum(sum: Decimal) -> Self {
        Total(sum.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Total {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ₽", self.0)
    }
}

/// Суммирует все строки вида `"— <название>: <сумма> ₽"` в тексте.
///
/// Позиции, не попавшие в текст (например, отфильтрованные справочником),
/// в итог не входят. Если совпадений нет, итог равен `0 ₽`.
pub fn sum_ruble_amounts(text: &str) -> Result<Total> {
    let mut sum = Decimal::ZERO;

    for caps in RUBLE_LINE_RE.captures_iter(text) {
        let amount = parse_ruble_amount(&caps[1])?;
        sum = sum.checked_add(amount).ok_or_else(|| {
            ReplyError::InvalidAmount(format!("сумма переполнена на '{}'", caps[1].trim()))
        })?;
    }

    Ok(Total::from_sum(sum))
}

/// Разбирает сумму вида "1 234.5" / "1234,5"
fn parse_ruble_amount(raw: &str) -> Result<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    // "100." - допустимая запись целого числа
    let cleaned = cleaned.strip_suffix('.').unwrap_or(&cleaned);

    Decimal::from_str(cleaned)
        .map_err(|e| ReplyError::InvalidAmount(format!("'{}': {e}", raw.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_sums_to_zero() {
        assert_eq!(sum_ruble_amounts("").unwrap().to_string(), "0 ₽");
        assert_eq!(sum_ruble_amounts("Итого: нет позиций").unwrap().to_string(), "0 ₽");
    }

    #[test]
    fn sums_rendered_lines_with_half_up_rounding() {
        let text = "— A: 100 ₽\n— B: 49.5 ₽";
        assert_eq!(sum_ruble_amounts(text).unwrap().to_string(), "150 ₽");
    }

    #[test]
    fn rounds_below_half_down() {
        let text = "— A: 10.2 ₽\n— B: 0.2 ₽";
        assert_eq!(sum_ruble_amounts(text).unwrap().to_string(), "10 ₽");
    }

    #[test]
    fn ignores_comments_and_surrounding_text() {
        let text = "Здравствуйте!\n\
                    — Подача: 100 ₽ (за 5 мин)\n\
                    — Время в пути: 200 ₽ (за 15 мин)\n\
                    Итого: ⟨ИТОГО⟩";
        assert_eq!(sum_ruble_amounts(text).unwrap().to_string(), "300 ₽");
    }

    #[test]
    fn thousands_separated_by_space() {
        let text = "— Грузчики: 1 200 ₽";
        assert_eq!(sum_ruble_amounts(text).unwrap().to_string(), "1200 ₽");
    }

    #[test]
    fn lines_without_dash_prefix_are_not_counted() {
        let text = "Подача: 100 ₽\n- Время: 50 ₽\n— Бонус за заказ: 30 ₽";
        assert_eq!(sum_ruble_amounts(text).unwrap().to_string(), "30 ₽");
    }

    #[test]
    fn malformed_amount_is_an_error() {
        let err = sum_ruble_amounts("— A: 1.2.3 ₽").unwrap_err();
        assert!(matches!(err, ReplyError::InvalidAmount(_)));
    }

    #[test]
    fn overflowing_sum_is_an_error() {
        let text = "— A: 50000000000000000000000000000 ₽\n— B: 50000000000000000000000000000 ₽";
        let err = sum_ruble_amounts(text).unwrap_err();
        assert!(matches!(err, ReplyError::InvalidAmount(_)));
    }

    #[test]
    fn out_of_range_amount_is_an_error() {
        let err = sum_ruble_amounts("— A: 500000000000000000000000000000 ₽").unwrap_err();
        assert!(matches!(err, ReplyError::InvalidAmount(_)));
    }

    #[test]
    fn trailing_point_is_accepted() {
        assert_eq!(sum_ruble_amounts("— A: 100. ₽").unwrap().to_string(), "100 ₽");
    }
}
