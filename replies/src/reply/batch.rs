use crate::utils::normalize_comment;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

static DISTANCE_RE: Lazy<Regex> = Lazy::new(|| {
    // метка, необязательные ':' или '-', затем число и единица на той же или следующей строке
    Regex::new(r"(?i)Расч[её]тное расстояние\s*[:\-]?\s*[\r\n]*\s*([\d.,]+)\s*(км|м)\b").unwrap()
});

static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Расч[её]тное время\s*[:\-]?\s*[\r\n]*\s*(.+)").unwrap()
});

static HOURS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*ч").unwrap());
static MINUTES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*мин").unwrap());

/// Значение расстояния, если его не удалось найти
const NO_DISTANCE: &str = "—";

const ONE_CANCELLED: &str =
    "Одно из вручений было отменено, поэтому оно не вошло в расчёт, и стоимость доставки изменилась.";
const SEVERAL_CANCELLED: &str =
    "Несколько вручений были отменены, поэтому они не были учтены при расчёте, и стоимость доставки изменилась.";
const ALL_DELIVERED: &str = "Все вручения были выполнены успешно!";

/// Поля шаблона отмены батча, вычисленные из введённых данных
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFields {
    pub distance: String,
    pub time: String,
    pub done_count: i64,
    pub done_word: &'static str,
    pub total_count: i64,
    pub cancel_text: &'static str,
}

impl BatchFields {
    /// Go to [`BatchFields`]
    ///
    /// `done` и `total` разбираются мягко: всё, что не является целым числом, считается нулём.
    pub fn compute(calculation: &str, done: &str, total: &str) -> Self {
        let done_count = parse_count(done, "done");
        let total_count = parse_count(total, "total");

        BatchFields {
            distance: extract_distance(calculation),
            time: extract_time(calculation),
            done_count,
            done_word: deliveries_word(done_count),
            total_count,
            cancel_text: cancellation_text(total_count.saturating_sub(done_count)),
        }
    }
}

/// "14.99 км", либо "—" если расстояние не найдено
pub(crate) fn extract_distance(text: &str) -> String {
    match DISTANCE_RE.captures(text) {
        Some(caps) => format!("{} {}", &caps[1], &caps[2]),
        None => NO_DISTANCE.to_string(),
    }
}

/// Время после метки, сокращённое до часов и минут
pub(crate) fn extract_time(text: &str) -> String {
    let raw = TIME_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str().trim());

    normalize_comment(&shorten_duration(raw))
}

/// Оставляет от длительности только часы и минуты: "1 ч. 5 мин. 30 сек." -> "1 ч 5 мин".
/// Если ни часов, ни минут нет, текст возвращается как есть.
pub(crate) fn shorten_duration(text: &str) -> String {
    let hours = HOURS_RE.captures(text).map(|c| c[1].to_string());
    let minutes = MINUTES_RE.captures(text).map(|c| c[1].to_string());

    match (hours, minutes) {
        (Some(h), Some(m)) => format!("{h} ч {m} мин"),
        (None, Some(m)) => format!("{m} мин"),
        (Some(h), None) => format!("{h} ч"),
        (None, None) => text.to_string(),
    }
}

fn parse_count(raw: &str, field: &str) -> i64 {
    raw.trim().parse().unwrap_or_else(|e| {
        warn!(field = field, raw = raw, "count is not an integer ({e}), using 0");
        0
    })
}

/// Форма слова "вручение" для числа
pub fn deliveries_word(n: i64) -> &'static str {
    let n = n.rem_euclid(100);
    if (11..=19).contains(&n) {
        return "вручений";
    }
    match n % 10 {
        1 => "вручение",
        2..=4 => "вручения",
        _ => "вручений",
    }
}

/// Фраза об отменах по разнице между общим и выполненным количеством
pub fn cancellation_text(cancelled: i64) -> &'static str {
    match cancelled {
        1 => ONE_CANCELLED,
        n if n > 1 => SEVERAL_CANCELLED,
        _ => ALL_DELIVERED,
    }
}
