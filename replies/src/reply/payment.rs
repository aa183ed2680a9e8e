use crate::error::{ReplyError, Result};
use crate::utils::non_empty_lines;
use chrono::{Datelike, NaiveDateTime, Timelike};

/// Формат даты пополнения в истории платежей: "26.09.2025, 21:19:41"
const PAYMENT_DATETIME_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Одно пополнение при оплате частями
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentPart {
    /// дата в виде "26 сентября в 21:19"
    pub datetime: String,
    /// сумма как есть, например "148 ₽"
    pub amount: String,
}

impl PaymentPart {
    /// Разбирает блок из двух непустых строк: дата/время и сумма.
    ///
    /// Строки после второй игнорируются.
    pub fn parse(block: &str) -> Result<Self> {
        let lines = non_empty_lines(block);
        let [timestamp, amount, ..] = lines.as_slice() else {
            return Err(ReplyError::PaymentBlock(format!(
                "expected two lines (date/amount), got {}",
                lines.len()
            )));
        };

        let dt = NaiveDateTime::parse_from_str(timestamp, PAYMENT_DATETIME_FORMAT)?;

        Ok(PaymentPart {
            datetime: format_payment_datetime(&dt),
            amount: amount.to_string(),
        })
    }
}

/// "26 сентября в 21:19"
fn format_payment_datetime(dt: &NaiveDateTime) -> String {
    let month = MONTHS_GENITIVE[dt.month0() as usize];
    format!("{} {month} в {:02}:{:02}", dt.day(), dt.hour(), dt.minute())
}
