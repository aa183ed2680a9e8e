mod batch;
mod payment;

use crate::catalog::assemble_body;
use crate::error::{ReplyError, Result};
use crate::model::PriceTable;
use crate::templates::{Template, TemplateKind, fill};
use crate::total::sum_ruble_amounts;
use tracing::debug;

pub use batch::{BatchFields, cancellation_text, deliveries_word};
pub use payment::PaymentPart;

/// Временное значение итога при первой отрисовке.
///
/// Не содержит цифр и знака рубля, поэтому подсчёт итога его не учитывает.
pub(crate) const TOTAL_SENTINEL: &str = "⟨ИТОГО⟩";

/// Запрос на формирование ответа: шаблон и поля, которые ему нужны.
///
/// Пример использования:
/// ```
/// use replies::{Reply, Template};
///
/// let reply = Reply::Common {
///     template: Template::Calculation,
///     order_number: "12345".into(),
///     prices: "Подача\n100 ₽ (за 5 мин.)".into(),
/// };
/// let text = reply.render().unwrap();
/// assert!(text.contains("— Подача: 100 ₽ (за 5 мин)"));
/// assert!(text.contains("Итого: 100 ₽."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// ответ с расчётом стоимости по вставленным данным
    Common {
        template: Template,
        order_number: String,
        /// данные о стоимости, как они скопированы из системы заказов
        prices: String,
    },
    /// отмена части вручений в батче
    BatchCancellation {
        /// блок "Расчётное расстояние / Расчётное время"
        calculation: String,
        /// количество выполненных вручений (сырой ввод)
        done: String,
        /// общее количество вручений (сырой ввод)
        total: String,
    },
    /// оплата заказа двумя пополнениями
    SplitPayment {
        first: String,
        second: String,
    },
    /// поступление средств на баланс
    Inflow {
        amount: String,
        date: String,
        time: String,
    },
}

impl Reply {
    /// Шаблон, по которому будет сформирован ответ
    pub fn template(&self) -> Template {
        match self {
            Reply::Common { template, .. } => *template,
            Reply::BatchCancellation { .. } => Template::BatchCancellation,
            Reply::SplitPayment { .. } => Template::SplitPayment,
            Reply::Inflow { .. } => Template::Inflow,
        }
    }

    /// Формирует текст ответа.
    ///
    /// При ошибке ничего не возвращается: частично заполненный текст не нужен.
    pub fn render(&self) -> Result<String> {
        match self {
            Reply::Common {
                template,
                order_number,
                prices,
            } => render_common(*template, order_number.trim(), prices),
            Reply::BatchCancellation {
                calculation,
                done,
                total,
            } => render_batch(calculation, done, total),
            Reply::SplitPayment { first, second } => render_split_payment(first, second),
            Reply::Inflow { amount, date, time } => render_inflow(amount, date, time),
        }
    }
}

fn render_common(template: Template, order_number: &str, prices: &str) -> Result<String> {
    if template.kind() != TemplateKind::Common {
        return Err(ReplyError::UnknownTemplate(format!(
            "{template} is not a price reply template"
        )));
    }

    let table = PriceTable::parse(prices);
    let body = assemble_body(&table).text();

    // итог считается по уже отрисованным строкам тела
    let draft = fill(template.text(), &[
        ("order_number", order_number),
        ("body", body.as_str()),
        ("total", TOTAL_SENTINEL),
    ])?;
    let total = sum_ruble_amounts(&draft)?;
    debug!(%total, entries = table.len(), "computed reply total");

    Ok(draft.replacen(TOTAL_SENTINEL, &total.to_string(), 1))
}

fn render_batch(calculation: &str, done: &str, total: &str) -> Result<String> {
    let fields = BatchFields::compute(calculation, done, total);
    let done_count = fields.done_count.to_string();
    let total_count = fields.total_count.to_string();

    fill(Template::BatchCancellation.text(), &[
        ("distance", fields.distance.as_str()),
        ("time", fields.time.as_str()),
        ("done_count", done_count.as_str()),
        ("done_word", fields.done_word),
        ("total_count", total_count.as_str()),
        ("cancel_text", fields.cancel_text),
    ])
}

fn render_split_payment(first: &str, second: &str) -> Result<String> {
    let first = PaymentPart::parse(first)?;
    let second = PaymentPart::parse(second)?;

    fill(Template::SplitPayment.text(), &[
        ("datetime1", first.datetime.as_str()),
        ("amount1", first.amount.as_str()),
        ("datetime2", second.datetime.as_str()),
        ("amount2", second.amount.as_str()),
    ])
}

fn render_inflow(amount: &str, date: &str, time: &str) -> Result<String> {
    let required = |value: &str, name: &'static str| -> Result<String> {
        let value = value.trim();
        if value.is_empty() {
            Err(ReplyError::MissingField(name))
        } else {
            Ok(value.to_string())
        }
    };
    let amount = required(amount, "inflow_amount")?;
    let date = required(date, "inflow_date")?;
    let time = required(time, "inflow_time")?;

    fill(Template::Inflow.text(), &[
        ("inflow_amount", amount.as_str()),
        ("inflow_date", date.as_str()),
        ("inflow_time", time.as_str()),
    ])
}
