//! Шаблоны ответов и подстановка значений в плейсхолдеры `{name}`.

use crate::error::{ReplyError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\w+)\}").unwrap());

const CALCULATION_TEXT: &str = "Здравствуйте!

Мы проверили стоимость заказа № {order_number}. Она рассчитана верно и складывается из следующих составляющих:
{body}

Итого: {total}.

Если останутся вопросы, напишите нам, пожалуйста, мы обязательно поможем.";

const RECALCULATION_TEXT: &str = "Здравствуйте!

Мы пересчитали стоимость заказа № {order_number}. После перерасчёта она складывается из следующих составляющих:
{body}

Итоговая стоимость составляет {total}. Разница будет начислена в течение трёх рабочих дней.

Спасибо, что сообщили нам о ситуации!";

const BATCH_CANCELLATION_TEXT: &str = "Здравствуйте!

Расчётное расстояние по заказу составило {distance}, расчётное время в пути {time}.
Выполнено {done_count} {done_word} из {total_count}. {cancel_text}

Стоимость доставки рассчитана с учётом фактически выполненных вручений.";

const SPLIT_PAYMENT_TEXT: &str = "Здравствуйте!

Заказ был оплачен двумя частями:
{datetime1} поступило {amount1},
{datetime2} поступило {amount2}.

Обе суммы учтены, задолженности по заказу нет.";

const INFLOW_TEXT: &str = "Здравствуйте!

{inflow_date} в {inflow_time} на ваш баланс поступило {inflow_amount}. Средства уже доступны.";

/// Вид шаблона: определяет, какие поля нужны для заполнения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// номер заказа + данные о стоимости
    Common,
    /// данные расчёта батча + количество вручений
    BatchCancellation,
    /// два пополнения: дата и сумма
    SplitPayment,
    /// сумма, дата и время поступления
    Inflow,
}

impl TemplateKind {
    /// Определяет вид шаблона по его названию
    pub fn detect(name: &str) -> Self {
        if name.contains("Отмена батча") {
            TemplateKind::BatchCancellation
        } else if name.contains("Оплата частями") {
            TemplateKind::SplitPayment
        } else if name.contains("Поступление") {
            TemplateKind::Inflow
        } else {
            TemplateKind::Common
        }
    }
}

/// Закрытый набор шаблонов ответа
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// обычный ответ с расчётом стоимости
    Calculation,
    /// ответ после перерасчёта стоимости
    Recalculation,
    BatchCancellation,
    SplitPayment,
    Inflow,
}

impl Template {
    pub const ALL: [Template; 5] = [
        Template::Calculation,
        Template::Recalculation,
        Template::BatchCancellation,
        Template::SplitPayment,
        Template::Inflow,
    ];

    /// Название шаблона, как его видит пользователь
    pub fn name(self) -> &'static str {
        match self {
            Template::Calculation => "Шаблон 1 (РВ)",
            Template::Recalculation => "Шаблон 2 (Перерасчёт)",
            Template::BatchCancellation => "Шаблон 3 (Отмена батча)",
            Template::SplitPayment => "Шаблон 4 (Оплата частями)",
            Template::Inflow => "Шаблон 5 (Поступление средств)",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Template::Calculation => CALCULATION_TEXT,
            Template::Recalculation => RECALCULATION_TEXT,
            Template::BatchCancellation => BATCH_CANCELLATION_TEXT,
            Template::SplitPayment => SPLIT_PAYMENT_TEXT,
            Template::Inflow => INFLOW_TEXT,
        }
    }

    pub fn kind(self) -> TemplateKind {
        TemplateKind::detect(self.name())
    }

    /// Ищет шаблон по точному названию
    pub fn from_name(name: &str) -> Result<Self> {
        Template::ALL
            .into_iter()
            .find(|t| t.name() == name.trim())
            .ok_or_else(|| ReplyError::UnknownTemplate(name.to_string()))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Подставляет значения в плейсхолдеры `{name}` за один проход.
///
/// Подставленные значения повторно не просматриваются, так что фигурные
/// скобки во вставленном пользователем тексте остаются как есть.
pub fn fill(template: &'static str, values: &[(&str, &str)]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for caps in PLACEHOLDER_RE.captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let name: &'static str = &template[name.range()];
        let value = values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, v)| *v)
            .ok_or(ReplyError::MissingField(name))?;

        out.push_str(&template[last..whole.start()]);
        out.push_str(value);
        last = whole.end();
    }
    out.push_str(&template[last..]);

    Ok(out)
}
