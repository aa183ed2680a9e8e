//! Справочник полей стоимости: какие позиции попадают в текст ответа,
//! под каким названием и в каком порядке.

use crate::model::{PriceEntry, PriceTable};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Упорядоченные поля: (префикс названия, отображаемое название)
pub const ORDERED_FIELDS: &[(&str, &str)] = &[
    ("Подача", "Подача"),
    ("Время в пути", "Время в пути"),
    ("Километры в пути", "Километры в пути"),
    ("Повышенный спрос", "Повышающий коэффициент"),
    ("Ожидание у отправителя", "Ожидание у отправителя"),
    ("Ожидание у получателя", "Ожидание у получателя"),
    ("Доплаты", "Бонус за заказ"),
    ("Цена отмен клиентами", "Цена отмен клиентами"),
    ("Надбавка за заказ через колл-центр", "Надбавка за заказ через колл-центр"),
];

/// Дополнительные поля, сравниваются по точному совпадению названия
pub const EXTRA_FIELDS: &[&str] = &[
    "Получение",
    "Дистанция возврата",
    "Цена платной подачи",
    "Время возврата",
    "Услуги 1 грузчика (кузов S)",
    "Услуги 1 грузчика (кузов L)",
    "Услуги 2 грузчиков (кузов XL)",
    "Услуги 1 грузчика (кузов M)",
    "Услуги 2 грузчиков (кузов L)",
    "Дополнительные кг",
    "Перевес более 20 кг",
    "Перевес до 10 кг",
    "Перевес 10–20 кг",
    "Девять коробок",
    "Успешный возврат посылки",
    "Компенсация парковки (30 минут)",
    "Цена отмен клиентами",
    "Успешное вручение посылки",
    "Время аренды",
];

/// Доп. поле, которое выводится под другим названием
const CLIENT_CANCELLATIONS: (&str, &str) = ("Цена отмен клиентами", "Клиентские отмены");

/// Подстрока для размера кузова (с учётом регистра)
const BODY_SIZE_KEY: &str = "Кузов";
const BODY_SIZE_NAME: &str = "Размер кузова";

/// Дополнительные услуги: (подстрока без учёта регистра, название услуги).
/// Порядок важен: побеждает первое совпадение.
pub const ADDITIONAL_SERVICES: &[(&str, &str)] = &[
    ("От двери до двери", "От двери до двери"),
    ("Грузчики", "Грузчики"),
    ("Термокороб", "Термокороб"),
    ("Тяжёлая посылка", "Тяжёлая посылка"),
];

/// Каким проходом справочника была выбрана позиция
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// совпадение по префиксу из [`ORDERED_FIELDS`]
    Ordered,
    /// точное совпадение из [`EXTRA_FIELDS`]
    Extra,
    /// совпадение по подстроке, "Дополнительные услуги «...»"
    AdditionalService,
}

/// Строка тела ответа
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BodyLine {
    /// название позиции во вставленном тексте
    pub label: String,
    /// название в ответе
    pub display_name: String,
    pub tier: MatchTier,
    pub entry: PriceEntry,
}

impl BodyLine {
    /// Строка в том виде, в котором она попадает в ответ
    pub fn render(&self) -> String {
        format_line(&self.display_name, &self.entry.amount, &self.entry.comment)
    }
}

/// Тело ответа, собранное из позиций стоимости
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Body {
    pub lines: Vec<BodyLine>,
    /// позиции, которые не подошли ни под одно поле справочника
    pub dropped: Vec<String>,
}

impl Body {
    /// Строки тела через перевод строки
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(BodyLine::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn body_line(label: &str, display_name: String, tier: MatchTier, entry: &PriceEntry) -> BodyLine {
    BodyLine {
        label: label.to_string(),
        display_name,
        tier,
        entry: entry.clone(),
    }
}

/// `"— <название>: <сумма> (<комментарий>)"`, скобки опускаются при пустом комментарии
pub fn format_line(name: &str, amount: &str, comment: &str) -> String {
    if comment.is_empty() {
        format!("— {name}: {amount}")
    } else {
        format!("— {name}: {amount} ({comment})")
    }
}

/// Собирает тело ответа в три прохода по справочнику.
///
/// Каждая позиция выводится не больше одного раза; позиции,
/// не найденные в справочнике, в тело не попадают.
pub fn assemble_body(table: &PriceTable) -> Body {
    let mut used: HashSet<&str> = HashSet::new();
    let mut lines = Vec::new();

    // 1. упорядоченные поля, по префиксу
    for (prefix, display) in ORDERED_FIELDS {
        for (label, entry) in table.iter() {
            if label.starts_with(prefix) && used.insert(label) {
                lines.push(body_line(label, display.to_string(), MatchTier::Ordered, entry));
            }
        }
    }

    // 2. дополнительные поля, точное совпадение
    for key in EXTRA_FIELDS {
        for (label, entry) in table.iter() {
            if label == *key && used.insert(label) {
                let display = if *key == CLIENT_CANCELLATIONS.0 {
                    CLIENT_CANCELLATIONS.1
                } else {
                    *key
                };
                lines.push(body_line(label, display.to_string(), MatchTier::Extra, entry));
            }
        }
    }

    // 3. дополнительные услуги, по подстроке
    for (label, entry) in table.iter() {
        if used.contains(label) {
            continue;
        }
        let service = if label.contains(BODY_SIZE_KEY) {
            Some(BODY_SIZE_NAME)
        } else {
            let lower = label.to_lowercase();
            ADDITIONAL_SERVICES
                .iter()
                .find(|(key, _)| lower.contains(&key.to_lowercase()))
                .map(|(_, name)| *name)
        };

        if let Some(name) = service {
            used.insert(label);
            let display = format!("Дополнительные услуги «{name}»");
            lines.push(body_line(label, display, MatchTier::AdditionalService, entry));
        }
    }

    let dropped: Vec<String> = table
        .iter()
        .filter(|(label, _)| !used.contains(label))
        .map(|(label, _)| label.to_string())
        .collect();

    if !dropped.is_empty() {
        debug!(?dropped, "labels not found in field catalog");
    }

    Body { lines, dropped }
}
