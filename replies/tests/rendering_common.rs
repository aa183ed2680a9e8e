use replies::{MatchTier, PriceTable, Reply, Template, assemble_body, sum_ruble_amounts};
use std::{fs, path::PathBuf};

fn fixture_path(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(rel)
}

fn read_fixture(rel: &str) -> String {
    let path = fixture_path(rel);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read fixture {path:?}: {e}"))
}

#[test]
fn simple_prices_render_expected_body_and_total() {
    let prices = read_fixture("prices_simple.txt");
    let reply = Reply::Common {
        template: Template::Calculation,
        order_number: "12345".into(),
        prices,
    };

    let text = reply.render().expect("failed to render reply");

    assert!(text.contains("— Подача: 100 ₽ (за 5 мин)"));
    assert!(text.contains("— Время в пути: 200 ₽ (за 15 мин)"));
    assert!(text.contains("Итого: 300 ₽."), "unexpected reply:\n{text}");
}

#[test]
fn full_price_block_is_filtered_and_ordered_by_catalog() {
    let table = PriceTable::parse(&read_fixture("prices_full.txt"));
    let body = assemble_body(&table);

    let display: Vec<&str> = body.lines.iter().map(|l| l.display_name.as_str()).collect();
    assert_eq!(
        display,
        vec![
            "Подача",
            "Время в пути",
            "Километры в пути",
            "Повышающий коэффициент",
            "Ожидание у получателя",
            "Бонус за заказ",
            "Цена платной подачи",
            "Дополнительные услуги «Размер кузова»",
            "Дополнительные услуги «Грузчики»",
        ]
    );
    assert_eq!(body.dropped, vec!["Чаевые".to_string(), "Итого".to_string()]);
    assert_eq!(body.lines[6].tier, MatchTier::Extra);
    assert_eq!(body.lines[8].tier, MatchTier::AdditionalService);

    // 100 + 200 + 84.5 + 40 + 35 + 30 + 25 + 150 + 300 = 964.5
    let total = sum_ruble_amounts(&body.text()).expect("failed to sum body");
    assert_eq!(total.to_string(), "965 ₽");
}

#[test]
fn recalculation_template_uses_same_body_and_total() {
    let reply = Reply::Common {
        template: Template::Recalculation,
        order_number: " 777 ".into(),
        prices: read_fixture("prices_full.txt"),
    };

    let text = reply.render().expect("failed to render reply");

    assert!(text.contains("заказа № 777."));
    assert!(text.contains("Итоговая стоимость составляет 965 ₽."));
    assert!(!text.contains("Чаевые"));
}
