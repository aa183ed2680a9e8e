use replies::{Reply, ReplyError};
use std::{fs, path::PathBuf};

fn read_fixture(rel: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(rel);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read fixture {path:?}: {e}"))
}

fn batch(done: &str, total: &str) -> String {
    Reply::BatchCancellation {
        calculation: read_fixture("batch_calculation.txt"),
        done: done.into(),
        total: total.into(),
    }
    .render()
    .expect("batch reply never fails")
}

#[test]
fn batch_cancellation_sentences() {
    let one = batch("4", "5");
    assert!(one.contains("Выполнено 4 вручения из 5. Одно из вручений было отменено"));

    let several = batch("3", "5");
    assert!(several.contains("Выполнено 3 вручения из 5. Несколько вручений были отменены"));

    let all = batch("5", "5");
    assert!(all.contains("Выполнено 5 вручений из 5. Все вручения были выполнены успешно!"));
}

#[test]
fn batch_cancellation_distance_and_time() {
    let text = batch("21", "21");
    assert!(text.contains("составило 14.99 км, расчётное время в пути 43 мин."));
    assert!(text.contains("Выполнено 21 вручение из 21."));
}

#[test]
fn batch_cancellation_with_bad_counts_defaults_to_zero() {
    let text = batch("", "abc");
    assert!(text.contains("Выполнено 0 вручений из 0."));
}

#[test]
fn split_payment_from_fixtures() {
    let text = Reply::SplitPayment {
        first: read_fixture("payment_first.txt"),
        second: read_fixture("payment_second.txt"),
    }
    .render()
    .expect("failed to render split payment");

    assert!(text.contains("26 сентября в 21:19 поступило 148 ₽,"));
    assert!(text.contains("26 сентября в 21:34 поступило 209 ₽."));
}

#[test]
fn split_payment_without_seconds_fails() {
    let err = Reply::SplitPayment {
        first: read_fixture("payment_first.txt"),
        second: read_fixture("payment_no_seconds.txt"),
    }
    .render()
    .unwrap_err();

    assert!(matches!(err, ReplyError::Date(_)));
}

#[test]
fn inflow_reply() {
    let text = Reply::Inflow {
        amount: "1 500 ₽".into(),
        date: "3 октября".into(),
        time: "14:05".into(),
    }
    .render()
    .expect("failed to render inflow");

    assert!(text.contains("3 октября в 14:05 на ваш баланс поступило 1 500 ₽."));
}
