use std::io::Error as IoError;
use thiserror::Error;

/// Ошибки при разборе входных данных и заполнении шаблонов ответа
#[derive(Debug, Error)]
pub enum ReplyError {
    // обёртки

    /// обёртка std::io::Error
    #[error("io error: {0}")]
    Io(#[from] IoError),
    /// обёртка chrono::ParseError
    #[error("date parse error: {0}")]
    Date(#[from] chrono::ParseError),

    // логические ошибки

    /// блок пополнения не содержит двух строк (дата и сумма)
    #[error("bad payment block: {0}")]
    PaymentBlock(String),
    /// сумма в отрисованном тексте не является числом
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    /// для плейсхолдера шаблона не передано значение
    #[error("missing field: {0}")]
    MissingField(&'static str),
    /// шаблон с таким названием не существует
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
}

pub type Result<T> = std::result::Result<T, ReplyError>;
