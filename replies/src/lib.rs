pub mod catalog;
pub mod error;
pub mod model;
mod prices;
pub mod reply;
pub mod templates;
pub mod total;

mod utils;

pub use crate::catalog::{Body, BodyLine, MatchTier, assemble_body, format_line};
pub use crate::error::{ReplyError, Result};
pub use crate::model::{PriceEntry, PriceTable};
pub use crate::reply::{PaymentPart, Reply};
pub use crate::templates::{Template, TemplateKind};
pub use crate::total::{Total, sum_ruble_amounts};
pub use crate::utils::normalize_comment;
