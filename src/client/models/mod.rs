//! Accounts management API data models
//!
//! Typed views of the JSON returned by the service. Attributes the service may
//! omit are `Option`s or default to zero, so decoding never digs through
//! untyped maps.

pub mod account;
mod list;
mod quota;
mod sku;

pub use account::Account;
pub use list::ItemList;
pub use quota::{QuotaCost, ResourceQuota, ResourceQuotaRequest};
pub use sku::SkuRule;
