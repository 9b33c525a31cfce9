//! Value objects - small validated types shared by the wizard model

mod customer_type;
mod order_type;
mod step;

pub use customer_type::{CustomerType, CustomerTypeSelection, PersonalSubtype};
pub use order_type::OrderType;
pub use step::Step;
