pub mod category;
pub mod common;
pub mod expense;

pub use category::{ExpenseSubType, ExpenseType, SubtypeMeta};
pub use common::{Amounted, Identifiable};
pub use expense::{Expense, ExpenseRecord};
