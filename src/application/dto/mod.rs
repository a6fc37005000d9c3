//! Application DTOs - presentation models assembled by the services

mod layout;
mod sheet;

pub use layout::{LayoutModel, LayoutRow};
pub use sheet::{SheetContext, StatView, StatsContext};
