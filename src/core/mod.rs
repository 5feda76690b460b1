pub mod calculator;
pub mod letters;
pub mod reducer;
pub mod report;

pub use crate::domain::model::{NumerologyResult, ReportRequest};
pub use crate::domain::ports::ProfileProvider;
pub use crate::utils::error::Result;
