pub mod report;
pub mod trajectory;
