pub mod batch;
pub mod formatter;
