//! Read-only tables shared by the extractors.

pub mod era;
pub mod month;
pub mod roman;
