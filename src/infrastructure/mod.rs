pub mod catalog;
pub mod observability;
pub mod random;
pub mod scheduling;
