pub mod briefings;
pub mod draft;
