pub mod category;
pub mod diagnosis;
pub mod document;
pub mod entry;
pub mod lookback;
pub mod medication;
pub mod note;
pub mod patient;
