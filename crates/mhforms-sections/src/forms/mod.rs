pub mod leave_application;
pub mod nursing_report;
pub mod tribunal_report;
