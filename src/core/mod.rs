pub mod availability;
pub mod booking;
pub mod config;
pub mod form;
pub mod log;
pub mod slots;
