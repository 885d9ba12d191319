pub mod account;
pub mod course;
pub mod purchase;
