pub mod actual;
pub mod desired;
pub mod import;
