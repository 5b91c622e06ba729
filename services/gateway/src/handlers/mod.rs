pub mod rates;
pub mod system;
