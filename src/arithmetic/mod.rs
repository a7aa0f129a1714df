pub mod traits;
pub mod u256;
