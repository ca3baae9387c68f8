pub mod api;
pub mod sensors;
pub mod stm32;
