pub mod about_use_cases;
pub mod ports;
pub mod service;
