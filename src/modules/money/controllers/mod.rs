pub mod money_controller;

pub use money_controller::configure;
