pub mod app_runner;
pub mod headless_runner;
pub mod input;
pub mod widgets;
