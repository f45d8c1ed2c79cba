//! Composition-root wiring: constructor injection in place of a service
//! locator.

pub mod domain_module;
pub mod ui_module;

pub use domain_module::domain_module;
pub use ui_module::ui_module;
