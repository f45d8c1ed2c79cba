/// Output port for greetings produced by the domain.
///
/// Concrete implementations (console line for the terminal UI, stdout for
/// headless sessions) live in infrastructure.
pub trait GreetingPort {
    /// Deliver a greeting to the user.
    fn greet(&self, message: &str);
}
