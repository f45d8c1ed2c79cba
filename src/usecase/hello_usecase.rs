use crate::interface_adapter::port::GreetingPort;

pub const HELLO_MESSAGE: &str = "Hello, Koin and Circuit integration!";

/// Single-operation domain service: greet the user.
pub struct HelloUsecase<G: GreetingPort> {
    greeter: G,
}

impl<G: GreetingPort> HelloUsecase<G> {
    pub fn new(greeter: G) -> Self {
        Self { greeter }
    }

    pub fn invoke(&self) {
        tracing::info!(greeting = HELLO_MESSAGE, "hello use case invoked");
        self.greeter.greet(HELLO_MESSAGE);
    }
}
