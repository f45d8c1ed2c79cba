use std::rc::Rc;

use crate::interface_adapter::port::GreetingPort;
use crate::usecase::HelloUsecase;

/// Domain-level singletons shared by the ui wiring.
pub struct DomainModule<G: GreetingPort> {
    pub hello_usecase: Rc<HelloUsecase<G>>,
}

/// Construct the domain services around the given output port.
pub fn domain_module<G: GreetingPort>(greeter: G) -> DomainModule<G> {
    DomainModule {
        hello_usecase: Rc::new(HelloUsecase::new(greeter)),
    }
}
