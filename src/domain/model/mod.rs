pub mod back_stack;

pub use back_stack::BackStack;
