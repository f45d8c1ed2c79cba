pub mod stack_navigator;

pub use stack_navigator::{NavigationChange, StackNavigator};
