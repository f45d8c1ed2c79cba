pub mod adapter;
pub mod controller;
pub mod navigation;
pub mod port;
pub mod presenter;
pub mod router;
pub mod screen;
pub mod view;
