pub mod hello_usecase;

pub use hello_usecase::HelloUsecase;
