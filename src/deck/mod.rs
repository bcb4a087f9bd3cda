pub mod activation;
pub mod input;
pub mod navigator;
pub mod presenter;
pub mod timeline;

pub use input::{InputEvent, intent_for_key};
pub use navigator::{Chrome, SlideStatus};
pub use presenter::Presenter;
