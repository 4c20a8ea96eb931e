pub mod engine;
pub mod indicator;
pub mod layout;
pub mod router;
pub mod slide;
