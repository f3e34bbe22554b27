pub mod hardware;
pub mod packages;
pub mod platform;
pub mod system;
