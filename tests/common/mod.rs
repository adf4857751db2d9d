pub mod logging;
pub mod origin;
