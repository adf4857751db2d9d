pub mod playground;
pub mod settings;
