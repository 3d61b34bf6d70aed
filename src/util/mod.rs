pub mod assets;
pub mod export;
pub mod logging;
pub mod persistence;
pub mod version;
