mod loader;
mod model;
mod resolver;

pub use loader::{
    ConfigFormat, ConfigLoader, FileConfigLoader, FileSystem, RealFileSystem, parse_overrides,
};
pub use model::{ConfigOverrides, OverrideLevel};
pub use resolver::{AppliedOverrides, apply_overrides};
