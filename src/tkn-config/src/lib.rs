mod dashboard;
mod error;
mod kube;

pub use dashboard::*;
pub use error::ConfigError;
pub use kube::*;
