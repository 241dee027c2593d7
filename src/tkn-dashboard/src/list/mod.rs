mod controller;
mod driver;
mod view;

pub use controller::*;
pub use driver::ResourceListDriver;
pub use view::*;
