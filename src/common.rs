mod components;
mod iter;
mod path;
mod pathbuf;
mod platform;

pub(crate) mod parse;

pub use components::*;
pub use iter::*;
pub use path::*;
pub use pathbuf::*;
pub use platform::*;
