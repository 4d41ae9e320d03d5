mod command;
mod draft;
mod info;
mod sanitize;
mod transport;
mod types;
mod validate;

pub use command::*;
pub use draft::*;
pub use info::*;
pub use sanitize::*;
pub use transport::*;
pub use types::*;
pub use validate::*;
