mod attachment;
mod envelope;
mod error;
mod input;
mod status;

pub use attachment::*;
pub use envelope::*;
pub use error::*;
pub use input::*;
pub use status::*;
