#[macro_use]
pub mod macros;
pub use self::macros::*;
pub mod assign;
pub use self::assign::*;
pub mod enumset;
pub use self::enumset::*;
pub use log::{debug, error, info, trace, warn};
