pub use plain_enum::*;
pub use derive_new::new;
pub use failure::{bail, format_err, Error};
pub use schafkopf_observer_util::*;
