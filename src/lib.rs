extern crate chrono;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate serde_json;
extern crate url;

pub mod command;
pub mod dataset;
pub mod date;
pub mod errors;
pub mod help;
pub mod localize;
pub mod structure;
pub mod submit;

pub use command::{build_command, DateCommand};
pub use date::Date;
pub use errors::Error;
pub use structure::DateStructure;

pub type Result<T> = ::std::result::Result<T, errors::Error>;
