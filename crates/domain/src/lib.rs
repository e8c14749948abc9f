#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod adaptation;
mod agenda;
mod compatibility;
mod error;
mod exercise;
mod history;
mod name;
mod plan;
mod plates;
mod service;
mod set;
mod settings;
mod zone;

pub use adaptation::*;
pub use agenda::*;
pub use compatibility::*;
pub use error::*;
pub use exercise::*;
pub use history::*;
pub use name::*;
pub use plan::*;
pub use plates::*;
pub use service::*;
pub use set::*;
pub use settings::*;
pub use zone::*;
