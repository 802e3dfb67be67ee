
mod beverage;
mod chat;
mod command;
mod device;
mod error;
mod history;
mod utils;

pub mod demo;

pub use beverage::*;
pub use chat::*;
pub use command::*;
pub use device::*;
pub use error::*;
pub use history::*;
pub use utils::*;
