mod format;
mod interface;

pub use format::*;
pub use interface::{ConsoleInterface, UserInterface};

#[cfg(test)]
pub(crate) use interface::util;
