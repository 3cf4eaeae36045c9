pub mod hooks;
pub mod plugins;

#[cfg(test)]
pub mod test_utils;

pub use hooks::*;
pub use plugins::*;
