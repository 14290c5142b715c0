mod controller;
mod generic;
mod strategy;
mod transport;

#[cfg(test)]
mod test_support;

pub use controller::*;
pub use generic::*;
pub use strategy::*;
pub use transport::*;
