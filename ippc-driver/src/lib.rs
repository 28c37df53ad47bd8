pub mod driver;
pub mod result;

pub use driver::Driver;
pub use result::{DriverErr, DriverErrKind, DriverResult};

#[cfg(test)]
mod tests;
