pub mod patch;
pub mod record;

#[cfg(test)]
mod tests;

pub use patch::*;
pub use record::*;
