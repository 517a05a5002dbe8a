mod common;
pub use self::common::*;
mod corpus;
pub use self::corpus::Corpus;
mod error;
pub use self::error::{Error, Result};

pub mod page_rank;

#[cfg(test)]
mod testing;
