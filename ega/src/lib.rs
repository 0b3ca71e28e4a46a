use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod error;
pub mod io;
pub mod opt;
pub mod samplers;
pub mod util;

#[doc(inline)]
pub use error::EGAError;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
