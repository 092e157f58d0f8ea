//! Argument handling for curl2min.
//!
//! ```text
//! curl tokens → Classify → ArgUnits → (minimize) → Assemble → replay argv
//! ```
//!
//! Each stage is a pure function that can be unit-tested independently.

mod assembler;
mod classifier;
mod cookie;
mod registry;
mod unit;

pub use assembler::ArgAssembler;
pub use classifier::{classify, ClassifyResult};
pub use cookie::{
    cookie_prefix, cookie_unit, is_cookie_header, split_crumbs, COOKIE_PREFIX, CRUMB_DELIMITER,
};
pub use registry::{flag_arity, FlagArity, FORCED_FLAGS, HEADER_FLAGS, PAIRED_FLAGS};
pub use unit::{flatten, ArgUnit};
