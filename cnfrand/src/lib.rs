//#![warn(missing_docs)]
#![warn(unused_qualifications)]
#![deny(deprecated)]
#![deny(missing_copy_implementations)]
#![warn(clippy::disallowed_types)]

pub mod error;
pub mod parser;
pub mod sampler;
pub mod transform;
pub mod util;

pub use crate::error::{Error, Result};
pub use crate::sampler::{BlockSplit, BlockingSampler, SampleConfig, Trials};
pub use crate::transform::{TransformConfig, Transformer};
pub use cnfrand_cnf::{CnfDocument, Header, Line, Literal, RawCnf, Variable};
