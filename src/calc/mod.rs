//! Root finding calculus: isolation, bisection and certified Newton refinement.

mod bisect;
mod isolate;
mod ladder;
mod newton;
mod roots;

pub use isolate::{Block, BlockStatus, SearchBudget};
pub use newton::ConvergenceCertificate;
pub use roots::{Root, RootReport};
