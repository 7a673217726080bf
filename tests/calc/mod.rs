mod common;
mod isolate_test;
#[cfg(feature = "serde")]
mod serde_test;
mod verbose_test;
