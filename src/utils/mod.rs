//! Small value conversions shared by the translator, packer and CLI

pub mod amount;
pub mod time;
pub mod vlq;
