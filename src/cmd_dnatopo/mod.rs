//! Subcommand modules for the `dnatopo` binary.

pub mod args;

pub mod attrib;
pub mod compare;
pub mod corr;
pub mod mutate;
pub mod scan;
pub mod stats;
pub mod summary;
