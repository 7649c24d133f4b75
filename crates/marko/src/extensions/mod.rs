//! Extensions bundled with the crate.

pub mod gfm;
