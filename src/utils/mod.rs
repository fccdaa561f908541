//! Helpers shared by the copier and the mover.

pub(crate) mod path;
