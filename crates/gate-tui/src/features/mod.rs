//! Feature slices (state + reducer + view per feature).

pub mod form;
