//! List state and pagination shared by the public blog and the admin panels.

pub mod listing;
pub mod pagination;
