pub mod notice;
pub mod pager;
pub mod views;
