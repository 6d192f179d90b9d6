pub mod login;
pub mod menu;
pub mod support;
pub mod sync;
