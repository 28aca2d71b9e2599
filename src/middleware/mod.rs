pub mod member;
pub mod permissions;
