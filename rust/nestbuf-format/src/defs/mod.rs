#[allow(clippy::needless_lifetimes)]
#[path = "./user.fbs.rs"]
pub mod user;

pub mod user_ext;
