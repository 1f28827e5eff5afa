pub mod chat;
pub mod verification;
