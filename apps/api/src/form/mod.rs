// Form state: the in-memory resume draft and its mutation operations.

pub mod controller;
pub mod handlers;
