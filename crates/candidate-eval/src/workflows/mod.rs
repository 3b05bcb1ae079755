pub mod accounts;
pub mod candidates;
pub mod storage;
