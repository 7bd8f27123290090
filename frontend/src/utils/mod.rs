pub mod storage;
pub mod viewport;
