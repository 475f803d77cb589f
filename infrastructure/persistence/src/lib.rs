pub mod kv;
pub mod cart {
    pub mod entity;
    pub mod memory;
    pub mod storage;
}
