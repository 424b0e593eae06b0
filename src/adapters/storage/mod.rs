pub mod memory_store;
pub mod rocksdb_store;

pub use memory_store::MemoryStore;
pub use rocksdb_store::RocksDbStore;
