// Service exports
pub mod cache;
pub mod cached;
pub mod matching;
pub mod memory;
pub mod postgres;
pub mod store;

pub use cache::{CacheManager, CacheKey, CacheError};
pub use cached::CachedStore;
pub use matching::{MatchService, MatchError};
pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use store::{RecordStore, StoreError};
