//! Repository Layer
//!
//! Persistence abstraction and implementations.

pub mod codec;
mod traits;
mod memory;
mod file;


pub use traits::ListRepository;
pub use memory::InMemoryRepository;
pub use file::JsonFileRepository;
