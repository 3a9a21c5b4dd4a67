//! Driven persistence adapters implementing the domain storage ports.

mod memory;

pub use memory::MemoryRepository;
