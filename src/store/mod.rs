mod memory;

pub use memory::InMemoryUserStore;
