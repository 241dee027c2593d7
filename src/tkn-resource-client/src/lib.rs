mod client;
mod in_memory;
mod nothing;

pub use client::NameSpace;
pub use client::ResourceClient;
pub use client::ResourceClientError;
pub use in_memory::InMemoryClient;
pub use in_memory::InMemoryError;
pub use nothing::DoNothingClient;
pub use nothing::DoNothingError;

pub type SharedClient<C> = std::sync::Arc<C>;
