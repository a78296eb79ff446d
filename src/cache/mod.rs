// Cache module for the local extension list.
// Stores the full catalog as one JSON array to avoid refetching on every run.

pub mod store;

pub use store::{Source, load_or_fetch, modified_at, read_extensions, write_extensions};
