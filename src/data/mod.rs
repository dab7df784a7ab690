pub mod loader;

pub use loader::{DataStore, SiteData};
