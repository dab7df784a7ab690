pub mod rendering;
pub mod server;

pub use rendering::{Page, PageRenderer, RenderCommand, RenderPlan};
