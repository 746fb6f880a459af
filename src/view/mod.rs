pub mod render;
pub mod shell;

pub use render::Renderer;
pub use shell::Shell;
