mod filters;
mod pipe;
mod version;

pub use filters::filters_command;
pub use pipe::pipe_command;
pub use version::version_command;
