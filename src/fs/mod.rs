pub mod interface;
pub mod local;

pub use interface::FileSystem;
pub use local::LocalFileSystem;
