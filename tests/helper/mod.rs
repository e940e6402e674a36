pub mod archive;
pub mod installer;

pub use archive::tar_gz;
pub use installer::TestEnv;
