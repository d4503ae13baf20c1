pub mod album;
pub mod cluster;
pub mod takeout;

pub use album::Album;
pub use cluster::FileCluster;
pub use takeout::Takeout;
