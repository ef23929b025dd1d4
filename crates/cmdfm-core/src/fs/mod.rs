//! File system abstractions for cmdfm.
//!
//! [`port::FileOperationPort`] is the capability set the command framework
//! and navigator consume; [`ops::LocalFs`] implements it over `std::fs`,
//! with zip output in [`archive`]. Listing rows are [`entry::FileEntry`]
//! values and metadata snapshots are [`metadata::FileMetadata`].

pub mod archive;
pub mod entry;
pub mod metadata;
pub mod ops;
pub mod port;

pub use metadata::FileMetadata;
pub use ops::LocalFs;
pub use port::FileOperationPort;
