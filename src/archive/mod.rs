//! Archive assembly and delivery.

mod bundle;
mod delivery;

pub use bundle::{ArchiveCompression, Bundle, BundleFile};
pub use delivery::{Delivery, DirectoryDelivery, MemoryDelivery};
