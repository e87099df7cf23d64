//! Episode catalog: loading stream files and answering episode queries.
//!
//! The pure pieces ([`aggregate`], [`locate`], [`navigate`], [`paginate`])
//! operate on in-memory slices; [`EpisodeStore`] feeds them from disk and
//! [`CatalogService`] is the seam the HTTP layer and the CLI talk to.

pub mod aggregator;
pub mod locator;
pub mod navigation;
pub mod pagination;
pub mod service;
pub mod service_impl;
pub mod store;

pub use aggregator::aggregate;
pub use locator::locate;
pub use navigation::{Navigation, navigate};
pub use pagination::{Paged, paginate};
pub use service::{CatalogError, CatalogService, EpisodePage, PlayerContext};
pub use service_impl::FileCatalogService;
pub use store::{EpisodeStore, ScanReport};
