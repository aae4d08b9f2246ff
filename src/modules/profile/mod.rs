pub mod controller;
pub mod presentation;
pub mod router;
pub mod service;
pub mod view;

pub use presentation::PresentationCatalog;
pub use router::init_profile_router;
