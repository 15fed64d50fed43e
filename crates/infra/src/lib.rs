//! Infrastructure layer: collaborator stores and end-to-end wiring.
//!
//! Domain crates stay pure; everything that holds state across calls lives
//! here, behind store traits the hosting process can swap for real backends.

pub mod profile_store;
pub mod request_store;


pub use profile_store::{InMemoryProfileStore, ProfileStore};
pub use request_store::{
    InMemoryOrganizationRequestStore, OrganizationRequestStore, RequestStoreError,
};
