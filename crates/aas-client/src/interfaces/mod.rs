//! One handle per resource group of the AAS Part 2 API.
//!
//! Every handle is a cheap clone of the shared transport plus the resource
//! path it is rooted at.

mod aasx_file_server;
mod concept_description;
mod description;
mod discovery;
mod registry;
mod serialization;
mod shell;
mod shell_repository;
mod submodel;
mod submodel_repository;

pub use aasx_file_server::AasxFileServerInterface;
pub use concept_description::ConceptDescriptionRepositoryInterface;
pub use description::DescriptionInterface;
pub use discovery::DiscoveryInterface;
pub use registry::{AasRegistryInterface, SubmodelRegistryInterface};
pub use serialization::{SerializationFormat, SerializationInterface, SerializationRequest};
pub use shell::AasInterface;
pub use shell_repository::AasRepositoryInterface;
pub use submodel::SubmodelInterface;
pub use submodel_repository::SubmodelRepositoryInterface;
