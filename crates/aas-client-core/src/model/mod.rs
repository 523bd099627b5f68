//! Lean serde model of the AAS types exchanged over the REST API.
//!
//! Only the attributes the client needs to reason about are typed; every
//! identifiable keeps the rest in a flattened `extra` map so that a value
//! fetched from a server can be sent back without loss.

mod descriptor;
mod operation;
mod reference;
mod service;
mod shell;
mod submodel;

pub use descriptor::{
    AssetAdministrationShellDescriptor, Endpoint, ProtocolInformation, SecurityAttribute,
    SubmodelDescriptor,
};
pub use operation::{
    BaseOperationResult, ExecutionState, OperationHandle, OperationRequest,
    OperationRequestValueOnly, OperationResult, OperationResultValueOnly, OperationVariable,
    DEFAULT_CLIENT_TIMEOUT,
};
pub use reference::{Key, KeyType, Reference, ReferenceType, SpecificAssetId};
pub use service::{ApiResult, Message, MessageType, PackageDescription, ServiceDescription};
pub use shell::{AssetAdministrationShell, AssetInformation, AssetKind, Resource};
pub use submodel::{ConceptDescription, ModelType, ModellingKind, Submodel, SubmodelElement};
