//! A submodel, its elements, attachments and operations.

use crate::error::ClientError;
use crate::path::ResourcePath;
use crate::transport::{read_json, Transport};
use aas_client_core::model::{
    BaseOperationResult, ExecutionState, OperationHandle, OperationRequest,
    OperationRequestValueOnly, OperationResult, OperationResultValueOnly, Reference, Submodel,
    SubmodelElement,
};
use aas_client_core::{Content, Page, PagingInfo, QueryModifier, QueryParams};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A single submodel, addressed either as `/submodels/{submodelIdentifier}`
/// or through a shell as `/shells/{aasIdentifier}/submodels/{submodelIdentifier}`.
///
/// Element operations take an idShortPath such as `TechnicalData.MaxTemperature`
/// or `Components[0]`.
#[derive(Debug, Clone)]
pub struct SubmodelInterface {
    transport: Transport,
    root: ResourcePath,
}

impl SubmodelInterface {
    pub(crate) fn new(transport: Transport, root: ResourcePath) -> Self {
        Self { transport, root }
    }

    fn elements_path(&self) -> ResourcePath {
        self.root.segment("submodel-elements")
    }

    fn element_path(&self, id_short_path: &str) -> ResourcePath {
        self.elements_path().id_short_path(id_short_path)
    }

    async fn read<T: DeserializeOwned>(
        &self,
        path: &ResourcePath,
        content: Content,
        modifier: &QueryModifier,
    ) -> Result<T, ClientError> {
        let query = QueryParams::new().with_modifier(modifier, content);
        self.transport.get(&path.content(content), &query).await
    }

    async fn read_elements<T: DeserializeOwned>(
        &self,
        content: Content,
        modifier: &QueryModifier,
        paging: &PagingInfo,
    ) -> Result<Page<T>, ClientError> {
        let query = QueryParams::new().with_modifier(modifier, content);
        self.transport
            .get_page(&self.elements_path().content(content), &query, paging)
            .await
    }

    // --- submodel ---

    /// Get the submodel.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get(&self, modifier: &QueryModifier) -> Result<Submodel, ClientError> {
        self.read(&self.root, Content::Normal, modifier).await
    }

    /// Get the submodel without its elements (`$metadata`).
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_metadata(&self) -> Result<Submodel, ClientError> {
        self.read(&self.root, Content::Metadata, &QueryModifier::DEFAULT)
            .await
    }

    /// Get the value-only serialization (`$value`).
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_value(&self, modifier: &QueryModifier) -> Result<Value, ClientError> {
        self.read(&self.root, Content::Value, modifier).await
    }

    /// Get a model reference to the submodel (`$reference`).
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_reference(&self) -> Result<Reference, ClientError> {
        self.read(&self.root, Content::Reference, &QueryModifier::DEFAULT)
            .await
    }

    /// Get the idShortPaths of all elements (`$path`).
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_path(&self, modifier: &QueryModifier) -> Result<Vec<String>, ClientError> {
        self.read(&self.root, Content::Path, modifier).await
    }

    /// Replace the submodel.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn put(&self, submodel: &Submodel) -> Result<(), ClientError> {
        self.transport.put(&self.root, submodel).await
    }

    /// Update the submodel with the attributes present in `submodel`.
    /// Only the modifier's level is sent.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn patch(
        &self,
        submodel: &Submodel,
        modifier: &QueryModifier,
    ) -> Result<(), ClientError> {
        let query = QueryParams::new().with_modifier(&modifier.without_extent(), Content::Normal);
        self.transport.patch(&self.root, &query, submodel).await
    }

    /// Update the submodel's metadata.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn patch_metadata(&self, submodel: &Submodel) -> Result<(), ClientError> {
        self.transport
            .patch(
                &self.root.content(Content::Metadata),
                &QueryParams::new(),
                submodel,
            )
            .await
    }

    /// Update element values from a value-only document.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn patch_value(&self, value: &Value) -> Result<(), ClientError> {
        self.transport
            .patch(&self.root.content(Content::Value), &QueryParams::new(), value)
            .await
    }

    // --- element lists ---

    /// Get one page of top-level elements.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_elements_page(
        &self,
        modifier: &QueryModifier,
        paging: &PagingInfo,
    ) -> Result<Page<SubmodelElement>, ClientError> {
        self.read_elements(Content::Normal, modifier, paging).await
    }

    /// Get every top-level element, following all pages.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_all_elements(
        &self,
        modifier: &QueryModifier,
    ) -> Result<Vec<SubmodelElement>, ClientError> {
        let query = QueryParams::new().with_modifier(modifier, Content::Normal);
        self.transport
            .get_all_pages(&self.elements_path(), &query)
            .await
    }

    /// Get one page of element metadata.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_elements_metadata_page(
        &self,
        paging: &PagingInfo,
    ) -> Result<Page<SubmodelElement>, ClientError> {
        self.read_elements(Content::Metadata, &QueryModifier::DEFAULT, paging)
            .await
    }

    /// Get one page of element values.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_elements_value_page(
        &self,
        modifier: &QueryModifier,
        paging: &PagingInfo,
    ) -> Result<Page<Value>, ClientError> {
        self.read_elements(Content::Value, modifier, paging).await
    }

    /// Get one page of element references.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_elements_reference_page(
        &self,
        paging: &PagingInfo,
    ) -> Result<Page<Reference>, ClientError> {
        self.read_elements(Content::Reference, &QueryModifier::DEFAULT, paging)
            .await
    }

    /// Get one page of element idShortPaths.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_elements_path_page(
        &self,
        modifier: &QueryModifier,
        paging: &PagingInfo,
    ) -> Result<Page<String>, ClientError> {
        self.read_elements(Content::Path, modifier, paging).await
    }

    /// Add a top-level element.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Conflict`] if the idShort is taken, or other
    /// errors on network or API failure.
    pub async fn post_element(
        &self,
        element: &SubmodelElement,
    ) -> Result<SubmodelElement, ClientError> {
        self.transport.post(&self.elements_path(), element).await
    }

    // --- single element ---

    /// Get an element.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_element(
        &self,
        id_short_path: &str,
        modifier: &QueryModifier,
    ) -> Result<SubmodelElement, ClientError> {
        self.read(&self.element_path(id_short_path), Content::Normal, modifier)
            .await
    }

    /// Get an element's metadata.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_element_metadata(
        &self,
        id_short_path: &str,
    ) -> Result<SubmodelElement, ClientError> {
        self.read(
            &self.element_path(id_short_path),
            Content::Metadata,
            &QueryModifier::DEFAULT,
        )
        .await
    }

    /// Get an element's value-only serialization.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_element_value(
        &self,
        id_short_path: &str,
        modifier: &QueryModifier,
    ) -> Result<Value, ClientError> {
        self.read(&self.element_path(id_short_path), Content::Value, modifier)
            .await
    }

    /// Get a model reference to an element.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_element_reference(
        &self,
        id_short_path: &str,
    ) -> Result<Reference, ClientError> {
        self.read(
            &self.element_path(id_short_path),
            Content::Reference,
            &QueryModifier::DEFAULT,
        )
        .await
    }

    /// Get the idShortPaths of an element and its children.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_element_path(
        &self,
        id_short_path: &str,
        modifier: &QueryModifier,
    ) -> Result<Vec<String>, ClientError> {
        self.read(&self.element_path(id_short_path), Content::Path, modifier)
            .await
    }

    /// Add a child to a collection, list or entity.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn post_element_at(
        &self,
        id_short_path: &str,
        element: &SubmodelElement,
    ) -> Result<SubmodelElement, ClientError> {
        self.transport
            .post(&self.element_path(id_short_path), element)
            .await
    }

    /// Replace an element.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn put_element(
        &self,
        id_short_path: &str,
        element: &SubmodelElement,
    ) -> Result<(), ClientError> {
        self.transport
            .put(&self.element_path(id_short_path), element)
            .await
    }

    /// Update an element with the attributes present in `element`.
    /// Only the modifier's level is sent.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn patch_element(
        &self,
        id_short_path: &str,
        element: &SubmodelElement,
        modifier: &QueryModifier,
    ) -> Result<(), ClientError> {
        let query = QueryParams::new().with_modifier(&modifier.without_extent(), Content::Normal);
        self.transport
            .patch(&self.element_path(id_short_path), &query, element)
            .await
    }

    /// Update an element's metadata.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn patch_element_metadata(
        &self,
        id_short_path: &str,
        element: &SubmodelElement,
    ) -> Result<(), ClientError> {
        self.transport
            .patch(
                &self.element_path(id_short_path).content(Content::Metadata),
                &QueryParams::new(),
                element,
            )
            .await
    }

    /// Set an element's value from its value-only serialization.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn patch_element_value(
        &self,
        id_short_path: &str,
        value: &Value,
    ) -> Result<(), ClientError> {
        self.transport
            .patch(
                &self.element_path(id_short_path).content(Content::Value),
                &QueryParams::new(),
                value,
            )
            .await
    }

    /// Delete an element.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_element(&self, id_short_path: &str) -> Result<(), ClientError> {
        self.transport
            .delete(&self.element_path(id_short_path))
            .await
    }

    // --- attachments ---

    /// Download the content of a File or Blob element.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_attachment(&self, id_short_path: &str) -> Result<Vec<u8>, ClientError> {
        self.transport
            .get_bytes(
                &self.element_path(id_short_path).segment("attachment"),
                &QueryParams::new(),
                None,
            )
            .await
    }

    /// Delete the content of a File element.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_attachment(&self, id_short_path: &str) -> Result<(), ClientError> {
        self.transport
            .delete(&self.element_path(id_short_path).segment("attachment"))
            .await
    }

    // --- operations ---

    /// Invoke an operation and wait for its result.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn invoke_operation(
        &self,
        id_short_path: &str,
        request: &OperationRequest,
    ) -> Result<OperationResult, ClientError> {
        self.transport
            .invoke(&self.element_path(id_short_path).segment("invoke"), request)
            .await
    }

    /// Invoke an operation with value-only arguments.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn invoke_operation_value_only(
        &self,
        id_short_path: &str,
        request: &OperationRequestValueOnly,
    ) -> Result<OperationResultValueOnly, ClientError> {
        let path = self
            .element_path(id_short_path)
            .segment("invoke")
            .content(Content::Value);
        self.transport.invoke(&path, request).await
    }

    /// Start an operation without waiting for it to finish.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Parse`] if the server's `Location` header does
    /// not point at an operation status, or other errors on network or API
    /// failure.
    pub async fn invoke_operation_async(
        &self,
        id_short_path: &str,
        request: &OperationRequest,
    ) -> Result<OperationHandle, ClientError> {
        let location = self
            .transport
            .post_accepted(
                &self.element_path(id_short_path).segment("invoke-async"),
                request,
            )
            .await?;

        tracing::debug!(id_short_path, %location, "operation started asynchronously");

        OperationHandle::from_location(&location).ok_or_else(|| {
            ClientError::Parse(format!("no operation handle in Location {location:?}"))
        })
    }

    /// Poll the state of an asynchronous invocation.
    ///
    /// A `302` from the server means the result is ready; it is reported as
    /// [`ExecutionState::Completed`] with `success` unknown until
    /// [`Self::get_operation_result`] is called.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_operation_status(
        &self,
        id_short_path: &str,
        handle: &OperationHandle,
    ) -> Result<BaseOperationResult, ClientError> {
        let path = self
            .element_path(id_short_path)
            .segment("operation-status")
            .segment(&handle.handle_id);
        let response = self
            .transport
            .exchange(
                Method::GET,
                &path,
                &QueryParams::new(),
                None,
                &[StatusCode::OK, StatusCode::FOUND],
            )
            .await?;

        if response.status() == StatusCode::FOUND {
            return Ok(BaseOperationResult {
                messages: Vec::new(),
                execution_state: ExecutionState::Completed,
                success: None,
            });
        }
        read_json(response).await
    }

    /// Fetch the result of a finished asynchronous invocation.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_operation_result(
        &self,
        id_short_path: &str,
        handle: &OperationHandle,
    ) -> Result<OperationResult, ClientError> {
        let path = self
            .element_path(id_short_path)
            .segment("operation-results")
            .segment(&handle.handle_id);
        self.transport.get(&path, &QueryParams::new()).await
    }
}
