use aas_client::{AasClient, AasClientConfig, ClientError};
use aas_client_core::model::{
    ExecutionState, KeyType, OperationHandle, OperationRequest, OperationRequestValueOnly,
    Reference, Submodel, SubmodelElement,
};
use aas_client_core::{encode_id_base64url, Extent, Level, PagingInfo, QueryModifier};
use mockito::{Matcher, Server};
use serde_json::{json, Map};

const SUBMODEL_ID: &str = "urn:example:sm:data";

fn client(server: &Server) -> AasClient {
    AasClient::new(AasClientConfig::new(server.url())).unwrap()
}

fn root() -> String {
    format!("/submodels/{}", encode_id_base64url(SUBMODEL_ID))
}

#[tokio::test]
async fn get_submodel_with_modifiers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", root().as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("level".into(), "core".into()),
            Matcher::UrlEncoded("extent".into(), "withBlobValue".into()),
        ]))
        .with_status(200)
        .with_body(json!({"modelType": "Submodel", "id": SUBMODEL_ID}).to_string())
        .create_async()
        .await;

    let modifier = QueryModifier {
        level: Some(Level::Core),
        extent: Some(Extent::WithBlobValue),
    };
    let submodel = client(&server)
        .submodel(SUBMODEL_ID)
        .get(&modifier)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(submodel.id, SUBMODEL_ID);
}

#[tokio::test]
async fn path_content_drops_extent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", format!("{}/$path", root()).as_str())
        .match_query(Matcher::UrlEncoded("level".into(), "deep".into()))
        .with_status(200)
        .with_body(r#"["Temperature","Limits","Limits.Max"]"#)
        .create_async()
        .await;

    let paths = client(&server)
        .submodel(SUBMODEL_ID)
        .get_path(&QueryModifier::MAXIMAL)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(paths, ["Temperature", "Limits", "Limits.Max"]);
}

#[tokio::test]
async fn metadata_sends_no_modifiers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", format!("{}/$metadata", root()).as_str())
        .with_status(200)
        .with_body(json!({"modelType": "Submodel", "id": SUBMODEL_ID}).to_string())
        .create_async()
        .await;

    client(&server)
        .submodel(SUBMODEL_ID)
        .get_metadata()
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn element_value_round_trip() {
    let mut server = Server::new_async().await;
    let path = format!("{}/submodel-elements/Limits.Max/$value", root());
    let get = server
        .mock("GET", path.as_str())
        .with_status(200)
        .with_body(r#"{"Max":"85"}"#)
        .create_async()
        .await;
    let patch = server
        .mock("PATCH", path.as_str())
        .match_body(Matcher::Json(json!({"Max": "90"})))
        .with_status(204)
        .create_async()
        .await;

    let submodel = client(&server).submodel(SUBMODEL_ID);
    let value = submodel
        .get_element_value("Limits.Max", &QueryModifier::DEFAULT)
        .await
        .unwrap();
    submodel
        .patch_element_value("Limits.Max", &json!({"Max": "90"}))
        .await
        .unwrap();

    get.assert_async().await;
    patch.assert_async().await;
    assert_eq!(value, json!({"Max": "85"}));
}

#[tokio::test]
async fn list_index_brackets_stay_literal() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            format!("{}/submodel-elements/Components[0].Name", root()).as_str(),
        )
        .with_status(200)
        .with_body(
            serde_json::to_string(&SubmodelElement::property("Name", "xs:string", "Motor"))
                .unwrap(),
        )
        .create_async()
        .await;

    let element = client(&server)
        .submodel(SUBMODEL_ID)
        .get_element("Components[0].Name", &QueryModifier::DEFAULT)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(element.id_short.as_deref(), Some("Name"));
}

#[tokio::test]
async fn elements_page_and_post() {
    let mut server = Server::new_async().await;
    let elements = format!("{}/submodel-elements", root());
    let element = SubmodelElement::property("Temperature", "xs:double", "21.5");
    let list = server
        .mock("GET", elements.as_str())
        .match_query(Matcher::UrlEncoded("limit".into(), "1".into()))
        .with_status(200)
        .with_body(json!({"result": [element], "paging_metadata": {"cursor": ""}}).to_string())
        .create_async()
        .await;
    let post = server
        .mock("POST", elements.as_str())
        .match_body(Matcher::PartialJson(json!({"idShort": "Temperature"})))
        .with_status(201)
        .with_body(serde_json::to_string(&element).unwrap())
        .create_async()
        .await;

    let submodel = client(&server).submodel(SUBMODEL_ID);
    let page = submodel
        .get_elements_page(&QueryModifier::DEFAULT, &PagingInfo::limit(1))
        .await
        .unwrap();
    let created = submodel.post_element(&element).await.unwrap();

    list.assert_async().await;
    post.assert_async().await;
    assert!(!page.has_more(), "empty cursor ends paging");
    assert_eq!(created, element);
}

#[tokio::test]
async fn delete_element_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock(
            "DELETE",
            format!("{}/submodel-elements/Missing", root()).as_str(),
        )
        .with_status(404)
        .with_body(r#"{"messages":[{"messageType":"Error","text":"no such element"}]}"#)
        .create_async()
        .await;

    let err = client(&server)
        .submodel(SUBMODEL_ID)
        .delete_element("Missing")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.messages()[0].text, "no such element");
}

#[tokio::test]
async fn attachment_bytes() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            format!("{}/submodel-elements/Manual/attachment", root()).as_str(),
        )
        .with_status(200)
        .with_header("content-type", "application/pdf")
        .with_body(b"%PDF-1.7")
        .create_async()
        .await;

    let bytes = client(&server)
        .submodel(SUBMODEL_ID)
        .get_attachment("Manual")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(bytes, b"%PDF-1.7");
}

#[tokio::test]
async fn invoke_synchronously() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "POST",
            format!("{}/submodel-elements/Calc/invoke", root()).as_str(),
        )
        .match_body(Matcher::PartialJson(json!({"clientTimeoutDuration": "PT60S"})))
        .with_status(200)
        .with_body(
            json!({
                "executionState": "Completed",
                "success": true,
                "outputArguments": [
                    {"value": {"modelType": "Property", "idShort": "sum", "valueType": "xs:int", "value": "2"}}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let request = OperationRequest::new(vec![
        SubmodelElement::property("a", "xs:int", "1").into()
    ]);
    let result = client(&server)
        .submodel(SUBMODEL_ID)
        .invoke_operation("Calc", &request)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(result.success);
    assert_eq!(result.output_arguments[0].value.id_short.as_deref(), Some("sum"));
}

#[tokio::test]
async fn invoke_value_only() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "POST",
            format!("{}/submodel-elements/Calc/invoke/$value", root()).as_str(),
        )
        .with_status(200)
        .with_body(
            json!({"executionState": "Completed", "success": true, "outputArguments": {"sum": 2}})
                .to_string(),
        )
        .create_async()
        .await;

    let mut inputs = Map::new();
    inputs.insert("a".to_string(), json!(1));
    let result = client(&server)
        .submodel(SUBMODEL_ID)
        .invoke_operation_value_only("Calc", &OperationRequestValueOnly::new(inputs))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.output_arguments["sum"], json!(2));
}

#[tokio::test]
async fn async_invocation_lifecycle() {
    let mut server = Server::new_async().await;
    let base = format!("{}/submodel-elements/Calc", root());
    let status_path = format!("{base}/operation-status/h-1");
    let invoke = server
        .mock("POST", format!("{base}/invoke-async").as_str())
        .with_status(202)
        .with_header("location", &status_path)
        .create_async()
        .await;
    let running = server
        .mock("GET", status_path.as_str())
        .with_status(200)
        .with_body(r#"{"executionState":"Running"}"#)
        .expect(1)
        .create_async()
        .await;

    let submodel = client(&server).submodel(SUBMODEL_ID);
    let handle = submodel
        .invoke_operation_async("Calc", &OperationRequest::new(Vec::new()))
        .await
        .unwrap();
    assert_eq!(handle, OperationHandle::new("h-1"));

    let status = submodel.get_operation_status("Calc", &handle).await.unwrap();
    assert_eq!(status.execution_state, ExecutionState::Running);
    assert_eq!(status.success, None);
    running.assert_async().await;
    running.remove_async().await;

    let done = server
        .mock("GET", status_path.as_str())
        .with_status(302)
        .with_header("location", &format!("{base}/operation-results/h-1"))
        .create_async()
        .await;
    let status = submodel.get_operation_status("Calc", &handle).await.unwrap();
    assert!(status.execution_state.is_finished());

    let result_mock = server
        .mock("GET", format!("{base}/operation-results/h-1").as_str())
        .with_status(200)
        .with_body(r#"{"executionState":"Completed","success":true}"#)
        .create_async()
        .await;
    let result = submodel.get_operation_result("Calc", &handle).await.unwrap();

    invoke.assert_async().await;
    done.assert_async().await;
    result_mock.assert_async().await;
    assert!(result.success);
}

#[tokio::test]
async fn async_invocation_without_location_fails() {
    let mut server = Server::new_async().await;
    server
        .mock(
            "POST",
            format!("{}/submodel-elements/Calc/invoke-async", root()).as_str(),
        )
        .with_status(202)
        .create_async()
        .await;

    let err = client(&server)
        .submodel(SUBMODEL_ID)
        .invoke_operation_async("Calc", &OperationRequest::new(Vec::new()))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Parse(_)), "{err:?}");
}

#[tokio::test]
async fn submodel_through_shell() {
    let mut server = Server::new_async().await;
    let path = format!(
        "/shells/{}/submodels/{}/submodel-elements/Temperature",
        encode_id_base64url("urn:aas:1"),
        encode_id_base64url(SUBMODEL_ID)
    );
    let mock = server
        .mock("PUT", path.as_str())
        .with_status(204)
        .create_async()
        .await;

    client(&server)
        .shell("urn:aas:1")
        .submodel(SUBMODEL_ID)
        .put_element(
            "Temperature",
            &SubmodelElement::property("Temperature", "xs:double", "22"),
        )
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn escaped_handle_is_sent_back_once_encoded() {
    let mut server = Server::new_async().await;
    let base = format!("{}/submodel-elements/Calc", root());
    let status_path = format!("{base}/operation-status/a%20b");
    let location = format!("{}{status_path}", server.url());
    server
        .mock("POST", format!("{base}/invoke-async").as_str())
        .with_status(202)
        .with_header("location", &location)
        .create_async()
        .await;
    let status_mock = server
        .mock("GET", status_path.as_str())
        .with_status(200)
        .with_body(r#"{"executionState":"Running"}"#)
        .expect(1)
        .create_async()
        .await;

    let submodel = client(&server).submodel(SUBMODEL_ID);
    let handle = submodel
        .invoke_operation_async("Calc", &OperationRequest::new(Vec::new()))
        .await
        .unwrap();
    assert_eq!(handle, OperationHandle::new("a b"));

    let status = submodel.get_operation_status("Calc", &handle).await.unwrap();

    status_mock.assert_async().await;
    assert_eq!(status.execution_state, ExecutionState::Running);
}

#[tokio::test]
async fn patch_sends_level_only() {
    let mut server = Server::new_async().await;
    let element_path = format!("{}/submodel-elements/Temperature", root());
    let submodel_patch = server
        .mock("PATCH", root().as_str())
        .match_query(Matcher::Exact("level=deep".into()))
        .match_body(Matcher::PartialJson(json!({"id": SUBMODEL_ID})))
        .with_status(204)
        .create_async()
        .await;
    let element_patch = server
        .mock("PATCH", element_path.as_str())
        .match_query(Matcher::Exact("level=deep".into()))
        .match_body(Matcher::PartialJson(json!({"idShort": "Temperature"})))
        .with_status(204)
        .create_async()
        .await;

    let submodel = client(&server).submodel(SUBMODEL_ID);
    submodel
        .patch(&Submodel::new(SUBMODEL_ID), &QueryModifier::MAXIMAL)
        .await
        .unwrap();
    submodel
        .patch_element(
            "Temperature",
            &SubmodelElement::property("Temperature", "xs:double", "22.0"),
            &QueryModifier::MAXIMAL,
        )
        .await
        .unwrap();

    submodel_patch.assert_async().await;
    element_patch.assert_async().await;
}

#[tokio::test]
async fn patch_metadata_and_value() {
    let mut server = Server::new_async().await;
    let metadata = server
        .mock("PATCH", format!("{}/$metadata", root()).as_str())
        .match_body(Matcher::PartialJson(json!({"idShort": "Data"})))
        .with_status(204)
        .create_async()
        .await;
    let value = server
        .mock("PATCH", format!("{}/$value", root()).as_str())
        .match_body(Matcher::Json(json!({"Temperature": "23.0"})))
        .with_status(204)
        .create_async()
        .await;

    let submodel = client(&server).submodel(SUBMODEL_ID);
    let mut update = Submodel::new(SUBMODEL_ID);
    update.id_short = Some("Data".to_string());
    submodel.patch_metadata(&update).await.unwrap();
    submodel
        .patch_value(&json!({"Temperature": "23.0"}))
        .await
        .unwrap();

    metadata.assert_async().await;
    value.assert_async().await;
}

#[tokio::test]
async fn all_elements_follow_cursor() {
    let mut server = Server::new_async().await;
    let elements = format!("{}/submodel-elements", root());
    let first = server
        .mock("GET", elements.as_str())
        .match_query(Matcher::Exact("level=core".into()))
        .with_status(200)
        .with_body(
            json!({
                "result": [SubmodelElement::property("A", "xs:int", "1")],
                "paging_metadata": {"cursor": "p2"}
            })
            .to_string(),
        )
        .create_async()
        .await;
    let second = server
        .mock("GET", elements.as_str())
        .match_query(Matcher::Exact("level=core&cursor=p2".into()))
        .with_status(200)
        .with_body(
            json!({
                "result": [SubmodelElement::property("B", "xs:int", "2")],
                "paging_metadata": {}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let all = client(&server)
        .submodel(SUBMODEL_ID)
        .get_all_elements(&QueryModifier::level(Level::Core))
        .await
        .unwrap();

    first.assert_async().await;
    second.assert_async().await;
    let names: Vec<_> = all.iter().filter_map(|e| e.id_short.as_deref()).collect();
    assert_eq!(names, ["A", "B"]);
}

#[tokio::test]
async fn element_list_contents() {
    let mut server = Server::new_async().await;
    let elements = format!("{}/submodel-elements", root());
    let reference = Reference::model(KeyType::Property, "Temperature");
    let metadata = server
        .mock("GET", format!("{elements}/$metadata").as_str())
        .with_status(200)
        .with_body(
            json!({"result": [{"modelType": "Property", "idShort": "Temperature"}]}).to_string(),
        )
        .create_async()
        .await;
    let value = server
        .mock("GET", format!("{elements}/$value").as_str())
        .match_query(Matcher::Exact(
            "level=deep&extent=withBlobValue&limit=2".into(),
        ))
        .with_status(200)
        .with_body(r#"{"result":[{"Temperature":"21.5"}],"paging_metadata":{}}"#)
        .create_async()
        .await;
    let references = server
        .mock("GET", format!("{elements}/$reference").as_str())
        .with_status(200)
        .with_body(json!({"result": [reference], "paging_metadata": {}}).to_string())
        .create_async()
        .await;
    let paths = server
        .mock("GET", format!("{elements}/$path").as_str())
        .match_query(Matcher::Exact("level=deep".into()))
        .with_status(200)
        .with_body(r#"{"result":["Temperature"],"paging_metadata":{}}"#)
        .create_async()
        .await;

    let submodel = client(&server).submodel(SUBMODEL_ID);
    let metadata_page = submodel
        .get_elements_metadata_page(&PagingInfo::all())
        .await
        .unwrap();
    let value_page = submodel
        .get_elements_value_page(&QueryModifier::MAXIMAL, &PagingInfo::limit(2))
        .await
        .unwrap();
    let reference_page = submodel
        .get_elements_reference_page(&PagingInfo::all())
        .await
        .unwrap();
    let path_page = submodel
        .get_elements_path_page(&QueryModifier::MAXIMAL, &PagingInfo::all())
        .await
        .unwrap();

    metadata.assert_async().await;
    value.assert_async().await;
    references.assert_async().await;
    paths.assert_async().await;
    assert_eq!(
        metadata_page.result()[0].id_short.as_deref(),
        Some("Temperature")
    );
    assert_eq!(value_page.result()[0]["Temperature"], "21.5");
    assert_eq!(reference_page.result()[0], reference);
    assert_eq!(path_page.result(), ["Temperature".to_string()]);
}

#[tokio::test]
async fn single_element_contents() {
    let mut server = Server::new_async().await;
    let element = format!("{}/submodel-elements/Limits.Max", root());
    let reference = Reference::model(KeyType::Property, "Max");
    let metadata = server
        .mock("GET", format!("{element}/$metadata").as_str())
        .with_status(200)
        .with_body(r#"{"modelType":"Property","idShort":"Max"}"#)
        .create_async()
        .await;
    let reference_mock = server
        .mock("GET", format!("{element}/$reference").as_str())
        .with_status(200)
        .with_body(serde_json::to_string(&reference).unwrap())
        .create_async()
        .await;
    let path = server
        .mock("GET", format!("{element}/$path").as_str())
        .match_query(Matcher::Exact("level=core".into()))
        .with_status(200)
        .with_body(r#"["Limits.Max"]"#)
        .create_async()
        .await;

    let submodel = client(&server).submodel(SUBMODEL_ID);
    let fetched = submodel.get_element_metadata("Limits.Max").await.unwrap();
    let fetched_reference = submodel.get_element_reference("Limits.Max").await.unwrap();
    let modifier = QueryModifier {
        level: Some(Level::Core),
        extent: Some(Extent::WithoutBlobValue),
    };
    let paths = submodel
        .get_element_path("Limits.Max", &modifier)
        .await
        .unwrap();

    metadata.assert_async().await;
    reference_mock.assert_async().await;
    path.assert_async().await;
    assert_eq!(fetched.id_short.as_deref(), Some("Max"));
    assert_eq!(fetched_reference, reference);
    assert_eq!(paths, ["Limits.Max"]);
}

#[tokio::test]
async fn post_into_collection_and_patch_metadata() {
    let mut server = Server::new_async().await;
    let collection = format!("{}/submodel-elements/Limits", root());
    let element = SubmodelElement::property("Min", "xs:double", "-10");
    let post = server
        .mock("POST", collection.as_str())
        .match_body(Matcher::PartialJson(json!({"idShort": "Min"})))
        .with_status(201)
        .with_body(serde_json::to_string(&element).unwrap())
        .create_async()
        .await;
    let patch = server
        .mock("PATCH", format!("{collection}.Min/$metadata").as_str())
        .match_body(Matcher::PartialJson(json!({"idShort": "Min"})))
        .with_status(204)
        .create_async()
        .await;

    let submodel = client(&server).submodel(SUBMODEL_ID);
    let created = submodel.post_element_at("Limits", &element).await.unwrap();
    submodel
        .patch_element_metadata("Limits.Min", &element)
        .await
        .unwrap();

    post.assert_async().await;
    patch.assert_async().await;
    assert_eq!(created, element);
}

#[tokio::test]
async fn delete_attachment_expects_no_content() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "DELETE",
            format!("{}/submodel-elements/Manual/attachment", root()).as_str(),
        )
        .with_status(204)
        .create_async()
        .await;

    client(&server)
        .submodel(SUBMODEL_ID)
        .delete_attachment("Manual")
        .await
        .unwrap();

    mock.assert_async().await;
}
