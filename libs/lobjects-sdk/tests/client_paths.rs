//! End-to-end path assertions against a recording fake transport.
//!
//! The transport seam is an injected trait, so these tests substitute a fake
//! that records every `(method, path, body)` triple and returns a canned
//! response. Path strings are asserted byte-for-byte: query-string field
//! order and the `q` filter wire format are observable contract.

use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

use lobjects_sdk::{
    ClientError, FaRegistriesClient, FaRegistry, ItemsClient, Method, QueryOptions,
    SalesInvoicesClient, SortDir, Transport, TransportError,
};

#[derive(Clone, Debug, PartialEq)]
struct Call {
    method: Method,
    path: String,
    body: Option<Value>,
}

struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
    response: Value,
}

impl RecordingTransport {
    fn returning(response: Value) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response,
        })
    }

    fn empty_page() -> Arc<Self> {
        Self::returning(json!({"items": [], "totalCount": 0}))
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn single_call(&self) -> Call {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one transport call");
        calls.into_iter().next().unwrap()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_owned(),
            body,
        });
        Ok(self.response.clone())
    }
}

struct FailingTransport;

#[async_trait]
impl Transport for FailingTransport {
    async fn execute(
        &self,
        _method: Method,
        _path: &str,
        _body: Option<Value>,
    ) -> Result<Value, TransportError> {
        Err(TransportError::new("connection refused"))
    }
}

#[tokio::test]
async fn get_all_serializes_options_in_documented_order() {
    let transport = RecordingTransport::empty_page();
    let fa = FaRegistriesClient::new(transport.clone());

    let options = QueryOptions::new().limit(10).offset(0).sort(["CODE"]);
    let page = fa.get_all(Some(&options)).await.unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total_count, Some(0));
    assert_eq!(
        transport.single_call(),
        Call {
            method: Method::Get,
            path: "/FARegistries?limit=10&offset=0&sort=CODE".to_owned(),
            body: None,
        }
    );
}

#[tokio::test]
async fn get_all_without_options_omits_the_separator() {
    let transport = RecordingTransport::empty_page();
    let fa = FaRegistriesClient::new(transport.clone());

    fa.get_all(None).await.unwrap();

    assert_eq!(transport.single_call().path, "/FARegistries");
}

#[tokio::test]
async fn search_by_code_builds_the_like_filter() {
    let transport = RecordingTransport::empty_page();
    let fa = FaRegistriesClient::new(transport.clone());

    fa.search_by_code("test").await.unwrap();

    assert_eq!(
        transport.single_call().path,
        "/FARegistries?q=CODE like 'test*'"
    );
}

#[tokio::test]
async fn search_merges_criteria_over_base_options() {
    let transport = RecordingTransport::empty_page();
    let items = ItemsClient::new(transport.clone());

    let criteria = lobjects_sdk::SearchCriteria::new()
        .field(lobjects_sdk::ItemField::CardType, 1)
        .field(
            lobjects_sdk::ItemField::Code,
            lobjects_sdk::FieldOps::new().like("AB"),
        );
    let options = QueryOptions::new().limit(5).sort(("CODE", SortDir::Desc));
    items.search(&criteria, Some(&options)).await.unwrap();

    assert_eq!(
        transport.single_call().path,
        "/items?limit=5&sort=CODE&sortDirection=desc&q=CARD_TYPE eq 1 and CODE like 'AB*'"
    );
}

#[tokio::test]
async fn get_by_id_formats_the_resource_path() {
    let transport = RecordingTransport::returning(json!({"CODE": "FA-1"}));
    let fa = FaRegistriesClient::new(transport.clone());

    let card = fa.get_by_id(5, None).await.unwrap();

    assert_eq!(card.code.as_deref(), Some("FA-1"));
    let call = transport.single_call();
    assert_eq!(call.method, Method::Get);
    assert_eq!(call.path, "/FARegistries/5");
}

#[tokio::test]
async fn crud_verbs_map_to_http_methods() {
    let transport = RecordingTransport::returning(json!({"CODE": "FA-1"}));
    let fa = FaRegistriesClient::new(transport.clone());

    let card = FaRegistry {
        code: Some("FA-1".to_owned()),
        ..FaRegistry::default()
    };

    fa.create(&card).await.unwrap();
    fa.update(7, &card).await.unwrap();
    fa.patch(7, &json!({"DEFINITION": "Lathe"})).await.unwrap();

    let calls = transport.calls();
    assert_eq!(
        calls[0],
        Call {
            method: Method::Post,
            path: "/FARegistries".to_owned(),
            body: Some(json!({"CODE": "FA-1"})),
        }
    );
    assert_eq!(
        calls[1],
        Call {
            method: Method::Put,
            path: "/FARegistries/7".to_owned(),
            body: Some(json!({"CODE": "FA-1"})),
        }
    );
    assert_eq!(
        calls[2],
        Call {
            method: Method::Patch,
            path: "/FARegistries/7".to_owned(),
            body: Some(json!({"DEFINITION": "Lathe"})),
        }
    );
}

#[tokio::test]
async fn delete_discards_the_response_body() {
    let transport = RecordingTransport::returning(Value::Null);
    let fa = FaRegistriesClient::new(transport.clone());

    fa.delete(9).await.unwrap();

    assert_eq!(
        transport.single_call(),
        Call {
            method: Method::Delete,
            path: "/FARegistries/9".to_owned(),
            body: None,
        }
    );
}

#[tokio::test]
async fn rpc_operations_preserve_path_templates() {
    let transport = RecordingTransport::returning(json!({"ok": true}));
    let invoices = SalesInvoicesClient::new(transport.clone());

    invoices
        .apply_campaign(3, &json!({"campaign": "SUMMER"}))
        .await
        .unwrap();
    invoices.export_to_xml(3).await.unwrap();

    let calls = transport.calls();
    assert_eq!(
        calls[0],
        Call {
            method: Method::Post,
            path: "/salesInvoices/3/ApplyCampaign".to_owned(),
            body: Some(json!({"campaign": "SUMMER"})),
        }
    );
    assert_eq!(
        calls[1],
        Call {
            method: Method::Get,
            path: "/salesInvoices/3/ExportToXML".to_owned(),
            body: None,
        }
    );
}

#[tokio::test]
async fn sub_resource_listing_uses_the_literal_segment() {
    let transport = RecordingTransport::returning(json!([]));
    let items = ItemsClient::new(transport.clone());

    items.seri_lots(4).await.unwrap();

    assert_eq!(transport.single_call().path, "/items/4/SeriLots");
}

#[tokio::test]
async fn transport_errors_propagate_to_the_caller() {
    let fa = FaRegistriesClient::new(Arc::new(FailingTransport));

    let err = fa.get_all(None).await.unwrap_err();
    match err {
        ClientError::Transport(inner) => {
            assert_eq!(inner.to_string(), "transport error: connection refused");
        }
        ClientError::Decode(_) => panic!("expected a transport error"),
    }
}
