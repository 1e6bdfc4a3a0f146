//! Sales invoices (`salesInvoices`).
//!
//! Lower-case resource segment: the wrapped service is inconsistent about
//! casing across entities and clients must reproduce each path literally.

use lobjects_client::{ApiResponse, ClientError, entity_client, entity_operations};
use lobjects_query::{FieldOps, QueryOptions, SearchCriteria, SearchField};
use serde::{Deserialize, Serialize};

/// Search-criteria fields for sales invoices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SalesInvoiceField {
    Number,
    DocNumber,
    ArpCode,
}

impl SearchField for SalesInvoiceField {
    const FIELDS: &'static [Self] = &[Self::Number, Self::DocNumber, Self::ArpCode];

    fn key(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::DocNumber => "docNumber",
            Self::ArpCode => "arpCode",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::Number => "NUMBER",
            Self::DocNumber => "DOC_NUMBER",
            Self::ArpCode => "ARP_CODE",
        }
    }
}

/// Sales invoice header.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SalesInvoice {
    #[serde(
        rename = "INTERNAL_REFERENCE",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub internal_reference: Option<i64>,
    #[serde(rename = "NUMBER", default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(rename = "DOC_NUMBER", default, skip_serializing_if = "Option::is_none")]
    pub doc_number: Option<String>,
    #[serde(rename = "ARP_CODE", default, skip_serializing_if = "Option::is_none")]
    pub arp_code: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

entity_client! {
    /// Client for sales invoices.
    pub struct SalesInvoicesClient {
        resource: "salesInvoices",
        model: SalesInvoice,
    }
}

entity_operations! {
    impl SalesInvoicesClient {
        /// Apply a campaign to the invoice; the payload carries the campaign
        /// parameters.
        Post "/salesInvoices/{id}/ApplyCampaign" => pub fn apply_campaign(id: i64) with body;
        /// Attach serial/lot assignments to the invoice lines.
        Post "/salesInvoices/{id}/AddSeriLots" => pub fn add_seri_lots(id: i64) with body;
        /// Export one invoice in the service's XML interchange format.
        Get "/salesInvoices/{id}/ExportToXML" => pub fn export_to_xml(id: i64);
    }
}

impl SalesInvoicesClient {
    /// List invoices whose number starts with `number`.
    ///
    /// # Errors
    ///
    /// Propagates transport failures unchanged; fails with a decode error
    /// when the response body does not match the model.
    pub async fn search_by_number(
        &self,
        number: &str,
    ) -> Result<ApiResponse<SalesInvoice>, ClientError> {
        let criteria =
            SearchCriteria::new().field(SalesInvoiceField::Number, FieldOps::new().like(number));
        self.search(&criteria, None).await
    }

    /// Run a criteria search; the compiled filter replaces any `q` in the
    /// base options.
    ///
    /// # Errors
    ///
    /// Propagates transport failures unchanged; fails with a decode error
    /// when the response body does not match the model.
    pub async fn search(
        &self,
        criteria: &SearchCriteria<SalesInvoiceField>,
        options: Option<&QueryOptions>,
    ) -> Result<ApiResponse<SalesInvoice>, ClientError> {
        let mut options = options.cloned().unwrap_or_default();
        options.q = criteria.compile();
        self.get_all(Some(&options)).await
    }
}
