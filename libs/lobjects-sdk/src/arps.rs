//! AR/AP cards (`Arps` — customer and vendor accounts).

use lobjects_client::{ApiResponse, ClientError, entity_client, entity_operations};
use lobjects_query::{FieldOps, QueryOptions, SearchCriteria, SearchField};
use serde::{Deserialize, Serialize};

/// Search-criteria fields for AR/AP cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArpField {
    Code,
    Title,
    AccountType,
}

impl SearchField for ArpField {
    const FIELDS: &'static [Self] = &[Self::Code, Self::Title, Self::AccountType];

    fn key(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Title => "title",
            Self::AccountType => "accountType",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::Code => "CODE",
            Self::Title => "TITLE",
            Self::AccountType => "ACCOUNT_TYPE",
        }
    }
}

/// AR/AP account card.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Arp {
    #[serde(
        rename = "INTERNAL_REFERENCE",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub internal_reference: Option<i64>,
    #[serde(rename = "CODE", default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "TITLE", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        rename = "ACCOUNT_TYPE",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub account_type: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

entity_client! {
    /// Client for AR/AP account cards.
    pub struct ArpsClient {
        resource: "Arps",
        model: Arp,
    }
}

entity_operations! {
    impl ArpsClient {
        /// List ledger transactions recorded against the card.
        Get "/Arps/{id}/Transactions" => pub fn transactions(id: i64);
    }
}

impl ArpsClient {
    /// List cards whose code starts with `code`.
    ///
    /// # Errors
    ///
    /// Propagates transport failures unchanged; fails with a decode error
    /// when the response body does not match the model.
    pub async fn search_by_code(&self, code: &str) -> Result<ApiResponse<Arp>, ClientError> {
        let criteria = SearchCriteria::new().field(ArpField::Code, FieldOps::new().like(code));
        self.search(&criteria, None).await
    }

    /// List cards whose title starts with `title`.
    ///
    /// # Errors
    ///
    /// Propagates transport failures unchanged; fails with a decode error
    /// when the response body does not match the model.
    pub async fn search_by_title(&self, title: &str) -> Result<ApiResponse<Arp>, ClientError> {
        let criteria = SearchCriteria::new().field(ArpField::Title, FieldOps::new().like(title));
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
        criteria: &SearchCriteria<ArpField>,
        options: Option<&QueryOptions>,
    ) -> Result<ApiResponse<Arp>, ClientError> {
        let mut options = options.cloned().unwrap_or_default();
        options.q = criteria.compile();
        self.get_all(Some(&options)).await
    }
}
