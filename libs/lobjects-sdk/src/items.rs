//! Inventory items (`items`).

use lobjects_client::{ApiResponse, ClientError, entity_client, entity_operations};
use lobjects_query::{FieldOps, QueryOptions, SearchCriteria, SearchField};
use serde::{Deserialize, Serialize};

/// Search-criteria fields for inventory items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemField {
    Code,
    Name,
    CardType,
}

impl SearchField for ItemField {
    const FIELDS: &'static [Self] = &[Self::Code, Self::Name, Self::CardType];

    fn key(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Name => "name",
            Self::CardType => "cardType",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::Code => "CODE",
            Self::Name => "NAME",
            Self::CardType => "CARD_TYPE",
        }
    }
}

/// Inventory item card.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Item {
    #[serde(
        rename = "INTERNAL_REFERENCE",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub internal_reference: Option<i64>,
    #[serde(rename = "CODE", default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "NAME", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "CARD_TYPE", default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

entity_client! {
    /// Client for inventory item cards.
    pub struct ItemsClient {
        resource: "items",
        model: Item,
    }
}

entity_operations! {
    impl ItemsClient {
        /// List serial/lot records attached to the item.
        Get "/items/{id}/SeriLots" => pub fn seri_lots(id: i64);
    }
}

impl ItemsClient {
    /// List items whose code starts with `code`.
    ///
    /// # Errors
    ///
    /// Propagates transport failures unchanged; fails with a decode error
    /// when the response body does not match the model.
    pub async fn search_by_code(&self, code: &str) -> Result<ApiResponse<Item>, ClientError> {
        let criteria = SearchCriteria::new().field(ItemField::Code, FieldOps::new().like(code));
        self.search(&criteria, None).await
    }

    /// List items whose name starts with `name`.
    ///
    /// # Errors
    ///
    /// Propagates transport failures unchanged; fails with a decode error
    /// when the response body does not match the model.
    pub async fn search_by_name(&self, name: &str) -> Result<ApiResponse<Item>, ClientError> {
        let criteria = SearchCriteria::new().field(ItemField::Name, FieldOps::new().like(name));
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
        criteria: &SearchCriteria<ItemField>,
        options: Option<&QueryOptions>,
    ) -> Result<ApiResponse<Item>, ClientError> {
        let mut options = options.cloned().unwrap_or_default();
        options.q = criteria.compile();
        self.get_all(Some(&options)).await
    }
}
