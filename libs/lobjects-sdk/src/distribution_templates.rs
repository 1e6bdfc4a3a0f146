//! Distribution templates (`DistributionTemplates`).

use lobjects_client::{ApiResponse, ClientError, entity_client, entity_operations};
use lobjects_query::{FieldOps, QueryOptions, SearchCriteria, SearchField};
use serde::{Deserialize, Serialize};

/// Search-criteria fields for distribution templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistributionTemplateField {
    Code,
    Description,
}

impl SearchField for DistributionTemplateField {
    const FIELDS: &'static [Self] = &[Self::Code, Self::Description];

    fn key(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Description => "description",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::Code => "CODE",
            Self::Description => "DESCRIPTION",
        }
    }
}

/// Distribution template record.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DistributionTemplate {
    #[serde(
        rename = "INTERNAL_REFERENCE",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub internal_reference: Option<i64>,
    #[serde(rename = "CODE", default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(
        rename = "DESCRIPTION",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

entity_client! {
    /// Client for distribution templates.
    pub struct DistributionTemplatesClient {
        resource: "DistributionTemplates",
        model: DistributionTemplate,
    }
}

entity_operations! {
    impl DistributionTemplatesClient {
        /// Apply the template to the document described by the payload.
        Post "/DistributionTemplates/{id}/Apply" => pub fn apply_template(id: i64) with body;
    }
}

impl DistributionTemplatesClient {
    /// List templates whose code starts with `code`.
    ///
    /// # Errors
    ///
    /// Propagates transport failures unchanged; fails with a decode error
    /// when the response body does not match the model.
    pub async fn search_by_code(
        &self,
        code: &str,
    ) -> Result<ApiResponse<DistributionTemplate>, ClientError> {
        let criteria = SearchCriteria::new()
            .field(DistributionTemplateField::Code, FieldOps::new().like(code));
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
        criteria: &SearchCriteria<DistributionTemplateField>,
        options: Option<&QueryOptions>,
    ) -> Result<ApiResponse<DistributionTemplate>, ClientError> {
        let mut options = options.cloned().unwrap_or_default();
        options.q = criteria.compile();
        self.get_all(Some(&options)).await
    }
}
