//! Fixed-asset registry cards (`FARegistries`).

use lobjects_client::{ApiResponse, ClientError, entity_client, entity_operations};
use lobjects_query::{FieldOps, QueryOptions, SearchCriteria, SearchField};
use serde::{Deserialize, Serialize};

/// Search-criteria fields for fixed-asset registry cards.
///
/// The column names come from the backend schema; `description` maps to the
/// `DEFINITION` column, one of the irregular pairs a generic case transform
/// would get wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaRegistryField {
    Code,
    Definition,
    MaintNumber,
}

impl SearchField for FaRegistryField {
    const FIELDS: &'static [Self] = &[Self::Code, Self::Definition, Self::MaintNumber];

    fn key(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Definition => "description",
            Self::MaintNumber => "maintNumber",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::Code => "CODE",
            Self::Definition => "DEFINITION",
            Self::MaintNumber => "MAINT_NUMBER",
        }
    }
}

/// Fixed-asset registry card.
///
/// Only the commonly used columns are typed; the rest of the record rides
/// along in `extra`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FaRegistry {
    #[serde(
        rename = "INTERNAL_REFERENCE",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub internal_reference: Option<i64>,
    #[serde(rename = "CODE", default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "DEFINITION", default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(
        rename = "MAINT_NUMBER",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub maint_number: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

entity_client! {
    /// Client for fixed-asset registry cards.
    pub struct FaRegistriesClient {
        resource: "FARegistries",
        model: FaRegistry,
    }
}

entity_operations! {
    impl FaRegistriesClient {
        /// Export one registry card in the service's XML interchange format.
        Get "/FARegistries/{id}/ExportToXML" => pub fn export_to_xml(id: i64);
    }
}

impl FaRegistriesClient {
    /// List cards whose code starts with `code`
    /// (`q = "CODE like '<code>*'"`).
    ///
    /// # Errors
    ///
    /// Propagates transport failures unchanged; fails with a decode error
    /// when the response body does not match the model.
    pub async fn search_by_code(
        &self,
        code: &str,
    ) -> Result<ApiResponse<FaRegistry>, ClientError> {
        let criteria =
            SearchCriteria::new().field(FaRegistryField::Code, FieldOps::new().like(code));
        self.search(&criteria, None).await
    }

    /// Run a criteria search; the compiled filter replaces any `q` in the
    /// base options (empty criteria omit `q` entirely).
    ///
    /// # Errors
    ///
    /// Propagates transport failures unchanged; fails with a decode error
    /// when the response body does not match the model.
    pub async fn search(
        &self,
        criteria: &SearchCriteria<FaRegistryField>,
        options: Option<&QueryOptions>,
    ) -> Result<ApiResponse<FaRegistry>, ClientError> {
        let mut options = options.cloned().unwrap_or_default();
        options.q = criteria.compile();
        self.get_all(Some(&options)).await
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn description_key_maps_to_definition_column() {
        assert_eq!(
            FaRegistryField::from_key("description"),
            Some(FaRegistryField::Definition)
        );
        assert_eq!(FaRegistryField::Definition.column(), "DEFINITION");
        // The plain column spelling is not a criteria key.
        assert_eq!(FaRegistryField::from_key("definition"), None);
    }

    #[test]
    fn description_criteria_compile_against_definition() {
        let criteria = SearchCriteria::new()
            .field(FaRegistryField::Definition, FieldOps::new().like("pump"));
        assert_eq!(criteria.compile().as_deref(), Some("DEFINITION like 'pump*'"));
    }
}
