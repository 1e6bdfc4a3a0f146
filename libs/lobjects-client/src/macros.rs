//! Declarative generation of the per-entity client surface.
//!
//! The wrapped service exposes hundreds of near-identical endpoints: the
//! standard CRUD set per entity, plus a long tail of RPC-style sub-resource
//! operations (`ApplyCampaign`, `AddSeriLots`, `ExportToXML`, ...). Instead
//! of transcribing each wrapper by hand, entities declare them as a table
//! and these macros expand the methods, so URL behavior is reproduced from
//! one row per endpoint.
//!
//! [`entity_client!`] declares the client struct and the CRUD set against a
//! literal resource path. [`entity_operations!`] adds one wrapper per row of
//! `{ verb, path template, path params, optional body }`; the path template
//! is a `format!` string over the row's parameter names, so a template
//! referencing a parameter the row does not declare fails to compile.

/// Declare an entity client with the standard CRUD surface.
///
/// ```rust,ignore
/// entity_client! {
///     /// Client for fixed-asset registry cards.
///     pub struct FaRegistriesClient {
///         resource: "FARegistries",
///         model: FaRegistry,
///     }
/// }
/// ```
#[macro_export]
macro_rules! entity_client {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            resource: $resource:literal,
            model: $model:ty $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        $vis struct $name {
            client: $crate::LogoClient,
        }

        impl $name {
            /// Resource segment under the service root.
            $vis const RESOURCE: &'static str = $resource;

            #[must_use]
            $vis fn new(transport: ::std::sync::Arc<dyn $crate::Transport>) -> Self {
                Self {
                    client: $crate::LogoClient::new(transport),
                }
            }

            #[must_use]
            $vis fn with_client(client: $crate::LogoClient) -> Self {
                Self { client }
            }

            /// List entities, honoring pagination, projection, sort, and
            /// filter options.
            ///
            /// # Errors
            ///
            /// Propagates transport failures unchanged; fails with a JSON
            /// error when the response body does not match the model.
            $vis async fn get_all(
                &self,
                options: ::std::option::Option<&$crate::query::QueryOptions>,
            ) -> ::std::result::Result<$crate::ApiResponse<$model>, $crate::ClientError>
            {
                let query = options.map_or_else(
                    ::std::string::String::new,
                    $crate::query::QueryOptions::to_query_string,
                );
                let path =
                    $crate::append_query(&::std::format!("/{}", Self::RESOURCE), &query);
                self.client
                    .request($crate::Method::Get, &path, ::std::option::Option::None)
                    .await
            }

            /// Fetch one entity by its internal reference.
            ///
            /// # Errors
            ///
            /// Propagates transport failures unchanged; fails with a JSON
            /// error when the response body does not match the model.
            $vis async fn get_by_id(
                &self,
                id: i64,
                options: ::std::option::Option<&$crate::query::QueryOptions>,
            ) -> ::std::result::Result<$model, $crate::ClientError> {
                let query = options.map_or_else(
                    ::std::string::String::new,
                    $crate::query::QueryOptions::to_query_string,
                );
                let path = $crate::append_query(
                    &::std::format!("/{}/{id}", Self::RESOURCE),
                    &query,
                );
                self.client
                    .request($crate::Method::Get, &path, ::std::option::Option::None)
                    .await
            }

            /// Create a new entity.
            ///
            /// # Errors
            ///
            /// Propagates transport failures unchanged; fails with a JSON
            /// error when the body cannot be serialized or the response does
            /// not match the model.
            $vis async fn create(
                &self,
                data: &$model,
            ) -> ::std::result::Result<$model, $crate::ClientError> {
                let body = ::serde_json::to_value(data)?;
                let path = ::std::format!("/{}", Self::RESOURCE);
                self.client
                    .request(
                        $crate::Method::Post,
                        &path,
                        ::std::option::Option::Some(body),
                    )
                    .await
            }

            /// Replace an entity.
            ///
            /// # Errors
            ///
            /// Propagates transport failures unchanged; fails with a JSON
            /// error when the body cannot be serialized or the response does
            /// not match the model.
            $vis async fn update(
                &self,
                id: i64,
                data: &$model,
            ) -> ::std::result::Result<$model, $crate::ClientError> {
                let body = ::serde_json::to_value(data)?;
                let path = ::std::format!("/{}/{id}", Self::RESOURCE);
                self.client
                    .request(
                        $crate::Method::Put,
                        &path,
                        ::std::option::Option::Some(body),
                    )
                    .await
            }

            /// Apply a partial update.
            ///
            /// # Errors
            ///
            /// Propagates transport failures unchanged; fails with a JSON
            /// error when the response body does not match the model.
            $vis async fn patch(
                &self,
                id: i64,
                patch: &::serde_json::Value,
            ) -> ::std::result::Result<$model, $crate::ClientError> {
                let path = ::std::format!("/{}/{id}", Self::RESOURCE);
                self.client
                    .request(
                        $crate::Method::Patch,
                        &path,
                        ::std::option::Option::Some(patch.clone()),
                    )
                    .await
            }

            /// Delete an entity, discarding the response body.
            ///
            /// # Errors
            ///
            /// Propagates transport failures unchanged.
            $vis async fn delete(
                &self,
                id: i64,
            ) -> ::std::result::Result<(), $crate::ClientError> {
                let path = ::std::format!("/{}/{id}", Self::RESOURCE);
                self.client
                    .request_unit(
                        $crate::Method::Delete,
                        &path,
                        ::std::option::Option::None,
                    )
                    .await
            }
        }
    };
}

/// Declare RPC-style sub-resource wrappers from a table of endpoint rows.
///
/// Each row is `{ verb, path template, fn name(params), optional body }`;
/// the template is a `format!` string over the row's parameter names, and a
/// `with body` suffix adds a JSON payload argument.
///
/// ```rust,ignore
/// entity_operations! {
///     impl SalesInvoicesClient {
///         Post "/salesInvoices/{id}/ApplyCampaign" => pub fn apply_campaign(id: i64) with body;
///         Get "/salesInvoices/{id}/ExportToXML" => pub fn export_to_xml(id: i64);
///     }
/// }
/// ```
#[macro_export]
macro_rules! entity_operations {
    (
        impl $name:ident {
            $(
                $(#[$meta:meta])*
                $verb:ident $path:literal => $vis:vis fn $fn_name:ident (
                    $($param:ident : $pty:ty),* $(,)?
                ) $(with $body:ident)? ;
            )*
        }
    ) => {
        impl $name {
            $(
                $(#[$meta])*
                /// # Errors
                ///
                /// Propagates transport failures unchanged; fails with a
                /// decode error when the response body is not valid JSON
                /// for the expected shape.
                $vis async fn $fn_name(
                    &self
                    $(, $param: $pty)*
                    $(, $body: &::serde_json::Value)?
                ) -> ::std::result::Result<::serde_json::Value, $crate::ClientError>
                {
                    let path = ::std::format!($path $(, $param = $param)*);
                    let payload: ::std::option::Option<::serde_json::Value> =
                        ::std::option::Option::None
                            $(.or(::std::option::Option::Some($body.clone())))?;
                    self.client
                        .request($crate::Method::$verb, &path, payload)
                        .await
                }
            )*
        }
    };
}
