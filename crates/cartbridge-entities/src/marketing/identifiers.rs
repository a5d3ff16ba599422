//! Composite catalog identifiers.
//!
//! Catalog resources created through the integration live in the custom
//! integration under the default catalog, and are addressed by a
//! colon-delimited composite of integration type, catalog namespace, and
//! the external id.

/// Integration type segment for connector-owned catalog resources
pub const INTEGRATION_TYPE: &str = "$custom";

/// Catalog namespace segment
pub const CATALOG_TYPE: &str = "$default";

const SEPARATOR: &str = ":::";

/// Build the composite identifier for an external id,
/// e.g. `$custom:::$default:::running-shoes`.
pub fn composite_id(external_id: &str) -> String {
    format!("{INTEGRATION_TYPE}{SEPARATOR}{CATALOG_TYPE}{SEPARATOR}{external_id}")
}
