//! Proc macros for error-union.
//!
//! Derives that declare, next to the type, what reflective annotations would
//! otherwise carry: each error variant's status code and schema.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod error_union;
mod schema;
mod to_schema;

/// Derive `ErrorVariants` for a closed error enum.
///
/// ```ignore
/// use error_union::ErrorUnion;
///
/// #[derive(Debug, Serialize, ErrorUnion)]
/// #[serde(tag = "error", rename_all = "kebab-case")]
/// enum ApiError {
///     /// Unable to find user
///     #[status(404)]
///     UserNotFound { name: String },
///     #[status(Forbidden)]  // named error code also works
///     AccessDenied,
///     // Status inferred from variant name
///     InvalidEmail { email: String },
/// }
/// ```
///
/// This generates `impl ErrorVariants for ApiError`:
/// - `variant_id()` - tag of a value's variant
/// - `declared_variants()` - `(variant, status)` pairs in declaration order
/// - `error_schema()` - tagged union with one named schema per variant
///
/// # Attributes
///
/// - `#[status(404)]` - HTTP status
/// - `#[status(NotFound)]` - named `ErrorCode`
///
/// Without `#[status]`, the status is inferred from the variant name.
/// Doc comments become schema descriptions.
///
/// # Variant shapes
///
/// - Unit and named-field variants become records.
/// - Single-field tuple variants reuse the payload's `ToSchema` schema. Payloads
///   that are not records get no discriminator and no documented response.
/// - Tuple variants with more fields are rejected.
#[proc_macro_derive(ErrorUnion, attributes(status))]
pub fn error_union(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match error_union::expand_error_union(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Derive `ToSchema` for a struct.
///
/// ```ignore
/// /// Lock details
/// #[derive(Serialize, ToSchema)]
/// struct LockInfo {
///     until: u64,
///     reason: Option<String>,
/// }
/// ```
///
/// Named fields become a record; `Option<T>` fields are not required.
#[proc_macro_derive(ToSchema)]
pub fn to_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match to_schema::expand_to_schema(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
