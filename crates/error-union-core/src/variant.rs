//! Variant identity and schema traits for closed error enums.

use std::collections::{BTreeMap, HashMap};

use error_union_openapi::{Schema, TypeName};
use http::StatusCode;

/// Identity of one variant of a closed error enum.
///
/// Wraps the variant's fully-qualified type name (`app::ApiError::UserNotFound`),
/// which is also the name its schema carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariantId(&'static str);

impl VariantId {
    pub const fn new(full_name: &'static str) -> Self {
        Self(full_name)
    }

    pub fn full_name(&self) -> &'static str {
        self.0
    }

    /// Last path segment of the type name.
    pub fn simple_name(&self) -> &'static str {
        self.0.rsplit("::").next().unwrap_or(self.0)
    }

    pub fn type_name(&self) -> TypeName {
        TypeName::new(self.0)
    }
}

/// A closed error enum whose variants map to HTTP responses.
///
/// Usually derived with `#[derive(ErrorUnion)]`.
pub trait ErrorVariants {
    /// The variant this value belongs to.
    fn variant_id(&self) -> VariantId;

    /// Every variant with its declared status, in declaration order.
    fn declared_variants() -> Vec<(VariantId, StatusCode)>;

    /// Tagged-union schema of the whole enum, one named record per variant.
    ///
    /// Carries no discriminator; see [`crate::add_discriminator`].
    fn error_schema() -> Schema;
}

/// Types with a schema description.
pub trait ToSchema {
    fn schema() -> Schema;
}

macro_rules! impl_to_schema {
    ($ctor:ident => $($ty:ty),+) => {
        $(
            impl ToSchema for $ty {
                fn schema() -> Schema {
                    Schema::$ctor()
                }
            }
        )+
    };
}

impl_to_schema!(string => String, str, char);
impl_to_schema!(integer => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_to_schema!(number => f32, f64);
impl_to_schema!(boolean => bool);
impl_to_schema!(any => serde_json::Value);

impl<T: ToSchema + ?Sized> ToSchema for &T {
    fn schema() -> Schema {
        T::schema()
    }
}

impl<T: ToSchema + ?Sized> ToSchema for Box<T> {
    fn schema() -> Schema {
        T::schema()
    }
}

impl<T: ToSchema> ToSchema for Option<T> {
    fn schema() -> Schema {
        T::schema().into_optional()
    }
}

impl<T: ToSchema> ToSchema for Vec<T> {
    fn schema() -> Schema {
        Schema::array(T::schema())
    }
}

impl<T: ToSchema> ToSchema for [T] {
    fn schema() -> Schema {
        Schema::array(T::schema())
    }
}

impl<K, V: ToSchema> ToSchema for HashMap<K, V> {
    fn schema() -> Schema {
        Schema::any()
    }
}

impl<K, V: ToSchema> ToSchema for BTreeMap<K, V> {
    fn schema() -> Schema {
        Schema::any()
    }
}
