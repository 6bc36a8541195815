//! Product record normalization.
//!
//! Catalog surfaces hand the engine records in whatever shape the backing
//! document store produced. The shape varies: the brand may be a plain
//! string or a nested object, the image may be a single field or a list,
//! and most fields are optional. [`RawProduct`] deserializes all of those
//! variants tolerantly; [`ProductSnapshot`] is the one canonical shape the
//! rest of the engine sees, copied once at add/toggle time so that later
//! changes to the catalog record never reach into a collection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product-like record as supplied by catalog and browsing surfaces.
///
/// Treated as partially-unknown input, not a fixed schema: every field is
/// optional and unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawProduct {
    /// Document-store identifier.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,
    /// API-facing identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Base price.
    pub price: Option<Decimal>,
    /// Discounted price, when a sale is active.
    #[serde(alias = "salePrice")]
    pub sale_price: Option<Decimal>,
    /// Brand, either a plain string or a nested object.
    pub brand: Option<BrandField>,
    /// Single image reference.
    pub image: Option<String>,
    /// Image list; the first entry is the display image.
    pub images: Vec<String>,
    /// Available stock count.
    pub stock: Option<i64>,
    /// URL slug.
    pub slug: Option<String>,
}

/// The two shapes a brand arrives in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BrandField {
    /// Plain string brand.
    Name(String),
    /// Nested brand document.
    Record {
        /// Brand display name.
        name: Option<String>,
    },
}

impl BrandField {
    /// The brand display name, whichever shape it arrived in.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name.as_str()),
            Self::Record { name } => name.as_deref(),
        }
    }
}

/// The price- and display-relevant fields of a product, copied at the
/// moment it enters a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    /// Display name.
    pub name: Option<String>,
    /// Base price.
    pub price: Option<Decimal>,
    /// Discounted price.
    pub sale_price: Option<Decimal>,
    /// Flattened brand name.
    pub brand: Option<String>,
    /// Display image reference.
    pub image: Option<String>,
    /// URL slug.
    pub slug: Option<String>,
}

impl ProductSnapshot {
    /// Normalize a raw record into the canonical snapshot shape.
    ///
    /// The brand is flattened to its display name and the image collapses
    /// to the single-image field or, failing that, the first entry of the
    /// image list.
    #[must_use]
    pub fn from_raw(record: &RawProduct) -> Self {
        let image = record
            .image
            .clone()
            .or_else(|| record.images.first().cloned());
        Self {
            name: record.name.clone(),
            price: record.price,
            sale_price: record.sale_price,
            brand: record.brand.as_ref().and_then(BrandField::name).map(str::to_owned),
            image,
            slug: record.slug.clone(),
        }
    }

    /// The price a unit of this product actually sells for.
    ///
    /// The discounted price applies only when present and strictly lower
    /// than the base price; otherwise the base price is used. A snapshot
    /// with no base price contributes zero.
    #[must_use]
    pub fn effective_unit_price(&self) -> Decimal {
        let base = self.price.unwrap_or(Decimal::ZERO);
        match self.sale_price {
            Some(sale) if sale < base => sale,
            _ => base,
        }
    }
}
