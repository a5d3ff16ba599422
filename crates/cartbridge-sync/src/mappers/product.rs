//! Product and variant mapping.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use cartbridge_core::settings::SyncSettings;
use cartbridge_core::{clean_text, to_major_units};
use cartbridge_entities::commerce::{
    CategoryReference, InventoryEntry, LocalizedString, Price, Product, ProductData,
    ProductVariant,
};
use cartbridge_entities::marketing::{
    composite_id, CatalogItemAttributes, CatalogItemData, CatalogItemJobAttributes,
    CatalogItemJobData, CatalogItemJobRequest, CatalogItemRequest, CatalogVariantAttributes,
    CatalogVariantData, CatalogVariantJobAttributes, CatalogVariantJobData,
    CatalogVariantJobRequest, CatalogVariantRequest, CustomMetadata, DeleteData, DeleteRequest,
    ItemJobType, Relationship, RelationshipData, Relationships, VariantJobType, CATALOG_TYPE,
    INTEGRATION_TYPE,
};

use crate::inventory::{quantity_by_priority, InventorySource};
use crate::pricing::select_price;

const SLUG_PLACEHOLDER: &str = "{{productSlug}}";
const NAME_PLACEHOLDER: &str = "{{productName}}";

/// Maps products, variants, and inventory entries to catalog bodies.
///
/// Every method is a deterministic function of its inputs and the settings;
/// mapping the same entity twice yields byte-identical output.
pub struct ProductMapper {
    settings: Arc<SyncSettings>,
}

impl ProductMapper {
    pub fn new(settings: Arc<SyncSettings>) -> Self {
        Self { settings }
    }

    fn locale(&self) -> Option<&str> {
        self.settings.default_locale.as_deref()
    }

    /// Public product URL per the configured template, the literal `"None"`
    /// without one.
    fn product_url(&self, slug: &str, name: &str) -> String {
        match &self.settings.product_url_template {
            Some(template) => template
                .replace(SLUG_PLACEHOLDER, slug)
                .replace(NAME_PLACEHOLDER, &clean_text(name)),
            None => "None".to_string(),
        }
    }

    fn price_of(&self, prices: Option<&[Price]>) -> f64 {
        prices
            .and_then(|candidates| {
                select_price(candidates, self.settings.preferred_currency.as_deref())
            })
            .map(|price| {
                to_major_units(
                    price.value.cent_amount,
                    price.value.fraction_digits,
                    &price.value.currency_code,
                )
            })
            .unwrap_or(0.0)
    }

    /// Map a product to a catalog item body. Returns `None` for products
    /// without current (published) data.
    pub fn catalog_item(&self, product: &Product, update: bool) -> Option<CatalogItemRequest> {
        let current = product.master_data.current.as_ref()?;
        Some(CatalogItemRequest {
            data: self.catalog_item_data(current, update),
        })
    }

    fn catalog_item_data(&self, current: &ProductData, update: bool) -> CatalogItemData {
        let slug = current.slug.resolve(self.locale());
        let title = current.name.resolve(self.locale());
        let prices = current.master_variant.prices.as_deref();

        CatalogItemData {
            kind: "catalog-item".to_string(),
            id: update.then(|| composite_id(slug)),
            attributes: CatalogItemAttributes {
                published: true,
                integration_type: (!update).then(|| INTEGRATION_TYPE.to_string()),
                catalog_type: (!update).then(|| CATALOG_TYPE.to_string()),
                external_id: (!update).then(|| slug.to_string()),
                title: title.to_string(),
                description: current
                    .description
                    .as_ref()
                    .map(|d| d.resolve(self.locale()).to_string())
                    .unwrap_or_default(),
                url: self.product_url(slug, title),
                image_full_url: current
                    .master_variant
                    .images
                    .as_ref()
                    .and_then(|images| images.first())
                    .map(|image| image.url.clone()),
                price: self.price_of(prices),
                custom_metadata: self.metadata(&current.name, &current.slug, prices),
            },
            relationships: self.category_relationships(&current.categories),
        }
    }

    /// Map one variant of a product to a catalog variant body.
    pub fn catalog_variant(
        &self,
        product: &Product,
        variant: &ProductVariant,
        update: bool,
    ) -> Option<CatalogVariantRequest> {
        let current = product.master_data.current.as_ref()?;
        Some(CatalogVariantRequest {
            data: self.catalog_variant_data(current, variant, update),
        })
    }

    fn catalog_variant_data(
        &self,
        current: &ProductData,
        variant: &ProductVariant,
        update: bool,
    ) -> CatalogVariantData {
        let slug = current.slug.resolve(self.locale());
        let title = current.name.resolve(self.locale());
        let sku = variant.sku.as_deref().unwrap_or_default();
        let prices = variant.prices.as_deref();
        let quantity = quantity_by_priority(
            variant.availability.as_ref().map(InventorySource::from),
            self.settings.inventory_channel.as_deref(),
        );

        CatalogVariantData {
            kind: "catalog-variant".to_string(),
            id: update.then(|| composite_id(sku)),
            attributes: Some(CatalogVariantAttributes {
                published: true,
                integration_type: (!update).then(|| INTEGRATION_TYPE.to_string()),
                catalog_type: (!update).then(|| CATALOG_TYPE.to_string()),
                external_id: (!update).then(|| sku.to_string()),
                sku: (!update).then(|| sku.to_string()),
                title: Some(title.to_string()),
                description: Some(
                    current
                        .description
                        .as_ref()
                        .map(|d| d.resolve(self.locale()).to_string())
                        .unwrap_or_default(),
                ),
                url: Some(self.product_url(slug, title)),
                image_full_url: variant
                    .images
                    .as_ref()
                    .and_then(|images| images.first())
                    .map(|image| image.url.clone()),
                inventory_quantity: Some(quantity.unwrap_or(0)),
                inventory_policy: Some(1),
                price: Some(self.price_of(prices)),
                custom_metadata: Some(self.metadata(&current.name, &current.slug, prices)),
            }),
            relationships: (!update).then(|| Relationships {
                categories: None,
                items: Some(Relationship {
                    data: vec![RelationshipData {
                        kind: "catalog-item".to_string(),
                        id: composite_id(slug),
                    }],
                }),
            }),
        }
    }

    /// Build a bulk job over several products. Products without current
    /// data are skipped.
    pub fn catalog_item_job(
        &self,
        products: &[Product],
        job_type: ItemJobType,
    ) -> CatalogItemJobRequest {
        let update = matches!(job_type, ItemJobType::Update);
        let items = products
            .iter()
            .filter_map(|product| self.catalog_item(product, update))
            .map(|request| request.data)
            .collect();

        CatalogItemJobRequest {
            data: CatalogItemJobData {
                kind: job_type,
                attributes: CatalogItemJobAttributes { items },
            },
        }
    }

    /// Build a bulk job over every variant of one product.
    pub fn catalog_variant_job(
        &self,
        product: &Product,
        job_type: VariantJobType,
    ) -> Option<CatalogVariantJobRequest> {
        let current = product.master_data.current.as_ref()?;
        let update = matches!(job_type, VariantJobType::Update);
        let variants = current
            .all_variants()
            .map(|variant| self.catalog_variant_data(current, variant, update))
            .collect();

        Some(CatalogVariantJobRequest {
            data: CatalogVariantJobData {
                kind: job_type,
                attributes: CatalogVariantJobAttributes { variants },
            },
        })
    }

    /// Build a bulk delete job from bare skus; entries carry only type and id.
    pub fn catalog_variant_delete_job(&self, skus: &[String]) -> CatalogVariantJobRequest {
        let variants = skus
            .iter()
            .map(|sku| CatalogVariantData {
                kind: "catalog-variant".to_string(),
                id: Some(composite_id(sku)),
                attributes: None,
                relationships: None,
            })
            .collect();

        CatalogVariantJobRequest {
            data: CatalogVariantJobData {
                kind: VariantJobType::Delete,
                attributes: CatalogVariantJobAttributes { variants },
            },
        }
    }

    /// Deletion body for a catalog item, addressed by its last-known slug.
    pub fn delete_item(&self, slug: &LocalizedString) -> DeleteRequest {
        DeleteRequest {
            data: DeleteData {
                id: composite_id(slug.resolve(self.locale())),
            },
        }
    }

    /// Narrow variant patch for an inventory change. The quantity is only
    /// present when the priority chain yields one; its absence signals
    /// "no applicable inventory", distinct from zero stock.
    pub fn inventory_update(&self, entry: &InventoryEntry) -> CatalogVariantRequest {
        let quantity = quantity_by_priority(
            Some(InventorySource::from(entry)),
            self.settings.inventory_channel.as_deref(),
        );

        CatalogVariantRequest {
            data: CatalogVariantData {
                kind: "catalog-variant".to_string(),
                id: Some(composite_id(&entry.sku)),
                attributes: Some(CatalogVariantAttributes {
                    published: true,
                    inventory_policy: Some(1),
                    inventory_quantity: quantity,
                    ..Default::default()
                }),
                relationships: None,
            },
        }
    }

    /// Direct categories followed by every ancestor, deduplicated by id in
    /// first-seen order. Empty category lists produce no relationships key.
    fn category_relationships(&self, categories: &[CategoryReference]) -> Option<Relationships> {
        if categories.is_empty() {
            return None;
        }

        let ancestors = categories
            .iter()
            .filter_map(|reference| reference.obj.as_ref())
            .flat_map(|category| category.ancestors.iter());

        let mut seen = BTreeSet::new();
        let data = categories
            .iter()
            .chain(ancestors)
            .filter(|reference| seen.insert(reference.id.clone()))
            .map(|reference| RelationshipData {
                kind: "catalog-category".to_string(),
                id: composite_id(&reference.id),
            })
            .collect();

        Some(Relationships {
            categories: Some(Relationship { data }),
            items: None,
        })
    }

    fn metadata(
        &self,
        name: &LocalizedString,
        slug: &LocalizedString,
        prices: Option<&[Price]>,
    ) -> CustomMetadata {
        CustomMetadata {
            title_json: additional_locales_json("title", name, self.locale()),
            slug_json: additional_locales_json("slug", slug, self.locale()),
            price_json: prices.map(additional_prices_json),
            currency_json: prices.map(currencies_json),
        }
    }
}

/// Locales beyond the resolved default, keyed `<property>_<locale>`,
/// serialized to a JSON string.
fn additional_locales_json(
    property: &str,
    value: &LocalizedString,
    default_locale: Option<&str>,
) -> String {
    let resolved = value.resolved_locale(default_locale).map(str::to_string);
    let map: BTreeMap<String, &str> = value
        .0
        .iter()
        .filter(|(locale, _)| Some(locale.as_str()) != resolved.as_deref())
        .map(|(locale, text)| (format!("{}_{}", property, locale), text.as_str()))
        .collect();
    serde_json::to_string(&map).unwrap_or_else(|_| "{}".to_string())
}

/// Major-unit amount per currency, keyed `price_<code>`; the first price of
/// each currency wins.
fn additional_prices_json(prices: &[Price]) -> String {
    let mut map: BTreeMap<String, f64> = BTreeMap::new();
    for price in prices {
        map.entry(format!("price_{}", price.value.currency_code))
            .or_insert_with(|| {
                to_major_units(
                    price.value.cent_amount,
                    price.value.fraction_digits,
                    &price.value.currency_code,
                )
            });
    }
    serde_json::to_string(&map).unwrap_or_else(|_| "{}".to_string())
}

/// Distinct currency codes present on the candidates
fn currencies_json(prices: &[Price]) -> String {
    let currencies: BTreeSet<&str> = prices
        .iter()
        .map(|price| price.value.currency_code.as_str())
        .collect();
    serde_json::to_string(&serde_json::json!({ "currencies": currencies }))
        .unwrap_or_else(|_| "{}".to_string())
}
