//! SKU catalog loading

use std::collections::{BTreeMap, HashMap};

use log::debug;

use super::Sku;
use crate::client::{AmsApi, ListParams};
use crate::error::{Error, Result};

/// All SKUs known to the service, keyed by name
#[derive(Debug, Clone, Default)]
pub struct SkuCatalog {
    skus: BTreeMap<String, Sku>,
}

impl SkuCatalog {
    /// Build a catalog from SKUs; later duplicates replace earlier ones.
    pub fn from_skus(skus: impl IntoIterator<Item = Sku>) -> Self {
        Self {
            skus: skus.into_iter().map(|s| (s.name.clone(), s)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.skus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skus.is_empty()
    }

    /// Look up a SKU by name.
    ///
    /// An unknown name is fatal.
    pub fn get(&self, name: &str) -> Result<Sku> {
        self.skus
            .get(name)
            .cloned()
            .ok_or_else(|| Error::InvalidSku(name.to_string()))
    }

    /// Look up several SKUs, failing on the first unknown name.
    pub fn get_all<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Sku>> {
        names.iter().map(|name| self.get(name.as_ref())).collect()
    }

    /// Comma-joined SKU names per quota group, for the given SKU names.
    ///
    /// Names missing from the catalog are skipped; repeated names appear once.
    pub fn quota_labels<'a>(
        &self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> HashMap<String, String> {
        let mut labels: HashMap<String, String> = HashMap::new();
        for name in names {
            let Some(sku) = self.skus.get(name) else {
                continue;
            };
            match labels.get_mut(&sku.quota_id) {
                Some(label) => {
                    if !label.split(',').any(|existing| existing == name) {
                        label.push(',');
                        label.push_str(name);
                    }
                }
                None => {
                    labels.insert(sku.quota_id.clone(), name.to_string());
                }
            }
        }
        labels
    }
}

/// Load the whole SKU catalog in a single request.
///
/// Rules beyond the single page are dropped; the catalog is not paged through.
pub async fn load_catalog<C: AmsApi + ?Sized>(client: &C) -> Result<SkuCatalog> {
    let rules = client
        .list_sku_rules(&ListParams::all())
        .await
        .map_err(Error::CatalogLoad)?;

    if rules.is_truncated() {
        debug!(
            "SKU catalog truncated: {} of {:?} rules returned",
            rules.items.len(),
            rules.total
        );
    }

    let catalog = SkuCatalog::from_skus(rules.items.into_iter().filter_map(|rule| {
        let name = rule.sku.filter(|name| !name.is_empty())?;
        Some(Sku::new(name, rule.quota_id.unwrap_or_default()))
    }));

    if catalog.is_empty() {
        return Err(Error::EmptyCatalog);
    }

    debug!("Loaded {} skus", catalog.len());
    for sku in catalog.skus.values() {
        debug!("{} -> {}", sku.name, sku.quota_id);
    }

    Ok(catalog)
}
