//! Catalog walker: one pass over the catalog, one configuration.
//!
//! Per item, in catalog order:
//!
//! ```text
//! no properties / no parent  → skip
//! specific override found    → apply override
//!     Exclusive              → done with this item
//!     Stacked                → category pass first, then the override
//! classify(parent)           → None: skip
//! for each relevant attribute: evaluate → write
//! ```
//!
//! Items never influence each other, so the result does not depend on order.

use crate::catalog::{Item, ItemCatalog, ItemProperties, WriteError, WriteOutcome};
use crate::classify::{Category, classify};
use crate::config::{AdjustmentConfig, OverrideMode};
use crate::env::{CatalogSource, ConfigSource, Reporter, SourceError};
use crate::overrides::{OverrideReport, apply_override, resolve_override};
use crate::stats::evaluate;

/// Totals of one walk.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WalkSummary {
    /// Items that had both a parent and a property set.
    pub visited: usize,
    /// Items with at least one attribute change.
    pub modified_count: usize,
    /// One line per value written by a specific override.
    pub overrides: Vec<OverrideReport>,
    /// Computed values that were discarded.
    pub rejected_writes: usize,
}

/// Walks a catalog under a fixed configuration.
#[derive(Clone, Copy, Debug)]
pub struct CatalogWalker<'a> {
    config: &'a AdjustmentConfig,
}

impl<'a> CatalogWalker<'a> {
    pub fn new(config: &'a AdjustmentConfig) -> Self {
        Self { config }
    }

    /// Adjusts every item and reports the totals.
    pub fn run(&self, catalog: &mut ItemCatalog, reporter: &mut dyn Reporter) -> WalkSummary {
        let mut summary = WalkSummary::default();

        for item in catalog.iter_mut() {
            self.adjust_item(item, reporter, &mut summary);
        }

        reporter.finished(&summary);
        summary
    }

    fn adjust_item(&self, item: &mut Item, reporter: &mut dyn Reporter, summary: &mut WalkSummary) {
        let Item {
            id,
            name,
            parent,
            properties,
        } = item;
        let (Some(parent), Some(properties)) = (parent.as_deref(), properties.as_mut()) else {
            return;
        };
        summary.visited += 1;

        let category = classify(parent);
        let mut modified = false;

        match resolve_override(id, &self.config.overrides) {
            Some(entry) => {
                if self.config.override_mode == OverrideMode::Stacked {
                    if let Some(category) = category {
                        modified |=
                            self.apply_category(id, category, properties, reporter, summary);
                    }
                }

                let outcome = apply_override(id, name, properties, entry);
                for report in &outcome.reports {
                    reporter.override_applied(report);
                }
                for err in &outcome.rejected {
                    reject(id, err, reporter, summary);
                }
                summary.overrides.extend(outcome.reports);
                modified |= outcome.changed;
            }
            None => {
                if let Some(category) = category {
                    modified |= self.apply_category(id, category, properties, reporter, summary);
                }
            }
        }

        if modified {
            summary.modified_count += 1;
        }
    }

    /// Evaluates each attribute the category adjusts. Returns true if anything was written.
    fn apply_category(
        &self,
        item_id: &str,
        category: Category,
        properties: &mut ItemProperties,
        reporter: &mut dyn Reporter,
        summary: &mut WalkSummary,
    ) -> bool {
        let mut written = false;

        for &attribute in category.attributes() {
            let setting = self.config.setting(category, attribute);
            let Some(value) = evaluate(attribute, properties.get(attribute), &setting) else {
                continue;
            };

            match properties.write(attribute, value) {
                WriteOutcome::Written { .. } => written = true,
                WriteOutcome::Rejected(err) => reject(item_id, &err, reporter, summary),
                WriteOutcome::NoSlot => {}
            }
        }

        written
    }
}

fn reject(item_id: &str, err: &WriteError, reporter: &mut dyn Reporter, summary: &mut WalkSummary) {
    summary.rejected_writes += 1;
    reporter.write_rejected(item_id, err);
}

/// Runs one walk over `catalog`.
pub fn run(
    catalog: &mut ItemCatalog,
    config: &AdjustmentConfig,
    reporter: &mut dyn Reporter,
) -> WalkSummary {
    CatalogWalker::new(config).run(catalog, reporter)
}

/// Loads configuration and catalog from their sources, then walks.
///
/// The configuration is loaded first; either failure aborts before any item
/// is touched.
pub fn run_from_sources(
    catalog_source: &dyn CatalogSource,
    config_source: &dyn ConfigSource,
    reporter: &mut dyn Reporter,
) -> Result<(ItemCatalog, WalkSummary), SourceError> {
    let config = config_source.load_config()?;
    let mut catalog = catalog_source.load_catalog()?;
    let summary = run(&mut catalog, &config, reporter);
    Ok((catalog, summary))
}
