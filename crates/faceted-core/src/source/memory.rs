use crate::{
    record::{AttributeRow, CategoryRecord, ItemRecord},
    source::{CatalogSource, SourceError},
};

///
/// MemorySource
///
/// Vec-backed catalog source. The canonical executable semantics of the
/// engine and the substrate for tests and embedded catalogs; scans never
/// fail.
///

#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    items: Vec<ItemRecord>,
    attributes: Vec<AttributeRow>,
    categories: Vec<CategoryRecord>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, builder style.
    #[must_use]
    pub fn with_item(mut self, item: ItemRecord) -> Self {
        self.items.push(item);
        self
    }

    /// Add an attribute row, builder style.
    #[must_use]
    pub fn with_attribute(mut self, row: AttributeRow) -> Self {
        self.attributes.push(row);
        self
    }

    /// Add a category, builder style.
    #[must_use]
    pub fn with_category(mut self, category: CategoryRecord) -> Self {
        self.categories.push(category);
        self
    }
}

impl CatalogSource for MemorySource {
    fn items(&self) -> Result<Vec<ItemRecord>, SourceError> {
        Ok(self.items.clone())
    }

    fn attributes(&self) -> Result<Vec<AttributeRow>, SourceError> {
        Ok(self.attributes.clone())
    }

    fn categories(&self) -> Result<Vec<CategoryRecord>, SourceError> {
        Ok(self.categories.clone())
    }
}

///
/// TESTS
///
