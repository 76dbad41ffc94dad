//! # Item Store
//!
//! The in-memory item collection, its id counter and its data file.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Stockroom Session                                │
//! │                                                                         │
//! │  ItemStore::open(config)                                                │
//! │       │   file absent  → empty store, next id 1                         │
//! │       │   file present → decode every line, next id = max id + 1        │
//! │       ▼                                                                 │
//! │  add / update / remove / find / search   (all linear over Vec<Item>)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  save(path)  → truncate + rewrite the whole file                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Id Assignment
//! The counter only moves forward. Removing an item never frees its id, and
//! loading a file with smaller ids never lowers the counter.
//!
//! ```text
//!   add A → 1    add B → 2    remove 2    add C → 3   (2 is gone for good)
//! ```

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use stockroom_core::codec::{decode_line, encode_line, FieldDefault, SkipReason};
use stockroom_core::{Item, ItemId, FIRST_ITEM_ID};
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};

// =============================================================================
// Load Report
// =============================================================================

/// Why a line of the data file did not become an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipCause {
    /// The line had no usable id.
    Malformed(SkipReason),
    /// An earlier line already used this id.
    DuplicateId(ItemId),
}

/// A dropped line, by 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line_number: usize,
    pub cause: SkipCause,
}

/// A loaded line whose fields were partly defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultedLine {
    pub line_number: usize,
    pub id: ItemId,
    pub defaults: Vec<FieldDefault>,
}

/// What happened while loading the data file.
///
/// Blank lines are neither loaded nor reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of items taken from the file.
    pub loaded: usize,
    /// Lines that were dropped.
    pub skipped: Vec<SkippedLine>,
    /// Lines that loaded with defaulted fields.
    pub defaulted: Vec<DefaultedLine>,
}

impl LoadReport {
    /// True when every non-blank line loaded without defaults.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.defaulted.is_empty()
    }
}

// =============================================================================
// Item Patch
// =============================================================================

/// Field-by-field replacement for an existing item. `None` keeps the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub unit_price: Option<f64>,
}

impl ItemPatch {
    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.quantity.is_none() && self.unit_price.is_none()
    }
}

// =============================================================================
// Item Store
// =============================================================================

/// The inventory collection.
///
/// ## Usage
/// ```rust
/// use stockroom_store::ItemStore;
///
/// let mut store = ItemStore::new();
/// let widget = store.add("Widget", 5, 2.5).unwrap();
/// let gadget = store.add("Gadget", 1, 10.0).unwrap();
/// assert_eq!((widget, gadget), (1, 2));
///
/// assert!(store.remove_by_id(widget));
/// assert_eq!(store.add("Sprocket", 3, 0.75).unwrap(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ItemStore {
    items: Vec<Item>,
    /// Kept wider than `ItemId` so that loading `ItemId::MAX` cannot wrap.
    next_id: u64,
}

impl Default for ItemStore {
    fn default() -> Self {
        ItemStore::new()
    }
}

impl ItemStore {
    /// Creates an empty store. The first id handed out is 1.
    pub fn new() -> Self {
        ItemStore {
            items: Vec::new(),
            next_id: u64::from(FIRST_ITEM_ID),
        }
    }

    /// Opens the store described by `config`.
    ///
    /// ## Returns
    /// * `Ok((store, report))` - Store loaded (empty if the file is absent)
    /// * `Err(StoreError::Read)` - File present but unreadable
    pub fn open(config: &StoreConfig) -> StoreResult<(Self, LoadReport)> {
        let mut store = ItemStore::new();
        let report = store.load(config.data_file())?;
        Ok((store, report))
    }

    /// Replaces the collection with the contents of `path`.
    ///
    /// A missing file leaves the store empty. The id counter becomes one past
    /// the largest id read, unless it is already higher.
    pub fn load(&mut self, path: impl AsRef<Path>) -> StoreResult<LoadReport> {
        let path = path.as_ref();

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "No data file, starting with an empty inventory");
                self.items.clear();
                return Ok(LoadReport::default());
            }
            Err(err) => return Err(StoreError::read(path, err)),
        };

        let report = self.load_contents(&String::from_utf8_lossy(&bytes));

        info!(
            path = %path.display(),
            loaded = report.loaded,
            skipped = report.skipped.len(),
            defaulted = report.defaulted.len(),
            "Loaded inventory"
        );
        Ok(report)
    }

    /// Replaces the collection with the decoded `contents`.
    fn load_contents(&mut self, contents: &str) -> LoadReport {
        self.items.clear();
        let mut report = LoadReport::default();

        for (index, line) in contents.lines().enumerate() {
            let line_number = index + 1;

            let decoded = match decode_line(line) {
                Ok(decoded) => decoded,
                Err(SkipReason::Blank) => continue,
                Err(reason) => {
                    warn!(line_number, %reason, "Skipping malformed line");
                    report.skipped.push(SkippedLine {
                        line_number,
                        cause: SkipCause::Malformed(reason),
                    });
                    continue;
                }
            };

            let id = decoded.item.id;
            if self.find_by_id(id).is_some() {
                warn!(line_number, id, "Skipping line with duplicate id");
                report.skipped.push(SkippedLine {
                    line_number,
                    cause: SkipCause::DuplicateId(id),
                });
                continue;
            }

            if !decoded.defaults.is_empty() {
                debug!(line_number, id, defaults = ?decoded.defaults, "Defaulted fields");
                report.defaulted.push(DefaultedLine {
                    line_number,
                    id,
                    defaults: decoded.defaults,
                });
            }

            self.next_id = self.next_id.max(u64::from(id) + 1);
            self.items.push(decoded.item);
            report.loaded += 1;
        }

        report
    }

    /// Rewrites `path` with every item, one line each.
    ///
    /// The file is truncated first; there is no temporary file or rename.
    pub fn save(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), count = self.items.len(), "Saving inventory");

        let file = File::create(path).map_err(|err| StoreError::write(path, err))?;
        let mut writer = BufWriter::new(file);

        for item in &self.items {
            writeln!(writer, "{}", encode_line(item)).map_err(|err| StoreError::write(path, err))?;
        }
        writer.flush().map_err(|err| StoreError::write(path, err))?;

        info!(path = %path.display(), count = self.items.len(), "Saved inventory");
        Ok(())
    }

    /// Appends a new item and returns its id.
    ///
    /// The name is taken as given; callers validate it first.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        quantity: i64,
        unit_price: f64,
    ) -> StoreResult<ItemId> {
        let id = ItemId::try_from(self.next_id).map_err(|_| StoreError::IdsExhausted)?;
        self.next_id += 1;

        let item = Item::new(id, name, quantity, unit_price);
        debug!(id, name = %item.name, "Adding item");
        self.items.push(item);

        Ok(id)
    }

    /// Returns the item with `id`, if any.
    pub fn find_by_id(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns the item with `id` for in-place edits.
    pub fn find_by_id_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Applies `patch` to the item with `id` and returns the updated item.
    ///
    /// ## Returns
    /// * `Ok(&Item)` - Item after the update
    /// * `Err(StoreError::NotFound)` - No such id
    pub fn update(&mut self, id: ItemId, patch: ItemPatch) -> StoreResult<&Item> {
        let item = self.find_by_id_mut(id).ok_or(StoreError::not_found(id))?;

        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(quantity) = patch.quantity {
            item.quantity = quantity;
        }
        if let Some(unit_price) = patch.unit_price {
            item.unit_price = unit_price;
        }

        debug!(id, "Updated item");
        Ok(&*item)
    }

    /// Removes the item with `id`. Returns whether one was removed.
    ///
    /// The id counter is not touched.
    pub fn remove_by_id(&mut self, id: ItemId) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                self.items.remove(index);
                debug!(id, "Removed item");
                true
            }
            None => false,
        }
    }

    /// Items whose name contains `term` (case-sensitive), in store order.
    pub fn search_by_name(&self, term: &str) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.name_contains(term))
            .collect()
    }

    /// All items, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The id the next `add` will assign, or `None` when ids are exhausted.
    pub fn next_id(&self) -> Option<ItemId> {
        ItemId::try_from(self.next_id).ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stockroom_core::codec::{DefaultCause, ItemField};
    use tempfile::TempDir;

    fn scratch() -> (TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        (dir, path)
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let (_dir, path) = scratch();
        let (store, report) = ItemStore::open(&StoreConfig::new(&path)).unwrap();

        assert!(store.is_empty());
        assert_eq!(store.next_id(), Some(1));
        assert_eq!(report, LoadReport::default());
    }

    #[test]
    fn test_unreadable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ItemStore::new();

        let err = store.load(dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (_dir, path) = scratch();
        let mut store = ItemStore::new();
        store.add("Widget", 5, 2.5).unwrap();
        store.add("Gadget", -3, 0.1).unwrap();
        store.add("Sprocket", 0, 1e-3).unwrap();
        store.save(&path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "1,Widget,5,2.5\n2,Gadget,-3,0.1\n3,Sprocket,0,0.001\n"
        );

        let mut reloaded = ItemStore::new();
        let report = reloaded.load(&path).unwrap();
        assert!(report.is_clean());
        assert_eq!(reloaded.items(), store.items());
        assert_eq!(reloaded.next_id(), Some(4));
    }

    #[test]
    fn test_save_truncates_previous_contents() {
        let (_dir, path) = scratch();
        fs::write(&path, "1,Old,1,1\n2,Older,2,2\n3,Oldest,3,3\n").unwrap();

        let mut store = ItemStore::new();
        store.add("Only", 1, 1.0).unwrap();
        store.save(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "1,Only,1,1\n");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let (dir, _) = scratch();
        let path = dir.path().join("no-such-dir").join("inventory.csv");

        let err = ItemStore::new().save(&path).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
    }

    #[test]
    fn test_load_skips_invalid_ids_and_keeps_the_rest() {
        let (_dir, path) = scratch();
        fs::write(&path, "1,Widget,5,2.5\nx,Broken,1,1\n\n3,Gear,2,4\n").unwrap();

        let mut store = ItemStore::new();
        let report = store.load(&path).unwrap();

        let ids: Vec<_> = store.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(report.loaded, 2);
        assert_eq!(
            report.skipped,
            vec![SkippedLine {
                line_number: 2,
                cause: SkipCause::Malformed(SkipReason::InvalidId("x".to_string())),
            }]
        );
    }

    #[test]
    fn test_load_reports_defaulted_fields() {
        let (_dir, path) = scratch();
        fs::write(&path, "4,Bolt,many\n").unwrap();

        let mut store = ItemStore::new();
        let report = store.load(&path).unwrap();

        assert_eq!(store.items(), &[Item::new(4, "Bolt", 0, 0.0)]);
        assert_eq!(
            report.defaulted,
            vec![DefaultedLine {
                line_number: 1,
                id: 4,
                defaults: vec![
                    FieldDefault {
                        field: ItemField::Quantity,
                        cause: DefaultCause::Unparseable("many".to_string()),
                    },
                    FieldDefault {
                        field: ItemField::Price,
                        cause: DefaultCause::Missing,
                    },
                ],
            }]
        );
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let (_dir, path) = scratch();
        fs::write(&path, "2,First,1,1\n2,Second,1,1\n").unwrap();

        let mut store = ItemStore::new();
        let report = store.load(&path).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_id(2).unwrap().name, "First");
        assert_eq!(
            report.skipped,
            vec![SkippedLine {
                line_number: 2,
                cause: SkipCause::DuplicateId(2),
            }]
        );
    }

    #[test]
    fn test_next_id_follows_max_loaded_id() {
        let (_dir, path) = scratch();
        fs::write(&path, "7,Seven,1,1\n3,Three,1,1\n").unwrap();

        let mut store = ItemStore::new();
        store.load(&path).unwrap();

        assert_eq!(store.add("Eight", 1, 1.0).unwrap(), 8);
    }

    #[test]
    fn test_reload_never_lowers_next_id() {
        let (_dir, path) = scratch();
        fs::write(&path, "2,Two,1,1\n").unwrap();

        let mut store = ItemStore::new();
        for _ in 0..5 {
            store.add("Filler", 0, 0.0).unwrap();
        }
        store.load(&path).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.next_id(), Some(6));
    }

    #[test]
    fn test_largest_id_exhausts_counter() {
        let (_dir, path) = scratch();
        fs::write(&path, format!("{},Last,1,1\n", ItemId::MAX)).unwrap();

        let mut store = ItemStore::new();
        store.load(&path).unwrap();

        assert_eq!(store.next_id(), None);
        assert!(matches!(
            store.add("Overflow", 1, 1.0),
            Err(StoreError::IdsExhausted)
        ));
    }

    #[test]
    fn test_update_applies_only_given_fields() {
        let mut store = ItemStore::new();
        let id = store.add("Widget", 5, 2.5).unwrap();

        let patch = ItemPatch {
            unit_price: Some(3.75),
            ..ItemPatch::default()
        };
        let updated = store.update(id, patch).unwrap();

        assert_eq!(updated, &Item::new(id, "Widget", 5, 3.75));
    }

    #[test]
    fn test_update_missing_id() {
        let mut store = ItemStore::new();
        let err = store.update(9, ItemPatch::default()).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id: 9 }));
    }

    #[test]
    fn test_remove_missing_id_leaves_store_unchanged() {
        let mut store = ItemStore::new();
        store.add("Widget", 5, 2.5).unwrap();
        store.add("Gadget", 1, 1.0).unwrap();
        let before = store.items().to_vec();

        assert!(!store.remove_by_id(42));
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn test_search_is_case_sensitive_substring() {
        let mut store = ItemStore::new();
        store.add("Blue Widget", 1, 1.0).unwrap();
        store.add("widget holder", 1, 1.0).unwrap();
        store.add("Red Widget", 1, 1.0).unwrap();

        let names: Vec<_> = store
            .search_by_name("Widget")
            .into_iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["Blue Widget", "Red Widget"]);
        assert!(store.search_by_name("Gizmo").is_empty());
    }

    proptest! {
        #[test]
        fn prop_ids_strictly_increase_across_removes(
            ops in proptest::collection::vec(any::<Option<prop::sample::Index>>(), 1..64)
        ) {
            let mut store = ItemStore::new();
            let mut issued: Vec<ItemId> = Vec::new();

            for op in ops {
                match op {
                    Some(index) if !store.is_empty() => {
                        let id = store.items()[index.index(store.len())].id;
                        prop_assert!(store.remove_by_id(id));
                    }
                    _ => {
                        let id = store.add("Item", 1, 1.0).unwrap();
                        if let Some(last) = issued.last() {
                            prop_assert!(id > *last);
                        }
                        issued.push(id);
                    }
                }
            }
        }
    }
}
