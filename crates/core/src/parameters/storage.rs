//! Parameter Storage Types
//!
//! Provides the `ParameterStore` used as the blink controller's parameter
//! provider. Values are `u32` with registered bounds; validity is computed on
//! every read so a value restored without validation reads back `Invalid`.

use super::error::ParameterError;
use crate::traits::ParamValid;
use bitflags::bitflags;
use heapless::index_map::FnvIndexMap;
use heapless::String;

/// Maximum parameter name length
pub const PARAM_NAME_LEN: usize = 16;

/// Maximum number of parameters (power of two, required by `FnvIndexMap`)
pub const MAX_PARAMS: usize = 16;

bitflags! {
    /// Parameter flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ParamFlags: u8 {
        /// Parameter is hidden from name listings
        const HIDDEN = 0b00000001;
        /// Parameter is read-only (cannot be modified through `set`)
        const READ_ONLY = 0b00000010;
    }
}

/// Inclusive value bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamBounds {
    pub min: u32,
    pub max: u32,
}

impl ParamBounds {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Parameter definition
#[derive(Debug, Clone, Copy)]
pub struct ParamMetadata {
    /// Value assigned at registration, `None` leaves the parameter uninitialized
    pub default: Option<u32>,
    /// Accepted range
    pub bounds: ParamBounds,
    /// Parameter flags
    pub flags: ParamFlags,
}

impl ParamMetadata {
    pub const fn new(default: Option<u32>, min: u32, max: u32, flags: ParamFlags) -> Self {
        Self {
            default,
            bounds: ParamBounds::new(min, max),
            flags,
        }
    }
}

#[derive(Debug, Clone)]
struct ParamEntry {
    value: Option<u32>,
    metadata: ParamMetadata,
}

/// Parameter store for configuration management
///
/// Stores `u32` parameters keyed by name, with bounds and flags per entry.
pub struct ParameterStore {
    entries: FnvIndexMap<String<PARAM_NAME_LEN>, ParamEntry, MAX_PARAMS>,
    /// Dirty flag (changed since last save)
    dirty: bool,
}

impl ParameterStore {
    /// Create a new empty parameter store
    pub fn new() -> Self {
        Self {
            entries: FnvIndexMap::new(),
            dirty: false,
        }
    }

    fn key(name: &str) -> Result<String<PARAM_NAME_LEN>, ParameterError> {
        let mut key = String::<PARAM_NAME_LEN>::new();
        key.push_str(name)
            .map_err(|_| ParameterError::InvalidName)?;
        Ok(key)
    }

    /// Register a new parameter
    ///
    /// If the parameter already exists, this is a no-op (idempotent).
    pub fn register(&mut self, name: &str, metadata: ParamMetadata) -> Result<(), ParameterError> {
        let key = Self::key(name)?;

        if self.entries.contains_key(&key) {
            // Already exists, don't overwrite
            return Ok(());
        }

        let entry = ParamEntry {
            value: metadata.default,
            metadata,
        };
        self.entries
            .insert(key, entry)
            .map_err(|_| ParameterError::StoreFull)?;
        Ok(())
    }

    /// Get parameter value, `None` if unknown or uninitialized
    pub fn get(&self, name: &str) -> Option<u32> {
        let key = Self::key(name).ok()?;
        self.entries.get(&key)?.value
    }

    /// Validity of the stored value
    pub fn validity(&self, name: &str) -> ParamValid {
        let Ok(key) = Self::key(name) else {
            return ParamValid::Uninit;
        };

        match self.entries.get(&key) {
            Some(ParamEntry {
                value: Some(value),
                metadata,
            }) => {
                if metadata.bounds.contains(*value) {
                    ParamValid::Valid
                } else {
                    ParamValid::Invalid
                }
            }
            _ => ParamValid::Uninit,
        }
    }

    /// Value together with its validity
    pub fn read(&self, name: &str) -> (u32, ParamValid) {
        (self.get(name).unwrap_or(0), self.validity(name))
    }

    /// Set a validated parameter value
    ///
    /// Marks the store as dirty.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the parameter was never registered
    /// - `ReadOnly` if the parameter carries `READ_ONLY`
    /// - `OutOfRange` if `value` is outside the registered bounds
    pub fn set(&mut self, name: &str, value: u32) -> Result<(), ParameterError> {
        let key = Self::key(name)?;
        let entry = self
            .entries
            .get_mut(&key)
            .ok_or(ParameterError::NotFound)?;

        if entry.metadata.flags.contains(ParamFlags::READ_ONLY) {
            return Err(ParameterError::ReadOnly);
        }
        if !entry.metadata.bounds.contains(value) {
            return Err(ParameterError::OutOfRange);
        }

        entry.value = Some(value);
        self.dirty = true;
        Ok(())
    }

    /// Restore a value without validation
    ///
    /// Used when loading persisted values. An out-of-range value is kept and
    /// reads back as `ParamValid::Invalid`. Does not mark the store dirty.
    pub fn load(&mut self, name: &str, value: u32) -> Result<(), ParameterError> {
        let key = Self::key(name)?;
        let entry = self
            .entries
            .get_mut(&key)
            .ok_or(ParameterError::NotFound)?;
        entry.value = Some(value);
        Ok(())
    }

    /// Restore the registered default (which may leave the parameter uninitialized)
    pub fn reset(&mut self, name: &str) -> Result<(), ParameterError> {
        let key = Self::key(name)?;
        let entry = self
            .entries
            .get_mut(&key)
            .ok_or(ParameterError::NotFound)?;
        entry.value = entry.metadata.default;
        self.dirty = true;
        Ok(())
    }

    /// Check if parameter is hidden
    pub fn is_hidden(&self, name: &str) -> bool {
        let Ok(key) = Self::key(name) else {
            return false;
        };
        self.entries
            .get(&key)
            .map(|entry| entry.metadata.flags.contains(ParamFlags::HIDDEN))
            .unwrap_or(false)
    }

    /// Get all parameter names (excluding hidden parameters)
    pub fn iter_names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, entry)| !entry.metadata.flags.contains(ParamFlags::HIDDEN))
            .map(|(name, _)| name.as_str())
    }

    /// Get parameter count (excluding hidden parameters)
    pub fn count(&self) -> usize {
        self.iter_names().count()
    }

    /// Check if store has unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear dirty flag (called after a successful save)
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec::Vec;

    use super::*;

    const META: ParamMetadata = ParamMetadata::new(Some(10), 1, 100, ParamFlags::empty());

    #[test]
    fn test_register_and_get() {
        let mut store = ParameterStore::new();
        store.register("TEST_PARAM", META).unwrap();

        assert_eq!(store.get("TEST_PARAM"), Some(10));
        assert_eq!(store.validity("TEST_PARAM"), ParamValid::Valid);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_register_idempotent() {
        let mut store = ParameterStore::new();
        store.register("TEST_PARAM", META).unwrap();
        store.set("TEST_PARAM", 50).unwrap();

        store.register("TEST_PARAM", META).unwrap();
        assert_eq!(store.get("TEST_PARAM"), Some(50));
    }

    #[test]
    fn test_unknown_is_uninit() {
        let store = ParameterStore::new();
        assert_eq!(store.get("MISSING"), None);
        assert_eq!(store.validity("MISSING"), ParamValid::Uninit);
        assert_eq!(store.read("MISSING"), (0, ParamValid::Uninit));
    }

    #[test]
    fn test_no_default_is_uninit_until_set() {
        let mut store = ParameterStore::new();
        let meta = ParamMetadata::new(None, 0, 100, ParamFlags::empty());
        store.register("LATE_PARAM", meta).unwrap();

        assert_eq!(store.validity("LATE_PARAM"), ParamValid::Uninit);

        store.set("LATE_PARAM", 3).unwrap();
        assert_eq!(store.read("LATE_PARAM"), (3, ParamValid::Valid));
    }

    #[test]
    fn test_set_validates() {
        let mut store = ParameterStore::new();
        store.register("TEST_PARAM", META).unwrap();

        assert_eq!(store.set("TEST_PARAM", 0), Err(ParameterError::OutOfRange));
        assert_eq!(store.set("TEST_PARAM", 101), Err(ParameterError::OutOfRange));
        assert_eq!(store.set("OTHER", 5), Err(ParameterError::NotFound));
        assert!(!store.is_dirty());

        store.set("TEST_PARAM", 100).unwrap();
        assert!(store.is_dirty());

        store.clear_dirty();
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_read_only_rejected() {
        let mut store = ParameterStore::new();
        let meta = ParamMetadata::new(Some(1), 0, 10, ParamFlags::READ_ONLY);
        store.register("FIXED", meta).unwrap();

        assert_eq!(store.set("FIXED", 2), Err(ParameterError::ReadOnly));
        assert_eq!(store.get("FIXED"), Some(1));
    }

    #[test]
    fn test_load_out_of_range_reads_invalid() {
        let mut store = ParameterStore::new();
        store.register("TEST_PARAM", META).unwrap();

        store.load("TEST_PARAM", 500).unwrap();
        assert_eq!(store.read("TEST_PARAM"), (500, ParamValid::Invalid));
        assert!(!store.is_dirty());

        store.reset("TEST_PARAM").unwrap();
        assert_eq!(store.read("TEST_PARAM"), (10, ParamValid::Valid));
    }

    #[test]
    fn test_name_too_long() {
        let mut store = ParameterStore::new();
        let result = store.register("THIS_NAME_IS_TOO_LONG", META);
        assert_eq!(result, Err(ParameterError::InvalidName));
    }

    #[test]
    fn test_hidden_excluded_from_listing() {
        let mut store = ParameterStore::new();
        store.register("VISIBLE", META).unwrap();
        let hidden = ParamMetadata::new(Some(1), 0, 10, ParamFlags::HIDDEN);
        store.register("SECRET", hidden).unwrap();

        assert!(store.is_hidden("SECRET"));
        assert!(!store.is_hidden("VISIBLE"));
        assert_eq!(store.count(), 1);
        assert_eq!(store.iter_names().collect::<Vec<_>>(), ["VISIBLE"]);
    }

    #[test]
    fn test_store_full() {
        let mut store = ParameterStore::new();
        let names = [
            "P00", "P01", "P02", "P03", "P04", "P05", "P06", "P07", "P08", "P09", "P10", "P11",
            "P12", "P13", "P14", "P15",
        ];
        for name in names {
            store.register(name, META).unwrap();
        }

        assert_eq!(store.register("P16", META), Err(ParameterError::StoreFull));
    }
}
