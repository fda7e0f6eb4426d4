use std::collections::HashMap;

use crate::Result;

/// Local, synchronous key-value store.
///
/// Values are opaque text and are only ever replaced as a whole.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn put(&mut self, key: &str, value: &str) -> Result<()>;
    fn delete(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).put(key, value)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        (**self).delete(key)
    }
}

/// In-process store that forgets everything on drop
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with one value, handy for startup scenarios
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_overwrites() -> Result<()> {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k")?, None);

        store.put("k", "one")?;
        store.put("k", "two")?;
        assert_eq!(store.get("k")?.as_deref(), Some("two"));

        store.delete("k")?;
        assert_eq!(store.get("k")?, None);
        Ok(())
    }

    #[test]
    fn test_boxed_store_delegates() -> Result<()> {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::with_value("a", "1"));
        assert_eq!(store.get("a")?.as_deref(), Some("1"));
        store.put("a", "2")?;
        assert_eq!(store.get("a")?.as_deref(), Some("2"));
        Ok(())
    }
}
