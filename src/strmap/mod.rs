use std::fmt;

/// A map from string keys to values, kept sorted for binary search.
///
/// Trie nodes usually have a handful of children, where a sorted vector
/// beats hashing on both memory and lookup time.
pub struct StrMap<T> {
    keys: Vec<Box<str>>,
    values: Vec<T>,
}

impl<T> StrMap<T> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        let i = self.find_index(key).ok()?;
        self.values.get(i)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find_index(key).is_ok()
    }

    pub fn get_or_insert_with(&mut self, key: &str, f: impl FnOnce() -> T) -> &mut T {
        let i = match self.find_index(key) {
            Ok(i) => i,
            Err(i) => {
                self.keys.insert(i, key.into());
                self.values.insert(i, f());
                i
            }
        };
        &mut self.values[i]
    }

    pub fn values(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.keys.iter().map(|k| &**k).zip(self.values.iter())
    }

    fn find_index(&self, key: &str) -> Result<usize, usize> {
        self.keys.binary_search_by(|k| (**k).cmp(key))
    }
}

impl<T> Default for StrMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for StrMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
