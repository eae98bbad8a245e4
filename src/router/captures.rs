use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Path parameters bound during a search, in binding order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures<'a> {
    buf: SmallVec<[(&'a str, &'a str); 8]>,
}

impl<'a> Captures<'a> {
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.buf
            .iter()
            .find_map(|&(k, v)| if name == k { Some(v) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn to_owned_pairs(&self) -> Vec<(String, String)> {
        self.buf
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }
}

impl<'a> Deref for Captures<'a> {
    type Target = [(&'a str, &'a str)];
    fn deref(&self) -> &Self::Target {
        &*self.buf
    }
}

impl<'a> Captures<'a> {
    pub(super) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    /// Binds `name`, replacing an earlier value in place.
    pub(super) fn insert(&mut self, name: &'a str, value: &'a str) {
        match self.buf.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.buf.push((name, value)),
        }
    }
}
