//! Shared utilities and strongly-typed common values for workspace crates.
//!
//! ```rust
//! use rcommon::{MetadataMap, Registry, RequestId, TraceId};
//!
//! let request = RequestId::from("req-1");
//! let trace = TraceId::new("trace-1");
//! let mut metadata = MetadataMap::new();
//! metadata.insert("client".to_string(), "smoke-test".to_string());
//!
//! let mut registry = Registry::new();
//! registry.insert("first".to_string(), 1_u32);
//!
//! assert_eq!(request.as_str(), "req-1");
//! assert_eq!(trace.to_string(), "trace-1");
//! assert_eq!(registry.len(), 1);
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use rcommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod context {
    //! Shared metadata and cross-crate identifier newtypes.
    //!
    //! ```rust
    //! use rcommon::{RequestId, TraceId};
    //!
    //! let request = RequestId::new("req-42");
    //! let trace = TraceId::from("trace-42");
    //!
    //! assert_eq!(request.to_string(), "req-42");
    //! assert_eq!(trace.as_str(), "trace-42");
    //! ```

    use std::collections::HashMap;
    use std::fmt::{Display, Formatter};

    pub type MetadataMap = HashMap<String, String>;

    macro_rules! string_id {
        ($(#[$attr:meta])* $name:ident) => {
            $(#[$attr])*
            #[derive(Debug, Clone, PartialEq, Eq, Hash)]
            pub struct $name(String);

            impl $name {
                pub fn new(value: impl Into<String>) -> Self {
                    Self(value.into())
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl Display for $name {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<String> for $name {
                fn from(value: String) -> Self {
                    Self(value)
                }
            }

            impl From<&str> for $name {
                fn from(value: &str) -> Self {
                    Self(value.to_owned())
                }
            }
        };
    }

    string_id!(
        /// Server-assigned id of one invocation.
        RequestId
    );
    string_id!(
        /// Caller-supplied correlation id.
        TraceId
    );
}

pub mod registry {
    //! Insertion-ordered registry map used by runtime registries.
    //!
    //! Values are yielded in the order their keys were first inserted. Re-inserting an
    //! existing key replaces the value in place.
    //!
    //! ```rust
    //! use rcommon::Registry;
    //!
    //! let mut registry = Registry::new();
    //! registry.insert("beta".to_string(), 2_u32);
    //! registry.insert("alpha".to_string(), 1_u32);
    //!
    //! assert_eq!(registry.get("alpha"), Some(&1));
    //! assert_eq!(registry.values().copied().collect::<Vec<_>>(), vec![2, 1]);
    //! ```

    use std::borrow::Borrow;
    use std::collections::HashMap;
    use std::hash::Hash;

    #[derive(Debug, Clone)]
    pub struct Registry<K, V> {
        index: HashMap<K, usize>,
        items: Vec<V>,
    }

    impl<K, V> Default for Registry<K, V>
    where
        K: Eq + Hash,
    {
        fn default() -> Self {
            Self {
                index: HashMap::new(),
                items: Vec::new(),
            }
        }
    }

    impl<K, V> Registry<K, V>
    where
        K: Eq + Hash,
    {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn insert(&mut self, key: K, value: V) -> Option<V> {
            if let Some(&position) = self.index.get(&key) {
                return Some(std::mem::replace(&mut self.items[position], value));
            }

            self.index.insert(key, self.items.len());
            self.items.push(value);
            None
        }

        pub fn get<Q>(&self, key: &Q) -> Option<&V>
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.index.get(key).map(|&position| &self.items[position])
        }

        pub fn contains_key<Q>(&self, key: &Q) -> bool
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.index.contains_key(key)
        }

        pub fn values(&self) -> impl Iterator<Item = &V> {
            self.items.iter()
        }

        pub fn len(&self) -> usize {
            self.items.len()
        }

        pub fn is_empty(&self) -> bool {
            self.items.is_empty()
        }
    }
}

pub use context::{MetadataMap, RequestId, TraceId};
pub use future::BoxFuture;
pub use registry::Registry;

#[cfg(test)]
mod tests {
    use super::{Registry, RequestId, TraceId};

    #[test]
    fn id_newtypes_round_trip_strings() {
        let request = RequestId::new("req-1");
        let trace = TraceId::from("trace-1");

        assert_eq!(request.as_str(), "req-1");
        assert_eq!(trace.as_str(), "trace-1");
        assert_eq!(request.to_string(), "req-1");
        assert_eq!(trace.to_string(), "trace-1");
    }

    #[test]
    fn registry_preserves_insertion_order() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());

        registry.insert("zeta".to_string(), 26_u32);
        registry.insert("alpha".to_string(), 1_u32);
        registry.insert("mu".to_string(), 12_u32);

        let values = registry.values().copied().collect::<Vec<_>>();
        assert_eq!(values, vec![26, 1, 12]);
        assert_eq!(registry.len(), 3);
        assert!(registry.contains_key("mu"));
    }

    #[test]
    fn registry_replaces_existing_key_in_place() {
        let mut registry = Registry::new();
        registry.insert("alpha".to_string(), 1_u32);
        registry.insert("beta".to_string(), 2_u32);

        let previous = registry.insert("alpha".to_string(), 10_u32);
        assert_eq!(previous, Some(1));
        assert_eq!(registry.get("alpha"), Some(&10));
        assert_eq!(registry.values().copied().collect::<Vec<_>>(), vec![10, 2]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn registry_lookup_is_case_sensitive() {
        let mut registry = Registry::new();
        registry.insert("Alpha".to_string(), 1_u32);

        assert!(registry.get("alpha").is_none());
        assert_eq!(registry.get("Alpha"), Some(&1));
    }
}
