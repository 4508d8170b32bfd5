//! Ordered, id-keyed entity collections.
//!
//! A [`Collection`] is never edited in place by the reducers. Every mutation
//! produces a new collection with the affected elements replaced, so a
//! previously read snapshot keeps its contents and order.

use std::sync::Arc;

pub trait Keyed {
    fn key(&self) -> &str;
}

/// Fields a query is matched against. The marker parameter lets one entity
/// expose different field sets to different screens.
pub trait Searchable<By = ()> {
    fn search_fields(&self) -> Vec<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<T> {
    items: Arc<[T]>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }
}

impl<T: Keyed + Clone> Collection<T> {
    pub fn from_seed(items: Vec<T>) -> Self {
        Self {
            items: Arc::from(items),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Returns a new collection where every element keyed `id` is replaced by
    /// `update(element)`. `None` when nothing matches.
    pub fn with_updated(&self, id: &str, update: impl Fn(&T) -> T) -> Option<Self> {
        if !self.contains(id) {
            return None;
        }

        let items: Vec<T> = self
            .items
            .iter()
            .map(|item| {
                if item.key() == id {
                    update(item)
                } else {
                    item.clone()
                }
            })
            .collect();
        Some(Self::from_seed(items))
    }

    pub fn with_prepended(&self, item: T) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.push(item);
        items.extend(self.items.iter().cloned());
        Self::from_seed(items)
    }

    pub fn filtered<By>(&self, query: &str) -> Vec<&T>
    where
        T: Searchable<By>,
    {
        filter_matches::<T, By>(self.items.iter(), query)
    }
}

/// Case-insensitive substring match over `Searchable` fields. An empty query
/// keeps everything; order is always preserved.
pub fn filter_matches<'a, T, By>(items: impl Iterator<Item = &'a T>, query: &str) -> Vec<&'a T>
where
    T: Searchable<By> + 'a,
{
    if query.is_empty() {
        return items.collect();
    }

    let needle = query.to_lowercase();
    items
        .filter(|item| {
            Searchable::<By>::search_fields(*item)
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row {
        id: &'static str,
        name: &'static str,
    }

    impl Keyed for Row {
        fn key(&self) -> &str {
            self.id
        }
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.id, self.name]
        }
    }

    fn rows() -> Collection<Row> {
        Collection::from_seed(vec![
            Row { id: "a", name: "Sarah Smith" },
            Row { id: "b", name: "Michael Chen" },
            Row { id: "c", name: "Emma Wilson" },
        ])
    }

    fn ids(rows: &[&Row]) -> Vec<&'static str> {
        rows.iter().map(|row| row.id).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let rows = rows();
        assert_eq!(ids(&rows.filtered::<()>("")), vec!["a", "b", "c"]);
    }

    #[test]
    fn query_matches_case_insensitively_across_fields() {
        let rows = rows();
        assert_eq!(ids(&rows.filtered::<()>("SMITH")), vec!["a"]);
        assert_eq!(ids(&rows.filtered::<()>("i")), vec!["a", "b", "c"]);
        assert_eq!(ids(&rows.filtered::<()>("B")), vec!["b"]);
        assert!(rows.filtered::<()>("zzz").is_empty());
    }

    #[test]
    fn update_replaces_only_the_matching_element() {
        let before = rows();
        let after = before
            .with_updated("b", |row| Row {
                name: "Mike Tech",
                ..row.clone()
            })
            .expect("row b exists");

        assert_eq!(before.get("b").map(|row| row.name), Some("Michael Chen"));
        assert_eq!(after.get("b").map(|row| row.name), Some("Mike Tech"));
        assert_eq!(after.as_slice()[0], before.as_slice()[0]);
        assert_eq!(after.as_slice()[2], before.as_slice()[2]);
        assert_eq!(
            after.iter().map(|row| row.id).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn update_of_unknown_id_is_none() {
        assert!(rows().with_updated("zz", Row::clone).is_none());
    }

    #[test]
    fn prepend_puts_new_element_first() {
        let before = rows();
        let after = before.with_prepended(Row { id: "d", name: "New" });

        assert_eq!(after.len(), 4);
        assert_eq!(after.as_slice()[0].id, "d");
        assert_eq!(after.as_slice()[1].id, "a");
        assert_eq!(before.len(), 3);
    }
}
