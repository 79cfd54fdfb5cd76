//! Container capabilities: where rendered markup goes.
//!
//! The loader never owns page structure. It asks a [`ContainerLookup`] for
//! the element that hosts a game's list and replaces that element's
//! content. [`crate::page::PageDocument`] binds this to an HTML template;
//! [`MemoryPage`] keeps containers in memory.

use std::collections::BTreeMap;

/// An element whose children the loader may replace.
pub trait Container {
    /// Replace everything inside the element with `markup`.
    fn replace_content(&mut self, markup: &str);
}

/// Resolves container ids to containers.
pub trait ContainerLookup {
    /// Find the container with element id `id`, if the page has one.
    fn lookup(&mut self, id: &str) -> Option<&mut dyn Container>;
}

/// A single in-memory container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryContainer {
    pub content: String,
    /// Number of times the content has been replaced.
    pub writes: usize,
}

impl Container for MemoryContainer {
    fn replace_content(&mut self, markup: &str) {
        self.content = markup.to_string();
        self.writes += 1;
    }
}

/// A page made of named in-memory containers.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    containers: BTreeMap<String, MemoryContainer>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with one empty container per id.
    pub fn with_containers<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            containers: ids
                .into_iter()
                .map(|id| (id.into(), MemoryContainer::default()))
                .collect(),
        }
    }

    pub fn add_container(&mut self, id: impl Into<String>, content: impl Into<String>) {
        self.containers.insert(
            id.into(),
            MemoryContainer {
                content: content.into(),
                writes: 0,
            },
        );
    }

    pub fn get(&self, id: &str) -> Option<&MemoryContainer> {
        self.containers.get(id)
    }

    pub fn content(&self, id: &str) -> Option<&str> {
        self.containers.get(id).map(|c| c.content.as_str())
    }
}

impl ContainerLookup for MemoryPage {
    fn lookup(&mut self, id: &str) -> Option<&mut dyn Container> {
        self.containers
            .get_mut(id)
            .map(|c| c as &mut dyn Container)
    }
}
