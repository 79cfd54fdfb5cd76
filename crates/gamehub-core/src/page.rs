//! Container lookup over an HTML page template.
//!
//! A container is any element whose start tag carries `id="<id>"`. Its
//! content runs from the end of the start tag to the balanced end tag of
//! the same name. Ranges are resolved against the original source and
//! replacements are spliced in by [`PageDocument::render`], so containers
//! must not nest.

use std::collections::BTreeMap;
use std::io;
use std::ops::Range;
use std::path::Path;

use regex::Regex;

use crate::container::{Container, ContainerLookup};

/// A resolved container inside the page source.
#[derive(Debug, Clone)]
struct Slot {
    inner: Range<usize>,
    content: Option<String>,
}

impl Container for Slot {
    fn replace_content(&mut self, markup: &str) {
        self.content = Some(markup.to_string());
    }
}

/// An HTML page whose containers can be rewritten.
#[derive(Debug, Clone)]
pub struct PageDocument {
    source: String,
    slots: BTreeMap<String, Slot>,
}

impl PageDocument {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            slots: BTreeMap::new(),
        }
    }

    pub fn from_path(path: &Path) -> io::Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Failed to read page '{}': {}", path.display(), e),
            )
        })?;
        Ok(Self::new(source))
    }

    /// Whether the page has a container with this id.
    pub fn has_container(&self, id: &str) -> bool {
        self.slots.contains_key(id) || find_inner(&self.source, id).is_some()
    }

    /// Current content of a container, with any replacement applied.
    pub fn container_content(&self, id: &str) -> Option<&str> {
        if let Some(slot) = self.slots.get(id) {
            return Some(match &slot.content {
                Some(content) => content.as_str(),
                None => &self.source[slot.inner.clone()],
            });
        }
        find_inner(&self.source, id).map(|range| &self.source[range])
    }

    /// Serialize the page with all replacements applied.
    pub fn render(&self) -> String {
        let mut replaced: Vec<&Slot> = self
            .slots
            .values()
            .filter(|slot| slot.content.is_some())
            .collect();
        replaced.sort_by_key(|slot| slot.inner.start);

        let mut out = String::with_capacity(self.source.len());
        let mut cursor = 0;
        for slot in replaced {
            if slot.inner.start < cursor {
                log::warn!("skipping container nested inside a replaced container");
                continue;
            }
            out.push_str(&self.source[cursor..slot.inner.start]);
            if let Some(content) = &slot.content {
                out.push_str(content);
            }
            cursor = slot.inner.end;
        }
        out.push_str(&self.source[cursor..]);
        out
    }
}

impl ContainerLookup for PageDocument {
    fn lookup(&mut self, id: &str) -> Option<&mut dyn Container> {
        if !self.slots.contains_key(id) {
            let inner = find_inner(&self.source, id)?;
            self.slots.insert(
                id.to_string(),
                Slot {
                    inner,
                    content: None,
                },
            );
        }
        self.slots.get_mut(id).map(|slot| slot as &mut dyn Container)
    }
}

/// Byte range of the content of the element with the given id.
fn find_inner(source: &str, id: &str) -> Option<Range<usize>> {
    let start_tag = Regex::new(&format!(
        r#"<([A-Za-z][A-Za-z0-9-]*)\b[^>]*\sid\s*=\s*["']{}["'][^>]*>"#,
        regex::escape(id)
    ))
    .ok()?;
    let caps = start_tag.captures(source)?;
    let whole = caps.get(0)?;
    if whole.as_str().ends_with("/>") {
        return None;
    }
    let tag = caps.get(1)?.as_str();

    let tags = Regex::new(&format!(r"(?i)<(/?){}\b[^>]*>", regex::escape(tag))).ok()?;
    let content_start = whole.end();
    let mut depth = 1usize;
    for m in tags.captures_iter(&source[content_start..]) {
        let full = m.get(0)?;
        let closing = m.get(1).is_some_and(|g| !g.as_str().is_empty());
        if closing {
            depth -= 1;
            if depth == 0 {
                return Some(content_start..content_start + full.start());
            }
        } else if !full.as_str().ends_with("/>") {
            depth += 1;
        }
    }
    None
}
