//! Read-only access to microformat markup.
//!
//! Every lookup here is total: a missing element or attribute is `None` or an
//! empty string, never an error. Author markup is untrusted and often
//! malformed, and one bad field must not abort the rest of a record.

mod href;

use scraper::{ElementRef, Html};

pub use href::DocumentLocation;

/// An element of the document, queried by microformat class names.
#[derive(Debug, Clone, Copy)]
pub struct Fragment<'a> {
    element: ElementRef<'a>,
}

impl<'a> Fragment<'a> {
    #[must_use]
    pub fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// All elements of `document` carrying `class`, in document order.
    #[must_use]
    pub fn roots(document: &'a Html, class: &str) -> Vec<Self> {
        let root = document.root_element();
        std::iter::once(root)
            .chain(root.descendants().skip(1).filter_map(ElementRef::wrap))
            .map(Self::new)
            .filter(|f| f.has_class(class))
            .collect()
    }

    #[must_use]
    pub fn tag_name(&self) -> &'a str {
        self.element.value().name()
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.element.value().classes().any(|c| c == class)
    }

    /// Descendant elements (not including this one), in document order.
    fn descendants(self) -> impl Iterator<Item = Fragment<'a>> {
        self.element
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .map(Fragment::new)
    }

    /// First descendant carrying `class`.
    #[must_use]
    pub fn find(&self, class: &str) -> Option<Self> {
        self.descendants().find(|f| f.has_class(class))
    }

    /// Every descendant carrying `class`.
    #[must_use]
    pub fn find_all(&self, class: &str) -> Vec<Self> {
        self.descendants().filter(|f| f.has_class(class)).collect()
    }

    /// First direct child element named `tag`.
    #[must_use]
    pub fn child(&self, tag: &str) -> Option<Self> {
        self.element
            .children()
            .filter_map(ElementRef::wrap)
            .map(Fragment::new)
            .find(|f| f.tag_name().eq_ignore_ascii_case(tag))
    }

    /// First descendant anchor whose `rel` attribute lists `rel`.
    #[must_use]
    pub fn find_rel(&self, rel: &str) -> Option<Self> {
        self.descendants().find(|f| {
            f.tag_name().eq_ignore_ascii_case("a")
                && f
                    .attr("rel")
                    .is_some_and(|r| r.split_whitespace().any(|t| t.eq_ignore_ascii_case(rel)))
        })
    }

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Text content with whitespace runs collapsed and the ends trimmed.
    #[must_use]
    pub fn text(&self) -> String {
        collapse_whitespace(&self.element.text().collect::<String>())
    }

    /// Text of the first descendant carrying `class`, or an empty string.
    #[must_use]
    pub fn text_of(&self, class: &str) -> String {
        self.find(class).map(|f| f.text()).unwrap_or_default()
    }

    /// Attribute of the first descendant carrying `class`.
    #[must_use]
    pub fn attr_of(&self, class: &str, name: &str) -> Option<&'a str> {
        self.find(class).and_then(|f| f.attr(name))
    }

    /// Reads a link-like attribute in either of its two shapes:
    /// on the classed element itself, or on a `tag` child one level down.
    /// The first probe wins.
    #[must_use]
    pub fn probe_attr(&self, class: &str, tag: &str, name: &str) -> Option<&'a str> {
        let found = self.find(class)?;
        found
            .attr(name)
            .or_else(|| found.child(tag).and_then(|c| c.attr(name)))
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
