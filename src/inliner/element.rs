//! Element access for the inlining engine
//!
//! The engine only needs to read and rewrite attributes of elements and to
//! ask which elements a selector matches. [`StyleTarget`] and
//! [`ElementTree`] capture exactly that, so the engine runs against the
//! kuchiki DOM in production and against small in-memory trees in tests.

use kuchiki::traits::*;
use kuchiki::{ElementData, NodeDataRef, NodeRef, Selectors};

/// Stable handle of an element: its position in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub usize);

/// Anything carrying attributes the engine can read and rewrite.
///
/// Kuchiki elements use interior mutability, so mutation goes through a
/// shared reference.
pub trait StyleTarget {
    /// Lowercase tag name, used in diagnostics.
    fn tag_name(&self) -> String;

    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: String);

    fn remove_attribute(&self, name: &str);
}

/// A document's elements in document order, plus selector evaluation.
pub trait ElementTree {
    type Element: StyleTarget;

    /// All elements in document order; `ElementId(i)` addresses `elements()[i]`.
    fn elements(&self) -> &[Self::Element];

    /// Elements matched by `selector`, in document order.
    ///
    /// `Err(())` means the selector cannot be evaluated by this tree.
    #[allow(clippy::result_unit_err)]
    fn select(&self, selector: &str) -> Result<Vec<ElementId>, ()>;

    fn element(&self, id: ElementId) -> Option<&Self::Element> {
        self.elements().get(id.0)
    }

    fn len(&self) -> usize {
        self.elements().len()
    }

    fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }
}

impl StyleTarget for NodeDataRef<ElementData> {
    fn tag_name(&self) -> String {
        self.name.local.to_string()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).map(str::to_string)
    }

    fn set_attribute(&self, name: &str, value: String) {
        self.attributes.borrow_mut().insert(name, value);
    }

    fn remove_attribute(&self, name: &str) {
        self.attributes.borrow_mut().remove(name);
    }
}

/// Element arena over a kuchiki document.
///
/// The arena is a snapshot: it is built once per pass and the engine never
/// adds or removes elements while it is alive.
pub struct KuchikiTree {
    elements: Vec<NodeDataRef<ElementData>>,
}

impl KuchikiTree {
    /// Collect every element below `root` in document order.
    pub fn new(root: &NodeRef) -> Self {
        Self {
            elements: root.descendants().elements().collect(),
        }
    }
}

impl ElementTree for KuchikiTree {
    type Element = NodeDataRef<ElementData>;

    fn elements(&self) -> &[Self::Element] {
        &self.elements
    }

    fn select(&self, selector: &str) -> Result<Vec<ElementId>, ()> {
        let compiled = Selectors::compile(selector)?;
        Ok(self
            .elements
            .iter()
            .enumerate()
            .filter(|(_, element)| compiled.matches(element))
            .map(|(index, _)| ElementId(index))
            .collect())
    }
}

impl std::fmt::Debug for KuchikiTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KuchikiTree")
            .field("elements", &self.elements.len())
            .finish()
    }
}
