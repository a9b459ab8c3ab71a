//! Attribute targets
//!
//! Animations and synchronizations write their output into display elements through
//! [`AttributeTarget`]. The host owns the real elements; [`Element`] is an in-memory
//! implementation for headless hosts and tests.

use rustc_hash::FxHashMap;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Something with named, string-valued attributes.
///
/// Methods take `&self`: the scheduler only ever holds shared handles, so implementors
/// use interior mutability.
pub trait AttributeTarget {
    /// Set the named attribute
    fn set_attribute(&self, name: &str, value: &str);

    /// Read the named attribute back, if it has been set
    fn attribute(&self, name: &str) -> Option<String>;
}

/// Shared handle to an attribute target
pub type ElementRef = Rc<dyn AttributeTarget>;

/// In-memory attribute store
#[derive(Debug, Default)]
pub struct Element {
    attributes: RefCell<FxHashMap<String, String>>,
    /// Number of `set_attribute` calls, including ones that wrote an unchanged value
    writes: Cell<u64>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element already wrapped in an `Rc`, ready to hand to the scheduler
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }

    /// Total number of attribute writes seen by this element
    pub fn write_count(&self) -> u64 {
        self.writes.get()
    }

    /// Whether the named attribute has been set
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.borrow().contains_key(name)
    }

    /// Remove the named attribute, returning its last value
    pub fn remove_attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow_mut().remove(name)
    }
}

impl AttributeTarget for Element {
    fn set_attribute(&self, name: &str, value: &str) {
        self.writes.set(self.writes.get() + 1);
        let mut attributes = self.attributes.borrow_mut();
        match attributes.get_mut(name) {
            Some(existing) => {
                existing.clear();
                existing.push_str(value);
            }
            None => {
                attributes.insert(name.to_owned(), value.to_owned());
            }
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }
}
