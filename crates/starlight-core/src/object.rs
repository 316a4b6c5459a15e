//! Object model: identity, naming, and parent-child relationships.
//!
//! Every widget and model object in Starlight carries an [`ObjectId`]
//! allocated by the global [`ObjectRegistry`]. The registry tracks the
//! object's type name, user-assigned name, and position in the ownership
//! tree. Widgets embed an [`ObjectBase`], which registers on construction
//! and unregisters on drop.
//!
//! The registry must be initialized once per process with
//! [`init_global_registry`] before any object is created.

use std::fmt;

use parking_lot::RwLock;
use slotmap::{new_key_type, SlotMap};
use std::sync::OnceLock;

new_key_type! {
    /// A unique identifier for a registered object.
    ///
    /// IDs are never reused while the owning object is alive; after the
    /// object is dropped the slot may be recycled for a new object.
    pub struct ObjectId;
}

/// Object-model specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectError {
    /// The global registry has not been initialized.
    RegistryNotInitialized,
    /// The object ID does not refer to a live object.
    UnknownObject,
    /// Setting the parent would create a cycle in the ownership tree.
    ParentCycle,
}

impl fmt::Display for ObjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegistryNotInitialized => {
                write!(f, "Object registry not initialized. Call init_global_registry() first")
            }
            Self::UnknownObject => write!(f, "Unknown or destroyed object ID"),
            Self::ParentCycle => write!(f, "Setting this parent would create a cycle"),
        }
    }
}

impl std::error::Error for ObjectError {}

/// A specialized Result type for object operations.
pub type ObjectResult<T> = std::result::Result<T, ObjectError>;

/// The base trait for all objects participating in the object model.
///
/// Implementors typically embed an [`ObjectBase`] and delegate:
///
/// ```
/// use starlight_core::{init_global_registry, Object, ObjectBase, ObjectId};
///
/// init_global_registry();
///
/// struct Counter {
///     base: ObjectBase,
/// }
///
/// impl Object for Counter {
///     fn object_id(&self) -> ObjectId {
///         self.base.id()
///     }
/// }
/// ```
pub trait Object: Send + Sync {
    /// Get the object's unique ID.
    fn object_id(&self) -> ObjectId;
}

/// Per-object bookkeeping held by the registry.
struct ObjectRecord {
    /// The Rust type name of the object, for debugging.
    type_name: &'static str,
    /// The user-assigned object name (empty by default).
    name: String,
    /// The parent object, if any.
    parent: Option<ObjectId>,
    /// Child objects, in registration order.
    children: Vec<ObjectId>,
}

/// The registry of all live objects.
///
/// The registry stores naming and ownership information. It does not own
/// the objects themselves; an [`ObjectBase`] removes its record when
/// dropped.
pub struct ObjectRegistry {
    records: RwLock<SlotMap<ObjectId, ObjectRecord>>,
}

impl ObjectRegistry {
    fn new() -> Self {
        Self {
            records: RwLock::new(SlotMap::with_key()),
        }
    }

    /// Register a new object and return its ID.
    pub fn register(&self, type_name: &'static str) -> ObjectId {
        let id = self.records.write().insert(ObjectRecord {
            type_name,
            name: String::new(),
            parent: None,
            children: Vec::new(),
        });
        tracing::trace!(target: crate::logging::targets::OBJECT, ?id, type_name, "object registered");
        id
    }

    /// Remove an object's record, detaching it from its parent and
    /// orphaning its children.
    pub fn unregister(&self, id: ObjectId) {
        let mut records = self.records.write();
        let Some(record) = records.remove(id) else {
            return;
        };
        if let Some(parent) = record.parent {
            if let Some(parent_record) = records.get_mut(parent) {
                parent_record.children.retain(|&child| child != id);
            }
        }
        for child in record.children {
            if let Some(child_record) = records.get_mut(child) {
                child_record.parent = None;
            }
        }
        tracing::trace!(target: crate::logging::targets::OBJECT, ?id, "object unregistered");
    }

    /// Check whether an object is alive.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.records.read().contains_key(id)
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Get an object's type name.
    pub fn type_name(&self, id: ObjectId) -> ObjectResult<&'static str> {
        self.records
            .read()
            .get(id)
            .map(|record| record.type_name)
            .ok_or(ObjectError::UnknownObject)
    }

    /// Get an object's name.
    pub fn name(&self, id: ObjectId) -> ObjectResult<String> {
        self.records
            .read()
            .get(id)
            .map(|record| record.name.clone())
            .ok_or(ObjectError::UnknownObject)
    }

    /// Set an object's name.
    pub fn set_name(&self, id: ObjectId, name: impl Into<String>) -> ObjectResult<()> {
        let mut records = self.records.write();
        let record = records.get_mut(id).ok_or(ObjectError::UnknownObject)?;
        record.name = name.into();
        Ok(())
    }

    /// Get an object's parent.
    pub fn parent(&self, id: ObjectId) -> ObjectResult<Option<ObjectId>> {
        self.records
            .read()
            .get(id)
            .map(|record| record.parent)
            .ok_or(ObjectError::UnknownObject)
    }

    /// Set an object's parent, updating both child lists.
    ///
    /// Passing `None` detaches the object from its current parent.
    pub fn set_parent(&self, id: ObjectId, parent: Option<ObjectId>) -> ObjectResult<()> {
        let mut records = self.records.write();
        if !records.contains_key(id) {
            return Err(ObjectError::UnknownObject);
        }
        if let Some(new_parent) = parent {
            if !records.contains_key(new_parent) {
                return Err(ObjectError::UnknownObject);
            }
            // Walk up from the prospective parent looking for `id`.
            let mut cursor = Some(new_parent);
            while let Some(ancestor) = cursor {
                if ancestor == id {
                    return Err(ObjectError::ParentCycle);
                }
                cursor = records.get(ancestor).and_then(|record| record.parent);
            }
        }
        let old_parent = records
            .get(id)
            .and_then(|record| record.parent);
        if old_parent == parent {
            return Ok(());
        }
        if let Some(old) = old_parent {
            if let Some(old_record) = records.get_mut(old) {
                old_record.children.retain(|&child| child != id);
            }
        }
        if let Some(new_parent) = parent {
            if let Some(parent_record) = records.get_mut(new_parent) {
                parent_record.children.push(id);
            }
        }
        if let Some(record) = records.get_mut(id) {
            record.parent = parent;
        }
        Ok(())
    }

    /// Get the IDs of an object's children.
    pub fn children(&self, id: ObjectId) -> ObjectResult<Vec<ObjectId>> {
        self.records
            .read()
            .get(id)
            .map(|record| record.children.clone())
            .ok_or(ObjectError::UnknownObject)
    }

    /// Find a direct child by name.
    pub fn find_child_by_name(&self, id: ObjectId, name: &str) -> Option<ObjectId> {
        let records = self.records.read();
        let record = records.get(id)?;
        record
            .children
            .iter()
            .copied()
            .find(|&child| records.get(child).is_some_and(|r| r.name == name))
    }
}

static GLOBAL_REGISTRY: OnceLock<ObjectRegistry> = OnceLock::new();

/// Initialize the global object registry.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init_global_registry() {
    let _ = GLOBAL_REGISTRY.set(ObjectRegistry::new());
}

/// Get the global object registry.
///
/// Returns [`ObjectError::RegistryNotInitialized`] if
/// [`init_global_registry`] has not been called.
pub fn global_registry() -> ObjectResult<&'static ObjectRegistry> {
    GLOBAL_REGISTRY.get().ok_or(ObjectError::RegistryNotInitialized)
}

/// The common implementation embedded by every object.
///
/// Registers with the global registry on construction and unregisters on
/// drop.
pub struct ObjectBase {
    id: ObjectId,
}

impl ObjectBase {
    /// Create a new object base registered under the type `T`.
    ///
    /// # Panics
    ///
    /// Panics if the global object registry is not initialized.
    pub fn new<T: Object + 'static>() -> Self {
        let registry = global_registry()
            .unwrap_or_else(|err| panic!("{err}"));
        Self {
            id: registry.register(std::any::type_name::<T>()),
        }
    }

    /// Get the object's unique ID.
    #[inline]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Get the object's name.
    pub fn name(&self) -> String {
        global_registry()
            .and_then(|registry| registry.name(self.id))
            .unwrap_or_default()
    }

    /// Set the object's name.
    pub fn set_name(&self, name: impl Into<String>) {
        if let Ok(registry) = global_registry() {
            let _ = registry.set_name(self.id, name);
        }
    }

    /// Get the parent object's ID.
    pub fn parent(&self) -> Option<ObjectId> {
        global_registry()
            .and_then(|registry| registry.parent(self.id))
            .ok()
            .flatten()
    }

    /// Set the parent object.
    pub fn set_parent(&self, parent: Option<ObjectId>) -> ObjectResult<()> {
        global_registry()?.set_parent(self.id, parent)
    }

    /// Get the IDs of child objects.
    pub fn children(&self) -> Vec<ObjectId> {
        global_registry()
            .and_then(|registry| registry.children(self.id))
            .unwrap_or_default()
    }

    /// Find a direct child by name.
    pub fn find_child_by_name(&self, name: &str) -> Option<ObjectId> {
        global_registry()
            .ok()
            .and_then(|registry| registry.find_child_by_name(self.id, name))
    }
}

impl Object for ObjectBase {
    fn object_id(&self) -> ObjectId {
        self.id
    }
}

impl Drop for ObjectBase {
    fn drop(&mut self) {
        if let Ok(registry) = global_registry() {
            registry.unregister(self.id);
        }
    }
}

static_assertions::assert_impl_all!(ObjectBase: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy {
        base: ObjectBase,
    }

    impl Dummy {
        fn new() -> Self {
            Self {
                base: ObjectBase::new::<Self>(),
            }
        }
    }

    impl Object for Dummy {
        fn object_id(&self) -> ObjectId {
            self.base.id()
        }
    }

    fn setup() {
        init_global_registry();
    }

    #[test]
    fn test_register_and_drop() {
        setup();
        let registry = global_registry().unwrap();
        let id = {
            let object = Dummy::new();
            assert!(registry.contains(object.object_id()));
            object.object_id()
        };
        assert!(!registry.contains(id));
    }

    #[test]
    fn test_object_name() {
        setup();
        let object = Dummy::new();
        assert_eq!(object.base.name(), "");
        object.base.set_name("rating-editor");
        assert_eq!(object.base.name(), "rating-editor");
    }

    #[test]
    fn test_parent_child() {
        setup();
        let parent = Dummy::new();
        let child = Dummy::new();

        child.base.set_parent(Some(parent.object_id())).unwrap();
        assert_eq!(child.base.parent(), Some(parent.object_id()));
        assert_eq!(parent.base.children(), vec![child.object_id()]);

        child.base.set_parent(None).unwrap();
        assert!(parent.base.children().is_empty());
    }

    #[test]
    fn test_parent_cycle_rejected() {
        setup();
        let a = Dummy::new();
        let b = Dummy::new();

        b.base.set_parent(Some(a.object_id())).unwrap();
        let result = a.base.set_parent(Some(b.object_id()));
        assert_eq!(result, Err(ObjectError::ParentCycle));
    }

    #[test]
    fn test_find_child_by_name() {
        setup();
        let parent = Dummy::new();
        let child = Dummy::new();
        child.base.set_name("stars");
        child.base.set_parent(Some(parent.object_id())).unwrap();

        assert_eq!(
            parent.base.find_child_by_name("stars"),
            Some(child.object_id())
        );
        assert_eq!(parent.base.find_child_by_name("missing"), None);
    }

    #[test]
    fn test_dropped_child_leaves_parent_list() {
        setup();
        let parent = Dummy::new();
        {
            let child = Dummy::new();
            child.base.set_parent(Some(parent.object_id())).unwrap();
            assert_eq!(parent.base.children().len(), 1);
        }
        assert!(parent.base.children().is_empty());
    }
}
