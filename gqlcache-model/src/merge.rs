//! Additive shallow merge.
//!
//! Fields present in the incoming record overwrite; fields only present in
//! the stored record are carried over. Omission never deletes a field.

use crate::Entity;

/// Merges an incoming partial entity into the stored version, if any.
pub fn merge_entities(existing: Option<&Entity>, incoming: Entity) -> Entity {
    match existing {
        Some(existing) => {
            let mut merged = existing.clone();
            merged.absorb(incoming);
            merged
        }
        None => incoming,
    }
}

impl Entity {
    /// Merges `incoming` into `self` in place.
    /// Returns true if any field value changed or was added.
    pub fn absorb(&mut self, incoming: Entity) -> bool {
        let fields = self.fields_mut();
        let mut changed = false;
        for (name, value) in incoming {
            match fields.get(&name) {
                Some(current) if *current == value => {}
                _ => {
                    fields.insert(name, value);
                    changed = true;
                }
            }
        }
        changed
    }
}
