//! Controlled/uncontrolled ownership of a key-set axis

use crate::domain::value_objects::KeySet;

/// One of the view's key sets, owned either by the view or by its caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateAxis {
    /// The view owns the set and writes every change into it
    Owned(KeySet),
    /// The caller owns the set; the view only reads it and reports changes
    External(KeySet),
}

impl StateAxis {
    /// Resolve ownership once: a supplied value (even empty) means controlled
    pub fn resolve(controlled: Option<KeySet>, default: KeySet) -> Self {
        match controlled {
            Some(keys) => StateAxis::External(keys),
            None => StateAxis::Owned(default),
        }
    }

    pub fn current(&self) -> &KeySet {
        match self {
            StateAxis::Owned(keys) | StateAxis::External(keys) => keys,
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, StateAxis::External(_))
    }

    /// Store `next` if the view owns this axis. Returns whether it was stored.
    pub fn commit(&mut self, next: KeySet) -> bool {
        match self {
            StateAxis::Owned(keys) => {
                *keys = next;
                true
            }
            StateAxis::External(_) => false,
        }
    }

    /// Feed back a value from the caller, making the axis controlled
    pub fn sync(&mut self, keys: KeySet) {
        *self = StateAxis::External(keys);
    }
}
