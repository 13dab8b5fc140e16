//! Command objects
//!
//! A [`CmdObject`] carries one parameter value between the parser, the
//! dispatch layer and the printer. Group requests chain several objects
//! together; the chain lives in a fixed-capacity [`CmdPool`] and links by
//! slot index, with slot 0 as the root.

use crate::error::{ConfigError, Result};
use crate::registry::{self, Index};
use heapless::{String, Vec};

/// Maximum number of objects in one chain (root included)
pub const CMD_MAX_OBJECTS: usize = 24;

/// Token capacity
pub const TOKEN_LEN: usize = 4;

/// Friendly name capacity
pub const NAME_LEN: usize = 24;

/// String payload capacity
pub const CMD_STRING_LEN: usize = 80;

/// Type of the value a command object carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// No value; a query
    Null,
    /// Group node; children follow in the chain
    Parent,
    Bool,
    Int32,
    Float,
    String,
}

/// One value in flight
#[derive(Debug, Clone)]
pub struct CmdObject {
    /// Registry index; `None` until resolved
    pub index: Option<Index>,
    pub token: String<TOKEN_LEN>,
    pub name: String<NAME_LEN>,
    pub value: f32,
    pub value_type: ValueType,
    pub string: String<CMD_STRING_LEN>,
    pub status: Result<()>,
    /// Next slot in the chain
    pub next: Option<usize>,
}

impl CmdObject {
    /// A fresh object carrying a null value
    pub fn new() -> Self {
        Self {
            index: None,
            token: String::new(),
            name: String::new(),
            value: 0.0,
            value_type: ValueType::Null,
            string: String::new(),
            status: Ok(()),
            next: None,
        }
    }

    /// Object bound to an index, with token and name filled in from the registry
    pub fn for_index(index: Index) -> Result<Self> {
        let descriptor = registry::descriptor(index).ok_or(ConfigError::UnrecognizedCommand)?;
        let mut cmd = Self::new();
        cmd.index = Some(index);
        cmd.set_token(descriptor.token);
        cmd.set_name(descriptor.name);
        Ok(cmd)
    }

    /// Reset to a null value, keeping no link
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Set the token, truncating to capacity
    pub fn set_token(&mut self, token: &str) {
        self.token.clear();
        push_truncated(&mut self.token, token);
    }

    /// Set the name, truncating to capacity
    pub fn set_name(&mut self, name: &str) {
        self.name.clear();
        push_truncated(&mut self.name, name);
    }

    /// Set a string payload, truncating to capacity
    pub fn set_string(&mut self, text: &str) {
        self.string.clear();
        push_truncated(&mut self.string, text);
        self.value_type = ValueType::String;
    }

    pub fn set_float(&mut self, value: f32) {
        self.value = value;
        self.value_type = ValueType::Float;
    }

    pub fn set_int(&mut self, value: f32) {
        self.value = value;
        self.value_type = ValueType::Int32;
    }

    /// Whether this object carries a value to apply
    pub fn has_value(&self) -> bool {
        !matches!(self.value_type, ValueType::Null | ValueType::Parent)
    }
}

impl Default for CmdObject {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn push_truncated<const N: usize>(dst: &mut String<N>, src: &str) {
    for c in src.chars() {
        if dst.push(c).is_err() {
            break;
        }
    }
}

/// Fixed-capacity pool holding one command chain
#[derive(Debug)]
pub struct CmdPool {
    objects: Vec<CmdObject, CMD_MAX_OBJECTS>,
}

impl CmdPool {
    /// Pool holding a single null root
    pub fn new() -> Self {
        let mut pool = Self {
            objects: Vec::new(),
        };
        pool.reset();
        pool
    }

    /// Discard the chain and start over with a null root
    pub fn reset(&mut self) {
        self.objects.clear();
        let _ = self.objects.push(CmdObject::new());
    }

    /// Reset and bind the root to an index
    pub fn reset_to(&mut self, index: Index) -> Result<&mut CmdObject> {
        let root = CmdObject::for_index(index)?;
        self.reset();
        self.objects[0] = root;
        Ok(&mut self.objects[0])
    }

    pub fn root(&self) -> &CmdObject {
        &self.objects[0]
    }

    pub fn root_mut(&mut self) -> &mut CmdObject {
        &mut self.objects[0]
    }

    pub fn get(&self, slot: usize) -> Option<&CmdObject> {
        self.objects.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut CmdObject> {
        self.objects.get_mut(slot)
    }

    /// Number of objects in use, root included
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Append an object to the end of the chain and return its slot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PoolExhausted`] if every slot is in use.
    pub fn append(&mut self, mut cmd: CmdObject) -> Result<usize> {
        let slot = self.objects.len();
        cmd.next = None;
        self.objects
            .push(cmd)
            .map_err(|_| ConfigError::PoolExhausted)?;
        // chain order is allocation order, so the tail is the previous slot
        if let Some(prev) = slot.checked_sub(1) {
            self.objects[prev].next = Some(slot);
        }
        Ok(slot)
    }

    /// Slots of the root's children, in chain order
    pub fn children(&self) -> Children<'_> {
        Children {
            pool: self,
            next: self.objects[0].next,
        }
    }
}

impl Default for CmdPool {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over chain slots following the root
pub struct Children<'a> {
    pool: &'a CmdPool,
    next: Option<usize>,
}

impl Iterator for Children<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let slot = self.next?;
        self.next = self.pool.objects.get(slot).and_then(|c| c.next);
        Some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::index_of;

    #[test]
    fn test_for_index_fills_token_and_name() {
        let cmd = CmdObject::for_index(index_of("xfr")).unwrap();
        assert_eq!(cmd.token.as_str(), "xfr");
        assert_eq!(cmd.name.as_str(), "x_feedrate_maximum");
        assert_eq!(cmd.value_type, ValueType::Null);
    }

    #[test]
    fn test_for_index_out_of_range() {
        assert_eq!(
            CmdObject::for_index(registry::REGISTRY_LEN).err(),
            Some(ConfigError::UnrecognizedCommand)
        );
    }

    #[test]
    fn test_append_links_chain() {
        let mut pool = CmdPool::new();
        let a = pool.append(CmdObject::new()).unwrap();
        let b = pool.append(CmdObject::new()).unwrap();
        assert_eq!(pool.root().next, Some(a));
        assert_eq!(pool.get(a).unwrap().next, Some(b));
        let slots: Vec<usize, 4> = pool.children().collect();
        assert_eq!(slots.as_slice(), &[a, b]);
    }

    #[test]
    fn test_pool_exhaustion() {
        let mut pool = CmdPool::new();
        for _ in 1..CMD_MAX_OBJECTS {
            pool.append(CmdObject::new()).unwrap();
        }
        assert_eq!(
            pool.append(CmdObject::new()),
            Err(ConfigError::PoolExhausted)
        );
        assert_eq!(pool.len(), CMD_MAX_OBJECTS);
    }

    #[test]
    fn test_reset_drops_chain() {
        let mut pool = CmdPool::new();
        pool.append(CmdObject::new()).unwrap();
        pool.reset();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.children().count(), 0);
    }

    #[test]
    fn test_token_truncates() {
        let mut cmd = CmdObject::new();
        cmd.set_token("xabsolute");
        assert_eq!(cmd.token.as_str(), "xabs");
    }
}
