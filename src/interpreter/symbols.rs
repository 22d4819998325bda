use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{UNDEFINED_DISPLAY, Value},
    },
};

/// Default number of slots in a symbol table.
pub const DEFAULT_SYMBOL_CAPACITY: usize = 100;

/// Handle to a symbol-table slot.
///
/// Handles are only produced by the table that owns the slot and stay valid
/// for the table's whole life, since slots are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(usize);

impl SlotId {
    /// Position of the slot in creation order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Slot {
    name:  String,
    value: Value,
}

/// Fixed-capacity table of named slots.
///
/// Looking a name up creates its slot on first use, so there is no separate
/// declaration step. Every identifier in the program, every native and every
/// `argN` binding occupies one slot until the interpreter is dropped.
#[derive(Debug)]
pub struct SymbolTable {
    slots:    Vec<Slot>,
    index:    HashMap<String, SlotId>,
    capacity: usize,
}

impl SymbolTable {
    /// Creates an empty table holding at most `capacity` slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { slots: Vec::new(),
               index: HashMap::new(),
               capacity }
    }

    /// Returns the slot called `name`, creating it if it does not exist.
    ///
    /// A new slot holds an undefined value.
    ///
    /// # Errors
    /// `SymbolTableFull` when the name is new and every slot is taken.
    ///
    /// # Example
    /// ```
    /// use linterp::interpreter::{symbols::SymbolTable, value::core::Kind};
    ///
    /// let mut table = SymbolTable::new(1);
    /// let x = table.get_or_create("x", 1).unwrap();
    ///
    /// assert_eq!(table.get_or_create("x", 1).unwrap(), x);
    /// assert_eq!(table.get(x).kind(), Kind::Undefined);
    /// assert!(table.get_or_create("y", 1).is_err());
    /// ```
    pub fn get_or_create(&mut self, name: &str, line: usize) -> EvalResult<SlotId> {
        if let Some(id) = self.index.get(name) {
            return Ok(*id);
        }
        if self.slots.len() >= self.capacity {
            return Err(RuntimeError::SymbolTableFull { capacity: self.capacity,
                                                       line });
        }

        let id = SlotId(self.slots.len());
        self.slots.push(Slot { name:  name.to_string(),
                               value: Value::undefined(), });
        self.index.insert(name.to_string(), id);
        Ok(id)
    }

    /// Returns the slot called `name` without creating it.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<SlotId> {
        self.index.get(name).copied()
    }

    /// Returns the value stored in a slot.
    #[must_use]
    pub fn get(&self, id: SlotId) -> &Value {
        &self.slots[id.0].value
    }

    /// Returns a mutable reference to the value stored in a slot.
    pub fn get_mut(&mut self, id: SlotId) -> &mut Value {
        &mut self.slots[id.0].value
    }

    /// Replaces the value stored in a slot.
    pub fn set(&mut self, id: SlotId, value: Value) {
        self.slots[id.0].value = value;
    }

    /// Returns the name of a slot, or `(undefined)` for a handle this table
    /// did not issue.
    #[must_use]
    pub fn name_of(&self, id: SlotId) -> &str {
        self.slots.get(id.0).map_or(UNDEFINED_DISPLAY, |slot| &slot.name)
    }

    /// Number of slots in use.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slot has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Maximum number of slots.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
