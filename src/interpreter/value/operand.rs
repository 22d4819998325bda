use crate::interpreter::{
    symbols::{SlotId, SymbolTable},
    value::core::Value,
};

/// A token together with who owns it.
///
/// `Owned` values are transients: literals parsed from source and results of
/// expression evaluation. They are dropped when the line or expression that
/// produced them is done. `Slot` operands borrow a symbol-table slot and never
/// release it; the slot lives as long as the interpreter.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A transient value owned by the current line or expression.
    Owned(Value),
    /// A reference to a symbol-table slot.
    Slot(SlotId),
}

impl Operand {
    /// Resolves the operand to the value it denotes.
    #[must_use]
    pub fn resolve<'a>(&'a self, symbols: &'a SymbolTable) -> &'a Value {
        match self {
            Self::Owned(value) => value,
            Self::Slot(id) => symbols.get(*id),
        }
    }

    /// Consumes the operand, producing a standalone value.
    ///
    /// Slot operands are copied out of the table; the slot keeps its value.
    #[must_use]
    pub fn into_value(self, symbols: &SymbolTable) -> Value {
        match self {
            Self::Owned(value) => value,
            Self::Slot(id) => symbols.get(id).clone(),
        }
    }

    /// Returns the slot if the operand is a variable reference.
    #[must_use]
    pub const fn slot(&self) -> Option<SlotId> {
        match self {
            Self::Slot(id) => Some(*id),
            Self::Owned(_) => None,
        }
    }
}
