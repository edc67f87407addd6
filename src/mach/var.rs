use super::val::{FilterKind, Val};
use crate::error;
use crate::lang::token::{Class, Type};
use crate::lang::{Error, TokenCode, TokenTable};

type Result<T> = std::result::Result<T, Error>;

/// A typed variable slot.
#[derive(Debug, Clone)]
pub struct Slot {
    pub ty: Type,
    pub val: Val,
}

impl Slot {
    fn void() -> Slot {
        Slot {
            ty: Type::Void,
            val: Val::None,
        }
    }

    /// Numeric reading of the slot, if it has one.
    pub fn number(&self) -> Option<f64> {
        match (self.ty, &self.val) {
            (Type::Const, Val::Number(n)) | (Type::Float, Val::Number(n)) => Some(*n),
            _ => None,
        }
    }
}

/// ## Variable memory
///
/// One slot per token code, kept in lock step with the token table.
/// Slots for literals are filled from the token when they appear.

#[derive(Debug, Default)]
pub struct Var {
    slots: Vec<Slot>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    /// Create slots for every token interned since the last call.
    pub fn sync(&mut self, tokens: &TokenTable) {
        for (code, token) in tokens.iter().skip(self.slots.len()) {
            debug_assert_eq!(code.index(), self.slots.len());
            let slot = match token.declared_type() {
                Type::Const => Slot {
                    ty: Type::Const,
                    val: Val::Number(token.value()),
                },
                Type::String => {
                    let text = token.text().trim_matches('"');
                    Slot {
                        ty: Type::String,
                        val: Val::Text(text.into()),
                    }
                }
                Type::Filter => match FilterKind::from_index(token.value()) {
                    Some(kind) => Slot {
                        ty: Type::Filter,
                        val: Val::Filter(kind),
                    },
                    None => Slot::void(),
                },
                _ => Slot::void(),
            };
            self.slots.push(slot);
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, code: TokenCode) -> Result<&Slot> {
        match self.slots.get(code.index()) {
            Some(slot) => Ok(slot),
            None => Err(error!(InternalError; "NO SUCH VARIABLE")),
        }
    }

    fn slot_mut(&mut self, code: TokenCode) -> Result<&mut Slot> {
        match self.slots.get_mut(code.index()) {
            Some(slot) => Ok(slot),
            None => Err(error!(InternalError; "NO SUCH VARIABLE")),
        }
    }

    pub fn fetch_number(&self, code: TokenCode) -> Result<f64> {
        let slot = self.slot(code)?;
        match slot.number() {
            Some(n) => Ok(n),
            None if slot.ty == Type::Void => Err(error!(ArgumentTypeError; "UNDEFINED VARIABLE")),
            None => Err(error!(ArgumentTypeError; format!("EXPECTED NUMBER, FOUND {}", slot.ty))),
        }
    }

    /// A slot keeps the type of its first assignment.
    pub fn store_number(&mut self, code: TokenCode, n: f64) -> Result<()> {
        let slot = self.slot_mut(code)?;
        match slot.ty {
            Type::Void | Type::Float => {
                slot.ty = Type::Float;
                slot.val = Val::Number(n);
                Ok(())
            }
            ty => Err(error!(ArgumentTypeError; format!("CANNOT ASSIGN NUMBER TO {}", ty))),
        }
    }

    /// Copy a whole slot. Sounds are shared, not duplicated.
    pub fn store_slot(&mut self, code: TokenCode, src: Slot) -> Result<()> {
        let slot = self.slot_mut(code)?;
        let ty = match (slot.ty, src.ty) {
            (_, Type::Void) => return Err(error!(ArgumentTypeError; "UNDEFINED VARIABLE")),
            (Type::Void, Type::Const) | (Type::Float, Type::Const) => Type::Float,
            (Type::Void, ty) => ty,
            (dst, src) if dst == src => dst,
            (dst, src) => {
                return Err(error!(ArgumentTypeError; format!("CANNOT ASSIGN {} TO {}", src, dst)))
            }
        };
        slot.ty = ty;
        slot.val = src.val;
        Ok(())
    }

    /// Declarations replace type and value together.
    pub fn define(&mut self, code: TokenCode, ty: Type, val: Val) -> Result<()> {
        let slot = self.slot_mut(code)?;
        *slot = Slot { ty, val };
        Ok(())
    }

    /// User-visible identifiers in token order, skipping internal slots.
    pub fn user_vars<'a>(
        &'a self,
        tokens: &'a TokenTable,
    ) -> impl Iterator<Item = (&'a str, &'a Slot)> + 'a {
        tokens
            .iter()
            .filter(|(code, token)| {
                !code.is_builtin() && token.class() == Class::Ident && !token.text().starts_with('$')
            })
            .filter_map(move |(code, token)| {
                self.slots.get(code.index()).map(|slot| (token.text(), slot))
            })
    }
}
