//! Type pool.
//!
//! Primitive types live at fixed `Idx` values and have no pool entry.
//! Classes, wildcards and type parameters are allocated from
//! `Idx::FIRST_DYNAMIC` upward.

use std::borrow::Cow;
use std::collections::VecDeque;

use ingr_ir::{CallExpr, Expr, Idx, Name, SigId, StringInterner};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{Signature, TypeError};

/// What a type handle refers to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeKind {
    Primitive,
    /// Class or interface, identified by its fully-qualified name.
    Class {
        supertypes: Vec<Idx>,
        /// Members declared directly on this class, in declaration order.
        members: Vec<SigId>,
    },
    /// `?` or `? extends bound`.
    Wildcard { bound: Option<Idx> },
    /// Generic type parameter such as `T extends bound`.
    TypeParam { bound: Option<Idx> },
}

static PRIMITIVE_KIND: TypeKind = TypeKind::Primitive;

#[derive(Clone, Debug)]
struct TypeEntry {
    /// Fully-qualified name for classes, parameter name for type parameters.
    name: Name,
    kind: TypeKind,
}

/// Pool of types and interned signatures.
#[derive(Clone, Debug, Default)]
pub struct TypePool {
    types: Vec<TypeEntry>,
    classes: FxHashMap<Name, Idx>,
    signatures: Vec<Signature>,
    signature_ids: FxHashMap<Signature, SigId>,
}

impl TypePool {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self, name: Name, kind: TypeKind) -> Idx {
        let raw = u32::try_from(self.types.len())
            .ok()
            .and_then(|len| len.checked_add(Idx::FIRST_DYNAMIC))
            .unwrap_or_else(|| panic!("type pool exceeded capacity"));
        self.types.push(TypeEntry { name, kind });
        Idx::from_raw(raw)
    }

    fn entry(&self, ty: Idx) -> Option<&TypeEntry> {
        let offset = ty.raw().checked_sub(Idx::FIRST_DYNAMIC)?;
        self.types.get(offset as usize)
    }

    fn entry_mut(&mut self, ty: Idx) -> Option<&mut TypeEntry> {
        let offset = ty.raw().checked_sub(Idx::FIRST_DYNAMIC)?;
        self.types.get_mut(offset as usize)
    }

    /// Declare a class by fully-qualified name (`java.lang.Object`).
    pub fn declare_class(
        &mut self,
        fqn: Name,
        interner: &StringInterner,
    ) -> Result<Idx, TypeError> {
        if self.classes.contains_key(&fqn) {
            return Err(TypeError::DuplicateType {
                name: interner.lookup(fqn).to_owned(),
            });
        }
        let idx = self.alloc(
            fqn,
            TypeKind::Class {
                supertypes: Vec::new(),
                members: Vec::new(),
            },
        );
        self.classes.insert(fqn, idx);
        Ok(idx)
    }

    /// Record `sup` as a direct supertype of `ty`.
    pub fn add_supertype(&mut self, ty: Idx, sup: Idx) -> Result<(), TypeError> {
        if !matches!(self.kind(sup)?, TypeKind::Class { .. }) {
            return Err(TypeError::NotAClass { ty: sup });
        }
        match self.entry_mut(ty).map(|entry| &mut entry.kind) {
            Some(TypeKind::Class { supertypes, .. }) => {
                if !supertypes.contains(&sup) {
                    supertypes.push(sup);
                }
                Ok(())
            }
            Some(_) => Err(TypeError::NotAClass { ty }),
            None if ty.is_primitive() => Err(TypeError::NotAClass { ty }),
            None => Err(TypeError::UnresolvedType { ty }),
        }
    }

    /// Intern a signature without attaching it to its declaring class.
    pub fn intern_signature(&mut self, sig: Signature) -> SigId {
        if let Some(&id) = self.signature_ids.get(&sig) {
            return id;
        }
        let raw = u32::try_from(self.signatures.len())
            .unwrap_or_else(|_| panic!("signature table exceeded capacity"));
        let id = SigId::from_raw(raw);
        self.signatures.push(sig.clone());
        self.signature_ids.insert(sig, id);
        id
    }

    /// Intern a signature and add it to its declaring class's members.
    pub fn declare_method(&mut self, sig: Signature) -> Result<SigId, TypeError> {
        let declaring = sig.declaring;
        if !matches!(self.kind(declaring)?, TypeKind::Class { .. }) {
            return Err(TypeError::NotAClass { ty: declaring });
        }
        let id = self.intern_signature(sig);
        if let Some(TypeKind::Class { members, .. }) =
            self.entry_mut(declaring).map(|entry| &mut entry.kind)
        {
            if !members.contains(&id) {
                members.push(id);
            }
        }
        Ok(id)
    }

    pub fn wildcard(&mut self, bound: Option<Idx>, interner: &StringInterner) -> Idx {
        self.alloc(interner.intern("?"), TypeKind::Wildcard { bound })
    }

    pub fn type_param(&mut self, name: Name, bound: Option<Idx>) -> Idx {
        self.alloc(name, TypeKind::TypeParam { bound })
    }

    pub fn lookup_class(&self, fqn: Name) -> Option<Idx> {
        self.classes.get(&fqn).copied()
    }

    pub fn kind(&self, ty: Idx) -> Result<&TypeKind, TypeError> {
        if ty.is_primitive() {
            return Ok(&PRIMITIVE_KIND);
        }
        self.entry(ty)
            .map(|entry| &entry.kind)
            .ok_or(TypeError::UnresolvedType { ty })
    }

    pub fn signature(&self, sig: SigId) -> Result<&Signature, TypeError> {
        self.signatures
            .get(sig.index())
            .ok_or(TypeError::UnknownSignature { sig })
    }

    /// Simple (unqualified) name of a type.
    ///
    /// Wildcards render as `?` or `? extends Bound`; callers treat any name
    /// containing `?` as having no canonical form.
    pub fn simple_name(
        &self,
        ty: Idx,
        interner: &StringInterner,
    ) -> Result<Cow<'static, str>, TypeError> {
        if let Some(name) = ty.name() {
            return Ok(Cow::Borrowed(name));
        }
        let entry = self.entry(ty).ok_or(TypeError::UnresolvedType { ty })?;
        match &entry.kind {
            TypeKind::Class { .. } => {
                let fqn = interner.lookup(entry.name);
                let simple = fqn.rsplit('.').next().unwrap_or(fqn);
                Ok(Cow::Borrowed(simple))
            }
            TypeKind::Wildcard { bound: None } => Ok(Cow::Borrowed("?")),
            TypeKind::Wildcard { bound: Some(bound) } => Ok(Cow::Owned(format!(
                "? extends {}",
                self.simple_name(*bound, interner)?
            ))),
            TypeKind::TypeParam { .. } => Ok(Cow::Borrowed(interner.lookup(entry.name))),
            TypeKind::Primitive => Err(TypeError::UnresolvedType { ty }),
        }
    }

    /// Class whose members a value of type `ty` exposes.
    ///
    /// Bounded wildcards and type parameters resolve through their bound.
    fn member_owner(&self, ty: Idx) -> Result<Idx, TypeError> {
        match self.kind(ty)? {
            TypeKind::Class { .. } => Ok(ty),
            TypeKind::Wildcard { bound: Some(bound) }
            | TypeKind::TypeParam { bound: Some(bound) } => self.member_owner(*bound),
            TypeKind::Primitive => Err(TypeError::NotAClass { ty }),
            TypeKind::Wildcard { bound: None } | TypeKind::TypeParam { bound: None } => {
                Err(TypeError::UnresolvedType { ty })
            }
        }
    }

    /// All members reachable from `ty`: declared members first, then the
    /// members of each supertype in breadth-first order. Each signature
    /// appears once; supertype cycles are tolerated.
    pub fn reachable_members(&self, ty: Idx) -> Result<Vec<SigId>, TypeError> {
        let owner = self.member_owner(ty)?;
        let mut visited = FxHashSet::default();
        let mut seen = FxHashSet::default();
        let mut members = Vec::new();
        let mut queue = VecDeque::from([owner]);

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            if let TypeKind::Class {
                supertypes,
                members: declared,
            } = self.kind(current)?
            {
                members.extend(declared.iter().copied().filter(|id| seen.insert(*id)));
                queue.extend(supertypes.iter().copied());
            }
        }

        tracing::trace!(?ty, count = members.len(), "reachable members");
        Ok(members)
    }

    /// Type a synthesized placeholder variable gets for a parameter of type `param`.
    ///
    /// Bounded wildcards and type parameters erase to their bound. Returns
    /// `None` when no placeholder can be constructed.
    pub fn placeholder_type(&self, param: Idx) -> Option<Idx> {
        if param == Idx::VOID || param == Idx::NULL {
            return None;
        }
        match self.kind(param).ok()? {
            TypeKind::Primitive | TypeKind::Class { .. } => Some(param),
            TypeKind::Wildcard { bound } | TypeKind::TypeParam { bound } => {
                bound.and_then(|bound| self.placeholder_type(bound))
            }
        }
    }

    /// Static type of an expression.
    pub fn type_of(&self, expr: &Expr) -> Result<Idx, TypeError> {
        match expr {
            Expr::Literal(lit) => Ok(lit.ty),
            Expr::Var(var) => Ok(var.ty),
            Expr::Field(field) => Ok(field.ty),
            Expr::Call(call) => Ok(self.signature(call.sig)?.ret),
            Expr::Not(_) => Ok(Idx::BOOLEAN),
        }
    }

    /// Build a call to `sig`.
    ///
    /// # Panics
    /// Panics if `args.len()` differs from the signature's parameter count.
    pub fn build_call(
        &self,
        receiver: Option<Expr>,
        sig: SigId,
        args: Vec<Expr>,
    ) -> Result<CallExpr, TypeError> {
        let signature = self.signature(sig)?;
        assert_eq!(
            args.len(),
            signature.arity(),
            "argument count must match parameter count of {sig:?}"
        );
        Ok(CallExpr {
            receiver: receiver.map(Box::new),
            sig,
            type_args: Vec::new(),
            args,
        })
    }
}

#[cfg(test)]
mod tests;
