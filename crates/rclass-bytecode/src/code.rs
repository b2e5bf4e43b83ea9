//! Method bodies built from symbolic instructions.

use crate::constant_pool::ConstantPool;
use crate::constants::MAX_CODE_SIZE;
use crate::error::ClassFormatError;
use crate::insn::{ArrayType, Insn, MemberRef};

/// Builder for a method body.
///
/// Instructions are appended in order. Nothing is resolved until [`Code::encode`],
/// so a body can be sized and inspected before it is committed to a class.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Code {
    insns: Vec<Insn>,
}

/// Result of encoding a [`Code`] against a constant pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedCode {
    pub bytes: Vec<u8>,
    pub max_stack: u16,
    pub max_locals: u16,
}

impl Code {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, insn: Insn) -> &mut Self {
        self.insns.push(insn);
        self
    }

    pub fn aload(&mut self, slot: u16) -> &mut Self {
        self.push(Insn::ALoad(slot))
    }

    pub fn iload(&mut self, slot: u16) -> &mut Self {
        self.push(Insn::ILoad(slot))
    }

    pub fn istore(&mut self, slot: u16) -> &mut Self {
        self.push(Insn::IStore(slot))
    }

    pub fn push_int(&mut self, value: i32) -> &mut Self {
        self.push(Insn::PushInt(value))
    }

    pub fn iadd(&mut self) -> &mut Self {
        self.push(Insn::IAdd)
    }

    pub fn dup(&mut self) -> &mut Self {
        self.push(Insn::Dup)
    }

    pub fn new_int_array(&mut self) -> &mut Self {
        self.push(Insn::NewArray(ArrayType::Int))
    }

    pub fn iastore(&mut self) -> &mut Self {
        self.push(Insn::IAStore)
    }

    pub fn get_static(&mut self, member: MemberRef) -> &mut Self {
        self.push(Insn::GetStatic(member))
    }

    pub fn put_static(&mut self, member: MemberRef) -> &mut Self {
        self.push(Insn::PutStatic(member))
    }

    pub fn invoke_static(&mut self, member: MemberRef) -> &mut Self {
        self.push(Insn::InvokeStatic(member))
    }

    pub fn invoke_special(&mut self, member: MemberRef) -> &mut Self {
        self.push(Insn::InvokeSpecial(member))
    }

    pub fn return_void(&mut self) -> &mut Self {
        self.push(Insn::Return)
    }

    pub fn insns(&self) -> &[Insn] {
        &self.insns
    }

    pub fn is_empty(&self) -> bool {
        self.insns.is_empty()
    }

    /// Upper bound on the encoded length.
    pub fn max_size(&self) -> usize {
        self.insns.iter().map(Insn::max_size).sum()
    }

    /// Encode into bytes, interning operands into `pool`.
    ///
    /// `method` names the method in errors. `arg_slots` is the number of local
    /// slots taken by parameters (including `this`), the floor for `max_locals`.
    pub fn encode(
        &self,
        pool: &mut ConstantPool,
        method: &str,
        arg_slots: u16,
    ) -> Result<EncodedCode, ClassFormatError> {
        let mut bytes = Vec::with_capacity(self.max_size());
        let mut depth: u16 = 0;
        let mut max_stack: u16 = 0;
        let mut max_locals = arg_slots;

        for (index, insn) in self.insns.iter().enumerate() {
            let (pops, pushes) = insn.stack_effect()?;
            depth = depth
                .checked_sub(pops)
                .ok_or_else(|| ClassFormatError::StackUnderflow {
                    method: method.to_string(),
                    index,
                })?;
            depth += pushes;
            max_stack = max_stack.max(depth);

            if let Some(slot) = insn.local() {
                max_locals = max_locals.max(slot + 1);
            }

            insn.encode(pool, &mut bytes)?;
        }

        if bytes.len() > MAX_CODE_SIZE {
            return Err(ClassFormatError::CodeTooLarge {
                method: method.to_string(),
                size: bytes.len(),
            });
        }

        Ok(EncodedCode {
            bytes,
            max_stack,
            max_locals,
        })
    }
}
