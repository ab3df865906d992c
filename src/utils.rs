//! Access map folding and operand shortcut helpers.

use crate::enums::*;
use crate::insn::DecodedInstruction;
use crate::operand::{Operand, OperandInfo};

/// Per-register-class access maps, folded from the operand list.
///
/// Each entry holds the [`OperandAccess`] bits accumulated for that
/// register; the scalar fields aggregate accesses to the corresponding
/// non-banked resources.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AccessMap {
    pub gpr: [OperandAccess; 16],
    pub seg: [OperandAccess; 8],
    pub fpu: [OperandAccess; 8],
    pub mmx: [OperandAccess; 8],
    pub sse: [OperandAccess; 32],
    pub cr: [OperandAccess; 16],
    pub dr: [OperandAccess; 16],
    pub tr: [OperandAccess; 8],
    pub bnd: [OperandAccess; 4],
    pub msk: [OperandAccess; 8],
    pub tile: [OperandAccess; 8],
    pub sys: [OperandAccess; 8],
    pub memory: OperandAccess,
    pub stack: OperandAccess,
    pub flags: OperandAccess,
    pub rip: OperandAccess,
    pub mxcsr: OperandAccess,
    pub pkru: OperandAccess,
    pub ssp: OperandAccess,
}

impl AccessMap {
    /// Folds the per-operand accesses of `insn` into a full map.
    pub fn from_instruction(insn: &DecodedInstruction) -> AccessMap {
        let mut map = AccessMap::default();

        for operand in insn.operands() {
            match &operand.info {
                OperandInfo::Mem(mem) => {
                    if mem.is_stack {
                        map.stack |= operand.access;
                        map.gpr[reg::RSP as usize] |= OperandAccess::RW;
                        map.seg[reg::SS as usize] |= OperandAccess::READ;
                    } else {
                        map.memory |= operand.access;

                        if mem.has_seg {
                            map.seg[mem.seg as usize & 7] |= OperandAccess::READ;
                        }

                        if mem.has_base {
                            map.gpr[mem.base as usize & 15] |= OperandAccess::READ;
                        }

                        if mem.has_index {
                            if mem.is_vsib {
                                map.sse[mem.index as usize & 31] |= OperandAccess::READ;
                            } else {
                                map.gpr[mem.index as usize & 15] |= OperandAccess::READ;
                            }
                        }
                    }
                }

                OperandInfo::Reg(r) => {
                    let base = r.id as usize;
                    let count = r.count.max(1) as usize;

                    match r.class {
                        RegisterClass::Gpr => {
                            for k in 0..count {
                                // AH..BH alias the low GPRs.
                                let index = if r.is_high8 { base - 4 + k } else { base + k };
                                map.gpr[index & 15] |= operand.access;
                            }
                        }
                        RegisterClass::Seg => map.seg[base & 7] |= operand.access,
                        RegisterClass::Fpu => map.fpu[base & 7] |= operand.access,
                        RegisterClass::Mmx => map.mmx[base & 7] |= operand.access,
                        RegisterClass::Sse => {
                            for k in 0..count {
                                map.sse[(base + k) & 31] |= operand.access;
                            }
                        }
                        RegisterClass::Cr => map.cr[base & 15] |= operand.access,
                        RegisterClass::Dr => map.dr[base & 15] |= operand.access,
                        RegisterClass::Tr => map.tr[base & 7] |= operand.access,
                        RegisterClass::Bnd => map.bnd[base & 3] |= operand.access,
                        RegisterClass::Msk => {
                            for k in 0..count {
                                map.msk[(base + k) & 7] |= operand.access;
                            }
                        }
                        RegisterClass::Tile => map.tile[base & 7] |= operand.access,
                        RegisterClass::Sys => map.sys[base & 7] |= operand.access,
                        RegisterClass::Flags => map.flags |= operand.access,
                        RegisterClass::Rip => map.rip |= operand.access,
                        RegisterClass::Mxcsr => map.mxcsr |= operand.access,
                        RegisterClass::Pkru => map.pkru |= operand.access,
                        RegisterClass::Ssp => map.ssp |= operand.access,
                        _ => {}
                    }
                }

                OperandInfo::Bank => {
                    // Save/restore style instructions touch a whole bank.
                    match insn.mnemonic {
                        Mnemonic::Fnsave => {
                            for slot in map.fpu.iter_mut() {
                                *slot |= OperandAccess::READ;
                            }
                        }
                        Mnemonic::Frstor => {
                            for slot in map.fpu.iter_mut() {
                                *slot |= OperandAccess::WRITE;
                            }
                        }
                        Mnemonic::Xsave | Mnemonic::Xsaveopt => {
                            for slot in map.sse.iter_mut() {
                                *slot |= OperandAccess::READ;
                            }
                        }
                        Mnemonic::Xrstor => {
                            for slot in map.sse.iter_mut() {
                                *slot |= OperandAccess::WRITE;
                            }
                        }
                        _ => {}
                    }
                }

                _ => {}
            }
        }

        map
    }
}

/// Shortcut pointers into the operand list: the common roles, resolved
/// once so callers do not have to rescan the operand array.
#[derive(Clone, Copy, Debug, Default)]
pub struct OperandLookup<'a> {
    /// First and second written operand.
    pub dst1: Option<&'a Operand>,
    pub dst2: Option<&'a Operand>,
    /// First four read operands.
    pub src1: Option<&'a Operand>,
    pub src2: Option<&'a Operand>,
    pub src3: Option<&'a Operand>,
    pub src4: Option<&'a Operand>,
    /// First two memory operands.
    pub mem1: Option<&'a Operand>,
    pub mem2: Option<&'a Operand>,
    pub stack: Option<&'a Operand>,
    pub flags: Option<&'a Operand>,
    pub rip: Option<&'a Operand>,
    pub cs: Option<&'a Operand>,
    pub ss: Option<&'a Operand>,
    /// rAX..rDI, when used as default operands.
    pub gpr: [Option<&'a Operand>; 8],
}

impl<'a> OperandLookup<'a> {
    /// Populates the lookup from a decoded instruction.
    pub fn from_instruction(insn: &'a DecodedInstruction) -> OperandLookup<'a> {
        let mut rlut = OperandLookup::default();

        for operand in insn.operands() {
            if operand.access.is_written() {
                if rlut.dst1.is_none() {
                    rlut.dst1 = Some(operand);
                } else if rlut.dst2.is_none() {
                    rlut.dst2 = Some(operand);
                }
            }

            if operand.access.is_read() {
                if rlut.src1.is_none() {
                    rlut.src1 = Some(operand);
                } else if rlut.src2.is_none() {
                    rlut.src2 = Some(operand);
                } else if rlut.src3.is_none() {
                    rlut.src3 = Some(operand);
                } else if rlut.src4.is_none() {
                    rlut.src4 = Some(operand);
                }
            }

            if let OperandInfo::Mem(mem) = &operand.info {
                if rlut.mem1.is_none() {
                    rlut.mem1 = Some(operand);
                } else if rlut.mem2.is_none() {
                    rlut.mem2 = Some(operand);
                }

                if mem.is_stack {
                    rlut.stack = Some(operand);
                }
            }

            if let OperandInfo::Reg(r) = &operand.info {
                if operand.flags.is_default {
                    match r.class {
                        RegisterClass::Flags => rlut.flags = Some(operand),
                        RegisterClass::Rip => rlut.rip = Some(operand),
                        RegisterClass::Seg if r.id == reg::CS as u32 => rlut.cs = Some(operand),
                        RegisterClass::Seg if r.id == reg::SS as u32 => rlut.ss = Some(operand),
                        RegisterClass::Gpr if r.id < 8 => {
                            rlut.gpr[r.id as usize] = Some(operand);
                        }
                        _ => {}
                    }
                }
            }
        }

        rlut
    }
}

impl DecodedInstruction {
    /// Folds the per-operand accesses into per-register-class maps.
    pub fn access_map(&self) -> AccessMap {
        AccessMap::from_instruction(self)
    }

    /// Resolves the common operand roles.
    pub fn operand_lookup(&self) -> OperandLookup<'_> {
        OperandLookup::from_instruction(self)
    }
}
