//! The legacy encoding tables: the one byte map, 0F, 0F38, 0F3A and the
//! 3DNow! map.

use super::{
    cc, insn, op, FlagOps, Insn, Link, Node, OpFlags, OpKind as K, OpSize as S, OpSpec,
};
use crate::enums::{
    Category as C, CpuFlags, CpuidFeature as CF, ExceptionClass as XC, ExceptionType as XT,
    FpuFlags, InsnAttributes as A, IsaSet as IS, Mnemonic as M, OperandAccess,
    ValidPrefixes as VP,
};

const R: OperandAccess = OperandAccess::READ;
const W: OperandAccess = OperandAccess::WRITE;
const RW: OperandAccess = OperandAccess::RW;
const CW: OperandAccess = OperandAccess::CW;
const RCW: OperandAccess = OperandAccess::RCW;
const NA: OperandAccess = OperandAccess::empty();

/// LOCK plus the HLE pair; the usual set of the read-modify-write ALU ops.
const LOCKABLE: VP = VP::LOCK.union(VP::XACQUIRE).union(VP::XRELEASE);

const OPDEF: OpFlags = OpFlags::OPDEF;
const SEXD: OpFlags = OpFlags::SEX_DWS;

/// Implicit FLAGS operands.
const FL_W: OpSpec = op(K::F, S::V, W).flg(OPDEF);
const FL_RW: OpSpec = op(K::F, S::V, RW).flg(OPDEF);
const FL_R: OpSpec = op(K::F, S::V, R).flg(OPDEF);

// ---------------------------------------------------------------------------
// ALU families (00..3D): ADD, OR, ADC, SBB, AND, SUB, XOR, CMP.
// ---------------------------------------------------------------------------

const OPS_EB_GB: &[OpSpec] = &[op(K::E, S::B, RW), op(K::G, S::B, R), FL_W];
const OPS_EV_GV: &[OpSpec] = &[op(K::E, S::V, RW), op(K::G, S::V, R), FL_W];
const OPS_GB_EB: &[OpSpec] = &[op(K::G, S::B, RW), op(K::E, S::B, R), FL_W];
const OPS_GV_EV: &[OpSpec] = &[op(K::G, S::V, RW), op(K::E, S::V, R), FL_W];
const OPS_AL_IB: &[OpSpec] = &[op(K::GprRax, S::B, RW).flg(OPDEF), op(K::I, S::B, R), FL_W];
const OPS_RAX_IZ: &[OpSpec] = &[
    op(K::GprRax, S::V, RW).flg(OPDEF),
    op(K::I, S::Z, R).flg(SEXD),
    FL_W,
];

const OPS_EB_GB_C: &[OpSpec] = &[op(K::E, S::B, RW), op(K::G, S::B, R), FL_RW];
const OPS_EV_GV_C: &[OpSpec] = &[op(K::E, S::V, RW), op(K::G, S::V, R), FL_RW];
const OPS_GB_EB_C: &[OpSpec] = &[op(K::G, S::B, RW), op(K::E, S::B, R), FL_RW];
const OPS_GV_EV_C: &[OpSpec] = &[op(K::G, S::V, RW), op(K::E, S::V, R), FL_RW];
const OPS_AL_IB_C: &[OpSpec] = &[op(K::GprRax, S::B, RW).flg(OPDEF), op(K::I, S::B, R), FL_RW];
const OPS_RAX_IZ_C: &[OpSpec] = &[
    op(K::GprRax, S::V, RW).flg(OPDEF),
    op(K::I, S::Z, R).flg(SEXD),
    FL_RW,
];

const OPS_EB_GB_CMP: &[OpSpec] = &[op(K::E, S::B, R), op(K::G, S::B, R), FL_W];
const OPS_EV_GV_CMP: &[OpSpec] = &[op(K::E, S::V, R), op(K::G, S::V, R), FL_W];
const OPS_GB_EB_CMP: &[OpSpec] = &[op(K::G, S::B, R), op(K::E, S::B, R), FL_W];
const OPS_GV_EV_CMP: &[OpSpec] = &[op(K::G, S::V, R), op(K::E, S::V, R), FL_W];
const OPS_AL_IB_CMP: &[OpSpec] = &[op(K::GprRax, S::B, R).flg(OPDEF), op(K::I, S::B, R), FL_W];
const OPS_RAX_IZ_CMP: &[OpSpec] = &[
    op(K::GprRax, S::V, R).flg(OPDEF),
    op(K::I, S::Z, R).flg(SEXD),
    FL_W,
];

const fn alu_rm(m: M, ops: &'static [OpSpec], fl: FlagOps, pfxs: VP) -> Insn {
    insn(m, C::Arith, IS::I86, CF::None, 2, ops)
        .attrs(A::MODRM)
        .prefixes(pfxs)
        .flags(fl)
}

const fn alu_ax(m: M, ops: &'static [OpSpec], fl: FlagOps) -> Insn {
    insn(m, C::Arith, IS::I86, CF::None, 2, ops).flags(fl)
}

const I_ADD_EB_GB: Insn = alu_rm(M::Add, OPS_EB_GB, FlagOps::ARITH, LOCKABLE);
const I_ADD_EV_GV: Insn = alu_rm(M::Add, OPS_EV_GV, FlagOps::ARITH, LOCKABLE);
const I_ADD_GB_EB: Insn = alu_rm(M::Add, OPS_GB_EB, FlagOps::ARITH, VP::empty());
const I_ADD_GV_EV: Insn = alu_rm(M::Add, OPS_GV_EV, FlagOps::ARITH, VP::empty());
const I_ADD_AL_IB: Insn = alu_ax(M::Add, OPS_AL_IB, FlagOps::ARITH);
const I_ADD_RAX_IZ: Insn = alu_ax(M::Add, OPS_RAX_IZ, FlagOps::ARITH);
static N_ADD_EB_GB: Node = Node::Leaf(&I_ADD_EB_GB);
static N_ADD_EV_GV: Node = Node::Leaf(&I_ADD_EV_GV);
static N_ADD_GB_EB: Node = Node::Leaf(&I_ADD_GB_EB);
static N_ADD_GV_EV: Node = Node::Leaf(&I_ADD_GV_EV);
static N_ADD_AL_IB: Node = Node::Leaf(&I_ADD_AL_IB);
static N_ADD_RAX_IZ: Node = Node::Leaf(&I_ADD_RAX_IZ);

const I_OR_EB_GB: Insn = alu_rm(M::Or, OPS_EB_GB, FlagOps::LOGIC, LOCKABLE);
const I_OR_EV_GV: Insn = alu_rm(M::Or, OPS_EV_GV, FlagOps::LOGIC, LOCKABLE);
const I_OR_GB_EB: Insn = alu_rm(M::Or, OPS_GB_EB, FlagOps::LOGIC, VP::empty());
const I_OR_GV_EV: Insn = alu_rm(M::Or, OPS_GV_EV, FlagOps::LOGIC, VP::empty());
const I_OR_AL_IB: Insn = alu_ax(M::Or, OPS_AL_IB, FlagOps::LOGIC);
const I_OR_RAX_IZ: Insn = alu_ax(M::Or, OPS_RAX_IZ, FlagOps::LOGIC);
static N_OR_EB_GB: Node = Node::Leaf(&I_OR_EB_GB);
static N_OR_EV_GV: Node = Node::Leaf(&I_OR_EV_GV);
static N_OR_GB_EB: Node = Node::Leaf(&I_OR_GB_EB);
static N_OR_GV_EV: Node = Node::Leaf(&I_OR_GV_EV);
static N_OR_AL_IB: Node = Node::Leaf(&I_OR_AL_IB);
static N_OR_RAX_IZ: Node = Node::Leaf(&I_OR_RAX_IZ);

const I_ADC_EB_GB: Insn = alu_rm(M::Adc, OPS_EB_GB_C, FlagOps::ARITH_C, LOCKABLE);
const I_ADC_EV_GV: Insn = alu_rm(M::Adc, OPS_EV_GV_C, FlagOps::ARITH_C, LOCKABLE);
const I_ADC_GB_EB: Insn = alu_rm(M::Adc, OPS_GB_EB_C, FlagOps::ARITH_C, VP::empty());
const I_ADC_GV_EV: Insn = alu_rm(M::Adc, OPS_GV_EV_C, FlagOps::ARITH_C, VP::empty());
const I_ADC_AL_IB: Insn = alu_ax(M::Adc, OPS_AL_IB_C, FlagOps::ARITH_C);
const I_ADC_RAX_IZ: Insn = alu_ax(M::Adc, OPS_RAX_IZ_C, FlagOps::ARITH_C);
static N_ADC_EB_GB: Node = Node::Leaf(&I_ADC_EB_GB);
static N_ADC_EV_GV: Node = Node::Leaf(&I_ADC_EV_GV);
static N_ADC_GB_EB: Node = Node::Leaf(&I_ADC_GB_EB);
static N_ADC_GV_EV: Node = Node::Leaf(&I_ADC_GV_EV);
static N_ADC_AL_IB: Node = Node::Leaf(&I_ADC_AL_IB);
static N_ADC_RAX_IZ: Node = Node::Leaf(&I_ADC_RAX_IZ);

const I_SBB_EB_GB: Insn = alu_rm(M::Sbb, OPS_EB_GB_C, FlagOps::ARITH_C, LOCKABLE);
const I_SBB_EV_GV: Insn = alu_rm(M::Sbb, OPS_EV_GV_C, FlagOps::ARITH_C, LOCKABLE);
const I_SBB_GB_EB: Insn = alu_rm(M::Sbb, OPS_GB_EB_C, FlagOps::ARITH_C, VP::empty());
const I_SBB_GV_EV: Insn = alu_rm(M::Sbb, OPS_GV_EV_C, FlagOps::ARITH_C, VP::empty());
const I_SBB_AL_IB: Insn = alu_ax(M::Sbb, OPS_AL_IB_C, FlagOps::ARITH_C);
const I_SBB_RAX_IZ: Insn = alu_ax(M::Sbb, OPS_RAX_IZ_C, FlagOps::ARITH_C);
static N_SBB_EB_GB: Node = Node::Leaf(&I_SBB_EB_GB);
static N_SBB_EV_GV: Node = Node::Leaf(&I_SBB_EV_GV);
static N_SBB_GB_EB: Node = Node::Leaf(&I_SBB_GB_EB);
static N_SBB_GV_EV: Node = Node::Leaf(&I_SBB_GV_EV);
static N_SBB_AL_IB: Node = Node::Leaf(&I_SBB_AL_IB);
static N_SBB_RAX_IZ: Node = Node::Leaf(&I_SBB_RAX_IZ);

const I_AND_EB_GB: Insn = alu_rm(M::And, OPS_EB_GB, FlagOps::LOGIC, LOCKABLE);
const I_AND_EV_GV: Insn = alu_rm(M::And, OPS_EV_GV, FlagOps::LOGIC, LOCKABLE);
const I_AND_GB_EB: Insn = alu_rm(M::And, OPS_GB_EB, FlagOps::LOGIC, VP::empty());
const I_AND_GV_EV: Insn = alu_rm(M::And, OPS_GV_EV, FlagOps::LOGIC, VP::empty());
const I_AND_AL_IB: Insn = alu_ax(M::And, OPS_AL_IB, FlagOps::LOGIC);
const I_AND_RAX_IZ: Insn = alu_ax(M::And, OPS_RAX_IZ, FlagOps::LOGIC);
static N_AND_EB_GB: Node = Node::Leaf(&I_AND_EB_GB);
static N_AND_EV_GV: Node = Node::Leaf(&I_AND_EV_GV);
static N_AND_GB_EB: Node = Node::Leaf(&I_AND_GB_EB);
static N_AND_GV_EV: Node = Node::Leaf(&I_AND_GV_EV);
static N_AND_AL_IB: Node = Node::Leaf(&I_AND_AL_IB);
static N_AND_RAX_IZ: Node = Node::Leaf(&I_AND_RAX_IZ);

const I_SUB_EB_GB: Insn = alu_rm(M::Sub, OPS_EB_GB, FlagOps::ARITH, LOCKABLE);
const I_SUB_EV_GV: Insn = alu_rm(M::Sub, OPS_EV_GV, FlagOps::ARITH, LOCKABLE);
const I_SUB_GB_EB: Insn = alu_rm(M::Sub, OPS_GB_EB, FlagOps::ARITH, VP::empty());
const I_SUB_GV_EV: Insn = alu_rm(M::Sub, OPS_GV_EV, FlagOps::ARITH, VP::empty());
const I_SUB_AL_IB: Insn = alu_ax(M::Sub, OPS_AL_IB, FlagOps::ARITH);
const I_SUB_RAX_IZ: Insn = alu_ax(M::Sub, OPS_RAX_IZ, FlagOps::ARITH);
static N_SUB_EB_GB: Node = Node::Leaf(&I_SUB_EB_GB);
static N_SUB_EV_GV: Node = Node::Leaf(&I_SUB_EV_GV);
static N_SUB_GB_EB: Node = Node::Leaf(&I_SUB_GB_EB);
static N_SUB_GV_EV: Node = Node::Leaf(&I_SUB_GV_EV);
static N_SUB_AL_IB: Node = Node::Leaf(&I_SUB_AL_IB);
static N_SUB_RAX_IZ: Node = Node::Leaf(&I_SUB_RAX_IZ);

const I_XOR_EB_GB: Insn = alu_rm(M::Xor, OPS_EB_GB, FlagOps::LOGIC, LOCKABLE);
const I_XOR_EV_GV: Insn = alu_rm(M::Xor, OPS_EV_GV, FlagOps::LOGIC, LOCKABLE);
const I_XOR_GB_EB: Insn = alu_rm(M::Xor, OPS_GB_EB, FlagOps::LOGIC, VP::empty());
const I_XOR_GV_EV: Insn = alu_rm(M::Xor, OPS_GV_EV, FlagOps::LOGIC, VP::empty());
const I_XOR_AL_IB: Insn = alu_ax(M::Xor, OPS_AL_IB, FlagOps::LOGIC);
const I_XOR_RAX_IZ: Insn = alu_ax(M::Xor, OPS_RAX_IZ, FlagOps::LOGIC);
static N_XOR_EB_GB: Node = Node::Leaf(&I_XOR_EB_GB);
static N_XOR_EV_GV: Node = Node::Leaf(&I_XOR_EV_GV);
static N_XOR_GB_EB: Node = Node::Leaf(&I_XOR_GB_EB);
static N_XOR_GV_EV: Node = Node::Leaf(&I_XOR_GV_EV);
static N_XOR_AL_IB: Node = Node::Leaf(&I_XOR_AL_IB);
static N_XOR_RAX_IZ: Node = Node::Leaf(&I_XOR_RAX_IZ);

const I_CMP_EB_GB: Insn = alu_rm(M::Cmp, OPS_EB_GB_CMP, FlagOps::ARITH, VP::empty());
const I_CMP_EV_GV: Insn = alu_rm(M::Cmp, OPS_EV_GV_CMP, FlagOps::ARITH, VP::empty());
const I_CMP_GB_EB: Insn = alu_rm(M::Cmp, OPS_GB_EB_CMP, FlagOps::ARITH, VP::empty());
const I_CMP_GV_EV: Insn = alu_rm(M::Cmp, OPS_GV_EV_CMP, FlagOps::ARITH, VP::empty());
const I_CMP_AL_IB: Insn = alu_ax(M::Cmp, OPS_AL_IB_CMP, FlagOps::ARITH);
const I_CMP_RAX_IZ: Insn = alu_ax(M::Cmp, OPS_RAX_IZ_CMP, FlagOps::ARITH);
static N_CMP_EB_GB: Node = Node::Leaf(&I_CMP_EB_GB);
static N_CMP_EV_GV: Node = Node::Leaf(&I_CMP_EV_GV);
static N_CMP_GB_EB: Node = Node::Leaf(&I_CMP_GB_EB);
static N_CMP_GV_EV: Node = Node::Leaf(&I_CMP_GV_EV);
static N_CMP_AL_IB: Node = Node::Leaf(&I_CMP_AL_IB);
static N_CMP_RAX_IZ: Node = Node::Leaf(&I_CMP_RAX_IZ);

// ---------------------------------------------------------------------------
// Immediate groups 80/81/82/83.
// ---------------------------------------------------------------------------

const OPS_EB_IB: &[OpSpec] = &[op(K::E, S::B, RW), op(K::I, S::B, R), FL_W];
const OPS_EB_IB_C: &[OpSpec] = &[op(K::E, S::B, RW), op(K::I, S::B, R), FL_RW];
const OPS_EB_IB_CMP: &[OpSpec] = &[op(K::E, S::B, R), op(K::I, S::B, R), FL_W];
const OPS_EV_IZ: &[OpSpec] = &[op(K::E, S::V, RW), op(K::I, S::Z, R).flg(SEXD), FL_W];
const OPS_EV_IZ_C: &[OpSpec] = &[op(K::E, S::V, RW), op(K::I, S::Z, R).flg(SEXD), FL_RW];
const OPS_EV_IZ_CMP: &[OpSpec] = &[op(K::E, S::V, R), op(K::I, S::Z, R).flg(SEXD), FL_W];
const OPS_EV_IB: &[OpSpec] = &[op(K::E, S::V, RW), op(K::I, S::B, R).flg(SEXD), FL_W];
const OPS_EV_IB_C: &[OpSpec] = &[op(K::E, S::V, RW), op(K::I, S::B, R).flg(SEXD), FL_RW];
const OPS_EV_IB_CMP: &[OpSpec] = &[op(K::E, S::V, R), op(K::I, S::B, R).flg(SEXD), FL_W];

const I_ADD_EB_IB: Insn = alu_rm(M::Add, OPS_EB_IB, FlagOps::ARITH, LOCKABLE);
const I_OR_EB_IB: Insn = alu_rm(M::Or, OPS_EB_IB, FlagOps::LOGIC, LOCKABLE);
const I_ADC_EB_IB: Insn = alu_rm(M::Adc, OPS_EB_IB_C, FlagOps::ARITH_C, LOCKABLE);
const I_SBB_EB_IB: Insn = alu_rm(M::Sbb, OPS_EB_IB_C, FlagOps::ARITH_C, LOCKABLE);
const I_AND_EB_IB: Insn = alu_rm(M::And, OPS_EB_IB, FlagOps::LOGIC, LOCKABLE);
const I_SUB_EB_IB: Insn = alu_rm(M::Sub, OPS_EB_IB, FlagOps::ARITH, LOCKABLE);
const I_XOR_EB_IB: Insn = alu_rm(M::Xor, OPS_EB_IB, FlagOps::LOGIC, LOCKABLE);
const I_CMP_EB_IB: Insn = alu_rm(M::Cmp, OPS_EB_IB_CMP, FlagOps::ARITH, VP::empty());
static N_ADD_EB_IB: Node = Node::Leaf(&I_ADD_EB_IB);
static N_OR_EB_IB: Node = Node::Leaf(&I_OR_EB_IB);
static N_ADC_EB_IB: Node = Node::Leaf(&I_ADC_EB_IB);
static N_SBB_EB_IB: Node = Node::Leaf(&I_SBB_EB_IB);
static N_AND_EB_IB: Node = Node::Leaf(&I_AND_EB_IB);
static N_SUB_EB_IB: Node = Node::Leaf(&I_SUB_EB_IB);
static N_XOR_EB_IB: Node = Node::Leaf(&I_XOR_EB_IB);
static N_CMP_EB_IB: Node = Node::Leaf(&I_CMP_EB_IB);

static N_GROUP_80: Node = Node::ModrmReg(&[
    Some(&N_ADD_EB_IB),
    Some(&N_OR_EB_IB),
    Some(&N_ADC_EB_IB),
    Some(&N_SBB_EB_IB),
    Some(&N_AND_EB_IB),
    Some(&N_SUB_EB_IB),
    Some(&N_XOR_EB_IB),
    Some(&N_CMP_EB_IB),
]);

const I_ADD_EV_IZ: Insn = alu_rm(M::Add, OPS_EV_IZ, FlagOps::ARITH, LOCKABLE);
const I_OR_EV_IZ: Insn = alu_rm(M::Or, OPS_EV_IZ, FlagOps::LOGIC, LOCKABLE);
const I_ADC_EV_IZ: Insn = alu_rm(M::Adc, OPS_EV_IZ_C, FlagOps::ARITH_C, LOCKABLE);
const I_SBB_EV_IZ: Insn = alu_rm(M::Sbb, OPS_EV_IZ_C, FlagOps::ARITH_C, LOCKABLE);
const I_AND_EV_IZ: Insn = alu_rm(M::And, OPS_EV_IZ, FlagOps::LOGIC, LOCKABLE);
const I_SUB_EV_IZ: Insn = alu_rm(M::Sub, OPS_EV_IZ, FlagOps::ARITH, LOCKABLE);
const I_XOR_EV_IZ: Insn = alu_rm(M::Xor, OPS_EV_IZ, FlagOps::LOGIC, LOCKABLE);
const I_CMP_EV_IZ: Insn = alu_rm(M::Cmp, OPS_EV_IZ_CMP, FlagOps::ARITH, VP::empty());
static N_ADD_EV_IZ: Node = Node::Leaf(&I_ADD_EV_IZ);
static N_OR_EV_IZ: Node = Node::Leaf(&I_OR_EV_IZ);
static N_ADC_EV_IZ: Node = Node::Leaf(&I_ADC_EV_IZ);
static N_SBB_EV_IZ: Node = Node::Leaf(&I_SBB_EV_IZ);
static N_AND_EV_IZ: Node = Node::Leaf(&I_AND_EV_IZ);
static N_SUB_EV_IZ: Node = Node::Leaf(&I_SUB_EV_IZ);
static N_XOR_EV_IZ: Node = Node::Leaf(&I_XOR_EV_IZ);
static N_CMP_EV_IZ: Node = Node::Leaf(&I_CMP_EV_IZ);

static N_GROUP_81: Node = Node::ModrmReg(&[
    Some(&N_ADD_EV_IZ),
    Some(&N_OR_EV_IZ),
    Some(&N_ADC_EV_IZ),
    Some(&N_SBB_EV_IZ),
    Some(&N_AND_EV_IZ),
    Some(&N_SUB_EV_IZ),
    Some(&N_XOR_EV_IZ),
    Some(&N_CMP_EV_IZ),
]);

// 82 is an alias of 80 that is only valid outside 64 bit mode.
const I_ADD_EB_IB_I64: Insn = alu_rm(M::Add, OPS_EB_IB, FlagOps::ARITH, LOCKABLE).attrs(A::MODRM.union(A::I64));
const I_OR_EB_IB_I64: Insn = alu_rm(M::Or, OPS_EB_IB, FlagOps::LOGIC, LOCKABLE).attrs(A::MODRM.union(A::I64));
const I_ADC_EB_IB_I64: Insn = alu_rm(M::Adc, OPS_EB_IB_C, FlagOps::ARITH_C, LOCKABLE).attrs(A::MODRM.union(A::I64));
const I_SBB_EB_IB_I64: Insn = alu_rm(M::Sbb, OPS_EB_IB_C, FlagOps::ARITH_C, LOCKABLE).attrs(A::MODRM.union(A::I64));
const I_AND_EB_IB_I64: Insn = alu_rm(M::And, OPS_EB_IB, FlagOps::LOGIC, LOCKABLE).attrs(A::MODRM.union(A::I64));
const I_SUB_EB_IB_I64: Insn = alu_rm(M::Sub, OPS_EB_IB, FlagOps::ARITH, LOCKABLE).attrs(A::MODRM.union(A::I64));
const I_XOR_EB_IB_I64: Insn = alu_rm(M::Xor, OPS_EB_IB, FlagOps::LOGIC, LOCKABLE).attrs(A::MODRM.union(A::I64));
const I_CMP_EB_IB_I64: Insn = alu_rm(M::Cmp, OPS_EB_IB_CMP, FlagOps::ARITH, VP::empty()).attrs(A::MODRM.union(A::I64));
static N_ADD_EB_IB_I64: Node = Node::Leaf(&I_ADD_EB_IB_I64);
static N_OR_EB_IB_I64: Node = Node::Leaf(&I_OR_EB_IB_I64);
static N_ADC_EB_IB_I64: Node = Node::Leaf(&I_ADC_EB_IB_I64);
static N_SBB_EB_IB_I64: Node = Node::Leaf(&I_SBB_EB_IB_I64);
static N_AND_EB_IB_I64: Node = Node::Leaf(&I_AND_EB_IB_I64);
static N_SUB_EB_IB_I64: Node = Node::Leaf(&I_SUB_EB_IB_I64);
static N_XOR_EB_IB_I64: Node = Node::Leaf(&I_XOR_EB_IB_I64);
static N_CMP_EB_IB_I64: Node = Node::Leaf(&I_CMP_EB_IB_I64);

static N_GROUP_82: Node = Node::ModrmReg(&[
    Some(&N_ADD_EB_IB_I64),
    Some(&N_OR_EB_IB_I64),
    Some(&N_ADC_EB_IB_I64),
    Some(&N_SBB_EB_IB_I64),
    Some(&N_AND_EB_IB_I64),
    Some(&N_SUB_EB_IB_I64),
    Some(&N_XOR_EB_IB_I64),
    Some(&N_CMP_EB_IB_I64),
]);

const I_ADD_EV_IB: Insn = alu_rm(M::Add, OPS_EV_IB, FlagOps::ARITH, LOCKABLE);
const I_OR_EV_IB: Insn = alu_rm(M::Or, OPS_EV_IB, FlagOps::LOGIC, LOCKABLE);
const I_ADC_EV_IB: Insn = alu_rm(M::Adc, OPS_EV_IB_C, FlagOps::ARITH_C, LOCKABLE);
const I_SBB_EV_IB: Insn = alu_rm(M::Sbb, OPS_EV_IB_C, FlagOps::ARITH_C, LOCKABLE);
const I_AND_EV_IB: Insn = alu_rm(M::And, OPS_EV_IB, FlagOps::LOGIC, LOCKABLE);
const I_SUB_EV_IB: Insn = alu_rm(M::Sub, OPS_EV_IB, FlagOps::ARITH, LOCKABLE);
const I_XOR_EV_IB: Insn = alu_rm(M::Xor, OPS_EV_IB, FlagOps::LOGIC, LOCKABLE);
const I_CMP_EV_IB: Insn = alu_rm(M::Cmp, OPS_EV_IB_CMP, FlagOps::ARITH, VP::empty());
static N_ADD_EV_IB: Node = Node::Leaf(&I_ADD_EV_IB);
static N_OR_EV_IB: Node = Node::Leaf(&I_OR_EV_IB);
static N_ADC_EV_IB: Node = Node::Leaf(&I_ADC_EV_IB);
static N_SBB_EV_IB: Node = Node::Leaf(&I_SBB_EV_IB);
static N_AND_EV_IB: Node = Node::Leaf(&I_AND_EV_IB);
static N_SUB_EV_IB: Node = Node::Leaf(&I_SUB_EV_IB);
static N_XOR_EV_IB: Node = Node::Leaf(&I_XOR_EV_IB);
static N_CMP_EV_IB: Node = Node::Leaf(&I_CMP_EV_IB);

static N_GROUP_83: Node = Node::ModrmReg(&[
    Some(&N_ADD_EV_IB),
    Some(&N_OR_EV_IB),
    Some(&N_ADC_EV_IB),
    Some(&N_SBB_EV_IB),
    Some(&N_AND_EV_IB),
    Some(&N_SUB_EV_IB),
    Some(&N_XOR_EV_IB),
    Some(&N_CMP_EV_IB),
]);

// ---------------------------------------------------------------------------
// Stack, segment and decimal one byte opcodes.
// ---------------------------------------------------------------------------

const ST_PUSH: OpSpec = op(K::K, S::V, W).flg(OPDEF);
const ST_POP: OpSpec = op(K::K, S::V, R).flg(OPDEF);

const fn push_seg(ops: &'static [OpSpec]) -> Insn {
    insn(M::Push, C::Push, IS::I86, CF::None, 1, ops).attrs(A::D64)
}

const fn pop_seg(ops: &'static [OpSpec]) -> Insn {
    insn(M::Pop, C::Pop, IS::I86, CF::None, 1, ops).attrs(A::D64)
}

const OPS_PUSH_ES: &[OpSpec] = &[op(K::SegEs, S::W, R), ST_PUSH];
const OPS_PUSH_CS: &[OpSpec] = &[op(K::SegCs, S::W, R), ST_PUSH];
const OPS_PUSH_SS: &[OpSpec] = &[op(K::SegSs, S::W, R), ST_PUSH];
const OPS_PUSH_DS: &[OpSpec] = &[op(K::SegDs, S::W, R), ST_PUSH];
const OPS_PUSH_FS: &[OpSpec] = &[op(K::SegFs, S::W, R), ST_PUSH];
const OPS_PUSH_GS: &[OpSpec] = &[op(K::SegGs, S::W, R), ST_PUSH];
const OPS_POP_ES: &[OpSpec] = &[op(K::SegEs, S::W, W), ST_POP];
const OPS_POP_SS: &[OpSpec] = &[op(K::SegSs, S::W, W), ST_POP];
const OPS_POP_DS: &[OpSpec] = &[op(K::SegDs, S::W, W), ST_POP];
const OPS_POP_FS: &[OpSpec] = &[op(K::SegFs, S::W, W), ST_POP];
const OPS_POP_GS: &[OpSpec] = &[op(K::SegGs, S::W, W), ST_POP];

const I_PUSH_ES: Insn = push_seg(OPS_PUSH_ES).attrs(A::D64.union(A::I64));
const I_POP_ES: Insn = pop_seg(OPS_POP_ES).attrs(A::D64.union(A::I64));
const I_PUSH_CS: Insn = push_seg(OPS_PUSH_CS).attrs(A::D64.union(A::I64));
const I_PUSH_SS: Insn = push_seg(OPS_PUSH_SS).attrs(A::D64.union(A::I64));
const I_POP_SS: Insn = pop_seg(OPS_POP_SS).attrs(A::D64.union(A::I64));
const I_PUSH_DS: Insn = push_seg(OPS_PUSH_DS).attrs(A::D64.union(A::I64));
const I_POP_DS: Insn = pop_seg(OPS_POP_DS).attrs(A::D64.union(A::I64));
const I_PUSH_FS: Insn = push_seg(OPS_PUSH_FS);
const I_POP_FS: Insn = pop_seg(OPS_POP_FS);
const I_PUSH_GS: Insn = push_seg(OPS_PUSH_GS);
const I_POP_GS: Insn = pop_seg(OPS_POP_GS);
static N_PUSH_ES: Node = Node::Leaf(&I_PUSH_ES);
static N_POP_ES: Node = Node::Leaf(&I_POP_ES);
static N_PUSH_CS: Node = Node::Leaf(&I_PUSH_CS);
static N_PUSH_SS: Node = Node::Leaf(&I_PUSH_SS);
static N_POP_SS: Node = Node::Leaf(&I_POP_SS);
static N_PUSH_DS: Node = Node::Leaf(&I_PUSH_DS);
static N_POP_DS: Node = Node::Leaf(&I_POP_DS);
static N_PUSH_FS: Node = Node::Leaf(&I_PUSH_FS);
static N_POP_FS: Node = Node::Leaf(&I_POP_FS);
static N_PUSH_GS: Node = Node::Leaf(&I_PUSH_GS);
static N_POP_GS: Node = Node::Leaf(&I_POP_GS);

const OPS_DECIMAL: &[OpSpec] = &[op(K::GprRax, S::B, RW).flg(OPDEF), FL_RW];
const I_DAA: Insn = insn(M::Daa, C::Decimal, IS::I86, CF::None, 0, OPS_DECIMAL)
    .attrs(A::I64)
    .flags(FlagOps::ARITH_C);
const I_DAS: Insn = insn(M::Das, C::Decimal, IS::I86, CF::None, 0, OPS_DECIMAL)
    .attrs(A::I64)
    .flags(FlagOps::ARITH_C);
const I_AAA: Insn = insn(M::Aaa, C::Decimal, IS::I86, CF::None, 0, OPS_DECIMAL)
    .attrs(A::I64)
    .flags(FlagOps::ARITH_C);
const I_AAS: Insn = insn(M::Aas, C::Decimal, IS::I86, CF::None, 0, OPS_DECIMAL)
    .attrs(A::I64)
    .flags(FlagOps::ARITH_C);
static N_DAA: Node = Node::Leaf(&I_DAA);
static N_DAS: Node = Node::Leaf(&I_DAS);
static N_AAA: Node = Node::Leaf(&I_AAA);
static N_AAS: Node = Node::Leaf(&I_AAS);

// 40..4F decode as INC/DEC only outside 64 bit mode; inside they are REX.
const OPS_INCDEC_Z: &[OpSpec] = &[op(K::Z, S::V, RW), FL_W];
const I_INC_ZV: Insn = insn(M::Inc, C::Arith, IS::I86, CF::None, 1, OPS_INCDEC_Z)
    .attrs(A::I64)
    .flags(FlagOps::INCDEC);
const I_DEC_ZV: Insn = insn(M::Dec, C::Arith, IS::I86, CF::None, 1, OPS_INCDEC_Z)
    .attrs(A::I64)
    .flags(FlagOps::INCDEC);
static N_INC_ZV: Node = Node::Leaf(&I_INC_ZV);
static N_DEC_ZV: Node = Node::Leaf(&I_DEC_ZV);

const I_PUSH_ZV: Insn = insn(M::Push, C::Push, IS::I86, CF::None, 1, &[
    op(K::Z, S::V, R),
    ST_PUSH,
])
.attrs(A::D64);
const I_POP_ZV: Insn = insn(M::Pop, C::Pop, IS::I86, CF::None, 1, &[
    op(K::Z, S::V, W),
    ST_POP,
])
.attrs(A::D64);
static N_PUSH_ZV: Node = Node::Leaf(&I_PUSH_ZV);
static N_POP_ZV: Node = Node::Leaf(&I_POP_ZV);

const I_PUSHA: Insn = insn(M::Pusha, C::Push, IS::I186, CF::None, 0, &[
    op(K::Bank, S::V8, R).block(8),
    op(K::K, S::V8, W).flg(OPDEF),
])
.attrs(A::I64);
const I_POPA: Insn = insn(M::Popa, C::Pop, IS::I186, CF::None, 0, &[
    op(K::Bank, S::V8, W).block(8),
    op(K::K, S::V8, R).flg(OPDEF),
])
.attrs(A::I64);
static N_PUSHA: Node = Node::Leaf(&I_PUSHA);
static N_POPA: Node = Node::Leaf(&I_POPA);

const I_BOUND: Insn = insn(M::Bound, C::Misc, IS::I186, CF::None, 2, &[
    op(K::G, S::V, R),
    op(K::M, S::A, R),
])
.attrs(A::MODRM.union(A::I64));
static N_BOUND: Node = Node::Leaf(&I_BOUND);

const I_ARPL: Insn = insn(M::Arpl, C::System, IS::I286, CF::None, 2, &[
    op(K::E, S::W, RW),
    op(K::G, S::W, R),
    FL_W,
])
.attrs(A::MODRM.union(A::I64))
.flags(FlagOps {
    modified: CpuFlags::ZF,
    ..FlagOps::NONE
});
const I_MOVSXD: Insn = insn(M::Movsxd, C::Dataxfer, IS::LongMode, CF::None, 2, &[
    op(K::G, S::V, W),
    op(K::E, S::Z, R),
])
.attrs(A::MODRM.union(A::O64));
static N_ARPL: Node = Node::Leaf(&I_ARPL);
static N_MOVSXD: Node = Node::Leaf(&I_MOVSXD);

static N_63: Node = Node::Mode(&[None, Some(&N_ARPL), Some(&N_ARPL), Some(&N_MOVSXD)]);

const I_PUSH_IZ: Insn = insn(M::Push, C::Push, IS::I186, CF::None, 1, &[
    op(K::I, S::Z, R).flg(SEXD),
    ST_PUSH,
])
.attrs(A::D64);
const I_PUSH_IB: Insn = insn(M::Push, C::Push, IS::I186, CF::None, 1, &[
    op(K::I, S::B, R).flg(SEXD),
    ST_PUSH,
])
.attrs(A::D64);
static N_PUSH_IZ: Node = Node::Leaf(&I_PUSH_IZ);
static N_PUSH_IB: Node = Node::Leaf(&I_PUSH_IB);

const I_IMUL_GV_EV_IZ: Insn = insn(M::Imul, C::Arith, IS::I186, CF::None, 3, &[
    op(K::G, S::V, W),
    op(K::E, S::V, R),
    op(K::I, S::Z, R).flg(SEXD),
    FL_W,
])
.attrs(A::MODRM)
.flags(FlagOps::MUL);
const I_IMUL_GV_EV_IB: Insn = insn(M::Imul, C::Arith, IS::I186, CF::None, 3, &[
    op(K::G, S::V, W),
    op(K::E, S::V, R),
    op(K::I, S::B, R).flg(SEXD),
    FL_W,
])
.attrs(A::MODRM)
.flags(FlagOps::MUL);
static N_IMUL_GV_EV_IZ: Node = Node::Leaf(&I_IMUL_GV_EV_IZ);
static N_IMUL_GV_EV_IB: Node = Node::Leaf(&I_IMUL_GV_EV_IB);

// ---------------------------------------------------------------------------
// String I/O (6C..6F) and string moves (A4..AF).
// ---------------------------------------------------------------------------

const DF_TESTED: FlagOps = FlagOps {
    tested: CpuFlags::DF,
    ..FlagOps::NONE
};

const I_INSB: Insn = insn(M::Insb, C::Stringop, IS::I186, CF::None, 2, &[
    op(K::Y, S::B, W),
    op(K::GprRdx, S::W, R),
    FL_R,
])
.prefixes(VP::REP)
.flags(DF_TESTED);
const I_INSD: Insn = insn(M::Insd, C::Stringop, IS::I186, CF::None, 2, &[
    op(K::Y, S::Z, W),
    op(K::GprRdx, S::W, R),
    FL_R,
])
.prefixes(VP::REP)
.flags(DF_TESTED);
const I_OUTSB: Insn = insn(M::Outsb, C::Stringop, IS::I186, CF::None, 2, &[
    op(K::GprRdx, S::W, R),
    op(K::X, S::B, R),
    FL_R,
])
.prefixes(VP::REP)
.flags(DF_TESTED);
const I_OUTSD: Insn = insn(M::Outsd, C::Stringop, IS::I186, CF::None, 2, &[
    op(K::GprRdx, S::W, R),
    op(K::X, S::Z, R),
    FL_R,
])
.prefixes(VP::REP)
.flags(DF_TESTED);
static N_INSB: Node = Node::Leaf(&I_INSB);
static N_INSD: Node = Node::Leaf(&I_INSD);
static N_OUTSB: Node = Node::Leaf(&I_OUTSB);
static N_OUTSD: Node = Node::Leaf(&I_OUTSD);

const I_MOVSB: Insn = insn(M::Movsb, C::Stringop, IS::I86, CF::None, 2, &[
    op(K::Y, S::B, W),
    op(K::X, S::B, R),
    FL_R,
])
.prefixes(VP::REP)
.flags(DF_TESTED);
const I_MOVSV: Insn = insn(M::Movsd, C::Stringop, IS::I86, CF::None, 2, &[
    op(K::Y, S::V, W),
    op(K::X, S::V, R),
    FL_R,
])
.prefixes(VP::REP)
.flags(DF_TESTED);
const I_CMPSB: Insn = insn(M::Cmpsb, C::Stringop, IS::I86, CF::None, 2, &[
    op(K::X, S::B, R),
    op(K::Y, S::B, R),
    FL_RW,
])
.prefixes(VP::REPC)
.flags(FlagOps::ARITH);
const I_CMPSV: Insn = insn(M::Cmpsd, C::Stringop, IS::I86, CF::None, 2, &[
    op(K::X, S::V, R),
    op(K::Y, S::V, R),
    FL_RW,
])
.prefixes(VP::REPC)
.flags(FlagOps::ARITH);
const I_STOSB: Insn = insn(M::Stosb, C::Stringop, IS::I86, CF::None, 2, &[
    op(K::Y, S::B, W),
    op(K::GprRax, S::B, R),
    FL_R,
])
.prefixes(VP::REP)
.flags(DF_TESTED);
const I_STOSV: Insn = insn(M::Stosd, C::Stringop, IS::I86, CF::None, 2, &[
    op(K::Y, S::V, W),
    op(K::GprRax, S::V, R),
    FL_R,
])
.prefixes(VP::REP)
.flags(DF_TESTED);
const I_LODSB: Insn = insn(M::Lodsb, C::Stringop, IS::I86, CF::None, 2, &[
    op(K::GprRax, S::B, W),
    op(K::X, S::B, R),
    FL_R,
])
.prefixes(VP::REP)
.flags(DF_TESTED);
const I_LODSV: Insn = insn(M::Lodsd, C::Stringop, IS::I86, CF::None, 2, &[
    op(K::GprRax, S::V, W),
    op(K::X, S::V, R),
    FL_R,
])
.prefixes(VP::REP)
.flags(DF_TESTED);
const I_SCASB: Insn = insn(M::Scasb, C::Stringop, IS::I86, CF::None, 2, &[
    op(K::Y, S::B, R),
    op(K::GprRax, S::B, R),
    FL_RW,
])
.prefixes(VP::REPC)
.flags(FlagOps::ARITH);
const I_SCASV: Insn = insn(M::Scasd, C::Stringop, IS::I86, CF::None, 2, &[
    op(K::Y, S::V, R),
    op(K::GprRax, S::V, R),
    FL_RW,
])
.prefixes(VP::REPC)
.flags(FlagOps::ARITH);
static N_MOVSB: Node = Node::Leaf(&I_MOVSB);
static N_MOVSV: Node = Node::Leaf(&I_MOVSV);
static N_CMPSB: Node = Node::Leaf(&I_CMPSB);
static N_CMPSV: Node = Node::Leaf(&I_CMPSV);
static N_STOSB: Node = Node::Leaf(&I_STOSB);
static N_STOSV: Node = Node::Leaf(&I_STOSV);
static N_LODSB: Node = Node::Leaf(&I_LODSB);
static N_LODSV: Node = Node::Leaf(&I_LODSV);
static N_SCASB: Node = Node::Leaf(&I_SCASB);
static N_SCASV: Node = Node::Leaf(&I_SCASV);

// ---------------------------------------------------------------------------
// Short conditional branches (70..7F).
// ---------------------------------------------------------------------------

const OPS_JCC_B: &[OpSpec] = &[op(K::J, S::B, R), op(K::Rip, S::V, RCW).flg(OPDEF)];

const fn jcc_short(m: M, tested: CpuFlags) -> Insn {
    insn(m, C::CondBr, IS::I86, CF::None, 1, OPS_JCC_B)
        .attrs(A::D64)
        .prefixes(VP::BHINT)
        .flags(FlagOps::tested(tested))
}

const I_JO_JB: Insn = jcc_short(M::Jo, cc::O);
const I_JNO_JB: Insn = jcc_short(M::Jno, cc::O);
const I_JB_JB: Insn = jcc_short(M::Jb, cc::B);
const I_JNB_JB: Insn = jcc_short(M::Jnb, cc::B);
const I_JZ_JB: Insn = jcc_short(M::Jz, cc::Z);
const I_JNZ_JB: Insn = jcc_short(M::Jnz, cc::Z);
const I_JBE_JB: Insn = jcc_short(M::Jbe, cc::BE);
const I_JNBE_JB: Insn = jcc_short(M::Jnbe, cc::BE);
const I_JS_JB: Insn = jcc_short(M::Js, cc::S);
const I_JNS_JB: Insn = jcc_short(M::Jns, cc::S);
const I_JP_JB: Insn = jcc_short(M::Jp, cc::P);
const I_JNP_JB: Insn = jcc_short(M::Jnp, cc::P);
const I_JL_JB: Insn = jcc_short(M::Jl, cc::L);
const I_JNL_JB: Insn = jcc_short(M::Jnl, cc::L);
const I_JLE_JB: Insn = jcc_short(M::Jle, cc::LE);
const I_JNLE_JB: Insn = jcc_short(M::Jnle, cc::LE);
static N_JO_JB: Node = Node::Leaf(&I_JO_JB);
static N_JNO_JB: Node = Node::Leaf(&I_JNO_JB);
static N_JB_JB: Node = Node::Leaf(&I_JB_JB);
static N_JNB_JB: Node = Node::Leaf(&I_JNB_JB);
static N_JZ_JB: Node = Node::Leaf(&I_JZ_JB);
static N_JNZ_JB: Node = Node::Leaf(&I_JNZ_JB);
static N_JBE_JB: Node = Node::Leaf(&I_JBE_JB);
static N_JNBE_JB: Node = Node::Leaf(&I_JNBE_JB);
static N_JS_JB: Node = Node::Leaf(&I_JS_JB);
static N_JNS_JB: Node = Node::Leaf(&I_JNS_JB);
static N_JP_JB: Node = Node::Leaf(&I_JP_JB);
static N_JNP_JB: Node = Node::Leaf(&I_JNP_JB);
static N_JL_JB: Node = Node::Leaf(&I_JL_JB);
static N_JNL_JB: Node = Node::Leaf(&I_JNL_JB);
static N_JLE_JB: Node = Node::Leaf(&I_JLE_JB);
static N_JNLE_JB: Node = Node::Leaf(&I_JNLE_JB);

// ---------------------------------------------------------------------------
// 84..B7: TEST, XCHG, MOV, LEA and friends.
// ---------------------------------------------------------------------------

const I_TEST_EB_GB: Insn = insn(M::Test, C::Logical, IS::I86, CF::None, 2, OPS_EB_GB_CMP)
    .attrs(A::MODRM)
    .flags(FlagOps::LOGIC);
const I_TEST_EV_GV: Insn = insn(M::Test, C::Logical, IS::I86, CF::None, 2, OPS_EV_GV_CMP)
    .attrs(A::MODRM)
    .flags(FlagOps::LOGIC);
static N_TEST_EB_GB: Node = Node::Leaf(&I_TEST_EB_GB);
static N_TEST_EV_GV: Node = Node::Leaf(&I_TEST_EV_GV);

// XCHG with a memory operand is implicitly atomic.
const OPS_XCHG_EB: &[OpSpec] = &[op(K::E, S::B, RW), op(K::G, S::B, RW)];
const OPS_XCHG_EV: &[OpSpec] = &[op(K::E, S::V, RW), op(K::G, S::V, RW)];
const I_XCHG_EB_GB: Insn = insn(M::Xchg, C::Semaphore, IS::I86, CF::None, 2, OPS_XCHG_EB)
    .attrs(A::MODRM)
    .prefixes(LOCKABLE.union(VP::HLE_NO_LOCK));
const I_XCHG_EV_GV: Insn = insn(M::Xchg, C::Semaphore, IS::I86, CF::None, 2, OPS_XCHG_EV)
    .attrs(A::MODRM)
    .prefixes(LOCKABLE.union(VP::HLE_NO_LOCK));
static N_XCHG_EB_GB: Node = Node::Leaf(&I_XCHG_EB_GB);
static N_XCHG_EV_GV: Node = Node::Leaf(&I_XCHG_EV_GV);

const I_MOV_EB_GB: Insn = insn(M::Mov, C::Dataxfer, IS::I86, CF::None, 2, &[
    op(K::E, S::B, W),
    op(K::G, S::B, R),
])
.attrs(A::MODRM)
.prefixes(VP::XRELEASE.union(VP::HLE_NO_LOCK));
const I_MOV_EV_GV: Insn = insn(M::Mov, C::Dataxfer, IS::I86, CF::None, 2, &[
    op(K::E, S::V, W),
    op(K::G, S::V, R),
])
.attrs(A::MODRM)
.prefixes(VP::XRELEASE.union(VP::HLE_NO_LOCK));
const I_MOV_GB_EB: Insn = insn(M::Mov, C::Dataxfer, IS::I86, CF::None, 2, &[
    op(K::G, S::B, W),
    op(K::E, S::B, R),
])
.attrs(A::MODRM);
const I_MOV_GV_EV: Insn = insn(M::Mov, C::Dataxfer, IS::I86, CF::None, 2, &[
    op(K::G, S::V, W),
    op(K::E, S::V, R),
])
.attrs(A::MODRM);
static N_MOV_EB_GB: Node = Node::Leaf(&I_MOV_EB_GB);
static N_MOV_EV_GV: Node = Node::Leaf(&I_MOV_EV_GV);
static N_MOV_GB_EB: Node = Node::Leaf(&I_MOV_GB_EB);
static N_MOV_GV_EV: Node = Node::Leaf(&I_MOV_GV_EV);

const I_MOV_EV_SW: Insn = insn(M::Mov, C::Dataxfer, IS::I86, CF::None, 2, &[
    op(K::E, S::V, W),
    op(K::S, S::W, R),
])
.attrs(A::MODRM);
const I_MOV_SW_EW: Insn = insn(M::Mov, C::Dataxfer, IS::I86, CF::None, 2, &[
    op(K::S, S::W, W),
    op(K::E, S::W, R),
])
.attrs(A::MODRM);
static N_MOV_EV_SW: Node = Node::Leaf(&I_MOV_EV_SW);
static N_MOV_SW_EW: Node = Node::Leaf(&I_MOV_SW_EW);

const I_LEA: Insn = insn(M::Lea, C::Dataxfer, IS::I86, CF::None, 2, &[
    op(K::G, S::V, W),
    op(K::M, S::V, NA),
])
.attrs(A::MODRM.union(A::AG));
static N_LEA: Node = Node::Leaf(&I_LEA);

const I_POP_EV: Insn = insn(M::Pop, C::Pop, IS::I86, CF::None, 1, &[
    op(K::E, S::V, W),
    ST_POP,
])
.attrs(A::MODRM.union(A::D64));
static N_POP_EV: Node = Node::Leaf(&I_POP_EV);

static N_GROUP_8F: Node = Node::ModrmReg(&[
    Some(&N_POP_EV),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
]);

// 90 is NOP, XCHG r8 with REX.B, PAUSE with F3.
const I_NOP: Insn = insn(M::Nop, C::Nop, IS::I86, CF::None, 0, &[]);
const I_PAUSE: Insn = insn(M::Pause, C::Misc, IS::Pentium, CF::Sse2, 0, &[]);
const OPS_XCHG_ZV: &[OpSpec] = &[op(K::Z, S::V, RW), op(K::GprRax, S::V, RW).flg(OPDEF)];
const I_XCHG_ZV: Insn = insn(M::Xchg, C::Dataxfer, IS::I86, CF::None, 2, OPS_XCHG_ZV);
static N_NOP: Node = Node::Leaf(&I_NOP);
static N_PAUSE: Node = Node::Leaf(&I_PAUSE);
static N_XCHG_ZV: Node = Node::Leaf(&I_XCHG_ZV);

static N_90: Node = Node::Aux(&[
    Some(&N_NOP),
    Some(&N_XCHG_ZV),
    None,
    None,
    Some(&N_PAUSE),
    None,
]);

const OPS_CONVERT_A: &[OpSpec] = &[op(K::GprRax, S::V, RW).flg(OPDEF)];
const I_CBW: Insn = insn(M::Cbw, C::Convert, IS::I86, CF::None, 0, OPS_CONVERT_A);
const I_CWDE: Insn = insn(M::Cwde, C::Convert, IS::I386, CF::None, 0, OPS_CONVERT_A);
const I_CDQE: Insn = insn(M::Cdqe, C::Convert, IS::LongMode, CF::None, 0, OPS_CONVERT_A);
static N_CBW: Node = Node::Leaf(&I_CBW);
static N_CWDE: Node = Node::Leaf(&I_CWDE);
static N_CDQE: Node = Node::Leaf(&I_CDQE);

static N_98: Node = Node::DataSize(&[
    None,
    Some(&N_CBW),
    Some(&N_CWDE),
    Some(&N_CDQE),
    None,
    None,
]);

const OPS_CONVERT_D: &[OpSpec] = &[
    op(K::GprRdx, S::V, W).flg(OPDEF),
    op(K::GprRax, S::V, R).flg(OPDEF),
];
const I_CWD: Insn = insn(M::Cwd, C::Convert, IS::I86, CF::None, 0, OPS_CONVERT_D);
const I_CDQ: Insn = insn(M::Cdq, C::Convert, IS::I386, CF::None, 0, OPS_CONVERT_D);
const I_CQO: Insn = insn(M::Cqo, C::Convert, IS::LongMode, CF::None, 0, OPS_CONVERT_D);
static N_CWD: Node = Node::Leaf(&I_CWD);
static N_CDQ: Node = Node::Leaf(&I_CDQ);
static N_CQO: Node = Node::Leaf(&I_CQO);

static N_99: Node = Node::DataSize(&[
    None,
    Some(&N_CWD),
    Some(&N_CDQ),
    Some(&N_CQO),
    None,
    None,
]);

const I_CALLF_AP: Insn = insn(M::CallFar, C::Call, IS::I86, CF::None, 1, &[
    op(K::A, S::P, R),
    op(K::SegCs, S::W, RW).flg(OPDEF),
    op(K::Rip, S::V, RW).flg(OPDEF),
    op(K::K, S::V2, W).flg(OPDEF),
])
.attrs(A::I64);
static N_CALLF_AP: Node = Node::Leaf(&I_CALLF_AP);

const I_WAIT: Insn = insn(M::Wait, C::X87Alu, IS::X87, CF::Fpu, 0, &[]);
static N_WAIT: Node = Node::Leaf(&I_WAIT);

const OPS_PUSHF: &[OpSpec] = &[op(K::F, S::V, R).flg(OPDEF), ST_PUSH];
const OPS_POPF: &[OpSpec] = &[op(K::F, S::V, W).flg(OPDEF), ST_POP];
const I_PUSHF: Insn = insn(M::Pushf, C::Push, IS::I86, CF::None, 0, OPS_PUSHF).attrs(A::D64);
const I_PUSHFD: Insn = insn(M::Pushfd, C::Push, IS::I386, CF::None, 0, OPS_PUSHF).attrs(A::I64);
const I_PUSHFQ: Insn = insn(M::Pushfq, C::Push, IS::LongMode, CF::None, 0, OPS_PUSHF)
    .attrs(A::D64.union(A::O64));
const I_POPF: Insn = insn(M::Popf, C::Pop, IS::I86, CF::None, 0, OPS_POPF).attrs(A::D64);
const I_POPFD: Insn = insn(M::Popfd, C::Pop, IS::I386, CF::None, 0, OPS_POPF).attrs(A::I64);
const I_POPFQ: Insn = insn(M::Popfq, C::Pop, IS::LongMode, CF::None, 0, OPS_POPF)
    .attrs(A::D64.union(A::O64));
static N_PUSHF: Node = Node::Leaf(&I_PUSHF);
static N_PUSHFD: Node = Node::Leaf(&I_PUSHFD);
static N_PUSHFQ: Node = Node::Leaf(&I_PUSHFQ);
static N_POPF: Node = Node::Leaf(&I_POPF);
static N_POPFD: Node = Node::Leaf(&I_POPFD);
static N_POPFQ: Node = Node::Leaf(&I_POPFQ);

static N_9C: Node = Node::DataSize(&[
    None,
    Some(&N_PUSHF),
    Some(&N_PUSHFD),
    None,
    Some(&N_PUSHFQ),
    None,
]);
static N_9D: Node = Node::DataSize(&[
    None,
    Some(&N_POPF),
    Some(&N_POPFD),
    None,
    Some(&N_POPFQ),
    None,
]);

const I_SAHF: Insn = insn(M::Sahf, C::Flagop, IS::I86, CF::None, 0, &[
    op(K::GprAh, S::B, R).flg(OPDEF),
    FL_W,
])
.flags(FlagOps {
    modified: CpuFlags::SF
        .union(CpuFlags::ZF)
        .union(CpuFlags::AF)
        .union(CpuFlags::PF)
        .union(CpuFlags::CF),
    ..FlagOps::NONE
});
const I_LAHF: Insn = insn(M::Lahf, C::Flagop, IS::I86, CF::None, 0, &[
    op(K::GprAh, S::B, W).flg(OPDEF),
    FL_R,
]);
static N_SAHF: Node = Node::Leaf(&I_SAHF);
static N_LAHF: Node = Node::Leaf(&I_LAHF);

const I_MOV_AL_OB: Insn = insn(M::Mov, C::Dataxfer, IS::I86, CF::None, 2, &[
    op(K::GprRax, S::B, W).flg(OPDEF),
    op(K::O, S::B, R),
]);
const I_MOV_RAX_OV: Insn = insn(M::Mov, C::Dataxfer, IS::I86, CF::None, 2, &[
    op(K::GprRax, S::V, W).flg(OPDEF),
    op(K::O, S::V, R),
]);
const I_MOV_OB_AL: Insn = insn(M::Mov, C::Dataxfer, IS::I86, CF::None, 2, &[
    op(K::O, S::B, W),
    op(K::GprRax, S::B, R).flg(OPDEF),
]);
const I_MOV_OV_RAX: Insn = insn(M::Mov, C::Dataxfer, IS::I86, CF::None, 2, &[
    op(K::O, S::V, W),
    op(K::GprRax, S::V, R).flg(OPDEF),
]);
static N_MOV_AL_OB: Node = Node::Leaf(&I_MOV_AL_OB);
static N_MOV_RAX_OV: Node = Node::Leaf(&I_MOV_RAX_OV);
static N_MOV_OB_AL: Node = Node::Leaf(&I_MOV_OB_AL);
static N_MOV_OV_RAX: Node = Node::Leaf(&I_MOV_OV_RAX);

const I_TEST_AL_IB: Insn = insn(M::Test, C::Logical, IS::I86, CF::None, 2, OPS_AL_IB_CMP)
    .flags(FlagOps::LOGIC);
const I_TEST_RAX_IZ: Insn = insn(M::Test, C::Logical, IS::I86, CF::None, 2, OPS_RAX_IZ_CMP)
    .flags(FlagOps::LOGIC);
static N_TEST_AL_IB: Node = Node::Leaf(&I_TEST_AL_IB);
static N_TEST_RAX_IZ: Node = Node::Leaf(&I_TEST_RAX_IZ);

const I_MOV_ZB_IB: Insn = insn(M::Mov, C::Dataxfer, IS::I86, CF::None, 2, &[
    op(K::Z, S::B, W),
    op(K::I, S::B, R),
]);
const I_MOV_ZV_IV: Insn = insn(M::Mov, C::Dataxfer, IS::I86, CF::None, 2, &[
    op(K::Z, S::V, W),
    op(K::I, S::V, R),
]);
static N_MOV_ZB_IB: Node = Node::Leaf(&I_MOV_ZB_IB);
static N_MOV_ZV_IV: Node = Node::Leaf(&I_MOV_ZV_IV);

// ---------------------------------------------------------------------------
// Shift and rotate groups (C0/C1/D0..D3).
// ---------------------------------------------------------------------------

const fn shift(m: M, ops: &'static [OpSpec], fl: FlagOps) -> Insn {
    insn(m, C::Shift, IS::I86, CF::None, 2, ops)
        .attrs(A::MODRM)
        .flags(fl)
}

const fn rotate(m: M, ops: &'static [OpSpec], fl: FlagOps) -> Insn {
    insn(m, C::Rotate, IS::I86, CF::None, 2, ops)
        .attrs(A::MODRM)
        .flags(fl)
}

const RCL_FLAGS: FlagOps = FlagOps {
    tested: CpuFlags::CF,
    modified: CpuFlags::CF.union(CpuFlags::OF),
    ..FlagOps::NONE
};

const OPS_SH_EB_IB: &[OpSpec] = &[op(K::E, S::B, RW), op(K::I, S::B, R), FL_W];
const OPS_SH_EV_IB: &[OpSpec] = &[op(K::E, S::V, RW), op(K::I, S::B, R), FL_W];
const OPS_SH_EB_1: &[OpSpec] = &[op(K::E, S::B, RW), op(K::Const1, S::B, R), FL_W];
const OPS_SH_EV_1: &[OpSpec] = &[op(K::E, S::V, RW), op(K::Const1, S::B, R), FL_W];
const OPS_SH_EB_CL: &[OpSpec] = &[op(K::E, S::B, RW), op(K::GprRcx, S::B, R), FL_W];
const OPS_SH_EV_CL: &[OpSpec] = &[op(K::E, S::V, RW), op(K::GprRcx, S::B, R), FL_W];

macro_rules! shift_group {
    ($node:ident, $ops:ident) => {
        mod $node {
            use super::*;

            const I_ROL: Insn = rotate(M::Rol, $ops, FlagOps::ROTATE);
            const I_ROR: Insn = rotate(M::Ror, $ops, FlagOps::ROTATE);
            const I_RCL: Insn = rotate(M::Rcl, $ops, RCL_FLAGS);
            const I_RCR: Insn = rotate(M::Rcr, $ops, RCL_FLAGS);
            const I_SHL: Insn = shift(M::Shl, $ops, FlagOps::SHIFT);
            const I_SHR: Insn = shift(M::Shr, $ops, FlagOps::SHIFT);
            const I_SAL: Insn = shift(M::Sal, $ops, FlagOps::SHIFT);
            const I_SAR: Insn = shift(M::Sar, $ops, FlagOps::SHIFT);
            static N_ROL: Node = Node::Leaf(&I_ROL);
            static N_ROR: Node = Node::Leaf(&I_ROR);
            static N_RCL: Node = Node::Leaf(&I_RCL);
            static N_RCR: Node = Node::Leaf(&I_RCR);
            static N_SHL: Node = Node::Leaf(&I_SHL);
            static N_SHR: Node = Node::Leaf(&I_SHR);
            static N_SAL: Node = Node::Leaf(&I_SAL);
            static N_SAR: Node = Node::Leaf(&I_SAR);

            pub(super) static NODE: Node = Node::ModrmReg(&[
                Some(&N_ROL),
                Some(&N_ROR),
                Some(&N_RCL),
                Some(&N_RCR),
                Some(&N_SHL),
                Some(&N_SHR),
                Some(&N_SAL),
                Some(&N_SAR),
            ]);
        }
    };
}

shift_group!(group_c0, OPS_SH_EB_IB);
shift_group!(group_c1, OPS_SH_EV_IB);
shift_group!(group_d0, OPS_SH_EB_1);
shift_group!(group_d1, OPS_SH_EV_1);
shift_group!(group_d2, OPS_SH_EB_CL);
shift_group!(group_d3, OPS_SH_EV_CL);

// ---------------------------------------------------------------------------
// C2..CF: returns, far pointer loads, MOV immediate groups, ENTER/LEAVE.
// ---------------------------------------------------------------------------

const I_RET_IW: Insn = insn(M::Ret, C::Ret, IS::I86, CF::None, 1, &[
    op(K::I, S::W, R),
    op(K::Rip, S::V, W).flg(OPDEF),
    op(K::K, S::V, R).flg(OPDEF),
])
.attrs(A::F64);
const I_RET: Insn = insn(M::Ret, C::Ret, IS::I86, CF::None, 0, &[
    op(K::Rip, S::V, W).flg(OPDEF),
    op(K::K, S::V, R).flg(OPDEF),
])
.attrs(A::F64)
.prefixes(VP::BND);
static N_RET_IW: Node = Node::Leaf(&I_RET_IW);
static N_RET: Node = Node::Leaf(&I_RET);

const I_LES: Insn = insn(M::Les, C::Dataxfer, IS::I86, CF::None, 2, &[
    op(K::G, S::V, W),
    op(K::M, S::P, R),
    op(K::SegEs, S::W, W).flg(OPDEF),
])
.attrs(A::MODRM.union(A::I64));
const I_LDS: Insn = insn(M::Lds, C::Dataxfer, IS::I86, CF::None, 2, &[
    op(K::G, S::V, W),
    op(K::M, S::P, R),
    op(K::SegDs, S::W, W).flg(OPDEF),
])
.attrs(A::MODRM.union(A::I64));
static N_LES: Node = Node::Leaf(&I_LES);
static N_LDS: Node = Node::Leaf(&I_LDS);

const I_MOV_EB_IB: Insn = insn(M::Mov, C::Dataxfer, IS::I86, CF::None, 2, &[
    op(K::E, S::B, W),
    op(K::I, S::B, R),
])
.attrs(A::MODRM)
.prefixes(VP::XRELEASE.union(VP::HLE_NO_LOCK));
const I_MOV_EV_IZ: Insn = insn(M::Mov, C::Dataxfer, IS::I86, CF::None, 2, &[
    op(K::E, S::V, W),
    op(K::I, S::Z, R).flg(SEXD),
])
.attrs(A::MODRM)
.prefixes(VP::XRELEASE.union(VP::HLE_NO_LOCK));
static N_MOV_EB_IB: Node = Node::Leaf(&I_MOV_EB_IB);
static N_MOV_EV_IZ: Node = Node::Leaf(&I_MOV_EV_IZ);

static N_GROUP_C6: Node = Node::ModrmReg(&[
    Some(&N_MOV_EB_IB),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
]);
static N_GROUP_C7: Node = Node::ModrmReg(&[
    Some(&N_MOV_EV_IZ),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
]);

const I_ENTER: Insn = insn(M::Enter, C::Misc, IS::I186, CF::None, 2, &[
    op(K::I, S::W, R),
    op(K::I, S::B, R),
    op(K::GprRbp, S::V, RW).flg(OPDEF),
    op(K::K, S::V, W).flg(OPDEF),
])
.attrs(A::D64);
const I_LEAVE: Insn = insn(M::Leave, C::Misc, IS::I186, CF::None, 0, &[
    op(K::GprRbp, S::V, RW).flg(OPDEF),
    op(K::K, S::V, R).flg(OPDEF),
])
.attrs(A::D64);
static N_ENTER: Node = Node::Leaf(&I_ENTER);
static N_LEAVE: Node = Node::Leaf(&I_LEAVE);

const I_RETF_IW: Insn = insn(M::RetFar, C::Ret, IS::I86, CF::None, 1, &[
    op(K::I, S::W, R),
    op(K::Rip, S::V, W).flg(OPDEF),
    op(K::SegCs, S::W, W).flg(OPDEF),
    op(K::K, S::V2, R).flg(OPDEF),
]);
const I_RETF: Insn = insn(M::RetFar, C::Ret, IS::I86, CF::None, 0, &[
    op(K::Rip, S::V, W).flg(OPDEF),
    op(K::SegCs, S::W, W).flg(OPDEF),
    op(K::K, S::V2, R).flg(OPDEF),
]);
static N_RETF_IW: Node = Node::Leaf(&I_RETF_IW);
static N_RETF: Node = Node::Leaf(&I_RETF);

const I_INT3: Insn = insn(M::Int3, C::Misc, IS::I86, CF::None, 0, &[
    op(K::Rip, S::V, RW).flg(OPDEF),
    op(K::K, S::V, W).flg(OPDEF),
]);
const I_INT_IB: Insn = insn(M::Int, C::Misc, IS::I86, CF::None, 1, &[
    op(K::I, S::B, R),
    op(K::Rip, S::V, RW).flg(OPDEF),
    op(K::K, S::V, W).flg(OPDEF),
]);
const I_INTO: Insn = insn(M::Into, C::Misc, IS::I86, CF::None, 0, &[
    op(K::Rip, S::V, RW).flg(OPDEF),
    FL_R,
])
.attrs(A::I64)
.flags(FlagOps::tested(CpuFlags::OF));
const I_INT1: Insn = insn(M::Int1, C::Misc, IS::I86, CF::None, 0, &[
    op(K::Rip, S::V, RW).flg(OPDEF),
]);
static N_INT3: Node = Node::Leaf(&I_INT3);
static N_INT_IB: Node = Node::Leaf(&I_INT_IB);
static N_INTO: Node = Node::Leaf(&I_INTO);
static N_INT1: Node = Node::Leaf(&I_INT1);

const OPS_IRET: &[OpSpec] = &[
    op(K::Rip, S::V, W).flg(OPDEF),
    op(K::SegCs, S::W, W).flg(OPDEF),
    op(K::F, S::V, W).flg(OPDEF),
    op(K::K, S::V3, R).flg(OPDEF),
];
const I_IRET: Insn = insn(M::Iret, C::Ret, IS::I86, CF::None, 0, OPS_IRET);
const I_IRETD: Insn = insn(M::Iretd, C::Ret, IS::I386, CF::None, 0, OPS_IRET);
const I_IRETQ: Insn = insn(M::Iretq, C::Ret, IS::LongMode, CF::None, 0, OPS_IRET);
static N_IRET: Node = Node::Leaf(&I_IRET);
static N_IRETD: Node = Node::Leaf(&I_IRETD);
static N_IRETQ: Node = Node::Leaf(&I_IRETQ);

static N_CF: Node = Node::DataSize(&[
    None,
    Some(&N_IRET),
    Some(&N_IRETD),
    Some(&N_IRETQ),
    None,
    None,
]);

const I_AAM: Insn = insn(M::Aam, C::Decimal, IS::I86, CF::None, 1, &[
    op(K::I, S::B, R),
    op(K::GprRax, S::W, RW).flg(OPDEF),
    FL_W,
])
.attrs(A::I64)
.flags(FlagOps {
    modified: CpuFlags::SF.union(CpuFlags::ZF).union(CpuFlags::PF),
    set: CpuFlags::OF.union(CpuFlags::AF).union(CpuFlags::CF),
    cleared: CpuFlags::OF.union(CpuFlags::AF).union(CpuFlags::CF),
    ..FlagOps::NONE
});
const I_AAD: Insn = insn(M::Aad, C::Decimal, IS::I86, CF::None, 1, &[
    op(K::I, S::B, R),
    op(K::GprRax, S::W, RW).flg(OPDEF),
    FL_W,
])
.attrs(A::I64)
.flags(FlagOps {
    modified: CpuFlags::SF.union(CpuFlags::ZF).union(CpuFlags::PF),
    set: CpuFlags::OF.union(CpuFlags::AF).union(CpuFlags::CF),
    cleared: CpuFlags::OF.union(CpuFlags::AF).union(CpuFlags::CF),
    ..FlagOps::NONE
});
static N_AAM: Node = Node::Leaf(&I_AAM);
static N_AAD: Node = Node::Leaf(&I_AAD);

const I_XLAT: Insn = insn(M::Xlatb, C::Misc, IS::I86, CF::None, 1, &[
    op(K::MemBxAl, S::B, R),
    op(K::GprRax, S::B, RW).flg(OPDEF),
]);
static N_XLAT: Node = Node::Leaf(&I_XLAT);

// ---------------------------------------------------------------------------
// E0..FF: loops, port I/O, branches, unary groups.
// ---------------------------------------------------------------------------

const OPS_LOOP: &[OpSpec] = &[
    op(K::J, S::B, R),
    op(K::GprRcx, S::Asz, RW).flg(OPDEF),
    op(K::Rip, S::V, RCW).flg(OPDEF),
];
const I_LOOPNZ: Insn = insn(M::Loopnz, C::CondBr, IS::I86, CF::None, 1, OPS_LOOP)
    .attrs(A::D64)
    .flags(FlagOps::tested(CpuFlags::ZF));
const I_LOOPZ: Insn = insn(M::Loopz, C::CondBr, IS::I86, CF::None, 1, OPS_LOOP)
    .attrs(A::D64)
    .flags(FlagOps::tested(CpuFlags::ZF));
const I_LOOP: Insn = insn(M::Loop, C::CondBr, IS::I86, CF::None, 1, OPS_LOOP).attrs(A::D64);
static N_LOOPNZ: Node = Node::Leaf(&I_LOOPNZ);
static N_LOOPZ: Node = Node::Leaf(&I_LOOPZ);
static N_LOOP: Node = Node::Leaf(&I_LOOP);

const OPS_JCXZ: &[OpSpec] = &[
    op(K::J, S::B, R),
    op(K::GprRcx, S::Asz, R).flg(OPDEF),
    op(K::Rip, S::V, RCW).flg(OPDEF),
];
const I_JCXZ: Insn = insn(M::Jcxz, C::CondBr, IS::I86, CF::None, 1, OPS_JCXZ).attrs(A::D64);
const I_JECXZ: Insn = insn(M::Jecxz, C::CondBr, IS::I386, CF::None, 1, OPS_JCXZ).attrs(A::D64);
const I_JRCXZ: Insn = insn(M::Jrcxz, C::CondBr, IS::LongMode, CF::None, 1, OPS_JCXZ)
    .attrs(A::D64.union(A::O64));
static N_JCXZ: Node = Node::Leaf(&I_JCXZ);
static N_JECXZ: Node = Node::Leaf(&I_JECXZ);
static N_JRCXZ: Node = Node::Leaf(&I_JRCXZ);

static N_E3: Node = Node::AddrSize(&[
    None,
    Some(&N_JCXZ),
    Some(&N_JECXZ),
    Some(&N_JRCXZ),
]);

const I_IN_AL_IB: Insn = insn(M::In, C::Io, IS::I86, CF::None, 2, &[
    op(K::GprRax, S::B, W).flg(OPDEF),
    op(K::I, S::B, R),
]);
const I_IN_EAX_IB: Insn = insn(M::In, C::Io, IS::I86, CF::None, 2, &[
    op(K::GprRax, S::Z, W).flg(OPDEF),
    op(K::I, S::B, R),
]);
const I_OUT_IB_AL: Insn = insn(M::Out, C::Io, IS::I86, CF::None, 2, &[
    op(K::I, S::B, R),
    op(K::GprRax, S::B, R).flg(OPDEF),
]);
const I_OUT_IB_EAX: Insn = insn(M::Out, C::Io, IS::I86, CF::None, 2, &[
    op(K::I, S::B, R),
    op(K::GprRax, S::Z, R).flg(OPDEF),
]);
const I_IN_AL_DX: Insn = insn(M::In, C::Io, IS::I86, CF::None, 2, &[
    op(K::GprRax, S::B, W).flg(OPDEF),
    op(K::GprRdx, S::W, R).flg(OPDEF),
]);
const I_IN_EAX_DX: Insn = insn(M::In, C::Io, IS::I86, CF::None, 2, &[
    op(K::GprRax, S::Z, W).flg(OPDEF),
    op(K::GprRdx, S::W, R).flg(OPDEF),
]);
const I_OUT_DX_AL: Insn = insn(M::Out, C::Io, IS::I86, CF::None, 2, &[
    op(K::GprRdx, S::W, R).flg(OPDEF),
    op(K::GprRax, S::B, R).flg(OPDEF),
]);
const I_OUT_DX_EAX: Insn = insn(M::Out, C::Io, IS::I86, CF::None, 2, &[
    op(K::GprRdx, S::W, R).flg(OPDEF),
    op(K::GprRax, S::Z, R).flg(OPDEF),
]);
static N_IN_AL_IB: Node = Node::Leaf(&I_IN_AL_IB);
static N_IN_EAX_IB: Node = Node::Leaf(&I_IN_EAX_IB);
static N_OUT_IB_AL: Node = Node::Leaf(&I_OUT_IB_AL);
static N_OUT_IB_EAX: Node = Node::Leaf(&I_OUT_IB_EAX);
static N_IN_AL_DX: Node = Node::Leaf(&I_IN_AL_DX);
static N_IN_EAX_DX: Node = Node::Leaf(&I_IN_EAX_DX);
static N_OUT_DX_AL: Node = Node::Leaf(&I_OUT_DX_AL);
static N_OUT_DX_EAX: Node = Node::Leaf(&I_OUT_DX_EAX);

const I_CALL_JZ: Insn = insn(M::Call, C::Call, IS::I86, CF::None, 1, &[
    op(K::J, S::Z, R),
    op(K::Rip, S::V, RW).flg(OPDEF),
    op(K::K, S::V, W).flg(OPDEF),
])
.attrs(A::F64)
.prefixes(VP::BND);
const I_JMP_JZ: Insn = insn(M::Jmp, C::UncondBr, IS::I86, CF::None, 1, &[
    op(K::J, S::Z, R),
    op(K::Rip, S::V, RW).flg(OPDEF),
])
.attrs(A::F64)
.prefixes(VP::BND);
const I_JMP_JB: Insn = insn(M::Jmp, C::UncondBr, IS::I86, CF::None, 1, &[
    op(K::J, S::B, R),
    op(K::Rip, S::V, RW).flg(OPDEF),
])
.attrs(A::F64);
const I_JMPF_AP: Insn = insn(M::JmpFar, C::UncondBr, IS::I86, CF::None, 1, &[
    op(K::A, S::P, R),
    op(K::SegCs, S::W, W).flg(OPDEF),
    op(K::Rip, S::V, W).flg(OPDEF),
])
.attrs(A::I64);
static N_CALL_JZ: Node = Node::Leaf(&I_CALL_JZ);
static N_JMP_JZ: Node = Node::Leaf(&I_JMP_JZ);
static N_JMP_JB: Node = Node::Leaf(&I_JMP_JB);
static N_JMPF_AP: Node = Node::Leaf(&I_JMPF_AP);

const I_HLT: Insn = insn(M::Hlt, C::System, IS::I86, CF::None, 0, &[]);
const I_CMC: Insn = insn(M::Cmc, C::Flagop, IS::I86, CF::None, 0, &[FL_RW]).flags(FlagOps {
    tested: CpuFlags::CF,
    modified: CpuFlags::CF,
    ..FlagOps::NONE
});
const I_CLC: Insn = insn(M::Clc, C::Flagop, IS::I86, CF::None, 0, &[FL_W]).flags(FlagOps {
    cleared: CpuFlags::CF,
    ..FlagOps::NONE
});
const I_STC: Insn = insn(M::Stc, C::Flagop, IS::I86, CF::None, 0, &[FL_W]).flags(FlagOps {
    set: CpuFlags::CF,
    ..FlagOps::NONE
});
const I_CLI: Insn = insn(M::Cli, C::Flagop, IS::I86, CF::None, 0, &[FL_W]).flags(FlagOps {
    cleared: CpuFlags::IF,
    ..FlagOps::NONE
});
const I_STI: Insn = insn(M::Sti, C::Flagop, IS::I86, CF::None, 0, &[FL_W]).flags(FlagOps {
    set: CpuFlags::IF,
    ..FlagOps::NONE
});
const I_CLD: Insn = insn(M::Cld, C::Flagop, IS::I86, CF::None, 0, &[FL_W]).flags(FlagOps {
    cleared: CpuFlags::DF,
    ..FlagOps::NONE
});
const I_STD: Insn = insn(M::Std, C::Flagop, IS::I86, CF::None, 0, &[FL_W]).flags(FlagOps {
    set: CpuFlags::DF,
    ..FlagOps::NONE
});
static N_HLT: Node = Node::Leaf(&I_HLT);
static N_CMC: Node = Node::Leaf(&I_CMC);
static N_CLC: Node = Node::Leaf(&I_CLC);
static N_STC: Node = Node::Leaf(&I_STC);
static N_CLI: Node = Node::Leaf(&I_CLI);
static N_STI: Node = Node::Leaf(&I_STI);
static N_CLD: Node = Node::Leaf(&I_CLD);
static N_STD: Node = Node::Leaf(&I_STD);

// Unary group 3 (F6/F7).
const I_TEST_EB_IB: Insn = insn(M::Test, C::Logical, IS::I86, CF::None, 2, OPS_EB_IB_CMP)
    .attrs(A::MODRM)
    .flags(FlagOps::LOGIC);
const I_TEST_EV_IZ: Insn = insn(M::Test, C::Logical, IS::I86, CF::None, 2, OPS_EV_IZ_CMP)
    .attrs(A::MODRM)
    .flags(FlagOps::LOGIC);
const I_NOT_EB: Insn = insn(M::Not, C::Logical, IS::I86, CF::None, 1, &[op(K::E, S::B, RW)])
    .attrs(A::MODRM)
    .prefixes(LOCKABLE);
const I_NOT_EV: Insn = insn(M::Not, C::Logical, IS::I86, CF::None, 1, &[op(K::E, S::V, RW)])
    .attrs(A::MODRM)
    .prefixes(LOCKABLE);
const I_NEG_EB: Insn = insn(M::Neg, C::Arith, IS::I86, CF::None, 1, &[op(K::E, S::B, RW), FL_W])
    .attrs(A::MODRM)
    .prefixes(LOCKABLE)
    .flags(FlagOps::ARITH);
const I_NEG_EV: Insn = insn(M::Neg, C::Arith, IS::I86, CF::None, 1, &[op(K::E, S::V, RW), FL_W])
    .attrs(A::MODRM)
    .prefixes(LOCKABLE)
    .flags(FlagOps::ARITH);
const I_MUL_EB: Insn = insn(M::Mul, C::Arith, IS::I86, CF::None, 1, &[
    op(K::E, S::B, R),
    op(K::GprRax, S::W, RW).flg(OPDEF),
    FL_W,
])
.attrs(A::MODRM)
.flags(FlagOps::MUL);
const I_MUL_EV: Insn = insn(M::Mul, C::Arith, IS::I86, CF::None, 1, &[
    op(K::E, S::V, R),
    op(K::GprRdx, S::V, W).flg(OPDEF),
    op(K::GprRax, S::V, RW).flg(OPDEF),
    FL_W,
])
.attrs(A::MODRM)
.flags(FlagOps::MUL);
const I_IMUL_EB: Insn = insn(M::Imul, C::Arith, IS::I86, CF::None, 1, &[
    op(K::E, S::B, R),
    op(K::GprRax, S::W, RW).flg(OPDEF),
    FL_W,
])
.attrs(A::MODRM)
.flags(FlagOps::MUL);
const I_IMUL_EV: Insn = insn(M::Imul, C::Arith, IS::I86, CF::None, 1, &[
    op(K::E, S::V, R),
    op(K::GprRdx, S::V, W).flg(OPDEF),
    op(K::GprRax, S::V, RW).flg(OPDEF),
    FL_W,
])
.attrs(A::MODRM)
.flags(FlagOps::MUL);
const I_DIV_EB: Insn = insn(M::Div, C::Arith, IS::I86, CF::None, 1, &[
    op(K::E, S::B, R),
    op(K::GprRax, S::W, RW).flg(OPDEF),
    FL_W,
])
.attrs(A::MODRM)
.flags(FlagOps::DIV);
const I_DIV_EV: Insn = insn(M::Div, C::Arith, IS::I86, CF::None, 1, &[
    op(K::E, S::V, R),
    op(K::GprRdx, S::V, RW).flg(OPDEF),
    op(K::GprRax, S::V, RW).flg(OPDEF),
    FL_W,
])
.attrs(A::MODRM)
.flags(FlagOps::DIV);
const I_IDIV_EB: Insn = insn(M::Idiv, C::Arith, IS::I86, CF::None, 1, &[
    op(K::E, S::B, R),
    op(K::GprRax, S::W, RW).flg(OPDEF),
    FL_W,
])
.attrs(A::MODRM)
.flags(FlagOps::DIV);
const I_IDIV_EV: Insn = insn(M::Idiv, C::Arith, IS::I86, CF::None, 1, &[
    op(K::E, S::V, R),
    op(K::GprRdx, S::V, RW).flg(OPDEF),
    op(K::GprRax, S::V, RW).flg(OPDEF),
    FL_W,
])
.attrs(A::MODRM)
.flags(FlagOps::DIV);
static N_TEST_EB_IB: Node = Node::Leaf(&I_TEST_EB_IB);
static N_TEST_EV_IZ: Node = Node::Leaf(&I_TEST_EV_IZ);
static N_NOT_EB: Node = Node::Leaf(&I_NOT_EB);
static N_NOT_EV: Node = Node::Leaf(&I_NOT_EV);
static N_NEG_EB: Node = Node::Leaf(&I_NEG_EB);
static N_NEG_EV: Node = Node::Leaf(&I_NEG_EV);
static N_MUL_EB: Node = Node::Leaf(&I_MUL_EB);
static N_MUL_EV: Node = Node::Leaf(&I_MUL_EV);
static N_IMUL_EB: Node = Node::Leaf(&I_IMUL_EB);
static N_IMUL_EV: Node = Node::Leaf(&I_IMUL_EV);
static N_DIV_EB: Node = Node::Leaf(&I_DIV_EB);
static N_DIV_EV: Node = Node::Leaf(&I_DIV_EV);
static N_IDIV_EB: Node = Node::Leaf(&I_IDIV_EB);
static N_IDIV_EV: Node = Node::Leaf(&I_IDIV_EV);

static N_GROUP_F6: Node = Node::ModrmReg(&[
    Some(&N_TEST_EB_IB),
    Some(&N_TEST_EB_IB),
    Some(&N_NOT_EB),
    Some(&N_NEG_EB),
    Some(&N_MUL_EB),
    Some(&N_IMUL_EB),
    Some(&N_DIV_EB),
    Some(&N_IDIV_EB),
]);
static N_GROUP_F7: Node = Node::ModrmReg(&[
    Some(&N_TEST_EV_IZ),
    Some(&N_TEST_EV_IZ),
    Some(&N_NOT_EV),
    Some(&N_NEG_EV),
    Some(&N_MUL_EV),
    Some(&N_IMUL_EV),
    Some(&N_DIV_EV),
    Some(&N_IDIV_EV),
]);

// Groups 4/5 (FE/FF).
const I_INC_EB: Insn = insn(M::Inc, C::Arith, IS::I86, CF::None, 1, &[op(K::E, S::B, RW), FL_W])
    .attrs(A::MODRM)
    .prefixes(LOCKABLE)
    .flags(FlagOps::INCDEC);
const I_DEC_EB: Insn = insn(M::Dec, C::Arith, IS::I86, CF::None, 1, &[op(K::E, S::B, RW), FL_W])
    .attrs(A::MODRM)
    .prefixes(LOCKABLE)
    .flags(FlagOps::INCDEC);
const I_INC_EV: Insn = insn(M::Inc, C::Arith, IS::I86, CF::None, 1, &[op(K::E, S::V, RW), FL_W])
    .attrs(A::MODRM)
    .prefixes(LOCKABLE)
    .flags(FlagOps::INCDEC);
const I_DEC_EV: Insn = insn(M::Dec, C::Arith, IS::I86, CF::None, 1, &[op(K::E, S::V, RW), FL_W])
    .attrs(A::MODRM)
    .prefixes(LOCKABLE)
    .flags(FlagOps::INCDEC);
static N_INC_EB: Node = Node::Leaf(&I_INC_EB);
static N_DEC_EB: Node = Node::Leaf(&I_DEC_EB);
static N_INC_EV: Node = Node::Leaf(&I_INC_EV);
static N_DEC_EV: Node = Node::Leaf(&I_DEC_EV);

static N_GROUP_FE: Node = Node::ModrmReg(&[
    Some(&N_INC_EB),
    Some(&N_DEC_EB),
    None,
    None,
    None,
    None,
    None,
    None,
]);

const I_CALL_EV: Insn = insn(M::Call, C::Call, IS::I86, CF::None, 1, &[
    op(K::E, S::V, R),
    op(K::Rip, S::V, RW).flg(OPDEF),
    op(K::K, S::V, W).flg(OPDEF),
])
.attrs(A::MODRM.union(A::F64).union(A::CETT))
.prefixes(VP::BND.union(VP::DNT));
const I_CALLF_EP: Insn = insn(M::CallFar, C::Call, IS::I86, CF::None, 1, &[
    op(K::M, S::P, R),
    op(K::SegCs, S::W, RW).flg(OPDEF),
    op(K::Rip, S::V, RW).flg(OPDEF),
    op(K::K, S::V2, W).flg(OPDEF),
])
.attrs(A::MODRM.union(A::CETT));
const I_JMP_EV: Insn = insn(M::Jmp, C::UncondBr, IS::I86, CF::None, 1, &[
    op(K::E, S::V, R),
    op(K::Rip, S::V, W).flg(OPDEF),
])
.attrs(A::MODRM.union(A::F64).union(A::CETT))
.prefixes(VP::BND.union(VP::DNT));
const I_JMPF_EP: Insn = insn(M::JmpFar, C::UncondBr, IS::I86, CF::None, 1, &[
    op(K::M, S::P, R),
    op(K::SegCs, S::W, W).flg(OPDEF),
    op(K::Rip, S::V, W).flg(OPDEF),
])
.attrs(A::MODRM.union(A::CETT));
const I_PUSH_EV: Insn = insn(M::Push, C::Push, IS::I86, CF::None, 1, &[
    op(K::E, S::V, R),
    ST_PUSH,
])
.attrs(A::MODRM.union(A::D64));
static N_CALL_EV: Node = Node::Leaf(&I_CALL_EV);
static N_CALLF_EP: Node = Node::Leaf(&I_CALLF_EP);
static N_JMP_EV: Node = Node::Leaf(&I_JMP_EV);
static N_JMPF_EP: Node = Node::Leaf(&I_JMPF_EP);
static N_PUSH_EV: Node = Node::Leaf(&I_PUSH_EV);

static N_GROUP_FF: Node = Node::ModrmReg(&[
    Some(&N_INC_EV),
    Some(&N_DEC_EV),
    Some(&N_CALL_EV),
    Some(&N_CALLF_EP),
    Some(&N_JMP_EV),
    Some(&N_JMPF_EP),
    Some(&N_PUSH_EV),
    None,
]);

// ---------------------------------------------------------------------------
// x87 (D8/D9/DB/DD/DF).
// ---------------------------------------------------------------------------

const FPU_CMP: FpuFlags = FpuFlags {
    c0: crate::enums::FpuFlagAccess::Modified,
    c1: crate::enums::FpuFlagAccess::Undefined,
    c2: crate::enums::FpuFlagAccess::Modified,
    c3: crate::enums::FpuFlagAccess::Modified,
};

const OPS_X87_M32: &[OpSpec] = &[op(K::M, S::Fd, R), op(K::FpuSt0, S::Ft, RW).flg(OPDEF)];
const OPS_X87_ST: &[OpSpec] = &[
    op(K::FpuSt0, S::Ft, RW).flg(OPDEF),
    op(K::FpuStX, S::Ft, R),
];

const fn x87(m: M, ops: &'static [OpSpec]) -> Insn {
    insn(m, C::X87Alu, IS::X87, CF::Fpu, 2, ops)
        .attrs(A::MODRM)
        .fpu(FpuFlags::MODIFIED)
}

const I_FADD_M32: Insn = x87(M::Fadd, OPS_X87_M32);
const I_FMUL_M32: Insn = x87(M::Fmul, OPS_X87_M32);
const I_FCOM_M32: Insn = x87(M::Fcom, OPS_X87_M32).fpu(FPU_CMP);
const I_FCOMP_M32: Insn = x87(M::Fcomp, OPS_X87_M32).fpu(FPU_CMP);
const I_FSUB_M32: Insn = x87(M::Fsub, OPS_X87_M32);
const I_FSUBR_M32: Insn = x87(M::Fsubr, OPS_X87_M32);
const I_FDIV_M32: Insn = x87(M::Fdiv, OPS_X87_M32);
const I_FDIVR_M32: Insn = x87(M::Fdivr, OPS_X87_M32);
const I_FADD_ST: Insn = x87(M::Fadd, OPS_X87_ST);
const I_FMUL_ST: Insn = x87(M::Fmul, OPS_X87_ST);
const I_FCOM_ST: Insn = x87(M::Fcom, OPS_X87_ST).fpu(FPU_CMP);
const I_FCOMP_ST: Insn = x87(M::Fcomp, OPS_X87_ST).fpu(FPU_CMP);
const I_FSUB_ST: Insn = x87(M::Fsub, OPS_X87_ST);
const I_FSUBR_ST: Insn = x87(M::Fsubr, OPS_X87_ST);
const I_FDIV_ST: Insn = x87(M::Fdiv, OPS_X87_ST);
const I_FDIVR_ST: Insn = x87(M::Fdivr, OPS_X87_ST);
static N_FADD_M32: Node = Node::Leaf(&I_FADD_M32);
static N_FMUL_M32: Node = Node::Leaf(&I_FMUL_M32);
static N_FCOM_M32: Node = Node::Leaf(&I_FCOM_M32);
static N_FCOMP_M32: Node = Node::Leaf(&I_FCOMP_M32);
static N_FSUB_M32: Node = Node::Leaf(&I_FSUB_M32);
static N_FSUBR_M32: Node = Node::Leaf(&I_FSUBR_M32);
static N_FDIV_M32: Node = Node::Leaf(&I_FDIV_M32);
static N_FDIVR_M32: Node = Node::Leaf(&I_FDIVR_M32);
static N_FADD_ST: Node = Node::Leaf(&I_FADD_ST);
static N_FMUL_ST: Node = Node::Leaf(&I_FMUL_ST);
static N_FCOM_ST: Node = Node::Leaf(&I_FCOM_ST);
static N_FCOMP_ST: Node = Node::Leaf(&I_FCOMP_ST);
static N_FSUB_ST: Node = Node::Leaf(&I_FSUB_ST);
static N_FSUBR_ST: Node = Node::Leaf(&I_FSUBR_ST);
static N_FDIV_ST: Node = Node::Leaf(&I_FDIV_ST);
static N_FDIVR_ST: Node = Node::Leaf(&I_FDIVR_ST);

static N_D8_MEM: Node = Node::ModrmReg(&[
    Some(&N_FADD_M32),
    Some(&N_FMUL_M32),
    Some(&N_FCOM_M32),
    Some(&N_FCOMP_M32),
    Some(&N_FSUB_M32),
    Some(&N_FSUBR_M32),
    Some(&N_FDIV_M32),
    Some(&N_FDIVR_M32),
]);
static N_D8_REG: Node = Node::ModrmReg(&[
    Some(&N_FADD_ST),
    Some(&N_FMUL_ST),
    Some(&N_FCOM_ST),
    Some(&N_FCOMP_ST),
    Some(&N_FSUB_ST),
    Some(&N_FSUBR_ST),
    Some(&N_FDIV_ST),
    Some(&N_FDIVR_ST),
]);
static N_D8: Node = Node::ModrmMod(&[Some(&N_D8_MEM), Some(&N_D8_REG)]);

const I_FLD_M32: Insn = insn(M::Fld, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::Fd, R),
    op(K::FpuSt0, S::Ft, W).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FST_M32: Insn = insn(M::Fst, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::Fd, W),
    op(K::FpuSt0, S::Ft, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FSTP_M32: Insn = insn(M::Fstp, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::Fd, W),
    op(K::FpuSt0, S::Ft, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FLDENV: Insn = insn(M::Fldenv, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::Fe, R),
    op(K::X87Control, S::W, W).flg(OPDEF),
    op(K::X87Status, S::W, W).flg(OPDEF),
    op(K::X87Tag, S::W, W).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FLDCW: Insn = insn(M::Fldcw, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::W, R),
    op(K::X87Control, S::W, W).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FNSTENV: Insn = insn(M::Fnstenv, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::Fe, W),
    op(K::X87Control, S::W, R).flg(OPDEF),
    op(K::X87Status, S::W, R).flg(OPDEF),
    op(K::X87Tag, S::W, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FNSTCW: Insn = insn(M::Fnstcw, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::W, W),
    op(K::X87Control, S::W, R).flg(OPDEF),
])
.attrs(A::MODRM);
static N_FLD_M32: Node = Node::Leaf(&I_FLD_M32);
static N_FST_M32: Node = Node::Leaf(&I_FST_M32);
static N_FSTP_M32: Node = Node::Leaf(&I_FSTP_M32);
static N_FLDENV: Node = Node::Leaf(&I_FLDENV);
static N_FLDCW: Node = Node::Leaf(&I_FLDCW);
static N_FNSTENV: Node = Node::Leaf(&I_FNSTENV);
static N_FNSTCW: Node = Node::Leaf(&I_FNSTCW);

const I_FLD_ST: Insn = insn(M::Fld, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::FpuStX, S::Ft, R),
    op(K::FpuSt0, S::Ft, W).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FXCH: Insn = insn(M::Fxch, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::FpuStX, S::Ft, RW),
    op(K::FpuSt0, S::Ft, RW).flg(OPDEF),
])
.attrs(A::MODRM);
const OPS_X87_ST0: &[OpSpec] = &[op(K::FpuSt0, S::Ft, RW).flg(OPDEF)];
const fn x87_st0(m: M) -> Insn {
    insn(m, C::X87Alu, IS::X87, CF::Fpu, 0, OPS_X87_ST0)
        .attrs(A::MODRM)
        .fpu(FpuFlags::MODIFIED)
}
const I_FCHS: Insn = x87_st0(M::Fchs);
const I_FABS: Insn = x87_st0(M::Fabs);
const I_FTST: Insn = x87_st0(M::Ftst).fpu(FPU_CMP);
const I_FXAM: Insn = x87_st0(M::Fxam).fpu(FPU_CMP);
const I_FLD1: Insn = x87_st0(M::Fld1);
const I_FLDL2T: Insn = x87_st0(M::Fldl2t);
const I_FLDL2E: Insn = x87_st0(M::Fldl2e);
const I_FLDPI: Insn = x87_st0(M::Fldpi);
const I_FLDLG2: Insn = x87_st0(M::Fldlg2);
const I_FLDLN2: Insn = x87_st0(M::Fldln2);
const I_FLDZ: Insn = x87_st0(M::Fldz);
static N_FLD_ST: Node = Node::Leaf(&I_FLD_ST);
static N_FXCH: Node = Node::Leaf(&I_FXCH);
static N_FCHS: Node = Node::Leaf(&I_FCHS);
static N_FABS: Node = Node::Leaf(&I_FABS);
static N_FTST: Node = Node::Leaf(&I_FTST);
static N_FXAM: Node = Node::Leaf(&I_FXAM);
static N_FLD1: Node = Node::Leaf(&I_FLD1);
static N_FLDL2T: Node = Node::Leaf(&I_FLDL2T);
static N_FLDL2E: Node = Node::Leaf(&I_FLDL2E);
static N_FLDPI: Node = Node::Leaf(&I_FLDPI);
static N_FLDLG2: Node = Node::Leaf(&I_FLDLG2);
static N_FLDLN2: Node = Node::Leaf(&I_FLDLN2);
static N_FLDZ: Node = Node::Leaf(&I_FLDZ);

static N_D9_MEM: Node = Node::ModrmReg(&[
    Some(&N_FLD_M32),
    None,
    Some(&N_FST_M32),
    Some(&N_FSTP_M32),
    Some(&N_FLDENV),
    Some(&N_FLDCW),
    Some(&N_FNSTENV),
    Some(&N_FNSTCW),
]);
static N_D9_REG4: Node = Node::ModrmRm(&[
    Some(&N_FCHS),
    Some(&N_FABS),
    None,
    None,
    Some(&N_FTST),
    Some(&N_FXAM),
    None,
    None,
]);
static N_D9_REG5: Node = Node::ModrmRm(&[
    Some(&N_FLD1),
    Some(&N_FLDL2T),
    Some(&N_FLDL2E),
    Some(&N_FLDPI),
    Some(&N_FLDLG2),
    Some(&N_FLDLN2),
    Some(&N_FLDZ),
    None,
]);
static N_D9_REG: Node = Node::ModrmReg(&[
    Some(&N_FLD_ST),
    Some(&N_FXCH),
    None,
    None,
    Some(&N_D9_REG4),
    Some(&N_D9_REG5),
    None,
    None,
]);
static N_D9: Node = Node::ModrmMod(&[Some(&N_D9_MEM), Some(&N_D9_REG)]);

const I_FILD_M32: Insn = insn(M::Fild, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::D, R),
    op(K::FpuSt0, S::Ft, W).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FIST_M32: Insn = insn(M::Fist, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::D, W),
    op(K::FpuSt0, S::Ft, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FISTP_M32: Insn = insn(M::Fistp, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::D, W),
    op(K::FpuSt0, S::Ft, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FLD_M80: Insn = insn(M::Fld, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::Ft, R),
    op(K::FpuSt0, S::Ft, W).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FSTP_M80: Insn = insn(M::Fstp, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::Ft, W),
    op(K::FpuSt0, S::Ft, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FNCLEX: Insn = insn(M::Fnclex, C::X87Alu, IS::X87, CF::Fpu, 0, &[
    op(K::X87Status, S::W, RW).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FNINIT: Insn = insn(M::Fninit, C::X87Alu, IS::X87, CF::Fpu, 0, &[
    op(K::X87Control, S::W, W).flg(OPDEF),
    op(K::X87Status, S::W, W).flg(OPDEF),
    op(K::X87Tag, S::W, W).flg(OPDEF),
])
.attrs(A::MODRM);
static N_FILD_M32: Node = Node::Leaf(&I_FILD_M32);
static N_FIST_M32: Node = Node::Leaf(&I_FIST_M32);
static N_FISTP_M32: Node = Node::Leaf(&I_FISTP_M32);
static N_FLD_M80: Node = Node::Leaf(&I_FLD_M80);
static N_FSTP_M80: Node = Node::Leaf(&I_FSTP_M80);
static N_FNCLEX: Node = Node::Leaf(&I_FNCLEX);
static N_FNINIT: Node = Node::Leaf(&I_FNINIT);

static N_DB_MEM: Node = Node::ModrmReg(&[
    Some(&N_FILD_M32),
    None,
    Some(&N_FIST_M32),
    Some(&N_FISTP_M32),
    None,
    Some(&N_FLD_M80),
    None,
    Some(&N_FSTP_M80),
]);
static N_DB_REG4: Node = Node::ModrmRm(&[
    None,
    None,
    Some(&N_FNCLEX),
    Some(&N_FNINIT),
    None,
    None,
    None,
    None,
]);
static N_DB_REG: Node = Node::ModrmReg(&[
    None,
    None,
    None,
    None,
    Some(&N_DB_REG4),
    None,
    None,
    None,
]);
static N_DB: Node = Node::ModrmMod(&[Some(&N_DB_MEM), Some(&N_DB_REG)]);

const I_FLD_M64: Insn = insn(M::Fld, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::Fq, R),
    op(K::FpuSt0, S::Ft, W).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FST_M64: Insn = insn(M::Fst, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::Fq, W),
    op(K::FpuSt0, S::Ft, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FSTP_M64: Insn = insn(M::Fstp, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::Fq, W),
    op(K::FpuSt0, S::Ft, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FRSTOR: Insn = insn(M::Frstor, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::Fs, R),
])
.attrs(A::MODRM);
const I_FNSAVE: Insn = insn(M::Fnsave, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::Fs, W),
])
.attrs(A::MODRM);
const I_FNSTSW_M: Insn = insn(M::Fnstsw, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::W, W),
    op(K::X87Status, S::W, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FFREE: Insn = insn(M::Ffree, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::FpuStX, S::Ft, NA),
])
.attrs(A::MODRM);
const I_FST_ST: Insn = insn(M::Fst, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::FpuStX, S::Ft, W),
    op(K::FpuSt0, S::Ft, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FSTP_ST: Insn = insn(M::Fstp, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::FpuStX, S::Ft, W),
    op(K::FpuSt0, S::Ft, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FUCOM: Insn = insn(M::Fucom, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::FpuStX, S::Ft, R),
    op(K::FpuSt0, S::Ft, R).flg(OPDEF),
])
.attrs(A::MODRM)
.fpu(FPU_CMP);
const I_FUCOMP: Insn = insn(M::Fucomp, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::FpuStX, S::Ft, R),
    op(K::FpuSt0, S::Ft, R).flg(OPDEF),
])
.attrs(A::MODRM)
.fpu(FPU_CMP);
static N_FLD_M64: Node = Node::Leaf(&I_FLD_M64);
static N_FST_M64: Node = Node::Leaf(&I_FST_M64);
static N_FSTP_M64: Node = Node::Leaf(&I_FSTP_M64);
static N_FRSTOR: Node = Node::Leaf(&I_FRSTOR);
static N_FNSAVE: Node = Node::Leaf(&I_FNSAVE);
static N_FNSTSW_M: Node = Node::Leaf(&I_FNSTSW_M);
static N_FFREE: Node = Node::Leaf(&I_FFREE);
static N_FST_ST: Node = Node::Leaf(&I_FST_ST);
static N_FSTP_ST: Node = Node::Leaf(&I_FSTP_ST);
static N_FUCOM: Node = Node::Leaf(&I_FUCOM);
static N_FUCOMP: Node = Node::Leaf(&I_FUCOMP);

static N_DD_MEM: Node = Node::ModrmReg(&[
    Some(&N_FLD_M64),
    None,
    Some(&N_FST_M64),
    Some(&N_FSTP_M64),
    Some(&N_FRSTOR),
    None,
    Some(&N_FNSAVE),
    Some(&N_FNSTSW_M),
]);
static N_DD_REG: Node = Node::ModrmReg(&[
    Some(&N_FFREE),
    None,
    Some(&N_FST_ST),
    Some(&N_FSTP_ST),
    Some(&N_FUCOM),
    Some(&N_FUCOMP),
    None,
    None,
]);
static N_DD: Node = Node::ModrmMod(&[Some(&N_DD_MEM), Some(&N_DD_REG)]);

const I_FILD_M16: Insn = insn(M::Fild, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::W, R),
    op(K::FpuSt0, S::Ft, W).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FIST_M16: Insn = insn(M::Fist, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::W, W),
    op(K::FpuSt0, S::Ft, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FISTP_M16: Insn = insn(M::Fistp, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::W, W),
    op(K::FpuSt0, S::Ft, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FBLD: Insn = insn(M::Fbld, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::Fa, R),
    op(K::FpuSt0, S::Ft, W).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FILD_M64: Insn = insn(M::Fild, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::Q, R),
    op(K::FpuSt0, S::Ft, W).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FBSTP: Insn = insn(M::Fbstp, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::Fa, W),
    op(K::FpuSt0, S::Ft, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FISTP_M64: Insn = insn(M::Fistp, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::M, S::Q, W),
    op(K::FpuSt0, S::Ft, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_FNSTSW_AX: Insn = insn(M::Fnstsw, C::X87Alu, IS::X87, CF::Fpu, 1, &[
    op(K::GprRax, S::W, W),
    op(K::X87Status, S::W, R).flg(OPDEF),
])
.attrs(A::MODRM);
static N_FILD_M16: Node = Node::Leaf(&I_FILD_M16);
static N_FIST_M16: Node = Node::Leaf(&I_FIST_M16);
static N_FISTP_M16: Node = Node::Leaf(&I_FISTP_M16);
static N_FBLD: Node = Node::Leaf(&I_FBLD);
static N_FILD_M64: Node = Node::Leaf(&I_FILD_M64);
static N_FBSTP: Node = Node::Leaf(&I_FBSTP);
static N_FISTP_M64: Node = Node::Leaf(&I_FISTP_M64);
static N_FNSTSW_AX: Node = Node::Leaf(&I_FNSTSW_AX);

static N_DF_MEM: Node = Node::ModrmReg(&[
    Some(&N_FILD_M16),
    None,
    Some(&N_FIST_M16),
    Some(&N_FISTP_M16),
    Some(&N_FBLD),
    Some(&N_FILD_M64),
    Some(&N_FBSTP),
    Some(&N_FISTP_M64),
]);
static N_DF_REG4: Node = Node::ModrmRm(&[
    Some(&N_FNSTSW_AX),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
]);
static N_DF_REG: Node = Node::ModrmReg(&[
    None,
    None,
    None,
    None,
    Some(&N_DF_REG4),
    None,
    None,
    None,
]);
static N_DF: Node = Node::ModrmMod(&[Some(&N_DF_MEM), Some(&N_DF_REG)]);

// ---------------------------------------------------------------------------
// The one byte opcode map.
// ---------------------------------------------------------------------------

static MAP_MAIN: [Link; 256] = {
    let mut t: [Link; 256] = [None; 256];
    t[0x00] = Some(&N_ADD_EB_GB);
    t[0x01] = Some(&N_ADD_EV_GV);
    t[0x02] = Some(&N_ADD_GB_EB);
    t[0x03] = Some(&N_ADD_GV_EV);
    t[0x04] = Some(&N_ADD_AL_IB);
    t[0x05] = Some(&N_ADD_RAX_IZ);
    t[0x06] = Some(&N_PUSH_ES);
    t[0x07] = Some(&N_POP_ES);
    t[0x08] = Some(&N_OR_EB_GB);
    t[0x09] = Some(&N_OR_EV_GV);
    t[0x0A] = Some(&N_OR_GB_EB);
    t[0x0B] = Some(&N_OR_GV_EV);
    t[0x0C] = Some(&N_OR_AL_IB);
    t[0x0D] = Some(&N_OR_RAX_IZ);
    t[0x0E] = Some(&N_PUSH_CS);
    t[0x0F] = Some(&N_MAP_0F);
    t[0x10] = Some(&N_ADC_EB_GB);
    t[0x11] = Some(&N_ADC_EV_GV);
    t[0x12] = Some(&N_ADC_GB_EB);
    t[0x13] = Some(&N_ADC_GV_EV);
    t[0x14] = Some(&N_ADC_AL_IB);
    t[0x15] = Some(&N_ADC_RAX_IZ);
    t[0x16] = Some(&N_PUSH_SS);
    t[0x17] = Some(&N_POP_SS);
    t[0x18] = Some(&N_SBB_EB_GB);
    t[0x19] = Some(&N_SBB_EV_GV);
    t[0x1A] = Some(&N_SBB_GB_EB);
    t[0x1B] = Some(&N_SBB_GV_EV);
    t[0x1C] = Some(&N_SBB_AL_IB);
    t[0x1D] = Some(&N_SBB_RAX_IZ);
    t[0x1E] = Some(&N_PUSH_DS);
    t[0x1F] = Some(&N_POP_DS);
    t[0x20] = Some(&N_AND_EB_GB);
    t[0x21] = Some(&N_AND_EV_GV);
    t[0x22] = Some(&N_AND_GB_EB);
    t[0x23] = Some(&N_AND_GV_EV);
    t[0x24] = Some(&N_AND_AL_IB);
    t[0x25] = Some(&N_AND_RAX_IZ);
    t[0x27] = Some(&N_DAA);
    t[0x28] = Some(&N_SUB_EB_GB);
    t[0x29] = Some(&N_SUB_EV_GV);
    t[0x2A] = Some(&N_SUB_GB_EB);
    t[0x2B] = Some(&N_SUB_GV_EV);
    t[0x2C] = Some(&N_SUB_AL_IB);
    t[0x2D] = Some(&N_SUB_RAX_IZ);
    t[0x2F] = Some(&N_DAS);
    t[0x30] = Some(&N_XOR_EB_GB);
    t[0x31] = Some(&N_XOR_EV_GV);
    t[0x32] = Some(&N_XOR_GB_EB);
    t[0x33] = Some(&N_XOR_GV_EV);
    t[0x34] = Some(&N_XOR_AL_IB);
    t[0x35] = Some(&N_XOR_RAX_IZ);
    t[0x37] = Some(&N_AAA);
    t[0x38] = Some(&N_CMP_EB_GB);
    t[0x39] = Some(&N_CMP_EV_GV);
    t[0x3A] = Some(&N_CMP_GB_EB);
    t[0x3B] = Some(&N_CMP_GV_EV);
    t[0x3C] = Some(&N_CMP_AL_IB);
    t[0x3D] = Some(&N_CMP_RAX_IZ);
    t[0x3F] = Some(&N_AAS);
    // 40..4F are REX prefixes in long mode; the prefix resolver never lets
    // them reach the table there.
    let mut i = 0x40;
    while i < 0x48 {
        t[i] = Some(&N_INC_ZV);
        t[i + 8] = Some(&N_DEC_ZV);
        i += 1;
    }
    let mut i = 0x50;
    while i < 0x58 {
        t[i] = Some(&N_PUSH_ZV);
        t[i + 8] = Some(&N_POP_ZV);
        i += 1;
    }
    t[0x60] = Some(&N_PUSHA);
    t[0x61] = Some(&N_POPA);
    t[0x62] = Some(&N_BOUND);
    t[0x63] = Some(&N_63);
    t[0x68] = Some(&N_PUSH_IZ);
    t[0x69] = Some(&N_IMUL_GV_EV_IZ);
    t[0x6A] = Some(&N_PUSH_IB);
    t[0x6B] = Some(&N_IMUL_GV_EV_IB);
    t[0x6C] = Some(&N_INSB);
    t[0x6D] = Some(&N_INSD);
    t[0x6E] = Some(&N_OUTSB);
    t[0x6F] = Some(&N_OUTSD);
    t[0x70] = Some(&N_JO_JB);
    t[0x71] = Some(&N_JNO_JB);
    t[0x72] = Some(&N_JB_JB);
    t[0x73] = Some(&N_JNB_JB);
    t[0x74] = Some(&N_JZ_JB);
    t[0x75] = Some(&N_JNZ_JB);
    t[0x76] = Some(&N_JBE_JB);
    t[0x77] = Some(&N_JNBE_JB);
    t[0x78] = Some(&N_JS_JB);
    t[0x79] = Some(&N_JNS_JB);
    t[0x7A] = Some(&N_JP_JB);
    t[0x7B] = Some(&N_JNP_JB);
    t[0x7C] = Some(&N_JL_JB);
    t[0x7D] = Some(&N_JNL_JB);
    t[0x7E] = Some(&N_JLE_JB);
    t[0x7F] = Some(&N_JNLE_JB);
    t[0x80] = Some(&N_GROUP_80);
    t[0x81] = Some(&N_GROUP_81);
    t[0x82] = Some(&N_GROUP_82);
    t[0x83] = Some(&N_GROUP_83);
    t[0x84] = Some(&N_TEST_EB_GB);
    t[0x85] = Some(&N_TEST_EV_GV);
    t[0x86] = Some(&N_XCHG_EB_GB);
    t[0x87] = Some(&N_XCHG_EV_GV);
    t[0x88] = Some(&N_MOV_EB_GB);
    t[0x89] = Some(&N_MOV_EV_GV);
    t[0x8A] = Some(&N_MOV_GB_EB);
    t[0x8B] = Some(&N_MOV_GV_EV);
    t[0x8C] = Some(&N_MOV_EV_SW);
    t[0x8D] = Some(&N_LEA);
    t[0x8E] = Some(&N_MOV_SW_EW);
    t[0x8F] = Some(&N_GROUP_8F);
    t[0x90] = Some(&N_90);
    let mut i = 0x91;
    while i < 0x98 {
        t[i] = Some(&N_XCHG_ZV);
        i += 1;
    }
    t[0x98] = Some(&N_98);
    t[0x99] = Some(&N_99);
    t[0x9A] = Some(&N_CALLF_AP);
    t[0x9B] = Some(&N_WAIT);
    t[0x9C] = Some(&N_9C);
    t[0x9D] = Some(&N_9D);
    t[0x9E] = Some(&N_SAHF);
    t[0x9F] = Some(&N_LAHF);
    t[0xA0] = Some(&N_MOV_AL_OB);
    t[0xA1] = Some(&N_MOV_RAX_OV);
    t[0xA2] = Some(&N_MOV_OB_AL);
    t[0xA3] = Some(&N_MOV_OV_RAX);
    t[0xA4] = Some(&N_MOVSB);
    t[0xA5] = Some(&N_MOVSV);
    t[0xA6] = Some(&N_CMPSB);
    t[0xA7] = Some(&N_CMPSV);
    t[0xA8] = Some(&N_TEST_AL_IB);
    t[0xA9] = Some(&N_TEST_RAX_IZ);
    t[0xAA] = Some(&N_STOSB);
    t[0xAB] = Some(&N_STOSV);
    t[0xAC] = Some(&N_LODSB);
    t[0xAD] = Some(&N_LODSV);
    t[0xAE] = Some(&N_SCASB);
    t[0xAF] = Some(&N_SCASV);
    let mut i = 0xB0;
    while i < 0xB8 {
        t[i] = Some(&N_MOV_ZB_IB);
        t[i + 8] = Some(&N_MOV_ZV_IV);
        i += 1;
    }
    t[0xC0] = Some(&group_c0::NODE);
    t[0xC1] = Some(&group_c1::NODE);
    t[0xC2] = Some(&N_RET_IW);
    t[0xC3] = Some(&N_RET);
    t[0xC4] = Some(&N_LES);
    t[0xC5] = Some(&N_LDS);
    t[0xC6] = Some(&N_GROUP_C6);
    t[0xC7] = Some(&N_GROUP_C7);
    t[0xC8] = Some(&N_ENTER);
    t[0xC9] = Some(&N_LEAVE);
    t[0xCA] = Some(&N_RETF_IW);
    t[0xCB] = Some(&N_RETF);
    t[0xCC] = Some(&N_INT3);
    t[0xCD] = Some(&N_INT_IB);
    t[0xCE] = Some(&N_INTO);
    t[0xCF] = Some(&N_CF);
    t[0xD0] = Some(&group_d0::NODE);
    t[0xD1] = Some(&group_d1::NODE);
    t[0xD2] = Some(&group_d2::NODE);
    t[0xD3] = Some(&group_d3::NODE);
    t[0xD4] = Some(&N_AAM);
    t[0xD5] = Some(&N_AAD);
    t[0xD7] = Some(&N_XLAT);
    t[0xD8] = Some(&N_D8);
    t[0xD9] = Some(&N_D9);
    t[0xDB] = Some(&N_DB);
    t[0xDD] = Some(&N_DD);
    t[0xDF] = Some(&N_DF);
    t[0xE0] = Some(&N_LOOPNZ);
    t[0xE1] = Some(&N_LOOPZ);
    t[0xE2] = Some(&N_LOOP);
    t[0xE3] = Some(&N_E3);
    t[0xE4] = Some(&N_IN_AL_IB);
    t[0xE5] = Some(&N_IN_EAX_IB);
    t[0xE6] = Some(&N_OUT_IB_AL);
    t[0xE7] = Some(&N_OUT_IB_EAX);
    t[0xE8] = Some(&N_CALL_JZ);
    t[0xE9] = Some(&N_JMP_JZ);
    t[0xEA] = Some(&N_JMPF_AP);
    t[0xEB] = Some(&N_JMP_JB);
    t[0xEC] = Some(&N_IN_AL_DX);
    t[0xED] = Some(&N_IN_EAX_DX);
    t[0xEE] = Some(&N_OUT_DX_AL);
    t[0xEF] = Some(&N_OUT_DX_EAX);
    t[0xF1] = Some(&N_INT1);
    t[0xF4] = Some(&N_HLT);
    t[0xF5] = Some(&N_CMC);
    t[0xF6] = Some(&N_GROUP_F6);
    t[0xF7] = Some(&N_GROUP_F7);
    t[0xF8] = Some(&N_CLC);
    t[0xF9] = Some(&N_STC);
    t[0xFA] = Some(&N_CLI);
    t[0xFB] = Some(&N_STI);
    t[0xFC] = Some(&N_CLD);
    t[0xFD] = Some(&N_STD);
    t[0xFE] = Some(&N_GROUP_FE);
    t[0xFF] = Some(&N_GROUP_FF);
    t
};

/// The root of the legacy forest.
pub(crate) static ROOT_LEGACY: Node = Node::Opcode(&MAP_MAIN);

// ---------------------------------------------------------------------------
// 0F map: system opcodes.
// ---------------------------------------------------------------------------

const I_SLDT: Insn = insn(M::Sldt, C::System, IS::I286, CF::None, 1, &[
    op(K::E, S::V, W),
    op(K::Ldtr, S::W, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_STR: Insn = insn(M::Str, C::System, IS::I286, CF::None, 1, &[
    op(K::E, S::V, W),
    op(K::SysTr, S::W, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_LLDT: Insn = insn(M::Lldt, C::System, IS::I286, CF::None, 1, &[
    op(K::E, S::W, R),
    op(K::Ldtr, S::W, W).flg(OPDEF),
])
.attrs(A::MODRM);
const I_LTR: Insn = insn(M::Ltr, C::System, IS::I286, CF::None, 1, &[
    op(K::E, S::W, R),
    op(K::SysTr, S::W, W).flg(OPDEF),
])
.attrs(A::MODRM);
const I_VERR: Insn = insn(M::Verr, C::System, IS::I286, CF::None, 1, &[
    op(K::E, S::W, R),
    FL_W,
])
.attrs(A::MODRM)
.flags(FlagOps {
    modified: CpuFlags::ZF,
    ..FlagOps::NONE
});
const I_VERW: Insn = insn(M::Verw, C::System, IS::I286, CF::None, 1, &[
    op(K::E, S::W, R),
    FL_W,
])
.attrs(A::MODRM)
.flags(FlagOps {
    modified: CpuFlags::ZF,
    ..FlagOps::NONE
});
static N_SLDT: Node = Node::Leaf(&I_SLDT);
static N_STR: Node = Node::Leaf(&I_STR);
static N_LLDT: Node = Node::Leaf(&I_LLDT);
static N_LTR: Node = Node::Leaf(&I_LTR);
static N_VERR: Node = Node::Leaf(&I_VERR);
static N_VERW: Node = Node::Leaf(&I_VERW);

static N_GROUP_0F00: Node = Node::ModrmReg(&[
    Some(&N_SLDT),
    Some(&N_STR),
    Some(&N_LLDT),
    Some(&N_LTR),
    Some(&N_VERR),
    Some(&N_VERW),
    None,
    None,
]);

const I_SGDT: Insn = insn(M::Sgdt, C::System, IS::I286, CF::None, 1, &[
    op(K::M, S::S, W),
    op(K::Gdtr, S::S, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_SIDT: Insn = insn(M::Sidt, C::System, IS::I286, CF::None, 1, &[
    op(K::M, S::S, W),
    op(K::Idtr, S::S, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_LGDT: Insn = insn(M::Lgdt, C::System, IS::I286, CF::None, 1, &[
    op(K::M, S::S, R),
    op(K::Gdtr, S::S, W).flg(OPDEF),
])
.attrs(A::MODRM);
const I_LIDT: Insn = insn(M::Lidt, C::System, IS::I286, CF::None, 1, &[
    op(K::M, S::S, R),
    op(K::Idtr, S::S, W).flg(OPDEF),
])
.attrs(A::MODRM);
const I_SMSW: Insn = insn(M::Smsw, C::System, IS::I286, CF::None, 1, &[
    op(K::E, S::V, W),
    op(K::Cr0, S::Yf, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_LMSW: Insn = insn(M::Lmsw, C::System, IS::I286, CF::None, 1, &[
    op(K::E, S::W, R),
    op(K::Cr0, S::Yf, W).flg(OPDEF),
])
.attrs(A::MODRM);
const I_INVLPG: Insn = insn(M::Invlpg, C::System, IS::I486, CF::None, 1, &[
    op(K::M, S::B, NA),
])
.attrs(A::MODRM);
const I_SWAPGS: Insn = insn(M::Swapgs, C::System, IS::LongMode, CF::None, 0, &[
    op(K::SegGs, S::W, RW).flg(OPDEF),
])
.attrs(A::MODRM.union(A::O64));
const I_RDTSCP: Insn = insn(M::Rdtscp, C::System, IS::Rdtscp, CF::Rdtscp, 0, &[
    op(K::Tsc, S::Q, R).flg(OPDEF),
    op(K::TscAux, S::Q, R).flg(OPDEF),
    op(K::GprRax, S::D, W).flg(OPDEF),
    op(K::GprRdx, S::D, W).flg(OPDEF),
    op(K::GprRcx, S::D, W).flg(OPDEF),
])
.attrs(A::MODRM);
static N_SGDT: Node = Node::Leaf(&I_SGDT);
static N_SIDT: Node = Node::Leaf(&I_SIDT);
static N_LGDT: Node = Node::Leaf(&I_LGDT);
static N_LIDT: Node = Node::Leaf(&I_LIDT);
static N_SMSW: Node = Node::Leaf(&I_SMSW);
static N_LMSW: Node = Node::Leaf(&I_LMSW);
static N_INVLPG: Node = Node::Leaf(&I_INVLPG);
static N_SWAPGS: Node = Node::Leaf(&I_SWAPGS);
static N_RDTSCP: Node = Node::Leaf(&I_RDTSCP);

static N_0F01_MEM: Node = Node::ModrmReg(&[
    Some(&N_SGDT),
    Some(&N_SIDT),
    Some(&N_LGDT),
    Some(&N_LIDT),
    Some(&N_SMSW),
    None,
    Some(&N_LMSW),
    Some(&N_INVLPG),
]);
static N_0F01_REG7: Node = Node::ModrmRm(&[
    Some(&N_SWAPGS),
    Some(&N_RDTSCP),
    None,
    None,
    None,
    None,
    None,
    None,
]);
static N_0F01_REG: Node = Node::ModrmReg(&[
    None,
    None,
    Some(&N_0F01_REG2),
    None,
    Some(&N_SMSW),
    Some(&N_0F01_REG5),
    Some(&N_LMSW),
    Some(&N_0F01_REG7),
]);
static N_0F01: Node = Node::ModrmMod(&[Some(&N_0F01_MEM), Some(&N_0F01_REG)]);

const I_LAR: Insn = insn(M::Lar, C::System, IS::I286, CF::None, 2, &[
    op(K::G, S::V, W),
    op(K::E, S::W, R),
    FL_W,
])
.attrs(A::MODRM)
.flags(FlagOps {
    modified: CpuFlags::ZF,
    ..FlagOps::NONE
});
const I_LSL: Insn = insn(M::Lsl, C::System, IS::I286, CF::None, 2, &[
    op(K::G, S::V, W),
    op(K::E, S::W, R),
    FL_W,
])
.attrs(A::MODRM)
.flags(FlagOps {
    modified: CpuFlags::ZF,
    ..FlagOps::NONE
});
static N_LAR: Node = Node::Leaf(&I_LAR);
static N_LSL: Node = Node::Leaf(&I_LSL);

const I_SYSCALL: Insn = insn(M::Syscall, C::System, IS::LongMode, CF::None, 0, &[
    op(K::GprRcx, S::Q, W).flg(OPDEF),
    op(K::GprR11, S::Q, W).flg(OPDEF),
    op(K::Msr, S::Q, R).flg(OPDEF),
    op(K::Rip, S::Q, RW).flg(OPDEF),
    FL_W,
])
.attrs(A::O64);
const I_SYSRET: Insn = insn(M::Sysret, C::System, IS::LongMode, CF::None, 0, &[
    op(K::GprRcx, S::Q, R).flg(OPDEF),
    op(K::GprR11, S::Q, R).flg(OPDEF),
    op(K::Msr, S::Q, R).flg(OPDEF),
    op(K::Rip, S::Q, W).flg(OPDEF),
    FL_W,
])
.attrs(A::O64);
const I_CLTS: Insn = insn(M::Clts, C::System, IS::I286, CF::None, 0, &[
    op(K::Cr0, S::Yf, RW).flg(OPDEF),
]);
const I_INVD: Insn = insn(M::Invd, C::System, IS::I486, CF::None, 0, &[]);
const I_WBINVD: Insn = insn(M::Wbinvd, C::System, IS::I486, CF::None, 0, &[]);
const I_UD2: Insn = insn(M::Ud2, C::Misc, IS::PentiumPro, CF::None, 0, &[]);
static N_SYSCALL: Node = Node::Leaf(&I_SYSCALL);
static N_SYSRET: Node = Node::Leaf(&I_SYSRET);
static N_CLTS: Node = Node::Leaf(&I_CLTS);
static N_INVD: Node = Node::Leaf(&I_INVD);
static N_WBINVD: Node = Node::Leaf(&I_WBINVD);
static N_UD2: Node = Node::Leaf(&I_UD2);

const I_PREFETCH: Insn = insn(M::Prefetch, C::Prefetch, IS::_3dnow, CF::_3dnow, 1, &[
    op(K::M, S::B, OperandAccess::PREFETCH),
])
.attrs(A::MODRM);
const I_PREFETCHW: Insn = insn(M::Prefetchw, C::Prefetch, IS::_3dnow, CF::_3dnow, 1, &[
    op(K::M, S::B, OperandAccess::PREFETCH),
])
.attrs(A::MODRM);
static N_PREFETCH: Node = Node::Leaf(&I_PREFETCH);
static N_PREFETCHW: Node = Node::Leaf(&I_PREFETCHW);

static N_GROUP_0F0D: Node = Node::ModrmReg(&[
    Some(&N_PREFETCH),
    Some(&N_PREFETCHW),
    None,
    None,
    None,
    None,
    None,
    None,
]);

const I_FEMMS: Insn = insn(M::Femms, C::Mmx, IS::_3dnow, CF::_3dnow, 0, &[]);
static N_FEMMS: Node = Node::Leaf(&I_FEMMS);

// ---------------------------------------------------------------------------
// 0F map: SSE moves and arithmetic.
// ---------------------------------------------------------------------------

const SSE_PFX: VP = VP::empty();

const fn sse2(m: M, cpuid: CF, ops: &'static [OpSpec]) -> Insn {
    insn(m, C::Sse, IS::Sse2, cpuid, 2, ops)
        .attrs(A::MODRM)
        .prefixes(SSE_PFX)
        .exc(XC::SseAvx, XT::T4)
}

const OPS_V_W_PS: &[OpSpec] = &[op(K::V, S::Ps, W), op(K::W, S::Ps, R)];
const OPS_W_V_PS: &[OpSpec] = &[op(K::W, S::Ps, W), op(K::V, S::Ps, R)];
const OPS_V_VW_PS: &[OpSpec] = &[op(K::V, S::Ps, RW), op(K::W, S::Ps, R)];
const OPS_V_VW_PD: &[OpSpec] = &[op(K::V, S::Pd, RW), op(K::W, S::Pd, R)];
const OPS_V_VW_SS: &[OpSpec] = &[op(K::V, S::Ss, RW), op(K::W, S::Ss, R)];
const OPS_V_VW_SD: &[OpSpec] = &[op(K::V, S::Sd, RW), op(K::W, S::Sd, R)];

const I_MOVUPS: Insn = sse2(M::Movups, CF::Sse, OPS_V_W_PS);
const I_MOVUPS_ST: Insn = sse2(M::Movups, CF::Sse, OPS_W_V_PS);
const I_MOVUPD: Insn = sse2(M::Movupd, CF::Sse2, OPS_V_W_PS);
const I_MOVUPD_ST: Insn = sse2(M::Movupd, CF::Sse2, OPS_W_V_PS);
const I_MOVSS: Insn = sse2(M::Movss, CF::Sse, &[op(K::V, S::Dq, W), op(K::W, S::Ss, R)]);
const I_MOVSS_ST: Insn = sse2(M::Movss, CF::Sse, &[op(K::W, S::Ss, W), op(K::V, S::Ss, R)]);
const I_MOVSD: Insn = sse2(M::Movsd, CF::Sse2, &[op(K::V, S::Dq, W), op(K::W, S::Sd, R)]);
const I_MOVSD_ST: Insn = sse2(M::Movsd, CF::Sse2, &[op(K::W, S::Sd, W), op(K::V, S::Sd, R)]);
static N_MOVUPS: Node = Node::Leaf(&I_MOVUPS);
static N_MOVUPS_ST: Node = Node::Leaf(&I_MOVUPS_ST);
static N_MOVUPD: Node = Node::Leaf(&I_MOVUPD);
static N_MOVUPD_ST: Node = Node::Leaf(&I_MOVUPD_ST);
static N_MOVSS: Node = Node::Leaf(&I_MOVSS);
static N_MOVSS_ST: Node = Node::Leaf(&I_MOVSS_ST);
static N_MOVSD: Node = Node::Leaf(&I_MOVSD);
static N_MOVSD_ST: Node = Node::Leaf(&I_MOVSD_ST);

static N_0F10: Node = Node::Prefix(&[
    Some(&N_MOVUPS),
    Some(&N_MOVUPD),
    Some(&N_MOVSD),
    Some(&N_MOVSS),
]);
static N_0F11: Node = Node::Prefix(&[
    Some(&N_MOVUPS_ST),
    Some(&N_MOVUPD_ST),
    Some(&N_MOVSD_ST),
    Some(&N_MOVSS_ST),
]);

const I_MOVLPS: Insn = sse2(M::Movlps, CF::Sse, &[op(K::V, S::Q, W), op(K::M, S::Q, R)]);
const I_MOVHLPS: Insn = sse2(M::Movhlps, CF::Sse, &[op(K::V, S::Q, W), op(K::U, S::Dq, R)]);
const I_MOVLPD: Insn = sse2(M::Movlpd, CF::Sse2, &[op(K::V, S::Q, W), op(K::M, S::Q, R)]);
const I_MOVDDUP: Insn = sse2(M::Movddup, CF::Sse3, &[op(K::V, S::Pd, W), op(K::W, S::Sd, R)]);
const I_MOVSLDUP: Insn = sse2(M::Movsldup, CF::Sse3, OPS_V_W_PS);
const I_MOVLPS_ST: Insn = sse2(M::Movlps, CF::Sse, &[op(K::M, S::Q, W), op(K::V, S::Q, R)]);
const I_MOVLPD_ST: Insn = sse2(M::Movlpd, CF::Sse2, &[op(K::M, S::Q, W), op(K::V, S::Q, R)]);
static N_MOVLPS: Node = Node::Leaf(&I_MOVLPS);
static N_MOVHLPS: Node = Node::Leaf(&I_MOVHLPS);
static N_MOVLPD: Node = Node::Leaf(&I_MOVLPD);
static N_MOVDDUP: Node = Node::Leaf(&I_MOVDDUP);
static N_MOVSLDUP: Node = Node::Leaf(&I_MOVSLDUP);
static N_MOVLPS_ST: Node = Node::Leaf(&I_MOVLPS_ST);
static N_MOVLPD_ST: Node = Node::Leaf(&I_MOVLPD_ST);

static N_0F12_NP: Node = Node::ModrmMod(&[Some(&N_MOVLPS), Some(&N_MOVHLPS)]);
static N_0F12: Node = Node::Prefix(&[
    Some(&N_0F12_NP),
    Some(&N_MOVLPD),
    Some(&N_MOVDDUP),
    Some(&N_MOVSLDUP),
]);
static N_0F13: Node = Node::Prefix(&[
    Some(&N_MOVLPS_ST),
    Some(&N_MOVLPD_ST),
    None,
    None,
]);

const I_UNPCKLPS: Insn = sse2(M::Unpcklps, CF::Sse, OPS_V_VW_PS);
const I_UNPCKLPD: Insn = sse2(M::Unpcklpd, CF::Sse2, OPS_V_VW_PD);
const I_UNPCKHPS: Insn = sse2(M::Unpckhps, CF::Sse, OPS_V_VW_PS);
const I_UNPCKHPD: Insn = sse2(M::Unpckhpd, CF::Sse2, OPS_V_VW_PD);
static N_UNPCKLPS: Node = Node::Leaf(&I_UNPCKLPS);
static N_UNPCKLPD: Node = Node::Leaf(&I_UNPCKLPD);
static N_UNPCKHPS: Node = Node::Leaf(&I_UNPCKHPS);
static N_UNPCKHPD: Node = Node::Leaf(&I_UNPCKHPD);

static N_0F14: Node = Node::Prefix(&[Some(&N_UNPCKLPS), Some(&N_UNPCKLPD), None, None]);
static N_0F15: Node = Node::Prefix(&[Some(&N_UNPCKHPS), Some(&N_UNPCKHPD), None, None]);

const I_MOVHPS: Insn = sse2(M::Movhps, CF::Sse, &[op(K::V, S::Q, W), op(K::M, S::Q, R)]);
const I_MOVLHPS: Insn = sse2(M::Movlhps, CF::Sse, &[op(K::V, S::Q, W), op(K::U, S::Dq, R)]);
const I_MOVHPD: Insn = sse2(M::Movhpd, CF::Sse2, &[op(K::V, S::Q, W), op(K::M, S::Q, R)]);
const I_MOVSHDUP: Insn = sse2(M::Movshdup, CF::Sse3, OPS_V_W_PS);
const I_MOVHPS_ST: Insn = sse2(M::Movhps, CF::Sse, &[op(K::M, S::Q, W), op(K::V, S::Q, R)]);
const I_MOVHPD_ST: Insn = sse2(M::Movhpd, CF::Sse2, &[op(K::M, S::Q, W), op(K::V, S::Q, R)]);
static N_MOVHPS: Node = Node::Leaf(&I_MOVHPS);
static N_MOVLHPS: Node = Node::Leaf(&I_MOVLHPS);
static N_MOVHPD: Node = Node::Leaf(&I_MOVHPD);
static N_MOVSHDUP: Node = Node::Leaf(&I_MOVSHDUP);
static N_MOVHPS_ST: Node = Node::Leaf(&I_MOVHPS_ST);
static N_MOVHPD_ST: Node = Node::Leaf(&I_MOVHPD_ST);

static N_0F16_NP: Node = Node::ModrmMod(&[Some(&N_MOVHPS), Some(&N_MOVLHPS)]);
static N_0F16: Node = Node::Prefix(&[
    Some(&N_0F16_NP),
    Some(&N_MOVHPD),
    None,
    Some(&N_MOVSHDUP),
]);
static N_0F17: Node = Node::Prefix(&[
    Some(&N_MOVHPS_ST),
    Some(&N_MOVHPD_ST),
    None,
    None,
]);

// Hint group 16: prefetches with memory, wide NOPs otherwise.
const I_PREFETCHNTA: Insn = insn(M::Prefetchnta, C::Prefetch, IS::Sse, CF::Sse, 1, &[
    op(K::M, S::B, OperandAccess::PREFETCH),
])
.attrs(A::MODRM);
const I_PREFETCHT0: Insn = insn(M::Prefetcht0, C::Prefetch, IS::Sse, CF::Sse, 1, &[
    op(K::M, S::B, OperandAccess::PREFETCH),
])
.attrs(A::MODRM);
const I_PREFETCHT1: Insn = insn(M::Prefetcht1, C::Prefetch, IS::Sse, CF::Sse, 1, &[
    op(K::M, S::B, OperandAccess::PREFETCH),
])
.attrs(A::MODRM);
const I_PREFETCHT2: Insn = insn(M::Prefetcht2, C::Prefetch, IS::Sse, CF::Sse, 1, &[
    op(K::M, S::B, OperandAccess::PREFETCH),
])
.attrs(A::MODRM);
const I_NOP_EV: Insn = insn(M::Nop, C::WideNop, IS::PentiumPro, CF::None, 1, &[
    op(K::E, S::V, NA),
])
.attrs(A::MODRM);
static N_PREFETCHNTA: Node = Node::Leaf(&I_PREFETCHNTA);
static N_PREFETCHT0: Node = Node::Leaf(&I_PREFETCHT0);
static N_PREFETCHT1: Node = Node::Leaf(&I_PREFETCHT1);
static N_PREFETCHT2: Node = Node::Leaf(&I_PREFETCHT2);
static N_NOP_EV: Node = Node::Leaf(&I_NOP_EV);

static N_0F18_MEM: Node = Node::ModrmReg(&[
    Some(&N_PREFETCHNTA),
    Some(&N_PREFETCHT0),
    Some(&N_PREFETCHT1),
    Some(&N_PREFETCHT2),
    Some(&N_NOP_EV),
    Some(&N_NOP_EV),
    Some(&N_NOP_EV),
    Some(&N_NOP_EV),
]);
static N_0F18: Node = Node::ModrmMod(&[Some(&N_0F18_MEM), Some(&N_NOP_EV)]);

// MPX (0F 1A/1B). Without the feature these bytes stay wide NOPs.
const I_BNDLDX: Insn = insn(M::Bndldx, C::Mpx, IS::Mpx, CF::Mpx, 2, &[
    op(K::Rb, S::Mib, W),
    op(K::M, S::Mib, R),
])
.attrs(A::MODRM.union(A::MIB).union(A::AG).union(A::NO_RIP_REL).union(A::NOA16));
const I_BNDMOV_LD: Insn = insn(M::Bndmov, C::Mpx, IS::Mpx, CF::Mpx, 2, &[
    op(K::Rb, S::L, W),
    op(K::Mb, S::L, R),
])
.attrs(A::MODRM.union(A::NOA16));
const I_BNDCL: Insn = insn(M::Bndcl, C::Mpx, IS::Mpx, CF::Mpx, 2, &[
    op(K::Rb, S::L, R),
    op(K::E, S::Y, R),
])
.attrs(A::MODRM.union(A::AG).union(A::NOA16));
const I_BNDCU: Insn = insn(M::Bndcu, C::Mpx, IS::Mpx, CF::Mpx, 2, &[
    op(K::Rb, S::L, R),
    op(K::E, S::Y, R),
])
.attrs(A::MODRM.union(A::AG).union(A::NOA16));
const I_BNDSTX: Insn = insn(M::Bndstx, C::Mpx, IS::Mpx, CF::Mpx, 2, &[
    op(K::M, S::Mib, W),
    op(K::Rb, S::Mib, R),
])
.attrs(A::MODRM.union(A::MIB).union(A::AG).union(A::NO_RIP_REL).union(A::NOA16));
const I_BNDMOV_ST: Insn = insn(M::Bndmov, C::Mpx, IS::Mpx, CF::Mpx, 2, &[
    op(K::Mb, S::L, W),
    op(K::Rb, S::L, R),
])
.attrs(A::MODRM.union(A::NOA16));
const I_BNDMK: Insn = insn(M::Bndmk, C::Mpx, IS::Mpx, CF::Mpx, 2, &[
    op(K::Rb, S::L, W),
    op(K::M, S::Y, R),
])
.attrs(A::MODRM.union(A::AG).union(A::NO_RIP_REL).union(A::NOA16));
const I_BNDCN: Insn = insn(M::Bndcn, C::Mpx, IS::Mpx, CF::Mpx, 2, &[
    op(K::Rb, S::L, R),
    op(K::E, S::Y, R),
])
.attrs(A::MODRM.union(A::AG).union(A::NOA16));
static N_BNDLDX: Node = Node::Leaf(&I_BNDLDX);
static N_BNDMOV_LD: Node = Node::Leaf(&I_BNDMOV_LD);
static N_BNDCL: Node = Node::Leaf(&I_BNDCL);
static N_BNDCU: Node = Node::Leaf(&I_BNDCU);
static N_BNDSTX: Node = Node::Leaf(&I_BNDSTX);
static N_BNDMOV_ST: Node = Node::Leaf(&I_BNDMOV_ST);
static N_BNDMK: Node = Node::Leaf(&I_BNDMK);
static N_BNDCN: Node = Node::Leaf(&I_BNDCN);

static N_0F1A_MPX: Node = Node::Prefix(&[
    Some(&N_BNDLDX),
    Some(&N_BNDMOV_LD),
    Some(&N_BNDCU),
    Some(&N_BNDCL),
]);
static N_0F1B_MPX: Node = Node::Prefix(&[
    Some(&N_BNDSTX),
    Some(&N_BNDMOV_ST),
    Some(&N_BNDCN),
    Some(&N_BNDMK),
]);
static N_0F1A: Node = Node::Feature(&[Some(&N_NOP_EV), Some(&N_0F1A_MPX), None, None]);
static N_0F1B: Node = Node::Feature(&[Some(&N_NOP_EV), Some(&N_0F1B_MPX), None, None]);

// CLDEMOTE (0F 1C /0).
const I_CLDEMOTE: Insn = insn(M::Cldemote, C::Misc, IS::Cldemote, CF::Cldemote, 1, &[
    op(K::M, S::Cl, OperandAccess::PREFETCH),
])
.attrs(A::MODRM);
static N_CLDEMOTE: Node = Node::Leaf(&I_CLDEMOTE);

static N_0F1C_CLD: Node = Node::ModrmReg(&[
    Some(&N_CLDEMOTE),
    Some(&N_NOP_EV),
    Some(&N_NOP_EV),
    Some(&N_NOP_EV),
    Some(&N_NOP_EV),
    Some(&N_NOP_EV),
    Some(&N_NOP_EV),
    Some(&N_NOP_EV),
]);
static N_0F1C: Node = Node::Feature(&[Some(&N_NOP_EV), None, None, Some(&N_0F1C_CLD)]);

// CET (F3 0F 1E): RDSSP and the ENDBR markers.
const I_RDSSPD: Insn = insn(M::Rdsspd, C::Cet, IS::CetSs, CF::CetSs, 1, &[
    op(K::R, S::Y, W),
    op(K::Ssp, S::Ssz, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_RDSSPQ: Insn = insn(M::Rdsspq, C::Cet, IS::CetSs, CF::CetSs, 1, &[
    op(K::R, S::Y, W),
    op(K::Ssp, S::Ssz, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_ENDBR64: Insn = insn(M::Endbr64, C::Cet, IS::CetIbt, CF::CetIbt, 0, &[])
    .attrs(A::MODRM);
const I_ENDBR32: Insn = insn(M::Endbr32, C::Cet, IS::CetIbt, CF::CetIbt, 0, &[])
    .attrs(A::MODRM);
static N_RDSSPD: Node = Node::Leaf(&I_RDSSPD);
static N_RDSSPQ: Node = Node::Leaf(&I_RDSSPQ);
static N_ENDBR64: Node = Node::Leaf(&I_ENDBR64);
static N_ENDBR32: Node = Node::Leaf(&I_ENDBR32);

static N_RDSSP: Node = Node::Aux(&[
    Some(&N_RDSSPD),
    None,
    Some(&N_RDSSPQ),
    None,
    None,
    None,
]);
static N_0F1E_REG7: Node = Node::ModrmRm(&[
    None,
    None,
    Some(&N_ENDBR64),
    Some(&N_ENDBR32),
    None,
    None,
    None,
    None,
]);
static N_0F1E_CET_REG: Node = Node::ModrmReg(&[
    None,
    Some(&N_RDSSP),
    None,
    None,
    None,
    None,
    None,
    Some(&N_0F1E_REG7),
]);
static N_0F1E_CET: Node = Node::ModrmMod(&[None, Some(&N_0F1E_CET_REG)]);
static N_0F1E_F3: Node = Node::Feature(&[Some(&N_NOP_EV), None, Some(&N_0F1E_CET), None]);
static N_0F1E: Node = Node::Prefix(&[
    Some(&N_NOP_EV),
    Some(&N_NOP_EV),
    Some(&N_NOP_EV),
    Some(&N_0F1E_F3),
]);

// ---------------------------------------------------------------------------
// 0F map: control/debug/test register moves, MSR and TSC access.
// ---------------------------------------------------------------------------

const I_MOV_R_CR: Insn = insn(M::Mov, C::System, IS::I386, CF::None, 2, &[
    op(K::R, S::Yf, W),
    op(K::C, S::Yf, R),
])
.attrs(A::MODRM.union(A::MFR));
const I_MOV_R_DR: Insn = insn(M::Mov, C::System, IS::I386, CF::None, 2, &[
    op(K::R, S::Yf, W),
    op(K::D, S::Yf, R),
])
.attrs(A::MODRM.union(A::MFR));
const I_MOV_CR_R: Insn = insn(M::Mov, C::System, IS::I386, CF::None, 2, &[
    op(K::C, S::Yf, W),
    op(K::R, S::Yf, R),
])
.attrs(A::MODRM.union(A::MFR).union(A::LOCK_SPECIAL))
.prefixes(VP::LOCK);
const I_MOV_DR_R: Insn = insn(M::Mov, C::System, IS::I386, CF::None, 2, &[
    op(K::D, S::Yf, W),
    op(K::R, S::Yf, R),
])
.attrs(A::MODRM.union(A::MFR));
const I_MOV_R_TR: Insn = insn(M::Mov, C::System, IS::I486, CF::None, 2, &[
    op(K::R, S::Yf, W),
    op(K::T, S::Yf, R),
])
.attrs(A::MODRM.union(A::MFR));
const I_MOV_TR_R: Insn = insn(M::Mov, C::System, IS::I486, CF::None, 2, &[
    op(K::T, S::Yf, W),
    op(K::R, S::Yf, R),
])
.attrs(A::MODRM.union(A::MFR));
static N_MOV_R_CR: Node = Node::Leaf(&I_MOV_R_CR);
static N_MOV_R_DR: Node = Node::Leaf(&I_MOV_R_DR);
static N_MOV_CR_R: Node = Node::Leaf(&I_MOV_CR_R);
static N_MOV_DR_R: Node = Node::Leaf(&I_MOV_DR_R);
static N_MOV_R_TR: Node = Node::Leaf(&I_MOV_R_TR);
static N_MOV_TR_R: Node = Node::Leaf(&I_MOV_TR_R);

const I_WRMSR: Insn = insn(M::Wrmsr, C::System, IS::Pentium, CF::Msr, 0, &[
    op(K::Msr, S::Q, W).flg(OPDEF),
    op(K::GprRcx, S::D, R).flg(OPDEF),
    op(K::GprRax, S::D, R).flg(OPDEF),
    op(K::GprRdx, S::D, R).flg(OPDEF),
]);
const I_RDMSR: Insn = insn(M::Rdmsr, C::System, IS::Pentium, CF::Msr, 0, &[
    op(K::Msr, S::Q, R).flg(OPDEF),
    op(K::GprRcx, S::D, R).flg(OPDEF),
    op(K::GprRax, S::D, W).flg(OPDEF),
    op(K::GprRdx, S::D, W).flg(OPDEF),
]);
const I_RDTSC: Insn = insn(M::Rdtsc, C::System, IS::Pentium, CF::Tsc, 0, &[
    op(K::Tsc, S::Q, R).flg(OPDEF),
    op(K::GprRax, S::D, W).flg(OPDEF),
    op(K::GprRdx, S::D, W).flg(OPDEF),
]);
const I_RDPMC: Insn = insn(M::Rdpmc, C::System, IS::Pentium, CF::None, 0, &[
    op(K::GprRcx, S::D, R).flg(OPDEF),
    op(K::GprRax, S::D, W).flg(OPDEF),
    op(K::GprRdx, S::D, W).flg(OPDEF),
]);
const I_SYSENTER: Insn = insn(M::Sysenter, C::System, IS::PentiumPro, CF::None, 0, &[
    op(K::Msr, S::Q, R).flg(OPDEF),
    op(K::Rip, S::Yf, W).flg(OPDEF),
    op(K::SegCs, S::W, W).flg(OPDEF),
    FL_W,
]);
const I_SYSEXIT: Insn = insn(M::Sysexit, C::System, IS::PentiumPro, CF::None, 0, &[
    op(K::Msr, S::Q, R).flg(OPDEF),
    op(K::Rip, S::Yf, W).flg(OPDEF),
    op(K::SegCs, S::W, W).flg(OPDEF),
]);
static N_WRMSR: Node = Node::Leaf(&I_WRMSR);
static N_RDMSR: Node = Node::Leaf(&I_RDMSR);
static N_RDTSC: Node = Node::Leaf(&I_RDTSC);
static N_RDPMC: Node = Node::Leaf(&I_RDPMC);
static N_SYSENTER: Node = Node::Leaf(&I_SYSENTER);
static N_SYSEXIT: Node = Node::Leaf(&I_SYSEXIT);

// ---------------------------------------------------------------------------
// 0F map: CMOVcc, SETcc, near Jcc.
// ---------------------------------------------------------------------------

const OPS_CMOV: &[OpSpec] = &[op(K::G, S::V, CW), op(K::E, S::V, R), FL_R];

const fn cmov(m: M, tested: CpuFlags) -> Insn {
    insn(m, C::Cmov, IS::PentiumPro, CF::Cmov, 2, OPS_CMOV)
        .attrs(A::MODRM)
        .flags(FlagOps::tested(tested))
}

const I_CMOVO: Insn = cmov(M::Cmovo, cc::O);
const I_CMOVNO: Insn = cmov(M::Cmovno, cc::O);
const I_CMOVB: Insn = cmov(M::Cmovb, cc::B);
const I_CMOVNB: Insn = cmov(M::Cmovnb, cc::B);
const I_CMOVZ: Insn = cmov(M::Cmovz, cc::Z);
const I_CMOVNZ: Insn = cmov(M::Cmovnz, cc::Z);
const I_CMOVBE: Insn = cmov(M::Cmovbe, cc::BE);
const I_CMOVNBE: Insn = cmov(M::Cmovnbe, cc::BE);
const I_CMOVS: Insn = cmov(M::Cmovs, cc::S);
const I_CMOVNS: Insn = cmov(M::Cmovns, cc::S);
const I_CMOVP: Insn = cmov(M::Cmovp, cc::P);
const I_CMOVNP: Insn = cmov(M::Cmovnp, cc::P);
const I_CMOVL: Insn = cmov(M::Cmovl, cc::L);
const I_CMOVNL: Insn = cmov(M::Cmovnl, cc::L);
const I_CMOVLE: Insn = cmov(M::Cmovle, cc::LE);
const I_CMOVNLE: Insn = cmov(M::Cmovnle, cc::LE);
static N_CMOVO: Node = Node::Leaf(&I_CMOVO);
static N_CMOVNO: Node = Node::Leaf(&I_CMOVNO);
static N_CMOVB: Node = Node::Leaf(&I_CMOVB);
static N_CMOVNB: Node = Node::Leaf(&I_CMOVNB);
static N_CMOVZ: Node = Node::Leaf(&I_CMOVZ);
static N_CMOVNZ: Node = Node::Leaf(&I_CMOVNZ);
static N_CMOVBE: Node = Node::Leaf(&I_CMOVBE);
static N_CMOVNBE: Node = Node::Leaf(&I_CMOVNBE);
static N_CMOVS: Node = Node::Leaf(&I_CMOVS);
static N_CMOVNS: Node = Node::Leaf(&I_CMOVNS);
static N_CMOVP: Node = Node::Leaf(&I_CMOVP);
static N_CMOVNP: Node = Node::Leaf(&I_CMOVNP);
static N_CMOVL: Node = Node::Leaf(&I_CMOVL);
static N_CMOVNL: Node = Node::Leaf(&I_CMOVNL);
static N_CMOVLE: Node = Node::Leaf(&I_CMOVLE);
static N_CMOVNLE: Node = Node::Leaf(&I_CMOVNLE);

const OPS_JCC_Z: &[OpSpec] = &[op(K::J, S::Z, R), op(K::Rip, S::V, RCW).flg(OPDEF)];

const fn jcc_near(m: M, tested: CpuFlags) -> Insn {
    insn(m, C::CondBr, IS::I386, CF::None, 1, OPS_JCC_Z)
        .attrs(A::D64)
        .prefixes(VP::BHINT.union(VP::BND))
        .flags(FlagOps::tested(tested))
}

const I_JO_JZ: Insn = jcc_near(M::Jo, cc::O);
const I_JNO_JZ: Insn = jcc_near(M::Jno, cc::O);
const I_JB_JZ: Insn = jcc_near(M::Jb, cc::B);
const I_JNB_JZ: Insn = jcc_near(M::Jnb, cc::B);
const I_JZ_JZ: Insn = jcc_near(M::Jz, cc::Z);
const I_JNZ_JZ: Insn = jcc_near(M::Jnz, cc::Z);
const I_JBE_JZ: Insn = jcc_near(M::Jbe, cc::BE);
const I_JNBE_JZ: Insn = jcc_near(M::Jnbe, cc::BE);
const I_JS_JZ: Insn = jcc_near(M::Js, cc::S);
const I_JNS_JZ: Insn = jcc_near(M::Jns, cc::S);
const I_JP_JZ: Insn = jcc_near(M::Jp, cc::P);
const I_JNP_JZ: Insn = jcc_near(M::Jnp, cc::P);
const I_JL_JZ: Insn = jcc_near(M::Jl, cc::L);
const I_JNL_JZ: Insn = jcc_near(M::Jnl, cc::L);
const I_JLE_JZ: Insn = jcc_near(M::Jle, cc::LE);
const I_JNLE_JZ: Insn = jcc_near(M::Jnle, cc::LE);
static N_JO_JZ: Node = Node::Leaf(&I_JO_JZ);
static N_JNO_JZ: Node = Node::Leaf(&I_JNO_JZ);
static N_JB_JZ: Node = Node::Leaf(&I_JB_JZ);
static N_JNB_JZ: Node = Node::Leaf(&I_JNB_JZ);
static N_JZ_JZ: Node = Node::Leaf(&I_JZ_JZ);
static N_JNZ_JZ: Node = Node::Leaf(&I_JNZ_JZ);
static N_JBE_JZ: Node = Node::Leaf(&I_JBE_JZ);
static N_JNBE_JZ: Node = Node::Leaf(&I_JNBE_JZ);
static N_JS_JZ: Node = Node::Leaf(&I_JS_JZ);
static N_JNS_JZ: Node = Node::Leaf(&I_JNS_JZ);
static N_JP_JZ: Node = Node::Leaf(&I_JP_JZ);
static N_JNP_JZ: Node = Node::Leaf(&I_JNP_JZ);
static N_JL_JZ: Node = Node::Leaf(&I_JL_JZ);
static N_JNL_JZ: Node = Node::Leaf(&I_JNL_JZ);
static N_JLE_JZ: Node = Node::Leaf(&I_JLE_JZ);
static N_JNLE_JZ: Node = Node::Leaf(&I_JNLE_JZ);

const OPS_SETCC: &[OpSpec] = &[op(K::E, S::B, W), FL_R];

const fn setcc(m: M, tested: CpuFlags) -> Insn {
    insn(m, C::Bitbyte, IS::I386, CF::None, 1, OPS_SETCC)
        .attrs(A::MODRM)
        .flags(FlagOps::tested(tested))
}

const I_SETO: Insn = setcc(M::Seto, cc::O);
const I_SETNO: Insn = setcc(M::Setno, cc::O);
const I_SETB: Insn = setcc(M::Setb, cc::B);
const I_SETNB: Insn = setcc(M::Setnb, cc::B);
const I_SETZ: Insn = setcc(M::Setz, cc::Z);
const I_SETNZ: Insn = setcc(M::Setnz, cc::Z);
const I_SETBE: Insn = setcc(M::Setbe, cc::BE);
const I_SETNBE: Insn = setcc(M::Setnbe, cc::BE);
const I_SETS: Insn = setcc(M::Sets, cc::S);
const I_SETNS: Insn = setcc(M::Setns, cc::S);
const I_SETP: Insn = setcc(M::Setp, cc::P);
const I_SETNP: Insn = setcc(M::Setnp, cc::P);
const I_SETL: Insn = setcc(M::Setl, cc::L);
const I_SETNL: Insn = setcc(M::Setnl, cc::L);
const I_SETLE: Insn = setcc(M::Setle, cc::LE);
const I_SETNLE: Insn = setcc(M::Setnle, cc::LE);
static N_SETO: Node = Node::Leaf(&I_SETO);
static N_SETNO: Node = Node::Leaf(&I_SETNO);
static N_SETB: Node = Node::Leaf(&I_SETB);
static N_SETNB: Node = Node::Leaf(&I_SETNB);
static N_SETZ: Node = Node::Leaf(&I_SETZ);
static N_SETNZ: Node = Node::Leaf(&I_SETNZ);
static N_SETBE: Node = Node::Leaf(&I_SETBE);
static N_SETNBE: Node = Node::Leaf(&I_SETNBE);
static N_SETS: Node = Node::Leaf(&I_SETS);
static N_SETNS: Node = Node::Leaf(&I_SETNS);
static N_SETP: Node = Node::Leaf(&I_SETP);
static N_SETNP: Node = Node::Leaf(&I_SETNP);
static N_SETL: Node = Node::Leaf(&I_SETL);
static N_SETNL: Node = Node::Leaf(&I_SETNL);
static N_SETLE: Node = Node::Leaf(&I_SETLE);
static N_SETNLE: Node = Node::Leaf(&I_SETNLE);

// ---------------------------------------------------------------------------
// 0F map: SSE arithmetic, conversions and integer SIMD.
// ---------------------------------------------------------------------------

const I_MOVMSKPS: Insn = sse2(M::Movmskps, CF::Sse, &[op(K::G, S::Y, W), op(K::U, S::Ps, R)]);
const I_MOVMSKPD: Insn = sse2(M::Movmskpd, CF::Sse2, &[op(K::G, S::Y, W), op(K::U, S::Pd, R)]);
static N_MOVMSKPS: Node = Node::Leaf(&I_MOVMSKPS);
static N_MOVMSKPD: Node = Node::Leaf(&I_MOVMSKPD);
static N_0F50: Node = Node::Prefix(&[Some(&N_MOVMSKPS), Some(&N_MOVMSKPD), None, None]);

const I_SQRTPS: Insn = sse2(M::Sqrtps, CF::Sse, OPS_V_W_PS);
const I_SQRTPD: Insn = sse2(M::Sqrtpd, CF::Sse2, &[op(K::V, S::Pd, W), op(K::W, S::Pd, R)]);
const I_SQRTSS: Insn = sse2(M::Sqrtss, CF::Sse, &[op(K::V, S::Ss, W), op(K::W, S::Ss, R)]);
const I_SQRTSD: Insn = sse2(M::Sqrtsd, CF::Sse2, &[op(K::V, S::Sd, W), op(K::W, S::Sd, R)]);
static N_SQRTPS: Node = Node::Leaf(&I_SQRTPS);
static N_SQRTPD: Node = Node::Leaf(&I_SQRTPD);
static N_SQRTSS: Node = Node::Leaf(&I_SQRTSS);
static N_SQRTSD: Node = Node::Leaf(&I_SQRTSD);
static N_0F51: Node = Node::Prefix(&[
    Some(&N_SQRTPS),
    Some(&N_SQRTPD),
    Some(&N_SQRTSD),
    Some(&N_SQRTSS),
]);

const I_ANDPS: Insn = sse2(M::Andps, CF::Sse, OPS_V_VW_PS);
const I_ANDPD: Insn = sse2(M::Andpd, CF::Sse2, OPS_V_VW_PD);
const I_ANDNPS: Insn = sse2(M::Andnps, CF::Sse, OPS_V_VW_PS);
const I_ANDNPD: Insn = sse2(M::Andnpd, CF::Sse2, OPS_V_VW_PD);
const I_ORPS: Insn = sse2(M::Orps, CF::Sse, OPS_V_VW_PS);
const I_ORPD: Insn = sse2(M::Orpd, CF::Sse2, OPS_V_VW_PD);
const I_XORPS: Insn = sse2(M::Xorps, CF::Sse, OPS_V_VW_PS);
const I_XORPD: Insn = sse2(M::Xorpd, CF::Sse2, OPS_V_VW_PD);
static N_ANDPS: Node = Node::Leaf(&I_ANDPS);
static N_ANDPD: Node = Node::Leaf(&I_ANDPD);
static N_ANDNPS: Node = Node::Leaf(&I_ANDNPS);
static N_ANDNPD: Node = Node::Leaf(&I_ANDNPD);
static N_ORPS: Node = Node::Leaf(&I_ORPS);
static N_ORPD: Node = Node::Leaf(&I_ORPD);
static N_XORPS: Node = Node::Leaf(&I_XORPS);
static N_XORPD: Node = Node::Leaf(&I_XORPD);
static N_0F54: Node = Node::Prefix(&[Some(&N_ANDPS), Some(&N_ANDPD), None, None]);
static N_0F55: Node = Node::Prefix(&[Some(&N_ANDNPS), Some(&N_ANDNPD), None, None]);
static N_0F56: Node = Node::Prefix(&[Some(&N_ORPS), Some(&N_ORPD), None, None]);
static N_0F57: Node = Node::Prefix(&[Some(&N_XORPS), Some(&N_XORPD), None, None]);

macro_rules! sse_arith {
    ($pfx:ident, $ps:ident, $pd:ident, $ss:ident, $sd:ident, $node:ident) => {
        mod $pfx {
            use super::*;

            const I_PS: Insn = sse2(M::$ps, CF::Sse, OPS_V_VW_PS);
            const I_PD: Insn = sse2(M::$pd, CF::Sse2, OPS_V_VW_PD);
            const I_SS: Insn = sse2(M::$ss, CF::Sse, OPS_V_VW_SS);
            const I_SD: Insn = sse2(M::$sd, CF::Sse2, OPS_V_VW_SD);
            pub(super) static PS: Node = Node::Leaf(&I_PS);
            pub(super) static PD: Node = Node::Leaf(&I_PD);
            pub(super) static SS: Node = Node::Leaf(&I_SS);
            pub(super) static SD: Node = Node::Leaf(&I_SD);
        }
        static $node: Node = Node::Prefix(&[
            Some(&$pfx::PS),
            Some(&$pfx::PD),
            Some(&$pfx::SD),
            Some(&$pfx::SS),
        ]);
    };
}

sse_arith!(n_0f58, Addps, Addpd, Addss, Addsd, N_0F58);
sse_arith!(n_0f59, Mulps, Mulpd, Mulss, Mulsd, N_0F59);
sse_arith!(n_0f5c, Subps, Subpd, Subss, Subsd, N_0F5C);
sse_arith!(n_0f5d, Minps, Minpd, Minss, Minsd, N_0F5D);
sse_arith!(n_0f5e, Divps, Divpd, Divss, Divsd, N_0F5E);
sse_arith!(n_0f5f, Maxps, Maxpd, Maxss, Maxsd, N_0F5F);

const I_UCOMISS: Insn = sse2(M::Ucomiss, CF::Sse, &[
    op(K::V, S::Ss, R),
    op(K::W, S::Ss, R),
    FL_W,
])
.flags(FlagOps::COMIS);
const I_UCOMISD: Insn = sse2(M::Ucomisd, CF::Sse2, &[
    op(K::V, S::Sd, R),
    op(K::W, S::Sd, R),
    FL_W,
])
.flags(FlagOps::COMIS);
const I_COMISS: Insn = sse2(M::Comiss, CF::Sse, &[
    op(K::V, S::Ss, R),
    op(K::W, S::Ss, R),
    FL_W,
])
.flags(FlagOps::COMIS);
const I_COMISD: Insn = sse2(M::Comisd, CF::Sse2, &[
    op(K::V, S::Sd, R),
    op(K::W, S::Sd, R),
    FL_W,
])
.flags(FlagOps::COMIS);
static N_UCOMISS: Node = Node::Leaf(&I_UCOMISS);
static N_UCOMISD: Node = Node::Leaf(&I_UCOMISD);
static N_COMISS: Node = Node::Leaf(&I_COMISS);
static N_COMISD: Node = Node::Leaf(&I_COMISD);
static N_0F2E: Node = Node::Prefix(&[Some(&N_UCOMISS), Some(&N_UCOMISD), None, None]);
static N_0F2F: Node = Node::Prefix(&[Some(&N_COMISS), Some(&N_COMISD), None, None]);

const I_MOVAPS: Insn = sse2(M::Movaps, CF::Sse, OPS_V_W_PS);
const I_MOVAPS_ST: Insn = sse2(M::Movaps, CF::Sse, OPS_W_V_PS);
const I_MOVAPD: Insn = sse2(M::Movapd, CF::Sse2, OPS_V_W_PS);
const I_MOVAPD_ST: Insn = sse2(M::Movapd, CF::Sse2, OPS_W_V_PS);
static N_MOVAPS: Node = Node::Leaf(&I_MOVAPS);
static N_MOVAPS_ST: Node = Node::Leaf(&I_MOVAPS_ST);
static N_MOVAPD: Node = Node::Leaf(&I_MOVAPD);
static N_MOVAPD_ST: Node = Node::Leaf(&I_MOVAPD_ST);
static N_0F28: Node = Node::Prefix(&[Some(&N_MOVAPS), Some(&N_MOVAPD), None, None]);
static N_0F29: Node = Node::Prefix(&[Some(&N_MOVAPS_ST), Some(&N_MOVAPD_ST), None, None]);

const I_CVTPI2PS: Insn = sse2(M::Cvtpi2ps, CF::Sse, &[op(K::V, S::Dq, W), op(K::Q, S::Q, R)]);
const I_CVTPI2PD: Insn = sse2(M::Cvtpi2pd, CF::Sse2, &[op(K::V, S::Dq, W), op(K::Q, S::Q, R)]);
const I_CVTSI2SS: Insn = sse2(M::Cvtsi2ss, CF::Sse, &[op(K::V, S::Dq, W), op(K::E, S::Y, R)]);
const I_CVTSI2SD: Insn = sse2(M::Cvtsi2sd, CF::Sse2, &[op(K::V, S::Dq, W), op(K::E, S::Y, R)]);
static N_CVTPI2PS: Node = Node::Leaf(&I_CVTPI2PS);
static N_CVTPI2PD: Node = Node::Leaf(&I_CVTPI2PD);
static N_CVTSI2SS: Node = Node::Leaf(&I_CVTSI2SS);
static N_CVTSI2SD: Node = Node::Leaf(&I_CVTSI2SD);
static N_0F2A: Node = Node::Prefix(&[
    Some(&N_CVTPI2PS),
    Some(&N_CVTPI2PD),
    Some(&N_CVTSI2SD),
    Some(&N_CVTSI2SS),
]);

const I_MOVNTPS: Insn = sse2(M::Movntps, CF::Sse, &[op(K::M, S::Ps, W), op(K::V, S::Ps, R)]);
const I_MOVNTPD: Insn = sse2(M::Movntpd, CF::Sse2, &[op(K::M, S::Pd, W), op(K::V, S::Pd, R)]);
static N_MOVNTPS: Node = Node::Leaf(&I_MOVNTPS);
static N_MOVNTPD: Node = Node::Leaf(&I_MOVNTPD);
static N_0F2B: Node = Node::Prefix(&[Some(&N_MOVNTPS), Some(&N_MOVNTPD), None, None]);

const I_CVTTPS2PI: Insn = sse2(M::Cvttps2pi, CF::Sse, &[op(K::P, S::Q, W), op(K::W, S::Q, R)]);
const I_CVTTPD2PI: Insn = sse2(M::Cvttpd2pi, CF::Sse2, &[op(K::P, S::Q, W), op(K::W, S::Dq, R)]);
const I_CVTTSS2SI: Insn = sse2(M::Cvttss2si, CF::Sse, &[op(K::G, S::Y, W), op(K::W, S::Ss, R)]);
const I_CVTTSD2SI: Insn = sse2(M::Cvttsd2si, CF::Sse2, &[op(K::G, S::Y, W), op(K::W, S::Sd, R)]);
static N_CVTTPS2PI: Node = Node::Leaf(&I_CVTTPS2PI);
static N_CVTTPD2PI: Node = Node::Leaf(&I_CVTTPD2PI);
static N_CVTTSS2SI: Node = Node::Leaf(&I_CVTTSS2SI);
static N_CVTTSD2SI: Node = Node::Leaf(&I_CVTTSD2SI);
static N_0F2C: Node = Node::Prefix(&[
    Some(&N_CVTTPS2PI),
    Some(&N_CVTTPD2PI),
    Some(&N_CVTTSD2SI),
    Some(&N_CVTTSS2SI),
]);

const I_CVTPS2PI: Insn = sse2(M::Cvtps2pi, CF::Sse, &[op(K::P, S::Q, W), op(K::W, S::Q, R)]);
const I_CVTPD2PI: Insn = sse2(M::Cvtpd2pi, CF::Sse2, &[op(K::P, S::Q, W), op(K::W, S::Dq, R)]);
const I_CVTSS2SI: Insn = sse2(M::Cvtss2si, CF::Sse, &[op(K::G, S::Y, W), op(K::W, S::Ss, R)]);
const I_CVTSD2SI: Insn = sse2(M::Cvtsd2si, CF::Sse2, &[op(K::G, S::Y, W), op(K::W, S::Sd, R)]);
static N_CVTPS2PI: Node = Node::Leaf(&I_CVTPS2PI);
static N_CVTPD2PI: Node = Node::Leaf(&I_CVTPD2PI);
static N_CVTSS2SI: Node = Node::Leaf(&I_CVTSS2SI);
static N_CVTSD2SI: Node = Node::Leaf(&I_CVTSD2SI);
static N_0F2D: Node = Node::Prefix(&[
    Some(&N_CVTPS2PI),
    Some(&N_CVTPD2PI),
    Some(&N_CVTSD2SI),
    Some(&N_CVTSS2SI),
]);

const I_CVTDQ2PS: Insn = sse2(M::Cvtdq2ps, CF::Sse2, OPS_V_W_PS);
const I_CVTPS2DQ: Insn = sse2(M::Cvtps2dq, CF::Sse2, OPS_V_W_PS);
const I_CVTTPS2DQ: Insn = sse2(M::Cvttps2dq, CF::Sse2, OPS_V_W_PS);
static N_CVTDQ2PS: Node = Node::Leaf(&I_CVTDQ2PS);
static N_CVTPS2DQ: Node = Node::Leaf(&I_CVTPS2DQ);
static N_CVTTPS2DQ: Node = Node::Leaf(&I_CVTTPS2DQ);
static N_0F5B: Node = Node::Prefix(&[
    Some(&N_CVTDQ2PS),
    Some(&N_CVTPS2DQ),
    None,
    Some(&N_CVTTPS2DQ),
]);

const fn mmx(m: M, ops: &'static [OpSpec]) -> Insn {
    insn(m, C::Mmx, IS::Mmx, CF::Mmx, 2, ops).attrs(A::MODRM)
}

const OPS_P_Q: &[OpSpec] = &[op(K::P, S::Q, RW), op(K::Q, S::Q, R)];
const OPS_V_W_X: &[OpSpec] = &[op(K::V, S::X, RW), op(K::W, S::X, R)];

const I_PUNPCKLBW_MMX: Insn = mmx(M::Punpcklbw, &[op(K::P, S::Q, RW), op(K::Q, S::D, R)]);
const I_PUNPCKLBW: Insn = sse2(M::Punpcklbw, CF::Sse2, OPS_V_W_X);
const I_PCMPEQB_MMX: Insn = mmx(M::Pcmpeqb, OPS_P_Q);
const I_PCMPEQB: Insn = sse2(M::Pcmpeqb, CF::Sse2, OPS_V_W_X);
const I_PCMPEQW_MMX: Insn = mmx(M::Pcmpeqw, OPS_P_Q);
const I_PCMPEQW: Insn = sse2(M::Pcmpeqw, CF::Sse2, OPS_V_W_X);
const I_PCMPEQD_MMX: Insn = mmx(M::Pcmpeqd, OPS_P_Q);
const I_PCMPEQD: Insn = sse2(M::Pcmpeqd, CF::Sse2, OPS_V_W_X);
const I_PXOR_MMX: Insn = mmx(M::Pxor, OPS_P_Q);
const I_PXOR: Insn = sse2(M::Pxor, CF::Sse2, OPS_V_W_X);
const I_PADDD_MMX: Insn = mmx(M::Paddd, OPS_P_Q);
const I_PADDD: Insn = sse2(M::Paddd, CF::Sse2, OPS_V_W_X);
static N_PUNPCKLBW_MMX: Node = Node::Leaf(&I_PUNPCKLBW_MMX);
static N_PUNPCKLBW: Node = Node::Leaf(&I_PUNPCKLBW);
static N_PCMPEQB_MMX: Node = Node::Leaf(&I_PCMPEQB_MMX);
static N_PCMPEQB: Node = Node::Leaf(&I_PCMPEQB);
static N_PCMPEQW_MMX: Node = Node::Leaf(&I_PCMPEQW_MMX);
static N_PCMPEQW: Node = Node::Leaf(&I_PCMPEQW);
static N_PCMPEQD_MMX: Node = Node::Leaf(&I_PCMPEQD_MMX);
static N_PCMPEQD: Node = Node::Leaf(&I_PCMPEQD);
static N_PXOR_MMX: Node = Node::Leaf(&I_PXOR_MMX);
static N_PXOR: Node = Node::Leaf(&I_PXOR);
static N_PADDD_MMX: Node = Node::Leaf(&I_PADDD_MMX);
static N_PADDD: Node = Node::Leaf(&I_PADDD);
static N_0F60: Node = Node::Prefix(&[Some(&N_PUNPCKLBW_MMX), Some(&N_PUNPCKLBW), None, None]);
static N_0F74: Node = Node::Prefix(&[Some(&N_PCMPEQB_MMX), Some(&N_PCMPEQB), None, None]);
static N_0F75: Node = Node::Prefix(&[Some(&N_PCMPEQW_MMX), Some(&N_PCMPEQW), None, None]);
static N_0F76: Node = Node::Prefix(&[Some(&N_PCMPEQD_MMX), Some(&N_PCMPEQD), None, None]);
static N_0FEF: Node = Node::Prefix(&[Some(&N_PXOR_MMX), Some(&N_PXOR), None, None]);
static N_0FFE: Node = Node::Prefix(&[Some(&N_PADDD_MMX), Some(&N_PADDD), None, None]);

const I_EMMS: Insn = insn(M::Emms, C::Mmx, IS::Mmx, CF::Mmx, 0, &[]);
static N_EMMS: Node = Node::Leaf(&I_EMMS);

// MOVD/MOVQ between GPRs and MMX/XMM registers; REX.W widens.
const I_MOVD_P_E: Insn = mmx(M::Movd, &[op(K::P, S::Q, W), op(K::E, S::D, R)]);
const I_MOVQ_P_E: Insn = mmx(M::Movq, &[op(K::P, S::Q, W), op(K::E, S::Q, R)]);
const I_MOVD_V_E: Insn = sse2(M::Movd, CF::Sse2, &[op(K::V, S::Dq, W), op(K::E, S::D, R)]);
const I_MOVQ_V_E: Insn = sse2(M::Movq, CF::Sse2, &[op(K::V, S::Dq, W), op(K::E, S::Q, R)]);
const I_MOVD_E_P: Insn = mmx(M::Movd, &[op(K::E, S::D, W), op(K::P, S::Q, R)]);
const I_MOVQ_E_P: Insn = mmx(M::Movq, &[op(K::E, S::Q, W), op(K::P, S::Q, R)]);
const I_MOVD_E_V: Insn = sse2(M::Movd, CF::Sse2, &[op(K::E, S::D, W), op(K::V, S::Dq, R)]);
const I_MOVQ_E_V: Insn = sse2(M::Movq, CF::Sse2, &[op(K::E, S::Q, W), op(K::V, S::Dq, R)]);
const I_MOVQ_V_W: Insn = sse2(M::Movq, CF::Sse2, &[op(K::V, S::Dq, W), op(K::W, S::Q, R)]);
const I_MOVQ_W_V: Insn = sse2(M::Movq, CF::Sse2, &[op(K::W, S::Q, W), op(K::V, S::Q, R)]);
static N_MOVD_P_E: Node = Node::Leaf(&I_MOVD_P_E);
static N_MOVQ_P_E: Node = Node::Leaf(&I_MOVQ_P_E);
static N_MOVD_V_E: Node = Node::Leaf(&I_MOVD_V_E);
static N_MOVQ_V_E: Node = Node::Leaf(&I_MOVQ_V_E);
static N_MOVD_E_P: Node = Node::Leaf(&I_MOVD_E_P);
static N_MOVQ_E_P: Node = Node::Leaf(&I_MOVQ_E_P);
static N_MOVD_E_V: Node = Node::Leaf(&I_MOVD_E_V);
static N_MOVQ_E_V: Node = Node::Leaf(&I_MOVQ_E_V);
static N_MOVQ_V_W: Node = Node::Leaf(&I_MOVQ_V_W);
static N_MOVQ_W_V: Node = Node::Leaf(&I_MOVQ_W_V);
static N_0FD6: Node = Node::Prefix(&[
    None,
    Some(&N_MOVQ_W_V),
    Some(&N_MOVDQ2Q),
    Some(&N_MOVQ2DQ),
]);

static N_0F6E_NP: Node = Node::Aux(&[
    Some(&N_MOVD_P_E),
    None,
    Some(&N_MOVQ_P_E),
    None,
    None,
    None,
]);
static N_0F6E_66: Node = Node::Aux(&[
    Some(&N_MOVD_V_E),
    None,
    Some(&N_MOVQ_V_E),
    None,
    None,
    None,
]);
static N_0F6E: Node = Node::Prefix(&[Some(&N_0F6E_NP), Some(&N_0F6E_66), None, None]);

static N_0F7E_NP: Node = Node::Aux(&[
    Some(&N_MOVD_E_P),
    None,
    Some(&N_MOVQ_E_P),
    None,
    None,
    None,
]);
static N_0F7E_66: Node = Node::Aux(&[
    Some(&N_MOVD_E_V),
    None,
    Some(&N_MOVQ_E_V),
    None,
    None,
    None,
]);
static N_0F7E: Node = Node::Prefix(&[
    Some(&N_0F7E_NP),
    Some(&N_0F7E_66),
    None,
    Some(&N_MOVQ_V_W),
]);

const I_MOVQ_Q_P: Insn = mmx(M::Movq, &[op(K::Q, S::Q, W), op(K::P, S::Q, R)]);
const I_MOVQ_P_Q: Insn = mmx(M::Movq, &[op(K::P, S::Q, W), op(K::Q, S::Q, R)]);
const I_MOVDQA: Insn = sse2(M::Movdqa, CF::Sse2, OPS_V_W_X);
const I_MOVDQA_ST: Insn = sse2(M::Movdqa, CF::Sse2, &[op(K::W, S::X, W), op(K::V, S::X, R)]);
const I_MOVDQU: Insn = sse2(M::Movdqu, CF::Sse2, OPS_V_W_X);
const I_MOVDQU_ST: Insn = sse2(M::Movdqu, CF::Sse2, &[op(K::W, S::X, W), op(K::V, S::X, R)]);
static N_MOVQ_Q_P: Node = Node::Leaf(&I_MOVQ_Q_P);
static N_MOVQ_P_Q: Node = Node::Leaf(&I_MOVQ_P_Q);
static N_MOVDQA: Node = Node::Leaf(&I_MOVDQA);
static N_MOVDQA_ST: Node = Node::Leaf(&I_MOVDQA_ST);
static N_MOVDQU: Node = Node::Leaf(&I_MOVDQU);
static N_MOVDQU_ST: Node = Node::Leaf(&I_MOVDQU_ST);
static N_0F6F: Node = Node::Prefix(&[
    Some(&N_MOVQ_P_Q),
    Some(&N_MOVDQA),
    None,
    Some(&N_MOVDQU),
]);
static N_0F7F: Node = Node::Prefix(&[
    Some(&N_MOVQ_Q_P),
    Some(&N_MOVDQA_ST),
    None,
    Some(&N_MOVDQU_ST),
]);

const I_PSHUFW: Insn = mmx(M::Pshufw, &[
    op(K::P, S::Q, W),
    op(K::Q, S::Q, R),
    op(K::I, S::B, R),
]);
const I_PSHUFD: Insn = sse2(M::Pshufd, CF::Sse2, &[
    op(K::V, S::X, W),
    op(K::W, S::X, R),
    op(K::I, S::B, R),
]);
const I_PSHUFHW: Insn = sse2(M::Pshufhw, CF::Sse2, &[
    op(K::V, S::X, W),
    op(K::W, S::X, R),
    op(K::I, S::B, R),
]);
const I_PSHUFLW: Insn = sse2(M::Pshuflw, CF::Sse2, &[
    op(K::V, S::X, W),
    op(K::W, S::X, R),
    op(K::I, S::B, R),
]);
static N_PSHUFW: Node = Node::Leaf(&I_PSHUFW);
static N_PSHUFD: Node = Node::Leaf(&I_PSHUFD);
static N_PSHUFHW: Node = Node::Leaf(&I_PSHUFHW);
static N_PSHUFLW: Node = Node::Leaf(&I_PSHUFLW);
static N_0F70: Node = Node::Prefix(&[
    Some(&N_PSHUFW),
    Some(&N_PSHUFD),
    Some(&N_PSHUFLW),
    Some(&N_PSHUFHW),
]);

// CMPPS and friends carry the comparison predicate in the immediate.
const fn sse_cmp(m: M, cpuid: CF, ops: &'static [OpSpec]) -> Insn {
    insn(m, C::Sse, IS::Sse2, cpuid, 3, ops)
        .attrs(A::MODRM.union(A::SSE_COND))
        .exc(XC::SseAvx, XT::T4)
}

const OPS_CMPPS: &[OpSpec] = &[
    op(K::V, S::Ps, RW),
    op(K::W, S::Ps, R),
    op(K::I, S::B, R),
];
const OPS_CMPPD: &[OpSpec] = &[
    op(K::V, S::Pd, RW),
    op(K::W, S::Pd, R),
    op(K::I, S::B, R),
];
const OPS_CMPSS: &[OpSpec] = &[
    op(K::V, S::Ss, RW),
    op(K::W, S::Ss, R),
    op(K::I, S::B, R),
];
const OPS_CMPSD: &[OpSpec] = &[
    op(K::V, S::Sd, RW),
    op(K::W, S::Sd, R),
    op(K::I, S::B, R),
];
const I_CMPPS: Insn = sse_cmp(M::Cmpps, CF::Sse, OPS_CMPPS);
const I_CMPPD: Insn = sse_cmp(M::Cmppd, CF::Sse2, OPS_CMPPD);
const I_CMPSS: Insn = sse_cmp(M::Cmpss, CF::Sse, OPS_CMPSS);
const I_CMPSD_SSE: Insn = sse_cmp(M::Cmpsd, CF::Sse2, OPS_CMPSD);
static N_CMPPS: Node = Node::Leaf(&I_CMPPS);
static N_CMPPD: Node = Node::Leaf(&I_CMPPD);
static N_CMPSS: Node = Node::Leaf(&I_CMPSS);
static N_CMPSD_SSE: Node = Node::Leaf(&I_CMPSD_SSE);
static N_0FC2: Node = Node::Prefix(&[
    Some(&N_CMPPS),
    Some(&N_CMPPD),
    Some(&N_CMPSD_SSE),
    Some(&N_CMPSS),
]);

const I_SHUFPS: Insn = sse2(M::Shufps, CF::Sse, &[
    op(K::V, S::Ps, RW),
    op(K::W, S::Ps, R),
    op(K::I, S::B, R),
]);
const I_SHUFPD: Insn = sse2(M::Shufpd, CF::Sse2, &[
    op(K::V, S::Pd, RW),
    op(K::W, S::Pd, R),
    op(K::I, S::B, R),
]);
static N_SHUFPS: Node = Node::Leaf(&I_SHUFPS);
static N_SHUFPD: Node = Node::Leaf(&I_SHUFPD);
static N_0FC6: Node = Node::Prefix(&[Some(&N_SHUFPS), Some(&N_SHUFPD), None, None]);

const I_MOVNTQ: Insn = mmx(M::Movntq, &[op(K::M, S::Q, W), op(K::P, S::Q, R)]);
const I_MOVNTDQ: Insn = sse2(M::Movntdq, CF::Sse2, &[op(K::M, S::X, W), op(K::V, S::X, R)]);
static N_MOVNTQ: Node = Node::Leaf(&I_MOVNTQ);
static N_MOVNTDQ: Node = Node::Leaf(&I_MOVNTDQ);
static N_0FE7: Node = Node::Prefix(&[Some(&N_MOVNTQ), Some(&N_MOVNTDQ), None, None]);

// ---------------------------------------------------------------------------
// 0F map: A0..C8.
// ---------------------------------------------------------------------------

const I_CPUID: Insn = insn(M::Cpuid, C::System, IS::I486, CF::None, 0, &[
    op(K::GprRax, S::D, RW).flg(OPDEF),
    op(K::GprRbx, S::D, W).flg(OPDEF),
    op(K::GprRcx, S::D, RW).flg(OPDEF),
    op(K::GprRdx, S::D, W).flg(OPDEF),
]);
static N_CPUID: Node = Node::Leaf(&I_CPUID);

const OPS_BT_EV_GV: &[OpSpec] = &[op(K::E, S::V, R), op(K::G, S::V, R), FL_W];
const OPS_BTX_EV_GV: &[OpSpec] = &[op(K::E, S::V, RW), op(K::G, S::V, R), FL_W];
const OPS_BT_EV_IB: &[OpSpec] = &[op(K::E, S::V, R), op(K::I, S::B, R), FL_W];
const OPS_BTX_EV_IB: &[OpSpec] = &[op(K::E, S::V, RW), op(K::I, S::B, R), FL_W];

const I_BT: Insn = insn(M::Bt, C::Bitbyte, IS::I386, CF::None, 2, OPS_BT_EV_GV)
    .attrs(A::MODRM.union(A::BITBASE))
    .flags(FlagOps::BT);
const I_BTS: Insn = insn(M::Bts, C::Bitbyte, IS::I386, CF::None, 2, OPS_BTX_EV_GV)
    .attrs(A::MODRM.union(A::BITBASE))
    .prefixes(LOCKABLE)
    .flags(FlagOps::BT);
const I_BTR: Insn = insn(M::Btr, C::Bitbyte, IS::I386, CF::None, 2, OPS_BTX_EV_GV)
    .attrs(A::MODRM.union(A::BITBASE))
    .prefixes(LOCKABLE)
    .flags(FlagOps::BT);
const I_BTC: Insn = insn(M::Btc, C::Bitbyte, IS::I386, CF::None, 2, OPS_BTX_EV_GV)
    .attrs(A::MODRM.union(A::BITBASE))
    .prefixes(LOCKABLE)
    .flags(FlagOps::BT);
static N_BT: Node = Node::Leaf(&I_BT);
static N_BTS: Node = Node::Leaf(&I_BTS);
static N_BTR: Node = Node::Leaf(&I_BTR);
static N_BTC: Node = Node::Leaf(&I_BTC);

const I_BT_IB: Insn = insn(M::Bt, C::Bitbyte, IS::I386, CF::None, 2, OPS_BT_EV_IB)
    .attrs(A::MODRM)
    .flags(FlagOps::BT);
const I_BTS_IB: Insn = insn(M::Bts, C::Bitbyte, IS::I386, CF::None, 2, OPS_BTX_EV_IB)
    .attrs(A::MODRM)
    .prefixes(LOCKABLE)
    .flags(FlagOps::BT);
const I_BTR_IB: Insn = insn(M::Btr, C::Bitbyte, IS::I386, CF::None, 2, OPS_BTX_EV_IB)
    .attrs(A::MODRM)
    .prefixes(LOCKABLE)
    .flags(FlagOps::BT);
const I_BTC_IB: Insn = insn(M::Btc, C::Bitbyte, IS::I386, CF::None, 2, OPS_BTX_EV_IB)
    .attrs(A::MODRM)
    .prefixes(LOCKABLE)
    .flags(FlagOps::BT);
static N_BT_IB: Node = Node::Leaf(&I_BT_IB);
static N_BTS_IB: Node = Node::Leaf(&I_BTS_IB);
static N_BTR_IB: Node = Node::Leaf(&I_BTR_IB);
static N_BTC_IB: Node = Node::Leaf(&I_BTC_IB);

static N_GROUP_0FBA: Node = Node::ModrmReg(&[
    None,
    None,
    None,
    None,
    Some(&N_BT_IB),
    Some(&N_BTS_IB),
    Some(&N_BTR_IB),
    Some(&N_BTC_IB),
]);

const I_SHLD_IB: Insn = insn(M::Shld, C::Shift, IS::I386, CF::None, 3, &[
    op(K::E, S::V, RW),
    op(K::G, S::V, R),
    op(K::I, S::B, R),
    FL_W,
])
.attrs(A::MODRM)
.flags(FlagOps::SHIFT);
const I_SHLD_CL: Insn = insn(M::Shld, C::Shift, IS::I386, CF::None, 3, &[
    op(K::E, S::V, RW),
    op(K::G, S::V, R),
    op(K::GprRcx, S::B, R),
    FL_W,
])
.attrs(A::MODRM)
.flags(FlagOps::SHIFT);
const I_SHRD_IB: Insn = insn(M::Shrd, C::Shift, IS::I386, CF::None, 3, &[
    op(K::E, S::V, RW),
    op(K::G, S::V, R),
    op(K::I, S::B, R),
    FL_W,
])
.attrs(A::MODRM)
.flags(FlagOps::SHIFT);
const I_SHRD_CL: Insn = insn(M::Shrd, C::Shift, IS::I386, CF::None, 3, &[
    op(K::E, S::V, RW),
    op(K::G, S::V, R),
    op(K::GprRcx, S::B, R),
    FL_W,
])
.attrs(A::MODRM)
.flags(FlagOps::SHIFT);
static N_SHLD_IB: Node = Node::Leaf(&I_SHLD_IB);
static N_SHLD_CL: Node = Node::Leaf(&I_SHLD_CL);
static N_SHRD_IB: Node = Node::Leaf(&I_SHRD_IB);
static N_SHRD_CL: Node = Node::Leaf(&I_SHRD_CL);

// Group 15 (0F AE): fences, MXCSR and the save areas.
const I_FXSAVE: Insn = insn(M::Fxsave, C::System, IS::PentiumPro, CF::Fpu, 1, &[
    op(K::M, S::Rx, W),
])
.attrs(A::MODRM);
const I_FXRSTOR: Insn = insn(M::Fxrstor, C::System, IS::PentiumPro, CF::Fpu, 1, &[
    op(K::M, S::Rx, R),
])
.attrs(A::MODRM);
const I_LDMXCSR: Insn = insn(M::Ldmxcsr, C::Sse, IS::Sse, CF::Sse, 1, &[
    op(K::M, S::D, R),
    op(K::Mxcsr, S::D, W).flg(OPDEF),
])
.attrs(A::MODRM);
const I_STMXCSR: Insn = insn(M::Stmxcsr, C::Sse, IS::Sse, CF::Sse, 1, &[
    op(K::M, S::D, W),
    op(K::Mxcsr, S::D, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_XSAVE: Insn = insn(M::Xsave, C::System, IS::Xsave, CF::Xsave, 1, &[
    op(K::M, S::Unknown, W),
    op(K::GprRdx, S::D, R).flg(OPDEF),
    op(K::GprRax, S::D, R).flg(OPDEF),
    op(K::Xcr0, S::Q, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_XRSTOR: Insn = insn(M::Xrstor, C::System, IS::Xsave, CF::Xsave, 1, &[
    op(K::M, S::Unknown, R),
    op(K::GprRdx, S::D, R).flg(OPDEF),
    op(K::GprRax, S::D, R).flg(OPDEF),
    op(K::Xcr0, S::Q, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_XSAVEOPT: Insn = insn(M::Xsaveopt, C::System, IS::Xsave, CF::Xsave, 1, &[
    op(K::M, S::Unknown, W),
    op(K::GprRdx, S::D, R).flg(OPDEF),
    op(K::GprRax, S::D, R).flg(OPDEF),
    op(K::Xcr0, S::Q, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_CLFLUSH: Insn = insn(M::Clflush, C::Misc, IS::Sse2, CF::Sse2, 1, &[
    op(K::M, S::Cl, W),
])
.attrs(A::MODRM);
const I_LFENCE: Insn = insn(M::Lfence, C::Misc, IS::Sse2, CF::Sse2, 0, &[]).attrs(A::MODRM);
const I_MFENCE: Insn = insn(M::Mfence, C::Misc, IS::Sse2, CF::Sse2, 0, &[]).attrs(A::MODRM);
const I_SFENCE: Insn = insn(M::Sfence, C::Misc, IS::Sse, CF::Sse, 0, &[]).attrs(A::MODRM);
static N_FXSAVE: Node = Node::Leaf(&I_FXSAVE);
static N_FXRSTOR: Node = Node::Leaf(&I_FXRSTOR);
static N_LDMXCSR: Node = Node::Leaf(&I_LDMXCSR);
static N_STMXCSR: Node = Node::Leaf(&I_STMXCSR);
static N_XSAVE: Node = Node::Leaf(&I_XSAVE);
static N_XRSTOR: Node = Node::Leaf(&I_XRSTOR);
static N_XSAVEOPT: Node = Node::Leaf(&I_XSAVEOPT);
static N_CLFLUSH: Node = Node::Leaf(&I_CLFLUSH);
static N_LFENCE: Node = Node::Leaf(&I_LFENCE);
static N_MFENCE: Node = Node::Leaf(&I_MFENCE);
static N_SFENCE: Node = Node::Leaf(&I_SFENCE);

static N_0FAE_MEM: Node = Node::ModrmReg(&[
    Some(&N_FXSAVE),
    Some(&N_FXRSTOR),
    Some(&N_LDMXCSR),
    Some(&N_STMXCSR),
    Some(&N_XSAVE),
    Some(&N_XRSTOR),
    Some(&N_XSAVEOPT),
    Some(&N_CLFLUSH),
]);
static N_0FAE_REG: Node = Node::ModrmReg(&[
    None,
    None,
    None,
    None,
    None,
    Some(&N_LFENCE),
    Some(&N_MFENCE),
    Some(&N_SFENCE),
]);
static N_0FAE_NP: Node = Node::ModrmMod(&[Some(&N_0FAE_MEM), Some(&N_0FAE_REG)]);

const I_RDFSBASE: Insn = insn(M::Rdfsbase, C::System, IS::LongMode, CF::None, 1, &[
    op(K::R, S::Y, W),
])
.attrs(A::MODRM.union(A::O64));
const I_RDGSBASE: Insn = insn(M::Rdgsbase, C::System, IS::LongMode, CF::None, 1, &[
    op(K::R, S::Y, W),
])
.attrs(A::MODRM.union(A::O64));
const I_WRFSBASE: Insn = insn(M::Wrfsbase, C::System, IS::LongMode, CF::None, 1, &[
    op(K::R, S::Y, R),
])
.attrs(A::MODRM.union(A::O64));
const I_WRGSBASE: Insn = insn(M::Wrgsbase, C::System, IS::LongMode, CF::None, 1, &[
    op(K::R, S::Y, R),
])
.attrs(A::MODRM.union(A::O64));
static N_RDFSBASE: Node = Node::Leaf(&I_RDFSBASE);
static N_RDGSBASE: Node = Node::Leaf(&I_RDGSBASE);
static N_WRFSBASE: Node = Node::Leaf(&I_WRFSBASE);
static N_WRGSBASE: Node = Node::Leaf(&I_WRGSBASE);

static N_0FAE_F3_REG: Node = Node::ModrmReg(&[
    Some(&N_RDFSBASE),
    Some(&N_RDGSBASE),
    Some(&N_WRFSBASE),
    Some(&N_WRGSBASE),
    None,
    Some(&N_INCSSP),
    None,
    None,
]);
static N_0FAE_F3_MEM: Node = Node::ModrmReg(&[
    None,
    None,
    None,
    None,
    None,
    None,
    Some(&N_CLRSSBSY),
    None,
]);
static N_0FAE_F3: Node = Node::ModrmMod(&[Some(&N_0FAE_F3_MEM), Some(&N_0FAE_F3_REG)]);
static N_0FAE: Node = Node::Prefix(&[Some(&N_0FAE_NP), None, None, Some(&N_0FAE_F3)]);

const I_IMUL_GV_EV: Insn = insn(M::Imul, C::Arith, IS::I386, CF::None, 2, &[
    op(K::G, S::V, RW),
    op(K::E, S::V, R),
    FL_W,
])
.attrs(A::MODRM)
.flags(FlagOps::MUL);
static N_IMUL_GV_EV: Node = Node::Leaf(&I_IMUL_GV_EV);

const I_CMPXCHG_EB: Insn = insn(M::Cmpxchg, C::Semaphore, IS::I486, CF::None, 2, &[
    op(K::E, S::B, RW),
    op(K::G, S::B, R),
    op(K::GprRax, S::B, RW).flg(OPDEF),
    FL_W,
])
.attrs(A::MODRM)
.prefixes(LOCKABLE)
.flags(FlagOps::ARITH);
const I_CMPXCHG_EV: Insn = insn(M::Cmpxchg, C::Semaphore, IS::I486, CF::None, 2, &[
    op(K::E, S::V, RW),
    op(K::G, S::V, R),
    op(K::GprRax, S::V, RW).flg(OPDEF),
    FL_W,
])
.attrs(A::MODRM)
.prefixes(LOCKABLE)
.flags(FlagOps::ARITH);
static N_CMPXCHG_EB: Node = Node::Leaf(&I_CMPXCHG_EB);
static N_CMPXCHG_EV: Node = Node::Leaf(&I_CMPXCHG_EV);

const I_LSS: Insn = insn(M::Lss, C::Dataxfer, IS::I386, CF::None, 2, &[
    op(K::G, S::V, W),
    op(K::M, S::P, R),
    op(K::SegSs, S::W, W).flg(OPDEF),
])
.attrs(A::MODRM);
const I_LFS: Insn = insn(M::Lfs, C::Dataxfer, IS::I386, CF::None, 2, &[
    op(K::G, S::V, W),
    op(K::M, S::P, R),
    op(K::SegFs, S::W, W).flg(OPDEF),
])
.attrs(A::MODRM);
const I_LGS: Insn = insn(M::Lgs, C::Dataxfer, IS::I386, CF::None, 2, &[
    op(K::G, S::V, W),
    op(K::M, S::P, R),
    op(K::SegGs, S::W, W).flg(OPDEF),
])
.attrs(A::MODRM);
static N_LSS: Node = Node::Leaf(&I_LSS);
static N_LFS: Node = Node::Leaf(&I_LFS);
static N_LGS: Node = Node::Leaf(&I_LGS);

const I_MOVZX_GV_EB: Insn = insn(M::Movzx, C::Dataxfer, IS::I386, CF::None, 2, &[
    op(K::G, S::V, W),
    op(K::E, S::B, R),
])
.attrs(A::MODRM);
const I_MOVZX_GV_EW: Insn = insn(M::Movzx, C::Dataxfer, IS::I386, CF::None, 2, &[
    op(K::G, S::V, W),
    op(K::E, S::W, R),
])
.attrs(A::MODRM);
const I_MOVSX_GV_EB: Insn = insn(M::Movsx, C::Dataxfer, IS::I386, CF::None, 2, &[
    op(K::G, S::V, W),
    op(K::E, S::B, R),
])
.attrs(A::MODRM);
const I_MOVSX_GV_EW: Insn = insn(M::Movsx, C::Dataxfer, IS::I386, CF::None, 2, &[
    op(K::G, S::V, W),
    op(K::E, S::W, R),
])
.attrs(A::MODRM);
static N_MOVZX_GV_EB: Node = Node::Leaf(&I_MOVZX_GV_EB);
static N_MOVZX_GV_EW: Node = Node::Leaf(&I_MOVZX_GV_EW);
static N_MOVSX_GV_EB: Node = Node::Leaf(&I_MOVSX_GV_EB);
static N_MOVSX_GV_EW: Node = Node::Leaf(&I_MOVSX_GV_EW);

const POPCNT_FLAGS: FlagOps = FlagOps {
    modified: CpuFlags::ZF,
    cleared: CpuFlags::CF
        .union(CpuFlags::OF)
        .union(CpuFlags::SF)
        .union(CpuFlags::AF)
        .union(CpuFlags::PF),
    ..FlagOps::NONE
};

const I_POPCNT: Insn = insn(M::Popcnt, C::Bitbyte, IS::Popcnt, CF::Popcnt, 2, &[
    op(K::G, S::V, W),
    op(K::E, S::V, R),
    FL_W,
])
.attrs(A::MODRM)
.flags(POPCNT_FLAGS);
static N_POPCNT: Node = Node::Leaf(&I_POPCNT);
static N_0FB8: Node = Node::Prefix(&[None, None, None, Some(&N_POPCNT)]);

const I_BSF: Insn = insn(M::Bsf, C::Bitbyte, IS::I386, CF::None, 2, &[
    op(K::G, S::V, CW),
    op(K::E, S::V, R),
    FL_W,
])
.attrs(A::MODRM)
.flags(FlagOps::BSCAN);
const I_BSR: Insn = insn(M::Bsr, C::Bitbyte, IS::I386, CF::None, 2, &[
    op(K::G, S::V, CW),
    op(K::E, S::V, R),
    FL_W,
])
.attrs(A::MODRM)
.flags(FlagOps::BSCAN);
const I_TZCNT: Insn = insn(M::Tzcnt, C::Bmi, IS::Bmi1, CF::Bmi1, 2, &[
    op(K::G, S::V, W),
    op(K::E, S::V, R),
    FL_W,
])
.attrs(A::MODRM)
.flags(POPCNT_FLAGS);
const I_LZCNT: Insn = insn(M::Lzcnt, C::Bmi, IS::Lzcnt, CF::Lzcnt, 2, &[
    op(K::G, S::V, W),
    op(K::E, S::V, R),
    FL_W,
])
.attrs(A::MODRM)
.flags(POPCNT_FLAGS);
static N_BSF: Node = Node::Leaf(&I_BSF);
static N_BSR: Node = Node::Leaf(&I_BSR);
static N_TZCNT: Node = Node::Leaf(&I_TZCNT);
static N_LZCNT: Node = Node::Leaf(&I_LZCNT);
static N_0FBC: Node = Node::Prefix(&[Some(&N_BSF), Some(&N_BSF), None, Some(&N_TZCNT)]);
static N_0FBD: Node = Node::Prefix(&[Some(&N_BSR), Some(&N_BSR), None, Some(&N_LZCNT)]);

const I_XADD_EB: Insn = insn(M::Xadd, C::Semaphore, IS::I486, CF::None, 2, &[
    op(K::E, S::B, RW),
    op(K::G, S::B, RW),
    FL_W,
])
.attrs(A::MODRM)
.prefixes(LOCKABLE)
.flags(FlagOps::ARITH);
const I_XADD_EV: Insn = insn(M::Xadd, C::Semaphore, IS::I486, CF::None, 2, &[
    op(K::E, S::V, RW),
    op(K::G, S::V, RW),
    FL_W,
])
.attrs(A::MODRM)
.prefixes(LOCKABLE)
.flags(FlagOps::ARITH);
static N_XADD_EB: Node = Node::Leaf(&I_XADD_EB);
static N_XADD_EV: Node = Node::Leaf(&I_XADD_EV);

const I_MOVNTI: Insn = insn(M::Movnti, C::Dataxfer, IS::Sse2, CF::Sse2, 2, &[
    op(K::M, S::Y, W),
    op(K::G, S::Y, R),
])
.attrs(A::MODRM);
static N_MOVNTI: Node = Node::Leaf(&I_MOVNTI);

// Group 9 (0F C7): CMPXCHG8B/16B plus the random number readers.
const I_CMPXCHG8B: Insn = insn(M::Cmpxchg8b, C::Semaphore, IS::Pentium, CF::Cx8, 1, &[
    op(K::M, S::Q, RW),
    op(K::GprRdx, S::D, RW).flg(OPDEF),
    op(K::GprRax, S::D, RW).flg(OPDEF),
    op(K::GprRcx, S::D, R).flg(OPDEF),
    op(K::GprRbx, S::D, R).flg(OPDEF),
    FL_W,
])
.attrs(A::MODRM)
.prefixes(LOCKABLE)
.flags(FlagOps {
    modified: CpuFlags::ZF,
    ..FlagOps::NONE
});
const I_CMPXCHG16B: Insn = insn(M::Cmpxchg16b, C::Semaphore, IS::LongMode, CF::Cx16, 1, &[
    op(K::M, S::Dq, RW),
    op(K::GprRdx, S::Q, RW).flg(OPDEF),
    op(K::GprRax, S::Q, RW).flg(OPDEF),
    op(K::GprRcx, S::Q, R).flg(OPDEF),
    op(K::GprRbx, S::Q, R).flg(OPDEF),
    FL_W,
])
.attrs(A::MODRM.union(A::O64))
.prefixes(LOCKABLE)
.flags(FlagOps {
    modified: CpuFlags::ZF,
    ..FlagOps::NONE
});
static N_CMPXCHG8B: Node = Node::Leaf(&I_CMPXCHG8B);
static N_CMPXCHG16B: Node = Node::Leaf(&I_CMPXCHG16B);

static N_0FC7_1: Node = Node::Aux(&[
    Some(&N_CMPXCHG8B),
    None,
    Some(&N_CMPXCHG16B),
    None,
    None,
    None,
]);

const RDRAND_FLAGS: FlagOps = FlagOps {
    modified: CpuFlags::CF,
    cleared: CpuFlags::OF
        .union(CpuFlags::SF)
        .union(CpuFlags::ZF)
        .union(CpuFlags::AF)
        .union(CpuFlags::PF),
    ..FlagOps::NONE
};

const I_RDRAND: Insn = insn(M::Rdrand, C::System, IS::Rdrand, CF::Rdrand, 1, &[
    op(K::R, S::V, W),
    FL_W,
])
.attrs(A::MODRM)
.flags(RDRAND_FLAGS);
const I_RDSEED: Insn = insn(M::Rdseed, C::System, IS::Rdseed, CF::Rdseed, 1, &[
    op(K::R, S::V, W),
    FL_W,
])
.attrs(A::MODRM)
.flags(RDRAND_FLAGS);
static N_RDRAND: Node = Node::Leaf(&I_RDRAND);
static N_RDSEED: Node = Node::Leaf(&I_RDSEED);

static N_0FC7_REG: Node = Node::ModrmReg(&[
    None,
    None,
    None,
    None,
    None,
    None,
    Some(&N_RDRAND),
    Some(&N_RDSEED),
]);
static N_0FC7_MEM: Node = Node::ModrmReg(&[
    None,
    Some(&N_0FC7_1),
    None,
    None,
    None,
    None,
    None,
    None,
]);
static N_0FC7: Node = Node::ModrmMod(&[Some(&N_0FC7_MEM), Some(&N_0FC7_REG)]);

const I_BSWAP: Insn = insn(M::Bswap, C::Dataxfer, IS::I486, CF::None, 1, &[
    op(K::Z, S::Y, RW),
]);
static N_BSWAP: Node = Node::Leaf(&I_BSWAP);

const I_UD0: Insn = insn(M::Ud0, C::Misc, IS::PentiumPro, CF::None, 2, &[
    op(K::G, S::D, R),
    op(K::E, S::D, R),
])
.attrs(A::MODRM);
const I_UD1: Insn = insn(M::Ud1, C::Misc, IS::PentiumPro, CF::None, 2, &[
    op(K::G, S::D, R),
    op(K::E, S::D, R),
])
.attrs(A::MODRM);
static N_UD0: Node = Node::Leaf(&I_UD0);
static N_UD1: Node = Node::Leaf(&I_UD1);

// ---------------------------------------------------------------------------
// 3DNow!: the opcode trails ModRM and displacement.
// ---------------------------------------------------------------------------

const fn amd3dnow(m: M) -> Insn {
    insn(m, C::_3dnow, IS::_3dnow, CF::_3dnow, 2, OPS_P_Q)
        .attrs(A::MODRM.union(A::OP3DNOW))
}

const I_PI2FD: Insn = amd3dnow(M::Pi2fd);
const I_PF2ID: Insn = amd3dnow(M::Pf2id);
const I_PFCMPGE: Insn = amd3dnow(M::Pfcmpge);
const I_PFRCP: Insn = amd3dnow(M::Pfrcp);
const I_PFRSQRT: Insn = amd3dnow(M::Pfrsqrt);
const I_PFSUB: Insn = amd3dnow(M::Pfsub);
const I_PFADD: Insn = amd3dnow(M::Pfadd);
const I_PFCMPEQ: Insn = amd3dnow(M::Pfcmpeq);
const I_PFMUL: Insn = amd3dnow(M::Pfmul);
const I_PMULHRW: Insn = amd3dnow(M::Pmulhrw);
const I_PAVGUSB: Insn = amd3dnow(M::Pavgusb);
static N_PI2FD: Node = Node::Leaf(&I_PI2FD);
static N_PF2ID: Node = Node::Leaf(&I_PF2ID);
static N_PFCMPGE: Node = Node::Leaf(&I_PFCMPGE);
static N_PFRCP: Node = Node::Leaf(&I_PFRCP);
static N_PFRSQRT: Node = Node::Leaf(&I_PFRSQRT);
static N_PFSUB: Node = Node::Leaf(&I_PFSUB);
static N_PFADD: Node = Node::Leaf(&I_PFADD);
static N_PFCMPEQ: Node = Node::Leaf(&I_PFCMPEQ);
static N_PFMUL: Node = Node::Leaf(&I_PFMUL);
static N_PMULHRW: Node = Node::Leaf(&I_PMULHRW);
static N_PAVGUSB: Node = Node::Leaf(&I_PAVGUSB);

static MAP_3DNOW: [Link; 256] = {
    let mut t: [Link; 256] = [None; 256];
    t[0x0D] = Some(&N_PI2FD);
    t[0x1D] = Some(&N_PF2ID);
    t[0x90] = Some(&N_PFCMPGE);
    t[0x96] = Some(&N_PFRCP);
    t[0x97] = Some(&N_PFRSQRT);
    t[0x9A] = Some(&N_PFSUB);
    t[0x9E] = Some(&N_PFADD);
    t[0xB0] = Some(&N_PFCMPEQ);
    t[0xB4] = Some(&N_PFMUL);
    t[0xB7] = Some(&N_PMULHRW);
    t[0xBF] = Some(&N_PAVGUSB);
    t
};

static N_MAP_3DNOW: Node = Node::Opcode3dnow(&MAP_3DNOW);

// ---------------------------------------------------------------------------
// 0F 38 map.
// ---------------------------------------------------------------------------

const I_PSHUFB_MMX: Insn = insn(M::Pshufb, C::Mmx, IS::Ssse3, CF::Ssse3, 2, OPS_P_Q)
    .attrs(A::MODRM);
const I_PSHUFB: Insn = sse2(M::Pshufb, CF::Ssse3, OPS_V_W_X);
static N_PSHUFB_MMX: Node = Node::Leaf(&I_PSHUFB_MMX);
static N_PSHUFB: Node = Node::Leaf(&I_PSHUFB);
static N_0F3800: Node = Node::Prefix(&[Some(&N_PSHUFB_MMX), Some(&N_PSHUFB), None, None]);

// MOVBE honours 66 although it shares the opcode with mandatory-F2 CRC32.
const I_MOVBE_GV_MV: Insn = insn(M::Movbe, C::Dataxfer, IS::Movbe, CF::Movbe, 2, &[
    op(K::G, S::V, W),
    op(K::M, S::V, R),
])
.attrs(A::MODRM);
const I_MOVBE_MV_GV: Insn = insn(M::Movbe, C::Dataxfer, IS::Movbe, CF::Movbe, 2, &[
    op(K::M, S::V, W),
    op(K::G, S::V, R),
])
.attrs(A::MODRM);
const I_CRC32_GY_EB: Insn = insn(M::Crc32, C::Arith, IS::Sse42, CF::Sse42, 2, &[
    op(K::G, S::Y, RW),
    op(K::E, S::B, R),
])
.attrs(A::MODRM.union(A::S66));
const I_CRC32_GY_EV: Insn = insn(M::Crc32, C::Arith, IS::Sse42, CF::Sse42, 2, &[
    op(K::G, S::Y, RW),
    op(K::E, S::V, R),
])
.attrs(A::MODRM.union(A::S66));
static N_MOVBE_GV_MV: Node = Node::Leaf(&I_MOVBE_GV_MV);
static N_MOVBE_MV_GV: Node = Node::Leaf(&I_MOVBE_MV_GV);
static N_CRC32_GY_EB: Node = Node::Leaf(&I_CRC32_GY_EB);
static N_CRC32_GY_EV: Node = Node::Leaf(&I_CRC32_GY_EV);

static N_0F38F0: Node = Node::Prefix(&[
    Some(&N_MOVBE_GV_MV),
    Some(&N_MOVBE_GV_MV),
    Some(&N_CRC32_GY_EB),
    None,
]);
static N_0F38F1: Node = Node::Prefix(&[
    Some(&N_MOVBE_MV_GV),
    Some(&N_MOVBE_MV_GV),
    Some(&N_CRC32_GY_EV),
    None,
]);

const I_ADCX: Insn = insn(M::Adcx, C::Arith, IS::Adx, CF::Adx, 2, &[
    op(K::G, S::Y, RW),
    op(K::E, S::Y, R),
    FL_RW,
])
.attrs(A::MODRM)
.flags(FlagOps {
    tested: CpuFlags::CF,
    modified: CpuFlags::CF,
    ..FlagOps::NONE
});
const I_ADOX: Insn = insn(M::Adox, C::Arith, IS::Adx, CF::Adx, 2, &[
    op(K::G, S::Y, RW),
    op(K::E, S::Y, R),
    FL_RW,
])
.attrs(A::MODRM)
.flags(FlagOps {
    tested: CpuFlags::OF,
    modified: CpuFlags::OF,
    ..FlagOps::NONE
});
static N_ADCX: Node = Node::Leaf(&I_ADCX);
static N_ADOX: Node = Node::Leaf(&I_ADOX);
static N_0F38F6: Node = Node::Prefix(&[None, Some(&N_ADCX), None, Some(&N_ADOX)]);

// MOVDIR64B: the destination is memory addressed through ModRM.reg.
const I_MOVDIR64B: Insn = insn(M::Movdir64b, C::Misc, IS::Sse42, CF::None, 2, &[
    op(K::Rm, S::S512, W),
    op(K::Mm, S::S512, R),
])
.attrs(A::MODRM);
static N_MOVDIR64B: Node = Node::Leaf(&I_MOVDIR64B);

static MAP_0F38: [Link; 256] = {
    let mut t: [Link; 256] = [None; 256];
    t[0x00] = Some(&N_0F3800);
    t[0x14] = Some(&N_0F3814);
    t[0xDC] = Some(&N_0F38DC);
    t[0xF0] = Some(&N_0F38F0);
    t[0xF1] = Some(&N_0F38F1);
    t[0xF6] = Some(&N_0F38F6);
    t[0xF8] = Some(&N_MOVDIR64B);
    t
};

static N_MAP_0F38: Node = Node::Opcode(&MAP_0F38);

// ---------------------------------------------------------------------------
// 0F 3A map.
// ---------------------------------------------------------------------------

const I_PALIGNR_MMX: Insn = insn(M::Palignr, C::Mmx, IS::Ssse3, CF::Ssse3, 3, &[
    op(K::P, S::Q, RW),
    op(K::Q, S::Q, R),
    op(K::I, S::B, R),
])
.attrs(A::MODRM);
const I_PALIGNR: Insn = sse2(M::Palignr, CF::Ssse3, &[
    op(K::V, S::X, RW),
    op(K::W, S::X, R),
    op(K::I, S::B, R),
]);
static N_PALIGNR_MMX: Node = Node::Leaf(&I_PALIGNR_MMX);
static N_PALIGNR: Node = Node::Leaf(&I_PALIGNR);
static N_0F3A0F: Node = Node::Prefix(&[Some(&N_PALIGNR_MMX), Some(&N_PALIGNR), None, None]);

const I_PCMPISTRI: Insn = insn(M::Pcmpistri, C::Sse, IS::Sse42, CF::Sse42, 3, &[
    op(K::V, S::Dq, R),
    op(K::W, S::Dq, R),
    op(K::I, S::B, R),
    op(K::GprRcx, S::Y, W).flg(OPDEF),
    FL_W,
])
.attrs(A::MODRM)
.flags(FlagOps::ARITH);
static N_PCMPISTRI: Node = Node::Leaf(&I_PCMPISTRI);
static N_0F3A63: Node = Node::Prefix(&[None, Some(&N_PCMPISTRI), None, None]);

static MAP_0F3A: [Link; 256] = {
    let mut t: [Link; 256] = [None; 256];
    t[0x0F] = Some(&N_0F3A0F);
    t[0x63] = Some(&N_0F3A63);
    t
};

static N_MAP_0F3A: Node = Node::Opcode(&MAP_0F3A);

// ---------------------------------------------------------------------------
// The 0F opcode map.
// ---------------------------------------------------------------------------

static MAP_0F: [Link; 256] = {
    let mut t: [Link; 256] = [None; 256];
    t[0x00] = Some(&N_GROUP_0F00);
    t[0x01] = Some(&N_0F01);
    t[0x02] = Some(&N_LAR);
    t[0x03] = Some(&N_LSL);
    t[0x05] = Some(&N_SYSCALL);
    t[0x06] = Some(&N_CLTS);
    t[0x07] = Some(&N_SYSRET);
    t[0x08] = Some(&N_INVD);
    t[0x09] = Some(&N_WBINVD);
    t[0x0B] = Some(&N_UD2);
    t[0x0D] = Some(&N_0F0D);
    t[0x0E] = Some(&N_FEMMS);
    t[0x0F] = Some(&N_MAP_3DNOW);
    t[0x10] = Some(&N_0F10);
    t[0x11] = Some(&N_0F11);
    t[0x12] = Some(&N_0F12);
    t[0x13] = Some(&N_0F13);
    t[0x14] = Some(&N_0F14);
    t[0x15] = Some(&N_0F15);
    t[0x16] = Some(&N_0F16);
    t[0x17] = Some(&N_0F17);
    t[0x18] = Some(&N_0F18);
    t[0x19] = Some(&N_NOP_EV);
    t[0x1A] = Some(&N_0F1A);
    t[0x1B] = Some(&N_0F1B);
    t[0x1C] = Some(&N_0F1C);
    t[0x1D] = Some(&N_NOP_EV);
    t[0x1E] = Some(&N_0F1E);
    t[0x1F] = Some(&N_NOP_EV);
    t[0x20] = Some(&N_MOV_R_CR);
    t[0x21] = Some(&N_MOV_R_DR);
    t[0x22] = Some(&N_MOV_CR_R);
    t[0x23] = Some(&N_MOV_DR_R);
    t[0x24] = Some(&N_MOV_R_TR);
    t[0x26] = Some(&N_MOV_TR_R);
    t[0x28] = Some(&N_0F28);
    t[0x29] = Some(&N_0F29);
    t[0x2A] = Some(&N_0F2A);
    t[0x2B] = Some(&N_0F2B);
    t[0x2C] = Some(&N_0F2C);
    t[0x2D] = Some(&N_0F2D);
    t[0x2E] = Some(&N_0F2E);
    t[0x2F] = Some(&N_0F2F);
    t[0x30] = Some(&N_WRMSR);
    t[0x31] = Some(&N_RDTSC);
    t[0x32] = Some(&N_RDMSR);
    t[0x33] = Some(&N_RDPMC);
    t[0x34] = Some(&N_SYSENTER);
    t[0x35] = Some(&N_SYSEXIT);
    t[0x38] = Some(&N_MAP_0F38);
    t[0x3A] = Some(&N_MAP_0F3A);
    t[0x40] = Some(&N_CMOVO);
    t[0x41] = Some(&N_CMOVNO);
    t[0x42] = Some(&N_CMOVB);
    t[0x43] = Some(&N_CMOVNB);
    t[0x44] = Some(&N_CMOVZ);
    t[0x45] = Some(&N_CMOVNZ);
    t[0x46] = Some(&N_CMOVBE);
    t[0x47] = Some(&N_CMOVNBE);
    t[0x48] = Some(&N_CMOVS);
    t[0x49] = Some(&N_CMOVNS);
    t[0x4A] = Some(&N_CMOVP);
    t[0x4B] = Some(&N_CMOVNP);
    t[0x4C] = Some(&N_CMOVL);
    t[0x4D] = Some(&N_CMOVNL);
    t[0x4E] = Some(&N_CMOVLE);
    t[0x4F] = Some(&N_CMOVNLE);
    t[0x50] = Some(&N_0F50);
    t[0x51] = Some(&N_0F51);
    t[0x54] = Some(&N_0F54);
    t[0x55] = Some(&N_0F55);
    t[0x56] = Some(&N_0F56);
    t[0x57] = Some(&N_0F57);
    t[0x58] = Some(&N_0F58);
    t[0x59] = Some(&N_0F59);
    t[0x5B] = Some(&N_0F5B);
    t[0x5C] = Some(&N_0F5C);
    t[0x5D] = Some(&N_0F5D);
    t[0x5E] = Some(&N_0F5E);
    t[0x5F] = Some(&N_0F5F);
    t[0x60] = Some(&N_0F60);
    t[0x6E] = Some(&N_0F6E);
    t[0x6F] = Some(&N_0F6F);
    t[0x70] = Some(&N_0F70);
    t[0x74] = Some(&N_0F74);
    t[0x75] = Some(&N_0F75);
    t[0x76] = Some(&N_0F76);
    t[0x77] = Some(&N_EMMS);
    t[0x7E] = Some(&N_0F7E);
    t[0x7F] = Some(&N_0F7F);
    t[0x80] = Some(&N_JO_JZ);
    t[0x81] = Some(&N_JNO_JZ);
    t[0x82] = Some(&N_JB_JZ);
    t[0x83] = Some(&N_JNB_JZ);
    t[0x84] = Some(&N_JZ_JZ);
    t[0x85] = Some(&N_JNZ_JZ);
    t[0x86] = Some(&N_JBE_JZ);
    t[0x87] = Some(&N_JNBE_JZ);
    t[0x88] = Some(&N_JS_JZ);
    t[0x89] = Some(&N_JNS_JZ);
    t[0x8A] = Some(&N_JP_JZ);
    t[0x8B] = Some(&N_JNP_JZ);
    t[0x8C] = Some(&N_JL_JZ);
    t[0x8D] = Some(&N_JNL_JZ);
    t[0x8E] = Some(&N_JLE_JZ);
    t[0x8F] = Some(&N_JNLE_JZ);
    t[0x90] = Some(&N_SETO);
    t[0x91] = Some(&N_SETNO);
    t[0x92] = Some(&N_SETB);
    t[0x93] = Some(&N_SETNB);
    t[0x94] = Some(&N_SETZ);
    t[0x95] = Some(&N_SETNZ);
    t[0x96] = Some(&N_SETBE);
    t[0x97] = Some(&N_SETNBE);
    t[0x98] = Some(&N_SETS);
    t[0x99] = Some(&N_SETNS);
    t[0x9A] = Some(&N_SETP);
    t[0x9B] = Some(&N_SETNP);
    t[0x9C] = Some(&N_SETL);
    t[0x9D] = Some(&N_SETNL);
    t[0x9E] = Some(&N_SETLE);
    t[0x9F] = Some(&N_SETNLE);
    t[0xA0] = Some(&N_PUSH_FS);
    t[0xA1] = Some(&N_POP_FS);
    t[0xA2] = Some(&N_CPUID);
    t[0xA3] = Some(&N_BT);
    t[0xA4] = Some(&N_SHLD_IB);
    t[0xA5] = Some(&N_SHLD_CL);
    t[0xA8] = Some(&N_PUSH_GS);
    t[0xA9] = Some(&N_POP_GS);
    t[0xAB] = Some(&N_BTS);
    t[0xAC] = Some(&N_SHRD_IB);
    t[0xAD] = Some(&N_SHRD_CL);
    t[0xAE] = Some(&N_0FAE);
    t[0xAF] = Some(&N_IMUL_GV_EV);
    t[0xB0] = Some(&N_CMPXCHG_EB);
    t[0xB1] = Some(&N_CMPXCHG_EV);
    t[0xB2] = Some(&N_LSS);
    t[0xB3] = Some(&N_BTR);
    t[0xB4] = Some(&N_LFS);
    t[0xB5] = Some(&N_LGS);
    t[0xB6] = Some(&N_MOVZX_GV_EB);
    t[0xB7] = Some(&N_MOVZX_GV_EW);
    t[0xB8] = Some(&N_0FB8);
    t[0xB9] = Some(&N_UD1);
    t[0xBA] = Some(&N_GROUP_0FBA);
    t[0xBB] = Some(&N_BTC);
    t[0xBC] = Some(&N_0FBC);
    t[0xBD] = Some(&N_0FBD);
    t[0xBE] = Some(&N_MOVSX_GV_EB);
    t[0xBF] = Some(&N_MOVSX_GV_EW);
    t[0xC0] = Some(&N_XADD_EB);
    t[0xC1] = Some(&N_XADD_EV);
    t[0xC2] = Some(&N_0FC2);
    t[0xC3] = Some(&N_MOVNTI);
    t[0xC6] = Some(&N_0FC6);
    t[0xC7] = Some(&N_0FC7);
    let mut i = 0xC8;
    while i < 0xD0 {
        t[i] = Some(&N_BSWAP);
        i += 1;
    }
    t[0xD6] = Some(&N_0FD6);
    t[0xE7] = Some(&N_0FE7);
    t[0xEF] = Some(&N_0FEF);
    t[0xF7] = Some(&N_0FF7);
    t[0xFE] = Some(&N_0FFE);
    t[0xFF] = Some(&N_UD0);
    t
};

static N_MAP_0F: Node = Node::Opcode(&MAP_0F);

// ---------------------------------------------------------------------------
// CET shadow stack, PKRU and the remaining 0F stragglers.
// ---------------------------------------------------------------------------

const I_RDPKRU: Insn = insn(M::Rdpkru, C::System, IS::PentiumPro, CF::None, 0, &[
    op(K::Pkru, S::D, R).flg(OPDEF),
    op(K::GprRcx, S::D, R).flg(OPDEF),
    op(K::GprRax, S::D, W).flg(OPDEF),
    op(K::GprRdx, S::D, W).flg(OPDEF),
])
.attrs(A::MODRM);
const I_WRPKRU: Insn = insn(M::Wrpkru, C::System, IS::PentiumPro, CF::None, 0, &[
    op(K::Pkru, S::D, W).flg(OPDEF),
    op(K::GprRcx, S::D, R).flg(OPDEF),
    op(K::GprRax, S::D, R).flg(OPDEF),
    op(K::GprRdx, S::D, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_SETSSBSY: Insn = insn(M::Setssbsy, C::Cet, IS::CetSs, CF::CetSs, 0, &[
    op(K::MemShs0, S::Q, RW).flg(OPDEF),
    op(K::Ssp, S::Ssz, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_SAVEPREVSSP: Insn = insn(M::Saveprevssp, C::Cet, IS::CetSs, CF::CetSs, 0, &[
    op(K::MemShsp, S::S12, W).flg(OPDEF),
    op(K::Ssp, S::Ssz, R).flg(OPDEF),
])
.attrs(A::MODRM);
static N_RDPKRU: Node = Node::Leaf(&I_RDPKRU);
static N_WRPKRU: Node = Node::Leaf(&I_WRPKRU);
static N_SETSSBSY: Node = Node::Leaf(&I_SETSSBSY);
static N_SAVEPREVSSP: Node = Node::Leaf(&I_SAVEPREVSSP);

// UINTR: TESTUI copies UIF into CF.
const I_TESTUI: Insn = insn(M::Testui, C::Uintr, IS::LongMode, CF::None, 0, &[
    op(K::Uif, S::B, R).flg(OPDEF),
    FL_W,
])
.attrs(A::MODRM.union(A::O64))
.flags(FlagOps {
    modified: CpuFlags::CF,
    cleared: CpuFlags::OF
        .union(CpuFlags::SF)
        .union(CpuFlags::ZF)
        .union(CpuFlags::AF)
        .union(CpuFlags::PF),
    ..FlagOps::NONE
});
static N_TESTUI: Node = Node::Leaf(&I_TESTUI);
static N_0F01_ED: Node = Node::Prefix(&[None, None, None, Some(&N_TESTUI)]);

const I_XGETBV: Insn = insn(M::Xgetbv, C::System, IS::Xsave, CF::Xsave, 0, &[
    op(K::Xcr, S::Q, R).flg(OPDEF),
    op(K::GprRcx, S::D, R).flg(OPDEF),
    op(K::GprRax, S::D, W).flg(OPDEF),
    op(K::GprRdx, S::D, W).flg(OPDEF),
])
.attrs(A::MODRM);
const I_XSETBV: Insn = insn(M::Xsetbv, C::System, IS::Xsave, CF::Xsave, 0, &[
    op(K::Xcr, S::Q, W).flg(OPDEF),
    op(K::GprRcx, S::D, R).flg(OPDEF),
    op(K::GprRax, S::D, R).flg(OPDEF),
    op(K::GprRdx, S::D, R).flg(OPDEF),
])
.attrs(A::MODRM);
static N_XGETBV: Node = Node::Leaf(&I_XGETBV);
static N_XSETBV: Node = Node::Leaf(&I_XSETBV);

static N_0F01_REG2: Node = Node::ModrmRm(&[
    Some(&N_XGETBV),
    Some(&N_XSETBV),
    None,
    None,
    None,
    None,
    None,
    None,
]);

static N_0F01_E8: Node = Node::Prefix(&[None, None, None, Some(&N_SETSSBSY)]);
static N_0F01_EA: Node = Node::Prefix(&[None, None, None, Some(&N_SAVEPREVSSP)]);
static N_0F01_REG5: Node = Node::ModrmRm(&[
    Some(&N_0F01_E8),
    None,
    Some(&N_0F01_EA),
    None,
    None,
    Some(&N_0F01_ED),
    Some(&N_RDPKRU),
    Some(&N_WRPKRU),
]);

const I_CLRSSBSY: Insn = insn(M::Clrssbsy, C::Cet, IS::CetSs, CF::CetSs, 1, &[
    op(K::M, S::Q, RW),
    op(K::Ssp, S::Ssz, R).flg(OPDEF),
])
.attrs(A::MODRM.union(A::SHS));
const I_INCSSPD: Insn = insn(M::Incsspd, C::Cet, IS::CetSs, CF::CetSs, 1, &[
    op(K::R, S::Y, R),
    op(K::Ssp, S::Ssz, RW).flg(OPDEF),
    op(K::MemShs, S::S0, R).flg(OPDEF),
])
.attrs(A::MODRM);
const I_INCSSPQ: Insn = insn(M::Incsspq, C::Cet, IS::CetSs, CF::CetSs, 1, &[
    op(K::R, S::Y, R),
    op(K::Ssp, S::Ssz, RW).flg(OPDEF),
    op(K::MemShs, S::S0, R).flg(OPDEF),
])
.attrs(A::MODRM);
static N_CLRSSBSY: Node = Node::Leaf(&I_CLRSSBSY);
static N_INCSSPD: Node = Node::Leaf(&I_INCSSPD);
static N_INCSSPQ: Node = Node::Leaf(&I_INCSSPQ);

static N_INCSSP: Node = Node::Aux(&[
    Some(&N_INCSSPD),
    None,
    Some(&N_INCSSPQ),
    None,
    None,
    None,
]);

// Legacy BLENDV with the hardcoded XMM0 selector.
const I_BLENDVPS: Insn = sse2(M::Blendvps, CF::Sse41, &[
    op(K::V, S::Dq, RW),
    op(K::W, S::Dq, R),
    op(K::Xmm0, S::Dq, R).flg(OPDEF),
]);
static N_BLENDVPS: Node = Node::Leaf(&I_BLENDVPS);
static N_0F3814: Node = Node::Prefix(&[None, Some(&N_BLENDVPS), None, None]);

// Key Locker: the handle is a 384 bit memory blob.
const I_AESENC128KL: Insn = insn(M::Aesenc128kl, C::Sse, IS::KeyLocker, CF::KeyLocker, 2, &[
    op(K::V, S::Dq, RW),
    op(K::M, S::S384, R),
    FL_W,
])
.attrs(A::MODRM)
.flags(FlagOps {
    cleared: CpuFlags::CF
        .union(CpuFlags::OF)
        .union(CpuFlags::SF)
        .union(CpuFlags::AF)
        .union(CpuFlags::PF),
    modified: CpuFlags::ZF,
    ..FlagOps::NONE
});
static N_AESENC128KL: Node = Node::Leaf(&I_AESENC128KL);
static N_0F38DC: Node = Node::Prefix(&[None, None, None, Some(&N_AESENC128KL)]);

// MMX/SSE register-to-register bridges.
const I_MOVQ2DQ: Insn = sse2(M::Movq2dq, CF::Sse2, &[op(K::V, S::Dq, W), op(K::N, S::Q, R)]);
const I_MOVDQ2Q: Insn = sse2(M::Movdq2q, CF::Sse2, &[op(K::P, S::Q, W), op(K::U, S::Dq, R)]);
static N_MOVQ2DQ: Node = Node::Leaf(&I_MOVQ2DQ);
static N_MOVDQ2Q: Node = Node::Leaf(&I_MOVDQ2Q);

// Masked stores through ES:rDI.
const I_MASKMOVQ: Insn = mmx(M::Maskmovq, &[
    op(K::P, S::Q, R),
    op(K::N, S::Q, R),
    op(K::MemDi, S::Q, W).flg(OPDEF),
]);
const I_MASKMOVDQU: Insn = sse2(M::Maskmovdqu, CF::Sse2, &[
    op(K::V, S::Dq, R),
    op(K::U, S::Dq, R),
    op(K::MemDi, S::Dq, W).flg(OPDEF),
]);
static N_MASKMOVQ: Node = Node::Leaf(&I_MASKMOVQ);
static N_MASKMOVDQU: Node = Node::Leaf(&I_MASKMOVDQU);
static N_0FF7: Node = Node::Prefix(&[Some(&N_MASKMOVQ), Some(&N_MASKMOVDQU), None, None]);

// 0F 0D is an AMD prefetch; everywhere else it stays a wide NOP.
static N_0F0D: Node = Node::Vendor(&[
    Some(&N_GROUP_0F0D),
    Some(&N_NOP_EV),
    Some(&N_GROUP_0F0D),
    None,
]);
