//! The XOP encoding tables (maps 8..10). AMD only.

use super::{insn, op, FlagOps, Insn, Link, Node, OpFlags, OpKind as K, OpSize as S, OpSpec};
use crate::enums::{
    Category as C, CpuFlags, CpuidFeature as CF, InsnAttributes as A, IsaSet as IS,
    Mnemonic as M, OperandAccess,
};

const R: OperandAccess = OperandAccess::READ;
const W: OperandAccess = OperandAccess::WRITE;

const TBM_FLAGS: FlagOps = FlagOps {
    modified: CpuFlags::SF.union(CpuFlags::ZF).union(CpuFlags::CF),
    cleared: CpuFlags::OF,
    set: CpuFlags::AF.union(CpuFlags::PF),
    ..FlagOps::NONE
};

const OPS_B_E_Y: &[OpSpec] = &[
    op(K::B, S::Y, W),
    op(K::E, S::Y, R),
    op(K::F, S::V, W).flg(OpFlags::OPDEF),
];

const fn tbm(m: M) -> Insn {
    insn(m, C::Bmi, IS::Tbm, CF::Tbm, 2, OPS_B_E_Y)
        .attrs(A::MODRM)
        .flags(TBM_FLAGS)
}

const I_BLCFILL: Insn = tbm(M::Blcfill);
const I_BLSFILL: Insn = tbm(M::Blsfill);
const I_BLCS: Insn = tbm(M::Blcs);
const I_TZMSK: Insn = tbm(M::Tzmsk);
const I_BLCIC: Insn = tbm(M::Blcic);
const I_BLSIC: Insn = tbm(M::Blsic);
const I_T1MSKC: Insn = tbm(M::T1mskc);
const I_BLCMSK: Insn = tbm(M::Blcmsk);
const I_BLCI: Insn = tbm(M::Blci);
static N_BLCFILL: Node = Node::Leaf(&I_BLCFILL);
static N_BLSFILL: Node = Node::Leaf(&I_BLSFILL);
static N_BLCS: Node = Node::Leaf(&I_BLCS);
static N_TZMSK: Node = Node::Leaf(&I_TZMSK);
static N_BLCIC: Node = Node::Leaf(&I_BLCIC);
static N_BLSIC: Node = Node::Leaf(&I_BLSIC);
static N_T1MSKC: Node = Node::Leaf(&I_T1MSKC);
static N_BLCMSK: Node = Node::Leaf(&I_BLCMSK);
static N_BLCI: Node = Node::Leaf(&I_BLCI);

static N_X9_01: Node = Node::ModrmReg(&[
    None,
    Some(&N_BLCFILL),
    Some(&N_BLSFILL),
    Some(&N_BLCS),
    Some(&N_TZMSK),
    Some(&N_BLCIC),
    Some(&N_BLSIC),
    Some(&N_T1MSKC),
]);
static N_X9_02: Node = Node::ModrmReg(&[
    None,
    Some(&N_BLCMSK),
    None,
    None,
    None,
    None,
    Some(&N_BLCI),
    None,
]);

static MAP_XOP9: [Link; 256] = {
    let mut t: [Link; 256] = [None; 256];
    t[0x01] = Some(&N_X9_01);
    t[0x02] = Some(&N_X9_02);
    t
};

static N_MAP_XOP9: Node = Node::Opcode(&MAP_XOP9);

// Map 10: BEXTR with a 32 bit control immediate.
const I_BEXTR_ID: Insn = insn(M::Bextr, C::Bmi, IS::Tbm, CF::Tbm, 3, &[
    op(K::G, S::Y, W),
    op(K::E, S::Y, R),
    op(K::I, S::D, R),
    op(K::F, S::V, W).flg(OpFlags::OPDEF),
])
.attrs(A::MODRM)
.flags(TBM_FLAGS);
static N_BEXTR_ID: Node = Node::Leaf(&I_BEXTR_ID);

static MAP_XOPA: [Link; 256] = {
    let mut t: [Link; 256] = [None; 256];
    t[0x10] = Some(&N_BEXTR_ID);
    t
};

static N_MAP_XOPA: Node = Node::Opcode(&MAP_XOPA);

// Map 8: VPROT with an immediate rotate count.
const I_VPROTB: Insn = insn(M::Vprotb, C::Xop, IS::Xop, CF::Xop, 3, &[
    op(K::V, S::Dq, W),
    op(K::W, S::Dq, R),
    op(K::I, S::B, R),
])
.attrs(A::MODRM);
const I_VPROTW: Insn = insn(M::Vprotw, C::Xop, IS::Xop, CF::Xop, 3, &[
    op(K::V, S::Dq, W),
    op(K::W, S::Dq, R),
    op(K::I, S::B, R),
])
.attrs(A::MODRM);
const I_VPROTD: Insn = insn(M::Vprotd, C::Xop, IS::Xop, CF::Xop, 3, &[
    op(K::V, S::Dq, W),
    op(K::W, S::Dq, R),
    op(K::I, S::B, R),
])
.attrs(A::MODRM);
const I_VPROTQ: Insn = insn(M::Vprotq, C::Xop, IS::Xop, CF::Xop, 3, &[
    op(K::V, S::Dq, W),
    op(K::W, S::Dq, R),
    op(K::I, S::B, R),
])
.attrs(A::MODRM);
static N_VPROTB: Node = Node::Leaf(&I_VPROTB);
static N_VPROTW: Node = Node::Leaf(&I_VPROTW);
static N_VPROTD: Node = Node::Leaf(&I_VPROTD);
static N_VPROTQ: Node = Node::Leaf(&I_VPROTQ);

static MAP_XOP8: [Link; 256] = {
    let mut t: [Link; 256] = [None; 256];
    t[0xC0] = Some(&N_VPROTB);
    t[0xC1] = Some(&N_VPROTW);
    t[0xC2] = Some(&N_VPROTD);
    t[0xC3] = Some(&N_VPROTQ);
    t
};

static N_MAP_XOP8: Node = Node::Opcode(&MAP_XOP8);

/// The root of the XOP forest, indexed by the map field.
pub(crate) static ROOT_XOP: Node = Node::VexMap(&{
    let mut t: [Link; 32] = [None; 32];
    t[8] = Some(&N_MAP_XOP8);
    t[9] = Some(&N_MAP_XOP9);
    t[10] = Some(&N_MAP_XOPA);
    t
});
