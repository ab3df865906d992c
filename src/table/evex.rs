//! The EVEX encoding tables (maps 1..3).

use super::{
    insn, op, Insn, Link, Node, OpDeco, OpKind as K, OpSize as S, OpSpec,
};
use crate::enums::{
    Category as C, CpuidFeature as CF, ExceptionClass as XC, ExceptionType as XT,
    InsnAttributes as A, IsaSet as IS, Mnemonic as M, OperandAccess, TupleType as TT,
    ValidDecorators as VD,
};

const R: OperandAccess = OperandAccess::READ;
const W: OperandAccess = OperandAccess::WRITE;
const CR: OperandAccess = OperandAccess::CR;
const CW: OperandAccess = OperandAccess::CW;
const RW: OperandAccess = OperandAccess::RW;

const MZ: OpDeco = OpDeco::MASK.union(OpDeco::Z);
const FULL_DECO: VD = VD::MASK
    .union(VD::ZERO)
    .union(VD::BROADCAST)
    .union(VD::SAE)
    .union(VD::ER);
const MOVE_DECO: VD = VD::MASK.union(VD::ZERO);

/// Packed arithmetic with broadcast, SAE and embedded rounding.
const fn evex_fv(m: M, ops: &'static [OpSpec]) -> Insn {
    insn(m, C::Avx512, IS::Avx512F, CF::Avx512F, 3, ops)
        .attrs(A::MODRM)
        .deco(FULL_DECO)
        .tuple(TT::Fv)
        .exc(XC::Evex, XT::E2)
}

/// Scalar arithmetic: T1S tuple, no broadcast.
const fn evex_t1s(m: M, ops: &'static [OpSpec]) -> Insn {
    insn(m, C::Avx512, IS::Avx512F, CF::Avx512F, 3, ops)
        .attrs(A::MODRM)
        .deco(VD::MASK.union(VD::ZERO).union(VD::SAE).union(VD::ER))
        .tuple(TT::T1s)
        .exc(XC::Evex, XT::E3)
}

const OPS_EADD_PS: &[OpSpec] = &[
    op(K::V, S::Ps, W).deco(MZ),
    op(K::H, S::Ps, R),
    op(K::W, S::Ps, R).deco(OpDeco::B32.union(OpDeco::SAE).union(OpDeco::ER)),
];
const OPS_EADD_PD: &[OpSpec] = &[
    op(K::V, S::Pd, W).deco(MZ),
    op(K::H, S::Pd, R),
    op(K::W, S::Pd, R).deco(OpDeco::B64.union(OpDeco::SAE).union(OpDeco::ER)),
];
const OPS_EADD_SS: &[OpSpec] = &[
    op(K::V, S::Dq, W).deco(MZ),
    op(K::H, S::Dq, R),
    op(K::W, S::Ss, R).deco(OpDeco::SAE.union(OpDeco::ER)),
];
const OPS_EADD_SD: &[OpSpec] = &[
    op(K::V, S::Dq, W).deco(MZ),
    op(K::H, S::Dq, R),
    op(K::W, S::Sd, R).deco(OpDeco::SAE.union(OpDeco::ER)),
];

macro_rules! evex_arith {
    ($pfx:ident, $ps:ident, $pd:ident, $ss:ident, $sd:ident, $node:ident) => {
        mod $pfx {
            use super::*;

            const I_PS: Insn = evex_fv(M::$ps, OPS_EADD_PS);
            const I_PD: Insn = evex_fv(M::$pd, OPS_EADD_PD);
            const I_SS: Insn = evex_t1s(M::$ss, OPS_EADD_SS);
            const I_SD: Insn = evex_t1s(M::$sd, OPS_EADD_SD);
            static N_PS: Node = Node::Leaf(&I_PS);
            static N_PD: Node = Node::Leaf(&I_PD);
            static N_SS: Node = Node::Leaf(&I_SS);
            static N_SD: Node = Node::Leaf(&I_SD);

            // W must match the element size: W0 for single, W1 for double.
            pub(super) static PS: Node = Node::VexW(&[Some(&N_PS), None]);
            pub(super) static PD: Node = Node::VexW(&[None, Some(&N_PD)]);
            pub(super) static SS: Node = Node::VexW(&[Some(&N_SS), None]);
            pub(super) static SD: Node = Node::VexW(&[None, Some(&N_SD)]);

            pub(super) static PS_L: Node =
                Node::VexL(&[Some(&PS), Some(&PS), Some(&PS), None]);
            pub(super) static PD_L: Node =
                Node::VexL(&[Some(&PD), Some(&PD), Some(&PD), None]);
        }
        static $node: Node = Node::VexPp(&[
            Some(&$pfx::PS_L),
            Some(&$pfx::PD_L),
            Some(&$pfx::SD),
            Some(&$pfx::SS),
        ]);
    };
}

evex_arith!(n_e58, Vaddps, Vaddpd, Vaddss, Vaddsd, N_E58);
evex_arith!(n_e59, Vmulps, Vmulpd, Vmulss, Vmulsd, N_E59);
evex_arith!(n_e5c, Vsubps, Vsubpd, Vsubss, Vsubsd, N_E5C);
evex_arith!(n_e5e, Vdivps, Vdivpd, Vdivss, Vdivsd, N_E5E);

// 10/11: moves. FVM tuple, merging/zeroing masking.
const fn evex_fvm(m: M, ops: &'static [OpSpec]) -> Insn {
    insn(m, C::Avx512, IS::Avx512F, CF::Avx512F, 2, ops)
        .attrs(A::MODRM)
        .deco(MOVE_DECO)
        .tuple(TT::Fvm)
        .exc(XC::Evex, XT::E4NF)
}

const OPS_EMOV_LD: &[OpSpec] = &[op(K::V, S::X, W).deco(MZ), op(K::W, S::X, R)];
const OPS_EMOV_ST: &[OpSpec] = &[op(K::W, S::X, W).deco(MZ), op(K::V, S::X, R)];

const I_EVMOVUPS: Insn = evex_fvm(M::Vmovups, OPS_EMOV_LD);
const I_EVMOVUPS_ST: Insn = evex_fvm(M::Vmovups, OPS_EMOV_ST);
const I_EVMOVUPD: Insn = evex_fvm(M::Vmovupd, OPS_EMOV_LD);
const I_EVMOVUPD_ST: Insn = evex_fvm(M::Vmovupd, OPS_EMOV_ST);
const I_EVMOVSS_LD: Insn = insn(M::Vmovss, C::Avx512, IS::Avx512F, CF::Avx512F, 2, &[
    op(K::V, S::Ss, W).deco(MZ),
    op(K::M, S::Ss, R),
])
.attrs(A::MODRM)
.deco(MOVE_DECO)
.tuple(TT::T1s)
.exc(XC::Evex, XT::E5);
const I_EVMOVSS_RR: Insn = insn(M::Vmovss, C::Avx512, IS::Avx512F, CF::Avx512F, 3, &[
    op(K::V, S::Dq, W).deco(MZ),
    op(K::H, S::Dq, R),
    op(K::U, S::Dq, R),
])
.attrs(A::MODRM)
.deco(MOVE_DECO)
.exc(XC::Evex, XT::E5);
const I_EVMOVSS_ST: Insn = insn(M::Vmovss, C::Avx512, IS::Avx512F, CF::Avx512F, 2, &[
    op(K::M, S::Ss, W).deco(OpDeco::MASK),
    op(K::V, S::Ss, R),
])
.attrs(A::MODRM)
.deco(VD::MASK)
.tuple(TT::T1s)
.exc(XC::Evex, XT::E5);
const I_EVMOVSD_LD: Insn = insn(M::Vmovsd, C::Avx512, IS::Avx512F, CF::Avx512F, 2, &[
    op(K::V, S::Sd, W).deco(MZ),
    op(K::M, S::Sd, R),
])
.attrs(A::MODRM)
.deco(MOVE_DECO)
.tuple(TT::T1s)
.exc(XC::Evex, XT::E5);
const I_EVMOVSD_RR: Insn = insn(M::Vmovsd, C::Avx512, IS::Avx512F, CF::Avx512F, 3, &[
    op(K::V, S::Dq, W).deco(MZ),
    op(K::H, S::Dq, R),
    op(K::U, S::Dq, R),
])
.attrs(A::MODRM)
.deco(MOVE_DECO)
.exc(XC::Evex, XT::E5);
const I_EVMOVSD_ST: Insn = insn(M::Vmovsd, C::Avx512, IS::Avx512F, CF::Avx512F, 2, &[
    op(K::M, S::Sd, W).deco(OpDeco::MASK),
    op(K::V, S::Sd, R),
])
.attrs(A::MODRM)
.deco(VD::MASK)
.tuple(TT::T1s)
.exc(XC::Evex, XT::E5);
static N_EVMOVUPS: Node = Node::Leaf(&I_EVMOVUPS);
static N_EVMOVUPS_ST: Node = Node::Leaf(&I_EVMOVUPS_ST);
static N_EVMOVUPD: Node = Node::Leaf(&I_EVMOVUPD);
static N_EVMOVUPD_ST: Node = Node::Leaf(&I_EVMOVUPD_ST);
static N_EVMOVSS_LD: Node = Node::Leaf(&I_EVMOVSS_LD);
static N_EVMOVSS_RR: Node = Node::Leaf(&I_EVMOVSS_RR);
static N_EVMOVSS_ST: Node = Node::Leaf(&I_EVMOVSS_ST);
static N_EVMOVSD_LD: Node = Node::Leaf(&I_EVMOVSD_LD);
static N_EVMOVSD_RR: Node = Node::Leaf(&I_EVMOVSD_RR);
static N_EVMOVSD_ST: Node = Node::Leaf(&I_EVMOVSD_ST);

static N_E10_SS: Node = Node::ModrmMod(&[Some(&N_EVMOVSS_LD), Some(&N_EVMOVSS_RR)]);
static N_E10_SD: Node = Node::ModrmMod(&[Some(&N_EVMOVSD_LD), Some(&N_EVMOVSD_RR)]);
static N_E11_SS: Node = Node::ModrmMod(&[Some(&N_EVMOVSS_ST), Some(&N_EVMOVSS_RR)]);
static N_E11_SD: Node = Node::ModrmMod(&[Some(&N_EVMOVSD_ST), Some(&N_EVMOVSD_RR)]);

static N_EVMOVUPS_W: Node = Node::VexW(&[Some(&N_EVMOVUPS), None]);
static N_EVMOVUPS_ST_W: Node = Node::VexW(&[Some(&N_EVMOVUPS_ST), None]);
static N_EVMOVUPD_W: Node = Node::VexW(&[None, Some(&N_EVMOVUPD)]);
static N_EVMOVUPD_ST_W: Node = Node::VexW(&[None, Some(&N_EVMOVUPD_ST)]);

static N_E10: Node = Node::VexPp(&[
    Some(&N_EVMOVUPS_W),
    Some(&N_EVMOVUPD_W),
    Some(&N_E10_SD),
    Some(&N_E10_SS),
]);
static N_E11: Node = Node::VexPp(&[
    Some(&N_EVMOVUPS_ST_W),
    Some(&N_EVMOVUPD_ST_W),
    Some(&N_E11_SD),
    Some(&N_E11_SS),
]);

// 6F/7F: integer moves, element size by W.
const I_EVMOVDQA32: Insn = evex_fvm(M::Vmovdqa32, OPS_EMOV_LD);
const I_EVMOVDQA64: Insn = evex_fvm(M::Vmovdqa64, OPS_EMOV_LD);
const I_EVMOVDQU32: Insn = evex_fvm(M::Vmovdqu32, OPS_EMOV_LD);
const I_EVMOVDQU64: Insn = evex_fvm(M::Vmovdqu64, OPS_EMOV_LD);
const I_EVMOVDQA32_ST: Insn = evex_fvm(M::Vmovdqa32, OPS_EMOV_ST);
const I_EVMOVDQA64_ST: Insn = evex_fvm(M::Vmovdqa64, OPS_EMOV_ST);
const I_EVMOVDQU32_ST: Insn = evex_fvm(M::Vmovdqu32, OPS_EMOV_ST);
const I_EVMOVDQU64_ST: Insn = evex_fvm(M::Vmovdqu64, OPS_EMOV_ST);
static N_EVMOVDQA32: Node = Node::Leaf(&I_EVMOVDQA32);
static N_EVMOVDQA64: Node = Node::Leaf(&I_EVMOVDQA64);
static N_EVMOVDQU32: Node = Node::Leaf(&I_EVMOVDQU32);
static N_EVMOVDQU64: Node = Node::Leaf(&I_EVMOVDQU64);
static N_EVMOVDQA32_ST: Node = Node::Leaf(&I_EVMOVDQA32_ST);
static N_EVMOVDQA64_ST: Node = Node::Leaf(&I_EVMOVDQA64_ST);
static N_EVMOVDQU32_ST: Node = Node::Leaf(&I_EVMOVDQU32_ST);
static N_EVMOVDQU64_ST: Node = Node::Leaf(&I_EVMOVDQU64_ST);

static N_E6F_66: Node = Node::VexW(&[Some(&N_EVMOVDQA32), Some(&N_EVMOVDQA64)]);
static N_E6F_F3: Node = Node::VexW(&[Some(&N_EVMOVDQU32), Some(&N_EVMOVDQU64)]);
static N_E7F_66: Node = Node::VexW(&[Some(&N_EVMOVDQA32_ST), Some(&N_EVMOVDQA64_ST)]);
static N_E7F_F3: Node = Node::VexW(&[Some(&N_EVMOVDQU32_ST), Some(&N_EVMOVDQU64_ST)]);
static N_E6F: Node = Node::VexPp(&[None, Some(&N_E6F_66), None, Some(&N_E6F_F3)]);
static N_E7F: Node = Node::VexPp(&[None, Some(&N_E7F_66), None, Some(&N_E7F_F3)]);

// EF/FE: integer xor and add with broadcast.
const fn evex_int(m: M, ops: &'static [OpSpec]) -> Insn {
    insn(m, C::Avx512, IS::Avx512F, CF::Avx512F, 3, ops)
        .attrs(A::MODRM)
        .deco(VD::MASK.union(VD::ZERO).union(VD::BROADCAST))
        .tuple(TT::Fv)
        .exc(XC::Evex, XT::E4)
}

const OPS_EINT_D: &[OpSpec] = &[
    op(K::V, S::X, W).deco(MZ),
    op(K::H, S::X, R),
    op(K::W, S::X, R).deco(OpDeco::B32),
];
const OPS_EINT_Q: &[OpSpec] = &[
    op(K::V, S::X, W).deco(MZ),
    op(K::H, S::X, R),
    op(K::W, S::X, R).deco(OpDeco::B64),
];

const I_VPXORD: Insn = evex_int(M::Vpxord, OPS_EINT_D);
const I_VPXORQ: Insn = evex_int(M::Vpxorq, OPS_EINT_Q);
const I_EVPADDD: Insn = evex_int(M::Vpaddd, OPS_EINT_D);
static N_VPXORD: Node = Node::Leaf(&I_VPXORD);
static N_VPXORQ: Node = Node::Leaf(&I_VPXORQ);
static N_EVPADDD: Node = Node::Leaf(&I_EVPADDD);

static N_EEF_W: Node = Node::VexW(&[Some(&N_VPXORD), Some(&N_VPXORQ)]);
static N_EEF: Node = Node::VexPp(&[None, Some(&N_EEF_W), None, None]);
static N_EFE_W: Node = Node::VexW(&[Some(&N_EVPADDD), None]);
static N_EFE: Node = Node::VexPp(&[None, Some(&N_EFE_W), None, None]);

// C2: compares into a mask register.
const fn evex_cmp(m: M, ops: &'static [OpSpec], tuple: TT) -> Insn {
    insn(m, C::Avx512, IS::Avx512F, CF::Avx512F, 4, ops)
        .attrs(A::MODRM.union(A::SSE_COND))
        .deco(VD::MASK.union(VD::BROADCAST).union(VD::SAE))
        .tuple(tuple)
        .exc(XC::Evex, XT::E2)
}

const OPS_ECMP_PS: &[OpSpec] = &[
    op(K::Rk, S::Q, W).deco(OpDeco::MASK),
    op(K::H, S::Ps, R),
    op(K::W, S::Ps, R).deco(OpDeco::B32.union(OpDeco::SAE)),
    op(K::I, S::B, R),
];
const OPS_ECMP_PD: &[OpSpec] = &[
    op(K::Rk, S::Q, W).deco(OpDeco::MASK),
    op(K::H, S::Pd, R),
    op(K::W, S::Pd, R).deco(OpDeco::B64.union(OpDeco::SAE)),
    op(K::I, S::B, R),
];
const OPS_ECMP_SS: &[OpSpec] = &[
    op(K::Rk, S::Q, W).deco(OpDeco::MASK),
    op(K::H, S::Dq, R),
    op(K::W, S::Ss, R).deco(OpDeco::SAE),
    op(K::I, S::B, R),
];
const OPS_ECMP_SD: &[OpSpec] = &[
    op(K::Rk, S::Q, W).deco(OpDeco::MASK),
    op(K::H, S::Dq, R),
    op(K::W, S::Sd, R).deco(OpDeco::SAE),
    op(K::I, S::B, R),
];

const I_EVCMPPS: Insn = evex_cmp(M::Vcmpps, OPS_ECMP_PS, TT::Fv);
const I_EVCMPPD: Insn = evex_cmp(M::Vcmppd, OPS_ECMP_PD, TT::Fv);
const I_EVCMPSS: Insn = evex_cmp(M::Vcmpss, OPS_ECMP_SS, TT::T1s);
const I_EVCMPSD: Insn = evex_cmp(M::Vcmpsd, OPS_ECMP_SD, TT::T1s);
static N_EVCMPPS: Node = Node::Leaf(&I_EVCMPPS);
static N_EVCMPPD: Node = Node::Leaf(&I_EVCMPPD);
static N_EVCMPSS: Node = Node::Leaf(&I_EVCMPSS);
static N_EVCMPSD: Node = Node::Leaf(&I_EVCMPSD);

static N_EC2_PS_W: Node = Node::VexW(&[Some(&N_EVCMPPS), None]);
static N_EC2_PD_W: Node = Node::VexW(&[None, Some(&N_EVCMPPD)]);
static N_EC2_SS_W: Node = Node::VexW(&[Some(&N_EVCMPSS), None]);
static N_EC2_SD_W: Node = Node::VexW(&[None, Some(&N_EVCMPSD)]);
static N_EC2: Node = Node::VexPp(&[
    Some(&N_EC2_PS_W),
    Some(&N_EC2_PD_W),
    Some(&N_EC2_SD_W),
    Some(&N_EC2_SS_W),
]);

static MAP_EVEX1: [Link; 256] = {
    let mut t: [Link; 256] = [None; 256];
    t[0x10] = Some(&N_E10);
    t[0x11] = Some(&N_E11);
    t[0x58] = Some(&N_E58);
    t[0x59] = Some(&N_E59);
    t[0x5C] = Some(&N_E5C);
    t[0x5E] = Some(&N_E5E);
    t[0x6F] = Some(&N_E6F);
    t[0x7F] = Some(&N_E7F);
    t[0xC2] = Some(&N_EC2);
    t[0xEF] = Some(&N_EEF);
    t[0xFE] = Some(&N_EFE);
    t
};

static N_MAP_EVEX1: Node = Node::Opcode(&MAP_EVEX1);

// ---------------------------------------------------------------------------
// Map 2: gathers, scatters, VP2INTERSECT.
// ---------------------------------------------------------------------------

// EVEX gathers require a non-zero mask, which is consumed entirely.
const fn egather(m: M, ops: &'static [OpSpec]) -> Insn {
    insn(m, C::Gather, IS::Avx512F, CF::Avx512F, 2, ops)
        .attrs(A::MODRM.union(A::VSIB).union(A::MMASK))
        .deco(VD::MASK)
        .tuple(TT::T1s)
        .exc(XC::Evex, XT::E12)
}

const fn escatter(m: M, ops: &'static [OpSpec]) -> Insn {
    insn(m, C::Scatter, IS::Avx512F, CF::Avx512F, 2, ops)
        .attrs(A::MODRM.union(A::VSIB).union(A::MMASK))
        .deco(VD::MASK)
        .tuple(TT::T1s)
        .exc(XC::Evex, XT::E12)
}

const MASK_RW: OpSpec = op(K::Ak, S::Q, RW);

const OPS_EGATHER_DD: &[OpSpec] = &[
    op(K::V, S::X, CW).deco(OpDeco::MASK),
    op(K::M, S::Vm32z, CR),
    MASK_RW,
];
const OPS_EGATHER_DQ: &[OpSpec] = &[
    op(K::V, S::X, CW).deco(OpDeco::MASK),
    op(K::M, S::Vm32h, CR),
    MASK_RW,
];
const OPS_EGATHER_QD: &[OpSpec] = &[
    op(K::V, S::H, CW).deco(OpDeco::MASK),
    op(K::M, S::Vm64z, CR),
    MASK_RW,
];
const OPS_EGATHER_QQ: &[OpSpec] = &[
    op(K::V, S::X, CW).deco(OpDeco::MASK),
    op(K::M, S::Vm64z, CR),
    MASK_RW,
];
const OPS_ESCATTER_DD: &[OpSpec] = &[
    op(K::M, S::Vm32z, CW),
    op(K::V, S::X, CR).deco(OpDeco::MASK),
    MASK_RW,
];
const OPS_ESCATTER_DQ: &[OpSpec] = &[
    op(K::M, S::Vm32h, CW),
    op(K::V, S::X, CR).deco(OpDeco::MASK),
    MASK_RW,
];
const OPS_ESCATTER_QD: &[OpSpec] = &[
    op(K::M, S::Vm64z, CW),
    op(K::V, S::H, CR).deco(OpDeco::MASK),
    MASK_RW,
];
const OPS_ESCATTER_QQ: &[OpSpec] = &[
    op(K::M, S::Vm64z, CW),
    op(K::V, S::X, CR).deco(OpDeco::MASK),
    MASK_RW,
];

const I_EVPGATHERDD: Insn = egather(M::Vpgatherdd, OPS_EGATHER_DD);
const I_EVPGATHERDQ: Insn = egather(M::Vpgatherdq, OPS_EGATHER_DQ);
const I_EVPGATHERQD: Insn = egather(M::Vpgatherqd, OPS_EGATHER_QD);
const I_EVPGATHERQQ: Insn = egather(M::Vpgatherqq, OPS_EGATHER_QQ);
const I_EVGATHERDPS: Insn = egather(M::Vgatherdps, OPS_EGATHER_DD);
const I_EVGATHERDPD: Insn = egather(M::Vgatherdpd, OPS_EGATHER_DQ);
const I_EVGATHERQPS: Insn = egather(M::Vgatherqps, OPS_EGATHER_QD);
const I_EVGATHERQPD: Insn = egather(M::Vgatherqpd, OPS_EGATHER_QQ);
const I_VPSCATTERDD: Insn = escatter(M::Vpscatterdd, OPS_ESCATTER_DD);
const I_VPSCATTERDQ: Insn = escatter(M::Vpscatterdq, OPS_ESCATTER_DQ);
const I_VPSCATTERQD: Insn = escatter(M::Vpscatterqd, OPS_ESCATTER_QD);
const I_VPSCATTERQQ: Insn = escatter(M::Vpscatterqq, OPS_ESCATTER_QQ);
const I_VSCATTERDPS: Insn = escatter(M::Vscatterdps, OPS_ESCATTER_DD);
const I_VSCATTERDPD: Insn = escatter(M::Vscatterdpd, OPS_ESCATTER_DQ);
const I_VSCATTERQPS: Insn = escatter(M::Vscatterqps, OPS_ESCATTER_QD);
const I_VSCATTERQPD: Insn = escatter(M::Vscatterqpd, OPS_ESCATTER_QQ);
static N_EVPGATHERDD: Node = Node::Leaf(&I_EVPGATHERDD);
static N_EVPGATHERDQ: Node = Node::Leaf(&I_EVPGATHERDQ);
static N_EVPGATHERQD: Node = Node::Leaf(&I_EVPGATHERQD);
static N_EVPGATHERQQ: Node = Node::Leaf(&I_EVPGATHERQQ);
static N_EVGATHERDPS: Node = Node::Leaf(&I_EVGATHERDPS);
static N_EVGATHERDPD: Node = Node::Leaf(&I_EVGATHERDPD);
static N_EVGATHERQPS: Node = Node::Leaf(&I_EVGATHERQPS);
static N_EVGATHERQPD: Node = Node::Leaf(&I_EVGATHERQPD);
static N_VPSCATTERDD: Node = Node::Leaf(&I_VPSCATTERDD);
static N_VPSCATTERDQ: Node = Node::Leaf(&I_VPSCATTERDQ);
static N_VPSCATTERQD: Node = Node::Leaf(&I_VPSCATTERQD);
static N_VPSCATTERQQ: Node = Node::Leaf(&I_VPSCATTERQQ);
static N_VSCATTERDPS: Node = Node::Leaf(&I_VSCATTERDPS);
static N_VSCATTERDPD: Node = Node::Leaf(&I_VSCATTERDPD);
static N_VSCATTERQPS: Node = Node::Leaf(&I_VSCATTERQPS);
static N_VSCATTERQPD: Node = Node::Leaf(&I_VSCATTERQPD);

static N_E2_90_W: Node = Node::VexW(&[Some(&N_EVPGATHERDD), Some(&N_EVPGATHERDQ)]);
static N_E2_91_W: Node = Node::VexW(&[Some(&N_EVPGATHERQD), Some(&N_EVPGATHERQQ)]);
static N_E2_92_W: Node = Node::VexW(&[Some(&N_EVGATHERDPS), Some(&N_EVGATHERDPD)]);
static N_E2_93_W: Node = Node::VexW(&[Some(&N_EVGATHERQPS), Some(&N_EVGATHERQPD)]);
static N_E2_A0_W: Node = Node::VexW(&[Some(&N_VPSCATTERDD), Some(&N_VPSCATTERDQ)]);
static N_E2_A1_W: Node = Node::VexW(&[Some(&N_VPSCATTERQD), Some(&N_VPSCATTERQQ)]);
static N_E2_A2_W: Node = Node::VexW(&[Some(&N_VSCATTERDPS), Some(&N_VSCATTERDPD)]);
static N_E2_A3_W: Node = Node::VexW(&[Some(&N_VSCATTERQPS), Some(&N_VSCATTERQPD)]);
static N_E2_90: Node = Node::VexPp(&[None, Some(&N_E2_90_W), None, None]);
static N_E2_91: Node = Node::VexPp(&[None, Some(&N_E2_91_W), None, None]);
static N_E2_92: Node = Node::VexPp(&[None, Some(&N_E2_92_W), None, None]);
static N_E2_93: Node = Node::VexPp(&[None, Some(&N_E2_93_W), None, None]);
static N_E2_A0: Node = Node::VexPp(&[None, Some(&N_E2_A0_W), None, None]);
static N_E2_A1: Node = Node::VexPp(&[None, Some(&N_E2_A1_W), None, None]);
static N_E2_A2: Node = Node::VexPp(&[None, Some(&N_E2_A2_W), None, None]);
static N_E2_A3: Node = Node::VexPp(&[None, Some(&N_E2_A3_W), None, None]);

// VP2INTERSECTD writes a pair of mask registers.
const I_VP2INTERSECTD: Insn = insn(
    M::Vp2intersectd,
    C::Avx512,
    IS::Avx512Vp2Intersect,
    CF::Avx512Vp2Intersect,
    3,
    &[
        op(K::Rk, S::Q, W).block(2),
        op(K::H, S::X, R),
        op(K::W, S::X, R).deco(OpDeco::B32),
    ],
)
.attrs(A::MODRM)
.deco(VD::BROADCAST)
.tuple(TT::Fv)
.exc(XC::Evex, XT::E4NF);
static N_VP2INTERSECTD: Node = Node::Leaf(&I_VP2INTERSECTD);
static N_E2_68_W: Node = Node::VexW(&[Some(&N_VP2INTERSECTD), None]);
static N_E2_68: Node = Node::VexPp(&[None, None, Some(&N_E2_68_W), None]);

static MAP_EVEX2: [Link; 256] = {
    let mut t: [Link; 256] = [None; 256];
    t[0x68] = Some(&N_E2_68);
    t[0x90] = Some(&N_E2_90);
    t[0x91] = Some(&N_E2_91);
    t[0x92] = Some(&N_E2_92);
    t[0x93] = Some(&N_E2_93);
    t[0xA0] = Some(&N_E2_A0);
    t[0xA1] = Some(&N_E2_A1);
    t[0xA2] = Some(&N_E2_A2);
    t[0xA3] = Some(&N_E2_A3);
    t
};

static N_MAP_EVEX2: Node = Node::Opcode(&MAP_EVEX2);

// ---------------------------------------------------------------------------
// Map 3: ternary logic.
// ---------------------------------------------------------------------------

const I_VPTERNLOGD: Insn = insn(M::Vpternlogd, C::Avx512, IS::Avx512F, CF::Avx512F, 4, &[
    op(K::V, S::X, RW).deco(MZ),
    op(K::H, S::X, R),
    op(K::W, S::X, R).deco(OpDeco::B32),
    op(K::I, S::B, R),
])
.attrs(A::MODRM)
.deco(VD::MASK.union(VD::ZERO).union(VD::BROADCAST))
.tuple(TT::Fv)
.exc(XC::Evex, XT::E4);
static N_VPTERNLOGD: Node = Node::Leaf(&I_VPTERNLOGD);
static N_E3_25_W: Node = Node::VexW(&[Some(&N_VPTERNLOGD), None]);
static N_E3_25: Node = Node::VexPp(&[None, Some(&N_E3_25_W), None, None]);

static MAP_EVEX3: [Link; 256] = {
    let mut t: [Link; 256] = [None; 256];
    t[0x25] = Some(&N_E3_25);
    t
};

static N_MAP_EVEX3: Node = Node::Opcode(&MAP_EVEX3);

/// The root of the EVEX forest, indexed by the map field.
pub(crate) static ROOT_EVEX: Node = Node::VexMap(&{
    let mut t: [Link; 32] = [None; 32];
    t[1] = Some(&N_MAP_EVEX1);
    t[2] = Some(&N_MAP_EVEX2);
    t[3] = Some(&N_MAP_EVEX3);
    t
});
