//! The VEX encoding tables (maps 1..3).

use super::{
    insn, op, FlagOps, Insn, Link, Node, OpKind as K, OpSize as S, OpSpec,
};
use crate::enums::{
    Category as C, CpuFlags, CpuidFeature as CF, ExceptionClass as XC, ExceptionType as XT,
    InsnAttributes as A, IsaSet as IS, Mnemonic as M, OperandAccess,
};

const R: OperandAccess = OperandAccess::READ;
const W: OperandAccess = OperandAccess::WRITE;
const RW: OperandAccess = OperandAccess::RW;
const RCW: OperandAccess = OperandAccess::RCW;

const fn avx(m: M, ops: &'static [OpSpec]) -> Insn {
    insn(m, C::Avx, IS::Avx, CF::Avx, ops.len() as u8, ops)
        .attrs(A::MODRM.union(A::WIG))
        .exc(XC::SseAvx, XT::T4)
}

const OPS_VX_WX: &[OpSpec] = &[op(K::V, S::X, W), op(K::W, S::X, R)];
const OPS_WX_VX: &[OpSpec] = &[op(K::W, S::X, W), op(K::V, S::X, R)];
const OPS_VHW_PS: &[OpSpec] = &[op(K::V, S::Ps, W), op(K::H, S::Ps, R), op(K::W, S::Ps, R)];
const OPS_VHW_PD: &[OpSpec] = &[op(K::V, S::Pd, W), op(K::H, S::Pd, R), op(K::W, S::Pd, R)];
const OPS_VHW_SS: &[OpSpec] = &[op(K::V, S::Dq, W), op(K::H, S::Dq, R), op(K::W, S::Ss, R)];
const OPS_VHW_SD: &[OpSpec] = &[op(K::V, S::Dq, W), op(K::H, S::Dq, R), op(K::W, S::Sd, R)];
const OPS_VX_WX_IB: &[OpSpec] = &[op(K::V, S::X, W), op(K::W, S::X, R), op(K::I, S::B, R)];

/// Wraps the same leaf for both 128 and 256 bit lengths.
macro_rules! vex_l_any {
    ($node:ident, $leaf:ident) => {
        static $node: Node = Node::VexL(&[Some(&$leaf), Some(&$leaf), None, None]);
    };
}

// 10/11: unaligned moves and the scalar forms.
const I_VMOVUPS: Insn = avx(M::Vmovups, OPS_VX_WX);
const I_VMOVUPS_ST: Insn = avx(M::Vmovups, OPS_WX_VX);
const I_VMOVUPD: Insn = avx(M::Vmovupd, OPS_VX_WX);
const I_VMOVUPD_ST: Insn = avx(M::Vmovupd, OPS_WX_VX);
const I_VMOVSS_LD: Insn = avx(M::Vmovss, &[op(K::V, S::Ss, W), op(K::M, S::Ss, R)]).attrs(A::MODRM.union(A::WIG).union(A::LIG));
const I_VMOVSS_RR: Insn = avx(M::Vmovss, &[
    op(K::V, S::Dq, W),
    op(K::H, S::Dq, R),
    op(K::U, S::Dq, R),
])
.attrs(A::MODRM.union(A::WIG).union(A::LIG));
const I_VMOVSS_ST: Insn = avx(M::Vmovss, &[op(K::M, S::Ss, W), op(K::V, S::Ss, R)]).attrs(A::MODRM.union(A::WIG).union(A::LIG));
const I_VMOVSS_SR: Insn = avx(M::Vmovss, &[
    op(K::U, S::Dq, W),
    op(K::H, S::Dq, R),
    op(K::V, S::Dq, R),
])
.attrs(A::MODRM.union(A::WIG).union(A::LIG));
const I_VMOVSD_LD: Insn = avx(M::Vmovsd, &[op(K::V, S::Sd, W), op(K::M, S::Sd, R)]).attrs(A::MODRM.union(A::WIG).union(A::LIG));
const I_VMOVSD_RR: Insn = avx(M::Vmovsd, &[
    op(K::V, S::Dq, W),
    op(K::H, S::Dq, R),
    op(K::U, S::Dq, R),
])
.attrs(A::MODRM.union(A::WIG).union(A::LIG));
const I_VMOVSD_ST: Insn = avx(M::Vmovsd, &[op(K::M, S::Sd, W), op(K::V, S::Sd, R)]).attrs(A::MODRM.union(A::WIG).union(A::LIG));
const I_VMOVSD_SR: Insn = avx(M::Vmovsd, &[
    op(K::U, S::Dq, W),
    op(K::H, S::Dq, R),
    op(K::V, S::Dq, R),
])
.attrs(A::MODRM.union(A::WIG).union(A::LIG));
static N_VMOVUPS: Node = Node::Leaf(&I_VMOVUPS);
static N_VMOVUPS_ST: Node = Node::Leaf(&I_VMOVUPS_ST);
static N_VMOVUPD: Node = Node::Leaf(&I_VMOVUPD);
static N_VMOVUPD_ST: Node = Node::Leaf(&I_VMOVUPD_ST);
static N_VMOVSS_LD: Node = Node::Leaf(&I_VMOVSS_LD);
static N_VMOVSS_RR: Node = Node::Leaf(&I_VMOVSS_RR);
static N_VMOVSS_ST: Node = Node::Leaf(&I_VMOVSS_ST);
static N_VMOVSS_SR: Node = Node::Leaf(&I_VMOVSS_SR);
static N_VMOVSD_LD: Node = Node::Leaf(&I_VMOVSD_LD);
static N_VMOVSD_RR: Node = Node::Leaf(&I_VMOVSD_RR);
static N_VMOVSD_ST: Node = Node::Leaf(&I_VMOVSD_ST);
static N_VMOVSD_SR: Node = Node::Leaf(&I_VMOVSD_SR);

vex_l_any!(NL_VMOVUPS, N_VMOVUPS);
vex_l_any!(NL_VMOVUPS_ST, N_VMOVUPS_ST);
vex_l_any!(NL_VMOVUPD, N_VMOVUPD);
vex_l_any!(NL_VMOVUPD_ST, N_VMOVUPD_ST);

static N_V10_SS: Node = Node::ModrmMod(&[Some(&N_VMOVSS_LD), Some(&N_VMOVSS_RR)]);
static N_V10_SD: Node = Node::ModrmMod(&[Some(&N_VMOVSD_LD), Some(&N_VMOVSD_RR)]);
static N_V11_SS: Node = Node::ModrmMod(&[Some(&N_VMOVSS_ST), Some(&N_VMOVSS_SR)]);
static N_V11_SD: Node = Node::ModrmMod(&[Some(&N_VMOVSD_ST), Some(&N_VMOVSD_SR)]);

static N_V10: Node = Node::VexPp(&[
    Some(&NL_VMOVUPS),
    Some(&NL_VMOVUPD),
    Some(&N_V10_SD),
    Some(&N_V10_SS),
]);
static N_V11: Node = Node::VexPp(&[
    Some(&NL_VMOVUPS_ST),
    Some(&NL_VMOVUPD_ST),
    Some(&N_V11_SD),
    Some(&N_V11_SS),
]);

// 28/29: aligned moves.
const I_VMOVAPS: Insn = avx(M::Vmovaps, OPS_VX_WX);
const I_VMOVAPS_ST: Insn = avx(M::Vmovaps, OPS_WX_VX);
const I_VMOVAPD: Insn = avx(M::Vmovapd, OPS_VX_WX);
const I_VMOVAPD_ST: Insn = avx(M::Vmovapd, OPS_WX_VX);
static N_VMOVAPS: Node = Node::Leaf(&I_VMOVAPS);
static N_VMOVAPS_ST: Node = Node::Leaf(&I_VMOVAPS_ST);
static N_VMOVAPD: Node = Node::Leaf(&I_VMOVAPD);
static N_VMOVAPD_ST: Node = Node::Leaf(&I_VMOVAPD_ST);
vex_l_any!(NL_VMOVAPS, N_VMOVAPS);
vex_l_any!(NL_VMOVAPS_ST, N_VMOVAPS_ST);
vex_l_any!(NL_VMOVAPD, N_VMOVAPD);
vex_l_any!(NL_VMOVAPD_ST, N_VMOVAPD_ST);

static N_V28: Node = Node::VexPp(&[Some(&NL_VMOVAPS), Some(&NL_VMOVAPD), None, None]);
static N_V29: Node = Node::VexPp(&[Some(&NL_VMOVAPS_ST), Some(&NL_VMOVAPD_ST), None, None]);

// 2E/2F: ordered and unordered scalar compares.
const fn vcomis(m: M, ops: &'static [OpSpec]) -> Insn {
    insn(m, C::Avx, IS::Avx, CF::Avx, 2, ops)
        .attrs(A::MODRM.union(A::WIG).union(A::LIG))
        .exc(XC::SseAvx, XT::T3)
        .flags(FlagOps::COMIS)
}

const OPS_VCOMISS: &[OpSpec] = &[
    op(K::V, S::Ss, R),
    op(K::W, S::Ss, R),
    op(K::F, S::V, W).flg(super::OpFlags::OPDEF),
];
const OPS_VCOMISD: &[OpSpec] = &[
    op(K::V, S::Sd, R),
    op(K::W, S::Sd, R),
    op(K::F, S::V, W).flg(super::OpFlags::OPDEF),
];
const I_VUCOMISS: Insn = vcomis(M::Vucomiss, OPS_VCOMISS);
const I_VUCOMISD: Insn = vcomis(M::Vucomisd, OPS_VCOMISD);
const I_VCOMISS: Insn = vcomis(M::Vcomiss, OPS_VCOMISS);
const I_VCOMISD: Insn = vcomis(M::Vcomisd, OPS_VCOMISD);
static N_VUCOMISS: Node = Node::Leaf(&I_VUCOMISS);
static N_VUCOMISD: Node = Node::Leaf(&I_VUCOMISD);
static N_VCOMISS: Node = Node::Leaf(&I_VCOMISS);
static N_VCOMISD: Node = Node::Leaf(&I_VCOMISD);
static N_V2E: Node = Node::VexPp(&[Some(&N_VUCOMISS), Some(&N_VUCOMISD), None, None]);
static N_V2F: Node = Node::VexPp(&[Some(&N_VCOMISS), Some(&N_VCOMISD), None, None]);

// 50: move mask.
const I_VMOVMSKPS: Insn = avx(M::Vmovmskps, &[op(K::G, S::Y, W), op(K::U, S::Ps, R)]);
const I_VMOVMSKPD: Insn = avx(M::Vmovmskpd, &[op(K::G, S::Y, W), op(K::U, S::Pd, R)]);
static N_VMOVMSKPS: Node = Node::Leaf(&I_VMOVMSKPS);
static N_VMOVMSKPD: Node = Node::Leaf(&I_VMOVMSKPD);
static N_V50: Node = Node::VexPp(&[Some(&N_VMOVMSKPS), Some(&N_VMOVMSKPD), None, None]);

// 51: square roots.
const I_VSQRTPS: Insn = avx(M::Vsqrtps, &[op(K::V, S::Ps, W), op(K::W, S::Ps, R)]);
const I_VSQRTPD: Insn = avx(M::Vsqrtpd, &[op(K::V, S::Pd, W), op(K::W, S::Pd, R)]);
const I_VSQRTSS: Insn = avx(M::Vsqrtss, OPS_VHW_SS);
const I_VSQRTSD: Insn = avx(M::Vsqrtsd, OPS_VHW_SD);
static N_VSQRTPS: Node = Node::Leaf(&I_VSQRTPS);
static N_VSQRTPD: Node = Node::Leaf(&I_VSQRTPD);
static N_VSQRTSS: Node = Node::Leaf(&I_VSQRTSS);
static N_VSQRTSD: Node = Node::Leaf(&I_VSQRTSD);
static N_V51: Node = Node::VexPp(&[
    Some(&N_VSQRTPS),
    Some(&N_VSQRTPD),
    Some(&N_VSQRTSD),
    Some(&N_VSQRTSS),
]);

// 54..57: packed logic.
const I_VANDPS: Insn = avx(M::Vandps, OPS_VHW_PS);
const I_VANDPD: Insn = avx(M::Vandpd, OPS_VHW_PD);
const I_VANDNPS: Insn = avx(M::Vandnps, OPS_VHW_PS);
const I_VANDNPD: Insn = avx(M::Vandnpd, OPS_VHW_PD);
const I_VORPS: Insn = avx(M::Vorps, OPS_VHW_PS);
const I_VORPD: Insn = avx(M::Vorpd, OPS_VHW_PD);
const I_VXORPS: Insn = avx(M::Vxorps, OPS_VHW_PS);
const I_VXORPD: Insn = avx(M::Vxorpd, OPS_VHW_PD);
static N_VANDPS: Node = Node::Leaf(&I_VANDPS);
static N_VANDPD: Node = Node::Leaf(&I_VANDPD);
static N_VANDNPS: Node = Node::Leaf(&I_VANDNPS);
static N_VANDNPD: Node = Node::Leaf(&I_VANDNPD);
static N_VORPS: Node = Node::Leaf(&I_VORPS);
static N_VORPD: Node = Node::Leaf(&I_VORPD);
static N_VXORPS: Node = Node::Leaf(&I_VXORPS);
static N_VXORPD: Node = Node::Leaf(&I_VXORPD);
static N_V54: Node = Node::VexPp(&[Some(&N_VANDPS), Some(&N_VANDPD), None, None]);
static N_V55: Node = Node::VexPp(&[Some(&N_VANDNPS), Some(&N_VANDNPD), None, None]);
static N_V56: Node = Node::VexPp(&[Some(&N_VORPS), Some(&N_VORPD), None, None]);
static N_V57: Node = Node::VexPp(&[Some(&N_VXORPS), Some(&N_VXORPD), None, None]);

// 58/59/5C/5D/5E/5F: the arithmetic families.
macro_rules! vex_arith {
    ($pfx:ident, $ps:ident, $pd:ident, $ss:ident, $sd:ident, $node:ident) => {
        mod $pfx {
            use super::*;

            const I_PS: Insn = avx(M::$ps, OPS_VHW_PS);
            const I_PD: Insn = avx(M::$pd, OPS_VHW_PD);
            const I_SS: Insn = avx(M::$ss, OPS_VHW_SS);
            const I_SD: Insn = avx(M::$sd, OPS_VHW_SD);
            pub(super) static PS: Node = Node::Leaf(&I_PS);
            pub(super) static PD: Node = Node::Leaf(&I_PD);
            pub(super) static SS: Node = Node::Leaf(&I_SS);
            pub(super) static SD: Node = Node::Leaf(&I_SD);
        }
        static $node: Node = Node::VexPp(&[
            Some(&$pfx::PS),
            Some(&$pfx::PD),
            Some(&$pfx::SD),
            Some(&$pfx::SS),
        ]);
    };
}

vex_arith!(n_v58, Vaddps, Vaddpd, Vaddss, Vaddsd, N_V58);
vex_arith!(n_v59, Vmulps, Vmulpd, Vmulss, Vmulsd, N_V59);
vex_arith!(n_v5c, Vsubps, Vsubpd, Vsubss, Vsubsd, N_V5C);
vex_arith!(n_v5d, Vminps, Vminpd, Vminss, Vminsd, N_V5D);
vex_arith!(n_v5e, Vdivps, Vdivpd, Vdivss, Vdivsd, N_V5E);
vex_arith!(n_v5f, Vmaxps, Vmaxpd, Vmaxss, Vmaxsd, N_V5F);

// 6E/7E: GPR moves; the W bit picks VMOVD or VMOVQ.
const I_VMOVD_V_E: Insn = avx(M::Vmovd, &[op(K::V, S::Dq, W), op(K::E, S::D, R)])
    .attrs(A::MODRM);
const I_VMOVQ_V_E: Insn = avx(M::Vmovq, &[op(K::V, S::Dq, W), op(K::E, S::Q, R)])
    .attrs(A::MODRM);
const I_VMOVD_E_V: Insn = avx(M::Vmovd, &[op(K::E, S::D, W), op(K::V, S::Dq, R)])
    .attrs(A::MODRM);
const I_VMOVQ_E_V: Insn = avx(M::Vmovq, &[op(K::E, S::Q, W), op(K::V, S::Dq, R)])
    .attrs(A::MODRM);
const I_VMOVQ_V_W: Insn = avx(M::Vmovq, &[op(K::V, S::Dq, W), op(K::W, S::Q, R)]);
static N_VMOVD_V_E: Node = Node::Leaf(&I_VMOVD_V_E);
static N_VMOVQ_V_E: Node = Node::Leaf(&I_VMOVQ_V_E);
static N_VMOVD_E_V: Node = Node::Leaf(&I_VMOVD_E_V);
static N_VMOVQ_E_V: Node = Node::Leaf(&I_VMOVQ_E_V);
static N_VMOVQ_V_W: Node = Node::Leaf(&I_VMOVQ_V_W);

static N_V6E_W: Node = Node::VexW(&[Some(&N_VMOVD_V_E), Some(&N_VMOVQ_V_E)]);
static N_V6E: Node = Node::VexPp(&[None, Some(&N_V6E_W), None, None]);
static N_V7E_W: Node = Node::VexW(&[Some(&N_VMOVD_E_V), Some(&N_VMOVQ_E_V)]);
static N_V7E: Node = Node::VexPp(&[None, Some(&N_V7E_W), None, Some(&N_VMOVQ_V_W)]);

// 6F/7F: integer moves.
const I_VMOVDQA: Insn = avx(M::Vmovdqa, OPS_VX_WX);
const I_VMOVDQA_ST: Insn = avx(M::Vmovdqa, OPS_WX_VX);
const I_VMOVDQU: Insn = avx(M::Vmovdqu, OPS_VX_WX);
const I_VMOVDQU_ST: Insn = avx(M::Vmovdqu, OPS_WX_VX);
static N_VMOVDQA: Node = Node::Leaf(&I_VMOVDQA);
static N_VMOVDQA_ST: Node = Node::Leaf(&I_VMOVDQA_ST);
static N_VMOVDQU: Node = Node::Leaf(&I_VMOVDQU);
static N_VMOVDQU_ST: Node = Node::Leaf(&I_VMOVDQU_ST);
static N_V6F: Node = Node::VexPp(&[None, Some(&N_VMOVDQA), None, Some(&N_VMOVDQU)]);
static N_V7F: Node = Node::VexPp(&[None, Some(&N_VMOVDQA_ST), None, Some(&N_VMOVDQU_ST)]);

// 70: shuffles.
const I_VPSHUFD: Insn = avx(M::Vpshufd, OPS_VX_WX_IB);
const I_VPSHUFHW: Insn = avx(M::Vpshufhw, OPS_VX_WX_IB);
const I_VPSHUFLW: Insn = avx(M::Vpshuflw, OPS_VX_WX_IB);
static N_VPSHUFD: Node = Node::Leaf(&I_VPSHUFD);
static N_VPSHUFHW: Node = Node::Leaf(&I_VPSHUFHW);
static N_VPSHUFLW: Node = Node::Leaf(&I_VPSHUFLW);
static N_V70: Node = Node::VexPp(&[
    None,
    Some(&N_VPSHUFD),
    Some(&N_VPSHUFLW),
    Some(&N_VPSHUFHW),
]);

// 74..76, EF, FE: integer compares and xor/add.
const OPS_VHW_X: &[OpSpec] = &[op(K::V, S::X, W), op(K::H, S::X, R), op(K::W, S::X, R)];
const I_VPCMPEQB: Insn = avx(M::Vpcmpeqb, OPS_VHW_X);
const I_VPCMPEQW: Insn = avx(M::Vpcmpeqw, OPS_VHW_X);
const I_VPCMPEQD: Insn = avx(M::Vpcmpeqd, OPS_VHW_X);
const I_VPXOR: Insn = avx(M::Vpxor, OPS_VHW_X);
const I_VPADDD: Insn = avx(M::Vpaddd, OPS_VHW_X);
static N_VPCMPEQB: Node = Node::Leaf(&I_VPCMPEQB);
static N_VPCMPEQW: Node = Node::Leaf(&I_VPCMPEQW);
static N_VPCMPEQD: Node = Node::Leaf(&I_VPCMPEQD);
static N_VPXOR: Node = Node::Leaf(&I_VPXOR);
static N_VPADDD: Node = Node::Leaf(&I_VPADDD);
static N_V74: Node = Node::VexPp(&[None, Some(&N_VPCMPEQB), None, None]);
static N_V75: Node = Node::VexPp(&[None, Some(&N_VPCMPEQW), None, None]);
static N_V76: Node = Node::VexPp(&[None, Some(&N_VPCMPEQD), None, None]);
static N_VEF: Node = Node::VexPp(&[None, Some(&N_VPXOR), None, None]);
static N_VFE: Node = Node::VexPp(&[None, Some(&N_VPADDD), None, None]);

// 77: VZEROUPPER/VZEROALL, selected by L.
const I_VZEROUPPER: Insn = insn(M::Vzeroupper, C::Avx, IS::Avx, CF::Avx, 0, &[]);
const I_VZEROALL: Insn = insn(M::Vzeroall, C::Avx, IS::Avx, CF::Avx, 0, &[]);
static N_VZEROUPPER: Node = Node::Leaf(&I_VZEROUPPER);
static N_VZEROALL: Node = Node::Leaf(&I_VZEROALL);
static N_V77_L: Node = Node::VexL(&[Some(&N_VZEROUPPER), Some(&N_VZEROALL), None, None]);
static N_V77: Node = Node::VexPp(&[Some(&N_V77_L), None, None, None]);

// C2: predicated compares.
const fn vcmp(m: M, ops: &'static [OpSpec]) -> Insn {
    avx(m, ops).attrs(A::MODRM.union(A::WIG).union(A::SSE_COND))
}

const I_VCMPPS: Insn = vcmp(M::Vcmpps, &[
    op(K::V, S::Ps, W),
    op(K::H, S::Ps, R),
    op(K::W, S::Ps, R),
    op(K::I, S::B, R),
]);
const I_VCMPPD: Insn = vcmp(M::Vcmppd, &[
    op(K::V, S::Pd, W),
    op(K::H, S::Pd, R),
    op(K::W, S::Pd, R),
    op(K::I, S::B, R),
]);
const I_VCMPSS: Insn = vcmp(M::Vcmpss, &[
    op(K::V, S::Dq, W),
    op(K::H, S::Dq, R),
    op(K::W, S::Ss, R),
    op(K::I, S::B, R),
]);
const I_VCMPSD: Insn = vcmp(M::Vcmpsd, &[
    op(K::V, S::Dq, W),
    op(K::H, S::Dq, R),
    op(K::W, S::Sd, R),
    op(K::I, S::B, R),
]);
static N_VCMPPS: Node = Node::Leaf(&I_VCMPPS);
static N_VCMPPD: Node = Node::Leaf(&I_VCMPPD);
static N_VCMPSS: Node = Node::Leaf(&I_VCMPSS);
static N_VCMPSD: Node = Node::Leaf(&I_VCMPSD);
static N_VC2: Node = Node::VexPp(&[
    Some(&N_VCMPPS),
    Some(&N_VCMPPD),
    Some(&N_VCMPSD),
    Some(&N_VCMPSS),
]);

// 90..93: mask register moves; 41..47: mask logic (L1 only).
const fn kmask(m: M, ops: &'static [OpSpec]) -> Insn {
    insn(m, C::KMask, IS::Avx512F, CF::Avx512F, ops.len() as u8, ops)
        .attrs(A::MODRM)
        .exc(XC::Opmask, XT::K20)
}

const I_KMOVW_K_MK: Insn = kmask(M::Kmovw, &[op(K::Rk, S::W, W), op(K::Mk, S::W, R)]);
const I_KMOVB_K_MK: Insn = kmask(M::Kmovb, &[op(K::Rk, S::B, W), op(K::Mk, S::B, R)]);
const I_KMOVQ_K_MK: Insn = kmask(M::Kmovq, &[op(K::Rk, S::Q, W), op(K::Mk, S::Q, R)]);
const I_KMOVD_K_MK: Insn = kmask(M::Kmovd, &[op(K::Rk, S::D, W), op(K::Mk, S::D, R)]);
const I_KMOVW_M_K: Insn = kmask(M::Kmovw, &[op(K::M, S::W, W), op(K::Rk, S::W, R)]);
const I_KMOVB_M_K: Insn = kmask(M::Kmovb, &[op(K::M, S::B, W), op(K::Rk, S::B, R)]);
const I_KMOVW_K_R: Insn = kmask(M::Kmovw, &[op(K::Rk, S::W, W), op(K::R, S::D, R)]);
const I_KMOVB_K_R: Insn = kmask(M::Kmovb, &[op(K::Rk, S::B, W), op(K::R, S::D, R)]);
const I_KMOVW_G_MK: Insn = kmask(M::Kmovw, &[op(K::G, S::D, W), op(K::Mk, S::W, R)]);
const I_KMOVB_G_MK: Insn = kmask(M::Kmovb, &[op(K::G, S::D, W), op(K::Mk, S::B, R)]);
static N_KMOVW_K_MK: Node = Node::Leaf(&I_KMOVW_K_MK);
static N_KMOVB_K_MK: Node = Node::Leaf(&I_KMOVB_K_MK);
static N_KMOVQ_K_MK: Node = Node::Leaf(&I_KMOVQ_K_MK);
static N_KMOVD_K_MK: Node = Node::Leaf(&I_KMOVD_K_MK);
static N_KMOVW_M_K: Node = Node::Leaf(&I_KMOVW_M_K);
static N_KMOVB_M_K: Node = Node::Leaf(&I_KMOVB_M_K);
static N_KMOVW_K_R: Node = Node::Leaf(&I_KMOVW_K_R);
static N_KMOVB_K_R: Node = Node::Leaf(&I_KMOVB_K_R);
static N_KMOVW_G_MK: Node = Node::Leaf(&I_KMOVW_G_MK);
static N_KMOVB_G_MK: Node = Node::Leaf(&I_KMOVB_G_MK);

static N_V90_NP: Node = Node::VexW(&[Some(&N_KMOVW_K_MK), Some(&N_KMOVQ_K_MK)]);
static N_V90_66: Node = Node::VexW(&[Some(&N_KMOVB_K_MK), Some(&N_KMOVD_K_MK)]);
static N_V90: Node = Node::VexPp(&[Some(&N_V90_NP), Some(&N_V90_66), None, None]);
static N_V91_MEM: Node = Node::ModrmMod(&[Some(&N_KMOVW_M_K), None]);
static N_V91_MEM_B: Node = Node::ModrmMod(&[Some(&N_KMOVB_M_K), None]);
static N_V91: Node = Node::VexPp(&[Some(&N_V91_MEM), Some(&N_V91_MEM_B), None, None]);
static N_V92: Node = Node::VexPp(&[Some(&N_KMOVW_K_R), Some(&N_KMOVB_K_R), None, None]);
static N_V93: Node = Node::VexPp(&[Some(&N_KMOVW_G_MK), Some(&N_KMOVB_G_MK), None, None]);

const OPS_KKK_W: &[OpSpec] = &[
    op(K::Rk, S::W, W),
    op(K::Vk, S::W, R),
    op(K::Mk, S::W, R),
];
const I_KANDW: Insn = kmask(M::Kandw, OPS_KKK_W);
const I_KANDNW: Insn = kmask(M::Kandnw, OPS_KKK_W);
const I_KNOTW: Insn = kmask(M::Knotw, &[op(K::Rk, S::W, W), op(K::Mk, S::W, R)]);
const I_KORW: Insn = kmask(M::Korw, OPS_KKK_W);
const I_KXNORW: Insn = kmask(M::Kxnorw, OPS_KKK_W);
const I_KXORW: Insn = kmask(M::Kxorw, OPS_KKK_W);
static N_KANDW: Node = Node::Leaf(&I_KANDW);
static N_KANDNW: Node = Node::Leaf(&I_KANDNW);
static N_KNOTW: Node = Node::Leaf(&I_KNOTW);
static N_KORW: Node = Node::Leaf(&I_KORW);
static N_KXNORW: Node = Node::Leaf(&I_KXNORW);
static N_KXORW: Node = Node::Leaf(&I_KXORW);

macro_rules! kmask_l1 {
    ($node:ident, $leaf:ident) => {
        static $node: Node = Node::VexL(&[None, Some(&$leaf), None, None]);
    };
}

kmask_l1!(NL_KANDW, N_KANDW);
kmask_l1!(NL_KANDNW, N_KANDNW);
kmask_l1!(NL_KORW, N_KORW);
kmask_l1!(NL_KXNORW, N_KXNORW);
kmask_l1!(NL_KXORW, N_KXORW);
static NL_KNOTW: Node = Node::VexL(&[Some(&N_KNOTW), None, None, None]);

static N_V41: Node = Node::VexPp(&[Some(&NL_KANDW), None, None, None]);
static N_V42: Node = Node::VexPp(&[Some(&NL_KANDNW), None, None, None]);
static N_V44: Node = Node::VexPp(&[Some(&NL_KNOTW), None, None, None]);
static N_V45: Node = Node::VexPp(&[Some(&NL_KORW), None, None, None]);
static N_V46: Node = Node::VexPp(&[Some(&NL_KXNORW), None, None, None]);
static N_V47: Node = Node::VexPp(&[Some(&NL_KXORW), None, None, None]);

static MAP_VEX1: [Link; 256] = {
    let mut t: [Link; 256] = [None; 256];
    t[0x10] = Some(&N_V10);
    t[0x11] = Some(&N_V11);
    t[0x28] = Some(&N_V28);
    t[0x29] = Some(&N_V29);
    t[0x2E] = Some(&N_V2E);
    t[0x2F] = Some(&N_V2F);
    t[0x41] = Some(&N_V41);
    t[0x42] = Some(&N_V42);
    t[0x44] = Some(&N_V44);
    t[0x45] = Some(&N_V45);
    t[0x46] = Some(&N_V46);
    t[0x47] = Some(&N_V47);
    t[0x50] = Some(&N_V50);
    t[0x51] = Some(&N_V51);
    t[0x54] = Some(&N_V54);
    t[0x55] = Some(&N_V55);
    t[0x56] = Some(&N_V56);
    t[0x57] = Some(&N_V57);
    t[0x58] = Some(&N_V58);
    t[0x59] = Some(&N_V59);
    t[0x5C] = Some(&N_V5C);
    t[0x5D] = Some(&N_V5D);
    t[0x5E] = Some(&N_V5E);
    t[0x5F] = Some(&N_V5F);
    t[0x6E] = Some(&N_V6E);
    t[0x6F] = Some(&N_V6F);
    t[0x70] = Some(&N_V70);
    t[0x74] = Some(&N_V74);
    t[0x75] = Some(&N_V75);
    t[0x76] = Some(&N_V76);
    t[0x77] = Some(&N_V77);
    t[0x7E] = Some(&N_V7E);
    t[0x7F] = Some(&N_V7F);
    t[0x90] = Some(&N_V90);
    t[0x91] = Some(&N_V91);
    t[0x92] = Some(&N_V92);
    t[0x93] = Some(&N_V93);
    t[0xC2] = Some(&N_VC2);
    t[0xEF] = Some(&N_VEF);
    t[0xFE] = Some(&N_VFE);
    t
};

static N_MAP_VEX1: Node = Node::Opcode(&MAP_VEX1);

// ---------------------------------------------------------------------------
// Map 2 (0F 38): gathers, BMI and AMX.
// ---------------------------------------------------------------------------

const I_VBROADCASTSS: Insn = insn(M::Vbroadcastss, C::Avx2, IS::Avx2, CF::Avx2, 2, &[
    op(K::V, S::X, W),
    op(K::W, S::Ss, R),
])
.attrs(A::MODRM)
.exc(XC::SseAvx, XT::T7);
const I_VBROADCASTSD: Insn = insn(M::Vbroadcastsd, C::Avx2, IS::Avx2, CF::Avx2, 2, &[
    op(K::V, S::Qq, W),
    op(K::W, S::Sd, R),
])
.attrs(A::MODRM.union(A::NOL0))
.exc(XC::SseAvx, XT::T7);
static N_VBROADCASTSS: Node = Node::Leaf(&I_VBROADCASTSS);
static N_VBROADCASTSD: Node = Node::Leaf(&I_VBROADCASTSD);
static N_V2_18: Node = Node::VexPp(&[None, Some(&N_VBROADCASTSS), None, None]);
static N_V2_19: Node = Node::VexPp(&[None, Some(&N_VBROADCASTSD), None, None]);

// AVX2 gathers: the mask in vvvv is consumed and zeroed.
const fn gather(m: M, ops: &'static [OpSpec]) -> Insn {
    insn(m, C::Avx2Gather, IS::Avx2Gather, CF::Avx2, 3, ops)
        .attrs(A::MODRM.union(A::VSIB))
        .exc(XC::SseAvx, XT::T12)
}

const OPS_GATHER_DD: &[OpSpec] = &[
    op(K::V, S::X, RCW),
    op(K::M, S::Vm32n, CR),
    op(K::H, S::X, RW),
];
const OPS_GATHER_DQ: &[OpSpec] = &[
    op(K::V, S::X, RCW),
    op(K::M, S::Vm32h, CR),
    op(K::H, S::X, RW),
];
const OPS_GATHER_QD: &[OpSpec] = &[
    op(K::V, S::H, RCW),
    op(K::M, S::Vm64n, CR),
    op(K::H, S::H, RW),
];
const OPS_GATHER_QQ: &[OpSpec] = &[
    op(K::V, S::X, RCW),
    op(K::M, S::Vm64n, CR),
    op(K::H, S::X, RW),
];
const CR: OperandAccess = OperandAccess::CR;

const I_VPGATHERDD: Insn = gather(M::Vpgatherdd, OPS_GATHER_DD);
const I_VPGATHERDQ: Insn = gather(M::Vpgatherdq, OPS_GATHER_DQ);
const I_VPGATHERQD: Insn = gather(M::Vpgatherqd, OPS_GATHER_QD);
const I_VPGATHERQQ: Insn = gather(M::Vpgatherqq, OPS_GATHER_QQ);
const I_VGATHERDPS: Insn = gather(M::Vgatherdps, OPS_GATHER_DD);
const I_VGATHERDPD: Insn = gather(M::Vgatherdpd, OPS_GATHER_DQ);
const I_VGATHERQPS: Insn = gather(M::Vgatherqps, OPS_GATHER_QD);
const I_VGATHERQPD: Insn = gather(M::Vgatherqpd, OPS_GATHER_QQ);
static N_VPGATHERDD: Node = Node::Leaf(&I_VPGATHERDD);
static N_VPGATHERDQ: Node = Node::Leaf(&I_VPGATHERDQ);
static N_VPGATHERQD: Node = Node::Leaf(&I_VPGATHERQD);
static N_VPGATHERQQ: Node = Node::Leaf(&I_VPGATHERQQ);
static N_VGATHERDPS: Node = Node::Leaf(&I_VGATHERDPS);
static N_VGATHERDPD: Node = Node::Leaf(&I_VGATHERDPD);
static N_VGATHERQPS: Node = Node::Leaf(&I_VGATHERQPS);
static N_VGATHERQPD: Node = Node::Leaf(&I_VGATHERQPD);

static N_V2_90_W: Node = Node::VexW(&[Some(&N_VPGATHERDD), Some(&N_VPGATHERDQ)]);
static N_V2_91_W: Node = Node::VexW(&[Some(&N_VPGATHERQD), Some(&N_VPGATHERQQ)]);
static N_V2_92_W: Node = Node::VexW(&[Some(&N_VGATHERDPS), Some(&N_VGATHERDPD)]);
static N_V2_93_W: Node = Node::VexW(&[Some(&N_VGATHERQPS), Some(&N_VGATHERQPD)]);
static N_V2_90: Node = Node::VexPp(&[None, Some(&N_V2_90_W), None, None]);
static N_V2_91: Node = Node::VexPp(&[None, Some(&N_V2_91_W), None, None]);
static N_V2_92: Node = Node::VexPp(&[None, Some(&N_V2_92_W), None, None]);
static N_V2_93: Node = Node::VexPp(&[None, Some(&N_V2_93_W), None, None]);

// BMI1/BMI2.
const BMI_FLAGS: FlagOps = FlagOps {
    modified: CpuFlags::SF.union(CpuFlags::ZF),
    cleared: CpuFlags::CF.union(CpuFlags::OF),
    set: CpuFlags::AF.union(CpuFlags::PF),
    ..FlagOps::NONE
};

const fn bmi(m: M, set: IS, cpuid: CF, ops: &'static [OpSpec]) -> Insn {
    insn(m, C::Bmi, set, cpuid, 3, ops).attrs(A::MODRM)
}

const OPS_G_B_E: &[OpSpec] = &[
    op(K::G, S::Y, W),
    op(K::B, S::Y, R),
    op(K::E, S::Y, R),
    op(K::F, S::V, W).flg(super::OpFlags::OPDEF),
];
const OPS_G_E_B: &[OpSpec] = &[
    op(K::G, S::Y, W),
    op(K::E, S::Y, R),
    op(K::B, S::Y, R),
    op(K::F, S::V, W).flg(super::OpFlags::OPDEF),
];

const I_ANDN: Insn = bmi(M::Andn, IS::Bmi1, CF::Bmi1, OPS_G_B_E).flags(BMI_FLAGS);
static N_ANDN: Node = Node::Leaf(&I_ANDN);
static NL_ANDN: Node = Node::VexL(&[Some(&N_ANDN), None, None, None]);
static N_V2_F2: Node = Node::VexPp(&[Some(&NL_ANDN), None, None, None]);

// Group 17: BLSR/BLSMSK/BLSI write the vvvv register.
const OPS_B_E: &[OpSpec] = &[
    op(K::B, S::Y, W),
    op(K::E, S::Y, R),
    op(K::F, S::V, W).flg(super::OpFlags::OPDEF),
];
const I_BLSR: Insn = bmi(M::Blsr, IS::Bmi1, CF::Bmi1, OPS_B_E).flags(BMI_FLAGS);
const I_BLSMSK: Insn = bmi(M::Blsmsk, IS::Bmi1, CF::Bmi1, OPS_B_E).flags(BMI_FLAGS);
const I_BLSI: Insn = bmi(M::Blsi, IS::Bmi1, CF::Bmi1, OPS_B_E).flags(BMI_FLAGS);
static N_BLSR: Node = Node::Leaf(&I_BLSR);
static N_BLSMSK: Node = Node::Leaf(&I_BLSMSK);
static N_BLSI: Node = Node::Leaf(&I_BLSI);

static N_V2_F3_REG: Node = Node::ModrmReg(&[
    None,
    Some(&N_BLSR),
    Some(&N_BLSMSK),
    Some(&N_BLSI),
    None,
    None,
    None,
    None,
]);
static NL_V2_F3: Node = Node::VexL(&[Some(&N_V2_F3_REG), None, None, None]);
static N_V2_F3: Node = Node::VexPp(&[Some(&NL_V2_F3), None, None, None]);

const I_BZHI: Insn = bmi(M::Bzhi, IS::Bmi2, CF::Bmi2, OPS_G_E_B).flags(BMI_FLAGS);
const I_PEXT: Insn = bmi(M::Pext, IS::Bmi2, CF::Bmi2, OPS_G_B_E);
const I_PDEP: Insn = bmi(M::Pdep, IS::Bmi2, CF::Bmi2, OPS_G_B_E);
static N_BZHI: Node = Node::Leaf(&I_BZHI);
static N_PEXT: Node = Node::Leaf(&I_PEXT);
static N_PDEP: Node = Node::Leaf(&I_PDEP);
static NL_BZHI: Node = Node::VexL(&[Some(&N_BZHI), None, None, None]);
static NL_PEXT: Node = Node::VexL(&[Some(&N_PEXT), None, None, None]);
static NL_PDEP: Node = Node::VexL(&[Some(&N_PDEP), None, None, None]);
static N_V2_F5: Node = Node::VexPp(&[
    Some(&NL_BZHI),
    None,
    Some(&NL_PDEP),
    Some(&NL_PEXT),
]);

const I_MULX: Insn = bmi(M::Mulx, IS::Bmi2, CF::Bmi2, &[
    op(K::G, S::Y, W),
    op(K::B, S::Y, W),
    op(K::E, S::Y, R),
    op(K::GprRdx, S::Y, R).flg(super::OpFlags::OPDEF),
]);
static N_MULX: Node = Node::Leaf(&I_MULX);
static NL_MULX: Node = Node::VexL(&[Some(&N_MULX), None, None, None]);
static N_V2_F6: Node = Node::VexPp(&[None, None, Some(&NL_MULX), None]);

const I_BEXTR: Insn = bmi(M::Bextr, IS::Bmi1, CF::Bmi1, OPS_G_E_B).flags(BMI_FLAGS);
const I_SHLX: Insn = bmi(M::Shlx, IS::Bmi2, CF::Bmi2, OPS_G_E_B);
const I_SARX: Insn = bmi(M::Sarx, IS::Bmi2, CF::Bmi2, OPS_G_E_B);
const I_SHRX: Insn = bmi(M::Shrx, IS::Bmi2, CF::Bmi2, OPS_G_E_B);
static N_BEXTR: Node = Node::Leaf(&I_BEXTR);
static N_SHLX: Node = Node::Leaf(&I_SHLX);
static N_SARX: Node = Node::Leaf(&I_SARX);
static N_SHRX: Node = Node::Leaf(&I_SHRX);
static NL_BEXTR: Node = Node::VexL(&[Some(&N_BEXTR), None, None, None]);
static NL_SHLX: Node = Node::VexL(&[Some(&N_SHLX), None, None, None]);
static NL_SARX: Node = Node::VexL(&[Some(&N_SARX), None, None, None]);
static NL_SHRX: Node = Node::VexL(&[Some(&N_SHRX), None, None, None]);
static N_V2_F7: Node = Node::VexPp(&[
    Some(&NL_BEXTR),
    Some(&NL_SHLX),
    Some(&NL_SHRX),
    Some(&NL_SARX),
]);

// AMX: tile configuration, loads/stores and the int8 dot product.
const I_LDTILECFG: Insn = insn(M::Ldtilecfg, C::Amx, IS::AmxTile, CF::AmxTile, 1, &[
    op(K::M, S::S512, R),
])
.attrs(A::MODRM.union(A::O64))
.exc(XC::Amx, XT::AmxE1);
const I_STTILECFG: Insn = insn(M::Sttilecfg, C::Amx, IS::AmxTile, CF::AmxTile, 1, &[
    op(K::M, S::S512, W),
])
.attrs(A::MODRM.union(A::O64))
.exc(XC::Amx, XT::AmxE1);
const I_TILERELEASE: Insn = insn(M::Tilerelease, C::Amx, IS::AmxTile, CF::AmxTile, 0, &[])
    .attrs(A::MODRM.union(A::O64))
    .exc(XC::Amx, XT::AmxE2);
static N_LDTILECFG: Node = Node::Leaf(&I_LDTILECFG);
static N_STTILECFG: Node = Node::Leaf(&I_STTILECFG);
static N_TILERELEASE: Node = Node::Leaf(&I_TILERELEASE);

static N_V2_49_NP_MEM: Node = Node::ModrmReg(&[
    Some(&N_LDTILECFG),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
]);
static N_V2_49_NP_REG_0: Node = Node::ModrmRm(&[
    Some(&N_TILERELEASE),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
]);
static N_V2_49_NP_REG: Node = Node::ModrmReg(&[
    Some(&N_V2_49_NP_REG_0),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
]);
static N_V2_49_NP: Node = Node::ModrmMod(&[Some(&N_V2_49_NP_MEM), Some(&N_V2_49_NP_REG)]);
static N_V2_49_66_MEM: Node = Node::ModrmReg(&[
    Some(&N_STTILECFG),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
]);
static N_V2_49_66: Node = Node::ModrmMod(&[Some(&N_V2_49_66_MEM), None]);
static N_V2_49_W: Node = Node::VexPp(&[Some(&N_V2_49_NP), Some(&N_V2_49_66), None, None]);
static N_V2_49_L: Node = Node::VexL(&[Some(&N_V2_49_W), None, None, None]);
static N_V2_49: Node = Node::VexW(&[Some(&N_V2_49_L), None]);

const I_TILELOADD: Insn = insn(M::Tileloadd, C::Amx, IS::AmxTile, CF::AmxTile, 2, &[
    op(K::Rt, S::T, W),
    op(K::M, S::T, R),
])
.attrs(A::MODRM.union(A::O64).union(A::SIBMEM))
.exc(XC::Amx, XT::AmxE3);
const I_TILELOADDT1: Insn = insn(M::Tileloaddt1, C::Amx, IS::AmxTile, CF::AmxTile, 2, &[
    op(K::Rt, S::T, W),
    op(K::M, S::T, R),
])
.attrs(A::MODRM.union(A::O64).union(A::SIBMEM))
.exc(XC::Amx, XT::AmxE3);
const I_TILESTORED: Insn = insn(M::Tilestored, C::Amx, IS::AmxTile, CF::AmxTile, 2, &[
    op(K::M, S::T, W),
    op(K::Rt, S::T, R),
])
.attrs(A::MODRM.union(A::O64).union(A::SIBMEM))
.exc(XC::Amx, XT::AmxE3);
static N_TILELOADD: Node = Node::Leaf(&I_TILELOADD);
static N_TILELOADDT1: Node = Node::Leaf(&I_TILELOADDT1);
static N_TILESTORED: Node = Node::Leaf(&I_TILESTORED);

static N_V2_4B_MEM_F2: Node = Node::ModrmMod(&[Some(&N_TILELOADD), None]);
static N_V2_4B_MEM_66: Node = Node::ModrmMod(&[Some(&N_TILELOADDT1), None]);
static N_V2_4B_MEM_F3: Node = Node::ModrmMod(&[Some(&N_TILESTORED), None]);
static N_V2_4B_PP: Node = Node::VexPp(&[
    None,
    Some(&N_V2_4B_MEM_66),
    Some(&N_V2_4B_MEM_F2),
    Some(&N_V2_4B_MEM_F3),
]);
static N_V2_4B_L: Node = Node::VexL(&[Some(&N_V2_4B_PP), None, None, None]);
static N_V2_4B: Node = Node::VexW(&[Some(&N_V2_4B_L), None]);

const fn tdp(m: M) -> Insn {
    insn(m, C::Amx, IS::AmxInt8, CF::AmxInt8, 3, OPS_TDP)
        .attrs(A::MODRM.union(A::O64))
        .exc(XC::Amx, XT::AmxE4)
}

const OPS_TDP: &[OpSpec] = &[
    op(K::Rt, S::T, RW),
    op(K::Mt, S::T, R),
    op(K::Vt, S::T, R),
];
const I_TDPBSSD: Insn = tdp(M::Tdpbssd);
const I_TDPBSUD: Insn = tdp(M::Tdpbsud);
const I_TDPBUSD: Insn = tdp(M::Tdpbusd);
const I_TDPBUUD: Insn = tdp(M::Tdpbuud);
static N_TDPBSSD: Node = Node::Leaf(&I_TDPBSSD);
static N_TDPBSUD: Node = Node::Leaf(&I_TDPBSUD);
static N_TDPBUSD: Node = Node::Leaf(&I_TDPBUSD);
static N_TDPBUUD: Node = Node::Leaf(&I_TDPBUUD);

static N_V2_5E_REG: Node = Node::ModrmMod(&[None, Some(&N_TDPBSSD)]);
static N_V2_5E_REG_SU: Node = Node::ModrmMod(&[None, Some(&N_TDPBSUD)]);
static N_V2_5E_REG_US: Node = Node::ModrmMod(&[None, Some(&N_TDPBUSD)]);
static N_V2_5E_REG_UU: Node = Node::ModrmMod(&[None, Some(&N_TDPBUUD)]);
static N_V2_5E_PP: Node = Node::VexPp(&[
    Some(&N_V2_5E_REG_UU),
    Some(&N_V2_5E_REG_US),
    Some(&N_V2_5E_REG),
    Some(&N_V2_5E_REG_SU),
]);
static N_V2_5E_L: Node = Node::VexL(&[Some(&N_V2_5E_PP), None, None, None]);
static N_V2_5E: Node = Node::VexW(&[Some(&N_V2_5E_L), None]);

static MAP_VEX2: [Link; 256] = {
    let mut t: [Link; 256] = [None; 256];
    t[0x18] = Some(&N_V2_18);
    t[0x19] = Some(&N_V2_19);
    t[0x49] = Some(&N_V2_49);
    t[0x4B] = Some(&N_V2_4B);
    t[0x5E] = Some(&N_V2_5E);
    t[0x90] = Some(&N_V2_90);
    t[0x91] = Some(&N_V2_91);
    t[0x92] = Some(&N_V2_92);
    t[0x93] = Some(&N_V2_93);
    t[0xF2] = Some(&N_V2_F2);
    t[0xF3] = Some(&N_V2_F3);
    t[0xF5] = Some(&N_V2_F5);
    t[0xF6] = Some(&N_V2_F6);
    t[0xF7] = Some(&N_V2_F7);
    t
};

static N_MAP_VEX2: Node = Node::Opcode(&MAP_VEX2);

// ---------------------------------------------------------------------------
// Map 3 (0F 3A): immediates and the is4 blends.
// ---------------------------------------------------------------------------

const I_VPALIGNR: Insn = avx(M::Vpalignr, &[
    op(K::V, S::X, W),
    op(K::H, S::X, R),
    op(K::W, S::X, R),
    op(K::I, S::B, R),
]);
static N_VPALIGNR: Node = Node::Leaf(&I_VPALIGNR);
static N_V3_0F: Node = Node::VexPp(&[None, Some(&N_VPALIGNR), None, None]);

const I_VINSERTF128: Insn = insn(M::Vinsertf128, C::Avx, IS::Avx, CF::Avx, 4, &[
    op(K::V, S::Qq, W),
    op(K::H, S::Qq, R),
    op(K::W, S::Dq, R),
    op(K::I, S::B, R),
])
.attrs(A::MODRM.union(A::NOL0))
.exc(XC::SseAvx, XT::T5);
const I_VEXTRACTF128: Insn = insn(M::Vextractf128, C::Avx, IS::Avx, CF::Avx, 3, &[
    op(K::W, S::Dq, W),
    op(K::V, S::Qq, R),
    op(K::I, S::B, R),
])
.attrs(A::MODRM.union(A::NOL0))
.exc(XC::SseAvx, XT::T5);
static N_VINSERTF128: Node = Node::Leaf(&I_VINSERTF128);
static N_VEXTRACTF128: Node = Node::Leaf(&I_VEXTRACTF128);
static N_V3_18: Node = Node::VexPp(&[None, Some(&N_VINSERTF128), None, None]);
static N_V3_19: Node = Node::VexPp(&[None, Some(&N_VEXTRACTF128), None, None]);

// The blend selector register lives in the high immediate nibble.
const fn blendv(m: M) -> Insn {
    insn(m, C::Avx, IS::Avx, CF::Avx, 4, OPS_BLENDV)
        .attrs(A::MODRM.union(A::WIG))
        .exc(XC::SseAvx, XT::T4)
}

const OPS_BLENDV: &[OpSpec] = &[
    op(K::V, S::X, W),
    op(K::H, S::X, R),
    op(K::W, S::X, R),
    op(K::L, S::X, R),
];
const I_VBLENDVPS: Insn = blendv(M::Vblendvps);
const I_VBLENDVPD: Insn = blendv(M::Vblendvpd);
const I_VPBLENDVB: Insn = blendv(M::Vpblendvb);
static N_VBLENDVPS: Node = Node::Leaf(&I_VBLENDVPS);
static N_VBLENDVPD: Node = Node::Leaf(&I_VBLENDVPD);
static N_VPBLENDVB: Node = Node::Leaf(&I_VPBLENDVB);
static N_V3_4A: Node = Node::VexPp(&[None, Some(&N_VBLENDVPS), None, None]);
static N_V3_4B: Node = Node::VexPp(&[None, Some(&N_VBLENDVPD), None, None]);
static N_V3_4C: Node = Node::VexPp(&[None, Some(&N_VPBLENDVB), None, None]);

// The is4 byte carries both the selector register and a two bit control.
const I_VPERMIL2PS: Insn = insn(M::Vpermil2ps, C::Xop, IS::Xop, CF::Xop, 5, &[
    op(K::V, S::X, W),
    op(K::H, S::X, R),
    op(K::W, S::X, R),
    op(K::L, S::X, R),
    op(K::Im2z, S::B, R),
])
.attrs(A::MODRM.union(A::WIG))
.exc(XC::SseAvx, XT::T4);
static N_VPERMIL2PS: Node = Node::Leaf(&I_VPERMIL2PS);
static N_V3_48: Node = Node::VexPp(&[None, Some(&N_VPERMIL2PS), None, None]);

const I_RORX: Insn = insn(M::Rorx, C::Bmi, IS::Bmi2, CF::Bmi2, 3, &[
    op(K::G, S::Y, W),
    op(K::E, S::Y, R),
    op(K::I, S::B, R),
])
.attrs(A::MODRM);
static N_RORX: Node = Node::Leaf(&I_RORX);
static NL_RORX: Node = Node::VexL(&[Some(&N_RORX), None, None, None]);
static N_V3_F0: Node = Node::VexPp(&[None, None, Some(&NL_RORX), None]);

static MAP_VEX3: [Link; 256] = {
    let mut t: [Link; 256] = [None; 256];
    t[0x0F] = Some(&N_V3_0F);
    t[0x18] = Some(&N_V3_18);
    t[0x19] = Some(&N_V3_19);
    t[0x4A] = Some(&N_V3_4A);
    t[0x4B] = Some(&N_V3_4B);
    t[0x48] = Some(&N_V3_48);
    t[0x4C] = Some(&N_V3_4C);
    t[0xF0] = Some(&N_V3_F0);
    t
};

static N_MAP_VEX3: Node = Node::Opcode(&MAP_VEX3);

/// The root of the VEX forest, indexed by the map field.
pub(crate) static ROOT_VEX: Node = Node::VexMap(&{
    let mut t: [Link; 32] = [None; 32];
    t[1] = Some(&N_MAP_VEX1);
    t[2] = Some(&N_MAP_VEX2);
    t[3] = Some(&N_MAP_VEX3);
    t
});
