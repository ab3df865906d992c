//! Decoded operand representation.

use crate::enums::*;

/// A far pointer (segment:offset) operand, as used by direct far branches.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct FarPointer {
    pub segment: u16,
    pub offset: u32,
}

/// VSIB details of a gather/scatter memory operand.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Vsib {
    /// Size of one index element inside the vector index register, in bytes.
    pub index_size: u8,
    /// Size of one data element, in bytes.
    pub elem_size: u8,
    /// Number of elements accessed.
    pub elem_count: u8,
}

/// A register operand.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct RegisterInfo {
    pub class: RegisterClass,
    /// Register id inside the class. MSRs/XCRs use their architectural
    /// number; `reg::MSR_ANY`/`reg::XCR_ANY` stand for "selected by ECX".
    pub id: u32,
    /// Size of the accessed view, in bytes.
    pub size: u16,
    /// AH/CH/DH/BH rather than SPL/BPL/SIL/DIL.
    pub is_high8: bool,
    /// The operand covers a block of registers starting at `id`.
    pub is_block: bool,
    /// Number of registers accessed (1 unless `is_block`).
    pub count: u8,
}

/// A memory operand.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct MemoryInfo {
    pub has_seg: bool,
    /// Segment register id (`reg::ES`..`reg::GS`).
    pub seg: u8,
    pub has_base: bool,
    pub base: u8,
    /// Size of the base register, in bytes.
    pub base_size: u8,
    pub has_index: bool,
    pub index: u8,
    /// Size of the index register, in bytes. For VSIB this is the full
    /// vector register size.
    pub index_size: u16,
    /// Scale factor (1, 2, 4 or 8); meaningful when an index is present.
    pub scale: u8,
    pub has_disp: bool,
    /// Sign-extended displacement.
    pub disp: i64,
    pub disp_size: u8,
    pub has_comp_disp: bool,
    /// Compressed displacement scale (EVEX disp8*N), in bytes.
    pub comp_disp_size: u8,
    pub is_rip_rel: bool,
    /// Direct addressing (moffset); the displacement is the full address.
    pub is_direct: bool,
    pub is_stack: bool,
    /// RSI/RDI based string addressing.
    pub is_string: bool,
    pub has_broadcast: bool,
    pub is_vsib: bool,
    pub vsib: Vsib,
    /// AMX addressing; a SIB byte is mandatory.
    pub is_sibmem: bool,
    /// MPX MIB addressing.
    pub is_mib: bool,
    /// BT*-style bit base addressing.
    pub is_bitbase: bool,
    /// Address generation only (LEA); no memory is accessed and the
    /// segment is ignored.
    pub is_ag: bool,
    pub is_shadow_stack: bool,
    pub shadow_stack: ShadowStackAccess,
}

/// Kind-specific payload of an operand.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum OperandInfo {
    #[default]
    None,
    Reg(RegisterInfo),
    Mem(MemoryInfo),
    /// Immediate value, zero- or sign-extended per the operand flags.
    Imm(u64),
    /// Hardcoded constant (the `1` of short rotates).
    Const(u64),
    /// Sign-extended branch displacement relative to the next instruction.
    Offs(i64),
    /// Direct far segment:offset target.
    Addr(FarPointer),
    /// Implicit access to an entire register bank.
    Bank,
}

impl OperandInfo {
    #[inline]
    pub fn is_memory(&self) -> bool {
        matches!(self, OperandInfo::Mem(_))
    }

    #[inline]
    pub fn is_register(&self) -> bool {
        matches!(self, OperandInfo::Reg(_))
    }

    /// The register payload, if this is a register operand.
    #[inline]
    pub fn register(&self) -> Option<&RegisterInfo> {
        match self {
            OperandInfo::Reg(r) => Some(r),
            _ => None,
        }
    }

    /// The memory payload, if this is a memory operand.
    #[inline]
    pub fn memory(&self) -> Option<&MemoryInfo> {
        match self {
            OperandInfo::Mem(m) => Some(m),
            _ => None,
        }
    }
}

/// Broadcast decorator: one memory element replicated `count` times.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Broadcast {
    /// Element size, in bytes.
    pub size: u16,
    pub count: u8,
}

/// EVEX decorators applied to an operand.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Decorator {
    /// Mask register (k1..k7) if masking applies.
    pub mask: Option<u8>,
    pub zeroing: bool,
    pub broadcast: Option<Broadcast>,
    pub sae: bool,
    pub er: bool,
}

/// Operand meta flags from the instruction tables.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct OperandFlags {
    /// The operand takes its default value and is usually not shown.
    pub is_default: bool,
    /// The immediate is sign-extended to the default word size.
    pub sign_extended_dws: bool,
    /// The immediate is sign-extended to the size of operand 0.
    pub sign_extended_op1: bool,
}

/// A decoded operand.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Operand {
    /// Operand kind and kind-specific payload.
    pub info: OperandInfo,
    /// Architectural operand size, in bytes.
    pub size: u16,
    /// Raw access size; differs from `size` when broadcast changes the
    /// effective element size.
    pub raw_size: u16,
    /// Access semantics.
    pub access: OperandAccess,
    /// Where the operand is encoded.
    pub encoding: OperandEncoding,
    pub flags: OperandFlags,
    pub decorator: Decorator,
}

impl Operand {
    pub(crate) const NONE: Operand = Operand {
        info: OperandInfo::None,
        size: 0,
        raw_size: 0,
        access: OperandAccess::empty(),
        encoding: OperandEncoding::None,
        flags: OperandFlags {
            is_default: false,
            sign_extended_dws: false,
            sign_extended_op1: false,
        },
        decorator: Decorator {
            mask: None,
            zeroing: false,
            broadcast: None,
            sae: false,
            er: false,
        },
    };
}

use crate::decoder::{
    fetch_address, fetch_immediate, fetch_moffset, fetch_rel_offset, fetch_sse_immediate, sign_ex,
};
use crate::insn::DecodedInstruction;
use crate::status::{Result, Status};
use crate::table::{OpDeco, OpFlags, OpKind, OpSize, OpSpec};

/// Placeholder for operands whose size cannot be known statically
/// (XSAVE/XRSTOR areas).
pub const SIZE_UNKNOWN: u16 = u16::MAX;

/// Sizes resolved from a symbolic size code: the operand size plus the
/// VSIB geometry for gather/scatter forms.
struct ResolvedSize {
    size: u16,
    vsib_index_size: u8,
    vsib_index_count: u8,
    vsib_reg_size: u16,
}

fn resolve_size(insn: &DecodedInstruction, spec: &OpSpec, width: bool) -> Result<ResolvedSize> {
    let ef = insn.ef_op_mode as usize;
    let vec = insn.ef_vec_mode as usize;
    let code = insn.def_code.index();
    let l = insn.exs.l;

    let mut vsib_index_size = 0u8;
    let mut vsib_index_count = 0u8;
    let mut vsib_reg_size = 0u16;

    let size: u16 = match spec.size {
        OpSize::Asz => 2 << insn.addr_mode,
        OpSize::Ssz => 2 << insn.def_stack.index(),
        OpSize::S0 => 0,
        OpSize::B => 1,
        OpSize::W => 2,
        OpSize::D => 4,
        OpSize::Q => 8,
        OpSize::Dq => 16,
        OpSize::Qq => 32,
        OpSize::Oq => 64,
        OpSize::Fa => 10,
        OpSize::Fw => 2,
        OpSize::Fd => 4,
        OpSize::Fq => 8,
        OpSize::Ft => 10,
        // 14 or 28 byte FPU environment.
        OpSize::Fe => if insn.ef_op_mode == 0 { 14 } else { 28 },
        // 94 or 108 byte FPU state.
        OpSize::Fs => if insn.ef_op_mode == 0 { 94 } else { 108 },
        OpSize::Rx => 512,
        OpSize::Cl => 64,
        OpSize::V => [2, 4, 8][ef],
        OpSize::Y => [4, 4, 8][ef],
        OpSize::Yf => [4, 4, 8][code],
        OpSize::Z => [2, 4, 4][ef],
        OpSize::A => {
            // BOUND only exists outside 64 bit mode.
            if insn.def_code == crate::enums::MachineMode::Long64 {
                return Err(Status::InternalError);
            }
            [4, 8, 0][ef]
        }
        OpSize::C => match insn.def_code {
            crate::enums::MachineMode::Legacy16 => if insn.has_op_size { 2 } else { 1 },
            crate::enums::MachineMode::Legacy32 => if insn.has_op_size { 2 } else { 4 },
            crate::enums::MachineMode::Long64 => 8,
        },
        OpSize::P => [4, 6, 10][ef],
        OpSize::S => [6, 6, 10][code],
        OpSize::L => [8, 8, 16][code],
        OpSize::X | OpSize::N => [16, 32, 64][vec],
        OpSize::U => {
            if insn.ef_vec_mode == 0 {
                return Err(Status::InternalError);
            }
            [0, 32, 64][vec]
        }
        OpSize::E => [2, 4, 8][vec],
        OpSize::F => [4, 8, 16][vec],
        OpSize::H => [8, 16, 32][vec],
        OpSize::Pd | OpSize::Ps => [16, 32, 64][vec],
        OpSize::Ss => 4,
        OpSize::Sd => 8,
        OpSize::Mib => 0,
        OpSize::Vm32x | OpSize::Vm32y | OpSize::Vm32z => {
            vsib_index_size = 4;
            vsib_index_count = if l == 0 { 4 } else if l == 1 { 8 } else { 16 };
            vsib_reg_size = match spec.size {
                OpSize::Vm32x => 16,
                OpSize::Vm32y => 32,
                _ => 64,
            };
            vsib_index_count as u16 * if width { 8 } else { 4 }
        }
        OpSize::Vm32h => {
            vsib_index_size = 4;
            vsib_index_count = if l == 0 { 2 } else if l == 1 { 4 } else { 8 };
            vsib_reg_size = if l < 2 { 16 } else { 32 };
            vsib_index_count as u16 * if width { 8 } else { 4 }
        }
        OpSize::Vm32n => {
            vsib_index_size = 4;
            vsib_index_count = if l == 0 { 4 } else if l == 1 { 8 } else { 16 };
            vsib_reg_size = [16, 32, 64][l.min(2) as usize];
            vsib_index_count as u16 * if width { 8 } else { 4 }
        }
        OpSize::Vm64x | OpSize::Vm64y | OpSize::Vm64z => {
            vsib_index_size = 8;
            vsib_index_count = if l == 0 { 2 } else if l == 1 { 4 } else { 8 };
            vsib_reg_size = match spec.size {
                OpSize::Vm64x => 16,
                OpSize::Vm64y => 32,
                _ => 64,
            };
            vsib_index_count as u16 * if width { 8 } else { 4 }
        }
        OpSize::Vm64h => {
            vsib_index_size = 8;
            vsib_index_count = if l == 0 { 1 } else if l == 1 { 2 } else { 4 };
            vsib_reg_size = if l < 2 { 16 } else { 32 };
            vsib_index_count as u16 * if width { 8 } else { 4 }
        }
        OpSize::Vm64n => {
            vsib_index_size = 8;
            vsib_index_count = if l == 0 { 2 } else if l == 1 { 4 } else { 8 };
            vsib_reg_size = [16, 32, 64][l.min(2) as usize];
            vsib_index_count as u16 * if width { 8 } else { 4 }
        }
        OpSize::V2 | OpSize::V3 | OpSize::V4 | OpSize::V8 => {
            let scale: u16 = match spec.size {
                OpSize::V2 => 2,
                OpSize::V3 => 3,
                OpSize::V4 => 4,
                _ => 8,
            };
            scale * [2u16, 4, 8][ef]
        }
        OpSize::S12 => 12,
        OpSize::T => 1024,
        OpSize::S384 => 48,
        OpSize::S512 => 64,
        OpSize::Unknown => SIZE_UNKNOWN,
    };

    Ok(ResolvedSize {
        size,
        vsib_index_size,
        vsib_index_count,
        vsib_reg_size,
    })
}

/// EVEX compressed displacement scale (disp8 * N), derived from the tuple
/// type.
fn comp_disp_size(insn: &DecodedInstruction, mem_size: u16) -> u8 {
    use crate::enums::TupleType;

    let w = insn.exs.w as usize;
    let bm = insn.exs.bm as usize;
    let l = (insn.exs.l & 3) as usize;

    static FV: [[[u8; 4]; 2]; 2] = [
        [[16, 32, 64, 0], [4, 4, 4, 0]],
        [[16, 32, 64, 0], [8, 8, 8, 0]],
    ];
    static HV: [[u8; 4]; 2] = [[8, 16, 32, 0], [4, 4, 4, 0]];
    static DUP: [u8; 4] = [8, 32, 64, 0];
    static FVM: [u8; 4] = [16, 32, 64, 0];
    static HVM: [u8; 4] = [8, 16, 32, 0];
    static QVM: [u8; 4] = [4, 8, 16, 0];
    static OVM: [u8; 4] = [2, 4, 8, 0];

    match insn.tuple {
        TupleType::Fv => FV[w][bm][l],
        TupleType::Hv => HV[bm][l],
        TupleType::Dup => DUP[l],
        TupleType::Fvm => FVM[l],
        TupleType::Hvm => HVM[l],
        TupleType::Qvm => QVM[l],
        TupleType::Ovm => OVM[l],
        TupleType::M128 => 16,
        TupleType::T1s8 => 1,
        TupleType::T1s16 => 2,
        TupleType::T1s => {
            if insn.attributes.contains(crate::enums::InsnAttributes::WIG) {
                4
            } else if insn.exs.w != 0 {
                8
            } else {
                4
            }
        }
        TupleType::T1f => mem_size as u8,
        TupleType::T2 => if insn.exs.w != 0 { 16 } else { 8 },
        TupleType::T4 => if insn.exs.w != 0 { 32 } else { 16 },
        TupleType::T8 => 32,
        TupleType::T1_4x => 16,
        // Byte granularity; no scaling.
        TupleType::None => 1,
    }
}

fn gpr_reg(insn: &DecodedInstruction, id: u8, size: u16) -> RegisterInfo {
    RegisterInfo {
        class: RegisterClass::Gpr,
        id: id as u32,
        size,
        is_high8: size == 1
            && id >= 4
            && insn.encoding == InstructionEncoding::Legacy
            && !insn.has_rex,
        ..RegisterInfo::default()
    }
}

fn fixed_reg(class: RegisterClass, id: u32, size: u16) -> RegisterInfo {
    RegisterInfo {
        class,
        id,
        size,
        ..RegisterInfo::default()
    }
}

/// Builds the `(segment, base, index, scale, displacement)` tuple for a
/// ModRM encoded memory operand.
fn build_memory(
    insn: &mut DecodedInstruction,
    sizes: &ResolvedSize,
    size: u16,
) -> Result<MemoryInfo> {
    use crate::enums::reg;

    let mut mem = MemoryInfo {
        has_seg: true,
        ..MemoryInfo::default()
    };

    if insn.addr_mode == 0 {
        if insn.attributes.contains(InsnAttributes::NOA16) {
            return Err(Status::Addressing16NotSupported);
        }

        // The fixed 16 bit addressing table.
        let (base, index, seg): (Option<u8>, Option<u8>, u8) = match insn.modrm.rm {
            0 => (Some(reg::RBX), Some(reg::RSI), reg::DS),
            1 => (Some(reg::RBX), Some(reg::RDI), reg::DS),
            2 => (Some(reg::RBP), Some(reg::RSI), reg::SS),
            3 => (Some(reg::RBP), Some(reg::RDI), reg::SS),
            4 => (Some(reg::RSI), None, reg::DS),
            5 => (Some(reg::RDI), None, reg::DS),
            6 => {
                if insn.modrm.mod_ != 0 {
                    (Some(reg::RBP), None, reg::SS)
                } else {
                    // Direct displacement addressing.
                    (None, None, reg::DS)
                }
            }
            _ => (Some(reg::RBX), None, reg::DS),
        };

        mem.seg = seg;
        if let Some(base) = base {
            mem.has_base = true;
            mem.base = base;
            mem.base_size = 2;
        }
        if let Some(index) = index {
            mem.has_index = true;
            mem.index = index;
            mem.index_size = 2;
            mem.scale = 1;
        }

        if insn.has_disp {
            mem.has_disp = true;
            mem.disp_size = insn.disp_length;
            mem.disp = sign_ex(insn.disp_length, insn.disp as u64) as i64;
        }
    } else {
        let defsize: u8 = if insn.addr_mode == 1 { 4 } else { 8 };
        let vsib = insn.attributes.contains(InsnAttributes::VSIB);

        mem.seg = reg::DS;

        if insn.has_sib {
            if insn.modrm.mod_ == 0 && insn.sib.base == reg::RBP {
                // No base register; a 32 bit displacement follows. This
                // form is not RIP relative.
            } else {
                mem.has_base = true;
                mem.base_size = defsize;
                mem.base = (insn.exs.b << 3) | insn.sib.base;

                if mem.base == reg::RSP || mem.base == reg::RBP {
                    mem.seg = reg::SS;
                }
            }

            if ((insn.exs.x << 3) | insn.sib.index) != reg::RSP || vsib {
                mem.has_index = true;
                mem.index_size = defsize as u16;
                mem.index = (insn.exs.x << 3) | insn.sib.index;

                if vsib {
                    mem.index_size = sizes.vsib_reg_size;
                    mem.index |= insn.exs.vp << 4;
                }

                mem.scale = 1 << insn.sib.scale;
            }
        } else if insn.modrm.mod_ == 0 && insn.modrm.rm == reg::RBP {
            // Disp32-only outside long mode; RIP relative inside. The
            // final address gets the instruction length added by the
            // consumer.
            let rip_rel = insn.def_code == MachineMode::Long64;
            mem.is_rip_rel = rip_rel;
            insn.is_rip_relative |= rip_rel;

            if rip_rel && insn.attributes.contains(InsnAttributes::NO_RIP_REL) {
                return Err(Status::RipRelNotSupported);
            }
        } else {
            mem.has_base = true;
            mem.base_size = defsize;
            mem.base = (insn.exs.b << 3) | insn.modrm.rm;

            if mem.base == reg::RSP || mem.base == reg::RBP {
                mem.seg = reg::SS;
            }
        }

        if insn.has_disp {
            mem.has_disp = true;
            mem.disp_size = insn.disp_length;
            mem.disp = sign_ex(insn.disp_length, insn.disp as u64) as i64;
        }
    }

    // In long mode only FS/GS overrides are honoured.
    if insn.has_seg {
        mem.seg = insn.seg_override(mem.seg);
    }

    if insn.attributes.contains(InsnAttributes::VSIB) {
        if !insn.has_sib {
            return Err(Status::VsibWithoutSib);
        }

        mem.is_vsib = true;
        mem.vsib = Vsib {
            index_size: sizes.vsib_index_size,
            elem_count: sizes.vsib_index_count,
            elem_size: (size / sizes.vsib_index_count as u16) as u8,
        };
    }

    if insn.attributes.contains(InsnAttributes::SIBMEM) {
        if !insn.has_sib {
            return Err(Status::InvalidEncoding);
        }

        mem.is_sibmem = true;
    }

    mem.is_mib = insn.attributes.contains(InsnAttributes::MIB);
    mem.is_bitbase = insn.attributes.contains(InsnAttributes::BITBASE);

    if insn.attributes.contains(InsnAttributes::AG) {
        mem.is_ag = true;
        mem.has_seg = false;
        mem.seg = 0;
    }

    if insn.attributes.contains(InsnAttributes::SHS) {
        mem.is_shadow_stack = true;
        mem.shadow_stack = ShadowStackAccess::Explicit;
    }

    Ok(mem)
}

/// Where each symbolic operand kind is encoded.
fn encoding_of(kind: OpKind) -> OperandEncoding {
    match kind {
        OpKind::A | OpKind::J | OpKind::O => OperandEncoding::Disp,
        OpKind::B | OpKind::H | OpKind::Vk | OpKind::Vt => OperandEncoding::Vvvv,
        OpKind::C
        | OpKind::D
        | OpKind::G
        | OpKind::P
        | OpKind::S
        | OpKind::T
        | OpKind::V
        | OpKind::Rb
        | OpKind::Rk
        | OpKind::Rm
        | OpKind::Rt => OperandEncoding::ModrmReg,
        OpKind::E
        | OpKind::M
        | OpKind::N
        | OpKind::Q
        | OpKind::R
        | OpKind::U
        | OpKind::W
        | OpKind::Mb
        | OpKind::Mk
        | OpKind::Mm
        | OpKind::Mt
        | OpKind::FpuStX => OperandEncoding::ModrmRm,
        OpKind::I => OperandEncoding::Immediate,
        OpKind::L | OpKind::Im2z => OperandEncoding::Is4,
        OpKind::Z => OperandEncoding::Opcode,
        OpKind::Ak => OperandEncoding::Mask,
        OpKind::Const1 => OperandEncoding::Const,
        _ => OperandEncoding::Implicit,
    }
}

/// Resolves one operand specifier into a decoded operand.
pub(crate) fn parse_operand(
    insn: &mut DecodedInstruction,
    code: &[u8],
    index: usize,
    spec: &OpSpec,
) -> Result {
    use crate::enums::reg;

    let width = insn.exs.w != 0 && !insn.attributes.contains(InsnAttributes::WIG);

    let sizes = resolve_size(insn, spec, width)?;
    let mut size = sizes.size;
    // Total access size before any broadcast override; used to compute the
    // broadcast element count.
    let bcst_size = size;

    let mut operand = Operand {
        size,
        raw_size: size,
        access: spec.access,
        encoding: encoding_of(spec.kind),
        flags: OperandFlags {
            is_default: spec.flags.contains(OpFlags::OPDEF),
            sign_extended_dws: spec.flags.contains(OpFlags::SEX_DWS),
            sign_extended_op1: spec.flags.contains(OpFlags::SEX_OP1),
        },
        ..Operand::default()
    };

    let mut is_memory_form = false;

    match spec.kind {
        OpKind::Const1 => {
            operand.info = OperandInfo::Const(1);
        }

        OpKind::Rip => {
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Rip, 0, size));
            insn.rip_access |= operand.access;
        }

        OpKind::GprAh => {
            let mut reg = fixed_reg(RegisterClass::Gpr, reg::AH as u32, 1);
            reg.is_high8 = true;
            operand.info = OperandInfo::Reg(reg);
        }

        OpKind::GprRax
        | OpKind::GprRcx
        | OpKind::GprRdx
        | OpKind::GprRbx
        | OpKind::GprRsp
        | OpKind::GprRbp
        | OpKind::GprRsi
        | OpKind::GprRdi
        | OpKind::GprR11 => {
            let id = match spec.kind {
                OpKind::GprRax => reg::RAX,
                OpKind::GprRcx => reg::RCX,
                OpKind::GprRdx => reg::RDX,
                OpKind::GprRbx => reg::RBX,
                OpKind::GprRsp => reg::RSP,
                OpKind::GprRbp => reg::RBP,
                OpKind::GprRsi => reg::RSI,
                OpKind::GprRdi => reg::RDI,
                _ => reg::R11,
            };
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Gpr, id as u32, size));
        }

        OpKind::SegCs | OpKind::SegSs | OpKind::SegDs | OpKind::SegEs | OpKind::SegFs
        | OpKind::SegGs => {
            let id = match spec.kind {
                OpKind::SegCs => reg::CS,
                OpKind::SegSs => reg::SS,
                OpKind::SegDs => reg::DS,
                OpKind::SegEs => reg::ES,
                OpKind::SegFs => reg::FS,
                _ => reg::GS,
            };
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Seg, id as u32, size));
        }

        OpKind::FpuSt0 => {
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Fpu, 0, 10));
        }

        OpKind::FpuStX => {
            operand.info =
                OperandInfo::Reg(fixed_reg(RegisterClass::Fpu, insn.modrm.rm as u32, 10));
        }

        OpKind::Xmm0 => {
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Sse, 0, 16));
        }

        OpKind::Cr0 => {
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Cr, reg::CR0 as u32, size));
        }

        OpKind::Gdtr => {
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Sys, reg::GDTR, size));
        }

        OpKind::Idtr => {
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Sys, reg::IDTR, size));
        }

        OpKind::Ldtr => {
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Sys, reg::LDTR, size));
        }

        OpKind::SysTr => {
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Sys, reg::TR, size));
        }

        OpKind::X87Control => {
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Sys, reg::X87_CONTROL, 2));
        }

        OpKind::X87Tag => {
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Sys, reg::X87_TAG, 2));
        }

        OpKind::X87Status => {
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Sys, reg::X87_STATUS, 2));
        }

        OpKind::Mxcsr => {
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Mxcsr, 0, 4));
        }

        OpKind::Pkru => {
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Pkru, 0, 4));
        }

        OpKind::Ssp => {
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Ssp, 0, size));
        }

        OpKind::Uif => {
            // One bit, really; there is no smaller size.
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Uif, 0, 1));
        }

        OpKind::Msr => {
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Msr, reg::MSR_ANY, 8));
        }

        OpKind::Tsc => {
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Msr, reg::MSR_TSC, 8));
        }

        OpKind::TscAux => {
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Msr, reg::MSR_TSC_AUX, 8));
        }

        OpKind::Xcr => {
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Xcr, reg::XCR_ANY, 8));
        }

        OpKind::Xcr0 => {
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Xcr, reg::XCR0, 8));
        }

        OpKind::F => {
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Flags, 0, size));
            insn.flags_access.register_access |= operand.access;
        }

        OpKind::K => {
            insn.memory_access |= operand.access;
            operand.info = OperandInfo::Mem(MemoryInfo {
                is_stack: true,
                has_base: true,
                base: reg::RSP,
                base_size: 2 << insn.def_stack.index(),
                has_seg: true,
                seg: reg::SS,
                ..MemoryInfo::default()
            });
            insn.stack_words = (operand.size / insn.word_length as u16) as u8;
            insn.stack_access |= operand.access;
        }

        OpKind::Bank => {
            // PUSHA/POPA touch the whole GPR bank as one block operand;
            // other bank accesses stay opaque.
            if insn.mnemonic == Mnemonic::Pusha || insn.mnemonic == Mnemonic::Popa {
                size = insn.word_length as u16;
                operand.size = size;
                operand.raw_size = size;
                operand.info = OperandInfo::Reg(RegisterInfo {
                    class: RegisterClass::Gpr,
                    id: 0,
                    size,
                    ..RegisterInfo::default()
                });
            } else {
                operand.info = OperandInfo::Bank;
            }
        }

        OpKind::A => {
            fetch_address(insn, code, size as u8)?;
            operand.info = OperandInfo::Addr(FarPointer {
                segment: insn.far_segment,
                offset: insn.far_offset,
            });
        }

        OpKind::B => {
            // A GPR in vvvv; EVEX.V' must be zero here.
            if insn.exs.vp != 0 {
                return Err(Status::InvalidRegisterInInstruction);
            }
            operand.info = OperandInfo::Reg(gpr_reg(insn, insn.exs.v, size));
        }

        OpKind::C => {
            let mut id = (insn.exs.r << 3) | insn.modrm.reg;
            // LOCK before MOV CR grants access to CR8..15 on some AMD
            // processors outside long mode.
            if insn.def_code != MachineMode::Long64 && insn.has_lock {
                id |= 0x8;
            }

            if !matches!(id, 0 | 2 | 3 | 4 | 8) {
                return Err(Status::InvalidRegisterInInstruction);
            }

            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Cr, id as u32, size));
        }

        OpKind::D => {
            let id = (insn.exs.r << 3) | insn.modrm.reg;
            if id >= 8 {
                return Err(Status::InvalidRegisterInInstruction);
            }
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Dr, id as u32, size));
        }

        OpKind::T => {
            let id = (insn.exs.r << 3) | insn.modrm.reg;
            if id >= 8 {
                return Err(Status::InvalidRegisterInInstruction);
            }
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Tr, id as u32, size));
        }

        OpKind::S => {
            let id = insn.modrm.reg;
            if id >= 6 {
                return Err(Status::InvalidRegisterInInstruction);
            }
            if id == reg::CS && operand.access.contains(OperandAccess::WRITE) {
                return Err(Status::CsLoad);
            }
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Seg, id as u32, size));
        }

        OpKind::E => {
            if insn.modrm.mod_ == 3 {
                let id = (insn.exs.b << 3) | insn.modrm.rm;
                operand.info = OperandInfo::Reg(gpr_reg(insn, id, size));
            } else {
                is_memory_form = true;
            }
        }

        OpKind::G => {
            // EVEX.R' must be zero when a GPR is encoded.
            if insn.exs.rp != 0 {
                return Err(Status::InvalidEncoding);
            }
            let id = (insn.exs.r << 3) | insn.modrm.reg;
            operand.info = OperandInfo::Reg(gpr_reg(insn, id, size));
        }

        OpKind::R => {
            if insn.modrm.mod_ == 3 || insn.attributes.contains(InsnAttributes::MFR) {
                let id = (insn.exs.b << 3) | insn.modrm.rm;
                operand.info = OperandInfo::Reg(gpr_reg(insn, id, size));
            } else {
                return Err(Status::InvalidEncoding);
            }
        }

        OpKind::I => {
            let imm = fetch_immediate(insn, code, size as u8)?;

            if operand.flags.sign_extended_dws {
                // Sign extended to the default word size.
                operand.size = [2, 4, 8][insn.ef_op_mode as usize];
                operand.info = OperandInfo::Imm(sign_ex(size as u8, imm));
            } else if operand.flags.sign_extended_op1 {
                operand.size = insn.operands[0].size;
                operand.info = OperandInfo::Imm(sign_ex(size as u8, imm));
            } else {
                operand.info = OperandInfo::Imm(imm);
            }
        }

        OpKind::Im2z => {
            operand.info = OperandInfo::Imm((insn.sse_imm & 3) as u64);
        }

        OpKind::J => {
            fetch_rel_offset(insn, code, size as u8)?;
            insn.is_rip_relative = true;

            // The offset is relative to the next instruction and applies
            // to the full default word; beware 66-prefixed branches in 32
            // bit mode.
            operand.size = insn.word_length as u16;
            operand.info =
                OperandInfo::Offs(sign_ex(size as u8, insn.rel_offs as u64) as i64);
        }

        OpKind::N => {
            if insn.modrm.mod_ != 3 {
                return Err(Status::InvalidEncoding);
            }
            operand.info =
                OperandInfo::Reg(fixed_reg(RegisterClass::Mmx, insn.modrm.rm as u32, 8));
        }

        OpKind::P => {
            operand.info =
                OperandInfo::Reg(fixed_reg(RegisterClass::Mmx, insn.modrm.reg as u32, 8));
        }

        OpKind::Q => {
            if insn.modrm.mod_ == 3 {
                operand.info =
                    OperandInfo::Reg(fixed_reg(RegisterClass::Mmx, insn.modrm.rm as u32, 8));
            } else {
                is_memory_form = true;
            }
        }

        OpKind::O => {
            fetch_moffset(insn, code, 2 << insn.addr_mode)?;
            insn.memory_access |= operand.access;
            operand.info = OperandInfo::Mem(MemoryInfo {
                has_disp: true,
                is_direct: true,
                disp_size: insn.moffset_length,
                disp: insn.moffset as i64,
                has_seg: true,
                seg: insn.seg_override(reg::DS),
                ..MemoryInfo::default()
            });
        }

        OpKind::M => {
            if insn.modrm.mod_ == 3 {
                return Err(Status::InvalidEncoding);
            }
            is_memory_form = true;
        }

        OpKind::H => {
            if insn.encoding == InstructionEncoding::Legacy {
                return Err(Status::InternalError);
            }
            let id = (insn.exs.vp << 4) | insn.exs.v;
            operand.info = OperandInfo::Reg(fixed_reg(
                RegisterClass::Sse,
                id as u32,
                size.max(16),
            ));
        }

        OpKind::L => {
            fetch_sse_immediate(insn, code)?;
            let mut id = (insn.sse_imm >> 4) & 0xF;
            if insn.def_code != MachineMode::Long64 {
                id &= 0x7;
            }
            operand.info = OperandInfo::Reg(fixed_reg(
                RegisterClass::Sse,
                id as u32,
                size.max(16),
            ));
        }

        OpKind::U => {
            if insn.modrm.mod_ != 3 {
                return Err(Status::InvalidEncoding);
            }
            let mut id = (insn.exs.b << 3) | insn.modrm.rm;
            if insn.encoding == InstructionEncoding::Evex {
                id |= insn.exs.x << 4;
            }
            operand.info = OperandInfo::Reg(fixed_reg(
                RegisterClass::Sse,
                id as u32,
                size.max(16),
            ));
        }

        OpKind::V => {
            let mut id = (insn.exs.r << 3) | insn.modrm.reg;
            if insn.encoding == InstructionEncoding::Evex {
                id |= insn.exs.rp << 4;
            }
            operand.info = OperandInfo::Reg(fixed_reg(
                RegisterClass::Sse,
                id as u32,
                size.max(16),
            ));
        }

        OpKind::W => {
            if insn.modrm.mod_ == 3 {
                let mut id = (insn.exs.b << 3) | insn.modrm.rm;
                if insn.encoding == InstructionEncoding::Evex {
                    id |= insn.exs.x << 4;
                }
                operand.info = OperandInfo::Reg(fixed_reg(
                    RegisterClass::Sse,
                    id as u32,
                    size.max(16),
                ));
            } else {
                is_memory_form = true;
            }
        }

        OpKind::X | OpKind::Y | OpKind::MemDi => {
            insn.memory_access |= operand.access;
            let is_src = spec.kind == OpKind::X;
            operand.info = OperandInfo::Mem(MemoryInfo {
                has_base: true,
                base_size: 2 << insn.addr_mode,
                base: if is_src { reg::RSI } else { reg::RDI },
                is_string: matches!(spec.kind, OpKind::X | OpKind::Y),
                has_seg: true,
                // ES:rDI cannot be overridden; DS:rSI can.
                seg: if spec.kind == OpKind::Y {
                    reg::ES
                } else {
                    insn.seg_override(reg::DS)
                },
                ..MemoryInfo::default()
            });
        }

        OpKind::MemBxAl => {
            insn.memory_access |= operand.access;
            operand.info = OperandInfo::Mem(MemoryInfo {
                has_base: true,
                has_index: true,
                base: reg::RBX,
                base_size: 2 << insn.addr_mode,
                index: reg::AL,
                index_size: 1,
                scale: 1,
                has_seg: true,
                seg: insn.seg_override(reg::DS),
                ..MemoryInfo::default()
            });
        }

        OpKind::MemShs => {
            insn.memory_access |= operand.access;
            operand.info = OperandInfo::Mem(MemoryInfo {
                is_shadow_stack: true,
                shadow_stack: ShadowStackAccess::SspLoadStore,
                ..MemoryInfo::default()
            });
        }

        OpKind::MemShs0 => {
            insn.memory_access |= operand.access;
            operand.info = OperandInfo::Mem(MemoryInfo {
                is_shadow_stack: true,
                shadow_stack: ShadowStackAccess::Pl0Ssp,
                ..MemoryInfo::default()
            });
        }

        OpKind::MemShsp => {
            insn.memory_access |= operand.access;
            operand.info = OperandInfo::Mem(MemoryInfo {
                is_shadow_stack: true,
                shadow_stack: ShadowStackAccess::SspPushPop,
                ..MemoryInfo::default()
            });
        }

        OpKind::Z => {
            let id = (insn.exs.b << 3) | (insn.primary_opcode & 0x7);
            operand.info = OperandInfo::Reg(gpr_reg(insn, id, size));
        }

        OpKind::Rb => {
            let id = (insn.exs.r << 3) | insn.modrm.reg;
            if id >= 4 {
                return Err(Status::InvalidRegisterInInstruction);
            }
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Bnd, id as u32, size));
        }

        OpKind::Mb => {
            if insn.modrm.mod_ == 3 {
                let id = (insn.exs.b << 3) | insn.modrm.rm;
                if id >= 4 {
                    return Err(Status::InvalidRegisterInInstruction);
                }
                operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Bnd, id as u32, size));
            } else {
                is_memory_form = true;
            }
        }

        OpKind::Rk => {
            // R and R' must be zero (1 on the wire) for mask destinations.
            if insn.exs.r != 0 || insn.exs.rp != 0 {
                return Err(Status::InvalidRegisterInInstruction);
            }
            operand.info =
                OperandInfo::Reg(fixed_reg(RegisterClass::Msk, insn.modrm.reg as u32, 8));
        }

        OpKind::Vk => {
            let id = insn.exs.v;
            if id >= 8 {
                return Err(Status::InvalidRegisterInInstruction);
            }
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Msk, id as u32, 8));
        }

        OpKind::Mk => {
            if insn.modrm.mod_ == 3 {
                // X and B are ignored when mask registers are addressed.
                operand.info =
                    OperandInfo::Reg(fixed_reg(RegisterClass::Msk, insn.modrm.rm as u32, 8));
            } else {
                is_memory_form = true;
            }
        }

        OpKind::Ak => {
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Msk, insn.exs.k as u32, 8));
        }

        OpKind::Rm => {
            // ModRM.reg selects a memory operand (MOVDIR64B/ENQCMD): the
            // base is sized by the address width and ES cannot be
            // overridden.
            operand.info = OperandInfo::Mem(MemoryInfo {
                has_base: true,
                base: (insn.exs.r << 3) | insn.modrm.reg,
                base_size: 2 << insn.addr_mode,
                has_seg: true,
                seg: reg::ES,
                ..MemoryInfo::default()
            });
            insn.memory_access |= operand.access;
        }

        OpKind::Mm => {
            // ModRM.rm encodes memory even for mod 3.
            operand.info = OperandInfo::Mem(MemoryInfo {
                has_base: true,
                base: (insn.exs.b << 3) | insn.modrm.rm,
                base_size: 2 << insn.addr_mode,
                has_seg: true,
                seg: insn.seg_override(reg::DS),
                ..MemoryInfo::default()
            });
            insn.memory_access |= operand.access;
        }

        OpKind::Rt => {
            if insn.exs.r != 0 {
                return Err(Status::InvalidRegisterInInstruction);
            }
            operand.info =
                OperandInfo::Reg(fixed_reg(RegisterClass::Tile, insn.modrm.reg as u32, size));
        }

        OpKind::Mt => {
            if insn.exs.b != 0 {
                return Err(Status::InvalidRegisterInInstruction);
            }
            operand.info =
                OperandInfo::Reg(fixed_reg(RegisterClass::Tile, insn.modrm.rm as u32, size));
        }

        OpKind::Vt => {
            let id = insn.exs.v;
            if id > 7 {
                return Err(Status::InvalidRegisterInInstruction);
            }
            operand.info = OperandInfo::Reg(fixed_reg(RegisterClass::Tile, id as u32, size));
        }
    }

    if is_memory_form {
        insn.memory_access |= operand.access;
        let mut mem = build_memory(insn, &sizes, size)?;

        if insn.encoding == InstructionEncoding::Evex {
            // Most EVEX encodings with an 8 bit displacement use the
            // compressed form.
            if insn.has_disp && insn.disp_length == 1 {
                insn.has_comp_disp = true;
                mem.has_comp_disp = true;
                mem.comp_disp_size = comp_disp_size(insn, operand.size);
            }

            // Broadcast fixes the element size to 32 or 64 bit; the total
            // size stays available through the broadcast count.
            if insn.exs.bm != 0 && spec.deco.intersects(OpDeco::B32 | OpDeco::B64) {
                insn.has_broadcast = true;
                mem.has_broadcast = true;

                size = if spec.deco.contains(OpDeco::B32) {
                    4
                } else if spec.deco.contains(OpDeco::B64) {
                    8
                } else if width {
                    8
                } else {
                    4
                };

                operand.size = size;
                operand.raw_size = size;
            }
        }

        operand.info = OperandInfo::Mem(mem);
    }

    // Block register addressing: the block start is aligned down to the
    // block size.
    if let OperandInfo::Reg(ref mut reg_info) = operand.info {
        if spec.block != 0 {
            reg_info.count = spec.block;
            reg_info.id &= !(spec.block as u32 - 1);
            reg_info.is_block = true;
        } else {
            reg_info.count = 1;
        }
    }

    insn.operands_encoding_map |= operand.encoding.bit();

    if !spec.deco.is_empty() {
        // Mask applies only when the mask register is not k0.
        if spec.deco.contains(OpDeco::MASK) && insn.exs.k != 0 {
            operand.decorator.mask = Some(insn.exs.k);
            insn.has_mask = true;
        }

        // Zeroing needs the z bit and a register destination.
        if spec.deco.contains(OpDeco::Z)
            && insn.exs.z != 0
            && !operand.info.is_memory()
        {
            operand.decorator.zeroing = true;
            insn.has_zero = true;
        }

        if spec.deco.intersects(OpDeco::B32 | OpDeco::B64)
            && insn.exs.bm != 0
            && insn.modrm.mod_ != 3
        {
            operand.decorator.broadcast = Some(Broadcast {
                size: operand.size,
                count: (bcst_size / operand.size) as u8,
            });
        }

        if spec.deco.contains(OpDeco::SAE) {
            operand.decorator.sae = insn.has_sae;
        }

        if spec.deco.contains(OpDeco::ER) {
            operand.decorator.er = insn.has_er;
        }
    }

    insn.operands[index] = operand;

    Ok(())
}
