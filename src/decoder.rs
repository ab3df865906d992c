//! Binary instruction decoding.

use crate::enums::*;
use crate::insn::*;
use crate::operand::parse_operand;
use crate::status::{Result, Status};
use crate::table::{self, ix, Node};

/// Well known prefix bytes.
pub(crate) mod pfx {
    pub const LOCK: u8 = 0xF0;
    /// REPNE/REPNZ; doubles as XACQUIRE and BND.
    pub const REPNZ: u8 = 0xF2;
    /// REPE/REPZ; doubles as XRELEASE.
    pub const REPZ: u8 = 0xF3;
    pub const SEG_CS: u8 = 0x2E;
    pub const SEG_SS: u8 = 0x36;
    pub const SEG_DS: u8 = 0x3E;
    pub const SEG_ES: u8 = 0x26;
    pub const SEG_FS: u8 = 0x64;
    pub const SEG_GS: u8 = 0x65;
    pub const OP_SIZE: u8 = 0x66;
    pub const ADDR_SIZE: u8 = 0x67;
    pub const XOP: u8 = 0x8F;
    pub const VEX_2B: u8 = 0xC5;
    pub const VEX_3B: u8 = 0xC4;
    pub const EVEX: u8 = 0x62;
    /// Branch taken hint / no-track alias.
    pub const BR_TAKEN: u8 = 0x3E;
    /// Branch not taken hint.
    pub const BR_NOT_TAKEN: u8 = 0x2E;
}

#[derive(Clone, Copy, Eq, PartialEq)]
enum PrefixClass {
    None,
    /// A legacy group 1..4 prefix.
    Standard,
    /// 40..4F; meaningful only in 64 bit mode.
    Rex,
    /// A possible XOP/VEX/EVEX introducer.
    Extended,
}

fn prefix_class(byte: u8) -> PrefixClass {
    match byte {
        pfx::LOCK
        | pfx::REPNZ
        | pfx::REPZ
        | pfx::SEG_CS
        | pfx::SEG_SS
        | pfx::SEG_DS
        | pfx::SEG_ES
        | pfx::SEG_FS
        | pfx::SEG_GS
        | pfx::OP_SIZE
        | pfx::ADDR_SIZE => PrefixClass::Standard,
        0x40..=0x4F => PrefixClass::Rex,
        pfx::XOP | pfx::VEX_2B | pfx::VEX_3B | pfx::EVEX => PrefixClass::Extended,
        _ => PrefixClass::None,
    }
}

/// Reads a `size` byte little-endian quantity.
pub(crate) fn fetch_data(code: &[u8], offset: usize, size: u8) -> u64 {
    let mut value = 0u64;
    for i in 0..size as usize {
        value |= (code[offset + i] as u64) << (i * 8);
    }
    value
}

/// Sign-extends a `size` byte value to 64 bit.
pub(crate) fn sign_ex(size: u8, value: u64) -> u64 {
    match size {
        1 => value as u8 as i8 as i64 as u64,
        2 => value as u16 as i16 as i64 as u64,
        4 => value as u32 as i32 as i64 as u64,
        _ => value,
    }
}

#[inline]
fn ensure(code: &[u8], offset: usize, count: usize) -> Result {
    if offset + count > code.len() {
        Err(Status::BufferTooSmall)
    } else {
        Ok(())
    }
}

#[inline]
fn bump_length(insn: &mut DecodedInstruction, count: u8) -> Result {
    insn.length += count;
    if insn.length as usize > MAX_INSTRUCTION_LENGTH {
        Err(Status::InstructionTooLong)
    } else {
        Ok(())
    }
}

fn fetch_opcode(insn: &mut DecodedInstruction, code: &[u8]) -> Result<u8> {
    let offset = insn.length as usize;
    ensure(code, offset, 1)?;

    let byte = code[offset];
    insn.opcode_bytes[insn.op_length as usize] = byte;
    insn.op_length += 1;

    bump_length(insn, 1)?;
    Ok(byte)
}

fn fetch_modrm(insn: &mut DecodedInstruction, code: &[u8]) -> Result {
    let offset = insn.length as usize;
    ensure(code, offset, 1)?;

    insn.has_modrm = true;
    insn.modrm = Modrm::from_byte(code[offset]);
    insn.modrm_offset = offset as u8;

    bump_length(insn, 1)
}

pub(crate) fn fetch_modrm_and_sib(insn: &mut DecodedInstruction, code: &[u8]) -> Result {
    fetch_modrm(insn, code)?;

    // SIB follows for rm == 4, memory forms, 32/64 bit addressing.
    if insn.modrm.rm == 4 && insn.modrm.mod_ != 3 && insn.addr_mode != 0 {
        let offset = insn.length as usize;
        ensure(code, offset, 1)?;

        insn.has_sib = true;
        insn.sib = Sib::from_byte(code[offset]);

        bump_length(insn, 1)?;
    }

    Ok(())
}

static DISP_SIZE_16: [[u8; 8]; 4] = [
    [0, 0, 0, 0, 0, 0, 2, 0],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [2, 2, 2, 2, 2, 2, 2, 2],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

static DISP_SIZE: [[u8; 8]; 4] = [
    [0, 0, 0, 0, 0, 4, 0, 0],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [4, 4, 4, 4, 4, 4, 4, 4],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

pub(crate) fn fetch_displacement(insn: &mut DecodedInstruction, code: &[u8]) -> Result {
    let disp_size = if insn.addr_mode == 0 {
        DISP_SIZE_16[insn.modrm.mod_ as usize][insn.modrm.rm as usize]
    } else {
        let selector = if insn.has_sib {
            insn.sib.base
        } else {
            insn.modrm.rm
        };
        DISP_SIZE[insn.modrm.mod_ as usize][selector as usize]
    };

    if disp_size != 0 {
        static SIGN_MASK: [u32; 4] = [0x80, 0x8000, 0, 0x8000_0000];

        let offset = insn.length as usize;
        ensure(code, offset, disp_size as usize)?;

        insn.has_disp = true;
        insn.disp = fetch_data(code, offset, disp_size) as u32;
        insn.sign_disp = insn.disp & SIGN_MASK[disp_size as usize - 1] != 0;
        insn.disp_length = disp_size;
        insn.disp_offset = offset as u8;

        bump_length(insn, disp_size)?;
    }

    Ok(())
}

pub(crate) fn fetch_immediate(insn: &mut DecodedInstruction, code: &[u8], size: u8) -> Result<u64> {
    let offset = insn.length as usize;
    ensure(code, offset, size as usize)?;

    let value = fetch_data(code, offset, size);
    let slot = insn.imm_count as usize;
    if slot >= insn.imm.len() {
        return Err(Status::InternalError);
    }

    insn.imm[slot] = Immediate {
        length: size,
        offset: offset as u8,
        value,
    };
    insn.imm_count += 1;

    bump_length(insn, size)?;
    Ok(value)
}

pub(crate) fn fetch_sse_immediate(insn: &mut DecodedInstruction, code: &[u8]) -> Result {
    let offset = insn.length as usize;
    ensure(code, offset, 1)?;

    insn.has_sse_imm = true;
    insn.sse_imm_offset = offset as u8;
    insn.sse_imm = code[offset];

    bump_length(insn, 1)
}

pub(crate) fn fetch_rel_offset(insn: &mut DecodedInstruction, code: &[u8], size: u8) -> Result {
    let offset = insn.length as usize;
    ensure(code, offset, size as usize)?;

    insn.has_rel_offs = true;
    insn.rel_offs_length = size;
    insn.rel_offs_offset = offset as u8;
    insn.rel_offs = fetch_data(code, offset, size) as u32;

    bump_length(insn, size)
}

pub(crate) fn fetch_moffset(insn: &mut DecodedInstruction, code: &[u8], size: u8) -> Result {
    let offset = insn.length as usize;
    ensure(code, offset, size as usize)?;

    insn.has_moffset = true;
    insn.moffset_length = size;
    insn.moffset_offset = offset as u8;
    insn.moffset = fetch_data(code, offset, size);

    bump_length(insn, size)
}

pub(crate) fn fetch_address(insn: &mut DecodedInstruction, code: &[u8], size: u8) -> Result {
    let offset = insn.length as usize;
    ensure(code, offset, size as usize)?;

    insn.has_far_addr = true;
    insn.far_addr_length = size;
    insn.far_addr_offset = offset as u8;
    insn.far_offset = fetch_data(code, offset, size - 2) as u32;
    insn.far_segment = fetch_data(code, offset + size as usize - 2, 2) as u16;

    bump_length(insn, size)
}

fn fetch_xop(insn: &mut DecodedInstruction, code: &[u8]) -> Result {
    let offset = insn.length as usize;
    ensure(code, offset, 2)?;

    if code[offset + 1] & 0x1F < 8 {
        // Not XOP; the byte decodes as POP through the legacy table.
        return Ok(());
    }

    ensure(code, offset, 3)?;

    if insn.has_op_size || insn.rep != 0 || insn.has_rex {
        return Err(Status::InvalidPrefixSequence);
    }

    insn.encoding = InstructionEncoding::Xop;

    let b1 = code[offset + 1];
    let b2 = code[offset + 2];
    insn.exs.r = !(b1 >> 7) & 1;
    insn.exs.x = !(b1 >> 6) & 1;
    insn.exs.b = !(b1 >> 5) & 1;
    insn.exs.m = b1 & 0x1F;
    insn.exs.w = b2 >> 7;
    insn.exs.v = !(b2 >> 3) & 0xF;
    insn.exs.l = (b2 >> 2) & 1;
    insn.exs.p = b2 & 3;

    // No extended registers outside 64 bit mode.
    if insn.def_code != MachineMode::Long64 {
        if (insn.exs.r | insn.exs.x) != 0 {
            return Err(Status::InvalidEncodingInMode);
        }

        if insn.exs.v & 0x8 == 0x8 {
            return Err(Status::InvalidEncodingInMode);
        }

        insn.exs.b = 0;
    }

    bump_length(insn, 3)
}

fn fetch_vex2(insn: &mut DecodedInstruction, code: &[u8]) -> Result {
    let offset = insn.length as usize;
    ensure(code, offset, 2)?;

    // VEX only exists in 32/64 bit mode; otherwise this is LDS.
    if insn.def_code != MachineMode::Long64 && code[offset + 1] & 0xC0 != 0xC0 {
        return Ok(());
    }

    if insn.has_op_size || insn.rep != 0 || insn.has_rex || insn.has_lock {
        return Err(Status::InvalidPrefixSequence);
    }

    insn.encoding = InstructionEncoding::Vex;
    insn.vex_form = Some(VexForm::Vex2);

    let b1 = code[offset + 1];
    // The two byte form always addresses the 0F map.
    insn.exs.m = 1;
    insn.exs.r = !(b1 >> 7) & 1;
    insn.exs.v = !(b1 >> 3) & 0xF;
    insn.exs.l = (b1 >> 2) & 1;
    insn.exs.p = b1 & 3;

    if insn.def_code != MachineMode::Long64 {
        insn.exs.v &= 7;
    }

    bump_length(insn, 2)
}

fn fetch_vex3(insn: &mut DecodedInstruction, code: &[u8]) -> Result {
    let offset = insn.length as usize;
    ensure(code, offset, 2)?;

    // VEX only exists in 32/64 bit mode; otherwise this is LES.
    if insn.def_code != MachineMode::Long64 && code[offset + 1] & 0xC0 != 0xC0 {
        return Ok(());
    }

    ensure(code, offset, 3)?;

    if insn.has_op_size || insn.rep != 0 || insn.has_rex || insn.has_lock {
        return Err(Status::InvalidPrefixSequence);
    }

    insn.encoding = InstructionEncoding::Vex;
    insn.vex_form = Some(VexForm::Vex3);

    let b1 = code[offset + 1];
    let b2 = code[offset + 2];
    insn.exs.r = !(b1 >> 7) & 1;
    insn.exs.x = !(b1 >> 6) & 1;
    insn.exs.b = !(b1 >> 5) & 1;
    insn.exs.m = b1 & 0x1F;
    insn.exs.w = b2 >> 7;
    insn.exs.v = !(b2 >> 3) & 0xF;
    insn.exs.l = (b2 >> 2) & 1;
    insn.exs.p = b2 & 3;

    if insn.def_code != MachineMode::Long64 {
        // R and X are covered by the introducer check above.
        insn.exs.v &= 7;
        insn.exs.b = 0;
    }

    bump_length(insn, 3)
}

fn fetch_evex(insn: &mut DecodedInstruction, code: &[u8]) -> Result {
    let offset = insn.length as usize;
    ensure(code, offset, 2)?;

    if insn.def_code != MachineMode::Long64 && code[offset + 1] & 0xC0 != 0xC0 {
        // BOUND in a legacy mode, not EVEX.
        return Ok(());
    }

    ensure(code, offset, 4)?;

    insn.encoding = InstructionEncoding::Evex;

    if insn.has_op_size || insn.rep != 0 || insn.has_rex {
        return Err(Status::InvalidPrefixSequence);
    }

    let b1 = code[offset + 1];
    let b2 = code[offset + 2];
    let b3 = code[offset + 3];

    // Reserved bit positions are checked before anything else; the
    // per-opcode checks happen when the leaf is reached.
    let zero = (b1 >> 3) & 1;
    let one = (b2 >> 2) & 1;
    let map = b1 & 0x7;
    if zero != 0 || one != 1 || map == 0 {
        return Err(Status::InvalidEncoding);
    }

    insn.exs.r = !(b1 >> 7) & 1;
    insn.exs.x = !(b1 >> 6) & 1;
    insn.exs.b = !(b1 >> 5) & 1;
    insn.exs.rp = !(b1 >> 4) & 1;
    insn.exs.m = map;
    insn.exs.w = b2 >> 7;
    insn.exs.v = !(b2 >> 3) & 0xF;
    insn.exs.p = b2 & 3;
    insn.exs.z = b3 >> 7;
    insn.exs.l = (b3 >> 5) & 3;
    insn.exs.bm = (b3 >> 4) & 1;
    insn.exs.vp = !(b3 >> 3) & 1;
    insn.exs.k = b3 & 7;

    if insn.def_code != MachineMode::Long64 {
        // The high register extensions do not exist outside 64 bit mode.
        insn.exs.r = 0;
        insn.exs.x = 0;
        insn.exs.b = 0;
        insn.exs.rp = 0;
        insn.exs.v &= 0x7;
        insn.exs.vp = 0;
    }

    bump_length(insn, 4)
}

fn fetch_prefixes(insn: &mut DecodedInstruction, code: &[u8]) -> Result {
    let mut more = true;

    while more {
        more = false;

        let offset = insn.length as usize;
        ensure(code, offset, 1)?;
        let prefix = code[offset];

        let class = prefix_class(prefix);
        if class == PrefixClass::None {
            // Most bytes are not prefixes at all; stop right here. The
            // extended-prefix dispatch below is skipped on purpose.
            insn.op_offset = insn.length;
            return Ok(());
        }

        if class == PrefixClass::Standard {
            match prefix {
                pfx::LOCK => {
                    insn.has_lock = true;
                    more = true;
                }
                pfx::REPZ | pfx::REPNZ => {
                    insn.rep = prefix;
                    more = true;
                }
                pfx::SEG_CS | pfx::SEG_SS | pfx::SEG_DS | pfx::SEG_ES | pfx::SEG_FS
                | pfx::SEG_GS => {
                    if insn.def_code == MachineMode::Long64 {
                        // Only FS/GS overrides are honoured in 64 bit mode;
                        // the others must not clobber a recorded FS/GS.
                        if prefix == pfx::SEG_FS || prefix == pfx::SEG_GS {
                            insn.seg_prefix = prefix;
                            insn.has_seg = true;
                        }
                    } else {
                        insn.seg_prefix = prefix;
                        insn.has_seg = true;
                    }
                    if prefix == pfx::BR_TAKEN {
                        insn.branch_hint = BranchHint::Taken;
                        insn.has_seg = true;
                    } else if prefix == pfx::BR_NOT_TAKEN {
                        insn.branch_hint = BranchHint::NotTaken;
                        insn.has_seg = true;
                    }
                    more = true;
                }
                pfx::OP_SIZE => {
                    insn.has_op_size = true;
                    more = true;
                }
                pfx::ADDR_SIZE => {
                    insn.has_addr_size = true;
                    more = true;
                }
                _ => {}
            }
        }

        // REX must immediately precede the opcode; any other prefix after
        // it consumes the REX.
        if more && insn.has_rex {
            insn.has_rex = false;
            insn.rex = 0;
            insn.exs.w = 0;
            insn.exs.r = 0;
            insn.exs.x = 0;
            insn.exs.b = 0;
        }

        if insn.def_code == MachineMode::Long64 && class == PrefixClass::Rex {
            insn.has_rex = true;
            insn.rex = prefix;
            insn.exs.w = (prefix >> 3) & 1;
            insn.exs.r = (prefix >> 2) & 1;
            insn.exs.x = (prefix >> 1) & 1;
            insn.exs.b = prefix & 1;
            more = true;
        }

        if more {
            bump_length(insn, 1)?;
        }
    }

    // At least the opcode or an extended prefix must follow.
    let offset = insn.length as usize;
    ensure(code, offset, 1)?;

    if prefix_class(code[offset]) == PrefixClass::Extended {
        match code[offset] {
            pfx::XOP => fetch_xop(insn, code)?,
            pfx::VEX_2B => fetch_vex2(insn, code)?,
            pfx::VEX_3B => fetch_vex3(insn, code)?,
            pfx::EVEX => fetch_evex(insn, code)?,
            _ => return Err(Status::InternalError),
        }
    }

    insn.op_offset = insn.length;

    Ok(())
}

/// Computes the address mode and the plain (pre-attribute) operand mode.
fn get_addr_and_op_mode(insn: &mut DecodedInstruction) -> Result {
    match insn.def_code {
        MachineMode::Legacy16 => {
            insn.addr_mode = if insn.has_addr_size { 1 } else { 0 };
            insn.op_mode = if insn.has_op_size { 1 } else { 0 };
        }
        MachineMode::Legacy32 => {
            insn.addr_mode = if insn.has_addr_size { 0 } else { 1 };
            insn.op_mode = if insn.has_op_size { 0 } else { 1 };
        }
        MachineMode::Long64 => {
            insn.addr_mode = if insn.has_addr_size { 1 } else { 2 };
            insn.op_mode = if insn.exs.w != 0 {
                2
            } else if insn.has_op_size {
                0
            } else {
                1
            };
        }
    }

    Ok(())
}

/// Computes the effective operand mode and the default word length, taking
/// the instruction attributes into account.
fn get_effective_op_mode(insn: &mut DecodedInstruction) {
    let width = insn.exs.w != 0 && !insn.attributes.contains(InsnAttributes::WIG);
    // In 64 bit mode the operand is forced to 64 bit; size changing
    // prefixes are ignored. AMD knows no forced operands, only defaults.
    let f64 = insn.attributes.contains(InsnAttributes::F64) && insn.vendor != Vendor::Amd;
    let d64 = insn.attributes.contains(InsnAttributes::D64)
        || (insn.attributes.contains(InsnAttributes::F64) && insn.vendor == Vendor::Amd);
    // 66 is only size changing when it is not consumed as a mandatory
    // prefix; MOVBE/CRC32 carry mandatory F2 and still honour 66.
    let has66 = insn.has_op_size
        && (!insn.has_mandatory_66 || insn.attributes.contains(InsnAttributes::S66));

    match insn.def_code {
        MachineMode::Legacy16 => insn.ef_op_mode = if has66 { 1 } else { 0 },
        MachineMode::Legacy32 => insn.ef_op_mode = if has66 { 0 } else { 1 },
        MachineMode::Long64 => {
            insn.ef_op_mode = if width || f64 || (d64 && !has66) {
                2
            } else if has66 {
                0
            } else {
                1
            };
            if insn.attributes.contains(InsnAttributes::I67) {
                insn.addr_mode = 2;
            }
        }
    }

    insn.word_length = 2 << insn.ef_op_mode;
}

/// Computes the (effective) vector length for XOP/VEX/EVEX encodings.
fn get_vector_length(insn: &mut DecodedInstruction) -> Result {
    let sae_er = insn.valid_decorators.contains(ValidDecorators::ER)
        || insn.valid_decorators.contains(ValidDecorators::SAE)
        || insn.attributes.contains(InsnAttributes::IER);

    if insn.encoding == InstructionEncoding::Evex
        && insn.exs.bm != 0
        && insn.modrm.mod_ == 3
        && sae_er
    {
        // Embedded rounding / SAE forces the maximum vector length.
        if insn.tuple == TupleType::T1s || insn.tuple == TupleType::T1f {
            insn.vec_mode = 0;
            insn.ef_vec_mode = 0;
        } else {
            insn.vec_mode = 2;
            insn.ef_vec_mode = 2;
        }

        return Ok(());
    }

    let lig = insn.attributes.contains(InsnAttributes::LIG);
    match insn.exs.l {
        0 => {
            insn.vec_mode = 0;
            insn.ef_vec_mode = 0;
        }
        1 => {
            insn.vec_mode = 1;
            insn.ef_vec_mode = if lig { 0 } else { 1 };
        }
        2 => {
            insn.vec_mode = 2;
            insn.ef_vec_mode = if lig { 0 } else { 2 };
        }
        _ => return Err(Status::InvalidEncoding),
    }

    Ok(())
}

/// Ensures ModRM, SIB and the displacement have been fetched.
fn need_modrm(insn: &mut DecodedInstruction, code: &[u8]) -> Result {
    if !insn.has_modrm {
        fetch_modrm_and_sib(insn, code)?;
        fetch_displacement(insn, code)?;
    }

    Ok(())
}

/// Walks the decision forest until an instruction leaf is reached.
fn find_instruction(
    insn: &mut DecodedInstruction,
    code: &[u8],
) -> Result<&'static table::Insn> {
    let mut node: &'static Node = match insn.encoding {
        InstructionEncoding::Legacy => &table::ROOT_LEGACY,
        InstructionEncoding::Xop => &table::ROOT_XOP,
        InstructionEncoding::Vex => &table::ROOT_VEX,
        InstructionEncoding::Evex => &table::ROOT_EVEX,
        _ => return Err(Status::InternalError),
    };

    // At most one F2 and one F3 redirection per instruction, otherwise
    // CRC32-style encodings (66 F2 0F ...) would loop forever.
    let mut red_f2 = false;
    let mut red_f3 = false;

    let descriptor = loop {
        let next: table::Link = match node {
            Node::Leaf(ins) => break *ins,

            Node::Opcode(children) => {
                let byte = fetch_opcode(insn, code)?;
                children[byte as usize]
            }

            Node::Opcode3dnow(children) => {
                // The selecting opcode trails ModRM and displacement.
                need_modrm(insn, code)?;
                let byte = fetch_opcode(insn, code)?;
                children[byte as usize]
            }

            Node::ModrmMod(children) => {
                need_modrm(insn, code)?;
                children[if insn.modrm.mod_ == 3 { 1 } else { 0 }]
            }

            Node::ModrmReg(children) => {
                need_modrm(insn, code)?;
                children[insn.modrm.reg as usize]
            }

            Node::ModrmRm(children) => {
                need_modrm(insn, code)?;
                children[insn.modrm.rm as usize]
            }

            Node::Prefix(children) => {
                let index = if insn.rep == pfx::REPNZ && !red_f2 {
                    red_f2 = true;
                    insn.has_mandatory_f2 = true;
                    ix::MP_F2
                } else if insn.rep == pfx::REPZ && !red_f3 {
                    red_f3 = true;
                    insn.has_mandatory_f3 = true;
                    ix::MP_F3
                } else if insn.has_op_size {
                    insn.has_mandatory_66 = true;
                    ix::MP_66
                } else {
                    ix::MP_NONE
                };
                children[index]
            }

            Node::Mode(children) => {
                let index = ix::MODE_16 + insn.def_code.index();
                if children[index].is_some() {
                    children[index]
                } else {
                    children[ix::MODE_NONE]
                }
            }

            Node::DataSize(children) => {
                let mut index = ix::DSIZE_16 + insn.op_mode as usize;
                if children[index].is_none() {
                    index = ix::DSIZE_NONE;
                }

                // Default/forced 64 bit redirections only exist in long
                // mode.
                if insn.def_code == MachineMode::Long64 {
                    if children[ix::DSIZE_DEF64].is_some()
                        && (!insn.has_op_size || insn.exs.w != 0)
                    {
                        index = ix::DSIZE_DEF64;
                    } else if children[ix::DSIZE_F64].is_some() {
                        index = ix::DSIZE_F64;
                    }
                }

                children[index]
            }

            Node::AddrSize(children) => {
                let index = ix::ASIZE_16 + insn.addr_mode as usize;
                if children[index].is_some() {
                    children[index]
                } else {
                    children[ix::ASIZE_NONE]
                }
            }

            Node::Aux(children) => {
                let index = if insn.has_rex
                    && insn.rex & 1 != 0
                    && children[ix::AUX_REXB].is_some()
                {
                    ix::AUX_REXB
                } else if insn.has_rex && insn.rex & 8 != 0 && children[ix::AUX_REXW].is_some() {
                    ix::AUX_REXW
                } else if insn.def_code == MachineMode::Long64 && children[ix::AUX_O64].is_some() {
                    ix::AUX_O64
                } else if insn.rep == pfx::REPZ && children[ix::AUX_F3].is_some() {
                    ix::AUX_F3
                } else if insn.rep != 0 && children[ix::AUX_REP].is_some() {
                    ix::AUX_REP
                } else {
                    ix::AUX_NONE
                };
                children[index]
            }

            Node::Vendor(children) => {
                if children[insn.vendor as usize].is_some() {
                    children[insn.vendor as usize]
                } else {
                    children[Vendor::Any as usize]
                }
            }

            Node::Feature(children) => {
                if children[ix::FEAT_MPX].is_some() && insn.features.contains(FeatureFlags::MPX) {
                    children[ix::FEAT_MPX]
                } else if children[ix::FEAT_CET].is_some()
                    && insn.features.contains(FeatureFlags::CET)
                {
                    children[ix::FEAT_CET]
                } else if children[ix::FEAT_CLDEMOTE].is_some()
                    && insn.features.contains(FeatureFlags::CLDEMOTE)
                {
                    children[ix::FEAT_CLDEMOTE]
                } else {
                    children[ix::FEAT_NONE]
                }
            }

            Node::VexMap(children) => children[insn.exs.m as usize],

            Node::VexPp(children) => children[insn.exs.p as usize],

            Node::VexL(children) => {
                if insn.encoding == InstructionEncoding::Evex && insn.exs.bm != 0 {
                    // SAE/ER reuse the broadcast bit on register forms and
                    // force L'L to the instruction's maximum vector length,
                    // so the ModRM byte has to be known right now. Every
                    // EVEX instruction has one.
                    need_modrm(insn, code)?;

                    if insn.modrm.mod_ == 3 {
                        if children[2].is_some() {
                            children[2]
                        } else if children[1].is_some() {
                            children[1]
                        } else {
                            children[0]
                        }
                    } else {
                        children[insn.exs.l as usize]
                    }
                } else {
                    children[insn.exs.l as usize]
                }
            }

            Node::VexW(children) => children[insn.exs.w as usize],
        };

        node = next.ok_or(Status::InvalidEncoding)?;
    };

    // If the leaf needs ModRM and the walk never touched it, fetch it now.
    if descriptor.attributes.contains(InsnAttributes::MODRM) && !insn.has_modrm {
        if descriptor.attributes.contains(InsnAttributes::MFR) {
            // MOV to/from control/debug registers: mod is forced to the
            // register form, SIB and displacement do not exist.
            fetch_modrm(insn, code)?;
        } else {
            fetch_modrm_and_sib(insn, code)?;
            fetch_displacement(insn, code)?;
        }
    }

    insn.primary_opcode = insn.opcode_bytes[insn.op_length as usize - 1];
    insn.main_op_offset = if descriptor.attributes.contains(InsnAttributes::OP3DNOW) {
        insn.length - 1
    } else {
        insn.op_offset + insn.op_length - 1
    };

    if insn.def_code == MachineMode::Long64
        && descriptor.attributes.contains(InsnAttributes::I64)
    {
        return Err(Status::InvalidEncodingInMode);
    }

    if insn.def_code != MachineMode::Long64
        && descriptor.attributes.contains(InsnAttributes::O64)
    {
        return Err(Status::InvalidEncodingInMode);
    }

    Ok(descriptor)
}

/// Cross-cutting #UD checks that cannot live inside the forest.
fn validate(insn: &DecodedInstruction) -> Result {
    // LOCK needs a lockable instruction and a memory destination. MOV CR
    // on AMD in 16/32 bit mode is the documented exception.
    if insn.has_lock
        && (!insn.attributes.contains(InsnAttributes::LOCK_SPECIAL)
            || insn.def_code == MachineMode::Long64)
        && (!insn.valid_prefixes.contains(ValidPrefixes::LOCK)
            || !insn.operands[0].info.is_memory())
    {
        return Err(Status::BadLockPrefix);
    }

    if insn.has_op_size && insn.attributes.contains(InsnAttributes::NO66) {
        return Err(Status::Bad66Prefix);
    }

    if insn.encoding != InstructionEncoding::Legacy {
        // Unused vvvv must be zero (1111b on the wire).
        if insn.operands_encoding_map & OperandEncoding::Vvvv.bit() == 0 && insn.exs.v != 0 {
            return Err(Status::VvvvMustBeZero);
        }

        if insn.ef_vec_mode == 0 && insn.attributes.contains(InsnAttributes::NOL0) {
            return Err(Status::InvalidEncoding);
        }

        // No vector register may appear twice in a VSIB instruction;
        // SCATTER may reuse the data source as the index.
        if insn.attributes.contains(InsnAttributes::VSIB) && insn.category != Category::Scatter {
            let mut used = [0u8; 32];

            for operand in insn.operands() {
                match &operand.info {
                    crate::operand::OperandInfo::Reg(r) if r.class == RegisterClass::Sse => {
                        used[r.id as usize & 31] += 1;
                        if used[r.id as usize & 31] > 1 {
                            return Err(Status::InvalidVsibRegs);
                        }
                    }
                    crate::operand::OperandInfo::Mem(m) if m.is_vsib => {
                        used[m.index as usize & 31] += 1;
                        if used[m.index as usize & 31] > 1 {
                            return Err(Status::InvalidVsibRegs);
                        }
                    }
                    _ => {}
                }
            }
        }

        if insn.exc_class == ExceptionClass::Amx {
            if insn.exc_type == ExceptionType::AmxE4 {
                // All three tile operands must be pairwise distinct.
                let id = |i: usize| match insn.operands[i].info.register() {
                    Some(r) => r.id,
                    None => u32::MAX,
                };
                if id(0) == id(1) || id(0) == id(2) || id(1) == id(2) {
                    return Err(Status::InvalidRegisterInInstruction);
                }
            } else if insn.exs.v != 0 {
                return Err(Status::VvvvMustBeZero);
            }
        }

        if insn.encoding == InstructionEncoding::Evex {
            if !insn.valid_decorators.contains(ValidDecorators::MASK) && insn.exs.k != 0 {
                return Err(Status::MaskNotSupported);
            }

            if insn.attributes.contains(InsnAttributes::MMASK) && insn.exs.k == 0 {
                return Err(Status::MaskRequired);
            }

            if insn.exs.z != 0 {
                if !insn.valid_decorators.contains(ValidDecorators::ZERO) {
                    return Err(Status::ZeroingNotSupported);
                }

                if insn.operands[0].info.is_memory() {
                    return Err(Status::ZeroingNotSupported);
                }
            }

            if insn.exs.bm != 0
                && insn.modrm.mod_ == 3
                && !insn.valid_decorators.contains(ValidDecorators::SAE)
                && !insn.valid_decorators.contains(ValidDecorators::ER)
                && !insn.attributes.contains(InsnAttributes::IER)
            {
                return Err(Status::SaeErNotSupported);
            }

            if insn.exs.bm != 0
                && insn.modrm.mod_ != 3
                && !insn.valid_decorators.contains(ValidDecorators::BROADCAST)
            {
                return Err(Status::BroadcastNotSupported);
            }
        }
    }

    Ok(())
}

/// Instruction decoder, parameterized over the operating mode.
///
/// A `Decoder` is cheap to construct and stateless; concurrent decoding on
/// one instance is safe.
///
/// # Examples
///
/// ```
/// use xdis::{Decoder, Mnemonic};
///
/// let decoder = Decoder::new64();
/// let insn = decoder.decode(&[0x90]).unwrap();
/// assert_eq!(insn.mnemonic, Mnemonic::Nop);
/// assert_eq!(insn.length, 1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Decoder {
    pub def_code: MachineMode,
    pub def_data: StackWidth,
    pub def_stack: StackWidth,
    pub vendor: Vendor,
    pub features: FeatureFlags,
}

impl Decoder {
    /// Creates a decoder for the given code and data size, using the data
    /// size as the stack size, the generic vendor and all features.
    pub fn new(def_code: MachineMode, def_data: StackWidth) -> Decoder {
        Decoder {
            def_code,
            def_data,
            def_stack: def_data,
            vendor: Vendor::Any,
            features: FeatureFlags::ALL,
        }
    }

    /// Creates a 64 bit decoder.
    pub fn new64() -> Decoder {
        Decoder::new(MachineMode::Long64, StackWidth::_64)
    }

    /// Creates a 32 bit decoder.
    pub fn new32() -> Decoder {
        Decoder::new(MachineMode::Legacy32, StackWidth::_32)
    }

    /// Creates a decoder with explicit stack size and vendor.
    pub fn with_options(
        def_code: MachineMode,
        def_data: StackWidth,
        def_stack: StackWidth,
        vendor: Vendor,
    ) -> Decoder {
        Decoder {
            def_code,
            def_data,
            def_stack,
            vendor,
            features: FeatureFlags::ALL,
        }
    }

    /// Replaces the enabled feature set.
    pub fn features(mut self, features: FeatureFlags) -> Decoder {
        self.features = features;
        self
    }

    /// Decodes the first instruction of `code`.
    ///
    /// On success the returned record is fully populated; on failure the
    /// partially decoded state is discarded.
    pub fn decode(&self, code: &[u8]) -> Result<DecodedInstruction> {
        if code.is_empty() {
            return Err(Status::InvalidParameter);
        }

        let mut insn = DecodedInstruction {
            def_code: self.def_code,
            def_data: self.def_data,
            def_stack: self.def_stack,
            vendor: self.vendor,
            features: self.features,
            ..DecodedInstruction::default()
        };

        // Peek at the first byte; for most instructions there is no prefix
        // at all and the whole state machine can be skipped.
        if prefix_class(code[0]) != PrefixClass::None {
            fetch_prefixes(&mut insn, code)?;
        }

        get_addr_and_op_mode(&mut insn)?;

        let descriptor = find_instruction(&mut insn, code)?;

        insn.attributes |= descriptor.attributes;
        insn.mnemonic = descriptor.mnemonic;
        insn.category = descriptor.category;
        insn.isa_set = descriptor.isa_set;
        insn.cpuid = descriptor.cpuid;
        insn.valid_prefixes = descriptor.valid_prefixes;
        insn.valid_decorators = descriptor.valid_decorators;
        insn.exc_class = descriptor.exc_class;
        insn.exc_type = descriptor.exc_type;
        insn.tuple = descriptor.tuple;
        insn.fpu_flags = descriptor.fpu_flags;

        // Flags marked both set and cleared are undefined.
        let undefined = descriptor.flags.set & descriptor.flags.cleared;
        insn.flags_access.tested = descriptor.flags.tested;
        insn.flags_access.modified = descriptor.flags.modified;
        insn.flags_access.set = descriptor.flags.set ^ undefined;
        insn.flags_access.cleared = descriptor.flags.cleared ^ undefined;
        insn.flags_access.undefined = undefined;

        get_effective_op_mode(&mut insn);

        insn.has_vector = insn.encoding != InstructionEncoding::Legacy;
        if insn.has_vector {
            get_vector_length(&mut insn)?;
        }

        // SAE/ER are decided before the operands so the per-operand
        // decorators can mirror them.
        if !descriptor.valid_decorators.is_empty() {
            if insn.valid_decorators.contains(ValidDecorators::SAE)
                && insn.exs.bm != 0
                && insn.modrm.mod_ == 3
            {
                insn.has_sae = true;
            }

            if insn.valid_decorators.contains(ValidDecorators::ER)
                && insn.exs.bm != 0
                && insn.modrm.mod_ == 3
            {
                insn.has_er = true;
                insn.has_sae = true;
                insn.rounding = Some(RoundingMode::from_bits(insn.exs.l));
            }
        }

        insn.exp_operand_count = descriptor.exp_ops;
        insn.operand_count = descriptor.operands.len() as u8;

        for index in 0..descriptor.operands.len() {
            parse_operand(&mut insn, code, index, &descriptor.operands[index])?;
        }

        // XACQUIRE/XRELEASE share their bytes with REP; the instruction
        // qualifies only with a memory destination and LOCK (or the
        // HLE-without-lock capability).
        if insn.rep != 0
            && (insn.has_lock || insn.valid_prefixes.contains(ValidPrefixes::HLE_NO_LOCK))
            && insn.operands[0].info.is_memory()
        {
            let hle = insn.valid_prefixes.contains(ValidPrefixes::HLE);
            if (insn.valid_prefixes.contains(ValidPrefixes::XACQUIRE) || hle)
                && insn.rep == pfx::REPNZ
            {
                insn.is_xacquire = true;
            } else if (insn.valid_prefixes.contains(ValidPrefixes::XRELEASE) || hle)
                && insn.rep == pfx::REPZ
            {
                insn.is_xrelease = true;
            }
        }

        insn.is_repeated = insn.rep != 0
            && insn
                .valid_prefixes
                .intersects(ValidPrefixes::REP | ValidPrefixes::REPC);

        if insn.attributes.contains(InsnAttributes::SSE_COND) {
            insn.sse_condition = Some((insn.imm[0].value & 0x1F) as u8);
        }

        // The no-track prefix only applies to near indirect branches
        // through a register. The 3E byte aliases the taken hint, which is
        // recorded in every mode; the segment field is not.
        insn.is_cet_tracked = insn.attributes.contains(InsnAttributes::CETT)
            && (!insn.valid_prefixes.contains(ValidPrefixes::DNT)
                || insn.branch_hint != BranchHint::Taken
                || (insn.has_modrm && insn.modrm.mod_ != 3));

        validate(&insn)?;

        let length = insn.length as usize;
        insn.bytes[..length].copy_from_slice(&code[..length]);

        Ok(insn)
    }

    /// Returns an iterator yielding `(instruction, ip)` pairs over all
    /// decodable instructions in the buffer. Iteration stops at the first
    /// undecodable byte sequence.
    pub fn instruction_iter<'a, 'b>(
        &'a self,
        buffer: &'b [u8],
        ip: u64,
    ) -> InstructionIterator<'a, 'b> {
        InstructionIterator {
            decoder: self,
            buffer,
            ip,
        }
    }
}

pub struct InstructionIterator<'a, 'b> {
    decoder: &'a Decoder,
    buffer: &'b [u8],
    ip: u64,
}

impl<'a, 'b> Iterator for InstructionIterator<'a, 'b> {
    type Item = (DecodedInstruction, u64);

    fn next(&mut self) -> Option<Self::Item> {
        match self.decoder.decode(self.buffer) {
            Ok(insn) => {
                self.buffer = &self.buffer[insn.length as usize..];
                let item = Some((insn, self.ip));
                self.ip += u64::from(insn.length);
                item
            }
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_extension() {
        assert_eq!(sign_ex(1, 0x80), 0xFFFF_FFFF_FFFF_FF80);
        assert_eq!(sign_ex(2, 0x7FFF), 0x7FFF);
        assert_eq!(sign_ex(4, 0x8000_0000), 0xFFFF_FFFF_8000_0000);
        assert_eq!(sign_ex(8, 0x1234), 0x1234);
    }

    #[test]
    fn little_endian_fetch() {
        let code = [0x78, 0x56, 0x34, 0x12];
        assert_eq!(fetch_data(&code, 0, 4), 0x1234_5678);
        assert_eq!(fetch_data(&code, 1, 2), 0x3456);
    }

    #[test]
    fn rex_consumed_by_later_prefix() {
        // REX.W followed by a segment override loses its effect.
        let decoder = Decoder::new64();
        let insn = decoder.decode(&[0x48, 0x65, 0x89, 0xC3]).unwrap();
        assert!(!insn.has_rex);
        assert_eq!(insn.exs.w, 0);
        assert_eq!(insn.op_width(), 32);
    }

    #[test]
    fn prefix_run_hits_length_cap() {
        let code = [0x26u8; 16];
        let decoder = Decoder::new64();
        assert_eq!(decoder.decode(&code), Err(Status::InstructionTooLong));
    }

    #[test]
    fn empty_buffer_is_a_parameter_error() {
        let decoder = Decoder::new64();
        assert_eq!(decoder.decode(&[]), Err(Status::InvalidParameter));
    }

    #[test]
    fn vex_with_rex_is_rejected() {
        let decoder = Decoder::new64();
        // REX before VEX2 VMOVSD.
        let status = decoder.decode(&[0x48, 0xC5, 0xFB, 0x10, 0xC1]);
        assert_eq!(status, Err(Status::InvalidPrefixSequence));
    }

    #[test]
    fn evex_reserved_bits_are_checked() {
        let decoder = Decoder::new64();
        // EVEX with the must-be-one bit cleared.
        let status = decoder.decode(&[0x62, 0xF1, 0x78, 0x48, 0x58, 0xC1]);
        assert_eq!(status, Err(Status::InvalidEncoding));
    }
}
