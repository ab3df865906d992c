//! Textual instruction formatting routines.

use alloc::string::String;
use core::fmt::Write;

use crate::enums::*;
use crate::insn::DecodedInstruction;
use crate::operand::{MemoryInfo, Operand, OperandInfo, RegisterInfo};
use crate::status::{Result, Status};

/// Renders decoded instructions as Intel syntax assembly.
///
/// # Examples
///
/// ```
/// use xdis::{Decoder, Formatter};
///
/// let decoder = Decoder::new64();
/// let formatter = Formatter::new();
/// let insn = decoder.decode(&[0x48, 0x89, 0xC3]).unwrap();
/// assert_eq!(formatter.format(&insn, 0).unwrap(), "MOV rbx, rax");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Formatter;

impl Formatter {
    pub fn new() -> Formatter {
        Formatter
    }

    /// Formats `insn`, resolving relative operands against `rip` (the
    /// address of the instruction itself).
    pub fn format(&self, insn: &DecodedInstruction, rip: u64) -> Result<String> {
        if insn.mnemonic == Mnemonic::Invalid {
            return Err(Status::InvalidParameter);
        }

        let mut out = String::new();

        self.write_prefixes(insn, &mut out);

        for c in insn.mnemonic.name().chars() {
            out.push(c.to_ascii_uppercase());
        }

        for (index, operand) in insn.explicit_operands().iter().enumerate() {
            out.push_str(if index == 0 { " " } else { ", " });
            self.write_operand(insn, operand, rip, &mut out)?;
        }

        if insn.has_er {
            match insn.rounding {
                Some(RoundingMode::RN) => out.push_str(", {rn-sae}"),
                Some(RoundingMode::RD) => out.push_str(", {rd-sae}"),
                Some(RoundingMode::RU) => out.push_str(", {ru-sae}"),
                Some(RoundingMode::RZ) => out.push_str(", {rz-sae}"),
                None => {}
            }
        } else if insn.has_sae {
            out.push_str(", {sae}");
        }

        Ok(out)
    }

    fn write_prefixes(&self, insn: &DecodedInstruction, out: &mut String) {
        if insn.has_rep() {
            if insn.valid_prefixes.contains(ValidPrefixes::REPC) {
                if insn.has_repz() {
                    out.push_str("REPZ ");
                } else {
                    out.push_str("REPNZ ");
                }
            }

            if insn.valid_prefixes.contains(ValidPrefixes::REP) {
                if insn.has_repz() {
                    out.push_str("REP ");
                } else {
                    out.push_str("REPNZ ");
                }
            }

            if insn.is_xrelease {
                out.push_str("XRELEASE ");
            } else if insn.is_xacquire {
                out.push_str("XACQUIRE ");
            }
        }

        if insn.has_lock && insn.valid_prefixes.contains(ValidPrefixes::LOCK) {
            out.push_str("LOCK ");
        }

        if insn.rep == 0xF2 && insn.valid_prefixes.contains(ValidPrefixes::BND) {
            out.push_str("BND ");
        }

        if insn.has_seg && insn.valid_prefixes.contains(ValidPrefixes::BHINT) {
            match insn.branch_hint {
                BranchHint::Taken => out.push_str("BHT "),
                BranchHint::NotTaken => out.push_str("BHNT "),
                BranchHint::None => {}
            }
        }
    }

    fn write_operand(
        &self,
        insn: &DecodedInstruction,
        operand: &Operand,
        rip: u64,
        out: &mut String,
    ) -> Result {
        match &operand.info {
            OperandInfo::Reg(r) => self.write_register(r, out)?,
            OperandInfo::Mem(mem) => self.write_memory(insn, operand, mem, out)?,
            OperandInfo::Imm(value) => {
                let _ = write!(out, "0x{:x}", truncate(*value, operand.size));
            }
            OperandInfo::Const(value) => {
                let _ = write!(out, "{}", value);
            }
            OperandInfo::Offs(rel) => {
                let target = rip
                    .wrapping_add(insn.length as u64)
                    .wrapping_add(*rel as u64);
                let _ = write!(out, "0x{:x}", truncate(target, operand.size));
            }
            OperandInfo::Addr(ptr) => {
                let _ = write!(out, "0x{:x}:0x{:x}", ptr.segment, ptr.offset);
            }
            OperandInfo::Bank | OperandInfo::None => {}
        }

        // EVEX decorators trail the operand they apply to.
        if let Some(mask) = operand.decorator.mask {
            let _ = write!(out, "{{k{}}}", mask);
        }
        if operand.decorator.zeroing {
            out.push_str("{z}");
        }
        if let Some(bcast) = operand.decorator.broadcast {
            let _ = write!(out, "{{1to{}}}", bcast.count);
        }

        Ok(())
    }

    fn write_register(&self, r: &RegisterInfo, out: &mut String) -> Result {
        match r.class.name(r.id, r.size, r.is_high8) {
            Some(name) => {
                out.push_str(name);
                Ok(())
            }
            None => Err(Status::InvalidParameter),
        }
    }

    fn write_memory(
        &self,
        insn: &DecodedInstruction,
        operand: &Operand,
        mem: &MemoryInfo,
        out: &mut String,
    ) -> Result {
        if let Some(qualifier) = size_qualifier(operand.size) {
            out.push_str(qualifier);
            out.push_str(" ptr ");
        }

        // The segment is only spelled out when it is not the implied one.
        if mem.has_seg && (insn.has_seg || mem.seg == reg::FS || mem.seg == reg::GS) {
            if let Some(name) = RegisterClass::Seg.name(mem.seg as u32, 2, false) {
                out.push_str(name);
                out.push(':');
            }
        }

        out.push('[');
        let mut first = true;

        if mem.is_rip_rel {
            out.push_str("rip");
            first = false;
        }

        if mem.has_base {
            let name = RegisterClass::Gpr
                .name(mem.base as u32, mem.base_size as u16, false)
                .ok_or(Status::InvalidParameter)?;
            out.push_str(name);
            first = false;
        }

        if mem.has_index {
            if !first {
                out.push('+');
            }

            let name = if mem.is_vsib {
                RegisterClass::Sse.name(mem.index as u32, mem.index_size, false)
            } else if mem.index_size == 1 {
                // XLAT indexes with AL.
                RegisterClass::Gpr.name(mem.index as u32, 1, false)
            } else {
                RegisterClass::Gpr.name(mem.index as u32, mem.index_size, false)
            }
            .ok_or(Status::InvalidParameter)?;
            out.push_str(name);

            if mem.scale > 1 {
                let _ = write!(out, "*{}", mem.scale);
            }
            first = false;
        }

        if mem.has_disp {
            // A compressed 8 bit displacement is scaled by the tuple
            // derived factor before it is shown.
            let disp = if mem.has_comp_disp {
                mem.disp * mem.comp_disp_size as i64
            } else {
                mem.disp
            };

            if first {
                let _ = write!(out, "0x{:x}", disp as u64 & mask_for(mem.disp_size));
            } else if disp < 0 {
                let _ = write!(out, "-0x{:x}", (disp as i128).unsigned_abs());
            } else {
                let _ = write!(out, "+0x{:x}", disp);
            }
        } else if first && mem.is_shadow_stack {
            // Shadow stack forms have no encoded components.
            out.push_str("ssp");
        }

        out.push(']');

        Ok(())
    }
}

fn truncate(value: u64, size_bytes: u16) -> u64 {
    match size_bytes {
        1 => value & 0xFF,
        2 => value & 0xFFFF,
        4 => value & 0xFFFF_FFFF,
        _ => value,
    }
}

fn mask_for(size_bytes: u8) -> u64 {
    match size_bytes {
        1 => 0xFF,
        2 => 0xFFFF,
        4 => 0xFFFF_FFFF,
        _ => u64::MAX,
    }
}

fn size_qualifier(size_bytes: u16) -> Option<&'static str> {
    match size_bytes {
        1 => Some("byte"),
        2 => Some("word"),
        4 => Some("dword"),
        6 => Some("fword"),
        8 => Some("qword"),
        10 => Some("tbyte"),
        16 => Some("xmmword"),
        32 => Some("ymmword"),
        64 => Some("zmmword"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::Decoder;

    fn fmt64(code: &[u8]) -> String {
        let decoder = Decoder::new64();
        let insn = decoder.decode(code).unwrap();
        Formatter::new().format(&insn, 0).unwrap()
    }

    #[test]
    fn plain_register_forms() {
        assert_eq!(fmt64(&[0x90]), "NOP");
        assert_eq!(fmt64(&[0x48, 0x89, 0xC3]), "MOV rbx, rax");
        assert_eq!(fmt64(&[0x89, 0xC8]), "MOV eax, ecx");
    }

    #[test]
    fn memory_forms() {
        // MOV rax, [rbp+0x10]
        assert_eq!(fmt64(&[0x48, 0x8B, 0x45, 0x10]), "MOV rax, qword ptr [rbp+0x10]");
        // With SIB and scale: MOV eax, [rax+rcx*4]
        assert_eq!(fmt64(&[0x8B, 0x04, 0x88]), "MOV eax, dword ptr [rax+rcx*4]");
    }

    #[test]
    fn lock_prefix_is_rendered() {
        assert_eq!(
            fmt64(&[0xF0, 0x48, 0x01, 0x4D, 0x00]),
            "LOCK ADD qword ptr [rbp+0x0], rcx"
        );
    }

    #[test]
    fn relative_branches_use_rip() {
        // JMP +2 from address 0x1000.
        let decoder = Decoder::new64();
        let insn = decoder.decode(&[0xEB, 0x02]).unwrap();
        let text = Formatter::new().format(&insn, 0x1000).unwrap();
        assert_eq!(text, "JMP 0x1004");
    }

    #[test]
    fn immediates_are_hex() {
        assert_eq!(fmt64(&[0x6A, 0x10]), "PUSH 0x10");
        assert_eq!(fmt64(&[0xB8, 0x78, 0x56, 0x34, 0x12]), "MOV eax, 0x12345678");
    }

    #[test]
    fn compressed_displacement_is_scaled() {
        // VADDPS zmm0, zmm0, [rax+0x40]: the encoded disp8 is 1, scaled by
        // the full vector width.
        assert_eq!(
            fmt64(&[0x62, 0xF1, 0x7C, 0x48, 0x58, 0x40, 0x01]),
            "VADDPS zmm0, zmm0, zmmword ptr [rax+0x40]"
        );
        // Negative displacements scale the same way.
        assert_eq!(
            fmt64(&[0x62, 0xF1, 0x7C, 0x48, 0x58, 0x40, 0xFF]),
            "VADDPS zmm0, zmm0, zmmword ptr [rax-0x40]"
        );
    }
}
