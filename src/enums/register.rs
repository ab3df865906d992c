//! Register classes, well-known register ids and name tables.

/// The class a decoded register operand belongs to. Together with the
/// register id and size this fully identifies the architectural register.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum RegisterClass {
    #[default]
    None,
    /// General purpose registers.
    Gpr,
    /// Segment registers.
    Seg,
    /// x87 stack registers ST(0)..ST(7).
    Fpu,
    /// MMX registers.
    Mmx,
    /// XMM/YMM/ZMM registers; the operand size picks the view.
    Sse,
    /// Control registers.
    Cr,
    /// Debug registers.
    Dr,
    /// Test registers (80486 only).
    Tr,
    /// MPX bound registers.
    Bnd,
    /// AVX-512 mask registers.
    Msk,
    /// AMX tile registers.
    Tile,
    /// System table registers and x87 control/status/tag words.
    Sys,
    /// Model specific registers, identified by their MSR number.
    Msr,
    /// Extended control registers.
    Xcr,
    /// The FLAGS register.
    Flags,
    /// The instruction pointer.
    Rip,
    Mxcsr,
    Pkru,
    /// The shadow stack pointer.
    Ssp,
    /// The user interrupt flag.
    Uif,
}

pub const REGISTER_CLASS_MAX_VALUE: RegisterClass = RegisterClass::Uif;

/// Well-known register ids, usable for any register class whose ids follow
/// the ModRM numbering.
pub mod reg {
    pub const RAX: u8 = 0;
    pub const RCX: u8 = 1;
    pub const RDX: u8 = 2;
    pub const RBX: u8 = 3;
    pub const RSP: u8 = 4;
    pub const RBP: u8 = 5;
    pub const RSI: u8 = 6;
    pub const RDI: u8 = 7;
    pub const R8: u8 = 8;
    pub const R9: u8 = 9;
    pub const R11: u8 = 11;

    /// Id of AH when the high-8 flag is set.
    pub const AH: u8 = 4;
    /// AL as a memory index (XLAT).
    pub const AL: u8 = 0;

    pub const ES: u8 = 0;
    pub const CS: u8 = 1;
    pub const SS: u8 = 2;
    pub const DS: u8 = 3;
    pub const FS: u8 = 4;
    pub const GS: u8 = 5;

    pub const CR0: u8 = 0;

    pub const GDTR: u32 = 0;
    pub const IDTR: u32 = 1;
    pub const LDTR: u32 = 2;
    pub const TR: u32 = 3;
    pub const X87_CONTROL: u32 = 4;
    pub const X87_TAG: u32 = 5;
    pub const X87_STATUS: u32 = 6;

    /// MSR selected at runtime through ECX.
    pub const MSR_ANY: u32 = 0xFFFF_FFFF;
    pub const MSR_TSC: u32 = 0x10;
    pub const MSR_SYSENTER_CS: u32 = 0x174;
    pub const MSR_SYSENTER_ESP: u32 = 0x175;
    pub const MSR_SYSENTER_EIP: u32 = 0x176;
    pub const MSR_STAR: u32 = 0xC000_0081;
    pub const MSR_LSTAR: u32 = 0xC000_0082;
    pub const MSR_FMASK: u32 = 0xC000_0084;
    pub const MSR_FS_BASE: u32 = 0xC000_0100;
    pub const MSR_GS_BASE: u32 = 0xC000_0101;
    pub const MSR_KERNEL_GS_BASE: u32 = 0xC000_0102;
    pub const MSR_TSC_AUX: u32 = 0xC000_0103;

    /// XCR selected at runtime through ECX.
    pub const XCR_ANY: u32 = 0xFF;
    pub const XCR0: u32 = 0;
}

static GPR8: [&str; 8] = ["al", "cl", "dl", "bl", "ah", "ch", "dh", "bh"];

static GPR8_REX: [&str; 16] = [
    "al", "cl", "dl", "bl", "spl", "bpl", "sil", "dil", "r8b", "r9b", "r10b", "r11b", "r12b",
    "r13b", "r14b", "r15b",
];

static GPR16: [&str; 16] = [
    "ax", "cx", "dx", "bx", "sp", "bp", "si", "di", "r8w", "r9w", "r10w", "r11w", "r12w", "r13w",
    "r14w", "r15w",
];

static GPR32: [&str; 16] = [
    "eax", "ecx", "edx", "ebx", "esp", "ebp", "esi", "edi", "r8d", "r9d", "r10d", "r11d", "r12d",
    "r13d", "r14d", "r15d",
];

static GPR64: [&str; 16] = [
    "rax", "rcx", "rdx", "rbx", "rsp", "rbp", "rsi", "rdi", "r8", "r9", "r10", "r11", "r12",
    "r13", "r14", "r15",
];

static SEG: [&str; 8] = ["es", "cs", "ss", "ds", "fs", "gs", "segr6", "segr7"];

static FPU: [&str; 8] = ["st0", "st1", "st2", "st3", "st4", "st5", "st6", "st7"];

static MMX: [&str; 8] = ["mm0", "mm1", "mm2", "mm3", "mm4", "mm5", "mm6", "mm7"];

static XMM: [&str; 32] = [
    "xmm0", "xmm1", "xmm2", "xmm3", "xmm4", "xmm5", "xmm6", "xmm7", "xmm8", "xmm9", "xmm10",
    "xmm11", "xmm12", "xmm13", "xmm14", "xmm15", "xmm16", "xmm17", "xmm18", "xmm19", "xmm20",
    "xmm21", "xmm22", "xmm23", "xmm24", "xmm25", "xmm26", "xmm27", "xmm28", "xmm29", "xmm30",
    "xmm31",
];

static YMM: [&str; 32] = [
    "ymm0", "ymm1", "ymm2", "ymm3", "ymm4", "ymm5", "ymm6", "ymm7", "ymm8", "ymm9", "ymm10",
    "ymm11", "ymm12", "ymm13", "ymm14", "ymm15", "ymm16", "ymm17", "ymm18", "ymm19", "ymm20",
    "ymm21", "ymm22", "ymm23", "ymm24", "ymm25", "ymm26", "ymm27", "ymm28", "ymm29", "ymm30",
    "ymm31",
];

static ZMM: [&str; 32] = [
    "zmm0", "zmm1", "zmm2", "zmm3", "zmm4", "zmm5", "zmm6", "zmm7", "zmm8", "zmm9", "zmm10",
    "zmm11", "zmm12", "zmm13", "zmm14", "zmm15", "zmm16", "zmm17", "zmm18", "zmm19", "zmm20",
    "zmm21", "zmm22", "zmm23", "zmm24", "zmm25", "zmm26", "zmm27", "zmm28", "zmm29", "zmm30",
    "zmm31",
];

static CR: [&str; 16] = [
    "cr0", "cr1", "cr2", "cr3", "cr4", "cr5", "cr6", "cr7", "cr8", "cr9", "cr10", "cr11", "cr12",
    "cr13", "cr14", "cr15",
];

static DR: [&str; 16] = [
    "dr0", "dr1", "dr2", "dr3", "dr4", "dr5", "dr6", "dr7", "dr8", "dr9", "dr10", "dr11", "dr12",
    "dr13", "dr14", "dr15",
];

static TR: [&str; 8] = ["tr0", "tr1", "tr2", "tr3", "tr4", "tr5", "tr6", "tr7"];

static BND: [&str; 4] = ["bnd0", "bnd1", "bnd2", "bnd3"];

static MSK: [&str; 8] = ["k0", "k1", "k2", "k3", "k4", "k5", "k6", "k7"];

static TILE: [&str; 8] = ["tmm0", "tmm1", "tmm2", "tmm3", "tmm4", "tmm5", "tmm6", "tmm7"];

static SYS: [&str; 7] = ["gdtr", "idtr", "ldtr", "tr", "fcw", "ftw", "fsw"];

impl RegisterClass {
    /// Returns the textual name of register `id` of this class, given the
    /// operand `size` in bytes.
    ///
    /// GPRs additionally need the high-8 flag to tell AH..BH apart from
    /// SPL..DIL; vector registers pick xmm/ymm/zmm from the size.
    ///
    /// # Examples
    /// ```
    /// use xdis::RegisterClass;
    /// assert_eq!(RegisterClass::Gpr.name(3, 8, false), Some("rbx"));
    /// assert_eq!(RegisterClass::Gpr.name(4, 1, true), Some("ah"));
    /// assert_eq!(RegisterClass::Sse.name(1, 64, false), Some("zmm1"));
    /// ```
    pub fn name(self, id: u32, size: u16, high8: bool) -> Option<&'static str> {
        let i = id as usize;
        match self {
            RegisterClass::Gpr => match size {
                1 if high8 => GPR8.get(i).copied(),
                1 => GPR8_REX.get(i).copied(),
                2 => GPR16.get(i).copied(),
                4 => GPR32.get(i).copied(),
                8 => GPR64.get(i).copied(),
                _ => None,
            },
            RegisterClass::Seg => SEG.get(i).copied(),
            RegisterClass::Fpu => FPU.get(i).copied(),
            RegisterClass::Mmx => MMX.get(i).copied(),
            RegisterClass::Sse => match size {
                0..=16 => XMM.get(i).copied(),
                32 => YMM.get(i).copied(),
                _ => ZMM.get(i).copied(),
            },
            RegisterClass::Cr => CR.get(i).copied(),
            RegisterClass::Dr => DR.get(i).copied(),
            RegisterClass::Tr => TR.get(i).copied(),
            RegisterClass::Bnd => BND.get(i).copied(),
            RegisterClass::Msk => MSK.get(i).copied(),
            RegisterClass::Tile => TILE.get(i).copied(),
            RegisterClass::Sys => SYS.get(i).copied(),
            RegisterClass::Flags => Some(match size {
                2 => "flags",
                4 => "eflags",
                _ => "rflags",
            }),
            RegisterClass::Rip => Some(if size == 2 {
                "ip"
            } else if size == 4 {
                "eip"
            } else {
                "rip"
            }),
            RegisterClass::Mxcsr => Some("mxcsr"),
            RegisterClass::Pkru => Some("pkru"),
            RegisterClass::Ssp => Some("ssp"),
            RegisterClass::Uif => Some("uif"),
            RegisterClass::Msr => Some("msr"),
            RegisterClass::Xcr => Some("xcr"),
            RegisterClass::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpr_names() {
        assert_eq!(RegisterClass::Gpr.name(0, 4, false), Some("eax"));
        assert_eq!(RegisterClass::Gpr.name(12, 8, false), Some("r12"));
        assert_eq!(RegisterClass::Gpr.name(5, 1, false), Some("bpl"));
        assert_eq!(RegisterClass::Gpr.name(7, 1, true), Some("bh"));
        assert_eq!(RegisterClass::Gpr.name(16, 8, false), None);
    }

    #[test]
    fn vector_names_follow_size() {
        assert_eq!(RegisterClass::Sse.name(0, 16, false), Some("xmm0"));
        assert_eq!(RegisterClass::Sse.name(0, 32, false), Some("ymm0"));
        assert_eq!(RegisterClass::Sse.name(31, 64, false), Some("zmm31"));
        // Scalar views of an XMM register still print the XMM name.
        assert_eq!(RegisterClass::Sse.name(3, 8, false), Some("xmm3"));
    }
}
