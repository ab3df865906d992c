//! The decoded instruction record.

use crate::enums::*;
use crate::operand::Operand;

/// An instruction is never longer than 15 bytes.
pub const MAX_INSTRUCTION_LENGTH: usize = 15;

/// Maximum number of operands (explicit plus implicit).
pub const MAX_OPERAND_COUNT: usize = 10;

/// The ModRM byte, split into its fields.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Modrm {
    /// The addressing mode (0..3).
    pub mod_: u8,
    /// Register specifier or opcode extension.
    pub reg: u8,
    /// Register specifier or memory form selector.
    pub rm: u8,
}

impl Modrm {
    #[inline]
    pub(crate) fn from_byte(byte: u8) -> Self {
        Modrm {
            mod_: byte >> 6,
            reg: (byte >> 3) & 7,
            rm: byte & 7,
        }
    }

    /// The raw byte.
    #[inline]
    pub fn byte(self) -> u8 {
        (self.mod_ << 6) | (self.reg << 3) | self.rm
    }
}

/// The SIB byte, split into its fields. `scale` holds the raw two bits;
/// the factor is `1 << scale`.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Sib {
    pub scale: u8,
    pub index: u8,
    pub base: u8,
}

impl Sib {
    #[inline]
    pub(crate) fn from_byte(byte: u8) -> Self {
        Sib {
            scale: byte >> 6,
            index: (byte >> 3) & 7,
            base: byte & 7,
        }
    }

    /// The raw byte.
    #[inline]
    pub fn byte(self) -> u8 {
        (self.scale << 6) | (self.index << 3) | self.base
    }
}

/// The union of all encoding-prefix-derived bits (REX/XOP/VEX/EVEX),
/// normalized to one shape. Fields hold the *logical* values; on-the-wire
/// inversion is undone at prefix fetch time, so `r == 1` always means
/// "extend ModRM.reg by 8".
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ExtensionBits {
    /// Operand size promotion or opcode extension.
    pub w: u8,
    /// ModRM.reg extension.
    pub r: u8,
    /// SIB.index extension.
    pub x: u8,
    /// ModRM.rm / SIB.base / opcode.reg extension.
    pub b: u8,
    /// High-16 register specifier for ModRM.reg (EVEX R').
    pub rp: u8,
    /// High-16 register specifier for vvvv/VSIB (EVEX V').
    pub vp: u8,
    /// The vvvv register specifier.
    pub v: u8,
    /// Opcode map selector.
    pub m: u8,
    /// Compressed legacy prefix.
    pub p: u8,
    /// Vector length (L or L'L), also the rounding mode under ER.
    pub l: u8,
    /// EVEX zeroing/merging.
    pub z: u8,
    /// EVEX broadcast/RC/SAE context bit.
    pub bm: u8,
    /// EVEX embedded mask register (aaa).
    pub k: u8,
}

/// One fetched immediate.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Immediate {
    /// Length in bytes.
    pub length: u8,
    /// Offset from the start of the instruction.
    pub offset: u8,
    /// Raw (not sign-extended) little-endian value.
    pub value: u64,
}

/// CPU flag effects of the decoded instruction, one bitmap per access
/// class, plus the aggregate access to the FLAGS register itself.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct FlagsAccess {
    pub tested: CpuFlags,
    pub modified: CpuFlags,
    pub set: CpuFlags,
    pub cleared: CpuFlags,
    pub undefined: CpuFlags,
    /// Aggregate access whenever FLAGS appears as an (implicit) operand.
    pub register_access: OperandAccess,
}

/// A fully decoded instruction.
///
/// The record is heap free and sized for the worst case encoding. It is
/// only handed out fully populated; any decode failure yields a
/// [`Status`](crate::Status) instead.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct DecodedInstruction {
    /// The code size the instruction was decoded for.
    pub def_code: MachineMode,
    /// The default data width.
    pub def_data: StackWidth,
    /// The default stack width.
    pub def_stack: StackWidth,
    pub vendor: Vendor,
    pub features: FeatureFlags,

    /// The instruction class.
    pub mnemonic: Mnemonic,
    pub category: Category,
    pub isa_set: IsaSet,
    pub cpuid: CpuidFeature,

    pub encoding: InstructionEncoding,
    /// For VEX encodings, the 2-byte/3-byte sub-form.
    pub vex_form: Option<VexForm>,

    /// Total instruction length in bytes (at most 15).
    pub length: u8,
    /// The raw encoded bytes; only the first `length` are meaningful.
    pub bytes: [u8; MAX_INSTRUCTION_LENGTH],

    pub attributes: InsnAttributes,
    pub valid_prefixes: ValidPrefixes,
    pub valid_decorators: ValidDecorators,
    pub exc_class: ExceptionClass,
    pub exc_type: ExceptionType,
    /// EVEX tuple type.
    pub tuple: TupleType,
    pub fpu_flags: FpuFlags,
    pub flags_access: FlagsAccess,

    // Legacy prefixes.
    pub has_lock: bool,
    /// Raw REP-group byte (`F2`/`F3`) or 0.
    pub rep: u8,
    /// A group-2 prefix was recorded.
    pub has_seg: bool,
    /// Raw byte of the last recorded group-2 prefix, or 0.
    pub seg_prefix: u8,
    pub branch_hint: BranchHint,
    /// A 66 prefix is present (regardless of it being mandatory).
    pub has_op_size: bool,
    /// A 67 prefix is present.
    pub has_addr_size: bool,
    pub has_rex: bool,
    /// The raw REX byte, if `has_rex`.
    pub rex: u8,
    /// 66/F2/F3 was consumed as a mandatory prefix.
    pub has_mandatory_66: bool,
    pub has_mandatory_f2: bool,
    pub has_mandatory_f3: bool,

    /// Normalized encoding-extension bits.
    pub exs: ExtensionBits,

    /// Offset of the first opcode byte == total prefix length.
    pub op_offset: u8,
    /// Number of opcode bytes (at most 3).
    pub op_length: u8,
    pub opcode_bytes: [u8; 3],
    /// The last (for 3DNow!: the trailing) opcode byte.
    pub primary_opcode: u8,
    /// Offset of the primary opcode byte.
    pub main_op_offset: u8,

    pub has_modrm: bool,
    pub modrm: Modrm,
    pub modrm_offset: u8,
    pub has_sib: bool,
    pub sib: Sib,

    pub has_disp: bool,
    /// Raw displacement value (not sign extended).
    pub disp: u32,
    /// The raw displacement has its sign bit set.
    pub sign_disp: bool,
    pub disp_length: u8,
    pub disp_offset: u8,
    /// At least one operand uses EVEX compressed displacement.
    pub has_comp_disp: bool,

    /// Fetched immediates; only the first `imm_count` entries are valid.
    pub imm: [Immediate; 3],
    pub imm_count: u8,
    /// Trailing byte used as an operand selector by some SSE instructions.
    pub has_sse_imm: bool,
    pub sse_imm_offset: u8,
    pub sse_imm: u8,

    /// Far pointer operand of direct far branches.
    pub has_far_addr: bool,
    pub far_segment: u16,
    pub far_offset: u32,
    pub far_addr_length: u8,
    pub far_addr_offset: u8,

    /// Absolute address operand of direct-addressing MOVs.
    pub has_moffset: bool,
    pub moffset: u64,
    pub moffset_length: u8,
    pub moffset_offset: u8,

    /// Relative offset of branches.
    pub has_rel_offs: bool,
    /// Raw relative offset (not sign extended).
    pub rel_offs: u32,
    pub rel_offs_length: u8,
    pub rel_offs_offset: u8,
    /// The final address depends on RIP (relative branches and RIP
    /// relative memory operands).
    pub is_rip_relative: bool,

    // Effective mode indices: 0 = 16 bit, 1 = 32 bit, 2 = 64 bit.
    pub(crate) addr_mode: u8,
    pub(crate) op_mode: u8,
    pub(crate) ef_op_mode: u8,
    pub(crate) vec_mode: u8,
    pub(crate) ef_vec_mode: u8,
    pub(crate) has_vector: bool,
    /// Default word length in bytes (2, 4 or 8).
    pub word_length: u8,

    /// Aggregate access to memory operands.
    pub memory_access: OperandAccess,
    /// Aggregate access to the stack.
    pub stack_access: OperandAccess,
    /// Number of stack words pushed or popped.
    pub stack_words: u8,
    /// Aggregate access to RIP.
    pub rip_access: OperandAccess,

    pub operands: [Operand; MAX_OPERAND_COUNT],
    /// Total number of operands.
    pub operand_count: u8,
    /// Number of explicit operands; the remainder are implicit.
    pub exp_operand_count: u8,
    /// Bitmap of [`OperandEncoding::bit`] over all operands.
    pub operands_encoding_map: u16,

    pub has_mask: bool,
    pub has_zero: bool,
    pub has_broadcast: bool,
    pub has_sae: bool,
    pub has_er: bool,
    /// The embedded rounding mode, if `has_er`.
    pub rounding: Option<RoundingMode>,

    pub is_xacquire: bool,
    pub is_xrelease: bool,
    /// REP/REPcc applies to this instruction.
    pub is_repeated: bool,
    /// The instruction is tracked by CET (indirect branches).
    pub is_cet_tracked: bool,
    /// SSE comparison predicate selected by the immediate.
    pub sse_condition: Option<u8>,
}

impl DecodedInstruction {
    /// All operands, explicit first.
    #[inline]
    pub fn operands(&self) -> &[Operand] {
        &self.operands[..self.operand_count as usize]
    }

    /// The explicit operands only.
    #[inline]
    pub fn explicit_operands(&self) -> &[Operand] {
        &self.operands[..self.exp_operand_count as usize]
    }

    /// The raw encoded bytes of the instruction.
    #[inline]
    pub fn raw_bytes(&self) -> &[u8] {
        &self.bytes[..self.length as usize]
    }

    /// The effective operand width, in bits.
    #[inline]
    pub fn op_width(&self) -> u8 {
        16 << self.ef_op_mode
    }

    /// The effective address width, in bits.
    #[inline]
    pub fn addr_width(&self) -> u8 {
        16 << self.addr_mode
    }

    /// The effective vector length in bits, or 0 for non-vector
    /// instructions.
    #[inline]
    pub fn vector_width(&self) -> u16 {
        if self.has_vector {
            128 << self.ef_vec_mode
        } else {
            0
        }
    }

    /// Whether any REP-group prefix is present.
    #[inline]
    pub fn has_rep(&self) -> bool {
        self.rep != 0
    }

    /// REPE/REPZ (`F3`) is present.
    #[inline]
    pub fn has_repz(&self) -> bool {
        self.rep == 0xF3
    }

    /// REPNE/REPNZ (`F2`) is present.
    #[inline]
    pub fn has_repnz(&self) -> bool {
        self.rep == 0xF2
    }

    /// The segment register selected by a segment-override prefix, given
    /// `default` when none applies. In 64 bit mode only FS/GS overrides
    /// are honoured.
    pub fn seg_override(&self, default: u8) -> u8 {
        if self.def_code == MachineMode::Long64
            && self.seg_prefix != 0x64
            && self.seg_prefix != 0x65
        {
            return default;
        }

        match self.seg_prefix {
            0x2E => reg::CS,
            0x36 => reg::SS,
            0x3E => reg::DS,
            0x26 => reg::ES,
            0x64 => reg::FS,
            0x65 => reg::GS,
            _ => default,
        }
    }
}

impl Default for DecodedInstruction {
    fn default() -> Self {
        DecodedInstruction {
            def_code: MachineMode::Long64,
            def_data: StackWidth::_64,
            def_stack: StackWidth::_64,
            vendor: Vendor::Any,
            features: FeatureFlags::ALL,
            mnemonic: Mnemonic::Invalid,
            category: Category::Invalid,
            isa_set: IsaSet::Invalid,
            cpuid: CpuidFeature::None,
            encoding: InstructionEncoding::Legacy,
            vex_form: None,
            length: 0,
            bytes: [0; MAX_INSTRUCTION_LENGTH],
            attributes: InsnAttributes::empty(),
            valid_prefixes: ValidPrefixes::empty(),
            valid_decorators: ValidDecorators::empty(),
            exc_class: ExceptionClass::None,
            exc_type: ExceptionType::None,
            tuple: TupleType::None,
            fpu_flags: FpuFlags::UNDEFINED,
            flags_access: FlagsAccess::default(),
            has_lock: false,
            rep: 0,
            has_seg: false,
            seg_prefix: 0,
            branch_hint: BranchHint::None,
            has_op_size: false,
            has_addr_size: false,
            has_rex: false,
            rex: 0,
            has_mandatory_66: false,
            has_mandatory_f2: false,
            has_mandatory_f3: false,
            exs: ExtensionBits::default(),
            op_offset: 0,
            op_length: 0,
            opcode_bytes: [0; 3],
            primary_opcode: 0,
            main_op_offset: 0,
            has_modrm: false,
            modrm: Modrm::default(),
            modrm_offset: 0,
            has_sib: false,
            sib: Sib::default(),
            has_disp: false,
            disp: 0,
            sign_disp: false,
            disp_length: 0,
            disp_offset: 0,
            has_comp_disp: false,
            imm: [Immediate::default(); 3],
            imm_count: 0,
            has_sse_imm: false,
            sse_imm_offset: 0,
            sse_imm: 0,
            has_far_addr: false,
            far_segment: 0,
            far_offset: 0,
            far_addr_length: 0,
            far_addr_offset: 0,
            has_moffset: false,
            moffset: 0,
            moffset_length: 0,
            moffset_offset: 0,
            has_rel_offs: false,
            rel_offs: 0,
            rel_offs_length: 0,
            rel_offs_offset: 0,
            is_rip_relative: false,
            addr_mode: 0,
            op_mode: 0,
            ef_op_mode: 0,
            vec_mode: 0,
            ef_vec_mode: 0,
            has_vector: false,
            word_length: 0,
            memory_access: OperandAccess::empty(),
            stack_access: OperandAccess::empty(),
            stack_words: 0,
            rip_access: OperandAccess::empty(),
            operands: [Operand::NONE; MAX_OPERAND_COUNT],
            operand_count: 0,
            exp_operand_count: 0,
            operands_encoding_map: 0,
            has_mask: false,
            has_zero: false,
            has_broadcast: false,
            has_sae: false,
            has_er: false,
            rounding: None,
            is_xacquire: false,
            is_xrelease: false,
            is_repeated: false,
            is_cet_tracked: false,
            sse_condition: None,
        }
    }
}
