//! Contains definitions for all enums and flag sets used in xdis and some
//! utility functions on them.

use bitflags::bitflags;

pub mod meta;
pub mod mnemonic;
pub mod register;

pub use self::{meta::*, mnemonic::*, register::*};

/// The default code size the processor runs with (CS.D/L).
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum MachineMode {
    /// 16 bit real/protected mode.
    Legacy16,
    /// 32 bit protected mode.
    Legacy32,
    /// 64 bit long mode.
    Long64,
}

pub const MACHINE_MODE_MAX_VALUE: MachineMode = MachineMode::Long64;

impl MachineMode {
    /// Index into 16/32/64 lookup tables.
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// The code size, in bits.
    pub fn bits(self) -> u8 {
        match self {
            MachineMode::Legacy16 => 16,
            MachineMode::Legacy32 => 32,
            MachineMode::Long64 => 64,
        }
    }
}

/// Default data or stack width.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum StackWidth {
    _16,
    _32,
    _64,
}

pub const STACK_WIDTH_MAX_VALUE: StackWidth = StackWidth::_64;

impl StackWidth {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// The width, in bytes.
    pub fn bytes(self) -> u8 {
        2 << self as u8
    }
}

impl From<MachineMode> for StackWidth {
    fn from(mode: MachineMode) -> Self {
        match mode {
            MachineMode::Legacy16 => StackWidth::_16,
            MachineMode::Legacy32 => StackWidth::_32,
            MachineMode::Long64 => StackWidth::_64,
        }
    }
}

/// Processor vendor dialect. Select `Any` to decode everything.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Vendor {
    Any,
    Intel,
    Amd,
    Cyrix,
}

pub const VENDOR_MAX_VALUE: Vendor = Vendor::Cyrix;

/// The encoding family of an instruction.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum InstructionEncoding {
    Legacy,
    Xop,
    Vex,
    Evex,
    /// Reserved; never produced by the decoder.
    Mvex,
}

pub const INSTRUCTION_ENCODING_MAX_VALUE: InstructionEncoding = InstructionEncoding::Mvex;

/// The 2-byte/3-byte sub-form of the VEX prefix.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum VexForm {
    Vex2,
    Vex3,
}

/// Branch hint carried by a group-2 prefix on conditional branches.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum BranchHint {
    #[default]
    None,
    /// `3E` on a conditional branch.
    Taken,
    /// `2E` on a conditional branch.
    NotTaken,
}

/// Where an operand is encoded inside the instruction bytes.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum OperandEncoding {
    #[default]
    None,
    /// `ModRM.reg`.
    ModrmReg,
    /// `ModRM.rm` (plus SIB/displacement for memory forms).
    ModrmRm,
    /// `VEX/XOP/EVEX.vvvv`.
    Vvvv,
    /// Immediate bytes.
    Immediate,
    /// The low bits of the opcode byte.
    Opcode,
    /// Not encoded; implied by the instruction.
    Implicit,
    /// `EVEX.aaa`.
    Mask,
    /// Displacement/moffset/relative-offset/far-pointer bytes.
    Disp,
    /// High nibble of a trailing immediate byte.
    Is4,
    /// A hardcoded constant.
    Const,
}

pub const OPERAND_ENCODING_MAX_VALUE: OperandEncoding = OperandEncoding::Const;

impl OperandEncoding {
    /// Bit inside [`crate::DecodedInstruction::operands_encoding_map`].
    #[inline]
    pub fn bit(self) -> u16 {
        1 << self as u16
    }
}

bitflags! {
    /// ISA feature knobs that redirect a few opcodes away from their plain
    /// (usually NOP-like) meaning.
    #[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    #[repr(transparent)]
    pub struct FeatureFlags: u8 {
        const MPX       = 1 << 0;
        const CET       = 1 << 1;
        const CLDEMOTE  = 1 << 2;
        const ALL       = Self::MPX.bits() | Self::CET.bits() | Self::CLDEMOTE.bits();
    }
}

bitflags! {
    /// Per-operand access semantics.
    #[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    #[repr(transparent)]
    pub struct OperandAccess: u8 {
        const READ       = 1 << 0;
        const WRITE      = 1 << 1;
        const COND_READ  = 1 << 2;
        const COND_WRITE = 1 << 3;
        const PREFETCH   = 1 << 4;

        const RW  = Self::READ.bits() | Self::WRITE.bits();
        const RCW = Self::READ.bits() | Self::COND_WRITE.bits();
        const CRW = Self::COND_READ.bits() | Self::WRITE.bits();
        const CR  = Self::COND_READ.bits();
        const CW  = Self::COND_WRITE.bits();
    }
}

impl OperandAccess {
    /// Whether the operand may be read (conditionally or not).
    #[inline]
    pub fn is_read(self) -> bool {
        self.intersects(OperandAccess::READ | OperandAccess::COND_READ)
    }

    /// Whether the operand may be written (conditionally or not).
    #[inline]
    pub fn is_written(self) -> bool {
        self.intersects(OperandAccess::WRITE | OperandAccess::COND_WRITE)
    }
}

bitflags! {
    /// Bitmap over the architectural FLAGS register; bit positions match
    /// the hardware layout.
    #[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    #[repr(transparent)]
    pub struct CpuFlags: u32 {
        const CF   = 1 << 0;
        const PF   = 1 << 2;
        const AF   = 1 << 4;
        const ZF   = 1 << 6;
        const SF   = 1 << 7;
        const TF   = 1 << 8;
        const IF   = 1 << 9;
        const DF   = 1 << 10;
        const OF   = 1 << 11;
        const IOPL = 3 << 12;
        const NT   = 1 << 14;
        const RF   = 1 << 16;
        const VM   = 1 << 17;
        const AC   = 1 << 18;
        const VIF  = 1 << 19;
        const VIP  = 1 << 20;
        const ID   = 1 << 21;
    }
}

bitflags! {
    /// Instruction attributes stored inside the table leaves. Most of them
    /// steer the decoder; a few are forwarded to the caller unchanged.
    #[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    #[repr(transparent)]
    pub struct InsnAttributes: u32 {
        /// The instruction has a ModRM byte.
        const MODRM        = 1 << 0;
        /// ModRM.mod is forced to register form; SIB/displacement are never
        /// fetched (MOV to/from control and debug registers).
        const MFR          = 1 << 1;
        /// Invalid in 64 bit mode.
        const I64          = 1 << 2;
        /// Valid only in 64 bit mode.
        const O64          = 1 << 3;
        /// Defaults to 64 bit operand size in 64 bit mode.
        const D64          = 1 << 4;
        /// Operand size forced to 64 bit in 64 bit mode (Intel only; on AMD
        /// this degrades to `D64`).
        const F64          = 1 << 5;
        /// 66 changes the operand size even when it is a mandatory prefix.
        const S66          = 1 << 6;
        /// The 67 prefix is ignored; address size is always 64 bit.
        const I67          = 1 << 7;
        /// `W` is ignored.
        const WIG          = 1 << 8;
        /// `L` is ignored; the effective vector length stays 128 bit.
        const LIG          = 1 << 9;
        /// AMD allows LOCK on MOV CR in non-64 bit mode to reach CR8.
        const LOCK_SPECIAL = 1 << 10;
        /// The memory operand uses VSIB addressing.
        const VSIB         = 1 << 11;
        /// The memory operand uses MIB (MPX) addressing.
        const MIB          = 1 << 12;
        /// The memory operand requires a SIB byte (AMX).
        const SIBMEM       = 1 << 13;
        /// Address generation only; the segment is ignored (LEA-like).
        const AG           = 1 << 14;
        /// The memory operand addresses the shadow stack.
        const SHS          = 1 << 15;
        /// The memory operand is a bit base (BT* with memory destination).
        const BITBASE      = 1 << 16;
        /// 16 bit addressing is not supported.
        const NOA16        = 1 << 17;
        /// RIP relative addressing is not supported.
        const NO_RIP_REL   = 1 << 18;
        /// The 66 prefix is not accepted.
        const NO66         = 1 << 19;
        /// 128 bit vector forms are not valid.
        const NOL0         = 1 << 20;
        /// EVEX.b is ignored rather than rejected when unsupported.
        const IER          = 1 << 21;
        /// Masking is mandatory; k0 causes #UD.
        const MMASK        = 1 << 22;
        /// 3DNow! encoding; the opcode follows ModRM and displacement.
        const OP3DNOW      = 1 << 23;
        /// The low immediate bits select an SSE comparison predicate.
        const SSE_COND     = 1 << 24;
        /// The instruction is tracked by CET.
        const CETT         = 1 << 25;
    }
}

bitflags! {
    /// The prefixes an instruction accepts.
    #[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    #[repr(transparent)]
    pub struct ValidPrefixes: u16 {
        /// Unconditional REP.
        const REP         = 1 << 0;
        /// Conditional REPZ/REPNZ.
        const REPC        = 1 << 1;
        const LOCK        = 1 << 2;
        const HLE         = 1 << 3;
        const XACQUIRE    = 1 << 4;
        const XRELEASE    = 1 << 5;
        const BND         = 1 << 6;
        /// Branch hints (2E/3E).
        const BHINT       = 1 << 7;
        /// XACQUIRE/XRELEASE accepted even without LOCK.
        const HLE_NO_LOCK = 1 << 8;
        /// The do-not-track prefix (3E) is honoured.
        const DNT         = 1 << 9;
    }
}

bitflags! {
    /// The EVEX decorators an instruction accepts.
    #[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    #[repr(transparent)]
    pub struct ValidDecorators: u8 {
        const MASK      = 1 << 0;
        const ZERO      = 1 << 1;
        const BROADCAST = 1 << 2;
        const SAE       = 1 << 3;
        const ER        = 1 << 4;
    }
}
