//! Status code utilities.

use core::{fmt, result};

/// A convenience alias for a Result, holding either a value or a status.
pub type Result<T = ()> = result::Result<T, Status>;

/// Status code describing why decoding (or formatting) failed.
///
/// Every failure maps onto exactly one variant; the decoder stops at the
/// first violation it detects and the output record must not be consumed.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[non_exhaustive]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum Status {
    /// An invalid parameter was passed to a function.
    InvalidParameter,
    /// The input buffer ends before the instruction does. The caller may
    /// retry with more bytes.
    BufferTooSmall,
    /// More than 15 bytes would be consumed.
    InstructionTooLong,
    /// The byte sequence does not encode a valid instruction.
    InvalidEncoding,
    /// The encoding is valid, but not in the current operating mode.
    InvalidEncodingInMode,
    /// A XOP/VEX/EVEX prefix was combined with REX or a mandatory legacy
    /// prefix (66/F2/F3).
    InvalidPrefixSequence,
    /// The instruction encodes a register that is not valid for it.
    InvalidRegisterInInstruction,
    /// LOCK used with an instruction that does not support it, or with a
    /// non-memory destination.
    BadLockPrefix,
    /// The 66 prefix is not accepted by the instruction.
    Bad66Prefix,
    /// VEX/XOP/EVEX.vvvv must be zero for this instruction.
    VvvvMustBeZero,
    /// Two operands of a gather/scatter instruction reference the same
    /// vector register.
    InvalidVsibRegs,
    /// EVEX.z used although the instruction does not support zeroing, or
    /// the destination is memory.
    ZeroingNotSupported,
    /// EVEX.b set although the instruction supports no broadcast.
    BroadcastNotSupported,
    /// EVEX.b set on a register form although the instruction supports
    /// neither SAE nor embedded rounding.
    SaeErNotSupported,
    /// EVEX.aaa is non-zero although the instruction supports no masking.
    MaskNotSupported,
    /// The instruction requires a mask register other than k0.
    MaskRequired,
    /// The instruction would load the CS register.
    CsLoad,
    /// The instruction does not support 16 bit addressing.
    Addressing16NotSupported,
    /// The instruction does not support RIP relative addressing.
    RipRelNotSupported,
    /// A VSIB memory operand was encoded without a SIB byte.
    VsibWithoutSib,
    /// An output buffer was too small to represent the instruction.
    BufferOverflow,
    /// An inconsistency inside the decoder tables; never expected on any
    /// input.
    InternalError,
}

impl Status {
    /// Returns a human readable description of this status code.
    pub fn description(self) -> &'static str {
        match self {
            Status::InvalidParameter => "an invalid parameter was passed to a function",
            Status::BufferTooSmall => {
                "the buffer is too small to hold the next instruction component"
            }
            Status::InstructionTooLong => "the instruction exceeds the maximum length of 15 bytes",
            Status::InvalidEncoding => "the bytes do not encode a valid instruction",
            Status::InvalidEncodingInMode => {
                "the encoding is not valid in the current operating mode"
            }
            Status::InvalidPrefixSequence => {
                "a XOP/VEX/EVEX prefix was combined with REX or a mandatory legacy prefix"
            }
            Status::InvalidRegisterInInstruction => "the instruction encodes an invalid register",
            Status::BadLockPrefix => "the LOCK prefix is not accepted by this encoding",
            Status::Bad66Prefix => "the 66 prefix is not accepted by this instruction",
            Status::VvvvMustBeZero => "the vvvv field must be zero for this instruction",
            Status::InvalidVsibRegs => "duplicated vector registers in a VSIB instruction",
            Status::ZeroingNotSupported => "zeroing is not supported by this encoding",
            Status::BroadcastNotSupported => "broadcast is not supported by this instruction",
            Status::SaeErNotSupported => {
                "SAE/embedded rounding is not supported by this instruction"
            }
            Status::MaskNotSupported => "masking is not supported by this instruction",
            Status::MaskRequired => "this instruction requires a mask register other than k0",
            Status::CsLoad => "the instruction would load the CS register",
            Status::Addressing16NotSupported => {
                "16 bit addressing is not supported by this instruction"
            }
            Status::RipRelNotSupported => {
                "RIP relative addressing is not supported by this instruction"
            }
            Status::VsibWithoutSib => "VSIB addressing requires a SIB byte",
            Status::BufferOverflow => "the output buffer is too small for the instruction",
            Status::InternalError => "internal decoder table inconsistency",
        }
    }
}

impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Status {}
