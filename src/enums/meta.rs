//! Instruction classification metadata.

/// The coarse functional category of an instruction.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Category {
    #[default]
    Invalid,
    Arith,
    Bitbyte,
    Call,
    Cmov,
    CondBr,
    Convert,
    Dataxfer,
    Decimal,
    Flagop,
    Gather,
    Scatter,
    Io,
    Logical,
    Misc,
    Mmx,
    Nop,
    Pop,
    Push,
    Prefetch,
    Ret,
    Rotate,
    Shift,
    Semaphore,
    Sse,
    Stringop,
    System,
    UncondBr,
    Widechar,
    WideNop,
    X87Alu,
    Avx,
    Avx2,
    Avx2Gather,
    Avx512,
    Amx,
    Mpx,
    Cet,
    Bmi,
    Xop,
    _3dnow,
    KMask,
    Uintr,
}

pub const CATEGORY_MAX_VALUE: Category = Category::Uintr;

/// The instruction set an instruction first appeared in.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum IsaSet {
    #[default]
    Invalid,
    I86,
    I186,
    I286,
    I386,
    I486,
    Pentium,
    PentiumPro,
    X87,
    LongMode,
    Mmx,
    _3dnow,
    Sse,
    Sse2,
    Sse3,
    Ssse3,
    Sse4,
    Sse42,
    Avx,
    Avx2,
    Avx2Gather,
    Fma,
    Avx512F,
    Avx512Dq,
    Avx512Bw,
    Avx512Vp2Intersect,
    Bmi1,
    Bmi2,
    Adx,
    Movbe,
    Popcnt,
    Lzcnt,
    Mpx,
    CetSs,
    CetIbt,
    AmxTile,
    AmxInt8,
    Xop,
    Tbm,
    Cldemote,
    KeyLocker,
    Rdtscp,
    Rdrand,
    Rdseed,
    Xsave,
    Vtx,
    Svm,
    Smx,
}

pub const ISA_SET_MAX_VALUE: IsaSet = IsaSet::Smx;

/// The CPUID feature flag that advertises an instruction.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum CpuidFeature {
    #[default]
    None,
    Fpu,
    Tsc,
    Msr,
    Cmov,
    Cx8,
    Cx16,
    Mmx,
    _3dnow,
    Sse,
    Sse2,
    Sse3,
    Ssse3,
    Sse41,
    Sse42,
    Avx,
    Avx2,
    Fma,
    Avx512F,
    Avx512Dq,
    Avx512Bw,
    Avx512Vp2Intersect,
    Bmi1,
    Bmi2,
    Adx,
    Movbe,
    Popcnt,
    Lzcnt,
    Mpx,
    CetSs,
    CetIbt,
    AmxTile,
    AmxInt8,
    Xop,
    Tbm,
    Cldemote,
    KeyLocker,
    Rdtscp,
    Rdrand,
    Rdseed,
    Xsave,
}

pub const CPUID_FEATURE_MAX_VALUE: CpuidFeature = CpuidFeature::Xsave;

/// The SIMD/system exception class of an instruction.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ExceptionClass {
    #[default]
    None,
    SseAvx,
    Evex,
    Opmask,
    Amx,
}

pub const EXCEPTION_CLASS_MAX_VALUE: ExceptionClass = ExceptionClass::Amx;

/// The exception type within an [`ExceptionClass`].
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ExceptionType {
    #[default]
    None,
    T1,
    T2,
    T3,
    T4,
    T5,
    T7,
    T12,
    E1,
    E1NF,
    E2,
    E3,
    E4,
    E4NF,
    E5,
    E6,
    E6NF,
    E10,
    E12,
    E12NP,
    K20,
    K21,
    AmxE1,
    AmxE2,
    AmxE3,
    AmxE4,
}

pub const EXCEPTION_TYPE_MAX_VALUE: ExceptionType = ExceptionType::AmxE4;

/// EVEX tuple type; governs compressed displacement scaling.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum TupleType {
    #[default]
    None,
    Fv,
    Hv,
    Fvm,
    Hvm,
    Qvm,
    Ovm,
    T1s,
    T1s8,
    T1s16,
    T1f,
    T2,
    T4,
    T8,
    M128,
    Dup,
    T1_4x,
}

pub const TUPLE_TYPE_MAX_VALUE: TupleType = TupleType::T1_4x;

/// Embedded rounding mode (EVEX `L'L` when `b` is set on a register form).
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum RoundingMode {
    /// Round to nearest (even).
    RN,
    /// Round down.
    RD,
    /// Round up.
    RU,
    /// Round toward zero.
    RZ,
}

pub const ROUNDING_MODE_MAX_VALUE: RoundingMode = RoundingMode::RZ;

impl RoundingMode {
    pub(crate) fn from_bits(l: u8) -> Self {
        match l & 3 {
            0 => RoundingMode::RN,
            1 => RoundingMode::RD,
            2 => RoundingMode::RU,
            _ => RoundingMode::RZ,
        }
    }
}

/// How a shadow-stack memory operand addresses the shadow stack.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ShadowStackAccess {
    #[default]
    None,
    /// Explicit memory operand inside a shadow-stack instruction.
    Explicit,
    /// Load/store through the current SSP.
    SspLoadStore,
    /// Push/pop through the current SSP.
    SspPushPop,
    /// Access through IA32_PL0_SSP.
    Pl0Ssp,
}

/// Access behavior of one x87 status word condition flag.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum FpuFlagAccess {
    Cleared,
    Set,
    Modified,
    #[default]
    Undefined,
}

/// Access descriptor for the x87 C0..C3 condition flags.
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct FpuFlags {
    pub c0: FpuFlagAccess,
    pub c1: FpuFlagAccess,
    pub c2: FpuFlagAccess,
    pub c3: FpuFlagAccess,
}

impl FpuFlags {
    pub const UNDEFINED: FpuFlags = FpuFlags {
        c0: FpuFlagAccess::Undefined,
        c1: FpuFlagAccess::Undefined,
        c2: FpuFlagAccess::Undefined,
        c3: FpuFlagAccess::Undefined,
    };

    pub const MODIFIED: FpuFlags = FpuFlags {
        c0: FpuFlagAccess::Modified,
        c1: FpuFlagAccess::Modified,
        c2: FpuFlagAccess::Modified,
        c3: FpuFlagAccess::Modified,
    };
}
