//! The encoding decision forest.
//!
//! Interior nodes are tagged discriminators over the next encoding
//! component; leaves reference instruction descriptors. Missing children
//! are explicit `None`s rather than sentinel pointers, so the walker never
//! dereferences anything it did not check. The data below is laid out
//! exactly the way an offline generator would emit it: one static per
//! table, one descriptor per encoding.

use crate::enums::*;

mod evex;
mod legacy;
mod vex;
mod xop;

pub(crate) use evex::ROOT_EVEX;
pub(crate) use legacy::ROOT_LEGACY;
pub(crate) use vex::ROOT_VEX;
pub(crate) use xop::ROOT_XOP;

pub(crate) type Link = Option<&'static Node>;

/// One node of the decision forest.
pub(crate) enum Node {
    /// Leaf: a fully classified instruction.
    Leaf(&'static Insn),
    /// Select by the next opcode byte.
    Opcode(&'static [Link; 256]),
    /// Select by the opcode byte that follows ModRM and displacement
    /// (3DNow!).
    Opcode3dnow(&'static [Link; 256]),
    /// Select by ModRM.mod: 0 = memory, 1 = register.
    ModrmMod(&'static [Link; 2]),
    /// Select by ModRM.reg.
    ModrmReg(&'static [Link; 8]),
    /// Select by ModRM.rm.
    ModrmRm(&'static [Link; 8]),
    /// Select by mandatory prefix: none, 66, F2, F3.
    Prefix(&'static [Link; 4]),
    /// Select by operating mode: none, 16, 32, 64.
    Mode(&'static [Link; 4]),
    /// Select by operand size: none, 16, 32, 64, default-64, force-64.
    DataSize(&'static [Link; 6]),
    /// Select by address size: none, 16, 32, 64.
    AddrSize(&'static [Link; 4]),
    /// Auxiliary redirection: none, REX.B, REX.W, 64-bit mode, F3, any REP.
    Aux(&'static [Link; 6]),
    /// Select by vendor; index 0 is the "any" fallback.
    Vendor(&'static [Link; 4]),
    /// Select by enabled feature: none, MPX, CET, CLDEMOTE.
    Feature(&'static [Link; 4]),
    /// Select by the XOP/VEX/EVEX map field.
    VexMap(&'static [Link; 32]),
    /// Select by the compressed legacy prefix (pp).
    VexPp(&'static [Link; 4]),
    /// Select by vector length (L or L'L).
    VexL(&'static [Link; 4]),
    /// Select by the W bit.
    VexW(&'static [Link; 2]),
}

/// Child indices of the discriminator nodes.
pub(crate) mod ix {
    pub const MODE_NONE: usize = 0;
    pub const MODE_16: usize = 1;

    pub const DSIZE_NONE: usize = 0;
    pub const DSIZE_16: usize = 1;
    pub const DSIZE_DEF64: usize = 4;
    pub const DSIZE_F64: usize = 5;

    pub const ASIZE_NONE: usize = 0;
    pub const ASIZE_16: usize = 1;

    pub const AUX_NONE: usize = 0;
    pub const AUX_REXB: usize = 1;
    pub const AUX_REXW: usize = 2;
    pub const AUX_O64: usize = 3;
    pub const AUX_F3: usize = 4;
    pub const AUX_REP: usize = 5;

    pub const MP_NONE: usize = 0;
    pub const MP_66: usize = 1;
    pub const MP_F2: usize = 2;
    pub const MP_F3: usize = 3;

    pub const FEAT_NONE: usize = 0;
    pub const FEAT_MPX: usize = 1;
    pub const FEAT_CET: usize = 2;
    pub const FEAT_CLDEMOTE: usize = 3;
}

/// Symbolic operand addressing forms. Single letters follow the SDM
/// addressing-form codes; the remaining variants name implicit operands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum OpKind {
    /// Direct far pointer in the instruction bytes.
    A,
    /// GPR encoded in vvvv.
    B,
    /// Control register in ModRM.reg.
    C,
    /// Debug register in ModRM.reg.
    D,
    /// GPR or memory in ModRM.rm.
    E,
    /// The FLAGS register.
    F,
    /// GPR in ModRM.reg.
    G,
    /// Vector register in vvvv.
    H,
    /// Immediate.
    I,
    /// Relative branch offset.
    J,
    /// The stack.
    K,
    /// Vector register in the high nibble of a trailing immediate.
    L,
    /// Memory only, in ModRM.rm.
    M,
    /// MMX register in ModRM.rm (register form only).
    N,
    /// Absolute memory offset (moffset).
    O,
    /// MMX register in ModRM.reg.
    P,
    /// MMX register or memory in ModRM.rm.
    Q,
    /// GPR in ModRM.rm (register form only).
    R,
    /// Segment register in ModRM.reg.
    S,
    /// Test register in ModRM.reg.
    T,
    /// Vector register in ModRM.rm (register form only).
    U,
    /// Vector register in ModRM.reg.
    V,
    /// Vector register or memory in ModRM.rm.
    W,
    /// DS:rSI string source.
    X,
    /// ES:rDI string destination.
    Y,
    /// GPR in the low opcode bits.
    Z,
    /// Bound register in ModRM.reg.
    Rb,
    /// Bound register or memory in ModRM.rm.
    Mb,
    /// Mask register in ModRM.reg.
    Rk,
    /// Mask register in vvvv.
    Vk,
    /// Mask register or memory in ModRM.rm.
    Mk,
    /// Mask register in EVEX.aaa.
    Ak,
    /// Memory addressed by the GPR in ModRM.reg (MOVDIR64B/ENQCMD).
    Rm,
    /// Memory addressed by the GPR in ModRM.rm, even for mod 3.
    Mm,
    /// Tile register in ModRM.reg.
    Rt,
    /// Tile register in ModRM.rm.
    Mt,
    /// Tile register in vvvv.
    Vt,
    /// The constant 1.
    Const1,
    /// Two-bit immediate carried in the SSE selector byte.
    Im2z,
    Rip,
    Mxcsr,
    Pkru,
    Ssp,
    Uif,
    GprAh,
    GprRax,
    GprRcx,
    GprRdx,
    GprRbx,
    GprRsp,
    GprRbp,
    GprRsi,
    GprRdi,
    GprR11,
    SegCs,
    SegSs,
    SegDs,
    SegEs,
    SegFs,
    SegGs,
    FpuSt0,
    /// ST(i) selected by ModRM.rm.
    FpuStX,
    Xmm0,
    /// [rBX + AL], as used by XLAT.
    MemBxAl,
    /// ES:rDI, as used by masked moves.
    MemDi,
    /// Shadow stack, addressed through the current SSP.
    MemShs,
    /// Shadow stack push/pop.
    MemShsp,
    /// Shadow stack, addressed through IA32_PL0_SSP.
    MemShs0,
    Cr0,
    Gdtr,
    Idtr,
    Ldtr,
    SysTr,
    X87Control,
    X87Tag,
    X87Status,
    /// MSR selected by ECX.
    Msr,
    Tsc,
    TscAux,
    /// XCR selected by ECX.
    Xcr,
    Xcr0,
    /// A whole register bank.
    Bank,
}

/// Symbolic operand size codes. The whole vocabulary is kept even where
/// no shipped descriptor uses a code yet.
#[allow(dead_code)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum OpSize {
    /// No accessed bytes (prefetch and friends).
    S0,
    /// Byte.
    B,
    /// Word.
    W,
    /// Dword.
    D,
    /// Qword.
    Q,
    /// 16 bytes.
    Dq,
    /// 32 bytes.
    Qq,
    /// 64 bytes.
    Oq,
    /// 80 bit packed BCD.
    Fa,
    /// 16 bit real.
    Fw,
    /// 32 bit real.
    Fd,
    /// 64 bit real.
    Fq,
    /// 80 bit real.
    Ft,
    /// FPU environment (14/28 bytes by operand size).
    Fe,
    /// FPU state (94/108 bytes by operand size).
    Fs,
    /// XSAVE area (512 bytes).
    Rx,
    /// One cache line.
    Cl,
    /// 16/32/64 by effective operand size.
    V,
    /// 32/32/64 by effective operand size.
    Y,
    /// 32/32/64 by default code size.
    Yf,
    /// 16/32/32 by effective operand size.
    Z,
    /// Two words or two dwords (BOUND).
    A,
    /// Byte or word (by operand size and mode).
    C,
    /// 32/48/80 bit pointer by operand size.
    P,
    /// 6 or 10 byte pseudo-descriptor.
    S,
    /// 64 bit in legacy modes, 128 bit in long mode (BNDMOV).
    L,
    /// 128/256/512 by vector length.
    X,
    /// 128/256/512 by vector length (never reduced).
    N,
    /// 256/512 by vector length; 128 rejected.
    U,
    /// Eighth of the vector length.
    E,
    /// Fourth of the vector length.
    F,
    /// Half of the vector length.
    H,
    /// Packed double (full vector).
    Pd,
    /// Packed single (full vector).
    Ps,
    /// Scalar single.
    Ss,
    /// Scalar double.
    Sd,
    /// MIB addressing; no memory is accessed.
    Mib,
    Vm32x,
    Vm32y,
    Vm32z,
    Vm32h,
    Vm32n,
    Vm64x,
    Vm64y,
    Vm64z,
    Vm64h,
    Vm64n,
    /// 2/3/4/8 consecutive words by operand size.
    V2,
    V3,
    V4,
    V8,
    /// 12 bytes (SAVEPREVSSP).
    S12,
    /// Tile register (up to 1 KB).
    T,
    /// 384 bit key locker handle.
    S384,
    /// 512 bit key locker handle.
    S512,
    /// Size given by the address mode.
    Asz,
    /// Size given by the stack mode.
    Ssz,
    /// Unknown/unbounded (e.g. XRSTOR).
    Unknown,
}

bitflags::bitflags! {
    /// Decorators an operand specifier accepts.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub(crate) struct OpDeco: u8 {
        const MASK = 1 << 0;
        const Z    = 1 << 1;
        const B32  = 1 << 2;
        const B64  = 1 << 3;
        const SAE  = 1 << 4;
        const ER   = 1 << 5;
    }
}

bitflags::bitflags! {
    /// Operand specifier flags.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub(crate) struct OpFlags: u8 {
        /// Default operand, normally omitted from rendered text.
        const OPDEF   = 1 << 0;
        /// Sign extended to the default word size.
        const SEX_DWS = 1 << 1;
        /// Sign extended to the size of operand 0.
        const SEX_OP1 = 1 << 2;
    }
}

/// One packed operand specifier of an instruction descriptor.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpSpec {
    pub kind: OpKind,
    pub size: OpSize,
    pub access: OperandAccess,
    pub flags: OpFlags,
    pub deco: OpDeco,
    pub block: u8,
}

/// Shorthand constructor used throughout the tables.
pub(crate) const fn op(kind: OpKind, size: OpSize, access: OperandAccess) -> OpSpec {
    OpSpec {
        kind,
        size,
        access,
        flags: OpFlags::empty(),
        deco: OpDeco::empty(),
        block: 0,
    }
}

impl OpSpec {
    pub(crate) const fn flg(mut self, flags: OpFlags) -> OpSpec {
        self.flags = flags;
        self
    }

    pub(crate) const fn deco(mut self, deco: OpDeco) -> OpSpec {
        self.deco = deco;
        self
    }

    pub(crate) const fn block(mut self, block: u8) -> OpSpec {
        self.block = block;
        self
    }
}

/// CPU flag effects template of a descriptor. `undefined` flags are the
/// intersection of `set` and `cleared`, mirroring how the generator packs
/// them.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FlagOps {
    pub tested: CpuFlags,
    pub modified: CpuFlags,
    pub set: CpuFlags,
    pub cleared: CpuFlags,
}

impl FlagOps {
    pub(crate) const NONE: FlagOps = FlagOps {
        tested: CpuFlags::empty(),
        modified: CpuFlags::empty(),
        set: CpuFlags::empty(),
        cleared: CpuFlags::empty(),
    };

    const ARITH_MASK: CpuFlags = CpuFlags::CF
        .union(CpuFlags::OF)
        .union(CpuFlags::SF)
        .union(CpuFlags::ZF)
        .union(CpuFlags::AF)
        .union(CpuFlags::PF);

    /// ADD/SUB/CMP and friends: all six status flags modified.
    pub(crate) const ARITH: FlagOps = FlagOps {
        modified: Self::ARITH_MASK,
        ..Self::NONE
    };

    /// ADC/SBB: as `ARITH` plus CF tested.
    pub(crate) const ARITH_C: FlagOps = FlagOps {
        tested: CpuFlags::CF,
        modified: Self::ARITH_MASK,
        ..Self::NONE
    };

    /// AND/OR/XOR/TEST: CF/OF cleared, SF/ZF/PF modified, AF undefined.
    pub(crate) const LOGIC: FlagOps = FlagOps {
        modified: CpuFlags::SF.union(CpuFlags::ZF).union(CpuFlags::PF),
        set: CpuFlags::AF,
        cleared: CpuFlags::CF.union(CpuFlags::OF).union(CpuFlags::AF),
        ..Self::NONE
    };

    /// INC/DEC: every status flag except CF.
    pub(crate) const INCDEC: FlagOps = FlagOps {
        modified: CpuFlags::OF
            .union(CpuFlags::SF)
            .union(CpuFlags::ZF)
            .union(CpuFlags::AF)
            .union(CpuFlags::PF),
        ..Self::NONE
    };

    /// Shifts: CF/SF/ZF/PF/OF modified, AF undefined.
    pub(crate) const SHIFT: FlagOps = FlagOps {
        modified: CpuFlags::CF
            .union(CpuFlags::OF)
            .union(CpuFlags::SF)
            .union(CpuFlags::ZF)
            .union(CpuFlags::PF),
        set: CpuFlags::AF,
        cleared: CpuFlags::AF,
        ..Self::NONE
    };

    /// Rotates: CF and OF only.
    pub(crate) const ROTATE: FlagOps = FlagOps {
        modified: CpuFlags::CF.union(CpuFlags::OF),
        ..Self::NONE
    };

    /// MUL/IMUL: CF/OF modified, the rest undefined.
    pub(crate) const MUL: FlagOps = FlagOps {
        modified: CpuFlags::CF.union(CpuFlags::OF),
        set: CpuFlags::SF
            .union(CpuFlags::ZF)
            .union(CpuFlags::AF)
            .union(CpuFlags::PF),
        cleared: CpuFlags::SF
            .union(CpuFlags::ZF)
            .union(CpuFlags::AF)
            .union(CpuFlags::PF),
        ..Self::NONE
    };

    /// DIV/IDIV: everything undefined.
    pub(crate) const DIV: FlagOps = FlagOps {
        set: Self::ARITH_MASK,
        cleared: Self::ARITH_MASK,
        ..Self::NONE
    };

    /// BT group: CF modified, OF/SF/AF/PF undefined.
    pub(crate) const BT: FlagOps = FlagOps {
        modified: CpuFlags::CF,
        set: CpuFlags::OF
            .union(CpuFlags::SF)
            .union(CpuFlags::AF)
            .union(CpuFlags::PF),
        cleared: CpuFlags::OF
            .union(CpuFlags::SF)
            .union(CpuFlags::AF)
            .union(CpuFlags::PF),
        ..Self::NONE
    };

    /// BSF/BSR: ZF modified, the rest undefined.
    pub(crate) const BSCAN: FlagOps = FlagOps {
        modified: CpuFlags::ZF,
        set: CpuFlags::CF
            .union(CpuFlags::OF)
            .union(CpuFlags::SF)
            .union(CpuFlags::AF)
            .union(CpuFlags::PF),
        cleared: CpuFlags::CF
            .union(CpuFlags::OF)
            .union(CpuFlags::SF)
            .union(CpuFlags::AF)
            .union(CpuFlags::PF),
        ..Self::NONE
    };

    /// COMIS*/UCOMIS*: ZF/PF/CF modified, OF/SF/AF cleared.
    pub(crate) const COMIS: FlagOps = FlagOps {
        modified: CpuFlags::ZF.union(CpuFlags::PF).union(CpuFlags::CF),
        cleared: CpuFlags::OF.union(CpuFlags::SF).union(CpuFlags::AF),
        ..Self::NONE
    };

    pub(crate) const fn tested(flags: CpuFlags) -> FlagOps {
        FlagOps {
            tested: flags,
            ..Self::NONE
        }
    }
}

/// Condition flag sets tested by the cc-suffixed instruction families.
pub(crate) mod cc {
    use crate::enums::CpuFlags;

    pub const O: CpuFlags = CpuFlags::OF;
    pub const B: CpuFlags = CpuFlags::CF;
    pub const Z: CpuFlags = CpuFlags::ZF;
    pub const BE: CpuFlags = CpuFlags::CF.union(CpuFlags::ZF);
    pub const S: CpuFlags = CpuFlags::SF;
    pub const P: CpuFlags = CpuFlags::PF;
    pub const L: CpuFlags = CpuFlags::SF.union(CpuFlags::OF);
    pub const LE: CpuFlags = CpuFlags::SF.union(CpuFlags::OF).union(CpuFlags::ZF);
}

/// One instruction descriptor: the leaf payload of the forest.
pub(crate) struct Insn {
    pub mnemonic: Mnemonic,
    pub category: Category,
    pub isa_set: IsaSet,
    pub cpuid: CpuidFeature,
    pub attributes: InsnAttributes,
    pub valid_prefixes: ValidPrefixes,
    pub valid_decorators: ValidDecorators,
    pub exc_class: ExceptionClass,
    pub exc_type: ExceptionType,
    pub tuple: TupleType,
    pub flags: FlagOps,
    pub fpu_flags: FpuFlags,
    /// Number of explicit operands; the remaining entries of `operands`
    /// are implicit.
    pub exp_ops: u8,
    pub operands: &'static [OpSpec],
}

/// Shorthand descriptor constructor; the builder methods below fill in the
/// optional attributes.
pub(crate) const fn insn(
    mnemonic: Mnemonic,
    category: Category,
    isa_set: IsaSet,
    cpuid: CpuidFeature,
    exp_ops: u8,
    operands: &'static [OpSpec],
) -> Insn {
    Insn {
        mnemonic,
        category,
        isa_set,
        cpuid,
        exp_ops,
        operands,
        ..Insn::DEFAULT
    }
}

impl Insn {
    pub(crate) const fn attrs(mut self, attributes: InsnAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub(crate) const fn prefixes(mut self, prefixes: ValidPrefixes) -> Self {
        self.valid_prefixes = prefixes;
        self
    }

    pub(crate) const fn deco(mut self, decorators: ValidDecorators) -> Self {
        self.valid_decorators = decorators;
        self
    }

    pub(crate) const fn exc(mut self, class: ExceptionClass, ty: ExceptionType) -> Self {
        self.exc_class = class;
        self.exc_type = ty;
        self
    }

    pub(crate) const fn tuple(mut self, tuple: TupleType) -> Self {
        self.tuple = tuple;
        self
    }

    pub(crate) const fn flags(mut self, flags: FlagOps) -> Self {
        self.flags = flags;
        self
    }

    pub(crate) const fn fpu(mut self, fpu_flags: FpuFlags) -> Self {
        self.fpu_flags = fpu_flags;
        self
    }
}

impl Insn {
    pub(crate) const DEFAULT: Insn = Insn {
        mnemonic: Mnemonic::Invalid,
        category: Category::Invalid,
        isa_set: IsaSet::Invalid,
        cpuid: CpuidFeature::None,
        attributes: InsnAttributes::empty(),
        valid_prefixes: ValidPrefixes::empty(),
        valid_decorators: ValidDecorators::empty(),
        exc_class: ExceptionClass::None,
        exc_type: ExceptionType::None,
        tuple: TupleType::None,
        flags: FlagOps::NONE,
        fpu_flags: FpuFlags::UNDEFINED,
        exp_ops: 0,
        operands: &[],
    };
}
