//! The instruction mnemonic / class identifier.

/// Uniquely identifies the instruction class. The textual form is
/// available through [`Mnemonic::name`].
#[cfg_attr(feature = "serialization", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[repr(u16)]
pub enum Mnemonic {
    #[default]
    Invalid,
    Aaa,
    Aad,
    Aam,
    Aas,
    Adc,
    Adcx,
    Add,
    Addpd,
    Addps,
    Addsd,
    Addss,
    Adox,
    Aesenc128kl,
    And,
    Andn,
    Andnpd,
    Andnps,
    Andpd,
    Andps,
    Arpl,
    Bextr,
    Blcfill,
    Blci,
    Blcic,
    Blcmsk,
    Blcs,
    Blendvps,
    Blsfill,
    Blsi,
    Blsic,
    Blsmsk,
    Blsr,
    Bndcl,
    Bndcn,
    Bndcu,
    Bndldx,
    Bndmk,
    Bndmov,
    Bndstx,
    Bound,
    Bsf,
    Bsr,
    Bswap,
    Bt,
    Btc,
    Btr,
    Bts,
    Bzhi,
    Call,
    CallFar,
    Cbw,
    Cdq,
    Cdqe,
    Clc,
    Cld,
    Cldemote,
    Clflush,
    Cli,
    Clrssbsy,
    Clts,
    Cmc,
    Cmovb,
    Cmovbe,
    Cmovl,
    Cmovle,
    Cmovnb,
    Cmovnbe,
    Cmovnl,
    Cmovnle,
    Cmovno,
    Cmovnp,
    Cmovns,
    Cmovnz,
    Cmovo,
    Cmovp,
    Cmovs,
    Cmovz,
    Cmp,
    Cmppd,
    Cmpps,
    Cmpsb,
    Cmpsd,
    Cmpss,
    Cmpxchg,
    Cmpxchg16b,
    Cmpxchg8b,
    Comisd,
    Comiss,
    Cpuid,
    Cqo,
    Crc32,
    Cvtdq2ps,
    Cvtpd2pi,
    Cvtpi2pd,
    Cvtpi2ps,
    Cvtps2dq,
    Cvtps2pi,
    Cvtsd2si,
    Cvtsi2sd,
    Cvtsi2ss,
    Cvtss2si,
    Cvttpd2pi,
    Cvttps2dq,
    Cvttps2pi,
    Cvttsd2si,
    Cvttss2si,
    Cwd,
    Cwde,
    Daa,
    Das,
    Dec,
    Div,
    Divpd,
    Divps,
    Divsd,
    Divss,
    Emms,
    Endbr32,
    Endbr64,
    Enter,
    Fabs,
    Fadd,
    Fbld,
    Fbstp,
    Fchs,
    Fcom,
    Fcomp,
    Fdiv,
    Fdivr,
    Femms,
    Ffree,
    Fild,
    Fist,
    Fistp,
    Fld,
    Fld1,
    Fldcw,
    Fldenv,
    Fldl2e,
    Fldl2t,
    Fldlg2,
    Fldln2,
    Fldpi,
    Fldz,
    Fmul,
    Fnclex,
    Fninit,
    Fnsave,
    Fnstcw,
    Fnstenv,
    Fnstsw,
    Frstor,
    Fst,
    Fstp,
    Fsub,
    Fsubr,
    Ftst,
    Fucom,
    Fucomp,
    Fxam,
    Fxch,
    Fxrstor,
    Fxsave,
    Hlt,
    Idiv,
    Imul,
    In,
    Inc,
    Incsspd,
    Incsspq,
    Insb,
    Insd,
    Int,
    Int1,
    Int3,
    Into,
    Invd,
    Invlpg,
    Iret,
    Iretd,
    Iretq,
    Jb,
    Jbe,
    Jcxz,
    Jecxz,
    Jl,
    Jle,
    Jmp,
    JmpFar,
    Jnb,
    Jnbe,
    Jnl,
    Jnle,
    Jno,
    Jnp,
    Jns,
    Jnz,
    Jo,
    Jp,
    Jrcxz,
    Js,
    Jz,
    Kandnw,
    Kandw,
    Kmovb,
    Kmovd,
    Kmovq,
    Kmovw,
    Knotw,
    Korw,
    Kxnorw,
    Kxorw,
    Lahf,
    Lar,
    Ldmxcsr,
    Lds,
    Ldtilecfg,
    Lea,
    Leave,
    Les,
    Lfence,
    Lfs,
    Lgdt,
    Lgs,
    Lidt,
    Lldt,
    Lmsw,
    Lodsb,
    Lodsd,
    Loop,
    Loopnz,
    Loopz,
    Lsl,
    Lss,
    Ltr,
    Lzcnt,
    Maskmovdqu,
    Maskmovq,
    Maxpd,
    Maxps,
    Maxsd,
    Maxss,
    Mfence,
    Minpd,
    Minps,
    Minsd,
    Minss,
    Mov,
    Movapd,
    Movaps,
    Movbe,
    Movd,
    Movddup,
    Movdir64b,
    Movdq2q,
    Movdqa,
    Movdqu,
    Movhlps,
    Movhpd,
    Movhps,
    Movlhps,
    Movlpd,
    Movlps,
    Movmskpd,
    Movmskps,
    Movntdq,
    Movnti,
    Movntpd,
    Movntps,
    Movntq,
    Movq,
    Movq2dq,
    Movsb,
    Movsd,
    Movshdup,
    Movsldup,
    Movss,
    Movsx,
    Movsxd,
    Movupd,
    Movups,
    Movzx,
    Mul,
    Mulpd,
    Mulps,
    Mulsd,
    Mulss,
    Mulx,
    Neg,
    Nop,
    Not,
    Or,
    Orpd,
    Orps,
    Out,
    Outsb,
    Outsd,
    Paddd,
    Palignr,
    Pause,
    Pavgusb,
    Pcmpeqb,
    Pcmpeqd,
    Pcmpeqw,
    Pcmpistri,
    Pdep,
    Pext,
    Pf2id,
    Pfadd,
    Pfcmpeq,
    Pfcmpge,
    Pfmul,
    Pfrcp,
    Pfrsqrt,
    Pfsub,
    Pi2fd,
    Pmulhrw,
    Pop,
    Popa,
    Popcnt,
    Popf,
    Popfd,
    Popfq,
    Prefetch,
    Prefetchnta,
    Prefetcht0,
    Prefetcht1,
    Prefetcht2,
    Prefetchw,
    Pshufb,
    Pshufd,
    Pshufhw,
    Pshuflw,
    Pshufw,
    Punpcklbw,
    Push,
    Pusha,
    Pushf,
    Pushfd,
    Pushfq,
    Pxor,
    Rcl,
    Rcr,
    Rdfsbase,
    Rdgsbase,
    Rdmsr,
    Rdpkru,
    Rdpmc,
    Rdrand,
    Rdseed,
    Rdsspd,
    Rdsspq,
    Rdtsc,
    Rdtscp,
    Ret,
    RetFar,
    Rol,
    Ror,
    Rorx,
    Sahf,
    Sal,
    Sar,
    Sarx,
    Saveprevssp,
    Sbb,
    Scasb,
    Scasd,
    Setb,
    Setbe,
    Setl,
    Setle,
    Setnb,
    Setnbe,
    Setnl,
    Setnle,
    Setno,
    Setnp,
    Setns,
    Setnz,
    Seto,
    Setp,
    Sets,
    Setssbsy,
    Setz,
    Sfence,
    Sgdt,
    Shl,
    Shld,
    Shlx,
    Shr,
    Shrd,
    Shrx,
    Shufpd,
    Shufps,
    Sidt,
    Sldt,
    Smsw,
    Sqrtpd,
    Sqrtps,
    Sqrtsd,
    Sqrtss,
    Stc,
    Std,
    Sti,
    Stmxcsr,
    Stosb,
    Stosd,
    Str,
    Sttilecfg,
    Sub,
    Subpd,
    Subps,
    Subsd,
    Subss,
    Swapgs,
    Syscall,
    Sysenter,
    Sysexit,
    Sysret,
    T1mskc,
    Tdpbssd,
    Tdpbsud,
    Tdpbusd,
    Tdpbuud,
    Test,
    Testui,
    Tileloadd,
    Tileloaddt1,
    Tilerelease,
    Tilestored,
    Tzcnt,
    Tzmsk,
    Ucomisd,
    Ucomiss,
    Ud0,
    Ud1,
    Ud2,
    Unpckhpd,
    Unpckhps,
    Unpcklpd,
    Unpcklps,
    Vaddpd,
    Vaddps,
    Vaddsd,
    Vaddss,
    Vandnpd,
    Vandnps,
    Vandpd,
    Vandps,
    Vblendvpd,
    Vblendvps,
    Vbroadcastsd,
    Vbroadcastss,
    Vcmppd,
    Vcmpps,
    Vcmpsd,
    Vcmpss,
    Vcomisd,
    Vcomiss,
    Vdivpd,
    Vdivps,
    Vdivsd,
    Vdivss,
    Verr,
    Verw,
    Vextractf128,
    Vgatherdpd,
    Vgatherdps,
    Vgatherqpd,
    Vgatherqps,
    Vinsertf128,
    Vmaxpd,
    Vmaxps,
    Vmaxsd,
    Vmaxss,
    Vminpd,
    Vminps,
    Vminsd,
    Vminss,
    Vmovapd,
    Vmovaps,
    Vmovd,
    Vmovdqa,
    Vmovdqa32,
    Vmovdqa64,
    Vmovdqu,
    Vmovdqu32,
    Vmovdqu64,
    Vmovmskpd,
    Vmovmskps,
    Vmovq,
    Vmovsd,
    Vmovss,
    Vmovupd,
    Vmovups,
    Vmulpd,
    Vmulps,
    Vmulsd,
    Vmulss,
    Vorpd,
    Vorps,
    Vp2intersectd,
    Vpaddd,
    Vpalignr,
    Vpblendvb,
    Vpcmpeqb,
    Vpcmpeqd,
    Vpcmpeqw,
    Vpermil2ps,
    Vpgatherdd,
    Vpgatherdq,
    Vpgatherqd,
    Vpgatherqq,
    Vprotb,
    Vprotd,
    Vprotq,
    Vprotw,
    Vpscatterdd,
    Vpscatterdq,
    Vpscatterqd,
    Vpscatterqq,
    Vpshufd,
    Vpshufhw,
    Vpshuflw,
    Vpternlogd,
    Vpxor,
    Vpxord,
    Vpxorq,
    Vscatterdpd,
    Vscatterdps,
    Vscatterqpd,
    Vscatterqps,
    Vsqrtpd,
    Vsqrtps,
    Vsqrtsd,
    Vsqrtss,
    Vsubpd,
    Vsubps,
    Vsubsd,
    Vsubss,
    Vucomisd,
    Vucomiss,
    Vxorpd,
    Vxorps,
    Vzeroall,
    Vzeroupper,
    Wait,
    Wbinvd,
    Wrfsbase,
    Wrgsbase,
    Wrmsr,
    Wrpkru,
    Xadd,
    Xchg,
    Xgetbv,
    Xlatb,
    Xor,
    Xorpd,
    Xorps,
    Xrstor,
    Xsave,
    Xsaveopt,
    Xsetbv,
}

pub const MNEMONIC_MAX_VALUE: Mnemonic = Mnemonic::Xsetbv;

impl Mnemonic {
    /// Returns the textual form of this mnemonic.
    ///
    /// # Examples
    /// ```
    /// use xdis::Mnemonic;
    /// assert_eq!(Mnemonic::Cmovp.name(), "cmovp");
    /// ```
    pub fn name(self) -> &'static str {
        match self {
            Mnemonic::Invalid => "invalid",
            Mnemonic::Aaa => "aaa",
            Mnemonic::Aad => "aad",
            Mnemonic::Aam => "aam",
            Mnemonic::Aas => "aas",
            Mnemonic::Adc => "adc",
            Mnemonic::Adcx => "adcx",
            Mnemonic::Add => "add",
            Mnemonic::Addpd => "addpd",
            Mnemonic::Addps => "addps",
            Mnemonic::Addsd => "addsd",
            Mnemonic::Addss => "addss",
            Mnemonic::Adox => "adox",
            Mnemonic::Aesenc128kl => "aesenc128kl",
            Mnemonic::And => "and",
            Mnemonic::Andn => "andn",
            Mnemonic::Andnpd => "andnpd",
            Mnemonic::Andnps => "andnps",
            Mnemonic::Andpd => "andpd",
            Mnemonic::Andps => "andps",
            Mnemonic::Arpl => "arpl",
            Mnemonic::Bextr => "bextr",
            Mnemonic::Blcfill => "blcfill",
            Mnemonic::Blci => "blci",
            Mnemonic::Blcic => "blcic",
            Mnemonic::Blcmsk => "blcmsk",
            Mnemonic::Blcs => "blcs",
            Mnemonic::Blendvps => "blendvps",
            Mnemonic::Blsfill => "blsfill",
            Mnemonic::Blsi => "blsi",
            Mnemonic::Blsic => "blsic",
            Mnemonic::Blsmsk => "blsmsk",
            Mnemonic::Blsr => "blsr",
            Mnemonic::Bndcl => "bndcl",
            Mnemonic::Bndcn => "bndcn",
            Mnemonic::Bndcu => "bndcu",
            Mnemonic::Bndldx => "bndldx",
            Mnemonic::Bndmk => "bndmk",
            Mnemonic::Bndmov => "bndmov",
            Mnemonic::Bndstx => "bndstx",
            Mnemonic::Bound => "bound",
            Mnemonic::Bsf => "bsf",
            Mnemonic::Bsr => "bsr",
            Mnemonic::Bswap => "bswap",
            Mnemonic::Bt => "bt",
            Mnemonic::Btc => "btc",
            Mnemonic::Btr => "btr",
            Mnemonic::Bts => "bts",
            Mnemonic::Bzhi => "bzhi",
            Mnemonic::Call => "call",
            Mnemonic::CallFar => "callf",
            Mnemonic::Cbw => "cbw",
            Mnemonic::Cdq => "cdq",
            Mnemonic::Cdqe => "cdqe",
            Mnemonic::Clc => "clc",
            Mnemonic::Cld => "cld",
            Mnemonic::Cldemote => "cldemote",
            Mnemonic::Clflush => "clflush",
            Mnemonic::Cli => "cli",
            Mnemonic::Clrssbsy => "clrssbsy",
            Mnemonic::Clts => "clts",
            Mnemonic::Cmc => "cmc",
            Mnemonic::Cmovb => "cmovb",
            Mnemonic::Cmovbe => "cmovbe",
            Mnemonic::Cmovl => "cmovl",
            Mnemonic::Cmovle => "cmovle",
            Mnemonic::Cmovnb => "cmovnb",
            Mnemonic::Cmovnbe => "cmovnbe",
            Mnemonic::Cmovnl => "cmovnl",
            Mnemonic::Cmovnle => "cmovnle",
            Mnemonic::Cmovno => "cmovno",
            Mnemonic::Cmovnp => "cmovnp",
            Mnemonic::Cmovns => "cmovns",
            Mnemonic::Cmovnz => "cmovnz",
            Mnemonic::Cmovo => "cmovo",
            Mnemonic::Cmovp => "cmovp",
            Mnemonic::Cmovs => "cmovs",
            Mnemonic::Cmovz => "cmovz",
            Mnemonic::Cmp => "cmp",
            Mnemonic::Cmppd => "cmppd",
            Mnemonic::Cmpps => "cmpps",
            Mnemonic::Cmpsb => "cmpsb",
            Mnemonic::Cmpsd => "cmpsd",
            Mnemonic::Cmpss => "cmpss",
            Mnemonic::Cmpxchg => "cmpxchg",
            Mnemonic::Cmpxchg16b => "cmpxchg16b",
            Mnemonic::Cmpxchg8b => "cmpxchg8b",
            Mnemonic::Comisd => "comisd",
            Mnemonic::Comiss => "comiss",
            Mnemonic::Cpuid => "cpuid",
            Mnemonic::Cqo => "cqo",
            Mnemonic::Crc32 => "crc32",
            Mnemonic::Cvtdq2ps => "cvtdq2ps",
            Mnemonic::Cvtpd2pi => "cvtpd2pi",
            Mnemonic::Cvtpi2pd => "cvtpi2pd",
            Mnemonic::Cvtpi2ps => "cvtpi2ps",
            Mnemonic::Cvtps2dq => "cvtps2dq",
            Mnemonic::Cvtps2pi => "cvtps2pi",
            Mnemonic::Cvtsd2si => "cvtsd2si",
            Mnemonic::Cvtsi2sd => "cvtsi2sd",
            Mnemonic::Cvtsi2ss => "cvtsi2ss",
            Mnemonic::Cvtss2si => "cvtss2si",
            Mnemonic::Cvttpd2pi => "cvttpd2pi",
            Mnemonic::Cvttps2dq => "cvttps2dq",
            Mnemonic::Cvttps2pi => "cvttps2pi",
            Mnemonic::Cvttsd2si => "cvttsd2si",
            Mnemonic::Cvttss2si => "cvttss2si",
            Mnemonic::Cwd => "cwd",
            Mnemonic::Cwde => "cwde",
            Mnemonic::Daa => "daa",
            Mnemonic::Das => "das",
            Mnemonic::Dec => "dec",
            Mnemonic::Div => "div",
            Mnemonic::Divpd => "divpd",
            Mnemonic::Divps => "divps",
            Mnemonic::Divsd => "divsd",
            Mnemonic::Divss => "divss",
            Mnemonic::Emms => "emms",
            Mnemonic::Endbr32 => "endbr32",
            Mnemonic::Endbr64 => "endbr64",
            Mnemonic::Enter => "enter",
            Mnemonic::Fabs => "fabs",
            Mnemonic::Fadd => "fadd",
            Mnemonic::Fbld => "fbld",
            Mnemonic::Fbstp => "fbstp",
            Mnemonic::Fchs => "fchs",
            Mnemonic::Fcom => "fcom",
            Mnemonic::Fcomp => "fcomp",
            Mnemonic::Fdiv => "fdiv",
            Mnemonic::Fdivr => "fdivr",
            Mnemonic::Femms => "femms",
            Mnemonic::Ffree => "ffree",
            Mnemonic::Fild => "fild",
            Mnemonic::Fist => "fist",
            Mnemonic::Fistp => "fistp",
            Mnemonic::Fld => "fld",
            Mnemonic::Fld1 => "fld1",
            Mnemonic::Fldcw => "fldcw",
            Mnemonic::Fldenv => "fldenv",
            Mnemonic::Fldl2e => "fldl2e",
            Mnemonic::Fldl2t => "fldl2t",
            Mnemonic::Fldlg2 => "fldlg2",
            Mnemonic::Fldln2 => "fldln2",
            Mnemonic::Fldpi => "fldpi",
            Mnemonic::Fldz => "fldz",
            Mnemonic::Fmul => "fmul",
            Mnemonic::Fnclex => "fnclex",
            Mnemonic::Fninit => "fninit",
            Mnemonic::Fnsave => "fnsave",
            Mnemonic::Fnstcw => "fnstcw",
            Mnemonic::Fnstenv => "fnstenv",
            Mnemonic::Fnstsw => "fnstsw",
            Mnemonic::Frstor => "frstor",
            Mnemonic::Fst => "fst",
            Mnemonic::Fstp => "fstp",
            Mnemonic::Fsub => "fsub",
            Mnemonic::Fsubr => "fsubr",
            Mnemonic::Ftst => "ftst",
            Mnemonic::Fucom => "fucom",
            Mnemonic::Fucomp => "fucomp",
            Mnemonic::Fxam => "fxam",
            Mnemonic::Fxch => "fxch",
            Mnemonic::Fxrstor => "fxrstor",
            Mnemonic::Fxsave => "fxsave",
            Mnemonic::Hlt => "hlt",
            Mnemonic::Idiv => "idiv",
            Mnemonic::Imul => "imul",
            Mnemonic::In => "in",
            Mnemonic::Inc => "inc",
            Mnemonic::Incsspd => "incsspd",
            Mnemonic::Incsspq => "incsspq",
            Mnemonic::Insb => "insb",
            Mnemonic::Insd => "insd",
            Mnemonic::Int => "int",
            Mnemonic::Int1 => "int1",
            Mnemonic::Int3 => "int3",
            Mnemonic::Into => "into",
            Mnemonic::Invd => "invd",
            Mnemonic::Invlpg => "invlpg",
            Mnemonic::Iret => "iret",
            Mnemonic::Iretd => "iretd",
            Mnemonic::Iretq => "iretq",
            Mnemonic::Jb => "jb",
            Mnemonic::Jbe => "jbe",
            Mnemonic::Jcxz => "jcxz",
            Mnemonic::Jecxz => "jecxz",
            Mnemonic::Jl => "jl",
            Mnemonic::Jle => "jle",
            Mnemonic::Jmp => "jmp",
            Mnemonic::JmpFar => "jmpf",
            Mnemonic::Jnb => "jnb",
            Mnemonic::Jnbe => "jnbe",
            Mnemonic::Jnl => "jnl",
            Mnemonic::Jnle => "jnle",
            Mnemonic::Jno => "jno",
            Mnemonic::Jnp => "jnp",
            Mnemonic::Jns => "jns",
            Mnemonic::Jnz => "jnz",
            Mnemonic::Jo => "jo",
            Mnemonic::Jp => "jp",
            Mnemonic::Jrcxz => "jrcxz",
            Mnemonic::Js => "js",
            Mnemonic::Jz => "jz",
            Mnemonic::Kandnw => "kandnw",
            Mnemonic::Kandw => "kandw",
            Mnemonic::Kmovb => "kmovb",
            Mnemonic::Kmovd => "kmovd",
            Mnemonic::Kmovq => "kmovq",
            Mnemonic::Kmovw => "kmovw",
            Mnemonic::Knotw => "knotw",
            Mnemonic::Korw => "korw",
            Mnemonic::Kxnorw => "kxnorw",
            Mnemonic::Kxorw => "kxorw",
            Mnemonic::Lahf => "lahf",
            Mnemonic::Lar => "lar",
            Mnemonic::Ldmxcsr => "ldmxcsr",
            Mnemonic::Lds => "lds",
            Mnemonic::Ldtilecfg => "ldtilecfg",
            Mnemonic::Lea => "lea",
            Mnemonic::Leave => "leave",
            Mnemonic::Les => "les",
            Mnemonic::Lfence => "lfence",
            Mnemonic::Lfs => "lfs",
            Mnemonic::Lgdt => "lgdt",
            Mnemonic::Lgs => "lgs",
            Mnemonic::Lidt => "lidt",
            Mnemonic::Lldt => "lldt",
            Mnemonic::Lmsw => "lmsw",
            Mnemonic::Lodsb => "lodsb",
            Mnemonic::Lodsd => "lodsd",
            Mnemonic::Loop => "loop",
            Mnemonic::Loopnz => "loopnz",
            Mnemonic::Loopz => "loopz",
            Mnemonic::Lsl => "lsl",
            Mnemonic::Lss => "lss",
            Mnemonic::Ltr => "ltr",
            Mnemonic::Lzcnt => "lzcnt",
            Mnemonic::Maskmovdqu => "maskmovdqu",
            Mnemonic::Maskmovq => "maskmovq",
            Mnemonic::Maxpd => "maxpd",
            Mnemonic::Maxps => "maxps",
            Mnemonic::Maxsd => "maxsd",
            Mnemonic::Maxss => "maxss",
            Mnemonic::Mfence => "mfence",
            Mnemonic::Minpd => "minpd",
            Mnemonic::Minps => "minps",
            Mnemonic::Minsd => "minsd",
            Mnemonic::Minss => "minss",
            Mnemonic::Mov => "mov",
            Mnemonic::Movapd => "movapd",
            Mnemonic::Movaps => "movaps",
            Mnemonic::Movbe => "movbe",
            Mnemonic::Movd => "movd",
            Mnemonic::Movddup => "movddup",
            Mnemonic::Movdir64b => "movdir64b",
            Mnemonic::Movdq2q => "movdq2q",
            Mnemonic::Movdqa => "movdqa",
            Mnemonic::Movdqu => "movdqu",
            Mnemonic::Movhlps => "movhlps",
            Mnemonic::Movhpd => "movhpd",
            Mnemonic::Movhps => "movhps",
            Mnemonic::Movlhps => "movlhps",
            Mnemonic::Movlpd => "movlpd",
            Mnemonic::Movlps => "movlps",
            Mnemonic::Movmskpd => "movmskpd",
            Mnemonic::Movmskps => "movmskps",
            Mnemonic::Movntdq => "movntdq",
            Mnemonic::Movnti => "movnti",
            Mnemonic::Movntpd => "movntpd",
            Mnemonic::Movntps => "movntps",
            Mnemonic::Movntq => "movntq",
            Mnemonic::Movq => "movq",
            Mnemonic::Movq2dq => "movq2dq",
            Mnemonic::Movsb => "movsb",
            Mnemonic::Movsd => "movsd",
            Mnemonic::Movshdup => "movshdup",
            Mnemonic::Movsldup => "movsldup",
            Mnemonic::Movss => "movss",
            Mnemonic::Movsx => "movsx",
            Mnemonic::Movsxd => "movsxd",
            Mnemonic::Movupd => "movupd",
            Mnemonic::Movups => "movups",
            Mnemonic::Movzx => "movzx",
            Mnemonic::Mul => "mul",
            Mnemonic::Mulpd => "mulpd",
            Mnemonic::Mulps => "mulps",
            Mnemonic::Mulsd => "mulsd",
            Mnemonic::Mulss => "mulss",
            Mnemonic::Mulx => "mulx",
            Mnemonic::Neg => "neg",
            Mnemonic::Nop => "nop",
            Mnemonic::Not => "not",
            Mnemonic::Or => "or",
            Mnemonic::Orpd => "orpd",
            Mnemonic::Orps => "orps",
            Mnemonic::Out => "out",
            Mnemonic::Outsb => "outsb",
            Mnemonic::Outsd => "outsd",
            Mnemonic::Paddd => "paddd",
            Mnemonic::Palignr => "palignr",
            Mnemonic::Pause => "pause",
            Mnemonic::Pavgusb => "pavgusb",
            Mnemonic::Pcmpeqb => "pcmpeqb",
            Mnemonic::Pcmpeqd => "pcmpeqd",
            Mnemonic::Pcmpeqw => "pcmpeqw",
            Mnemonic::Pcmpistri => "pcmpistri",
            Mnemonic::Pdep => "pdep",
            Mnemonic::Pext => "pext",
            Mnemonic::Pf2id => "pf2id",
            Mnemonic::Pfadd => "pfadd",
            Mnemonic::Pfcmpeq => "pfcmpeq",
            Mnemonic::Pfcmpge => "pfcmpge",
            Mnemonic::Pfmul => "pfmul",
            Mnemonic::Pfrcp => "pfrcp",
            Mnemonic::Pfrsqrt => "pfrsqrt",
            Mnemonic::Pfsub => "pfsub",
            Mnemonic::Pi2fd => "pi2fd",
            Mnemonic::Pmulhrw => "pmulhrw",
            Mnemonic::Pop => "pop",
            Mnemonic::Popa => "popa",
            Mnemonic::Popcnt => "popcnt",
            Mnemonic::Popf => "popf",
            Mnemonic::Popfd => "popfd",
            Mnemonic::Popfq => "popfq",
            Mnemonic::Prefetch => "prefetch",
            Mnemonic::Prefetchnta => "prefetchnta",
            Mnemonic::Prefetcht0 => "prefetcht0",
            Mnemonic::Prefetcht1 => "prefetcht1",
            Mnemonic::Prefetcht2 => "prefetcht2",
            Mnemonic::Prefetchw => "prefetchw",
            Mnemonic::Pshufb => "pshufb",
            Mnemonic::Pshufd => "pshufd",
            Mnemonic::Pshufhw => "pshufhw",
            Mnemonic::Pshuflw => "pshuflw",
            Mnemonic::Pshufw => "pshufw",
            Mnemonic::Punpcklbw => "punpcklbw",
            Mnemonic::Push => "push",
            Mnemonic::Pusha => "pusha",
            Mnemonic::Pushf => "pushf",
            Mnemonic::Pushfd => "pushfd",
            Mnemonic::Pushfq => "pushfq",
            Mnemonic::Pxor => "pxor",
            Mnemonic::Rcl => "rcl",
            Mnemonic::Rcr => "rcr",
            Mnemonic::Rdfsbase => "rdfsbase",
            Mnemonic::Rdgsbase => "rdgsbase",
            Mnemonic::Rdmsr => "rdmsr",
            Mnemonic::Rdpkru => "rdpkru",
            Mnemonic::Rdpmc => "rdpmc",
            Mnemonic::Rdrand => "rdrand",
            Mnemonic::Rdseed => "rdseed",
            Mnemonic::Rdsspd => "rdsspd",
            Mnemonic::Rdsspq => "rdsspq",
            Mnemonic::Rdtsc => "rdtsc",
            Mnemonic::Rdtscp => "rdtscp",
            Mnemonic::Ret => "ret",
            Mnemonic::RetFar => "retf",
            Mnemonic::Rol => "rol",
            Mnemonic::Ror => "ror",
            Mnemonic::Rorx => "rorx",
            Mnemonic::Sahf => "sahf",
            Mnemonic::Sal => "sal",
            Mnemonic::Sar => "sar",
            Mnemonic::Sarx => "sarx",
            Mnemonic::Saveprevssp => "saveprevssp",
            Mnemonic::Sbb => "sbb",
            Mnemonic::Scasb => "scasb",
            Mnemonic::Scasd => "scasd",
            Mnemonic::Setb => "setb",
            Mnemonic::Setbe => "setbe",
            Mnemonic::Setl => "setl",
            Mnemonic::Setle => "setle",
            Mnemonic::Setnb => "setnb",
            Mnemonic::Setnbe => "setnbe",
            Mnemonic::Setnl => "setnl",
            Mnemonic::Setnle => "setnle",
            Mnemonic::Setno => "setno",
            Mnemonic::Setnp => "setnp",
            Mnemonic::Setns => "setns",
            Mnemonic::Setnz => "setnz",
            Mnemonic::Seto => "seto",
            Mnemonic::Setp => "setp",
            Mnemonic::Sets => "sets",
            Mnemonic::Setssbsy => "setssbsy",
            Mnemonic::Setz => "setz",
            Mnemonic::Sfence => "sfence",
            Mnemonic::Sgdt => "sgdt",
            Mnemonic::Shl => "shl",
            Mnemonic::Shld => "shld",
            Mnemonic::Shlx => "shlx",
            Mnemonic::Shr => "shr",
            Mnemonic::Shrd => "shrd",
            Mnemonic::Shrx => "shrx",
            Mnemonic::Shufpd => "shufpd",
            Mnemonic::Shufps => "shufps",
            Mnemonic::Sidt => "sidt",
            Mnemonic::Sldt => "sldt",
            Mnemonic::Smsw => "smsw",
            Mnemonic::Sqrtpd => "sqrtpd",
            Mnemonic::Sqrtps => "sqrtps",
            Mnemonic::Sqrtsd => "sqrtsd",
            Mnemonic::Sqrtss => "sqrtss",
            Mnemonic::Stc => "stc",
            Mnemonic::Std => "std",
            Mnemonic::Sti => "sti",
            Mnemonic::Stmxcsr => "stmxcsr",
            Mnemonic::Stosb => "stosb",
            Mnemonic::Stosd => "stosd",
            Mnemonic::Str => "str",
            Mnemonic::Sttilecfg => "sttilecfg",
            Mnemonic::Sub => "sub",
            Mnemonic::Subpd => "subpd",
            Mnemonic::Subps => "subps",
            Mnemonic::Subsd => "subsd",
            Mnemonic::Subss => "subss",
            Mnemonic::Swapgs => "swapgs",
            Mnemonic::Syscall => "syscall",
            Mnemonic::Sysenter => "sysenter",
            Mnemonic::Sysexit => "sysexit",
            Mnemonic::Sysret => "sysret",
            Mnemonic::T1mskc => "t1mskc",
            Mnemonic::Tdpbssd => "tdpbssd",
            Mnemonic::Tdpbsud => "tdpbsud",
            Mnemonic::Tdpbusd => "tdpbusd",
            Mnemonic::Tdpbuud => "tdpbuud",
            Mnemonic::Test => "test",
            Mnemonic::Testui => "testui",
            Mnemonic::Tileloadd => "tileloadd",
            Mnemonic::Tileloaddt1 => "tileloaddt1",
            Mnemonic::Tilerelease => "tilerelease",
            Mnemonic::Tilestored => "tilestored",
            Mnemonic::Tzcnt => "tzcnt",
            Mnemonic::Tzmsk => "tzmsk",
            Mnemonic::Ucomisd => "ucomisd",
            Mnemonic::Ucomiss => "ucomiss",
            Mnemonic::Ud0 => "ud0",
            Mnemonic::Ud1 => "ud1",
            Mnemonic::Ud2 => "ud2",
            Mnemonic::Unpckhpd => "unpckhpd",
            Mnemonic::Unpckhps => "unpckhps",
            Mnemonic::Unpcklpd => "unpcklpd",
            Mnemonic::Unpcklps => "unpcklps",
            Mnemonic::Vaddpd => "vaddpd",
            Mnemonic::Vaddps => "vaddps",
            Mnemonic::Vaddsd => "vaddsd",
            Mnemonic::Vaddss => "vaddss",
            Mnemonic::Vandnpd => "vandnpd",
            Mnemonic::Vandnps => "vandnps",
            Mnemonic::Vandpd => "vandpd",
            Mnemonic::Vandps => "vandps",
            Mnemonic::Vblendvpd => "vblendvpd",
            Mnemonic::Vblendvps => "vblendvps",
            Mnemonic::Vbroadcastsd => "vbroadcastsd",
            Mnemonic::Vbroadcastss => "vbroadcastss",
            Mnemonic::Vcmppd => "vcmppd",
            Mnemonic::Vcmpps => "vcmpps",
            Mnemonic::Vcmpsd => "vcmpsd",
            Mnemonic::Vcmpss => "vcmpss",
            Mnemonic::Vcomisd => "vcomisd",
            Mnemonic::Vcomiss => "vcomiss",
            Mnemonic::Vdivpd => "vdivpd",
            Mnemonic::Vdivps => "vdivps",
            Mnemonic::Vdivsd => "vdivsd",
            Mnemonic::Vdivss => "vdivss",
            Mnemonic::Verr => "verr",
            Mnemonic::Verw => "verw",
            Mnemonic::Vextractf128 => "vextractf128",
            Mnemonic::Vgatherdpd => "vgatherdpd",
            Mnemonic::Vgatherdps => "vgatherdps",
            Mnemonic::Vgatherqpd => "vgatherqpd",
            Mnemonic::Vgatherqps => "vgatherqps",
            Mnemonic::Vinsertf128 => "vinsertf128",
            Mnemonic::Vmaxpd => "vmaxpd",
            Mnemonic::Vmaxps => "vmaxps",
            Mnemonic::Vmaxsd => "vmaxsd",
            Mnemonic::Vmaxss => "vmaxss",
            Mnemonic::Vminpd => "vminpd",
            Mnemonic::Vminps => "vminps",
            Mnemonic::Vminsd => "vminsd",
            Mnemonic::Vminss => "vminss",
            Mnemonic::Vmovapd => "vmovapd",
            Mnemonic::Vmovaps => "vmovaps",
            Mnemonic::Vmovd => "vmovd",
            Mnemonic::Vmovdqa => "vmovdqa",
            Mnemonic::Vmovdqa32 => "vmovdqa32",
            Mnemonic::Vmovdqa64 => "vmovdqa64",
            Mnemonic::Vmovdqu => "vmovdqu",
            Mnemonic::Vmovdqu32 => "vmovdqu32",
            Mnemonic::Vmovdqu64 => "vmovdqu64",
            Mnemonic::Vmovmskpd => "vmovmskpd",
            Mnemonic::Vmovmskps => "vmovmskps",
            Mnemonic::Vmovq => "vmovq",
            Mnemonic::Vmovsd => "vmovsd",
            Mnemonic::Vmovss => "vmovss",
            Mnemonic::Vmovupd => "vmovupd",
            Mnemonic::Vmovups => "vmovups",
            Mnemonic::Vmulpd => "vmulpd",
            Mnemonic::Vmulps => "vmulps",
            Mnemonic::Vmulsd => "vmulsd",
            Mnemonic::Vmulss => "vmulss",
            Mnemonic::Vorpd => "vorpd",
            Mnemonic::Vorps => "vorps",
            Mnemonic::Vp2intersectd => "vp2intersectd",
            Mnemonic::Vpaddd => "vpaddd",
            Mnemonic::Vpalignr => "vpalignr",
            Mnemonic::Vpblendvb => "vpblendvb",
            Mnemonic::Vpcmpeqb => "vpcmpeqb",
            Mnemonic::Vpcmpeqd => "vpcmpeqd",
            Mnemonic::Vpcmpeqw => "vpcmpeqw",
            Mnemonic::Vpermil2ps => "vpermil2ps",
            Mnemonic::Vpgatherdd => "vpgatherdd",
            Mnemonic::Vpgatherdq => "vpgatherdq",
            Mnemonic::Vpgatherqd => "vpgatherqd",
            Mnemonic::Vpgatherqq => "vpgatherqq",
            Mnemonic::Vprotb => "vprotb",
            Mnemonic::Vprotd => "vprotd",
            Mnemonic::Vprotq => "vprotq",
            Mnemonic::Vprotw => "vprotw",
            Mnemonic::Vpscatterdd => "vpscatterdd",
            Mnemonic::Vpscatterdq => "vpscatterdq",
            Mnemonic::Vpscatterqd => "vpscatterqd",
            Mnemonic::Vpscatterqq => "vpscatterqq",
            Mnemonic::Vpshufd => "vpshufd",
            Mnemonic::Vpshufhw => "vpshufhw",
            Mnemonic::Vpshuflw => "vpshuflw",
            Mnemonic::Vpternlogd => "vpternlogd",
            Mnemonic::Vpxor => "vpxor",
            Mnemonic::Vpxord => "vpxord",
            Mnemonic::Vpxorq => "vpxorq",
            Mnemonic::Vscatterdpd => "vscatterdpd",
            Mnemonic::Vscatterdps => "vscatterdps",
            Mnemonic::Vscatterqpd => "vscatterqpd",
            Mnemonic::Vscatterqps => "vscatterqps",
            Mnemonic::Vsqrtpd => "vsqrtpd",
            Mnemonic::Vsqrtps => "vsqrtps",
            Mnemonic::Vsqrtsd => "vsqrtsd",
            Mnemonic::Vsqrtss => "vsqrtss",
            Mnemonic::Vsubpd => "vsubpd",
            Mnemonic::Vsubps => "vsubps",
            Mnemonic::Vsubsd => "vsubsd",
            Mnemonic::Vsubss => "vsubss",
            Mnemonic::Vucomisd => "vucomisd",
            Mnemonic::Vucomiss => "vucomiss",
            Mnemonic::Vxorpd => "vxorpd",
            Mnemonic::Vxorps => "vxorps",
            Mnemonic::Vzeroall => "vzeroall",
            Mnemonic::Vzeroupper => "vzeroupper",
            Mnemonic::Wait => "wait",
            Mnemonic::Wbinvd => "wbinvd",
            Mnemonic::Wrfsbase => "wrfsbase",
            Mnemonic::Wrgsbase => "wrgsbase",
            Mnemonic::Wrmsr => "wrmsr",
            Mnemonic::Wrpkru => "wrpkru",
            Mnemonic::Xadd => "xadd",
            Mnemonic::Xchg => "xchg",
            Mnemonic::Xgetbv => "xgetbv",
            Mnemonic::Xlatb => "xlatb",
            Mnemonic::Xor => "xor",
            Mnemonic::Xorpd => "xorpd",
            Mnemonic::Xorps => "xorps",
            Mnemonic::Xrstor => "xrstor",
            Mnemonic::Xsave => "xsave",
            Mnemonic::Xsaveopt => "xsaveopt",
            Mnemonic::Xsetbv => "xsetbv",
        }
    }
}

impl core::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
