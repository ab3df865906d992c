//! Cross-cutting decoder properties.

use pretty_assertions::assert_eq;
use xdis::*;

/// A mixed bag of valid 64 bit encodings used by the property tests.
static SAMPLES: &[&[u8]] = &[
    &[0x90],
    &[0x48, 0x89, 0xC3],
    &[0x67, 0x8B, 0x04, 0x25, 0x78, 0x56, 0x34, 0x12],
    &[0xF0, 0x48, 0x01, 0x4D, 0x00],
    &[0xC5, 0xFB, 0x10, 0x05, 0x00, 0x00, 0x00, 0x00],
    &[0x62, 0xF1, 0x7C, 0x48, 0x58, 0xC1],
    &[0x0F, 0x0F, 0xC1, 0x9E],
    &[0xE8, 0x00, 0x01, 0x00, 0x00],
    &[0xB8, 0x78, 0x56, 0x34, 0x12],
    &[0x0F, 0xAE, 0xE8],
];

#[test]
fn length_bound_and_raw_bytes() {
    let decoder = Decoder::new64();

    for code in SAMPLES {
        let insn = decoder.decode(code).unwrap();
        assert!(insn.length as usize <= MAX_INSTRUCTION_LENGTH);
        assert!(insn.length as usize <= code.len());
        assert_eq!(insn.raw_bytes(), &code[..insn.length as usize]);
    }
}

#[test]
fn buffer_size_monotonicity() {
    let decoder = Decoder::new64();

    for code in SAMPLES {
        let insn = decoder.decode(code).unwrap();
        let length = insn.length as usize;

        // Every shorter prefix of the buffer must fail.
        for cut in 1..length {
            assert!(decoder.decode(&code[..cut]).is_err(), "cut = {}", cut);
        }

        // Decoding with exactly the instruction bytes must reproduce the
        // identical record.
        assert_eq!(decoder.decode(&code[..length]).unwrap(), insn);
    }
}

#[test]
fn decoding_is_deterministic() {
    let decoder = Decoder::new64();

    for code in SAMPLES {
        assert_eq!(decoder.decode(code).unwrap(), decoder.decode(code).unwrap());
    }
}

#[test]
fn prefix_order_does_not_change_semantics() {
    let decoder = Decoder::new32();

    // Segment override and operand size override belong to different
    // groups; any order decodes to the same instruction.
    let a = decoder.decode(&[0x3E, 0x66, 0x89, 0xC8]).unwrap();
    let b = decoder.decode(&[0x66, 0x3E, 0x89, 0xC8]).unwrap();

    assert_eq!(a.mnemonic, b.mnemonic);
    assert_eq!(a.op_width(), b.op_width());
    assert_eq!(a.operands(), b.operands());
}

#[test]
fn extension_bits_are_stored_inverted() {
    let decoder = Decoder::new64();

    // VEX3 with all-ones wire vvvv: the logical value is zero.
    let insn = decoder.decode(&[0xC4, 0xE1, 0xF9, 0x6E, 0xC0]).unwrap();
    assert_eq!(insn.mnemonic, Mnemonic::Vmovq);
    assert_eq!(insn.exs.v, 0);
    assert_eq!(insn.exs.r, 0);
    assert_eq!(insn.exs.x, 0);
    assert_eq!(insn.exs.b, 0);

    // Clearing the wire R bit extends ModRM.reg to xmm9.
    let insn = decoder.decode(&[0xC4, 0x61, 0xF9, 0x6E, 0xC8]).unwrap();
    assert_eq!(insn.exs.r, 1);
    assert_eq!(insn.operands[0].info.register().unwrap().id, 9);
}

#[test]
fn rip_relative_needs_mod0_rm5_without_sib() {
    let decoder = Decoder::new64();

    let insn = decoder.decode(&[0x8B, 0x05, 0x00, 0x00, 0x00, 0x00]).unwrap();
    assert!(insn.is_rip_relative);
    assert!(insn.operands[1].info.memory().unwrap().is_rip_rel);

    // The SIB encoded disp32-only form is absolute, not RIP relative.
    let insn = decoder
        .decode(&[0x8B, 0x04, 0x25, 0x00, 0x00, 0x00, 0x00])
        .unwrap();
    assert!(!insn.is_rip_relative);
}

#[test]
fn lock_requires_a_lockable_memory_destination() {
    let decoder = Decoder::new64();

    // MOV does not accept LOCK at all.
    assert_eq!(
        decoder.decode(&[0xF0, 0x89, 0x08]),
        Err(Status::BadLockPrefix)
    );

    // ADD accepts LOCK, but only with a memory destination.
    assert_eq!(
        decoder.decode(&[0xF0, 0x01, 0xC1]),
        Err(Status::BadLockPrefix)
    );
    assert!(decoder.decode(&[0xF0, 0x01, 0x08]).is_ok());
}

#[test]
fn vsib_registers_must_be_unique() {
    let decoder = Decoder::new64();

    // VPGATHERDD xmm1, [rax+xmm1], xmm2: destination equals the index.
    assert_eq!(
        decoder.decode(&[0xC4, 0xE2, 0x69, 0x90, 0x0C, 0x08]),
        Err(Status::InvalidVsibRegs)
    );

    // Distinct registers decode fine.
    let insn = decoder
        .decode(&[0xC4, 0xE2, 0x69, 0x90, 0x0C, 0x18])
        .unwrap();
    assert_eq!(insn.mnemonic, Mnemonic::Vpgatherdd);
    let mem = insn.operands[1].info.memory().unwrap();
    assert!(mem.is_vsib);
    assert_eq!(mem.index, 3);

    // Scatter may reuse the data register as the index.
    let insn = decoder
        .decode(&[0x62, 0xF2, 0x7D, 0x49, 0xA0, 0x0C, 0x08])
        .unwrap();
    assert_eq!(insn.mnemonic, Mnemonic::Vpscatterdd);
}

#[test]
fn evex_reserved_bits_are_validated() {
    let decoder = Decoder::new64();

    // The must-be-zero bit of the first payload byte is set.
    assert_eq!(
        decoder.decode(&[0x62, 0xF9, 0x7C, 0x48, 0x58, 0xC1]),
        Err(Status::InvalidEncoding)
    );

    // A zero map field is reserved.
    assert_eq!(
        decoder.decode(&[0x62, 0xF0, 0x7C, 0x48, 0x58, 0xC1]),
        Err(Status::InvalidEncoding)
    );

    // The must-be-one bit of the second payload byte is cleared.
    assert_eq!(
        decoder.decode(&[0x62, 0xF1, 0x78, 0x48, 0x58, 0xC1]),
        Err(Status::InvalidEncoding)
    );
}

#[test]
fn evex_mask_rules() {
    let decoder = Decoder::new64();

    // Gathers require a mask other than k0.
    assert_eq!(
        decoder.decode(&[0x62, 0xF2, 0x7D, 0x48, 0x90, 0x0C, 0x18]),
        Err(Status::MaskRequired)
    );

    // VMOVUPS with zeroing on a memory destination is rejected.
    assert_eq!(
        decoder.decode(&[0x62, 0xF1, 0x7C, 0xC9, 0x11, 0x01]),
        Err(Status::ZeroingNotSupported)
    );
}

#[test]
fn unused_vvvv_must_be_zero() {
    let decoder = Decoder::new64();

    // VMOVDQA has no vvvv operand; a non-1111 wire value is #UD.
    assert_eq!(
        decoder.decode(&[0xC5, 0xF1, 0x6F, 0xC1]),
        Err(Status::VvvvMustBeZero)
    );
    assert!(decoder.decode(&[0xC5, 0xF9, 0x6F, 0xC1]).is_ok());
}

#[test]
fn amx_tiles_must_be_distinct() {
    let decoder = Decoder::new64();

    // TDPBSSD tmm1, tmm2, tmm3.
    let insn = decoder.decode(&[0xC4, 0xE2, 0x62, 0x5E, 0xCA]).unwrap();
    assert_eq!(insn.mnemonic, Mnemonic::Tdpbssd);

    // TDPBSSD tmm1, tmm1, tmm3 collides.
    assert_eq!(
        decoder.decode(&[0xC4, 0xE2, 0x62, 0x5E, 0xC9]),
        Err(Status::InvalidRegisterInInstruction)
    );
}

#[test]
fn concurrent_decoding_is_safe() {
    let decoder = Decoder::new64();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for code in SAMPLES {
                    let insn = decoder.decode(code).unwrap();
                    assert!(insn.length > 0);
                }
            });
        }
    });
}
