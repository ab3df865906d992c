//! End-to-end decode scenarios.

use pretty_assertions::assert_eq;
use xdis::*;

fn decode64(code: &[u8]) -> DecodedInstruction {
    Decoder::new64().decode(code).unwrap()
}

fn decode32(code: &[u8]) -> DecodedInstruction {
    Decoder::new32().decode(code).unwrap()
}

#[test]
fn nop_is_one_byte_without_operands() {
    let insn = decode64(&[0x90]);
    assert_eq!(insn.mnemonic, Mnemonic::Nop);
    assert_eq!(insn.length, 1);
    assert_eq!(insn.exp_operand_count, 0);
    assert_eq!(insn.raw_bytes(), &[0x90]);
}

#[test]
fn mov_rbx_rax() {
    let insn = decode64(&[0x48, 0x89, 0xC3]);
    assert_eq!(insn.mnemonic, Mnemonic::Mov);
    assert_eq!(insn.length, 3);
    assert_eq!(insn.op_width(), 64);

    let dst = insn.operands[0].info.register().unwrap();
    assert_eq!(dst.class, RegisterClass::Gpr);
    assert_eq!(dst.id, 3);
    assert_eq!(insn.operands[0].size, 8);
    assert!(insn.operands[0].access.contains(OperandAccess::WRITE));

    let src = insn.operands[1].info.register().unwrap();
    assert_eq!(src.id, 0);
    assert_eq!(insn.operands[1].size, 8);
    assert!(insn.operands[1].access.contains(OperandAccess::READ));
}

#[test]
fn mov_with_address_size_override_and_direct_disp() {
    // MOV EAX, dword ptr [0x12345678] using 32 bit addressing in long mode.
    let insn = decode64(&[0x67, 0x8B, 0x04, 0x25, 0x78, 0x56, 0x34, 0x12]);
    assert_eq!(insn.mnemonic, Mnemonic::Mov);
    assert_eq!(insn.addr_width(), 32);

    let dst = insn.operands[0].info.register().unwrap();
    assert_eq!(dst.id, 0);
    assert_eq!(insn.operands[0].size, 4);

    let mem = insn.operands[1].info.memory().unwrap();
    assert!(!mem.has_base);
    assert!(!mem.has_index);
    assert!(mem.has_disp);
    assert_eq!(mem.disp, 0x1234_5678);
    assert_eq!(mem.seg, reg::DS);
    assert_eq!(insn.operands[1].size, 4);
    assert!(!insn.is_rip_relative);
}

#[test]
fn lock_add_rbp_rcx() {
    let insn = decode64(&[0xF0, 0x48, 0x01, 0x4D, 0x00]);
    assert_eq!(insn.mnemonic, Mnemonic::Add);
    assert!(insn.has_lock);

    let mem = insn.operands[0].info.memory().unwrap();
    assert_eq!(mem.seg, reg::SS);
    assert_eq!(mem.base, reg::RBP);
    assert!(insn.operands[0].access.contains(OperandAccess::RW));

    let src = insn.operands[1].info.register().unwrap();
    assert_eq!(src.id, reg::RCX as u32);
    assert_eq!(insn.operands[1].size, 8);
}

#[test]
fn vmovsd_rip_relative() {
    let insn = decode64(&[0xC5, 0xFB, 0x10, 0x05, 0x00, 0x00, 0x00, 0x00]);
    assert_eq!(insn.mnemonic, Mnemonic::Vmovsd);
    assert_eq!(insn.encoding, InstructionEncoding::Vex);
    assert_eq!(insn.vex_form, Some(VexForm::Vex2));
    assert_eq!(insn.length, 8);

    let dst = insn.operands[0].info.register().unwrap();
    assert_eq!(dst.class, RegisterClass::Sse);
    assert_eq!(dst.id, 0);
    assert_eq!(insn.operands[0].size, 8);

    let mem = insn.operands[1].info.memory().unwrap();
    assert!(mem.is_rip_rel);
    assert_eq!(insn.operands[1].size, 8);
    assert!(insn.is_rip_relative);
}

#[test]
fn evex_vaddps_zmm() {
    let insn = decode64(&[0x62, 0xF1, 0x7C, 0x48, 0x58, 0xC1]);
    assert_eq!(insn.mnemonic, Mnemonic::Vaddps);
    assert_eq!(insn.encoding, InstructionEncoding::Evex);
    assert_eq!(insn.vector_width(), 512);

    for index in 0..3 {
        let r = insn.operands[index].info.register().unwrap();
        assert_eq!(r.class, RegisterClass::Sse);
        assert_eq!(insn.operands[index].size, 64);
    }

    assert_eq!(insn.operands[0].info.register().unwrap().id, 0);
    assert_eq!(insn.operands[1].info.register().unwrap().id, 0);
    assert_eq!(insn.operands[2].info.register().unwrap().id, 1);
}

#[test]
fn xop_introducer_with_low_map_falls_back_to_legacy() {
    // 8F with map bits below 8 decodes through the one byte table as POP.
    let insn = decode32(&[0x8F, 0x00, 0x12]);
    assert_eq!(insn.mnemonic, Mnemonic::Pop);
    assert_eq!(insn.length, 2);

    // reg != 0 is not a valid POP encoding, but it must fail through the
    // legacy path, not as a malformed XOP prefix.
    let status = Decoder::new32().decode(&[0x8F, 0x08, 0x12]);
    assert_eq!(status, Err(Status::InvalidEncoding));
}

#[test]
fn xop_blcfill() {
    // XOP.map9 01 /1: BLCFILL ecx, eax.
    let insn = decode64(&[0x8F, 0xE9, 0x70, 0x01, 0xC8]);
    assert_eq!(insn.mnemonic, Mnemonic::Blcfill);
    assert_eq!(insn.encoding, InstructionEncoding::Xop);

    let dst = insn.operands[0].info.register().unwrap();
    assert_eq!(dst.id, reg::RCX as u32);
    assert_eq!(insn.operands[0].size, 4);
}

#[test]
fn prefix_run_beyond_15_bytes_is_too_long() {
    let mut code = [0x26u8; 16];
    code[15] = 0x90;
    assert_eq!(
        Decoder::new64().decode(&code),
        Err(Status::InstructionTooLong)
    );
}

#[test]
fn amd_3dnow_opcode_follows_modrm() {
    // PFADD mm0, mm1 (0F 0F /r 9E).
    let insn = decode64(&[0x0F, 0x0F, 0xC1, 0x9E]);
    assert_eq!(insn.mnemonic, Mnemonic::Pfadd);
    assert_eq!(insn.length, 4);
    assert_eq!(insn.primary_opcode, 0x9E);

    let dst = insn.operands[0].info.register().unwrap();
    assert_eq!(dst.class, RegisterClass::Mmx);
    assert_eq!(dst.id, 0);
}

#[test]
fn rep_movsb_is_repeated() {
    let insn = decode64(&[0xF3, 0xA4]);
    assert_eq!(insn.mnemonic, Mnemonic::Movsb);
    assert!(insn.is_repeated);
    assert!(insn.has_repz());
}

#[test]
fn xacquire_lock_add() {
    let insn = decode64(&[0xF2, 0xF0, 0x01, 0x08]);
    assert_eq!(insn.mnemonic, Mnemonic::Add);
    assert!(insn.has_lock);
    assert!(insn.is_xacquire);
    assert!(!insn.is_xrelease);
    assert!(!insn.is_repeated);
}

#[test]
fn no_track_prefix_suppresses_tracking_in_long_mode() {
    // JMP rax is CET tracked by default.
    let insn = decode64(&[0xFF, 0xE0]);
    assert_eq!(insn.mnemonic, Mnemonic::Jmp);
    assert!(insn.is_cet_tracked);

    // The 3E no-track prefix disables tracking for the register form.
    let insn = decode64(&[0x3E, 0xFF, 0xE0]);
    assert!(!insn.is_cet_tracked);

    // Memory-indirect branches are always tracked.
    let insn = decode64(&[0x3E, 0xFF, 0x20]);
    assert!(insn.is_cet_tracked);
}

#[test]
fn branch_hint_is_recorded() {
    // JZ with a taken hint.
    let insn = decode64(&[0x3E, 0x0F, 0x84, 0x00, 0x00, 0x00, 0x00]);
    assert_eq!(insn.mnemonic, Mnemonic::Jz);
    assert_eq!(insn.branch_hint, BranchHint::Taken);
}

#[test]
fn moffset_forms() {
    // MOV RAX, [moffset64].
    let insn = decode64(&[
        0x48, 0xA1, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11,
    ]);
    assert_eq!(insn.mnemonic, Mnemonic::Mov);
    assert!(insn.has_moffset);
    assert_eq!(insn.moffset, 0x1122_3344_5566_7788);
    assert_eq!(insn.moffset_length, 8);

    let mem = insn.operands[1].info.memory().unwrap();
    assert!(mem.is_direct);
    assert_eq!(mem.disp, 0x1122_3344_5566_7788u64 as i64);
}

#[test]
fn far_pointer_call() {
    // CALL 0x1234:0x56789ABC (32 bit mode).
    let insn = decode32(&[0x9A, 0xBC, 0x9A, 0x78, 0x56, 0x34, 0x12]);
    assert_eq!(insn.mnemonic, Mnemonic::CallFar);
    assert!(insn.has_far_addr);

    match insn.operands[0].info {
        OperandInfo::Addr(ptr) => {
            assert_eq!(ptr.segment, 0x1234);
            assert_eq!(ptr.offset, 0x5678_9ABC);
        }
        _ => panic!("expected a far pointer operand"),
    }
}

#[test]
fn sixteen_bit_addressing_table() {
    // MOV [bp+si+0x10], al in 16 bit mode.
    let decoder = Decoder::new(MachineMode::Legacy16, StackWidth::_16);
    let insn = decoder.decode(&[0x88, 0x42, 0x10]).unwrap();

    let mem = insn.operands[0].info.memory().unwrap();
    assert_eq!(mem.base, reg::RBP);
    assert_eq!(mem.index, reg::RSI);
    assert_eq!(mem.seg, reg::SS);
    assert_eq!(mem.disp, 0x10);
    assert_eq!(mem.base_size, 2);
}

#[test]
fn evex_masking_and_zeroing() {
    // VADDPS zmm0{k3}, zmm0, zmm1.
    let insn = decode64(&[0x62, 0xF1, 0x7C, 0x4B, 0x58, 0xC1]);
    assert!(insn.has_mask);
    assert_eq!(insn.operands[0].decorator.mask, Some(3));
    assert!(!insn.has_zero);

    // VADDPS zmm0{k3}{z}, zmm0, zmm1.
    let insn = decode64(&[0x62, 0xF1, 0x7C, 0xCB, 0x58, 0xC1]);
    assert!(insn.has_zero);
    assert!(insn.operands[0].decorator.zeroing);
}

#[test]
fn evex_broadcast() {
    // VADDPS zmm0, zmm0, dword ptr [rax]{1to16}.
    let insn = decode64(&[0x62, 0xF1, 0x7C, 0x58, 0x58, 0x00]);
    assert!(insn.has_broadcast);

    let operand = &insn.operands[2];
    assert_eq!(operand.size, 4);
    let bcast = operand.decorator.broadcast.unwrap();
    assert_eq!(bcast.size, 4);
    assert_eq!(bcast.count, 16);
    assert!(operand.info.memory().unwrap().has_broadcast);
}

#[test]
fn evex_compressed_displacement() {
    // VADDPS zmm0, zmm0, [rax+0x40]: disp8 of 1 scales by the full vector.
    let insn = decode64(&[0x62, 0xF1, 0x7C, 0x48, 0x58, 0x40, 0x01]);
    assert!(insn.has_comp_disp);

    let mem = insn.operands[2].info.memory().unwrap();
    assert!(mem.has_comp_disp);
    assert_eq!(mem.comp_disp_size, 64);
    assert_eq!(mem.disp, 1);
}

#[test]
fn evex_embedded_rounding_forces_max_length() {
    // VADDPS zmm0, zmm0, zmm1, {rd-sae}: L'L becomes the rounding mode.
    let insn = decode64(&[0x62, 0xF1, 0x7C, 0x38, 0x58, 0xC1]);
    assert!(insn.has_er);
    assert!(insn.has_sae);
    assert_eq!(insn.rounding, Some(RoundingMode::RD));
    assert_eq!(insn.vector_width(), 512);
}

#[test]
fn movbe_and_crc32_share_an_opcode() {
    // MOVBE eax, [rcx].
    let insn = decode64(&[0x0F, 0x38, 0xF0, 0x01]);
    assert_eq!(insn.mnemonic, Mnemonic::Movbe);

    // F2 redirects to CRC32 and 66 still changes the size (S66).
    let insn = decode64(&[0x66, 0xF2, 0x0F, 0x38, 0xF1, 0x01]);
    assert_eq!(insn.mnemonic, Mnemonic::Crc32);
    assert!(insn.has_mandatory_f2);
    assert_eq!(insn.operands[1].size, 2);
}

#[test]
fn cmovcc_is_conditional() {
    let insn = decode64(&[0x0F, 0x44, 0xC1]);
    assert_eq!(insn.mnemonic, Mnemonic::Cmovz);
    assert!(insn.operands[0].access.contains(OperandAccess::COND_WRITE));
    assert!(insn.flags_access.tested.contains(CpuFlags::ZF));
}

#[test]
fn push_tracks_stack_access() {
    let insn = decode64(&[0x50]);
    assert_eq!(insn.mnemonic, Mnemonic::Push);
    assert!(insn.stack_access.contains(OperandAccess::WRITE));
    assert_eq!(insn.stack_words, 1);
    assert_eq!(insn.op_width(), 64);
}

#[test]
fn mov_control_register_forces_register_form() {
    // MOV rax, cr0: mod bits are ignored, no SIB/displacement follows.
    let insn = decode64(&[0x0F, 0x20, 0x00]);
    assert_eq!(insn.mnemonic, Mnemonic::Mov);

    let dst = insn.operands[0].info.register().unwrap();
    assert_eq!(dst.class, RegisterClass::Gpr);
    let src = insn.operands[1].info.register().unwrap();
    assert_eq!(src.class, RegisterClass::Cr);
    assert_eq!(insn.length, 3);
}

#[test]
fn invalid_control_register_is_rejected() {
    // MOV rax, cr1 does not exist.
    let status = Decoder::new64().decode(&[0x0F, 0x20, 0x08]);
    assert_eq!(status, Err(Status::InvalidRegisterInInstruction));
}

#[test]
fn cs_load_is_rejected() {
    // MOV cs, ax.
    let status = Decoder::new64().decode(&[0x8E, 0xC8]);
    assert_eq!(status, Err(Status::CsLoad));
}

#[test]
fn bound_decodes_in_legacy_mode_only() {
    // BOUND eax, [ecx] in 32 bit mode; in 64 bit mode 62 starts EVEX.
    let insn = decode32(&[0x62, 0x01]);
    assert_eq!(insn.mnemonic, Mnemonic::Bound);

    let status = Decoder::new64().decode(&[0x62, 0x01]);
    assert!(status.is_err());
}

#[test]
fn access_map_folds_operands() {
    let insn = decode64(&[0x48, 0x01, 0x4D, 0x00]); // ADD [rbp], rcx
    let map = insn.access_map();
    assert!(map.memory.contains(OperandAccess::RW));
    assert!(map.gpr[reg::RBP as usize].contains(OperandAccess::READ));
    assert!(map.gpr[reg::RCX as usize].contains(OperandAccess::READ));
    assert!(map.flags.contains(OperandAccess::WRITE));
}

#[test]
fn operand_lookup_resolves_roles() {
    let insn = decode64(&[0x48, 0x01, 0x4D, 0x00]); // ADD [rbp], rcx
    let rlut = insn.operand_lookup();
    assert!(rlut.dst1.unwrap().info.is_memory());
    assert!(rlut.mem1.is_some());
    assert!(rlut.flags.is_some());
    assert!(rlut.stack.is_none());

    let insn = decode64(&[0x50]); // PUSH rax
    let rlut = insn.operand_lookup();
    assert!(rlut.stack.is_some());
}

#[test]
fn instruction_iterator_steps_by_length() {
    let code = [0x90, 0x48, 0x89, 0xC3, 0xC3];
    let decoder = Decoder::new64();
    let decoded: Vec<_> = decoder.instruction_iter(&code, 0x1000).collect();
    assert_eq!(decoded.len(), 3);
    assert_eq!(decoded[0].1, 0x1000);
    assert_eq!(decoded[1].1, 0x1001);
    assert_eq!(decoded[2].1, 0x1004);
    assert_eq!(decoded[2].0.mnemonic, Mnemonic::Ret);
}

#[test]
fn version_is_reported() {
    let (major, minor, _) = version();
    assert!(major > 0 || minor > 0);
}
