use xdis::*;

#[rustfmt::skip]
static CODE: &[u8] = &[
    0x51, 0x8D, 0x45, 0xFF, 0x50, 0xFF, 0x75, 0x0C, 0xFF, 0x75, 0x08,
    0xFF, 0x15, 0xA0, 0xA5, 0x48, 0x76, 0x85, 0xC0, 0x0F, 0x88, 0xFC,
    0xDA, 0x02, 0x00,
];

fn main() -> Result<()> {
    let formatter = Formatter::new();
    let decoder = Decoder::new64();

    for (insn, ip) in decoder.instruction_iter(CODE, 0) {
        let text = formatter.format(&insn, ip)?;
        println!("0x{:016X} {}", ip, text);
    }

    Ok(())
}
