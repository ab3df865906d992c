//! Decodes hex encoded bytes from the command line and dumps the record.

use argh::FromArgs;
use xdis::*;

#[derive(FromArgs)]
/// Decode a hex encoded instruction and print its structure.
struct Args {
    /// hex encoded instruction bytes, e.g. "4889c3"
    #[argh(positional)]
    hex: String,

    /// decode in 32 bit mode instead of 64 bit
    #[argh(switch)]
    m32: bool,
}

fn parse_hex(hex: &str) -> Option<Vec<u8>> {
    let cleaned: String = hex.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.len() % 2 != 0 {
        return None;
    }

    (0..cleaned.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&cleaned[i..i + 2], 16).ok())
        .collect()
}

fn main() {
    let args: Args = argh::from_env();

    let Some(code) = parse_hex(&args.hex) else {
        eprintln!("not a valid hex string");
        std::process::exit(1);
    };

    let decoder = if args.m32 {
        Decoder::new32()
    } else {
        Decoder::new64()
    };

    match decoder.decode(&code) {
        Ok(insn) => {
            println!("mnemonic:  {}", insn.mnemonic);
            println!("length:    {}", insn.length);
            println!("encoding:  {:?}", insn.encoding);
            println!("op width:  {}", insn.op_width());
            for (i, operand) in insn.operands().iter().enumerate() {
                println!("op[{}]:     {:?}", i, operand.info);
            }
        }
        Err(status) => {
            eprintln!("decode failed: {}", status);
            std::process::exit(1);
        }
    }
}
