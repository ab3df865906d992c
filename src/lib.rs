#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod enums;
pub mod status;

mod decoder;
#[cfg(feature = "formatter")]
pub mod formatter;
mod insn;
mod operand;
mod table;
mod utils;

pub use decoder::{Decoder, InstructionIterator};
pub use enums::*;
pub use insn::{
    DecodedInstruction, ExtensionBits, FlagsAccess, Immediate, Modrm, Sib,
    MAX_INSTRUCTION_LENGTH, MAX_OPERAND_COUNT,
};
pub use operand::{
    Broadcast, Decorator, FarPointer, MemoryInfo, Operand, OperandFlags, OperandInfo,
    RegisterInfo, Vsib,
};
pub use status::{Result, Status};
pub use utils::{AccessMap, OperandLookup};

#[cfg(feature = "formatter")]
pub use formatter::Formatter;

const VERSION_MAJOR: u32 = 0;
const VERSION_MINOR: u32 = 3;
const VERSION_REVISION: u32 = 1;

/// Returns the library version as a `(major, minor, revision)` triple.
///
/// # Examples
///
/// ```
/// let (major, _, _) = xdis::version();
/// assert_eq!(major, 0);
/// ```
pub fn version() -> (u32, u32, u32) {
    (VERSION_MAJOR, VERSION_MINOR, VERSION_REVISION)
}
