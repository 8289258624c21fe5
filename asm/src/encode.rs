use arch::{alu::Comp, inst::Inst, jump::Jump, mem::IMM_MAX, reg::Dest};

use crate::{
    error::EncodeError,
    parser::{AddressInstruction, ComputeInstruction},
    symbol::SymbolTable,
};

/// 15-digit binary of `n`, MSB first.
pub fn encode_number(n: i64) -> Result<String, EncodeError> {
    if !(0..=IMM_MAX as i64).contains(&n) {
        return Err(EncodeError::OutOfRange(n));
    }
    Ok(format!("{:015b}", n))
}

/// Encodes `@value`. Unknown symbols are allocated as variables.
pub fn encode_address_instruction(
    instr: &AddressInstruction,
    table: &mut SymbolTable,
) -> Result<String, EncodeError> {
    let addr = if instr.is_symbolic {
        let addr = if table.exists(&instr.value) {
            table.get(&instr.value)?
        } else {
            table.add_variable(&instr.value)?
        };
        i64::from(addr)
    } else {
        instr
            .value
            .parse::<i64>()
            .map_err(|_| EncodeError::InvalidLiteral(instr.value.clone()))?
    };
    Ok(format!("0{}", encode_number(addr)?))
}

pub fn encode_compute_instruction(instr: &ComputeInstruction) -> Result<String, EncodeError> {
    let dest =
        Dest::parse(&instr.dest).ok_or_else(|| EncodeError::UnknownDest(instr.dest.clone()))?;
    let comp =
        Comp::parse(&instr.comp).ok_or_else(|| EncodeError::UnknownComp(instr.comp.clone()))?;
    let jump =
        Jump::parse(&instr.jump).ok_or_else(|| EncodeError::UnknownJump(instr.jump.clone()))?;
    Ok(Inst::C { dest, comp, jump }.to_bin_string())
}
