pub mod error;
pub mod trace;
pub mod types;
pub mod vm;

pub use error::{EmcError, Result};
pub use trace::{trace, DEFAULT_STEP_LIMIT};
pub use types::{Program, TraceResult};
pub use vm::Vm;

/// Decodes a chunk's bytes as a big-endian u16 list, dropping a dangling
/// trailing byte rather than erroring on it.
fn to_u16_be(data: &[u8]) -> Vec<u16> {
    data.chunks_exact(2)
        .map(|c| u16::from_be_bytes([c[0], c[1]]))
        .collect()
}

/// Parses an EMC2 IFF file into its `ORDR`/`DATA` program.
pub fn load_program(data: &[u8]) -> Result<Program> {
    let form = iff::parse(data)?;
    if &form.form_type != b"EMC2" {
        return Err(EmcError::NotEmc2Form(form.form_type));
    }
    let ordr = form
        .chunk(b"ORDR")
        .ok_or(EmcError::MissingChunk("ORDR"))?;
    let data = form
        .chunk(b"DATA")
        .ok_or(EmcError::MissingChunk("DATA"))?;
    Ok(Program {
        ordr: to_u16_be(ordr),
        data: to_u16_be(data),
    })
}
