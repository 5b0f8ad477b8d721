pub mod operand;
pub mod operation;

pub use operand::{OperandError, decode_operand, parse_operand};
pub use operation::Operation;
