pub use crate::bits;
pub use crate::error::InvariantError;
pub use crate::order::{PackedOrder, PackedOrder8, PackedOrder16, field_bits};
pub use crate::word::Word;
