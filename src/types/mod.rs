pub mod flat_seq;
pub mod mapping;
mod value;

pub use self::flat_seq::FlatSeq;
pub use self::mapping::Mapping;
pub use self::value::{Value, ValueKind, Sequence, Integer, Boolean, Decimal, Error as ValueError};
