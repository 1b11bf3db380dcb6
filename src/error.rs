use thiserror::Error;

/// Errors surfaced by the packed memory array.
///
/// The core never prints or logs; every failure is reported to the caller
/// through this type.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum PmaError {
    /// An equivalent item already occupies a slot. The store is unchanged.
    #[error("an equivalent item is already present")]
    DuplicateKey,

    /// Doubling the backing array would overflow the address space.
    #[error("the backing array cannot grow any further")]
    CapacityExhausted,
}
