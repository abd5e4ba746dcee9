mod memory;
mod moka;
mod null;

pub use self::memory::{DEFAULT_SWEEP_THRESHOLD, DEFAULT_TTL, TtlExistenceCache};
pub use self::moka::MokaExistenceCache;
pub use self::null::NullExistenceCache;
