//! Chain option types

/// Controls whether `null` counts as a present value.
///
/// By default `null` is treated like an absent value: required checks
/// reject it and fallbacks replace it. With `allow_null`, `null` is an
/// ordinary value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullableOptions {
    /// Treat `null` as a present value rather than a missing one
    pub allow_null: bool,
}

impl NullableOptions {
    /// Options with `allow_null` set
    #[must_use]
    pub const fn nullable() -> Self {
        Self { allow_null: true }
    }
}
