// Integer to enum coercion that reports failure instead of panicking

use std::fmt::Debug;

use crate::config::KitConfig;

/// An enum backed by a fixed integer representation
///
/// Implementors describe which representation values name a member. The
/// representation bounds which integers can be coerced at all.
pub trait IndexedEnum: Sized + Copy + Debug {
    /// Underlying integer type, e.g. `u8` for `#[repr(u8)]`
    type Repr: Copy + Debug + PartialEq + TryFrom<i64>;

    /// Look up the declared member for a representation value
    fn from_repr(repr: Self::Repr) -> Option<Self>;
}

/// Result of a successful coercion
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnumValue<E: IndexedEnum> {
    /// The index names a declared member
    Named(E),
    /// The index fits the representation but names no member
    Unnamed(E::Repr),
}

impl<E: IndexedEnum> EnumValue<E> {
    /// The declared member, if any
    pub fn named(self) -> Option<E> {
        match self {
            Self::Named(value) => Some(value),
            Self::Unnamed(_) => None,
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }
}

/// How undeclared indices are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumCoercion {
    /// Any index that fits the representation succeeds
    #[default]
    Lenient,
    /// Only indices of declared members succeed
    Strict,
}

impl EnumCoercion {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }

    pub fn from_config(config: &KitConfig) -> Self {
        Self::from_strict(config.strict_enums)
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// Coerce `index` into `E`
///
/// Returns `None` when the index does not fit `E::Repr`, or, in strict mode,
/// when it names no declared member.
pub fn try_convert<E: IndexedEnum>(index: i64, mode: EnumCoercion) -> Option<EnumValue<E>> {
    let Ok(repr) = E::Repr::try_from(index) else {
        log::debug!(
            "Index {} does not fit the representation of {}",
            index,
            std::any::type_name::<E>()
        );
        return None;
    };

    match (E::from_repr(repr), mode) {
        (Some(value), _) => Some(EnumValue::Named(value)),
        (None, EnumCoercion::Lenient) => Some(EnumValue::Unnamed(repr)),
        (None, EnumCoercion::Strict) => {
            log::debug!(
                "Index {} names no member of {}",
                index,
                std::any::type_name::<E>()
            );
            None
        }
    }
}

/// Strictly coerce `index` into a declared member of `E`
pub fn try_named<E: IndexedEnum>(index: i64) -> Option<E> {
    try_convert::<E>(index, EnumCoercion::Strict).and_then(EnumValue::named)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[repr(u8)]
    enum Weapon {
        Sword = 0,
        Bow = 1,
        Staff = 4,
    }

    impl IndexedEnum for Weapon {
        type Repr = u8;

        fn from_repr(repr: u8) -> Option<Self> {
            match repr {
                0 => Some(Self::Sword),
                1 => Some(Self::Bow),
                4 => Some(Self::Staff),
                _ => None,
            }
        }
    }

    #[test]
    fn test_declared_members_convert_in_both_modes() {
        for mode in [EnumCoercion::Lenient, EnumCoercion::Strict] {
            assert_eq!(
                try_convert::<Weapon>(4, mode),
                Some(EnumValue::Named(Weapon::Staff))
            );
            assert_eq!(
                try_convert::<Weapon>(0, mode),
                Some(EnumValue::Named(Weapon::Sword))
            );
        }
    }

    #[test]
    fn test_lenient_accepts_undeclared_index() {
        let value = try_convert::<Weapon>(2, EnumCoercion::Lenient);
        assert_eq!(value, Some(EnumValue::Unnamed(2)));
        assert!(!value.unwrap().is_named());
        assert_eq!(value.unwrap().named(), None);
    }

    #[test]
    fn test_strict_rejects_undeclared_index() {
        assert_eq!(try_convert::<Weapon>(2, EnumCoercion::Strict), None);
        assert_eq!(try_named::<Weapon>(3), None);
        assert_eq!(try_named::<Weapon>(1), Some(Weapon::Bow));
    }

    #[test]
    fn test_unrepresentable_index_fails_in_both_modes() {
        for mode in [EnumCoercion::Lenient, EnumCoercion::Strict] {
            assert_eq!(try_convert::<Weapon>(-1, mode), None);
            assert_eq!(try_convert::<Weapon>(256, mode), None);
        }
    }

    #[test]
    fn test_coercion_mode_from_strict() {
        assert_eq!(EnumCoercion::from_strict(true), EnumCoercion::Strict);
        assert_eq!(EnumCoercion::from_strict(false), EnumCoercion::Lenient);
        assert_eq!(EnumCoercion::default(), EnumCoercion::Lenient);
        assert!(EnumCoercion::Strict.is_strict());
    }

    #[test]
    fn test_coercion_mode_from_config() {
        let mut config = KitConfig::default();
        assert_eq!(EnumCoercion::from_config(&config), EnumCoercion::Lenient);
        config.strict_enums = true;
        assert_eq!(EnumCoercion::from_config(&config), EnumCoercion::Strict);
        assert_eq!(try_convert::<Weapon>(2, EnumCoercion::from_config(&config)), None);
    }
}
