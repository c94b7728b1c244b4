//! Macros for declaring closed sets of identifier kinds.

/// Declares an enum of identifier kinds with their default prefixes.
///
/// This generates:
/// - The enum, deriving `Copy`, `Eq`, `Ord` and `Hash`
/// - An [`IdKind`](crate::IdKind) implementation listing every variant
/// - `Display` and `FromStr` using the kind's long name
/// - `Serialize` and `Deserialize` using the kind's long name
///
/// # Example
///
/// ```
/// use pfx_id::{define_kinds, IdKind};
///
/// define_kinds! {
///     pub enum Resource {
///         User = "user" => "u",
///         Invoice = "invoice" => "in",
///     }
/// }
///
/// assert_eq!(Resource::User.default_prefix(), "u");
/// assert_eq!("invoice".parse::<Resource>().unwrap(), Resource::Invoice);
/// ```
#[macro_export]
macro_rules! define_kinds {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $label:literal => $prefix:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::IdKind for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            fn default_prefix(&self) -> &'static str {
                match self {
                    $(Self::$variant => $prefix,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::IdKind::name(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok(Self::$variant),)+
                    other => Err($crate::IdError::UnknownKind(other.to_string())),
                }
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                serializer.serialize_str($crate::IdKind::name(self))
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                let s = <String as $crate::serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err($crate::serde::de::Error::custom)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{IdError, IdKind};

    define_kinds! {
        /// Kinds used by a billing system.
        pub enum Billing {
            Customer = "customer" => "cus",
            /// Payment intents.
            Payment = "payment" => "pi",
        }
    }

    #[test]
    fn test_all_lists_every_variant() {
        assert_eq!(Billing::ALL, &[Billing::Customer, Billing::Payment]);
    }

    #[test]
    fn test_name_and_prefix() {
        assert_eq!(Billing::Customer.name(), "customer");
        assert_eq!(Billing::Payment.default_prefix(), "pi");
        assert_eq!(Billing::Payment.to_string(), "payment");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("customer".parse::<Billing>().unwrap(), Billing::Customer);
        let err = "refund".parse::<Billing>().unwrap_err();
        assert_eq!(err, IdError::UnknownKind("refund".to_string()));
    }

    #[test]
    fn test_json_roundtrip() {
        let json = serde_json::to_string(&Billing::Payment).unwrap();
        assert_eq!(json, "\"payment\"");
        let parsed: Billing = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Billing::Payment);
        assert!(serde_json::from_str::<Billing>("\"refund\"").is_err());
    }
}
