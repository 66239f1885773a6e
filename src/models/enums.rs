//! Enumerated labels used by class sessions and payments
//!
//! Documents store these as their Korean display labels. Any label outside the
//! known set is kept verbatim in an `Other` variant so that an existing
//! document survives a read/write cycle unchanged.

use serde::{Deserialize, Serialize};

macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// A label outside the known set, kept as written
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Other(label) => label,
                }
            }

            pub fn from_label(label: &str) -> Self {
                match label {
                    $($label => $name::$variant,)+
                    other => $name::Other(other.to_string()),
                }
            }

            /// True for the fixed set of labels the forms offer
            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::Other(String::new())
            }
        }

        impl From<String> for $name {
            fn from(label: String) -> Self {
                match $name::from_label(&label) {
                    $name::Other(_) => $name::Other(label),
                    known => known,
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(label) => label,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

labelled_enum! {
    /// Length of a class session
    pub enum ClassDuration {
        Minutes30 => "30분",
        Minutes40 => "40분",
        Minutes50 => "50분",
        Minutes60 => "60분",
        Minutes90 => "90분",
        Minutes120 => "120분",
    }
}

labelled_enum! {
    /// How a payment was made
    pub enum PaymentMethod {
        Cash => "현금",
        Card => "카드",
        BankTransfer => "계좌이체",
    }
}

labelled_enum! {
    /// Settlement state of a payment
    pub enum PaymentStatus {
        Completed => "완료",
        Pending => "대기",
        Cancelled => "취소",
    }
}
