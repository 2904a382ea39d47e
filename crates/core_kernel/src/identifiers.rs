//! Typed identifiers
//!
//! Each entity gets its own UUID newtype so a note id can never be passed
//! where a claim id is expected. Display and parsing use a short entity
//! prefix, e.g. `CLM-6f1c...`; serde uses the bare UUID.
//!
//! Production code mints ids through an [`IdGenerator`] so tests can make
//! them deterministic. Only uniqueness is part of the contract.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ports::IdGenerator;

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident => $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Random v4 identifier, for callers without a generator
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Next identifier from `ids`
            pub fn issue(ids: &dyn IdGenerator) -> Self {
                Self(ids.next_id())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Display prefix, without the trailing dash
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "-{}"), self.0)
            }
        }

        /// Accepts `PREFIX-<uuid>` or a bare UUID
        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Uuid::parse_str(raw).map(Self)
            }
        }
    };
}

typed_id! {
    /// A reported claim
    ClaimId => "CLM"
}

typed_id! {
    /// A document attached to a claim
    DocumentId => "DOC"
}

typed_id! {
    /// An audit note on a claim
    NoteId => "NOTE"
}

typed_id! {
    /// A policy written for a policy holder
    PolicyRecordId => "POL"
}
