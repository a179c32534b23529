//! Status enumerations for each list view and their badge categories.
//!
//! Every status type accepts any string on deserialization. Literals the view
//! does not know about are kept in an `Unknown` variant so they can still be
//! displayed, and they always map to [`BadgeVariant::Secondary`].

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Display category of a status badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BadgeVariant {
    Success,
    Warning,
    #[default]
    Secondary,
    Destructive,
    Accent,
}

impl BadgeVariant {
    pub const ALL: [Self; 5] = [
        Self::Success,
        Self::Warning,
        Self::Secondary,
        Self::Destructive,
        Self::Accent,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Accent => "accent",
        }
    }
}

impl Display for BadgeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A status value that can be drawn as a badge.
pub trait StatusVariant {
    /// Badge category for this status. Total over all values.
    fn variant(&self) -> BadgeVariant;

    /// Text shown inside the badge.
    fn label(&self) -> &str;
}

/// Declares a string-backed status enum with a catch-all `Unknown` arm.
macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $literal:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Unknown(String),
        }

        impl $name {
            /// Every known literal, in declaration order.
            pub const KNOWN: &'static [&'static str] = &[$($literal),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $literal,)+
                    Self::Unknown(raw) => raw.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                match raw {
                    $($literal => Self::$variant,)+
                    other => Self::Unknown(other.to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match Self::from(raw.as_str()) {
                    Self::Unknown(_) => Self::Unknown(raw),
                    known => known,
                }
            }
        }

        impl From<$name> for String {
            fn from(status: $name) -> Self {
                match status {
                    $name::Unknown(raw) => raw,
                    known => known.as_str().to_owned(),
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

status_enum! {
    /// Status of a Master Production Schedule work order.
    MpsStatus {
        Completed => "Completed",
        InProgress => "In Progress",
        Planned => "Planned",
    }
}

status_enum! {
    /// Status of a material requirement line.
    MrpStatus {
        Required => "Required",
        Ordered => "Ordered",
        Received => "Received",
        Shortage => "Shortage",
    }
}

status_enum! {
    /// Status of a purchase order.
    PoStatus {
        PendingApproval => "Pending Approval",
        SentToVendor => "Sent to Vendor",
        Fulfilled => "Fulfilled",
    }
}

impl StatusVariant for MpsStatus {
    fn variant(&self) -> BadgeVariant {
        match self {
            Self::Completed => BadgeVariant::Success,
            Self::InProgress => BadgeVariant::Warning,
            Self::Planned | Self::Unknown(_) => BadgeVariant::Secondary,
        }
    }

    fn label(&self) -> &str {
        self.as_str()
    }
}

impl StatusVariant for MrpStatus {
    fn variant(&self) -> BadgeVariant {
        match self {
            Self::Received => BadgeVariant::Success,
            Self::Ordered => BadgeVariant::Warning,
            Self::Shortage => BadgeVariant::Destructive,
            Self::Required | Self::Unknown(_) => BadgeVariant::Secondary,
        }
    }

    fn label(&self) -> &str {
        self.as_str()
    }
}

impl StatusVariant for PoStatus {
    fn variant(&self) -> BadgeVariant {
        match self {
            Self::Fulfilled => BadgeVariant::Success,
            Self::SentToVendor => BadgeVariant::Accent,
            Self::PendingApproval => BadgeVariant::Warning,
            Self::Unknown(_) => BadgeVariant::Secondary,
        }
    }

    fn label(&self) -> &str {
        self.as_str()
    }
}

/// Number of statuses per badge category, in [`BadgeVariant::ALL`] order.
pub fn variant_counts<'a, S>(statuses: impl IntoIterator<Item = &'a S>) -> [(BadgeVariant, usize); 5]
where
    S: StatusVariant + 'a,
{
    let mut counts = BadgeVariant::ALL.map(|variant| (variant, 0));
    for status in statuses {
        let variant = status.variant();
        if let Some((_, count)) = counts.iter_mut().find(|(v, _)| *v == variant) {
            *count += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mps_mapping() {
        assert_eq!(MpsStatus::from("Completed").variant(), BadgeVariant::Success);
        assert_eq!(MpsStatus::from("In Progress").variant(), BadgeVariant::Warning);
        assert_eq!(MpsStatus::from("Planned").variant(), BadgeVariant::Secondary);
        assert_eq!(MpsStatus::from("Unknown").variant(), BadgeVariant::Secondary);
    }

    #[test]
    fn mrp_mapping() {
        assert_eq!(MrpStatus::from("Received").variant(), BadgeVariant::Success);
        assert_eq!(MrpStatus::from("Ordered").variant(), BadgeVariant::Warning);
        assert_eq!(MrpStatus::from("Required").variant(), BadgeVariant::Secondary);
        assert_eq!(MrpStatus::from("Shortage").variant(), BadgeVariant::Destructive);
        assert_eq!(MrpStatus::from("Backordered").variant(), BadgeVariant::Secondary);
    }

    #[test]
    fn po_mapping() {
        assert_eq!(PoStatus::from("Fulfilled").variant(), BadgeVariant::Success);
        assert_eq!(PoStatus::from("Sent to Vendor").variant(), BadgeVariant::Accent);
        assert_eq!(PoStatus::from("Pending Approval").variant(), BadgeVariant::Warning);
        assert_eq!(PoStatus::from("Cancelled").variant(), BadgeVariant::Secondary);
    }

    #[test]
    fn unknown_literals_are_preserved() {
        let status = MpsStatus::from("On Hold".to_owned());
        assert_eq!(status, MpsStatus::Unknown("On Hold".to_owned()));
        assert_eq!(status.label(), "On Hold");
        assert_eq!(String::from(status), "On Hold");
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(
            MpsStatus::from("completed"),
            MpsStatus::Unknown("completed".to_owned())
        );
    }

    #[test]
    fn mapper_is_total_for_arbitrary_input() {
        let inputs = ["", " ", "Completed ", "IN PROGRESS", "\u{1F6E0}\u{0}", "Fulfilled"];
        for raw in inputs {
            assert!(BadgeVariant::ALL.contains(&MpsStatus::from(raw).variant()));
            assert!(BadgeVariant::ALL.contains(&MrpStatus::from(raw).variant()));
            assert!(BadgeVariant::ALL.contains(&PoStatus::from(raw).variant()));
        }
    }

    #[test]
    fn known_literals_round_trip_through_serde() {
        for literal in MrpStatus::KNOWN {
            let json = serde_json::to_string(literal).expect("serialize literal");
            let status: MrpStatus = serde_json::from_str(&json).expect("deserialize status");
            assert!(!matches!(status, MrpStatus::Unknown(_)), "{literal}");
            assert_eq!(serde_json::to_string(&status).expect("serialize status"), json);
        }
    }

    #[test]
    fn counts_follow_badge_order() {
        let statuses = [
            PoStatus::Fulfilled,
            PoStatus::SentToVendor,
            PoStatus::Fulfilled,
            PoStatus::from("Cancelled"),
        ];
        let counts = variant_counts(&statuses);
        assert_eq!(
            counts,
            [
                (BadgeVariant::Success, 2),
                (BadgeVariant::Warning, 0),
                (BadgeVariant::Secondary, 1),
                (BadgeVariant::Destructive, 0),
                (BadgeVariant::Accent, 1),
            ]
        );
    }

    #[test]
    fn default_variant_is_secondary() {
        assert_eq!(BadgeVariant::default(), BadgeVariant::Secondary);
        assert_eq!(BadgeVariant::Accent.to_string(), "accent");
    }
}
