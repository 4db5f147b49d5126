//! Donation funnel: amount selection, impact tiers, donor validation and the
//! dormitory sponsorship form.

use serde::Serialize;
use thiserror::Error;

use crate::sanitize::{SanitizeProfile, digits_only, sanitize};
use crate::{Notice, looks_like_email};

/// Preset amounts offered as buttons, in rupiah.
pub const PRESET_AMOUNTS: [u64; 5] = [50_000, 100_000, 250_000, 500_000, 1_000_000];

/// Amount selected when the page opens.
pub const DEFAULT_AMOUNT: u64 = 100_000;

/// Longest sponsorship note accepted, in characters.
pub const MAX_NOTE_CHARS: usize = 200;

/// What a donation of at least `threshold` pays for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ImpactTier {
    /// Minimum amount for this tier.
    pub threshold: u64,
    /// Translation key of the impact description.
    pub key: &'static str,
}

/// Impact tiers in ascending threshold order.
pub const IMPACT_TIERS: [ImpactTier; 5] = [
    ImpactTier {
        threshold: 50_000,
        key: "impact50k",
    },
    ImpactTier {
        threshold: 100_000,
        key: "impact100k",
    },
    ImpactTier {
        threshold: 250_000,
        key: "impact250k",
    },
    ImpactTier {
        threshold: 500_000,
        key: "impact500k",
    },
    ImpactTier {
        threshold: 1_000_000,
        key: "impact1m",
    },
];

/// Highest tier reached by `amount`; amounts below every tier get the first.
#[must_use]
pub fn impact_for(amount: u64) -> ImpactTier {
    IMPACT_TIERS
        .iter()
        .rev()
        .find(|tier| amount >= tier.threshold)
        .copied()
        .unwrap_or(IMPACT_TIERS[0])
}

/// Format rupiah with dot thousands separators, e.g. `Rp 1.000.000`.
#[must_use]
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    format!("Rp {grouped}")
}

/// Amount picked by a preset button or typed into the custom field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AmountChoice {
    /// One of [`PRESET_AMOUNTS`].
    Preset(u64),
    /// Digits typed by the donor.
    Custom(String),
}

impl Default for AmountChoice {
    fn default() -> Self {
        Self::Preset(DEFAULT_AMOUNT)
    }
}

impl AmountChoice {
    /// Custom amount from raw input; non-digits are dropped.
    #[must_use]
    pub fn custom(input: &str) -> Self {
        Self::Custom(digits_only(input))
    }

    /// Amount in rupiah; empty or overflowing custom input counts as zero.
    #[must_use]
    pub fn amount(&self) -> u64 {
        match self {
            Self::Preset(amount) => *amount,
            Self::Custom(digits) => digits.parse().unwrap_or(0),
        }
    }

    /// Whether the donor typed the amount.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

/// Reasons a donation or sponsorship form is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DonationError {
    /// Amount is zero.
    #[error("donation amount must be positive")]
    InvalidAmount,
    /// Name or email empty after sanitization.
    #[error("donor name and email are required")]
    MissingDonorInfo,
    /// Email does not look like an address.
    #[error("donor email is malformed")]
    InvalidEmail,
    /// Sponsorship note exceeds [`MAX_NOTE_CHARS`].
    #[error("sponsorship note is too long")]
    NoteTooLong,
}

impl DonationError {
    /// Toast describing the problem.
    #[must_use]
    pub const fn notice(self) -> Notice {
        match self {
            Self::InvalidAmount => Notice::error("invalidAmount", "invalidAmountHint"),
            Self::MissingDonorInfo | Self::InvalidEmail => {
                Notice::error("incompleteInfo", "incompleteInfoHint")
            }
            Self::NoteTooLong => Notice::error("incompleteInfo", "noteTooLong"),
        }
    }
}

/// Raw donation form state as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DonationForm {
    /// Selected amount.
    pub amount: AmountChoice,
    /// Donor name.
    pub name: String,
    /// Donor email.
    pub email: String,
    /// Donor phone, optional.
    pub phone: String,
    /// Message to the foundation, optional.
    pub message: String,
}

/// Sanitized, validated donation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DonationDraft {
    /// Amount in rupiah.
    pub amount: u64,
    /// Donor name.
    pub name: String,
    /// Donor email.
    pub email: String,
    /// Donor phone when given.
    pub phone: Option<String>,
    /// Message when given.
    pub message: Option<String>,
}

impl DonationForm {
    /// Sanitize every field and check the required ones.
    ///
    /// # Errors
    ///
    /// Returns the first [`DonationError`] found, amount first.
    pub fn validate(&self) -> Result<DonationDraft, DonationError> {
        let amount = self.amount.amount();
        if amount == 0 {
            return Err(DonationError::InvalidAmount);
        }
        let name = sanitize(&self.name, SanitizeProfile::Name);
        let email = sanitize(&self.email, SanitizeProfile::FreeText);
        if name.is_empty() || email.is_empty() {
            return Err(DonationError::MissingDonorInfo);
        }
        if !looks_like_email(&email) {
            return Err(DonationError::InvalidEmail);
        }
        Ok(DonationDraft {
            amount,
            name,
            email,
            phone: non_empty(sanitize(&self.phone, SanitizeProfile::FreeText)),
            message: non_empty(sanitize(&self.message, SanitizeProfile::FreeText)),
        })
    }

    /// Validate, then answer with the notice the site shows.
    ///
    /// # Errors
    ///
    /// Returns a [`DonationError`] when validation fails.
    pub fn submit(&self) -> Result<Notice, DonationError> {
        self.validate().map(|_| Notice::feature_not_implemented())
    }
}

/// Dormitory sponsorship form as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SponsorshipForm {
    /// Sponsor name.
    pub name: String,
    /// Amount as typed.
    pub amount: String,
    /// Optional note.
    pub note: String,
}

/// Sanitized, validated sponsorship.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SponsorshipDraft {
    /// Sponsor name.
    pub name: String,
    /// Amount in rupiah.
    pub amount: u64,
    /// Note when given.
    pub note: Option<String>,
}

impl SponsorshipForm {
    /// Sanitize and check the sponsorship fields.
    ///
    /// # Errors
    ///
    /// Returns [`DonationError::MissingDonorInfo`] for an empty name,
    /// [`DonationError::InvalidAmount`] for a zero amount and
    /// [`DonationError::NoteTooLong`] for an oversized note.
    pub fn validate(&self) -> Result<SponsorshipDraft, DonationError> {
        let name = sanitize(&self.name, SanitizeProfile::Name);
        if name.is_empty() {
            return Err(DonationError::MissingDonorInfo);
        }
        let amount = AmountChoice::custom(&self.amount).amount();
        if amount == 0 {
            return Err(DonationError::InvalidAmount);
        }
        let note = sanitize(&self.note, SanitizeProfile::FreeText);
        if note.chars().count() > MAX_NOTE_CHARS {
            return Err(DonationError::NoteTooLong);
        }
        Ok(SponsorshipDraft {
            name,
            amount,
            note: non_empty(note),
        })
    }

    /// Validate, then answer with the notice the site shows.
    ///
    /// # Errors
    ///
    /// Returns a [`DonationError`] when validation fails.
    pub fn submit(&self) -> Result<Notice, DonationError> {
        self.validate().map(|_| Notice::feature_not_implemented())
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> DonationForm {
        DonationForm {
            amount: AmountChoice::default(),
            name: "Budi Santoso".into(),
            email: "budi@example.org".into(),
            phone: String::new(),
            message: String::new(),
        }
    }

    #[test]
    fn impact_tiers_pick_highest_reached() {
        assert_eq!(impact_for(0).key, "impact50k");
        assert_eq!(impact_for(49_999).key, "impact50k");
        assert_eq!(impact_for(100_000).key, "impact100k");
        assert_eq!(impact_for(499_999).key, "impact250k");
        assert_eq!(impact_for(5_000_000).key, "impact1m");
    }

    #[test]
    fn rupiah_formatting_groups_thousands() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(950), "Rp 950");
        assert_eq!(format_rupiah(50_000), "Rp 50.000");
        assert_eq!(format_rupiah(1_000_000), "Rp 1.000.000");
    }

    #[test]
    fn custom_amounts_keep_digits_only() {
        let choice = AmountChoice::custom("Rp 75.000");
        assert!(choice.is_custom());
        assert_eq!(choice.amount(), 75_000);
        assert_eq!(AmountChoice::custom("").amount(), 0);
        assert_eq!(AmountChoice::custom("99999999999999999999999").amount(), 0);
        assert_eq!(AmountChoice::default().amount(), DEFAULT_AMOUNT);
    }

    #[test]
    fn valid_donation_yields_feature_notice() {
        let form = DonationForm {
            message: "  Semoga   bermanfaat <b>!</b> ".into(),
            ..filled()
        };
        let draft = form.validate();
        assert_eq!(
            draft.as_ref().map(|d| d.message.as_deref()),
            Ok(Some("Semoga bermanfaat !"))
        );
        assert_eq!(draft.as_ref().map(|d| d.phone.clone()), Ok(None));
        assert_eq!(form.submit(), Ok(Notice::feature_not_implemented()));
    }

    #[test]
    fn zero_amount_is_rejected_first() {
        let form = DonationForm {
            amount: AmountChoice::custom("abc"),
            name: String::new(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(DonationError::InvalidAmount));
        assert_eq!(
            DonationError::InvalidAmount.notice().title_key,
            "invalidAmount"
        );
    }

    #[test]
    fn name_made_only_of_markup_counts_as_missing() {
        let form = DonationForm {
            name: "<script></script>".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(DonationError::MissingDonorInfo));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let form = DonationForm {
            email: "budi at example".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(DonationError::InvalidEmail));
        assert!(DonationError::InvalidEmail.notice().is_error);
    }

    #[test]
    fn donor_contact_keeps_plus_signs() {
        let form = DonationForm {
            email: "budi+zakat@example.org".into(),
            phone: " +62 812 3456 ".into(),
            ..filled()
        };
        let draft = form.validate();
        assert_eq!(
            draft.as_ref().map(|d| d.email.as_str()),
            Ok("budi+zakat@example.org")
        );
        assert_eq!(
            draft.as_ref().map(|d| d.phone.as_deref()),
            Ok(Some("+62 812 3456"))
        );
    }

    #[test]
    fn donor_email_markup_is_stripped_before_shape_check() {
        let form = DonationForm {
            email: "<b>budi@example.org</b>".into(),
            ..filled()
        };
        assert_eq!(
            form.validate().map(|d| d.email),
            Ok("budi@example.org".to_string())
        );
    }

    #[test]
    fn sponsorship_rules() {
        let ok = SponsorshipForm {
            name: "Aisyah".into(),
            amount: "100.000".into(),
            note: String::new(),
        };
        assert_eq!(
            ok.validate().map(|draft| draft.amount),
            Ok(100_000)
        );
        assert_eq!(ok.submit(), Ok(Notice::feature_not_implemented()));

        let long_note = SponsorshipForm {
            note: "a".repeat(MAX_NOTE_CHARS + 1),
            ..ok.clone()
        };
        assert_eq!(long_note.validate(), Err(DonationError::NoteTooLong));

        let no_amount = SponsorshipForm {
            amount: "0".into(),
            ..ok.clone()
        };
        assert_eq!(no_amount.validate(), Err(DonationError::InvalidAmount));

        let no_name = SponsorshipForm {
            name: "https://spam.example".into(),
            ..ok
        };
        assert_eq!(no_name.validate(), Err(DonationError::MissingDonorInfo));
    }
}
