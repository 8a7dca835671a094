use std::fmt;

/// The onboarding steps, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// Generate an identity keypair and register the WORM record.
    Identity,
    /// Publish a blind listing referencing an off-chain commitment.
    Listing,
    /// Encrypt and sign a message envelope for a peer.
    SecureMessaging,
    /// Open a RANDPAY probabilistic payment channel.
    Randpay,
    /// Verify, decrypt, and issue a signed delivery receipt.
    Verify,
}

/// Number of steps in the onboarding procedure.
pub const TOTAL_STEPS: u8 = Step::ALL.len() as u8;

impl Step {
    /// All steps in ascending wizard order.
    pub const ALL: [Step; 5] =
        [Step::Identity, Step::Listing, Step::SecureMessaging, Step::Randpay, Step::Verify];

    /// First step of the wizard.
    pub const FIRST: Step = Step::Identity;

    /// Last step of the wizard.
    pub const LAST: Step = Step::Verify;

    /// One-based step number.
    pub fn number(&self) -> u8 {
        match self {
            Step::Identity => 1,
            Step::Listing => 2,
            Step::SecureMessaging => 3,
            Step::Randpay => 4,
            Step::Verify => 5,
        }
    }

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            Step::Identity => "Identity",
            Step::Listing => "Blind Listing",
            Step::SecureMessaging => "Secure Messaging",
            Step::Randpay => "RANDPAY",
            Step::Verify => "Verify & Receipt",
        }
    }

    /// Parse a step from its one-based number.
    pub fn from_number(number: u8) -> Option<Step> {
        match number {
            1 => Some(Step::Identity),
            2 => Some(Step::Listing),
            3 => Some(Step::SecureMessaging),
            4 => Some(Step::Randpay),
            5 => Some(Step::Verify),
            _ => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
