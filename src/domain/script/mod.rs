//! Deterministic composition of the onboarding shell script.
//!
//! Composition is a pure function of the requested scope (one step or all
//! steps). Wizard progress never filters or reorders blocks. Prompts inside
//! the blocks are resolved when the script runs, not when it is composed.

mod blocks;

use crate::domain::step::Step;

/// RANDPAY payment amount baked into the channel-open invocation.
pub const RANDPAY_AMOUNT: u32 = 1;
/// RANDPAY risk denominator: payment succeeds with probability 1/6.
pub const RANDPAY_RISK: u32 = 6;
/// RANDPAY channel timeout in seconds (6 hours).
pub const RANDPAY_TIMEOUT_SECS: u32 = 21_600;
/// Minimum capability flags bitmask advertised in the blind listing record.
pub const MIN_CAPABILITY_MASK: u32 = 7;
/// Name-registry record expiration in days, for both `name_new` calls.
pub const RECORD_EXPIRE_DAYS: u32 = 365;

/// Stateless composer for the onboarding script.
pub struct ScriptComposer;

impl ScriptComposer {
    /// Fixed preamble: shebang, strict-mode flags, banner.
    pub fn header() -> String {
        blocks::header()
    }

    /// Command block for one step.
    ///
    /// An unrecognized step number degrades to a visible no-op placeholder
    /// rather than an error.
    pub fn block(number: u8) -> String {
        match Step::from_number(number) {
            Some(Step::Identity) => blocks::identity(),
            Some(Step::Listing) => blocks::listing(),
            Some(Step::SecureMessaging) => blocks::secure_messaging(),
            Some(Step::Randpay) => blocks::randpay(),
            Some(Step::Verify) => blocks::verify(),
            None => blocks::placeholder(),
        }
    }

    /// Self-contained script for a single step: header plus that step's block.
    ///
    /// Every variable the block expects an earlier step to have exported
    /// carries a parameter-expansion default, so the script runs in isolation.
    pub fn compose_step(number: u8) -> String {
        format!("{}{}", Self::header(), Self::block(number))
    }

    /// Full-run script: header, all five blocks in ascending step order, and
    /// the completion trailer.
    ///
    /// Order is fixed: later blocks pick up variables the earlier blocks
    /// exported in the same shell process.
    pub fn compose_all() -> String {
        let mut script = Self::header();
        for step in Step::ALL {
            script.push_str(&Self::block(step.number()));
        }
        script.push_str(&blocks::trailer());
        script
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_strict_mode_bash() {
        let header = ScriptComposer::header();
        assert!(header.starts_with("#!/usr/bin/env bash\n"));
        assert!(header.contains("set -euo pipefail"));
    }

    #[test]
    fn compose_all_has_blocks_in_ascending_order() {
        let script = ScriptComposer::compose_all();
        let positions: Vec<usize> = (1..=5)
            .map(|n| {
                script
                    .find(&format!("# Step {n}:"))
                    .unwrap_or_else(|| panic!("step {n} block missing"))
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn compose_all_has_one_header_and_one_trailer() {
        let script = ScriptComposer::compose_all();
        assert_eq!(script.matches("#!/usr/bin/env bash").count(), 1);
        assert_eq!(script.matches("Onboarding complete").count(), 1);
        assert!(script.ends_with('\n'));
    }

    #[test]
    fn single_step_composition_omits_the_trailer() {
        for n in 1..=5 {
            assert!(!ScriptComposer::compose_step(n).contains("Onboarding complete"));
        }
    }

    #[test]
    fn compose_step_is_header_plus_block() {
        for n in 1..=5 {
            let expected = format!("{}{}", ScriptComposer::header(), ScriptComposer::block(n));
            assert_eq!(ScriptComposer::compose_step(n), expected);
        }
    }

    #[test]
    fn unknown_block_degrades_to_placeholder() {
        assert!(ScriptComposer::block(0).contains("echo 'Step not found'"));
        assert!(ScriptComposer::block(99).contains("echo 'Step not found'"));
    }

    #[test]
    fn messaging_step_runs_in_isolation() {
        // Every variable block 3 references but does not prompt for must have
        // a parameter-expansion default.
        let block = ScriptComposer::block(3);
        assert!(block.contains("${PN_KEYFILE:-"));
        assert!(!block.contains("${PN_KEYFILE}"));
    }

    #[test]
    fn randpay_block_carries_the_fixed_policy_parameters() {
        let block = ScriptComposer::block(4);
        assert!(block.contains("randpay_mkchap 1 6 21600"));
        assert!(block.contains("randpay_mktx \"${PN_CHAP}\" 21600 0"));
    }

    #[test]
    fn fixed_parameters_do_not_drift_between_scopes() {
        let single = ScriptComposer::compose_step(4);
        let all = ScriptComposer::compose_all();
        for needle in ["randpay_mkchap 1 6 21600", "21600 0"] {
            assert!(single.contains(needle));
            assert!(all.contains(needle));
        }
        assert_eq!(all.matches(r#"\"caps\":7"#).count(), 1);
        assert_eq!(all.matches(" 365\n").count(), 2);
    }
}
