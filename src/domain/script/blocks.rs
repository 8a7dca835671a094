//! Literal per-step command templates.
//!
//! Blocks prompt with `read` at execution time. Cross-step variables
//! (`PN_KEYFILE`, `PN_PEER`, `PN_LISTING`) always carry a
//! `${VAR:-default}` fallback: in a full run the value exported by the
//! earlier block wins, in a single-step run the default keeps the script
//! self-contained.

use super::{
    MIN_CAPABILITY_MASK, RANDPAY_AMOUNT, RANDPAY_RISK, RANDPAY_TIMEOUT_SECS, RECORD_EXPIRE_DAYS,
};

fn lines(parts: &[&str]) -> String {
    let mut text = parts.join("\n");
    text.push('\n');
    text
}

pub(super) fn header() -> String {
    lines(&[
        "#!/usr/bin/env bash",
        "set -euo pipefail",
        "",
        "echo '=============================================='",
        "echo ' Privateness network: operator onboarding'",
        "echo '=============================================='",
    ])
}

pub(super) fn identity() -> String {
    lines(&[
        "",
        "# Step 1: Identity",
        "echo",
        "echo '[1/5] Identity'",
        "read -r -p 'Identity name [operator]: ' PN_NAME_IN",
        r#"PN_NAME="${PN_NAME_IN:-operator}""#,
        r#"PN_KEYFILE="${PN_NAME}.keys.json""#,
        r#"keygen new --out "${PN_KEYFILE}""#,
        r#"key publish --keyfile "${PN_KEYFILE}""#,
        &format!(
            r#"emercoin-cli name_new "worm:id:${{PN_NAME}}" "$(key show --keyfile "${{PN_KEYFILE}}" --public)" {RECORD_EXPIRE_DAYS}"#
        ),
        "export PN_NAME PN_KEYFILE",
    ])
}

pub(super) fn listing() -> String {
    lines(&[
        "",
        "# Step 2: Blind Listing",
        "echo",
        "echo '[2/5] Blind Listing'",
        "read -r -p 'Listing id [listing-0]: ' PN_LISTING_IN",
        r#"PN_LISTING="${PN_LISTING_IN:-listing-0}""#,
        "read -r -p 'Off-chain commitment hash (hex): ' PN_COMMIT",
        &format!(
            r#"emercoin-cli name_new "listing:${{PN_LISTING}}" "{{\"commit\":\"${{PN_COMMIT}}\",\"caps\":{MIN_CAPABILITY_MASK}}}" {RECORD_EXPIRE_DAYS}"#
        ),
        "export PN_LISTING",
    ])
}

pub(super) fn secure_messaging() -> String {
    lines(&[
        "",
        "# Step 3: Secure Messaging",
        "echo",
        "echo '[3/5] Secure Messaging'",
        "read -r -p 'Peer keyfile [peer.keys.json]: ' PN_PEER_IN",
        r#"PN_PEER="${PN_PEER_IN:-peer.keys.json}""#,
        "read -r -p 'Message file [message.txt]: ' PN_MSG_IN",
        r#"PN_MSG="${PN_MSG_IN:-message.txt}""#,
        r#"ptool_encrypt --peer-pub-keyfile "${PN_PEER}" --in "${PN_MSG}" --out envelope.b64"#,
        r#"ptool_sign --priv-keyfile "${PN_KEYFILE:-operator.keys.json}" --in envelope.b64 --out envelope.sig"#,
        "export PN_PEER",
    ])
}

pub(super) fn randpay() -> String {
    lines(&[
        "",
        "# Step 4: RANDPAY",
        "echo",
        "echo '[4/5] RANDPAY'",
        &format!(
            r#"PN_CHAP="$(emercoin-cli randpay_mkchap {RANDPAY_AMOUNT} {RANDPAY_RISK} {RANDPAY_TIMEOUT_SECS})""#
        ),
        &format!(
            r#"PN_TX="$(emercoin-cli randpay_mktx "${{PN_CHAP}}" {RANDPAY_TIMEOUT_SECS} 0)""#
        ),
        r#"emercoin-cli randpay_accept "${PN_TX}""#,
    ])
}

pub(super) fn verify() -> String {
    lines(&[
        "",
        "# Step 5: Verify & Receipt",
        "echo",
        "echo '[5/5] Verify & Receipt'",
        "read -r -p 'Envelope file [envelope.b64]: ' PN_ENV_IN",
        r#"PN_ENV="${PN_ENV_IN:-envelope.b64}""#,
        "read -r -p 'Signature file [envelope.sig]: ' PN_SIG_IN",
        r#"PN_SIG="${PN_SIG_IN:-envelope.sig}""#,
        r#"ptool_verify --pub-keyfile "${PN_PEER:-peer.keys.json}" --in "${PN_ENV}" --sig "${PN_SIG}""#,
        r#"ptool_decrypt --priv-keyfile "${PN_KEYFILE:-operator.keys.json}" --in "${PN_ENV}" --out message.out"#,
        r#"ptool_receipt --from-priv-keyfile "${PN_KEYFILE:-operator.keys.json}" --from-pub-keyfile "${PN_KEYFILE:-operator.keys.json}" --to-id "${PN_LISTING:-listing-0}" --envelope "${PN_ENV}" --out receipt.json"#,
    ])
}

pub(super) fn trailer() -> String {
    lines(&["", "echo", "echo 'Onboarding complete.'"])
}

pub(super) fn placeholder() -> String {
    lines(&["", "echo 'Step not found'"])
}
