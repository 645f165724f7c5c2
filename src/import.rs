// src/import.rs
//
// Bulk paste-import: maps a block of copied tabular text onto the field
// catalogue, starting at the focused field. The whole paste is one atomic,
// history-tracked update; it either applies fully or not at all.

use std::sync::OnceLock;

use log::{info, warn};
use regex::Regex;

use crate::fields::{self, FIELD_ORDER};
use crate::history::ChangeHistory;
use crate::models::ModelInputs;

// Tab, newline and semicolon runs separate values, as do 2+ consecutive
// spaces. Commas are NOT separators: they are thousands separators inside
// a single value.
const SPLIT_PATTERN: &str = r"[\t\n;]+| {2,}";

fn splitter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SPLIT_PATTERN).expect("split pattern is valid"))
}

/// Split pasted text into cleaned value tokens.
///
/// Each token is trimmed and stripped of embedded commas; empty tokens and
/// the literal `undefined`/`null` strings (artifacts of copying from web
/// tables) are discarded.
pub fn tokenize(text: &str) -> Vec<String> {
    splitter()
        .split(text)
        .map(|v| v.trim().replace(',', ""))
        .filter(|v| !v.is_empty() && v != "undefined" && v != "null")
        .collect()
}

/// Apply a paste starting at `start_key`. Tokens map one-to-one onto the
/// catalogue slice from that key; tokens past the last field are dropped
/// silently. Returns the number of fields written (0 means the model and
/// history are untouched).
pub fn apply_paste(
    inputs: &mut ModelInputs,
    history: &mut ChangeHistory,
    start_key: &str,
    text: &str,
) -> usize {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return 0;
    }

    let start = match fields::position(start_key) {
        Some(idx) => idx,
        None => {
            warn!("paste ignored: unknown start field '{}'", start_key);
            return 0;
        }
    };

    // Stage the whole batch into a working copy so a commit is all-or-nothing.
    let mut staged = inputs.clone();
    let mut applied = 0;
    for (offset, token) in tokens.iter().enumerate() {
        match FIELD_ORDER.get(start + offset) {
            Some(spec) => {
                spec.apply(&mut staged, token);
                applied += 1;
            }
            None => break,
        }
    }

    if applied > 0 {
        history.push_snapshot(inputs);
        *inputs = staged;
        info!(
            "paste: applied {} of {} values starting at '{}'",
            applied,
            tokens.len(),
            start_key
        );
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_tabs_newlines_semicolons_and_double_spaces() {
        let tokens = tokenize("100\t200\n300;400  500");
        assert_eq!(tokens, vec!["100", "200", "300", "400", "500"]);
    }

    #[test]
    fn tokenize_keeps_single_spaces_and_strips_commas() {
        // A single space is not a separator; commas are value-internal.
        let tokens = tokenize("1,234.5 extra\t2,000");
        assert_eq!(tokens, vec!["1234.5 extra", "2000"]);
    }

    #[test]
    fn tokenize_drops_empty_and_web_artifacts() {
        let tokens = tokenize("100\t\tundefined\nnull;  \t200");
        assert_eq!(tokens, vec!["100", "200"]);
    }

    #[test]
    fn tokenize_handles_crlf_input() {
        let tokens = tokenize("100\r\n200\r\n300");
        assert_eq!(tokens, vec!["100", "200", "300"]);
    }

    #[test]
    fn paste_fills_fields_in_catalogue_order() {
        let mut inputs = ModelInputs::default();
        let mut history = ChangeHistory::new();

        let applied = apply_paste(&mut inputs, &mut history, "sales-0", "1,000\t2,000\t3000\t4000\t10");
        assert_eq!(applied, 5);
        assert_eq!(inputs.historical.sales, ["1000", "2000", "3000", "4000"].map(String::from));
        // Fifth token lands on the next catalogue entry, salesGrowth-0.
        assert_eq!(inputs.projections.sales_growth[0], 10.0);
    }

    #[test]
    fn paste_is_atomic_and_pushes_exactly_one_snapshot() {
        let mut inputs = ModelInputs::default();
        let mut history = ChangeHistory::new();

        apply_paste(&mut inputs, &mut history, "sales-0", "10\t20\t30");
        assert!(history.can_undo());

        let restored = history.undo(inputs.clone());
        // One undo steps back over the whole batch.
        assert_eq!(restored, ModelInputs::default());
        assert!(!history.can_undo());
    }

    #[test]
    fn paste_with_no_usable_tokens_changes_nothing() {
        let mut inputs = ModelInputs::default();
        let mut history = ChangeHistory::new();

        let applied = apply_paste(&mut inputs, &mut history, "sales-0", " \t undefined \n null ");
        assert_eq!(applied, 0);
        assert_eq!(inputs, ModelInputs::default());
        assert!(!history.can_undo());
    }

    #[test]
    fn paste_with_unknown_start_key_is_a_no_op() {
        let mut inputs = ModelInputs::default();
        let mut history = ChangeHistory::new();

        let applied = apply_paste(&mut inputs, &mut history, "bogus-9", "1\t2\t3");
        assert_eq!(applied, 0);
        assert_eq!(inputs, ModelInputs::default());
        assert!(!history.can_undo());
    }

    #[test]
    fn tokens_past_the_end_of_the_catalogue_are_dropped() {
        let mut inputs = ModelInputs::default();
        let mut history = ChangeHistory::new();

        // projCapexPercent-3 leaves room for exactly two more fields.
        let applied = apply_paste(&mut inputs, &mut history, "projCapexPercent-3", "7\t8\t9\t10");
        assert_eq!(applied, 2);
        assert_eq!(inputs.projections.capex_percent[3], "7");
        assert_eq!(inputs.projections.capex_percent[4], "8");
    }
}
