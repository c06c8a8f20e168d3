// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::input::{check_declared_count, SharesDocument};
use anyhow::Result;
use sss_config::RecoveryConfig;
use sss_recovery::{SelectionPolicy, ShareSet};

/// One line per share, `*` marking the ones `policy` picks.
pub fn listing(set: &ShareSet, policy: SelectionPolicy) -> Result<Vec<String>> {
    let selected = set.select(policy)?;
    let lines = set
        .shares()
        .map(|share| {
            let mark = if selected.iter().any(|s| s.x() == share.x()) {
                '*'
            } else {
                ' '
            };
            format!("{mark} {share}")
        })
        .collect();
    Ok(lines)
}

pub fn execute(config: &RecoveryConfig) -> Result<()> {
    let set = SharesDocument::read(config.input())?.into_share_set()?;
    check_declared_count(&set, config.strict_count())?;

    println!(
        "n = {} (declared), k = {}, {} shares, selection = {}",
        set.n(),
        set.k(),
        set.len(),
        config.selection()
    );
    for line in listing(&set, config.selection())? {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sss_recovery::Share;

    fn set() -> ShareSet {
        let shares = vec![
            Share::decode(1, "4", 10).unwrap(),
            Share::decode(2, "111", 2).unwrap(),
            Share::decode(6, "213", 4).unwrap(),
        ];
        ShareSet::new(3, 2, shares).unwrap()
    }

    #[test]
    fn test_listing_marks_selection() {
        let lines = listing(&set(), SelectionPolicy::LowestX).unwrap();
        assert_eq!(
            lines,
            [
                "* x=1 value=\"4\" (base 10) y=4",
                "* x=2 value=\"111\" (base 2) y=7",
                "  x=6 value=\"213\" (base 4) y=39",
            ]
        );

        let lines = listing(&set(), SelectionPolicy::HighestX).unwrap();
        assert!(lines[0].starts_with(' '));
        assert!(lines[1].starts_with('*'));
        assert!(lines[2].starts_with('*'));
    }
}
