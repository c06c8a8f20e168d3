// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::{Path, PathBuf};

use path_clean::clean;

pub type FindInParent = fn(&Path, &str) -> Option<PathBuf>;

/// The first `filename` in `dir` or one of its ancestors, nearest first.
pub fn find_in_parent(dir: &Path, filename: &str) -> Option<PathBuf> {
    dir.ancestors()
        .map(|ancestor| ancestor.join(filename))
        .find(|candidate| candidate.exists())
}

/// Where the configuration should be read from.
///
/// An explicit `cli_file` always wins, relative paths being taken from `cwd`.
/// Otherwise the first `default_filename` found walking up from `cwd`, then
/// the one in `default_config_dir`. `None` when there is nowhere left to look.
pub fn resolve_config_path(
    find_in_parent: FindInParent,
    cwd: &Path,
    default_config_dir: Option<&Path>,
    default_filename: &str,
    cli_file: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(cli_file) = cli_file {
        // config is passed in and is absolute
        if cli_file.is_absolute() {
            return Some(cli_file.to_path_buf());
        }

        // config is passed in and is relative
        return Some(clean(cwd.join(cli_file)));
    }

    // search from cwd
    if let Some(found) = find_in_parent(cwd, default_filename) {
        return Some(found);
    }

    default_config_dir.map(|dir| clean(dir.join(default_filename)))
}
