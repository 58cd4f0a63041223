use crate::commands::CmdResult;
use crate::lists;

/// Render the lookup tables, one line per category, options sorted.
pub fn run() -> CmdResult {
    let mut result = CmdResult::default();
    for (name, options) in lists::sorted_entries() {
        result.lines.push(format!("{}: {:?}", name, options));
    }
    result
}
