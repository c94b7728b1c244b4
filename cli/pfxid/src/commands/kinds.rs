//! Prefix table listing.

use anyhow::Result;

use super::CommandContext;
use crate::output::{print_kinds, KindRow};

pub fn run(ctx: &CommandContext) -> Result<()> {
    let mut rows: Vec<KindRow<'_>> = ctx
        .generator
        .prefixes()
        .iter()
        .map(|(kind, prefix)| KindRow {
            kind: kind.as_str(),
            prefix,
        })
        .collect();
    rows.sort_by(|a, b| a.kind.cmp(b.kind));

    print_kinds(&rows, ctx.format);
    Ok(())
}
