//! Status reports
//!
//! The report list holds registry indices in
//! `ConfigState::status_report_spec`, persisted through the `sr00`..`sr19`
//! slots. Reading `sr` builds the report as a chain of children; writing `sr`
//! replaces the list with the children whose value is true.

use crate::cmd::{CmdPool, ValueType};
use crate::dispatch::{get_cmd, Context};
use crate::error::{ConfigError, Result};
use crate::registry::{
    defaults::STATUS_REPORT_DEFAULTS, descriptor, Index, START_GROUPS, STATUS_REPORT_INDEX,
};
use crate::resolver::index_by_token;
use crate::state::{ConfigState, STATUS_REPORT_LEN};
use core::fmt::Write;

/// Load the default report specification
pub fn init_status_report(cfg: &mut ConfigState) {
    cfg.status_report_spec = [0; STATUS_REPORT_LEN];
    let indices = STATUS_REPORT_DEFAULTS.iter().filter_map(|t| index_by_token(t));
    for (slot, index) in cfg.status_report_spec.iter_mut().zip(indices) {
        *slot = index as u32;
    }
}

/// Whether a spec entry names a reportable value; 0 marks an unused slot
fn is_reportable(entry: u32) -> bool {
    entry != 0 && (entry as Index) < START_GROUPS
}

/// Indices currently in the report, in report order
pub fn spec_indices(cfg: &ConfigState) -> impl Iterator<Item = Index> + '_ {
    cfg.status_report_spec
        .iter()
        .filter(|&&i| is_reportable(i))
        .map(|&i| i as Index)
}

/// Build the current report under an `sr` root
pub fn get_report(ctx: &mut Context<'_>, pool: &mut CmdPool) -> Result<()> {
    let spec = ctx.cfg.status_report_spec;
    pool.reset_to(STATUS_REPORT_INDEX)?.value_type = ValueType::Parent;
    for index in spec.iter().filter(|&&i| is_reportable(i)) {
        let child = get_cmd(ctx, *index as Index)?;
        pool.append(child)?;
    }
    Ok(())
}

/// Replace the report specification from the children of the pool root.
///
/// The previous specification is cleared first. Children with a non-zero
/// value are included, in chain order; the rest are dropped.
pub fn set_report(ctx: &mut Context<'_>, pool: &mut CmdPool) -> Result<()> {
    ctx.cfg.status_report_spec = [0; STATUS_REPORT_LEN];
    let mut next = 0;
    for slot in pool.children() {
        let Some(child) = pool.get(slot) else {
            continue;
        };
        if !child.has_value() || child.value == 0.0 {
            continue;
        }
        let index = match child.index {
            Some(index) => Some(index),
            None => index_by_token(&child.token),
        };
        let Some(index) = index.filter(|&i| descriptor(i).is_some_and(|d| !d.is_group())) else {
            continue;
        };
        if next == STATUS_REPORT_LEN {
            break;
        }
        ctx.cfg.status_report_spec[next] = index as u32;
        next += 1;
    }
    Ok(())
}

/// Write the report as one line: `{"sr":{"line":0,"xpos":1.000,"unit":"mm"}}`
pub fn print_report(
    ctx: &mut Context<'_>,
    pool: &mut CmdPool,
    out: &mut dyn Write,
) -> Result<()> {
    get_report(ctx, pool)?;
    out.write_str("{\"sr\":{")?;
    for (n, slot) in pool.children().enumerate() {
        let child = pool.get(slot).ok_or(ConfigError::PoolExhausted)?;
        if n > 0 {
            out.write_char(',')?;
        }
        write!(out, "\"{}\":", child.token)?;
        match child.value_type {
            ValueType::String => write!(out, "\"{}\"", child.string)?,
            ValueType::Int32 | ValueType::Bool => write!(out, "{}", child.value as i32)?,
            _ => write!(out, "{:.3}", child.value)?,
        }
    }
    out.write_str("}}\n")?;
    Ok(())
}
