//! Group expansion
//!
//! A group request reads or writes several parameters at once. Axis, motor
//! and coordinate offset groups gather the entries tagged with their
//! [`GroupTag`](crate::registry::GroupTag); children are emitted with the
//! group prefix stripped (`fr` inside `x`). The `sys` and `?` groups use
//! explicit token lists and keep full tokens.
//!
//! Children always come out in ascending registry order.

use crate::cmd::{CmdPool, ValueType, CMD_MAX_OBJECTS};
use crate::dispatch::{get_cmd, set_value, Context};
use crate::error::{ConfigError, Result};
use crate::registry::{self, descriptor, Getter, Index, REGISTRY};
use crate::resolver::resolve_child;
use heapless::Vec;

/// Tokens gathered by the `sys` group
pub const SYSTEM_GROUP: [&str; 18] = [
    "fv", "fb", "si", "gpl", "gun", "gco", "gpa", "gdi", "ea", "ja", "ml", "ma", "mt", "ic",
    "il", "ec", "ee", "ex",
];

/// Tokens kept out of the `sys` group
pub const SYSTEM_GROUP_EXCLUDE: [&str; 1] = ["gc"];

/// Tokens gathered by the `?` group
pub const QUERY_GROUP: [&str; 7] = ["xpos", "ypos", "zpos", "apos", "bpos", "cpos", "stat"];

/// Member indices of a group, ascending
pub fn members(group: Index) -> Result<Vec<Index, CMD_MAX_OBJECTS>> {
    let d = descriptor(group).ok_or(ConfigError::UnrecognizedCommand)?;
    let mut out = Vec::new();
    let mut push = |i: Index| out.push(i).map_err(|_| ConfigError::PoolExhausted);
    match d.getter {
        Getter::Group => {
            for i in registry::group_members(group) {
                push(i)?;
            }
        }
        Getter::System => {
            for (i, m) in REGISTRY[..group].iter().enumerate() {
                if SYSTEM_GROUP.contains(&m.token) && !SYSTEM_GROUP_EXCLUDE.contains(&m.token) {
                    push(i)?;
                }
            }
        }
        Getter::Query => {
            for (i, m) in REGISTRY[..group].iter().enumerate() {
                if QUERY_GROUP.contains(&m.token) {
                    push(i)?;
                }
            }
        }
        _ => return Err(ConfigError::UnrecognizedCommand),
    }
    Ok(out)
}

/// Length of the prefix stripped from child tokens
fn prefix_len(group: Index) -> usize {
    match descriptor(group) {
        Some(d) if d.getter == Getter::Group => d.token.len(),
        _ => 0,
    }
}

/// Expand the group bound to the pool root into one child per member.
///
/// # Errors
///
/// - [`ConfigError::UnrecognizedCommand`] if the root is not a group
/// - [`ConfigError::PoolExhausted`] if the pool cannot hold every member
pub fn get_group(ctx: &mut Context<'_>, pool: &mut CmdPool) -> Result<()> {
    let group = pool.root().index.ok_or(ConfigError::UnrecognizedCommand)?;
    let strip = prefix_len(group);
    let members = members(group)?;

    pool.reset_to(group)?.value_type = ValueType::Parent;
    for i in members {
        let mut child = get_cmd(ctx, i)?;
        let token = REGISTRY[i].token;
        child.set_token(token.get(strip..).unwrap_or(token));
        pool.append(child)?;
    }
    Ok(())
}

/// Apply every child of the group bound to the pool root.
///
/// Children are applied in ascending registry index order, whatever order
/// they arrive in. Each child keeps its own status; a child that is not a
/// member of the group is marked unrecognized and skipped. The group itself
/// succeeds once the loop completes.
pub fn set_group(ctx: &mut Context<'_>, pool: &mut CmdPool) -> Result<()> {
    let group = pool.root().index.ok_or(ConfigError::UnrecognizedCommand)?;
    let members = members(group)?;

    let mut order: Vec<(Index, usize), CMD_MAX_OBJECTS> = Vec::new();
    let slots: Vec<usize, CMD_MAX_OBJECTS> = pool.children().collect();
    for slot in slots {
        let Some(child) = pool.get_mut(slot) else {
            continue;
        };
        let index = match child.index {
            Some(index) => Ok(index),
            None => resolve_child(group, &child.token),
        };
        match index {
            Ok(index) if members.contains(&index) => {
                let _ = order.push((index, slot));
            }
            _ => child.status = Err(ConfigError::UnrecognizedCommand),
        }
    }
    order.sort_unstable_by_key(|&(index, _)| index);

    for (index, slot) in order {
        if let Some(child) = pool.get_mut(slot) {
            // per-child status is recorded on the child
            let _ = set_value(ctx, index, child);
        }
    }
    Ok(())
}
