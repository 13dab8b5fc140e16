//! Human-readable parameter listing
//!
//! Each line is `[token] name  value[unit][suffix]`, aligned in columns:
//!
//! ```text
//! [xfr]  x_feedrate_maximum          2400.000 mm/min
//! [xam]  x_axis_mode                        1 [standard]
//! ```

use crate::cmd::{CmdObject, CmdPool, NAME_LEN, TOKEN_LEN};
use crate::dispatch::{get, get_cmd, Context};
use crate::error::{ConfigError, Result};
use crate::registry::{descriptor, Descriptor, Index, Printer};
use crate::report::print_report;
use crate::units::UnitsMode;
use core::fmt::Write;

/// Width of the value column
const VALUE_WIDTH: usize = 14;

fn label(out: &mut dyn Write, d: &Descriptor) -> core::fmt::Result {
    let pad = (TOKEN_LEN + 1).saturating_sub(d.token.len());
    write!(out, "[{}]{:pad$}{:<name$}", d.token, "", d.name, pad = pad, name = NAME_LEN)
}

/// Print one already-read value using its descriptor's printer
pub fn print_cmd(
    out: &mut dyn Write,
    d: &Descriptor,
    cmd: &CmdObject,
    units: UnitsMode,
) -> Result<()> {
    let precision = d.format.precision as usize;
    match d.printer {
        Printer::Nul | Printer::Group | Printer::Report => return Ok(()),
        Printer::Int => {
            label(out, d)?;
            write!(out, "{:>w$}", cmd.value as i64, w = VALUE_WIDTH)?;
        }
        Printer::Float => {
            label(out, d)?;
            write!(out, "{:>w$.p$}", cmd.value, w = VALUE_WIDTH, p = precision)?;
        }
        Printer::Linear => {
            label(out, d)?;
            write!(out, "{:>w$.p$}", cmd.value, w = VALUE_WIDTH, p = precision)?;
            out.write_str(units.suffix())?;
        }
        Printer::Rotary => {
            label(out, d)?;
            write!(out, "{:>w$.p$}", cmd.value, w = VALUE_WIDTH, p = precision)?;
            out.write_str(UnitsMode::Degrees.suffix())?;
        }
        Printer::AxisMode => {
            label(out, d)?;
            write!(out, "{:>w$} {}", cmd.value as i64, cmd.string, w = VALUE_WIDTH)?;
        }
        Printer::Text => {
            label(out, d)?;
            write!(out, "{:>w$}", cmd.string.as_str(), w = VALUE_WIDTH)?;
        }
    }
    out.write_str(d.format.suffix)?;
    out.write_char('\n')?;
    Ok(())
}

/// Print the current value of `index`.
///
/// Groups print one line per member. The status report prints as a single
/// report line. `pool` is used as scratch space and is reset.
///
/// # Errors
///
/// - [`ConfigError::UnrecognizedCommand`] for an out-of-range index
/// - [`ConfigError::OutputFailure`] if `out` rejects a write
pub fn print(
    ctx: &mut Context<'_>,
    pool: &mut CmdPool,
    index: Index,
    out: &mut dyn Write,
) -> Result<()> {
    let d = descriptor(index).ok_or(ConfigError::UnrecognizedCommand)?;
    let units = ctx.linear_units();
    match d.printer {
        Printer::Report => print_report(ctx, pool, out),
        Printer::Group => {
            pool.reset_to(index)?;
            get(ctx, pool)?;
            for slot in pool.children() {
                let child = pool.get(slot).ok_or(ConfigError::PoolExhausted)?;
                let child_index = child.index.ok_or(ConfigError::UnrecognizedCommand)?;
                let child_d = descriptor(child_index).ok_or(ConfigError::UnrecognizedCommand)?;
                print_cmd(out, child_d, child, units)?;
            }
            Ok(())
        }
        _ => {
            let cmd = get_cmd(ctx, index)?;
            print_cmd(out, d, &cmd, units)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::index_of;
    use crate::state::{BuildInfo, ConfigState};
    use crate::traits::MockMachine;
    use heapless::String;

    const BUILD: BuildInfo = BuildInfo {
        firmware_version: 0.93,
        build_number: 331.02,
    };

    #[test]
    fn test_print_linear_mm_and_inch() {
        let mut cfg = ConfigState::new(BUILD);
        cfg.axes[0].feedrate_max = 2540.0;
        let mut machine = MockMachine::new();
        let mut pool = CmdPool::new();
        let mut out: String<256> = String::new();
        {
            let mut ctx = Context::new(&mut cfg, &mut machine);
            print(&mut ctx, &mut pool, index_of("xfr"), &mut out).unwrap();
        }
        assert!(out.starts_with("[xfr]  x_feedrate_maximum"));
        assert!(out.ends_with("2540.000 mm/min\n"));

        out.clear();
        machine.units = UnitsMode::Inches;
        let mut ctx = Context::new(&mut cfg, &mut machine);
        print(&mut ctx, &mut pool, index_of("xfr"), &mut out).unwrap();
        assert!(out.ends_with("100.000 in/min\n"));
    }

    #[test]
    fn test_print_rotary_and_axis_mode() {
        let mut cfg = ConfigState::new(BUILD);
        cfg.axes[3].velocity_max = 720.0;
        cfg.axes[3].axis_mode = 3;
        let mut machine = MockMachine::new();
        let mut ctx = Context::new(&mut cfg, &mut machine);
        let mut pool = CmdPool::new();
        let mut out: String<256> = String::new();

        print(&mut ctx, &mut pool, index_of("avm"), &mut out).unwrap();
        assert!(out.ends_with("720.000 deg/min\n"));

        out.clear();
        print(&mut ctx, &mut pool, index_of("aam"), &mut out).unwrap();
        assert!(out.ends_with("3 [radius]\n"));
    }

    #[test]
    fn test_print_group_one_line_per_member() {
        let mut cfg = ConfigState::new(BUILD);
        let mut machine = MockMachine::new();
        let mut ctx = Context::new(&mut cfg, &mut machine);
        let mut pool = CmdPool::new();
        let mut out: String<2048> = String::new();

        print(&mut ctx, &mut pool, index_of("g55"), &mut out).unwrap();
        assert_eq!(out.lines().count(), 6);
        assert!(out.lines().next().unwrap().starts_with("[g55x] g55_x_offset"));
        assert!(out.lines().all(|l| l.ends_with(" mm")));
    }

    #[test]
    fn test_print_nul_is_silent() {
        let mut cfg = ConfigState::new(BUILD);
        let mut machine = MockMachine::new();
        let mut ctx = Context::new(&mut cfg, &mut machine);
        let mut pool = CmdPool::new();
        let mut out: String<64> = String::new();

        print(&mut ctx, &mut pool, index_of("sr03"), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_print_overflowing_sink() {
        let mut cfg = ConfigState::new(BUILD);
        let mut machine = MockMachine::new();
        let mut ctx = Context::new(&mut cfg, &mut machine);
        let mut pool = CmdPool::new();
        let mut out: String<8> = String::new();

        assert_eq!(
            print(&mut ctx, &mut pool, index_of("xfr"), &mut out),
            Err(ConfigError::OutputFailure)
        );
    }
}
