//! Parameter registry
//!
//! The registry is an immutable, ordered table of [`Descriptor`]s. Each
//! descriptor names its token, friendly name, value kind, accessor bindings,
//! backing field and compiled default. Registry indices are stable within a
//! build and key the persisted NVM slots.
//!
//! # Layout
//!
//! - Single-valued entries come first, group entries last
//! - The status report slots (`sr00`..`sr19`) are the last single-valued run
//! - Group membership only ever looks at entries below the group's own index
//!
//! These ordering rules are checked at compile time.

pub mod defaults;
mod table;

use crate::cmd::CMD_MAX_OBJECTS;
use crate::state::{Target, AXIS_LETTERS, STATUS_REPORT_LEN};
use crate::traits::SerialFlags;
use bitflags::bitflags;

pub use table::TABLE as REGISTRY;

/// Position of a descriptor in the registry
pub type Index = usize;

/// Number of registry entries
pub const REGISTRY_LEN: usize = table::TABLE_LEN;

/// Number of group entries at the end of the registry
pub const GROUP_COUNT: usize = 18;

/// First group index; everything below is single-valued
pub const START_GROUPS: Index = REGISTRY_LEN - GROUP_COUNT;

/// First status report slot (`sr00`)
pub const START_STATUS_SLOTS: Index = START_GROUPS - STATUS_REPORT_LEN;

/// Slot holding the config version stamp (`fc`)
pub const CONFIG_VERSION_INDEX: Index = 0;

/// Status report entry (`sr`)
pub const STATUS_REPORT_INDEX: Index = index_of("sr");

/// Gcode block entry (`gc`)
pub const GCODE_INDEX: Index = index_of("gc");

/// Data type of a descriptor's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// No stored value; action or placeholder
    Null,
    Byte,
    Int32,
    /// Float stored verbatim (includes rotary degrees)
    Float,
    /// Float stored in mm, converted in inch mode
    FloatUnits,
    String,
    Group,
}

/// Read accessor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Getter {
    Nul,
    Byte,
    Int,
    Float,
    FloatUnits,
    MachineState,
    Units,
    AxisMode,
    StatusReport,
    StatusInterval,
    Gcode,
    Velocity,
    MachinePosition,
    WorkPosition,
    Group,
    System,
    Query,
}

/// Write accessor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setter {
    /// Read-only entry; set is accepted and ignored
    Nul,
    Byte,
    Int,
    Float,
    FloatUnits,
    StatusReport,
    StatusInterval,
    RunGcode,
    /// Step angle; recomputes steps per unit
    StepAngle,
    /// Travel per revolution (unit converted); recomputes steps per unit
    TravelPerRev,
    /// Recomputes steps per unit and notifies the stepper driver
    Microsteps,
    /// Notifies the stepper driver
    Polarity,
    /// Stores the flag and issues a transport control call
    Serial(SerialFlags),
    Group,
}

/// Print accessor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Printer {
    Nul,
    Int,
    Float,
    /// Float followed by the active linear unit
    Linear,
    /// Float followed by degrees
    Rotary,
    AxisMode,
    /// String payload (`unit`, `gc`)
    Text,
    /// Status report line
    Report,
    Group,
}

/// Group a single-valued descriptor belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupTag {
    None,
    Axis(u8),
    Motor(u8),
    Offset(u8),
}

bitflags! {
    /// Descriptor flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ParamFlags: u8 {
        /// Setter is a no-op
        const READ_ONLY = 0b0000_0001;
        /// Always-running action; never loaded from or written to NVM
        const ACTION    = 0b0000_0010;
    }
}

/// Print format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    pub precision: u8,
    /// Text after the value (and after the unit, if any)
    pub suffix: &'static str,
}

/// Immutable parameter descriptor
#[derive(Debug, Clone, Copy)]
pub struct Descriptor {
    pub token: &'static str,
    pub name: &'static str,
    pub kind: ValueKind,
    pub getter: Getter,
    pub setter: Setter,
    pub printer: Printer,
    pub target: Target,
    pub default: f32,
    pub group: GroupTag,
    pub flags: ParamFlags,
    pub format: Format,
}

impl Descriptor {
    const fn base(token: &'static str, name: &'static str) -> Self {
        Self {
            token,
            name,
            kind: ValueKind::Null,
            getter: Getter::Nul,
            setter: Setter::Nul,
            printer: Printer::Nul,
            target: Target::None,
            default: 0.0,
            group: GroupTag::None,
            flags: ParamFlags::empty(),
            format: Format {
                precision: 0,
                suffix: "",
            },
        }
    }

    pub(crate) const fn byte(
        token: &'static str,
        name: &'static str,
        target: Target,
        default: f32,
    ) -> Self {
        let mut d = Self::base(token, name);
        d.kind = ValueKind::Byte;
        d.getter = Getter::Byte;
        d.setter = Setter::Byte;
        d.printer = Printer::Int;
        d.target = target;
        d.default = default;
        d
    }

    pub(crate) const fn int(
        token: &'static str,
        name: &'static str,
        target: Target,
        default: f32,
    ) -> Self {
        let mut d = Self::base(token, name);
        d.kind = ValueKind::Int32;
        d.getter = Getter::Int;
        d.setter = Setter::Int;
        d.printer = Printer::Int;
        d.target = target;
        d.default = default;
        d
    }

    pub(crate) const fn float(
        token: &'static str,
        name: &'static str,
        target: Target,
        default: f32,
        precision: u8,
    ) -> Self {
        let mut d = Self::base(token, name);
        d.kind = ValueKind::Float;
        d.getter = Getter::Float;
        d.setter = Setter::Float;
        d.printer = Printer::Float;
        d.target = target;
        d.default = default;
        d.format.precision = precision;
        d
    }

    pub(crate) const fn linear(
        token: &'static str,
        name: &'static str,
        target: Target,
        default: f32,
    ) -> Self {
        let mut d = Self::base(token, name);
        d.kind = ValueKind::FloatUnits;
        d.getter = Getter::FloatUnits;
        d.setter = Setter::FloatUnits;
        d.printer = Printer::Linear;
        d.target = target;
        d.default = default;
        d.format.precision = 3;
        d
    }

    pub(crate) const fn rotary(
        token: &'static str,
        name: &'static str,
        target: Target,
        default: f32,
    ) -> Self {
        let mut d = Self::float(token, name, target, default, 3);
        d.printer = Printer::Rotary;
        d
    }

    /// Axis value; linear on X/Y/Z, plain degrees on A/B/C
    pub(crate) const fn axis_value(
        axis: u8,
        token: &'static str,
        name: &'static str,
        target: Target,
        default: f32,
    ) -> Self {
        let d = if axis < crate::state::FIRST_ROTARY_AXIS {
            Self::linear(token, name, target, default)
        } else {
            Self::rotary(token, name, target, default)
        };
        d.in_group(GroupTag::Axis(axis))
    }

    /// Live, read-only value produced by a specialized getter
    pub(crate) const fn derived(
        token: &'static str,
        name: &'static str,
        kind: ValueKind,
        getter: Getter,
        printer: Printer,
    ) -> Self {
        let mut d = Self::base(token, name);
        d.kind = kind;
        d.getter = getter;
        d.printer = printer;
        d.flags = ParamFlags::READ_ONLY;
        d.format.precision = 3;
        d
    }

    pub(crate) const fn group(token: &'static str, name: &'static str, tag: GroupTag) -> Self {
        let mut d = Self::base(token, name);
        d.kind = ValueKind::Group;
        d.getter = Getter::Group;
        d.setter = Setter::Group;
        d.printer = Printer::Group;
        d.group = tag;
        d
    }

    pub(crate) const fn in_group(mut self, tag: GroupTag) -> Self {
        self.group = tag;
        self
    }

    pub(crate) const fn with_setter(mut self, setter: Setter) -> Self {
        self.setter = setter;
        self.flags = self.flags.difference(ParamFlags::READ_ONLY);
        self
    }

    pub(crate) const fn with_getter(mut self, getter: Getter) -> Self {
        self.getter = getter;
        self
    }

    pub(crate) const fn with_printer(mut self, printer: Printer) -> Self {
        self.printer = printer;
        self
    }

    pub(crate) const fn read_only(mut self) -> Self {
        self.setter = Setter::Nul;
        self.flags = self.flags.union(ParamFlags::READ_ONLY);
        self
    }

    pub(crate) const fn action(mut self) -> Self {
        self.flags = self.flags.union(ParamFlags::ACTION);
        self
    }

    pub(crate) const fn precision(mut self, precision: u8) -> Self {
        self.format.precision = precision;
        self
    }

    pub(crate) const fn suffix(mut self, suffix: &'static str) -> Self {
        self.format.suffix = suffix;
        self
    }

    pub fn is_group(&self) -> bool {
        self.kind == ValueKind::Group
    }

    /// Whether the value is loaded from and written to NVM
    pub fn is_persisted(&self) -> bool {
        !self.is_group() && !self.flags.contains(ParamFlags::ACTION)
    }
}

/// Look up a descriptor; `None` for out-of-range indices
pub fn descriptor(index: Index) -> Option<&'static Descriptor> {
    REGISTRY.get(index)
}

/// Highest valid index plus one
pub fn max_index() -> Index {
    REGISTRY_LEN
}

/// Token of an index
pub fn token(index: Index) -> Option<&'static str> {
    descriptor(index).map(|d| d.token)
}

/// Whether an index lies in the group region
pub fn is_group(index: Index) -> bool {
    (START_GROUPS..REGISTRY_LEN).contains(&index)
}

/// Registry indices of single-valued descriptors below `group` that belong to it
pub fn group_members(group: Index) -> impl Iterator<Item = Index> {
    let tag = descriptor(group)
        .filter(|d| d.getter == Getter::Group)
        .map(|d| d.group)
        .unwrap_or(GroupTag::None);
    (0..group.min(START_GROUPS)).filter(move |&i| tag != GroupTag::None && REGISTRY[i].group == tag)
}

/// Registry index of a token, resolved at compile time.
///
/// Fails the build if the token is missing.
pub const fn index_of(token: &str) -> Index {
    let mut i = 0;
    while i < table::TABLE_LEN {
        if bytes_eq(table::TABLE[i].token.as_bytes(), token.as_bytes()) {
            return i;
        }
        i += 1;
    }
    panic!("token not in registry");
}

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn tag_matches_token(tag: GroupTag, token: &[u8]) -> bool {
    match tag {
        GroupTag::Axis(a) => token[0] == AXIS_LETTERS[a as usize] as u8,
        GroupTag::Motor(m) => token[0] == b'1' + m,
        GroupTag::Offset(c) => {
            token.len() > 3 && token[0] == b'g' && token[1] == b'5' && token[2] == b'4' + c
        }
        GroupTag::None => {
            let c = token[0];
            let axis = c == b'x' || c == b'y' || c == b'z' || c == b'a' || c == b'b' || c == b'c';
            let motor = c >= b'1' && c <= b'4';
            let offset = token.len() > 3 && c == b'g' && token[1] == b'5';
            !(axis || motor || offset)
        }
    }
}

const fn layout_is_valid() -> bool {
    let mut i = 0;
    while i < table::TABLE_LEN {
        let d = &table::TABLE[i];
        let group = matches!(d.kind, ValueKind::Group);
        // singles strictly before groups
        if group != (i >= START_GROUPS) {
            return false;
        }
        // status slots are the run right before the groups
        let slot = matches!(d.target, Target::StatusSlot(_));
        if slot != (i >= START_STATUS_SLOTS && i < START_GROUPS) {
            return false;
        }
        // a single's tag agrees with its token prefix
        if !group && !tag_matches_token(d.group, d.token.as_bytes()) {
            return false;
        }
        i += 1;
    }
    true
}

const fn largest_group() -> usize {
    let mut largest = 0;
    let mut g = START_GROUPS;
    while g < table::TABLE_LEN {
        let tag = table::TABLE[g].group;
        let mut count = 0;
        let mut i = 0;
        while i < START_GROUPS {
            if !matches!(tag, GroupTag::None) && tag_eq(table::TABLE[i].group, tag) {
                count += 1;
            }
            i += 1;
        }
        if count > largest {
            largest = count;
        }
        g += 1;
    }
    largest
}

const fn tag_eq(a: GroupTag, b: GroupTag) -> bool {
    match (a, b) {
        (GroupTag::Axis(x), GroupTag::Axis(y)) => x == y,
        (GroupTag::Motor(x), GroupTag::Motor(y)) => x == y,
        (GroupTag::Offset(x), GroupTag::Offset(y)) => x == y,
        (GroupTag::None, GroupTag::None) => true,
        _ => false,
    }
}

const _: () = assert!(layout_is_valid(), "registry layout violates ordering rules");
const _: () = assert!(largest_group() < CMD_MAX_OBJECTS, "group exceeds command pool");
const _: () = assert!(STATUS_REPORT_LEN < CMD_MAX_OBJECTS, "status report exceeds command pool");
const _: () = assert!(CONFIG_VERSION_INDEX == index_of("fc"), "fc must be first");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_unique() {
        for (i, a) in REGISTRY.iter().enumerate() {
            for b in &REGISTRY[i + 1..] {
                assert_ne!(a.token, b.token);
            }
        }
    }

    #[test]
    fn test_names_unique_and_bounded() {
        for (i, a) in REGISTRY.iter().enumerate() {
            assert!(a.name.len() <= crate::cmd::NAME_LEN, "{}", a.name);
            assert!(!a.name.contains([' ', '=', ':', '|', '\t']));
            for b in &REGISTRY[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_tokens_fit_and_lowercase() {
        for d in REGISTRY.iter() {
            assert!(!d.token.is_empty() && d.token.len() <= crate::cmd::TOKEN_LEN);
            assert!(!d.token.bytes().any(|b| b.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_layout_constants() {
        assert_eq!(REGISTRY[START_STATUS_SLOTS].token, "sr00");
        assert_eq!(REGISTRY[START_GROUPS - 1].token, "sr19");
        assert_eq!(REGISTRY[START_GROUPS].token, "g54");
        assert_eq!(REGISTRY[REGISTRY_LEN - 1].token, "4");
        assert_eq!(token(STATUS_REPORT_INDEX), Some("sr"));
        assert_eq!(token(GCODE_INDEX), Some("gc"));
        assert_eq!(token(REGISTRY_LEN), None);
    }

    #[test]
    fn test_group_members_match_token_prefix() {
        for g in START_GROUPS..REGISTRY_LEN {
            let group = &REGISTRY[g];
            if group.getter != Getter::Group {
                continue;
            }
            let by_tag: heapless::Vec<Index, 32> = group_members(g).collect();
            let by_prefix: heapless::Vec<Index, 32> = (0..START_GROUPS)
                .filter(|&i| REGISTRY[i].token.starts_with(group.token))
                .collect();
            assert_eq!(by_tag, by_prefix, "group {}", group.token);
            assert!(!by_tag.is_empty());
        }
    }

    #[test]
    fn test_action_entries_not_persisted() {
        assert!(!REGISTRY[STATUS_REPORT_INDEX].is_persisted());
        assert!(!REGISTRY[GCODE_INDEX].is_persisted());
        assert!(REGISTRY[index_of("xfr")].is_persisted());
        assert!(!REGISTRY[START_GROUPS].is_persisted());
    }

    #[test]
    fn test_rotary_axes_not_unit_converted() {
        assert_eq!(REGISTRY[index_of("xfr")].kind, ValueKind::FloatUnits);
        assert_eq!(REGISTRY[index_of("afr")].kind, ValueKind::Float);
        assert_eq!(REGISTRY[index_of("afr")].printer, Printer::Rotary);
    }
}
