//! Build context threaded through the graph builder.

use indexmap::IndexMap;

use quickbuild_foundation::{Identifier, ObjectRef};

/// Attribute base used until an `ATTR BASE:` line says otherwise.
pub const DEFAULT_ATTR_BASE: &str = "ROOM.";

/// Parent, zone, and flags applied to every room or exit created while set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sticky {
    /// Parent reference.
    pub parent: Option<ObjectRef>,
    /// Zone reference.
    pub zone: Option<ObjectRef>,
    /// Flag list.
    pub flags: Option<String>,
}

/// Mutable state accumulated while folding the directive stream.
#[derive(Clone, Debug)]
pub struct BuildContext {
    /// Current attribute base.
    pub attr_base: String,
    /// Explicit exit names, keyed by exit id.
    pub exit_aliases: IndexMap<Identifier, String>,
    /// Reverse exit ids, keyed by forward exit id.
    pub reverse_exits: IndexMap<Identifier, Identifier>,
    /// Defaults for new rooms.
    pub room: Sticky,
    /// Defaults for new exits.
    pub exit: Sticky,
}

impl Default for BuildContext {
    fn default() -> Self {
        Self {
            attr_base: DEFAULT_ATTR_BASE.to_string(),
            exit_aliases: IndexMap::new(),
            reverse_exits: IndexMap::new(),
            room: Sticky::default(),
            exit: Sticky::default(),
        }
    }
}

impl BuildContext {
    /// Sets the attribute base; blank text restores the default.
    pub fn set_attr_base(&mut self, path: &str) {
        let path = path.trim();
        self.attr_base = if path.is_empty() {
            DEFAULT_ATTR_BASE.to_string()
        } else {
            path.to_string()
        };
    }
}
