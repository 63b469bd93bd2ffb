//! Code generator - turns a finished [`Grid`] into softcode commands.
//!
//! Output order:
//! 1. `@@` preamble: version header and the wrapped edge list
//! 2. Attribute trees for nested attribute bases
//! 3. Proxy things for parents and zones that were never built
//! 4. Every room dug, with its parent, zone, and flags
//! 5. Every room revisited to open its exits and run its code
//! 6. Warnings for rooms nobody can walk into
//!
//! Each object's reference is stored on the builder under
//! `attr_base + attr_id`, and later commands reach the object through
//! `[v(<that attribute>)]`.

use indexmap::IndexSet;

use quickbuild_foundation::{
    Diagnostic, Diagnostics, Error, ErrorKind, Identifier, ObjectRef, RefKind, Result,
    escape_code,
};
use quickbuild_grid::{Exit, Grid, Promotion, Room, RoomKind, short_form};

use crate::mode::EmitMode;
use crate::wrap::{WRAP_WIDTH, wrap_prefixed};

/// Version stamped into the output header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Separator between levels of a nested attribute base.
const ATTR_TREE_SEPARATOR: char = '`';

/// Generated commands and the structural warnings raised while generating them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Generated {
    /// Commands in upload order.
    pub commands: Vec<String>,
    /// Structural warnings.
    pub diagnostics: Diagnostics,
}

impl Generated {
    /// Renders the commands as newline-terminated text.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.commands
            .iter()
            .map(|command| format!("{command}\n"))
            .collect()
    }
}

/// Generates commands for `grid` in the given mode.
///
/// Leftover parent and zone placeholders are promoted to proxy things first,
/// which is why the grid is taken by value.
///
/// # Errors
/// Returns [`ErrorKind::UnresolvedReference`] if a parent or zone names an id
/// that is neither a room nor a promoted placeholder.
pub fn generate(mut grid: Grid, mode: EmitMode) -> Result<Generated> {
    let promotion = grid.promote_placeholders();
    let mut generator = CodeGenerator::new(&grid, mode);
    generator.run(&promotion)?;
    Ok(generator.finish())
}

// =============================================================================
// Generator
// =============================================================================

/// Single-pass command emitter over a finished grid.
pub struct CodeGenerator<'g> {
    grid: &'g Grid,
    mode: EmitMode,
    commands: Vec<String>,
    diagnostics: Diagnostics,
}

impl<'g> CodeGenerator<'g> {
    /// Creates a generator. Placeholders should already be promoted.
    #[must_use]
    pub fn new(grid: &'g Grid, mode: EmitMode) -> Self {
        Self {
            grid,
            mode,
            commands: Vec::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Emits every section in order.
    ///
    /// # Errors
    /// Returns an error if a parent or zone reference cannot be resolved.
    pub fn run(&mut self, promotion: &Promotion) -> Result<()> {
        let rooms = self.build_order();
        tracing::debug!(
            rooms = rooms.len(),
            exits = self.grid.edge_count(),
            mode = %self.mode,
            "generating"
        );

        self.preamble();
        self.attr_trees();
        self.proxies("parents", &promotion.parents);
        self.proxies("zones", &promotion.zones);

        self.push("think Digging Rooms");
        for room in &rooms {
            self.dig(room)?;
        }

        self.push("think Linking Rooms");
        for room in &rooms {
            self.link(room)?;
        }

        self.entrances(&rooms);
        Ok(())
    }

    /// Consumes the generator, returning its output.
    #[must_use]
    pub fn finish(self) -> Generated {
        Generated {
            commands: self.commands,
            diagnostics: self.diagnostics,
        }
    }

    /// Real rooms, unzoned before zoned, then unparented before parented.
    ///
    /// The sort is stable so creation order breaks ties.
    #[must_use]
    pub fn build_order(&self) -> Vec<&'g Room> {
        let grid: &'g Grid = self.grid;
        let mut rooms: Vec<&Room> = grid
            .rooms()
            .filter(|room| room.kind == RoomKind::Room)
            .collect();
        rooms.sort_by_key(|room| (room.zone.is_some(), room.parent.is_some()));
        rooms
    }

    fn push(&mut self, command: impl Into<String>) {
        self.commands.push(command.into());
    }

    fn warn(&mut self, message: String) {
        self.push(format!("think WARNING: {message}"));
        self.diagnostics.push(Diagnostic::structural(message));
    }

    // -------------------------------------------------------------------------
    // Preamble
    // -------------------------------------------------------------------------

    fn preamble(&mut self) {
        self.push(format!("@@ Generated by quickbuild v{VERSION}"));
        let edges = self
            .grid
            .edges()
            .map(|exit| format!("{}-->{}", exit.from_room.attr_id(), exit.to_room.attr_id()))
            .collect::<Vec<_>>()
            .join(" ");
        let lines = wrap_prefixed("@@ ", &edges, WRAP_WIDTH);
        self.commands.extend(lines);
    }

    fn attr_trees(&mut self) {
        let grid = self.grid;
        let mut bases: Vec<&str> = grid
            .rooms()
            .map(|room| room.attr_base.as_str())
            .collect();
        bases.sort_unstable();
        bases.dedup();

        let mut branches = IndexSet::new();
        for base in bases {
            let pieces: Vec<&str> = base
                .split(ATTR_TREE_SEPARATOR)
                .filter(|piece| !piece.is_empty())
                .collect();
            if pieces.len() > 1 {
                for depth in 1..=pieces.len() {
                    branches.insert(pieces[..depth].join("`"));
                }
            }
        }

        if !branches.is_empty() {
            self.push("think Constructing attribute trees");
            for branch in branches {
                self.push(format!("&{branch} me=Placeholder"));
            }
        }
    }

    // -------------------------------------------------------------------------
    // Proxy things
    // -------------------------------------------------------------------------

    fn proxies(&mut self, role: &str, ids: &[Identifier]) {
        if ids.is_empty() {
            return;
        }
        let form = if self.mode == EmitMode::NoSideEffects {
            "rooms"
        } else {
            "things"
        };
        self.push(format!("think Creating room & exit {role} as {form}"));

        let grid = self.grid;
        for proxy in ids.iter().filter_map(|id| grid.room(id)) {
            let attr = proxy.attr_name();
            let name = proxy.display_name();
            match self.mode {
                EmitMode::NoSideEffects => {
                    self.push(format!("@dig/teleport {name}"));
                    self.push(format!("@set me={attr}:%l"));
                }
                EmitMode::Unmanaged => {
                    self.push(format!(
                        "think set(me,{attr}:[create({},10)])",
                        escape_code(name)
                    ));
                }
                EmitMode::Managed => {
                    self.push(format!(
                        "think set(me,{attr}:[default(me/{attr},create({},10))])",
                        escape_code(name)
                    ));
                }
            }
            self.push(format!("@lock [v({attr})]= =me"));
            self.push(format!("@lock/zone [v({attr})]= =me"));
            self.push(format!("@link [v({attr})]=me"));
            self.proxy_code(proxy);
        }
    }

    /// Runs a proxy's code from inside it, then returns it to the builder.
    fn proxy_code(&mut self, proxy: &Room) {
        let code = proxy.buffer();
        if code.is_empty() {
            return;
        }
        let attr = proxy.attr_name();
        if self.mode == EmitMode::NoSideEffects {
            self.push(format!("@teleport [v({attr})]"));
            self.push(code);
            return;
        }
        self.push(format!("@teleport [v({attr})]=here"));
        self.push(format!("@teleport [v({attr})]"));
        self.push(code);
        self.push(format!("@teleport [loc(v({attr}))]"));
        self.push(format!("@teleport [v({attr})]=me"));
    }

    // -------------------------------------------------------------------------
    // Rooms
    // -------------------------------------------------------------------------

    fn dig(&mut self, room: &Room) -> Result<()> {
        let attr = room.attr_name();
        let name = room.display_name();
        match self.mode {
            EmitMode::Managed => {
                let escaped = escape_code(name);
                self.push(format!(
                    "think set(me,{attr}:[default(me/{attr},switch(functions(),* DIG *,\
                     dig({escaped}),create({escaped},,r)))])"
                ));
                self.push(format!("@teleport [v({attr})]"));
            }
            EmitMode::Unmanaged => {
                self.push(format!("@dig/teleport {name}"));
                self.push(format!("think set(me,{attr}:%l)"));
            }
            EmitMode::NoSideEffects => {
                self.push(format!("@dig/teleport {name}"));
                self.push(format!("@set me={attr}:%l"));
            }
        }
        self.wire("here", room.parent.as_ref(), room.zone.as_ref(), room.flags.as_deref())
    }

    fn link(&mut self, room: &Room) -> Result<()> {
        if room.exit_count() == 0 {
            self.warn(format!("Creating room with no exits: {}", room.display_name()));
        }
        if room.exit_count() > 0 || !room.buffer().is_empty() {
            self.push(format!("@teleport [v({})]", room.attr_name()));
        }
        for exit in room.exits() {
            self.open(exit)?;
        }
        if !room.buffer().is_empty() {
            self.push(room.buffer());
        }
        Ok(())
    }

    fn open(&mut self, exit: &Exit) -> Result<()> {
        let destination = self
            .grid
            .room(&exit.to_room)
            .ok_or_else(|| Error::room_missing(exit.to_room.as_str()))?
            .attr_name();
        let full = exit.full_name.as_str();
        let short = short_form(full);

        if self.mode.is_managed() {
            let full = escape_code(full);
            self.push(format!(
                "@teleport [setr(0,ifelse(t(setr(0,locate(me,{},eE))),r(0),\
                 switch(functions(),* OPEN *,open({full}),create({full},,e))))]\
                 [link(%q0,v({destination}))]=here",
                escape_code(short)
            ));
        } else {
            self.push(format!("@open {full}=[v({destination})]"));
        }

        self.wire(short, exit.parent.as_ref(), exit.zone.as_ref(), exit.flags.as_deref())?;
        if !exit.buffer().is_empty() {
            self.push(exit.buffer());
        }
        Ok(())
    }

    /// Emits parent, zone, and flags assignment for `subject`.
    fn wire(
        &mut self,
        subject: &str,
        parent: Option<&ObjectRef>,
        zone: Option<&ObjectRef>,
        flags: Option<&str>,
    ) -> Result<()> {
        if let Some(parent) = parent {
            let target = self.resolve(parent)?;
            if parent.kind == RefKind::ById && self.mode.is_managed() {
                self.push(format!("think parent({},{target})", escape_code(subject)));
            } else {
                self.push(format!("@parent {subject}={target}"));
            }
        }
        if let Some(zone) = zone {
            let target = self.resolve(zone)?;
            self.push(format!("@chzone {subject}={target}"));
        }
        if let Some(flags) = flags {
            self.push(format!("@set {subject}={flags}"));
        }
        Ok(())
    }

    /// Renders a reference as a dbref or a lookup of the stored attribute.
    fn resolve(&self, reference: &ObjectRef) -> Result<String> {
        match reference.kind {
            RefKind::Raw => Ok(reference.target.clone()),
            RefKind::ById => reference
                .identifier()
                .and_then(|id| self.grid.room(&id))
                .map(|room| format!("[v({})]", room.attr_name()))
                .ok_or_else(|| {
                    Error::new(ErrorKind::UnresolvedReference(reference.target.clone()))
                }),
        }
    }

    fn entrances(&mut self, rooms: &[&Room]) {
        let grid = self.grid;
        let reached: IndexSet<&str> = grid
            .edges()
            .map(|exit| exit.to_room.as_str())
            .collect();
        for room in rooms {
            if !reached.contains(room.id.as_str()) {
                self.warn(format!(
                    "Created room with no entrances: {}",
                    room.display_name()
                ));
            }
        }
    }
}
