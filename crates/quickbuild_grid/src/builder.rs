//! Graph builder - folds a directive stream into a [`Grid`].
//!
//! Directives are applied strictly in order. Sticky defaults, aliases, and
//! reverse mappings only affect what is created after them, and a parent or
//! zone may be named before it is built: the builder parks such references in
//! a placeholder and hands over any code collected for it once the real room
//! appears.

use quickbuild_foundation::{
    Diagnostic, Diagnostics, Error, Identifier, Location, ObjectRef, Result,
};
use quickbuild_language::{Directive, Payload};

use crate::context::{BuildContext, Sticky};
use crate::grid::{Exit, Grid, PendingKind, PendingRef, Placeholder, Room};
use crate::naming::{NamingOptions, exit_name};

// =============================================================================
// Options
// =============================================================================

/// Switches that change how the graph is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    /// Exit naming switches.
    pub naming: NamingOptions,
    /// `REVERSE "a" "b"` also registers `b` as the reverse of `a`.
    pub bidirectional_reverse: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            naming: NamingOptions::default(),
            bidirectional_reverse: true,
        }
    }
}

impl BuildOptions {
    /// Builder method to set naming switches.
    #[must_use]
    pub fn with_naming(mut self, naming: NamingOptions) -> Self {
        self.naming = naming;
        self
    }

    /// Builder method to toggle two-way reverse registration.
    #[must_use]
    pub fn with_bidirectional_reverse(mut self, enabled: bool) -> Self {
        self.bidirectional_reverse = enabled;
        self
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Incremental graph builder.
#[derive(Debug, Default)]
pub struct GridBuilder {
    options: BuildOptions,
    context: BuildContext,
    grid: Grid,
    diagnostics: Diagnostics,
}

impl GridBuilder {
    /// Creates a builder with an empty grid.
    #[must_use]
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Returns the build context as it stands.
    #[must_use]
    pub fn context(&self) -> &BuildContext {
        &self.context
    }

    /// Returns the grid built so far.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the warnings raised so far.
    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Consumes the builder, returning the grid and its warnings.
    #[must_use]
    pub fn finish(self) -> (Grid, Diagnostics) {
        (self.grid, self.diagnostics)
    }

    /// Applies one directive.
    ///
    /// # Errors
    /// Returns an error, tagged with the directive's location, for an error
    /// directive, a reference to a missing room or exit, a duplicate exit, or
    /// a two-way link with no reverse mapping.
    pub fn apply(&mut self, directive: &Directive) -> Result<()> {
        tracing::trace!(location = %directive.location, payload = ?directive.payload, "apply");
        self.apply_payload(&directive.location, &directive.payload)
            .map_err(|e| e.with_location(directive.location.clone()))
    }

    fn apply_payload(&mut self, location: &Location, payload: &Payload) -> Result<()> {
        match payload {
            Payload::Nop => {}
            Payload::Error(message) => return Err(Error::directive(message.clone())),
            Payload::Warning(message) => self.warn(location, message.clone()),
            Payload::AttrBase(path) => self.context.set_attr_base(path),
            Payload::Alias { exit, aliases } => self.alias(location, exit, aliases),
            Payload::Reverse { exit, reverse } => self.reverse(location, exit, reverse),

            Payload::RoomParent(reference) => {
                self.track(reference.as_ref(), PendingKind::Parent);
                self.context.room.parent.clone_from(reference);
            }
            Payload::RoomZone(reference) => {
                self.track(reference.as_ref(), PendingKind::Zone);
                self.context.room.zone.clone_from(reference);
            }
            Payload::ExitParent(reference) => {
                self.track(reference.as_ref(), PendingKind::Parent);
                self.context.exit.parent.clone_from(reference);
            }
            Payload::ExitZone(reference) => {
                self.track(reference.as_ref(), PendingKind::Zone);
                self.context.exit.zone.clone_from(reference);
            }
            Payload::RoomFlags(flags) => self.context.room.flags.clone_from(flags),
            Payload::ExitFlags(flags) => self.context.exit.flags.clone_from(flags),

            Payload::CreateRoom(id) => self.create_room(id),
            Payload::CreateExit { exit, from, to } => self.create_exit(exit, from, to)?,
            Payload::CreateReverseExit { exit, from, to } => {
                let reverse = self
                    .context
                    .reverse_exits
                    .get(exit)
                    .cloned()
                    .ok_or_else(|| Error::missing_reverse(exit.as_str()))?;
                self.create_exit(&reverse, to, from)?;
            }

            Payload::BufferRoom { room, text } => self.buffer_room(room, text)?,
            Payload::BufferExit { room, exit, text } => {
                let source = self
                    .grid
                    .room_mut(room)
                    .ok_or_else(|| Error::room_missing(room.as_str()))?;
                source
                    .exit_mut(exit)
                    .ok_or_else(|| Error::exit_missing(exit.as_str(), room.as_str()))?
                    .append_buffer(text);
            }
        }
        Ok(())
    }

    fn warn(&mut self, location: &Location, message: String) {
        self.diagnostics
            .push(Diagnostic::at(location.clone(), message));
    }

    fn alias(&mut self, location: &Location, exit: &Identifier, aliases: &str) {
        if let Some(old) = self
            .context
            .exit_aliases
            .insert(exit.clone(), aliases.to_string())
        {
            self.warn(
                location,
                format!("Replacing alias definition {exit}->\"{old}\" with {exit}->\"{aliases}\"."),
            );
        }
    }

    fn reverse(&mut self, location: &Location, exit: &Identifier, reverse: &Identifier) {
        let mut pairs = vec![(exit, reverse)];
        if self.options.bidirectional_reverse {
            pairs.push((reverse, exit));
        }
        for (from, to) in pairs {
            if let Some(old) = self.context.reverse_exits.insert(from.clone(), to.clone()) {
                self.warn(
                    location,
                    format!("Replacing reverse definition {from}->{old} with {from}->{to}"),
                );
            }
        }
    }

    /// Records an id reference in a pending table, resolved if already built.
    fn track(&mut self, reference: Option<&ObjectRef>, kind: PendingKind) {
        let Some(id) = reference.and_then(ObjectRef::identifier) else {
            return;
        };
        let built = self.grid.contains_room(&id);
        let attr_base = self.context.attr_base.clone();
        let table = self.grid.pending_mut(kind);
        if built {
            table.insert(id.clone(), PendingRef::Resolved(id));
        } else {
            table
                .entry(id.clone())
                .or_insert_with(|| PendingRef::Placeholder(Placeholder::new(id, attr_base)));
        }
    }

    fn create_room(&mut self, id: &Identifier) {
        if self.grid.contains_room(id) {
            return;
        }
        let Sticky { parent, zone, flags } = &self.context.room;
        let not_self = |reference: &Option<ObjectRef>| {
            reference
                .clone()
                .filter(|r| r.identifier().as_ref() != Some(id))
        };

        let mut room = Room::new(id.clone(), self.context.attr_base.clone());
        room.parent = not_self(parent);
        room.zone = not_self(zone);
        room.flags.clone_from(flags);

        let buffered = self.grid.resolve_pending(id);
        room.append_buffer(&buffered);
        tracing::debug!(room = %id, "created room");
        self.grid.insert_room(room);
    }

    fn create_exit(&mut self, id: &Identifier, from: &Identifier, to: &Identifier) -> Result<()> {
        let source = self
            .grid
            .room(from)
            .ok_or_else(|| Error::room_missing(from.as_str()))?;
        if !self.grid.contains_room(to) {
            return Err(Error::room_missing(to.as_str()));
        }
        if source.exit(id).is_some() {
            return Err(Error::duplicate_exit(id.as_str(), from.as_str()));
        }

        let full_name = match self.context.exit_aliases.get(id) {
            Some(explicit) => explicit.clone(),
            None => exit_name(id.display_name(), self.options.naming),
        };
        let mut exit = Exit::new(id.clone(), full_name, from.clone(), to.clone());
        exit.parent.clone_from(&self.context.exit.parent);
        exit.zone.clone_from(&self.context.exit.zone);
        exit.flags.clone_from(&self.context.exit.flags);

        tracing::debug!(exit = %id, from = %from, to = %to, "opened exit");
        self.grid.add_exit(exit);
        Ok(())
    }

    fn buffer_room(&mut self, id: &Identifier, text: &str) -> Result<()> {
        if let Some(room) = self.grid.room_mut(id) {
            room.append_buffer(text);
        } else if let Some(placeholder) = self.grid.placeholder_mut(id) {
            placeholder.buffer.push_str(text);
        } else {
            return Err(Error::room_missing(id.as_str()));
        }
        Ok(())
    }
}

/// Builds a grid from a complete directive stream.
///
/// # Errors
/// Returns the first fatal error raised by any directive.
pub fn build<'a, I>(directives: I, options: BuildOptions) -> Result<(Grid, Diagnostics)>
where
    I: IntoIterator<Item = &'a Directive>,
{
    let mut builder = GridBuilder::new(options);
    for directive in directives {
        builder.apply(directive)?;
    }
    Ok(builder.finish())
}
