//! The room/exit graph.
//!
//! Rooms are kept in creation order and own their exits; the grid also keeps
//! the global order in which exits were opened. Parent and zone targets that
//! were named before being built live in the pending tables until they are
//! either built for real or promoted to proxy things at generation time.

use indexmap::IndexMap;
use indexmap::map::Entry;

use quickbuild_foundation::{Identifier, ObjectRef};

/// What kind of object a room node becomes in the database.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoomKind {
    /// A real room.
    #[default]
    Room,
    /// A stand-in object created only because something used it as a parent or zone.
    ProxyThing,
}

/// A directed exit between two rooms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exit {
    /// Exit id as written in source.
    pub id: Identifier,
    /// Full `name;alias;...` string to open the exit with.
    pub full_name: String,
    /// Room the exit leaves from.
    pub from_room: Identifier,
    /// Room the exit leads to.
    pub to_room: Identifier,
    /// Parent reference, if any.
    pub parent: Option<ObjectRef>,
    /// Zone reference, if any.
    pub zone: Option<ObjectRef>,
    /// Flags to set, if any.
    pub flags: Option<String>,
    buffer: String,
}

impl Exit {
    /// Creates an exit with no parent, zone, flags, or code.
    #[must_use]
    pub fn new(id: Identifier, full_name: String, from_room: Identifier, to_room: Identifier) -> Self {
        Self {
            id,
            full_name,
            from_room,
            to_room,
            parent: None,
            zone: None,
            flags: None,
            buffer: String::new(),
        }
    }

    /// Key this exit is stored under in its room.
    #[must_use]
    pub fn key(&self) -> String {
        self.id.attr_id()
    }

    /// Appends inline code.
    pub fn append_buffer(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Returns the inline code with leading whitespace removed.
    #[must_use]
    pub fn buffer(&self) -> &str {
        self.buffer.trim_start()
    }
}

/// A room (or proxy thing) node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    /// Room id as written in source.
    pub id: Identifier,
    /// Real room or proxy thing.
    pub kind: RoomKind,
    /// Attribute path prefix the room's reference is stored under.
    pub attr_base: String,
    /// Parent reference, if any.
    pub parent: Option<ObjectRef>,
    /// Zone reference, if any.
    pub zone: Option<ObjectRef>,
    /// Flags to set, if any.
    pub flags: Option<String>,
    buffer: String,
    exits: IndexMap<String, Exit>,
}

impl Room {
    /// Creates an empty room.
    #[must_use]
    pub fn new(id: Identifier, attr_base: impl Into<String>) -> Self {
        Self {
            id,
            kind: RoomKind::Room,
            attr_base: attr_base.into(),
            parent: None,
            zone: None,
            flags: None,
            buffer: String::new(),
            exits: IndexMap::new(),
        }
    }

    /// Returns the name the room is created with.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.id.display_name()
    }

    /// Returns the full attribute path holding this room's reference.
    #[must_use]
    pub fn attr_name(&self) -> String {
        format!("{}{}", self.attr_base, self.id.attr_id())
    }

    /// Appends inline code.
    pub fn append_buffer(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Returns the inline code with leading whitespace removed.
    #[must_use]
    pub fn buffer(&self) -> &str {
        self.buffer.trim_start()
    }

    /// Looks up an exit by its source id.
    #[must_use]
    pub fn exit(&self, id: &Identifier) -> Option<&Exit> {
        self.exits.get(&id.attr_id())
    }

    /// Looks up an exit by its source id, mutably.
    pub fn exit_mut(&mut self, id: &Identifier) -> Option<&mut Exit> {
        self.exits.get_mut(&id.attr_id())
    }

    /// Iterates exits in the order they were opened.
    pub fn exits(&self) -> impl Iterator<Item = &Exit> {
        self.exits.values()
    }

    /// Returns the number of outgoing exits.
    #[must_use]
    pub fn exit_count(&self) -> usize {
        self.exits.len()
    }
}

/// A parent or zone target that may not be built yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingRef {
    /// Not built yet; code aimed at it is held here.
    Placeholder(Placeholder),
    /// Built as this room of the grid.
    Resolved(Identifier),
}

/// Provisional record for a parent or zone referenced before it exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placeholder {
    /// Referenced id.
    pub id: Identifier,
    /// Attribute base in force when it was first referenced.
    pub attr_base: String,
    /// Code buffered for it so far.
    pub buffer: String,
}

impl Placeholder {
    /// Creates an empty placeholder.
    #[must_use]
    pub fn new(id: Identifier, attr_base: impl Into<String>) -> Self {
        Self {
            id,
            attr_base: attr_base.into(),
            buffer: String::new(),
        }
    }

    /// Returns the name the object would be created with.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.id.display_name()
    }
}

/// Which pending table a reference belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingKind {
    /// `ROOM PARENT` / `EXIT PARENT` targets.
    Parent,
    /// `ROOM ZONE` / `EXIT ZONE` targets.
    Zone,
}

/// Position of an exit in the global creation order.
#[derive(Clone, Debug, PartialEq, Eq)]
struct EdgeRef {
    from: Identifier,
    key: String,
}

/// Ids promoted to proxy things, by the table they came from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Promotion {
    /// Ids that were pending as parents (and possibly zones too).
    pub parents: Vec<Identifier>,
    /// Ids that were pending only as zones.
    pub zones: Vec<Identifier>,
}

impl Promotion {
    /// Returns true if nothing was promoted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty() && self.zones.is_empty()
    }
}

/// The full grid.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    rooms: IndexMap<Identifier, Room>,
    edges: Vec<EdgeRef>,
    pending_parents: IndexMap<Identifier, PendingRef>,
    pending_zones: IndexMap<Identifier, PendingRef>,
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a room.
    #[must_use]
    pub fn room(&self, id: &Identifier) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Looks up a room mutably.
    pub fn room_mut(&mut self, id: &Identifier) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    /// Returns true if a room with this id exists.
    #[must_use]
    pub fn contains_room(&self, id: &Identifier) -> bool {
        self.rooms.contains_key(id)
    }

    /// Iterates rooms in creation order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Returns the number of rooms (proxy things included).
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Adds a room. An existing room with the same id is left untouched.
    ///
    /// Returns true if the room was inserted.
    pub fn insert_room(&mut self, room: Room) -> bool {
        match self.rooms.entry(room.id.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(room);
                true
            }
        }
    }

    /// Attaches an exit to its source room and records it in the edge list.
    ///
    /// Returns false (and drops the exit) if the source room is unknown or
    /// already has an exit with this id.
    pub fn add_exit(&mut self, exit: Exit) -> bool {
        let Some(room) = self.rooms.get_mut(&exit.from_room) else {
            return false;
        };
        let key = exit.key();
        if room.exits.contains_key(&key) {
            return false;
        }
        self.edges.push(EdgeRef {
            from: exit.from_room.clone(),
            key: key.clone(),
        });
        room.exits.insert(key, exit);
        true
    }

    /// Iterates every exit in the order it was opened.
    pub fn edges(&self) -> impl Iterator<Item = &Exit> {
        self.edges.iter().filter_map(|edge| {
            self.rooms
                .get(&edge.from)
                .and_then(|room| room.exits.get(&edge.key))
        })
    }

    /// Returns the number of exits.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns one of the pending tables.
    #[must_use]
    pub fn pending(&self, kind: PendingKind) -> &IndexMap<Identifier, PendingRef> {
        match kind {
            PendingKind::Parent => &self.pending_parents,
            PendingKind::Zone => &self.pending_zones,
        }
    }

    /// Returns one of the pending tables mutably.
    pub fn pending_mut(&mut self, kind: PendingKind) -> &mut IndexMap<Identifier, PendingRef> {
        match kind {
            PendingKind::Parent => &mut self.pending_parents,
            PendingKind::Zone => &mut self.pending_zones,
        }
    }

    /// Looks up an unresolved placeholder, parents first.
    pub fn placeholder_mut(&mut self, id: &Identifier) -> Option<&mut Placeholder> {
        if let Some(PendingRef::Placeholder(placeholder)) = self.pending_parents.get_mut(id) {
            return Some(placeholder);
        }
        match self.pending_zones.get_mut(id) {
            Some(PendingRef::Placeholder(placeholder)) => Some(placeholder),
            _ => None,
        }
    }

    /// Marks `id` as built in both pending tables and returns the code that
    /// was buffered for it, zone buffer first.
    pub fn resolve_pending(&mut self, id: &Identifier) -> String {
        let mut buffer = String::new();
        for kind in [PendingKind::Zone, PendingKind::Parent] {
            if let Some(entry) = self.pending_mut(kind).get_mut(id) {
                if let PendingRef::Placeholder(placeholder) = entry {
                    buffer.push_str(&placeholder.buffer);
                }
                *entry = PendingRef::Resolved(id.clone());
            }
        }
        buffer
    }

    /// Turns every leftover placeholder into a proxy-thing room.
    ///
    /// An id pending in both tables becomes one object carrying both buffers.
    pub fn promote_placeholders(&mut self) -> Promotion {
        let mut promotion = Promotion::default();
        for kind in [PendingKind::Parent, PendingKind::Zone] {
            let leftover: Vec<Placeholder> = self
                .pending(kind)
                .values()
                .filter_map(|entry| match entry {
                    PendingRef::Placeholder(placeholder) => Some(placeholder.clone()),
                    PendingRef::Resolved(_) => None,
                })
                .collect();

            for placeholder in leftover {
                let id = placeholder.id.clone();
                let buffer = self.resolve_pending(&id);
                let mut room = Room::new(id.clone(), placeholder.attr_base);
                room.kind = RoomKind::ProxyThing;
                room.append_buffer(&buffer);
                if self.insert_room(room) {
                    match kind {
                        PendingKind::Parent => promotion.parents.push(id),
                        PendingKind::Zone => promotion.zones.push(id),
                    }
                }
            }
        }
        promotion
    }
}
