//! The tri-state line classifier.
//!
//! Consumes a grid source one line at a time and produces typed
//! [`Directive`]s. Outside a block every line must be a directive; inside an
//! `IN`/`ON` block every line is code for the room or exit, and a line that
//! looks like a directive is kept as code and warned about.

use std::sync::Arc;

use regex::Captures;

use quickbuild_foundation::{Identifier, Location, ObjectRef, escape_code};

use crate::directive::{Directive, Payload};
use crate::rules::{HOP, RULES, RefForm, Rule, Slot, Target};
use crate::state::ParserState;

/// Line classifier for one source file.
#[derive(Debug)]
pub struct LineClassifier {
    /// File name stamped on every directive.
    file: Arc<str>,
    /// Current state.
    state: ParserState,
    /// Line number of the last `>` line in the current block.
    last_literal: Option<u32>,
}

impl LineClassifier {
    /// Creates a classifier for the named file, in the default state.
    #[must_use]
    pub fn new(file: impl Into<Arc<str>>) -> Self {
        Self {
            file: file.into(),
            state: ParserState::Default,
            last_literal: None,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &ParserState {
        &self.state
    }

    /// Classifies every line of `text` as the contents of `file`.
    #[must_use]
    pub fn classify_source(file: impl Into<Arc<str>>, text: &str) -> Vec<Directive> {
        let mut classifier = Self::new(file);
        let mut directives = Vec::new();
        for (index, line) in (1u32..).zip(text.lines()) {
            directives.extend(classifier.classify(index, line));
        }
        directives
    }

    /// Classifies one line.
    ///
    /// Returns nothing once the classifier has entered the error state.
    pub fn classify(&mut self, line_number: u32, line: &str) -> Vec<Directive> {
        if self.state == ParserState::Error {
            return Vec::new();
        }

        let raw = line.trim_end();
        let trimmed = raw.trim_start();
        let location = Location::new(Arc::clone(&self.file), line_number);

        for (rule, pattern) in RULES.iter() {
            let Some(caps) = pattern.captures(trimmed) else {
                continue;
            };
            if let Some(payloads) = self.dispatch(*rule, &caps, trimmed, raw, line_number) {
                tracing::trace!(%location, ?rule, state = %self.state, "classified line");
                return payloads
                    .into_iter()
                    .map(|payload| Directive::new(location.clone(), payload))
                    .collect();
            }
        }

        // Unreachable in practice: `Rule::Anything` handles every non-blank
        // line in every live state and `Rule::Blank` the rest.
        Vec::new()
    }

    /// Runs the handler `rule` defines for the current state.
    ///
    /// Returns `None` when the rule has no handler for this state, so the
    /// caller falls through to later patterns.
    fn dispatch(
        &mut self,
        rule: Rule,
        caps: &Captures<'_>,
        trimmed: &str,
        raw: &str,
        line_number: u32,
    ) -> Option<Vec<Payload>> {
        if self.state.in_block() && rule.is_base_directive() {
            let warning = Payload::Warning(format!(
                "Directive matched inside {} state: '{trimmed}'",
                self.state
            ));
            return Some(vec![warning, self.buffer(buffer_prefix(raw))]);
        }

        let payloads = match (rule, &self.state) {
            (Rule::Blank, _) => vec![Payload::Nop],

            (Rule::Ignored, ParserState::Default) | (Rule::Literal, ParserState::Default) => {
                return None;
            }
            (Rule::Ignored, _) => vec![Payload::Nop],
            (Rule::Literal, _) => {
                let mut text = String::new();
                if self.last_literal == Some(line_number.saturating_sub(1)) {
                    text.push_str("%r");
                }
                text.push_str(&escape_code(&trimmed[1..]));
                self.last_literal = Some(line_number);
                vec![self.buffer(text)]
            }

            (Rule::Comment, ParserState::Default) => vec![Payload::Nop],
            (Rule::Comment | Rule::Anything, _) if self.state.in_block() => {
                vec![self.buffer(buffer_prefix(raw))]
            }

            (Rule::AttrBase, _) => vec![Payload::AttrBase(caps[1].to_string())],
            (Rule::Alias, _) => vec![Payload::Alias {
                exit: Identifier::new(&caps[1]),
                aliases: caps[2].to_string(),
            }],
            (Rule::Reverse, _) => vec![Payload::Reverse {
                exit: Identifier::new(&caps[1]),
                reverse: Identifier::new(&caps[2]),
            }],
            (Rule::Reference(target, slot, form), _) => {
                let reference = match form {
                    RefForm::Reset => None,
                    RefForm::Raw => Some(ObjectRef::raw(&caps[1])),
                    RefForm::Id => Some(ObjectRef::by_id(&Identifier::new(&caps[1]))),
                };
                vec![match (target, slot) {
                    (Target::Room, Slot::Parent) => Payload::RoomParent(reference),
                    (Target::Room, Slot::Zone) => Payload::RoomZone(reference),
                    (Target::Exit, Slot::Parent) => Payload::ExitParent(reference),
                    (Target::Exit, Slot::Zone) => Payload::ExitZone(reference),
                }]
            }
            (Rule::Flags(target, has_value), _) => {
                let flags = has_value.then(|| caps[1].to_string());
                vec![match target {
                    Target::Room => Payload::RoomFlags(flags),
                    Target::Exit => Payload::ExitFlags(flags),
                }]
            }
            (Rule::GridLink, _) => grid_link(caps),
            (Rule::In, _) => {
                self.enter(ParserState::InRoom(Identifier::new(&caps[1])));
                vec![Payload::Nop]
            }
            (Rule::On, _) => {
                self.enter(ParserState::OnExit {
                    room: Identifier::new(&caps[2]),
                    exit: Identifier::new(&caps[1]),
                });
                vec![Payload::Nop]
            }
            (Rule::Describe, _) => vec![Payload::BufferRoom {
                room: Identifier::new(&caps[1]),
                text: format!("\n@describe here={}", &caps[2]),
            }],

            (Rule::EndIn, ParserState::InRoom(_)) | (Rule::EndOn, ParserState::OnExit { .. }) => {
                self.enter(ParserState::Default);
                vec![Payload::Nop]
            }
            (Rule::EndIn, ParserState::OnExit { .. }) => {
                self.enter(ParserState::Default);
                vec![Payload::Warning("ENDIN inside of ON-block.".to_string())]
            }
            (Rule::EndOn, ParserState::InRoom(_)) => {
                self.enter(ParserState::Default);
                vec![Payload::Warning("ENDON inside of IN-block.".to_string())]
            }
            (Rule::EndIn, _) => {
                self.enter(ParserState::Error);
                vec![Payload::Error("ENDIN outside of IN-block.".to_string())]
            }
            (Rule::EndOn, _) => {
                self.enter(ParserState::Error);
                vec![Payload::Error("ENDON outside of ON-block.".to_string())]
            }

            (Rule::Comment | Rule::Anything, _) => {
                self.enter(ParserState::Error);
                vec![Payload::Error(format!("Unrecognized command: {trimmed}"))]
            }
        };
        Some(payloads)
    }

    /// Switches state, forgetting any literal-continuation run.
    fn enter(&mut self, state: ParserState) {
        tracing::debug!(from = %self.state, to = %state, "classifier state change");
        self.state = state;
        self.last_literal = None;
    }

    /// Builds a buffer directive for the block currently open.
    fn buffer(&self, text: String) -> Payload {
        match &self.state {
            ParserState::OnExit { room, exit } => Payload::BufferExit {
                room: room.clone(),
                exit: exit.clone(),
                text,
            },
            ParserState::InRoom(room) => Payload::BufferRoom {
                room: room.clone(),
                text,
            },
            ParserState::Default | ParserState::Error => Payload::Nop,
        }
    }
}

/// Expands a grid-link line into room and exit creation.
///
/// `"x" : "A" -> "B" <-> "C"` creates A, then for each hop the next room, the
/// exit, and for `<->` the reverse exit.
fn grid_link(caps: &Captures<'_>) -> Vec<Payload> {
    let exit = Identifier::new(&caps[1]);
    let (Some(rooms), Some(first)) = (caps.get(2), caps.get(3)) else {
        return Vec::new();
    };
    let mut previous = Identifier::new(first.as_str());
    let mut payloads = vec![Payload::CreateRoom(previous.clone())];

    let hops = &rooms.as_str()[first.end() - rooms.start()..];
    for hop in HOP.captures_iter(hops) {
        let next = Identifier::new(&hop[2]);
        payloads.push(Payload::CreateRoom(next.clone()));
        payloads.push(Payload::CreateExit {
            exit: exit.clone(),
            from: previous.clone(),
            to: next.clone(),
        });
        if &hop[1] == "<->" {
            payloads.push(Payload::CreateReverseExit {
                exit: exit.clone(),
                from: previous.clone(),
                to: next.clone(),
            });
        }
        previous = next;
    }
    payloads
}

/// Prepares a block line for buffering.
///
/// A line starting at column one begins a new command and gets a newline
/// prefix; an indented line continues the previous one. Leading whitespace is
/// dropped and tabs become spaces.
#[must_use]
pub fn buffer_prefix(line: &str) -> String {
    let continues = line.starts_with(char::is_whitespace);
    let body = line.trim_start().replace('\t', " ");
    if continues { body } else { format!("\n{body}") }
}
