//! Sink for converting parser events into the owned parse tree.

use crate::parser::event::Event;
use crate::source::TokenSource;
use crate::syntax::{Interior, Leaf, Node, Production};

/// Builds a parse tree from parser events.
pub(crate) struct Sink<'s> {
    source: &'s TokenSource,
    events: Vec<Event>,
}

impl<'s> Sink<'s> {
    pub(crate) fn new(source: &'s TokenSource, events: Vec<Event>) -> Self {
        Self { source, events }
    }

    /// Folds the events into a tree. Returns `None` if the event stream is
    /// not a single well-nested node.
    pub(crate) fn finish(self) -> Option<Node> {
        let mut stack: Vec<(Production, Vec<Node>)> = Vec::new();
        let mut root = None;

        for event in self.events {
            match event {
                Event::Start { production } => stack.push((production, Vec::new())),
                Event::Token { id } => {
                    let lexeme = self.source.lexeme(id)?;
                    let (_, children) = stack.last_mut()?;
                    children.push(Node::Leaf(Leaf {
                        symbol: lexeme.symbol,
                        text: lexeme.text.clone(),
                        id: lexeme.id,
                        coordinate: lexeme.coordinate.clone(),
                    }));
                }
                Event::Finish => {
                    let (production, children) = stack.pop()?;
                    let node = Node::Interior(Interior::new(production, children));
                    match stack.last_mut() {
                        Some((_, siblings)) => siblings.push(node),
                        None => root = Some(node),
                    }
                }
                Event::Placeholder => {}
            }
        }

        if stack.is_empty() {
            root
        } else {
            None
        }
    }
}
