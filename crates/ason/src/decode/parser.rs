//! Native-object parser: the same semantic token stream the JSON emitter
//! consumes, built directly into an interchange [`Value`] with a stack of
//! in-progress containers. Both consumers must agree, including on the
//! root-collapsing rule.

use crate::decode::tokenizer::Token;
use crate::escape;
use crate::value::Value;

enum Node {
    List(Vec<Value>),
    Map(Vec<(String, Value)>),
}

impl Node {
    fn into_value(self) -> Value {
        match self {
            Node::List(items) => Value::List(items),
            Node::Map(entries) => Value::Map(entries),
        }
    }
}

/// An in-progress container plus the key it will occupy in its parent map,
/// if it was introduced by a keyed token.
struct Frame {
    node: Node,
    key: Option<String>,
}

pub fn build(tokens: &[Token]) -> Value {
    let mut stack = vec![Frame {
        node: Node::List(Vec::new()),
        key: None,
    }];
    let mut pending_key: Option<String> = None;
    let mut root_map_or_value = 0usize;
    let mut root_sequences = 0usize;

    for token in tokens {
        let at_root = stack.len() == 1;
        match token {
            Token::Key(key) => pending_key = Some(key.clone()),
            Token::Value(raw) => {
                if at_root {
                    root_map_or_value += 1;
                }
                insert(&mut stack, &mut pending_key, escape::decode_value(raw));
            }
            Token::MapKey(key) => stack.push(Frame {
                node: Node::Map(Vec::new()),
                key: Some(key.clone()),
            }),
            Token::SequenceKey(key) => stack.push(Frame {
                node: Node::List(Vec::new()),
                key: Some(key.clone()),
            }),
            Token::AnonymousMapStart => {
                if at_root {
                    root_map_or_value += 1;
                }
                stack.push(Frame {
                    node: Node::Map(Vec::new()),
                    key: None,
                });
            }
            Token::SequenceStart => {
                if at_root {
                    root_sequences += 1;
                }
                stack.push(Frame {
                    node: Node::List(Vec::new()),
                    key: None,
                });
            }
            Token::MapKeyEmptyMap(key) => {
                let mut key = Some(key.clone());
                insert(&mut stack, &mut key, Value::Map(Vec::new()));
            }
            Token::MapKeyEmptySequence(key) => {
                let mut key = Some(key.clone());
                insert(&mut stack, &mut key, Value::List(Vec::new()));
            }
            Token::SequenceElementEmptyMap => {
                if at_root {
                    root_map_or_value += 1;
                }
                insert(&mut stack, &mut pending_key, Value::Map(Vec::new()));
            }
            Token::SequenceElementEmptySequence => {
                if at_root {
                    root_sequences += 1;
                }
                insert(&mut stack, &mut pending_key, Value::List(Vec::new()));
            }
            Token::LevelPop(count) => {
                for _ in 0..*count {
                    pop_frame(&mut stack);
                }
            }
        }
    }
    while stack.len() > 1 {
        pop_frame(&mut stack);
    }

    let root = match stack.pop() {
        Some(frame) => frame.node.into_value(),
        None => Value::List(Vec::new()),
    };
    match root {
        Value::List(mut items)
            if root_map_or_value == 1 && root_sequences == 0 && items.len() == 1 =>
        {
            items.remove(0)
        }
        other => other,
    }
}

/// Attach a finished value to the top-of-stack container.
fn insert(stack: &mut [Frame], pending_key: &mut Option<String>, value: Value) {
    if let Some(frame) = stack.last_mut() {
        match &mut frame.node {
            Node::List(items) => items.push(value),
            Node::Map(entries) => entries.push((pending_key.take().unwrap_or_default(), value)),
        }
    }
}

fn pop_frame(stack: &mut Vec<Frame>) {
    if stack.len() < 2 {
        return;
    }
    if let Some(frame) = stack.pop() {
        let mut key = frame.key;
        insert(stack, &mut key, frame.node.into_value());
    }
}
