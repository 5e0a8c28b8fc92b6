//! Expression tree builder.
//!
//! Consumes tokens one at a time and incrementally builds a binary
//! expression tree per bracket scope, re-linking operators by precedence
//! climbing. Nodes live in a per-scope slotmap arena and reference their
//! parent and children by key, which keeps upward walks O(1) without
//! ownership cycles.
//!
//! Bracket scopes form an explicit stack: an opening bracket pushes a fresh
//! scope, a closing bracket pops it, reduces it (numerically or as typeset
//! text, by mode), and re-inserts the result into the enclosing scope as a
//! literal.

use slotmap::{SlotMap, new_key_type};

use crate::error::CalcError;
use crate::eval;
use crate::parser::tokens::{BinOp, Bracket, Token};
use crate::render;

new_key_type! {
    pub(crate) struct NodeKey;
}

/// Node payload: a decoded literal, a rendered sub-expression (render mode
/// only), or a binary operator
#[derive(Clone, Debug)]
pub(crate) enum Payload {
    Number(f64),
    Group(String),
    Op(BinOp),
}

impl Payload {
    /// Precedence rank for climbing. Operands rank 0, which marks them as
    /// targets for implicit multiplication.
    fn priority(&self) -> u8 {
        match self {
            Payload::Op(op) => op.priority(),
            Payload::Number(_) | Payload::Group(_) => 0,
        }
    }
}

pub(crate) struct Node {
    pub(crate) payload: Payload,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) left: Option<NodeKey>,
    pub(crate) right: Option<NodeKey>,
}

/// One bracket-nesting level owning its own partial tree
pub(crate) struct Scope {
    pub(crate) arena: SlotMap<NodeKey, Node>,
    pub(crate) root: Option<NodeKey>,
    curr: Option<NodeKey>,
}

impl Scope {
    fn new() -> Self {
        Scope {
            arena: SlotMap::with_key(),
            root: None,
            curr: None,
        }
    }
}

/// Result of reducing a finished scope
pub(crate) enum Reduced {
    Number(f64),
    Rendered(String),
}

/// Whether closed scopes fold to a numeric value or to typeset text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
    Evaluate,
    Render,
}

pub(crate) struct TreeBuilder {
    scopes: Vec<Scope>,
    mode: Mode,
    max_depth: usize,
}

impl TreeBuilder {
    pub(crate) fn new(mode: Mode, max_depth: usize) -> Self {
        TreeBuilder {
            scopes: vec![Scope::new()],
            mode,
            max_depth,
        }
    }

    /// Insert one token, updating the innermost open scope.
    pub(crate) fn insert(&mut self, token: Token) -> Result<(), CalcError> {
        match token {
            Token::Open(_) => self.open_scope(),
            Token::Close(bracket) => self.close_scope(bracket),
            Token::Op(op) => self.insert_op(op),
            Token::Number(value) => self.insert_leaf(Payload::Number(value)),
            Token::Unknown(c) => Err(CalcError::invalid_literal(c.to_string())),
        }
    }

    /// Reduce the root scope once all tokens are in.
    pub(crate) fn finish(mut self) -> Result<Reduced, CalcError> {
        if self.scopes.len() > 1 {
            return Err(CalcError::UnterminatedGroup);
        }
        match self.scopes.pop() {
            Some(scope) => self.reduce(&scope),
            None => Err(CalcError::EmptyExpression),
        }
    }

    fn reduce(&self, scope: &Scope) -> Result<Reduced, CalcError> {
        let root = scope.root.ok_or(CalcError::EmptyExpression)?;
        match self.mode {
            Mode::Evaluate => eval::reduce(scope, root, self.max_depth).map(Reduced::Number),
            Mode::Render => render::reduce(scope, root, self.max_depth).map(Reduced::Rendered),
        }
    }

    fn open_scope(&mut self) -> Result<(), CalcError> {
        // 2(3+4): an operand directly before a bracket multiplies the group
        if self.current_is_operand() {
            self.climb_insert(BinOp::Mul);
        }
        if self.scopes.len() >= self.max_depth {
            return Err(CalcError::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        self.scopes.push(Scope::new());
        Ok(())
    }

    fn close_scope(&mut self, bracket: Bracket) -> Result<(), CalcError> {
        if self.scopes.len() == 1 {
            return Err(CalcError::unexpected_token(bracket.closer()));
        }
        let scope = match self.scopes.pop() {
            Some(scope) => scope,
            None => return Err(CalcError::unexpected_token(bracket.closer())),
        };
        let payload = match self.reduce(&scope)? {
            Reduced::Number(value) => Payload::Number(value),
            Reduced::Rendered(text) => Payload::Group(format!("({})", text)),
        };
        self.insert_leaf(payload)
    }

    fn insert_op(&mut self, op: BinOp) -> Result<(), CalcError> {
        if self.current_is_operand() {
            self.climb_insert(op);
            return Ok(());
        }
        // operand position: only a unary minus is legal here
        if op == BinOp::Sub {
            self.insert_leaf(Payload::Number(-1.0))?;
            self.attach_tight_mul();
            return Ok(());
        }
        Err(CalcError::unexpected_token(op))
    }

    fn insert_leaf(&mut self, payload: Payload) -> Result<(), CalcError> {
        // (1)2: juxtaposed operands multiply, same as before a bracket
        if self.current_is_operand() {
            self.climb_insert(BinOp::Mul);
        }
        let top = self.top_mut();
        match top.curr {
            None => {
                let key = top.arena.insert(Node {
                    payload,
                    parent: None,
                    left: None,
                    right: None,
                });
                top.root = Some(key);
                top.curr = Some(key);
            }
            Some(curr) => {
                let key = top.arena.insert(Node {
                    payload,
                    parent: Some(curr),
                    left: None,
                    right: None,
                });
                if top.arena[curr].left.is_none() {
                    top.arena[curr].left = Some(key);
                } else {
                    top.arena[curr].right = Some(key);
                }
                top.curr = Some(key);
            }
        }
        Ok(())
    }

    /// Precedence-climbing re-link: walk up from the current node while the
    /// new operator does not bind tighter than the ancestor, then graft the
    /// new operator over the walked-to subtree.
    fn climb_insert(&mut self, op: BinOp) {
        let walk = {
            let top = self.top();
            let mut walk = top.curr.expect("climb requires a current node");
            while let Some(parent) = top.arena[walk].parent {
                if op.priority() >= top.arena[parent].payload.priority() {
                    walk = parent;
                } else {
                    break;
                }
            }
            walk
        };
        self.graft_over(walk, op);
    }

    /// Attach the unary-minus multiplication directly at the current node,
    /// skipping the climb, so it binds tighter than every operator:
    /// `2^-2` groups as `2^((-1)*2)` while `-2^2` stays `(-1)*(2^2)`.
    fn attach_tight_mul(&mut self) {
        let walk = self
            .top()
            .curr
            .expect("unary desugaring places a leaf first");
        self.graft_over(walk, BinOp::Mul);
    }

    /// Install `op` in the tree slot currently held by `walk`, taking
    /// `walk` as its left child.
    fn graft_over(&mut self, walk: NodeKey, op: BinOp) {
        let top = self.top_mut();
        let parent = top.arena[walk].parent;
        let key = top.arena.insert(Node {
            payload: Payload::Op(op),
            parent,
            left: Some(walk),
            right: None,
        });
        match parent {
            None => top.root = Some(key),
            Some(p) => {
                if top.arena[p].left == Some(walk) {
                    top.arena[p].left = Some(key);
                } else {
                    top.arena[p].right = Some(key);
                }
            }
        }
        top.arena[walk].parent = Some(key);
        top.curr = Some(key);
    }

    fn current_is_operand(&self) -> bool {
        let top = self.top();
        match top.curr {
            Some(curr) => top.arena[curr].payload.priority() == 0,
            None => false,
        }
    }

    fn top(&self) -> &Scope {
        self.scopes.last().expect("scope stack is never empty")
    }

    fn top_mut(&mut self) -> &mut Scope {
        self.scopes.last_mut().expect("scope stack is never empty")
    }
}
