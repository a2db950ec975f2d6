//! Directional search engine.
//!
//! A* over (position, heading) states. Augmenting the position with the
//! heading of the arriving move is what encodes the movement rule: from
//! any state the only legal continuations are straight ahead or a 90
//! degree clockwise turn, while the heading-less start state may move
//! in any cardinal direction.
//!
//! Closed states are never reopened. That is sound here because every
//! move costs exactly 1 and the Manhattan heuristic is admissible and
//! consistent, so the first expansion of a state already went through a
//! shortest path to it. It is a precondition on the cost model, not a
//! generally safe shortcut; revisit it before introducing weighted
//! moves.

mod frontier;
mod state;

pub use state::{manhattan_distance, successor_headings, Heading, State};

use std::collections::HashSet;

use frontier::Frontier;

use crate::grid::{Grid, Position};

/// Search node held in the arena. `parent` indexes the arena entry this
/// node was expanded from, forming the chain used for reconstruction.
#[derive(Debug, Clone, Copy)]
struct Node {
    state: State,
    parent: Option<usize>,
    g: usize,
}

/// Find a shortest route from `start` to `goal` under the
/// forward-or-turn-right movement rule.
///
/// Returns the full coordinate sequence from start to goal inclusive,
/// or `None` when no constrained path exists. A start equal to the goal
/// yields the single-element path. The grid is read-only; repeated
/// calls on identical input return identical sequences.
pub fn find_route(grid: &Grid, start: Position, goal: Position) -> Option<Vec<Position>> {
    let mut arena: Vec<Node> = Vec::new();
    let mut frontier = Frontier::new();
    let mut closed: HashSet<State> = HashSet::new();

    let start_state = State::new(start, None);
    arena.push(Node {
        state: start_state,
        parent: None,
        g: 0,
    });
    frontier.insert(start_state, 0, manhattan_distance(start, goal), 0);

    let mut expanded = 0usize;
    while let Some(index) = frontier.pop_min() {
        let Node { state, g, .. } = arena[index];

        // A stale heap entry for an already-expanded state; skip it.
        if !closed.insert(state) {
            continue;
        }

        if state.position == goal {
            tracing::debug!(moves = g, expanded, "route found");
            return Some(reconstruct(&arena, index));
        }
        expanded += 1;

        for &heading in successor_headings(state.heading) {
            let Some(next) = heading.apply(state.position) else {
                continue;
            };
            if !grid.is_free(next) {
                continue;
            }

            let next_state = State::new(next, Some(heading));
            if closed.contains(&next_state) {
                continue;
            }

            let next_g = g + 1;
            let f = next_g + manhattan_distance(next, goal);
            if frontier.insert(next_state, next_g, f, arena.len()) {
                arena.push(Node {
                    state: next_state,
                    parent: Some(index),
                    g: next_g,
                });
            }
        }
    }

    debug_assert!(frontier.is_empty());
    tracing::debug!(expanded, "frontier exhausted without reaching the goal");
    None
}

fn reconstruct(arena: &[Node], goal_index: usize) -> Vec<Position> {
    let mut path = Vec::new();
    let mut current = Some(goal_index);
    while let Some(index) = current {
        let node = &arena[index];
        path.push(node.state.position);
        current = node.parent;
    }
    path.reverse();
    path
}
