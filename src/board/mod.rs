//! Board/state engine: immutable snapshots, groups, placement rules.

pub mod group;
pub mod rules;
pub mod state;

pub use group::Group;
pub use state::State;
