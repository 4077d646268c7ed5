//! Where display text ends up.
//!
//! A [`Surface`] shows one text at a time: every [`Surface::replace`]
//! discards what was shown before. The playground never reads back from a
//! surface, so rendering is entirely up to the implementation.

pub mod buffer;
pub mod terminal;

use anyhow::Result;

/// A display that holds exactly one text.
pub trait Surface: Send {
    fn replace(&mut self, text: &str) -> Result<()>;
}
