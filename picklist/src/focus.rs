//! Post-render focus hand-off.
//!
//! Moving keyboard focus to a row has two phases. The collection updates its
//! state and queues a request naming the row's id; the host renders, and only
//! once the rendered row exists does it drain the request through a
//! [`FocusTarget`].

/// Binds item ids to rendered elements so input focus can follow the list.
pub trait FocusTarget {
    /// Give input focus to the element rendered for `id`.
    /// Returns false if no such element exists.
    fn focus_element(&mut self, id: &str) -> bool;
}

impl<F> FocusTarget for F
where
    F: FnMut(&str) -> bool,
{
    fn focus_element(&mut self, id: &str) -> bool {
        self(id)
    }
}

/// A pending focus request, waiting for the next render to commit.
#[derive(Debug, Clone, Default)]
pub struct FocusHandoff {
    pending: Option<String>,
}

impl FocusHandoff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue focus for `id`. A newer request replaces an undrained one,
    /// which is returned.
    pub fn request(&mut self, id: impl Into<String>) -> Option<String> {
        self.pending.replace(id.into())
    }

    /// The id waiting for focus, if any.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Drop the pending request without delivering it.
    pub fn cancel(&mut self) -> Option<String> {
        self.pending.take()
    }

    /// Deliver the pending request to `target`.
    /// Returns the id that was handed off.
    pub fn complete<F: FocusTarget + ?Sized>(&mut self, target: &mut F) -> Option<String> {
        let id = self.pending.take()?;
        if !target.focus_element(&id) {
            log::debug!("[focus] no rendered element for '{}'", id);
        }
        Some(id)
    }
}
