//! Optional event callbacks
//!
//! Components take their handlers as [`OptionalCallback`]. Leaving a handler
//! unset is valid: running it does nothing and reports that nothing ran.

use leptos::callback::{Callable, Callback};

pub struct OptionalCallback<T: 'static = ()>(Option<Callback<T>>);

impl<T: 'static> OptionalCallback<T> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self(Some(Callback::new(f)))
    }

    /// A callback that does nothing.
    pub fn none() -> Self {
        Self(None)
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Run the callback if one was supplied. Returns whether it ran.
    pub fn run(&self, arg: T) -> bool {
        match &self.0 {
            Some(callback) => {
                callback.run(arg);
                true
            }
            None => false,
        }
    }
}

// Manual impls: `Callback` is `Copy` for every `T`, derives would demand `T: Copy`
impl<T: 'static> Clone for OptionalCallback<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for OptionalCallback<T> {}

impl<T: 'static> Default for OptionalCallback<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T: 'static> From<Callback<T>> for OptionalCallback<T> {
    fn from(callback: Callback<T>) -> Self {
        Self(Some(callback))
    }
}

impl<T: 'static> From<Option<Callback<T>>> for OptionalCallback<T> {
    fn from(callback: Option<Callback<T>>) -> Self {
        Self(callback)
    }
}
