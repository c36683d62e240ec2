use crate::error::{validate_class_name, ClassError};
use crate::tokens::{self, TokenPattern};

/// An element whose class attribute can be edited.
///
/// `class_attr`/`set_class_attr` are the raw `className` string used by the
/// fallback path; the `list_*` methods are the host's native token list.
pub trait ClassElement {
    fn class_attr(&self) -> String;
    fn set_class_attr(&self, value: &str);
    fn list_add(&self, class_name: &str) -> Result<(), ClassError>;
    fn list_remove(&self, class_name: &str) -> Result<(), ClassError>;
    fn list_contains(&self, class_name: &str) -> bool;
}

/// Which code path every operation takes. Picked once, never re-detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Host exposes `classList`.
    Native,
    /// Edit `className` as a string.
    Fallback,
}

#[derive(Debug, Clone, Copy)]
pub struct ClassToggler {
    strategy: Strategy,
}

impl ClassToggler {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// Map the detected capability flag onto a strategy.
    pub fn from_capability(class_list_supported: bool) -> Self {
        if class_list_supported {
            Self::new(Strategy::Native)
        } else {
            Self::new(Strategy::Fallback)
        }
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Add `class_name` to every element.
    ///
    /// The fallback appends unconditionally, so adding an existing class
    /// there produces a duplicate token.
    pub fn add<'a, E, I>(&self, elements: I, class_name: &str) -> Result<(), ClassError>
    where
        E: ClassElement + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        validate_class_name(class_name)?;
        for element in elements {
            match self.strategy {
                Strategy::Native => element.list_add(class_name)?,
                Strategy::Fallback => {
                    element.set_class_attr(&tokens::append(&element.class_attr(), class_name))
                }
            }
        }
        Ok(())
    }

    /// Remove `class_name` from every element; absent classes are ignored.
    pub fn remove<'a, E, I>(&self, elements: I, class_name: &str) -> Result<(), ClassError>
    where
        E: ClassElement + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        validate_class_name(class_name)?;
        let mut count = 0usize;
        match self.strategy {
            Strategy::Native => {
                for element in elements {
                    element.list_remove(class_name)?;
                    count += 1;
                }
            }
            Strategy::Fallback => {
                let pattern = TokenPattern::new(class_name)?;
                for element in elements {
                    element.set_class_attr(&pattern.strip(&element.class_attr()));
                    count += 1;
                }
            }
        }
        log::debug!("[class] removed {:?} from {} element(s)", class_name, count);
        Ok(())
    }

    pub fn contains<E: ClassElement>(
        &self,
        element: &E,
        class_name: &str,
    ) -> Result<bool, ClassError> {
        validate_class_name(class_name)?;
        match self.strategy {
            Strategy::Native => Ok(element.list_contains(class_name)),
            Strategy::Fallback => Ok(TokenPattern::new(class_name)?.matches(&element.class_attr())),
        }
    }

    /// Remove `class_name` if present, otherwise add it.
    ///
    /// Returns `true` when the class was added.
    pub fn toggle<E: ClassElement>(
        &self,
        element: &E,
        class_name: &str,
    ) -> Result<bool, ClassError> {
        if self.contains(element, class_name)? {
            self.remove([element], class_name)?;
            Ok(false)
        } else {
            self.add([element], class_name)?;
            Ok(true)
        }
    }
}
